//! In-memory `Page` for tests. Records every submit, navigation and alert.

use std::cell::RefCell;
use std::collections::HashMap;

use crate::error::PageError;
use crate::page::{Page, Role, SelectOption};

#[derive(Debug, Default)]
pub struct MemoryState {
    pub fields: HashMap<Role, String>,
    pub selects: HashMap<Role, Vec<SelectOption>>,
    pub max_pages: Option<String>,
    pub table_html: Option<String>,
    pub href: String,
    /// Snapshot of the fields at each form submission.
    pub submissions: Vec<HashMap<Role, String>>,
    pub navigations: Vec<String>,
    pub alerts: Vec<String>,
}

#[derive(Debug, Default)]
pub struct MemoryPage {
    state: RefCell<MemoryState>,
}

impl MemoryPage {
    /// The players template: every element present, sorted by goals descending on page 1.
    pub fn players(max_pages: &str) -> Self {
        let page = Self::default();
        page.with_state(|s| {
            s.href = "https://ratings.test/players".into();
            s.max_pages = Some(max_pages.into());
            s.table_html = Some("<table></table>".into());
            for (role, value) in [
                (Role::SearchInput, ""),
                (Role::JumpInput, ""),
                (Role::SortField, "goals"),
                (Role::OrderField, "desc"),
                (Role::PageField, "1"),
                (Role::FilterForm, ""),
            ] {
                s.fields.insert(role, value.into());
            }
            s.selects.insert(Role::SeasonSelect, Vec::new());
            s.selects.insert(Role::DateSelect, Vec::new());
        });
        page
    }

    pub fn with_state<R>(&self, f: impl FnOnce(&mut MemoryState) -> R) -> R {
        f(&mut self.state.borrow_mut())
    }

    pub fn field(&self, role: Role) -> Option<String> {
        self.with_state(|s| s.fields.get(&role).cloned())
    }

    pub fn options(&self, role: Role) -> Vec<SelectOption> {
        self.with_state(|s| s.selects.get(&role).cloned().unwrap_or_default())
    }

    pub fn submissions(&self) -> Vec<HashMap<Role, String>> {
        self.with_state(|s| s.submissions.clone())
    }

    pub fn navigations(&self) -> Vec<String> {
        self.with_state(|s| s.navigations.clone())
    }

    pub fn alerts(&self) -> Vec<String> {
        self.with_state(|s| s.alerts.clone())
    }

    pub fn table_html(&self) -> Option<String> {
        self.with_state(|s| s.table_html.clone())
    }
}

/// A single-choice select reads as its last selected option, or its first option.
fn select_value(options: &[SelectOption]) -> String {
    options
        .iter()
        .rev()
        .find(|o| o.selected)
        .or_else(|| options.first())
        .map(|o| o.value.clone())
        .unwrap_or_default()
}

impl Page for MemoryPage {
    fn has(&self, role: Role) -> bool {
        self.with_state(|s| match role {
            Role::MaxPagesHolder => s.max_pages.is_some(),
            Role::TableContainer => s.table_html.is_some(),
            _ => s.fields.contains_key(&role) || s.selects.contains_key(&role),
        })
    }

    fn value(&self, role: Role) -> Result<String, PageError> {
        self.with_state(|s| {
            if let Some(options) = s.selects.get(&role) {
                return Ok(select_value(options));
            }
            s.fields
                .get(&role)
                .cloned()
                .ok_or(PageError::MissingElement(role))
        })
    }

    fn set_value(&self, role: Role, value: &str) -> Result<(), PageError> {
        self.with_state(|s| {
            if let Some(options) = s.selects.get_mut(&role) {
                for option in options.iter_mut() {
                    option.selected = option.value == value;
                }
                return Ok(());
            }
            match s.fields.get_mut(&role) {
                Some(field) => {
                    *field = value.to_string();
                    Ok(())
                }
                None => Err(PageError::MissingElement(role)),
            }
        })
    }

    fn submit_form(&self) -> Result<(), PageError> {
        self.with_state(|s| {
            if !s.fields.contains_key(&Role::FilterForm) {
                return Err(PageError::MissingElement(Role::FilterForm));
            }
            let snapshot = s.fields.clone();
            s.submissions.push(snapshot);
            Ok(())
        })
    }

    fn max_pages(&self) -> Result<String, PageError> {
        self.with_state(|s| s.max_pages.clone().ok_or(PageError::MissingMaxPages))
    }

    fn replace_options(&self, role: Role, options: &[SelectOption]) -> Result<(), PageError> {
        self.with_state(|s| match s.selects.get_mut(&role) {
            Some(current) => {
                *current = options.to_vec();
                Ok(())
            }
            None => Err(PageError::MissingElement(role)),
        })
    }

    fn set_html(&self, role: Role, html: &str) -> Result<(), PageError> {
        self.with_state(|s| match (role, s.table_html.as_mut()) {
            (Role::TableContainer, Some(current)) => {
                *current = html.to_string();
                Ok(())
            }
            _ => Err(PageError::MissingElement(role)),
        })
    }

    fn current_url(&self) -> Result<String, PageError> {
        self.with_state(|s| Ok(s.href.clone()))
    }

    fn navigate(&self, url: &str) -> Result<(), PageError> {
        self.with_state(|s| {
            s.navigations.push(url.to_string());
            Ok(())
        })
    }

    fn alert(&self, message: &str) {
        self.with_state(|s| s.alerts.push(message.to_string()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn select_reads_last_selected_then_first() {
        let options = vec![
            SelectOption::new("a", "A", false),
            SelectOption::new("b", "B", true),
            SelectOption::new("c", "C", true),
        ];
        assert_eq!(select_value(&options), "c");
        let options = vec![SelectOption::new("a", "A", false)];
        assert_eq!(select_value(&options), "a");
        assert_eq!(select_value(&[]), "");
    }

    #[test]
    fn missing_elements_are_reported() {
        let page = MemoryPage::default();
        assert!(!page.has(Role::SeasonSelect));
        assert!(matches!(
            page.value(Role::SortField),
            Err(PageError::MissingElement(Role::SortField))
        ));
        assert!(page.submit_form().is_err());
    }
}
