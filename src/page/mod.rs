//! The page as the controller sees it: a handful of elements addressed by
//! role, plus the window's location and alert.
//!
//! `dom::DomPage` is the real implementation over web-sys. Tests use
//! `memory::MemoryPage`, which models the same elements in plain data.

use std::fmt;

use crate::error::PageError;

pub mod dom;
#[cfg(test)]
pub mod memory;

/// Every element the controller reads or writes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    SearchInput,
    JumpInput,
    SortField,
    OrderField,
    PageField,
    FilterForm,
    SeasonSelect,
    DateSelect,
    MaxPagesHolder,
    TableContainer,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Role::SearchInput => "search input",
            Role::JumpInput => "jump-to-page input",
            Role::SortField => "sort field",
            Role::OrderField => "order field",
            Role::PageField => "page field",
            Role::FilterForm => "filter form",
            Role::SeasonSelect => "season selector",
            Role::DateSelect => "date selector",
            Role::MaxPagesHolder => "max pages holder",
            Role::TableContainer => "table container",
        };
        f.write_str(name)
    }
}

/// One `<option>` of a selector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
    pub selected: bool,
}

impl SelectOption {
    pub fn new(value: impl Into<String>, label: impl Into<String>, selected: bool) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
            selected,
        }
    }
}

/// Capability interface over the document.
///
/// Methods take `&self`: the DOM is interior-mutable and the controller is
/// shared between event closures.
pub trait Page {
    /// Whether the element for `role` exists on this page.
    fn has(&self, role: Role) -> bool;

    /// Current value of an input or selector. A selector with no options reads as "".
    fn value(&self, role: Role) -> Result<String, PageError>;

    fn set_value(&self, role: Role, value: &str) -> Result<(), PageError>;

    /// Submit the filter form. Navigation is owned by the form's method/action.
    fn submit_form(&self) -> Result<(), PageError>;

    /// Raw value of the max-pages attribute.
    fn max_pages(&self) -> Result<String, PageError>;

    /// Drop every option of a selector and append `options` in order.
    fn replace_options(&self, role: Role, options: &[SelectOption]) -> Result<(), PageError>;

    fn set_html(&self, role: Role, html: &str) -> Result<(), PageError>;

    fn current_url(&self) -> Result<String, PageError>;

    fn navigate(&self, url: &str) -> Result<(), PageError>;

    /// Blocking notification.
    fn alert(&self, message: &str);
}
