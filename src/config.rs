//! Page configuration: where the controller finds its elements, which
//! endpoints it calls and what it writes into the page.
//!
//! Every field has a default matching the server-rendered players template,
//! so `init()` with no argument just works. A partial JSON object passed to
//! `init()` overrides only the keys it names.

use serde::{Deserialize, Serialize};
use tracing::Level;

use crate::error::PageError;
use crate::page::Role;

const LOADING_HTML: &str = r#"<div class="text-center p-4"><i class="fas fa-spinner fa-spin"></i> Loading player data...</div>"#;

// ── Selectors ──────────────────────────────────────────────────────

/// CSS selectors for every element the controller touches.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Selectors {
    pub search_input: String,
    pub jump_input: String,
    pub sort_field: String,
    pub order_field: String,
    pub page_field: String,
    pub filter_form: String,
    pub season_select: String,
    pub date_select: String,
    pub max_pages_holder: String,
    pub table_container: String,
}

impl Default for Selectors {
    fn default() -> Self {
        Self {
            search_input: "#searchInput".into(),
            jump_input: "#jumpToPageInput".into(),
            sort_field: "#sortInput".into(),
            order_field: "#orderInput".into(),
            page_field: "#pageInput".into(),
            filter_form: "#filterForm".into(),
            season_select: "#season-select".into(),
            date_select: "#date-select".into(),
            max_pages_holder: "[data-max-pages]".into(),
            table_container: ".table-responsive".into(),
        }
    }
}

impl Selectors {
    pub fn for_role(&self, role: Role) -> &str {
        match role {
            Role::SearchInput => &self.search_input,
            Role::JumpInput => &self.jump_input,
            Role::SortField => &self.sort_field,
            Role::OrderField => &self.order_field,
            Role::PageField => &self.page_field,
            Role::FilterForm => &self.filter_form,
            Role::SeasonSelect => &self.season_select,
            Role::DateSelect => &self.date_select,
            Role::MaxPagesHolder => &self.max_pages_holder,
            Role::TableContainer => &self.table_container,
        }
    }
}

// ── Endpoints ──────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Endpoints {
    pub seasons: String,
    /// Prefix; the season identifier is appended as the last path segment.
    pub dates: String,
}

impl Default for Endpoints {
    fn default() -> Self {
        Self {
            seasons: "/api/seasons".into(),
            dates: "/api/dates".into(),
        }
    }
}

impl Endpoints {
    pub fn dates_for(&self, season: &str) -> String {
        format!("{}/{}", self.dates.trim_end_matches('/'), season)
    }
}

// ── Page config ────────────────────────────────────────────────────

/// The synthetic first entry of the date selector.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LatestOption {
    pub value: String,
    pub label: String,
}

impl Default for LatestOption {
    fn default() -> Self {
        Self {
            value: "current".into(),
            label: "Latest Data".into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageConfig {
    pub selectors: Selectors,
    /// Attribute on the max-pages holder carrying the page count.
    pub max_pages_attribute: String,
    pub endpoints: Endpoints,
    pub latest_option: LatestOption,
    /// Markup swapped into the table container while the next page loads.
    pub loading_html: String,
    /// One of trace, debug, info, warn, error.
    pub log_level: String,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            selectors: Selectors::default(),
            max_pages_attribute: "data-max-pages".into(),
            endpoints: Endpoints::default(),
            latest_option: LatestOption::default(),
            loading_html: LOADING_HTML.into(),
            log_level: "info".into(),
        }
    }
}

impl PageConfig {
    /// Overlay a (possibly partial) JSON object on the defaults.
    /// Blank input yields the defaults.
    pub fn from_json(json: &str) -> Result<Self, PageError> {
        if json.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_json::from_str(json).map_err(PageError::Config)
    }

    /// Unknown level names fall back to `info`.
    pub fn log_level(&self) -> Level {
        self.log_level.parse().unwrap_or(Level::INFO)
    }
}
