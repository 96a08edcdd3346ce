//! `PageController`: the players table interactions.
//!
//! Every operation ends in a full-page navigation (form submit or location
//! change) except the two selector loaders, which only rewrite options.
//! Nothing here holds state between calls: sort, page and selection all live
//! in the document and are rebuilt by the server on the next load.

use tracing::{debug, error, info};

use crate::api::{self, Fetcher, Season, SeasonDate};
use crate::config::PageConfig;
use crate::error::PageError;
use crate::page::{Page, Role};

pub mod pager;
pub mod seasons;
pub mod sort;

use sort::SortState;

pub struct PageController<P, F> {
    page: P,
    fetcher: F,
    config: PageConfig,
}

impl<P: Page, F: Fetcher> PageController<P, F> {
    pub fn new(page: P, fetcher: F, config: PageConfig) -> Self {
        Self {
            page,
            fetcher,
            config,
        }
    }

    pub fn page(&self) -> &P {
        &self.page
    }

    pub fn fetcher(&self) -> &F {
        &self.fetcher
    }

    pub fn config(&self) -> &PageConfig {
        &self.config
    }

    // ── Filter / sort ──────────────────────────────────────────────

    /// Back to page 1 and resubmit the filter form.
    pub fn apply_filter(&self) -> Result<(), PageError> {
        debug!("applying filter");
        self.page.set_value(Role::PageField, "1")?;
        self.page.submit_form()
    }

    /// Sort by `column`, toggling direction if it is already the sort column.
    pub fn apply_sort(&self, column: &str) -> Result<SortState, PageError> {
        if column.trim().is_empty() {
            return Err(PageError::EmptyColumn);
        }
        let current_column = self.page.value(Role::SortField)?;
        let current_order = self.page.value(Role::OrderField)?;
        let next = SortState::after_click(&current_column, &current_order, column);
        debug!(
            from.column = %current_column,
            from.order = %current_order,
            to.column = %next.column,
            to.order = %next.order,
            "applying sort"
        );

        self.page.set_value(Role::SortField, &next.column)?;
        self.page.set_value(Role::OrderField, next.order.as_str())?;
        self.page.set_value(Role::PageField, "1")?;
        self.page.submit_form()?;
        Ok(next)
    }

    // ── Pagination ─────────────────────────────────────────────────

    /// Navigate to page `raw`, or alert with the valid range and stay put.
    pub fn go_to_page(&self, raw: &str) -> Result<u32, PageError> {
        let max_pages = pager::parse_max_pages(&self.page.max_pages()?)?;
        let page = match pager::validate_page(raw, max_pages) {
            Ok(page) => page,
            Err(err) => {
                self.page.alert(&err.to_string());
                return Err(err);
            }
        };

        let href = self.page.current_url()?;
        let page_param = page.to_string();
        let target = pager::with_query_params(&href, &[("page", page_param.as_str())])?;
        debug!(page, max_pages, "jumping to page");
        self.page.navigate(&target)?;
        Ok(page)
    }

    /// `go_to_page` with whatever is typed in the jump input.
    pub fn jump_from_input(&self) -> Result<u32, PageError> {
        let raw = self.page.value(Role::JumpInput)?;
        self.go_to_page(&raw)
    }

    // ── Season / date selectors ────────────────────────────────────

    /// Fill the season selector, then the date selector for the selected season.
    ///
    /// Failures are logged and leave the selectors as they were.
    pub async fn load_seasons(&self) -> Result<(), PageError> {
        self.try_load_seasons()
            .await
            .inspect_err(|err| error!(%err, "error loading seasons"))
    }

    async fn try_load_seasons(&self) -> Result<(), PageError> {
        let available: Vec<Season> =
            api::get_json(&self.fetcher, &self.config.endpoints.seasons).await?;
        if !self.page.has(Role::SeasonSelect) {
            debug!("no season selector on this page");
            return Ok(());
        }

        let options = seasons::season_options(&available);
        self.page.replace_options(Role::SeasonSelect, &options)?;
        info!(count = available.len(), "seasons loaded");

        let selected = self.page.value(Role::SeasonSelect)?;
        if selected.is_empty() {
            debug!("no seasons available, skipping dates");
            return Ok(());
        }
        self.refresh_dates(&selected).await
    }

    /// Replace the date selector's options with the dates of `season`.
    ///
    /// Failures are logged and leave the selector as it was.
    pub async fn refresh_dates(&self, season: &str) -> Result<(), PageError> {
        self.try_refresh_dates(season)
            .await
            .inspect_err(|err| error!(season, %err, "error loading dates"))
    }

    async fn try_refresh_dates(&self, season: &str) -> Result<(), PageError> {
        let path = self.config.endpoints.dates_for(season);
        let dates: Vec<SeasonDate> = api::get_json(&self.fetcher, &path).await?;
        let options = seasons::date_options(&self.config.latest_option, &dates);
        self.page.replace_options(Role::DateSelect, &options)?;
        info!(season, count = dates.len(), "dates loaded");
        Ok(())
    }

    /// `refresh_dates` for whichever season the selector currently shows.
    pub async fn refresh_selected_dates(&self) -> Result<(), PageError> {
        let season = self
            .page
            .value(Role::SeasonSelect)
            .inspect_err(|err| error!(%err, "error loading dates"))?;
        self.refresh_dates(&season).await
    }

    /// Show the loading indicator and reload with the selected season and date.
    pub fn apply_season_date(&self) -> Result<(), PageError> {
        let season = self.page.value(Role::SeasonSelect)?;
        let date = self.page.value(Role::DateSelect)?;

        self.page
            .set_html(Role::TableContainer, &self.config.loading_html)?;

        let href = self.page.current_url()?;
        let target = pager::with_query_params(
            &href,
            &[("season", season.as_str()), ("date", date.as_str())],
        )?;
        debug!(%season, %date, "switching season data");
        self.page.navigate(&target)
    }
}
