//! Players table page controller, compiled to WASM.
//!
//! The server renders the players table with a filter form, hidden sort and
//! page fields, a jump-to-page box and season/date selectors. This module
//! exports the handlers those elements call; each one rewrites a field or
//! the URL and reloads the page, except the selector loaders which fill
//! options from `/api/seasons` and `/api/dates/{season}`.
//!
//! Call `init()` once when the document is ready. The other exports work
//! without it, falling back to the default configuration.

use std::cell::RefCell;
use std::rc::Rc;

use tracing::{Level, error, info};
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;

pub mod api;
pub mod config;
pub mod controller;
pub mod error;
pub mod events;
pub mod page;
pub mod telemetry;

use api::http::HttpFetcher;
use config::PageConfig;
use controller::PageController;
use error::{PageError, report};
use page::dom::DomPage;

/// The controller as wired to the live document.
pub type BrowserController = PageController<DomPage, HttpFetcher>;

thread_local! {
    static CONTROLLER: RefCell<Option<Rc<BrowserController>>> = const { RefCell::new(None) };
}

fn build(config: PageConfig) -> Result<Rc<BrowserController>, PageError> {
    let page = DomPage::new(&config)?;
    let fetcher = HttpFetcher::new(page.window().clone());
    Ok(Rc::new(PageController::new(page, fetcher, config)))
}

/// The page's controller, built from defaults on first use if `init` never ran.
fn controller() -> Option<Rc<BrowserController>> {
    CONTROLLER.with(|slot| {
        let mut slot = slot.borrow_mut();
        if slot.is_none() {
            let config = PageConfig::default();
            telemetry::install(config.log_level());
            *slot = report("init", build(config));
        }
        slot.clone()
    })
}

/// Set up the controller and attach keyboard/change handlers.
///
/// `config_json` is an optional partial `PageConfig` object; keys it omits
/// keep their defaults. Malformed JSON is logged and ignored.
#[wasm_bindgen]
pub fn init(config_json: Option<String>) {
    let config = match PageConfig::from_json(config_json.as_deref().unwrap_or("")) {
        Ok(config) => config,
        Err(err) => {
            telemetry::install(Level::INFO);
            error!(%err, "using default page config");
            PageConfig::default()
        }
    };
    telemetry::install(config.log_level());

    let Some(controller) = report("init", build(config)) else {
        return;
    };
    CONTROLLER.with(|slot| *slot.borrow_mut() = Some(controller.clone()));
    events::attach(&controller);
    info!("players page loaded");
}

/// Filter form submit: back to page 1 and resubmit.
#[wasm_bindgen(js_name = submitForm)]
pub fn submit_form() {
    if let Some(controller) = controller() {
        report("applyFilter", controller.apply_filter());
    }
}

/// Column header click.
#[wasm_bindgen(js_name = sortBy)]
pub fn sort_by(column: &str) {
    if let Some(controller) = controller() {
        report("applySort", controller.apply_sort(column));
    }
}

/// "Go" next to the jump-to-page box. Out-of-range input raises an alert.
#[wasm_bindgen(js_name = jumpToPage)]
pub fn jump_to_page() {
    if let Some(controller) = controller() {
        report("goToPage", controller.jump_from_input());
    }
}

/// Fetch seasons into the season selector, then dates for the selected one.
#[wasm_bindgen(js_name = loadSeasonData)]
pub fn load_season_data() {
    if let Some(controller) = controller() {
        spawn_local(async move {
            let _ = controller.load_seasons().await;
        });
    }
}

/// Fetch dates for the season currently selected.
#[wasm_bindgen(js_name = updateAvailableDates)]
pub fn update_available_dates() {
    if let Some(controller) = controller() {
        spawn_local(async move {
            let _ = controller.refresh_selected_dates().await;
        });
    }
}

/// Reload the table for the selected season and date.
#[wasm_bindgen(js_name = updatePlayerData)]
pub fn update_player_data() {
    if let Some(controller) = controller() {
        report("applySeasonDate", controller.apply_season_date());
    }
}
