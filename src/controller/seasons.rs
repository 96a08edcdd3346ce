//! Selector options for the season and date dropdowns.

use crate::api::{Season, SeasonDate};
use crate::config::LatestOption;
use crate::page::SelectOption;

/// One option per season, the active one selected.
pub fn season_options(seasons: &[Season]) -> Vec<SelectOption> {
    seasons
        .iter()
        .map(|s| SelectOption::new(&s.season, &s.display_name, s.is_active))
        .collect()
}

/// The synthetic "latest" option, then one option per date, the current one selected.
pub fn date_options(latest: &LatestOption, dates: &[SeasonDate]) -> Vec<SelectOption> {
    let mut options = Vec::with_capacity(dates.len() + 1);
    options.push(SelectOption::new(&latest.value, &latest.label, false));
    options.extend(
        dates
            .iter()
            .map(|d| SelectOption::new(&d.date, d.label(), d.is_current)),
    );
    options
}
