use crate::color::ColorMap;
use crate::data::filter::{default_selection, sector_series, SectorContributions, SectorSeries};
use crate::data::format::{format_policy_table, FormattedTable};
use crate::data::loader::DataContext;
use crate::data::ranking::{regional_rankings, Rankings};
use crate::data::DataError;

// ---------------------------------------------------------------------------
// Sector trend state
// ---------------------------------------------------------------------------

/// Selector state and derived series for the sector trend chart.
#[derive(Debug, Clone)]
pub struct TrendState {
    contributions: SectorContributions,
    /// Distinct sectors in source order.
    pub options: Vec<String>,
    /// Selected sectors in the order they were picked.
    pub selected: Vec<String>,
    pub colors: ColorMap,
    /// Cached series for `selected`.
    pub series: Vec<SectorSeries>,
}

impl TrendState {
    pub fn new(contributions: SectorContributions) -> Self {
        let options = contributions.sectors();
        let selected = default_selection(&options);
        let colors = ColorMap::new(&options);
        let series = sector_series(&contributions, &selected);
        Self {
            contributions,
            options,
            selected,
            colors,
            series,
        }
    }

    pub fn is_selected(&self, sector: &str) -> bool {
        self.selected.iter().any(|s| s == sector)
    }

    /// Add or remove one sector.
    pub fn toggle(&mut self, sector: &str) {
        if self.is_selected(sector) {
            self.selected.retain(|s| s != sector);
        } else if self.options.iter().any(|s| s == sector) {
            self.selected.push(sector.to_string());
        }
        self.selection_changed();
    }

    pub fn select_all(&mut self) {
        self.selected = self.options.clone();
        self.selection_changed();
    }

    pub fn select_none(&mut self) {
        self.selected.clear();
        self.selection_changed();
    }

    /// Recompute the series. Nothing else depends on the selection.
    fn selection_changed(&mut self) {
        log::debug!("Sector selection changed: {:?}", self.selected);
        self.series = sector_series(&self.contributions, &self.selected);
    }
}

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// Everything the views draw, derived once from the loaded tables.
///
/// Each view keeps its own result so a broken column only takes down
/// that section.
#[derive(Debug)]
pub struct AppState {
    pub trend: Result<TrendState, DataError>,
    pub rankings: Result<Rankings, DataError>,
    pub policy: Result<FormattedTable, DataError>,
}

impl AppState {
    pub fn new(data: &DataContext) -> Self {
        let trend = SectorContributions::from_table(&data.top_sectors).map(TrendState::new);
        let rankings = regional_rankings(&data.regional_index);
        let policy = format_policy_table(&data.policy_table);

        for (view, err) in [
            ("sector trend", trend.as_ref().err()),
            ("regional ranking", rankings.as_ref().err()),
            ("policy table", policy.as_ref().err()),
        ] {
            if let Some(e) = err {
                log::error!("Cannot render {view} view: {e}");
            }
        }

        Self {
            trend,
            rankings,
            policy,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::loader::read_table;

    fn context(top: &str, regional: &str, policy: &str) -> DataContext {
        DataContext {
            sector_gdp: read_table("gdp.csv", "Sector,Year\nIT,2020\n".as_bytes()).unwrap(),
            top_sectors: read_table("top.csv", top.as_bytes()).unwrap(),
            regional_index: read_table("regional.csv", regional.as_bytes()).unwrap(),
            policy_table: read_table("policy.csv", policy.as_bytes()).unwrap(),
        }
    }

    const TOP: &str = "Sector,Year,GDP_Contribution\n\
                       Agriculture,2022,18.0\n\
                       IT,2022,8.0\n\
                       Manufacturing,2022,16.0\n\
                       Retail,2022,10.0\n";
    const REGIONAL: &str = "State,Regional_Dev_Index\nGoa,0.8\nBihar,0.3\n";
    const POLICY: &str = "Zone,HCES_Consumption,CPI_Stability,Regional_Dev_Index\nWest,5000.4,1.5,0.75\n";

    fn series_names(trend: &TrendState) -> Vec<&str> {
        trend.series.iter().map(|s| s.sector.as_str()).collect()
    }

    #[test]
    fn starts_with_first_three_sectors() {
        let state = AppState::new(&context(TOP, REGIONAL, POLICY));
        let trend = state.trend.as_ref().unwrap();
        assert_eq!(trend.selected, ["Agriculture", "IT", "Manufacturing"]);
        assert_eq!(series_names(trend), ["Agriculture", "IT", "Manufacturing"]);
    }

    #[test]
    fn selection_events_update_series() {
        let mut state = AppState::new(&context(TOP, REGIONAL, POLICY));
        let rankings_before = state.rankings.as_ref().unwrap().clone();
        let trend = state.trend.as_mut().unwrap();

        trend.toggle("Retail");
        trend.toggle("IT");
        assert_eq!(trend.selected, ["Agriculture", "Manufacturing", "Retail"]);
        assert_eq!(series_names(trend), ["Agriculture", "Manufacturing", "Retail"]);

        trend.select_none();
        assert!(trend.series.is_empty());

        trend.select_all();
        assert_eq!(trend.series.len(), 4);

        trend.toggle("Unknown");
        assert_eq!(trend.selected.len(), 4);

        assert_eq!(*state.rankings.as_ref().unwrap(), rankings_before);
    }

    #[test]
    fn broken_view_does_not_affect_others() {
        let state = AppState::new(&context(TOP, "Region,Score\nGoa,1\n", POLICY));
        assert!(state.rankings.is_err());
        assert!(state.trend.is_ok());
        assert_eq!(state.policy.as_ref().unwrap().rows[0][1], "5000");
    }
}
