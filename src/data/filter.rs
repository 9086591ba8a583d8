use std::collections::HashSet;

use super::error::Result;
use super::model::Table;

pub const SECTOR_COLUMN: &str = "Sector";
pub const YEAR_COLUMN: &str = "Year";
pub const CONTRIBUTION_COLUMN: &str = "GDP_Contribution";

/// How many sectors are selected before the user touches the selector.
pub const DEFAULT_SELECTION_LEN: usize = 3;

// ---------------------------------------------------------------------------
// Typed rows of the top-sectors table
// ---------------------------------------------------------------------------

/// One (sector, year) observation.
#[derive(Debug, Clone, PartialEq)]
pub struct SectorContribution {
    pub sector: String,
    pub year: i64,
    /// `None` where the source cell is empty.
    pub gdp_contribution: Option<f64>,
}

/// The top-sectors table in source row order.
#[derive(Debug, Clone, PartialEq)]
pub struct SectorContributions {
    pub rows: Vec<SectorContribution>,
}

impl SectorContributions {
    /// Extract the typed rows, enforcing the column contract.
    pub fn from_table(table: &Table) -> Result<Self> {
        let sector_idx = table.required_column(SECTOR_COLUMN)?;
        let year_idx = table.required_column(YEAR_COLUMN)?;
        let value_idx = table.required_column(CONTRIBUTION_COLUMN)?;

        let mut rows = Vec::with_capacity(table.len());
        for (row_no, row) in table.rows.iter().enumerate() {
            if row[sector_idx].is_null() {
                continue;
            }
            let year = row[year_idx]
                .as_i64()
                .ok_or_else(|| table.invalid(row_no, year_idx, "a whole-number year"))?;
            let value = &row[value_idx];
            let gdp_contribution = match value.as_f64() {
                Some(v) => Some(v),
                None if value.is_null() => None,
                None => return Err(table.invalid(row_no, value_idx, "a number")),
            };
            rows.push(SectorContribution {
                sector: row[sector_idx].to_string(),
                year,
                gdp_contribution,
            });
        }
        Ok(Self { rows })
    }

    /// Distinct sector names in order of first occurrence.
    pub fn sectors(&self) -> Vec<String> {
        let mut seen = HashSet::new();
        self.rows
            .iter()
            .filter(|r| seen.insert(r.sector.as_str()))
            .map(|r| r.sector.clone())
            .collect()
    }

    /// Rows whose sector is part of `selected`, in source order.
    pub fn filtered<'a>(
        &'a self,
        selected: &'a [String],
    ) -> impl Iterator<Item = &'a SectorContribution> + 'a {
        self.rows.iter().filter(move |r| selected.contains(&r.sector))
    }
}

/// The initial selection: the first few sectors in source order.
pub fn default_selection(options: &[String]) -> Vec<String> {
    options.iter().take(DEFAULT_SELECTION_LEN).cloned().collect()
}

// ---------------------------------------------------------------------------
// Chart series
// ---------------------------------------------------------------------------

/// Plot data for one sector: markers for every point, lines only between
/// consecutive years.
#[derive(Debug, Clone, PartialEq)]
pub struct SectorSeries {
    pub sector: String,
    /// All `[year, contribution]` points, ordered by year.
    pub points: Vec<[f64; 2]>,
    /// Runs of consecutive years. Single-point runs draw no line.
    pub segments: Vec<Vec<[f64; 2]>>,
}

/// Build one series per selected sector that has rows.
///
/// Series follow the source order of sectors, not the order of `selected`.
/// An empty selection yields no series.
pub fn sector_series(data: &SectorContributions, selected: &[String]) -> Vec<SectorSeries> {
    if selected.is_empty() {
        return Vec::new();
    }

    data.sectors()
        .into_iter()
        .filter(|s| selected.contains(s))
        .map(|sector| {
            let mut rows: Vec<&SectorContribution> = data
                .filtered(selected)
                .filter(|r| r.sector == sector)
                .collect();
            rows.sort_by_key(|r| r.year);
            build_series(sector, &rows)
        })
        .collect()
}

fn build_series(sector: String, rows: &[&SectorContribution]) -> SectorSeries {
    let mut points = Vec::new();
    let mut segments: Vec<Vec<[f64; 2]>> = Vec::new();
    let mut current: Vec<[f64; 2]> = Vec::new();
    let mut last_year: Option<i64> = None;

    for row in rows {
        let Some(value) = row.gdp_contribution else {
            // Missing value: close the run.
            if !current.is_empty() {
                segments.push(std::mem::take(&mut current));
            }
            last_year = None;
            continue;
        };
        if let Some(prev) = last_year {
            if row.year - prev > 1 && !current.is_empty() {
                segments.push(std::mem::take(&mut current));
            }
        }
        let point = [row.year as f64, value];
        points.push(point);
        current.push(point);
        last_year = Some(row.year);
    }
    if !current.is_empty() {
        segments.push(current);
    }

    SectorSeries {
        sector,
        points,
        segments,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::loader::read_table;
    use crate::data::DataError;

    fn contributions(csv: &str) -> SectorContributions {
        let table = read_table("top.csv", csv.as_bytes()).unwrap();
        SectorContributions::from_table(&table).unwrap()
    }

    fn four_sectors() -> SectorContributions {
        contributions(
            "Sector,Year,GDP_Contribution\n\
             Agriculture,2021,18.3\n\
             IT,2021,7.4\n\
             Agriculture,2022,18.1\n\
             Manufacturing,2021,16.0\n\
             Retail,2021,10.2\n\
             IT,2022,7.9\n\
             Manufacturing,2022,16.4\n\
             Retail,2022,10.6\n",
        )
    }

    fn names(series: &[SectorSeries]) -> Vec<&str> {
        series.iter().map(|s| s.sector.as_str()).collect()
    }

    #[test]
    fn options_follow_first_occurrence() {
        assert_eq!(
            four_sectors().sectors(),
            ["Agriculture", "IT", "Manufacturing", "Retail"]
        );
    }

    #[test]
    fn default_selection_renders_first_three_sectors() {
        let data = four_sectors();
        let selected = default_selection(&data.sectors());
        let series = sector_series(&data, &selected);

        assert_eq!(names(&series), ["Agriculture", "IT", "Manufacturing"]);
        assert!(series.iter().all(|s| s.sector != "Retail"));
    }

    #[test]
    fn one_series_per_selected_sector() {
        let data = four_sectors();
        let options = data.sectors();
        // Every non-empty subset of the four options.
        for mask in 1u32..16 {
            let selected: Vec<String> = options
                .iter()
                .enumerate()
                .filter(|(i, _)| mask & (1 << i) != 0)
                .map(|(_, s)| s.clone())
                .collect();
            let series = sector_series(&data, &selected);
            assert_eq!(series.len(), selected.len());
            for s in &series {
                assert!(selected.contains(&s.sector));
                assert_eq!(s.points.len(), 2);
            }
        }
    }

    #[test]
    fn empty_selection_renders_nothing() {
        assert!(sector_series(&four_sectors(), &[]).is_empty());
    }

    #[test]
    fn series_order_ignores_click_order() {
        let data = four_sectors();
        let selected = vec!["Retail".to_string(), "Agriculture".to_string()];
        assert_eq!(names(&sector_series(&data, &selected)), ["Agriculture", "Retail"]);
    }

    #[test]
    fn single_point_has_no_line() {
        let data = contributions("Sector,Year,GDP_Contribution\nMining,2020,2.1\n");
        let series = sector_series(&data, &["Mining".to_string()]);
        assert_eq!(series[0].points, vec![[2020.0, 2.1]]);
        assert_eq!(series[0].segments, vec![vec![[2020.0, 2.1]]]);
    }

    #[test]
    fn year_gaps_split_the_line() {
        let data = contributions(
            "Sector,Year,GDP_Contribution\n\
             Energy,2023,3.0\n\
             Energy,2019,1.0\n\
             Energy,2020,2.0\n",
        );
        let series = sector_series(&data, &["Energy".to_string()]);
        assert_eq!(
            series[0].segments,
            vec![vec![[2019.0, 1.0], [2020.0, 2.0]], vec![[2023.0, 3.0]]]
        );
    }

    #[test]
    fn missing_value_splits_the_line() {
        let data = contributions(
            "Sector,Year,GDP_Contribution\n\
             Energy,2019,1.0\n\
             Energy,2020,\n\
             Energy,2021,3.0\n",
        );
        let series = sector_series(&data, &["Energy".to_string()]);
        assert_eq!(series[0].points.len(), 2);
        assert_eq!(series[0].segments.len(), 2);
    }

    #[test]
    fn missing_column_fails_the_view() {
        let table = read_table("top.csv", "Sector,Year\nIT,2020\n".as_bytes()).unwrap();
        assert!(matches!(
            SectorContributions::from_table(&table),
            Err(DataError::MissingColumn { ref column, .. }) if column == CONTRIBUTION_COLUMN
        ));
    }

    #[test]
    fn text_year_is_invalid() {
        let table = read_table(
            "top.csv",
            "Sector,Year,GDP_Contribution\nIT,FY22,7.0\n".as_bytes(),
        )
        .unwrap();
        assert!(matches!(
            SectorContributions::from_table(&table),
            Err(DataError::InvalidValue { row: 0, .. })
        ));
    }
}
