use std::collections::BTreeMap;

use super::error::Result;
use super::model::Table;

pub const STATE_COLUMN: &str = "State";
pub const INDEX_COLUMN: &str = "Regional_Dev_Index";

/// Length of each ranking list.
pub const RANK_LIMIT: usize = 10;

/// Mean development index of one state.
#[derive(Debug, Clone, PartialEq)]
pub struct StateMean {
    pub state: String,
    pub mean: f64,
}

/// Highest and lowest states by mean index.
#[derive(Debug, Clone, PartialEq)]
pub struct Rankings {
    /// Descending by mean.
    pub top: Vec<StateMean>,
    /// Ascending by mean.
    pub bottom: Vec<StateMean>,
}

/// Group rows by state and average the index, skipping empty cells.
///
/// Groups come out in ascending state-name order. States without a single
/// numeric observation are dropped.
pub fn state_means(table: &Table) -> Result<Vec<StateMean>> {
    let state_idx = table.required_column(STATE_COLUMN)?;
    let index_idx = table.required_column(INDEX_COLUMN)?;

    let mut groups: BTreeMap<String, (f64, usize)> = BTreeMap::new();
    for (row_no, row) in table.rows.iter().enumerate() {
        if row[state_idx].is_null() {
            continue;
        }
        let cell = &row[index_idx];
        let value = match cell.as_f64() {
            Some(v) if v.is_nan() => continue,
            Some(v) => v,
            None if cell.is_null() => continue,
            None => return Err(table.invalid(row_no, index_idx, "a number")),
        };
        let (sum, count) = groups.entry(row[state_idx].to_string()).or_default();
        *sum += value;
        *count += 1;
    }

    Ok(groups
        .into_iter()
        .map(|(state, (sum, count))| StateMean {
            state,
            mean: sum / count as f64,
        })
        .collect())
}

/// Take the `limit` highest and lowest means.
///
/// Both sorts are stable over the name-ordered groups, so equal means keep
/// alphabetical order. With fewer than `limit` states every state appears
/// in both lists.
pub fn rank(means: &[StateMean], limit: usize) -> Rankings {
    let mut top = means.to_vec();
    top.sort_by(|a, b| b.mean.total_cmp(&a.mean));
    top.truncate(limit);

    let mut bottom = means.to_vec();
    bottom.sort_by(|a, b| a.mean.total_cmp(&b.mean));
    bottom.truncate(limit);

    Rankings { top, bottom }
}

/// Rankings for the regional index table.
pub fn regional_rankings(table: &Table) -> Result<Rankings> {
    Ok(rank(&state_means(table)?, RANK_LIMIT))
}
