use std::path::{Path, PathBuf};

// ---------------------------------------------------------------------------
// Input files
// ---------------------------------------------------------------------------

pub const SECTOR_GDP_FILE: &str = "Merged_Sectoral_Dataset.csv";
pub const TOP_SECTORS_FILE: &str = "Top6_Sectors_GDP_Contribution.csv";
pub const REGIONAL_INDEX_FILE: &str = "Regional_Development_Index.csv";
pub const POLICY_TABLE_FILE: &str = "Policy_Summary_Table.csv";

/// Locations of the four input tables.
#[derive(Debug, Clone, PartialEq)]
pub struct DataFiles {
    pub sector_gdp: PathBuf,
    pub top_sectors: PathBuf,
    pub regional_index: PathBuf,
    pub policy_table: PathBuf,
}

impl DataFiles {
    /// The fixed file names resolved against `dir`.
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        let dir = dir.as_ref();
        Self {
            sector_gdp: dir.join(SECTOR_GDP_FILE),
            top_sectors: dir.join(TOP_SECTORS_FILE),
            regional_index: dir.join(REGIONAL_INDEX_FILE),
            policy_table: dir.join(POLICY_TABLE_FILE),
        }
    }
}

impl Default for DataFiles {
    fn default() -> Self {
        Self::in_dir(".")
    }
}

// ---------------------------------------------------------------------------
// Dashboard configuration
// ---------------------------------------------------------------------------

/// Startup settings. Built from defaults only; there are no flags.
#[derive(Debug, Clone)]
pub struct DashboardConfig {
    pub files: DataFiles,
    pub window_size: [f32; 2],
    pub min_window_size: [f32; 2],
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            files: DataFiles::default(),
            window_size: [1400.0, 900.0],
            min_window_size: [800.0, 500.0],
        }
    }
}
