use std::fs::File;
use std::io::Read;
use std::path::Path;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use once_cell::sync::OnceCell;

use super::error::{DataError, Result};
use super::model::{CellValue, Table};
use crate::config::DataFiles;

// ---------------------------------------------------------------------------
// DataContext – the four loaded tables
// ---------------------------------------------------------------------------

/// Read-only tables shared by every view for the lifetime of the process.
#[derive(Debug, Clone, PartialEq)]
pub struct DataContext {
    /// Merged sectoral dataset. Loaded but not rendered by any view.
    pub sector_gdp: Table,
    /// `Sector`, `Year`, `GDP_Contribution`.
    pub top_sectors: Table,
    /// `State`, `Regional_Dev_Index`.
    pub regional_index: Table,
    /// Policy zone classification.
    pub policy_table: Table,
}

impl DataContext {
    /// Read all four files with `load`. Any failure aborts the whole load.
    pub fn read(files: &DataFiles, mut load: impl FnMut(&Path) -> Result<Table>) -> Result<Self> {
        Ok(Self {
            sector_gdp: load(&files.sector_gdp)?,
            top_sectors: load(&files.top_sectors)?,
            regional_index: load(&files.regional_index)?,
            policy_table: load(&files.policy_table)?,
        })
    }

    fn tables(&self) -> [&Table; 4] {
        [
            &self.sector_gdp,
            &self.top_sectors,
            &self.regional_index,
            &self.policy_table,
        ]
    }
}

// ---------------------------------------------------------------------------
// DataLoader – load once, reuse afterwards
// ---------------------------------------------------------------------------

/// Memoizing loader: the first `load` reads the files, later calls return
/// the same context without touching the disk.
#[derive(Debug)]
pub struct DataLoader {
    files: DataFiles,
    cache: OnceCell<Arc<DataContext>>,
    files_read: AtomicUsize,
}

impl DataLoader {
    pub fn new(files: DataFiles) -> Self {
        Self {
            files,
            cache: OnceCell::new(),
            files_read: AtomicUsize::new(0),
        }
    }

    /// Return the loaded tables, reading them on first use.
    pub fn load(&self) -> Result<Arc<DataContext>> {
        self.cache
            .get_or_try_init(|| {
                let ctx = DataContext::read(&self.files, |path| self.read_file(path))?;
                for table in ctx.tables() {
                    log::info!(
                        "Loaded {} rows x {} columns from {}",
                        table.len(),
                        table.columns.len(),
                        table.name
                    );
                }
                Ok(Arc::new(ctx))
            })
            .cloned()
    }

    /// Number of files opened so far.
    pub fn files_read(&self) -> usize {
        self.files_read.load(Ordering::Relaxed)
    }

    fn read_file(&self, path: &Path) -> Result<Table> {
        let file = open_file(path)?;
        self.files_read.fetch_add(1, Ordering::Relaxed);
        read_table(&table_name(path), file)
    }
}

// ---------------------------------------------------------------------------
// CSV reading
// ---------------------------------------------------------------------------

fn open_file(path: &Path) -> Result<File> {
    File::open(path).map_err(|source| DataError::FileAccess {
        path: path.to_path_buf(),
        source,
    })
}

/// File name used to label the table in errors and logs.
fn table_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

/// Parse CSV text from any reader. The first row names the columns.
pub fn read_table<R: Read>(name: &str, input: R) -> Result<Table> {
    let parse_err = |source: csv::Error| DataError::Parse {
        table: name.to_string(),
        source,
    };

    let mut reader = csv::Reader::from_reader(input);
    let columns: Vec<String> = reader
        .headers()
        .map_err(parse_err)?
        .iter()
        .map(|h| h.to_string())
        .collect();

    if columns.is_empty() {
        return Err(DataError::NoHeader {
            table: name.to_string(),
        });
    }

    let mut rows = Vec::new();
    for result in reader.records() {
        let record = result.map_err(parse_err)?;
        rows.push(record.iter().map(guess_cell_type).collect());
    }

    Ok(Table {
        name: name.to_string(),
        columns,
        rows,
    })
}

/// Cells read as missing, the usual dataframe `read_csv` defaults.
const NULL_MARKERS: [&str; 19] = [
    "", "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND", "1.#QNAN",
    "<NA>", "N/A", "NA", "NULL", "NaN", "None", "n/a", "nan", "null",
];

fn guess_cell_type(s: &str) -> CellValue {
    if NULL_MARKERS.contains(&s) {
        return CellValue::Null;
    }
    if let Ok(i) = s.parse::<i64>() {
        return CellValue::Integer(i);
    }
    if let Ok(f) = s.parse::<f64>() {
        // `parse` accepts any spelling of "nan"; a NaN is a missing value.
        return if f.is_nan() {
            CellValue::Null
        } else {
            CellValue::Float(f)
        };
    }
    match s {
        "true" | "True" => CellValue::Bool(true),
        "false" | "False" => CellValue::Bool(false),
        _ => CellValue::Text(s.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{
        POLICY_TABLE_FILE, REGIONAL_INDEX_FILE, SECTOR_GDP_FILE, TOP_SECTORS_FILE,
    };

    fn write_fixtures(dir: &Path) {
        std::fs::write(dir.join(SECTOR_GDP_FILE), "Sector,Year,GVA\nAgriculture,2022,10.5\n")
            .unwrap();
        std::fs::write(
            dir.join(TOP_SECTORS_FILE),
            "Sector,Year,GDP_Contribution\nAgriculture,2022,18.2\nIT,2022,7.9\n",
        )
        .unwrap();
        std::fs::write(
            dir.join(REGIONAL_INDEX_FILE),
            "State,Year,Regional_Dev_Index\nGoa,2023,0.81\nBihar,2023,0.32\n",
        )
        .unwrap();
        std::fs::write(
            dir.join(POLICY_TABLE_FILE),
            "Zone,HCES_Consumption,CPI_Stability,Regional_Dev_Index\nNorth,4123.6,1.234,0.5\n",
        )
        .unwrap();
    }

    #[test]
    fn infers_cell_types() {
        let t = read_table("t", "a,b,c,d,e\nx,3,2.5,,True\n".as_bytes()).unwrap();
        assert_eq!(t.columns, ["a", "b", "c", "d", "e"]);
        assert_eq!(
            t.rows[0],
            vec![
                CellValue::Text("x".into()),
                CellValue::Integer(3),
                CellValue::Float(2.5),
                CellValue::Null,
                CellValue::Bool(true),
            ]
        );
    }

    #[test]
    fn missing_value_markers_are_null() {
        for marker in NULL_MARKERS {
            assert_eq!(guess_cell_type(marker), CellValue::Null, "{marker:?}");
        }
        let t = read_table("t", "a,b,c
#N/A,n/a,<NA>
".as_bytes()).unwrap();
        assert!(t.rows[0].iter().all(CellValue::is_null));
    }

    #[test]
    fn nan_spellings_are_null() {
        for s in ["NAN", "-NAN", "+nan", "nAn"] {
            assert_eq!(guess_cell_type(s), CellValue::Null, "{s:?}");
        }
        assert_eq!(guess_cell_type("inf"), CellValue::Float(f64::INFINITY));
        assert_eq!(guess_cell_type("-0.25"), CellValue::Float(-0.25));
    }

    #[test]
    fn ragged_row_is_a_parse_error() {
        let err = read_table("t", "a,b\n1,2\n3\n".as_bytes()).unwrap_err();
        assert!(matches!(err, DataError::Parse { .. }));
    }

    #[test]
    fn empty_input_has_no_header() {
        let err = read_table("t", "".as_bytes()).unwrap_err();
        assert!(matches!(err, DataError::NoHeader { .. }));
    }

    #[test]
    fn loads_four_tables_once() {
        let dir = tempfile::tempdir().unwrap();
        write_fixtures(dir.path());
        let loader = DataLoader::new(DataFiles::in_dir(dir.path()));

        let first = loader.load().unwrap();
        assert_eq!(loader.files_read(), 4);

        // Even if the files change on disk, the cached tables are returned.
        std::fs::remove_file(dir.path().join(TOP_SECTORS_FILE)).unwrap();
        let second = loader.load().unwrap();

        assert_eq!(loader.files_read(), 4);
        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(*first, *second);
        assert_eq!(second.top_sectors.len(), 2);
        assert_eq!(second.policy_table.name, POLICY_TABLE_FILE);
    }

    #[test]
    fn missing_file_aborts_the_load() {
        let dir = tempfile::tempdir().unwrap();
        write_fixtures(dir.path());
        std::fs::remove_file(dir.path().join(REGIONAL_INDEX_FILE)).unwrap();

        let loader = DataLoader::new(DataFiles::in_dir(dir.path()));
        let err = loader.load().unwrap_err();
        assert!(
            matches!(err, DataError::FileAccess { ref path, .. } if path.ends_with(REGIONAL_INDEX_FILE))
        );
        // The two files before it were opened; the last one never was.
        assert_eq!(loader.files_read(), 2);
    }

    #[test]
    fn failed_first_file_reads_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let loader = DataLoader::new(DataFiles::in_dir(dir.path()));
        assert!(loader.load().is_err());
        assert_eq!(loader.files_read(), 0);
    }
}
