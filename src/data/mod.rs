/// Data layer: core types, loading, and per-view derivations.
///
/// Architecture:
/// ```text
///  four .csv files
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse once → DataContext (four Tables)
///   └──────────┘
///        │
///        ├──────────────┬───────────────┐
///        ▼              ▼               ▼
///   ┌──────────┐   ┌──────────┐   ┌──────────┐
///   │  filter   │   │ ranking  │   │  format   │
///   └──────────┘   └──────────┘   └──────────┘
///   sector series   top/bottom 10   display strings
/// ```

pub mod error;
pub mod filter;
pub mod format;
pub mod loader;
pub mod model;
pub mod ranking;

pub use error::DataError;
