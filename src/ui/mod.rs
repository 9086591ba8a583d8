pub mod policy;
pub mod ranking;
pub mod shell;
pub mod trend;
