pub mod assess;
pub mod config;
pub mod diag;
pub mod error;
pub mod io;
pub mod radius;
pub mod registry;
pub mod report;
pub mod scorer;
pub mod strategy;
pub mod types;

pub use assess::{assess, Assessor};
pub use error::{ImpactError, Result};
pub use report::AssessmentResult;
