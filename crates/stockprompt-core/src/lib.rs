//! # stockprompt-core
//!
//! Foundation crate for the stockprompt generator.
//! Defines catalogs, candidate tuples, templates, errors, config, constants,
//! and the collaborator traits every other crate in the workspace builds on.

pub mod catalog;
pub mod config;
pub mod constants;
pub mod domains;
pub mod errors;
pub mod models;
pub mod template;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use catalog::{ParameterCatalog, ParameterCategory};
pub use config::StockpromptConfig;
pub use domains::DomainDefinition;
pub use errors::{StockpromptError, StockpromptResult};
pub use models::{CandidateTuple, CategoryValue, FeedbackLabel, HistoryRecord, TupleValues, WorkingPools};
pub use template::PromptTemplate;
