pub mod comparison;
pub mod config;
pub mod error;
pub mod form;
pub mod format;
pub mod history;
pub mod service;
pub mod submitter;

pub use comparison::{Analysis, Comparison, ComparisonId, NewComparison};
pub use config::{
    ApiConfig, InspectorConfig, OllamaConfig, ServerConfig, SimilarityConfig, SimilarityMethod,
};
pub use error::{InspectorError, Result};
pub use form::{ComparisonForm, Side};
pub use history::{ComparisonHistory, ListState};
pub use service::ComparisonService;
pub use submitter::{ComparisonSubmitter, SubmitState};
