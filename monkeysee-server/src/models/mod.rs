//! Domain models with validation at construction
//!
//! All user input is validated when creating these types.
//! Invalid input returns ValidationError, not panic.

pub mod prediction;
pub mod validation;

pub use prediction::{AuthorName, Elo, PredictionContent, PredictionStatus, REDACTED_AUTHOR};
pub use validation::ValidationError;
