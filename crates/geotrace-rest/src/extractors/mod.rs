//! Custom Axum extractors.

mod validated;

pub use validated::{ValidatedJson, ValidatedJsonRejection};
