pub mod dates;
pub mod error;
pub mod extractors;
pub mod validation;
