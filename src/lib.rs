pub use crate::capture::Configuration;
pub use crate::document::{generate_document, DocumentBuilder};
pub use crate::errors::BuildwrapError;
pub use crate::escape::{quote, quote_opt};

pub mod capture;
pub mod cli;
pub mod document;
pub mod errors;
pub mod escape;
