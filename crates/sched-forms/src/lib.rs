pub mod client;
pub mod config;
pub mod error;
pub mod extract;
pub mod parse;
pub mod registry;
pub mod sheet;

pub use client::{FormDocument, FormsClient};
pub use config::{ConfigurationError, EtlConfig};
pub use error::FormsError;
pub use extract::run_extraction;
pub use parse::{ExtractionMode, parse_form_items};
pub use registry::{JC_FORM_IDS, SECONDARY_FORM_IDS};
pub use sheet::SheetsClient;
