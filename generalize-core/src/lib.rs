pub mod error;
mod ingest;
pub mod schema;
pub mod value;

// Re-export commonly used items
pub use error::{GeneralizeError, Result};
pub use ingest::generalize_from_strings;
pub use schema::{generalize, merge, GeneralizeConfig, GeneralizeResult, Schema, SchemaType};
pub use value::PrimitiveType;

/// Helper function to generalize a collection of JSON strings into one schema
pub fn generalize_json(
    json_strings: &[String],
    config: Option<GeneralizeConfig>,
) -> Result<GeneralizeResult> {
    generalize_from_strings(json_strings, config.unwrap_or_default())
}

/// Create a default generalization configuration
pub fn default_config() -> GeneralizeConfig {
    GeneralizeConfig::default()
}
