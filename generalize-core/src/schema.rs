use serde::{Deserialize, Serialize};
use serde_json::Value;

pub mod core;

pub use self::core::{
    add_type, generalize, generalize_with_config, merge, merge_with_config, type_matches, Schema,
    SchemaType,
};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneralizeConfig {
    /// Whether to treat a top-level array document as a stream of examples
    pub ignore_outer_array: bool,
    /// Delimiter for NDJSON format (None for regular JSON)
    pub delimiter: Option<u8>,
    /// Enable debug output. When `true`, prints type widening and property discovery
    /// decisions to stderr as examples are merged.
    pub debug: bool,
    /// Controls the verbosity level of debug output
    pub verbosity: DebugVerbosity,
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub enum DebugVerbosity {
    /// Show type widening only
    #[default]
    Normal,
    /// Also show property introductions and skipped absent values
    Verbose,
}

impl GeneralizeConfig {
    pub fn debug(&self, args: std::fmt::Arguments) {
        if self.debug {
            anstream::eprintln!("{}", args);
        }
    }

    pub fn debug_verbose(&self, args: std::fmt::Arguments) {
        if self.debug && matches!(self.verbosity, DebugVerbosity::Verbose) {
            anstream::eprintln!("{}", args);
        }
    }
}

impl Default for GeneralizeConfig {
    fn default() -> Self {
        Self {
            ignore_outer_array: true,
            delimiter: None,
            debug: false,
            verbosity: DebugVerbosity::default(),
        }
    }
}

#[macro_export]
macro_rules! debug {
    ($cfg:expr, $($arg:tt)*) => {
        $cfg.debug(format_args!($($arg)*))
    };
}

#[macro_export]
macro_rules! debug_verbose {
    ($cfg:expr, $($arg:tt)*) => {
        $cfg.debug_verbose(format_args!($($arg)*))
    };
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneralizeResult {
    pub schema: Value,
    pub processed_count: usize,
}
