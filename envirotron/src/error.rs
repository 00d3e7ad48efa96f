//! Error types for environment variable overrides

/// Errors that can occur while overriding a struct from the environment.
///
/// The first error aborts the pass. Fields handled before the failing one keep
/// their overridden values; the failing field and every field after it keep
/// the values they had before the call.
#[derive(Debug, thiserror::Error)]
pub enum EnvError {
    /// Failed to convert an environment variable value into the field's type.
    ///
    /// Occurs for both built-in conversions and custom [`ParseEnv`](crate::ParseEnv)
    /// implementations.
    #[error("Failed to parse environment variable '{name}' as {type_name}: {message}")]
    Parse {
        /// Name of the environment variable being parsed
        name: String,
        /// Fully qualified type name that parsing was attempted for
        type_name: String,
        /// Error message from the conversion
        message: String,
    },

    /// Environment variable is set but its value is not valid UTF-8.
    #[error("Environment variable '{name}' is not valid unicode")]
    NotUnicode {
        /// Name of the offending environment variable
        name: String,
    },

    /// Failed to read from a file specified by a `{VAR}_FILE` environment variable.
    #[error("Failed to read file '{path}' for environment variable '{name}': {source}")]
    FileRead {
        /// Name of the `{VAR}_FILE` environment variable (e.g., "API_KEY_FILE")
        name: String,
        /// Path to the file that failed to be read
        path: String,
        /// Underlying I/O error that caused the failure
        source: std::io::Error,
    },
}

impl EnvError {
    /// Create a parse error for a value that did not convert into `T`
    pub fn parse_error<T: ?Sized>(name: impl Into<String>, message: impl std::fmt::Display) -> Self {
        Self::Parse {
            name: name.into(),
            type_name: std::any::type_name::<T>().to_string(),
            message: message.to_string(),
        }
    }

    /// Create an error for a variable holding non-unicode data
    pub fn not_unicode(name: impl Into<String>) -> Self {
        Self::NotUnicode { name: name.into() }
    }
}

/// A value that is not part of the boolean vocabulary.
///
/// Accepted spellings (any letter casing) are `y`, `yes`, `true`, `1` and
/// `n`, `no`, `false`, `0`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("expected one of y, yes, true, 1, n, no, false, 0 (any case), got '{value}'")]
pub struct ParseBoolError {
    /// The rejected raw value
    pub value: String,
}
