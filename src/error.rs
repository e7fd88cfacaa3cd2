//! Error types for DAP schema decoding
//!
//! Decode failures are reported to the caller (the transport layer) as a
//! structured error identifying the offending field path. This crate never
//! logs, retries, or substitutes defaults for required data.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, DecodeError>;

/// A failure while decoding a wire value into a schema type.
///
/// Every variant carries the path of the offending field relative to the
/// value that was being decoded, e.g. `breakpoints[2].line`. The path is
/// empty when the top-level value itself is at fault.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    /// Wire token does not match any variant of a closed enumeration.
    ///
    /// Open enumerations never produce this error: unrecognized tokens on
    /// an open enumeration are valid values and round-trip unchanged.
    #[error("unknown {type_name} value `{token}` at `{path}`")]
    UnknownEnumValue {
        path: String,
        /// Name of the closed enumeration the token was matched against.
        type_name: &'static str,
        /// The unrecognized wire token, preserved verbatim.
        token: String,
    },

    /// A required field is absent from the wire payload.
    #[error("missing required field `{path}`")]
    MissingRequiredField { path: String },

    /// A wire value is present but has the wrong JSON type for the field.
    #[error("malformed value at `{path}`: expected {expected}")]
    MalformedValue {
        path: String,
        /// The JSON shape the field requires ("string", "integer", ...).
        expected: &'static str,
    },
}

impl DecodeError {
    /// Path of the offending field, relative to the decoded value.
    pub fn path(&self) -> &str {
        match self {
            DecodeError::UnknownEnumValue { path, .. }
            | DecodeError::MissingRequiredField { path }
            | DecodeError::MalformedValue { path, .. } => path,
        }
    }

    /// Prefix the field path with an enclosing field or list slot.
    ///
    /// Used while unwinding out of nested record decodes so the caller sees
    /// the full path (`breakpoint.source.checksums[0].algorithm`).
    pub(crate) fn at(self, parent: &str) -> Self {
        let join = |path: String| {
            if path.is_empty() {
                parent.to_owned()
            } else {
                format!("{parent}.{path}")
            }
        };
        match self {
            DecodeError::UnknownEnumValue {
                path,
                type_name,
                token,
            } => DecodeError::UnknownEnumValue {
                path: join(path),
                type_name,
                token,
            },
            DecodeError::MissingRequiredField { path } => DecodeError::MissingRequiredField {
                path: join(path),
            },
            DecodeError::MalformedValue { path, expected } => DecodeError::MalformedValue {
                path: join(path),
                expected,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_path_prefixing() {
        let err = DecodeError::MissingRequiredField {
            path: "line".to_string(),
        };
        let err = err.at("breakpoints[2]");
        assert_eq!(err.path(), "breakpoints[2].line");
    }

    #[test]
    fn test_empty_path_takes_parent() {
        let err = DecodeError::MalformedValue {
            path: String::new(),
            expected: "string",
        };
        assert_eq!(err.at("reason").path(), "reason");
    }

    #[test]
    fn test_display_includes_path_and_token() {
        let err = DecodeError::UnknownEnumValue {
            path: "accessType".to_string(),
            type_name: "DataBreakpointAccessType",
            token: "bogus".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("accessType"));
        assert!(msg.contains("bogus"));
    }
}
