//! Closed enumerations
//!
//! Each enumeration here is fully defined by the protocol schema: the token
//! set is exhaustive and decoding an unrecognized token fails with
//! `UnknownEnumValue`. Every variant declares its wire spelling explicitly
//! in the `wire_token`/`from_wire_token` pair, so spellings that simple
//! case conversion cannot reproduce (`"unixTimestampUTC"`, `"readWrite"`,
//! `"function breakpoint"`) live next to the variant they belong to.
//!
//! Within one enumeration the tokens are pairwise distinct; the
//! encode/decode match arms are mirror images of each other.

use serde_json::Value;

use crate::error::Result;
use crate::wire::{decode_closed, ClosedEnum, FromWire, ToWire};

// ============================================================
// COLUMN DESCRIPTOR TYPE
// ============================================================

/// Datatype of a module column (`ColumnDescriptor.type`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColumnDescriptorType {
    /// Plain text column
    String,
    /// Numeric column
    Number,
    /// Boolean column
    Boolean,
    /// Timestamp column, rendered from a UTC unix timestamp
    UnixTimestampUtc,
}

impl ClosedEnum for ColumnDescriptorType {
    const TYPE_NAME: &'static str = "ColumnDescriptorType";
    const VARIANTS: &'static [Self] = &[
        Self::String,
        Self::Number,
        Self::Boolean,
        Self::UnixTimestampUtc,
    ];

    fn wire_token(self) -> &'static str {
        match self {
            Self::String => "string",
            Self::Number => "number",
            Self::Boolean => "boolean",
            Self::UnixTimestampUtc => "unixTimestampUTC",
        }
    }

    fn from_wire_token(token: &str) -> Option<Self> {
        match token {
            "string" => Some(Self::String),
            "number" => Some(Self::Number),
            "boolean" => Some(Self::Boolean),
            "unixTimestampUTC" => Some(Self::UnixTimestampUtc),
            _ => None,
        }
    }
}

impl FromWire for ColumnDescriptorType {
    fn from_wire(value: &Value) -> Result<Self> {
        decode_closed(value)
    }
}

impl ToWire for ColumnDescriptorType {
    fn to_wire(&self) -> Value {
        Value::String(self.wire_token().to_string())
    }
}

// ============================================================
// DATA BREAKPOINT ACCESS TYPE
// ============================================================

/// Access kind a data breakpoint triggers on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DataBreakpointAccessType {
    /// Break on read access
    Read,
    /// Break on write access
    Write,
    /// Break on read or write access
    ReadWrite,
}

impl ClosedEnum for DataBreakpointAccessType {
    const TYPE_NAME: &'static str = "DataBreakpointAccessType";
    const VARIANTS: &'static [Self] = &[Self::Read, Self::Write, Self::ReadWrite];

    fn wire_token(self) -> &'static str {
        match self {
            Self::Read => "read",
            Self::Write => "write",
            Self::ReadWrite => "readWrite",
        }
    }

    fn from_wire_token(token: &str) -> Option<Self> {
        match token {
            "read" => Some(Self::Read),
            "write" => Some(Self::Write),
            "readWrite" => Some(Self::ReadWrite),
            _ => None,
        }
    }
}

impl FromWire for DataBreakpointAccessType {
    fn from_wire(value: &Value) -> Result<Self> {
        decode_closed(value)
    }
}

impl ToWire for DataBreakpointAccessType {
    fn to_wire(&self) -> Value {
        Value::String(self.wire_token().to_string())
    }
}

// ============================================================
// STOPPED REASON
// ============================================================

/// Why execution stopped (`stopped` event).
///
/// Several tokens contain a literal space; the spelling is declared per
/// variant and never derived from the variant name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StoppedReason {
    /// A step request completed
    Step,
    /// A source breakpoint was hit
    Breakpoint,
    /// An exception was thrown
    Exception,
    /// A pause request completed
    Pause,
    /// Stopped on program entry
    Entry,
    /// A goto request completed
    Goto,
    /// A function breakpoint was hit
    FunctionBreakpoint,
    /// A data breakpoint was hit
    DataBreakpoint,
    /// An instruction breakpoint was hit
    InstructionBreakpoint,
}

impl ClosedEnum for StoppedReason {
    const TYPE_NAME: &'static str = "StoppedReason";
    const VARIANTS: &'static [Self] = &[
        Self::Step,
        Self::Breakpoint,
        Self::Exception,
        Self::Pause,
        Self::Entry,
        Self::Goto,
        Self::FunctionBreakpoint,
        Self::DataBreakpoint,
        Self::InstructionBreakpoint,
    ];

    fn wire_token(self) -> &'static str {
        match self {
            Self::Step => "step",
            Self::Breakpoint => "breakpoint",
            Self::Exception => "exception",
            Self::Pause => "pause",
            Self::Entry => "entry",
            Self::Goto => "goto",
            Self::FunctionBreakpoint => "function breakpoint",
            Self::DataBreakpoint => "data breakpoint",
            Self::InstructionBreakpoint => "instruction breakpoint",
        }
    }

    fn from_wire_token(token: &str) -> Option<Self> {
        match token {
            "step" => Some(Self::Step),
            "breakpoint" => Some(Self::Breakpoint),
            "exception" => Some(Self::Exception),
            "pause" => Some(Self::Pause),
            "entry" => Some(Self::Entry),
            "goto" => Some(Self::Goto),
            "function breakpoint" => Some(Self::FunctionBreakpoint),
            "data breakpoint" => Some(Self::DataBreakpoint),
            "instruction breakpoint" => Some(Self::InstructionBreakpoint),
            _ => None,
        }
    }
}

impl FromWire for StoppedReason {
    fn from_wire(value: &Value) -> Result<Self> {
        decode_closed(value)
    }
}

impl ToWire for StoppedReason {
    fn to_wire(&self) -> Value {
        Value::String(self.wire_token().to_string())
    }
}

// ============================================================
// STEPPING GRANULARITY
// ============================================================

/// Granularity of step requests (`next`, `stepIn`, `stepOut`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SteppingGranularity {
    /// Step one statement
    Statement,
    /// Step one source line
    Line,
    /// Step one machine instruction
    Instruction,
}

impl ClosedEnum for SteppingGranularity {
    const TYPE_NAME: &'static str = "SteppingGranularity";
    const VARIANTS: &'static [Self] = &[Self::Statement, Self::Line, Self::Instruction];

    fn wire_token(self) -> &'static str {
        match self {
            Self::Statement => "statement",
            Self::Line => "line",
            Self::Instruction => "instruction",
        }
    }

    fn from_wire_token(token: &str) -> Option<Self> {
        match token {
            "statement" => Some(Self::Statement),
            "line" => Some(Self::Line),
            "instruction" => Some(Self::Instruction),
            _ => None,
        }
    }
}

impl FromWire for SteppingGranularity {
    fn from_wire(value: &Value) -> Result<Self> {
        decode_closed(value)
    }
}

impl ToWire for SteppingGranularity {
    fn to_wire(&self) -> Value {
        Value::String(self.wire_token().to_string())
    }
}

// ============================================================
// CHECKSUM ALGORITHM
// ============================================================

/// Checksum algorithm of a `Checksum` record.
///
/// The hash tokens are all-caps acronyms on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChecksumAlgorithm {
    Md5,
    Sha1,
    Sha256,
    /// File modification timestamp instead of a content hash
    Timestamp,
}

impl ClosedEnum for ChecksumAlgorithm {
    const TYPE_NAME: &'static str = "ChecksumAlgorithm";
    const VARIANTS: &'static [Self] = &[Self::Md5, Self::Sha1, Self::Sha256, Self::Timestamp];

    fn wire_token(self) -> &'static str {
        match self {
            Self::Md5 => "MD5",
            Self::Sha1 => "SHA1",
            Self::Sha256 => "SHA256",
            Self::Timestamp => "timestamp",
        }
    }

    fn from_wire_token(token: &str) -> Option<Self> {
        match token {
            "MD5" => Some(Self::Md5),
            "SHA1" => Some(Self::Sha1),
            "SHA256" => Some(Self::Sha256),
            "timestamp" => Some(Self::Timestamp),
            _ => None,
        }
    }
}

impl FromWire for ChecksumAlgorithm {
    fn from_wire(value: &Value) -> Result<Self> {
        decode_closed(value)
    }
}

impl ToWire for ChecksumAlgorithm {
    fn to_wire(&self) -> Value {
        Value::String(self.wire_token().to_string())
    }
}

// ============================================================
// SOURCE PRESENTATION HINT
// ============================================================

/// How a client should render a `Source` in the UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SourcePresentationHint {
    Normal,
    Emphasize,
    Deemphasize,
}

impl ClosedEnum for SourcePresentationHint {
    const TYPE_NAME: &'static str = "SourcePresentationHint";
    const VARIANTS: &'static [Self] = &[Self::Normal, Self::Emphasize, Self::Deemphasize];

    fn wire_token(self) -> &'static str {
        match self {
            Self::Normal => "normal",
            Self::Emphasize => "emphasize",
            Self::Deemphasize => "deemphasize",
        }
    }

    fn from_wire_token(token: &str) -> Option<Self> {
        match token {
            "normal" => Some(Self::Normal),
            "emphasize" => Some(Self::Emphasize),
            "deemphasize" => Some(Self::Deemphasize),
            _ => None,
        }
    }
}

impl FromWire for SourcePresentationHint {
    fn from_wire(value: &Value) -> Result<Self> {
        decode_closed(value)
    }
}

impl ToWire for SourcePresentationHint {
    fn to_wire(&self) -> Value {
        Value::String(self.wire_token().to_string())
    }
}

// ============================================================
// EXCEPTION BREAK MODE
// ============================================================

/// When the debugger should break on a thrown exception.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExceptionBreakMode {
    /// Never break
    Never,
    /// Break on every throw
    Always,
    /// Break on exceptions not handled by user code
    Unhandled,
    /// Break on exceptions unhandled anywhere
    UserUnhandled,
}

impl ClosedEnum for ExceptionBreakMode {
    const TYPE_NAME: &'static str = "ExceptionBreakMode";
    const VARIANTS: &'static [Self] = &[
        Self::Never,
        Self::Always,
        Self::Unhandled,
        Self::UserUnhandled,
    ];

    fn wire_token(self) -> &'static str {
        match self {
            Self::Never => "never",
            Self::Always => "always",
            Self::Unhandled => "unhandled",
            Self::UserUnhandled => "userUnhandled",
        }
    }

    fn from_wire_token(token: &str) -> Option<Self> {
        match token {
            "never" => Some(Self::Never),
            "always" => Some(Self::Always),
            "unhandled" => Some(Self::Unhandled),
            "userUnhandled" => Some(Self::UserUnhandled),
            _ => None,
        }
    }
}

impl FromWire for ExceptionBreakMode {
    fn from_wire(value: &Value) -> Result<Self> {
        decode_closed(value)
    }
}

impl ToWire for ExceptionBreakMode {
    fn to_wire(&self) -> Value {
        Value::String(self.wire_token().to_string())
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::error::DecodeError;

    fn assert_bijection<T: ClosedEnum>() {
        for (i, &a) in T::VARIANTS.iter().enumerate() {
            // encode -> decode round trip
            assert_eq!(T::from_wire_token(a.wire_token()), Some(a));
            // pairwise distinct tokens
            for &b in &T::VARIANTS[i + 1..] {
                assert_ne!(a.wire_token(), b.wire_token(), "{}", T::TYPE_NAME);
            }
        }
    }

    #[test]
    fn test_all_enumerations_are_bijective() {
        assert_bijection::<ColumnDescriptorType>();
        assert_bijection::<DataBreakpointAccessType>();
        assert_bijection::<StoppedReason>();
        assert_bijection::<SteppingGranularity>();
        assert_bijection::<ChecksumAlgorithm>();
        assert_bijection::<SourcePresentationHint>();
        assert_bijection::<ExceptionBreakMode>();
    }

    #[test]
    fn test_unix_timestamp_utc_spelling() {
        let value = json!("unixTimestampUTC");
        let decoded = ColumnDescriptorType::from_wire(&value).unwrap();
        assert_eq!(decoded, ColumnDescriptorType::UnixTimestampUtc);
        assert_eq!(decoded.to_wire(), value);
    }

    #[test]
    fn test_read_write_spelling() {
        let decoded = DataBreakpointAccessType::from_wire(&json!("readWrite")).unwrap();
        assert_eq!(decoded, DataBreakpointAccessType::ReadWrite);
        assert_eq!(decoded.to_wire(), json!("readWrite"));
    }

    #[test]
    fn test_tokens_with_spaces() {
        let decoded = StoppedReason::from_wire(&json!("function breakpoint")).unwrap();
        assert_eq!(decoded, StoppedReason::FunctionBreakpoint);
        let decoded = StoppedReason::from_wire(&json!("data breakpoint")).unwrap();
        assert_eq!(decoded, StoppedReason::DataBreakpoint);
    }

    #[test]
    fn test_unknown_token_is_a_decode_failure() {
        let err = ColumnDescriptorType::from_wire(&json!("bogus")).err().unwrap();
        assert_eq!(
            err,
            DecodeError::UnknownEnumValue {
                path: String::new(),
                type_name: "ColumnDescriptorType",
                token: "bogus".to_string(),
            }
        );
    }

    #[test]
    fn test_tokens_are_case_sensitive() {
        assert!(ChecksumAlgorithm::from_wire_token("md5").is_none());
        assert!(ChecksumAlgorithm::from_wire_token("MD5").is_some());
    }

    #[test]
    fn test_non_string_token_is_malformed() {
        let err = StoppedReason::from_wire(&json!(3)).err().unwrap();
        assert!(matches!(err, DecodeError::MalformedValue { expected: "string", .. }));
    }
}
