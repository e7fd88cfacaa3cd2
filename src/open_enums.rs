//! Open enumerations (extensible string-constant sets)
//!
//! An open enumeration documents a set of commonly used tokens but does not
//! constrain the legal domain: any string is a valid value. Decoding never
//! fails on an unrecognized token, and unrecognized tokens re-encode
//! byte-for-byte, so a client built against an older protocol revision can
//! carry newer values through unchanged.
//!
//! Each type is a newtype over `Cow<'static, str>`: the documented constants
//! are borrowed statics, runtime values are owned strings, and equality is
//! plain string equality either way. The types also derive transparent
//! serde impls so they embed directly in downstream serde structures.

use std::borrow::Cow;
use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::Result;
use crate::wire::{FromWire, ToWire};

// ============================================================
// OUTPUT CATEGORY
// ============================================================

/// Category of an `output` event.
///
/// The protocol documents that an absent category means `console`; applying
/// that default is left to adapter logic, this layer preserves absence.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OutputCategory(Cow<'static, str>);

impl OutputCategory {
    /// Client console output
    pub const CONSOLE: OutputCategory = OutputCategory(Cow::Borrowed("console"));
    /// Output the client should show prominently
    pub const IMPORTANT: OutputCategory = OutputCategory(Cow::Borrowed("important"));
    /// Debuggee stdout
    pub const STDOUT: OutputCategory = OutputCategory(Cow::Borrowed("stdout"));
    /// Debuggee stderr
    pub const STDERR: OutputCategory = OutputCategory(Cow::Borrowed("stderr"));
    /// Telemetry data, not shown to the user
    pub const TELEMETRY: OutputCategory = OutputCategory(Cow::Borrowed("telemetry"));

    /// Tokens documented by the protocol (non-exhaustive by design).
    pub const DOCUMENTED: &'static [OutputCategory] = &[
        Self::CONSOLE,
        Self::IMPORTANT,
        Self::STDOUT,
        Self::STDERR,
        Self::TELEMETRY,
    ];

    pub fn new(value: impl Into<String>) -> Self {
        OutputCategory(Cow::Owned(value.into()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// True if the value is one of the documented constants.
    pub fn is_documented(&self) -> bool {
        Self::DOCUMENTED.iter().any(|c| c == self)
    }
}

impl From<&str> for OutputCategory {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for OutputCategory {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

impl fmt::Display for OutputCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromWire for OutputCategory {
    fn from_wire(value: &Value) -> Result<Self> {
        Ok(Self::new(String::from_wire(value)?))
    }
}

impl ToWire for OutputCategory {
    fn to_wire(&self) -> Value {
        Value::String(self.0.clone().into_owned())
    }
}

// ============================================================
// EVALUATE CONTEXT
// ============================================================

/// Context in which an `evaluate` request runs.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EvaluateContext(Cow<'static, str>);

impl EvaluateContext {
    /// Evaluation of a watch expression
    pub const WATCH: EvaluateContext = EvaluateContext(Cow::Borrowed("watch"));
    /// Evaluation typed into the REPL
    pub const REPL: EvaluateContext = EvaluateContext(Cow::Borrowed("repl"));
    /// Evaluation for a data hover
    pub const HOVER: EvaluateContext = EvaluateContext(Cow::Borrowed("hover"));
    /// Evaluation producing a value suitable for the clipboard
    pub const CLIPBOARD: EvaluateContext = EvaluateContext(Cow::Borrowed("clipboard"));
    /// Evaluation from the variables view
    pub const VARIABLES: EvaluateContext = EvaluateContext(Cow::Borrowed("variables"));

    /// Tokens documented by the protocol (non-exhaustive by design).
    pub const DOCUMENTED: &'static [EvaluateContext] = &[
        Self::WATCH,
        Self::REPL,
        Self::HOVER,
        Self::CLIPBOARD,
        Self::VARIABLES,
    ];

    pub fn new(value: impl Into<String>) -> Self {
        EvaluateContext(Cow::Owned(value.into()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// True if the value is one of the documented constants.
    pub fn is_documented(&self) -> bool {
        Self::DOCUMENTED.iter().any(|c| c == self)
    }
}

impl From<&str> for EvaluateContext {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for EvaluateContext {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

impl fmt::Display for EvaluateContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromWire for EvaluateContext {
    fn from_wire(value: &Value) -> Result<Self> {
        Ok(Self::new(String::from_wire(value)?))
    }
}

impl ToWire for EvaluateContext {
    fn to_wire(&self) -> Value {
        Value::String(self.0.clone().into_owned())
    }
}

// ============================================================
// VARIABLE ATTRIBUTE
// ============================================================

/// Attribute of a variable, part of `VariablePresentationHint`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VariableAttribute(Cow<'static, str>);

impl VariableAttribute {
    /// Static variable
    pub const STATIC: VariableAttribute = VariableAttribute(Cow::Borrowed("static"));
    /// Constant value
    pub const CONSTANT: VariableAttribute = VariableAttribute(Cow::Borrowed("constant"));
    /// Read-only variable
    pub const READ_ONLY: VariableAttribute = VariableAttribute(Cow::Borrowed("readOnly"));
    /// Raw string, client should not apply escaping
    pub const RAW_STRING: VariableAttribute = VariableAttribute(Cow::Borrowed("rawString"));
    /// Variable has an object id
    pub const HAS_OBJECT_ID: VariableAttribute = VariableAttribute(Cow::Borrowed("hasObjectId"));
    /// Variable can have an object id
    pub const CAN_HAVE_OBJECT_ID: VariableAttribute =
        VariableAttribute(Cow::Borrowed("canHaveObjectId"));
    /// Evaluating the variable has side effects
    pub const HAS_SIDE_EFFECTS: VariableAttribute =
        VariableAttribute(Cow::Borrowed("hasSideEffects"));
    /// Variable has a data breakpoint attached
    pub const HAS_DATA_BREAKPOINT: VariableAttribute =
        VariableAttribute(Cow::Borrowed("hasDataBreakpoint"));

    /// Tokens documented by the protocol (non-exhaustive by design).
    pub const DOCUMENTED: &'static [VariableAttribute] = &[
        Self::STATIC,
        Self::CONSTANT,
        Self::READ_ONLY,
        Self::RAW_STRING,
        Self::HAS_OBJECT_ID,
        Self::CAN_HAVE_OBJECT_ID,
        Self::HAS_SIDE_EFFECTS,
        Self::HAS_DATA_BREAKPOINT,
    ];

    pub fn new(value: impl Into<String>) -> Self {
        VariableAttribute(Cow::Owned(value.into()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// True if the value is one of the documented constants.
    pub fn is_documented(&self) -> bool {
        Self::DOCUMENTED.iter().any(|c| c == self)
    }
}

impl From<&str> for VariableAttribute {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for VariableAttribute {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

impl fmt::Display for VariableAttribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromWire for VariableAttribute {
    fn from_wire(value: &Value) -> Result<Self> {
        Ok(Self::new(String::from_wire(value)?))
    }
}

impl ToWire for VariableAttribute {
    fn to_wire(&self) -> Value {
        Value::String(self.0.clone().into_owned())
    }
}

// ============================================================
// VARIABLE KIND
// ============================================================

/// Kind of a variable, part of `VariablePresentationHint`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VariableKind(Cow<'static, str>);

impl VariableKind {
    pub const PROPERTY: VariableKind = VariableKind(Cow::Borrowed("property"));
    pub const METHOD: VariableKind = VariableKind(Cow::Borrowed("method"));
    pub const CLASS: VariableKind = VariableKind(Cow::Borrowed("class"));
    pub const DATA: VariableKind = VariableKind(Cow::Borrowed("data"));
    pub const EVENT: VariableKind = VariableKind(Cow::Borrowed("event"));
    pub const BASE_CLASS: VariableKind = VariableKind(Cow::Borrowed("baseClass"));
    pub const INNER_CLASS: VariableKind = VariableKind(Cow::Borrowed("innerClass"));
    pub const INTERFACE: VariableKind = VariableKind(Cow::Borrowed("interface"));
    pub const MOST_DERIVED_CLASS: VariableKind = VariableKind(Cow::Borrowed("mostDerivedClass"));
    pub const VIRTUAL: VariableKind = VariableKind(Cow::Borrowed("virtual"));
    pub const DATA_BREAKPOINT: VariableKind = VariableKind(Cow::Borrowed("dataBreakpoint"));

    /// Tokens documented by the protocol (non-exhaustive by design).
    pub const DOCUMENTED: &'static [VariableKind] = &[
        Self::PROPERTY,
        Self::METHOD,
        Self::CLASS,
        Self::DATA,
        Self::EVENT,
        Self::BASE_CLASS,
        Self::INNER_CLASS,
        Self::INTERFACE,
        Self::MOST_DERIVED_CLASS,
        Self::VIRTUAL,
        Self::DATA_BREAKPOINT,
    ];

    pub fn new(value: impl Into<String>) -> Self {
        VariableKind(Cow::Owned(value.into()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// True if the value is one of the documented constants.
    pub fn is_documented(&self) -> bool {
        Self::DOCUMENTED.iter().any(|c| c == self)
    }
}

impl From<&str> for VariableKind {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for VariableKind {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

impl fmt::Display for VariableKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromWire for VariableKind {
    fn from_wire(value: &Value) -> Result<Self> {
        Ok(Self::new(String::from_wire(value)?))
    }
}

impl ToWire for VariableKind {
    fn to_wire(&self) -> Value {
        Value::String(self.0.clone().into_owned())
    }
}

// ============================================================
// BREAKPOINT EVENT REASON
// ============================================================

/// Reason of a `breakpoint` event.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BreakpointEventReason(Cow<'static, str>);

impl BreakpointEventReason {
    /// An existing breakpoint changed
    pub const CHANGED: BreakpointEventReason = BreakpointEventReason(Cow::Borrowed("changed"));
    /// A breakpoint was created
    pub const NEW: BreakpointEventReason = BreakpointEventReason(Cow::Borrowed("new"));
    /// A breakpoint was removed
    pub const REMOVED: BreakpointEventReason = BreakpointEventReason(Cow::Borrowed("removed"));

    /// Tokens documented by the protocol (non-exhaustive by design).
    pub const DOCUMENTED: &'static [BreakpointEventReason] =
        &[Self::CHANGED, Self::NEW, Self::REMOVED];

    pub fn new(value: impl Into<String>) -> Self {
        BreakpointEventReason(Cow::Owned(value.into()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// True if the value is one of the documented constants.
    pub fn is_documented(&self) -> bool {
        Self::DOCUMENTED.iter().any(|c| c == self)
    }
}

impl From<&str> for BreakpointEventReason {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for BreakpointEventReason {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

impl fmt::Display for BreakpointEventReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromWire for BreakpointEventReason {
    fn from_wire(value: &Value) -> Result<Self> {
        Ok(Self::new(String::from_wire(value)?))
    }
}

impl ToWire for BreakpointEventReason {
    fn to_wire(&self) -> Value {
        Value::String(self.0.clone().into_owned())
    }
}

// ============================================================
// THREAD EVENT REASON
// ============================================================

/// Reason of a `thread` event.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ThreadEventReason(Cow<'static, str>);

impl ThreadEventReason {
    /// A thread started
    pub const STARTED: ThreadEventReason = ThreadEventReason(Cow::Borrowed("started"));
    /// A thread exited
    pub const EXITED: ThreadEventReason = ThreadEventReason(Cow::Borrowed("exited"));

    /// Tokens documented by the protocol (non-exhaustive by design).
    pub const DOCUMENTED: &'static [ThreadEventReason] = &[Self::STARTED, Self::EXITED];

    pub fn new(value: impl Into<String>) -> Self {
        ThreadEventReason(Cow::Owned(value.into()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// True if the value is one of the documented constants.
    pub fn is_documented(&self) -> bool {
        Self::DOCUMENTED.iter().any(|c| c == self)
    }
}

impl From<&str> for ThreadEventReason {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for ThreadEventReason {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

impl fmt::Display for ThreadEventReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromWire for ThreadEventReason {
    fn from_wire(value: &Value) -> Result<Self> {
        Ok(Self::new(String::from_wire(value)?))
    }
}

impl ToWire for ThreadEventReason {
    fn to_wire(&self) -> Value {
        Value::String(self.0.clone().into_owned())
    }
}

// ============================================================
// PATH FORMAT
// ============================================================

/// Path format negotiated in the `initialize` request.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PathFormat(Cow<'static, str>);

impl PathFormat {
    /// Native filesystem paths
    pub const PATH: PathFormat = PathFormat(Cow::Borrowed("path"));
    /// URIs
    pub const URI: PathFormat = PathFormat(Cow::Borrowed("uri"));

    /// Tokens documented by the protocol (non-exhaustive by design).
    pub const DOCUMENTED: &'static [PathFormat] = &[Self::PATH, Self::URI];

    pub fn new(value: impl Into<String>) -> Self {
        PathFormat(Cow::Owned(value.into()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// True if the value is one of the documented constants.
    pub fn is_documented(&self) -> bool {
        Self::DOCUMENTED.iter().any(|c| c == self)
    }
}

impl From<&str> for PathFormat {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for PathFormat {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

impl fmt::Display for PathFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromWire for PathFormat {
    fn from_wire(value: &Value) -> Result<Self> {
        Ok(Self::new(String::from_wire(value)?))
    }
}

impl ToWire for PathFormat {
    fn to_wire(&self) -> Value {
        Value::String(self.0.clone().into_owned())
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_unrecognized_token_round_trips() {
        let value = json!("customWatchPanel");
        let decoded = EvaluateContext::from_wire(&value).unwrap();
        assert!(!decoded.is_documented());
        assert_eq!(decoded.as_str(), "customWatchPanel");
        assert_eq!(decoded.to_wire(), value);
    }

    #[test]
    fn test_constant_equals_runtime_value() {
        // A borrowed constant and an owned runtime string compare equal:
        // equality is string equality, not representation equality.
        assert_eq!(OutputCategory::STDOUT, OutputCategory::new("stdout"));
        assert_eq!(
            VariableAttribute::HAS_OBJECT_ID,
            VariableAttribute::from("hasObjectId")
        );
    }

    #[test]
    fn test_documented_constants_are_distinct() {
        fn assert_distinct<T: PartialEq + std::fmt::Debug>(constants: &[T]) {
            for (i, a) in constants.iter().enumerate() {
                for b in &constants[i + 1..] {
                    assert_ne!(a, b);
                }
            }
        }
        assert_distinct(OutputCategory::DOCUMENTED);
        assert_distinct(EvaluateContext::DOCUMENTED);
        assert_distinct(VariableAttribute::DOCUMENTED);
        assert_distinct(VariableKind::DOCUMENTED);
        assert_distinct(BreakpointEventReason::DOCUMENTED);
        assert_distinct(ThreadEventReason::DOCUMENTED);
        assert_distinct(PathFormat::DOCUMENTED);
    }

    #[test]
    fn test_serde_transparent() {
        let json = serde_json::to_string(&EvaluateContext::REPL).unwrap();
        assert_eq!(json, r#""repl""#);
        let back: EvaluateContext = serde_json::from_str(&json).unwrap();
        assert_eq!(back, EvaluateContext::REPL);
    }

    #[test]
    fn test_non_string_is_malformed() {
        let err = OutputCategory::from_wire(&json!(true)).err().unwrap();
        assert!(matches!(
            err,
            crate::error::DecodeError::MalformedValue { expected: "string", .. }
        ));
    }
}
