//! Event body types
//!
//! One record per event the adapter emits. Bodies are decoded by the
//! transport layer after it has routed on the event name; this crate only
//! defines the payload shapes.

use serde_json::Value;

use crate::enums::StoppedReason;
use crate::error::Result;
use crate::open_enums::{BreakpointEventReason, OutputCategory, ThreadEventReason};
use crate::types::{Breakpoint, Source};
use crate::wire::{FromWire, ObjectReader, ObjectWriter, ToWire};

// ============================================================
// EXITED EVENT
// ============================================================

/// Body of the `exited` event: the debuggee process finished.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ExitedEventBody {
    /// Exit code of the debuggee
    pub exit_code: i64,
}

impl FromWire for ExitedEventBody {
    fn from_wire(value: &Value) -> Result<Self> {
        let obj = ObjectReader::new(value)?;
        Ok(Self {
            exit_code: obj.required_i64("exitCode")?,
        })
    }
}

impl ToWire for ExitedEventBody {
    fn to_wire(&self) -> Value {
        let mut obj = ObjectWriter::new();
        obj.field("exitCode", self.exit_code);
        obj.finish()
    }
}

// ============================================================
// TERMINATED EVENT
// ============================================================

/// Body of the `terminated` event: debugging ended.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TerminatedEventBody {
    /// Opaque restart payload; handed back verbatim in the next launch or
    /// attach request, so it stays raw JSON here.
    pub restart: Option<Value>,
}

impl FromWire for TerminatedEventBody {
    fn from_wire(value: &Value) -> Result<Self> {
        let obj = ObjectReader::new(value)?;
        Ok(Self {
            restart: obj.optional_value("restart"),
        })
    }
}

impl ToWire for TerminatedEventBody {
    fn to_wire(&self) -> Value {
        let mut obj = ObjectWriter::new();
        obj.optional("restart", self.restart.clone());
        obj.finish()
    }
}

// ============================================================
// STOPPED EVENT
// ============================================================

/// Body of the `stopped` event: execution halted.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct StoppedEventBody {
    /// Why execution stopped
    pub reason: StoppedReason,
    /// Human-readable description shown instead of the reason token
    pub description: Option<String>,
    /// Thread that stopped
    pub thread_id: Option<i64>,
    /// Client should not change focus
    pub preserve_focus_hint: Option<bool>,
    /// Additional text, e.g. the exception name
    pub text: Option<String>,
    /// All threads are stopped, not just `thread_id`
    pub all_threads_stopped: Option<bool>,
    /// Ids of the breakpoints that caused the stop
    pub hit_breakpoint_ids: Option<Vec<i64>>,
}

impl StoppedEventBody {
    pub fn new(reason: StoppedReason) -> Self {
        Self {
            reason,
            description: None,
            thread_id: None,
            preserve_focus_hint: None,
            text: None,
            all_threads_stopped: None,
            hit_breakpoint_ids: None,
        }
    }
}

impl FromWire for StoppedEventBody {
    fn from_wire(value: &Value) -> Result<Self> {
        let obj = ObjectReader::new(value)?;
        Ok(Self {
            reason: obj.required_field("reason")?,
            description: obj.optional_string("description")?,
            thread_id: obj.optional_i64("threadId")?,
            preserve_focus_hint: obj.optional_bool("preserveFocusHint")?,
            text: obj.optional_string("text")?,
            all_threads_stopped: obj.optional_bool("allThreadsStopped")?,
            hit_breakpoint_ids: obj.optional_list("hitBreakpointIds")?,
        })
    }
}

impl ToWire for StoppedEventBody {
    fn to_wire(&self) -> Value {
        let mut obj = ObjectWriter::new();
        obj.encoded("reason", &self.reason);
        obj.optional("description", self.description.clone());
        obj.optional("threadId", self.thread_id);
        obj.optional("preserveFocusHint", self.preserve_focus_hint);
        obj.optional("text", self.text.clone());
        obj.optional("allThreadsStopped", self.all_threads_stopped);
        obj.optional("hitBreakpointIds", self.hit_breakpoint_ids.clone());
        obj.finish()
    }
}

// ============================================================
// CONTINUED EVENT
// ============================================================

/// Body of the `continued` event: execution resumed.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ContinuedEventBody {
    /// Thread that continued
    pub thread_id: i64,
    /// All threads continued, not just `thread_id`
    pub all_threads_continued: Option<bool>,
}

impl FromWire for ContinuedEventBody {
    fn from_wire(value: &Value) -> Result<Self> {
        let obj = ObjectReader::new(value)?;
        Ok(Self {
            thread_id: obj.required_i64("threadId")?,
            all_threads_continued: obj.optional_bool("allThreadsContinued")?,
        })
    }
}

impl ToWire for ContinuedEventBody {
    fn to_wire(&self) -> Value {
        let mut obj = ObjectWriter::new();
        obj.field("threadId", self.thread_id);
        obj.optional("allThreadsContinued", self.all_threads_continued);
        obj.finish()
    }
}

// ============================================================
// OUTPUT EVENT
// ============================================================

/// Body of the `output` event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputEventBody {
    /// Output category; absent means `console` per the protocol docs, and
    /// the default is applied by adapter logic, not here
    pub category: Option<OutputCategory>,
    /// Output text
    pub output: String,
    /// Reference for structured output children
    pub variables_reference: Option<i64>,
    /// Source that produced the output
    pub source: Option<Source>,
    pub line: Option<i64>,
    pub column: Option<i64>,
    /// Additional structured data, kept as raw JSON
    pub data: Option<Value>,
}

impl OutputEventBody {
    pub fn stdout(output: impl Into<String>) -> Self {
        Self {
            category: Some(OutputCategory::STDOUT),
            output: output.into(),
            variables_reference: None,
            source: None,
            line: None,
            column: None,
            data: None,
        }
    }
}

impl FromWire for OutputEventBody {
    fn from_wire(value: &Value) -> Result<Self> {
        let obj = ObjectReader::new(value)?;
        Ok(Self {
            category: obj.optional_field("category")?,
            output: obj.required_string("output")?,
            variables_reference: obj.optional_i64("variablesReference")?,
            source: obj.optional_field("source")?,
            line: obj.optional_i64("line")?,
            column: obj.optional_i64("column")?,
            data: obj.optional_value("data"),
        })
    }
}

impl ToWire for OutputEventBody {
    fn to_wire(&self) -> Value {
        let mut obj = ObjectWriter::new();
        obj.optional_encoded("category", self.category.as_ref());
        obj.field("output", self.output.clone());
        obj.optional("variablesReference", self.variables_reference);
        obj.optional_encoded("source", self.source.as_ref());
        obj.optional("line", self.line);
        obj.optional("column", self.column);
        obj.optional("data", self.data.clone());
        obj.finish()
    }
}

// ============================================================
// BREAKPOINT EVENT
// ============================================================

/// Body of the `breakpoint` event: breakpoint state changed.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BreakpointEventBody {
    pub reason: BreakpointEventReason,
    pub breakpoint: Breakpoint,
}

impl FromWire for BreakpointEventBody {
    fn from_wire(value: &Value) -> Result<Self> {
        let obj = ObjectReader::new(value)?;
        Ok(Self {
            reason: obj.required_field("reason")?,
            breakpoint: obj.required_field("breakpoint")?,
        })
    }
}

impl ToWire for BreakpointEventBody {
    fn to_wire(&self) -> Value {
        let mut obj = ObjectWriter::new();
        obj.encoded("reason", &self.reason);
        obj.encoded("breakpoint", &self.breakpoint);
        obj.finish()
    }
}

// ============================================================
// THREAD EVENT
// ============================================================

/// Body of the `thread` event.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ThreadEventBody {
    pub reason: ThreadEventReason,
    pub thread_id: i64,
}

impl FromWire for ThreadEventBody {
    fn from_wire(value: &Value) -> Result<Self> {
        let obj = ObjectReader::new(value)?;
        Ok(Self {
            reason: obj.required_field("reason")?,
            thread_id: obj.required_i64("threadId")?,
        })
    }
}

impl ToWire for ThreadEventBody {
    fn to_wire(&self) -> Value {
        let mut obj = ObjectWriter::new();
        obj.encoded("reason", &self.reason);
        obj.field("threadId", self.thread_id);
        obj.finish()
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::error::DecodeError;

    #[test]
    fn test_exited_event_round_trip() {
        let body = ExitedEventBody::from_wire(&json!({"exitCode": 42})).unwrap();
        assert_eq!(body.exit_code, 42);
        assert_eq!(body.to_wire(), json!({"exitCode": 42}));
    }

    #[test]
    fn test_exited_event_requires_exit_code() {
        let err = ExitedEventBody::from_wire(&json!({})).err().unwrap();
        assert_eq!(
            err,
            DecodeError::MissingRequiredField {
                path: "exitCode".to_string(),
            }
        );
    }

    #[test]
    fn test_stopped_event_with_space_token() {
        let wire = json!({
            "reason": "function breakpoint",
            "threadId": 1,
            "hitBreakpointIds": [3, 5]
        });
        let body = StoppedEventBody::from_wire(&wire).unwrap();
        assert_eq!(body.reason, StoppedReason::FunctionBreakpoint);
        assert_eq!(body.hit_breakpoint_ids, Some(vec![3, 5]));
        assert_eq!(StoppedEventBody::from_wire(&body.to_wire()).unwrap(), body);
    }

    #[test]
    fn test_stopped_event_bogus_reason() {
        let err = StoppedEventBody::from_wire(&json!({"reason": "bogus"}))
            .err()
            .unwrap();
        assert_eq!(
            err,
            DecodeError::UnknownEnumValue {
                path: "reason".to_string(),
                type_name: "StoppedReason",
                token: "bogus".to_string(),
            }
        );
    }

    #[test]
    fn test_output_event_unknown_category_round_trips() {
        let wire = json!({"category": "progress", "output": "50%\n"});
        let body = OutputEventBody::from_wire(&wire).unwrap();
        let category = body.category.clone().unwrap();
        assert!(!category.is_documented());
        assert_eq!(body.to_wire(), wire);
    }

    #[test]
    fn test_output_event_extra_members_ignored() {
        let wire = json!({
            "output": "hello\n",
            "futureField": {"nested": true}
        });
        let body = OutputEventBody::from_wire(&wire).unwrap();
        assert_eq!(body, OutputEventBody {
            category: None,
            output: "hello\n".to_string(),
            variables_reference: None,
            source: None,
            line: None,
            column: None,
            data: None,
        });
    }

    #[test]
    fn test_terminated_event_restart_passthrough() {
        let wire = json!({"restart": {"port": 9229, "token": "xyz"}});
        let body = TerminatedEventBody::from_wire(&wire).unwrap();
        assert_eq!(body.to_wire(), wire);
    }

    #[test]
    fn test_breakpoint_event_nested_error_path() {
        let wire = json!({
            "reason": "changed",
            "breakpoint": {"id": 2}
        });
        let err = BreakpointEventBody::from_wire(&wire).err().unwrap();
        assert_eq!(err.path(), "breakpoint.verified");
    }

    #[test]
    fn test_thread_event_round_trip() {
        let body = ThreadEventBody {
            reason: ThreadEventReason::STARTED,
            thread_id: 4,
        };
        let wire = body.to_wire();
        assert_eq!(wire, json!({"reason": "started", "threadId": 4}));
        assert_eq!(ThreadEventBody::from_wire(&wire).unwrap(), body);
    }
}
