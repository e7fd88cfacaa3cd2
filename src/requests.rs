//! Request argument and response body types
//!
//! Only per-field type and presence are enforced here; cross-field
//! validation (e.g. "a source needs a path or a reference") belongs to the
//! adapter logic consuming these values.

use serde_json::Value;

use crate::enums::SteppingGranularity;
use crate::error::Result;
use crate::open_enums::{EvaluateContext, PathFormat};
use crate::types::{Breakpoint, DataBreakpoint, Source, SourceBreakpoint, VariablePresentationHint};
use crate::wire::{FromWire, ObjectReader, ObjectWriter, ToWire};

// ============================================================
// INITIALIZE
// ============================================================

/// Arguments of the `initialize` request.
///
/// `adapterID` and `clientID` keep their literal all-caps-suffix spelling on
/// the wire; every other field is plain lowerCamelCase.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct InitializeRequestArguments {
    /// Id of the client tool (wire name `clientID`)
    pub client_id: Option<String>,
    /// Human-readable client name
    pub client_name: Option<String>,
    /// Id of the debug adapter to select (wire name `adapterID`)
    pub adapter_id: String,
    /// ISO-639 locale of the client
    pub locale: Option<String>,
    /// Line numbers are 1-based (defaults to true on the wire)
    pub lines_start_at1: Option<bool>,
    /// Column numbers are 1-based (defaults to true on the wire)
    pub columns_start_at1: Option<bool>,
    /// Path format the client speaks
    pub path_format: Option<PathFormat>,
}

impl InitializeRequestArguments {
    pub fn new(adapter_id: impl Into<String>) -> Self {
        Self {
            client_id: None,
            client_name: None,
            adapter_id: adapter_id.into(),
            locale: None,
            lines_start_at1: None,
            columns_start_at1: None,
            path_format: None,
        }
    }
}

impl FromWire for InitializeRequestArguments {
    fn from_wire(value: &Value) -> Result<Self> {
        let obj = ObjectReader::new(value)?;
        Ok(Self {
            client_id: obj.optional_string("clientID")?,
            client_name: obj.optional_string("clientName")?,
            adapter_id: obj.required_string("adapterID")?,
            locale: obj.optional_string("locale")?,
            lines_start_at1: obj.optional_bool("linesStartAt1")?,
            columns_start_at1: obj.optional_bool("columnsStartAt1")?,
            path_format: obj.optional_field("pathFormat")?,
        })
    }
}

impl ToWire for InitializeRequestArguments {
    fn to_wire(&self) -> Value {
        let mut obj = ObjectWriter::new();
        obj.optional("clientID", self.client_id.clone());
        obj.optional("clientName", self.client_name.clone());
        obj.field("adapterID", self.adapter_id.clone());
        obj.optional("locale", self.locale.clone());
        obj.optional("linesStartAt1", self.lines_start_at1);
        obj.optional("columnsStartAt1", self.columns_start_at1);
        obj.optional_encoded("pathFormat", self.path_format.as_ref());
        obj.finish()
    }
}

// ============================================================
// SET BREAKPOINTS
// ============================================================

/// Arguments of the `setBreakpoints` request.
///
/// Replaces all breakpoints of the given source; an absent breakpoint list
/// clears them.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SetBreakpointsArguments {
    pub source: Source,
    pub breakpoints: Option<Vec<SourceBreakpoint>>,
    /// Source was modified since the breakpoints were set
    pub source_modified: Option<bool>,
}

impl FromWire for SetBreakpointsArguments {
    fn from_wire(value: &Value) -> Result<Self> {
        let obj = ObjectReader::new(value)?;
        Ok(Self {
            source: obj.required_field("source")?,
            breakpoints: obj.optional_list("breakpoints")?,
            source_modified: obj.optional_bool("sourceModified")?,
        })
    }
}

impl ToWire for SetBreakpointsArguments {
    fn to_wire(&self) -> Value {
        let mut obj = ObjectWriter::new();
        obj.encoded("source", &self.source);
        obj.optional_list("breakpoints", self.breakpoints.as_deref());
        obj.optional("sourceModified", self.source_modified);
        obj.finish()
    }
}

/// Body of the `setBreakpoints` response.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SetBreakpointsResponseBody {
    /// Adapter state for each requested breakpoint, in request order
    pub breakpoints: Vec<Breakpoint>,
}

impl FromWire for SetBreakpointsResponseBody {
    fn from_wire(value: &Value) -> Result<Self> {
        let obj = ObjectReader::new(value)?;
        Ok(Self {
            breakpoints: obj.required_list("breakpoints")?,
        })
    }
}

impl ToWire for SetBreakpointsResponseBody {
    fn to_wire(&self) -> Value {
        let mut obj = ObjectWriter::new();
        obj.list("breakpoints", &self.breakpoints);
        obj.finish()
    }
}

// ============================================================
// SET DATA BREAKPOINTS
// ============================================================

/// Arguments of the `setDataBreakpoints` request.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SetDataBreakpointsArguments {
    /// Replaces all existing data breakpoints; empty clears them
    pub breakpoints: Vec<DataBreakpoint>,
}

impl FromWire for SetDataBreakpointsArguments {
    fn from_wire(value: &Value) -> Result<Self> {
        let obj = ObjectReader::new(value)?;
        Ok(Self {
            breakpoints: obj.required_list("breakpoints")?,
        })
    }
}

impl ToWire for SetDataBreakpointsArguments {
    fn to_wire(&self) -> Value {
        let mut obj = ObjectWriter::new();
        obj.list("breakpoints", &self.breakpoints);
        obj.finish()
    }
}

// ============================================================
// CONTINUE / NEXT
// ============================================================

/// Arguments of the `continue` request.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ContinueArguments {
    pub thread_id: i64,
    /// Resume only `thread_id` instead of all threads
    pub single_thread: Option<bool>,
}

impl FromWire for ContinueArguments {
    fn from_wire(value: &Value) -> Result<Self> {
        let obj = ObjectReader::new(value)?;
        Ok(Self {
            thread_id: obj.required_i64("threadId")?,
            single_thread: obj.optional_bool("singleThread")?,
        })
    }
}

impl ToWire for ContinueArguments {
    fn to_wire(&self) -> Value {
        let mut obj = ObjectWriter::new();
        obj.field("threadId", self.thread_id);
        obj.optional("singleThread", self.single_thread);
        obj.finish()
    }
}

/// Arguments of the `next` (step over) request.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NextArguments {
    pub thread_id: i64,
    pub single_thread: Option<bool>,
    /// Step granularity; absence means statement-level per the protocol docs
    pub granularity: Option<SteppingGranularity>,
}

impl FromWire for NextArguments {
    fn from_wire(value: &Value) -> Result<Self> {
        let obj = ObjectReader::new(value)?;
        Ok(Self {
            thread_id: obj.required_i64("threadId")?,
            single_thread: obj.optional_bool("singleThread")?,
            granularity: obj.optional_field("granularity")?,
        })
    }
}

impl ToWire for NextArguments {
    fn to_wire(&self) -> Value {
        let mut obj = ObjectWriter::new();
        obj.field("threadId", self.thread_id);
        obj.optional("singleThread", self.single_thread);
        obj.optional_encoded("granularity", self.granularity.as_ref());
        obj.finish()
    }
}

// ============================================================
// EVALUATE
// ============================================================

/// Arguments of the `evaluate` request.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EvaluateArguments {
    /// Expression to evaluate
    pub expression: String,
    /// Frame the expression is evaluated in; absent means global scope
    pub frame_id: Option<i64>,
    /// Where the evaluation request originated
    pub context: Option<EvaluateContext>,
}

impl EvaluateArguments {
    pub fn new(expression: impl Into<String>) -> Self {
        Self {
            expression: expression.into(),
            frame_id: None,
            context: None,
        }
    }

    pub fn in_context(mut self, context: EvaluateContext) -> Self {
        self.context = Some(context);
        self
    }
}

impl FromWire for EvaluateArguments {
    fn from_wire(value: &Value) -> Result<Self> {
        let obj = ObjectReader::new(value)?;
        Ok(Self {
            expression: obj.required_string("expression")?,
            frame_id: obj.optional_i64("frameId")?,
            context: obj.optional_field("context")?,
        })
    }
}

impl ToWire for EvaluateArguments {
    fn to_wire(&self) -> Value {
        let mut obj = ObjectWriter::new();
        obj.field("expression", self.expression.clone());
        obj.optional("frameId", self.frame_id);
        obj.optional_encoded("context", self.context.as_ref());
        obj.finish()
    }
}

/// Body of the `evaluate` response.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EvaluateResponseBody {
    /// Rendered result value
    pub result: String,
    /// Type of the result (wire name `type`)
    pub value_type: Option<String>,
    /// Rendering hints for the result
    pub presentation_hint: Option<VariablePresentationHint>,
    /// Non-zero when the result has structured children
    pub variables_reference: i64,
}

impl FromWire for EvaluateResponseBody {
    fn from_wire(value: &Value) -> Result<Self> {
        let obj = ObjectReader::new(value)?;
        Ok(Self {
            result: obj.required_string("result")?,
            value_type: obj.optional_string("type")?,
            presentation_hint: obj.optional_field("presentationHint")?,
            variables_reference: obj.required_i64("variablesReference")?,
        })
    }
}

impl ToWire for EvaluateResponseBody {
    fn to_wire(&self) -> Value {
        let mut obj = ObjectWriter::new();
        obj.field("result", self.result.clone());
        obj.optional("type", self.value_type.clone());
        obj.optional_encoded("presentationHint", self.presentation_hint.as_ref());
        obj.field("variablesReference", self.variables_reference);
        obj.finish()
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::error::DecodeError;

    #[test]
    fn test_initialize_wire_names() {
        let args = InitializeRequestArguments {
            client_id: Some("vscode".to_string()),
            path_format: Some(PathFormat::PATH),
            ..InitializeRequestArguments::new("debugpy")
        };

        let wire = args.to_wire();
        assert_eq!(wire["adapterID"], json!("debugpy"));
        assert_eq!(wire["clientID"], json!("vscode"));
        assert_eq!(wire["pathFormat"], json!("path"));
        assert_eq!(InitializeRequestArguments::from_wire(&wire).unwrap(), args);
    }

    #[test]
    fn test_initialize_requires_adapter_id() {
        let err = InitializeRequestArguments::from_wire(&json!({"clientID": "vscode"}))
            .err()
            .unwrap();
        assert_eq!(
            err,
            DecodeError::MissingRequiredField {
                path: "adapterID".to_string(),
            }
        );
    }

    #[test]
    fn test_set_breakpoints_round_trip() {
        let args = SetBreakpointsArguments {
            source: Source::from_path("/srv/app.py"),
            breakpoints: Some(vec![
                SourceBreakpoint::at_line(3),
                SourceBreakpoint::logpoint(9, "x={x}"),
            ]),
            source_modified: Some(false),
        };
        let wire = args.to_wire();
        assert_eq!(wire["breakpoints"][1]["logMessage"], json!("x={x}"));
        assert_eq!(SetBreakpointsArguments::from_wire(&wire).unwrap(), args);
    }

    #[test]
    fn test_set_breakpoints_list_error_path() {
        let wire = json!({
            "source": {"path": "/srv/app.py"},
            "breakpoints": [{"line": 3}, {"column": 1}]
        });
        let err = SetBreakpointsArguments::from_wire(&wire).err().unwrap();
        assert_eq!(err.path(), "breakpoints[1].line");
    }

    #[test]
    fn test_data_breakpoint_access_type() {
        let wire = json!({
            "breakpoints": [{"dataId": "var:counter", "accessType": "readWrite"}]
        });
        let args = SetDataBreakpointsArguments::from_wire(&wire).unwrap();
        assert_eq!(
            args.breakpoints[0].access_type,
            Some(crate::enums::DataBreakpointAccessType::ReadWrite)
        );
        // re-encode produces exactly the literal token
        assert_eq!(
            args.to_wire()["breakpoints"][0]["accessType"],
            json!("readWrite")
        );
    }

    #[test]
    fn test_evaluate_custom_context_round_trips() {
        let wire = json!({
            "expression": "user.id",
            "context": "customWatchPanel"
        });
        let args = EvaluateArguments::from_wire(&wire).unwrap();
        let context = args.context.clone().unwrap();
        assert!(!context.is_documented());
        assert_eq!(args.to_wire(), wire);
    }

    #[test]
    fn test_evaluate_builder() {
        let args = EvaluateArguments::new("1 + 1").in_context(EvaluateContext::REPL);
        assert_eq!(args.to_wire()["context"], json!("repl"));
    }

    #[test]
    fn test_next_granularity() {
        let wire = json!({"threadId": 1, "granularity": "instruction"});
        let args = NextArguments::from_wire(&wire).unwrap();
        assert_eq!(args.granularity, Some(SteppingGranularity::Instruction));
        assert_eq!(NextArguments::from_wire(&args.to_wire()).unwrap(), args);
    }

    #[test]
    fn test_evaluate_response_type_wire_name() {
        let body = EvaluateResponseBody {
            result: "42".to_string(),
            value_type: Some("int".to_string()),
            presentation_hint: None,
            variables_reference: 0,
        };
        let wire = body.to_wire();
        assert_eq!(wire["type"], json!("int"));
        assert_eq!(EvaluateResponseBody::from_wire(&wire).unwrap(), body);
    }
}
