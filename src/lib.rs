//! Typed schema layer for the Debug Adapter Protocol
//!
//! This crate defines the value types exchanged between a development tool
//! and a debug adapter: request arguments, event and response bodies, and
//! the protocol's two enumeration disciplines. It contains no transport,
//! no adapter logic, and no I/O; a transport layer decodes incoming wire
//! JSON through [`FromWire`] and encodes outgoing values through [`ToWire`].
//!
//! # Enumeration disciplines
//!
//! - **Closed** ([`enums`]): the token set is exhaustive; an unrecognized
//!   token is a decode failure ([`DecodeError::UnknownEnumValue`]).
//! - **Open** ([`open_enums`]): the documented tokens are conveniences;
//!   any string is legal and unrecognized values round-trip unchanged,
//!   which keeps older clients compatible with newer protocol revisions.
//!
//! # Wire names
//!
//! Field names and enumeration tokens are lowerCamelCase by default, but
//! several spellings cannot be derived that way (`"adapterID"`,
//! `"unixTimestampUTC"`, `"function breakpoint"`). Each such spelling is
//! declared literally next to the field or variant it belongs to, and the
//! decode and encode paths read the same declaration.
//!
//! All values are plain data: structural equality and hashing, no interior
//! mutability, no synchronization. A value used as a lookup key must not be
//! mutated while shared; the types make that the owner's obligation by
//! being nothing but owned fields.

pub mod enums;
pub mod error;
pub mod events;
pub mod open_enums;
pub mod requests;
pub mod types;
pub mod wire;

pub use enums::{
    ChecksumAlgorithm, ColumnDescriptorType, DataBreakpointAccessType, ExceptionBreakMode,
    SourcePresentationHint, SteppingGranularity, StoppedReason,
};
pub use error::{DecodeError, Result};
pub use events::{
    BreakpointEventBody, ContinuedEventBody, ExitedEventBody, OutputEventBody, StoppedEventBody,
    TerminatedEventBody, ThreadEventBody,
};
pub use open_enums::{
    BreakpointEventReason, EvaluateContext, OutputCategory, PathFormat, ThreadEventReason,
    VariableAttribute, VariableKind,
};
pub use requests::{
    ContinueArguments, EvaluateArguments, EvaluateResponseBody, InitializeRequestArguments,
    NextArguments, SetBreakpointsArguments, SetBreakpointsResponseBody,
    SetDataBreakpointsArguments,
};
pub use types::{
    Breakpoint, Checksum, ColumnDescriptor, DataBreakpoint, Source, SourceBreakpoint,
    VariablePresentationHint,
};
pub use wire::{ClosedEnum, FromWire, ToWire};
