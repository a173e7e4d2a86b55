use thiserror::Error;

use crate::values::PinType;

/// Errors produced by the pin input widgets and their factory.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PinEditorError {
    /// No input widget is registered for this pin type identifier.
    ///
    /// The host is expected to skip widget creation for the pin.
    #[error("no input widget for pin type '{0}'")]
    UnknownPinType(String),

    /// A value of one pin type was handed to a widget of another.
    #[error("expected a {expected} value, got a {found} value")]
    ValueTypeMismatch { expected: PinType, found: PinType },

    #[error("field index {index} out of range for {pin_type} ({count} fields)")]
    FieldIndexOutOfRange {
        pin_type: PinType,
        index: usize,
        count: usize,
    },

    #[error("{pin_type} takes {expected} components, got {found}")]
    ComponentCountMismatch {
        pin_type: PinType,
        expected: usize,
        found: usize,
    },

    #[error("{pin_type} has no field named '{name}'")]
    UnknownField { pin_type: PinType, name: String },
}
