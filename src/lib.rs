//! Pin input widgets
//!
//! Editors for vector, quaternion and matrix pin values in a node editor.
//! Each editor splits a value into named scalar controls, reports every
//! user edit as one complete value, and accepts values pushed in by the
//! graph without echoing them back.

pub mod constants;
pub mod error;
pub mod factory;
pub mod values;
pub mod widgets;

// Re-export commonly used types
pub use error::PinEditorError;
pub use factory::{get_input_widget, registry, PinWidgetRegistry};
pub use values::{CompositeTypeDescriptor, CompositeValue, FieldLayout, FieldSpec, PinType, PinValue};
pub use widgets::{
    ComponentConfig, ComponentEditor, CompositeEditor, DataSetter, PinInputWidget, SharedPinWidget,
    SyncState, WidgetOptions,
};
