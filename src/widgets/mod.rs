//! Pin input widgets
//!
//! - [`ComponentEditor`]: one scalar control with step and precision
//! - [`CompositeEditor`]: the controls of one vector/quaternion/matrix value
//! - [`PinInputWidget`]: the type-erased interface the node graph drives
//! - [`SharedPinWidget`]: handle for data setters that re-enter the widget

pub mod component;
pub mod composite;
pub mod input_widget;
pub mod shared;

pub use component::{ComponentConfig, ComponentEditor};
pub use composite::{CompositeEditor, SyncState, WidgetOptions};
pub use input_widget::{DataSetter, PinInputWidget};
pub use shared::SharedPinWidget;
