//! Type-erased interface the node graph uses to drive a pin input widget

use egui::Ui;
use log::trace;

use crate::error::PinEditorError;
use crate::values::{CompositeTypeDescriptor, PinType, PinValue};

/// Callback receiving the new whole value after a user edit
pub type DataSetter = Box<dyn FnMut(PinValue)>;

/// Input widget for one pin.
///
/// The `stage_*` and [`show`](Self::show) methods compute what should be
/// sent downstream without sending it; the provided methods send it through
/// the data setter. Callers that need the setter to re-enter the widget use
/// [`SharedPinWidget`](super::SharedPinWidget), which dispatches with the
/// widget released.
pub trait PinInputWidget {
    fn descriptor(&self) -> CompositeTypeDescriptor;

    fn pin_type(&self) -> PinType {
        self.descriptor().pin_type
    }

    /// Current value built from the component controls
    fn value(&self) -> PinValue;

    fn default_value(&self) -> PinValue;

    fn component_value(&self, index: usize) -> Option<f64>;

    /// Push a value coming from the graph into the controls. Never calls the
    /// data setter.
    fn set_widget_value(&mut self, value: &PinValue) -> Result<(), PinEditorError>;

    fn block_widget_signals(&mut self, blocked: bool);

    fn signals_blocked(&self) -> bool;

    /// Apply a user edit of component `index` and return the whole value to
    /// report, or `None` when nothing should be reported.
    fn stage_user_edit(&mut self, index: usize, value: f64) -> Result<Option<PinValue>, PinEditorError>;

    /// Restore the default value into the controls and return it if it
    /// should be reported.
    fn stage_reset(&mut self) -> Option<PinValue>;

    /// Draw the widget and return the whole values produced by user edits
    /// made during this frame.
    fn show(&mut self, ui: &mut Ui) -> Vec<PinValue>;

    fn take_data_setter(&mut self) -> Option<DataSetter>;

    fn restore_data_setter(&mut self, setter: DataSetter);

    /// Send a value through the data setter
    fn dispatch(&mut self, value: PinValue) {
        if let Some(mut setter) = self.take_data_setter() {
            trace!("{} dispatching {:?}", self.pin_type(), value);
            setter(value);
            self.restore_data_setter(setter);
        }
    }

    /// User edit of one component; returns whether the data setter was called
    fn edit_component(&mut self, index: usize, value: f64) -> Result<bool, PinEditorError> {
        match self.stage_user_edit(index, value)? {
            Some(whole) => {
                self.dispatch(whole);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// User edit addressed by field name ("X", "m23")
    fn edit_field(&mut self, name: &str, value: f64) -> Result<bool, PinEditorError> {
        let descriptor = self.descriptor();
        let index = descriptor
            .field_index(name)
            .ok_or_else(|| PinEditorError::UnknownField {
                pin_type: descriptor.pin_type,
                name: name.to_string(),
            })?;
        self.edit_component(index, value)
    }

    fn reset_to_default(&mut self) -> bool {
        match self.stage_reset() {
            Some(value) => {
                self.dispatch(value);
                true
            }
            None => false,
        }
    }

    /// Draw the widget and dispatch the edits made this frame
    fn ui(&mut self, ui: &mut Ui) -> bool {
        let edits = self.show(ui);
        let changed = !edits.is_empty();
        for value in edits {
            self.dispatch(value);
        }
        changed
    }
}
