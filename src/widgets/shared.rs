//! Shared handle that lets the data setter call back into its own widget

use std::cell::RefCell;
use std::rc::Rc;

use egui::Ui;
use log::{debug, trace};

use super::input_widget::PinInputWidget;
use crate::error::PinEditorError;
use crate::values::{PinType, PinValue};

/// Cloneable single-threaded handle around a pin input widget.
///
/// Edits are staged with the widget borrowed and dispatched after the
/// borrow is released, so the data setter may use another clone of the
/// handle to push a value back, block signals or read the widget.
#[derive(Clone)]
pub struct SharedPinWidget {
    inner: Rc<RefCell<Box<dyn PinInputWidget>>>,
}

impl SharedPinWidget {
    pub fn new(widget: Box<dyn PinInputWidget>) -> Self {
        Self {
            inner: Rc::new(RefCell::new(widget)),
        }
    }

    pub fn pin_type(&self) -> PinType {
        self.inner.borrow().pin_type()
    }

    pub fn value(&self) -> PinValue {
        self.inner.borrow().value()
    }

    pub fn set_widget_value(&self, value: &PinValue) -> Result<(), PinEditorError> {
        self.inner.borrow_mut().set_widget_value(value)
    }

    pub fn block_widget_signals(&self, blocked: bool) {
        self.inner.borrow_mut().block_widget_signals(blocked);
    }

    pub fn edit_component(&self, index: usize, value: f64) -> Result<bool, PinEditorError> {
        let staged = self.inner.borrow_mut().stage_user_edit(index, value)?;
        Ok(self.dispatch(staged.into_iter().collect()))
    }

    pub fn reset_to_default(&self) -> bool {
        let staged = self.inner.borrow_mut().stage_reset();
        self.dispatch(staged.into_iter().collect())
    }

    pub fn ui(&self, ui: &mut Ui) -> bool {
        let staged = self.inner.borrow_mut().show(ui);
        self.dispatch(staged)
    }

    /// Run a closure against the widget itself
    pub fn with_widget<R>(&self, f: impl FnOnce(&mut Box<dyn PinInputWidget>) -> R) -> R {
        let mut widget = self.inner.borrow_mut();
        f(&mut widget)
    }

    fn dispatch(&self, values: Vec<PinValue>) -> bool {
        if values.is_empty() {
            return false;
        }
        let Some(mut setter) = self.inner.borrow_mut().take_data_setter() else {
            debug!(
                "Dropping {} value(s): data setter is already running",
                values.len()
            );
            return false;
        };
        for value in values {
            trace!("Shared {} widget dispatching {:?}", value.pin_type(), value);
            setter(value);
        }
        self.inner.borrow_mut().restore_data_setter(setter);
        true
    }
}
