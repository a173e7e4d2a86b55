//! Composite value editor: N component controls behind one pin value
//!
//! Two directions of change meet here. A user edit of one component is
//! turned into a complete value (read every component, patch the edited
//! one) and sent to the data setter. A value pushed in by the graph is
//! written into every component inside a suppression window, so none of
//! those writes comes back out as an edit.

use egui::Ui;
use log::{debug, trace};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::component::{ComponentConfig, ComponentEditor};
use super::input_widget::{DataSetter, PinInputWidget};
use crate::constants;
use crate::error::PinEditorError;
use crate::values::{CompositeTypeDescriptor, CompositeValue, FieldLayout, PinValue};

/// Layout and control parameters passed through from the host
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WidgetOptions {
    pub component: ComponentConfig,
    /// Margin around the widget, in points
    pub margin: f32,
    /// Spacing between component controls, in points
    pub spacing: f32,
}

impl Default for WidgetOptions {
    fn default() -> Self {
        Self {
            component: ComponentConfig::default(),
            margin: constants::layout::CONTENTS_MARGIN,
            spacing: constants::layout::SPACING,
        }
    }
}

impl WidgetOptions {
    pub fn with_component(mut self, component: ComponentConfig) -> Self {
        self.component = component;
        self
    }

    pub fn with_margin(mut self, margin: f32) -> Self {
        self.margin = margin;
        self
    }

    pub fn with_spacing(mut self, spacing: f32) -> Self {
        self.spacing = spacing;
        self
    }
}

/// Whether a graph-driven update is being written into the controls
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SyncState {
    /// User edits flow through
    #[default]
    Idle,
    /// Every component is suppressed while a whole value is written
    Syncing,
}

/// Input widget for one composite value type
pub struct CompositeEditor<T: CompositeValue> {
    id: Uuid,
    components: Vec<ComponentEditor>,
    data_setter: Option<DataSetter>,
    default_value: T,
    state: SyncState,
    signals_blocked: bool,
    options: WidgetOptions,
}

impl<T: CompositeValue> CompositeEditor<T> {
    pub fn new(data_setter: DataSetter, default_value: T) -> Self {
        Self::with_options(data_setter, default_value, WidgetOptions::default())
    }

    pub fn with_options(data_setter: DataSetter, default_value: T, options: WidgetOptions) -> Self {
        let components = T::DESCRIPTOR
            .fields
            .iter()
            .map(|field| ComponentEditor::new(*field, options.component))
            .collect();

        let mut editor = Self {
            id: Uuid::new_v4(),
            components,
            data_setter: Some(data_setter),
            default_value,
            state: SyncState::Idle,
            signals_blocked: false,
            options,
        };
        editor.sync(default_value);
        debug!("Created {} input widget {}", T::DESCRIPTOR.pin_type, editor.id);
        editor
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn options(&self) -> &WidgetOptions {
        &self.options
    }

    /// Always `Idle` between calls: `Syncing` only lasts for the
    /// duration of [`sync`](Self::sync), which holds the editor exclusively.
    pub fn state(&self) -> SyncState {
        self.state
    }

    pub fn components(&self) -> &[ComponentEditor] {
        &self.components
    }

    /// Fresh value read from every component, in field order
    pub fn as_data_type_class(&self) -> T {
        let components: Vec<f64> = self.components.iter().map(ComponentEditor::value).collect();
        T::from_components(&components)
    }

    /// Write a whole value into the controls inside a suppression window
    pub fn sync(&mut self, value: T) {
        self.state = SyncState::Syncing;
        for component in &mut self.components {
            component.set_notifications_suppressed(true);
        }

        for (index, component) in self.components.iter_mut().enumerate() {
            component.set_value(value.component(index));
        }

        for component in &mut self.components {
            component.set_notifications_suppressed(self.signals_blocked);
        }
        self.state = SyncState::Idle;
        trace!("{} synced to {:?}", self.id, value);
    }

    fn compose_edit(&self, index: usize, value: f64) -> T {
        self.as_data_type_class().with_component(index, value)
    }

    fn index_error(&self, index: usize) -> PinEditorError {
        PinEditorError::FieldIndexOutOfRange {
            pin_type: T::DESCRIPTOR.pin_type,
            index,
            count: self.components.len(),
        }
    }
}

impl<T: CompositeValue> PinInputWidget for CompositeEditor<T> {
    fn descriptor(&self) -> CompositeTypeDescriptor {
        T::DESCRIPTOR
    }

    fn value(&self) -> PinValue {
        self.as_data_type_class().into()
    }

    fn default_value(&self) -> PinValue {
        self.default_value.into()
    }

    fn component_value(&self, index: usize) -> Option<f64> {
        self.components.get(index).map(ComponentEditor::value)
    }

    fn set_widget_value(&mut self, value: &PinValue) -> Result<(), PinEditorError> {
        let value = T::try_from(*value)?;
        self.sync(value);
        Ok(())
    }

    fn block_widget_signals(&mut self, blocked: bool) {
        self.signals_blocked = blocked;
        for component in &mut self.components {
            component.set_notifications_suppressed(blocked);
        }
    }

    fn signals_blocked(&self) -> bool {
        self.signals_blocked
    }

    fn stage_user_edit(&mut self, index: usize, value: f64) -> Result<Option<PinValue>, PinEditorError> {
        let error = self.index_error(index);
        let component = self.components.get_mut(index).ok_or(error)?;
        let Some(accepted) = component.apply_edit(value) else {
            return Ok(None);
        };
        Ok(Some(self.compose_edit(index, accepted).into()))
    }

    fn stage_reset(&mut self) -> Option<PinValue> {
        self.sync(self.default_value);
        if self.signals_blocked {
            None
        } else {
            Some(self.as_data_type_class().into())
        }
    }

    fn show(&mut self, ui: &mut Ui) -> Vec<PinValue> {
        let id = self.id;
        let spacing = egui::vec2(self.options.spacing, self.options.spacing);
        let components = &mut self.components;
        let mut edits: Vec<(usize, f64)> = Vec::new();

        egui::Frame::NONE
            .inner_margin(self.options.margin)
            .show(ui, |ui| match T::DESCRIPTOR.layout {
                FieldLayout::Row => {
                    ui.horizontal(|ui| {
                        ui.spacing_mut().item_spacing = spacing;
                        for (index, component) in components.iter_mut().enumerate() {
                            if let Some(value) = component.ui(ui) {
                                edits.push((index, value));
                            }
                        }
                    });
                }
                FieldLayout::Grid { columns } => {
                    egui::Grid::new(id).spacing(spacing).show(ui, |ui| {
                        for component in components.iter_mut() {
                            let field = *component.field();
                            if let Some(value) = component.ui(ui) {
                                edits.push((field.index(), value));
                            }
                            let (_, col) = field.grid_cell(columns);
                            if col + 1 == columns {
                                ui.end_row();
                            }
                        }
                    });
                }
            });

        edits
            .into_iter()
            .map(|(index, value)| -> PinValue { self.compose_edit(index, value).into() })
            .collect()
    }

    fn take_data_setter(&mut self) -> Option<DataSetter> {
        self.data_setter.take()
    }

    fn restore_data_setter(&mut self, setter: DataSetter) {
        if self.data_setter.is_none() {
            self.data_setter = Some(setter);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::values::PinType;
    use glam::{DMat3, DMat4, DQuat, DVec3, DVec4};
    use std::cell::RefCell;
    use std::rc::Rc;

    fn recorder() -> (DataSetter, Rc<RefCell<Vec<PinValue>>>) {
        let calls = Rc::new(RefCell::new(Vec::new()));
        let sink = calls.clone();
        (Box::new(move |value: PinValue| sink.borrow_mut().push(value)), calls)
    }

    fn sample_mat4() -> DMat4 {
        let components: Vec<f64> = (1..=16).map(|i| i as f64 * 0.5).collect();
        DMat4::from_components(&components)
    }

    #[test]
    fn test_construction_shows_default_without_callback() {
        let (setter, calls) = recorder();
        let editor = CompositeEditor::new(setter, DVec3::new(1.0, 2.0, 3.0));
        assert_eq!(editor.as_data_type_class(), DVec3::new(1.0, 2.0, 3.0));
        assert_eq!(editor.state(), SyncState::Idle);
        assert!(calls.borrow().is_empty());
    }

    #[test]
    fn test_round_trip_through_components() {
        let (setter, _) = recorder();
        let mut editor = CompositeEditor::new(setter, DVec4::ZERO);
        let v = DVec4::new(0.123456, -7.5, 1e3, 0.000004);
        editor.set_widget_value(&v.into()).unwrap();
        assert!(editor.as_data_type_class().abs_diff_eq(v, 1e-5));

        let (setter, _) = recorder();
        let mut editor = CompositeEditor::new(setter, DMat3::IDENTITY);
        let m = DMat3::from_components(&[1.5, -2.0, 3.25, 0.0, 4.0, 5.0, -6.0, 7.125, 8.0]);
        editor.set_widget_value(&m.into()).unwrap();
        assert_eq!(editor.as_data_type_class(), m);
    }

    #[test]
    fn test_huge_values_survive_round_trip() {
        let (setter, calls) = recorder();
        let mut editor = CompositeEditor::new(setter, DVec3::ZERO);
        let v = DVec3::new(1e305, -2e304, 1e300);
        editor.set_widget_value(&v.into()).unwrap();
        assert_eq!(editor.as_data_type_class(), v);

        assert!(editor.edit_component(2, 1.0).unwrap());
        assert_eq!(
            calls.borrow()[0],
            PinValue::FloatVector3(DVec3::new(1e305, -2e304, 1.0))
        );
    }

    #[test]
    fn test_set_widget_value_never_calls_setter() {
        let (setter, calls) = recorder();
        let mut editor = CompositeEditor::new(setter, DMat4::IDENTITY);
        editor.set_widget_value(&sample_mat4().into()).unwrap();
        editor.set_widget_value(&DMat4::ZERO.into()).unwrap();
        assert!(calls.borrow().is_empty());
        assert_eq!(editor.state(), SyncState::Idle);
    }

    #[test]
    fn test_user_edit_patches_one_field() {
        let (setter, calls) = recorder();
        let mut editor = CompositeEditor::new(setter, DVec3::new(1.0, 2.0, 3.0));
        assert!(editor.edit_component(1, 9.5).unwrap());

        let calls = calls.borrow();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0], PinValue::FloatVector3(DVec3::new(1.0, 9.5, 3.0)));
    }

    #[test]
    fn test_unchanged_edit_is_not_reported() {
        let (setter, calls) = recorder();
        let mut editor = CompositeEditor::new(setter, DVec3::new(1.0, 2.0, 3.0));
        assert!(!editor.edit_component(0, 1.0).unwrap());
        assert!(calls.borrow().is_empty());
    }

    #[test]
    fn test_matrix_field_m23_is_row_2_column_3() {
        let (setter, calls) = recorder();
        let original = sample_mat4();
        let mut editor = CompositeEditor::new(setter, original);
        assert!(editor.edit_field("m23", 42.0).unwrap());

        let calls = calls.borrow();
        let PinValue::Matrix44(edited) = calls[0] else {
            panic!("Expected a Matrix44 value, got {:?}", calls[0]);
        };
        for row in 0..4 {
            for col in 0..4 {
                if (row, col) == (1, 2) {
                    assert_eq!(edited.row(row)[col], 42.0);
                } else {
                    assert_eq!(edited.row(row)[col], original.row(row)[col]);
                }
            }
        }
    }

    #[test]
    fn test_quaternion_editor_builds_quaternions() {
        let (setter, calls) = recorder();
        let mut editor = CompositeEditor::new(setter, DQuat::IDENTITY);
        assert_eq!(editor.descriptor().pin_type, PinType::Quat);
        editor.edit_field("X", 0.5).unwrap();

        let expected = DQuat::from_xyzw(0.5, 0.0, 0.0, 1.0);
        assert_eq!(editor.as_data_type_class(), expected);
        assert_eq!(calls.borrow()[0], PinValue::Quat(expected));
    }

    #[test]
    fn test_blocked_signals_swallow_edits() {
        let (setter, calls) = recorder();
        let mut editor = CompositeEditor::new(setter, DVec3::ZERO);
        editor.block_widget_signals(true);
        for index in 0..3 {
            assert!(!editor.edit_component(index, index as f64 + 1.0).unwrap());
        }
        assert!(calls.borrow().is_empty());
        editor.block_widget_signals(false);

        assert_eq!(editor.as_data_type_class(), DVec3::new(1.0, 2.0, 3.0));
        assert!(editor.edit_component(2, 4.0).unwrap());
        assert_eq!(calls.borrow().len(), 1);
    }

    #[test]
    fn test_sync_keeps_external_block() {
        let (setter, calls) = recorder();
        let mut editor = CompositeEditor::new(setter, DVec3::ZERO);
        editor.block_widget_signals(true);
        editor.set_widget_value(&DVec3::ONE.into()).unwrap();
        assert!(editor.components().iter().all(|c| c.notifications_suppressed()));

        editor.edit_component(0, 5.0).unwrap();
        assert!(calls.borrow().is_empty());
    }

    #[test]
    fn test_reset_to_default_reports_once() {
        let (setter, calls) = recorder();
        let default = DVec3::new(1.0, 1.0, 1.0);
        let mut editor = CompositeEditor::new(setter, default);
        editor.set_widget_value(&DVec3::new(4.0, 5.0, 6.0).into()).unwrap();

        assert!(editor.reset_to_default());
        assert_eq!(editor.as_data_type_class(), default);
        assert_eq!(*calls.borrow(), vec![PinValue::FloatVector3(default)]);

        editor.block_widget_signals(true);
        assert!(!editor.reset_to_default());
        assert_eq!(calls.borrow().len(), 1);
    }

    #[test]
    fn test_errors() {
        let (setter, _) = recorder();
        let mut editor = CompositeEditor::new(setter, DVec3::ZERO);
        assert!(matches!(
            editor.set_widget_value(&PinValue::Matrix33(DMat3::IDENTITY)),
            Err(PinEditorError::ValueTypeMismatch { expected: PinType::FloatVector3, .. })
        ));
        assert!(matches!(
            editor.edit_component(3, 1.0),
            Err(PinEditorError::FieldIndexOutOfRange { index: 3, count: 3, .. })
        ));
        assert!(matches!(
            editor.edit_field("W", 1.0),
            Err(PinEditorError::UnknownField { .. })
        ));
    }

    #[test]
    fn test_ui_renders_without_edits() {
        let (setter, calls) = recorder();
        let mut vector = CompositeEditor::new(setter, DVec3::ONE);
        let (setter, _) = recorder();
        let mut matrix = CompositeEditor::new(setter, DMat4::IDENTITY);

        let ctx = egui::Context::default();
        let _ = ctx.run(egui::RawInput::default(), |ctx| {
            egui::CentralPanel::default().show(ctx, |ui| {
                assert!(!vector.ui(ui));
                assert!(!matrix.ui(ui));
            });
        });
        assert!(calls.borrow().is_empty());
    }
}
