//! Single scalar control bound to one field of a composite value

use egui::{DragValue, Ui};
use serde::{Deserialize, Serialize};

use crate::constants;
use crate::values::FieldSpec;

/// Beyond this magnitude an f64 has no fractional bits left
const MAX_EXACT_INTEGER: f64 = (1u64 << 52) as f64;

/// Step and precision of a scalar control
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ComponentConfig {
    /// Amount one drag step / spin click changes the value
    pub step: f64,
    /// Decimal places shown; stored values are rounded to this
    pub decimals: usize,
}

impl Default for ComponentConfig {
    fn default() -> Self {
        Self {
            step: constants::component::FLOAT_SINGLE_STEP,
            decimals: constants::component::FLOAT_DECIMALS,
        }
    }
}

impl ComponentConfig {
    pub fn with_step(mut self, step: f64) -> Self {
        self.step = step;
        self
    }

    pub fn with_decimals(mut self, decimals: usize) -> Self {
        self.decimals = decimals;
        self
    }

    /// Round a value the way the control displays it.
    ///
    /// Values too large to carry any of the shown decimals are returned
    /// unchanged, so scaling them up can never overflow.
    pub fn round(&self, value: f64) -> f64 {
        let scale = 10f64.powi(self.decimals as i32);
        if !value.is_finite() || value.abs() >= MAX_EXACT_INTEGER / scale {
            return value;
        }
        (value * scale).round() / scale
    }
}

/// Editor for one scalar component.
///
/// Holds the displayed value. A user edit produces an edit event unless
/// notifications are suppressed; [`set_value`](Self::set_value) never does.
#[derive(Debug, Clone)]
pub struct ComponentEditor {
    field: FieldSpec,
    config: ComponentConfig,
    value: f64,
    suppressed: bool,
}

impl ComponentEditor {
    pub fn new(field: FieldSpec, config: ComponentConfig) -> Self {
        Self {
            field,
            config,
            value: 0.0,
            suppressed: false,
        }
    }

    pub fn field(&self) -> &FieldSpec {
        &self.field
    }

    pub fn config(&self) -> &ComponentConfig {
        &self.config
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    /// Set the displayed value without producing an edit event
    pub fn set_value(&mut self, value: f64) {
        self.value = self.config.round(value);
    }

    pub fn set_notifications_suppressed(&mut self, suppressed: bool) {
        self.suppressed = suppressed;
    }

    pub fn notifications_suppressed(&self) -> bool {
        self.suppressed
    }

    /// Apply a change coming from the control itself.
    ///
    /// Returns the new scalar if this is a change that should be reported,
    /// `None` if the value did not change or notifications are suppressed.
    /// The value is stored either way.
    pub fn apply_edit(&mut self, value: f64) -> Option<f64> {
        let value = self.config.round(value);
        if value == self.value || (value.is_nan() && self.value.is_nan()) {
            return None;
        }
        self.value = value;
        if self.suppressed {
            None
        } else {
            Some(value)
        }
    }

    /// Draw the control and route any change through [`apply_edit`](Self::apply_edit)
    pub fn ui(&mut self, ui: &mut Ui) -> Option<f64> {
        let mut value = self.value;
        let response = ui.add(
            DragValue::new(&mut value)
                .speed(self.config.step)
                .fixed_decimals(self.config.decimals)
                .prefix(format!("{}: ", self.field.label)),
        );
        if response.changed() {
            self.apply_edit(value)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn editor() -> ComponentEditor {
        ComponentEditor::new(FieldSpec::new("X", "X", 1), ComponentConfig::default())
    }

    #[test]
    fn test_defaults() {
        let config = ComponentConfig::default();
        assert_eq!(config.step, 0.01);
        assert_eq!(config.decimals, 5);
        assert_eq!(editor().value(), 0.0);
    }

    #[test]
    fn test_set_value_rounds_to_precision() {
        let mut editor = editor();
        editor.set_value(1.234567891);
        assert_eq!(editor.value(), 1.23457);
        editor.set_value(1.234567891);
        assert_eq!(editor.value(), 1.23457);
    }

    #[test]
    fn test_apply_edit_reports_changes_once() {
        let mut editor = editor();
        assert_eq!(editor.apply_edit(2.5), Some(2.5));
        assert_eq!(editor.apply_edit(2.5), None);
        assert_eq!(editor.value(), 2.5);
    }

    #[test]
    fn test_suppressed_edit_updates_value_silently() {
        let mut editor = editor();
        editor.set_notifications_suppressed(true);
        assert_eq!(editor.apply_edit(3.0), None);
        assert_eq!(editor.value(), 3.0);

        editor.set_notifications_suppressed(false);
        assert_eq!(editor.apply_edit(4.0), Some(4.0));
    }

    #[test]
    fn test_config_builder() {
        let config = ComponentConfig::default().with_step(0.5).with_decimals(2);
        assert_eq!(config.round(1.005001), 1.01);
        assert_eq!(config.step, 0.5);
    }

    #[test]
    fn test_huge_values_are_not_rounded_to_infinity() {
        let mut editor = editor();
        for value in [1e305, -2e304, f64::MAX, 1e300, 4503599627370497.0] {
            editor.set_value(value);
            assert_eq!(editor.value(), value);
        }

        let config = ComponentConfig::default().with_decimals(400);
        assert_eq!(config.round(1.5), 1.5);
    }

    #[test]
    fn test_repeated_nan_edit_is_reported_once() {
        let mut editor = editor();
        assert!(editor.apply_edit(f64::NAN).is_some());
        assert_eq!(editor.apply_edit(f64::NAN), None);
        assert!(editor.value().is_nan());
        assert_eq!(editor.apply_edit(1.0), Some(1.0));
    }
}
