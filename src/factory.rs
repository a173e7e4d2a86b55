//! Input widget factory keyed by pin type identifier

use std::collections::BTreeMap;

use log::{debug, info};
use once_cell::sync::Lazy;

use crate::error::PinEditorError;
use crate::values::{CompositeValue, PinValue};
use crate::widgets::{CompositeEditor, DataSetter, PinInputWidget, WidgetOptions};
use glam::{DMat3, DMat4, DQuat, DVec3, DVec4};

/// Function pointer type for creating input widgets
pub type WidgetCreator =
    fn(DataSetter, PinValue, WidgetOptions) -> Result<Box<dyn PinInputWidget>, PinEditorError>;

/// Registry mapping pin type identifiers to widget constructors
pub struct PinWidgetRegistry {
    creators: BTreeMap<&'static str, WidgetCreator>,
}

impl Default for PinWidgetRegistry {
    fn default() -> Self {
        Self::with_builtin_types()
    }
}

impl PinWidgetRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self {
            creators: BTreeMap::new(),
        }
    }

    /// Registry with the vector, quaternion and matrix widgets
    pub fn with_builtin_types() -> Self {
        let mut registry = Self::new();
        registry.register::<DVec3>();
        registry.register::<DVec4>();
        registry.register::<DQuat>();
        registry.register::<DMat3>();
        registry.register::<DMat4>();
        registry
    }

    /// Register the composite editor of a value type under its identifier
    pub fn register<T: CompositeValue>(&mut self) {
        let identifier = T::DESCRIPTOR.pin_type.identifier();
        if self.creators.insert(identifier, create_composite::<T>).is_some() {
            info!("Replaced input widget for {}", identifier);
        }
    }

    pub fn supports(&self, data_type: &str) -> bool {
        self.creators.contains_key(data_type)
    }

    /// Registered identifiers, sorted
    pub fn data_types(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.creators.keys().copied()
    }

    /// Create the input widget for a pin type identifier
    pub fn create(
        &self,
        data_type: &str,
        data_setter: DataSetter,
        default_value: PinValue,
        options: WidgetOptions,
    ) -> Result<Box<dyn PinInputWidget>, PinEditorError> {
        let Some(creator) = self.creators.get(data_type) else {
            debug!("No input widget registered for pin type: {}", data_type);
            return Err(PinEditorError::UnknownPinType(data_type.to_string()));
        };
        creator(data_setter, default_value, options)
    }
}

fn create_composite<T: CompositeValue>(
    data_setter: DataSetter,
    default_value: PinValue,
    options: WidgetOptions,
) -> Result<Box<dyn PinInputWidget>, PinEditorError> {
    let default_value = T::try_from(default_value)?;
    Ok(Box::new(CompositeEditor::with_options(data_setter, default_value, options)))
}

static REGISTRY: Lazy<PinWidgetRegistry> = Lazy::new(PinWidgetRegistry::with_builtin_types);

/// Global registry with the built-in pin types
pub fn registry() -> &'static PinWidgetRegistry {
    &REGISTRY
}

/// Create the input widget for a pin.
///
/// Unknown identifiers yield [`PinEditorError::UnknownPinType`]; the caller
/// is expected to skip the widget for that pin.
pub fn get_input_widget(
    data_type: &str,
    data_setter: DataSetter,
    default_value: PinValue,
    options: WidgetOptions,
) -> Result<Box<dyn PinInputWidget>, PinEditorError> {
    REGISTRY.create(data_type, data_setter, default_value, options)
}
