//! Pin value types and their component layouts
//!
//! The numeric types themselves come from `glam` (double precision). This
//! module only describes how each of them splits into named scalar
//! components and how the type-erased [`PinValue`] carries them to and from
//! the node graph.

pub mod fields;

use std::fmt;
use std::str::FromStr;

use glam::{DMat3, DMat4, DQuat, DVec3, DVec4};
use serde::{Deserialize, Serialize};

use crate::error::PinEditorError;
pub use fields::{CompositeTypeDescriptor, FieldLayout, FieldSpec};

/// Pin types that have a composite input widget
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum PinType {
    FloatVector3,
    FloatVector4,
    Quat,
    Matrix33,
    Matrix44,
}

impl PinType {
    pub const ALL: [PinType; 5] = [
        PinType::FloatVector3,
        PinType::FloatVector4,
        PinType::Quat,
        PinType::Matrix33,
        PinType::Matrix44,
    ];

    /// Identifier the node graph uses for this pin type
    pub fn identifier(&self) -> &'static str {
        match self {
            PinType::FloatVector3 => "FloatVector3Pin",
            PinType::FloatVector4 => "FloatVector4Pin",
            PinType::Quat => "QuatPin",
            PinType::Matrix33 => "Matrix33Pin",
            PinType::Matrix44 => "Matrix44Pin",
        }
    }

    /// Field layout of this pin type
    pub fn descriptor(&self) -> CompositeTypeDescriptor {
        match self {
            PinType::FloatVector3 => DVec3::DESCRIPTOR,
            PinType::FloatVector4 => DVec4::DESCRIPTOR,
            PinType::Quat => DQuat::DESCRIPTOR,
            PinType::Matrix33 => DMat3::DESCRIPTOR,
            PinType::Matrix44 => DMat4::DESCRIPTOR,
        }
    }
}

impl fmt::Display for PinType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.identifier())
    }
}

impl FromStr for PinType {
    type Err = PinEditorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PinType::ALL
            .into_iter()
            .find(|pin_type| pin_type.identifier() == s)
            .ok_or_else(|| PinEditorError::UnknownPinType(s.to_string()))
    }
}

/// Type-erased value of a composite pin, as exchanged with the node graph
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum PinValue {
    FloatVector3(DVec3),
    FloatVector4(DVec4),
    Quat(DQuat),
    Matrix33(DMat3),
    Matrix44(DMat4),
}

impl PinValue {
    pub fn pin_type(&self) -> PinType {
        match self {
            PinValue::FloatVector3(_) => PinType::FloatVector3,
            PinValue::FloatVector4(_) => PinType::FloatVector4,
            PinValue::Quat(_) => PinType::Quat,
            PinValue::Matrix33(_) => PinType::Matrix33,
            PinValue::Matrix44(_) => PinType::Matrix44,
        }
    }

    /// Components in field order
    pub fn components(&self) -> Vec<f64> {
        match self {
            PinValue::FloatVector3(v) => v.components(),
            PinValue::FloatVector4(v) => v.components(),
            PinValue::Quat(q) => q.components(),
            PinValue::Matrix33(m) => m.components(),
            PinValue::Matrix44(m) => m.components(),
        }
    }

    /// Build a value of `pin_type` from components in field order
    pub fn from_components(pin_type: PinType, components: &[f64]) -> Result<Self, PinEditorError> {
        let expected = pin_type.descriptor().field_count();
        if components.len() != expected {
            return Err(PinEditorError::ComponentCountMismatch {
                pin_type,
                expected,
                found: components.len(),
            });
        }
        Ok(match pin_type {
            PinType::FloatVector3 => DVec3::from_components(components).into(),
            PinType::FloatVector4 => DVec4::from_components(components).into(),
            PinType::Quat => DQuat::from_components(components).into(),
            PinType::Matrix33 => DMat3::from_components(components).into(),
            PinType::Matrix44 => DMat4::from_components(components).into(),
        })
    }

    /// Identity/zero value of a pin type, used when the graph has no default
    pub fn zero(pin_type: PinType) -> Self {
        match pin_type {
            PinType::FloatVector3 => PinValue::FloatVector3(DVec3::ZERO),
            PinType::FloatVector4 => PinValue::FloatVector4(DVec4::ZERO),
            PinType::Quat => PinValue::Quat(DQuat::IDENTITY),
            PinType::Matrix33 => PinValue::Matrix33(DMat3::IDENTITY),
            PinType::Matrix44 => PinValue::Matrix44(DMat4::IDENTITY),
        }
    }
}

/// A structured numeric value made of named scalar components.
///
/// Implementations must agree with their descriptor: `component(i)` for
/// `i < DESCRIPTOR.fields.len()` is the scalar shown by field `i`, and
/// `from_components` takes exactly that many scalars in the same order.
pub trait CompositeValue:
    Copy + PartialEq + fmt::Debug + Into<PinValue> + TryFrom<PinValue, Error = PinEditorError> + 'static
{
    const DESCRIPTOR: CompositeTypeDescriptor;

    fn from_components(components: &[f64]) -> Self;

    fn component(&self, index: usize) -> f64;

    fn components(&self) -> Vec<f64> {
        (0..Self::DESCRIPTOR.field_count())
            .map(|index| self.component(index))
            .collect()
    }

    /// Copy of `self` with one component replaced
    fn with_component(self, index: usize, value: f64) -> Self {
        let mut components = self.components();
        components[index] = value;
        Self::from_components(&components)
    }
}

impl CompositeValue for DVec3 {
    const DESCRIPTOR: CompositeTypeDescriptor =
        CompositeTypeDescriptor::row(PinType::FloatVector3, fields::VECTOR3);

    fn from_components(components: &[f64]) -> Self {
        DVec3::from_slice(components)
    }

    fn component(&self, index: usize) -> f64 {
        self[index]
    }
}

impl CompositeValue for DVec4 {
    const DESCRIPTOR: CompositeTypeDescriptor =
        CompositeTypeDescriptor::row(PinType::FloatVector4, fields::VECTOR4);

    fn from_components(components: &[f64]) -> Self {
        DVec4::from_slice(components)
    }

    fn component(&self, index: usize) -> f64 {
        self[index]
    }
}

impl CompositeValue for DQuat {
    const DESCRIPTOR: CompositeTypeDescriptor =
        CompositeTypeDescriptor::row(PinType::Quat, fields::VECTOR4);

    // Not normalized: the widget shows exactly what the user typed.
    fn from_components(components: &[f64]) -> Self {
        DQuat::from_xyzw(components[0], components[1], components[2], components[3])
    }

    fn component(&self, index: usize) -> f64 {
        self.to_array()[index]
    }
}

// Matrix components are row-major (m11, m12, ...) while glam stores columns.

impl CompositeValue for DMat3 {
    const DESCRIPTOR: CompositeTypeDescriptor =
        CompositeTypeDescriptor::grid(PinType::Matrix33, fields::MATRIX33, 3);

    fn from_components(components: &[f64]) -> Self {
        DMat3::from_cols_slice(components).transpose()
    }

    fn component(&self, index: usize) -> f64 {
        self.row(index / 3)[index % 3]
    }
}

impl CompositeValue for DMat4 {
    const DESCRIPTOR: CompositeTypeDescriptor =
        CompositeTypeDescriptor::grid(PinType::Matrix44, fields::MATRIX44, 4);

    fn from_components(components: &[f64]) -> Self {
        DMat4::from_cols_slice(components).transpose()
    }

    fn component(&self, index: usize) -> f64 {
        self.row(index / 4)[index % 4]
    }
}

macro_rules! pin_value_conversions {
    ($($variant:ident => $ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for PinValue {
                fn from(value: $ty) -> Self {
                    PinValue::$variant(value)
                }
            }

            impl TryFrom<PinValue> for $ty {
                type Error = PinEditorError;

                fn try_from(value: PinValue) -> Result<Self, Self::Error> {
                    match value {
                        PinValue::$variant(inner) => Ok(inner),
                        other => Err(PinEditorError::ValueTypeMismatch {
                            expected: PinType::$variant,
                            found: other.pin_type(),
                        }),
                    }
                }
            }
        )*
    };
}

pin_value_conversions! {
    FloatVector3 => DVec3,
    FloatVector4 => DVec4,
    Quat => DQuat,
    Matrix33 => DMat3,
    Matrix44 => DMat4,
}
