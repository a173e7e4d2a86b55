//! Field layout tables for the composite pin types

use super::PinType;

/// One named scalar component of a composite value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    /// Field name used to address the component ("X", "m23")
    pub name: &'static str,
    /// Text shown next to the control ("X", "23")
    pub label: &'static str,
    /// 1-based position in the layout, which is also the component order
    pub ordinal: usize,
}

impl FieldSpec {
    pub const fn new(name: &'static str, label: &'static str, ordinal: usize) -> Self {
        Self {
            name,
            label,
            ordinal,
        }
    }

    /// Zero-based component index
    pub fn index(&self) -> usize {
        self.ordinal - 1
    }

    /// Row-major grid cell (row, column) for a grid with `columns` columns
    pub fn grid_cell(&self, columns: usize) -> (usize, usize) {
        (self.index() / columns, self.index() % columns)
    }
}

/// How the component controls of a composite widget are arranged
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldLayout {
    /// A single horizontal row (vectors, quaternions)
    Row,
    /// A row-major grid (matrices)
    Grid { columns: usize },
}

/// Static description of a composite pin type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompositeTypeDescriptor {
    pub pin_type: PinType,
    pub fields: &'static [FieldSpec],
    pub layout: FieldLayout,
}

impl CompositeTypeDescriptor {
    pub const fn row(pin_type: PinType, fields: &'static [FieldSpec]) -> Self {
        Self {
            pin_type,
            fields,
            layout: FieldLayout::Row,
        }
    }

    pub const fn grid(pin_type: PinType, fields: &'static [FieldSpec], columns: usize) -> Self {
        Self {
            pin_type,
            fields,
            layout: FieldLayout::Grid { columns },
        }
    }

    pub fn field_count(&self) -> usize {
        self.fields.len()
    }

    /// Look a field up by name
    pub fn field_index(&self, name: &str) -> Option<usize> {
        self.fields.iter().position(|field| field.name == name)
    }
}

pub const VECTOR3: &[FieldSpec] = &[
    FieldSpec::new("X", "X", 1),
    FieldSpec::new("Y", "Y", 2),
    FieldSpec::new("Z", "Z", 3),
];

/// Shared by Vector4 and Quaternion
pub const VECTOR4: &[FieldSpec] = &[
    FieldSpec::new("X", "X", 1),
    FieldSpec::new("Y", "Y", 2),
    FieldSpec::new("Z", "Z", 3),
    FieldSpec::new("W", "W", 4),
];

pub const MATRIX33: &[FieldSpec] = &[
    FieldSpec::new("m11", "11", 1),
    FieldSpec::new("m12", "12", 2),
    FieldSpec::new("m13", "13", 3),
    FieldSpec::new("m21", "21", 4),
    FieldSpec::new("m22", "22", 5),
    FieldSpec::new("m23", "23", 6),
    FieldSpec::new("m31", "31", 7),
    FieldSpec::new("m32", "32", 8),
    FieldSpec::new("m33", "33", 9),
];

pub const MATRIX44: &[FieldSpec] = &[
    FieldSpec::new("m11", "11", 1),
    FieldSpec::new("m12", "12", 2),
    FieldSpec::new("m13", "13", 3),
    FieldSpec::new("m14", "14", 4),
    FieldSpec::new("m21", "21", 5),
    FieldSpec::new("m22", "22", 6),
    FieldSpec::new("m23", "23", 7),
    FieldSpec::new("m24", "24", 8),
    FieldSpec::new("m31", "31", 9),
    FieldSpec::new("m32", "32", 10),
    FieldSpec::new("m33", "33", 11),
    FieldSpec::new("m34", "34", 12),
    FieldSpec::new("m41", "41", 13),
    FieldSpec::new("m42", "42", 14),
    FieldSpec::new("m43", "43", 15),
    FieldSpec::new("m44", "44", 16),
];
