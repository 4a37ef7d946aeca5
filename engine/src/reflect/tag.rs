//! Closed classification of editable property kinds

use serde::{Deserialize, Serialize};
use std::fmt;

/// The editable kind of a property
///
/// Every property maps to exactly one tag. `Unknown` is the terminal fallback:
/// the inspector then probes the runtime value for a [`Capability`] and, failing
/// that, renders a diagnostic row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TypeTag {
    Bool,
    Int32,
    Int64,
    Float32,
    Float64,
    Text,
    Vec2,
    Vec3,
    Vec4,
    Quaternion,
    FileRef,
    EnumFixed,
    EnumExtendable,
    NestedInspectable,
    Unknown,
}

impl TypeTag {
    /// Number of components for vector tags
    pub fn vector_len(self) -> Option<usize> {
        match self {
            TypeTag::Vec2 => Some(2),
            TypeTag::Vec3 => Some(3),
            TypeTag::Vec4 => Some(4),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            TypeTag::Bool => "bool",
            TypeTag::Int32 => "int32",
            TypeTag::Int64 => "int64",
            TypeTag::Float32 => "float32",
            TypeTag::Float64 => "float64",
            TypeTag::Text => "text",
            TypeTag::Vec2 => "vec2",
            TypeTag::Vec3 => "vec3",
            TypeTag::Vec4 => "vec4",
            TypeTag::Quaternion => "quaternion",
            TypeTag::FileRef => "file",
            TypeTag::EnumFixed => "enum",
            TypeTag::EnumExtendable => "extendable enum",
            TypeTag::NestedInspectable => "inspectable",
            TypeTag::Unknown => "unknown",
        }
    }
}

impl fmt::Display for TypeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Runtime capability of a value whose static tag is `Unknown`
///
/// Probed in declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Capability {
    /// Enumerated value with a fixed member set
    FixedEnum,
    /// Enumerated value whose member list may change between frames
    ExtendableEnum,
    /// The value is itself inspectable
    Inspectable,
}

impl Capability {
    pub const PROBE_ORDER: [Capability; 3] = [
        Capability::FixedEnum,
        Capability::ExtendableEnum,
        Capability::Inspectable,
    ];
}
