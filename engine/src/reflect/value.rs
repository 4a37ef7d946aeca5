//! Dynamic property values and the field-type conversion trait

use super::coerce;
use super::error::CoercionError;
use super::tag::{Capability, TypeTag};
use super::Inspectable;
use crate::file_ref::FileRef;
use glam::{DQuat, DVec2, DVec3, DVec4, Quat, Vec2, Vec3, Vec4};
use std::fmt;

/// Floating-point precision of a vector or quaternion property
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Precision {
    Single,
    Double,
}

/// Whether an enumerated value has a fixed or a run-time extendable member set
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EnumKind {
    Fixed,
    Extendable,
}

/// An enumerated value together with its current member list
#[derive(Debug, Clone, PartialEq)]
pub struct EnumValue {
    pub kind: EnumKind,
    pub type_name: &'static str,
    pub members: Vec<String>,
    /// Index of the current member, `None` when it is no longer listed
    pub selected: Option<usize>,
}

impl EnumValue {
    /// Name of the selected member
    pub fn selected_name(&self) -> Option<&str> {
        self.selected
            .and_then(|index| self.members.get(index))
            .map(String::as_str)
    }

    /// Same value with another member selected
    pub fn with_selected(&self, index: usize) -> Self {
        Self {
            selected: Some(index),
            ..self.clone()
        }
    }
}

/// A property value read through a reflective accessor
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Bool(bool),
    Int32(i32),
    Int64(i64),
    Float32(f32),
    Float64(f64),
    Text(String),
    Vec2(Vec2),
    DVec2(DVec2),
    Vec3(Vec3),
    DVec3(DVec3),
    Vec4(Vec4),
    DVec4(DVec4),
    Quat(Quat),
    DQuat(DQuat),
    File(FileRef),
    Enum(EnumValue),
    /// A nested inspectable; reach it through the descriptor's nested accessor
    Nested { type_name: &'static str },
    /// A value with no editable representation
    Opaque { type_name: &'static str },
}

impl Value {
    /// The tag this value would carry if it were declared statically
    pub fn tag(&self) -> TypeTag {
        match self {
            Value::Bool(_) => TypeTag::Bool,
            Value::Int32(_) => TypeTag::Int32,
            Value::Int64(_) => TypeTag::Int64,
            Value::Float32(_) => TypeTag::Float32,
            Value::Float64(_) => TypeTag::Float64,
            Value::Text(_) => TypeTag::Text,
            Value::Vec2(_) | Value::DVec2(_) => TypeTag::Vec2,
            Value::Vec3(_) | Value::DVec3(_) => TypeTag::Vec3,
            Value::Vec4(_) | Value::DVec4(_) => TypeTag::Vec4,
            Value::Quat(_) | Value::DQuat(_) => TypeTag::Quaternion,
            Value::File(_) => TypeTag::FileRef,
            Value::Enum(e) => match e.kind {
                EnumKind::Fixed => TypeTag::EnumFixed,
                EnumKind::Extendable => TypeTag::EnumExtendable,
            },
            Value::Nested { .. } => TypeTag::NestedInspectable,
            Value::Opaque { .. } => TypeTag::Unknown,
        }
    }

    /// Runtime capability used when the static tag is `Unknown`
    pub fn capability(&self) -> Option<Capability> {
        match self {
            Value::Enum(e) => Some(match e.kind {
                EnumKind::Fixed => Capability::FixedEnum,
                EnumKind::Extendable => Capability::ExtendableEnum,
            }),
            Value::Nested { .. } => Some(Capability::Inspectable),
            _ => None,
        }
    }

    /// Precision of vector and quaternion values
    pub fn precision(&self) -> Option<Precision> {
        match self {
            Value::Vec2(_) | Value::Vec3(_) | Value::Vec4(_) | Value::Quat(_) => {
                Some(Precision::Single)
            }
            Value::DVec2(_) | Value::DVec3(_) | Value::DVec4(_) | Value::DQuat(_) => {
                Some(Precision::Double)
            }
            _ => None,
        }
    }

    /// Name of the concrete representation, used in diagnostics
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Bool(_) => "bool",
            Value::Int32(_) => "i32",
            Value::Int64(_) => "i64",
            Value::Float32(_) => "f32",
            Value::Float64(_) => "f64",
            Value::Text(_) => "String",
            Value::Vec2(_) => "Vec2",
            Value::DVec2(_) => "DVec2",
            Value::Vec3(_) => "Vec3",
            Value::DVec3(_) => "DVec3",
            Value::Vec4(_) => "Vec4",
            Value::DVec4(_) => "DVec4",
            Value::Quat(_) => "Quat",
            Value::DQuat(_) => "DQuat",
            Value::File(_) => "FileRef",
            Value::Enum(e) => e.type_name,
            Value::Nested { type_name } | Value::Opaque { type_name } => type_name,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Bool(v) => write!(f, "{v}"),
            Value::Int32(v) => write!(f, "{v}"),
            Value::Int64(v) => write!(f, "{v}"),
            Value::Float32(v) => write!(f, "{v}"),
            Value::Float64(v) => write!(f, "{v}"),
            Value::Text(v) => write!(f, "\"{v}\""),
            Value::Vec2(v) => write!(f, "({}, {})", v.x, v.y),
            Value::DVec2(v) => write!(f, "({}, {})", v.x, v.y),
            Value::Vec3(v) => write!(f, "({}, {}, {})", v.x, v.y, v.z),
            Value::DVec3(v) => write!(f, "({}, {}, {})", v.x, v.y, v.z),
            Value::Vec4(v) => write!(f, "({}, {}, {}, {})", v.x, v.y, v.z, v.w),
            Value::DVec4(v) => write!(f, "({}, {}, {}, {})", v.x, v.y, v.z, v.w),
            Value::Quat(q) => write!(f, "quat({}, {}, {}, {})", q.x, q.y, q.z, q.w),
            Value::DQuat(q) => write!(f, "quat({}, {}, {}, {})", q.x, q.y, q.z, q.w),
            Value::File(file) => write!(f, "{file}"),
            Value::Enum(e) => write!(f, "{}::{}", e.type_name, e.selected_name().unwrap_or("?")),
            Value::Nested { type_name } => write!(f, "<{type_name}>"),
            Value::Opaque { type_name } => write!(f, "<opaque {type_name}>"),
        }
    }
}

/// Conversion between a concrete field type and [`Value`]
///
/// Implemented for every type that can appear as an inspectable field. Types
/// that keep the default `TAG` are classified at run time by the capability of
/// the value they produce.
pub trait Property: Sized + Send + Sync + 'static {
    /// Static tag of this field type
    const TAG: TypeTag = TypeTag::Unknown;

    /// Read the field into a dynamic value
    fn to_value(&self) -> Value;

    /// Write a dynamic value into the field, coercing where possible
    fn assign(&mut self, value: Value) -> Result<(), CoercionError>;

    /// Mutable access to the field as a nested inspectable
    fn as_inspectable_mut(&mut self) -> Option<&mut dyn Inspectable> {
        None
    }
}

macro_rules! copy_property {
    ($ty:ty, $tag:ident, $variant:ident, $coerce:path) => {
        impl Property for $ty {
            const TAG: TypeTag = TypeTag::$tag;

            fn to_value(&self) -> Value {
                Value::$variant(*self)
            }

            fn assign(&mut self, value: Value) -> Result<(), CoercionError> {
                *self = $coerce(&value)?;
                Ok(())
            }
        }
    };
}

copy_property!(bool, Bool, Bool, coerce::to_bool);
copy_property!(i32, Int32, Int32, coerce::to_i32);
copy_property!(i64, Int64, Int64, coerce::to_i64);
copy_property!(f32, Float32, Float32, coerce::to_f32);
copy_property!(f64, Float64, Float64, coerce::to_f64);
copy_property!(Vec2, Vec2, Vec2, coerce::to_vec2);
copy_property!(DVec2, Vec2, DVec2, coerce::to_dvec2);
copy_property!(Vec3, Vec3, Vec3, coerce::to_vec3);
copy_property!(DVec3, Vec3, DVec3, coerce::to_dvec3);
copy_property!(Vec4, Vec4, Vec4, coerce::to_vec4);
copy_property!(DVec4, Vec4, DVec4, coerce::to_dvec4);
copy_property!(Quat, Quaternion, Quat, coerce::to_quat);
copy_property!(DQuat, Quaternion, DQuat, coerce::to_dquat);

// owned values are cloned out of the field
macro_rules! owned_property {
    ($ty:ty, $tag:ident, $variant:ident, $coerce:path) => {
        impl Property for $ty {
            const TAG: TypeTag = TypeTag::$tag;

            fn to_value(&self) -> Value {
                Value::$variant(self.clone())
            }

            fn assign(&mut self, value: Value) -> Result<(), CoercionError> {
                *self = $coerce(&value)?;
                Ok(())
            }
        }
    };
}

owned_property!(String, Text, Text, coerce::to_text);
owned_property!(FileRef, FileRef, File, coerce::to_file);
