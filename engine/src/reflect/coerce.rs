//! Best-effort coercion of dynamic values into canonical representations
//!
//! Widgets display through these helpers; a value that cannot be coerced falls
//! back to a default for display instead of faulting the row.

use super::error::CoercionError;
use super::tag::TypeTag;
use super::value::{Precision, Value};
use crate::file_ref::FileRef;
use glam::{DQuat, DVec2, DVec3, DVec4, EulerRot, Quat, Vec2, Vec3, Vec4};
use tracing::debug;

fn mismatch(expected: TypeTag, found: &Value) -> CoercionError {
    CoercionError::Mismatch {
        expected,
        found: found.type_name(),
    }
}

fn parse_text<T: std::str::FromStr>(
    text: &str,
    expected: TypeTag,
    found: &Value,
) -> Result<T, CoercionError> {
    text.trim().parse().map_err(|_| mismatch(expected, found))
}

pub fn to_bool(value: &Value) -> Result<bool, CoercionError> {
    match value {
        Value::Bool(v) => Ok(*v),
        Value::Int32(v) => Ok(*v != 0),
        Value::Int64(v) => Ok(*v != 0),
        Value::Float32(v) => Ok(*v != 0.0),
        Value::Float64(v) => Ok(*v != 0.0),
        Value::Text(text) => match text.trim().to_ascii_lowercase().as_str() {
            "true" | "1" | "yes" | "on" => Ok(true),
            "false" | "0" | "no" | "off" | "" => Ok(false),
            _ => Err(mismatch(TypeTag::Bool, value)),
        },
        other => Err(mismatch(TypeTag::Bool, other)),
    }
}

pub fn to_i32(value: &Value) -> Result<i32, CoercionError> {
    match value {
        Value::Int32(v) => Ok(*v),
        Value::Int64(v) => Ok((*v).clamp(i32::MIN as i64, i32::MAX as i64) as i32),
        Value::Float32(v) => Ok(*v as i32),
        Value::Float64(v) => Ok(*v as i32),
        Value::Bool(v) => Ok(*v as i32),
        Value::Text(text) => parse_text(text, TypeTag::Int32, value),
        other => Err(mismatch(TypeTag::Int32, other)),
    }
}

pub fn to_i64(value: &Value) -> Result<i64, CoercionError> {
    match value {
        Value::Int64(v) => Ok(*v),
        Value::Int32(v) => Ok(*v as i64),
        Value::Float32(v) => Ok(*v as i64),
        Value::Float64(v) => Ok(*v as i64),
        Value::Bool(v) => Ok(*v as i64),
        Value::Text(text) => parse_text(text, TypeTag::Int64, value),
        other => Err(mismatch(TypeTag::Int64, other)),
    }
}

pub fn to_f32(value: &Value) -> Result<f32, CoercionError> {
    match value {
        Value::Float32(v) => Ok(*v),
        Value::Float64(v) => Ok(*v as f32),
        Value::Int32(v) => Ok(*v as f32),
        Value::Int64(v) => Ok(*v as f32),
        Value::Bool(v) => Ok(if *v { 1.0 } else { 0.0 }),
        Value::Text(text) => parse_text(text, TypeTag::Float32, value),
        other => Err(mismatch(TypeTag::Float32, other)),
    }
}

pub fn to_f64(value: &Value) -> Result<f64, CoercionError> {
    match value {
        Value::Float64(v) => Ok(*v),
        Value::Float32(v) => Ok(*v as f64),
        Value::Int32(v) => Ok(*v as f64),
        Value::Int64(v) => Ok(*v as f64),
        Value::Bool(v) => Ok(if *v { 1.0 } else { 0.0 }),
        Value::Text(text) => parse_text(text, TypeTag::Float64, value),
        other => Err(mismatch(TypeTag::Float64, other)),
    }
}

pub fn to_text(value: &Value) -> Result<String, CoercionError> {
    match value {
        Value::Text(text) => Ok(text.clone()),
        Value::File(file) => Ok(file.as_str().to_string()),
        Value::Enum(e) => e
            .selected_name()
            .map(str::to_string)
            .ok_or_else(|| mismatch(TypeTag::Text, value)),
        Value::Bool(_) | Value::Int32(_) | Value::Int64(_) | Value::Float32(_) | Value::Float64(_) => {
            Ok(value.to_string())
        }
        other => Err(mismatch(TypeTag::Text, other)),
    }
}

pub fn to_file(value: &Value) -> Result<FileRef, CoercionError> {
    match value {
        Value::File(file) => Ok(file.clone()),
        Value::Text(text) => Ok(FileRef::new(text.as_str())),
        other => Err(mismatch(TypeTag::FileRef, other)),
    }
}

pub fn to_vec2(value: &Value) -> Result<Vec2, CoercionError> {
    match value {
        Value::Vec2(v) => Ok(*v),
        Value::DVec2(v) => Ok(v.as_vec2()),
        other => Err(mismatch(TypeTag::Vec2, other)),
    }
}

pub fn to_dvec2(value: &Value) -> Result<DVec2, CoercionError> {
    match value {
        Value::DVec2(v) => Ok(*v),
        Value::Vec2(v) => Ok(v.as_dvec2()),
        other => Err(mismatch(TypeTag::Vec2, other)),
    }
}

pub fn to_vec3(value: &Value) -> Result<Vec3, CoercionError> {
    match value {
        Value::Vec3(v) => Ok(*v),
        Value::DVec3(v) => Ok(v.as_vec3()),
        other => Err(mismatch(TypeTag::Vec3, other)),
    }
}

pub fn to_dvec3(value: &Value) -> Result<DVec3, CoercionError> {
    match value {
        Value::DVec3(v) => Ok(*v),
        Value::Vec3(v) => Ok(v.as_dvec3()),
        other => Err(mismatch(TypeTag::Vec3, other)),
    }
}

pub fn to_vec4(value: &Value) -> Result<Vec4, CoercionError> {
    match value {
        Value::Vec4(v) => Ok(*v),
        Value::DVec4(v) => Ok(v.as_vec4()),
        other => Err(mismatch(TypeTag::Vec4, other)),
    }
}

pub fn to_dvec4(value: &Value) -> Result<DVec4, CoercionError> {
    match value {
        Value::DVec4(v) => Ok(*v),
        Value::Vec4(v) => Ok(v.as_dvec4()),
        other => Err(mismatch(TypeTag::Vec4, other)),
    }
}

pub fn to_quat(value: &Value) -> Result<Quat, CoercionError> {
    match value {
        Value::Quat(q) => Ok(*q),
        Value::DQuat(q) => Ok(q.as_quat()),
        other => Err(mismatch(TypeTag::Quaternion, other)),
    }
}

pub fn to_dquat(value: &Value) -> Result<DQuat, CoercionError> {
    match value {
        Value::DQuat(q) => Ok(*q),
        Value::Quat(q) => Ok(q.as_dquat()),
        other => Err(mismatch(TypeTag::Quaternion, other)),
    }
}

/// Vector components narrowed to the UI's single-precision editing buffer
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VectorComponents {
    pub values: [f32; 4],
    pub len: usize,
    pub precision: Precision,
}

impl VectorComponents {
    /// Zeroed components, used when a value cannot be read as a vector
    pub fn zeroed(len: usize) -> Self {
        Self {
            values: [0.0; 4],
            len: len.min(4),
            precision: Precision::Single,
        }
    }

    pub fn as_slice(&self) -> &[f32] {
        &self.values[..self.len]
    }

    pub fn as_mut_slice(&mut self) -> &mut [f32] {
        &mut self.values[..self.len]
    }
}

pub fn vector_components(value: &Value) -> Result<VectorComponents, CoercionError> {
    let (values, len) = match value {
        Value::Vec2(v) => ([v.x, v.y, 0.0, 0.0], 2),
        Value::DVec2(v) => ([v.x as f32, v.y as f32, 0.0, 0.0], 2),
        Value::Vec3(v) => ([v.x, v.y, v.z, 0.0], 3),
        Value::DVec3(v) => ([v.x as f32, v.y as f32, v.z as f32, 0.0], 3),
        Value::Vec4(v) => (v.to_array(), 4),
        Value::DVec4(v) => (v.as_vec4().to_array(), 4),
        other => return Err(mismatch(TypeTag::Vec3, other)),
    };
    Ok(VectorComponents {
        values,
        len,
        precision: value.precision().unwrap_or(Precision::Single),
    })
}

/// Rebuild a vector value in the requested precision from edited components
pub fn rebuild_vector(precision: Precision, values: &[f32]) -> Result<Value, CoercionError> {
    let value = match (values, precision) {
        ([x, y], Precision::Single) => Value::Vec2(Vec2::new(*x, *y)),
        ([x, y], Precision::Double) => Value::DVec2(DVec2::new(*x as f64, *y as f64)),
        ([x, y, z], Precision::Single) => Value::Vec3(Vec3::new(*x, *y, *z)),
        ([x, y, z], Precision::Double) => {
            Value::DVec3(DVec3::new(*x as f64, *y as f64, *z as f64))
        }
        ([x, y, z, w], Precision::Single) => Value::Vec4(Vec4::new(*x, *y, *z, *w)),
        ([x, y, z, w], Precision::Double) => {
            Value::DVec4(DVec4::new(*x as f64, *y as f64, *z as f64, *w as f64))
        }
        _ => return Err(CoercionError::ComponentCount(values.len())),
    };
    Ok(value)
}

/// Orientation as (X, Y, Z) angles in degrees, using the YXZ rotation order
///
/// Known approximation: the angles are recomputed from the quaternion on every
/// call, so orientations near a pitch of +-90 degrees may show angle jumps.
pub fn quat_to_euler_degrees(value: &Value) -> Result<[f32; 3], CoercionError> {
    let (yaw, pitch, roll) = match value {
        Value::Quat(q) => {
            let (y, x, z) = q.to_euler(EulerRot::YXZ);
            (y as f64, x as f64, z as f64)
        }
        Value::DQuat(q) => q.to_euler(EulerRot::YXZ),
        other => return Err(mismatch(TypeTag::Quaternion, other)),
    };
    Ok([
        pitch.to_degrees() as f32,
        yaw.to_degrees() as f32,
        roll.to_degrees() as f32,
    ])
}

/// Full quaternion from (X, Y, Z) angles in degrees: yaw, then pitch, then roll
pub fn euler_degrees_to_quat(precision: Precision, degrees: [f32; 3]) -> Value {
    let [x, y, z] = degrees.map(|d| (d as f64).to_radians());
    match precision {
        Precision::Single => {
            Value::Quat(Quat::from_euler(EulerRot::YXZ, y as f32, x as f32, z as f32))
        }
        Precision::Double => Value::DQuat(DQuat::from_euler(EulerRot::YXZ, y, x, z)),
    }
}

/// Unwrap a coercion for display, falling back to the type's default
pub fn or_default<T: Default>(result: Result<T, CoercionError>, property: &str) -> T {
    result.unwrap_or_else(|e| {
        debug!(property, error = %e, "Coercion failed, displaying default");
        T::default()
    })
}
