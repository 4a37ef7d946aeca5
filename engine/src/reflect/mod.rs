//! Reflection layer for inspectable objects
//!
//! Every inspectable type publishes a [`TypeReflection`]: an ordered table of
//! [`PropertyDescriptor`]s plus zero-argument [`DebugAction`]s. The table is built
//! per type (usually by `#[derive(Inspectable)]`) and never per instance.

pub mod action;
pub mod coerce;
pub mod descriptor;
pub mod enums;
pub mod error;
pub mod tag;
pub mod value;

pub use action::DebugAction;
pub use descriptor::PropertyDescriptor;
pub use engine_derive::{InspectEnum, Inspectable};
pub use enums::{EnumRegistry, ExtendableEnum, FixedEnum};
pub use error::{CoercionError, ReflectError};
pub use tag::{Capability, TypeTag};
pub use value::{EnumKind, EnumValue, Precision, Property, Value};

use std::any::Any;
use tracing::trace;

/// An object that exposes a reflective property description for editing
///
/// The inspector never owns an `Inspectable`; it reads and writes through the
/// accessors of the type's [`TypeReflection`].
pub trait Inspectable: Any + Send + Sync {
    /// Build the reflection table for this type
    fn type_reflection() -> TypeReflection
    where
        Self: Sized;

    /// Reflection table for the concrete type behind a trait object
    fn reflection(&self) -> TypeReflection;

    /// Human-readable type name, used for titling
    fn type_name(&self) -> &'static str;

    fn as_any(&self) -> &dyn Any;

    fn as_any_mut(&mut self) -> &mut dyn Any;

    /// Revision counter bumped whenever the object is mutated outside the inspector
    ///
    /// Objects returning `None` are never resynchronized into cached widget state.
    fn revision(&self) -> Option<u64> {
        None
    }
}

/// Reflection table of one inspectable type
#[derive(Clone)]
pub struct TypeReflection {
    /// Name of the reflected type
    pub type_name: &'static str,
    /// Properties in declaration order, including flattened ones
    pub properties: Vec<PropertyDescriptor>,
    /// Zero-argument actions exposed as buttons
    pub debug_actions: Vec<DebugAction>,
}

impl TypeReflection {
    /// Create an empty reflection table
    pub fn new(type_name: &'static str) -> Self {
        Self {
            type_name,
            properties: Vec::new(),
            debug_actions: Vec::new(),
        }
    }

    /// Append a property; its declaration index is its position in the table
    pub fn with_property(mut self, mut property: PropertyDescriptor) -> Self {
        property.declaration_index = self.properties.len();
        self.properties.push(property);
        self
    }

    /// Append a debug action
    pub fn with_action(mut self, action: DebugAction) -> Self {
        self.debug_actions.push(action);
        self
    }

    /// Append all properties and actions of a composed inner type
    ///
    /// The inner properties keep their own declaring type, so they surface as a
    /// separate bucket when the inspector groups by declaring type.
    pub fn extend_flattened<O: Any, I: Any>(
        mut self,
        inner: TypeReflection,
        to_inner: fn(&O) -> &I,
        to_inner_mut: fn(&mut O) -> &mut I,
    ) -> Self {
        trace!(
            outer = self.type_name,
            inner = inner.type_name,
            properties = inner.properties.len(),
            "Flattening reflection"
        );
        for property in inner.properties {
            self = self.with_property(property.project(to_inner, to_inner_mut));
        }
        for action in inner.debug_actions {
            self.debug_actions.push(action.project(to_inner_mut));
        }
        self
    }

    /// Look up a property by name
    pub fn property(&self, name: &str) -> Option<&PropertyDescriptor> {
        self.properties.iter().find(|p| p.name == name)
    }

    /// Look up a debug action by name
    pub fn action(&self, name: &str) -> Option<&DebugAction> {
        self.debug_actions.iter().find(|a| a.name == name)
    }
}

impl std::fmt::Debug for TypeReflection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TypeReflection")
            .field("type_name", &self.type_name)
            .field("properties", &self.properties)
            .field("debug_actions", &self.debug_actions)
            .finish()
    }
}
