//! Reflection and coercion errors

use super::tag::TypeTag;

/// Failure to convert a dynamic value into a field's representation
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CoercionError {
    #[error("cannot coerce {found} into {expected}")]
    Mismatch {
        expected: TypeTag,
        found: &'static str,
    },

    #[error("vector with {0} components is not editable")]
    ComponentCount(usize),

    #[error("`{member}` is not a member of {type_name}")]
    UnknownMember {
        type_name: &'static str,
        member: String,
    },

    #[error("{0} cannot be replaced through the inspector")]
    NotAssignable(&'static str),
}

/// Failure of a reflective property accessor
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ReflectError {
    #[error("accessor expected an owner of type {expected}")]
    OwnerMismatch { expected: &'static str },

    #[error("property `{0}` is read-only")]
    ReadOnly(&'static str),

    #[error("failed to access `{property}`: {reason}")]
    Access {
        property: &'static str,
        reason: String,
    },

    #[error(transparent)]
    Coercion(#[from] CoercionError),
}

impl ReflectError {
    /// Accessor failure with a free-form reason
    pub fn access(property: &'static str, reason: impl Into<String>) -> Self {
        ReflectError::Access {
            property,
            reason: reason.into(),
        }
    }
}
