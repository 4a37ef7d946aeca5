//! Fixed and run-time extendable enumerations

use super::error::CoercionError;
use super::tag::TypeTag;
use super::value::{EnumKind, EnumValue, Property, Value};
use std::sync::{Arc, RwLock};
use tracing::debug;

/// An enumeration with a fixed, compile-time member set
///
/// Usually implemented with `#[derive(InspectEnum)]`.
pub trait FixedEnum: Sized + Send + Sync + 'static {
    const TYPE_NAME: &'static str;
    const MEMBERS: &'static [&'static str];

    /// Position of this member in [`FixedEnum::MEMBERS`]
    fn index(&self) -> usize;

    fn from_index(index: usize) -> Option<Self>;
}

/// Dynamic value of a fixed enum member
pub fn fixed_enum_value<E: FixedEnum>(member: &E) -> Value {
    Value::Enum(EnumValue {
        kind: EnumKind::Fixed,
        type_name: E::TYPE_NAME,
        members: E::MEMBERS.iter().map(|m| m.to_string()).collect(),
        selected: Some(member.index()),
    })
}

/// Resolve a dynamic value (enum, member name or index) to a fixed enum member
pub fn fixed_enum_from_value<E: FixedEnum>(value: &Value) -> Result<E, CoercionError> {
    let unknown = |member: String| CoercionError::UnknownMember {
        type_name: E::TYPE_NAME,
        member,
    };
    let by_name = |name: &str| {
        E::MEMBERS
            .iter()
            .position(|m| *m == name)
            .ok_or_else(|| unknown(name.to_string()))
    };

    let index = match value {
        Value::Enum(e) => match e.selected_name() {
            Some(name) => by_name(name)?,
            None => return Err(unknown("<none>".to_string())),
        },
        Value::Text(name) => by_name(name)?,
        Value::Int32(index) => usize::try_from(*index).map_err(|_| unknown(index.to_string()))?,
        Value::Int64(index) => usize::try_from(*index).map_err(|_| unknown(index.to_string()))?,
        other => {
            return Err(CoercionError::Mismatch {
                expected: TypeTag::EnumFixed,
                found: other.type_name(),
            })
        }
    };
    E::from_index(index).ok_or_else(|| unknown(index.to_string()))
}

/// Shared, growable member list of an extendable enumeration
///
/// Clones share the same list, so members registered at run time are visible
/// to every value created from the registry.
#[derive(Debug, Clone)]
pub struct EnumRegistry {
    type_name: &'static str,
    members: Arc<RwLock<Vec<String>>>,
}

impl EnumRegistry {
    pub fn new<S: Into<String>>(
        type_name: &'static str,
        members: impl IntoIterator<Item = S>,
    ) -> Self {
        Self {
            type_name,
            members: Arc::new(RwLock::new(members.into_iter().map(Into::into).collect())),
        }
    }

    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    /// Snapshot of the current member list
    pub fn members(&self) -> Vec<String> {
        self.members
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    pub fn contains(&self, member: &str) -> bool {
        self.members
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .iter()
            .any(|m| m == member)
    }

    /// Add a member; returns false if it was already present
    pub fn register(&self, member: impl Into<String>) -> bool {
        let member = member.into();
        let mut members = self
            .members
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        if members.contains(&member) {
            return false;
        }
        debug!(enum_type = self.type_name, member = %member, "Registered enum member");
        members.push(member);
        true
    }

    /// Remove a member; returns false if it was not present
    pub fn unregister(&self, member: &str) -> bool {
        let mut members = self
            .members
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        let before = members.len();
        members.retain(|m| m != member);
        before != members.len()
    }

    /// A value of this enumeration selecting `member`
    pub fn value(&self, member: &str) -> Result<ExtendableEnum, CoercionError> {
        if !self.contains(member) {
            return Err(CoercionError::UnknownMember {
                type_name: self.type_name,
                member: member.to_string(),
            });
        }
        Ok(ExtendableEnum {
            registry: self.clone(),
            selected: member.to_string(),
        })
    }
}

/// A value of an extendable enumeration
#[derive(Debug, Clone)]
pub struct ExtendableEnum {
    registry: EnumRegistry,
    selected: String,
}

impl ExtendableEnum {
    pub fn selected(&self) -> &str {
        &self.selected
    }

    pub fn registry(&self) -> &EnumRegistry {
        &self.registry
    }

    /// Select another member of the same registry
    pub fn select(&mut self, member: &str) -> Result<(), CoercionError> {
        *self = self.registry.value(member)?;
        Ok(())
    }

    /// Dynamic value with the member list as it is right now
    pub fn current_value(&self) -> EnumValue {
        let members = self.registry.members();
        let selected = members.iter().position(|m| *m == self.selected);
        EnumValue {
            kind: EnumKind::Extendable,
            type_name: self.registry.type_name,
            members,
            selected,
        }
    }
}

impl PartialEq for ExtendableEnum {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.registry.members, &other.registry.members)
            && self.selected == other.selected
    }
}

impl Property for ExtendableEnum {
    const TAG: TypeTag = TypeTag::EnumExtendable;

    fn to_value(&self) -> Value {
        Value::Enum(self.current_value())
    }

    fn assign(&mut self, value: Value) -> Result<(), CoercionError> {
        let member = match &value {
            Value::Enum(e) => e.selected_name().map(str::to_string),
            Value::Text(name) => Some(name.clone()),
            _ => None,
        };
        match member {
            Some(member) => self.select(&member),
            None => Err(CoercionError::Mismatch {
                expected: TypeTag::EnumExtendable,
                found: value.type_name(),
            }),
        }
    }
}
