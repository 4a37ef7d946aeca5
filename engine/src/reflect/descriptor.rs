//! Property descriptors: immutable metadata plus an accessor pair

use super::error::ReflectError;
use super::tag::TypeTag;
use super::value::{Property, Value};
use super::Inspectable;
use std::any::{type_name, Any};
use std::fmt;
use std::sync::Arc;

/// Reads a property from its owner
pub type Getter = Arc<dyn Fn(&dyn Any) -> Result<Value, ReflectError> + Send + Sync>;

/// Writes a property back onto its owner
pub type Setter = Arc<dyn Fn(&mut dyn Any, Value) -> Result<(), ReflectError> + Send + Sync>;

/// Reaches a property as a nested inspectable
pub type NestedAccessor =
    Arc<dyn for<'a> Fn(&'a mut dyn Any) -> Option<&'a mut dyn Inspectable> + Send + Sync>;

/// Instance-sensitive visibility predicate
pub type HidePredicate = Arc<dyn Fn(&dyn Any) -> bool + Send + Sync>;

fn nested_accessor<F>(accessor: F) -> NestedAccessor
where
    F: for<'a> Fn(&'a mut dyn Any) -> Option<&'a mut dyn Inspectable> + Send + Sync + 'static,
{
    Arc::new(accessor)
}

fn downcast<O: Any>(owner: &dyn Any) -> Result<&O, ReflectError> {
    owner.downcast_ref::<O>().ok_or(ReflectError::OwnerMismatch {
        expected: type_name::<O>(),
    })
}

fn downcast_mut<O: Any>(owner: &mut dyn Any) -> Result<&mut O, ReflectError> {
    owner.downcast_mut::<O>().ok_or(ReflectError::OwnerMismatch {
        expected: type_name::<O>(),
    })
}

/// Description of one editable property of an inspectable type
///
/// `name` is unique within one owner and declaring type. Descriptors are built
/// per type and shared by every instance of it.
#[derive(Clone)]
pub struct PropertyDescriptor {
    pub name: &'static str,
    /// Type that declared the property; used to bucket and title sections
    pub declaring_type: &'static str,
    /// Optional sub-section name
    pub group: Option<&'static str>,
    /// Layout order within the group; ties keep declaration order
    pub order: i32,
    pub value_tag: TypeTag,
    /// Non-serialized properties are not shown in the inspector
    pub serializable: bool,
    /// Position in the owning type's reflection table
    pub declaration_index: usize,
    read_only: bool,
    hidden: Option<HidePredicate>,
    getter: Getter,
    setter: Setter,
    nested: Option<NestedAccessor>,
}

impl PropertyDescriptor {
    /// Descriptor for a stored field of `O`
    pub fn field<O: Any, T: Property>(
        name: &'static str,
        declaring_type: &'static str,
        get: fn(&O) -> &T,
        get_mut: fn(&mut O) -> &mut T,
    ) -> Self {
        let getter: Getter =
            Arc::new(move |owner: &dyn Any| Ok(get(downcast::<O>(owner)?).to_value()));
        let setter: Setter = Arc::new(move |owner: &mut dyn Any, value: Value| {
            get_mut(downcast_mut::<O>(owner)?)
                .assign(value)
                .map_err(ReflectError::from)
        });
        let nested = nested_accessor(move |owner| {
            owner
                .downcast_mut::<O>()
                .and_then(|owner| get_mut(owner).as_inspectable_mut())
        });

        Self {
            name,
            declaring_type,
            group: None,
            order: 0,
            value_tag: T::TAG,
            serializable: true,
            declaration_index: 0,
            read_only: false,
            hidden: None,
            getter,
            setter,
            nested: Some(nested),
        }
    }

    /// Read-only descriptor whose value is derived by a fallible function
    pub fn computed<O: Any>(
        name: &'static str,
        declaring_type: &'static str,
        value_tag: TypeTag,
        get: impl Fn(&O) -> Result<Value, ReflectError> + Send + Sync + 'static,
    ) -> Self {
        let getter: Getter = Arc::new(move |owner: &dyn Any| get(downcast::<O>(owner)?));
        let setter: Setter = Arc::new(
            move |_: &mut dyn Any, _: Value| -> Result<(), ReflectError> {
                Err(ReflectError::ReadOnly(name))
            },
        );

        Self {
            name,
            declaring_type,
            group: None,
            order: 0,
            value_tag,
            serializable: true,
            declaration_index: 0,
            read_only: true,
            hidden: None,
            getter,
            setter,
            nested: None,
        }
    }

    /// Give a computed descriptor a setter
    pub fn with_setter<O: Any>(
        mut self,
        set: impl Fn(&mut O, Value) -> Result<(), ReflectError> + Send + Sync + 'static,
    ) -> Self {
        self.setter = Arc::new(move |owner: &mut dyn Any, value: Value| {
            set(downcast_mut::<O>(owner)?, value)
        });
        self.read_only = false;
        self
    }

    pub fn with_group(mut self, group: &'static str) -> Self {
        self.group = Some(group);
        self
    }

    pub fn with_order(mut self, order: i32) -> Self {
        self.order = order;
        self
    }

    /// Exclude the property from serialization, which also hides it from the inspector
    pub fn transient(mut self) -> Self {
        self.serializable = false;
        self
    }

    pub fn read_only(mut self) -> Self {
        self.read_only = true;
        self
    }

    /// Hide the property whenever `predicate` holds for the current instance
    pub fn hidden_when<O: Any>(mut self, predicate: fn(&O) -> bool) -> Self {
        self.hidden = Some(Arc::new(move |owner: &dyn Any| {
            downcast::<O>(owner).map(predicate).unwrap_or(false)
        }));
        self
    }

    /// Read the property from `owner`
    pub fn get(&self, owner: &dyn Any) -> Result<Value, ReflectError> {
        (self.getter)(owner)
    }

    /// Write `value` onto `owner`
    pub fn set(&self, owner: &mut dyn Any, value: Value) -> Result<(), ReflectError> {
        if self.read_only {
            return Err(ReflectError::ReadOnly(self.name));
        }
        (self.setter)(owner, value)
    }

    /// Mutable access to the property as a nested inspectable, if it is one
    pub fn nested_mut<'a>(&self, owner: &'a mut dyn Any) -> Option<&'a mut dyn Inspectable> {
        self.nested.as_ref().and_then(|nested| nested(owner))
    }

    /// Whether the property is hidden for the current state of `owner`
    pub fn is_hidden(&self, owner: &dyn Any) -> bool {
        self.hidden
            .as_ref()
            .map(|hidden| hidden(owner))
            .unwrap_or(false)
    }

    pub fn is_read_only(&self) -> bool {
        self.read_only
    }

    /// Re-root this descriptor from an inner type `I` onto an outer type `O`
    pub fn project<O: Any, I: Any>(
        self,
        to_inner: fn(&O) -> &I,
        to_inner_mut: fn(&mut O) -> &mut I,
    ) -> Self {
        let getter = self.getter;
        let setter = self.setter;

        Self {
            getter: Arc::new(move |owner: &dyn Any| getter(to_inner(downcast::<O>(owner)?))),
            setter: Arc::new(move |owner: &mut dyn Any, value: Value| {
                setter(to_inner_mut(downcast_mut::<O>(owner)?), value)
            }),
            nested: self.nested.map(|inner| {
                nested_accessor(move |owner| {
                    let outer = owner.downcast_mut::<O>()?;
                    inner(to_inner_mut(outer))
                })
            }),
            hidden: self.hidden.map(|hidden| -> HidePredicate {
                Arc::new(move |owner: &dyn Any| {
                    downcast::<O>(owner)
                        .map(|outer| hidden(to_inner(outer)))
                        .unwrap_or(false)
                })
            }),
            ..self
        }
    }
}

impl fmt::Debug for PropertyDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PropertyDescriptor")
            .field("name", &self.name)
            .field("declaring_type", &self.declaring_type)
            .field("group", &self.group)
            .field("order", &self.order)
            .field("value_tag", &self.value_tag)
            .field("serializable", &self.serializable)
            .field("read_only", &self.read_only)
            .finish_non_exhaustive()
    }
}
