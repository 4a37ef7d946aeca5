//! Zero-argument debug actions

use super::error::ReflectError;
use std::any::{type_name, Any};
use std::fmt;
use std::sync::Arc;

type ActionFn = Arc<dyn Fn(&mut dyn Any) -> Result<(), ReflectError> + Send + Sync>;

/// A zero-argument method exposed by an inspectable type
///
/// Invoked immediately when its button is clicked; nothing is captured beyond
/// the side effect on the owner.
#[derive(Clone)]
pub struct DebugAction {
    pub name: &'static str,
    call: ActionFn,
}

impl DebugAction {
    pub fn new<O: Any>(name: &'static str, action: fn(&mut O)) -> Self {
        Self {
            name,
            call: Arc::new(move |owner: &mut dyn Any| {
                let owner = owner
                    .downcast_mut::<O>()
                    .ok_or(ReflectError::OwnerMismatch {
                        expected: type_name::<O>(),
                    })?;
                action(owner);
                Ok(())
            }),
        }
    }

    /// Run the action against `owner`
    pub fn invoke(&self, owner: &mut dyn Any) -> Result<(), ReflectError> {
        (self.call)(owner)
    }

    /// Re-root this action from an inner type `I` onto an outer type `O`
    pub fn project<O: Any, I: Any>(self, to_inner_mut: fn(&mut O) -> &mut I) -> Self {
        let call = self.call;
        Self {
            name: self.name,
            call: Arc::new(move |owner: &mut dyn Any| {
                let outer = owner
                    .downcast_mut::<O>()
                    .ok_or(ReflectError::OwnerMismatch {
                        expected: type_name::<O>(),
                    })?;
                call(to_inner_mut(outer))
            }),
        }
    }
}

impl fmt::Debug for DebugAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DebugAction")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}
