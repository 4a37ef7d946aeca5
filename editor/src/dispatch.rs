//! Resolution of a property's tag or runtime capability to its widget

use crate::panels::inspector::InspectorContext;
use crate::state_cache::{OwnerId, WidgetStateKey};
use crate::widgets;
use engine::reflect::{Capability, Inspectable, PropertyDescriptor, TypeTag, Value};
use std::collections::HashMap;
use tracing::trace;

/// One property about to be drawn
pub struct PropertyRow<'a> {
    pub owner: &'a OwnerId,
    pub descriptor: &'a PropertyDescriptor,
    /// Display label
    pub label: String,
    /// Value read through the getter this frame
    pub value: Value,
    /// Owner revision this frame
    pub revision: Option<u64>,
}

impl PropertyRow<'_> {
    pub fn state_key(&self) -> WidgetStateKey {
        WidgetStateKey::new(
            self.owner.clone(),
            self.descriptor.declaring_type,
            self.descriptor.name,
        )
    }
}

/// Result of drawing one widget
#[derive(Debug, Clone, PartialEq)]
pub enum WidgetOutcome {
    Idle,
    /// The user committed a new value this frame
    Commit(Value),
    /// The widget could not draw the value
    Fault(String),
}

/// Draws one property row; `owner` is the object the row belongs to
pub type WidgetFn =
    fn(&mut InspectorContext<'_>, &mut dyn Inspectable, &PropertyRow<'_>) -> WidgetOutcome;

/// Maps tags and capabilities to widget routines
///
/// A known tag resolves to its dedicated widget. `Unknown` probes the value's
/// capability in [`Capability::PROBE_ORDER`], and anything still unresolved
/// falls back to a diagnostic row.
pub struct TypeDispatchRegistry {
    by_tag: HashMap<TypeTag, WidgetFn>,
    by_capability: HashMap<Capability, WidgetFn>,
    fallback: WidgetFn,
}

impl Default for TypeDispatchRegistry {
    fn default() -> Self {
        let mut registry = Self::empty();
        registry
            .register(TypeTag::Bool, widgets::bool_widget)
            .register(TypeTag::Int32, widgets::int32_widget)
            .register(TypeTag::Int64, widgets::int64_widget)
            .register(TypeTag::Float32, widgets::float32_widget)
            .register(TypeTag::Float64, widgets::float64_widget)
            .register(TypeTag::Text, widgets::text_widget)
            .register(TypeTag::FileRef, widgets::file_widget)
            .register(TypeTag::Vec2, widgets::vector_widget)
            .register(TypeTag::Vec3, widgets::vector_widget)
            .register(TypeTag::Vec4, widgets::vector_widget)
            .register(TypeTag::Quaternion, widgets::quaternion_widget)
            .register(TypeTag::EnumFixed, widgets::enum_widget)
            .register(TypeTag::EnumExtendable, widgets::enum_widget)
            .register(TypeTag::NestedInspectable, widgets::nested_widget);
        registry
            .register_capability(Capability::FixedEnum, widgets::enum_widget)
            .register_capability(Capability::ExtendableEnum, widgets::enum_widget)
            .register_capability(Capability::Inspectable, widgets::nested_widget);
        registry
    }
}

impl TypeDispatchRegistry {
    /// Registry with only the diagnostic fallback
    pub fn empty() -> Self {
        Self {
            by_tag: HashMap::new(),
            by_capability: HashMap::new(),
            fallback: widgets::unknown_widget,
        }
    }

    /// Route `tag` to `widget`; registering `Unknown` has no effect
    pub fn register(&mut self, tag: TypeTag, widget: WidgetFn) -> &mut Self {
        if tag != TypeTag::Unknown {
            self.by_tag.insert(tag, widget);
        }
        self
    }

    pub fn register_capability(&mut self, capability: Capability, widget: WidgetFn) -> &mut Self {
        self.by_capability.insert(capability, widget);
        self
    }

    /// Widget for a property with static `tag` whose value has `capability`
    pub fn widget_for(&self, tag: TypeTag, capability: Option<Capability>) -> WidgetFn {
        if let Some(widget) = self.by_tag.get(&tag) {
            return *widget;
        }
        if let Some(capability) = capability {
            let probed = Capability::PROBE_ORDER
                .iter()
                .filter(|c| **c == capability)
                .find_map(|c| self.by_capability.get(c));
            if let Some(widget) = probed {
                trace!(tag = %tag, capability = ?capability, "Resolved widget by capability");
                return *widget;
            }
        }
        self.fallback
    }
}
