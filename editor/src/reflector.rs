//! Turns a reflection table into the ordered, filtered layout the inspector draws

use engine::reflect::{Inspectable, PropertyDescriptor, TypeReflection};
use std::any::TypeId;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::debug;

/// Properties sharing one group name (or none)
#[derive(Debug)]
pub struct PropertyGroup<'r> {
    pub name: Option<&'static str>,
    pub properties: Vec<&'r PropertyDescriptor>,
}

/// Visible properties declared by one type
#[derive(Debug)]
pub struct TypeSection<'r> {
    pub declaring_type: &'static str,
    pub groups: Vec<PropertyGroup<'r>>,
}

/// Caches reflection tables by concrete type and lays them out per instance
#[derive(Debug, Default)]
pub struct PropertyReflector {
    tables: HashMap<TypeId, Arc<TypeReflection>>,
}

impl PropertyReflector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reflection table for the concrete type of `instance`
    pub fn reflection(&mut self, instance: &dyn Inspectable) -> Arc<TypeReflection> {
        let type_id = instance.as_any().type_id();
        self.tables
            .entry(type_id)
            .or_insert_with(|| {
                let reflection = instance.reflection();
                debug!(
                    type_name = reflection.type_name,
                    properties = reflection.properties.len(),
                    actions = reflection.debug_actions.len(),
                    "Cached type reflection"
                );
                Arc::new(reflection)
            })
            .clone()
    }

    /// Number of cached tables
    pub fn cached_types(&self) -> usize {
        self.tables.len()
    }

    /// Sections and groups to draw for the current state of `instance`
    ///
    /// Drops non-serialized properties and those hidden for this instance.
    /// Sections and groups keep first-appearance order; rows within a group
    /// sort by `order`, ties keeping declaration order.
    pub fn describe<'r>(
        reflection: &'r TypeReflection,
        instance: &dyn Inspectable,
    ) -> Vec<TypeSection<'r>> {
        let owner = instance.as_any();
        let mut sections: Vec<TypeSection<'r>> = Vec::new();

        for property in reflection
            .properties
            .iter()
            .filter(|p| p.serializable && !p.is_hidden(owner))
        {
            let section = match sections
                .iter()
                .position(|s| s.declaring_type == property.declaring_type)
            {
                Some(index) => &mut sections[index],
                None => {
                    sections.push(TypeSection {
                        declaring_type: property.declaring_type,
                        groups: Vec::new(),
                    });
                    let last = sections.len() - 1;
                    &mut sections[last]
                }
            };

            match section.groups.iter_mut().find(|g| g.name == property.group) {
                Some(group) => group.properties.push(property),
                None => section.groups.push(PropertyGroup {
                    name: property.group,
                    properties: vec![property],
                }),
            }
        }

        for group in sections.iter_mut().flat_map(|s| s.groups.iter_mut()) {
            group
                .properties
                .sort_by_key(|p| (p.order, p.declaration_index));
        }
        sections
    }
}

/// Title-case an identifier for display
///
/// `cast_shadows` becomes "Cast Shadows", `MeshComponent` becomes "Mesh Component".
pub fn display_name(identifier: &str) -> String {
    let mut title = String::with_capacity(identifier.len() + 4);
    let mut previous: Option<char> = None;

    for c in identifier.chars() {
        if c == '_' || c == ' ' {
            if !title.is_empty() && !title.ends_with(' ') {
                title.push(' ');
            }
            previous = None;
            continue;
        }

        let word_start = match previous {
            None => true,
            Some(p) => c.is_uppercase() && (p.is_lowercase() || p.is_ascii_digit()),
        };
        if word_start && !title.is_empty() && !title.ends_with(' ') {
            title.push(' ');
        }
        if word_start {
            title.extend(c.to_uppercase());
        } else {
            title.push(c);
        }
        previous = Some(c);
    }

    title.trim_end().to_string()
}
