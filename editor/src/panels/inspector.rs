//! Property inspector panel
//!
//! Draws every visible property of the first selected node, section by
//! section, and writes committed edits back through the property setters.

use crate::dispatch::{PropertyRow, TypeDispatchRegistry, WidgetOutcome};
use crate::host::{TreeNodeOptions, WidgetHost};
use crate::reflector::{display_name, PropertyReflector};
use crate::report::{ActionRecord, CommitRecord, FaultRecord, FrameReport};
use crate::selection::SelectionModel;
use crate::settings::InspectorSettings;
use crate::state_cache::{OwnerId, WidgetStateCache};
use engine::reflect::{Inspectable, PropertyDescriptor, TypeReflection, Value};
use engine::scene::SceneGraph;
use std::any::TypeId;
use tracing::{debug, warn};

pub const NOTHING_SELECTED: &str = "Nothing selected";
pub const DEBUG_ACTIONS: &str = "Debug Actions";

/// Everything a widget may touch while the inspector draws one frame
pub struct InspectorContext<'a> {
    pub host: &'a mut dyn WidgetHost,
    pub cache: &'a mut WidgetStateCache,
    pub reflector: &'a mut PropertyReflector,
    pub dispatch: &'a TypeDispatchRegistry,
    pub settings: &'a InspectorSettings,
    pub report: &'a mut FrameReport,
    /// Objects currently open above the row being drawn, outermost first
    open_objects: Vec<(usize, TypeId)>,
}

impl<'a> InspectorContext<'a> {
    pub fn new(
        host: &'a mut dyn WidgetHost,
        cache: &'a mut WidgetStateCache,
        reflector: &'a mut PropertyReflector,
        dispatch: &'a TypeDispatchRegistry,
        settings: &'a InspectorSettings,
        report: &'a mut FrameReport,
    ) -> Self {
        Self {
            host,
            cache,
            reflector,
            dispatch,
            settings,
            report,
            open_objects: Vec::new(),
        }
    }

    /// Nesting depth of the object being drawn
    pub fn depth(&self) -> usize {
        self.open_objects.len()
    }

    fn fault(&mut self, owner: &OwnerId, property: &'static str, label: &str, message: String) {
        self.host.error_text(&format!("{label}: {message}"));
        self.report.faults.push(FaultRecord {
            owner: owner.clone(),
            property,
            message,
        });
    }
}

/// Draw the inspector body for the current selection
pub fn draw_inspector_panel(
    ctx: &mut InspectorContext<'_>,
    scene: &mut SceneGraph,
    selection: &SelectionModel,
) {
    let Some(node) = selection.first() else {
        ctx.host.text(NOTHING_SELECTED);
        return;
    };

    match scene.object_mut(node) {
        Ok(object) => {
            let revision = object.revision();
            draw_nested(ctx, object, &OwnerId::root(node), revision);
        }
        Err(e) => {
            warn!(node = ?node, error = %e, "Selected node has nothing to inspect");
            ctx.host.error_text(&e.to_string());
        }
    }
}

/// Draw an object that may already be open further up, guarding depth and cycles
///
/// `revision` is the enclosing owner's revision, used when the object has none.
pub fn draw_nested(
    ctx: &mut InspectorContext<'_>,
    object: &mut dyn Inspectable,
    owner: &OwnerId,
    revision: Option<u64>,
) {
    let identity = (
        std::ptr::from_ref(&*object).cast::<()>() as usize,
        object.as_any().type_id(),
    );

    if ctx.depth() >= ctx.settings.max_nesting_depth {
        debug!(type_name = object.type_name(), depth = ctx.depth(), "Nesting limit reached");
        ctx.host.text_disabled(&format!(
            "{}: nesting limit of {} reached",
            object.type_name(),
            ctx.settings.max_nesting_depth
        ));
        return;
    }
    if ctx.open_objects.contains(&identity) {
        debug!(type_name = object.type_name(), "Cycle in nested inspectables");
        ctx.host
            .text_disabled(&format!("{}: already open above", object.type_name()));
        return;
    }

    ctx.open_objects.push(identity);
    let revision = object.revision().or(revision);
    draw_inspectable(ctx, object, owner, revision);
    ctx.open_objects.pop();
}

fn draw_inspectable(
    ctx: &mut InspectorContext<'_>,
    object: &mut dyn Inspectable,
    owner: &OwnerId,
    revision: Option<u64>,
) {
    let reflection = ctx.reflector.reflection(object);
    let sections = PropertyReflector::describe(&reflection, object);

    for section in &sections {
        let title = display_name(section.declaring_type);
        if !ctx.host.tree_node(&title, TreeNodeOptions::section()).open {
            continue;
        }

        for group in &section.groups {
            let Some(group_name) = group.name else {
                for property in &group.properties {
                    draw_property(ctx, object, owner, revision, property);
                }
                continue;
            };

            if ctx
                .host
                .tree_node(&display_name(group_name), TreeNodeOptions::default())
                .open
            {
                for property in &group.properties {
                    draw_property(ctx, object, owner, revision, property);
                }
                ctx.host.tree_pop();
            }
        }

        ctx.host.tree_pop();
    }

    draw_debug_actions(ctx, object, owner, &reflection);
}

fn draw_property(
    ctx: &mut InspectorContext<'_>,
    object: &mut dyn Inspectable,
    owner: &OwnerId,
    revision: Option<u64>,
    descriptor: &PropertyDescriptor,
) {
    let label = display_name(descriptor.name);
    ctx.host.push_id(descriptor.name);

    match descriptor.get(object.as_any()) {
        Err(e) => {
            warn!(property = descriptor.name, error = %e, "Property getter failed");
            ctx.fault(owner, descriptor.name, &label, e.to_string());
        }
        Ok(value) if descriptor.is_read_only() => {
            ctx.host.text_disabled(&format!("{label}: {value}"));
        }
        Ok(value) => {
            let widget = ctx
                .dispatch
                .widget_for(descriptor.value_tag, value.capability());
            let row = PropertyRow {
                owner,
                descriptor,
                label,
                value,
                revision,
            };
            match widget(ctx, object, &row) {
                WidgetOutcome::Idle => {}
                WidgetOutcome::Commit(value) => commit(ctx, object, &row, value),
                WidgetOutcome::Fault(message) => {
                    ctx.fault(owner, descriptor.name, &row.label, message);
                }
            }
        }
    }

    ctx.host.pop_id();
}

fn commit(
    ctx: &mut InspectorContext<'_>,
    object: &mut dyn Inspectable,
    row: &PropertyRow<'_>,
    value: Value,
) {
    let property = row.descriptor.name;
    match row.descriptor.set(object.as_any_mut(), value.clone()) {
        Ok(()) => {
            debug!(node = ?row.owner.node, property, value = %value, "Committed property edit");
            ctx.report.commits.push(CommitRecord {
                owner: row.owner.clone(),
                property,
                value,
            });
        }
        Err(e) => {
            warn!(property, error = %e, "Rejected property edit");
            ctx.cache.resynchronize(&row.state_key());
            ctx.fault(row.owner, property, &row.label, e.to_string());
        }
    }
}

fn draw_debug_actions(
    ctx: &mut InspectorContext<'_>,
    object: &mut dyn Inspectable,
    owner: &OwnerId,
    reflection: &TypeReflection,
) {
    if reflection.debug_actions.is_empty()
        || !ctx.host.tree_node(DEBUG_ACTIONS, TreeNodeOptions::section()).open
    {
        return;
    }

    for action in &reflection.debug_actions {
        if !ctx.host.button(&display_name(action.name)) {
            continue;
        }
        match action.invoke(object.as_any_mut()) {
            Ok(()) => {
                debug!(node = ?owner.node, action = action.name, "Invoked debug action");
                ctx.report.actions.push(ActionRecord {
                    owner: owner.clone(),
                    action: action.name,
                });
            }
            Err(e) => ctx.fault(owner, action.name, action.name, e.to_string()),
        }
    }

    ctx.host.tree_pop();
}
