//! Built-in widget routines, one per editable kind
//!
//! Scalar and text widgets keep their in-progress edit in the
//! [`WidgetStateCache`](crate::state_cache::WidgetStateCache). Vector,
//! rotation and enum widgets redraw from the current value every frame.

use crate::dispatch::{PropertyRow, WidgetOutcome};
use crate::host::TreeNodeOptions;
use crate::panels::inspector::{self, InspectorContext};
use crate::state_cache::CellValue;
use engine::file_ref::FileRef;
use engine::reflect::coerce::{self, VectorComponents};
use engine::reflect::{Inspectable, Precision, Value};
use tracing::debug;

fn shape_mismatch(ctx: &mut InspectorContext<'_>, row: &PropertyRow<'_>) -> WidgetOutcome {
    ctx.cache.resynchronize(&row.state_key());
    WidgetOutcome::Fault(format!(
        "widget state for {} does not match {}",
        row.label,
        row.value.type_name()
    ))
}

macro_rules! cached_widget {
    ($(#[$doc:meta])* $name:ident, $coerce:path, $cell:ident, $draw:ident, $variant:ident) => {
        $(#[$doc])*
        pub fn $name(
            ctx: &mut InspectorContext<'_>,
            _owner: &mut dyn Inspectable,
            row: &PropertyRow<'_>,
        ) -> WidgetOutcome {
            let current = coerce::or_default($coerce(&row.value), row.descriptor.name);
            let CellValue::$cell(scratch) =
                ctx.cache
                    .get_or_create(row.state_key(), row.revision, || CellValue::$cell(current))
            else {
                return shape_mismatch(ctx, row);
            };
            if ctx.host.$draw(&row.label, scratch) {
                WidgetOutcome::Commit(Value::$variant(scratch.clone()))
            } else {
                WidgetOutcome::Idle
            }
        }
    };
}

cached_widget!(
    /// Checkbox
    bool_widget, coerce::to_bool, Bool, checkbox, Bool
);
cached_widget!(int32_widget, coerce::to_i32, Int32, input_i32, Int32);
cached_widget!(
    /// Full 64-bit integer input
    int64_widget, coerce::to_i64, Int64, input_i64, Int64
);
cached_widget!(float32_widget, coerce::to_f32, Float32, input_f32, Float32);
cached_widget!(float64_widget, coerce::to_f64, Float64, input_f64, Float64);
cached_widget!(text_widget, coerce::to_text, Text, input_text, Text);

/// Text field over the reference's path; resolution happens elsewhere
pub fn file_widget(
    ctx: &mut InspectorContext<'_>,
    _owner: &mut dyn Inspectable,
    row: &PropertyRow<'_>,
) -> WidgetOutcome {
    let current = coerce::or_default(coerce::to_file(&row.value), row.descriptor.name);
    let CellValue::Text(path) = ctx.cache.get_or_create(row.state_key(), row.revision, || {
        CellValue::Text(current.as_str().to_string())
    }) else {
        return shape_mismatch(ctx, row);
    };
    if ctx.host.input_text(&row.label, path) {
        WidgetOutcome::Commit(Value::File(FileRef::new(path.clone())))
    } else {
        WidgetOutcome::Idle
    }
}

/// Drag field over 2-4 components, committed in the property's own precision
pub fn vector_widget(
    ctx: &mut InspectorContext<'_>,
    _owner: &mut dyn Inspectable,
    row: &PropertyRow<'_>,
) -> WidgetOutcome {
    let mut components = coerce::vector_components(&row.value).unwrap_or_else(|e| {
        debug!(property = row.descriptor.name, error = %e, "Displaying zero vector");
        let len = row.descriptor.value_tag.vector_len().unwrap_or(3);
        VectorComponents::zeroed(len)
    });

    if !ctx
        .host
        .drag_floats(&row.label, components.as_mut_slice(), ctx.settings.drag_speed)
    {
        return WidgetOutcome::Idle;
    }
    match coerce::rebuild_vector(components.precision, components.as_slice()) {
        Ok(value) => WidgetOutcome::Commit(value),
        Err(e) => WidgetOutcome::Fault(e.to_string()),
    }
}

/// Rotation edited as (X, Y, Z) degrees, always recomputed from the quaternion
///
/// Commits rebuild the whole quaternion in YXZ order. Near a pitch of +-90
/// degrees the displayed angles may jump between frames.
pub fn quaternion_widget(
    ctx: &mut InspectorContext<'_>,
    _owner: &mut dyn Inspectable,
    row: &PropertyRow<'_>,
) -> WidgetOutcome {
    let precision = row.value.precision().unwrap_or(Precision::Single);
    let mut angles = coerce::or_default(
        coerce::quat_to_euler_degrees(&row.value),
        row.descriptor.name,
    );

    if ctx
        .host
        .drag_floats(&row.label, &mut angles, ctx.settings.drag_speed)
    {
        WidgetOutcome::Commit(coerce::euler_degrees_to_quat(precision, angles))
    } else {
        WidgetOutcome::Idle
    }
}

/// Combo over the member list as it is this frame
pub fn enum_widget(
    ctx: &mut InspectorContext<'_>,
    owner: &mut dyn Inspectable,
    row: &PropertyRow<'_>,
) -> WidgetOutcome {
    let Value::Enum(value) = &row.value else {
        return unknown_widget(ctx, owner, row);
    };
    if value.members.is_empty() {
        ctx.host
            .text_disabled(&format!("{}: no members in {}", row.label, value.type_name));
        return WidgetOutcome::Idle;
    }

    // out of range when the selected member was removed; shows no preview
    let mut index = value.selected.unwrap_or(value.members.len());
    if ctx.host.combo(&row.label, &mut index, &value.members) && index < value.members.len() {
        WidgetOutcome::Commit(Value::Enum(value.with_selected(index)))
    } else {
        WidgetOutcome::Idle
    }
}

/// Collapsible sub-panel drawing the nested inspectable in place
pub fn nested_widget(
    ctx: &mut InspectorContext<'_>,
    owner: &mut dyn Inspectable,
    row: &PropertyRow<'_>,
) -> WidgetOutcome {
    if !ctx.host.tree_node(&row.label, TreeNodeOptions::default()).open {
        return WidgetOutcome::Idle;
    }

    let outcome = match row.descriptor.nested_mut(owner.as_any_mut()) {
        Some(nested) => {
            let nested_owner = row.owner.child(row.descriptor.name);
            inspector::draw_nested(ctx, nested, &nested_owner, row.revision);
            WidgetOutcome::Idle
        }
        None => WidgetOutcome::Fault(format!("{} is not inspectable", row.value.type_name())),
    };
    ctx.host.tree_pop();
    outcome
}

/// Inert diagnostic row for values no widget can edit
pub fn unknown_widget(
    ctx: &mut InspectorContext<'_>,
    _owner: &mut dyn Inspectable,
    row: &PropertyRow<'_>,
) -> WidgetOutcome {
    ctx.host.text(&format!(
        "Unknown type: {} for {}",
        row.value.type_name(),
        row.label
    ));
    WidgetOutcome::Idle
}
