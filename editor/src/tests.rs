//! Whole-panel tests driven through the headless host

use crate::host::{HeadlessHost, Interaction, Row, RowKind};
use crate::panels::inspector::NOTHING_SELECTED;
use crate::report::{FrameReport, RowClick};
use crate::settings::EditorSettings;
use crate::state_cache::{OwnerId, WidgetStateKey};
use crate::EditorState;
use engine::components::{
    EntityObject, LightComponent, LightKind, MeshComponent, ObjectBase, SceneSettings,
};
use engine::file_ref::FileRef;
use engine::reflect::{
    CoercionError, EnumRegistry, Inspectable, Property, PropertyDescriptor, ReflectError,
    TypeReflection, TypeTag, Value,
};
use engine::scene::{ChildCategory, NodeId, SceneGraph};
use glam::{DQuat, DVec2, DVec3, DVec4, Vec2, Vec3, Vec4};
use std::any::Any;

fn frame(
    state: &mut EditorState,
    host: &mut HeadlessHost,
    scene: &mut SceneGraph,
) -> (FrameReport, Vec<Row>) {
    let report = state.draw_frame(host, scene);
    (report, host.take_rows())
}

fn find<'r>(rows: &'r [Row], label: &str) -> &'r Row {
    rows.iter()
        .find(|row| row.label == label)
        .unwrap_or_else(|| panic!("no row {label:?} in {:#?}", labels(rows)))
}

fn labels(rows: &[Row]) -> Vec<&str> {
    rows.iter().map(|row| row.label.as_str()).collect()
}

fn position(rows: &[Row], label: &str) -> usize {
    rows.iter()
        .position(|row| row.label == label)
        .unwrap_or_else(|| panic!("no row {label:?}"))
}

fn selected_state(scene: &SceneGraph, node: NodeId) -> EditorState {
    let mut state = EditorState::new(EditorSettings::default());
    assert!(scene.contains(node));
    state.selection.select(node, false);
    state
}

struct MeshScene {
    scene: SceneGraph,
    cube: NodeId,
    mesh: NodeId,
    materials: EnumRegistry,
}

fn mesh_scene() -> MeshScene {
    let materials = EnumRegistry::new("Material", ["Default", "Metal"]);
    let layers = EnumRegistry::new("Layer", ["Default", "Ui"]);

    let mut scene = SceneGraph::new();
    let root = scene.spawn_root("Scene", EntityObject::default());
    let cube = scene
        .spawn_child(root, ChildCategory::ENTITIES, "Cube", EntityObject::default())
        .unwrap();
    let mesh = scene
        .spawn_child(
            cube,
            ChildCategory::COMPONENTS,
            "Mesh",
            MeshComponent::new(
                FileRef::new("meshes/cube.obj"),
                layers.value("Default").unwrap(),
                materials.value("Default").unwrap(),
            ),
        )
        .unwrap();

    MeshScene {
        scene,
        cube,
        mesh,
        materials,
    }
}

#[test]
fn test_nothing_selected_placeholder() {
    let mut scene = SceneGraph::new();
    scene.spawn_root("Scene", EntityObject::default());
    let mut state = EditorState::new(EditorSettings::default());
    let mut host = HeadlessHost::new();

    let (report, rows) = frame(&mut state, &mut host, &mut scene);
    assert_eq!(find(&rows, NOTHING_SELECTED).kind, RowKind::Text);
    assert_eq!(find(&rows, NOTHING_SELECTED).path, "Properties");
    assert!(report.is_quiet());
    assert_eq!(state.frame(), 1);
}

#[test]
fn test_tree_rows_show_leaves_and_labels() {
    let MeshScene {
        mut scene, cube, ..
    } = mesh_scene();
    let mut state = EditorState::new(EditorSettings::default());
    let mut host = HeadlessHost::new();

    let (_, rows) = frame(&mut state, &mut host, &mut scene);
    assert_eq!(
        find(&rows, "Scene (Entity)").kind,
        RowKind::TreeNode {
            open: false,
            leaf: false,
            selected: false
        }
    );
    assert!(rows.iter().all(|row| row.label != "Cube (Entity)"));

    host.expand("Scene (Entity)").expand("Cube (Entity)");
    state.selection.select(cube, false);
    let (_, rows) = frame(&mut state, &mut host, &mut scene);
    assert_eq!(
        find(&rows, "Cube (Entity)").kind,
        RowKind::TreeNode {
            open: true,
            leaf: false,
            selected: true
        }
    );
    assert_eq!(
        find(&rows, "Mesh (MeshComponent)").kind,
        RowKind::TreeNode {
            open: true,
            leaf: true,
            selected: false
        }
    );
    assert_eq!(find(&rows, "Mesh (MeshComponent)").depth, 2);
}

#[test]
fn test_row_clicks_drive_selection() {
    let MeshScene {
        mut scene, cube, ..
    } = mesh_scene();
    let root = scene.roots()[0];
    let mut state = EditorState::new(EditorSettings::default());
    let mut host = HeadlessHost::new();
    host.expand("Scene (Entity)");

    host.interact("Scene (Entity)", Interaction::Click);
    let (report, _) = frame(&mut state, &mut host, &mut scene);
    assert_eq!(
        report.clicks,
        [RowClick {
            node: root,
            extend: false
        }]
    );
    assert_eq!(state.selection.first(), Some(root));

    host.set_shift(true);
    host.interact("Cube (Entity)", Interaction::Click);
    frame(&mut state, &mut host, &mut scene);
    assert_eq!(state.selection.iter().collect::<Vec<_>>(), [root, cube]);
    assert_eq!(state.selection.first(), Some(root));

    host.interact("Scene (Entity)", Interaction::Click);
    frame(&mut state, &mut host, &mut scene);
    assert_eq!(state.selection.iter().collect::<Vec<_>>(), [cube]);

    // the inspector follows the first selected node
    let (_, rows) = frame(&mut state, &mut host, &mut scene);
    assert!(rows.iter().any(|row| row.label == "Entity"));
    assert!(rows.iter().all(|row| row.label != NOTHING_SELECTED));
}

#[test]
fn test_scene_settings_button_selects_detached_node() {
    let mut scene = SceneGraph::new();
    scene.spawn_root("Scene", EntityObject::default());
    let settings = scene.spawn_detached("Scene Settings", SceneSettings::default());
    let mut state = EditorState::new(EditorSettings::default()).with_scene_settings(settings);
    let mut host = HeadlessHost::new();

    host.interact("Tree View/Scene Settings", Interaction::Click);
    frame(&mut state, &mut host, &mut scene);
    assert_eq!(state.selection.first(), Some(settings));

    host.expand("Environment");
    let (_, rows) = frame(&mut state, &mut host, &mut scene);
    assert_eq!(find(&rows, "Time Scale").kind, RowKind::Float(1.0));
    assert!(rows.iter().any(|row| row.label == "Sun Rotation"));
    // transient fields stay out of the inspector
    assert!(rows.iter().all(|row| row.label != "Frame"));
}

#[test]
fn test_sections_follow_declaring_types_and_order() {
    let MeshScene {
        mut scene, mesh, ..
    } = mesh_scene();
    let mut state = selected_state(&scene, mesh);
    let mut host = HeadlessHost::new();

    let (report, rows) = frame(&mut state, &mut host, &mut scene);
    assert!(report.faults.is_empty(), "{:?}", report.faults);

    assert!(position(&rows, "Prefab Saveable") < position(&rows, "Mesh Component"));
    assert!(position(&rows, "Enabled") < position(&rows, "Description"));
    assert!(position(&rows, "Mesh") < position(&rows, "Cast Shadows"));
    assert!(position(&rows, "Unknown type: MeshHandle for Handle") < position(&rows, "Lod Bias"));
    assert!(position(&rows, "Lod Bias") < position(&rows, "Debug Actions"));
    assert_eq!(find(&rows, "Enabled").path, "Properties/Prefab Saveable/enabled");
}

#[test]
fn test_group_rows_sorted_by_order() {
    let mut scene = SceneGraph::new();
    let root = scene.spawn_root("Scene", EntityObject::default());
    let mut state = selected_state(&scene, root);
    let mut host = HeadlessHost::new();

    let (_, rows) = frame(&mut state, &mut host, &mut scene);
    assert_eq!(
        find(&rows, "Transform").kind,
        RowKind::TreeNode {
            open: false,
            leaf: false,
            selected: false
        }
    );
    assert!(rows.iter().all(|row| row.label != "Position"));

    host.expand("Transform");
    let (_, rows) = frame(&mut state, &mut host, &mut scene);
    let transform: Vec<_> = rows
        .iter()
        .filter(|row| row.path.contains("/Transform/"))
        .map(|row| row.label.as_str())
        .collect();
    assert_eq!(transform, ["Position", "Rotation", "Scale"]);
}

#[test]
fn test_editing_one_object_leaves_identical_twin_alone() {
    let mut scene = SceneGraph::new();
    let a = scene.spawn_root("A", EntityObject::default());
    let b = scene.spawn_root("B", EntityObject::default());
    let mut state = selected_state(&scene, a);
    let mut host = HeadlessHost::new();

    // both objects get cached cells
    frame(&mut state, &mut host, &mut scene);
    state.selection.select(b, false);
    frame(&mut state, &mut host, &mut scene);
    state.selection.select(a, false);

    host.interact("Enabled", Interaction::Toggle)
        .interact("Description", Interaction::SetText("edited".into()));
    let (report, _) = frame(&mut state, &mut host, &mut scene);
    assert_eq!(report.commits.len(), 2);
    assert!(report.commits.iter().all(|c| c.owner == OwnerId::root(a)));

    let object_a = scene.downcast_mut::<EntityObject>(a).unwrap();
    assert!(!object_a.base.enabled);
    assert_eq!(object_a.base.description, "edited");
    let object_b = scene.downcast_mut::<EntityObject>(b).unwrap();
    assert!(object_b.base.enabled);
    assert_eq!(object_b.base.description, "");

    state.selection.select(b, false);
    let (_, rows) = frame(&mut state, &mut host, &mut scene);
    assert_eq!(find(&rows, "Enabled").kind, RowKind::Checkbox(true));
    assert_eq!(
        find(&rows, "Description").kind,
        RowKind::TextInput(String::new())
    );
}

#[test]
fn test_extendable_members_follow_registry_between_frames() {
    let MeshScene {
        mut scene,
        mesh,
        materials,
        ..
    } = mesh_scene();
    let mut state = selected_state(&scene, mesh);
    let mut host = HeadlessHost::new();

    let (_, rows) = frame(&mut state, &mut host, &mut scene);
    assert_eq!(
        find(&rows, "Material").kind,
        RowKind::Combo {
            selected: 0,
            items: vec!["Default".into(), "Metal".into()]
        }
    );

    assert!(materials.register("Glass"));
    let (_, rows) = frame(&mut state, &mut host, &mut scene);
    assert_eq!(
        find(&rows, "Material").kind,
        RowKind::Combo {
            selected: 0,
            items: vec!["Default".into(), "Metal".into(), "Glass".into()]
        }
    );

    host.interact("Material", Interaction::Choose(2));
    let (report, _) = frame(&mut state, &mut host, &mut scene);
    assert_eq!(report.commits[0].property, "material");
    let component = scene.downcast_mut::<MeshComponent>(mesh).unwrap();
    assert_eq!(component.material.0.selected(), "Glass");
}

#[test]
fn test_vector_edit_keeps_precision() {
    let mut scene = SceneGraph::new();
    let root = scene.spawn_root("Scene", EntityObject::default());
    let light = scene
        .spawn_child(
            root,
            ChildCategory::COMPONENTS,
            "Light",
            LightComponent::default(),
        )
        .unwrap();
    let mut state = selected_state(&scene, root);
    let mut host = HeadlessHost::new();
    host.expand("Transform");

    host.interact("Position", Interaction::Drag(vec![1.0, 2.0, 3.0]));
    let (report, _) = frame(&mut state, &mut host, &mut scene);
    assert_eq!(report.commits[0].value, Value::DVec3(DVec3::new(1.0, 2.0, 3.0)));
    let entity = scene.downcast_mut::<EntityObject>(root).unwrap();
    assert!(entity.position.abs_diff_eq(DVec3::new(1.0, 2.0, 3.0), 1e-9));

    state.selection.select(light, false);
    host.interact("Color", Interaction::Drag(vec![1.0, 2.0, 3.0]));
    let (report, _) = frame(&mut state, &mut host, &mut scene);
    assert_eq!(report.commits[0].value, Value::Vec3(Vec3::new(1.0, 2.0, 3.0)));
    let component = scene.downcast_mut::<LightComponent>(light).unwrap();
    assert!(component.color.abs_diff_eq(Vec3::new(1.0, 2.0, 3.0), 1e-6));
}

/// Vectors of every width in both precisions
#[derive(Default, Inspectable)]
struct Viewport {
    offset: DVec2,
    extent: Vec2,
    tint: Vec4,
    clip: DVec4,
}

#[test]
fn test_narrow_and_wide_vectors_keep_precision() {
    let mut scene = SceneGraph::new();
    let viewport = scene.spawn_root("Viewport", Viewport::default());
    let mut state = selected_state(&scene, viewport);
    let mut host = HeadlessHost::new();

    let (_, rows) = frame(&mut state, &mut host, &mut scene);
    assert_eq!(find(&rows, "Offset").kind, RowKind::Drag(vec![0.0; 2]));
    assert_eq!(find(&rows, "Clip").kind, RowKind::Drag(vec![0.0; 4]));

    host.interact("Offset", Interaction::Drag(vec![1.5, -2.0]))
        .interact("Extent", Interaction::Drag(vec![640.0, 480.0]))
        .interact("Tint", Interaction::Drag(vec![0.5, 0.25, 1.0, 1.0]))
        .interact("Clip", Interaction::Drag(vec![0.1, 0.2, 0.3, 0.4]));
    let (report, _) = frame(&mut state, &mut host, &mut scene);
    let committed: Vec<_> = report.commits.iter().map(|c| c.value.clone()).collect();
    assert_eq!(
        committed,
        [
            Value::DVec2(DVec2::new(1.5, -2.0)),
            Value::Vec2(Vec2::new(640.0, 480.0)),
            Value::Vec4(Vec4::new(0.5, 0.25, 1.0, 1.0)),
            Value::DVec4(DVec4::new(0.1f32 as f64, 0.2f32 as f64, 0.3f32 as f64, 0.4f32 as f64)),
        ]
    );

    let object = scene.downcast_mut::<Viewport>(viewport).unwrap();
    assert_eq!(object.offset, DVec2::new(1.5, -2.0));
    assert_eq!(object.extent, Vec2::new(640.0, 480.0));
    assert_eq!(object.tint, Vec4::new(0.5, 0.25, 1.0, 1.0));
    assert!(object.clip.abs_diff_eq(DVec4::new(0.1, 0.2, 0.3, 0.4), 1e-6));
}

#[test]
fn test_rotation_round_trips_through_degrees() {
    let mut scene = SceneGraph::new();
    let root = scene.spawn_root("Scene", EntityObject::default());
    let mut state = selected_state(&scene, root);
    let mut host = HeadlessHost::new();
    host.expand("Transform");

    host.interact("Rotation", Interaction::Drag(vec![0.0, 90.0, 0.0]));
    let (report, _) = frame(&mut state, &mut host, &mut scene);
    assert!(matches!(report.commits[0].value, Value::DQuat(_)));

    let expected = DQuat::from_rotation_y(90f64.to_radians());
    let entity = scene.downcast_mut::<EntityObject>(root).unwrap();
    assert!(entity.rotation.abs_diff_eq(expected, 1e-6));

    let (report, rows) = frame(&mut state, &mut host, &mut scene);
    assert!(report.commits.is_empty());
    let RowKind::Drag(angles) = &find(&rows, "Rotation").kind else {
        panic!("rotation is not a drag row");
    };
    for (shown, wanted) in angles.iter().zip([0.0, 90.0, 0.0]) {
        assert!((shown - wanted).abs() < 1e-3, "{angles:?}");
    }
}

#[test]
fn test_debug_action_runs_once_per_click() {
    let mut scene = SceneGraph::new();
    let settings = scene.spawn_detached("Scene Settings", SceneSettings::default());
    let mut state = selected_state(&scene, settings);
    let mut host = HeadlessHost::new();

    host.interact("Step Frame", Interaction::Click);
    let (report, rows) = frame(&mut state, &mut host, &mut scene);
    assert_eq!(report.actions.len(), 1);
    assert_eq!(report.actions[0].action, "step_frame");
    assert_eq!(find(&rows, "Step Frame").path, "Properties/Debug Actions");

    frame(&mut state, &mut host, &mut scene);
    let object = scene.downcast_mut::<SceneSettings>(settings).unwrap();
    assert_eq!(object.frame, 1);
}

#[test]
fn test_external_mutation_resynchronizes_cached_rows() {
    let mut scene = SceneGraph::new();
    let root = scene.spawn_root("Scene", EntityObject::default());
    let mut state = selected_state(&scene, root);
    let mut host = HeadlessHost::new();
    frame(&mut state, &mut host, &mut scene);

    // a write that does not bump the revision is not picked up
    scene
        .downcast_mut::<EntityObject>(root)
        .unwrap()
        .base
        .description = "moved".into();
    let (_, rows) = frame(&mut state, &mut host, &mut scene);
    assert_eq!(
        find(&rows, "Description").kind,
        RowKind::TextInput(String::new())
    );

    scene
        .downcast_mut::<EntityObject>(root)
        .unwrap()
        .translate(DVec3::X);
    let (_, rows) = frame(&mut state, &mut host, &mut scene);
    assert_eq!(
        find(&rows, "Description").kind,
        RowKind::TextInput("moved".into())
    );
}

#[test]
fn test_nested_inspectable_draws_in_place() {
    let mut scene = SceneGraph::new();
    let light = scene.spawn_root("Sun", LightComponent::default());
    let mut state = selected_state(&scene, light);
    let mut host = HeadlessHost::new();

    let (_, rows) = frame(&mut state, &mut host, &mut scene);
    assert!(rows.iter().all(|row| row.label != "Cascades"));

    host.expand("Shadow")
        .interact("Cascades", Interaction::SetInt(5));
    let (report, rows) = frame(&mut state, &mut host, &mut scene);
    assert_eq!(find(&rows, "Shadow Settings").depth, 2);
    assert_eq!(
        report.commits[0].owner,
        OwnerId::root(light).child("shadow")
    );
    let component = scene.downcast_mut::<LightComponent>(light).unwrap();
    assert_eq!(component.shadow.cascades, 5);

    // nested rows are keyed separately from the owner's own rows
    assert!(state.cache.contains(&WidgetStateKey::new(
        OwnerId::root(light).child("shadow"),
        "ShadowSettings",
        "enabled"
    )));
    assert!(state.cache.contains(&WidgetStateKey::new(
        OwnerId::root(light),
        "PrefabSaveable",
        "enabled"
    )));
}

#[test]
fn test_nesting_depth_is_bounded() {
    let mut scene = SceneGraph::new();
    let light = scene.spawn_root("Sun", LightComponent::default());
    let mut settings = EditorSettings::default();
    settings.inspector.max_nesting_depth = 1;
    let mut state = EditorState::new(settings);
    state.selection.select(light, false);
    let mut host = HeadlessHost::new();
    host.expand("Shadow");

    let (_, rows) = frame(&mut state, &mut host, &mut scene);
    assert_eq!(
        find(&rows, "ShadowSettings: nesting limit of 1 reached").kind,
        RowKind::Disabled
    );
    assert!(rows.iter().all(|row| row.label != "Cascades"));
}

#[test]
fn test_hidden_rows_follow_instance_state() {
    let MeshScene {
        mut scene, mesh, ..
    } = mesh_scene();
    let mut state = selected_state(&scene, mesh);
    let mut host = HeadlessHost::new();

    host.interact("Mesh", Interaction::SetText(String::new()));
    let (report, rows) = frame(&mut state, &mut host, &mut scene);
    assert_eq!(report.commits[0].value, Value::File(FileRef::default()));
    assert!(rows.iter().any(|row| row.label == "Cast Shadows"));

    let (_, rows) = frame(&mut state, &mut host, &mut scene);
    assert!(rows.iter().all(|row| row.label != "Cast Shadows"));
}

#[test]
fn test_sweep_drops_state_of_despawned_nodes() {
    let MeshScene {
        mut scene,
        cube,
        mesh,
        ..
    } = mesh_scene();
    let mut settings = EditorSettings::default();
    settings.inspector.cache_sweep_interval = 2;
    let mut state = EditorState::new(settings);
    let mut host = HeadlessHost::new();

    state.selection.select(mesh, false);
    frame(&mut state, &mut host, &mut scene);
    let key = WidgetStateKey::new(OwnerId::root(mesh), "MeshComponent", "lod_bias");
    assert!(state.cache.contains(&key));

    scene.despawn_recursive(cube).unwrap();
    let (_, rows) = frame(&mut state, &mut host, &mut scene);
    assert!(rows.iter().any(|row| row.kind == RowKind::Error));
    assert!(!state.cache.contains(&key));
    assert!(state.selection.is_empty());
}

/// Inspectable whose getter can fail, to check row isolation
#[derive(Default)]
struct Gauge {
    offline: bool,
    limit: f32,
}

impl Inspectable for Gauge {
    fn type_reflection() -> TypeReflection {
        TypeReflection::new("Gauge")
            .with_property(PropertyDescriptor::computed::<Self>(
                "reading",
                "Gauge",
                TypeTag::Float32,
                |gauge| {
                    if gauge.offline {
                        Err(ReflectError::access("reading", "sensor offline"))
                    } else {
                        Ok(Value::Float32(gauge.limit / 2.0))
                    }
                },
            ))
            .with_property(PropertyDescriptor::field::<Self, f32>(
                "limit",
                "Gauge",
                |gauge| &gauge.limit,
                |gauge| &mut gauge.limit,
            ))
    }

    fn reflection(&self) -> TypeReflection {
        Self::type_reflection()
    }

    fn type_name(&self) -> &'static str {
        "Gauge"
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

#[test]
fn test_failing_getter_is_isolated_to_its_row() {
    let mut scene = SceneGraph::new();
    let gauge = scene.spawn_root(
        "Gauge",
        Gauge {
            offline: true,
            limit: 4.0,
        },
    );
    let mut state = selected_state(&scene, gauge);
    let mut host = HeadlessHost::new();

    host.interact("Limit", Interaction::SetFloat(8.0));
    let (report, rows) = frame(&mut state, &mut host, &mut scene);
    assert_eq!(report.faults.len(), 1);
    assert_eq!(report.faults[0].property, "reading");
    let error = rows.iter().find(|row| row.kind == RowKind::Error).unwrap();
    assert!(error.label.starts_with("Reading: "), "{}", error.label);
    assert!(position(&rows, &error.label) < position(&rows, "Limit"));
    assert_eq!(report.commits.len(), 1);

    scene.downcast_mut::<Gauge>(gauge).unwrap().offline = false;
    let (report, rows) = frame(&mut state, &mut host, &mut scene);
    assert!(report.faults.is_empty());
    assert_eq!(find(&rows, "Reading: 4").kind, RowKind::Disabled);
}

/// Inspectable whose only property leads back to itself
#[derive(Default)]
struct Echo;

impl Property for Echo {
    const TAG: TypeTag = TypeTag::NestedInspectable;

    fn to_value(&self) -> Value {
        Value::Nested { type_name: "Echo" }
    }

    fn assign(&mut self, _value: Value) -> Result<(), CoercionError> {
        Err(CoercionError::NotAssignable("Echo"))
    }

    fn as_inspectable_mut(&mut self) -> Option<&mut dyn Inspectable> {
        Some(self)
    }
}

impl Inspectable for Echo {
    fn type_reflection() -> TypeReflection {
        TypeReflection::new("Echo").with_property(PropertyDescriptor::field::<Self, Self>(
            "echo",
            "Echo",
            |echo| echo,
            |echo| echo,
        ))
    }

    fn reflection(&self) -> TypeReflection {
        Self::type_reflection()
    }

    fn type_name(&self) -> &'static str {
        "Echo"
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

#[test]
fn test_cycle_renders_diagnostic() {
    let mut scene = SceneGraph::new();
    let echo = scene.spawn_root("Echo", Echo);
    let mut state = selected_state(&scene, echo);
    let mut host = HeadlessHost::new();
    host.expand("Echo");

    let (report, rows) = frame(&mut state, &mut host, &mut scene);
    assert!(report.faults.is_empty());
    assert_eq!(
        find(&rows, "Echo: already open above").kind,
        RowKind::Disabled
    );
}

/// Outer field with the same name as a field of its flattened base
#[derive(Default, Inspectable)]
struct Toggle {
    #[inspect(flatten)]
    base: ObjectBase,
    enabled: bool,
}

#[test]
fn test_same_name_in_base_and_outer_type_keeps_separate_state() {
    let mut scene = SceneGraph::new();
    let toggle = scene.spawn_root("Toggle", Toggle::default());
    let mut state = selected_state(&scene, toggle);
    let mut host = HeadlessHost::new();

    for _ in 0..2 {
        let (report, rows) = frame(&mut state, &mut host, &mut scene);
        assert!(report.faults.is_empty(), "{:?}", report.faults);
        let enabled: Vec<_> = rows
            .iter()
            .filter(|row| row.label == "Enabled")
            .map(|row| (row.path.as_str(), row.kind.clone()))
            .collect();
        assert_eq!(
            enabled,
            [
                ("Properties/Prefab Saveable/enabled", RowKind::Checkbox(true)),
                ("Properties/Toggle/enabled", RowKind::Checkbox(false)),
            ]
        );
    }

    host.interact("Toggle/enabled/Enabled", Interaction::Toggle);
    let (report, _) = frame(&mut state, &mut host, &mut scene);
    assert_eq!(report.commits.len(), 1);
    let object = scene.downcast_mut::<Toggle>(toggle).unwrap();
    assert!(object.enabled);
    assert!(object.base.enabled);
}

#[test]
fn test_fixed_enum_commit_hides_dependent_row_next_frame() {
    let mut scene = SceneGraph::new();
    let light = scene.spawn_root("Sun", LightComponent::default());
    let mut state = selected_state(&scene, light);
    let mut host = HeadlessHost::new();

    let (_, rows) = frame(&mut state, &mut host, &mut scene);
    assert_eq!(
        find(&rows, "Kind").kind,
        RowKind::Combo {
            selected: 0,
            items: vec!["Point".into(), "Spot".into(), "Directional".into()]
        }
    );
    assert!(rows.iter().any(|row| row.label == "Range"));

    host.interact("Kind", Interaction::Choose(2));
    let (report, _) = frame(&mut state, &mut host, &mut scene);
    assert_eq!(report.commits[0].property, "kind");
    let component = scene.downcast_mut::<LightComponent>(light).unwrap();
    assert_eq!(component.kind, LightKind::Directional);

    let (_, rows) = frame(&mut state, &mut host, &mut scene);
    assert!(matches!(
        find(&rows, "Kind").kind,
        RowKind::Combo { selected: 2, .. }
    ));
    assert!(rows.iter().all(|row| row.label != "Range"));
}

#[test]
fn test_int64_commit_beyond_32_bits() {
    let mut scene = SceneGraph::new();
    let light = scene.spawn_root("Sun", LightComponent::default());
    let mut state = selected_state(&scene, light);
    let mut host = HeadlessHost::new();
    let large = i64::from(i32::MAX) + 10;

    let (_, rows) = frame(&mut state, &mut host, &mut scene);
    assert_eq!(find(&rows, "Samples").kind, RowKind::Int(16));

    host.interact("Samples", Interaction::SetInt(large));
    let (report, _) = frame(&mut state, &mut host, &mut scene);
    assert_eq!(report.commits[0].value, Value::Int64(large));
    let component = scene.downcast_mut::<LightComponent>(light).unwrap();
    assert_eq!(component.samples, large);

    let (_, rows) = frame(&mut state, &mut host, &mut scene);
    assert_eq!(find(&rows, "Samples").kind, RowKind::Int(large));
}
