//! Default scene content

use engine::components::{EntityObject, LightComponent, MeshComponent, SceneSettings};
use engine::prelude::*;
use engine::reflect::CoercionError;
use tracing::info;

pub struct DemoScene {
    pub scene: SceneGraph,
    pub root: NodeId,
    pub cube: NodeId,
    pub scene_settings: NodeId,
}

/// Scene root with a cube and a floor, plus the detached scene settings
pub fn build() -> Result<DemoScene, Box<dyn std::error::Error>> {
    let materials = EnumRegistry::new("Material", ["Default", "Metal", "Emissive"]);
    let layers = EnumRegistry::new("Layer", ["Default", "Ui", "Ignore Raycast"]);
    let mesh = |path: &str| -> Result<MeshComponent, CoercionError> {
        Ok(MeshComponent::new(
            FileRef::new(path),
            layers.value("Default")?,
            materials.value("Default")?,
        ))
    };

    let mut scene = SceneGraph::new();
    let root = scene.spawn_root("Scene", EntityObject::default());

    let cube = scene.spawn_child(root, ChildCategory::ENTITIES, "Cube", EntityObject::default())?;
    let floor = scene.spawn_child(
        root,
        ChildCategory::ENTITIES,
        "Floor",
        EntityObject::at(DVec3::new(0.0, -1.0, 0.0)).with_scale(DVec3::new(10.0, 1.0, 10.0)),
    )?;
    let sun = scene.spawn_child(
        root,
        ChildCategory::ENTITIES,
        "Sun",
        EntityObject::at(DVec3::new(0.0, 10.0, 0.0)),
    )?;

    scene.spawn_child(cube, ChildCategory::COMPONENTS, "Mesh", mesh("meshes/cube.obj")?)?;
    scene.spawn_child(floor, ChildCategory::COMPONENTS, "Mesh", mesh("meshes/plane.obj")?)?;
    scene.spawn_child(sun, ChildCategory::COMPONENTS, "Light", LightComponent::default())?;

    let scene_settings = scene.spawn_detached("Scene Settings", SceneSettings::default());
    info!(roots = scene.roots().len(), "Built demo scene");

    Ok(DemoScene {
        scene,
        root,
        cube,
        scene_settings,
    })
}
