//! Built-in inspectable scene objects

use crate::file_ref::FileRef;
use crate::reflect::{CoercionError, ExtendableEnum, InspectEnum, Inspectable, Property, Value};
use glam::{DQuat, DVec3, Quat, Vec2, Vec3, Vec4};

/// State shared by every scene object
#[derive(Debug, Clone, Inspectable)]
#[inspect(name = "PrefabSaveable")]
pub struct ObjectBase {
    #[inspect(order = -1)]
    pub enabled: bool,
    pub description: String,
}

impl Default for ObjectBase {
    fn default() -> Self {
        Self {
            enabled: true,
            description: String::new(),
        }
    }
}

/// A positioned node of the scene tree
#[derive(Debug, Clone, Inspectable)]
#[inspect(name = "Entity", actions(reset_transform))]
pub struct EntityObject {
    #[inspect(flatten)]
    pub base: ObjectBase,
    #[inspect(group = "Transform", order = 0)]
    pub position: DVec3,
    #[inspect(group = "Transform", order = 1)]
    pub rotation: DQuat,
    #[inspect(group = "Transform", order = 2)]
    pub scale: DVec3,
    #[inspect(revision)]
    revision: u64,
}

impl Default for EntityObject {
    fn default() -> Self {
        Self {
            base: ObjectBase::default(),
            position: DVec3::ZERO,
            rotation: DQuat::IDENTITY,
            scale: DVec3::ONE,
            revision: 0,
        }
    }
}

impl EntityObject {
    pub fn at(position: DVec3) -> Self {
        Self {
            position,
            ..Self::default()
        }
    }

    pub fn with_scale(mut self, scale: DVec3) -> Self {
        self.scale = scale;
        self
    }

    /// Move the entity from outside the inspector
    pub fn translate(&mut self, delta: DVec3) {
        self.position += delta;
        self.revision += 1;
    }

    pub fn reset_transform(&mut self) {
        self.position = DVec3::ZERO;
        self.rotation = DQuat::IDENTITY;
        self.scale = DVec3::ONE;
        self.revision += 1;
    }
}

/// Handle into the renderer's mesh storage
///
/// Has no editable representation and shows up as a diagnostic row.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MeshHandle(pub u32);

impl Property for MeshHandle {
    fn to_value(&self) -> Value {
        Value::Opaque {
            type_name: "MeshHandle",
        }
    }

    fn assign(&mut self, _value: Value) -> Result<(), CoercionError> {
        Err(CoercionError::NotAssignable("MeshHandle"))
    }
}

/// Material selection backed by the shared material list
///
/// Declared without a static tag; the inspector recognises it by the
/// extendable-enum value it produces.
#[derive(Debug, Clone, PartialEq)]
pub struct MaterialSlot(pub ExtendableEnum);

impl Property for MaterialSlot {
    fn to_value(&self) -> Value {
        self.0.to_value()
    }

    fn assign(&mut self, value: Value) -> Result<(), CoercionError> {
        self.0.assign(value)
    }
}

/// Renders a mesh file at its entity's transform
#[derive(Debug, Clone, Inspectable)]
#[inspect(name = "MeshComponent", actions(clear_mesh))]
pub struct MeshComponent {
    #[inspect(flatten)]
    pub base: ObjectBase,
    pub mesh: FileRef,
    #[inspect(hidden_if = "Self::has_no_mesh")]
    pub cast_shadows: bool,
    pub layer: ExtendableEnum,
    pub material: MaterialSlot,
    #[inspect(order = 10)]
    pub lod_bias: f32,
    pub handle: MeshHandle,
}

impl MeshComponent {
    pub fn new(mesh: FileRef, layer: ExtendableEnum, material: ExtendableEnum) -> Self {
        Self {
            base: ObjectBase::default(),
            mesh,
            cast_shadows: true,
            layer,
            material: MaterialSlot(material),
            lod_bias: 1.0,
            handle: MeshHandle::default(),
        }
    }

    pub fn has_no_mesh(&self) -> bool {
        self.mesh.is_empty()
    }

    pub fn clear_mesh(&mut self) {
        self.mesh = FileRef::default();
        self.handle = MeshHandle::default();
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, InspectEnum)]
pub enum LightKind {
    #[default]
    Point,
    Spot,
    Directional,
}

#[derive(Debug, Clone, Inspectable)]
pub struct ShadowSettings {
    pub enabled: bool,
    pub bias: f32,
    pub cascades: i32,
    pub offset: Vec2,
}

impl Default for ShadowSettings {
    fn default() -> Self {
        Self {
            enabled: true,
            bias: 0.005,
            cascades: 3,
            offset: Vec2::ZERO,
        }
    }
}

#[derive(Debug, Clone, Inspectable)]
#[inspect(name = "LightComponent")]
pub struct LightComponent {
    #[inspect(flatten)]
    pub base: ObjectBase,
    pub kind: LightKind,
    pub color: Vec3,
    pub intensity: f32,
    #[inspect(hidden_if = "Self::is_directional")]
    pub range: f64,
    pub shadow: ShadowSettings,
    pub samples: i64,
}

impl Default for LightComponent {
    fn default() -> Self {
        Self {
            base: ObjectBase::default(),
            kind: LightKind::Point,
            color: Vec3::ONE,
            intensity: 1.0,
            range: 10.0,
            shadow: ShadowSettings::default(),
            samples: 16,
        }
    }
}

impl LightComponent {
    pub fn is_directional(&self) -> bool {
        self.kind == LightKind::Directional
    }
}

/// Scene-wide settings; lives outside the node tree
#[derive(Debug, Clone, Inspectable)]
#[inspect(name = "SceneSettings", actions(reset_time, step_frame))]
pub struct SceneSettings {
    #[inspect(group = "Environment")]
    pub ambient: Vec4,
    #[inspect(group = "Environment")]
    pub sky: FileRef,
    #[inspect(group = "Environment")]
    pub sun_rotation: Quat,
    pub time_scale: f64,
    #[inspect(transient)]
    pub frame: i64,
    #[inspect(revision)]
    revision: u64,
}

impl Default for SceneSettings {
    fn default() -> Self {
        Self {
            ambient: Vec4::new(0.1, 0.1, 0.1, 1.0),
            sky: FileRef::default(),
            sun_rotation: Quat::IDENTITY,
            time_scale: 1.0,
            frame: 0,
            revision: 0,
        }
    }
}

impl SceneSettings {
    pub fn reset_time(&mut self) {
        self.time_scale = 1.0;
        self.frame = 0;
        self.revision += 1;
    }

    pub fn step_frame(&mut self) {
        self.frame += 1;
    }
}
