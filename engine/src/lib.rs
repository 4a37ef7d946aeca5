//! Object model for the reflective scene inspector
//!
//! This crate provides the reflection layer (property descriptors, dynamic values,
//! coercion), the hecs-backed scene graph with its hierarchy walker, and the
//! built-in inspectable scene object types.

extern crate self as engine;

pub mod components;
pub mod config;
pub mod file_ref;
pub mod reflect;
pub mod scene;

// Re-export commonly used types
pub mod prelude {
    // Reflection types
    pub use crate::reflect::{
        Capability, DebugAction, EnumRegistry, ExtendableEnum, FixedEnum, Inspectable,
        Precision, Property, PropertyDescriptor, ReflectError, TypeReflection, TypeTag, Value,
    };

    // Scene types
    pub use crate::scene::{ChildCategory, HierarchyTreeWalker, NodeId, SceneError, SceneGraph};

    // File types
    pub use crate::config::AssetConfig;
    pub use crate::file_ref::{AssetResolver, FileRef, FileResolver};

    // Math types
    pub use glam::{DQuat, DVec2, DVec3, DVec4, Quat, Vec2, Vec3, Vec4};
}

pub use engine_derive::{InspectEnum, Inspectable};

/// Initialize logging for the engine
pub fn init_logging() {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}
