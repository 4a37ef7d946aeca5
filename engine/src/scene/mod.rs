//! Scene graph of named nodes carrying inspectable objects

mod hierarchy;

pub use hierarchy::{ChildGroup, HierarchyTreeWalker};

use crate::reflect::Inspectable;
use tracing::{debug, warn};

/// Identity of a scene node
pub type NodeId = hecs::Entity;

/// Label of one ordered list of children under a node
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ChildCategory(pub &'static str);

impl ChildCategory {
    pub const ENTITIES: Self = Self("Entities");
    pub const COMPONENTS: Self = Self("Components");
}

/// Failure of a scene graph operation
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SceneError {
    #[error("node {0:?} does not exist")]
    NoSuchNode(NodeId),

    #[error("node {0:?} carries no object")]
    NoObject(NodeId),

    #[error("node {0:?} is detached and cannot have children")]
    DetachedParent(NodeId),
}

struct Name(String);

struct Parent(NodeId);

/// Children per category, categories in declaration order
#[derive(Default)]
pub(crate) struct Children(pub(crate) Vec<(ChildCategory, Vec<NodeId>)>);

impl Children {
    fn category_mut(&mut self, category: ChildCategory) -> &mut Vec<NodeId> {
        let index = match self.0.iter().position(|(c, _)| *c == category) {
            Some(index) => index,
            None => {
                self.0.push((category, Vec::new()));
                self.0.len() - 1
            }
        };
        &mut self.0[index].1
    }
}

struct Object(Box<dyn Inspectable>);

/// Marker for nodes that live outside the tree
struct Detached;

/// Hierarchical scene graph stored in a `hecs` world
///
/// Every node has a name and an optional inspectable object, belongs to at most
/// one parent and keeps its children in ordered categories.
pub struct SceneGraph {
    world: hecs::World,
    roots: Vec<NodeId>,
}

impl Default for SceneGraph {
    fn default() -> Self {
        Self::new()
    }
}

impl SceneGraph {
    pub fn new() -> Self {
        Self {
            world: hecs::World::new(),
            roots: Vec::new(),
        }
    }

    /// Spawn a top-level node
    pub fn spawn_root(&mut self, name: impl Into<String>, object: impl Inspectable) -> NodeId {
        let name = name.into();
        let node = self.world.spawn((
            Name(name.clone()),
            Children::default(),
            Object(Box::new(object)),
        ));
        self.roots.push(node);
        debug!(node = ?node, name = %name, "Spawned root node");
        node
    }

    /// Spawn a node under `parent` in the given category
    pub fn spawn_child(
        &mut self,
        parent: NodeId,
        category: ChildCategory,
        name: impl Into<String>,
        object: impl Inspectable,
    ) -> Result<NodeId, SceneError> {
        if !self.world.contains(parent) {
            return Err(SceneError::NoSuchNode(parent));
        }
        if self.is_detached(parent) {
            return Err(SceneError::DetachedParent(parent));
        }

        let name = name.into();
        let node = self.world.spawn((
            Name(name.clone()),
            Parent(parent),
            Children::default(),
            Object(Box::new(object)),
        ));
        self.children_mut(parent)?.category_mut(category).push(node);
        debug!(node = ?node, parent = ?parent, category = category.0, name = %name, "Spawned child node");
        Ok(node)
    }

    /// Spawn a node that is reachable only by id, never through the tree
    pub fn spawn_detached(&mut self, name: impl Into<String>, object: impl Inspectable) -> NodeId {
        let name = name.into();
        let node = self.world.spawn((
            Name(name.clone()),
            Children::default(),
            Object(Box::new(object)),
            Detached,
        ));
        debug!(node = ?node, name = %name, "Spawned detached node");
        node
    }

    /// Make sure `category` is listed under `node`, even while empty
    pub fn declare_category(
        &mut self,
        node: NodeId,
        category: ChildCategory,
    ) -> Result<(), SceneError> {
        self.children_mut(node)?.category_mut(category);
        Ok(())
    }

    pub fn contains(&self, node: NodeId) -> bool {
        self.world.contains(node)
    }

    pub fn is_detached(&self, node: NodeId) -> bool {
        self.world
            .entity(node)
            .map(|entity| entity.has::<Detached>())
            .unwrap_or(false)
    }

    /// Top-level nodes in spawn order
    pub fn roots(&self) -> &[NodeId] {
        &self.roots
    }

    pub fn parent(&self, node: NodeId) -> Option<NodeId> {
        self.world.get::<&Parent>(node).ok().map(|parent| parent.0)
    }

    pub fn name(&self, node: NodeId) -> Result<String, SceneError> {
        self.world
            .get::<&Name>(node)
            .map(|name| name.0.clone())
            .map_err(|_| SceneError::NoSuchNode(node))
    }

    /// Type name of the object carried by `node`
    pub fn class_name(&self, node: NodeId) -> Result<&'static str, SceneError> {
        self.with_object(node, |object| object.type_name())
    }

    /// Row label, "name (Class)"
    pub fn label(&self, node: NodeId) -> Result<String, SceneError> {
        Ok(format!("{} ({})", self.name(node)?, self.class_name(node)?))
    }

    /// Run `f` against the object carried by `node`
    pub fn with_object<R>(
        &self,
        node: NodeId,
        f: impl FnOnce(&dyn Inspectable) -> R,
    ) -> Result<R, SceneError> {
        if !self.world.contains(node) {
            return Err(SceneError::NoSuchNode(node));
        }
        let object = self
            .world
            .get::<&Object>(node)
            .map_err(|_| SceneError::NoObject(node))?;
        Ok(f(object.0.as_ref()))
    }

    /// Mutable access to the object carried by `node`
    pub fn object_mut(&mut self, node: NodeId) -> Result<&mut dyn Inspectable, SceneError> {
        if !self.world.contains(node) {
            return Err(SceneError::NoSuchNode(node));
        }
        let object = self
            .world
            .query_one_mut::<&mut Object>(node)
            .map_err(|_| SceneError::NoObject(node))?;
        Ok(object.0.as_mut())
    }

    /// Typed mutable access, for code that knows what a node carries
    pub fn downcast_mut<T: Inspectable>(&mut self, node: NodeId) -> Option<&mut T> {
        self.object_mut(node)
            .ok()
            .and_then(|object| object.as_any_mut().downcast_mut::<T>())
    }

    /// Revision of the object carried by `node`, if it tracks one
    pub fn revision(&self, node: NodeId) -> Option<u64> {
        self.with_object(node, |object| object.revision())
            .ok()
            .flatten()
    }

    /// Remove `node` and its whole subtree
    pub fn despawn_recursive(&mut self, node: NodeId) -> Result<(), SceneError> {
        if !self.world.contains(node) {
            return Err(SceneError::NoSuchNode(node));
        }

        if let Some(parent) = self.parent(node) {
            if let Ok(children) = self.children_mut(parent) {
                for (_, nodes) in children.0.iter_mut() {
                    nodes.retain(|child| *child != node);
                }
            }
        }
        self.roots.retain(|root| *root != node);

        let mut pending = vec![node];
        let mut removed = 0usize;
        while let Some(current) = pending.pop() {
            if let Ok(children) = self.world.get::<&Children>(current) {
                pending.extend(children.0.iter().flat_map(|(_, nodes)| nodes.iter().copied()));
            }
            match self.world.despawn(current) {
                Ok(()) => removed += 1,
                Err(_) => warn!(node = ?current, "Node vanished during despawn"),
            }
        }
        debug!(node = ?node, removed, "Despawned subtree");
        Ok(())
    }

    pub(crate) fn children(&self, node: NodeId) -> Option<hecs::Ref<'_, Children>> {
        self.world.get::<&Children>(node).ok()
    }

    fn children_mut(&mut self, node: NodeId) -> Result<&mut Children, SceneError> {
        self.world
            .query_one_mut::<&mut Children>(node)
            .map_err(|_| SceneError::NoSuchNode(node))
    }
}
