//! Widget-local scratch state that must survive immediate-mode redraws

use engine::scene::NodeId;
use std::collections::hash_map::Entry;
use std::collections::{HashMap, HashSet};
use tracing::{debug, trace};

/// Reference identity of an inspected object
///
/// A scene node, plus the chain of nested-property names leading from the
/// node's object to the inspected value. Two objects with equal field values
/// never share an `OwnerId`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct OwnerId {
    pub node: NodeId,
    pub path: Vec<&'static str>,
}

impl OwnerId {
    pub fn root(node: NodeId) -> Self {
        Self {
            node,
            path: Vec::new(),
        }
    }

    /// Identity of the inspectable reached through `property`
    pub fn child(&self, property: &'static str) -> Self {
        let mut path = self.path.clone();
        path.push(property);
        Self {
            node: self.node,
            path,
        }
    }
}

/// Cache key: owner identity plus the declaring type and name of the property
///
/// Names are only unique per declaring type, so a flattened base field and an
/// outer field of the same name get separate cells.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct WidgetStateKey {
    pub owner: OwnerId,
    pub declaring_type: &'static str,
    pub property: &'static str,
}

impl WidgetStateKey {
    pub fn new(owner: OwnerId, declaring_type: &'static str, property: &'static str) -> Self {
        Self {
            owner,
            declaring_type,
            property,
        }
    }
}

/// Editable scratch value of one widget
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Bool(bool),
    Int32(i32),
    Int64(i64),
    Float32(f32),
    Float64(f64),
    Text(String),
}

#[derive(Debug)]
struct StateCell {
    value: CellValue,
    /// Owner revision observed when the cell was initialised
    revision: Option<u64>,
}

/// Mapping from widget identity to its scratch state
///
/// Cells are created from the field value on first draw and then reused
/// unchanged; they are re-initialised only when the owner's revision moves or
/// when told to via [`WidgetStateCache::resynchronize`].
#[derive(Debug, Default)]
pub struct WidgetStateCache {
    cells: HashMap<WidgetStateKey, StateCell>,
    stale: HashSet<WidgetStateKey>,
}

impl WidgetStateCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// The cell for `key`, created with `init` if it does not exist or is out of date
    pub fn get_or_create(
        &mut self,
        key: WidgetStateKey,
        revision: Option<u64>,
        init: impl FnOnce() -> CellValue,
    ) -> &mut CellValue {
        let forced = self.stale.remove(&key);
        match self.cells.entry(key) {
            Entry::Occupied(entry) => {
                let cell = entry.into_mut();
                if forced || cell.revision != revision {
                    trace!(
                        seen = ?cell.revision,
                        current = ?revision,
                        forced,
                        "Resynchronizing widget state"
                    );
                    cell.value = init();
                    cell.revision = revision;
                }
                &mut cell.value
            }
            Entry::Vacant(entry) => {
                trace!(
                    node = ?entry.key().owner.node,
                    declaring_type = entry.key().declaring_type,
                    property = entry.key().property,
                    "Creating widget state"
                );
                let cell = entry.insert(StateCell {
                    value: init(),
                    revision,
                });
                &mut cell.value
            }
        }
    }

    /// Re-initialise the cell for `key` from its field on the next lookup
    pub fn resynchronize(&mut self, key: &WidgetStateKey) {
        if self.cells.contains_key(key) {
            self.stale.insert(key.clone());
        }
    }

    /// Drop every cell belonging to `node`
    pub fn forget_owner(&mut self, node: NodeId) -> usize {
        self.retain(|key| key.owner.node != node)
    }

    /// Drop cells whose owner node is gone
    pub fn sweep(&mut self, is_alive: impl Fn(NodeId) -> bool) -> usize {
        let removed = self.retain(|key| is_alive(key.owner.node));
        if removed > 0 {
            debug!(removed, remaining = self.cells.len(), "Swept widget state");
        }
        removed
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn contains(&self, key: &WidgetStateKey) -> bool {
        self.cells.contains_key(key)
    }

    fn retain(&mut self, keep: impl Fn(&WidgetStateKey) -> bool) -> usize {
        let before = self.cells.len();
        self.cells.retain(|key, _| keep(key));
        self.stale.retain(|key| keep(key));
        before - self.cells.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn nodes() -> (NodeId, NodeId) {
        let mut world = hecs::World::new();
        (world.spawn(()), world.spawn(()))
    }

    fn key(node: NodeId, property: &'static str) -> WidgetStateKey {
        WidgetStateKey::new(OwnerId::root(node), "Test", property)
    }

    #[test]
    fn test_cell_is_created_once() {
        let (a, _) = nodes();
        let mut cache = WidgetStateCache::new();

        *cache.get_or_create(key(a, "name"), None, || CellValue::Text("one".into())) =
            CellValue::Text("edited".into());
        let cell = cache.get_or_create(key(a, "name"), None, || CellValue::Text("two".into()));
        assert_eq!(*cell, CellValue::Text("edited".into()));
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_owners_do_not_share_cells() {
        let (a, b) = nodes();
        let mut cache = WidgetStateCache::new();

        *cache.get_or_create(key(a, "enabled"), None, || CellValue::Bool(false)) =
            CellValue::Bool(true);
        let other = cache.get_or_create(key(b, "enabled"), None, || CellValue::Bool(false));
        assert_eq!(*other, CellValue::Bool(false));
    }

    #[test]
    fn test_nested_paths_are_distinct_owners() {
        let (a, _) = nodes();
        let owner = OwnerId::root(a);
        assert_ne!(owner, owner.child("shadow"));
        assert_eq!(owner.child("shadow").path, vec!["shadow"]);
    }

    #[test]
    fn test_declaring_types_do_not_share_cells() {
        let (a, _) = nodes();
        let mut cache = WidgetStateCache::new();
        let base = WidgetStateKey::new(OwnerId::root(a), "PrefabSaveable", "enabled");
        let outer = WidgetStateKey::new(OwnerId::root(a), "Toggle", "enabled");

        cache.get_or_create(base.clone(), None, || CellValue::Bool(true));
        let cell = cache.get_or_create(outer.clone(), None, || CellValue::Bool(false));
        assert_eq!(*cell, CellValue::Bool(false));
        assert_eq!(cache.len(), 2);
        assert!(cache.contains(&base) && cache.contains(&outer));
    }

    #[test]
    fn test_revision_change_reinitialises() {
        let (a, _) = nodes();
        let mut cache = WidgetStateCache::new();

        *cache.get_or_create(key(a, "x"), Some(1), || CellValue::Float64(1.0)) =
            CellValue::Float64(5.0);
        assert_eq!(
            *cache.get_or_create(key(a, "x"), Some(1), || CellValue::Float64(2.0)),
            CellValue::Float64(5.0)
        );
        assert_eq!(
            *cache.get_or_create(key(a, "x"), Some(2), || CellValue::Float64(2.0)),
            CellValue::Float64(2.0)
        );
    }

    #[test]
    fn test_resynchronize_is_explicit_and_one_shot() {
        let (a, _) = nodes();
        let mut cache = WidgetStateCache::new();
        cache.get_or_create(key(a, "n"), None, || CellValue::Int32(1));

        cache.resynchronize(&key(a, "n"));
        assert_eq!(
            *cache.get_or_create(key(a, "n"), None, || CellValue::Int32(7)),
            CellValue::Int32(7)
        );
        assert_eq!(
            *cache.get_or_create(key(a, "n"), None, || CellValue::Int32(9)),
            CellValue::Int32(7)
        );
    }

    #[test]
    fn test_sweep_drops_dead_owners() {
        let (a, b) = nodes();
        let mut cache = WidgetStateCache::new();
        cache.get_or_create(key(a, "n"), None, || CellValue::Int32(1));
        cache.get_or_create(key(b, "n"), None, || CellValue::Int32(1));
        cache.get_or_create(
            WidgetStateKey::new(OwnerId::root(b).child("shadow"), "Test", "bias"),
            None,
            || CellValue::Float32(0.1),
        );

        assert_eq!(cache.sweep(|node| node == a), 2);
        assert_eq!(cache.len(), 1);
        assert!(cache.contains(&key(a, "n")));
        assert_eq!(cache.forget_owner(a), 1);
        assert!(cache.is_empty());
    }
}
