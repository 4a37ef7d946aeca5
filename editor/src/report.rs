//! Per-frame record of what the editor panels did

use crate::state_cache::OwnerId;
use engine::file_ref::FileRef;
use engine::reflect::Value;
use engine::scene::NodeId;

/// A value written back through a property setter
#[derive(Debug, Clone, PartialEq)]
pub struct CommitRecord {
    pub owner: OwnerId,
    pub property: &'static str,
    pub value: Value,
}

/// A debug action that ran
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionRecord {
    pub owner: OwnerId,
    pub action: &'static str,
}

/// A row that rendered as an error instead of its widget
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FaultRecord {
    pub owner: OwnerId,
    pub property: &'static str,
    pub message: String,
}

/// A click on a tree row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowClick {
    pub node: NodeId,
    /// The extend-selection modifier was held
    pub extend: bool,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct FrameReport {
    pub commits: Vec<CommitRecord>,
    pub actions: Vec<ActionRecord>,
    pub faults: Vec<FaultRecord>,
    pub clicks: Vec<RowClick>,
}

impl FrameReport {
    /// Nothing was edited, invoked or clicked
    pub fn is_quiet(&self) -> bool {
        self.commits.is_empty() && self.actions.is_empty() && self.clicks.is_empty()
    }

    /// File references committed this frame, for resolution outside the draw path
    pub fn committed_files(&self) -> impl Iterator<Item = (&CommitRecord, &FileRef)> {
        self.commits.iter().filter_map(|commit| match &commit.value {
            Value::File(file) => Some((commit, file)),
            _ => None,
        })
    }
}
