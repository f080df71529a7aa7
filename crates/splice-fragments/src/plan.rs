//! Planned patches and their execution
//!
//! A [`Plan`] is an ordered list of actions, each against one file. Actions
//! for the same file run in plan order against that file's text; files are
//! independent of each other.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};

use splice_blocks::{BlockStatus, Fragment, MergeResult, apply_fragment, fragment_status, has_block};

use crate::Result;

/// What to do with one tagged block.
pub enum PatchAction {
    /// Insert or refresh the fragment's block.
    Apply(Box<dyn Fragment>),
    /// Strip every block with this identifier.
    Remove(String),
}

impl PatchAction {
    /// Identifier of the block this action manages.
    pub fn id(&self) -> &str {
        match self {
            Self::Apply(fragment) => fragment.id(),
            Self::Remove(id) => id.as_str(),
        }
    }

    pub fn is_apply(&self) -> bool {
        matches!(self, Self::Apply(_))
    }

    /// Run this action against `text`.
    pub fn run(&self, text: &str) -> Result<MergeResult> {
        match self {
            Self::Apply(fragment) => Ok(apply_fragment(text, fragment)?),
            Self::Remove(id) => Ok(splice_blocks::remove(text, id)),
        }
    }

    /// Where `text` stands relative to this action, without changing it.
    pub fn status(&self, text: &str) -> ActionStatus {
        match self {
            Self::Apply(fragment) => fragment_status(text, fragment).into(),
            Self::Remove(id) if has_block(text, id) => ActionStatus::Present,
            Self::Remove(_) => ActionStatus::Absent,
        }
    }
}

impl fmt::Debug for PatchAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Apply(fragment) => f.debug_tuple("Apply").field(&fragment.id()).finish(),
            Self::Remove(id) => f.debug_tuple("Remove").field(id).finish(),
        }
    }
}

/// Read-only outcome of checking one action against a file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActionStatus {
    /// Applied block is up to date.
    Current,
    /// Applied block exists with a different payload.
    Stale,
    /// Block to apply is not there yet.
    Missing,
    /// Block to remove is still there.
    Present,
    /// Block to remove is already gone.
    Absent,
}

impl ActionStatus {
    /// Whether running the action would leave the file unchanged.
    pub fn is_settled(&self) -> bool {
        matches!(self, Self::Current | Self::Absent)
    }
}

impl From<BlockStatus> for ActionStatus {
    fn from(status: BlockStatus) -> Self {
        match status {
            BlockStatus::Current => Self::Current,
            BlockStatus::Stale => Self::Stale,
            BlockStatus::Missing => Self::Missing,
        }
    }
}

impl fmt::Display for ActionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Current => "current",
            Self::Stale => "stale",
            Self::Missing => "missing",
            Self::Present => "present",
            Self::Absent => "absent",
        };
        write!(f, "{label}")
    }
}

/// One action bound to the file it edits, relative to the project root.
#[derive(Debug)]
pub struct PlannedPatch {
    pub file: PathBuf,
    pub action: PatchAction,
}

impl PlannedPatch {
    pub fn new(file: impl Into<PathBuf>, action: PatchAction) -> Self {
        Self {
            file: file.into(),
            action,
        }
    }
}

/// Ordered patches across any number of files.
#[derive(Debug, Default)]
pub struct Plan {
    patches: Vec<PlannedPatch>,
}

impl Plan {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, patch: PlannedPatch) {
        self.patches.push(patch);
    }

    pub fn patches(&self) -> &[PlannedPatch] {
        &self.patches
    }

    pub fn len(&self) -> usize {
        self.patches.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patches.is_empty()
    }

    /// Group actions per file, files in order of first appearance.
    pub fn by_file(&self) -> Vec<(&Path, Vec<&PatchAction>)> {
        let mut groups: Vec<(&Path, Vec<&PatchAction>)> = Vec::new();
        for patch in &self.patches {
            match groups.iter_mut().find(|(file, _)| *file == patch.file.as_path()) {
                Some((_, actions)) => actions.push(&patch.action),
                None => groups.push((patch.file.as_path(), vec![&patch.action])),
            }
        }
        groups
    }

    /// A plan that strips every block this plan manages.
    ///
    /// With a non-empty `tags`, only blocks whose identifier is listed.
    pub fn removals(&self, tags: &[String]) -> Plan {
        let patches = self
            .patches
            .iter()
            .filter(|patch| tags.is_empty() || tags.iter().any(|tag| tag == patch.action.id()))
            .map(|patch| PlannedPatch::new(&patch.file, PatchAction::Remove(patch.action.id().to_string())))
            .collect();
        Plan { patches }
    }

    /// Run one file's actions against its text, in order.
    ///
    /// Flags accumulate across actions. The first error aborts the whole
    /// file, so a failed file is never half patched.
    pub fn execute(text: &str, actions: &[&PatchAction]) -> Result<MergeResult> {
        let mut result = MergeResult {
            contents: text.to_string(),
            did_merge: false,
            did_clear: false,
        };
        for action in actions {
            let next = action.run(&result.contents)?;
            tracing::debug!(
                id = action.id(),
                did_merge = next.did_merge,
                did_clear = next.did_clear,
                "Ran planned action"
            );
            result = result.then(next);
        }
        Ok(result)
    }
}

impl FromIterator<PlannedPatch> for Plan {
    fn from_iter<I: IntoIterator<Item = PlannedPatch>>(iter: I) -> Self {
        Plan {
            patches: iter.into_iter().collect(),
        }
    }
}

impl Extend<PlannedPatch> for Plan {
    fn extend<I: IntoIterator<Item = PlannedPatch>>(&mut self, iter: I) {
        self.patches.extend(iter);
    }
}
