//! File ingestion: the drop target's visual state and file batches.
//!
//! The drop target has exactly two visual states. Drag events are fed in as
//! discrete [`DragPhase`] inputs and the [`DropZone`] reports whether the
//! highlight must change, so the DOM layer never reads its own class list
//! back to decide what to do.

/// Visual state of the drop target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DropZoneState {
    /// No drag in progress
    #[default]
    Idle,
    /// A drag is hovering over the target
    DragActive,
}

/// Drag events the drop target listens to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragPhase {
    Enter,
    Over,
    Leave,
    Drop,
}

impl DragPhase {
    /// All phases, in the order listeners are registered.
    pub const ALL: [DragPhase; 4] = [
        DragPhase::Enter,
        DragPhase::Over,
        DragPhase::Leave,
        DragPhase::Drop,
    ];

    /// DOM event name of this phase.
    pub fn event_name(&self) -> &'static str {
        match self {
            DragPhase::Enter => "dragenter",
            DragPhase::Over => "dragover",
            DragPhase::Leave => "dragleave",
            DragPhase::Drop => "drop",
        }
    }

    /// Whether the browser's default action must be canceled and propagation
    /// stopped. Holds for every phase: without it a drop navigates the tab
    /// to the dropped file.
    pub fn suppresses_default(&self) -> bool {
        true
    }

    /// Whether this phase carries files to process.
    pub fn delivers_files(&self) -> bool {
        matches!(self, DragPhase::Drop)
    }

    /// State the drop target ends up in after this phase.
    pub fn target_state(&self) -> DropZoneState {
        match self {
            DragPhase::Enter | DragPhase::Over => DropZoneState::DragActive,
            DragPhase::Leave | DragPhase::Drop => DropZoneState::Idle,
        }
    }
}

/// Result of feeding one phase into the drop zone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    /// State after the phase
    pub state: DropZoneState,
    /// Whether the state differs from before the phase
    pub changed: bool,
}

/// Owner of the drop target's state.
#[derive(Debug, Clone, Default)]
pub struct DropZone {
    state: DropZoneState,
}

impl DropZone {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current state.
    pub fn state(&self) -> DropZoneState {
        self.state
    }

    /// Whether the highlight class should be present.
    pub fn is_highlighted(&self) -> bool {
        self.state == DropZoneState::DragActive
    }

    /// Apply a drag phase and report the transition.
    pub fn apply(&mut self, phase: DragPhase) -> Transition {
        let next = phase.target_state();
        let changed = next != self.state;
        if changed {
            log::trace!("Drop zone {:?} -> {:?} on {}", self.state, next, phase.event_name());
        }
        self.state = next;
        Transition {
            state: next,
            changed,
        }
    }
}

/// Ordered files from one drop or one picker selection.
///
/// Both sources are normalized into this type so the pipeline sees a single
/// iterable; the order is the order the browser API listed the files in.
#[derive(Debug, Clone)]
pub struct FileBatch<F> {
    files: Vec<F>,
}

impl<F> FileBatch<F> {
    pub fn new(files: Vec<F>) -> Self {
        Self { files }
    }

    /// Number of files in the batch.
    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}

impl<F> FromIterator<F> for FileBatch<F> {
    fn from_iter<I: IntoIterator<Item = F>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<F> IntoIterator for FileBatch<F> {
    type Item = F;
    type IntoIter = std::vec::IntoIter<F>;

    fn into_iter(self) -> Self::IntoIter {
        self.files.into_iter()
    }
}
