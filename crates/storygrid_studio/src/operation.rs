//! Per-category operation state.

use serde::{Deserialize, Serialize};
use storygrid_core::SceneId;
use storygrid_error::{StudioError, StudioErrorKind};

/// The four kinds of remote work the studio performs.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    strum::EnumIter,
    derive_more::Display,
)]
pub enum OperationKind {
    /// Writing a full script from the product keyword
    #[display("Script generation")]
    ScriptGeneration,
    /// Translating the raw script
    #[display("Translation")]
    Translation,
    /// Rewriting a single scene
    #[display("Scene refinement")]
    Refinement,
    /// Rendering the 3x2 storyboard grid
    #[display("Storyboard generation")]
    CompositeGeneration,
}

/// Where an operation category stands.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum OperationState {
    /// Nothing in flight; the last run, if any, succeeded
    #[default]
    Idle,
    /// A request is in flight. Refinements carry the scene being refined.
    Pending {
        /// Target scene for refinements
        scene: Option<SceneId>,
    },
    /// The last run failed with this message
    Failed(String),
}

impl OperationState {
    /// Whether a request is in flight.
    pub fn is_pending(&self) -> bool {
        matches!(self, OperationState::Pending { .. })
    }
}

/// State of every operation category, plus what a retry would repeat.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct OperationBoard {
    script_generation: OperationState,
    translation: OperationState,
    refinement: OperationState,
    composite_generation: OperationState,
    last_refinement: Option<SceneId>,
}

impl OperationBoard {
    /// Current state of a category.
    pub fn state(&self, kind: OperationKind) -> &OperationState {
        match kind {
            OperationKind::ScriptGeneration => &self.script_generation,
            OperationKind::Translation => &self.translation,
            OperationKind::Refinement => &self.refinement,
            OperationKind::CompositeGeneration => &self.composite_generation,
        }
    }

    fn state_mut(&mut self, kind: OperationKind) -> &mut OperationState {
        match kind {
            OperationKind::ScriptGeneration => &mut self.script_generation,
            OperationKind::Translation => &mut self.translation,
            OperationKind::Refinement => &mut self.refinement,
            OperationKind::CompositeGeneration => &mut self.composite_generation,
        }
    }

    /// Fail with `Busy` if the category already has a request in flight.
    pub fn ensure_idle(&self, kind: OperationKind) -> Result<(), StudioError> {
        if self.state(kind).is_pending() {
            return Err(StudioError::new(StudioErrorKind::Busy(kind.to_string())));
        }
        Ok(())
    }

    /// Mark a category pending.
    ///
    /// # Errors
    ///
    /// Returns [`StudioErrorKind::Busy`] without changing anything if the
    /// category is already pending.
    pub fn begin(&mut self, kind: OperationKind, scene: Option<SceneId>) -> Result<(), StudioError> {
        self.ensure_idle(kind)?;
        if kind == OperationKind::Refinement {
            self.last_refinement = scene;
        }
        *self.state_mut(kind) = OperationState::Pending { scene };
        Ok(())
    }

    /// Mark a category idle after success.
    pub fn succeed(&mut self, kind: OperationKind) {
        *self.state_mut(kind) = OperationState::Idle;
    }

    /// Mark a category failed.
    pub fn fail(&mut self, kind: OperationKind, message: impl Into<String>) {
        *self.state_mut(kind) = OperationState::Failed(message.into());
    }

    /// Scene targeted by the most recent refinement.
    pub fn last_refinement(&self) -> Option<SceneId> {
        self.last_refinement
    }

    /// Whether any category has a request in flight.
    pub fn any_pending(&self) -> bool {
        [
            &self.script_generation,
            &self.translation,
            &self.refinement,
            &self.composite_generation,
        ]
        .iter()
        .any(|state| state.is_pending())
    }
}
