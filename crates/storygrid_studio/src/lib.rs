//! Storyboard orchestration for StoryGrid.
//!
//! [`Studio`] holds one storyboard session (product keyword, raw script, six
//! scenes, reference image, composite) and runs the four generation
//! operations against any [`GenerationDriver`](storygrid_interface::GenerationDriver):
//!
//! | operation | model | effect |
//! |---|---|---|
//! | [`Studio::generate_script`] | text | new raw script, scenes re-derived |
//! | [`Studio::translate_script`] | text | translated raw script |
//! | [`Studio::refine_scene`] | text | one scene rewritten |
//! | [`Studio::generate_composite`] | image | 3x2 storyboard grid |
//!
//! Failures are returned to the caller and also recorded as the session's
//! single shared error message.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod composite;
mod config;
mod operation;
pub mod prompts;
mod studio;

pub use composite::CompositeImage;
pub use config::{GeminiSettings, ImageSettings, ModelsConfig, OutputConfig, StudioConfig};
pub use operation::{OperationBoard, OperationKind, OperationState};
pub use studio::Studio;
