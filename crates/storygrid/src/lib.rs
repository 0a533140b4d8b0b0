//! StoryGrid: six-frame storyboard scripting and grid generation.
//!
//! StoryGrid turns a product keyword into a 15-second, six-frame (C01..C06)
//! commercial script, keeps the script and its per-frame scenes in step, and
//! renders all six frames as a single 3x2 black-and-white storyboard grid
//! through Google Gemini.
//!
//! # Quick Start
//!
//! ```no_run
//! use storygrid::{ArtifactStore, FileSystemArtifactStore, GeminiClient, Studio, StudioConfig};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = StudioConfig::load()?;
//!     let studio = Studio::new(GeminiClient::new()?, &config)?;
//!
//!     studio.set_product_keyword("Smart Watch");
//!     studio.generate_script().await?;
//!     let grid = studio.generate_composite().await?;
//!
//!     let store = FileSystemArtifactStore::new(&config.output.directory)?;
//!     println!("saved {}", store.export(grid.bytes()).await?.display());
//!     Ok(())
//! }
//! ```
//!
//! # Architecture
//!
//! - `storygrid_error` - Error types
//! - `storygrid_core` - Scene model, script parser, request/response values
//! - `storygrid_interface` - `GenerationDriver` trait and response helpers
//! - `storygrid_models` - Gemini REST client
//! - `storygrid_storage` - Reference image loading and grid export
//! - `storygrid_studio` - Session orchestration, prompts, configuration
//!
//! This crate re-exports everything for convenience.

pub use storygrid_core::*;
pub use storygrid_error::*;
pub use storygrid_interface::*;
pub use storygrid_models::*;
pub use storygrid_storage::*;
pub use storygrid_studio::*;
