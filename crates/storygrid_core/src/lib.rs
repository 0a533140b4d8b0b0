//! Core data types for StoryGrid.
//!
//! This crate holds the six-slot scene model, the script parser that fills it
//! from free-form text, and the request/response values exchanged with a
//! generation driver.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod data_url;
mod input;
mod media;
mod message;
mod output;
mod parser;
mod request;
mod role;
mod scene;

pub use data_url::DataUrl;
pub use input::Input;
pub use media::MediaSource;
pub use message::{Message, MessageBuilder};
pub use output::Output;
pub use parser::{LabelConfig, ScriptParser};
pub use request::{GenerateRequest, GenerateRequestBuilder, GenerateResponse, ImageConfig};
pub use role::Role;
pub use scene::{Scene, SceneId, SceneRegistry};
