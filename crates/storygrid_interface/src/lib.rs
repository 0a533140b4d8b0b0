//! The seam between StoryGrid and an external generation service.
//!
//! Anything that can turn a [`GenerateRequest`](storygrid_core::GenerateRequest)
//! into a [`GenerateResponse`](storygrid_core::GenerateResponse) implements
//! [`GenerationDriver`]. The response helpers in this crate give the loosely
//! shaped part list a narrow, total contract.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod extract;
mod traits;

pub use extract::{InlineImage, extract_inline_image, extract_text};
pub use traits::GenerationDriver;
