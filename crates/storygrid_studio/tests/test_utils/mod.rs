//! Test utilities for studio tests.

pub mod mock_driver;

#[allow(unused_imports)]
pub use mock_driver::{MockDriver, MockResponse};

use std::sync::Arc;
use storygrid_core::{GenerateRequest, Input};
use storygrid_studio::{Studio, StudioConfig};

/// A studio with default configuration over a shared mock.
#[allow(dead_code)]
pub fn studio() -> (Arc<MockDriver>, Arc<Studio<Arc<MockDriver>>>) {
    let driver = Arc::new(MockDriver::new());
    let studio = Studio::new(driver.clone(), &StudioConfig::default())
        .expect("default config builds a studio");
    (driver, Arc::new(studio))
}

/// The text part of a single-message request.
#[allow(dead_code)]
pub fn prompt_text(request: &GenerateRequest) -> String {
    request.messages()[0]
        .content
        .iter()
        .filter_map(Input::as_text)
        .collect::<Vec<_>>()
        .join("")
}
