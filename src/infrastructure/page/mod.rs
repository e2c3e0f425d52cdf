//! Page rendering infrastructure

mod file_renderer;

pub use file_renderer::FilePageRenderer;
