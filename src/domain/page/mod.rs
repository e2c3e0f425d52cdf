//! Page domain - server-rendered HTML templates

mod renderer;
mod template;

pub use renderer::PageRenderer;
pub use template::{PageTemplate, TemplateError, TemplateVariable};
