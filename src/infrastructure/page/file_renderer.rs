//! File-backed page renderer

use std::collections::HashMap;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tracing::debug;

use crate::domain::page::{PageRenderer, PageTemplate, TemplateError};
use crate::domain::DomainError;

/// Renders templates read from a directory on every request
#[derive(Debug, Clone)]
pub struct FilePageRenderer {
    dir: PathBuf,
}

impl FilePageRenderer {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Resolve a template name to a file inside the template directory
    fn resolve(&self, name: &str) -> Result<PathBuf, TemplateError> {
        let is_plain_file_name = !name.is_empty()
            && !name.starts_with('.')
            && !name.contains(['/', '\\']);

        if !is_plain_file_name {
            return Err(TemplateError::InvalidName {
                name: name.to_string(),
            });
        }

        Ok(self.dir.join(name))
    }
}

#[async_trait]
impl PageRenderer for FilePageRenderer {
    async fn render(
        &self,
        name: &str,
        variables: &HashMap<String, String>,
    ) -> Result<String, DomainError> {
        let path = self.resolve(name)?;

        let content = tokio::fs::read_to_string(&path).await.map_err(|e| {
            if e.kind() == ErrorKind::NotFound {
                DomainError::from(TemplateError::NotFound {
                    name: name.to_string(),
                })
            } else {
                DomainError::internal(format!("Failed to read template '{}': {}", name, e))
            }
        })?;

        debug!(template = %name, path = %path.display(), "Rendering page template");

        Ok(PageTemplate::parse(content).render(variables)?)
    }
}
