//! Page renderer trait

use std::collections::HashMap;

use async_trait::async_trait;

use crate::domain::DomainError;

/// Renders named HTML page templates
#[async_trait]
pub trait PageRenderer: Send + Sync {
    /// Render the template called `name` with the given variables
    async fn render(
        &self,
        name: &str,
        variables: &HashMap<String, String>,
    ) -> Result<String, DomainError>;
}
