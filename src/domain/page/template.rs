//! Page template parsing and rendering
//!
//! Supports variable syntax: `${var:variable-name:default-value}`
//! - `${var:name}` - Required variable, error if not provided
//! - `${var:name:default}` - Optional variable with default value

use std::collections::{HashMap, HashSet};

use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use thiserror::Error;

/// Regex to match variable patterns: ${var:name} or ${var:name:default}
static VARIABLE_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\$\{var:([a-zA-Z0-9][-_a-zA-Z0-9]*)(?::([^}]*))?\}")
        .expect("variable pattern is a valid regex")
});

/// Template processing errors
#[derive(Debug, Clone, Error, PartialEq)]
pub enum TemplateError {
    #[error("Missing required variable: {name}")]
    MissingVariable { name: String },

    #[error("Template '{name}' not found")]
    NotFound { name: String },

    #[error("Invalid template name: {name}")]
    InvalidName { name: String },
}

/// A variable referenced by a template
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateVariable {
    pub name: String,
    pub default: Option<String>,
}

impl TemplateVariable {
    pub fn is_required(&self) -> bool {
        self.default.is_none()
    }
}

/// A parsed page template
#[derive(Debug, Clone)]
pub struct PageTemplate {
    content: String,
    variables: Vec<TemplateVariable>,
}

impl PageTemplate {
    /// Parse template content and collect the variables it references
    pub fn parse(content: impl Into<String>) -> Self {
        let content = content.into();
        let mut variables = Vec::new();
        let mut seen = HashSet::new();

        for cap in VARIABLE_PATTERN.captures_iter(&content) {
            let name = cap[1].to_string();

            if !seen.insert(name.clone()) {
                continue;
            }

            variables.push(TemplateVariable {
                name,
                default: cap.get(2).map(|m| m.as_str().to_string()),
            });
        }

        Self { content, variables }
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn variables(&self) -> &[TemplateVariable] {
        &self.variables
    }

    /// Render the template, substituting provided values and falling back to defaults
    pub fn render(&self, values: &HashMap<String, String>) -> Result<String, TemplateError> {
        if let Some(missing) = self
            .variables
            .iter()
            .find(|v| v.is_required() && !values.contains_key(&v.name))
        {
            return Err(TemplateError::MissingVariable {
                name: missing.name.clone(),
            });
        }

        let rendered = VARIABLE_PATTERN.replace_all(&self.content, |cap: &Captures<'_>| {
            values
                .get(&cap[1])
                .cloned()
                .or_else(|| cap.get(2).map(|m| m.as_str().to_string()))
                .unwrap_or_default()
        });

        Ok(rendered.into_owned())
    }
}
