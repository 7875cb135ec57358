use anyhow::Result;
use once_cell::sync::Lazy;
use regex::Regex;
use serde_yaml::Mapping;

use crate::errors::DocumentError;

// @module: Markdown document handling with YAML front matter

/// Matches a leading front matter block: a line of exactly three hyphens,
/// the metadata, a second such line, then the body.
static FRONT_MATTER_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?s)\A---\r?\n(.*?)\r?\n---(?:\r?\n|\z)(.*)\z")
        .expect("front matter pattern is valid")
});

/// A documentation file split into its front matter and body text
///
/// The front matter is kept as a parsed YAML mapping so it survives
/// translation structurally: the body is replaced, the mapping is
/// serialized back in front of it.
#[derive(Debug, Clone, PartialEq)]
pub struct MarkdownDocument {
    /// Parsed front matter mapping, when the document starts with one
    pub front_matter: Option<Mapping>,

    /// Text content to be translated, never including the front matter
    pub body: String,
}

impl MarkdownDocument {
    /// Split a document into front matter and body
    ///
    /// A document starts with front matter only when its very first line
    /// is three hyphens. Delimiters without a parseable YAML mapping
    /// between them are a hard error for the file.
    pub fn parse(text: &str) -> Result<Self> {
        if let Some(caps) = FRONT_MATTER_RE.captures(text) {
            let raw_metadata = caps.get(1).map(|m| m.as_str()).unwrap_or_default();
            let body = caps.get(2).map(|m| m.as_str()).unwrap_or_default();

            let mapping: Mapping = serde_yaml::from_str(raw_metadata)
                .map_err(|e| DocumentError::FrontMatterParse(e.to_string()))?;

            Ok(Self {
                front_matter: Some(mapping),
                body: body.trim().to_string(),
            })
        } else {
            Ok(Self::body_only(text))
        }
    }

    /// Build a document with no front matter, whatever its content
    ///
    /// Used for watched extensions other than the documentation
    /// extension, where a leading `---` line has no special meaning.
    pub fn body_only(text: &str) -> Self {
        Self {
            front_matter: None,
            body: text.trim().to_string(),
        }
    }

    /// Whether the document carried a front matter block
    pub fn has_front_matter(&self) -> bool {
        self.front_matter.is_some()
    }

    /// Return a copy of this document carrying a translated body
    pub fn with_body(&self, body: impl Into<String>) -> Self {
        Self {
            front_matter: self.front_matter.clone(),
            body: body.into(),
        }
    }

    /// Reassemble the document text
    ///
    /// With front matter the result is the fenced YAML block, a blank
    /// line, then the body. Serialization keeps unicode unescaped; key
    /// order follows the mapping, not the original text.
    pub fn render(&self) -> Result<String> {
        match &self.front_matter {
            Some(mapping) => {
                let yaml = serde_yaml::to_string(mapping)
                    .map_err(|e| DocumentError::FrontMatterSerialize(e.to_string()))?;
                Ok(format!("---\n{}---\n\n{}", yaml, self.body))
            }
            None => Ok(self.body.clone()),
        }
    }
}
