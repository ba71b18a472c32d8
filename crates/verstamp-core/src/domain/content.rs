use crate::domain::{error::DomainError, pattern::VersionPattern, template::VersionTemplate};

/// How the new file content is produced. Chosen once from the options.
#[derive(Debug, Clone)]
pub enum GenerationStrategy {
    /// Render the whole file; prior content is ignored.
    Template(VersionTemplate),
    /// Replace the captured version inside the existing file.
    Pattern(VersionPattern),
}

impl GenerationStrategy {
    pub fn mode(&self) -> &'static str {
        match self {
            Self::Template(_) => "template",
            Self::Pattern(_) => "pattern",
        }
    }

    /// Whether [`Self::generate`] needs the file's current content.
    pub fn reads_existing(&self) -> bool {
        matches!(self, Self::Pattern(_))
    }

    /// Version currently recorded in `existing`, in pattern mode only.
    pub fn current_version<'c>(&self, existing: &'c str) -> Option<&'c str> {
        match self {
            Self::Template(_) => None,
            Self::Pattern(pattern) => pattern.find(existing),
        }
    }

    /// Produce the content to write at `path`.
    ///
    /// `existing` is the current file content, `None` when the file does not
    /// exist. It is ignored in template mode.
    pub fn generate(
        &self,
        version: &str,
        existing: Option<&str>,
        path: &str,
    ) -> Result<String, DomainError> {
        match self {
            Self::Template(template) => Ok(template.render(version)),
            Self::Pattern(pattern) => {
                let content = existing.ok_or_else(|| DomainError::SourceFileMissing {
                    path: path.to_string(),
                })?;
                pattern.substitute(content, version, path)
            }
        }
    }
}
