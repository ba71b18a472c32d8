//! In-place version substitution through a single-capture-group regex.

use std::sync::LazyLock;

use regex::{Regex, RegexBuilder};

use crate::domain::error::DomainError;

/// Pattern used when `pattern = true`.
///
/// Matches `__version__ = '1.0'` or `VERSION = "1.0"` at the start of a
/// line; an optional `v` prefix stays outside the capture.
pub const DEFAULT_PATTERN: &str =
    r#"(?i)^(?:__version__|VERSION) *= *["']v?(?P<version>[^"'\r\n]+)["']"#;

static DEFAULT_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    RegexBuilder::new(DEFAULT_PATTERN)
        .multi_line(true)
        .build()
        .unwrap()
});

/// A compiled pattern with exactly one capture group.
#[derive(Debug, Clone)]
pub struct VersionPattern {
    regex: Regex,
}

impl VersionPattern {
    /// Compile `pattern` in multi-line mode and check its group count.
    pub fn new(pattern: &str) -> Result<Self, DomainError> {
        let regex = RegexBuilder::new(pattern)
            .multi_line(true)
            .build()
            .map_err(|e| DomainError::InvalidPattern {
                pattern: pattern.to_string(),
                reason: e.to_string(),
            })?;

        // Group 0 is the whole match.
        let found = regex.captures_len() - 1;
        if found != 1 {
            return Err(DomainError::PatternGroupCount {
                pattern: pattern.to_string(),
                found,
            });
        }

        Ok(Self { regex })
    }

    pub fn as_str(&self) -> &str {
        self.regex.as_str()
    }

    /// Version currently recorded in `content`, if the pattern matches.
    pub fn find<'c>(&self, content: &'c str) -> Option<&'c str> {
        self.regex
            .captures(content)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str())
    }

    /// Replace the captured span of the first match with `version`.
    ///
    /// `source` names the file in the error when nothing matches.
    pub fn substitute(
        &self,
        content: &str,
        version: &str,
        source: &str,
    ) -> Result<String, DomainError> {
        let span = self
            .regex
            .captures(content)
            .and_then(|caps| caps.get(1))
            .ok_or_else(|| DomainError::PatternNoMatch {
                path: source.to_string(),
            })?;

        let mut out = String::with_capacity(content.len() - span.len() + version.len());
        out.push_str(&content[..span.start()]);
        out.push_str(version);
        out.push_str(&content[span.end()..]);
        Ok(out)
    }
}

impl Default for VersionPattern {
    fn default() -> Self {
        Self {
            regex: DEFAULT_REGEX.clone(),
        }
    }
}
