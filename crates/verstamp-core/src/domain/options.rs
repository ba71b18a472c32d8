//! Lazily validated view over the `version` hook's options.
//!
//! Nothing is checked at construction. Each accessor validates its option on
//! first use and caches the result, so a hook whose `template` is never read
//! never fails on a bad `template`.

use std::sync::OnceLock;

use tracing::debug;

use crate::domain::{
    content::GenerationStrategy,
    error::DomainError,
    pattern::VersionPattern,
    template::VersionTemplate,
    value::{ConfigValue, HookConfig},
};

/// Identifier of the hook in diagnostics and configuration tables.
pub const HOOK_NAME: &str = "version";

/// How the `pattern` option was set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PatternOption {
    /// Absent, `false` or empty: generate the file from a template.
    Disabled,
    /// `true`: use [`crate::domain::pattern::DEFAULT_PATTERN`].
    Default,
    /// A caller-supplied regex.
    Custom(String),
}

impl PatternOption {
    pub fn is_enabled(&self) -> bool {
        !matches!(self, Self::Disabled)
    }
}

/// Read-through cache over the hook's raw configuration.
#[derive(Debug, Default)]
pub struct HookOptions {
    raw: HookConfig,
    path: OnceLock<String>,
    template: OnceLock<String>,
    pattern: OnceLock<PatternOption>,
}

impl HookOptions {
    pub fn new(raw: HookConfig) -> Self {
        Self {
            raw,
            ..Self::default()
        }
    }

    pub fn raw(&self) -> &HookConfig {
        &self.raw
    }

    /// Target file, relative to the build root. Required.
    pub fn path(&self) -> Result<&str, DomainError> {
        if let Some(path) = self.path.get() {
            return Ok(path);
        }

        let path = match self.raw.get("path") {
            None => "",
            Some(ConfigValue::String(s)) => s.trim(),
            Some(other) => {
                debug!(found = other.type_name(), "rejecting `path` option");
                return Err(wrong_type("path"));
            }
        };

        if path.is_empty() {
            return Err(DomainError::MissingOption {
                option: "path",
                hook: HOOK_NAME,
            });
        }

        Ok(self.path.get_or_init(|| path.to_string()))
    }

    /// Custom template, or the empty string when none was given.
    pub fn template(&self) -> Result<&str, DomainError> {
        if let Some(template) = self.template.get() {
            return Ok(template);
        }

        let template = match self.raw.get("template") {
            None => "",
            Some(ConfigValue::String(s)) => s.as_str(),
            Some(_) => return Err(wrong_type("template")),
        };

        Ok(self.template.get_or_init(|| template.to_string()))
    }

    pub fn pattern(&self) -> Result<&PatternOption, DomainError> {
        if let Some(pattern) = self.pattern.get() {
            return Ok(pattern);
        }

        let pattern = match self.raw.get("pattern") {
            None | Some(ConfigValue::Boolean(false)) => PatternOption::Disabled,
            Some(ConfigValue::Boolean(true)) => PatternOption::Default,
            Some(ConfigValue::String(s)) if s.is_empty() => PatternOption::Disabled,
            Some(ConfigValue::String(s)) => PatternOption::Custom(s.clone()),
            Some(_) => return Err(wrong_type("pattern")),
        };

        Ok(self.pattern.get_or_init(|| pattern))
    }

    /// Pick the generation strategy from the validated options.
    ///
    /// `template` is only consulted in template mode.
    pub fn strategy(&self) -> Result<GenerationStrategy, DomainError> {
        let strategy = match self.pattern()? {
            PatternOption::Disabled => match self.template()? {
                "" => GenerationStrategy::Template(VersionTemplate::default()),
                custom => GenerationStrategy::Template(VersionTemplate::new(custom)?),
            },
            PatternOption::Default => GenerationStrategy::Pattern(VersionPattern::default()),
            PatternOption::Custom(regex) => {
                GenerationStrategy::Pattern(VersionPattern::new(regex)?)
            }
        };

        debug!(mode = strategy.mode(), "generation strategy selected");
        Ok(strategy)
    }
}

fn wrong_type(option: &'static str) -> DomainError {
    DomainError::InvalidOptionType {
        option,
        hook: HOOK_NAME,
        expected: "a string",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn options(config: HookConfig) -> HookOptions {
        HookOptions::new(config)
    }

    // ========================================================================
    // path
    // ========================================================================

    #[test]
    fn path_correct_and_cached() {
        let opts = options(HookConfig::new().with("path", "foo/bar.py"));

        let first = opts.path().unwrap();
        let second = opts.path().unwrap();
        assert_eq!(first, "foo/bar.py");
        assert!(std::ptr::eq(first, second));
    }

    #[test]
    fn path_is_trimmed() {
        let opts = options(HookConfig::new().with("path", "  foo.py \n"));
        assert_eq!(opts.path().unwrap(), "foo.py");
    }

    #[test]
    fn path_empty_is_missing() {
        let opts = options(HookConfig::new().with("path", ""));
        let err = opts.path().unwrap_err();

        assert_eq!(
            err.to_string(),
            "Option `path` for build hook `version` is required"
        );
    }

    #[test]
    fn path_absent_or_blank_is_missing() {
        assert!(matches!(
            options(HookConfig::new()).path(),
            Err(DomainError::MissingOption { option: "path", .. })
        ));
        assert!(matches!(
            options(HookConfig::new().with("path", "   ")).path(),
            Err(DomainError::MissingOption { option: "path", .. })
        ));
    }

    #[test]
    fn path_not_string() {
        let opts = options(HookConfig::new().with("path", 9000_i64));
        let err = opts.path().unwrap_err();

        assert_eq!(
            err.to_string(),
            "Option `path` for build hook `version` must be a string"
        );
    }

    #[test]
    fn failed_read_is_not_cached() {
        let opts = options(HookConfig::new().with("path", 9000_i64));
        assert!(opts.path().is_err());
        assert!(opts.path().is_err());
    }

    // ========================================================================
    // template
    // ========================================================================

    #[test]
    fn template_correct() {
        let opts = options(HookConfig::new().with("template", "foo"));
        assert_eq!(opts.template().unwrap(), "foo");
        assert_eq!(opts.template().unwrap(), "foo");
    }

    #[test]
    fn template_absent_is_empty() {
        assert_eq!(options(HookConfig::new()).template().unwrap(), "");
    }

    #[test]
    fn template_not_string() {
        let opts = options(HookConfig::new().with("template", 9000_i64));
        assert_eq!(
            opts.template().unwrap_err().to_string(),
            "Option `template` for build hook `version` must be a string"
        );
    }

    // ========================================================================
    // pattern
    // ========================================================================

    #[test]
    fn pattern_correct() {
        let opts = options(HookConfig::new().with("pattern", "foo"));
        assert_eq!(opts.pattern().unwrap(), &PatternOption::Custom("foo".into()));
        assert_eq!(opts.pattern().unwrap(), &PatternOption::Custom("foo".into()));
    }

    #[test]
    fn pattern_booleans_and_empty() {
        let on = options(HookConfig::new().with("pattern", true));
        assert_eq!(on.pattern().unwrap(), &PatternOption::Default);

        let off = options(HookConfig::new().with("pattern", false));
        assert_eq!(off.pattern().unwrap(), &PatternOption::Disabled);

        let empty = options(HookConfig::new().with("pattern", ""));
        assert!(!empty.pattern().unwrap().is_enabled());
    }

    #[test]
    fn pattern_not_string() {
        let opts = options(HookConfig::new().with("pattern", 9000_i64));
        assert_eq!(
            opts.pattern().unwrap_err().to_string(),
            "Option `pattern` for build hook `version` must be a string"
        );
    }

    #[test]
    fn option_errors_are_independent_of_path() {
        let opts = options(
            HookConfig::new()
                .with("path", "ok.py")
                .with("template", true),
        );
        assert!(opts.path().is_ok());
        assert!(opts.template().is_err());
    }

    // ========================================================================
    // strategy
    // ========================================================================

    #[test]
    fn strategy_defaults_to_template() {
        let strategy = options(HookConfig::new()).strategy().unwrap();
        assert_eq!(strategy.mode(), "template");
    }

    #[test]
    fn strategy_ignores_bad_template_in_pattern_mode() {
        let opts = options(
            HookConfig::new()
                .with("pattern", true)
                .with("template", 9000_i64),
        );
        assert_eq!(opts.strategy().unwrap().mode(), "pattern");
    }

    #[test]
    fn strategy_surfaces_bad_pattern() {
        let opts = options(HookConfig::new().with("pattern", "no groups"));
        assert!(matches!(
            opts.strategy(),
            Err(DomainError::PatternGroupCount { found: 0, .. })
        ));
    }
}
