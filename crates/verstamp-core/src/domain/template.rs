//! Full-file version templates.
//!
//! Templates use format-string placeholders: `{version}` inserts the version
//! as-is, `{version!r}` inserts it as a quoted literal, and `{{` / `}}` are
//! literal braces. The template author controls quoting by picking one of
//! the two forms.
//!
//! A placeholder may carry a string format spec after `:`,
//! `[[fill]align][0][width][.precision][s]`, e.g. `{version:>10}` or
//! `{version!r:^12}`. Width and precision count characters.

use crate::domain::error::DomainError;

/// Template used when the hook is given none.
pub const DEFAULT_TEMPLATE: &str = "\
# This file is auto-generated by Hatchling. As such, do not:
#   - modify
#   - track in version control e.g. be sure to add to .gitignore
__version__ = VERSION = {version!r}
";

const FIELD: &str = "version";

/// A validated template ready to render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionTemplate {
    source: String,
    segments: Vec<Segment>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Literal(String),
    Version { repr: bool, spec: FormatSpec },
}

impl VersionTemplate {
    /// Parse a template, rejecting unknown fields, bad format specs and
    /// unbalanced braces.
    pub fn new(source: impl Into<String>) -> Result<Self, DomainError> {
        let source = source.into();
        let segments = parse(&source)?;
        Ok(Self { source, segments })
    }

    pub fn as_str(&self) -> &str {
        &self.source
    }

    /// Render the template for `version`.
    pub fn render(&self, version: &str) -> String {
        let mut out = String::with_capacity(self.source.len() + version.len());
        for segment in &self.segments {
            match segment {
                Segment::Literal(text) => out.push_str(text),
                Segment::Version { repr: false, spec } => spec.apply(version, &mut out),
                Segment::Version { repr: true, spec } => spec.apply(&quoted(version), &mut out),
            }
        }
        out
    }
}

impl Default for VersionTemplate {
    fn default() -> Self {
        Self {
            source: DEFAULT_TEMPLATE.to_string(),
            segments: vec![
                Segment::Literal(DEFAULT_TEMPLATE.replace("{version!r}\n", "")),
                Segment::Version {
                    repr: true,
                    spec: FormatSpec::default(),
                },
                Segment::Literal("\n".to_string()),
            ],
        }
    }
}

fn parse(source: &str) -> Result<Vec<Segment>, DomainError> {
    let mut segments = Vec::new();
    let mut literal = String::new();
    let mut chars = source.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '{' if chars.peek() == Some(&'{') => {
                chars.next();
                literal.push('{');
            }
            '{' => {
                let mut field = String::new();
                loop {
                    match chars.next() {
                        Some('}') => break,
                        Some('{') | None => {
                            return Err(invalid("unmatched `{` in template"));
                        }
                        Some(ch) => field.push(ch),
                    }
                }
                if !literal.is_empty() {
                    segments.push(Segment::Literal(std::mem::take(&mut literal)));
                }
                segments.push(placeholder(&field)?);
            }
            '}' if chars.peek() == Some(&'}') => {
                chars.next();
                literal.push('}');
            }
            '}' => return Err(invalid("single `}` encountered in template")),
            _ => literal.push(c),
        }
    }

    if !literal.is_empty() {
        segments.push(Segment::Literal(literal));
    }
    Ok(segments)
}

/// Split `name[!conversion][:spec]` and validate each part.
fn placeholder(field: &str) -> Result<Segment, DomainError> {
    let (head, spec) = match field.split_once(':') {
        Some((head, spec)) => (head, Some(spec)),
        None => (field, None),
    };
    let (name, conversion) = match head.split_once('!') {
        Some((name, conversion)) => (name, Some(conversion)),
        None => (head, None),
    };

    if name != FIELD {
        return Err(invalid(format!(
            "unknown field `{name}`, only `{FIELD}` is available"
        )));
    }

    let repr = match conversion {
        None | Some("s") => false,
        Some("r") => true,
        Some(other) => return Err(invalid(format!("unknown conversion `!{other}`"))),
    };

    let spec = match spec {
        Some(spec) => FormatSpec::parse(spec)?,
        None => FormatSpec::default(),
    };

    Ok(Segment::Version { repr, spec })
}

// ── Format spec ───────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Align {
    Left,
    Right,
    Center,
}

/// String presentation options of one placeholder.
#[derive(Debug, Clone, PartialEq, Eq)]
struct FormatSpec {
    fill: char,
    align: Align,
    width: usize,
    precision: Option<usize>,
}

impl Default for FormatSpec {
    fn default() -> Self {
        Self {
            fill: ' ',
            align: Align::Left,
            width: 0,
            precision: None,
        }
    }
}

impl FormatSpec {
    fn parse(spec: &str) -> Result<Self, DomainError> {
        let chars: Vec<char> = spec.chars().collect();
        let mut parsed = Self::default();
        let mut pos = 0;

        let mut fill_given = false;
        if chars.len() >= 2 && is_align(chars[1]) {
            parsed.fill = chars[0];
            parsed.align = align(chars[1], spec)?;
            fill_given = true;
            pos = 2;
        } else if chars.first().copied().is_some_and(is_align) {
            parsed.align = align(chars[0], spec)?;
            pos = 1;
        }

        match chars.get(pos) {
            Some('+' | '-' | ' ') => {
                return Err(bad_spec(spec, "sign not allowed for a string"));
            }
            Some('z') => return Err(bad_spec(spec, "`z` not allowed for a string")),
            Some('#') => return Err(bad_spec(spec, "alternate form not allowed for a string")),
            Some('0') if !fill_given => {
                parsed.fill = '0';
                pos += 1;
            }
            _ => {}
        }

        let (width, next) = digits(&chars, pos, spec)?;
        parsed.width = width.unwrap_or(0);
        pos = next;

        if let Some(',' | '_') = chars.get(pos) {
            return Err(bad_spec(spec, "grouping not allowed for a string"));
        }

        if chars.get(pos) == Some(&'.') {
            let (precision, next) = digits(&chars, pos + 1, spec)?;
            if precision.is_none() {
                return Err(bad_spec(spec, "missing precision"));
            }
            parsed.precision = precision;
            pos = next;
        }

        match &chars[pos..] {
            [] | ['s'] => Ok(parsed),
            [code] => Err(bad_spec(
                spec,
                format!("unknown format code `{code}` for a string"),
            )),
            _ => Err(bad_spec(spec, "invalid format specifier")),
        }
    }

    fn apply(&self, value: &str, out: &mut String) {
        let value: String = match self.precision {
            Some(precision) => value.chars().take(precision).collect(),
            None => value.to_string(),
        };

        let pad = self.width.saturating_sub(value.chars().count());
        let (left, right) = match self.align {
            Align::Left => (0, pad),
            Align::Right => (pad, 0),
            Align::Center => (pad / 2, pad - pad / 2),
        };

        out.extend(std::iter::repeat_n(self.fill, left));
        out.push_str(&value);
        out.extend(std::iter::repeat_n(self.fill, right));
    }
}

fn is_align(c: char) -> bool {
    matches!(c, '<' | '>' | '^' | '=')
}

fn align(c: char, spec: &str) -> Result<Align, DomainError> {
    match c {
        '<' => Ok(Align::Left),
        '>' => Ok(Align::Right),
        '^' => Ok(Align::Center),
        _ => Err(bad_spec(spec, "`=` alignment not allowed for a string")),
    }
}

/// Read a run of ASCII digits starting at `pos`.
fn digits(chars: &[char], pos: usize, spec: &str) -> Result<(Option<usize>, usize), DomainError> {
    let end = chars[pos.min(chars.len())..]
        .iter()
        .position(|c| !c.is_ascii_digit())
        .map_or(chars.len(), |offset| pos + offset);

    if end <= pos {
        return Ok((None, pos));
    }

    let number: String = chars[pos..end].iter().collect();
    number
        .parse()
        .map(|n| (Some(n), end))
        .map_err(|_| bad_spec(spec, "width or precision too large"))
}

// ── repr ──────────────────────────────────────────────────────────────────────

/// Quote a string the way Python's `repr` does.
fn quoted(value: &str) -> String {
    let quote = if value.contains('\'') && !value.contains('"') {
        '"'
    } else {
        '\''
    };

    let mut out = String::with_capacity(value.len() + 2);
    out.push(quote);
    for c in value.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if c == quote => {
                out.push('\\');
                out.push(c);
            }
            c if !is_printable(c) => match c as u32 {
                n @ 0..=0xff => out.push_str(&format!("\\x{n:02x}")),
                n @ 0x100..=0xffff => out.push_str(&format!("\\u{n:04x}")),
                n => out.push_str(&format!("\\U{n:08x}")),
            },
            c => out.push(c),
        }
    }
    out.push(quote);
    out
}

/// Whether `repr` keeps `c` as-is.
///
/// Escaped: controls, separators other than the ASCII space, format
/// characters and private-use code points. Unassigned code points are kept.
fn is_printable(c: char) -> bool {
    if c == ' ' {
        return true;
    }
    if c.is_control() || c.is_whitespace() {
        return false;
    }
    !matches!(
        c as u32,
        0x00ad
            | 0x0600..=0x0605
            | 0x061c
            | 0x06dd
            | 0x070f
            | 0x0890..=0x0891
            | 0x08e2
            | 0x180e
            | 0x200b..=0x200f
            | 0x2028..=0x202e
            | 0x2060..=0x2064
            | 0x2066..=0x206f
            | 0xe000..=0xf8ff
            | 0xfeff
            | 0xfff9..=0xfffb
            | 0x110bd
            | 0x110cd
            | 0x13430..=0x1343f
            | 0x1bca0..=0x1bca3
            | 0x1d173..=0x1d17a
            | 0xe0001
            | 0xe0020..=0xe007f
            | 0xf0000..=0xffffd
            | 0x100000..=0x10fffd
    )
}

fn invalid(reason: impl Into<String>) -> DomainError {
    DomainError::InvalidTemplate {
        reason: reason.into(),
    }
}

fn bad_spec(spec: &str, reason: impl std::fmt::Display) -> DomainError {
    invalid(format!("bad format spec `{spec}`: {reason}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(template: &str, version: &str) -> String {
        VersionTemplate::new(template).unwrap().render(version)
    }

    #[test]
    fn default_template_renders_banner() {
        let rendered = VersionTemplate::default().render("1.2.3");

        assert_eq!(
            rendered,
            "# This file is auto-generated by Hatchling. As such, do not:\n\
             #   - modify\n\
             #   - track in version control e.g. be sure to add to .gitignore\n\
             __version__ = VERSION = '1.2.3'\n"
        );
    }

    #[test]
    fn default_matches_parsed_default() {
        assert_eq!(
            VersionTemplate::default(),
            VersionTemplate::new(DEFAULT_TEMPLATE).unwrap()
        );
    }

    #[test]
    fn repr_conversion_quotes_value() {
        assert_eq!(render("VER = {version!r}\n", "1.2.3"), "VER = '1.2.3'\n");
    }

    #[test]
    fn plain_field_is_not_quoted() {
        assert_eq!(
            render("const VERSION: &str = \"{version}\";", "2.0.0"),
            "const VERSION: &str = \"2.0.0\";"
        );
        assert_eq!(render("{version!s}", "2.0.0"), "2.0.0");
    }

    #[test]
    fn doubled_braces_are_literal() {
        assert_eq!(
            render("{{\"version\": \"{version}\"}}", "1.0"),
            "{\"version\": \"1.0\"}"
        );
    }

    #[test]
    fn empty_and_string_type_specs() {
        assert_eq!(render("V = {version:}\n", "1.2.3"), "V = 1.2.3\n");
        assert_eq!(render("V = '{version:s}'\n", "1.2.3"), "V = '1.2.3'\n");
    }

    #[test]
    fn spec_applies_after_conversion() {
        assert_eq!(render("{version!r:>12}", "1.2.3"), "     '1.2.3'");
        assert_eq!(render("{version!r:^12}", "1.2.3"), "  '1.2.3'   ");
    }

    #[test]
    fn width_fill_and_precision() {
        assert_eq!(render("[{version:10}]", "1.2"), "[1.2       ]");
        assert_eq!(render("[{version:*>6}]", "1.2"), "[***1.2]");
        assert_eq!(render("[{version:06}]", "1.2"), "[1.2000]");
        assert_eq!(render("[{version:.3}]", "1.2.3"), "[1.2]");
        assert_eq!(render("[{version:_^7.3s}]", "1.2.3"), "[__1.2__]");
        assert_eq!(render("[{version:2}]", "1.2.3"), "[1.2.3]");
    }

    #[test]
    fn rejects_non_string_specs() {
        for spec in [
            "{version:d}",
            "{version:=10}",
            "{version:+}",
            "{version:#}",
            "{version:,}",
            "{version:.}",
            "{version:10x5}",
        ] {
            let err = VersionTemplate::new(spec).unwrap_err();
            assert!(
                matches!(err, DomainError::InvalidTemplate { .. }),
                "{spec} should be rejected"
            );
        }
    }

    #[test]
    fn repr_switches_quotes_and_escapes() {
        assert_eq!(quoted("it's"), "\"it's\"");
        assert_eq!(quoted("a'b\"c"), "'a\\'b\"c'");
        assert_eq!(quoted("a\\b\n"), "'a\\\\b\\n'");
        assert_eq!(quoted("\u{1}"), "'\\x01'");
    }

    #[test]
    fn repr_escapes_non_printable_separators_and_format_chars() {
        assert_eq!(quoted("1.0\u{a0}"), "'1.0\\xa0'");
        assert_eq!(quoted("1\u{2028}0"), "'1\\u20280'");
        assert_eq!(quoted("\u{200b}"), "'\\u200b'");
        assert_eq!(quoted("\u{e0001}"), "'\\U000e0001'");
        assert_eq!(quoted("1.0 é"), "'1.0 é'");
    }

    #[test]
    fn rejects_unknown_field() {
        let err = VersionTemplate::new("{name}").unwrap_err();
        assert!(matches!(err, DomainError::InvalidTemplate { .. }));
        assert!(err.to_string().contains("unknown field `name`"));
    }

    #[test]
    fn rejects_unbalanced_braces() {
        assert!(VersionTemplate::new("{version").is_err());
        assert!(VersionTemplate::new("version}").is_err());
        assert!(VersionTemplate::new("{ver{sion}").is_err());
    }

    #[test]
    fn rejects_unknown_conversion() {
        assert!(VersionTemplate::new("{version!a}").is_err());
        assert!(VersionTemplate::new("{version!rr}").is_err());
    }

    #[test]
    fn rendering_is_idempotent() {
        let template = VersionTemplate::default();
        assert_eq!(template.render("1.2.3"), template.render("1.2.3"));
    }
}
