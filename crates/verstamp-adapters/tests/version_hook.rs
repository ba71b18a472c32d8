//! End-to-end runs of the `version` hook against a real directory.

use std::fs;
use std::path::Path;

use tempfile::TempDir;
use verstamp_adapters::{LocalFilesystem, MemoryFilesystem, PyProject, StaticVersion};
use verstamp_core::{
    application::VersionBuildHook,
    domain::{BuildData, DomainError, HookConfig},
    error::StampError,
};

const DEFAULT_OUTPUT: &str = "\
# This file is auto-generated by Hatchling. As such, do not:
#   - modify
#   - track in version control e.g. be sure to add to .gitignore
__version__ = VERSION = '1.2.3'
";

fn run(root: &Path, config: HookConfig) -> Result<BuildData, StampError> {
    let hook = VersionBuildHook::new(
        root,
        config,
        Box::new(StaticVersion::new("1.2.3")),
        Box::new(LocalFilesystem::new()),
    );
    let mut build = BuildData::new();
    hook.initialize(&mut build)?;
    Ok(build)
}

#[test]
fn template_default() {
    let tmp = TempDir::new().unwrap();

    let build = run(tmp.path(), HookConfig::new().with("path", "baz.py")).unwrap();

    let expected = tmp.path().join("baz.py");
    assert!(expected.is_file());
    assert_eq!(fs::read_to_string(expected).unwrap(), DEFAULT_OUTPUT);
    assert_eq!(build.artifacts, vec!["/baz.py".to_string()]);
}

#[test]
fn template_creates_necessary_directories() {
    let tmp = TempDir::new().unwrap();

    let build = run(tmp.path(), HookConfig::new().with("path", "bar/baz.py")).unwrap();

    let expected = tmp.path().join("bar").join("baz.py");
    assert!(expected.is_file());
    assert_eq!(fs::read_to_string(expected).unwrap(), DEFAULT_OUTPUT);
    assert_eq!(build.artifacts, vec!["/bar/baz.py".to_string()]);
}

#[test]
fn template_custom() {
    let tmp = TempDir::new().unwrap();

    let build = run(
        tmp.path(),
        HookConfig::new()
            .with("path", "baz.py")
            .with("template", "VER = {version!r}\n"),
    )
    .unwrap();

    assert_eq!(
        fs::read_to_string(tmp.path().join("baz.py")).unwrap(),
        "VER = '1.2.3'\n"
    );
    assert_eq!(build.artifacts, vec!["/baz.py".to_string()]);
}

#[test]
fn template_is_idempotent_and_overwrites() {
    let tmp = TempDir::new().unwrap();
    let target = tmp.path().join("baz.py");
    fs::write(&target, "stale content that is much longer than the output\n").unwrap();

    run(tmp.path(), HookConfig::new().with("path", "baz.py")).unwrap();
    let first = fs::read(&target).unwrap();
    run(tmp.path(), HookConfig::new().with("path", "baz.py")).unwrap();
    let second = fs::read(&target).unwrap();

    assert_eq!(first, second);
    assert_eq!(first, DEFAULT_OUTPUT.as_bytes());
}

#[test]
fn pattern_default() {
    let tmp = TempDir::new().unwrap();
    let version_file = tmp.path().join("baz.py");
    fs::write(&version_file, "__version__ = '0.0.0'\n").unwrap();

    let build = run(
        tmp.path(),
        HookConfig::new().with("path", "baz.py").with("pattern", true),
    )
    .unwrap();

    assert_eq!(
        fs::read_to_string(version_file).unwrap(),
        "__version__ = '1.2.3'\n"
    );
    assert_eq!(build.artifacts, vec!["/baz.py".to_string()]);
}

#[test]
fn pattern_custom() {
    let tmp = TempDir::new().unwrap();
    let version_file = tmp.path().join("baz.py");
    fs::write(&version_file, "v = \"0.0.0\"\n").unwrap();

    let build = run(
        tmp.path(),
        HookConfig::new()
            .with("path", "baz.py")
            .with("pattern", r#"v = "(?P<version>.+)""#),
    )
    .unwrap();

    assert_eq!(fs::read_to_string(version_file).unwrap(), "v = \"1.2.3\"\n");
    assert_eq!(build.artifacts, vec!["/baz.py".to_string()]);
}

#[test]
fn pattern_missing_file_fails_without_writing() {
    let tmp = TempDir::new().unwrap();

    let err = run(
        tmp.path(),
        HookConfig::new().with("path", "sub/baz.py").with("pattern", true),
    )
    .unwrap_err();

    assert!(matches!(
        err,
        StampError::Domain(DomainError::SourceFileMissing { .. })
    ));
    assert!(!tmp.path().join("sub").exists());
}

#[test]
fn backslash_paths_report_forward_slashes() {
    let tmp = TempDir::new().unwrap();

    let build = run(tmp.path(), HookConfig::new().with("path", "bar\\baz.py")).unwrap();

    assert!(tmp.path().join("bar").join("baz.py").is_file());
    assert_eq!(build.artifacts, vec!["/bar/baz.py".to_string()]);
}

#[test]
fn pyproject_drives_the_hook() {
    let tmp = TempDir::new().unwrap();
    let manifest = tmp.path().join("pyproject.toml");
    fs::write(
        &manifest,
        r#"
[project]
name = "foo"
version = "4.5.6"

[tool.hatch.build.hooks.version]
path = "src/foo/_version.py"
template = "VERSION = \"{version}\"\n"
"#,
    )
    .unwrap();

    let project = PyProject::load(&manifest).unwrap();
    let hook = VersionBuildHook::new(
        tmp.path(),
        project.hook_config(None),
        Box::new(project),
        Box::new(LocalFilesystem::new()),
    );
    let mut build = BuildData::new();
    hook.initialize(&mut build).unwrap();

    assert_eq!(
        fs::read_to_string(tmp.path().join("src/foo/_version.py")).unwrap(),
        "VERSION = \"4.5.6\"\n"
    );
    assert_eq!(build.artifacts, vec!["/src/foo/_version.py".to_string()]);
}

#[test]
fn memory_filesystem_matches_local_behaviour() {
    let fs = MemoryFilesystem::new().with_file("root/baz.py", "__version__ = \"0.0.0\"\n");
    let hook = VersionBuildHook::new(
        "root",
        HookConfig::new().with("path", "baz.py").with("pattern", true),
        Box::new(StaticVersion::new("1.2.3")),
        Box::new(fs.clone()),
    );

    let mut build = BuildData::new();
    hook.initialize(&mut build).unwrap();

    assert_eq!(
        fs.file(Path::new("root/baz.py")).as_deref(),
        Some("__version__ = \"1.2.3\"\n")
    );
    assert_eq!(build.artifacts, vec!["/baz.py".to_string()]);
}
