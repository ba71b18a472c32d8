//! Integration tests for verstamp-core's public API.

use std::{
    collections::HashMap,
    path::{Path, PathBuf},
    sync::{Arc, Mutex},
};

use verstamp_core::prelude::*;

#[derive(Clone, Default)]
struct SharedFs {
    files: Arc<Mutex<HashMap<PathBuf, String>>>,
}

impl SharedFs {
    fn get(&self, path: &str) -> Option<String> {
        self.files.lock().unwrap().get(Path::new(path)).cloned()
    }
}

impl Filesystem for SharedFs {
    fn create_dir_all(&self, _path: &Path) -> StampResult<()> {
        Ok(())
    }

    fn write_file(&self, path: &Path, content: &str) -> StampResult<()> {
        self.files
            .lock()
            .unwrap()
            .insert(path.to_path_buf(), content.to_string());
        Ok(())
    }

    fn read_file(&self, path: &Path) -> StampResult<String> {
        Ok(self.files.lock().unwrap()[path].clone())
    }

    fn is_file(&self, path: &Path) -> bool {
        self.files.lock().unwrap().contains_key(path)
    }
}

struct Fixed(&'static str);

impl VersionSource for Fixed {
    fn version(&self) -> StampResult<String> {
        Ok(self.0.to_string())
    }
}

#[test]
fn template_then_pattern_round() {
    let fs = SharedFs::default();

    let generate = VersionBuildHook::new(
        "root",
        HookConfig::new()
            .with("path", "pkg/_version.py")
            .with("template", "__version__ = {version!r}\n"),
        Box::new(Fixed("0.1.0")),
        Box::new(fs.clone()),
    );
    let mut build = BuildData::new();
    generate.initialize(&mut build).unwrap();

    let target = Path::new("root").join("pkg").join("_version.py");
    let target = target.to_str().unwrap();
    assert_eq!(fs.get(target).as_deref(), Some("__version__ = '0.1.0'\n"));

    let bump = VersionBuildHook::new(
        "root",
        HookConfig::new()
            .with("path", "pkg/_version.py")
            .with("pattern", true),
        Box::new(Fixed("0.2.0")),
        Box::new(fs.clone()),
    );
    let mut build = BuildData::new();
    bump.initialize(&mut build).unwrap();

    assert_eq!(fs.get(target).as_deref(), Some("__version__ = '0.2.0'\n"));
    assert_eq!(build.artifacts, vec!["/pkg/_version.py".to_string()]);
}

#[test]
fn errors_surface_verbatim() {
    let hook = VersionBuildHook::new(
        "root",
        HookConfig::new().with("path", "v.py").with("pattern", 1_i64),
        Box::new(Fixed("1.0")),
        Box::new(SharedFs::default()),
    );

    let err = hook.initialize(&mut BuildData::new()).unwrap_err();
    assert_eq!(
        err.to_string(),
        "Option `pattern` for build hook `version` must be a string"
    );
    assert!(err.is_configuration());
}
