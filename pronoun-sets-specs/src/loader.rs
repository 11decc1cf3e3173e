//! Fixture file loading.

use std::ffi::OsStr;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::{parse_fixture, SpecError, SpecFixture, SpecResult};

fn load_error(path: &Path, err: io::Error) -> SpecError {
    SpecError::Load {
        path: path.display().to_string(),
        message: err.to_string(),
    }
}

/// Read and parse one fixture file.
pub fn load_fixture(path: &Path) -> SpecResult<SpecFixture> {
    let content = fs::read_to_string(path).map_err(|e| load_error(path, e))?;
    parse_fixture(&content)
}

/// Every `*.toml` fixture below `dir`, keyed by its path relative to `dir`
/// and sorted by that path. A missing directory holds no fixtures.
pub fn load_all_fixtures(dir: &Path) -> SpecResult<Vec<(String, SpecFixture)>> {
    toml_files(dir)?
        .into_iter()
        .map(|path| {
            let name = path.strip_prefix(dir).unwrap_or(&path).display().to_string();
            load_fixture(&path).map(|fixture| (name, fixture))
        })
        .collect()
}

fn toml_files(root: &Path) -> SpecResult<Vec<PathBuf>> {
    let mut pending = vec![root.to_path_buf()];
    let mut found = Vec::new();

    while let Some(dir) = pending.pop() {
        if !dir.is_dir() {
            continue;
        }
        for entry in fs::read_dir(&dir).map_err(|e| load_error(&dir, e))? {
            let path = entry.map_err(|e| load_error(&dir, e))?.path();
            if path.is_dir() {
                pending.push(path);
            } else if path.extension() == Some(OsStr::new("toml")) {
                found.push(path);
            }
        }
    }

    found.sort();
    Ok(found)
}
