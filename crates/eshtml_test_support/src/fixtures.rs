//! Golden transpile fixtures stored as TOML.
//!
//! ```toml
//! format = "eshtml-fixture-v1"
//!
//! [[case]]
//! name = "heading"
//! input = "<e1>Hola</e1>"
//! expected = "<h1>Hola</h1>"
//! # optional
//! direction = "reverse"
//! diagnostics = ["unknown-tag@1:1"]
//! status = "xfail"
//! reason = "why the case is not expected to pass"
//! ```

use serde::Deserialize;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

pub const FIXTURE_FORMAT_V1: &str = "eshtml-fixture-v1";

/// Environment variable restricting which cases run (substring match on the name).
pub const FIXTURE_FILTER_ENV: &str = "ESHTML_FIXTURE";

#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum FixtureStatus {
    #[default]
    Active,
    Xfail,
    Skip,
}

#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum FixtureDirection {
    #[default]
    Forward,
    Reverse,
}

#[derive(Clone, Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FixtureCase {
    pub name: String,
    pub input: String,
    pub expected: String,
    #[serde(default)]
    pub direction: FixtureDirection,
    /// Expected findings as `kind@line:column`, in order. `None` means not checked.
    #[serde(default)]
    pub diagnostics: Option<Vec<String>>,
    #[serde(default)]
    pub status: FixtureStatus,
    #[serde(default)]
    pub reason: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct FixtureFile {
    format: String,
    #[serde(default)]
    case: Vec<FixtureCase>,
}

/// `<crate>/tests/fixtures` for the crate whose manifest dir is given.
pub fn fixture_root(manifest_dir: &str) -> PathBuf {
    Path::new(manifest_dir).join("tests").join("fixtures")
}

/// Load every `*.toml` fixture file under `root`, in file name order. Panics with the
/// offending path on any malformed file.
pub fn load_fixture_dir(root: &Path) -> Vec<FixtureCase> {
    let mut paths: Vec<PathBuf> = fs::read_dir(root)
        .unwrap_or_else(|err| panic!("failed to read fixture root {root:?}: {err}"))
        .filter_map(Result::ok)
        .map(|entry| entry.path())
        .filter(|path| path.extension().is_some_and(|ext| ext == "toml"))
        .collect();
    paths.sort();
    paths.iter().flat_map(|path| load_fixture_file(path)).collect()
}

pub fn load_fixture_file(path: &Path) -> Vec<FixtureCase> {
    let content = fs::read_to_string(path)
        .unwrap_or_else(|err| panic!("failed to read fixture file {path:?}: {err}"));
    let file: FixtureFile = toml::from_str(&content)
        .unwrap_or_else(|err| panic!("invalid fixture file {path:?}: {err}"));
    assert_eq!(
        file.format, FIXTURE_FORMAT_V1,
        "unsupported format in {path:?}"
    );
    assert!(!file.case.is_empty(), "fixture file {path:?} has no cases");
    for case in &file.case {
        if case.name != case.name.trim() || case.name.is_empty() {
            panic!("fixture case name must be non-empty and trimmed: '{}'", case.name);
        }
        if case.status != FixtureStatus::Active
            && case.reason.as_deref().unwrap_or("").is_empty()
        {
            panic!("non-active fixture '{}' missing reason in {path:?}", case.name);
        }
    }
    file.case
}

pub struct FixtureFilter {
    raw: Option<String>,
}

impl FixtureFilter {
    pub fn from_env() -> Self {
        Self {
            raw: env::var(FIXTURE_FILTER_ENV).ok(),
        }
    }

    pub fn matches(&self, name: &str) -> bool {
        self.raw.as_deref().is_none_or(|filter| name.contains(filter))
    }
}
