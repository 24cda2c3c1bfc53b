//! Sources of candidate site-packages directories

use std::ffi::{OsStr, OsString};
#[cfg(not(windows))]
use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use serde::Deserialize;
use tracing::debug;

/// Something that can name site-packages directories to probe.
pub trait SiteSource {
    /// Short label used in diagnostics.
    fn name(&self) -> &str;

    /// Candidate directories, most preferred first. Failures are reported as
    /// an empty list.
    fn site_dirs(&self) -> Vec<PathBuf>;
}

/// A fixed list of directories.
#[derive(Debug, Clone)]
pub struct StaticSource {
    name: String,
    dirs: Vec<PathBuf>,
}

impl StaticSource {
    pub fn new(name: impl Into<String>, dirs: Vec<PathBuf>) -> Self {
        Self {
            name: name.into(),
            dirs,
        }
    }
}

impl SiteSource for StaticSource {
    fn name(&self) -> &str {
        &self.name
    }

    fn site_dirs(&self) -> Vec<PathBuf> {
        self.dirs.clone()
    }
}

/// An environment prefix such as `$VIRTUAL_ENV` or `$CONDA_PREFIX`.
#[derive(Debug, Clone)]
pub struct EnvPrefix {
    name: String,
    prefix: Option<PathBuf>,
}

impl EnvPrefix {
    pub fn new(name: impl Into<String>, prefix: Option<PathBuf>) -> Self {
        Self {
            name: name.into(),
            prefix,
        }
    }

    /// Read the prefix from environment variable `var`; unset or empty means
    /// no prefix.
    pub fn from_var(var: &str) -> Self {
        let prefix = std::env::var_os(var)
            .filter(|value| !value.is_empty())
            .map(PathBuf::from);
        Self::new(var, prefix)
    }
}

impl SiteSource for EnvPrefix {
    fn name(&self) -> &str {
        &self.name
    }

    fn site_dirs(&self) -> Vec<PathBuf> {
        self.prefix
            .as_deref()
            .map(site_packages_under)
            .unwrap_or_default()
    }
}

/// Existing site-packages directories below an environment prefix.
///
/// # Platform differences
///
/// - **Unix/macOS**: `<prefix>/lib/python3.X/site-packages`, oldest version
///   first (`python3.9` before `python3.10`)
/// - **Windows**: `<prefix>/Lib/site-packages`
pub fn site_packages_under(prefix: &Path) -> Vec<PathBuf> {
    #[cfg(windows)]
    {
        let site_packages = prefix.join("Lib").join("site-packages");
        if site_packages.is_dir() {
            vec![site_packages]
        } else {
            Vec::new()
        }
    }

    #[cfg(not(windows))]
    {
        let Ok(entries) = fs::read_dir(prefix.join("lib")) else {
            return Vec::new();
        };

        let mut dirs: Vec<(Vec<u32>, PathBuf)> = entries
            .filter_map(|e| e.ok())
            .filter_map(|e| {
                let name = e.file_name().to_string_lossy().into_owned();
                let version = name.strip_prefix("python")?;
                let site_packages = e.path().join("site-packages");
                site_packages
                    .is_dir()
                    .then(|| (version_key(version), site_packages))
            })
            .collect();
        dirs.sort();
        dirs.into_iter().map(|(_, dir)| dir).collect()
    }
}

/// Numeric components of a `3.X` version suffix; unparsable parts are skipped.
#[cfg(not(windows))]
fn version_key(version: &str) -> Vec<u32> {
    version
        .split('.')
        .filter_map(|part| part.parse().ok())
        .collect()
}

/// Asks a Python interpreter for `site.getsitepackages()` and
/// `site.getusersitepackages()`.
#[derive(Debug, Clone)]
pub struct Interpreter {
    program: OsString,
}

const SITE_QUERY: &str = "\
import json, site
dirs = list(getattr(site, 'getsitepackages', lambda: [])())
user = getattr(site, 'getusersitepackages', lambda: None)()
print(json.dumps({'site_packages': dirs, 'user_site': user}))
";

#[derive(Debug, Deserialize)]
struct SiteReport {
    #[serde(default)]
    site_packages: Vec<PathBuf>,
    #[serde(default)]
    user_site: Option<PathBuf>,
}

impl Interpreter {
    pub const DEFAULT_PROGRAM: &'static str = if cfg!(windows) { "python" } else { "python3" };

    pub fn new(program: impl AsRef<OsStr>) -> Self {
        Self {
            program: program.as_ref().to_os_string(),
        }
    }

    fn query(&self) -> Option<Vec<PathBuf>> {
        let output = Command::new(&self.program)
            .args(["-c", SITE_QUERY])
            .stdin(Stdio::null())
            .stderr(Stdio::null())
            .output();

        match output {
            Err(e) => {
                debug!(program = ?self.program, error = %e, "Interpreter not available");
                None
            }
            Ok(output) if !output.status.success() => {
                debug!(
                    program = ?self.program,
                    status = %output.status,
                    "Interpreter query failed"
                );
                None
            }
            Ok(output) => parse_site_report(&String::from_utf8_lossy(&output.stdout)),
        }
    }
}

impl Default for Interpreter {
    fn default() -> Self {
        Self::new(Self::DEFAULT_PROGRAM)
    }
}

impl SiteSource for Interpreter {
    fn name(&self) -> &str {
        "interpreter"
    }

    fn site_dirs(&self) -> Vec<PathBuf> {
        self.query().unwrap_or_default()
    }
}

/// Decode the interpreter's report. Only the last non-empty line is read, so
/// output printed by `sitecustomize` and friends is ignored.
fn parse_site_report(stdout: &str) -> Option<Vec<PathBuf>> {
    let line = stdout.lines().rev().find(|l| !l.trim().is_empty())?;

    match serde_json::from_str::<SiteReport>(line.trim()) {
        Ok(report) => Some(
            report
                .site_packages
                .into_iter()
                .chain(report.user_site)
                .collect(),
        ),
        Err(e) => {
            debug!(error = %e, "Unreadable interpreter report");
            None
        }
    }
}
