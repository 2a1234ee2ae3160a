//! dotnet executable discovery
//!
//! Resolution order:
//!
//! ```text
//! override ─(set)──▶ must exist, else ToolNotFound
//!    │
//!  (unset)
//!    ▼
//! install roots: $DOTNET_ROOT, ~/.dotnet, platform defaults
//!    │
//!  (miss)
//!    ▼
//! PATH (which)
//! ```

use netcall_application::{DotNetError, ToolLocator};
use std::env;
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Placeholder recorded in `ToolNotFound.searched` for the PATH lookup.
const PATH_MARKER: &str = "$PATH";

#[cfg(unix)]
const PLATFORM_ROOTS: &[&str] = &[
    "/usr/share/dotnet",
    "/usr/lib/dotnet",
    "/usr/local/share/dotnet",
    "/opt/dotnet",
];

#[cfg(not(unix))]
const PLATFORM_ROOTS: &[&str] = &[];

/// Finds the dotnet executable on this machine.
#[derive(Debug, Clone)]
pub struct DotNetToolLocator {
    install_roots: Vec<PathBuf>,
    /// `None` searches the process `PATH`
    search_path: Option<OsString>,
}

impl DotNetToolLocator {
    pub fn new() -> Self {
        Self {
            install_roots: default_install_roots(),
            search_path: None,
        }
    }

    /// Replace the install roots probed before `PATH`.
    pub fn with_install_roots(mut self, roots: Vec<PathBuf>) -> Self {
        self.install_roots = roots;
        self
    }

    /// Search this list instead of the process `PATH`.
    pub fn with_search_path(mut self, path: impl Into<OsString>) -> Self {
        self.search_path = Some(path.into());
        self
    }

    pub fn install_roots(&self) -> &[PathBuf] {
        &self.install_roots
    }

    fn search_path(&self, executable: &str) -> Option<PathBuf> {
        match &self.search_path {
            Some(paths) => env::current_dir()
                .ok()
                .and_then(|cwd| which::which_in(executable, Some(paths), cwd).ok()),
            None => which::which(executable).ok(),
        }
    }
}

impl Default for DotNetToolLocator {
    fn default() -> Self {
        Self::new()
    }
}

impl ToolLocator for DotNetToolLocator {
    fn resolve(&self, tool: &str, override_path: Option<&Path>) -> Result<PathBuf, DotNetError> {
        if let Some(path) = override_path {
            if is_executable(path) {
                // Relative to our cwd, not the child's working directory.
                let path = std::path::absolute(path).unwrap_or_else(|_| path.to_path_buf());
                debug!("Using configured {}: {}", tool, path.display());
                return Ok(path);
            }
            return Err(DotNetError::ToolNotFound {
                tool: tool.to_string(),
                searched: vec![path.to_path_buf()],
            });
        }

        let executable = executable_name(tool);
        let mut searched = Vec::with_capacity(self.install_roots.len() + 1);

        for root in &self.install_roots {
            let candidate = root.join(&executable);
            if is_executable(&candidate) {
                debug!("Found {} at {}", tool, candidate.display());
                return Ok(candidate);
            }
            searched.push(candidate);
        }

        if let Some(found) = self.search_path(&executable) {
            debug!("Found {} on PATH: {}", tool, found.display());
            return Ok(found);
        }
        searched.push(PathBuf::from(PATH_MARKER));

        Err(DotNetError::ToolNotFound {
            tool: tool.to_string(),
            searched,
        })
    }
}

fn executable_name(tool: &str) -> String {
    format!("{}{}", tool, env::consts::EXE_SUFFIX)
}

fn default_install_roots() -> Vec<PathBuf> {
    let mut roots = Vec::new();

    if let Some(root) = env::var_os("DOTNET_ROOT").filter(|v| !v.is_empty()) {
        roots.push(PathBuf::from(root));
    }
    if let Some(home) = dirs::home_dir() {
        roots.push(home.join(".dotnet"));
    }
    if cfg!(windows)
        && let Some(program_files) = env::var_os("ProgramFiles")
    {
        roots.push(PathBuf::from(program_files).join("dotnet"));
    }
    roots.extend(PLATFORM_ROOTS.iter().map(PathBuf::from));

    roots
}

#[cfg(unix)]
fn is_executable(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;
    path.metadata()
        .map(|m| m.is_file() && m.permissions().mode() & 0o111 != 0)
        .unwrap_or(false)
}

#[cfg(not(unix))]
fn is_executable(path: &Path) -> bool {
    path.is_file()
}
