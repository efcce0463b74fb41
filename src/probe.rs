//! Process and host introspection lookups.
//!
//! Each probe reads one live value from the running process or its
//! environment. Probes never cache; every call re-reads the current state.

use std::env;
use std::ffi::OsStr;
use std::path::PathBuf;

use anyhow::{Context, Result};
use log::debug;

cfg_if::cfg_if! {
    if #[cfg(target_os = "macos")] {
        /// Variable the loader consults before its built-in directories.
        pub const LOADER_PATH_VAR: &str = "DYLD_LIBRARY_PATH";
        const DEFAULT_LIBRARY_DIRS: &[&str] = &["/usr/local/lib", "/usr/lib"];
    } else if #[cfg(target_os = "windows")] {
        /// Variable the loader consults before its built-in directories.
        pub const LOADER_PATH_VAR: &str = "PATH";
        const DEFAULT_LIBRARY_DIRS: &[&str] = &["C:\\Windows\\System32", "C:\\Windows"];
    } else {
        /// Variable the loader consults before its built-in directories.
        pub const LOADER_PATH_VAR: &str = "LD_LIBRARY_PATH";
        const DEFAULT_LIBRARY_DIRS: &[&str] = &["/lib", "/usr/lib", "/usr/local/lib"];
    }
}

/// Absolute path of the running executable.
pub fn executable_path() -> Result<PathBuf> {
    env::current_exe().context("resolving current executable path")
}

/// Current working directory of the process.
pub fn working_dir() -> Result<PathBuf> {
    env::current_dir().context("resolving current working directory")
}

/// Platform tag of the operating system this binary was built for.
pub fn os_name() -> &'static str {
    env::consts::OS
}

/// Value of `PATH`, or `None` when the variable is unset.
pub fn path_var() -> Option<String> {
    env::var_os("PATH").map(|raw| raw.to_string_lossy().into_owned())
}

/// Ordered directories the dynamic loader searches for shared libraries.
///
/// Entries from the override variable come first, then the platform
/// defaults. The defaults are always appended, so the result is never empty.
pub fn library_search_path() -> Vec<PathBuf> {
    let raw = env::var_os(LOADER_PATH_VAR);
    let dirs = merge_search_path(raw.as_deref());
    debug!(
        "loader search path: {} entries ({} set: {})",
        dirs.len(),
        LOADER_PATH_VAR,
        raw.is_some()
    );
    dirs
}

fn merge_search_path(override_var: Option<&OsStr>) -> Vec<PathBuf> {
    let mut dirs: Vec<PathBuf> = override_var
        .map(|raw| {
            env::split_paths(raw)
                .filter(|p| !p.as_os_str().is_empty())
                .collect()
        })
        .unwrap_or_default();
    for default in DEFAULT_LIBRARY_DIRS {
        let dir = PathBuf::from(default);
        if !dirs.contains(&dir) {
            dirs.push(dir);
        }
    }
    dirs
}
