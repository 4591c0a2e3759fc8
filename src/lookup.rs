//! Resolution of executable names to paths.

use std::ffi::OsStr;
use std::path::{Component, Path, PathBuf};

/// Resolve a command name to an executable path the way a typical shell would.
///
/// Behavior:
/// - Empty name: returns `None`.
/// - Name with a path separator (absolute, `./foo`, `bin/foo`): checked directly,
///   relative names are taken from `current_dir`. PATH is not consulted.
/// - Single path component: each directory in `search_paths` (PATH) is tried in
///   order and the first executable match wins. Relative PATH entries are taken
///   from `current_dir`; empty entries are skipped.
///
/// A candidate only matches if it is a regular file and, on Unix, carries at
/// least one execute bit.
pub fn find_command_path(
    search_paths: &OsStr,
    current_dir: &Path,
    name: &str,
) -> Option<PathBuf> {
    let path = Path::new(name);
    let mut components = path.components();
    match (components.next(), components.next()) {
        (None, _) => None,
        (Some(Component::Normal(cmd)), None) if !name.contains(std::path::is_separator) => {
            find_in_path(search_paths, current_dir, cmd)
        }
        _ => find_by_path(&current_dir.join(path)),
    }
}

fn find_in_path(search_paths: &OsStr, current_dir: &Path, cmd: &OsStr) -> Option<PathBuf> {
    std::env::split_paths(search_paths)
        .filter(|dir| !dir.as_os_str().is_empty())
        .find_map(|dir| find_by_path(&current_dir.join(dir).join(cmd)))
}

fn find_by_path(path: &Path) -> Option<PathBuf> {
    if is_executable(path) {
        Some(path.to_path_buf())
    } else {
        None
    }
}

#[cfg(unix)]
fn is_executable(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;
    match path.metadata() {
        Ok(meta) => meta.is_file() && meta.permissions().mode() & 0o111 != 0,
        Err(_) => false,
    }
}

#[cfg(not(unix))]
fn is_executable(path: &Path) -> bool {
    path.is_file()
}
