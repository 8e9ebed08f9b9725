//! Log file location, ANSI stripping and timestamps.
use std::ffi::OsString;
use std::fs;
use std::path::PathBuf;

/// Remove CSI escape sequences (colours, cursor movement) from `s`.
pub(super) fn strip_ansi(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut chars = s.chars().peekable();
    while let Some(c) = chars.next() {
        if c != '\x1b' {
            out.push(c);
            continue;
        }
        if chars.next_if_eq(&'[').is_some() {
            chars.by_ref().find(|inner| ('@'..='~').contains(inner));
        }
    }
    out
}

/// `$XDG_CACHE_HOME/wpdev/<command>.log`, falling back to `~/.cache`.
///
/// Creates the directory. Returns `None` when no cache root is known or the
/// directory cannot be created; the run then goes without a log file.
#[must_use]
pub fn log_file_path(command: &str) -> Option<PathBuf> {
    let home = std::env::var_os("HOME").or_else(|| std::env::var_os("USERPROFILE"));
    let dir = cache_root(std::env::var_os("XDG_CACHE_HOME"), home)?.join("wpdev");
    fs::create_dir_all(&dir).ok()?;
    Some(dir.join(format!("{command}.log")))
}

fn cache_root(xdg: Option<OsString>, home: Option<OsString>) -> Option<PathBuf> {
    xdg.filter(|v| !v.is_empty()).map(PathBuf::from).or_else(|| {
        home.filter(|v| !v.is_empty())
            .map(|h| PathBuf::from(h).join(".cache"))
    })
}

/// Current UTC time as `YYYY-MM-DDTHH:MM:SSZ`.
pub(super) fn timestamp() -> String {
    chrono::Utc::now().format("%Y-%m-%dT%H:%M:%SZ").to_string()
}
