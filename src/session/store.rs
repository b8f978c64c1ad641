//! Transient per-session storage for the session log
//!
//! One xoterm process attached to one parent shell plays the role of a
//! browser tab. The log is written after every change so that a reload in
//! the same "tab" (`xoterm --resume`) restores it. A hard boot removes it.

use std::fs;
use std::path::{Path, PathBuf};

use super::error::StoreError;
use super::line::TerminalLine;

/// Environment variable overriding the session directory.
pub const SESSION_DIR_ENV: &str = "XOTERM_SESSION_DIR";
/// Environment variable overriding the session key (defaults to parent pid).
pub const SESSION_ID_ENV: &str = "XOTERM_SESSION_ID";

/// Storage for the serialized session log.
pub trait SessionStore {
    /// Load a previously saved log.
    ///
    /// `Ok(None)` when nothing was saved. Malformed data is an error the
    /// caller is expected to log and discard.
    fn load(&self) -> Result<Option<Vec<TerminalLine>>, StoreError>;

    /// Replace the saved log with `lines`.
    fn save(&mut self, lines: &[TerminalLine]) -> Result<(), StoreError>;

    /// Forget the saved log (hard boot).
    fn clear(&mut self) -> Result<(), StoreError>;
}

/// In-memory store, used for `xoterm exec`, tests and `persist = false`.
#[derive(Debug, Clone, Default)]
pub struct MemorySessionStore {
    saved: Option<String>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the store with raw serialized data (may be malformed).
    pub fn with_raw(raw: impl Into<String>) -> Self {
        Self {
            saved: Some(raw.into()),
        }
    }
}

impl SessionStore for MemorySessionStore {
    fn load(&self) -> Result<Option<Vec<TerminalLine>>, StoreError> {
        match &self.saved {
            None => Ok(None),
            Some(raw) => serde_json::from_str(raw)
                .map(Some)
                .map_err(|source| StoreError::Malformed {
                    path: PathBuf::from("<memory>"),
                    source,
                }),
        }
    }

    fn save(&mut self, lines: &[TerminalLine]) -> Result<(), StoreError> {
        self.saved = Some(serde_json::to_string(lines)?);
        Ok(())
    }

    fn clear(&mut self) -> Result<(), StoreError> {
        self.saved = None;
        Ok(())
    }
}

/// JSON file store keyed by session id.
#[derive(Debug, Clone)]
pub struct FileSessionStore {
    path: PathBuf,
}

impl FileSessionStore {
    /// Store at an explicit file path.
    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store for the current "tab": default directory and session key.
    pub fn for_current_session() -> Result<Self, StoreError> {
        let dir = default_session_dir()?;
        Ok(Self::at(dir.join(format!("session-{}.json", session_key()))))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SessionStore for FileSessionStore {
    fn load(&self) -> Result<Option<Vec<TerminalLine>>, StoreError> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(source) => {
                return Err(StoreError::Io {
                    path: self.path.clone(),
                    source,
                })
            }
        };

        serde_json::from_str(&raw)
            .map(Some)
            .map_err(|source| StoreError::Malformed {
                path: self.path.clone(),
                source,
            })
    }

    fn save(&mut self, lines: &[TerminalLine]) -> Result<(), StoreError> {
        let json = serde_json::to_string(lines)?;
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|source| StoreError::Io {
                path: parent.to_path_buf(),
                source,
            })?;
        }
        fs::write(&self.path, json).map_err(|source| StoreError::Io {
            path: self.path.clone(),
            source,
        })
    }

    fn clear(&mut self) -> Result<(), StoreError> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(source) => Err(StoreError::Io {
                path: self.path.clone(),
                source,
            }),
        }
    }
}

/// Directory holding session files.
///
/// `$XOTERM_SESSION_DIR`, else the runtime dir, else the cache dir, else the
/// system temp dir, each with an `xoterm` subdirectory.
pub fn default_session_dir() -> Result<PathBuf, StoreError> {
    if let Ok(dir) = std::env::var(SESSION_DIR_ENV) {
        if !dir.is_empty() {
            return Ok(PathBuf::from(dir));
        }
    }
    let base = dirs::runtime_dir()
        .or_else(dirs::cache_dir)
        .unwrap_or_else(std::env::temp_dir);
    if base.as_os_str().is_empty() {
        return Err(StoreError::NoDirectory("session storage"));
    }
    Ok(base.join("xoterm"))
}

/// Key identifying the current "tab".
///
/// `$XOTERM_SESSION_ID` when set, otherwise the parent process id so every
/// shell gets its own session.
pub fn session_key() -> String {
    match std::env::var(SESSION_ID_ENV) {
        Ok(id) if !id.is_empty() => sanitize_key(&id),
        _ => parent_pid().to_string(),
    }
}

#[cfg(unix)]
fn parent_pid() -> u32 {
    // SAFETY: getppid has no preconditions and cannot fail.
    let ppid = unsafe { libc::getppid() };
    ppid as u32
}

#[cfg(not(unix))]
fn parent_pid() -> u32 {
    std::process::id()
}

fn sanitize_key(id: &str) -> String {
    id.chars()
        .map(|c| if c.is_ascii_alphanumeric() || c == '-' { c } else { '_' })
        .collect()
}
