//! Session state shared between the interpreter and the UI
//!
//! - `line`: `TerminalLine` records (kind + content)
//! - `log`: the ordered scrollback
//! - `history`: submitted commands with recall cursor
//! - `store`: transient persistence of the log for in-tab reloads

mod error;
pub mod history;
pub mod line;
pub mod log;
pub mod store;

pub use error::StoreError;
pub use history::{CommandHistory, NOT_NAVIGATING};
pub use line::{LineContent, LineKind, TerminalLine};
pub use log::SessionLog;
pub use store::{FileSessionStore, MemorySessionStore, SessionStore};
