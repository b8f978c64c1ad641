//! The simulated shell
//!
//! - `interpreter`: one input line to one output line plus deferred effects
//! - `boot`: the timed boot sequence state machine
//! - `input`: edit buffer, history recall, tab completion
//! - `scheduler`: single-threaded timer queue for deferred work
//! - `terminal`: the core that wires them to the session log and stores

pub mod boot;
pub mod input;
pub mod interpreter;
pub mod scheduler;
pub mod terminal;

pub use boot::{BootSequencer, BootState, BootTimings};
pub use input::{Completion, InputController};
pub use interpreter::{Deferred, Effect, Interpreter, Outcome, DISCONNECTED_MESSAGE};
pub use scheduler::Scheduler;
pub use terminal::{Terminal, TerminalOptions, PROMPT_HOST};
