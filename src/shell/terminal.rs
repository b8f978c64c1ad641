//! Terminal core
//!
//! Owns the session log, edit buffer, theme store and timer queue, and
//! exposes them read-only to the renderer. The UI feeds keystrokes in and
//! calls [`Terminal::tick`] whenever a deferred task may be due.

use std::time::Instant;

use chrono::NaiveDateTime;

use super::boot::{BootOp, BootSequencer, BootTimings};
use super::input::{Completion, InputController};
use super::interpreter::{Effect, Interpreter};
use super::scheduler::Scheduler;
use crate::catalog;
use crate::session::{SessionLog, SessionStore, TerminalLine};
use crate::theme::{Theme, ThemeStore};

/// Host name shown in front of the prompt symbol.
pub const PROMPT_HOST: &str = "guest@xo.works";

/// Work waiting on the timer queue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Task {
    /// Run the next boot handler
    Boot,
    Effect(Effect),
}

/// How a [`Terminal`] starts and boots.
#[derive(Debug, Clone)]
pub struct TerminalOptions {
    /// Keep the saved session and restore it on reaching Ready
    pub resume: bool,
    /// Play the boot sequence; otherwise start at Ready
    pub boot: bool,
    pub timings: BootTimings,
    pub art: Vec<String>,
    /// Theme applied for this process only, re-applied after a hard boot
    pub theme_override: Option<String>,
    /// Source of the "Last login" timestamp
    pub clock: fn() -> NaiveDateTime,
}

impl Default for TerminalOptions {
    fn default() -> Self {
        Self {
            resume: false,
            boot: true,
            timings: BootTimings::standard(),
            art: catalog::banner().to_vec(),
            theme_override: None,
            clock: local_now,
        }
    }
}

fn local_now() -> NaiveDateTime {
    chrono::Local::now().naive_local()
}

pub struct Terminal {
    log: SessionLog,
    input: InputController,
    interpreter: Interpreter,
    themes: ThemeStore,
    store: Box<dyn SessionStore>,
    scheduler: Scheduler<Task>,
    boot: BootSequencer,
    options: TerminalOptions,
    booting: bool,
    disconnected: bool,
}

impl Terminal {
    pub fn new(
        interpreter: Interpreter,
        mut themes: ThemeStore,
        store: Box<dyn SessionStore>,
        options: TerminalOptions,
    ) -> Self {
        if let Some(id) = &options.theme_override {
            themes.apply(id);
        }
        let boot = BootSequencer::new(options.art.clone(), (options.clock)(), options.timings);
        Self {
            log: SessionLog::new(),
            input: InputController::new(),
            interpreter,
            themes,
            store,
            scheduler: Scheduler::new(),
            boot,
            options,
            booting: true,
            disconnected: false,
        }
    }

    /// Start the session.
    ///
    /// A fresh start forgets any saved session (new tab); `resume` keeps it
    /// so it is restored once the boot sequence finishes.
    pub fn start(&mut self, now: Instant) {
        if !self.options.resume {
            if let Err(e) = self.store.clear() {
                tracing::warn!(error = %e, "failed to clear saved session");
            }
        }
        self.begin_boot(now);
    }

    /// Run every deferred task due at `now`, in schedule order.
    pub fn tick(&mut self, now: Instant) {
        while let Some((due, task)) = self.scheduler.pop_due_entry(now) {
            match task {
                Task::Boot => self.boot_step(due),
                Task::Effect(effect) => self.apply(effect, due),
            }
        }
    }

    /// When the next deferred task is due.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.scheduler.next_due()
    }

    fn begin_boot(&mut self, now: Instant) {
        self.log.clear();
        self.booting = true;
        self.boot = BootSequencer::new(
            self.options.art.clone(),
            (self.options.clock)(),
            self.options.timings,
        );
        if self.options.boot {
            self.boot_step(now);
        } else {
            self.boot.skip();
            self.on_ready();
        }
    }

    fn boot_step(&mut self, at: Instant) {
        let step = self.boot.advance();
        for op in step.ops {
            match op {
                BootOp::Append(line) => self.log.push(line),
                BootOp::Clear => self.log.clear(),
            }
        }
        match step.delay {
            Some(delay) => self.scheduler.schedule(at, delay, Task::Boot),
            None => self.on_ready(),
        }
    }

    fn on_ready(&mut self) {
        tracing::info!("boot complete");
        self.booting = false;
        match self.store.load() {
            Ok(Some(lines)) => {
                tracing::debug!(lines = lines.len(), "restoring saved session");
                self.log.reset(lines);
            }
            Ok(None) => {}
            Err(e) => tracing::warn!(error = %e, "discarding saved session"),
        }
    }

    fn apply(&mut self, effect: Effect, at: Instant) {
        match effect {
            Effect::ResetLog(lines) => {
                self.log.reset(lines);
                self.persist();
            }
            Effect::Disconnect => {
                tracing::info!("session disconnected");
                self.disconnected = true;
            }
            Effect::Reload => self.hard_boot(at),
        }
    }

    /// Forget everything and boot again, like reloading a fresh tab.
    pub fn hard_boot(&mut self, now: Instant) {
        tracing::info!("hard boot");
        if let Err(e) = self.store.clear() {
            tracing::warn!(error = %e, "failed to clear saved session");
        }
        self.scheduler.clear();
        self.input.reset();
        self.disconnected = false;
        self.themes.reload();
        if let Some(id) = self.options.theme_override.clone() {
            self.themes.apply(&id);
        }
        self.begin_boot(now);
    }

    /// Save the log to the session store. Failures are logged and ignored.
    pub fn persist(&mut self) {
        if let Err(e) = self.store.save(self.log.lines()) {
            tracing::warn!(error = %e, "failed to save session");
        }
    }

    // === Input (ignored unless interactive) ===

    pub fn insert_char(&mut self, c: char) {
        if self.is_interactive() {
            self.input.insert(c);
        }
    }

    pub fn backspace(&mut self) {
        if self.is_interactive() {
            self.input.backspace();
        }
    }

    pub fn delete(&mut self) {
        if self.is_interactive() {
            self.input.delete();
        }
    }

    pub fn move_left(&mut self) {
        if self.is_interactive() {
            self.input.move_left();
        }
    }

    pub fn move_right(&mut self) {
        if self.is_interactive() {
            self.input.move_right();
        }
    }

    pub fn move_home(&mut self) {
        if self.is_interactive() {
            self.input.move_home();
        }
    }

    pub fn move_end(&mut self) {
        if self.is_interactive() {
            self.input.move_end();
        }
    }

    pub fn recall_previous(&mut self) {
        if self.is_interactive() {
            self.input.recall_previous();
        }
    }

    pub fn recall_next(&mut self) {
        if self.is_interactive() {
            self.input.recall_next();
        }
    }

    /// Submit the edit buffer and schedule whatever the command deferred.
    pub fn submit(&mut self, now: Instant) {
        if !self.is_interactive() {
            return;
        }
        let prompt = self.themes.current_theme().prompt.clone();
        let interpreter = &self.interpreter;
        let themes = &mut self.themes;
        let Some(deferred) = self
            .input
            .submit(&prompt, &mut self.log, |command| interpreter.interpret(command, themes))
        else {
            return;
        };
        for task in deferred {
            self.scheduler.schedule(now, task.delay, Task::Effect(task.effect));
        }
        self.persist();
    }

    pub fn complete_tab(&mut self) {
        if !self.is_interactive() {
            return;
        }
        let prompt = self.themes.current_theme().prompt.clone();
        let interpreter = &self.interpreter;
        let result = self
            .input
            .complete_tab(&prompt, &mut self.log, |buffer| interpreter.complete(buffer));
        if result == Completion::Listed {
            self.persist();
        }
    }

    /// Ctrl+L: clear the log whatever the buffer holds.
    pub fn clear_screen(&mut self) {
        if !self.is_interactive() {
            return;
        }
        self.log.clear();
        self.persist();
    }

    /// Theme menu pick: switch and persist, leaving the log as it is.
    pub fn select_theme(&mut self, id: &str) -> bool {
        if !self.is_interactive() {
            return false;
        }
        let changed = self.themes.change_theme(id);
        if changed {
            tracing::info!(theme = id, "theme selected from menu");
        }
        changed
    }

    // === Read-only state for the renderer ===

    pub fn lines(&self) -> &[TerminalLine] {
        self.log.lines()
    }

    pub fn buffer(&self) -> &str {
        self.input.buffer()
    }

    /// Edit cursor in characters.
    pub fn cursor(&self) -> usize {
        self.input.cursor()
    }

    pub fn theme(&self) -> &Theme {
        self.themes.current_theme()
    }

    /// Every selectable theme, in catalog order.
    pub fn themes(&self) -> &[Theme] {
        self.themes.catalog().themes()
    }

    pub fn theme_revision(&self) -> u64 {
        self.themes.revision()
    }

    /// `guest@xo.works <symbol>`
    pub fn prompt(&self) -> String {
        format!("{} {}", PROMPT_HOST, self.theme().prompt)
    }

    pub fn is_booting(&self) -> bool {
        self.booting
    }

    pub fn is_disconnected(&self) -> bool {
        self.disconnected
    }

    pub fn is_interactive(&self) -> bool {
        !self.is_booting() && !self.disconnected
    }

    pub fn history(&self) -> &[String] {
        self.input.history().entries()
    }

    pub fn store(&self) -> &dyn SessionStore {
        self.store.as_ref()
    }
}
