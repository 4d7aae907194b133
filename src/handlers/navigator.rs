//! View navigation state machine.
//!
//! Four states: the three views plus the terminal `Exited` state. Exactly
//! one view is visible at any time; switching hides the other two without
//! destroying their state (the view structs stay alive in the app shell and
//! are simply not rendered).

use crate::events::AppEvent;

/// The presentation surfaces, plus the terminal state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    /// Task List view, shown at startup.
    Todo,
    /// Help view.
    Help,
    /// Settings view.
    Settings,
    /// Terminal state: the process is shutting down.
    Exited,
}

impl View {
    pub fn is_terminal(self) -> bool {
        matches!(self, View::Exited)
    }
}

/// Holds the current view and applies the hotkey-driven transition table.
#[derive(Debug)]
pub struct Navigator {
    current: View,
}

impl Navigator {
    /// Starts on the Task List view.
    pub fn new() -> Self {
        Self {
            current: View::Todo,
        }
    }

    pub fn current(&self) -> View {
        self.current
    }

    /// Whether `view` is the one on screen. Always false once exited.
    pub fn is_visible(&self, view: View) -> bool {
        !view.is_terminal() && self.current == view
    }

    /// Apply one event. `Exited` absorbs everything. Returns whether the
    /// current view changed.
    pub fn handle(&mut self, event: AppEvent) -> bool {
        if self.current.is_terminal() {
            return false;
        }
        let next = match event {
            AppEvent::ShowHelp => View::Help,
            AppEvent::ShowTodo => View::Todo,
            AppEvent::ShowSettings => View::Settings,
            AppEvent::RequestExit => View::Exited,
        };
        if next == self.current {
            return false;
        }
        self.current = next;
        true
    }
}

impl Default for Navigator {
    fn default() -> Self {
        Self::new()
    }
}
