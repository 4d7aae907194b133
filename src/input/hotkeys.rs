//! Application-wide hotkey filter.
//!
//! The filter scans the raw input event stream once per frame, so the
//! bindings fire no matter which widget currently has keyboard focus.
//! Matches are published on the event bus; the navigation dispatcher does
//! the rest.

use eframe::egui::{Context, Event, Key};

use crate::events::{AppEvent, EventPublisher};

/// One hotkey: the letter pressed together with Alt, the event it raises,
/// and the strings the Help view shows for it.
pub struct Binding {
    pub key: Key,
    pub event: AppEvent,
    pub action: &'static str,
    pub keys: &'static str,
}

/// The hotkey table. The Help view renders exactly what the filter matches.
pub const BINDINGS: &[Binding] = &[
    Binding {
        key: Key::B,
        event: AppEvent::ShowTodo,
        action: "To-do list",
        keys: "Alt+B",
    },
    Binding {
        key: Key::H,
        event: AppEvent::ShowHelp,
        action: "Help",
        keys: "Alt+H",
    },
    Binding {
        key: Key::D,
        event: AppEvent::ShowSettings,
        action: "Settings",
        keys: "Alt+D",
    },
    Binding {
        key: Key::E,
        event: AppEvent::RequestExit,
        action: "Exit",
        keys: "Alt+E",
    },
];

/// Scan this frame's raw key events and publish a navigation event for
/// every hotkey match.
pub fn poll(ctx: &Context, publisher: &EventPublisher) {
    ctx.input(|input| {
        for event in &input.events {
            if let Event::Key {
                key,
                pressed: true,
                modifiers,
                ..
            } = event
            {
                if !modifiers.alt {
                    continue;
                }
                if let Some(binding) = BINDINGS.iter().find(|b| b.key == *key) {
                    log::debug!("hotkey {}: {}", binding.keys, binding.event.description());
                    publisher.publish(binding.event);
                }
            }
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_navigation_event_has_a_binding() {
        for event in [
            AppEvent::ShowTodo,
            AppEvent::ShowHelp,
            AppEvent::ShowSettings,
            AppEvent::RequestExit,
        ] {
            assert!(BINDINGS.iter().any(|b| b.event == event));
        }
    }

    #[test]
    fn binding_keys_are_unique() {
        for (i, a) in BINDINGS.iter().enumerate() {
            for b in &BINDINGS[i + 1..] {
                assert_ne!(a.key, b.key);
            }
        }
    }
}
