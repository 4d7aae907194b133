//! Event dispatcher: drains the bus into the navigation state machine.
//!
//! Called once per frame from the app shell's update pass. All events
//! published since the previous frame are applied in order.

use log::info;

use super::navigator::Navigator;
use crate::events::EventBus;

/// Drain all pending events and fold them into the navigator.
/// Returns the number of events processed.
pub fn dispatch(bus: &EventBus, navigator: &mut Navigator) -> usize {
    let events = bus.drain();
    for event in &events {
        if navigator.handle(*event) {
            info!("navigation: {}", event.description());
        }
    }
    events.len()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::AppEvent;
    use crate::handlers::View;

    #[test]
    fn dispatch_applies_events_in_order() {
        let bus = EventBus::new();
        let mut navigator = Navigator::new();
        let publisher = bus.publisher();

        publisher.publish(AppEvent::ShowHelp);
        publisher.publish(AppEvent::ShowSettings);

        assert_eq!(dispatch(&bus, &mut navigator), 2);
        assert_eq!(navigator.current(), View::Settings);
    }

    #[test]
    fn dispatch_with_empty_bus_does_nothing() {
        let bus = EventBus::new();
        let mut navigator = Navigator::new();

        assert_eq!(dispatch(&bus, &mut navigator), 0);
        assert_eq!(navigator.current(), View::Todo);
    }
}
