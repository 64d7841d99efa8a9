//! Handler bookkeeping shared by host implementations.
//!
//! Hosts translate platform events into [`HostEvent`]s and hand them to the
//! registry, which fans them out to every handler on the matching channel in
//! subscription order.

use super::{EventChannel, EventHandler, HostEvent};
use smallvec::SmallVec;

#[derive(Default)]
pub struct EventRegistry {
    handlers: SmallVec<[(EventChannel, EventHandler); 8]>,
}

impl EventRegistry {
    pub fn new() -> Self {
        Self {
            handlers: SmallVec::new(),
        }
    }

    pub fn register(&mut self, channel: EventChannel, handler: EventHandler) {
        self.handlers.push((channel, handler));
    }

    pub fn has_handlers(&self, channel: EventChannel) -> bool {
        self.handlers.iter().any(|(c, _)| *c == channel)
    }

    /// Delivers `event` to the handlers on `channel`, returning how many ran.
    pub fn dispatch(&mut self, channel: EventChannel, event: &HostEvent) -> usize {
        let mut delivered = 0;
        for (c, handler) in self.handlers.iter_mut() {
            if *c == channel {
                handler(event);
                delivered += 1;
            }
        }
        delivered
    }
}

impl std::fmt::Debug for EventRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list()
            .entries(self.handlers.iter().map(|(c, _)| c))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn dispatch_only_reaches_the_matching_channel() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut registry = EventRegistry::new();
        for (tag, channel) in [("scroll", EventChannel::Scroll), ("dot", EventChannel::DotClick)] {
            let seen = Rc::clone(&seen);
            registry.register(channel, Box::new(move |_: &HostEvent| seen.borrow_mut().push(tag)));
        }

        let delivered = registry.dispatch(EventChannel::Scroll, &HostEvent::Scroll { scroll_y: 3.0 });

        assert_eq!(delivered, 1);
        assert_eq!(*seen.borrow(), vec!["scroll"]);
        assert!(registry.has_handlers(EventChannel::DotClick));
        assert!(!registry.has_handlers(EventChannel::DragMove));
    }

    #[test]
    fn handlers_run_in_subscription_order() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut registry = EventRegistry::new();
        for tag in 0..3 {
            let seen = Rc::clone(&seen);
            registry.register(
                EventChannel::Ready,
                Box::new(move |_: &HostEvent| seen.borrow_mut().push(tag)),
            );
        }
        let delivered = registry.dispatch(EventChannel::Ready, &HostEvent::Ready { scroll_y: 0.0 });
        assert_eq!(delivered, 3);
        assert_eq!(*seen.borrow(), vec![0, 1, 2]);
    }
}
