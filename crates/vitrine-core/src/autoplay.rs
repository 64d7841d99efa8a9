//! Cancellable autoplay for the slider.

use crate::host::TimerRegistration;
use std::cell::Cell;
use std::rc::Rc;
use std::time::Duration;

/// Cooperative cancellation flag checked before every autoplay tick.
#[derive(Clone, Debug)]
pub struct AutoplayToken {
    active: Rc<Cell<bool>>,
}

impl AutoplayToken {
    pub fn new() -> Self {
        Self {
            active: Rc::new(Cell::new(true)),
        }
    }

    pub fn is_active(&self) -> bool {
        self.active.get()
    }

    pub fn deactivate(&self) {
        self.active.set(false);
    }
}

impl Default for AutoplayToken {
    fn default() -> Self {
        Self::new()
    }
}

/// Returned by [`Slider::start_autoplay`](crate::Slider::start_autoplay).
///
/// Cancelling or dropping the handle deactivates the token and stops the
/// host timer. Call [`detach`](Self::detach) to keep autoplay running for
/// the page's lifetime instead.
#[derive(Debug)]
pub struct AutoplayHandle {
    token: AutoplayToken,
    registration: Option<TimerRegistration>,
    interval: Duration,
}

impl AutoplayHandle {
    pub(crate) fn new(
        token: AutoplayToken,
        registration: TimerRegistration,
        interval: Duration,
    ) -> Self {
        Self {
            token,
            registration: Some(registration),
            interval,
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn is_active(&self) -> bool {
        self.token.is_active()
    }

    pub fn token(&self) -> AutoplayToken {
        self.token.clone()
    }

    pub fn cancel(self) {
        log::debug!("autoplay cancelled");
        drop(self);
    }

    /// Gives up the handle without stopping autoplay.
    pub fn detach(mut self) {
        if let Some(registration) = self.registration.take() {
            registration.forget();
        }
    }
}

impl Drop for AutoplayHandle {
    fn drop(&mut self) {
        if let Some(registration) = self.registration.take() {
            self.token.deactivate();
            registration.cancel();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dropping_the_handle_deactivates_the_token() {
        let stopped = Rc::new(Cell::new(false));
        let handle = {
            let stopped = Rc::clone(&stopped);
            AutoplayHandle::new(
                AutoplayToken::new(),
                TimerRegistration::new(move || stopped.set(true)),
                Duration::from_millis(10),
            )
        };
        let token = handle.token();
        assert!(token.is_active());

        handle.cancel();

        assert!(!token.is_active());
        assert!(stopped.get());
    }

    #[test]
    fn detached_handle_keeps_running() {
        let stopped = Rc::new(Cell::new(false));
        let handle = {
            let stopped = Rc::clone(&stopped);
            AutoplayHandle::new(
                AutoplayToken::new(),
                TimerRegistration::new(move || stopped.set(true)),
                Duration::from_millis(10),
            )
        };
        let token = handle.token();

        handle.detach();

        assert!(token.is_active());
        assert!(!stopped.get());
    }
}
