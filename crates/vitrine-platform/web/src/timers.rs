use gloo::timers::callback::Interval;
use std::time::Duration;
use vitrine_core::{TimerHost, TimerRegistration};

/// Longest delay `setInterval` honours; anything above is run immediately.
const MAX_DELAY_MS: u32 = i32::MAX as u32;

/// `setInterval`-backed timers.
#[derive(Clone, Copy, Debug, Default)]
pub struct WebTimers;

impl TimerHost for WebTimers {
    fn set_interval(&mut self, period: Duration, mut tick: Box<dyn FnMut()>) -> TimerRegistration {
        let interval = Interval::new(clamp_delay(period), move || tick());
        // Dropping the interval clears it.
        TimerRegistration::new(move || drop(interval))
    }
}

fn clamp_delay(period: Duration) -> u32 {
    u32::try_from(period.as_millis())
        .unwrap_or(MAX_DELAY_MS)
        .min(MAX_DELAY_MS)
}
