//! Header style toggle driven by the page's scroll position.

use crate::gesture_constants::SCROLL_THRESHOLD;
use crate::host::{EventChannel, EventHost, HostEvent};
use crate::surface::ClassTarget;
use std::rc::Rc;

#[derive(Clone, Debug, PartialEq)]
pub struct HeaderConfig {
    /// Offset the page must scroll strictly past.
    pub threshold: f64,
    /// Class added to the header while scrolled.
    pub scrolled_class: String,
}

impl Default for HeaderConfig {
    fn default() -> Self {
        Self {
            threshold: SCROLL_THRESHOLD,
            scrolled_class: "scrolled".into(),
        }
    }
}

pub fn is_scrolled(scroll_y: f64, threshold: f64) -> bool {
    scroll_y > threshold
}

/// Marks the header element as scrolled once the page leaves the top.
///
/// Holds no state beyond the element's own class list, so applying the same
/// offset twice only repeats the same class write.
#[derive(Debug)]
pub struct ScrollHeader<C> {
    header: C,
    config: HeaderConfig,
}

impl<C: ClassTarget> ScrollHeader<C> {
    pub fn new(header: C, config: HeaderConfig) -> Self {
        Self { header, config }
    }

    pub fn header(&self) -> &C {
        &self.header
    }

    pub fn config(&self) -> &HeaderConfig {
        &self.config
    }

    /// Updates the header for `scroll_y` and reports whether it is scrolled.
    pub fn apply(&self, scroll_y: f64) -> bool {
        let scrolled = is_scrolled(scroll_y, self.config.threshold);
        self.header.set_class(&self.config.scrolled_class, scrolled);
        scrolled
    }
}

impl<C: ClassTarget + 'static> ScrollHeader<C> {
    /// Applies the header on page-ready and on every scroll.
    pub fn attach(self, host: &mut impl EventHost) -> Rc<Self> {
        let header = Rc::new(self);
        for channel in [EventChannel::Ready, EventChannel::Scroll] {
            let header = Rc::downgrade(&header);
            host.subscribe(
                channel,
                Box::new(move |event: &HostEvent| {
                    let (Some(header), Some(scroll_y)) = (header.upgrade(), event.scroll_y())
                    else {
                        return;
                    };
                    header.apply(scroll_y);
                }),
            );
        }
        header
    }
}
