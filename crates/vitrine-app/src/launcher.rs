//! Page launcher with builder-style configuration.
//!
//! `PageLauncher` collects the selectors and tuning knobs for both
//! components, then mounts them once the document is ready.

use std::time::Duration;
use vitrine_core::{HeaderConfig, SliderConfig};

/// Configuration for the page behaviors.
#[derive(Clone, Debug, PartialEq)]
pub struct PageSettings {
    /// Selector of the header element (first match wins).
    pub header_selector: String,
    /// Id of the slider track element.
    pub track_id: String,
    /// Selector matching the dot indicators, in slide order.
    pub dot_selector: String,
    /// Scroll threshold and class for the header.
    pub header: HeaderConfig,
    /// Slide count, swipe threshold and dot class for the slider.
    pub slider: SliderConfig,
    /// Autoplay period; `None` leaves the slider still until the user acts.
    pub autoplay: Option<Duration>,
}

impl Default for PageSettings {
    fn default() -> Self {
        Self {
            header_selector: ".header".into(),
            track_id: "sliderTrack".into(),
            dot_selector: ".dot".into(),
            header: HeaderConfig::default(),
            slider: SliderConfig::default(),
            autoplay: None,
        }
    }
}

/// Builder for mounting the page behaviors.
///
/// # Example
///
/// ```no_run
/// use std::time::Duration;
/// use vitrine_app::PageLauncher;
///
/// PageLauncher::new()
///     .with_total_slides(3)
///     .with_autoplay(Duration::from_secs(5))
///     .run()
///     .expect("page behaviors mounted");
/// ```
#[derive(Clone, Debug, Default)]
pub struct PageLauncher {
    settings: PageSettings,
}

impl PageLauncher {
    /// Create a launcher with the stock page settings.
    pub fn new() -> Self {
        Self {
            settings: PageSettings::default(),
        }
    }

    /// Create a launcher from complete settings.
    pub fn with_settings(settings: PageSettings) -> Self {
        Self { settings }
    }

    /// Settings the launcher will mount with.
    pub fn settings(&self) -> &PageSettings {
        &self.settings
    }

    /// Set the header selector.
    pub fn with_header_selector(mut self, selector: impl Into<String>) -> Self {
        self.settings.header_selector = selector.into();
        self
    }

    /// Set the id of the slider track.
    pub fn with_track_id(mut self, id: impl Into<String>) -> Self {
        self.settings.track_id = id.into();
        self
    }

    /// Set the selector matching the dots.
    pub fn with_dot_selector(mut self, selector: impl Into<String>) -> Self {
        self.settings.dot_selector = selector.into();
        self
    }

    /// Set the scroll offset the header must pass.
    pub fn with_scroll_threshold(mut self, threshold: f64) -> Self {
        self.settings.header.threshold = threshold;
        self
    }

    /// Set the number of slides (and expected dots).
    pub fn with_total_slides(mut self, total: usize) -> Self {
        self.settings.slider.total_slides = total;
        self
    }

    /// Set the minimum horizontal travel for a swipe.
    pub fn with_swipe_threshold(mut self, threshold: f32) -> Self {
        self.settings.slider.swipe_threshold = threshold;
        self
    }

    /// Advance the slider every `interval`.
    pub fn with_autoplay(mut self, interval: Duration) -> Self {
        self.settings.autoplay = Some(interval);
        self
    }

    /// Skip autoplay ticks while the user is dragging.
    pub fn with_pause_while_dragging(mut self, pause: bool) -> Self {
        self.settings.slider.pause_while_dragging = pause;
        self
    }

    /// Mounts both components once the document is ready.
    #[cfg(feature = "web")]
    pub fn run(self) -> Result<(), wasm_bindgen::JsValue> {
        crate::web::run(self.settings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vitrine_core::gesture_constants::{SCROLL_THRESHOLD, SWIPE_THRESHOLD};

    #[test]
    fn defaults_match_the_stock_markup() {
        let settings = PageSettings::default();
        assert_eq!(settings.header_selector, ".header");
        assert_eq!(settings.track_id, "sliderTrack");
        assert_eq!(settings.dot_selector, ".dot");
        assert_eq!(settings.header.threshold, SCROLL_THRESHOLD);
        assert_eq!(settings.header.scrolled_class, "scrolled");
        assert_eq!(settings.slider.total_slides, 3);
        assert_eq!(settings.slider.swipe_threshold, SWIPE_THRESHOLD);
        assert_eq!(settings.slider.active_class, "active");
        assert!(!settings.slider.pause_while_dragging);
        assert_eq!(settings.autoplay, None);
    }

    #[test]
    fn builder_overrides_each_setting() {
        let launcher = PageLauncher::new()
            .with_header_selector("#masthead")
            .with_track_id("heroTrack")
            .with_dot_selector(".hero-dot")
            .with_scroll_threshold(48.0)
            .with_total_slides(5)
            .with_swipe_threshold(30.0)
            .with_autoplay(Duration::from_secs(8))
            .with_pause_while_dragging(true);

        let settings = launcher.settings();
        assert_eq!(settings.header_selector, "#masthead");
        assert_eq!(settings.track_id, "heroTrack");
        assert_eq!(settings.dot_selector, ".hero-dot");
        assert_eq!(settings.header.threshold, 48.0);
        assert_eq!(settings.slider.total_slides, 5);
        assert_eq!(settings.slider.swipe_threshold, 30.0);
        assert_eq!(settings.autoplay, Some(Duration::from_secs(8)));
        assert!(settings.slider.pause_while_dragging);
    }
}
