//! Presentational handles the components write to.
//!
//! Implementations are cheap handles onto a host element (a DOM node, or a
//! recording fake in tests), which is why every method takes `&self`.

/// An element whose class list can be toggled.
pub trait ClassTarget {
    fn set_class(&self, class: &str, enabled: bool);
}

/// The horizontally translated container holding the slides.
pub trait TrackSurface {
    /// Replaces the inline `transform` of the track.
    fn set_transform(&self, transform: &str);
}

/// CSS `translateX` value for a percentage offset.
pub fn translate_x(percent: f64) -> String {
    // `-0.0` would render as `-0%`.
    let percent = if percent == 0.0 { 0.0 } else { percent };
    format!("translateX({percent}%)")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn translate_x_formats_percentages() {
        assert_eq!(translate_x(-0.0), "translateX(0%)");
        assert_eq!(translate_x(-50.0), "translateX(-50%)");
        assert_eq!(
            translate_x(-100.0 / 3.0),
            "translateX(-33.333333333333336%)"
        );
    }
}
