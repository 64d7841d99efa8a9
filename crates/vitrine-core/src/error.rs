//! Error types for slider setup and navigation.

/// Raised while constructing a [`Slider`](crate::Slider).
///
/// Setup is fire-once: the caller logs the error and leaves the page without
/// a working slider. Nothing is retried.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SetupError {
    MissingTrack,
    DotCountMismatch { expected: usize, found: usize },
    NoSlides,
}

impl std::fmt::Display for SetupError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SetupError::MissingTrack => write!(f, "slider track element not found"),
            SetupError::DotCountMismatch { expected, found } => {
                write!(f, "expected {expected} slider dots, found {found}")
            }
            SetupError::NoSlides => write!(f, "slider needs at least one slide"),
        }
    }
}

impl std::error::Error for SetupError {}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationError {
    OutOfRange { index: usize, total: usize },
}

impl std::fmt::Display for NavigationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NavigationError::OutOfRange { index, total } => {
                write!(f, "slide {index} out of range for {total} slides")
            }
        }
    }
}

impl std::error::Error for NavigationError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_missing_piece() {
        assert_eq!(
            SetupError::DotCountMismatch {
                expected: 3,
                found: 0
            }
            .to_string(),
            "expected 3 slider dots, found 0"
        );
        assert_eq!(
            NavigationError::OutOfRange { index: 5, total: 3 }.to_string(),
            "slide 5 out of range for 3 slides"
        );
    }
}
