use crate::config;

/// Whether the page has been scrolled far enough for the navbar to change style.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ScrollStatus {
    is_past_threshold: bool,
}

impl ScrollStatus {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_past_threshold(&self) -> bool {
        self.is_past_threshold
    }

    /// Recomputes the flag from the latest vertical offset.
    /// Returns true when the flag flipped.
    pub fn observe(&mut self, offset: f64) -> bool {
        let past = is_past_threshold(offset);
        let changed = past != self.is_past_threshold;
        self.is_past_threshold = past;
        changed
    }
}

/// Strictly greater than the threshold; NaN never counts as scrolled.
pub fn is_past_threshold(offset: f64) -> bool {
    offset > config::SCROLL_THRESHOLD
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_at_top() {
        assert!(!ScrollStatus::new().is_past_threshold());
    }

    #[test]
    fn flag_is_set_only_strictly_above_threshold() {
        for offset in [0.0, 1.0, 10.5, 19.99, 20.0] {
            assert!(!is_past_threshold(offset), "offset {offset}");
        }
        for offset in [20.01, 21.0, 600.0, 1.0e6] {
            assert!(is_past_threshold(offset), "offset {offset}");
        }
    }

    #[test]
    fn non_finite_offsets() {
        assert!(!is_past_threshold(f64::NAN));
        assert!(!is_past_threshold(f64::NEG_INFINITY));
        assert!(is_past_threshold(f64::INFINITY));
    }

    #[test]
    fn observe_tracks_every_event_and_reports_flips() {
        let mut status = ScrollStatus::new();

        assert!(!status.observe(5.0));
        assert!(!status.is_past_threshold());

        assert!(status.observe(21.0));
        assert!(status.is_past_threshold());

        assert!(!status.observe(400.0));
        assert!(status.is_past_threshold());

        assert!(status.observe(20.0));
        assert!(!status.is_past_threshold());
    }
}
