/// Card width in pixels (`w-80`).
pub const DEFAULT_CARD_WIDTH: f64 = 320.0;
/// Gap between cards in pixels (`gap-6`).
pub const DEFAULT_CARD_GAP: f64 = 24.0;

const SNAP_TOLERANCE: f64 = 0.5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollBehavior {
    Smooth,
    Instant,
}

/// A request for the rendering surface to move the card strip.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollCommand {
    pub offset: f64,
    pub behavior: ScrollBehavior,
}

impl ScrollCommand {
    pub fn smooth(offset: f64) -> Self {
        Self {
            offset,
            behavior: ScrollBehavior::Smooth,
        }
    }

    pub fn instant(offset: f64) -> Self {
        Self {
            offset,
            behavior: ScrollBehavior::Instant,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollGeometry {
    pub card_width: f64,
    pub gap: f64,
}

impl Default for ScrollGeometry {
    fn default() -> Self {
        Self::new(DEFAULT_CARD_WIDTH, DEFAULT_CARD_GAP)
    }
}

impl ScrollGeometry {
    pub fn new(card_width: f64, gap: f64) -> Self {
        Self { card_width, gap }
    }

    pub fn is_valid(&self) -> bool {
        self.card_width.is_finite()
            && self.card_width > 0.0
            && self.gap.is_finite()
            && self.gap >= 0.0
    }

    /// Distance from the left edge of one card to the next.
    pub fn stride(&self) -> f64 {
        self.card_width + self.gap
    }

    /// Width of one full pass over `len` logical records.
    pub fn period(&self, len: usize) -> f64 {
        len as f64 * self.stride()
    }

    /// Total width of `len` records rendered `repetitions` times.
    pub fn content_width(&self, len: usize, repetitions: usize) -> f64 {
        if len == 0 || repetitions == 0 {
            return 0.0;
        }
        (len * repetitions) as f64 * self.stride() - self.gap
    }

    /// Offset that centers the card at `index` in a viewport of `viewport_width`.
    pub fn centered_offset(&self, index: usize, viewport_width: f64) -> f64 {
        index as f64 * self.stride() - viewport_width / 2.0 + self.card_width / 2.0
    }

    /// Largest offset the strip can scroll to in a viewport of `viewport_width`.
    pub fn max_scroll(&self, len: usize, repetitions: usize, viewport_width: f64) -> f64 {
        (self.content_width(len, repetitions) - viewport_width).max(0.0)
    }

    /// The offset equivalent to `offset` modulo one repetition period that
    /// sits closest to the middle of the scrollable range.
    ///
    /// With three repetitions this is the position inside the middle copy. The
    /// result is always a reachable scroll position.
    pub fn recentered_offset(
        &self,
        offset: f64,
        viewport_width: f64,
        len: usize,
        repetitions: usize,
    ) -> f64 {
        let max_scroll = self.max_scroll(len, repetitions, viewport_width);
        let period = self.period(len);
        if period <= 0.0 || !offset.is_finite() {
            return offset.clamp(0.0, max_scroll);
        }
        let center = max_scroll / 2.0;
        let shift = ((center - offset) / period).round();
        (offset + shift * period).clamp(0.0, max_scroll)
    }

    /// Equivalent offset near the middle of the strip when the visible window
    /// is within one card width of either end of the rendered strip.
    ///
    /// Returns `None` when no correction is needed or the correction would not
    /// move the strip.
    pub fn boundary_correction(
        &self,
        offset: f64,
        viewport_width: f64,
        len: usize,
        repetitions: usize,
    ) -> Option<f64> {
        if len == 0 || repetitions < 2 || !offset.is_finite() {
            return None;
        }
        if self.max_scroll(len, repetitions, viewport_width) <= 0.0 {
            return None;
        }
        let content = self.content_width(len, repetitions);
        let near_start = offset < self.card_width;
        let near_end = offset + viewport_width > content - self.card_width;
        if !near_start && !near_end {
            return None;
        }
        let corrected = self.recentered_offset(offset, viewport_width, len, repetitions);
        // sub-pixel moves are noise from the browser's own rounding
        if (corrected - offset).abs() < SNAP_TOLERANCE {
            None
        } else {
            Some(corrected)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centered_offset() {
        let g = ScrollGeometry::new(320.0, 24.0);
        assert_eq!(g.centered_offset(0, 1000.0), -340.0);
        assert_eq!(g.centered_offset(1, 1000.0), 4.0);
        assert_eq!(g.centered_offset(2, 1000.0), 348.0);
    }

    #[test]
    fn test_content_width() {
        let g = ScrollGeometry::default();
        assert_eq!(g.period(3), 1032.0);
        assert_eq!(g.content_width(3, 3), 3072.0);
        assert_eq!(g.content_width(0, 3), 0.0);
    }

    #[test]
    fn test_boundary_correction_snaps_to_middle() {
        let g = ScrollGeometry::default();
        let period = g.period(7);

        // near the start
        let fixed = g.boundary_correction(100.0, 1000.0, 7, 3).unwrap();
        assert_eq!(fixed, 100.0 + period);

        // near the end
        let end = g.content_width(7, 3) - 1100.0;
        let fixed = g.boundary_correction(end, 1000.0, 7, 3).unwrap();
        assert_eq!(fixed.rem_euclid(period), end.rem_euclid(period));
        assert!(fixed >= period && fixed < 2.0 * period);

        // comfortably inside
        assert_eq!(g.boundary_correction(period + 500.0, 1000.0, 7, 3), None);
    }

    #[test]
    fn test_boundary_correction_needs_repetition() {
        let g = ScrollGeometry::default();
        assert_eq!(g.boundary_correction(0.0, 1000.0, 7, 1), None);
        assert_eq!(g.boundary_correction(0.0, 1000.0, 0, 3), None);
        assert_eq!(g.boundary_correction(f64::NAN, 1000.0, 7, 3), None);
    }

    #[test]
    fn test_boundary_correction_with_two_repetitions() {
        let g = ScrollGeometry::default();
        // 3 records twice over: content 2040, max scroll 1040
        assert_eq!(g.max_scroll(3, 2, 1000.0), 1040.0);

        // parked at the right edge: pulled back one period
        assert_eq!(g.boundary_correction(1040.0, 1000.0, 3, 2), Some(8.0));
        // and the corrected position is stable
        assert_eq!(g.boundary_correction(8.0, 1000.0, 3, 2), None);

        // nothing is ever pushed past the end of the strip
        for offset in [0.0, 100.0, 700.0, 900.0, 1040.0] {
            if let Some(fixed) = g.boundary_correction(offset, 1000.0, 3, 2) {
                assert!((0.0..=1040.0).contains(&fixed));
                assert_eq!(fixed.rem_euclid(1032.0), offset.rem_euclid(1032.0));
                assert_eq!(g.boundary_correction(fixed, 1000.0, 3, 2), None);
            }
        }
    }

    #[test]
    fn test_boundary_correction_with_wide_viewport() {
        let g = ScrollGeometry::default();
        // viewport wider than one pass over 3 records (1032)
        let max = g.max_scroll(3, 3, 1216.0);
        assert_eq!(max, 1856.0);

        let fixed = g.boundary_correction(1800.0, 1216.0, 3, 3).unwrap();
        assert_eq!(fixed, 768.0);
        let fixed = g.boundary_correction(100.0, 1216.0, 3, 3).unwrap();
        assert_eq!(fixed, 1132.0);

        // strip narrower than the viewport never scrolls
        assert_eq!(g.boundary_correction(0.0, 4000.0, 3, 3), None);
    }

    #[test]
    fn test_recentered_offset_is_reachable() {
        let g = ScrollGeometry::default();
        // middle copy with three repetitions
        assert_eq!(g.recentered_offset(348.0, 1000.0, 3, 3), 348.0 + 1032.0);
        // with two, the in-range equivalent
        assert_eq!(g.recentered_offset(348.0, 1000.0, 3, 2), 348.0);
        assert_eq!(g.recentered_offset(-340.0, 1000.0, 3, 2), 692.0);
        assert_eq!(g.recentered_offset(500.0, 4000.0, 3, 3), 0.0);
    }

    #[test]
    fn test_invalid_geometry() {
        assert!(ScrollGeometry::default().is_valid());
        assert!(!ScrollGeometry::new(0.0, 24.0).is_valid());
        assert!(!ScrollGeometry::new(320.0, -1.0).is_valid());
        assert!(!ScrollGeometry::new(f64::INFINITY, 24.0).is_valid());
    }
}
