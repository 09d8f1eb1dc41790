//! Collision tests for axis-aligned arcade geometry
//!
//! Pure functions only. The rectangle test is deliberately permissive: it
//! overlaps the ball's vertical span against the rectangle but requires the
//! horizontal center to be strictly inside, which plays better than exact
//! circle-rectangle distance math at arcade speeds. The same test serves
//! paddle and brick checks.

/// True if a circle at (cx, cy) with radius r overlaps the rectangle with
/// top-left (rx, ry) and size (rw, rh).
///
/// A ball centered strictly inside the rectangle on both axes always hits.
#[inline]
pub fn circle_intersects_rect(
    cx: f32,
    cy: f32,
    r: f32,
    rx: f32,
    ry: f32,
    rw: f32,
    rh: f32,
) -> bool {
    cy + r > ry && cy - r < ry + rh && cx > rx && cx < rx + rw
}

/// True if the circle crosses the left or right board boundary.
#[inline]
pub fn circle_hits_side_walls(cx: f32, r: f32, board_width: f32) -> bool {
    cx + r > board_width || cx - r < 0.0
}

/// True if the circle crosses the top board boundary.
#[inline]
pub fn circle_hits_top(cy: f32, r: f32) -> bool {
    cy - r < 0.0
}

/// True if the circle has fallen past the bottom board boundary.
#[inline]
pub fn circle_below_bottom(cy: f32, r: f32, board_height: f32) -> bool {
    cy + r > board_height
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_center_inside_rect_hits() {
        assert!(circle_intersects_rect(50.0, 50.0, 10.0, 40.0, 40.0, 20.0, 20.0));
    }

    #[test]
    fn test_vertical_span_counts() {
        // Center above the rect, but the lower edge of the ball reaches in
        assert!(circle_intersects_rect(50.0, 35.0, 10.0, 40.0, 40.0, 20.0, 20.0));
        // Just out of reach
        assert!(!circle_intersects_rect(50.0, 29.0, 10.0, 40.0, 40.0, 20.0, 20.0));
    }

    #[test]
    fn test_horizontal_center_is_strict() {
        // Center exactly on the rect's left edge does not count
        assert!(!circle_intersects_rect(40.0, 50.0, 10.0, 40.0, 40.0, 20.0, 20.0));
        assert!(circle_intersects_rect(40.1, 50.0, 10.0, 40.0, 40.0, 20.0, 20.0));
        // Center horizontally outside misses even though the circle overlaps
        assert!(!circle_intersects_rect(35.0, 50.0, 10.0, 40.0, 40.0, 20.0, 20.0));
    }

    #[test]
    fn test_side_walls() {
        assert!(circle_hits_side_walls(795.0, 10.0, 800.0));
        assert!(circle_hits_side_walls(5.0, 10.0, 800.0));
        assert!(!circle_hits_side_walls(400.0, 10.0, 800.0));
        // Touching exactly is not a crossing
        assert!(!circle_hits_side_walls(790.0, 10.0, 800.0));
        assert!(!circle_hits_side_walls(10.0, 10.0, 800.0));
    }

    #[test]
    fn test_top_and_bottom() {
        assert!(circle_hits_top(9.0, 10.0));
        assert!(!circle_hits_top(10.0, 10.0));
        assert!(circle_below_bottom(595.0, 10.0, 600.0));
        assert!(!circle_below_bottom(590.0, 10.0, 600.0));
    }
}
