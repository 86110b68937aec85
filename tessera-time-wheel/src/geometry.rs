//! Mapping between a continuous scroll offset and discrete wheel rows.
//!
//! A wheel is laid out as a leading spacer, one row per value, and a trailing
//! spacer. Both spacers are `viewport / 2 - item / 2` tall so the first and
//! last rows can reach the vertical center of the viewport.
//!
//! Offsets are measured in physical pixels from the top edge of the first
//! value row, so the leading spacer lies at negative offsets. With that origin
//! the reachable scroll extent is exactly
//! `[offset_for(min), offset_for(max)]`.

use crate::{dp::Dp, range::WheelRange, wheel::WheelError};

/// Default height of one wheel row.
pub const DEFAULT_ITEM_HEIGHT: Dp = Dp(50.0);
/// Default height of the visible wheel window.
pub const DEFAULT_VIEWPORT_HEIGHT: Dp = Dp(200.0);

/// Sizing configuration of a wheel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WheelMetrics {
    /// Height of one selectable row.
    pub item_height: Dp,
    /// Height of the visible window.
    pub viewport_height: Dp,
}

impl Default for WheelMetrics {
    fn default() -> Self {
        Self {
            item_height: DEFAULT_ITEM_HEIGHT,
            viewport_height: DEFAULT_VIEWPORT_HEIGHT,
        }
    }
}

impl WheelMetrics {
    /// Creates metrics from an item height and a viewport height.
    pub fn new(item_height: Dp, viewport_height: Dp) -> Self {
        Self {
            item_height,
            viewport_height,
        }
    }

    /// Checks that rows have a positive height and at least one row fits.
    pub fn validate(&self) -> Result<(), WheelError> {
        if !self.item_height.is_positive() {
            return Err(WheelError::InvalidItemHeight(self.item_height));
        }
        if !self.viewport_height.0.is_finite() || self.viewport_height < self.item_height {
            return Err(WheelError::ViewportTooSmall {
                viewport: self.viewport_height,
                item: self.item_height,
            });
        }
        Ok(())
    }
}

/// Wheel metrics resolved to physical pixels for a specific range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WheelGeometry {
    range: WheelRange,
    item_height: f32,
    viewport_height: f32,
}

impl WheelGeometry {
    /// Resolves `metrics` at `scale_factor` for the rows of `range`.
    pub fn new(
        range: WheelRange,
        metrics: WheelMetrics,
        scale_factor: f64,
    ) -> Result<Self, WheelError> {
        if !(scale_factor.is_finite() && scale_factor > 0.0) {
            return Err(WheelError::InvalidScaleFactor(scale_factor));
        }
        metrics.validate()?;
        Ok(Self {
            range,
            item_height: metrics.item_height.to_pixels_f32(scale_factor),
            viewport_height: metrics.viewport_height.to_pixels_f32(scale_factor),
        })
    }

    pub fn range(&self) -> WheelRange {
        self.range
    }

    pub fn item_height(&self) -> f32 {
        self.item_height
    }

    pub fn viewport_height(&self) -> f32 {
        self.viewport_height
    }

    /// Height of each of the leading and trailing spacer rows.
    pub fn spacer_height(&self) -> f32 {
        self.viewport_height / 2.0 - self.item_height / 2.0
    }

    /// Total height of spacers plus rows.
    pub fn content_height(&self) -> f32 {
        self.spacer_height() * 2.0 + self.range.len() as f32 * self.item_height
    }

    /// Offset that puts the row of `value` in the vertical center.
    ///
    /// Values outside the range are clamped first.
    pub fn offset_for(&self, value: i32) -> f32 {
        let index = self.range.index_of(value) as f32;
        index * self.item_height - self.viewport_height / 2.0 + self.item_height / 2.0
    }

    /// Unclamped row index whose center is nearest to the viewport center.
    ///
    /// May lie outside the rows when the surface is overscrolled.
    pub fn raw_index_at(&self, offset: f32) -> i64 {
        let centered =
            (offset + self.viewport_height / 2.0 - self.item_height / 2.0) / self.item_height;
        centered.round() as i64
    }

    /// Value of the centered row, saturated at the range bounds.
    pub fn centered_value(&self, offset: f32) -> i32 {
        self.range.value_at(self.raw_index_at(offset))
    }

    /// Smallest and largest offsets the content allows without overscroll.
    pub fn scroll_bounds(&self) -> (f32, f32) {
        (
            self.offset_for(self.range.min()),
            self.offset_for(self.range.max()),
        )
    }

    /// How far past either bound a drag may pull the content.
    pub fn overscroll_limit(&self) -> f32 {
        self.viewport_height / 2.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hours() -> WheelGeometry {
        WheelGeometry::new(WheelRange::HOURS, WheelMetrics::default(), 1.0).unwrap()
    }

    #[test]
    fn test_spacer_height_centers_edge_rows() {
        let geometry = hours();
        assert_eq!(geometry.spacer_height(), 75.0);
        assert_eq!(geometry.content_height(), 75.0 * 2.0 + 24.0 * 50.0);
    }

    #[test]
    fn test_offset_for_matches_reference_values() {
        let geometry = hours();
        assert_eq!(geometry.offset_for(0), -75.0);
        assert_eq!(geometry.offset_for(1), -25.0);
        assert_eq!(geometry.offset_for(12), 525.0);
        // Clamped before conversion.
        assert_eq!(geometry.offset_for(40), geometry.offset_for(23));
    }

    #[test]
    fn test_scroll_bounds_span_content_minus_viewport() {
        let geometry = hours();
        let (lo, hi) = geometry.scroll_bounds();
        assert_eq!(lo, -geometry.spacer_height());
        assert_eq!(hi - lo, geometry.content_height() - geometry.viewport_height());
    }

    #[test]
    fn test_offset_round_trip_for_every_value() {
        for (range, metrics, scale) in [
            (WheelRange::HOURS, WheelMetrics::default(), 1.0),
            (WheelRange::MINUTES, WheelMetrics::default(), 1.0),
            (WheelRange::MINUTES, WheelMetrics::new(Dp(36.0), Dp(180.0)), 2.0),
            (WheelRange::new(5, 15).unwrap(), WheelMetrics::new(Dp(40.0), Dp(40.0)), 1.25),
        ] {
            let geometry = WheelGeometry::new(range, metrics, scale).unwrap();
            for value in range {
                assert_eq!(geometry.centered_value(geometry.offset_for(value)), value);
            }
        }
    }

    #[test]
    fn test_centered_value_rounds_to_nearest_row() {
        let geometry = hours();
        let at_three = geometry.offset_for(3);
        assert_eq!(geometry.centered_value(at_three + 24.0), 3);
        assert_eq!(geometry.centered_value(at_three - 24.0), 3);
        assert_eq!(geometry.centered_value(at_three + 26.0), 4);
        assert_eq!(geometry.centered_value(at_three - 26.0), 2);
    }

    #[test]
    fn test_centered_value_is_always_clamped() {
        let geometry = hours();
        for offset in [
            f32::MIN,
            -1.0e9,
            -10_000.0,
            -75.0 - 200.0,
            0.0,
            1_200.0,
            1.0e9,
            f32::MAX,
        ] {
            let value = geometry.centered_value(offset);
            assert!((0..=23).contains(&value), "offset {offset} gave {value}");
        }
        assert_eq!(geometry.centered_value(geometry.offset_for(23) + 50.0), 23);
        assert_eq!(geometry.raw_index_at(geometry.offset_for(23) + 50.0), 24);
    }

    #[test]
    fn test_invalid_configuration_is_rejected() {
        let range = WheelRange::HOURS;
        assert_eq!(
            WheelGeometry::new(range, WheelMetrics::new(Dp(0.0), Dp(200.0)), 1.0),
            Err(WheelError::InvalidItemHeight(Dp(0.0)))
        );
        assert_eq!(
            WheelGeometry::new(range, WheelMetrics::new(Dp(50.0), Dp(20.0)), 1.0),
            Err(WheelError::ViewportTooSmall {
                viewport: Dp(20.0),
                item: Dp(50.0),
            })
        );
        assert_eq!(
            WheelGeometry::new(range, WheelMetrics::default(), 0.0),
            Err(WheelError::InvalidScaleFactor(0.0))
        );
    }
}
