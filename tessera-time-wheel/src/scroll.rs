//! Scroll position of a wheel surface.
//!
//! The controller tracks the offset currently shown and the offset it is
//! moving toward. User drags move both at once. Programmatic requests only
//! move the target; [`WheelScrollController::update`] then interpolates the
//! shown offset frame by frame.

/// Default interpolation smoothing. Higher values move more slowly.
pub const DEFAULT_SCROLL_SMOOTHING: f32 = 0.7;

/// Holds the scroll state of one wheel.
#[derive(Debug, Clone, PartialEq)]
pub struct WheelScrollController {
    /// Offset currently shown.
    offset: f32,
    /// Offset the animation is heading to.
    target: f32,
    /// Last frame time for delta time calculation.
    last_frame_nanos: Option<u64>,
    smoothing: f32,
    dragging: bool,
}

impl WheelScrollController {
    /// Creates a controller resting at `offset`.
    pub fn new(offset: f32) -> Self {
        Self {
            offset,
            target: offset,
            last_frame_nanos: None,
            smoothing: DEFAULT_SCROLL_SMOOTHING,
            dragging: false,
        }
    }

    /// Sets the interpolation smoothing, clamped to `[0.0, 0.99]`. A NaN
    /// keeps the current smoothing.
    pub fn with_smoothing(mut self, smoothing: f32) -> Self {
        if !smoothing.is_nan() {
            self.smoothing = smoothing.clamp(0.0, 0.99);
        }
        self
    }

    pub fn smoothing(&self) -> f32 {
        self.smoothing
    }

    pub fn offset(&self) -> f32 {
        self.offset
    }

    pub fn target(&self) -> f32 {
        self.target
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    /// Returns `true` while the shown offset has not reached the target.
    pub fn is_animating(&self) -> bool {
        !self.dragging && self.offset != self.target
    }

    /// Applies a user drag of `delta` pixels and returns the new offset.
    ///
    /// The result stays within `bounds` widened by `overscroll` on each side.
    pub fn drag_by(&mut self, delta: f32, bounds: (f32, f32), overscroll: f32) -> f32 {
        let (lo, hi) = bounds;
        let next = (self.offset + delta).clamp(lo - overscroll, hi + overscroll);
        self.dragging = true;
        self.offset = next;
        self.target = next;
        self.last_frame_nanos = None;
        next
    }

    /// Ends the current drag.
    pub fn release(&mut self) {
        self.dragging = false;
    }

    /// Starts animating toward `target`, replacing any earlier target.
    pub fn animate_to(&mut self, target: f32) {
        self.dragging = false;
        self.target = target;
    }

    /// Instantly sets the offset without animation.
    pub fn jump_to(&mut self, offset: f32) {
        self.offset = offset;
        self.target = offset;
        self.last_frame_nanos = None;
    }

    /// Advances the animation to `frame_nanos`.
    ///
    /// Returns `true` if the shown offset changed.
    pub fn update(&mut self, frame_nanos: u64) -> bool {
        if self.dragging {
            self.last_frame_nanos = Some(frame_nanos);
            return false;
        }

        let delta_time = if let Some(last_frame_nanos) = self.last_frame_nanos {
            frame_nanos.saturating_sub(last_frame_nanos) as f32 / 1_000_000_000.0
        } else {
            0.016
        };
        self.last_frame_nanos = Some(frame_nanos);

        let diff = self.target - self.offset;
        if diff.abs() < 1.0 {
            if self.offset != self.target {
                self.offset = self.target;
                return true;
            }
            return false;
        }

        let movement_factor = ((1.0 - self.smoothing) * delta_time * 60.0).min(1.0);
        let old_offset = self.offset;
        self.offset += diff * movement_factor;
        old_offset != self.offset
    }
}

impl Default for WheelScrollController {
    fn default() -> Self {
        Self::new(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FRAME: u64 = 16_000_000;

    fn settle(controller: &mut WheelScrollController, start: u64) -> u64 {
        let mut now = start;
        for _ in 0..1_000 {
            now += FRAME;
            if !controller.update(now) && !controller.is_animating() {
                break;
            }
        }
        now
    }

    #[test]
    fn test_animation_reaches_target() {
        let mut controller = WheelScrollController::new(-75.0);
        controller.animate_to(525.0);
        assert!(controller.is_animating());
        settle(&mut controller, 0);
        assert_eq!(controller.offset(), 525.0);
        assert!(!controller.is_animating());
    }

    #[test]
    fn test_animation_moves_monotonically() {
        let mut controller = WheelScrollController::new(0.0);
        controller.animate_to(300.0);
        let mut last = controller.offset();
        let mut now = 0;
        while controller.is_animating() {
            now += FRAME;
            controller.update(now);
            assert!(controller.offset() >= last);
            assert!(controller.offset() <= 300.0);
            last = controller.offset();
        }
    }

    #[test]
    fn test_newer_target_supersedes_older() {
        let mut controller = WheelScrollController::new(0.0);
        controller.animate_to(500.0);
        controller.update(FRAME);
        controller.animate_to(100.0);
        settle(&mut controller, FRAME);
        assert_eq!(controller.offset(), 100.0);
    }

    #[test]
    fn test_drag_is_immediate_and_bounded() {
        let mut controller = WheelScrollController::new(0.0);
        assert_eq!(controller.drag_by(40.0, (-75.0, 1075.0), 100.0), 40.0);
        assert_eq!(controller.offset(), 40.0);
        assert!(controller.is_dragging());
        assert!(!controller.is_animating());

        assert_eq!(controller.drag_by(-10_000.0, (-75.0, 1075.0), 100.0), -175.0);
        assert_eq!(controller.drag_by(50_000.0, (-75.0, 1075.0), 100.0), 1175.0);
    }

    #[test]
    fn test_update_does_not_move_while_dragging() {
        let mut controller = WheelScrollController::new(0.0);
        controller.drag_by(10.0, (-75.0, 1075.0), 100.0);
        assert!(!controller.update(FRAME));
        assert_eq!(controller.offset(), 10.0);
        controller.release();
        assert!(!controller.is_dragging());
    }

    #[test]
    fn test_jump_to_skips_animation() {
        let mut controller = WheelScrollController::new(0.0);
        controller.jump_to(250.0);
        assert_eq!(controller.offset(), 250.0);
        assert!(!controller.is_animating());
        assert!(!controller.update(FRAME));
    }

    #[test]
    fn test_smoothing_is_clamped() {
        let controller = WheelScrollController::new(0.0).with_smoothing(4.0);
        assert_eq!(controller.smoothing(), 0.99);
        let controller = WheelScrollController::new(0.0).with_smoothing(-1.0);
        assert_eq!(controller.smoothing(), 0.0);
        let controller = WheelScrollController::new(0.0).with_smoothing(f32::NAN);
        assert_eq!(controller.smoothing(), DEFAULT_SCROLL_SMOOTHING);
    }
}
