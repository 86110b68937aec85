//! Scroll-wheel picker for a bounded integer range.
//!
//! ## Usage
//!
//! Use to let users pick one value from a short range by scrolling or tapping
//! a vertical list, such as the hour or minute of a time.
//!
//! The selected value is the source of truth. The scroll offset is a
//! projection of it: user drags are converted into a selection, while
//! programmatic scrolling (taps, host updates, initial centering) only moves
//! the surface and never feeds back into the selection.

use std::time::Duration;

use derive_setters::Setters;
use thiserror::Error;
use tracing::{debug, trace};

use crate::{
    dp::Dp,
    geometry::{WheelGeometry, WheelMetrics},
    prop::CallbackWith,
    range::WheelRange,
    schedule::DeferredSlot,
    scroll::{DEFAULT_SCROLL_SMOOTHING, WheelScrollController},
};

/// Delay between attaching a wheel and centering it on its value, giving the
/// host one layout pass first.
pub const INITIAL_CENTERING_DELAY: Duration = Duration::from_millis(100);

/// Errors raised while configuring a wheel.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum WheelError {
    #[error("wheel range is empty: min {min} is greater than max {max}")]
    EmptyRange { min: i32, max: i32 },
    #[error("item height must be positive and finite, got {0}")]
    InvalidItemHeight(Dp),
    #[error("viewport height {viewport} cannot fit one item of {item}")]
    ViewportTooSmall { viewport: Dp, item: Dp },
    #[error("scale factor must be positive and finite, got {0}")]
    InvalidScaleFactor(f64),
    #[error("wheel range {min}..={max} does not fit two-digit labels (0..=99)")]
    RangeNotTwoDigit { min: i32, max: i32 },
}

/// Visual emphasis of a row, by distance from the selected value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RowEmphasis {
    /// The selected row.
    Selected,
    /// A direct neighbour of the selected row.
    NearSelected,
    /// Any other row.
    Plain,
}

impl RowEmphasis {
    /// Classifies a row `distance` rows away from the selection.
    pub fn for_distance(distance: u32) -> Self {
        match distance {
            0 => Self::Selected,
            1 => Self::NearSelected,
            _ => Self::Plain,
        }
    }
}

/// One selectable row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WheelRow {
    pub value: i32,
    /// Two-digit, zero-padded text.
    pub label: String,
    pub emphasis: RowEmphasis,
}

/// An entry of the rendered wheel, top to bottom.
#[derive(Debug, Clone, PartialEq)]
pub enum WheelItem {
    /// Leading or trailing padding, in physical pixels.
    Spacer { height: f32 },
    Row(WheelRow),
}

/// Formats a wheel value as two zero-padded digits.
pub fn format_two_digit(value: i32) -> String {
    format!("{value:02}")
}

/// Holds the selection and scroll state of one wheel.
#[derive(Debug, Clone, PartialEq)]
pub struct WheelPickerState {
    selected: i32,
    geometry: WheelGeometry,
    scroll: WheelScrollController,
    initial_centering: DeferredSlot,
    attached: bool,
}

impl WheelPickerState {
    /// Creates a wheel selecting `initial_value`, clamped to `range`.
    ///
    /// The surface starts at the top of the content; call
    /// [`attach`](Self::attach) to center it on the selection.
    pub fn new(
        range: WheelRange,
        metrics: WheelMetrics,
        scale_factor: f64,
        initial_value: i32,
    ) -> Result<Self, WheelError> {
        let geometry = WheelGeometry::new(range, metrics, scale_factor)?;
        let (top, _) = geometry.scroll_bounds();
        Ok(Self {
            selected: range.clamp(initial_value),
            geometry,
            scroll: WheelScrollController::new(top),
            initial_centering: DeferredSlot::new(),
            attached: false,
        })
    }

    /// Sets the smoothing of programmatic scroll animations.
    pub fn with_scroll_smoothing(mut self, smoothing: f32) -> Self {
        self.scroll = self.scroll.with_smoothing(smoothing);
        self
    }

    /// Returns the selected value.
    pub fn selected(&self) -> i32 {
        self.selected
    }

    pub fn range(&self) -> WheelRange {
        self.geometry.range()
    }

    pub fn geometry(&self) -> &WheelGeometry {
        &self.geometry
    }

    pub fn scroll(&self) -> &WheelScrollController {
        &self.scroll
    }

    /// Offset currently shown by the surface.
    pub fn scroll_offset(&self) -> f32 {
        self.scroll.offset()
    }

    pub fn is_attached(&self) -> bool {
        self.attached
    }

    /// Returns `true` while the deferred initial centering has not run.
    pub fn is_centering_pending(&self) -> bool {
        self.initial_centering.is_pending()
    }

    /// Handles a scroll position reported by the surface.
    ///
    /// Returns the new selection if the centered value changed. Non-finite
    /// offsets are ignored.
    pub fn handle_scroll(&mut self, offset: f32) -> Option<i32> {
        if !offset.is_finite() {
            return None;
        }
        self.take_user_control();
        self.scroll.jump_to(offset);
        self.commit_offset(offset)
    }

    /// Drags the surface by `delta` pixels.
    ///
    /// Returns the new selection if the centered value changed.
    pub fn drag_by(&mut self, delta: f32) -> Option<i32> {
        if !delta.is_finite() {
            return None;
        }
        self.take_user_control();
        let offset = self.scroll.drag_by(
            delta,
            self.geometry.scroll_bounds(),
            self.geometry.overscroll_limit(),
        );
        self.commit_offset(offset)
    }

    /// Ends a drag and settles the surface on the selected row.
    pub fn release(&mut self) {
        self.scroll.release();
        self.center_on(self.selected);
    }

    /// Selects `value` directly, regardless of the current scroll position.
    ///
    /// Returns the selected value after clamping.
    pub fn tap(&mut self, value: i32) -> i32 {
        let value = self.select(value);
        debug!(value, "wheel row tapped");
        value
    }

    /// Assigns `value` and recenters, as a programmatic action rather than
    /// user input.
    ///
    /// Returns the selected value after clamping.
    pub fn select(&mut self, value: i32) -> i32 {
        let value = self.range().clamp(value);
        self.selected = value;
        self.center_on(value);
        value
    }

    /// Applies a value supplied by the host.
    ///
    /// Recenters when the selection changes. Returns whether it changed.
    pub fn sync_value(&mut self, value: i32) -> bool {
        let value = self.range().clamp(value);
        if value == self.selected {
            return false;
        }
        self.selected = value;
        self.center_on(value);
        true
    }

    /// Animates the surface so the row of `value` is centered.
    pub fn center_on(&mut self, value: i32) {
        let offset = self.geometry.offset_for(value);
        trace!(value, offset, "centering wheel");
        self.scroll.animate_to(offset);
    }

    /// Marks the wheel as on screen at `now_nanos` and schedules the initial
    /// centering pass.
    pub fn attach(&mut self, now_nanos: u64) {
        self.attached = true;
        debug!(selected = self.selected, "wheel attached");
        self.initial_centering
            .schedule(now_nanos, INITIAL_CENTERING_DELAY);
    }

    /// Marks the wheel as removed and cancels any pending centering.
    pub fn detach(&mut self) {
        self.attached = false;
        self.initial_centering.cancel();
        debug!("wheel detached");
    }

    /// Advances deferred work and the scroll animation to `now_nanos`.
    ///
    /// Does nothing while detached. Returns `true` if the surface moved.
    pub fn frame(&mut self, now_nanos: u64) -> bool {
        if !self.attached {
            return false;
        }
        if self.initial_centering.poll(now_nanos) && !self.scroll.is_dragging() {
            self.center_on(self.selected);
        }
        self.scroll.update(now_nanos)
    }

    /// Emphasis of the row showing `value`.
    pub fn emphasis_of(&self, value: i32) -> RowEmphasis {
        RowEmphasis::for_distance(value.abs_diff(self.selected))
    }

    /// Lazily yields the spacer, one row per value, and the closing spacer.
    pub fn rows(&self) -> impl Iterator<Item = WheelItem> + '_ {
        let spacer = WheelItem::Spacer {
            height: self.geometry.spacer_height(),
        };
        std::iter::once(spacer.clone())
            .chain(self.range().iter().map(|value| {
                WheelItem::Row(WheelRow {
                    value,
                    label: format_two_digit(value),
                    emphasis: self.emphasis_of(value),
                })
            }))
            .chain(std::iter::once(spacer))
    }

    /// User input owns the surface from here on; the initial centering must
    /// not run.
    fn take_user_control(&mut self) {
        if self.initial_centering.is_pending() {
            trace!("initial centering dropped by user input");
            self.initial_centering.cancel();
        }
    }

    fn commit_offset(&mut self, offset: f32) -> Option<i32> {
        let value = self.geometry.centered_value(offset);
        if value == self.selected {
            return None;
        }
        self.selected = value;
        debug!(value, offset, "wheel selection changed by scroll");
        Some(value)
    }
}

/// Configuration options for [`WheelPicker`].
#[derive(Clone, PartialEq, Setters)]
pub struct WheelPickerArgs {
    /// Values offered by the wheel.
    pub range: WheelRange,
    /// Row and window sizing.
    pub metrics: WheelMetrics,
    /// Physical pixels per dp.
    pub scale_factor: f64,
    /// Selection before any interaction.
    pub initial_value: i32,
    /// Smoothing of programmatic scroll animations; higher is slower.
    pub scroll_smoothing: f32,
    /// Caption shown above the wheel.
    #[setters(into)]
    pub label: String,
    /// Called with every committed selection.
    #[setters(skip)]
    pub on_change: CallbackWith<i32>,
}

impl Default for WheelPickerArgs {
    fn default() -> Self {
        Self {
            range: WheelRange::HOURS,
            metrics: WheelMetrics::default(),
            scale_factor: 1.0,
            initial_value: 0,
            scroll_smoothing: DEFAULT_SCROLL_SMOOTHING,
            label: String::new(),
            on_change: CallbackWith::default(),
        }
    }
}

impl WheelPickerArgs {
    /// Sets the change handler.
    pub fn on_change<F>(mut self, f: F) -> Self
    where
        F: Fn(i32) + Send + Sync + 'static,
    {
        self.on_change = CallbackWith::new(f);
        self
    }

    /// Sets the change handler using a shared callback.
    pub fn on_change_shared(mut self, f: impl Into<CallbackWith<i32>>) -> Self {
        self.on_change = f.into();
        self
    }
}

/// A standalone wheel that reports selection changes through its args.
pub struct WheelPicker {
    state: WheelPickerState,
    label: String,
    on_change: CallbackWith<i32>,
}

impl WheelPicker {
    pub fn new(args: &WheelPickerArgs) -> Result<Self, WheelError> {
        let state = WheelPickerState::new(
            args.range,
            args.metrics,
            args.scale_factor,
            args.initial_value,
        )?
        .with_scroll_smoothing(args.scroll_smoothing);
        Ok(Self {
            state,
            label: args.label.clone(),
            on_change: args.on_change.clone(),
        })
    }

    pub fn state(&self) -> &WheelPickerState {
        &self.state
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn selected(&self) -> i32 {
        self.state.selected()
    }

    /// See [`WheelPickerState::handle_scroll`]; notifies on change.
    pub fn handle_scroll(&mut self, offset: f32) {
        if let Some(value) = self.state.handle_scroll(offset) {
            self.on_change.call(value);
        }
    }

    /// See [`WheelPickerState::drag_by`]; notifies on change.
    pub fn drag_by(&mut self, delta: f32) {
        if let Some(value) = self.state.drag_by(delta) {
            self.on_change.call(value);
        }
    }

    pub fn release(&mut self) {
        self.state.release();
    }

    /// See [`WheelPickerState::tap`]; always notifies.
    pub fn tap(&mut self, value: i32) {
        let value = self.state.tap(value);
        self.on_change.call(value);
    }

    /// Applies a host-supplied value without notifying.
    pub fn sync_value(&mut self, value: i32) {
        self.state.sync_value(value);
    }

    pub fn attach(&mut self, now_nanos: u64) {
        self.state.attach(now_nanos);
    }

    pub fn detach(&mut self) {
        self.state.detach();
    }

    pub fn frame(&mut self, now_nanos: u64) -> bool {
        self.state.frame(now_nanos)
    }

    pub fn rows(&self) -> impl Iterator<Item = WheelItem> + '_ {
        self.state.rows()
    }
}
