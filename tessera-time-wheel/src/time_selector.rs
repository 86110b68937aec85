//! Hour and minute wheels combined into one "HH:MM" selector.
//!
//! ## Usage
//!
//! The host owns the authoritative [`TimeOfDay`]. It passes it in through
//! [`TimeSelectorArgs::value`], receives every committed change through
//! `on_change`, and pushes its updated value back with
//! [`TimeSelector::set_value`]. Pushing a value never re-emits it.
//!
//! ```
//! use std::sync::{Arc, Mutex};
//!
//! use tessera_time_wheel::{TimeField, TimeOfDay, TimeSelector, TimeSelectorArgs};
//!
//! let host = Arc::new(Mutex::new(TimeOfDay::NOON));
//! let sink = Arc::clone(&host);
//! let args = TimeSelectorArgs::default()
//!     .value(TimeOfDay::NOON)
//!     .on_change(move |time| *sink.lock().unwrap() = time);
//! let mut selector = TimeSelector::new(&args).unwrap();
//!
//! selector.tap(TimeField::Minute, 30);
//! assert_eq!(host.lock().unwrap().to_string(), "12:30");
//! ```

use std::{fmt, sync::Arc};

use derive_setters::Setters;
use tracing::{debug, warn};

use crate::{
    geometry::WheelMetrics,
    prop::CallbackWith,
    range::WheelRange,
    time::{Clock, SystemClock, TimeError, TimeOfDay},
    scroll::DEFAULT_SCROLL_SMOOTHING,
    wheel::{WheelError, WheelPickerState},
};

/// Selects one of the two wheels of a [`TimeSelector`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimeField {
    Hour,
    Minute,
}

impl TimeField {
    /// Caption shown above the wheel.
    pub fn label(self) -> &'static str {
        match self {
            Self::Hour => "Hours",
            Self::Minute => "Minutes",
        }
    }

    /// Values offered by the wheel.
    pub fn range(self) -> WheelRange {
        match self {
            Self::Hour => WheelRange::HOURS,
            Self::Minute => WheelRange::MINUTES,
        }
    }
}

/// Configuration options for [`TimeSelector`].
#[derive(Clone, Setters)]
pub struct TimeSelectorArgs {
    /// Time supplied by the host.
    pub value: TimeOfDay,
    /// Target of [`TimeSelector::reset`].
    pub default_time: TimeOfDay,
    /// Sizing of the hour wheel.
    pub hour_metrics: WheelMetrics,
    /// Sizing of the minute wheel.
    pub minute_metrics: WheelMetrics,
    /// Physical pixels per dp.
    pub scale_factor: f64,
    /// Smoothing of programmatic scroll animations on both wheels.
    pub scroll_smoothing: f32,
    /// Called with every committed time.
    #[setters(skip)]
    pub on_change: CallbackWith<TimeOfDay>,
    /// Wall clock used by [`TimeSelector::set_to_now`].
    #[setters(skip)]
    pub clock: Arc<dyn Clock>,
}

impl Default for TimeSelectorArgs {
    fn default() -> Self {
        Self {
            value: TimeOfDay::NOON,
            default_time: TimeOfDay::NOON,
            hour_metrics: WheelMetrics::default(),
            minute_metrics: WheelMetrics::default(),
            scale_factor: 1.0,
            scroll_smoothing: DEFAULT_SCROLL_SMOOTHING,
            on_change: CallbackWith::default(),
            clock: Arc::new(SystemClock),
        }
    }
}

impl PartialEq for TimeSelectorArgs {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
            && self.default_time == other.default_time
            && self.hour_metrics == other.hour_metrics
            && self.minute_metrics == other.minute_metrics
            && self.scale_factor == other.scale_factor
            && self.scroll_smoothing == other.scroll_smoothing
            && self.on_change == other.on_change
            && Arc::ptr_eq(&self.clock, &other.clock)
    }
}

impl fmt::Debug for TimeSelectorArgs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TimeSelectorArgs")
            .field("value", &self.value)
            .field("default_time", &self.default_time)
            .field("hour_metrics", &self.hour_metrics)
            .field("minute_metrics", &self.minute_metrics)
            .field("scale_factor", &self.scale_factor)
            .field("scroll_smoothing", &self.scroll_smoothing)
            .finish_non_exhaustive()
    }
}

impl TimeSelectorArgs {
    /// Sets the change handler.
    pub fn on_change<F>(mut self, f: F) -> Self
    where
        F: Fn(TimeOfDay) + Send + Sync + 'static,
    {
        self.on_change = CallbackWith::new(f);
        self
    }

    /// Sets the change handler using a shared callback.
    pub fn on_change_shared(mut self, f: impl Into<CallbackWith<TimeOfDay>>) -> Self {
        self.on_change = f.into();
        self
    }

    /// Sets the wall clock.
    pub fn clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Arc::new(clock);
        self
    }
}

/// Two wheels kept in sync with a single "HH:MM" value.
pub struct TimeSelector {
    hours: WheelPickerState,
    minutes: WheelPickerState,
    default_time: TimeOfDay,
    clock: Arc<dyn Clock>,
    on_change: CallbackWith<TimeOfDay>,
}

impl TimeSelector {
    pub fn new(args: &TimeSelectorArgs) -> Result<Self, WheelError> {
        let hours = WheelPickerState::new(
            TimeField::Hour.range(),
            args.hour_metrics,
            args.scale_factor,
            args.value.hour().into(),
        )?
        .with_scroll_smoothing(args.scroll_smoothing);
        let minutes = WheelPickerState::new(
            TimeField::Minute.range(),
            args.minute_metrics,
            args.scale_factor,
            args.value.minute().into(),
        )?
        .with_scroll_smoothing(args.scroll_smoothing);
        Ok(Self {
            hours,
            minutes,
            default_time: args.default_time,
            clock: Arc::clone(&args.clock),
            on_change: args.on_change.clone(),
        })
    }

    /// Time made of the two current selections.
    pub fn value(&self) -> TimeOfDay {
        TimeOfDay::from_clamped(self.hours.selected(), self.minutes.selected())
    }

    /// Header text, "HH:MM".
    pub fn display(&self) -> String {
        self.value().to_string()
    }

    pub fn wheel(&self, field: TimeField) -> &WheelPickerState {
        match field {
            TimeField::Hour => &self.hours,
            TimeField::Minute => &self.minutes,
        }
    }

    fn wheel_mut(&mut self, field: TimeField) -> &mut WheelPickerState {
        match field {
            TimeField::Hour => &mut self.hours,
            TimeField::Minute => &mut self.minutes,
        }
    }

    /// Applies the host's value, recentering the wheels that changed.
    pub fn set_value(&mut self, value: TimeOfDay) {
        let hour_changed = self.hours.sync_value(value.hour().into());
        let minute_changed = self.minutes.sync_value(value.minute().into());
        if hour_changed || minute_changed {
            debug!(%value, "time selector synced from host");
        }
    }

    /// Parses and applies an "HH:MM" value from the host.
    ///
    /// Malformed input leaves the selection untouched.
    pub fn set_value_str(&mut self, value: &str) -> Result<(), TimeError> {
        let parsed = value.parse::<TimeOfDay>().inspect_err(|error| {
            warn!(%error, "ignoring host time value");
        })?;
        self.set_value(parsed);
        Ok(())
    }

    /// Handles a scroll offset reported by one wheel's surface.
    pub fn handle_scroll(&mut self, field: TimeField, offset: f32) {
        if self.wheel_mut(field).handle_scroll(offset).is_some() {
            self.emit();
        }
    }

    /// Drags one wheel by `delta` pixels.
    pub fn drag(&mut self, field: TimeField, delta: f32) {
        if self.wheel_mut(field).drag_by(delta).is_some() {
            self.emit();
        }
    }

    /// Ends a drag on one wheel.
    pub fn release(&mut self, field: TimeField) {
        self.wheel_mut(field).release();
    }

    /// Selects `value` on one wheel directly.
    pub fn tap(&mut self, field: TimeField, value: i32) {
        self.wheel_mut(field).tap(value);
        self.emit();
    }

    /// Sets both wheels to the current wall-clock time.
    pub fn set_to_now(&mut self) {
        let now = self.clock.now();
        self.assign(now);
    }

    /// Sets both wheels to the default time.
    pub fn reset(&mut self) {
        self.assign(self.default_time);
    }

    pub fn attach(&mut self, now_nanos: u64) {
        self.hours.attach(now_nanos);
        self.minutes.attach(now_nanos);
    }

    pub fn detach(&mut self) {
        self.hours.detach();
        self.minutes.detach();
    }

    /// Advances both wheels. Returns `true` if either surface moved.
    pub fn frame(&mut self, now_nanos: u64) -> bool {
        let hours_moved = self.hours.frame(now_nanos);
        let minutes_moved = self.minutes.frame(now_nanos);
        hours_moved || minutes_moved
    }

    fn assign(&mut self, time: TimeOfDay) {
        self.hours.select(time.hour().into());
        self.minutes.select(time.minute().into());
        debug!(%time, "time selector assigned");
        self.emit();
    }

    fn emit(&self) {
        let value = self.value();
        debug!(%value, "time selection changed");
        self.on_change.call(value);
    }
}
