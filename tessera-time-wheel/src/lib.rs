//! Scroll-wheel pickers for tessera-ui style hosts.
//!
//! # Components
//!
//! - [`WheelPicker`] lets users choose an integer from a bounded range by
//!   scrolling or tapping a vertical list of two-digit rows.
//! - [`TimeSelector`] pairs an hour wheel (0-23) with a minute wheel (0-59)
//!   and reports the combined "HH:MM" value.
//!
//! Both are headless: they own selection, geometry and scroll animation, and
//! expose the rows to draw through [`WheelPickerState::rows`]. The host feeds
//! in scroll and tap input plus a frame clock, and draws what comes out.
//!
//! # Data flow
//!
//! The host holds the authoritative value. The picker emits a change event
//! for every committed selection and never takes ownership of that value; the
//! host applies the event and pushes the result back down.
//!
//! ```
//! use tessera_time_wheel::{TimeField, TimeOfDay, TimeSelector, TimeSelectorArgs};
//!
//! let mut selector = TimeSelector::new(&TimeSelectorArgs::default()).unwrap();
//! selector.attach(0);
//! selector.tap(TimeField::Hour, 7);
//! assert_eq!(selector.value(), TimeOfDay::new(7, 0).unwrap());
//! ```

pub mod dp;
pub mod geometry;
pub mod prop;
pub mod range;
pub mod schedule;
pub mod scroll;
pub mod time;
pub mod time_selector;
pub mod wheel;

pub use crate::{
    dp::Dp,
    geometry::{WheelGeometry, WheelMetrics},
    prop::CallbackWith,
    range::WheelRange,
    schedule::DeferredSlot,
    scroll::WheelScrollController,
    time::{Clock, FixedClock, SystemClock, TimeError, TimeOfDay},
    time_selector::{TimeField, TimeSelector, TimeSelectorArgs},
    wheel::{
        RowEmphasis, WheelError, WheelItem, WheelPicker, WheelPickerArgs, WheelPickerState,
        WheelRow, format_two_digit,
    },
};
