use tessera_time_wheel::{
    Clock, RowEmphasis, TimeField, TimeOfDay, TimeSelector, TimeSelectorArgs, WheelError,
    WheelItem, WheelPickerState,
};
use tracing::debug;

use crate::app_state::AppState;

/// Frame interval of the simulated display, about 60 Hz.
pub const FRAME_NANOS: u64 = 16_666_667;

const COLUMN_WIDTH: usize = 10;

/// User input the page forwards to the selector.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum HostAction {
    Drag { field: TimeField, delta: f32 },
    Release(TimeField),
    Tap { field: TimeField, value: i32 },
    Now,
    Reset,
}

/// The page hosting a time selector.
///
/// Changes flow one way: the selector reports into [`AppState`], and the page
/// pushes the state's value back down after every input.
pub struct HostPage {
    state: AppState,
    selector: TimeSelector,
    now_nanos: u64,
}

impl HostPage {
    pub fn new(initial: TimeOfDay, clock: impl Clock + 'static) -> Result<Self, WheelError> {
        let state = AppState::new(initial);
        let sink = state.clone();
        let args = TimeSelectorArgs::default()
            .value(initial)
            .clock(clock)
            .on_change(move |time| sink.apply_change(time));
        Ok(Self {
            state,
            selector: TimeSelector::new(&args)?,
            now_nanos: 0,
        })
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn selector(&self) -> &TimeSelector {
        &self.selector
    }

    pub fn selected(&self) -> TimeOfDay {
        self.state.selected_time()
    }

    pub fn mount(&mut self) {
        self.selector.attach(self.now_nanos);
    }

    pub fn unmount(&mut self) {
        self.selector.detach();
    }

    /// Runs `frames` display frames.
    pub fn advance(&mut self, frames: u32) {
        for _ in 0..frames {
            self.now_nanos += FRAME_NANOS;
            self.selector.frame(self.now_nanos);
        }
    }

    pub fn dispatch(&mut self, action: HostAction) {
        match action {
            HostAction::Drag { field, delta } => self.selector.drag(field, delta),
            HostAction::Release(field) => self.selector.release(field),
            HostAction::Tap { field, value } => self.selector.tap(field, value),
            HostAction::Now => self.selector.set_to_now(),
            HostAction::Reset => self.selector.reset(),
        }
        self.push_down();
    }

    /// Replaces the selected time from outside the selector.
    pub fn set_selected(&mut self, time: TimeOfDay) {
        *self.state.selected_time.write() = time;
        self.push_down();
    }

    fn push_down(&mut self) {
        let value = self.state.selected_time();
        debug!(%value, "pushing selected time to selector");
        self.selector.set_value(value);
    }

    /// Draws the page as text.
    pub fn render(&self) -> String {
        let hours = render_wheel(TimeField::Hour.label(), self.selector.wheel(TimeField::Hour));
        let minutes = render_wheel(
            TimeField::Minute.label(),
            self.selector.wheel(TimeField::Minute),
        );

        let mut out = format!("Select Time  {}\n", self.selector.display());
        for i in 0..hours.len().max(minutes.len()) {
            let left = hours.get(i).map(String::as_str).unwrap_or("");
            let right = minutes.get(i).map(String::as_str).unwrap_or("");
            let separator = if i == 0 { ' ' } else { ':' };
            out.push_str(&format!("{left:^COLUMN_WIDTH$}{separator}{right:^COLUMN_WIDTH$}\n"));
        }
        out.push_str(&format!("Selected Time {}\n", self.selected()));
        out
    }
}

/// Caption followed by the rows currently inside the wheel's viewport.
pub fn render_wheel(label: &str, wheel: &WheelPickerState) -> Vec<String> {
    let geometry = wheel.geometry();
    let top = wheel.scroll_offset();
    let bottom = top + geometry.viewport_height();

    let mut lines = vec![label.to_owned()];
    let mut y = -geometry.spacer_height();
    for item in wheel.rows() {
        match item {
            WheelItem::Spacer { height } => y += height,
            WheelItem::Row(row) => {
                let row_bottom = y + geometry.item_height();
                if row_bottom > top && y < bottom {
                    lines.push(match row.emphasis {
                        RowEmphasis::Selected => format!("> {} <", row.label),
                        RowEmphasis::NearSelected => format!("- {} -", row.label),
                        RowEmphasis::Plain => format!("  {}  ", row.label),
                    });
                }
                y = row_bottom;
            }
        }
    }
    lines
}
