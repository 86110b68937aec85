use std::sync::Arc;

use parking_lot::RwLock;
use tessera_time_wheel::TimeOfDay;

/// Page-level state. The selected time lives here and nowhere else.
#[derive(Clone, Default)]
pub struct AppState {
    pub selected_time: Arc<RwLock<TimeOfDay>>,
    /// Every time the selector reported, oldest first.
    pub history: Arc<RwLock<Vec<TimeOfDay>>>,
}

impl AppState {
    pub fn new(initial: TimeOfDay) -> Self {
        Self {
            selected_time: Arc::new(RwLock::new(initial)),
            history: Arc::new(RwLock::new(Vec::new())),
        }
    }

    pub fn selected_time(&self) -> TimeOfDay {
        *self.selected_time.read()
    }

    /// Records a change reported by the selector.
    pub fn apply_change(&self, time: TimeOfDay) {
        *self.selected_time.write() = time;
        self.history.write().push(time);
    }

    pub fn history(&self) -> Vec<TimeOfDay> {
        self.history.read().clone()
    }
}
