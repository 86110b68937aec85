mod app;
mod app_state;

pub use crate::{
    app::{HostAction, HostPage, render_wheel},
    app_state::AppState,
};

use tessera_time_wheel::{SystemClock, TimeField, TimeOfDay, WheelError};
use tracing::info;

fn init_tracing() {
    let filter = match tracing_subscriber::EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => match tracing_subscriber::EnvFilter::try_new(
            "error,tessera_time_wheel=info,example=info",
        ) {
            Ok(filter) => filter,
            Err(_) => tracing_subscriber::EnvFilter::new("error"),
        },
    };

    let _ = tracing_subscriber::fmt()
        .pretty()
        .with_env_filter(filter)
        .try_init();
}

/// Runs a scripted session against the host page and prints each step.
pub fn run() -> Result<(), WheelError> {
    init_tracing();

    let mut page = HostPage::new(TimeOfDay::NOON, SystemClock)?;
    page.mount();
    page.advance(30);
    println!("{}", page.render());

    let script = [
        HostAction::Drag {
            field: TimeField::Hour,
            delta: -130.0,
        },
        HostAction::Release(TimeField::Hour),
        HostAction::Tap {
            field: TimeField::Minute,
            value: 45,
        },
        HostAction::Drag {
            field: TimeField::Hour,
            delta: 2_000.0,
        },
        HostAction::Release(TimeField::Hour),
        HostAction::Now,
        HostAction::Reset,
    ];
    for action in script {
        info!(?action, "dispatching");
        page.dispatch(action);
        page.advance(30);
        println!("{}", page.render());
    }

    page.unmount();
    info!(
        selected = %page.selected(),
        changes = page.state().history().len(),
        "session finished"
    );
    Ok(())
}
