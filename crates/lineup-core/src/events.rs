//! Application-level lifecycle events.

use crate::errors::LineupError;

pub fn log_app_startup() {
    tracing::info!(
        event = "core.app.startup_completed",
        version = env!("CARGO_PKG_VERSION")
    );
}

/// Log an error at a level matching its origin.
///
/// User errors are expected outcomes of bad input and go out as warnings.
pub fn log_app_error<E: LineupError + ?Sized>(error: &E) {
    if error.is_user_error() {
        tracing::warn!(
            event = "core.app.error_occurred",
            error_code = error.error_code(),
            error_message = %error
        );
    } else {
        tracing::error!(
            event = "core.app.error_occurred",
            error_code = error.error_code(),
            error_message = %error
        );
    }
}
