//! Log rejected operations at the level their error asks for

use std::fmt::Display;

use lapwatch_common::error::{ErrorClassification, ErrorSeverity};
use tracing::{debug, error, warn};

/// Log `err` at the level its [`ErrorSeverity`] maps to and hand it back
///
/// `Info` goes to `debug!`, `Warning` to `warn!`, `Error` and `Critical` to
/// `error!`. Used at the point an operation returns its error.
pub(crate) fn rejected<E>(err: E, timer_id: &str, message: &str) -> E
where
    E: ErrorClassification + Display,
{
    let severity = err.severity();
    match severity {
        ErrorSeverity::Info => debug!(timer_id, error = %err, "{message}"),
        ErrorSeverity::Warning => warn!(timer_id, error = %err, %severity, "{message}"),
        ErrorSeverity::Error | ErrorSeverity::Critical => {
            error!(timer_id, error = %err, %severity, critical = err.is_critical(), "{message}");
        }
    }
    err
}
