//! Toast analogue for the terminal: transient messages go to stderr via
//! tracing so they never mix with the JSON result on stdout.

use imgup_core::Notifier;
use tracing::info;

pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn notify(&self, message: &str) {
        info!("{message}");
    }
}
