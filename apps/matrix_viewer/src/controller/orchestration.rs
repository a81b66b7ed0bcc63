//! Queues UI-originated requests for the backend worker.

use crossbeam_channel::{Sender, TrySendError};

use crate::backend_bridge::commands::BackendCommand;

pub fn dispatch_backend_command(
    cmd_tx: &Sender<BackendCommand>,
    cmd: BackendCommand,
    status: &mut String,
) {
    let cmd_name = match &cmd {
        BackendCommand::FetchGreeting { .. } => "fetch_greeting",
    };

    match cmd_tx.try_send(cmd) {
        Ok(()) => tracing::debug!(command = cmd_name, "queued ui->backend command"),
        Err(TrySendError::Full(_)) => {
            tracing::warn!(command = cmd_name, "backend command queue full; dropping");
            *status = "Backend queue is full; outbound request skipped".to_string();
        }
        Err(TrySendError::Disconnected(_)) => {
            tracing::warn!(command = cmd_name, "backend worker disconnected; dropping");
            *status = "Backend worker unavailable; outbound request skipped".to_string();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossbeam_channel::bounded;
    use url::Url;

    fn fetch() -> BackendCommand {
        BackendCommand::FetchGreeting {
            url: Url::parse("http://localhost:5000/").expect("url"),
        }
    }

    #[test]
    fn queues_command_without_touching_status() {
        let (tx, rx) = bounded(1);
        let mut status = String::from("ready");
        dispatch_backend_command(&tx, fetch(), &mut status);
        assert_eq!(status, "ready");
        assert!(matches!(rx.try_recv(), Ok(BackendCommand::FetchGreeting { .. })));
    }

    #[test]
    fn reports_full_and_disconnected_queues() {
        let (tx, rx) = bounded(1);
        let mut status = String::new();
        dispatch_backend_command(&tx, fetch(), &mut status);
        dispatch_backend_command(&tx, fetch(), &mut status);
        assert!(status.contains("full"));

        drop(rx);
        dispatch_backend_command(&tx, fetch(), &mut status);
        assert!(status.contains("unavailable"));
    }
}
