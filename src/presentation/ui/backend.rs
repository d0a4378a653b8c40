use std::path::PathBuf;
use std::sync::Arc;

use tokio::sync::mpsc;
use tracing::{debug, info, warn};

use crate::domain::ports::{CalendarPort, CalendarRequest};

/// Results reported back to the UI loop.
#[derive(Debug)]
pub enum Action {
    CalendarExported {
        event_name: String,
        path: PathBuf,
    },
    CalendarExportFailed {
        event_name: String,
        error: String,
    },
}

pub enum BackendCommand {
    ExportCalendar(CalendarRequest),
}

/// Background worker for integration calls that may block on IO.
pub struct Backend {
    calendar: Arc<dyn CalendarPort>,
    command_rx: mpsc::UnboundedReceiver<BackendCommand>,
    action_tx: mpsc::UnboundedSender<Action>,
}

impl Backend {
    pub fn new(
        calendar: Arc<dyn CalendarPort>,
        command_rx: mpsc::UnboundedReceiver<BackendCommand>,
        action_tx: mpsc::UnboundedSender<Action>,
    ) -> Self {
        Self {
            calendar,
            command_rx,
            action_tx,
        }
    }

    pub async fn run(mut self) {
        info!("Backend worker started");
        while let Some(command) = self.command_rx.recv().await {
            self.handle_command(command).await;
        }
        info!("Backend worker stopped");
    }

    async fn handle_command(&self, command: BackendCommand) {
        match command {
            BackendCommand::ExportCalendar(request) => {
                let event_name = request.event_name.clone();
                match self.calendar.add_event(&request).await {
                    Ok(path) => {
                        debug!(event = %event_name, path = %path.display(), "Calendar exported");
                        let _ = self
                            .action_tx
                            .send(Action::CalendarExported { event_name, path });
                    }
                    Err(e) => {
                        warn!(event = %event_name, error = %e, "Calendar export failed");
                        let _ = self.action_tx.send(Action::CalendarExportFailed {
                            event_name,
                            error: e.to_string(),
                        });
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ports::mocks::MockCalendar;

    async fn run_one(calendar: Arc<dyn CalendarPort>) -> Action {
        let (command_tx, command_rx) = mpsc::unbounded_channel();
        let (action_tx, mut action_rx) = mpsc::unbounded_channel();

        command_tx
            .send(BackendCommand::ExportCalendar(CalendarRequest::new(
                "Haldi Ceremony",
                "20260214",
                "11:00 AM",
            )))
            .unwrap();
        drop(command_tx);

        Backend::new(calendar, command_rx, action_tx).run().await;
        action_rx.recv().await.unwrap()
    }

    #[tokio::test]
    async fn test_export_reports_path() {
        let calendar = Arc::new(MockCalendar::new());

        let action = run_one(calendar.clone()).await;

        match action {
            Action::CalendarExported { event_name, path } => {
                assert_eq!(event_name, "Haldi Ceremony");
                assert_eq!(path, PathBuf::from("Haldi Ceremony.ics"));
            }
            other => panic!("unexpected action: {other:?}"),
        }
        assert_eq!(calendar.requests.lock().await.len(), 1);
    }

    #[tokio::test]
    async fn test_export_failure_reported() {
        let action = run_one(Arc::new(MockCalendar::failing())).await;

        assert!(matches!(
            action,
            Action::CalendarExportFailed { ref event_name, .. } if event_name == "Haldi Ceremony"
        ));
    }
}
