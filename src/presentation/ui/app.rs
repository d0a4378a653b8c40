//! Main application orchestrator.

use std::sync::Arc;
use std::time::Duration;

use crossterm::event::{EventStream, KeyEvent};
use futures_util::StreamExt;
use ratatui::{DefaultTerminal, Frame};
use tokio::sync::mpsc;
use tokio::time::interval;
use tracing::{debug, info, warn};

use crate::application::dto::PageCommand;
use crate::application::services::NotificationManager;
use crate::application::use_cases::PageController;
use crate::domain::Acknowledgment;
use crate::domain::entities::Invitation;
use crate::domain::ports::{AcknowledgmentPort, BrowserPort, CalendarPort};
use crate::infrastructure::AppConfig;
use crate::presentation::commands::CommandRegistry;
use crate::presentation::events::{EventHandler, EventResult};
use crate::presentation::theme::Theme;
use crate::presentation::ui::backend::{Action, Backend, BackendCommand};
use crate::presentation::ui::{
    InvitationKeyResult, InvitationScreen, InvitationScreenState, SplashScreen,
};

const ANIMATION_TICK_RATE: Duration = Duration::from_millis(33);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum AppState {
    Splash,
    Invitation,
    Exiting,
}

/// Adapters the app talks to.
pub struct AppServices {
    pub browser: Arc<dyn BrowserPort>,
    pub calendar: Option<Arc<dyn CalendarPort>>,
    pub desktop: Arc<dyn AcknowledgmentPort>,
}

pub struct App {
    state: AppState,
    splash: Option<SplashScreen>,
    screen: InvitationScreenState,
    controller: PageController,
    notifications: NotificationManager,
    desktop: Arc<dyn AcknowledgmentPort>,
    backend: Option<Backend>,
    backend_tx: Option<mpsc::UnboundedSender<BackendCommand>>,
    // Held so the action channel stays open without a backend.
    _action_tx: mpsc::UnboundedSender<Action>,
    action_rx: mpsc::UnboundedReceiver<Action>,
}

impl App {
    #[must_use]
    pub fn new(config: &AppConfig, services: AppServices) -> Self {
        let invitation = Invitation::silver_jubilee();
        let theme = Theme::new(&config.theme.accent_color);
        let registry = CommandRegistry::new().with_overrides(&config.keybindings);
        let animations = config.ui.enable_animations;

        let (action_tx, action_rx) = mpsc::unbounded_channel();
        let (backend, backend_tx) = match services.calendar {
            Some(calendar) => {
                let (command_tx, command_rx) = mpsc::unbounded_channel();
                let backend = Backend::new(calendar, command_rx, action_tx.clone());
                (Some(backend), Some(command_tx))
            }
            None => (None, None),
        };

        let controller =
            PageController::new(services.browser).with_calendar_export(backend_tx.is_some());

        let notifications =
            NotificationManager::new(Duration::from_secs(config.ui.notification_duration))
                .with_info_enabled(config.notifications.enabled);

        let (state, splash) = if config.ui.show_splash && animations {
            (
                AppState::Splash,
                Some(SplashScreen::new(&invitation, theme.accent)),
            )
        } else {
            (AppState::Invitation, None)
        };

        Self {
            state,
            splash,
            screen: InvitationScreenState::new(invitation, registry, theme)
                .with_animations(animations),
            controller,
            notifications,
            desktop: services.desktop,
            backend,
            backend_tx,
            _action_tx: action_tx,
            action_rx,
        }
    }

    /// # Errors
    /// Returns error if drawing to the terminal fails.
    pub async fn run(mut self, terminal: &mut DefaultTerminal) -> color_eyre::Result<()> {
        if let Some(backend) = self.backend.take() {
            tokio::spawn(backend.run());
        }

        self.run_event_loop(terminal).await?;

        info!(responses = ?self.controller.snapshot(), "Application exiting normally");
        Ok(())
    }

    async fn run_event_loop(&mut self, terminal: &mut DefaultTerminal) -> color_eyre::Result<()> {
        let mut terminal_events = EventStream::new();
        let mut animation_interval = interval(ANIMATION_TICK_RATE);

        terminal.draw(|frame| self.render(frame))?;

        while self.state != AppState::Exiting {
            tokio::select! {
                Some(action) = self.action_rx.recv() => {
                    self.handle_action(action);
                    terminal.draw(|frame| self.render(frame))?;
                }

                _ = animation_interval.tick() => {
                    if self.tick(ANIMATION_TICK_RATE) {
                        terminal.draw(|frame| self.render(frame))?;
                    }
                }

                Some(Ok(event)) = terminal_events.next() => {
                    if let Some(key) = EventHandler::key_press(&event)
                        && self.handle_key(key) == EventResult::Exit
                    {
                        self.state = AppState::Exiting;
                    }
                    terminal.draw(|frame| self.render(frame))?;
                }
            }
        }

        Ok(())
    }

    /// Advances animations and toast expiry. Returns whether a redraw is needed.
    fn tick(&mut self, elapsed: Duration) -> bool {
        let had_notification = self.notifications.has_notifications();
        self.notifications.tick();

        if let Some(splash) = &mut self.splash {
            splash.tick(elapsed);
            if splash.state.animation_complete {
                self.finish_splash();
            }
            return true;
        }

        self.screen.tick(elapsed);
        had_notification || self.screen.is_animating()
    }

    fn finish_splash(&mut self) {
        debug!("Splash finished");
        self.splash = None;
        if self.state == AppState::Splash {
            self.state = AppState::Invitation;
        }
    }

    fn render(&mut self, frame: &mut Frame) {
        let area = frame.area();
        if let Some(splash) = &mut self.splash {
            frame.render_widget(splash, area);
            return;
        }

        let screen = InvitationScreen::new(self.controller.snapshot())
            .notification(self.notifications.current());
        frame.render_stateful_widget(screen, area, &mut self.screen);
    }

    fn handle_key(&mut self, key: KeyEvent) -> EventResult {
        if EventHandler::is_force_quit(&key) {
            return EventResult::Exit;
        }

        if let Some(splash) = &mut self.splash {
            splash.skip();
            self.finish_splash();
            return EventResult::Consumed;
        }

        let status = self.controller.status(self.screen.focused_event());
        match self.screen.handle_key(key, status) {
            InvitationKeyResult::Quit => EventResult::Exit,
            InvitationKeyResult::Command(command) => {
                self.dispatch(command);
                EventResult::Consumed
            }
            InvitationKeyResult::Consumed => EventResult::Consumed,
            InvitationKeyResult::Ignored => EventResult::Continue,
        }
    }

    fn dispatch(&mut self, command: PageCommand) {
        let outcome = self.controller.dispatch(command);

        if let Some(acknowledgment) = outcome.acknowledgment {
            self.acknowledge(acknowledgment);
        }

        if let Some(request) = outcome.calendar_request {
            let sent = self
                .backend_tx
                .as_ref()
                .is_some_and(|tx| tx.send(BackendCommand::ExportCalendar(request)).is_ok());
            if !sent {
                warn!("Calendar worker unavailable");
                self.notifications
                    .warn("Calendar", "Calendar export is unavailable");
            }
        }
    }

    fn acknowledge(&mut self, acknowledgment: Acknowledgment) {
        self.desktop.acknowledge(&acknowledgment);
        self.notifications.push(acknowledgment);
    }

    fn handle_action(&mut self, action: Action) {
        match action {
            Action::CalendarExported { event_name, path } => {
                self.notifications.info(
                    "Calendar",
                    format!("Saved \"{event_name}\" to {}", path.display()),
                );
            }
            Action::CalendarExportFailed { event_name, error } => {
                self.notifications.warn(
                    "Calendar",
                    format!("Could not export \"{event_name}\": {error}"),
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::AcknowledgmentLevel;
    use crate::domain::entities::{EventId, RsvpResponse, RsvpStatus};
    use crate::domain::ports::mocks::{MockBrowser, MockCalendar, RecordingAcknowledgmentPort};
    use crossterm::event::{KeyCode, KeyModifiers};
    use std::path::PathBuf;

    fn config() -> AppConfig {
        let mut config = AppConfig::default();
        config.ui.show_splash = false;
        config.ui.enable_animations = false;
        config
    }

    fn app_with(
        browser: MockBrowser,
        calendar: Option<Arc<dyn CalendarPort>>,
    ) -> (App, RecordingAcknowledgmentPort) {
        let desktop = RecordingAcknowledgmentPort::new();
        let app = App::new(
            &config(),
            AppServices {
                browser: Arc::new(browser),
                calendar,
                desktop: Arc::new(desktop.clone()),
            },
        );
        (app, desktop)
    }

    fn press(app: &mut App, code: KeyCode) -> EventResult {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    #[test]
    fn test_rsvp_flow_across_both_events() {
        let (mut app, desktop) = app_with(MockBrowser::new(), None);

        press(&mut app, KeyCode::Char('a'));
        assert_eq!(
            app.controller.snapshot(),
            [
                (EventId::Haldi, RsvpStatus::Responded(RsvpResponse::Attending)),
                (EventId::Main, RsvpStatus::Unset),
            ]
        );

        press(&mut app, KeyCode::Tab);
        press(&mut app, KeyCode::Char('n'));
        assert_eq!(
            app.controller.status(EventId::Main),
            RsvpStatus::Responded(RsvpResponse::UnableToAttend)
        );
        assert_eq!(
            app.controller.status(EventId::Haldi),
            RsvpStatus::Responded(RsvpResponse::Attending)
        );

        assert_eq!(
            desktop.messages(),
            vec![
                "Thank you! Your response for Haldi Ceremony has been recorded: Attending"
                    .to_string(),
                "Thank you! Your response for Main Function has been recorded: Unable to Attend"
                    .to_string(),
            ]
        );
        assert_eq!(
            app.notifications.current().map(|n| n.message.as_str()),
            Some("Thank you! Your response for Haldi Ceremony has been recorded: Attending")
        );
    }

    #[test]
    fn test_directions_failure_queues_warning() {
        let (mut app, _) = app_with(MockBrowser::failing(), None);

        press(&mut app, KeyCode::Char('d'));

        let toast = app.notifications.current().unwrap();
        assert_eq!(toast.level, AcknowledgmentLevel::Warn);
        assert!(toast.message.contains("Khalihan Luxury Farm Stay cafe & Restaurant"));
        for id in EventId::ALL {
            assert_eq!(app.controller.status(id), RsvpStatus::Unset);
        }
    }

    #[test]
    fn test_calendar_request_sent_to_backend() {
        let calendar: Arc<dyn CalendarPort> = Arc::new(MockCalendar::new());
        let (mut app, _) = app_with(MockBrowser::new(), Some(calendar));
        let (tx, mut rx) = mpsc::unbounded_channel();
        app.backend_tx = Some(tx);

        press(&mut app, KeyCode::Char('c'));

        match rx.try_recv().unwrap() {
            BackendCommand::ExportCalendar(request) => {
                assert_eq!(request.event_name, "Haldi Ceremony");
                assert_eq!(request.time, "11:00 AM");
            }
        }
        assert_eq!(
            app.notifications.current().map(|n| n.message.as_str()),
            Some("Adding \"Haldi Ceremony\" to calendar for 20260214 at 11:00 AM")
        );
    }

    #[test]
    fn test_backend_results_become_toasts() {
        let (mut app, _) = app_with(MockBrowser::new(), None);

        app.handle_action(Action::CalendarExportFailed {
            event_name: "Haldi Ceremony".to_string(),
            error: "disk full".to_string(),
        });
        app.handle_action(Action::CalendarExported {
            event_name: "Haldi Ceremony".to_string(),
            path: PathBuf::from("/tmp/haldi-ceremony.ics"),
        });

        let toast = app.notifications.current().unwrap();
        assert_eq!(toast.level, AcknowledgmentLevel::Warn);
        assert_eq!(toast.message, "Could not export \"Haldi Ceremony\": disk full");
        assert!(app.notifications.dismiss());
        assert_eq!(
            app.notifications.current().unwrap().message,
            "Saved \"Haldi Ceremony\" to /tmp/haldi-ceremony.ics"
        );
        for id in EventId::ALL {
            assert_eq!(app.controller.status(id), RsvpStatus::Unset);
        }
    }

    #[test]
    fn test_quit_keys() {
        let (mut app, _) = app_with(MockBrowser::new(), None);

        assert_eq!(press(&mut app, KeyCode::Char('q')), EventResult::Exit);
        assert_eq!(press(&mut app, KeyCode::Esc), EventResult::Exit);
        assert_eq!(
            app.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            EventResult::Exit
        );
    }

    #[test]
    fn test_any_key_skips_splash() {
        let mut config = config();
        config.ui.show_splash = true;
        config.ui.enable_animations = true;
        let app_services = AppServices {
            browser: Arc::new(MockBrowser::new()),
            calendar: None,
            desktop: Arc::new(RecordingAcknowledgmentPort::new()),
        };
        let mut app = App::new(&config, app_services);
        assert_eq!(app.state, AppState::Splash);

        assert_eq!(press(&mut app, KeyCode::Char('a')), EventResult::Consumed);

        assert_eq!(app.state, AppState::Invitation);
        assert!(app.splash.is_none());
        assert_eq!(app.controller.status(EventId::Haldi), RsvpStatus::Unset);
    }
}
