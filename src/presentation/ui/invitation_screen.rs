use std::time::Duration;

use crossterm::event::KeyEvent;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, StatefulWidget, Widget, Wrap},
};
use tachyonfx::{Effect, Interpolation, fx};
use tracing::debug;

use crate::application::dto::PageCommand;
use crate::domain::Acknowledgment;
use crate::domain::entities::{EventDescriptor, EventId, Invitation, RsvpResponse, RsvpStatus};
use crate::domain::keybinding::{Action, Keybind};
use crate::presentation::commands::{CommandRegistry, HasCommands};
use crate::presentation::theme::Theme;
use crate::presentation::ui::notification_popup::NotificationPopup;
use crate::presentation::ui::utils::centered_rect;
use crate::presentation::widgets::{
    EventControl, EventIntent, EventSection, FooterBar, FooterBarStyle, HeaderBar,
    HeaderBarStyle,
};

const REVEAL_BASE_MS: u32 = 400;

/// Outcome of a key press on the invitation screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InvitationKeyResult {
    Quit,
    Command(PageCommand),
    Consumed,
    Ignored,
}

/// Navigation state of the invitation page. RSVP state lives in the controller.
pub struct InvitationScreenState {
    invitation: Invitation,
    focused_event: EventId,
    focused_control: usize,
    show_help: bool,
    registry: CommandRegistry,
    theme: Theme,
    animations: bool,
    reveal: Option<Effect>,
    pending_duration: Duration,
}

impl InvitationScreenState {
    #[must_use]
    pub fn new(invitation: Invitation, registry: CommandRegistry, theme: Theme) -> Self {
        let mut state = Self {
            invitation,
            focused_event: EventId::Haldi,
            focused_control: 0,
            show_help: false,
            registry,
            theme,
            animations: true,
            reveal: None,
            pending_duration: Duration::ZERO,
        };
        state.start_reveal();
        state
    }

    #[must_use]
    pub fn with_animations(mut self, enabled: bool) -> Self {
        self.animations = enabled;
        if !enabled {
            self.reveal = None;
        }
        self
    }

    #[must_use]
    pub const fn focused_event(&self) -> EventId {
        self.focused_event
    }

    #[must_use]
    pub const fn focused_control(&self) -> usize {
        self.focused_control
    }

    #[must_use]
    pub const fn show_help(&self) -> bool {
        self.show_help
    }

    fn descriptor(&self) -> Option<&EventDescriptor> {
        self.invitation.event(self.focused_event)
    }

    pub fn tick(&mut self, duration: Duration) {
        if self.reveal.is_some() {
            self.pending_duration = self.pending_duration.saturating_add(duration);
        }
    }

    #[must_use]
    pub const fn is_animating(&self) -> bool {
        self.reveal.is_some()
    }

    fn start_reveal(&mut self) {
        if !self.animations {
            return;
        }
        let delay_ms = self.descriptor().map_or(0.0, |d| d.delay_secs() * 1000.0);
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let duration_ms = REVEAL_BASE_MS + delay_ms.max(0.0) as u32;
        self.reveal = Some(fx::coalesce((duration_ms, Interpolation::CircOut)));
        self.pending_duration = Duration::ZERO;
    }

    fn focus_event(&mut self, event: EventId) {
        if event != self.focused_event {
            debug!(event = %event, "Focus event");
            self.focused_event = event;
            self.focused_control = 0;
            self.start_reveal();
        }
    }

    /// Maps a key to a page command for the focused event.
    ///
    /// `status` is the current RSVP status of the focused event.
    pub fn handle_key(&mut self, key: KeyEvent, status: RsvpStatus) -> InvitationKeyResult {
        let Some(action) = self.registry.find_action(key) else {
            return InvitationKeyResult::Ignored;
        };

        if self.show_help {
            return match action {
                Action::Quit => InvitationKeyResult::Quit,
                Action::ToggleHelp | Action::Cancel => {
                    self.show_help = false;
                    InvitationKeyResult::Consumed
                }
                _ => InvitationKeyResult::Consumed,
            };
        }

        let controls = EventControl::available(status);
        self.focused_control = self.focused_control.min(controls.len() - 1);

        match action {
            Action::Quit | Action::Cancel => InvitationKeyResult::Quit,
            Action::ToggleHelp => {
                self.show_help = true;
                InvitationKeyResult::Consumed
            }
            Action::NextEvent | Action::PreviousEvent => {
                self.focus_event(self.focused_event.other());
                InvitationKeyResult::Consumed
            }
            Action::NavigateUp => {
                self.focused_control = self.focused_control.saturating_sub(1);
                InvitationKeyResult::Consumed
            }
            Action::NavigateDown => {
                self.focused_control = (self.focused_control + 1).min(controls.len() - 1);
                InvitationKeyResult::Consumed
            }
            Action::Select => self.intent_result(controls[self.focused_control].activate()),
            Action::RespondAttending | Action::RespondDeclined => {
                if !status.is_unset() {
                    return InvitationKeyResult::Consumed;
                }
                let response = if action == Action::RespondAttending {
                    RsvpResponse::Attending
                } else {
                    RsvpResponse::UnableToAttend
                };
                self.intent_result(EventIntent::Rsvp(response))
            }
            Action::AddToCalendar => self.intent_result(EventIntent::AddToCalendar),
            Action::GetDirections => self.intent_result(EventIntent::GetDirections),
            Action::DownloadInvitation => {
                InvitationKeyResult::Command(PageCommand::DownloadInvitation)
            }
        }
    }

    fn intent_result(&mut self, intent: EventIntent) -> InvitationKeyResult {
        match self.command_for(intent) {
            Some(command) => {
                if matches!(intent, EventIntent::Rsvp(_)) {
                    self.focused_control = 0;
                }
                InvitationKeyResult::Command(command)
            }
            None => InvitationKeyResult::Consumed,
        }
    }

    /// Binds an intent from the focused section to its event.
    #[must_use]
    pub fn command_for(&self, intent: EventIntent) -> Option<PageCommand> {
        let descriptor = self.descriptor()?;

        Some(match intent {
            EventIntent::Rsvp(response) => PageCommand::RecordRsvp {
                event: descriptor.id(),
                response,
            },
            EventIntent::AddToCalendar => PageCommand::AddToCalendar {
                event_name: descriptor.title().to_string(),
                date: descriptor.calendar().date.clone(),
                time: descriptor.calendar().time.clone(),
                location: Some(descriptor.address().to_string()),
            },
            EventIntent::GetDirections => PageCommand::OpenDirections {
                address: descriptor.address().to_string(),
            },
        })
    }
}

impl HasCommands for InvitationScreenState {
    fn get_commands(&self, registry: &CommandRegistry) -> Vec<Keybind> {
        let mut commands = Vec::new();
        let mut add = |action: Action, label: &'static str, visible: bool| {
            if let Some(key) = registry.get(action) {
                let bind = Keybind::new(key, action, label);
                commands.push(if visible { bind } else { bind.hidden() });
            }
        };

        add(Action::NextEvent, "Event", true);
        add(Action::PreviousEvent, "Previous", false);
        add(Action::NavigateUp, "Up", false);
        add(Action::NavigateDown, "Move", true);
        add(Action::Select, "Select", true);
        add(Action::RespondAttending, "Attend", true);
        add(Action::RespondDeclined, "Decline", true);
        add(Action::AddToCalendar, "Calendar", true);
        add(Action::GetDirections, "Directions", true);
        add(Action::DownloadInvitation, "Card", false);
        add(Action::ToggleHelp, "Help", true);
        add(Action::Quit, "Quit", true);

        commands
    }
}

/// The invitation page.
pub struct InvitationScreen<'a> {
    statuses: [(EventId, RsvpStatus); 2],
    notification: Option<&'a Acknowledgment>,
}

impl<'a> InvitationScreen<'a> {
    #[must_use]
    pub const fn new(statuses: [(EventId, RsvpStatus); 2]) -> Self {
        Self {
            statuses,
            notification: None,
        }
    }

    #[must_use]
    pub const fn notification(mut self, notification: Option<&'a Acknowledgment>) -> Self {
        self.notification = notification;
        self
    }

    fn status(&self, event: EventId) -> RsvpStatus {
        self.statuses
            .iter()
            .find(|(id, _)| *id == event)
            .map_or(RsvpStatus::Unset, |(_, status)| *status)
    }

    fn render_hero(invitation: &Invitation, theme: &Theme, area: Rect, buf: &mut Buffer) {
        let accent = Style::default().fg(theme.accent);
        let lines = vec![
            Line::from(Span::styled(
                invitation.invitation_line.as_str(),
                Style::default().add_modifier(Modifier::ITALIC),
            )),
            Line::from(Span::styled(
                invitation.jubilee_line.as_str(),
                accent.add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                invitation.hosts.as_str(),
                accent.add_modifier(Modifier::BOLD),
            )),
            Line::from(invitation.occasion.as_str()),
        ];

        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .render(area, buf);
    }

    fn render_tabs(&self, state: &InvitationScreenState, area: Rect, buf: &mut Buffer) {
        let mut spans = Vec::new();
        for (i, descriptor) in state.invitation.events().iter().enumerate() {
            if i > 0 {
                spans.push(Span::styled("  │  ", state.theme.dimmed_style));
            }
            let palette = state.theme.palette(descriptor.color());
            let style = if descriptor.id() == state.focused_event {
                palette.focused_control_style
            } else {
                palette.title_style
            };
            let status = self.status(descriptor.id());
            let mark = if status.is_unset() { "" } else { " ✓" };
            spans.push(Span::styled(
                format!(
                    " {} {}{mark} ",
                    descriptor.icon().glyph(),
                    descriptor.title()
                ),
                style,
            ));
        }

        Paragraph::new(Line::from(spans))
            .alignment(Alignment::Center)
            .render(area, buf);
    }

    fn render_closing(invitation: &Invitation, theme: &Theme, area: Rect, buf: &mut Buffer) {
        let lines = vec![
            Line::from(Span::styled(
                invitation.blessing.as_str(),
                Style::default().add_modifier(Modifier::ITALIC),
            )),
            Line::from(invitation.closing.as_str()),
            Line::from(Span::styled(
                invitation.quote.as_str(),
                Style::default().fg(theme.accent),
            )),
            Line::from(Span::styled(
                invitation.compliments.as_str(),
                theme.dimmed_style,
            )),
        ];

        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .render(area, buf);
    }

    fn render_help(state: &InvitationScreenState, area: Rect, buf: &mut Buffer) {
        let commands = state.get_commands(&state.registry);
        let mut lines: Vec<Line> = commands
            .iter()
            .map(|bind| {
                Line::from(vec![
                    Span::styled(
                        format!("{:>8}", FooterBar::format_key(&bind.key)),
                        Style::default()
                            .fg(state.theme.accent)
                            .add_modifier(Modifier::BOLD),
                    ),
                    Span::raw("  "),
                    Span::raw(bind.label.to_string()),
                ])
            })
            .collect();
        lines.push(Line::default());
        lines.push(Line::from(Span::styled(
            "Press ? or Esc to close",
            state.theme.dimmed_style,
        )));

        let height = u16::try_from(lines.len()).unwrap_or(u16::MAX).saturating_add(2);
        let popup = centered_rect(36, height, area);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .title(" Keys ")
            .border_style(Style::default().fg(state.theme.accent));

        Clear.render(popup, buf);
        Paragraph::new(lines).block(block).render(popup, buf);
    }
}

impl StatefulWidget for InvitationScreen<'_> {
    type State = InvitationScreenState;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        let [header, hero, tabs, section, closing, footer] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(5),
            Constraint::Length(1),
            Constraint::Min(12),
            Constraint::Length(4),
            Constraint::Length(1),
        ])
        .areas(area);

        HeaderBar::new(crate::NAME, crate::VERSION)
            .statuses(self.statuses)
            .style(HeaderBarStyle::from_theme(&state.theme))
            .render(header, buf);

        Self::render_hero(&state.invitation, &state.theme, hero, buf);
        self.render_tabs(state, tabs, buf);

        let status = self.status(state.focused_event);
        if let Some(descriptor) = state.descriptor() {
            let palette = state.theme.palette(descriptor.color());
            EventSection::new(descriptor, status, palette)
                .focused(state.focused_control)
                .render(section, buf);
        }

        let duration = state.pending_duration;
        state.pending_duration = Duration::ZERO;
        if let Some(effect) = state.reveal.as_mut()
            && effect.process(duration.into(), buf, section).is_some()
        {
            state.reveal = None;
        }

        Self::render_closing(&state.invitation, &state.theme, closing, buf);

        let commands = state.get_commands(&state.registry);
        let responded = self
            .statuses
            .iter()
            .filter(|(_, status)| !status.is_unset())
            .count();
        let info = format!("{responded}/{} responded ", self.statuses.len());
        FooterBar::new(&commands)
            .context(state.focused_event.as_str())
            .right_info(Some(info.as_str()))
            .style(FooterBarStyle::from_theme(&state.theme))
            .render(footer, buf);

        if state.show_help {
            Self::render_help(state, area, buf);
        }

        if let Some(notification) = self.notification {
            NotificationPopup::new(notification, &state.theme).render(area, buf);
        }
    }
}
