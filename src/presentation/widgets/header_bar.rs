use crate::domain::entities::{EventId, RsvpState, RsvpStatus};
use crate::presentation::theme::Theme;
use crate::presentation::theme::adapter::ColorConverter;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};
use unicode_width::UnicodeWidthStr;

trait RsvpStateExt {
    fn indicator(self) -> &'static str;
}

impl RsvpStateExt for RsvpState {
    fn indicator(self) -> &'static str {
        match self {
            Self::Unset => "○",
            Self::RespondedAttending => "●",
            Self::RespondedDeclined => "✗",
        }
    }
}

pub struct HeaderBarStyle {
    pub background: Style,
    pub app_name: Style,
    pub version: Style,
    pub status_unset: Style,
    pub status_attending: Style,
    pub status_declined: Style,
}

impl HeaderBarStyle {
    #[must_use]
    pub fn from_theme(theme: &Theme) -> Self {
        let version_bg = ColorConverter::shade(theme.accent, 0.08, 0.5);

        Self {
            app_name: Style::default()
                .bg(theme.accent)
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
            version: Style::default().bg(version_bg).fg(Color::White),
            status_unset: Style::default().bg(version_bg).fg(theme.accent),
            ..Self::default()
        }
    }
}

impl Default for HeaderBarStyle {
    fn default() -> Self {
        Self {
            background: Style::default(),
            app_name: Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
            version: Style::default().fg(Color::DarkGray),
            status_unset: Style::default().fg(Color::Yellow),
            status_attending: Style::default()
                .bg(Color::Green)
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
            status_declined: Style::default()
                .bg(Color::Red)
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        }
    }
}

/// Top bar with the app name and the RSVP summary of both events.
pub struct HeaderBar<'a> {
    app_name: &'a str,
    version: &'a str,
    statuses: [(EventId, RsvpStatus); 2],
    style: HeaderBarStyle,
}

impl<'a> HeaderBar<'a> {
    #[must_use]
    pub fn new(app_name: &'a str, version: &'a str) -> Self {
        Self {
            app_name,
            version,
            statuses: EventId::ALL.map(|id| (id, RsvpStatus::Unset)),
            style: HeaderBarStyle::default(),
        }
    }

    #[must_use]
    pub const fn statuses(mut self, statuses: [(EventId, RsvpStatus); 2]) -> Self {
        self.statuses = statuses;
        self
    }

    #[must_use]
    pub const fn style(mut self, style: HeaderBarStyle) -> Self {
        self.style = style;
        self
    }

    const fn status_style(&self, state: RsvpState) -> Style {
        match state {
            RsvpState::Unset => self.style.status_unset,
            RsvpState::RespondedAttending => self.style.status_attending,
            RsvpState::RespondedDeclined => self.style.status_declined,
        }
    }

    #[allow(clippy::cast_possible_truncation)]
    fn build_status_spans(&self) -> (Vec<Span<'static>>, u16) {
        let mut spans = Vec::new();
        let mut width = 0;

        for (i, (id, status)) in self.statuses.iter().enumerate() {
            if i > 0 {
                spans.push(Span::raw(" "));
                width += 1;
            }
            let state = status.state();
            let text = format!(
                " {} {}: {} ",
                state.indicator(),
                id.acknowledgment_label(),
                status
            );
            width += text.width() as u16;
            spans.push(Span::styled(text, self.status_style(state)));
        }

        (spans, width)
    }
}

impl Widget for HeaderBar<'_> {
    #[allow(clippy::cast_possible_truncation)]
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 || area.width == 0 {
            return;
        }

        for x in area.left()..area.right() {
            buf[(x, area.y)]
                .set_char(' ')
                .set_style(self.style.background);
        }

        let name = format!(" {} ", self.app_name.to_uppercase());
        let version = format!(" v{} ", self.version);
        let left_width = (name.width() + 1 + version.width()) as u16;

        let left_line = Line::from(vec![
            Span::styled(name, self.style.app_name),
            Span::raw(" "),
            Span::styled(version, self.style.version),
        ]);
        let left_area = Rect::new(area.x, area.y, left_width.min(area.width), 1);
        Paragraph::new(left_line).render(left_area, buf);

        let (status_spans, status_width) = self.build_status_spans();

        if status_width < area.width.saturating_sub(left_width) {
            let right_x = area.right().saturating_sub(status_width);
            let right_area = Rect::new(right_x, area.y, status_width, 1);
            Paragraph::new(Line::from(status_spans)).render(right_area, buf);
        }
    }
}
