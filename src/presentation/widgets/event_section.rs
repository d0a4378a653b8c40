//! Rendering of a single invitation event.
//!
//! The section is stateless: it draws an [`EventDescriptor`] together with the
//! current [`RsvpStatus`] and translates control activation into
//! [`EventIntent`] values. Recording the response is up to the caller.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Widget, Wrap},
};

use crate::domain::entities::{EventDescriptor, RsvpResponse, RsvpStatus};
use crate::presentation::theme::EventPalette;

/// An activatable control of the section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventControl {
    Attend,
    Decline,
    AddToCalendar,
    Directions,
}

const UNSET_CONTROLS: [EventControl; 4] = [
    EventControl::Attend,
    EventControl::Decline,
    EventControl::AddToCalendar,
    EventControl::Directions,
];

const RESPONDED_CONTROLS: [EventControl; 2] =
    [EventControl::AddToCalendar, EventControl::Directions];

impl EventControl {
    /// Controls offered for `status`, in display order.
    ///
    /// The two choice controls disappear once a response exists.
    #[must_use]
    pub const fn available(status: RsvpStatus) -> &'static [Self] {
        match status {
            RsvpStatus::Unset => &UNSET_CONTROLS,
            RsvpStatus::Responded(_) => &RESPONDED_CONTROLS,
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Attend => "I'll be there",
            Self::Decline => "Can't make it",
            Self::AddToCalendar => "Add to Calendar",
            Self::Directions => "Get Directions",
        }
    }

    const fn glyph(self) -> &'static str {
        match self {
            Self::Attend => "✓",
            Self::Decline => "✗",
            Self::AddToCalendar => "▣",
            Self::Directions => "➤",
        }
    }

    /// The intent produced when the control is activated.
    #[must_use]
    pub const fn activate(self) -> EventIntent {
        match self {
            Self::Attend => EventIntent::Rsvp(RsvpResponse::Attending),
            Self::Decline => EventIntent::Rsvp(RsvpResponse::UnableToAttend),
            Self::AddToCalendar => EventIntent::AddToCalendar,
            Self::Directions => EventIntent::GetDirections,
        }
    }
}

/// What the guest asked for, not yet bound to an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventIntent {
    Rsvp(RsvpResponse),
    AddToCalendar,
    GetDirections,
}

pub struct EventSection<'a> {
    descriptor: &'a EventDescriptor,
    status: RsvpStatus,
    palette: &'a EventPalette,
    focused: Option<usize>,
}

impl<'a> EventSection<'a> {
    #[must_use]
    pub const fn new(
        descriptor: &'a EventDescriptor,
        status: RsvpStatus,
        palette: &'a EventPalette,
    ) -> Self {
        Self {
            descriptor,
            status,
            palette,
            focused: None,
        }
    }

    /// Highlights the control at `index`; out of range indices clamp to the last control.
    #[must_use]
    pub const fn focused(mut self, index: usize) -> Self {
        self.focused = Some(index);
        self
    }

    fn focused_control(&self) -> Option<EventControl> {
        let controls = EventControl::available(self.status);
        self.focused.map(|i| controls[i.min(controls.len() - 1)])
    }

    fn card(&self, label: &'static str, value: &'a str) -> Paragraph<'a> {
        Paragraph::new(vec![
            Line::from(Span::styled(
                label,
                Style::default()
                    .fg(self.palette.secondary)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(value),
        ])
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .style(self.palette.card_style)
    }

    fn rsvp_lines(&self) -> Vec<Line<'static>> {
        let mut lines = Vec::new();

        match self.status.response() {
            None => {
                lines.push(Line::from(Span::styled(
                    "Will you join us?",
                    self.palette.title_style,
                )));
            }
            Some(response) => {
                lines.push(Line::from(Span::styled(
                    "Thank you for your response!",
                    self.palette.title_style,
                )));
                lines.push(Line::from(format!("You responded: {response}")));
            }
        }
        lines.push(Line::default());

        let focused = self.focused_control();
        for control in EventControl::available(self.status) {
            let is_focused = focused == Some(*control);
            let (marker, style) = if is_focused {
                ("▶", self.palette.focused_control_style)
            } else {
                (" ", self.palette.control_style)
            };
            lines.push(Line::from(vec![
                Span::styled(marker, Style::default().fg(self.palette.primary)),
                Span::raw(" "),
                Span::styled(
                    format!(" {} {} ", control.glyph(), control.label()),
                    style,
                ),
            ]));
        }

        lines
    }
}

impl Widget for EventSection<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let descriptor = self.descriptor;

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(self.palette.border_style)
            .title(Line::from(Span::styled(
                format!(" {} {} ", descriptor.icon().glyph(), descriptor.title()),
                self.palette.title_style,
            )))
            .title_alignment(Alignment::Center);

        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let image_height = u16::from(descriptor.image().is_some());
        let [subtitle_area, _, cards_area, address_area, image_area, _, rsvp_area] =
            Layout::vertical([
                Constraint::Length(2),
                Constraint::Length(1),
                Constraint::Length(3),
                Constraint::Length(1),
                Constraint::Length(image_height),
                Constraint::Length(1),
                Constraint::Min(0),
            ])
            .areas(inner);

        Paragraph::new(descriptor.subtitle())
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .style(Style::default().add_modifier(Modifier::ITALIC))
            .render(subtitle_area, buf);

        let [date_area, time_area, venue_area] = Layout::horizontal([
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
        ])
        .spacing(1)
        .areas(cards_area);

        self.card("Date", descriptor.date()).render(date_area, buf);
        self.card("Time", descriptor.time()).render(time_area, buf);
        self.card("Venue", descriptor.venue()).render(venue_area, buf);

        Paragraph::new(Line::from(vec![
            Span::styled("Address: ", Style::default().fg(self.palette.secondary)),
            Span::raw(descriptor.address()),
        ]))
        .alignment(Alignment::Center)
        .render(address_area, buf);

        if let Some(image) = descriptor.image() {
            Paragraph::new(format!("[ {image} ]"))
                .alignment(Alignment::Center)
                .style(Style::default().add_modifier(Modifier::DIM))
                .render(image_area, buf);
        }

        Paragraph::new(self.rsvp_lines())
            .alignment(Alignment::Center)
            .render(rsvp_area, buf);
    }
}
