use std::time::Duration;

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Paragraph, Widget},
};
use tachyonfx::{Effect, Interpolation, fx};

use crate::domain::entities::Invitation;

const HOLD: Duration = Duration::from_millis(1500);
const ORNAMENT: &str = "✦ ✧ ✦ ✧ ✦";

#[derive(Debug, Default)]
pub struct SplashState {
    pub intro_finished: bool,
    pub outro_started: bool,
    pub animation_complete: bool,
    held: Duration,
}

/// Hosts' names revealed with a coalesce effect, then dissolved.
pub struct SplashScreen {
    hosts: String,
    occasion: String,
    accent: Color,
    intro_effect: Effect,
    outro_effect: Effect,
    pub state: SplashState,
    pending_duration: Duration,
}

impl SplashScreen {
    #[must_use]
    pub fn new(invitation: &Invitation, accent: Color) -> Self {
        Self {
            hosts: invitation.hosts.clone(),
            occasion: invitation.occasion.clone(),
            accent,
            intro_effect: fx::coalesce((900, Interpolation::CircOut)),
            outro_effect: fx::dissolve((600, Interpolation::CircIn)),
            state: SplashState::default(),
            pending_duration: Duration::ZERO,
        }
    }

    pub fn tick(&mut self, duration: Duration) {
        self.pending_duration = self.pending_duration.saturating_add(duration);

        if self.state.intro_finished && !self.state.outro_started {
            self.state.held = self.state.held.saturating_add(duration);
            if self.state.held >= HOLD {
                self.state.outro_started = true;
            }
        }
    }

    /// Ends the splash at once.
    pub fn skip(&mut self) {
        self.state.intro_finished = true;
        self.state.outro_started = true;
        self.state.animation_complete = true;
    }

    fn text(&self) -> Text<'_> {
        let accent = Style::default().fg(self.accent);
        Text::from(vec![
            Line::from(Span::styled(ORNAMENT, accent)),
            Line::default(),
            Line::from(Span::styled(
                self.hosts.as_str(),
                accent.add_modifier(Modifier::BOLD),
            )),
            Line::default(),
            Line::from(self.occasion.as_str()),
            Line::default(),
            Line::from(Span::styled(ORNAMENT, accent)),
        ])
        .centered()
    }
}

impl Widget for &mut SplashScreen {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let text = self.text();

        let text_width = u16::try_from(text.width()).unwrap_or(0);
        let text_height = u16::try_from(text.height()).unwrap_or(0);

        let x = area.x + (area.width.saturating_sub(text_width)) / 2;
        let y = area.y + (area.height.saturating_sub(text_height)) / 2;
        let center_area = Rect::new(
            x,
            y,
            text_width.min(area.width),
            text_height.min(area.height),
        );

        Paragraph::new(text).render(center_area, buf);

        let duration = self.pending_duration;
        self.pending_duration = Duration::ZERO;

        if !self.state.intro_finished {
            let overflow = self.intro_effect.process(duration.into(), buf, center_area);
            if overflow.is_some() {
                self.state.intro_finished = true;
            }
        } else if self.state.outro_started && !self.state.animation_complete {
            let overflow = self.outro_effect.process(duration.into(), buf, center_area);
            if overflow.is_some() {
                self.state.animation_complete = true;
            }
        }
    }
}
