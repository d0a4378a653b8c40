use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Widget, Wrap},
};
use unicode_width::UnicodeWidthStr;

use crate::domain::{Acknowledgment, AcknowledgmentLevel};
use crate::presentation::theme::Theme;

/// Toast drawn in the top right corner.
pub struct NotificationPopup<'a> {
    acknowledgment: &'a Acknowledgment,
    theme: &'a Theme,
}

impl<'a> NotificationPopup<'a> {
    #[must_use]
    pub fn new(acknowledgment: &'a Acknowledgment, theme: &'a Theme) -> Self {
        Self {
            acknowledgment,
            theme,
        }
    }
}

impl Widget for NotificationPopup<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let title = format!(" {} ", self.acknowledgment.title);
        let message = &self.acknowledgment.message;

        let message_width = u16::try_from(message.width()).unwrap_or(u16::MAX);
        let title_width = u16::try_from(title.width()).unwrap_or(0);

        let max_popup_width = 60.min(area.width.saturating_sub(2));
        let width = message_width
            .max(title_width)
            .saturating_add(4)
            .min(max_popup_width);

        let inner_width = width.saturating_sub(2).max(1);
        let lines = message_width.div_ceil(inner_width);
        let height = lines.saturating_add(2).clamp(3, 10);

        let x = area.x + area.width.saturating_sub(width).saturating_sub(2);
        let y = area.y + 2;
        let popup_area = area.intersection(Rect::new(x, y, width, height));
        if popup_area.area() == 0 {
            return;
        }

        let color = match self.acknowledgment.level {
            AcknowledgmentLevel::Info => self.theme.accent,
            AcknowledgmentLevel::Warn => Color::Yellow,
            AcknowledgmentLevel::Error => Color::Red,
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .title(title)
            .style(Style::default().fg(color));

        let para = Paragraph::new(message.as_str())
            .block(block)
            .wrap(Wrap { trim: true })
            .style(Style::default().add_modifier(Modifier::BOLD));

        Clear.render(popup_area, buf);
        para.render(popup_area, buf);
    }
}
