use ratatui::layout::{Constraint, Flex, Layout, Rect};

/// Centers a `width` x `height` box in `r`, shrinking it to fit.
#[must_use]
pub fn centered_rect(width: u16, height: u16, r: Rect) -> Rect {
    let [row] = Layout::vertical([Constraint::Length(height.min(r.height))])
        .flex(Flex::Center)
        .areas(r);
    let [area] = Layout::horizontal([Constraint::Length(width.min(r.width))])
        .flex(Flex::Center)
        .areas(row);
    area
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centered_rect() {
        let area = centered_rect(20, 10, Rect::new(0, 0, 100, 50));
        assert_eq!(area, Rect::new(40, 20, 20, 10));
    }

    #[test]
    fn test_centered_rect_shrinks_to_fit() {
        let area = centered_rect(200, 100, Rect::new(5, 5, 40, 12));
        assert_eq!(area, Rect::new(5, 5, 40, 12));
    }
}
