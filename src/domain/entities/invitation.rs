//! Invitation page content.

use super::event::{CalendarSlot, ColorTheme, EventDescriptor, EventIcon, EventId};

const VENUE: &str = "Khalihan A Luxury Stay";
const ADDRESS: &str = "Khalihan Luxury Farm Stay cafe & Restaurant";
const DATE: &str = "Saturday, February 14, 2026";
const CALENDAR_DATE: &str = "20260214";

/// Static content of the invitation page.
#[derive(Debug, Clone, PartialEq)]
pub struct Invitation {
    pub hosts: String,
    pub occasion: String,
    pub invitation_line: String,
    pub jubilee_line: String,
    pub blessing: String,
    pub closing: String,
    pub quote: String,
    pub compliments: String,
    events: Vec<EventDescriptor>,
}

impl Invitation {
    /// Builds the 25th anniversary invitation.
    #[must_use]
    pub fn silver_jubilee() -> Self {
        let haldi = EventDescriptor::new(
            EventId::Haldi,
            "Haldi Ceremony",
            "An afternoon of yellow hues and joyous traditions",
            DATE,
            "15:00 PM onwards",
            VENUE,
            ADDRESS,
            CalendarSlot::new(CALENDAR_DATE, "11:00 AM"),
        )
        .with_color(ColorTheme::Yellow)
        .with_icon(EventIcon::Sun)
        .with_delay(0.0)
        .with_image("assets/haldi.png");

        let main = EventDescriptor::new(
            EventId::Main,
            "Grand Anniversary Celebration",
            "Join us for an elegant evening of dinner and dance",
            DATE,
            "7:00 PM onwards",
            VENUE,
            ADDRESS,
            CalendarSlot::new(CALENDAR_DATE, "7:00 PM"),
        )
        .with_color(ColorTheme::Purple)
        .with_icon(EventIcon::Moon)
        .with_delay(0.3)
        .with_image("assets/main-function.png");

        Self {
            hosts: "Yogesh & Veera".to_string(),
            occasion: "Celebrating their 25th Wedding Anniversary".to_string(),
            invitation_line: "You are cordially invited to celebrate".to_string(),
            jubilee_line: "our Silver Jubilee".to_string(),
            blessing: "\"With the blessings of elders and love of family, we invite you to \
                       celebrate 25 years of togetherness.\""
                .to_string(),
            closing: "Your presence will make this celebration of love and memories truly \
                      complete."
                .to_string(),
            quote: "\"Where there is love, there is life.\"".to_string(),
            compliments: "Best Compliments from Darshil".to_string(),
            events: vec![haldi, main],
        }
    }

    /// Returns the descriptors in page order.
    #[must_use]
    pub fn events(&self) -> &[EventDescriptor] {
        &self.events
    }

    /// Returns the descriptor for `id`.
    #[must_use]
    pub fn event(&self, id: EventId) -> Option<&EventDescriptor> {
        self.events.iter().find(|e| e.id() == id)
    }
}

impl Default for Invitation {
    fn default() -> Self {
        Self::silver_jubilee()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_silver_jubilee_has_both_events_in_order() {
        let invitation = Invitation::silver_jubilee();
        let ids: Vec<_> = invitation.events().iter().map(EventDescriptor::id).collect();
        assert_eq!(ids, EventId::ALL.to_vec());
    }

    #[test]
    fn test_silver_jubilee_event_details() {
        let invitation = Invitation::silver_jubilee();

        let haldi = invitation.event(EventId::Haldi).unwrap();
        assert_eq!(haldi.title(), "Haldi Ceremony");
        assert_eq!(haldi.color(), ColorTheme::Yellow);
        assert_eq!(haldi.calendar().time, "11:00 AM");

        let main = invitation.event(EventId::Main).unwrap();
        assert_eq!(main.title(), "Grand Anniversary Celebration");
        assert_eq!(main.icon(), EventIcon::Moon);
        assert_eq!(main.address(), ADDRESS);
        assert!((main.delay_secs() - 0.3).abs() < f32::EPSILON);
    }
}
