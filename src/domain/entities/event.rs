//! Invitation event entities.

use serde::{Deserialize, Serialize};

/// Identifier of one of the two invitation events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventId {
    /// Afternoon haldi ceremony.
    Haldi,
    /// Evening anniversary celebration.
    Main,
}

impl EventId {
    /// Both events in page order.
    pub const ALL: [Self; 2] = [Self::Haldi, Self::Main];

    /// Returns the tag used in logs and configuration.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Haldi => "haldi",
            Self::Main => "main",
        }
    }

    /// Returns the name used when acknowledging an RSVP for this event.
    #[must_use]
    pub const fn acknowledgment_label(self) -> &'static str {
        match self {
            Self::Haldi => "Haldi Ceremony",
            Self::Main => "Main Function",
        }
    }

    /// Returns the other event.
    #[must_use]
    pub const fn other(self) -> Self {
        match self {
            Self::Haldi => Self::Main,
            Self::Main => Self::Haldi,
        }
    }
}

impl std::fmt::Display for EventId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Color scheme tag of an event section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorTheme {
    /// Yellow and amber hues.
    Yellow,
    /// Purple and indigo hues.
    Purple,
}

/// Icon tag of an event section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventIcon {
    /// Daytime event.
    Sun,
    /// Evening event.
    Moon,
}

impl EventIcon {
    /// Returns the glyph drawn for the icon.
    #[must_use]
    pub const fn glyph(self) -> &'static str {
        match self {
            Self::Sun => "☀",
            Self::Moon => "☾",
        }
    }
}

/// Date and time handed to the calendar action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarSlot {
    /// Compact date, `YYYYMMDD`.
    pub date: String,
    /// Twelve hour clock time, e.g. `7:00 PM`.
    pub time: String,
}

impl CalendarSlot {
    /// Creates a calendar slot.
    #[must_use]
    pub fn new(date: impl Into<String>, time: impl Into<String>) -> Self {
        Self {
            date: date.into(),
            time: time.into(),
        }
    }
}

/// Static display metadata for one event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventDescriptor {
    id: EventId,
    title: String,
    subtitle: String,
    date: String,
    time: String,
    venue: String,
    address: String,
    color: ColorTheme,
    icon: EventIcon,
    delay_secs: f32,
    image: Option<String>,
    calendar: CalendarSlot,
}

impl EventDescriptor {
    /// Creates a descriptor with the required fields.
    #[must_use]
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: EventId,
        title: impl Into<String>,
        subtitle: impl Into<String>,
        date: impl Into<String>,
        time: impl Into<String>,
        venue: impl Into<String>,
        address: impl Into<String>,
        calendar: CalendarSlot,
    ) -> Self {
        let (color, icon) = match id {
            EventId::Haldi => (ColorTheme::Yellow, EventIcon::Sun),
            EventId::Main => (ColorTheme::Purple, EventIcon::Moon),
        };

        Self {
            id,
            title: title.into(),
            subtitle: subtitle.into(),
            date: date.into(),
            time: time.into(),
            venue: venue.into(),
            address: address.into(),
            color,
            icon,
            delay_secs: 0.0,
            image: None,
            calendar,
        }
    }

    /// Sets the color theme.
    #[must_use]
    pub const fn with_color(mut self, color: ColorTheme) -> Self {
        self.color = color;
        self
    }

    /// Sets the icon.
    #[must_use]
    pub const fn with_icon(mut self, icon: EventIcon) -> Self {
        self.icon = icon;
        self
    }

    /// Sets the entrance delay in seconds.
    #[must_use]
    pub const fn with_delay(mut self, delay_secs: f32) -> Self {
        self.delay_secs = delay_secs;
        self
    }

    /// Sets the image reference.
    #[must_use]
    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = Some(image.into());
        self
    }

    #[must_use]
    pub const fn id(&self) -> EventId {
        self.id
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn subtitle(&self) -> &str {
        &self.subtitle
    }

    #[must_use]
    pub fn date(&self) -> &str {
        &self.date
    }

    #[must_use]
    pub fn time(&self) -> &str {
        &self.time
    }

    #[must_use]
    pub fn venue(&self) -> &str {
        &self.venue
    }

    #[must_use]
    pub fn address(&self) -> &str {
        &self.address
    }

    #[must_use]
    pub const fn color(&self) -> ColorTheme {
        self.color
    }

    #[must_use]
    pub const fn icon(&self) -> EventIcon {
        self.icon
    }

    /// Returns the entrance delay in seconds. Cosmetic only.
    #[must_use]
    pub const fn delay_secs(&self) -> f32 {
        self.delay_secs
    }

    /// Returns the opaque image reference, if any.
    #[must_use]
    pub fn image(&self) -> Option<&str> {
        self.image.as_deref()
    }

    #[must_use]
    pub const fn calendar(&self) -> &CalendarSlot {
        &self.calendar
    }
}
