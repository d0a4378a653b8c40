//! ICS generation for calendar requests.

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Utc};
use icalendar::{Calendar, Component, EventLike};

use crate::domain::CalendarRequest;
use crate::domain::errors::IntegrationError;

const PRODID: &str = "PRODID:-//jubilee//invitation//EN";

/// Parses a compact `YYYYMMDD` date and a twelve hour `H:MM AM` time.
///
/// # Errors
/// Returns error if either part does not parse.
pub fn parse_slot(date: &str, time: &str) -> Result<NaiveDateTime, IntegrationError> {
    let day = NaiveDate::parse_from_str(date.trim(), "%Y%m%d").map_err(|e| {
        IntegrationError::InvalidDate {
            value: date.to_string(),
            reason: e.to_string(),
        }
    })?;

    let clock = NaiveTime::parse_from_str(time.trim(), "%I:%M %p").map_err(|e| {
        IntegrationError::InvalidTime {
            value: time.to_string(),
            reason: e.to_string(),
        }
    })?;

    Ok(day.and_time(clock))
}

/// Generates `.ics` content for `request`.
///
/// The start is a floating local time: the venue's wall clock.
///
/// # Errors
/// Returns error if the request's date or time does not parse.
pub fn generate_ics(
    request: &CalendarRequest,
    uid: &str,
    stamp: DateTime<Utc>,
) -> Result<String, IntegrationError> {
    let start = parse_slot(&request.date, &request.time)?;

    let mut event = icalendar::Event::new();
    event.uid(uid);
    event.summary(&request.event_name);
    event.description(&request.details);
    event.add_property("DTSTAMP", stamp.format("%Y%m%dT%H%M%SZ").to_string());
    event.add_property("DTSTART", start.format("%Y%m%dT%H%M%S").to_string());

    if let Some(location) = &request.location {
        event.location(location);
    }

    let mut calendar = Calendar::new();
    calendar.push(event.done());
    let calendar = calendar.done();

    Ok(tidy(&calendar.to_string()))
}

/// Replaces the library PRODID and drops the default CALSCALE line.
fn tidy(ics: &str) -> String {
    let mut result = String::with_capacity(ics.len());

    for line in ics.lines() {
        if line.starts_with("PRODID:") {
            result.push_str(PRODID);
            result.push_str("\r\n");
            continue;
        }
        if line == "CALSCALE:GREGORIAN" {
            continue;
        }
        result.push_str(line);
        result.push_str("\r\n");
    }

    result
}

/// Returns a file name for the event, e.g. `haldi-ceremony.ics`.
#[must_use]
pub fn file_name(event_name: &str) -> String {
    let slug = event_name
        .split(|c: char| !c.is_ascii_alphanumeric())
        .filter(|part| !part.is_empty())
        .map(str::to_ascii_lowercase)
        .collect::<Vec<_>>()
        .join("-");

    if slug.is_empty() {
        "event.ics".to_string()
    } else {
        format!("{slug}.ics")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use test_case::test_case;

    fn unfold(ics: &str) -> String {
        ics.replace("\r\n ", "")
    }

    fn haldi_request() -> CalendarRequest {
        CalendarRequest::new("Haldi Ceremony", "20260214", "11:00 AM")
            .with_location("Khalihan Luxury Farm Stay cafe & Restaurant")
    }

    #[test_case("20260214", "11:00 AM", 11, 0 ; "morning")]
    #[test_case("20260214", "7:00 PM", 19, 0 ; "evening_single_digit_hour")]
    #[test_case("20260214", "12:30 PM", 12, 30 ; "noon")]
    #[test_case("20260214", "12:15 AM", 0, 15 ; "midnight")]
    fn test_parse_slot(date: &str, time: &str, hour: u32, minute: u32) {
        let parsed = parse_slot(date, time).unwrap();
        let expected = NaiveDate::from_ymd_opt(2026, 2, 14)
            .unwrap()
            .and_hms_opt(hour, minute, 0)
            .unwrap();
        assert_eq!(parsed, expected);
    }

    #[test]
    fn test_parse_slot_rejects_bad_input() {
        assert!(matches!(
            parse_slot("2026-02-14", "11:00 AM"),
            Err(IntegrationError::InvalidDate { .. })
        ));
        assert!(matches!(
            parse_slot("20260214", "15:00 PM onwards"),
            Err(IntegrationError::InvalidTime { .. })
        ));
    }

    #[test]
    fn test_generate_ics_contains_event_fields() {
        let stamp = Utc.with_ymd_and_hms(2026, 1, 1, 9, 30, 0).unwrap();
        let ics = unfold(&generate_ics(&haldi_request(), "abc@jubilee", stamp).unwrap());

        assert!(ics.contains("BEGIN:VCALENDAR"));
        assert!(ics.contains("BEGIN:VEVENT"));
        assert!(ics.contains("UID:abc@jubilee"));
        assert!(ics.contains("SUMMARY:Haldi Ceremony"));
        assert!(ics.contains("DTSTART:20260214T110000"));
        assert!(ics.contains("DTSTAMP:20260101T093000Z"));
        assert!(ics.contains("LOCATION:Khalihan Luxury Farm Stay cafe & Restaurant"));
        assert!(ics.contains("DESCRIPTION:Join us for our 25th Wedding Anniversary - Haldi Ceremony"));
        assert!(ics.contains(PRODID));
        assert!(!ics.contains("CALSCALE"));
    }

    #[test]
    fn test_generate_ics_without_location() {
        let request = CalendarRequest::new("Grand Anniversary Celebration", "20260214", "7:00 PM");
        let ics = unfold(&generate_ics(&request, "x", Utc::now()).unwrap());

        assert!(ics.contains("DTSTART:20260214T190000"));
        assert!(!ics.contains("LOCATION"));
    }

    #[test]
    fn test_generate_ics_rejects_unparseable_time() {
        let request = CalendarRequest::new("Haldi Ceremony", "20260214", "noon-ish");
        assert!(generate_ics(&request, "x", Utc::now()).is_err());
    }

    #[test_case("Haldi Ceremony", "haldi-ceremony.ics" ; "spaces")]
    #[test_case("Grand Anniversary Celebration", "grand-anniversary-celebration.ics" ; "three_words")]
    #[test_case("Dinner & Dance!", "dinner-dance.ics" ; "punctuation")]
    #[test_case("???", "event.ics" ; "no_alphanumerics")]
    fn test_file_name(name: &str, expected: &str) {
        assert_eq!(file_name(name), expected);
    }
}
