//! Slot extraction from guest utterances
//!
//! Only the room number is extracted today. Patterns are compiled once using
//! `once_cell::sync::Lazy`.

use once_cell::sync::Lazy;
use regex::Regex;

/// "room 204", "rm204", "Room  12"
static ROOM_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)(room|rm)\s*(\d+)").unwrap());

/// Placeholder spoken when no room number was given
pub const UNKNOWN_ROOM: &str = "your room";

/// Extract the first room number mentioned in `text`.
///
/// Matching is case-insensitive; the returned value is the digits only.
pub fn extract_room_number(text: &str) -> Option<String> {
    ROOM_PATTERN
        .captures(text)
        .and_then(|caps| caps.get(2))
        .map(|m| m.as_str().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_room_variants() {
        assert_eq!(extract_room_number("fresh towels for room 204").as_deref(), Some("204"));
        assert_eq!(extract_room_number("RM12 needs help").as_deref(), Some("12"));
        assert_eq!(extract_room_number("Room   7, please").as_deref(), Some("7"));
    }

    #[test]
    fn test_first_match_wins() {
        assert_eq!(
            extract_room_number("move me from room 101 to room 202").as_deref(),
            Some("101")
        );
    }

    #[test]
    fn test_no_room() {
        assert!(extract_room_number("can I get some towels").is_none());
        assert!(extract_room_number("room service please").is_none());
    }

    #[test]
    fn test_substring_match() {
        // "bathroom 5" still contains "room 5"
        assert_eq!(extract_room_number("the bathroom 5 light").as_deref(), Some("5"));
    }
}
