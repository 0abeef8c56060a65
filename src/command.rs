/// Trigger that marks a chat message as a location query.
pub const DEFAULT_TRIGGER: char = '/';

/// Extracts the location argument of a command message.
///
/// The trigger only counts at position 0. Whatever follows it is returned untouched,
/// including surrounding whitespace or an empty string.
pub fn parse(text: &str, trigger: char) -> Option<&str> {
    text.strip_prefix(trigger)
}
