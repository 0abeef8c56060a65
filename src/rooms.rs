use crate::error::{ BotError, BotResult };
use crate::models::Room;

/// Returns the first room, in listing order, whose title contains `query`.
/// Matching is case-sensitive and ties are not disambiguated.
pub fn find_room<'a>(rooms: &'a [Room], query: &str) -> BotResult<&'a Room> {
    rooms
        .iter()
        .find(|room| room.title.contains(query))
        .ok_or_else(|| BotError::RoomNotFound { query: query.to_string() })
}
