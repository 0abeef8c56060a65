use serde::{ Deserialize, Serialize };

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Room {
    pub id: String,
    pub title: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    #[serde(default)]
    pub text: String,
}

/// Envelope used by every Webex list endpoint.
#[derive(Debug, Deserialize)]
pub struct ItemList<T> {
    pub items: Vec<T>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PostMessage<'a> {
    pub room_id: &'a str,
    pub text: &'a str,
}
