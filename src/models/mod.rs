pub mod geocode;
pub mod pass;
pub mod webex;

pub use geocode::Location;
pub use pass::PassPrediction;
pub use webex::{ Message, Room };
