// Service exports
pub mod broadcast;
pub mod roster;

pub use broadcast::{Broadcaster, Inbox};
pub use roster::{load_roster, parse_roster, RosterError};
