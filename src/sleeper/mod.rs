//! Sleeper fantasy football domain: upstream client, wire types and the
//! questionable-starter report built on top of them.

pub mod http;
pub mod questionable;
pub mod season;
pub mod status;
pub mod types;
pub mod validation;

pub use http::SleeperClient;
pub use questionable::find_questionable_starters;
pub use season::Season;
pub use status::filter_players_by_status;
pub use validation::{is_valid_username, validate_id, validate_username};
