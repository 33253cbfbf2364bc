pub mod deal;
pub mod list;

pub use deal::{handle_deal_command, DealArgs};
pub use list::{handle_modes_command, handle_players_command};
