use resistance_core::{RoleAssignment, Team};
use std::time::Duration;

pub const SLEEP: &str = "Everyone put your hands in the middle and go to sleep.";
pub const SPIES_WAKE: &str = "Spies, wake up and put your thumbs up.";
pub const SPIES_SLEEP: &str = "Spies, put your thumbs down and go to sleep.";
pub const NO_SPIES: &str = "No spies this game. Everyone stays asleep.";
pub const EVERYONE_WAKE: &str = "Everyone, wake up.";

/// Lines the moderator reads out after the deal.
pub fn night_script(assignments: &[RoleAssignment<'_>]) -> Vec<&'static str> {
    let has_spies = assignments.iter().any(|a| a.role().team == Team::Spy);

    if has_spies {
        vec![SLEEP, SPIES_WAKE, SPIES_SLEEP, EVERYONE_WAKE]
    } else {
        vec![SLEEP, NO_SPIES, EVERYONE_WAKE]
    }
}

pub async fn run_night_script(lines: &[&str], pause: Duration) {
    for (i, line) in lines.iter().enumerate() {
        if i > 0 {
            tokio::time::sleep(pause).await;
        }
        println!("{}", line);
    }
}
