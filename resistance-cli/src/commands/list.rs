use anyhow::Result;
use comfy_table::{presets::UTF8_FULL, Table};
use resistance_core::{GameConfig, GameMode, Role};

pub fn handle_modes_command(settings: &GameConfig, players: Option<usize>) -> Result<()> {
    let modes: Vec<GameMode> = settings
        .available_modes()
        .into_iter()
        .filter(|mode| players.map_or(true, |count| mode.player_count() == count))
        .collect();

    if modes.is_empty() {
        println!("No game modes found.");
        if let Some(count) = players {
            println!("Add a game mode for {} players to your settings file.", count);
        }
        return Ok(());
    }

    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_header(vec!["Name", "Players", "Fixed roles", "Wildcards", "Wildcard pool"]);

    for mode in &modes {
        table.add_row(vec![
            mode.display_name.clone(),
            mode.player_count().to_string(),
            summarize(&mode.roles),
            mode.number_of_wildcards.to_string(),
            summarize(&mode.wildcard_pool),
        ]);
    }

    println!("{}", table);
    Ok(())
}

pub fn handle_players_command(settings: &GameConfig) -> Result<()> {
    if settings.player_map.is_empty() {
        println!("No players configured.");
        println!("Add a \"PlayerMap\" of initials to names to your settings file,");
        println!("or pass full names to 'resistance deal --players'.");
        return Ok(());
    }

    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_header(vec!["Initials", "Name"]);

    for (initials, name) in settings.player_map.iter() {
        table.add_row(vec![initials, name]);
    }

    println!("{}", table);
    Ok(())
}

/// "Spy x2, Merlin" style summary, keeping first-seen order.
fn summarize(roles: &[Role]) -> String {
    if roles.is_empty() {
        return "-".to_string();
    }

    let mut counts: Vec<(&str, usize)> = Vec::new();
    for role in roles {
        match counts.iter_mut().find(|(name, _)| *name == role.display_name) {
            Some((_, count)) => *count += 1,
            None => counts.push((role.display_name.as_str(), 1)),
        }
    }

    counts
        .into_iter()
        .map(|(name, count)| {
            if count > 1 {
                format!("{} x{}", name, count)
            } else {
                name.to_string()
            }
        })
        .collect::<Vec<_>>()
        .join(", ")
}
