use crate::script;
use anyhow::Result;
use clap::Args;
use comfy_table::{presets::UTF8_FULL, Table};
use dialoguer::{console::Term, Input};
use resistance_core::{
    parse_initials, GameConfig, GameMode, Player, ResistanceError, RoleAssignment,
    RoleAssignmentGenerator, Roster,
};
use std::time::Duration;

#[derive(Args, Debug)]
pub struct DealArgs {
    /// Game mode name (defaults to the first mode matching the player count)
    #[arg(short, long)]
    pub mode: Option<String>,

    /// Player initials, e.g. "AB,CD,EF" (prompts when omitted)
    #[arg(short, long)]
    pub players: Option<String>,

    /// Show every role in one table, for a moderator who is not playing
    #[arg(long, conflicts_with = "json")]
    pub reveal: bool,

    /// Print the assignments as JSON
    #[arg(long)]
    pub json: bool,

    /// Read out the night phase script after dealing
    #[arg(long)]
    pub night: bool,

    /// Seconds to pause between script lines
    #[arg(long, default_value_t = 2)]
    pub pause_secs: u64,
}

pub async fn handle_deal_command(args: DealArgs, settings: &GameConfig) -> Result<()> {
    let initials = match &args.players {
        Some(list) => parse_initials(list),
        None => prompt_roster()?,
    };

    let players = settings.player_map.resolve(&initials);
    if players.is_empty() {
        return Err(ResistanceError::NoPlayers.into());
    }

    let mode = select_game_mode(settings, args.mode.as_deref(), players.len())?;

    let mut assignments =
        RoleAssignmentGenerator::new().generate_role_assignments(&players, &mode)?;
    tracing::info!(
        "Dealt {} roles for game mode '{}'",
        assignments.len(),
        mode.display_name
    );

    // Deal order would show who holds the fixed roles; present by seat instead.
    sort_by_seat(&mut assignments, &players);

    if args.json {
        println!("{}", render_json(&assignments)?);
    } else if args.reveal {
        print_table(&mode, &assignments);
    } else {
        private_reveal(&assignments)?;
    }

    if args.night {
        let lines = script::night_script(&assignments);
        script::run_night_script(&lines, Duration::from_secs(args.pause_secs)).await;
    }

    Ok(())
}

fn select_game_mode(
    settings: &GameConfig,
    name: Option<&str>,
    player_count: usize,
) -> Result<GameMode> {
    let mode = match name {
        Some(name) => settings.game_mode(name)?.clone(),
        None => settings.game_mode_for(player_count)?,
    };
    tracing::debug!(
        "Using game mode '{}' for {} players",
        mode.display_name,
        player_count
    );
    Ok(mode)
}

fn render_json(assignments: &[RoleAssignment<'_>]) -> Result<String> {
    Ok(serde_json::to_string_pretty(assignments)?)
}

fn sort_by_seat(assignments: &mut [RoleAssignment<'_>], players: &[Player]) {
    assignments.sort_by_key(|a| {
        players
            .iter()
            .position(|p| p.id() == a.player().id())
            .unwrap_or(usize::MAX)
    });
}

fn prompt_roster() -> Result<Vec<String>> {
    println!("Please enter initials of participating players.");
    println!("One per line or a comma separated list; an empty line finishes.");

    let mut roster = Roster::new();
    loop {
        let line: String = Input::new()
            .with_prompt("Initials")
            .allow_empty(true)
            .interact_text()
            .map_err(|e| ResistanceError::dialog(e.to_string()))?;

        if !roster.push_line(&line) {
            break;
        }
    }

    Ok(roster.into_initials())
}

fn print_table(mode: &GameMode, assignments: &[RoleAssignment<'_>]) {
    println!("Game mode: {}", mode.display_name);

    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_header(vec!["Player", "Role", "Team"]);

    for assignment in assignments {
        let role = assignment.role();
        table.add_row(vec![
            assignment.player().name().to_string(),
            role.display_name.clone(),
            role.team.to_string(),
        ]);
    }

    println!("{}", table);
}

/// Pass-the-device reveal: each player sees only their own role.
fn private_reveal(assignments: &[RoleAssignment<'_>]) -> Result<()> {
    let term = Term::stdout();

    for assignment in assignments {
        let player = assignment.player();
        let role = assignment.role();

        wait_for_enter(&format!("Pass the device to {}, then press Enter", player))?;
        println!();
        println!("{}, you are: {} ({})", player, role, role.team);
        println!();
        wait_for_enter("Press Enter to hide your role")?;

        term.clear_screen()?;
    }

    println!("All roles dealt.");
    Ok(())
}

fn wait_for_enter(prompt: &str) -> Result<()> {
    Input::<String>::new()
        .with_prompt(prompt)
        .allow_empty(true)
        .interact_text()
        .map_err(|e| ResistanceError::dialog(e.to_string()))?;
    Ok(())
}
