use chrono::Utc;
use clap::ArgMatches;
use tracing::{error, info, warn};

use lineup_core::lobby::Team;
use lineup_core::{Command, Event, Store, TeamSheet, events};

use super::helpers::open_store;
use super::json_types::{HistoryOutput, MatchJson, TeamsOutput, ToleranceOutput};
use crate::color;

pub(crate) fn handle_tolerance_command(
    matches: &ArgMatches,
) -> Result<(), Box<dyn std::error::Error>> {
    let (mut store, scope) = open_store(matches)?;

    let Some(&value) = matches.get_one::<i64>("set") else {
        let tolerance = store.lobby().tolerance();
        if matches.get_flag("json") {
            let output = ToleranceOutput { scope, tolerance };
            println!("{}", serde_json::to_string_pretty(&output)?);
        } else {
            println!("Tolerance: {}", color::bold(&tolerance.to_string()));
        }
        return Ok(());
    };

    info!(event = "cli.tolerance_set_started", value = value);

    match store.dispatch(Command::SetTolerance { value }) {
        Ok(_) => {
            println!(
                "Tolerance set to {}.",
                color::bold(&store.lobby().tolerance().to_string())
            );
            info!(event = "cli.tolerance_set_completed", value = value);
            Ok(())
        }
        Err(e) => {
            eprintln!("{} {}", color::error("Could not set tolerance:"), e);
            error!(event = "cli.tolerance_set_failed", value = value, error = %e);
            events::log_app_error(&e);
            Err(e.into())
        }
    }
}

fn format_team(team: &Team) -> String {
    team.members
        .iter()
        .map(|m| format!("[ {} ]", color::identity(m.identity.as_str())))
        .collect::<Vec<_>>()
        .join(" ")
}

fn print_sheet(sheet: &TeamSheet) {
    println!(
        "{} {}",
        color::team_one("Team 1"),
        color::muted(&format!("(total: {})", sheet.team_one.total))
    );
    println!("  {}", format_team(&sheet.team_one));
    println!(
        "{} {}",
        color::team_two("Team 2"),
        color::muted(&format!("(total: {})", sheet.team_two.total))
    );
    println!("  {}", format_team(&sheet.team_two));
    println!(
        "{} {} (tolerance {})",
        color::muted("Difference:"),
        sheet.skill_diff,
        sheet.tolerance
    );
}

pub(crate) fn handle_make_teams_command(
    matches: &ArgMatches,
) -> Result<(), Box<dyn std::error::Error>> {
    let json_output = matches.get_flag("json");
    let constraints: Vec<String> = matches
        .get_many::<String>("constraints")
        .map(|values| values.cloned().collect())
        .unwrap_or_default();
    let (mut store, scope) = open_store(matches)?;

    info!(
        event = "cli.make_teams_started",
        scope = %scope,
        constraints = ?constraints
    );

    let emitted = match store.dispatch(Command::MakeTeams {
        constraints,
        recorded_at: Some(Utc::now()),
    }) {
        Ok(emitted) => emitted,
        Err(e) => {
            eprintln!("{} {}", color::error("Could not make teams:"), e);
            error!(event = "cli.make_teams_failed", scope = %scope, error = %e);
            events::log_app_error(&e);
            return Err(e.into());
        }
    };

    let sheet = emitted
        .into_iter()
        .find_map(|event| match event {
            Event::TeamsMade { sheet } => Some(sheet),
            _ => None,
        })
        .ok_or("Balancing finished without producing teams")?;

    if !sheet.tolerance_met {
        eprintln!(
            "{} no split is within tolerance {}; using the closest available (difference {}).",
            color::warning("Warning:"),
            sheet.tolerance,
            sheet.skill_diff
        );
        warn!(
            event = "cli.make_teams_tolerance_not_met",
            tolerance = sheet.tolerance,
            skill_diff = sheet.skill_diff
        );
    }

    if json_output {
        let output = TeamsOutput {
            scope: &scope,
            sheet: &sheet,
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        print_sheet(&sheet);
    }

    info!(
        event = "cli.make_teams_completed",
        skill_diff = sheet.skill_diff,
        repeat_score = sheet.repeat_score,
        tolerance_met = sheet.tolerance_met
    );
    Ok(())
}

pub(crate) fn handle_history_command(
    matches: &ArgMatches,
) -> Result<(), Box<dyn std::error::Error>> {
    let json_output = matches.get_flag("json");
    let limit = matches.get_one::<usize>("limit").copied();
    let (store, scope) = open_store(matches)?;
    let history = store.lobby().history();
    let take = limit.unwrap_or(history.len());

    if json_output {
        let output = HistoryOutput {
            scope,
            matches: history
                .iter()
                .rev()
                .take(take)
                .map(|entry| MatchJson {
                    team_one: entry.split.team_a.iter().map(|id| id.to_string()).collect(),
                    team_two: entry.split.team_b.iter().map(|id| id.to_string()).collect(),
                    recorded_at: entry.recorded_at,
                })
                .collect(),
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    if history.is_empty() {
        println!("No matches recorded in {}.", color::muted(&scope));
        return Ok(());
    }

    for (age, entry) in history.iter().rev().take(take).enumerate() {
        let when = entry
            .recorded_at
            .map(|at| at.format("%Y-%m-%d %H:%M UTC").to_string())
            .unwrap_or_else(|| "-".to_string());
        let names = |side: &std::collections::BTreeSet<lineup_core::Identity>| {
            side.iter()
                .map(|id| color::identity(id.as_str()))
                .collect::<Vec<_>>()
                .join(", ")
        };
        println!("{} {}", color::bold(&format!("#{}", age + 1)), color::muted(&when));
        println!("  {} {}", color::team_one("Team 1:"), names(&entry.split.team_a));
        println!("  {} {}", color::team_two("Team 2:"), names(&entry.split.team_b));
    }
    Ok(())
}
