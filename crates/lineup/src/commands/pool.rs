use clap::ArgMatches;
use tracing::{error, info, warn};

use lineup_core::balance::MATCH_SIZE;
use lineup_core::{Command, Identity, Store, events};

use super::helpers::{format_count, open_store, parse_member};
use super::json_types::{MemberJson, PoolOutput};
use crate::color;

fn member_args(matches: &ArgMatches) -> Result<Vec<Identity>, Box<dyn std::error::Error>> {
    matches
        .get_many::<String>("members")
        .ok_or("At least one member is required")?
        .map(|raw| parse_member(raw))
        .collect()
}

fn pool_status_line(count: usize) -> String {
    match count.cmp(&MATCH_SIZE) {
        std::cmp::Ordering::Equal => color::success("ready to make teams"),
        std::cmp::Ordering::Less => format!("need {} more", MATCH_SIZE - count),
        std::cmp::Ordering::Greater => format!("{} too many", count - MATCH_SIZE),
    }
}

pub(crate) fn handle_join_command(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    let identities = member_args(matches)?;
    let (mut store, _scope) = open_store(matches)?;

    info!(event = "cli.join_started", count = identities.len());

    let mut failed = 0;
    for identity in identities {
        match store.dispatch(Command::Join {
            identity: identity.clone(),
        }) {
            Ok(emitted) if emitted.is_empty() => {
                println!(
                    "{} has already joined.",
                    color::identity(identity.as_str())
                );
            }
            Ok(_) => {
                println!("{} joined.", color::identity(identity.as_str()));
            }
            Err(e) => {
                failed += 1;
                eprintln!("{} '{}': {}", color::error("Could not join"), identity, e);
                warn!(event = "cli.join_member_failed", member = %identity, error = %e);
                events::log_app_error(&e);
            }
        }
    }

    let count = store.lobby().participants().len();
    println!(
        "{} in the pool ({}).",
        format_count(count, "participant", "participants"),
        pool_status_line(count)
    );

    if failed > 0 {
        error!(event = "cli.join_failed", failed = failed);
        return Err(format!("{} could not join", format_count(failed, "member", "members")).into());
    }

    info!(event = "cli.join_completed", pool = count);
    Ok(())
}

pub(crate) fn handle_leave_command(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    let identities = member_args(matches)?;
    let (mut store, _scope) = open_store(matches)?;

    info!(event = "cli.leave_started", count = identities.len());

    let mut failed = 0;
    for identity in identities {
        match store.dispatch(Command::Leave {
            identity: identity.clone(),
        }) {
            Ok(_) => println!("{} left.", color::identity(identity.as_str())),
            Err(e) => {
                failed += 1;
                eprintln!("{} '{}': {}", color::error("Could not leave"), identity, e);
                warn!(event = "cli.leave_member_failed", member = %identity, error = %e);
                events::log_app_error(&e);
            }
        }
    }

    let count = store.lobby().participants().len();
    println!(
        "{} in the pool ({}).",
        format_count(count, "participant", "participants"),
        pool_status_line(count)
    );

    if failed > 0 {
        error!(event = "cli.leave_failed", failed = failed);
        return Err(format!("{} could not leave", format_count(failed, "member", "members")).into());
    }

    info!(event = "cli.leave_completed", pool = count);
    Ok(())
}

pub(crate) fn handle_reset_command(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    let (mut store, scope) = open_store(matches)?;

    info!(event = "cli.reset_started", scope = %scope);

    match store.dispatch(Command::ResetParticipants) {
        Ok(_) => {
            println!("Pool cleared. Members stay registered.");
            info!(event = "cli.reset_completed", scope = %scope);
            Ok(())
        }
        Err(e) => {
            eprintln!("{} {}", color::error("Could not reset the pool:"), e);
            error!(event = "cli.reset_failed", error = %e);
            events::log_app_error(&e);
            Err(e.into())
        }
    }
}

pub(crate) fn handle_pool_command(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    let json_output = matches.get_flag("json");
    let (store, scope) = open_store(matches)?;
    let lobby = store.lobby();

    let mut participants: Vec<MemberJson> = lobby
        .participants()
        .iter()
        .map(|id| MemberJson {
            identity: id.to_string(),
            rating: lobby.roster().rating(id).unwrap_or_default(),
            joined: true,
        })
        .collect();
    participants.sort_by(|a, b| {
        b.rating
            .cmp(&a.rating)
            .then_with(|| a.identity.cmp(&b.identity))
    });

    if json_output {
        let output = PoolOutput {
            scope,
            count: participants.len(),
            required: MATCH_SIZE,
            participants,
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    if participants.is_empty() {
        println!("Nobody has joined yet.");
        println!("  {} lineup join <MEMBER>...", color::muted("Join:"));
        return Ok(());
    }

    for member in &participants {
        println!(
            "  {} {}",
            color::identity(&member.identity),
            color::muted(&format!("({})", member.rating))
        );
    }
    println!(
        "{} ({}).",
        format_count(participants.len(), "participant", "participants"),
        pool_status_line(participants.len())
    );
    Ok(())
}
