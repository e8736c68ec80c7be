use clap::ArgMatches;
use tracing::{error, info};

use lineup_core::{Command, Event, Store, events};

use super::helpers::{format_count, open_store, parse_member};
use super::json_types::MembersOutput;
use crate::color;
use crate::table::{MemberRow, MembersTable};

pub(crate) fn handle_add_member_command(
    matches: &ArgMatches,
) -> Result<(), Box<dyn std::error::Error>> {
    let raw = matches
        .get_one::<String>("member")
        .ok_or("Member argument is required")?;
    let rating = *matches
        .get_one::<i64>("rating")
        .ok_or("Rating argument is required")?;
    let identity = parse_member(raw)?;
    let (mut store, scope) = open_store(matches)?;

    info!(event = "cli.add_member_started", member = %identity, rating = rating);

    match store.dispatch(Command::AddMember {
        identity: identity.clone(),
        rating,
    }) {
        Ok(emitted) => {
            let previous = emitted.iter().find_map(|event| match event {
                Event::MemberRegistered { previous, .. } => *previous,
                _ => None,
            });
            match previous {
                Some(old) => println!(
                    "Updated {}: {} -> {} ({}).",
                    color::identity(identity.as_str()),
                    old,
                    color::bold(&rating.to_string()),
                    color::muted(&scope)
                ),
                None => println!(
                    "Registered {} with rating {} ({}).",
                    color::identity(identity.as_str()),
                    color::bold(&rating.to_string()),
                    color::muted(&scope)
                ),
            }
            info!(event = "cli.add_member_completed", member = %identity, previous = ?previous);
            Ok(())
        }
        Err(e) => {
            eprintln!("{} '{}': {}", color::error("Could not register"), identity, e);
            error!(event = "cli.add_member_failed", member = %identity, error = %e);
            events::log_app_error(&e);
            Err(e.into())
        }
    }
}

pub(crate) fn handle_remove_member_command(
    matches: &ArgMatches,
) -> Result<(), Box<dyn std::error::Error>> {
    let raw = matches
        .get_one::<String>("member")
        .ok_or("Member argument is required")?;
    let identity = parse_member(raw)?;
    let (mut store, _scope) = open_store(matches)?;

    info!(event = "cli.remove_member_started", member = %identity);

    match store.dispatch(Command::RemoveMember {
        identity: identity.clone(),
    }) {
        Ok(_) => {
            println!("Removed {}.", color::identity(identity.as_str()));
            info!(event = "cli.remove_member_completed", member = %identity);
            Ok(())
        }
        Err(e) => {
            eprintln!("{} '{}': {}", color::error("Could not remove"), identity, e);
            error!(event = "cli.remove_member_failed", member = %identity, error = %e);
            events::log_app_error(&e);
            Err(e.into())
        }
    }
}

pub(crate) fn handle_members_command(
    matches: &ArgMatches,
) -> Result<(), Box<dyn std::error::Error>> {
    let json_output = matches.get_flag("json");
    let (store, scope) = open_store(matches)?;
    let lobby = store.lobby();

    info!(event = "cli.members_started", scope = %scope, json_output = json_output);

    if json_output {
        let output = MembersOutput::from_lobby(&scope, lobby);
        println!("{}", serde_json::to_string_pretty(&output)?);
        info!(event = "cli.members_completed", count = output.members.len());
        return Ok(());
    }

    let members = lobby.members_by_rating();
    if members.is_empty() {
        println!("No members registered in {}.", color::muted(&scope));
        println!(
            "  {} lineup add-member <MEMBER> <RATING>",
            color::muted("Register:")
        );
        info!(event = "cli.members_completed", count = 0);
        return Ok(());
    }

    let rows: Vec<MemberRow> = members
        .into_iter()
        .enumerate()
        .map(|(i, (id, rating))| MemberRow {
            rank: i + 1,
            joined: lobby.participants().contains(&id),
            identity: id.to_string(),
            rating,
        })
        .collect();

    let table = MembersTable::new(&rows);
    table.print_table(&rows);
    println!(
        "{}, {} joined",
        format_count(rows.len(), "member", "members"),
        lobby.participants().len()
    );

    info!(event = "cli.members_completed", count = rows.len());
    Ok(())
}
