use clap::ArgMatches;
use clap_complete::Shell;
use tracing::error;

use lineup_core::events;

mod helpers;
mod json_types;
mod members;
mod pool;
mod teams;

use members::{handle_add_member_command, handle_members_command, handle_remove_member_command};
use pool::{handle_join_command, handle_leave_command, handle_pool_command, handle_reset_command};
use teams::{handle_history_command, handle_make_teams_command, handle_tolerance_command};

pub fn run_command(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    events::log_app_startup();

    match matches.subcommand() {
        Some(("add-member", sub_matches)) => handle_add_member_command(sub_matches),
        Some(("remove-member", sub_matches)) => handle_remove_member_command(sub_matches),
        Some(("members", sub_matches)) => handle_members_command(sub_matches),
        Some(("join", sub_matches)) => handle_join_command(sub_matches),
        Some(("leave", sub_matches)) => handle_leave_command(sub_matches),
        Some(("reset", sub_matches)) => handle_reset_command(sub_matches),
        Some(("pool", sub_matches)) => handle_pool_command(sub_matches),
        Some(("tolerance", sub_matches)) => handle_tolerance_command(sub_matches),
        Some(("make-teams", sub_matches)) => handle_make_teams_command(sub_matches),
        Some(("history", sub_matches)) => handle_history_command(sub_matches),
        Some(("completions", sub_matches)) => handle_completions_command(sub_matches),
        _ => {
            error!(event = "cli.command_unknown");
            Err("Unknown command".into())
        }
    }
}

fn handle_completions_command(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    let shell = *matches
        .get_one::<Shell>("shell")
        .ok_or("Shell argument is required")?;
    let mut app = crate::app::build_cli();
    clap_complete::generate(shell, &mut app, "lineup", &mut std::io::stdout());
    Ok(())
}
