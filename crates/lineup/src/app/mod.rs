mod global;
mod members;
mod misc;
mod pool;
mod teams;


use clap::Command;

pub fn build_cli() -> Command {
    global::root_command()
        .subcommand(members::add_member_command())
        .subcommand(members::remove_member_command())
        .subcommand(members::members_command())
        .subcommand(pool::join_command())
        .subcommand(pool::leave_command())
        .subcommand(pool::reset_command())
        .subcommand(pool::pool_command())
        .subcommand(teams::tolerance_command())
        .subcommand(teams::make_teams_command())
        .subcommand(teams::history_command())
        .subcommand(misc::completions_command())
}
