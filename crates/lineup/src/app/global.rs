use clap::{Arg, ArgAction, Command};

pub fn root_command() -> Command {
    Command::new("lineup")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Make balanced 5v5 teams from a pool of rated players")
        .long_about("lineup keeps a roster of rated members per scope, collects who has joined the next match, and splits exactly ten participants into two teams of five. Splits stay within a skill tolerance where possible and avoid repeating recent teammates.")
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Enable verbose logging output")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .arg(
            Arg::new("no-color")
                .long("no-color")
                .help("Disable colored output")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .arg(
            Arg::new("scope")
                .long("scope")
                .short('s')
                .help("Lobby scope to operate on (overrides [storage] default_scope)")
                .value_name("NAME")
                .global(true),
        )
        .subcommand_required(true)
        .arg_required_else_help(true)
}
