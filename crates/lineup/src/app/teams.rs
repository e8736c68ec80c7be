use clap::{Arg, ArgAction, Command};

pub fn tolerance_command() -> Command {
    Command::new("tolerance")
        .about("Show or set the maximum acceptable skill difference between teams")
        .arg(
            Arg::new("set")
                .long("set")
                .help("New tolerance (0 or greater)")
                .value_name("N")
                .allow_negative_numbers(true)
                .value_parser(clap::value_parser!(i64)),
        )
        .arg(
            Arg::new("json")
                .long("json")
                .help("Output in JSON format")
                .action(ArgAction::SetTrue)
                .conflicts_with("set"),
        )
}

pub fn make_teams_command() -> Command {
    Command::new("make-teams")
        .about("Split the ten pooled participants into two balanced teams")
        .long_about("Split the ten pooled participants into two balanced teams.\n\nOptional constraint tokens:\n  same:a,b c     a, b and c play on the same team (plain tokens after same: join the group)\n  diff:a,b       a and b are not all on one team\n\nExample: lineup make-teams same:alice bob diff:carol,dave")
        .arg(
            Arg::new("constraints")
                .help("Constraint tokens (same:..., diff:...)")
                .num_args(0..)
                .index(1),
        )
        .arg(
            Arg::new("json")
                .long("json")
                .help("Output in JSON format")
                .action(ArgAction::SetTrue),
        )
}

pub fn history_command() -> Command {
    Command::new("history")
        .about("Show recent matches, newest first")
        .arg(
            Arg::new("limit")
                .long("limit")
                .short('n')
                .help("Show at most N matches")
                .value_name("N")
                .value_parser(clap::value_parser!(usize)),
        )
        .arg(
            Arg::new("json")
                .long("json")
                .help("Output in JSON format")
                .action(ArgAction::SetTrue),
        )
}
