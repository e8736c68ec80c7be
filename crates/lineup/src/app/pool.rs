use clap::{Arg, ArgAction, Command};

pub fn join_command() -> Command {
    Command::new("join")
        .about("Add registered members to the pool for the next match")
        .arg(
            Arg::new("members")
                .help("Member names or mentions")
                .required(true)
                .num_args(1..)
                .index(1),
        )
}

pub fn leave_command() -> Command {
    Command::new("leave")
        .about("Take members out of the pool")
        .arg(
            Arg::new("members")
                .help("Member names or mentions")
                .required(true)
                .num_args(1..)
                .index(1),
        )
}

pub fn reset_command() -> Command {
    Command::new("reset").about("Empty the pool (the roster is kept)")
}

pub fn pool_command() -> Command {
    Command::new("pool")
        .about("Show who has joined the next match")
        .arg(
            Arg::new("json")
                .long("json")
                .help("Output in JSON format")
                .action(ArgAction::SetTrue),
        )
}
