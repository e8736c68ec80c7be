use clap::{Arg, ArgAction, Command};

pub fn add_member_command() -> Command {
    Command::new("add-member")
        .about("Register a member or update their rating")
        .arg(
            Arg::new("member")
                .help("Member name or mention (e.g. alice, @alice, <@1234>)")
                .required(true)
                .index(1),
        )
        .arg(
            Arg::new("rating")
                .help("Integer skill rating (may be zero or negative)")
                .required(true)
                .index(2)
                .allow_negative_numbers(true)
                .value_parser(clap::value_parser!(i64)),
        )
}

pub fn remove_member_command() -> Command {
    Command::new("remove-member")
        .about("Unregister a member (also removes them from the pool)")
        .arg(
            Arg::new("member")
                .help("Member name or mention")
                .required(true)
                .index(1),
        )
}

pub fn members_command() -> Command {
    Command::new("members")
        .about("List registered members, highest rating first")
        .arg(
            Arg::new("json")
                .long("json")
                .help("Output in JSON format")
                .action(ArgAction::SetTrue),
        )
}
