//! JSON output shapes for `--json` flags.

use chrono::{DateTime, Utc};
use serde::Serialize;

use lineup_core::{Lobby, TeamSheet};

#[derive(Serialize)]
pub struct MemberJson {
    pub identity: String,
    pub rating: i64,
    pub joined: bool,
}

#[derive(Serialize)]
pub struct MembersOutput {
    pub scope: String,
    pub members: Vec<MemberJson>,
}

impl MembersOutput {
    pub fn from_lobby(scope: &str, lobby: &Lobby) -> Self {
        let members = lobby
            .members_by_rating()
            .into_iter()
            .map(|(id, rating)| MemberJson {
                joined: lobby.participants().contains(&id),
                identity: id.to_string(),
                rating,
            })
            .collect();
        Self {
            scope: scope.to_string(),
            members,
        }
    }
}

#[derive(Serialize)]
pub struct PoolOutput {
    pub scope: String,
    pub participants: Vec<MemberJson>,
    pub count: usize,
    pub required: usize,
}

#[derive(Serialize)]
pub struct ToleranceOutput {
    pub scope: String,
    pub tolerance: u64,
}

#[derive(Serialize)]
pub struct TeamsOutput<'a> {
    pub scope: &'a str,
    #[serde(flatten)]
    pub sheet: &'a TeamSheet,
}

#[derive(Serialize)]
pub struct MatchJson {
    pub team_one: Vec<String>,
    pub team_two: Vec<String>,
    pub recorded_at: Option<DateTime<Utc>>,
}

#[derive(Serialize)]
pub struct HistoryOutput {
    pub scope: String,
    /// Newest first.
    pub matches: Vec<MatchJson>,
}
