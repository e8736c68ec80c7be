//! Participant identities and their skill ratings.
//!
//! An [`Identity`] is the stable key a participant registered under. Display
//! names are resolved by whatever front end presents results, never here.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Stable, opaque participant key.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Identity(String);

impl Identity {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    /// Normalize user input into an identity key.
    ///
    /// Accepts mention syntax (`<@123>`, `<@!123>`), a leading `@`, or a bare
    /// key. Returns `None` when nothing is left after trimming.
    pub fn parse(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        let key = match trimmed
            .strip_prefix("<@")
            .and_then(|rest| rest.strip_suffix('>'))
        {
            Some(mention) => mention.trim_start_matches('!'),
            None => trimmed.trim_start_matches('@'),
        };
        let key = key.trim();
        (!key.is_empty()).then(|| Self(key.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Identity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Identity {
    fn from(key: &str) -> Self {
        Self(key.to_string())
    }
}

impl From<String> for Identity {
    fn from(key: String) -> Self {
        Self(key)
    }
}

/// Registered participants and their integer skill ratings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Roster {
    ratings: BTreeMap<Identity, i64>,
}

impl Roster {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register or re-rate a participant. Returns the previous rating, if any.
    pub fn insert(&mut self, identity: Identity, rating: i64) -> Option<i64> {
        self.ratings.insert(identity, rating)
    }

    pub fn remove(&mut self, identity: &Identity) -> Option<i64> {
        self.ratings.remove(identity)
    }

    pub fn rating(&self, identity: &Identity) -> Option<i64> {
        self.ratings.get(identity).copied()
    }

    pub fn contains(&self, identity: &Identity) -> bool {
        self.ratings.contains_key(identity)
    }

    pub fn len(&self) -> usize {
        self.ratings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ratings.is_empty()
    }

    pub fn ratings(&self) -> &BTreeMap<Identity, i64> {
        &self.ratings
    }

    /// Entries ordered by rating (highest first), ties broken by identity.
    pub fn by_rating(&self) -> Vec<(Identity, i64)> {
        let mut entries: Vec<_> = self
            .ratings
            .iter()
            .map(|(id, rating)| (id.clone(), *rating))
            .collect();
        entries.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        entries
    }
}

impl FromIterator<(Identity, i64)> for Roster {
    fn from_iter<T: IntoIterator<Item = (Identity, i64)>>(iter: T) -> Self {
        Self {
            ratings: iter.into_iter().collect(),
        }
    }
}
