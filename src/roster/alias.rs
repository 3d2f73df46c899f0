use std::collections::HashMap;
use tracing::debug;

use crate::roster::Roster;

/// Aliases this short are never indexed; they collide with ordinary words.
const MIN_ALIAS_CHARS: usize = 3;

/// Lookup from a lower-cased nickname, alias, or name token to a canonical
/// participant name. Built once per roster and read-only afterwards.
#[derive(Debug, Clone, Default)]
pub struct AliasIndex {
    aliases: HashMap<String, String>,
}

impl AliasIndex {
    /// Index every name token and declared alias of every participant.
    /// The first participant to claim an alias keeps it.
    pub fn build(roster: &Roster) -> Self {
        let mut aliases = HashMap::new();

        for participant in roster.participants() {
            let candidates = participant
                .name
                .split_whitespace()
                .chain(participant.alias.iter().map(|a| a.trim()));

            for candidate in candidates {
                let alias = candidate.to_lowercase();
                if alias.chars().count() < MIN_ALIAS_CHARS {
                    continue;
                }
                aliases
                    .entry(alias)
                    .or_insert_with(|| participant.name.clone());
            }
        }

        debug!(
            "Built alias index with {} entries for {} participants",
            aliases.len(),
            roster.len()
        );

        Self { aliases }
    }

    /// Canonical name for an alias, compared case-insensitively.
    pub fn resolve(&self, alias: &str) -> Option<&str> {
        self.aliases.get(&alias.to_lowercase()).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.aliases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.aliases.is_empty()
    }
}
