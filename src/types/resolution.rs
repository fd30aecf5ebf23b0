//! Identifier resolution outcomes

use serde::Serialize;

use super::EnrichedShipment;

/// Tier that produced a successful match.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum MatchTier {
    /// Case-insensitive substring hit on the identifier or a container code
    Exact,
    /// Fuzzy match on the 10-character canonical key (check digit dropped)
    Key10,
}

/// Candidate surfaced by the suggestion tier.
///
/// A suggestion list is a *failure* outcome that happens to carry data - the
/// caller renders it as "not found, did you mean".
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SuggestionStub {
    pub id: String,
    pub vessel: String,
    /// One sample container code from the suggested shipment
    pub container: String,
}

/// Outcome of resolving a user-supplied query against the enriched fleet.
///
/// Created fresh per resolution call and discarded with the response.
#[derive(Debug, Clone)]
pub enum Resolution {
    /// Tier 1: substring match on identifier or container code
    Exact(EnrichedShipment),
    /// Tier 2: key10 match, with every container code sharing the key
    /// (deduplicated, capped) listed as alternates
    Key10 {
        shipment: EnrichedShipment,
        alternates: Vec<String>,
    },
    /// Tier 3: no match, but the query prefixed/contained these candidates
    Suggestions(Vec<SuggestionStub>),
    /// All tiers empty
    NotFound,
}

impl Resolution {
    /// Whether this outcome is a real match (tiers 1-2) rather than a
    /// typed failure (tiers 3-4).
    pub fn is_match(&self) -> bool {
        matches!(self, Resolution::Exact(_) | Resolution::Key10 { .. })
    }

    /// Tier tag for matched outcomes
    pub fn tier(&self) -> Option<MatchTier> {
        match self {
            Resolution::Exact(_) => Some(MatchTier::Exact),
            Resolution::Key10 { .. } => Some(MatchTier::Key10),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tier_tags_serialize_lowercase() {
        assert_eq!(serde_json::to_string(&MatchTier::Exact).unwrap(), "\"exact\"");
        assert_eq!(serde_json::to_string(&MatchTier::Key10).unwrap(), "\"key10\"");
    }

    #[test]
    fn test_failure_outcomes_are_not_matches() {
        assert!(!Resolution::NotFound.is_match());
        assert!(!Resolution::Suggestions(vec![]).is_match());
        assert!(Resolution::NotFound.tier().is_none());
    }
}
