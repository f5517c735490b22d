//! Wire models of the voting backend and the leaderboard helper.
//!
//! The backend is an opaque collaborator; its field names drifted over
//! time (`cover_id` vs `id`, `votes` vs `count`), so the models accept
//! both spellings when parsing.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Body of a vote submission.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "cwserver", derive(utoipa::ToSchema))]
pub struct VoteRequest {
    /// Per-install device identifier.
    pub device_id: String,
    /// Cover this device votes for.
    #[cfg_attr(feature = "cwserver", schema(example = "2024_05_MAY"))]
    pub cover_id: String,
}

/// One leaderboard entry as returned by the results endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "cwserver", derive(utoipa::ToSchema))]
pub struct CoverVotes {
    /// Cover identifier (the backend sometimes says `id`).
    #[serde(alias = "id")]
    #[cfg_attr(feature = "cwserver", schema(example = "2024_05_MAY"))]
    pub cover_id: String,
    /// Vote count (the backend sometimes says `count`; missing means zero).
    #[serde(alias = "count", default)]
    pub votes: u64,
}

/// Envelope of the results endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct ResultsResponse {
    /// Missing or null results mean an empty leaderboard.
    #[serde(default)]
    pub results: Vec<CoverVotes>,
}

/// Filters and ranks raw results into a leaderboard.
///
/// Entries with zero votes or unknown cover ids are dropped, the rest is
/// sorted by descending vote count and truncated to `top`.
pub fn leaderboard(results: &[CoverVotes], valid_ids: &HashSet<String>, top: usize) -> Vec<CoverVotes> {
    let mut ranked: Vec<CoverVotes> = results
        .iter()
        .filter(|r| r.votes > 0 && valid_ids.contains(&r.cover_id))
        .cloned()
        .collect();
    ranked.sort_by(|a, b| b.votes.cmp(&a.votes));
    ranked.truncate(top);
    ranked
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(names: &[&str]) -> HashSet<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn results_accept_alternate_field_names() {
        let json = r#"{"results": [
            {"cover_id": "a", "votes": 3},
            {"id": "b", "count": 5},
            {"id": "c"}
        ]}"#;
        let parsed: ResultsResponse = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.results[0].cover_id, "a");
        assert_eq!(parsed.results[1].cover_id, "b");
        assert_eq!(parsed.results[1].votes, 5);
        assert_eq!(parsed.results[2].votes, 0);
    }

    #[test]
    fn missing_results_key_is_an_empty_leaderboard() {
        let parsed: ResultsResponse = serde_json::from_str("{}").unwrap();
        assert!(parsed.results.is_empty());
    }

    #[test]
    fn leaderboard_filters_sorts_and_truncates() {
        let results = vec![
            CoverVotes { cover_id: "a".into(), votes: 1 },
            CoverVotes { cover_id: "zz".into(), votes: 9 }, // unknown id
            CoverVotes { cover_id: "b".into(), votes: 0 },  // no votes
            CoverVotes { cover_id: "c".into(), votes: 7 },
            CoverVotes { cover_id: "d".into(), votes: 4 },
        ];
        let board = leaderboard(&results, &ids(&["a", "b", "c", "d"]), 2);
        assert_eq!(board.len(), 2);
        assert_eq!(board[0].cover_id, "c");
        assert_eq!(board[1].cover_id, "d");
    }
}
