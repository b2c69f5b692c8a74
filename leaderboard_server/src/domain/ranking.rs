use crate::domain::entities::LeaderboardEntry;

pub const LEADERBOARD_SIZE: usize = 10;
pub const MAX_NAME_CHARS: usize = 20;

/// Highest scores first; equal scores keep their stored order.
pub fn top_n(mut entries: Vec<LeaderboardEntry>, n: usize) -> Vec<LeaderboardEntry> {
    entries.sort_by(|a, b| b.score.cmp(&a.score));
    entries.truncate(n);
    entries
}

/// 1-based rank of `id` within `ranked`, if present.
pub fn position_of(ranked: &[LeaderboardEntry], id: &str) -> Option<u32> {
    ranked
        .iter()
        .position(|entry| entry.id == id)
        .map(|index| index as u32 + 1)
}

/// Trims surrounding whitespace and keeps at most `MAX_NAME_CHARS` characters.
/// Returns `None` when nothing is left.
pub fn sanitize_name(raw: &str) -> Option<String> {
    let name: String = raw.trim().chars().take(MAX_NAME_CHARS).collect();
    if name.is_empty() { None } else { Some(name) }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(id: &str, score: u64) -> LeaderboardEntry {
        LeaderboardEntry {
            player_name: format!("p-{id}"),
            score,
            wave: 1,
            timestamp: 0,
            id: id.to_string(),
        }
    }

    #[test]
    fn top_n_sorts_descending_and_truncates() {
        let entries = (0..15).map(|i| entry(&i.to_string(), i * 3 % 17)).collect();

        let ranked = top_n(entries, LEADERBOARD_SIZE);

        assert_eq!(ranked.len(), LEADERBOARD_SIZE);
        assert!(ranked.windows(2).all(|w| w[0].score >= w[1].score));
    }

    #[test]
    fn top_n_keeps_stored_order_for_ties() {
        let entries = vec![entry("a", 5), entry("b", 7), entry("c", 5)];

        let ranked = top_n(entries, 10);

        let ids: Vec<_> = ranked.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, ["b", "a", "c"]);
    }

    #[test]
    fn position_is_one_based_and_absent_outside_the_list() {
        let ranked = vec![entry("a", 9), entry("b", 4)];
        assert_eq!(position_of(&ranked, "b"), Some(2));
        assert_eq!(position_of(&ranked, "z"), None);
    }

    #[test]
    fn names_are_trimmed_and_capped_at_twenty_chars() {
        assert_eq!(sanitize_name("  Ann "), Some("Ann".to_string()));
        assert_eq!(
            sanitize_name("ÅÄÖabcdefghijklmnopqrstu").map(|n| n.chars().count()),
            Some(MAX_NAME_CHARS)
        );
        assert_eq!(sanitize_name(" \t "), None);
    }
}
