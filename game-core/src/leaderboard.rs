use game_types::{LeaderboardEntry, Player, RankedEntry};

/// Well-known storage key for the persisted leaderboard blob.
pub const LEADERBOARD_KEY: &str = "ticTacToeLeaderboard";

/// Add each player's game score to their entry (creating it when missing),
/// then re-sort by total score, highest first. The sort is stable, so tied
/// entries keep their previous relative order.
pub fn commit_scores(leaderboard: &[LeaderboardEntry], players: &[Player]) -> Vec<LeaderboardEntry> {
    let scored = players
        .iter()
        .map(|player| LeaderboardEntry::new(player.name.clone(), player.score));

    normalize(leaderboard.iter().cloned().chain(scored))
}

/// Fold entries sharing a name into the first one (summing totals) and
/// stable-sort the result by total score, highest first.
pub fn normalize(entries: impl IntoIterator<Item = LeaderboardEntry>) -> Vec<LeaderboardEntry> {
    let mut merged: Vec<LeaderboardEntry> = Vec::new();

    for entry in entries {
        match merged.iter_mut().find(|e| e.name == entry.name) {
            Some(existing) => {
                existing.total_score = existing.total_score.saturating_add(entry.total_score)
            }
            None => merged.push(entry),
        }
    }

    merged.sort_by(|a, b| b.total_score.cmp(&a.total_score));
    merged
}

/// 1-based positions for display.
pub fn ranked(leaderboard: &[LeaderboardEntry]) -> Vec<RankedEntry> {
    leaderboard
        .iter()
        .enumerate()
        .map(|(index, entry)| RankedEntry {
            rank: (index + 1) as u32,
            name: entry.name.clone(),
            total_score: entry.total_score,
        })
        .collect()
}

pub fn encode(leaderboard: &[LeaderboardEntry]) -> serde_json::Result<String> {
    serde_json::to_string(leaderboard)
}

pub fn decode(blob: &str) -> serde_json::Result<Vec<LeaderboardEntry>> {
    serde_json::from_str(blob)
}

#[cfg(test)]
mod tests {
    use super::*;
    use game_types::Symbol;

    fn player(name: &str, score: u32) -> Player {
        let mut p = Player::new(name, Symbol::X);
        p.score = score;
        p
    }

    #[test]
    fn test_commit_inserts_new_entries_sorted() {
        let board = commit_scores(&[], &[player("Ann", 5), player("Bo", 8)]);

        assert_eq!(
            board,
            vec![LeaderboardEntry::new("Bo", 8), LeaderboardEntry::new("Ann", 5)]
        );
    }

    #[test]
    fn test_commit_twice_accumulates() {
        let players = [player("Ann", 5), player("Bo", 3)];
        let once = commit_scores(&[], &players);
        let twice = commit_scores(&once, &players);

        assert_eq!(
            twice,
            vec![LeaderboardEntry::new("Ann", 10), LeaderboardEntry::new("Bo", 6)]
        );
    }

    #[test]
    fn test_commit_can_reorder_existing_entries() {
        let existing = vec![
            LeaderboardEntry::new("Cy", 12),
            LeaderboardEntry::new("Ann", 4),
        ];
        let board = commit_scores(&existing, &[player("Ann", 9), player("Bo", 1)]);

        let names: Vec<_> = board.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["Ann", "Cy", "Bo"]);
        assert_eq!(board[0].total_score, 13);
    }

    #[test]
    fn test_ties_keep_previous_order() {
        let existing = vec![LeaderboardEntry::new("Cy", 6)];
        let board = commit_scores(&existing, &[player("Ann", 6), player("Bo", 6)]);

        let names: Vec<_> = board.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["Cy", "Ann", "Bo"]);
    }

    #[test]
    fn test_normalize_merges_duplicates_and_sorts() {
        let board = normalize(vec![
            LeaderboardEntry::new("Low", 1),
            LeaderboardEntry::new("High", 9),
            LeaderboardEntry::new("Low", 4),
        ]);

        assert_eq!(
            board,
            vec![LeaderboardEntry::new("High", 9), LeaderboardEntry::new("Low", 5)]
        );
    }

    #[test]
    fn test_ranked_positions() {
        let board = vec![LeaderboardEntry::new("Bo", 8), LeaderboardEntry::new("Ann", 5)];
        let ranks = ranked(&board);

        assert_eq!(ranks[0].rank, 1);
        assert_eq!(ranks[0].name, "Bo");
        assert_eq!(ranks[1].rank, 2);
        assert_eq!(ranks[1].total_score, 5);
    }

    #[test]
    fn test_blob_format() {
        let blob = encode(&[LeaderboardEntry::new("Ann", 5)]).unwrap();
        assert_eq!(blob, r#"[{"name":"Ann","totalScore":5}]"#);
        assert_eq!(decode(&blob).unwrap(), vec![LeaderboardEntry::new("Ann", 5)]);
        assert!(decode("not json").is_err());
    }
}
