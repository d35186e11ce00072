//! Score ranking

use serde::Serialize;

use crate::record::PlayerRecord;

/// Medal tier for the podium places
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Tier {
    Gold,
    Silver,
    Bronze,
    Listed,
}

impl Tier {
    /// Tier for a 1-based position
    pub fn for_position(position: usize) -> Self {
        match position {
            1 => Tier::Gold,
            2 => Tier::Silver,
            3 => Tier::Bronze,
            _ => Tier::Listed,
        }
    }

    pub fn label(&self) -> Option<&'static str> {
        match self {
            Tier::Gold => Some("gold"),
            Tier::Silver => Some("silver"),
            Tier::Bronze => Some("bronze"),
            Tier::Listed => None,
        }
    }
}

/// A record together with its place on the board
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RankedEntry {
    /// 1-based
    pub position: usize,
    pub tier: Tier,
    #[serde(flatten)]
    pub record: PlayerRecord,
}

/// Records ordered by descending score
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Leaderboard {
    entries: Vec<RankedEntry>,
}

impl Leaderboard {
    pub fn entries(&self) -> &[RankedEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The first `n` entries (fewer if the board is shorter)
    pub fn podium(&self, n: usize) -> &[RankedEntry] {
        &self.entries[..n.min(self.entries.len())]
    }

    /// Everything after the first `n` entries
    pub fn remainder(&self, n: usize) -> &[RankedEntry] {
        &self.entries[n.min(self.entries.len())..]
    }

    pub fn iter(&self) -> impl Iterator<Item = &RankedEntry> {
        self.entries.iter()
    }

    /// Whether scores never increase down the board
    pub fn is_sorted(&self) -> bool {
        self.entries
            .windows(2)
            .all(|pair| pair[0].record.score >= pair[1].record.score)
    }
}

/// Sort records by score, highest first. Equal scores keep their input order.
pub fn rank(mut records: Vec<PlayerRecord>) -> Leaderboard {
    // sort_by is stable
    records.sort_by(|a, b| b.score.cmp(&a.score));
    let entries = records
        .into_iter()
        .enumerate()
        .map(|(idx, record)| RankedEntry {
            position: idx + 1,
            tier: Tier::for_position(idx + 1),
            record,
        })
        .collect();
    Leaderboard { entries }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(board: &Leaderboard) -> Vec<&str> {
        board.iter().map(|e| e.record.name.as_str()).collect()
    }

    #[test]
    fn test_rank_descending() {
        let board = rank(vec![
            PlayerRecord::new("Alice", 90, Some("a.png")),
            PlayerRecord::new("Bob", 95, Some("b.png")),
            PlayerRecord::new("Dan", 12, Some("d.png")),
        ]);
        assert_eq!(names(&board), ["Bob", "Alice", "Dan"]);
        assert!(board.is_sorted());
        assert_eq!(board.entries()[0].tier, Tier::Gold);
        assert_eq!(board.entries()[2].position, 3);
    }

    #[test]
    fn test_ties_keep_input_order() {
        let board = rank(vec![
            PlayerRecord::new("Alice", 90, Some("a.png")),
            PlayerRecord::new("Bob", 95, Some("b.png")),
            PlayerRecord::new("Cara", 95, None),
        ]);
        assert_eq!(names(&board), ["Bob", "Cara", "Alice"]);

        let swapped = rank(vec![
            PlayerRecord::new("Cara", 95, None),
            PlayerRecord::new("Bob", 95, Some("b.png")),
        ]);
        assert_eq!(names(&swapped), ["Cara", "Bob"]);
    }

    #[test]
    fn test_empty_input() {
        let board = rank(Vec::new());
        assert!(board.is_empty());
        assert!(board.is_sorted());
        assert!(board.podium(5).is_empty());
        assert!(board.remainder(5).is_empty());
    }

    #[test]
    fn test_podium_and_remainder_split() {
        let records = (0..7)
            .map(|i| PlayerRecord::new(format!("P{}", i), 100 - i, None))
            .collect();
        let board = rank(records);
        assert_eq!(board.podium(5).len(), 5);
        assert_eq!(board.remainder(5).len(), 2);
        assert_eq!(board.remainder(5)[0].position, 6);
        assert_eq!(board.remainder(5)[0].tier, Tier::Listed);
        assert_eq!(board.podium(10).len(), 7);
    }

    #[test]
    fn test_tiers() {
        assert_eq!(Tier::for_position(2), Tier::Silver);
        assert_eq!(Tier::for_position(3).label(), Some("bronze"));
        assert_eq!(Tier::for_position(4).label(), None);
    }
}
