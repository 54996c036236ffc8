//! Preset opponents selectable from the menu

use serde::{Deserialize, Serialize};

use super::{AlphaBetaStrategy, Heuristic, MinimaxStrategy, RandomStrategy, Strategy};

/// Search algorithm behind a computer player
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum StrategyKind {
    Random,
    Minimax { heuristic: Heuristic, depth: u8 },
    AlphaBeta { heuristic: Heuristic, depth: u8 },
}

impl StrategyKind {
    /// Instantiate a fresh strategy
    pub fn build(self) -> Box<dyn Strategy> {
        match self {
            StrategyKind::Random => Box::new(RandomStrategy::new()),
            StrategyKind::Minimax { heuristic, depth } => {
                Box::new(MinimaxStrategy::new(heuristic, depth))
            }
            StrategyKind::AlphaBeta { heuristic, depth } => {
                Box::new(AlphaBetaStrategy::new(heuristic, depth))
            }
        }
    }

    pub fn heuristic(self) -> Option<Heuristic> {
        match self {
            StrategyKind::Random => None,
            StrategyKind::Minimax { heuristic, .. } | StrategyKind::AlphaBeta { heuristic, .. } => {
                Some(heuristic)
            }
        }
    }

    /// Same algorithm and depth with a different evaluation function.
    /// `Random` has none and is returned unchanged.
    pub fn with_heuristic(self, heuristic: Heuristic) -> Self {
        match self {
            StrategyKind::Random => self,
            StrategyKind::Minimax { depth, .. } => StrategyKind::Minimax { heuristic, depth },
            StrategyKind::AlphaBeta { depth, .. } => StrategyKind::AlphaBeta { heuristic, depth },
        }
    }
}

/// Difficulty levels offered in the game menu
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    pub fn strategy(self) -> StrategyKind {
        match self {
            Difficulty::Easy => StrategyKind::Random,
            Difficulty::Medium => StrategyKind::Minimax {
                heuristic: Heuristic::Mobility,
                depth: 3,
            },
            Difficulty::Hard => StrategyKind::AlphaBeta {
                heuristic: Heuristic::Complex,
                depth: 5,
            },
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_difficulty_presets() {
        assert_eq!(Difficulty::Easy.strategy(), StrategyKind::Random);
        assert_eq!(
            Difficulty::Hard.strategy().heuristic(),
            Some(Heuristic::Complex)
        );
        assert_eq!(Difficulty::default(), Difficulty::Medium);
    }

    #[test]
    fn test_with_heuristic_keeps_depth() {
        let kind = Difficulty::Hard.strategy().with_heuristic(Heuristic::Corners);
        assert_eq!(
            kind,
            StrategyKind::AlphaBeta {
                heuristic: Heuristic::Corners,
                depth: 5
            }
        );
        assert_eq!(
            StrategyKind::Random.with_heuristic(Heuristic::Corners),
            StrategyKind::Random
        );
    }

    #[test]
    fn test_strategy_kind_json() {
        let kind: StrategyKind =
            serde_json::from_str(r#"{"kind":"minimax","heuristic":"score_diff","depth":2}"#).unwrap();
        assert_eq!(
            kind,
            StrategyKind::Minimax {
                heuristic: Heuristic::ScoreDiff,
                depth: 2
            }
        );
    }
}
