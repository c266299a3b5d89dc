use std::fmt;

use crate::board::{Color, DEFAULT_BOARD_SIZE};
use crate::evaluate::EvaluatorPreset;

/// Who decides the moves of one side.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Controller {
    Human,
    Computer,
}

impl fmt::Display for Controller {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let controller_str = match self {
            Controller::Human => "human",
            Controller::Computer => "computer",
        };
        write!(f, "{}", controller_str)
    }
}

/// Per-side settings. Humans carry a search depth and evaluator too, which
/// are used when they ask the engine for a suggestion.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct PlayerConfig {
    pub controller: Controller,
    pub search_depth: u8,
    pub evaluator: EvaluatorPreset,
}

impl PlayerConfig {
    pub fn human() -> Self {
        Self {
            controller: Controller::Human,
            search_depth: 1,
            evaluator: EvaluatorPreset::default(),
        }
    }

    pub fn computer(search_depth: u8, evaluator: EvaluatorPreset) -> Self {
        Self {
            controller: Controller::Computer,
            search_depth,
            evaluator,
        }
    }

    pub fn is_computer(&self) -> bool {
        self.controller == Controller::Computer
    }

    /// A depth-0 search only produces a score, never a placement, so a side
    /// that has to move searches at least one ply.
    pub fn effective_depth(&self) -> u8 {
        self.search_depth.max(1)
    }
}

/// Construction-time settings of an [`Engine`](super::engine::Engine).
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct EngineConfig {
    pub board_size: usize,
    pub black: PlayerConfig,
    pub white: PlayerConfig,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            board_size: DEFAULT_BOARD_SIZE,
            black: PlayerConfig {
                controller: Controller::Human,
                search_depth: 1,
                evaluator: EvaluatorPreset::Strong,
            },
            white: PlayerConfig::computer(5, EvaluatorPreset::Strong),
        }
    }
}

impl EngineConfig {
    pub fn player(&self, color: Color) -> &PlayerConfig {
        match color {
            Color::Black => &self.black,
            Color::White => &self.white,
        }
    }

    /// Human against the computer, the human playing `human_color`.
    pub fn human_vs_computer(
        board_size: usize,
        human_color: Color,
        search_depth: u8,
        evaluator: EvaluatorPreset,
    ) -> Self {
        let human = PlayerConfig {
            evaluator,
            ..PlayerConfig::human()
        };
        let computer = PlayerConfig::computer(search_depth, evaluator);
        let (black, white) = match human_color {
            Color::Black => (human, computer),
            Color::White => (computer, human),
        };
        Self {
            board_size,
            black,
            white,
        }
    }

    pub fn computer_vs_computer(board_size: usize, black: PlayerConfig, white: PlayerConfig) -> Self {
        Self {
            board_size,
            black,
            white,
        }
    }

    pub fn human_vs_human(board_size: usize) -> Self {
        Self {
            board_size,
            black: PlayerConfig::human(),
            white: PlayerConfig::human(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = EngineConfig::default();
        assert_eq!(config.board_size, 8);
        assert_eq!(config.black.controller, Controller::Human);
        assert_eq!(config.black.search_depth, 1);
        assert_eq!(config.white.controller, Controller::Computer);
        assert_eq!(config.white.search_depth, 5);
        assert_eq!(config.white.evaluator, EvaluatorPreset::Strong);
    }

    #[test]
    fn test_depth_zero_still_searches_one_ply() {
        let player = PlayerConfig::computer(0, EvaluatorPreset::Weak);
        assert_eq!(player.effective_depth(), 1);
        assert_eq!(PlayerConfig::computer(3, EvaluatorPreset::Weak).effective_depth(), 3);
    }

    #[test]
    fn test_human_vs_computer_sides() {
        let config = EngineConfig::human_vs_computer(6, Color::White, 4, EvaluatorPreset::Weak);
        assert!(config.player(Color::Black).is_computer());
        assert!(!config.player(Color::White).is_computer());
        assert_eq!(config.player(Color::Black).search_depth, 4);
        assert_eq!(config.board_size, 6);
    }
}
