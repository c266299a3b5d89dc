use std::fmt;
use std::str::FromStr;

use super::Score;

/// Coefficients of the composite heuristic
/// `corners * corner_difference + mobility * mobility_difference + pieces * piece_difference`.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Weights {
    pub corners: Score,
    pub mobility: Score,
    pub pieces: Score,
}

impl Weights {
    pub const fn new(corners: Score, mobility: Score, pieces: Score) -> Self {
        Self {
            corners,
            mobility,
            pieces,
        }
    }
}

pub const STRONG_WEIGHTS: Weights = Weights::new(25, 5, 1);
pub const WEAK_WEIGHTS: Weights = Weights::new(0, 0, 1);

/// Named weight sets, used to pit computer players of different strength
/// against each other.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum EvaluatorPreset {
    /// Corners and mobility dominate; disc count breaks ties.
    Strong,
    /// Pure disc count.
    Weak,
}

impl EvaluatorPreset {
    pub fn weights(&self) -> Weights {
        match self {
            EvaluatorPreset::Strong => STRONG_WEIGHTS,
            EvaluatorPreset::Weak => WEAK_WEIGHTS,
        }
    }
}

impl Default for EvaluatorPreset {
    fn default() -> Self {
        EvaluatorPreset::Strong
    }
}

impl fmt::Display for EvaluatorPreset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let preset_str = match self {
            EvaluatorPreset::Strong => "strong",
            EvaluatorPreset::Weak => "weak",
        };
        write!(f, "{}", preset_str)
    }
}

// used for parsing cli args
impl FromStr for EvaluatorPreset {
    type Err = &'static str;
    fn from_str(preset: &str) -> Result<Self, Self::Err> {
        match preset {
            "strong" => Ok(EvaluatorPreset::Strong),
            "weak" => Ok(EvaluatorPreset::Weak),
            _ => Err("invalid evaluator; options are: strong, weak"),
        }
    }
}
