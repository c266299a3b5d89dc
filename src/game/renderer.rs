use std::time::Duration;

use crate::alpha_beta_searcher::SearchStats;
use crate::board::{Board, Color, Square};
use crate::evaluate::GameOutcome;

use super::display::GameDisplay;
use super::observer::{GameObserver, TurnStatus};

/// Draws every board change to the terminal.
pub struct TerminalRenderer {
    ui: GameDisplay,
    show_stats: bool,
    /// The engine can calculate moves very quickly, so adding a slight delay
    /// between computer moves makes the game easier to observe.
    delay_between_moves: Option<Duration>,
    last_move: Option<String>,
    notice: Option<String>,
    stats: Option<String>,
}

impl TerminalRenderer {
    pub fn new(show_stats: bool, delay_between_moves: Option<Duration>) -> Self {
        Self {
            ui: GameDisplay::new(),
            show_stats,
            delay_between_moves,
            last_move: None,
            notice: None,
            stats: None,
        }
    }

    /// Board only, for two humans sharing a terminal.
    pub fn simple() -> Self {
        Self::new(false, None)
    }
}

pub fn format_stats(player: Color, stats: &SearchStats) -> String {
    format!(
        "* {} score: {}\n* Positions searched: {} (depth: {}, cutoffs: {})\n* Move took: {}",
        player,
        stats.last_score.map_or("-".to_string(), |s| s.to_string()),
        stats.positions_searched,
        stats.depth,
        stats.termination_count,
        stats
            .last_search_duration
            .map_or("-".to_string(), |d| format!("{:?}", d))
    )
}

impl GameObserver for TerminalRenderer {
    fn on_board_changed(&mut self, snapshot: &Board, status: TurnStatus, current_player: Color) {
        self.ui.render_game_state(
            snapshot,
            status,
            current_player,
            self.last_move.as_deref(),
            self.notice.as_deref(),
            self.stats.as_deref(),
        );
        self.notice = None;

        match status {
            TurnStatus::AwaitingHumanMove => println!("Enter your move:"),
            TurnStatus::AwaitingAiMove => {
                if let Some(delay) = self.delay_between_moves {
                    std::thread::sleep(delay);
                }
            }
            TurnStatus::GameOver => {}
        }
    }

    fn on_move(&mut self, player: Color, square: Square, flipped: usize) {
        self.last_move = Some(format!("{} {} ({} flipped)", player, square, flipped));
    }

    fn on_search(&mut self, player: Color, stats: &SearchStats) {
        if self.show_stats {
            self.stats = Some(format_stats(player, stats));
        }
    }

    fn on_pass(&mut self, player: Color) {
        self.notice = Some(format!("{} has no legal moves and passes", player));
    }

    fn on_game_over(&mut self, outcome: GameOutcome) {
        println!("{}", outcome);
        self.last_move = None;
        self.stats = None;
    }
}
