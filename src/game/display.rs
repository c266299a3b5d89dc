use std::fmt::Write;

use termion::{clear, cursor};

use crate::board::{Board, Cell, Color, Square};

use super::observer::TurnStatus;

pub struct GameDisplay {
    buffer: String,
}

impl Default for GameDisplay {
    fn default() -> Self {
        Self::new()
    }
}

impl GameDisplay {
    pub fn new() -> Self {
        Self {
            buffer: String::with_capacity(2048),
        }
    }

    pub fn clear(&mut self) {
        self.buffer.clear();
        write!(self.buffer, "{}{}", cursor::Goto(1, 1), clear::All).unwrap();
    }

    /// Draws one frame into the buffer without printing it.
    pub fn compose(
        &mut self,
        board: &Board,
        status: TurnStatus,
        current_turn: Color,
        last_move: Option<&str>,
        notice: Option<&str>,
        stats: Option<&str>,
    ) {
        self.clear();
        let size = board.size();

        // Board header
        let header = column_labels(size);
        self.buffer.push_str(&header);
        self.buffer.push_str(&horizontal_rule(size, '┌', '┬', '┐'));

        // Board squares
        for row in 0..size {
            self.buffer.push_str(&format!("{:>2} │", row + 1));
            for col in 0..size {
                let cell_str = match board.get(Square::new(row, col)) {
                    Cell::Black => '●',
                    Cell::White => '○',
                    Cell::Candidate => '·',
                    Cell::Empty => ' ',
                };
                self.buffer.push_str(&format!(" {} │", cell_str));
            }
            self.buffer.push_str(&format!(" {}\n", row + 1));

            if row + 1 < size {
                self.buffer.push_str(&horizontal_rule(size, '├', '┼', '┤'));
            } else {
                self.buffer.push_str(&horizontal_rule(size, '└', '┴', '┘'));
            }
        }

        // Board footer
        self.buffer.push_str(&header);
        self.buffer.push('\n');

        // Game info
        self.buffer.push_str(&format!(
            "Black: {}  White: {}\n",
            board.disc_count(Color::Black),
            board.disc_count(Color::White)
        ));
        match status {
            TurnStatus::GameOver => self.buffer.push_str("Game over\n"),
            _ => self.buffer.push_str(&format!("Turn: {}\n", current_turn)),
        }

        if let Some(notation) = last_move {
            self.buffer.push_str(&format!("Last move: {}\n", notation));
        }

        if let Some(notice) = notice {
            self.buffer.push_str(&format!("{}\n", notice));
        }

        if let Some(stats) = stats {
            self.buffer.push_str(&format!("\n{}\n", stats));
        }
    }

    pub fn render_game_state(
        &mut self,
        board: &Board,
        status: TurnStatus,
        current_turn: Color,
        last_move: Option<&str>,
        notice: Option<&str>,
        stats: Option<&str>,
    ) {
        self.compose(board, status, current_turn, last_move, notice, stats);

        // Print the complete frame
        print!("{}", self.buffer);
    }

    pub fn buffer(self) -> String {
        self.buffer
    }
}

fn column_labels(size: usize) -> String {
    let mut labels = String::from("   ");
    for col in 0..size {
        labels.push_str(&format!("  {} ", (b'a' + col as u8) as char));
    }
    labels.push('\n');
    labels
}

fn horizontal_rule(size: usize, left: char, middle: char, right: char) -> String {
    let mut rule = format!("   {}", left);
    for col in 0..size {
        rule.push_str("───");
        rule.push(if col + 1 < size { middle } else { right });
    }
    rule.push('\n');
    rule
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frame_layout() {
        let mut display = GameDisplay::new();
        display.compose(
            &Board::with_size(4).unwrap(),
            TurnStatus::AwaitingHumanMove,
            Color::Black,
            Some("black c1"),
            None,
            None,
        );
        let frame = display.buffer();

        assert!(frame.contains("     a   b   c   d \n"));
        assert!(frame.contains("   ┌───┬───┬───┬───┐\n"));
        assert!(frame.contains(" 2 │   │ ○ │ ● │   │ 2\n"));
        assert!(frame.contains("   └───┴───┴───┴───┘\n"));
        assert!(frame.contains("Black: 2  White: 2\n"));
        assert!(frame.contains("Turn: black\n"));
        assert!(frame.contains("Last move: black c1\n"));
    }

    #[test]
    fn test_game_over_frame() {
        let mut display = GameDisplay::new();
        display.compose(
            &Board::with_size(4).unwrap(),
            TurnStatus::GameOver,
            Color::White,
            None,
            Some("Tie: 2 to 2"),
            None,
        );
        let frame = display.buffer();
        assert!(frame.contains("Game over\n"));
        assert!(!frame.contains("Turn:"));
        assert!(frame.contains("Tie: 2 to 2\n"));
    }
}
