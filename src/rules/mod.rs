//! Placement legality and disc flipping.
//!
//! A placement is legal when, in at least one of the eight directions, the
//! cells next to it form an unbroken run of opponent discs that is closed off
//! by one of the mover's own discs. Every such run flips to the mover's color.
//! Directions are independent of each other, so one placement can flip runs
//! in several directions at once.

pub mod direction;

use smallvec::SmallVec;
use thiserror::Error;

use crate::board::{Board, Cell, Color, Square};

pub use direction::{Direction, ALL_DIRECTIONS};

#[derive(Error, Debug, PartialEq, Eq)]
pub enum RuleError {
    #[error("cannot place a disc on {square}, the square is occupied")]
    Occupied { square: Square },
    #[error("placing a disc on {square} does not flip any discs")]
    NoFlips { square: Square },
}

/// Walks from `origin` in `direction` and returns the number of opponent
/// discs bracketed between `origin` and the nearest disc of `player`.
///
/// Returns `None` when the direction is not valid: the first step leaves the
/// board or does not hold an opponent disc, or the run of opponent discs hits
/// the edge or a vacant cell before reaching one of the player's discs.
pub fn bracketed_run(
    board: &Board,
    player: Color,
    origin: Square,
    direction: Direction,
) -> Option<usize> {
    let size = board.size();
    let opponent = player.opposite();

    let mut current = direction.step(origin, size)?;
    if !board.get(current).is_disc_of(opponent) {
        return None;
    }

    let mut crossed = 1;
    loop {
        current = direction.step(current, size)?;
        match board.get(current).color() {
            Some(color) if color == player => return Some(crossed),
            Some(_) => crossed += 1,
            None => return None,
        }
    }
}

/// Checks a single direction for a valid placement at `origin`. When the
/// direction is valid and `test_only` is false, the bracketed run is flipped
/// and `origin` receives the player's disc.
pub fn check_direction(
    board: &mut Board,
    player: Color,
    origin: Square,
    direction: Direction,
    test_only: bool,
) -> bool {
    match bracketed_run(board, player, origin, direction) {
        Some(run) => {
            if !test_only {
                apply_flip(board, player, origin, direction, run);
            }
            true
        }
        None => false,
    }
}

/// Overwrites `run` opponent discs, starting one step from `origin`, with the
/// player's color and then claims `origin` itself.
pub fn apply_flip(
    board: &mut Board,
    player: Color,
    origin: Square,
    direction: Direction,
    run: usize,
) {
    let size = board.size();
    let disc = Cell::from(player);
    let mut current = origin;
    for _ in 0..run {
        current = direction
            .step(current, size)
            .expect("a bracketed run never leaves the board");
        board.set(current, disc);
    }
    board.set(origin, disc);
}

/// Evaluates all eight directions. In test mode the board is left untouched
/// and the scan stops at the first valid direction; otherwise every valid
/// direction is flipped. An occupied origin is never valid, and a rejected
/// placement leaves the board as it was in either mode.
pub fn check_all_directions(
    board: &mut Board,
    player: Color,
    origin: Square,
    test_only: bool,
) -> bool {
    if test_only {
        board.get(origin).is_vacant()
            && ALL_DIRECTIONS
                .iter()
                .any(|&direction| check_direction(board, player, origin, direction, true))
    } else {
        place(board, player, origin).is_ok()
    }
}

/// Returns true if `player` may place a disc on `square`.
#[inline(always)]
pub fn is_legal(board: &Board, player: Color, square: Square) -> bool {
    board.get(square).is_vacant()
        && ALL_DIRECTIONS
            .iter()
            .any(|&direction| bracketed_run(board, player, square, direction).is_some())
}

/// Every direction with a bracketed run from `square`, paired with its length.
pub fn flip_runs(
    board: &Board,
    player: Color,
    square: Square,
) -> SmallVec<[(Direction, usize); 8]> {
    ALL_DIRECTIONS
        .iter()
        .filter_map(|&direction| {
            bracketed_run(board, player, square, direction).map(|run| (direction, run))
        })
        .collect()
}

/// Places a disc for `player` on `square` and flips every bracketed run.
/// Returns the number of flipped discs.
///
/// The placement is all-or-nothing: if the square is occupied or no direction
/// flips anything, the board is not modified.
pub fn place(board: &mut Board, player: Color, square: Square) -> Result<usize, RuleError> {
    if !board.get(square).is_vacant() {
        return Err(RuleError::Occupied { square });
    }

    let runs = flip_runs(board, player, square);
    if runs.is_empty() {
        return Err(RuleError::NoFlips { square });
    }

    let mut flipped = 0;
    for (direction, run) in runs {
        apply_flip(board, player, square, direction, run);
        flipped += run;
    }
    Ok(flipped)
}

#[cfg(test)]
mod tests {
    use super::direction::*;
    use super::*;
    use crate::reversi_position;

    #[test]
    fn test_opening_move_flips_down_the_column() {
        let mut board = Board::starting_position();
        let origin = Square::new(2, 3);

        assert_eq!(bracketed_run(&board, Color::Black, origin, SOUTH), Some(1));
        assert_eq!(bracketed_run(&board, Color::Black, origin, EAST), None);
        assert!(is_legal(&board, Color::Black, origin));

        let flipped = place(&mut board, Color::Black, origin).unwrap();
        assert_eq!(flipped, 1);
        assert_eq!(board.get(origin), Cell::Black);
        assert_eq!(board.get(Square::new(3, 3)), Cell::Black);
        assert_eq!(board.disc_count(Color::Black), 4);
        assert_eq!(board.disc_count(Color::White), 1);
    }

    #[test]
    fn test_first_step_must_be_an_opponent_disc() {
        let board = Board::starting_position();
        // (2, 4) sits above a black disc, so black cannot move there.
        assert_eq!(
            bracketed_run(&board, Color::Black, Square::new(2, 4), SOUTH),
            None
        );
        assert!(!is_legal(&board, Color::Black, Square::new(2, 4)));
    }

    #[test]
    fn test_run_ending_at_the_edge_is_invalid() {
        let board = reversi_position! {
            .WWW
            ....
            ....
            ....
        };
        assert_eq!(
            bracketed_run(&board, Color::Black, Square::new(0, 0), EAST),
            None
        );
    }

    #[test]
    fn test_run_ending_in_a_vacant_cell_is_invalid() {
        let board = reversi_position! {
            .WW.B...
            ........
            ........
            ........
            ........
            ........
            ........
            ........
        };
        assert_eq!(
            bracketed_run(&board, Color::Black, Square::new(0, 0), EAST),
            None
        );
    }

    #[test]
    fn test_long_run_is_flipped_up_to_the_anchor() {
        let mut board = reversi_position! {
            .WWWWWB.
            ........
            ........
            ........
            ........
            ........
            ........
            ........
        };
        assert_eq!(
            bracketed_run(&board, Color::Black, Square::new(0, 0), EAST),
            Some(5)
        );
        assert_eq!(place(&mut board, Color::Black, Square::new(0, 0)), Ok(5));
        for col in 0..7 {
            assert_eq!(board.get(Square::new(0, col)), Cell::Black);
        }
        assert_eq!(board.get(Square::new(0, 7)), Cell::Empty);
    }

    #[test]
    fn test_multiple_directions_flip_together() {
        let mut board = reversi_position! {
            B.B.B...
            .WWW....
            BW.WB...
            .WWW....
            B.B.B...
            ........
            ........
            ........
        };
        let origin = Square::new(2, 2);
        assert_eq!(flip_runs(&board, Color::Black, origin).len(), 8);

        assert_eq!(place(&mut board, Color::Black, origin), Ok(8));
        assert_eq!(board.disc_count(Color::White), 0);
        assert_eq!(board.disc_count(Color::Black), 17);
    }

    #[test]
    fn test_check_direction_test_only_does_not_mutate() {
        let mut board = Board::starting_position();
        let before = board.clone();
        assert!(check_direction(
            &mut board,
            Color::Black,
            Square::new(2, 3),
            SOUTH,
            true
        ));
        assert_eq!(board, before);

        assert!(check_direction(
            &mut board,
            Color::Black,
            Square::new(2, 3),
            SOUTH,
            false
        ));
        assert_eq!(board.get(Square::new(2, 3)), Cell::Black);
        assert_eq!(board.get(Square::new(3, 3)), Cell::Black);
    }

    #[test]
    fn test_check_all_directions_applies_every_direction() {
        let mut board = reversi_position! {
            ....
            BWWB
            .W..
            .B..
        };
        // (0, 1) brackets two whites to the south; the diagonals are open.
        assert!(check_all_directions(
            &mut board,
            Color::Black,
            Square::new(0, 1),
            true
        ));
        assert_eq!(board.get(Square::new(0, 1)), Cell::Empty);

        assert!(check_all_directions(
            &mut board,
            Color::Black,
            Square::new(0, 1),
            false
        ));
        assert_eq!(board.get(Square::new(0, 1)), Cell::Black);
        assert_eq!(board.get(Square::new(1, 1)), Cell::Black);
        assert_eq!(board.get(Square::new(2, 1)), Cell::Black);
    }

    #[test]
    fn test_check_all_directions_rejects_an_occupied_origin() {
        let mut board = reversi_position! {
            BWB.
            .WB.
            .BW.
            ....
        };
        let before = board.clone();
        let origin = Square::new(0, 0);

        assert!(!check_all_directions(&mut board, Color::Black, origin, true));
        assert!(!check_all_directions(&mut board, Color::Black, origin, false));
        assert!(!check_all_directions(&mut board, Color::White, origin, false));
        assert_eq!(board, before);
    }

    #[test]
    fn test_place_on_occupied_square() {
        let mut board = Board::starting_position();
        let before = board.clone();
        assert_eq!(
            place(&mut board, Color::Black, Square::new(3, 4)),
            Err(RuleError::Occupied {
                square: Square::new(3, 4)
            })
        );
        assert_eq!(board, before);
    }

    #[test]
    fn test_place_without_flips() {
        let mut board = Board::starting_position();
        let before = board.clone();
        assert_eq!(
            place(&mut board, Color::Black, Square::new(0, 0)),
            Err(RuleError::NoFlips {
                square: Square::new(0, 0)
            })
        );
        assert_eq!(board, before);
    }

    #[test]
    fn test_candidate_cells_can_be_played() {
        let mut board = reversi_position! {
            ....
            .WB*
            .BW.
            ....
        };
        assert!(is_legal(&board, Color::White, Square::new(1, 3)));
        assert_eq!(place(&mut board, Color::White, Square::new(1, 3)), Ok(1));
        assert_eq!(board.get(Square::new(1, 3)), Cell::White);
    }
}
