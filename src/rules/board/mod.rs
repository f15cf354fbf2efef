pub mod squares;

use crate::util::FxIndexSet;

use self::squares::Square;

use super::Color;
use super::pieces::{Piece, PieceType};
use super::pieces::movement::{get_movement_detail, MovementDetail, MovementVector};


const BACK_RANK: [PieceType; 8] = [
    PieceType::Rook,
    PieceType::Knight,
    PieceType::Bishop,
    PieceType::Queen,
    PieceType::King,
    PieceType::Bishop,
    PieceType::Knight,
    PieceType::Rook,
];


#[derive(Clone, PartialEq, Eq)]
pub struct Board {
    grid: [[Option<Piece>; 8]; 8],
}

impl Board {
    pub fn empty() -> Board {
        return Board { grid: [[None; 8]; 8] };
    }

    pub fn from_starting_position() -> Board {
        let mut board = Board::empty();
        for (col, piece_type) in BACK_RANK.into_iter().enumerate() {
            board.grid[0][col] = Some(Piece { color: Color::Black, piece_type: piece_type });
            board.grid[7][col] = Some(Piece { color: Color::White, piece_type: piece_type });
        }
        for col in 0..8 {
            board.grid[1][col] = Some(Piece { color: Color::Black, piece_type: PieceType::Pawn });
            board.grid[6][col] = Some(Piece { color: Color::White, piece_type: PieceType::Pawn });
        }
        return board;
    }

    pub fn get(&self, square: Square) -> Option<Piece> {
        return self.grid[square.row as usize][square.col as usize];
    }

    // Raw placement; legality is the caller's problem. Returns whatever
    // previously occupied the square.
    pub fn place(&mut self, square: Square, piece: Option<Piece>) -> Option<Piece> {
        let captured = self.grid[square.row as usize][square.col as usize];
        self.grid[square.row as usize][square.col as usize] = piece;
        return captured;
    }

    pub fn valid_destinations(&self, square: Square) -> FxIndexSet<Square> {
        let mut destinations: FxIndexSet<Square> = Default::default();
        let piece = match self.get(square) {
            Some(piece) => piece,
            None => return destinations,
        };
        match get_movement_detail(piece.piece_type, piece.color) {
            MovementDetail::Piece(detail) => {
                for vector in detail.vectors {
                    self.scan(square, vector, detail.step_limit, piece.color, true, &mut destinations);
                }
            }
            MovementDetail::Pawn(detail) => {
                // Straight pushes never capture and reach two squares only
                // from the pawn's own home row.
                let step_limit = match square.is_pawn_home_row(piece.color) {
                    true => Some(2),
                    false => Some(1),
                };
                self.scan(square, detail.advancing_vector, step_limit, piece.color, false, &mut destinations);
                for vector in detail.attacking_vectors {
                    if let Some(target) = square.shift(vector.row_shift, vector.col_shift) {
                        match self.get(target) {
                            Some(occupant) if occupant.color != piece.color => {
                                destinations.insert(target);
                            }
                            _ => (),
                        }
                    }
                }
            }
        }
        return destinations;
    }

    // Walks one direction from the origin, collecting empty squares until
    // the step limit runs out, the walk falls off the board, or a piece
    // blocks the path. The blocking square is collected only for a
    // capturable enemy piece.
    fn scan(
        &self,
        origin: Square,
        vector: &MovementVector,
        step_limit: Option<u8>,
        color: Color,
        can_capture: bool,
        destinations: &mut FxIndexSet<Square>,
    ) {
        let mut current = origin;
        let mut remaining = step_limit;
        loop {
            if remaining == Some(0) {
                return;
            }
            current = match current.shift(vector.row_shift, vector.col_shift) {
                Some(square) => square,
                None => return,
            };
            match self.get(current) {
                Some(occupant) => {
                    if can_capture && occupant.color != color {
                        destinations.insert(current);
                    }
                    return;
                }
                None => {
                    destinations.insert(current);
                }
            }
            if let Some(steps) = remaining.as_mut() {
                *steps -= 1;
            }
        }
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    fn sq(note: &str) -> Square {
        return Square::from_notation(note).unwrap();
    }

    fn put(board: &mut Board, note: &str, color: Color, piece_type: PieceType) {
        board.place(sq(note), Some(Piece { color: color, piece_type: piece_type }));
    }

    fn destinations(board: &Board, note: &str) -> Vec<String> {
        let mut notes: Vec<String> = board.valid_destinations(sq(note))
            .into_iter()
            .map(|square| square.get_notation_string())
            .collect();
        notes.sort();
        return notes;
    }

    #[test]
    fn starting_position_layout() {
        let board = Board::from_starting_position();
        assert_eq!(
            Some(Piece { color: Color::Black, piece_type: PieceType::Rook }),
            board.get(sq("a8"))
        );
        assert_eq!(
            Some(Piece { color: Color::Black, piece_type: PieceType::Queen }),
            board.get(sq("d8"))
        );
        assert_eq!(
            Some(Piece { color: Color::White, piece_type: PieceType::King }),
            board.get(sq("e1"))
        );
        for col in 0..8 {
            assert_eq!(
                Some(Piece { color: Color::White, piece_type: PieceType::Pawn }),
                board.get(Square::new(6, col).unwrap())
            );
            assert_eq!(
                Some(Piece { color: Color::Black, piece_type: PieceType::Pawn }),
                board.get(Square::new(1, col).unwrap())
            );
            assert_eq!(None, board.get(Square::new(4, col).unwrap()));
        }
    }

    #[test]
    fn empty_square_has_no_destinations() {
        let board = Board::from_starting_position();
        assert!(board.valid_destinations(sq("e4")).is_empty());
    }

    #[test]
    fn place_returns_prior_occupant() {
        let mut board = Board::empty();
        put(&mut board, "d4", Color::Black, PieceType::Knight);
        let captured = board.place(sq("d4"), Some(Piece { color: Color::White, piece_type: PieceType::Queen }));
        assert_eq!(Some(Piece { color: Color::Black, piece_type: PieceType::Knight }), captured);
        assert_eq!(None, board.place(sq("a1"), None));
    }

    #[test]
    fn rook_scans_until_blocked() {
        let mut board = Board::empty();
        put(&mut board, "d4", Color::White, PieceType::Rook);
        put(&mut board, "d6", Color::White, PieceType::Pawn);
        put(&mut board, "f4", Color::Black, PieceType::Pawn);
        let moves = board.valid_destinations(sq("d4"));
        // North stops short of the friendly pawn.
        assert!(moves.contains(&sq("d5")));
        assert!(!moves.contains(&sq("d6")));
        assert!(!moves.contains(&sq("d7")));
        // East includes the enemy pawn but nothing beyond it.
        assert!(moves.contains(&sq("e4")));
        assert!(moves.contains(&sq("f4")));
        assert!(!moves.contains(&sq("g4")));
        // South and west run to the board edge.
        assert!(moves.contains(&sq("d1")));
        assert!(moves.contains(&sq("a4")));
        // Rooks do not move diagonally.
        assert!(!moves.contains(&sq("e5")));
    }

    #[test]
    fn bishop_scans_diagonals_only() {
        let mut board = Board::empty();
        put(&mut board, "c1", Color::White, PieceType::Bishop);
        put(&mut board, "g5", Color::Black, PieceType::Knight);
        let moves = destinations(&board, "c1");
        assert_eq!(vec!["a3", "b2", "d2", "e3", "f4", "g5"], moves);
    }

    #[test]
    fn queen_combines_rook_and_bishop_lines() {
        let mut board = Board::empty();
        put(&mut board, "a1", Color::White, PieceType::Queen);
        let moves = board.valid_destinations(sq("a1"));
        assert_eq!(21, moves.len());
        assert!(moves.contains(&sq("a8")));
        assert!(moves.contains(&sq("h1")));
        assert!(moves.contains(&sq("h8")));
    }

    #[test]
    fn king_steps_once_in_each_direction() {
        let mut board = Board::empty();
        put(&mut board, "e4", Color::White, PieceType::King);
        assert_eq!(8, board.valid_destinations(sq("e4")).len());

        put(&mut board, "e5", Color::White, PieceType::Pawn);
        put(&mut board, "d4", Color::Black, PieceType::Pawn);
        let moves = board.valid_destinations(sq("e4"));
        assert_eq!(7, moves.len());
        assert!(!moves.contains(&sq("e5")));
        assert!(moves.contains(&sq("d4")));
        assert!(!moves.contains(&sq("e6")));
    }

    #[test]
    fn knight_jumps_over_blockers() {
        let board = Board::from_starting_position();
        let moves = destinations(&board, "b1");
        assert_eq!(vec!["a3", "c3"], moves);
    }

    #[test]
    fn pawn_home_row_reaches_two_squares() {
        let board = Board::from_starting_position();
        assert_eq!(vec!["a3", "a4"], destinations(&board, "a2"));
        assert_eq!(vec!["e5", "e6"], destinations(&board, "e7"));
    }

    #[test]
    fn pawn_off_home_row_reaches_one_square() {
        let mut board = Board::empty();
        put(&mut board, "a4", Color::White, PieceType::Pawn);
        assert_eq!(vec!["a5"], destinations(&board, "a4"));
    }

    #[test]
    fn pawn_cannot_push_into_or_through_a_piece() {
        let mut board = Board::empty();
        put(&mut board, "e2", Color::White, PieceType::Pawn);
        put(&mut board, "e3", Color::Black, PieceType::Rook);
        assert!(board.valid_destinations(sq("e2")).is_empty());

        board.place(sq("e3"), None);
        put(&mut board, "e4", Color::White, PieceType::Knight);
        // The first square opens up but the double step stays blocked.
        assert_eq!(vec!["e3"], destinations(&board, "e2"));
    }

    #[test]
    fn pawn_diagonal_requires_an_enemy() {
        let mut board = Board::empty();
        put(&mut board, "d4", Color::White, PieceType::Pawn);
        put(&mut board, "c5", Color::Black, PieceType::Pawn);
        put(&mut board, "e5", Color::White, PieceType::Knight);
        let moves = destinations(&board, "d4");
        assert_eq!(vec!["c5", "d5"], moves);

        let mut board = Board::empty();
        put(&mut board, "d5", Color::Black, PieceType::Pawn);
        put(&mut board, "c4", Color::White, PieceType::Bishop);
        let moves = destinations(&board, "d5");
        assert_eq!(vec!["c4", "d4"], moves);
    }

    #[test]
    fn falcon_steps_backward_and_diagonally_forward() {
        let mut board = Board::empty();
        put(&mut board, "d4", Color::White, PieceType::Falcon);
        assert_eq!(vec!["c5", "d3", "e5"], destinations(&board, "d4"));

        let mut board = Board::empty();
        put(&mut board, "d4", Color::Black, PieceType::Falcon);
        assert_eq!(vec!["c3", "d5", "e3"], destinations(&board, "d4"));
    }

    #[test]
    fn hunter_steps_forward_and_diagonally_backward() {
        let mut board = Board::empty();
        put(&mut board, "d4", Color::White, PieceType::Hunter);
        assert_eq!(vec!["c3", "d5", "e3"], destinations(&board, "d4"));

        let mut board = Board::empty();
        put(&mut board, "d4", Color::Black, PieceType::Hunter);
        assert_eq!(vec!["c5", "d3", "e5"], destinations(&board, "d4"));
    }

    #[test]
    fn fairy_pieces_can_capture_but_not_pass_friends() {
        let mut board = Board::empty();
        put(&mut board, "d4", Color::White, PieceType::Falcon);
        put(&mut board, "c5", Color::Black, PieceType::Pawn);
        put(&mut board, "d3", Color::White, PieceType::Pawn);
        let moves = destinations(&board, "d4");
        assert_eq!(vec!["c5", "e5"], moves);
    }

    #[test]
    fn no_destination_is_ever_friendly() {
        let board = Board::from_starting_position();
        for row in 0..8 {
            for col in 0..8 {
                let square = Square::new(row, col).unwrap();
                let piece = match board.get(square) {
                    Some(piece) => piece,
                    None => continue,
                };
                for destination in board.valid_destinations(square) {
                    match board.get(destination) {
                        Some(occupant) => assert_ne!(
                            piece.color, occupant.color,
                            "{} offers a friendly capture", square.get_notation_string()
                        ),
                        None => (),
                    }
                }
            }
        }
    }
}
