use crate::rules::Color;

use super::PieceType;


// North points at the black home rank, so north is forward for white and
// south is forward for black.
pub struct MovementVector {
    pub row_shift: i8,
    pub col_shift: i8,
}

pub const NORTH: MovementVector = MovementVector { row_shift: -1, col_shift:  0 };
pub const SOUTH: MovementVector = MovementVector { row_shift:  1, col_shift:  0 };
pub const EAST:  MovementVector = MovementVector { row_shift:  0, col_shift:  1 };
pub const WEST:  MovementVector = MovementVector { row_shift:  0, col_shift: -1 };

pub const NORTHEAST: MovementVector = MovementVector { row_shift: -1, col_shift:  1 };
pub const SOUTHEAST: MovementVector = MovementVector { row_shift:  1, col_shift:  1 };
pub const SOUTHWEST: MovementVector = MovementVector { row_shift:  1, col_shift: -1 };
pub const NORTHWEST: MovementVector = MovementVector { row_shift: -1, col_shift: -1 };

static KNIGHT_JUMPS: [MovementVector; 8] = [
    MovementVector { row_shift: -2, col_shift:  1 },
    MovementVector { row_shift: -1, col_shift:  2 },
    MovementVector { row_shift:  1, col_shift:  2 },
    MovementVector { row_shift:  2, col_shift:  1 },
    MovementVector { row_shift:  2, col_shift: -1 },
    MovementVector { row_shift:  1, col_shift: -2 },
    MovementVector { row_shift: -1, col_shift: -2 },
    MovementVector { row_shift: -2, col_shift: -1 },
];

lazy_static! {
    pub static ref COMPASS_VECTORS: Vec<&'static MovementVector> =
        vec![&NORTH, &SOUTH, &EAST, &WEST, &NORTHEAST, &SOUTHEAST, &SOUTHWEST, &NORTHWEST];
    pub static ref ORTHOGONAL_VECTORS: Vec<&'static MovementVector> =
        vec![&NORTH, &SOUTH, &EAST, &WEST];
    pub static ref DIAGONAL_VECTORS: Vec<&'static MovementVector> =
        vec![&NORTHEAST, &SOUTHEAST, &SOUTHWEST, &NORTHWEST];
    pub static ref KNIGHT_VECTORS: Vec<&'static MovementVector> =
        KNIGHT_JUMPS.iter().collect();

    pub static ref WHITE_PAWN_ATTACKING_VECTORS: Vec<&'static MovementVector> =
        vec![&NORTHEAST, &NORTHWEST];
    pub static ref BLACK_PAWN_ATTACKING_VECTORS: Vec<&'static MovementVector> =
        vec![&SOUTHEAST, &SOUTHWEST];

    // The falcon steps backward or diagonally forward; the hunter is its
    // mirror image across the forward/backward axis.
    pub static ref WHITE_FALCON_VECTORS: Vec<&'static MovementVector> =
        vec![&SOUTH, &NORTHEAST, &NORTHWEST];
    pub static ref BLACK_FALCON_VECTORS: Vec<&'static MovementVector> =
        vec![&NORTH, &SOUTHEAST, &SOUTHWEST];
    pub static ref WHITE_HUNTER_VECTORS: Vec<&'static MovementVector> =
        vec![&NORTH, &SOUTHEAST, &SOUTHWEST];
    pub static ref BLACK_HUNTER_VECTORS: Vec<&'static MovementVector> =
        vec![&SOUTH, &NORTHEAST, &NORTHWEST];
}


pub struct PieceMovementDetail {
    pub vectors: Vec<&'static MovementVector>,
    pub step_limit: Option<u8>,
}

pub struct PawnMovementDetail {
    pub advancing_vector: &'static MovementVector,
    pub attacking_vectors: Vec<&'static MovementVector>,
}

pub enum MovementDetail {
    Piece(PieceMovementDetail),
    Pawn(PawnMovementDetail),
}


// Total over all piece type and color combinations.
pub fn get_movement_detail(piece_type: PieceType, color: Color) -> MovementDetail {
    return match piece_type {
        PieceType::Pawn => MovementDetail::Pawn(PawnMovementDetail {
            advancing_vector: match color {
                Color::White => &NORTH,
                Color::Black => &SOUTH,
            },
            attacking_vectors: match color {
                Color::White => WHITE_PAWN_ATTACKING_VECTORS.clone(),
                Color::Black => BLACK_PAWN_ATTACKING_VECTORS.clone(),
            },
        }),
        PieceType::Knight => MovementDetail::Piece(PieceMovementDetail {
            vectors: KNIGHT_VECTORS.clone(),
            step_limit: Some(1),
        }),
        PieceType::Bishop => MovementDetail::Piece(PieceMovementDetail {
            vectors: DIAGONAL_VECTORS.clone(),
            step_limit: None,
        }),
        PieceType::Rook => MovementDetail::Piece(PieceMovementDetail {
            vectors: ORTHOGONAL_VECTORS.clone(),
            step_limit: None,
        }),
        PieceType::Queen => MovementDetail::Piece(PieceMovementDetail {
            vectors: COMPASS_VECTORS.clone(),
            step_limit: None,
        }),
        PieceType::King => MovementDetail::Piece(PieceMovementDetail {
            vectors: COMPASS_VECTORS.clone(),
            step_limit: Some(1),
        }),
        PieceType::Falcon => MovementDetail::Piece(PieceMovementDetail {
            vectors: match color {
                Color::White => WHITE_FALCON_VECTORS.clone(),
                Color::Black => BLACK_FALCON_VECTORS.clone(),
            },
            step_limit: Some(1),
        }),
        PieceType::Hunter => MovementDetail::Piece(PieceMovementDetail {
            vectors: match color {
                Color::White => WHITE_HUNTER_VECTORS.clone(),
                Color::Black => BLACK_HUNTER_VECTORS.clone(),
            },
            step_limit: Some(1),
        }),
    }
}
