pub mod movement;

use super::Color;


#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum PieceType {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
    Falcon,
    Hunter,
}

impl PieceType {
    pub fn name(&self) -> &'static str {
        return match self {
            Self::Pawn   => "pawn",
            Self::Knight => "knight",
            Self::Bishop => "bishop",
            Self::Rook   => "rook",
            Self::Queen  => "queen",
            Self::King   => "king",
            Self::Falcon => "falcon",
            Self::Hunter => "hunter",
        }
    }

    // Losing one of these pieces earns its owner a fairy point.
    pub fn awards_fairy_point(&self) -> bool {
        return match self {
            Self::Queen | Self::Rook | Self::Bishop | Self::Knight => true,
            Self::Pawn | Self::King | Self::Falcon | Self::Hunter => false,
        }
    }
}


#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum FairyType {
    Falcon,
    Hunter,
}

impl FairyType {
    pub fn piece_type(&self) -> PieceType {
        return match self {
            Self::Falcon => PieceType::Falcon,
            Self::Hunter => PieceType::Hunter,
        }
    }

    pub fn name(&self) -> &str {
        return self.piece_type().name();
    }

    // External one-character convention: F/H for white, f/h for black.
    // Decoded into an explicit pair here so nothing past the boundary
    // compares strings.
    pub fn from_token(token: &str) -> Option<(FairyType, Color)> {
        return match token {
            "F" => Some((FairyType::Falcon, Color::White)),
            "f" => Some((FairyType::Falcon, Color::Black)),
            "H" => Some((FairyType::Hunter, Color::White)),
            "h" => Some((FairyType::Hunter, Color::Black)),
            _ => None,
        }
    }
}


#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Piece {
    pub color: Color,
    pub piece_type: PieceType,
}
