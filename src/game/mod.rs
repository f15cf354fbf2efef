pub mod players;

use std::fmt;

use crate::rules::Color;
use crate::rules::board::Board;
use crate::rules::board::squares::Square;
use crate::rules::pieces::{FairyType, Piece, PieceType};

use self::players::Player;


#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum GameState {
    WhiteWon,
    BlackWon,
    Unfinished,
}

impl GameState {
    pub fn value(&self) -> &str {
        return match self {
            Self::WhiteWon   => "WHITE_WON",
            Self::BlackWon   => "BLACK_WON",
            Self::Unfinished => "UNFINISHED",
        }
    }
}


#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum RuleViolation {
    GameAlreadyWon,
    MalformedSquare,
    EmptyOrigin,
    EnemyPieceAtOrigin,
    IllegalDestination,
    UnknownFairyToken,
    WrongColorFairy,
    FairyAlreadyPlayed,
    InsufficientFairyPoints,
    IllegalEntrySquare,
}

impl RuleViolation {
    pub fn message(&self) -> &str {
        return match self {
            Self::GameAlreadyWon          => "game already won",
            Self::MalformedSquare         => "square notation not recognized",
            Self::EmptyOrigin             => "no piece at origin",
            Self::EnemyPieceAtOrigin      => "enemy piece at origin",
            Self::IllegalDestination      => "destination not allowed",
            Self::UnknownFairyToken       => "fairy token not recognized",
            Self::WrongColorFairy         => "fairy piece is enemy color",
            Self::FairyAlreadyPlayed      => "fairy piece already played",
            Self::InsufficientFairyPoints => "not enough fairy points",
            Self::IllegalEntrySquare      => "not a legal entry square",
        }
    }
}

impl fmt::Display for RuleViolation {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Invalid play; {}", self.message())
    }
}


#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct MoveOutcome {
    pub mover: Color,
    pub captured: Option<Piece>,
    pub fairy_point_to: Option<Color>,
    pub winner: Option<Color>,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct EntryOutcome {
    pub color: Color,
    pub fairy: FairyType,
}


pub struct Game {
    board: Board,
    white: Player,
    black: Player,
    to_move: Color,
    winner: Option<Color>,
}

impl Game {
    pub fn new() -> Game {
        return Game {
            board: Board::from_starting_position(),
            white: Player::new(Color::White),
            black: Player::new(Color::Black),
            to_move: Color::White,
            winner: None,
        }
    }

    pub fn get_current_turn(&self) -> Color {
        return self.to_move;
    }

    pub fn get_game_state(&self) -> GameState {
        return match self.winner {
            Some(Color::White) => GameState::WhiteWon,
            Some(Color::Black) => GameState::BlackWon,
            None => GameState::Unfinished,
        }
    }

    pub fn get_board(&self) -> &Board {
        return &self.board;
    }

    pub fn get_player(&self, color: Color) -> &Player {
        return match color {
            Color::White => &self.white,
            Color::Black => &self.black,
        }
    }

    fn get_player_mut(&mut self, color: Color) -> &mut Player {
        return match color {
            Color::White => &mut self.white,
            Color::Black => &mut self.black,
        }
    }

    fn change_turn(&mut self) {
        self.to_move = self.to_move.swap();
    }

    pub fn make_move(&mut self, orig: &str, dest: &str) -> Result<MoveOutcome, RuleViolation> {
        if self.winner.is_some() {
            return Err(RuleViolation::GameAlreadyWon);
        }
        let orig_square = Square::from_notation(orig).ok_or(RuleViolation::MalformedSquare)?;
        let dest_square = Square::from_notation(dest).ok_or(RuleViolation::MalformedSquare)?;
        let piece = self.board.get(orig_square).ok_or(RuleViolation::EmptyOrigin)?;
        if piece.color != self.to_move {
            return Err(RuleViolation::EnemyPieceAtOrigin);
        }
        if !self.board.valid_destinations(orig_square).contains(&dest_square) {
            return Err(RuleViolation::IllegalDestination);
        }

        let captured = self.board.place(dest_square, Some(piece));
        self.board.place(orig_square, None);

        let mut fairy_point_to = None;
        match captured {
            Some(taken) if taken.piece_type == PieceType::King => {
                // Taking the king ends the game on the spot; the turn
                // stays with the winner.
                self.winner = Some(piece.color);
            }
            Some(taken) => {
                self.change_turn();
                if taken.piece_type.awards_fairy_point() {
                    // The point goes to the side that just lost the piece,
                    // which is now the side to move.
                    let credited = self.to_move;
                    self.get_player_mut(credited).earn_fairy_point();
                    fairy_point_to = Some(credited);
                }
            }
            None => self.change_turn(),
        }

        return Ok(MoveOutcome {
            mover: piece.color,
            captured: captured,
            fairy_point_to: fairy_point_to,
            winner: self.winner,
        });
    }

    pub fn enter_fairy_piece(&mut self, token: &str, pos: &str) -> Result<EntryOutcome, RuleViolation> {
        if self.winner.is_some() {
            return Err(RuleViolation::GameAlreadyWon);
        }
        let (fairy, color) = FairyType::from_token(token).ok_or(RuleViolation::UnknownFairyToken)?;
        if color != self.to_move {
            return Err(RuleViolation::WrongColorFairy);
        }
        let square = Square::from_notation(pos).ok_or(RuleViolation::MalformedSquare)?;
        let player = self.get_player(color);
        if !player.has_in_reserve(fairy) {
            return Err(RuleViolation::FairyAlreadyPlayed);
        }
        if player.get_fairy_points() < player.entry_threshold() {
            return Err(RuleViolation::InsufficientFairyPoints);
        }
        if !square.in_home_ranks(color) || self.board.get(square).is_some() {
            return Err(RuleViolation::IllegalEntrySquare);
        }

        self.board.place(square, Some(Piece { color: color, piece_type: fairy.piece_type() }));
        self.get_player_mut(color).remove_from_reserve(fairy);
        self.change_turn();

        return Ok(EntryOutcome { color: color, fairy: fairy });
    }
}
