use crate::rules::Color;


// Row 0 is the black home rank (rank 8), row 7 the white home rank (rank 1).
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Square {
    pub row: u8,
    pub col: u8,
}

impl Square {
    pub fn new(row: u8, col: u8) -> Option<Square> {
        if row > 7 || col > 7 {
            return None;
        }
        return Some(Square { row: row, col: col });
    }

    pub fn from_notation(note: &str) -> Option<Square> {
        let mut chars = note.chars();
        let (file, rank) = match (chars.next(), chars.next(), chars.next()) {
            (Some(file), Some(rank), None) => (file.to_ascii_lowercase(), rank),
            _ => return None,
        };
        if !('a'..='h').contains(&file) || !('1'..='8').contains(&rank) {
            return None;
        }
        return Some(Square {
            row: b'8' - rank as u8,
            col: file as u8 - b'a',
        });
    }

    pub fn get_notation_string(&self) -> String {
        return [(b'a' + self.col) as char, (b'8' - self.row) as char].iter().collect();
    }

    pub fn shift(&self, row_shift: i8, col_shift: i8) -> Option<Square> {
        let row = self.row as i8 + row_shift;
        let col = self.col as i8 + col_shift;
        if !(0..8).contains(&row) || !(0..8).contains(&col) {
            return None;
        }
        return Some(Square { row: row as u8, col: col as u8 });
    }

    // The two back rows where a player's fairy pieces may enter.
    pub fn in_home_ranks(&self, color: Color) -> bool {
        return match color {
            Color::White => self.row >= 6,
            Color::Black => self.row <= 1,
        }
    }

    pub fn is_pawn_home_row(&self, color: Color) -> bool {
        return match color {
            Color::White => self.row == 6,
            Color::Black => self.row == 1,
        }
    }
}
