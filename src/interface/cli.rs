use std::collections::HashSet;

use tabled::{Style, Table, Tabled};

use crate::game::{Game, GameState, MoveOutcome};
use crate::interface::shell::InteractiveShell;
use crate::rules::Color;
use crate::rules::board::squares::Square;
use crate::rules::pieces::{FairyType, PieceType};
use crate::util::FxIndexMap;


lazy_static! {
    static ref PIECE_GLYPHS: FxIndexMap<(Color, PieceType), char> = FxIndexMap::from_iter([
        ((Color::White, PieceType::King),   '♔'),
        ((Color::White, PieceType::Queen),  '♕'),
        ((Color::White, PieceType::Rook),   '♖'),
        ((Color::White, PieceType::Bishop), '♗'),
        ((Color::White, PieceType::Knight), '♘'),
        ((Color::White, PieceType::Pawn),   '♙'),
        ((Color::White, PieceType::Falcon), '▽'),
        ((Color::White, PieceType::Hunter), '□'),
        ((Color::Black, PieceType::King),   '♚'),
        ((Color::Black, PieceType::Queen),  '♛'),
        ((Color::Black, PieceType::Rook),   '♜'),
        ((Color::Black, PieceType::Bishop), '♝'),
        ((Color::Black, PieceType::Knight), '♞'),
        ((Color::Black, PieceType::Pawn),   '♟'),
        ((Color::Black, PieceType::Falcon), '▼'),
        ((Color::Black, PieceType::Hunter), '■'),
    ]);
}


fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    return match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}


#[derive(Tabled)]
struct PlayerSummary {
    color: String,
    reserve: String,
    fairy_points: u32,
}


pub struct Interface {
    shell: InteractiveShell,
    game: Game,
    confirmations: HashSet<String>,
}

impl Interface {
    pub fn new() -> Interface {
        let prompt = "chessvar > ";

        return Interface {
            shell: InteractiveShell::new(Some(prompt)),
            game: Game::new(),
            confirmations: HashSet::from([String::from("y"), String::from("yes")]),
        }
    }

    pub fn init(&mut self) {
        self.do_board();
        self.announce_turn();
        self.shell.empty_line();
        loop {
            let result = self.shell.get_command();
            match result {
                Err(e) => self.shell.output(&e.msg),
                Ok(None) => break,
                Ok(Some(words)) => match words.first().map(|w| w.as_str()) {
                    None => (),
                    Some("move")    => self.do_move(&words[1..]),
                    Some("enter")   => self.do_enter(&words[1..]),
                    Some("falcon")  => self.do_named_fairy(FairyType::Falcon, &words[1..]),
                    Some("hunter")  => self.do_named_fairy(FairyType::Hunter, &words[1..]),
                    Some("board")   => self.do_board(),
                    Some("status")  => self.do_status(),
                    Some("state")   => self.do_state(),
                    Some("new")     => self.do_new(),
                    Some("help")    => self.do_help(),
                    Some("quit") | Some("exit") => break,
                    Some(x) => self.shell.output(&format!("Unknown command '{}', try 'help'", x)),
                }
            };
            self.shell.empty_line();
        }
        self.shell.output("Exiting...");
        self.shell.empty_line();
    }

    fn do_move(&mut self, args: &[String]) {
        let (orig, dest) = match args {
            [orig, dest] => (orig.clone(), dest.clone()),
            _ => {
                self.shell.output("Usage: move <origin> <destination>");
                return;
            }
        };
        let mover = self.game.get_current_turn();
        self.shell.output(&format!("> {} plays {} to {}", capitalize(mover.value()), orig, dest));
        match self.game.make_move(&orig, &dest) {
            Err(violation) => self.shell.output(&violation.to_string()),
            Ok(outcome) => {
                self.report_move(&outcome);
                self.do_board();
                self.announce_turn();
            }
        }
    }

    fn do_enter(&mut self, args: &[String]) {
        let (token, pos) = match args {
            [token, pos] => (token.clone(), pos.clone()),
            _ => {
                self.shell.output("Usage: enter <F|f|H|h> <square>");
                return;
            }
        };
        match self.game.enter_fairy_piece(&token, &pos) {
            Err(violation) => self.shell.output(&violation.to_string()),
            Ok(outcome) => {
                self.shell.output(&format!(
                    "{}'s {} is now in play",
                    capitalize(outcome.color.value()),
                    outcome.fairy.name()
                ));
                self.do_board();
                self.announce_turn();
            }
        }
    }

    // `falcon d1` / `hunter d1` pick the token case from whoever is on turn.
    fn do_named_fairy(&mut self, fairy: FairyType, args: &[String]) {
        let token = match (fairy, self.game.get_current_turn()) {
            (FairyType::Falcon, Color::White) => "F",
            (FairyType::Falcon, Color::Black) => "f",
            (FairyType::Hunter, Color::White) => "H",
            (FairyType::Hunter, Color::Black) => "h",
        };
        let mut enter_args = vec![String::from(token)];
        enter_args.extend_from_slice(args);
        self.do_enter(&enter_args);
    }

    fn report_move(&self, outcome: &MoveOutcome) {
        if let Some(taken) = outcome.captured {
            self.shell.output(&format!(
                "{} captures {}'s {}",
                capitalize(outcome.mover.value()),
                taken.color.value(),
                taken.piece_type.name()
            ));
        }
        if let Some(credited) = outcome.fairy_point_to {
            let points = self.game.get_player(credited).get_fairy_points();
            self.shell.output(&format!(
                "{} has {} fairy point{}",
                capitalize(credited.value()),
                points,
                match points { 1 => "", _ => "s" }
            ));
        }
    }

    fn announce_turn(&self) {
        match self.game.get_game_state() {
            GameState::Unfinished => self.shell.output(
                &format!("{}'s turn", capitalize(self.game.get_current_turn().value()))
            ),
            _ => self.shell.output(
                &format!("{} wins!", capitalize(self.game.get_current_turn().value()))
            ),
        }
    }

    fn do_board(&self) {
        let board = self.game.get_board();
        for row in 0..8u8 {
            let rank = 8 - row;
            let glyphs: Vec<String> = (0..8u8).map(|col| {
                let square = Square::new(row, col).unwrap();
                match board.get(square) {
                    Some(piece) => PIECE_GLYPHS.get(&(piece.color, piece.piece_type)).unwrap().to_string(),
                    None => String::from("·"),
                }
            }).collect();
            self.shell.output(&format!("  {} {}", rank, glyphs.join(" ")));
        }
        self.shell.output("    a b c d e f g h");
    }

    fn do_status(&self) {
        let rows: Vec<PlayerSummary> = Color::iter().map(|color| {
            let player = self.game.get_player(color);
            let reserve: Vec<String> = player.get_reserve().iter().map(|fairy| {
                PIECE_GLYPHS.get(&(color, fairy.piece_type())).unwrap().to_string()
            }).collect();
            PlayerSummary {
                color: String::from(color.value()),
                reserve: match reserve.is_empty() {
                    true => String::from("-"),
                    false => reserve.join(" "),
                },
                fairy_points: player.get_fairy_points(),
            }
        }).collect();
        let table = Table::new(rows).with(Style::pseudo_clean());
        self.shell.output(&table.to_string());
    }

    fn do_state(&self) {
        self.shell.output(self.game.get_game_state().value());
    }

    fn do_new(&mut self) {
        let confirm = self.shell.input("Are you sure you want to start a new game? All progress on the current game will be lost. (y/N): ");
        let confirmed = match confirm {
            Some(answer) => self.confirmations.contains(&answer.to_lowercase()),
            None => false,
        };
        if confirmed {
            self.game = Game::new();
            self.shell.output("New game started!");
            self.do_board();
            self.announce_turn();
        } else {
            self.shell.output("OK, aborting...");
        }
    }

    fn do_help(&self) {
        self.shell.output("Commands:");
        self.shell.output("  move <origin> <destination>   play a move, e.g. 'move d2 d4'");
        self.shell.output("  enter <F|f|H|h> <square>      enter a fairy piece from reserve");
        self.shell.output("  falcon <square>               enter your falcon");
        self.shell.output("  hunter <square>               enter your hunter");
        self.shell.output("  board                         show the board");
        self.shell.output("  status                        show reserves and fairy points");
        self.shell.output("  state                         show the win state");
        self.shell.output("  new                           start a new game");
        self.shell.output("  quit                          leave");
    }
}
