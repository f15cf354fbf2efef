use crate::rules::Color;
use crate::rules::pieces::FairyType;


// Pure per-side state: which fairy pieces are still waiting to enter and
// how many fairy points the side has accumulated. All rule enforcement
// lives in Game.
pub struct Player {
    color: Color,
    reserve: Vec<FairyType>,
    fairy_points: u32,
}

impl Player {
    pub fn new(color: Color) -> Player {
        return Player {
            color: color,
            reserve: vec![FairyType::Falcon, FairyType::Hunter],
            fairy_points: 0,
        }
    }

    pub fn get_color(&self) -> Color {
        return self.color;
    }

    pub fn get_reserve(&self) -> &[FairyType] {
        return &self.reserve;
    }

    pub fn get_fairy_points(&self) -> u32 {
        return self.fairy_points;
    }

    pub fn has_in_reserve(&self, fairy: FairyType) -> bool {
        return self.reserve.contains(&fairy);
    }

    // Entering the first fairy piece takes one point, entering the second
    // takes two. Points gate entry; they are never spent.
    pub fn entry_threshold(&self) -> u32 {
        return match self.reserve.len() {
            2 => 1,
            _ => 2,
        }
    }

    // Callers check has_in_reserve first.
    pub fn remove_from_reserve(&mut self, fairy: FairyType) {
        self.reserve.retain(|held| *held != fairy);
    }

    pub fn earn_fairy_point(&mut self) {
        self.fairy_points += 1;
    }
}
