use ratatui::style::Color;

/// Logical grid dimensions passed through the game as a named type.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct GridSize {
    pub width: u16,
    pub height: u16,
}

impl GridSize {
    /// Returns the center cell (integer halves of each dimension).
    #[must_use]
    pub fn center(self) -> (i32, i32) {
        (i32::from(self.width / 2), i32::from(self.height / 2))
    }
}

/// Playable board: 640x480 px at 20 px per cell.
pub const DEFAULT_GRID: GridSize = GridSize {
    width: 32,
    height: 24,
};

/// Segments in a freshly created snake.
pub const INITIAL_SNAKE_LENGTH: usize = 3;

/// Minimum snake length; starvation never shrinks below head + one segment.
pub const MIN_SNAKE_LENGTH: usize = 2;

/// Spawn attempts made when a game starts.
pub const INITIAL_FOOD_COUNT: usize = 20;

/// Periodic spawning only runs while fewer foods than this are on the board.
pub const MAX_FOOD_COUNT: usize = 20;

/// With more foods than this the enemy hunts food instead of the player.
pub const ENEMY_FOOD_TARGET_THRESHOLD: usize = 5;

/// A snake that has not eaten for longer than this loses a segment.
pub const STARVATION_THRESHOLD_MS: u64 = 5_000;

/// Delay between an enemy death and its replacement.
pub const ENEMY_RESPAWN_DELAY_MS: u64 = 5_000;

pub const INITIAL_FOOD_SPAWN_INTERVAL_MS: u64 = 2_000;
pub const FOOD_SPAWN_INTERVAL_STEP_MS: u64 = 100;
pub const MAX_FOOD_SPAWN_INTERVAL_MS: u64 = 5_000;

/// Fixed simulation cadence.
pub const TICK_INTERVAL_MS: u64 = 100;

/// Half period of the game-over head flash.
pub const GAME_OVER_FLASH_MS: u64 = 250;

/// Frame pacing of the terminal loop.
pub const FRAME_INTERVAL_MS: u64 = 16;

/// Terminal columns used to draw one grid cell.
pub const CELL_WIDTH: u16 = 2;

/// Border drawn around the playable area, in terminal cells.
pub const BORDER_THICKNESS: u16 = 1;

/// Rows below the board reserved for the HUD.
pub const HUD_HEIGHT: u16 = 1;

pub const PLAYER_COLOR: Color = Color::Rgb(0, 255, 0);
pub const ENEMY_COLOR: Color = Color::Rgb(0, 0, 255);
pub const FOOD_COLOR: Color = Color::Rgb(255, 0, 0);
pub const FLASH_COLOR: Color = Color::Rgb(255, 255, 0);
pub const BORDER_COLOR: Color = Color::Rgb(50, 50, 50);
pub const BACKGROUND_COLOR: Color = Color::Black;
pub const HUD_COLOR: Color = Color::DarkGray;

pub const GLYPH_CELL: &str = "██";
pub const GLYPH_IMPACT: &str = "><";
/// Half-width impact mark drawn over a side border column.
pub const GLYPH_BORDER_IMPACT: &str = "█";

/// Head glyphs keep the edge towards the neck flush and inset the others.
pub const GLYPH_HEAD_UP: &str = "▄▄";
pub const GLYPH_HEAD_DOWN: &str = "▀▀";
pub const GLYPH_HEAD_LEFT: &str = "▐█";
pub const GLYPH_HEAD_RIGHT: &str = "█▌";

/// Terminal columns needed for the board plus its border.
#[must_use]
pub fn board_width(grid: GridSize) -> u16 {
    grid.width * CELL_WIDTH + 2 * BORDER_THICKNESS
}

/// Terminal rows needed for the board, its border and the HUD.
#[must_use]
pub fn board_height(grid: GridSize) -> u16 {
    grid.height + 2 * BORDER_THICKNESS + HUD_HEIGHT
}
