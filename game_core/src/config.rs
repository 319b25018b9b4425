use crate::Params;

/// Game configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub paddle_width: f32,
    pub paddle_height: f32,
    pub paddle_speed: f32,
    pub paddle_margin: f32,
    pub ball_size: f32,
    pub ball_speed_initial: f32,
    pub ball_speed_max: f32,
    pub ball_speed_boost: f32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            paddle_width: Params::PADDLE_WIDTH,
            paddle_height: Params::PADDLE_HEIGHT,
            paddle_speed: Params::PADDLE_SPEED,
            paddle_margin: Params::PADDLE_MARGIN,
            ball_size: Params::BALL_SIZE,
            ball_speed_initial: Params::BALL_SPEED_INITIAL,
            ball_speed_max: Params::BALL_SPEED_MAX,
            ball_speed_boost: Params::BALL_SPEED_BOOST,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starting X for a paddle: centered horizontally
    pub fn paddle_start_x(&self, screen_width: i32) -> f32 {
        (screen_width as f32 - self.paddle_width) / 2.0
    }

    /// Y position for paddle based on player ID
    pub fn paddle_y(&self, player_id: u8, screen_height: i32) -> f32 {
        if player_id == 0 {
            screen_height as f32 - self.paddle_margin // Bottom paddle
        } else {
            self.paddle_margin // Top paddle
        }
    }
}
