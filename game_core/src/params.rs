/// Game tuning parameters for Pong
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // Screen (logical pixels)
    pub const SCREEN_WIDTH: i32 = 640;
    pub const SCREEN_HEIGHT: i32 = 480;

    // Paddle
    pub const PADDLE_WIDTH: f32 = 100.0;
    pub const PADDLE_HEIGHT: f32 = 8.0;
    pub const PADDLE_SPEED: f32 = 10.0; // pixels per tick
    pub const PADDLE_MARGIN: f32 = 40.0; // distance from the top/bottom edge

    // Ball
    pub const BALL_SIZE: f32 = 20.0;
    pub const BALL_SPEED_INITIAL: f32 = 2.5;
    pub const BALL_SPEED_MAX: f32 = 5.5;
    pub const BALL_SPEED_BOOST: f32 = 0.05; // fraction added on paddle hit

    // Collision
    pub const SEPARATION: f32 = 1.0; // gap left between ball and paddle after a push-out

    // Rendering
    pub const WINDOW_SCALE: u32 = 2;
    pub const WINDOW_TITLE: &'static str = "Hello, Pong!";
    pub const ARC_SEGMENT_LENGTH: f32 = 2.0; // pixels of arc per tessellated segment
    pub const ARC_MIN_SEGMENTS: u32 = 8;

    // Scheduling
    pub const TICKS_PER_SECOND: u32 = 60;
    pub const FIXED_DT: f32 = 1.0 / Self::TICKS_PER_SECOND as f32;
    pub const MAX_DT: f32 = 0.1; // Clamp to prevent large catch-up bursts
}
