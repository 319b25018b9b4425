use glam::Vec2;

use crate::{Key, Rect};

/// Paddle component - a horizontally sliding bar
#[derive(Debug, Clone, Copy)]
pub struct Paddle {
    pub player_id: u8, // 0 = bottom, 1 = top
    pub pos: Vec2,     // Top-left corner; y never changes after spawn
    pub size: Vec2,
    pub speed: f32, // pixels per tick
    pub rect: Rect,
}

impl Paddle {
    pub fn new(player_id: u8, pos: Vec2, size: Vec2, speed: f32) -> Self {
        Self {
            player_id,
            pos,
            size,
            speed,
            rect: Rect::from_pos_size(pos, size),
        }
    }

    /// Slide by input. Each direction is clamped independently, so holding
    /// both keys nets out to zero unless one of them hits a wall.
    pub fn apply_input(&mut self, left: bool, right: bool, max_x: f32) {
        if left {
            self.pos.x -= self.speed;
            if self.pos.x < 0.0 {
                self.pos.x = 0.0;
            }
        }

        if right {
            self.pos.x += self.speed;
            if self.pos.x > max_x {
                self.pos.x = max_x;
            }
        }

        self.refresh_rect();
    }

    pub fn refresh_rect(&mut self) {
        self.rect = Rect::from_pos_size(self.pos, self.size);
    }
}

/// Keyboard bindings for a paddle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaddleControls {
    pub left: Key,
    pub right: Key,
}

impl PaddleControls {
    pub fn new(left: Key, right: Key) -> Self {
        Self { left, right }
    }

    /// Default bindings by player ID
    pub fn for_player(player_id: u8) -> Self {
        if player_id == 0 {
            Self::new(Key::P1Left, Key::P1Right)
        } else {
            Self::new(Key::P2Left, Key::P2Right)
        }
    }
}

/// Ball component - the pong ball
#[derive(Debug, Clone, Copy)]
pub struct Ball {
    pub pos: Vec2, // Top-left corner of the bounding square
    pub vel: Vec2,
    pub size: f32, // Side of the bounding square (the ball's diameter)
    pub rect: Rect,
}

impl Ball {
    pub fn new(pos: Vec2, vel: Vec2, size: f32) -> Self {
        Self {
            pos,
            vel,
            size,
            rect: Rect::from_pos_size(pos, Vec2::splat(size)),
        }
    }

    /// Explicit Euler step; one call is one tick
    pub fn integrate(&mut self) {
        self.pos += self.vel;
        self.refresh_rect();
    }

    pub fn refresh_rect(&mut self) {
        self.rect = Rect::from_pos_size(self.pos, Vec2::splat(self.size));
    }

    pub fn center(&self) -> Vec2 {
        self.pos + Vec2::splat(self.size / 2.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::IVec2;

    fn paddle_at(x: f32) -> Paddle {
        Paddle::new(0, Vec2::new(x, 440.0), Vec2::new(100.0, 8.0), 10.0)
    }

    #[test]
    fn test_paddle_moves_left() {
        let mut paddle = paddle_at(270.0);
        paddle.apply_input(true, false, 540.0);
        assert_eq!(paddle.pos.x, 260.0);
        assert_eq!(paddle.rect.min, IVec2::new(260, 440));
        assert_eq!(paddle.rect.max, IVec2::new(360, 448));
    }

    #[test]
    fn test_paddle_clamps_at_left_edge() {
        let mut paddle = paddle_at(4.0);
        paddle.apply_input(true, false, 540.0);
        assert_eq!(paddle.pos.x, 0.0, "Paddle should stop at the left edge");
    }

    #[test]
    fn test_paddle_clamps_at_right_edge() {
        let mut paddle = paddle_at(535.0);
        paddle.apply_input(false, true, 540.0);
        assert_eq!(paddle.pos.x, 540.0, "Paddle should stop at the right edge");
    }

    #[test]
    fn test_paddle_both_keys_clamp_independently() {
        // Left clamps to 0 first, then right moves from there
        let mut paddle = paddle_at(3.0);
        paddle.apply_input(true, true, 540.0);
        assert_eq!(paddle.pos.x, 10.0);

        // Away from walls the two moves cancel
        let mut paddle = paddle_at(270.0);
        paddle.apply_input(true, true, 540.0);
        assert_eq!(paddle.pos.x, 270.0);
    }

    #[test]
    fn test_paddle_y_never_changes() {
        let mut paddle = paddle_at(270.0);
        for _ in 0..100 {
            paddle.apply_input(true, false, 540.0);
        }
        assert_eq!(paddle.pos.y, 440.0);
    }

    #[test]
    fn test_ball_integrate() {
        let mut ball = Ball::new(Vec2::new(240.0, 320.0), Vec2::new(2.5, -2.5), 20.0);
        ball.integrate();
        assert_eq!(ball.pos, Vec2::new(242.5, 317.5));
        assert_eq!(ball.rect.min, IVec2::new(242, 317));
        assert_eq!(ball.rect.max, IVec2::new(262, 337));
    }

    #[test]
    fn test_controls_for_player() {
        assert_eq!(
            PaddleControls::for_player(0),
            PaddleControls::new(Key::P1Left, Key::P1Right)
        );
        assert_eq!(
            PaddleControls::for_player(1),
            PaddleControls::new(Key::P2Left, Key::P2Right)
        );
    }
}
