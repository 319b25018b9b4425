use crate::math::{abs, clamp_symmetric, min_abs};
use crate::{Ball, Config, Events, GameMap, Paddle, Params, Rect};
use hecs::World;

/// Push a ball out of a paddle along one axis.
///
/// Entering across `paddle_min` parks the ball just before it; crossing
/// `paddle_max` parks it just past it. Either way the velocity flips.
/// A ball that straddles neither boundary is returned unchanged.
pub fn resolve_axis(
    ball_pos: f32,
    ball_size: f32,
    ball_vel: f32,
    paddle_min: f32,
    paddle_max: f32,
) -> (f32, f32) {
    if ball_pos + ball_size > paddle_min && ball_pos < paddle_min {
        // Top or left side
        (paddle_min - ball_size - Params::SEPARATION, -ball_vel)
    } else if ball_pos < paddle_max && ball_pos + ball_size > paddle_max {
        // Bottom or right side
        (paddle_max + Params::SEPARATION, -ball_vel)
    } else {
        (ball_pos, ball_vel)
    }
}

/// Resolve a ball against one paddle rectangle, touching at most one axis.
///
/// The leading-edge test uses the ball's float position while the trailing
/// test compares against the ball's own truncated rectangle, so results at
/// sub-pixel boundaries follow the integer grid.
pub fn resolve_collision(ball: &mut Ball, paddle: &Rect) {
    let size = ball.size;
    let (min_x, max_x) = (paddle.min.x as f32, paddle.max.x as f32);
    let (min_y, max_y) = (paddle.min.y as f32, paddle.max.y as f32);

    let is_x_overlap = ball.pos.x + size > min_x && ball.pos.x < ball.rect.max.x as f32;
    let is_y_overlap = ball.pos.y + size > min_y && ball.pos.y < ball.rect.max.y as f32;

    let resolve_x = |ball: &mut Ball| {
        (ball.pos.x, ball.vel.x) = resolve_axis(ball.pos.x, size, ball.vel.x, min_x, max_x);
    };
    let resolve_y = |ball: &mut Ball| {
        (ball.pos.y, ball.vel.y) = resolve_axis(ball.pos.y, size, ball.vel.y, min_y, max_y);
    };

    match (is_x_overlap, is_y_overlap) {
        (true, true) => {
            let x_depth = min_abs(min_x - (ball.pos.x + size), max_x - ball.pos.x);
            let y_depth = min_abs(min_y - (ball.pos.y + size), max_y - ball.pos.y);

            // Shallower axis wins; a tie goes to X
            if abs(y_depth) < abs(x_depth) {
                resolve_y(ball);
            } else {
                resolve_x(ball);
            }
        }
        (true, false) => resolve_x(ball),
        (false, true) => resolve_y(ball),
        (false, false) => {}
    }
}

/// Test the ball against every paddle in order, resolving each hit.
///
/// The ball rectangle is not refreshed between paddles. Returns true if any
/// paddle was hit.
pub fn collide_with_paddles(ball: &mut Ball, paddles: &[Rect]) -> bool {
    let mut collided = false;
    for paddle in paddles {
        if ball.rect.overlaps(paddle) {
            resolve_collision(ball, paddle);
            collided = true;
        }
    }
    collided
}

/// Flip velocity on any axis whose screen edge the ball touches.
/// Position is left alone.
pub fn bounce_off_walls(ball: &mut Ball, map: &GameMap) -> bool {
    let mut bounced = false;
    if map.hits_side(&ball.rect) {
        ball.vel.x = -ball.vel.x;
        bounced = true;
    }
    if map.hits_end(&ball.rect) {
        ball.vel.y = -ball.vel.y;
        bounced = true;
    }
    bounced
}

/// Speed the ball up after a paddle hit, capped per axis
pub fn apply_boost(ball: &mut Ball, config: &Config) {
    let boost = config.ball_speed_boost;
    let max = config.ball_speed_max;
    ball.vel.x = clamp_symmetric(ball.vel.x + ball.vel.x * boost, max);
    ball.vel.y = clamp_symmetric(ball.vel.y + ball.vel.y * boost, max);
}

/// Check ball collisions with walls and paddles
pub fn check_collisions(world: &mut World, map: &GameMap, config: &Config, events: &mut Events) {
    // Collect paddle rectangles first (deterministic: player order)
    let mut paddles: Vec<(u8, Rect)> = world
        .query::<&Paddle>()
        .iter()
        .map(|(_e, p)| (p.player_id, p.rect))
        .collect();
    paddles.sort_by_key(|(id, _)| *id);
    let rects: Vec<Rect> = paddles.iter().map(|(_, rect)| *rect).collect();

    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        if bounce_off_walls(ball, map) {
            log::trace!("ball bounced off wall at {:?}", ball.pos);
            events.ball_hit_wall = true;
        }

        if collide_with_paddles(ball, &rects) {
            apply_boost(ball, config);
            log::debug!("ball hit paddle, velocity now {:?}", ball.vel);
            events.ball_hit_paddle = true;
        }
    }
}
