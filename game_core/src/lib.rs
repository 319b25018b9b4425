pub mod components;
pub mod config;
pub mod game;
pub mod geometry;
pub mod map;
pub mod math;
pub mod params;
pub mod resources;
pub mod systems;

pub use components::*;
pub use config::*;
pub use game::*;
pub use geometry::*;
pub use map::*;
pub use params::*;
pub use resources::*;

use glam::Vec2;
use hecs::World;
use systems::*;

/// Run one tick of the Pong simulation.
///
/// One call advances every body by exactly one tick of velocity; there is no
/// delta time. Hosts with a variable frame rate should drive this through a
/// `TickClock`.
pub fn step(
    world: &mut World,
    map: &GameMap,
    config: &Config,
    input: &dyn InputSource,
    events: &mut Events,
) {
    // Clear events at start of tick
    events.clear();

    // 1. Move paddles from held keys
    move_paddles(world, input, map);

    // 2. Move ball
    move_ball(world);

    // 3. Check collisions (walls, then both paddles)
    check_collisions(world, map, config, events);
}

/// Helper to create a paddle entity at its starting position
pub fn create_paddle(
    world: &mut World,
    config: &Config,
    map: &GameMap,
    player_id: u8,
) -> hecs::Entity {
    let pos = Vec2::new(
        config.paddle_start_x(map.width),
        config.paddle_y(player_id, map.height),
    );
    let size = Vec2::new(config.paddle_width, config.paddle_height);
    world.spawn((
        Paddle::new(player_id, pos, size, config.paddle_speed),
        PaddleControls::for_player(player_id),
    ))
}

/// Helper to create the ball entity
pub fn create_ball(world: &mut World, pos: Vec2, vel: Vec2, size: f32) -> hecs::Entity {
    world.spawn((Ball::new(pos, vel, size),))
}
