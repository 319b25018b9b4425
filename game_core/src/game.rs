//! Frame driver: owns the world and runs update/draw for the host loop

use glam::Vec2;
use hecs::World;

use crate::{
    create_ball, create_paddle, step, Ball, Config, Events, FillOptions, FillRule, GameMap,
    Geometry, InputSource, Paddle, Path, RenderSink,
};

const WHITE: [f32; 4] = [1.0, 1.0, 1.0, 1.0];

/// Two paddles, one ball, and the scratch geometry used to draw them
pub struct Game {
    world: World,
    map: GameMap,
    config: Config,
    events: Events,
    geometry: Geometry,
    tick: u64,
}

impl Game {
    pub fn new() -> Self {
        Self::with_config(Config::new())
    }

    pub fn with_config(config: Config) -> Self {
        let map = GameMap::new();
        let mut world = World::new();

        create_paddle(&mut world, &config, &map, 0);
        create_paddle(&mut world, &config, &map, 1);

        // The serve spot swaps the screen axes: x from the height, y from the width
        let ball_pos = Vec2::new(map.height as f32 / 2.0, map.width as f32 / 2.0);
        let ball_vel = Vec2::splat(config.ball_speed_initial);
        create_ball(&mut world, ball_pos, ball_vel, config.ball_size);

        log::info!(
            "new game on a {}x{} field, ball at {:?} moving {:?}",
            map.width,
            map.height,
            ball_pos,
            ball_vel
        );

        Self {
            world,
            map,
            config,
            events: Events::new(),
            geometry: Geometry::new(),
            tick: 0,
        }
    }

    /// Advance one tick
    pub fn update(&mut self, input: &dyn InputSource) {
        step(
            &mut self.world,
            &self.map,
            &self.config,
            input,
            &mut self.events,
        );
        self.tick += 1;
    }

    /// Emit both paddles, then the ball, as filled shapes
    pub fn draw(&mut self, sink: &mut dyn RenderSink) {
        let options = FillOptions {
            fill_rule: FillRule::NonZero,
            anti_alias: true,
        };

        for paddle in self.paddles() {
            let path = Path::rectangle(paddle.pos.x, paddle.pos.y, paddle.size.x, paddle.size.y);
            fill_path(&mut self.geometry, sink, &path, &options);
        }

        if let Some(ball) = self.ball() {
            let center = ball.center();
            let path = Path::circle(center.x, center.y, ball.size / 2.0);
            fill_path(&mut self.geometry, sink, &path, &options);
        }
    }

    /// Logical resolution, independent of the window size
    pub fn layout(&self, _outside_width: u32, _outside_height: u32) -> (u32, u32) {
        (self.map.width as u32, self.map.height as u32)
    }

    pub fn ball(&self) -> Option<Ball> {
        let mut query = self.world.query::<&Ball>();
        let ball = query.iter().next().map(|(_e, ball)| *ball);
        ball
    }

    /// Paddles in player order
    pub fn paddles(&self) -> Vec<Paddle> {
        let mut paddles: Vec<Paddle> = self
            .world
            .query::<&Paddle>()
            .iter()
            .map(|(_e, p)| *p)
            .collect();
        paddles.sort_by_key(|p| p.player_id);
        paddles
    }

    pub fn events(&self) -> &Events {
        &self.events
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn map(&self) -> &GameMap {
        &self.map
    }

    pub fn tick(&self) -> u64 {
        self.tick
    }

    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

/// Refill the scratch buffers with one shape and hand it to the sink
fn fill_path(
    geometry: &mut Geometry,
    sink: &mut dyn RenderSink,
    path: &Path,
    options: &FillOptions,
) {
    geometry.clear();
    geometry.append_fill(path, WHITE);
    sink.fill_triangles(&geometry.vertices, &geometry.indices, options);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{InputState, Key, Vertex};

    /// Records every fill request
    #[derive(Default)]
    struct RecordingSink {
        fills: Vec<(Vec<Vertex>, Vec<u16>, FillOptions)>,
    }

    impl RenderSink for RecordingSink {
        fn fill_triangles(&mut self, vertices: &[Vertex], indices: &[u16], options: &FillOptions) {
            self.fills
                .push((vertices.to_vec(), indices.to_vec(), *options));
        }
    }

    #[test]
    fn test_new_game_starting_positions() {
        let game = Game::new();
        let paddles = game.paddles();
        assert_eq!(paddles.len(), 2);
        assert_eq!(paddles[0].pos, Vec2::new(270.0, 440.0));
        assert_eq!(paddles[1].pos, Vec2::new(270.0, 40.0));

        let ball = game.ball().unwrap();
        assert_eq!(ball.pos, Vec2::new(240.0, 320.0));
        assert_eq!(ball.vel, Vec2::new(2.5, 2.5));
        assert_eq!(ball.size, 20.0);
    }

    #[test]
    fn test_layout_is_fixed() {
        let game = Game::new();
        assert_eq!(game.layout(1280, 960), (640, 480));
        assert_eq!(game.layout(17, 3000), (640, 480));
    }

    #[test]
    fn test_update_counts_ticks_and_moves_ball() {
        let mut game = Game::new();
        let input = InputState::new();
        game.update(&input);
        game.update(&input);

        assert_eq!(game.tick(), 2);
        assert_eq!(game.ball().unwrap().pos, Vec2::new(245.0, 325.0));
    }

    #[test]
    fn test_update_reads_input() {
        let mut game = Game::new();
        let mut input = InputState::new();
        input.press(Key::P1Right);
        input.press(Key::P2Left);

        game.update(&input);

        let paddles = game.paddles();
        assert_eq!(paddles[0].pos.x, 280.0);
        assert_eq!(paddles[1].pos.x, 260.0);
    }

    #[test]
    fn test_draw_emits_two_rectangles_then_a_circle() {
        let mut game = Game::new();
        let mut sink = RecordingSink::default();

        game.draw(&mut sink);

        assert_eq!(sink.fills.len(), 3);
        assert_eq!(sink.fills[0].1.len(), 6, "Paddle is two triangles");
        assert_eq!(sink.fills[1].1.len(), 6, "Paddle is two triangles");
        assert!(sink.fills[2].1.len() > 6, "Ball is a triangle fan");

        // Ball fan starts at its center
        assert_eq!(sink.fills[2].0[0].position, [250.0, 330.0]);
        for (_, _, options) in &sink.fills {
            assert_eq!(options.fill_rule, FillRule::NonZero);
            assert!(options.anti_alias);
        }
    }

    #[test]
    fn test_draw_reuses_buffers_per_shape() {
        let mut game = Game::new();
        let mut sink = RecordingSink::default();

        game.draw(&mut sink);
        game.draw(&mut sink);

        // Each request only carries its own shape
        assert_eq!(sink.fills[3].0.len(), 4);
        assert_eq!(sink.fills[3].1, vec![0, 1, 2, 0, 2, 3]);
    }
}
