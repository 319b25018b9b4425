use crate::{Ball, GameMap, InputSource, Paddle, PaddleControls};
use hecs::World;

/// Slide paddles according to their held keys
pub fn move_paddles(world: &mut World, input: &dyn InputSource, map: &GameMap) {
    for (_entity, (paddle, controls)) in world.query_mut::<(&mut Paddle, &PaddleControls)>() {
        let left = input.is_pressed(controls.left);
        let right = input.is_pressed(controls.right);
        let max_x = map.max_x(paddle.size.x);
        paddle.apply_input(left, right, max_x);
    }
}

/// Move ball by one tick of velocity
pub fn move_ball(world: &mut World) {
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        ball.integrate();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{create_ball, create_paddle, Config, InputState, Key};
    use glam::Vec2;

    fn setup_world() -> (World, Config, GameMap, InputState) {
        (World::new(), Config::new(), GameMap::new(), InputState::new())
    }

    fn paddle_x(world: &World, player_id: u8) -> f32 {
        world
            .query::<&Paddle>()
            .iter()
            .find(|(_e, p)| p.player_id == player_id)
            .map(|(_e, p)| p.pos.x)
            .unwrap()
    }

    #[test]
    fn test_paddles_follow_their_own_keys() {
        let (mut world, config, map, mut input) = setup_world();
        create_paddle(&mut world, &config, &map, 0);
        create_paddle(&mut world, &config, &map, 1);

        input.press(Key::P1Left);
        input.press(Key::P2Right);
        move_paddles(&mut world, &input, &map);

        assert_eq!(paddle_x(&world, 0), 260.0, "Player one moves left");
        assert_eq!(paddle_x(&world, 1), 280.0, "Player two moves right");
    }

    #[test]
    fn test_paddles_stay_put_without_input() {
        let (mut world, config, map, input) = setup_world();
        create_paddle(&mut world, &config, &map, 0);

        move_paddles(&mut world, &input, &map);

        assert_eq!(paddle_x(&world, 0), 270.0);
    }

    #[test]
    fn test_paddle_stops_at_right_wall() {
        let (mut world, config, map, mut input) = setup_world();
        create_paddle(&mut world, &config, &map, 1);

        input.press(Key::P2Right);
        for _ in 0..100 {
            move_paddles(&mut world, &input, &map);
        }

        assert_eq!(paddle_x(&world, 1), map.max_x(config.paddle_width));
    }

    #[test]
    fn test_move_ball_adds_velocity() {
        let (mut world, _config, _map, _input) = setup_world();
        create_ball(&mut world, Vec2::new(100.0, 100.0), Vec2::new(2.5, -1.5), 20.0);

        move_ball(&mut world);

        for (_e, ball) in world.query::<&Ball>().iter() {
            assert_eq!(ball.pos, Vec2::new(102.5, 98.5));
            assert_eq!(ball.rect.min.x, 102);
            assert_eq!(ball.rect.max.y, 118);
        }
    }
}
