use hecs::World;

use crate::components::*;
use crate::resources::*;

/// Turn this tick's held keys into the player's movement intent
///
/// Restart and quit are handled by the round and the outer loop.
pub fn ingest_input(world: &mut World, input: &FrameInput) {
    for (_entity, intent) in world.query_mut::<&mut PlayerIntent>() {
        *intent = PlayerIntent {
            left: input.left,
            right: input.right,
            jump: input.jump,
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::create_player;
    use glam::Vec2;

    #[test]
    fn test_ingest_input_sets_intent() {
        let mut world = World::new();
        let player = create_player(&mut world, Vec2::new(50.0, 460.0), 40.0);

        let input = FrameInput {
            left: true,
            jump: true,
            restart: true,
            ..FrameInput::new()
        };
        ingest_input(&mut world, &input);

        let intent = *world.get::<&PlayerIntent>(player).unwrap();
        assert!(intent.left);
        assert!(!intent.right);
        assert!(intent.jump);
    }

    #[test]
    fn test_ingest_input_replaces_previous_intent() {
        let mut world = World::new();
        let player = create_player(&mut world, Vec2::new(50.0, 460.0), 40.0);

        let held = FrameInput {
            right: true,
            jump: true,
            ..FrameInput::new()
        };
        ingest_input(&mut world, &held);
        ingest_input(&mut world, &FrameInput::new());

        let intent = *world.get::<&PlayerIntent>(player).unwrap();
        assert_eq!(intent, PlayerIntent::new(), "Released keys clear the intent");
    }
}
