//! Fixed-interval simulation tick
//!
//! `update` maps real time onto whole ticks; `tick` advances the snake by
//! exactly one grid unit.

use super::state::{DeathCause, GameEvent, GameState, TickResult, TickSnapshot};

/// Run whatever ticks are due at `now_ms`
pub fn update(state: &mut GameState, now_ms: f64) -> TickResult {
    if state.is_dead() {
        return TickResult::NoOp;
    }

    let mut result = TickResult::NoOp;
    for _ in 0..state.clock.budget() {
        if !state.clock.consume(now_ms) {
            break;
        }
        result = tick(state);
        if result == TickResult::Died {
            break;
        }
    }
    result
}

/// Advance the snake by one tick, ignoring the clock
pub fn tick(state: &mut GameState) -> TickResult {
    if state.is_dead() {
        return TickResult::NoOp;
    }

    state.snapshot = TickSnapshot {
        frame: state.frame,
        position: state.position,
    };

    let command = state.input.pop_for_tick();
    state.frame.apply(command);

    let direction = state.frame.direction;
    state.position += direction;
    state.body.push_head(-direction);

    let popped = if state.to_grow > 0 {
        state.to_grow -= 1;
        None
    } else {
        state.body.pop_tail()
    };

    if let Some(cause) = detect_death(state) {
        // Roll the head and body back so nothing renders inside a wall or
        // inside the snake; the turned frame is kept.
        state.position = state.snapshot.position;
        if let Some(tail) = popped {
            state.body.restore_tail(tail);
        }
        state.body.pop_head();
        state.dead = Some(cause);
        state.events.push(GameEvent::Died { cause });
        log::info!(
            "Snake died ({:?}) after {} ticks, score {}",
            cause,
            state.time_ticks,
            state.score()
        );
        return TickResult::Died;
    }

    eat_consumables(state);

    state.time_ticks += 1;
    log::trace!(
        "Tick {}: {:?} -> head {} dir {}",
        state.time_ticks,
        command,
        state.position,
        state.frame.direction
    );
    TickResult::Advanced
}

fn detect_death(state: &GameState) -> Option<DeathCause> {
    let limit = state.settings.grid_size;
    if state.position.abs().max_element() >= limit {
        return Some(DeathCause::Boundary);
    }
    if state.body.overlaps_head(state.settings.epsilon) {
        return Some(DeathCause::SelfCollision);
    }
    None
}

fn eat_consumables(state: &mut GameState) {
    let head = state.position;
    let epsilon = state.settings.epsilon;

    let before = state.consumables.len();
    state.consumables.retain(|c| c.distance(head) >= epsilon);
    let eaten = before - state.consumables.len();

    for _ in 0..eaten {
        state.to_grow = state.to_grow.saturating_add(state.settings.growth_reward);
        state.events.push(GameEvent::ConsumableEaten { position: head });
        log::debug!("Consumable eaten at {head}, growing by {}", state.settings.growth_reward);
        state.spawn_consumable();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::Settings;
    use crate::sim::{Body, Command, InputMode, OrientationFrame, TickPolicy};
    use glam::Vec3;
    use proptest::prelude::*;

    /// A state with no consumables and no pending growth
    fn bare_state() -> GameState {
        let settings = Settings {
            initial_length: 1,
            initial_growth: 0,
            initial_consumables: 0,
            ..Default::default()
        };
        GameState::new(settings, 12345, 0.0)
    }

    #[test]
    fn test_left_turn_scenario() {
        let mut state = bare_state();
        assert_eq!(state.frame.direction, Vec3::Y);
        assert_eq!(state.frame.up, Vec3::NEG_Z);

        state.push_command(Command::Left);
        assert_eq!(tick(&mut state), TickResult::Advanced);

        assert_eq!(state.frame.direction, Vec3::X);
        assert_eq!(state.frame.up, Vec3::NEG_Z);
        assert_eq!(state.position, Vec3::X);
        assert_eq!(state.body.len(), 1);
        assert_eq!(state.body.offsets().next(), Some(Vec3::NEG_X));
    }

    #[test]
    fn test_boundary_death_reverts_position() {
        let mut state = bare_state();
        state.frame = OrientationFrame::new(Vec3::X, Vec3::Y);
        state.position = Vec3::new(19.0, 0.0, 0.0);
        state.body = Body::straight(Vec3::X, 3);
        let body_before = state.body.clone();

        assert_eq!(tick(&mut state), TickResult::Died);
        assert!(state.is_dead());
        assert_eq!(state.death_cause(), Some(DeathCause::Boundary));
        assert_eq!(state.position, Vec3::new(19.0, 0.0, 0.0));
        assert_eq!(state.body, body_before);
        assert_eq!(
            state.drain_events(),
            vec![GameEvent::Died {
                cause: DeathCause::Boundary
            }]
        );
    }

    #[test]
    fn test_death_rollback_with_growth_and_empty_body() {
        let mut state = bare_state();
        state.frame = OrientationFrame::new(Vec3::NEG_Z, Vec3::Y);
        state.position = Vec3::new(0.0, 0.0, -19.0);
        state.body = Body::default();
        assert_eq!(tick(&mut state), TickResult::Died);
        assert!(state.body.is_empty());

        let mut state = bare_state();
        state.frame = OrientationFrame::new(Vec3::NEG_Z, Vec3::Y);
        state.position = Vec3::new(0.0, 0.0, -19.0);
        state.to_grow = 3;
        assert_eq!(tick(&mut state), TickResult::Died);
        assert_eq!(state.body.len(), 1);
    }

    #[test]
    fn test_dead_state_is_terminal() {
        let mut state = bare_state();
        state.position = Vec3::new(0.0, 19.0, 0.0);
        assert_eq!(tick(&mut state), TickResult::Died);
        assert_eq!(tick(&mut state), TickResult::NoOp);
        assert_eq!(update(&mut state, 1.0e9), TickResult::NoOp);
        assert_eq!(state.position, Vec3::new(0.0, 19.0, 0.0));
    }

    #[test]
    fn test_self_collision() {
        let mut state = bare_state();
        state.body = Body::straight(state.frame.direction, 6);
        state.to_grow = 0;

        // A tight square: left, left, left brings the head back onto the body
        state.push_command(Command::Left);
        assert_eq!(tick(&mut state), TickResult::Advanced);
        state.push_command(Command::Left);
        assert_eq!(tick(&mut state), TickResult::Advanced);
        state.push_command(Command::Left);
        let before = state.position;
        assert_eq!(tick(&mut state), TickResult::Died);
        assert_eq!(state.death_cause(), Some(DeathCause::SelfCollision));
        assert_eq!(state.position, before);
        assert_eq!(state.score(), 6);
    }

    #[test]
    fn test_moving_into_vacated_tail_is_safe() {
        // Three left turns with a body of 3: the head enters the cell the
        // tail leaves on the same tick
        let mut state = bare_state();
        state.body = Body::straight(state.frame.direction, 3);
        for _ in 0..3 {
            state.push_command(Command::Left);
            assert_eq!(tick(&mut state), TickResult::Advanced);
        }
        assert_eq!(state.position, Vec3::NEG_Y);
    }

    #[test]
    fn test_consumable_pickup_grows_body() {
        let mut state = bare_state();
        state.settings.growth_reward = 5;
        state.frame = OrientationFrame::new(Vec3::X, Vec3::Y);
        state.consumables = vec![Vec3::new(3.0, 0.0, 0.0)];

        for _ in 0..3 {
            assert_eq!(tick(&mut state), TickResult::Advanced);
        }
        assert_eq!(state.to_grow, 5);
        assert_eq!(state.consumables.len(), 1);
        assert_ne!(state.consumables[0], Vec3::new(3.0, 0.0, 0.0));
        assert_eq!(
            state.drain_events(),
            vec![GameEvent::ConsumableEaten {
                position: Vec3::new(3.0, 0.0, 0.0)
            }]
        );

        // Keep the replacement out of the way of the growth checks
        state.consumables.clear();
        let length = state.score();
        for i in 1..=5 {
            tick(&mut state);
            assert_eq!(state.score(), length + i);
        }
        tick(&mut state);
        assert_eq!(state.score(), length + 5);
    }

    #[test]
    fn test_huge_growth_reward_saturates() {
        let settings = Settings::from_json(
            r#"{ "growth_reward": 4294967295, "initial_growth": 0, "initial_consumables": 0 }"#,
        )
        .unwrap();
        let mut state = GameState::new(settings, 7, 0.0);
        state.frame = OrientationFrame::new(Vec3::X, Vec3::Y);
        state.consumables = vec![Vec3::new(1.0, 0.0, 0.0), Vec3::new(2.0, 0.0, 0.0)];

        assert_eq!(tick(&mut state), TickResult::Advanced);
        assert_eq!(state.to_grow, u32::MAX);
        assert_eq!(tick(&mut state), TickResult::Advanced);
        assert_eq!(state.to_grow, u32::MAX);
        assert!(state.drain_events().len() >= 2);
    }

    #[test]
    fn test_update_respects_interval() {
        let mut state = bare_state();
        let interval = state.clock().interval_ms();

        assert_eq!(update(&mut state, interval - 1.0), TickResult::NoOp);
        assert_eq!(update(&mut state, interval), TickResult::Advanced);
        assert_eq!(state.time_ticks, 1);

        // Drop policy: three intervals late still means one tick
        assert_eq!(update(&mut state, interval * 4.0), TickResult::Advanced);
        assert_eq!(state.time_ticks, 2);
        assert_eq!(state.clock().last_tick_ms(), interval * 4.0);
    }

    #[test]
    fn test_update_catch_up_policy() {
        let settings = Settings {
            initial_consumables: 0,
            tick_policy: TickPolicy::CatchUp { max_ticks: 3 },
            ..Default::default()
        };
        let mut state = GameState::new(settings, 1, 0.0);
        let interval = state.clock().interval_ms();

        assert_eq!(update(&mut state, interval * 2.5), TickResult::Advanced);
        assert_eq!(state.time_ticks, 2);

        assert_eq!(update(&mut state, interval * 10.0), TickResult::Advanced);
        assert_eq!(state.time_ticks, 5);
    }

    #[test]
    fn test_one_command_per_tick() {
        let mut state = bare_state();
        state.push_command(Command::Left);
        state.push_command(Command::Left);
        state.push_command(Command::Left);
        assert_eq!(state.pending_commands(), 2);

        tick(&mut state);
        assert_eq!(state.pending_commands(), 1);
        assert_eq!(state.frame.direction, Vec3::X);
        tick(&mut state);
        assert_eq!(state.frame.direction, Vec3::NEG_Y);
        tick(&mut state);
        assert_eq!(state.frame.direction, Vec3::NEG_Y);
    }

    #[test]
    fn test_last_command_mode_keeps_newest() {
        let settings = Settings {
            initial_consumables: 0,
            input_mode: InputMode::LastCommand,
            ..Default::default()
        };
        let mut state = GameState::new(settings, 1, 0.0);
        state.push_command(Command::Left);
        state.push_command(Command::Right);
        tick(&mut state);
        assert_eq!(state.frame.direction, Vec3::NEG_X);
        assert_eq!(state.pending_commands(), 0);
    }

    fn steering() -> impl Strategy<Value = Command> {
        prop::sample::select(Command::STEERING.to_vec())
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(64))]

        #[test]
        fn prop_invariants_hold_until_death(
            seed in any::<u64>(),
            commands in prop::collection::vec(prop::option::of(steering()), 1..300),
        ) {
            let mut state = GameState::new(Settings::default(), seed, 0.0);
            for cmd in commands {
                if let Some(cmd) = cmd {
                    state.push_command(cmd);
                }
                let result = tick(&mut state);
                prop_assert!(state.frame.is_orthonormal(1e-6));
                prop_assert_eq!(state.position, state.position.round());

                // No two occupied cells coincide while alive
                let mut cells = vec![state.position];
                cells.extend(state.body_positions());
                for (i, a) in cells.iter().enumerate() {
                    for b in &cells[i + 1..] {
                        prop_assert!(a.distance(*b) >= state.settings.epsilon);
                    }
                }

                for c in &state.consumables {
                    prop_assert!(c.abs().max_element() <= state.settings.spawn_extent as f32);
                }

                if result == TickResult::Died {
                    break;
                }
            }
        }
    }
}
