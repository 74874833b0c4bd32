#[cfg(test)]
mod tests {
    use glam::Vec3;

    use crossfire_core::components::Pursuer;
    use crossfire_core::constants::*;

    use crate::pursuit::{pursue, pursuit_displacement, PursuitContext, PursuitProfile};

    fn assert_vec_close(actual: Vec3, expected: Vec3) {
        assert!(
            actual.abs_diff_eq(expected, 1e-5),
            "expected {expected}, got {actual}"
        );
    }

    fn make_context(position: Vec3, target: Vec3, dt: f32) -> PursuitContext {
        PursuitContext {
            position,
            target,
            profile: PursuitProfile::default(),
            dt,
        }
    }

    #[test]
    fn test_moves_along_normalized_offset() {
        let enemy = ENEMY_DEFAULT_SPAWN;
        let player = Vec3::ZERO;
        let update = pursue(&make_context(enemy, player, DT));

        let expected = enemy + (player - enemy).normalize() * ENEMY_SPEED * DT;
        assert!(update.moved);
        assert_vec_close(update.new_position, expected);
        assert!(
            (update.displacement.length() - ENEMY_SPEED * DT).abs() < 1e-6,
            "step length should be speed * dt"
        );
    }

    #[test]
    fn test_step_length_independent_of_distance() {
        let near = pursuit_displacement(Vec3::new(0.5, 0.0, 0.0), Vec3::ZERO, 5.0, 0.1);
        let far = pursuit_displacement(Vec3::new(500.0, 0.0, 0.0), Vec3::ZERO, 5.0, 0.1);
        assert_vec_close(near, Vec3::new(-0.5, 0.0, 0.0));
        assert_vec_close(far, near);
    }

    #[test]
    fn test_coincident_positions_do_not_move() {
        let p = Vec3::new(3.0, 1.0, -2.0);
        let update = pursue(&make_context(p, p, DT));
        assert!(!update.moved);
        assert_eq!(update.new_position, p);
        assert_eq!(update.displacement, Vec3::ZERO);
        assert!(update.new_position.is_finite());
    }

    #[test]
    fn test_zero_and_negative_dt() {
        let enemy = Vec3::new(10.0, 0.0, 0.0);
        assert_eq!(pursuit_displacement(enemy, Vec3::ZERO, 5.0, 0.0), Vec3::ZERO);
        assert_eq!(pursuit_displacement(enemy, Vec3::ZERO, 5.0, -1.0), Vec3::ZERO);
    }

    #[test]
    fn test_vertical_pursuit() {
        // Steering is fully 3D: an enemy above the player descends.
        let d = pursuit_displacement(Vec3::new(0.0, 8.0, 0.0), Vec3::ZERO, 2.0, 0.5);
        assert_vec_close(d, Vec3::new(0.0, -1.0, 0.0));
    }

    #[test]
    fn test_profile_from_pursuer() {
        let profile = PursuitProfile::from(Pursuer { speed: 12.5 });
        assert_eq!(profile.speed, 12.5);
        assert_eq!(PursuitProfile::default().speed, ENEMY_SPEED);
    }

    #[test]
    fn test_converges_and_stays_near_player() {
        // Run the reference scenario for 10 simulated seconds.
        let player = Vec3::ZERO;
        let mut enemy = ENEMY_DEFAULT_SPAWN;
        for _ in 0..625 {
            enemy = pursue(&make_context(enemy, player, DT)).new_position;
        }
        assert!(
            enemy.distance(player) <= ENEMY_SPEED * DT + 1e-4,
            "enemy should hover within one step of the player, at {}",
            enemy.distance(player)
        );
    }
}
