#[cfg(test)]
mod tests {
    use crate::commands::PlayerCommand;
    use crate::enums::*;
    use crate::trajectory::Trajectory;
    use crate::types::Point;

    #[test]
    fn test_evaluate_at_zero_per_mode() {
        let mut t = Trajectory {
            a: 2.0,
            b: 3.0,
            c: 4.0,
            ..Default::default()
        };

        t.mode = TrajectoryMode::Linear;
        assert_eq!(t.evaluate(0.0), 3.0, "linear at 0 is b");

        t.mode = TrajectoryMode::Quadratic;
        assert_eq!(t.evaluate(0.0), 4.0, "quadratic at 0 is c");

        t.mode = TrajectoryMode::Sinusoidal;
        assert_eq!(t.evaluate(0.0), 0.0, "sinusoidal at 0 is 0");

        t.mode = TrajectoryMode::Logarithmic;
        assert_eq!(t.evaluate(0.0), 0.0, "log of 0 falls back to identity");
    }

    #[test]
    fn test_linear_and_quadratic_forms() {
        let t = Trajectory {
            a: 2.0,
            b: -1.0,
            c: 0.5,
            mode: TrajectoryMode::Linear,
            ..Default::default()
        };
        assert_eq!(t.evaluate(10.0), 19.0);

        let q = Trajectory {
            mode: TrajectoryMode::Quadratic,
            ..t
        };
        assert_eq!(q.evaluate(10.0), 200.0 - 10.0 + 0.5);
    }

    #[test]
    fn test_log_fallback_cases() {
        let mut t = Trajectory {
            a: 1.0,
            mode: TrajectoryMode::Logarithmic,
            ..Default::default()
        };

        // Non-positive base
        t.b = -2.0;
        assert_eq!(t.evaluate(5.0), 5.0);
        t.b = 0.0;
        assert_eq!(t.evaluate(5.0), 5.0);

        // Base exactly 1 (log undefined)
        t.b = 1.0;
        assert_eq!(t.evaluate(5.0), 5.0);

        // Non-positive argument
        t.b = 2.0;
        assert_eq!(t.evaluate(-3.0), -3.0);
        assert_eq!(t.evaluate(0.0), 0.0);

        // Well-defined case: log_2(8) = 3
        assert!((t.evaluate(8.0) - 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_sinusoidal_form() {
        let t = Trajectory {
            a: 2.0,
            b: std::f64::consts::FRAC_PI_2,
            mode: TrajectoryMode::Sinusoidal,
            ..Default::default()
        };
        // a * sin(b * 1) = 2 * sin(pi/2) = 2
        assert!((t.evaluate(1.0) - 2.0).abs() < 1e-12);
    }

    #[test]
    fn test_mode_cycle_wraps() {
        let mut mode = TrajectoryMode::Linear;
        let expected = [
            TrajectoryMode::Quadratic,
            TrajectoryMode::Logarithmic,
            TrajectoryMode::Sinusoidal,
            TrajectoryMode::Linear,
        ];
        for want in expected {
            mode = mode.next();
            assert_eq!(mode, want);
        }
    }

    #[test]
    fn test_preview_sweeps_toward_travel_direction() {
        let origin = Point::new(200.0, 300.0);

        let right = Trajectory {
            speed: 1,
            ..Default::default()
        };
        let path = right.preview_path(origin, 1024.0);
        assert_eq!(path.len(), 824);
        assert_eq!(path.first().unwrap().x, 200.0);
        assert_eq!(path.last().unwrap().x, 1023.0);

        let left = Trajectory {
            speed: -1,
            ..Default::default()
        };
        let path = left.preview_path(origin, 1024.0);
        assert_eq!(path.len(), 200);
        assert_eq!(path.first().unwrap().x, 0.0);
        assert_eq!(path.last().unwrap().x, 199.0);
    }

    #[test]
    fn test_preview_follows_trajectory_heights() {
        let t = Trajectory {
            a: 1.0,
            b: 5.0,
            mode: TrajectoryMode::Linear,
            speed: 1,
            ..Default::default()
        };
        let origin = Point::new(100.0, 200.0);
        let path = t.preview_path(origin, 1024.0);
        // Offset 10 -> y = origin.y + (a*10 + b)
        assert_eq!(path[10], Point::new(110.0, 215.0));
    }

    #[test]
    fn test_point_distance() {
        let a = Point::new(0.0, 0.0);
        let b = Point::new(3.0, 4.0);
        assert!((a.distance_to(&b) - 5.0).abs() < 1e-12);
    }

    /// Verify PlayerCommand round-trips through serde (tagged union) —
    /// the encoding is the contract with the frontend process.
    #[test]
    fn test_player_command_serde() {
        let commands = vec![
            PlayerCommand::Move {
                direction: Direction::Left,
            },
            PlayerCommand::Fire,
            PlayerCommand::AdjustCoefficient {
                which: Coefficient::Speed,
                delta: -1.0,
            },
            PlayerCommand::CycleMode,
        ];
        for cmd in &commands {
            let json = serde_json::to_string(cmd).unwrap();
            let back: PlayerCommand = serde_json::from_str(&json).unwrap();
            assert_eq!(json, serde_json::to_string(&back).unwrap());
        }
    }
}
