//! Unit tests for cc-core primitives.

#[cfg(test)]
mod ids {
    use crate::{CallId, PermitId};

    #[test]
    fn index_roundtrip() {
        let id = CallId(42);
        assert_eq!(id.index(), 42);
        assert_eq!(CallId::try_from(42usize).unwrap(), id);
    }

    #[test]
    fn ordering() {
        assert!(CallId(0) < CallId(1));
        assert!(PermitId(100) > PermitId(99));
    }

    #[test]
    fn call_id_space_is_u32() {
        assert!(CallId::try_from(u32::MAX as usize + 1).is_err());
    }

    #[test]
    fn display() {
        assert_eq!(CallId(7).to_string(), "call 7");
        assert_eq!(PermitId(3).to_string(), "permit 3");
    }
}

#[cfg(test)]
mod priority {
    use crate::Priority;

    #[test]
    fn lower_value_is_more_urgent() {
        assert!(Priority::HIGH.is_more_urgent_than(Priority::LOW));
        assert!(!Priority::LOW.is_more_urgent_than(Priority::HIGH));
        assert!(!Priority(1).is_more_urgent_than(Priority(1)));
    }

    #[test]
    fn display_labels_default_levels() {
        assert_eq!(Priority::HIGH.to_string(), "0 (high)");
        assert_eq!(Priority(7).to_string(), "7");
    }
}

#[cfg(test)]
mod time {
    use crate::SimTime;

    #[test]
    fn time_arithmetic() {
        assert_eq!(SimTime(15) - SimTime(10), 5u64);
        assert_eq!(SimTime(15) - SimTime(15), 0u64);
    }

    #[test]
    fn checked_delay_rejects_negative() {
        assert_eq!(SimTime(5).checked_delay(0), Some(SimTime(5)));
        assert_eq!(SimTime(5).checked_delay(14), Some(SimTime(19)));
        assert_eq!(SimTime(5).checked_delay(-1), None);
        assert_eq!(SimTime(u64::MAX).checked_delay(1), None);
    }

    #[test]
    fn display() {
        assert_eq!(SimTime(600).to_string(), "t=600");
    }
}

#[cfg(test)]
mod config {
    use crate::{Priority, SimConfig, SimTime};

    #[test]
    fn defaults_match_model_constants() {
        let cfg = SimConfig::default();
        assert_eq!(cfg.num_operators, 4);
        assert_eq!(cfg.call_duration, 14);
        assert_eq!(cfg.call_interval, 2);
        assert_eq!(cfg.horizon, 600);
        assert_eq!(cfg.seed, 42);
        assert_eq!(cfg.priorities, vec![Priority(0), Priority(1), Priority(2)]);
        assert_eq!(cfg.end_time(), SimTime(600));
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn interarrival_bounds_can_reach_zero() {
        let cfg = SimConfig::default();
        assert_eq!(cfg.interarrival_bounds(), (0, 4));

        let cfg = SimConfig { call_interval: 1, interval_spread: 3, ..SimConfig::default() };
        assert_eq!(cfg.interarrival_bounds(), (-2, 4));
    }

    #[test]
    fn validate_rejects_bad_values() {
        let zero_ops = SimConfig { num_operators: 0, ..SimConfig::default() };
        assert!(zero_ops.validate().is_err());

        let zero_min = SimConfig { min_interarrival: 0, ..SimConfig::default() };
        assert!(zero_min.validate().is_err());

        let no_levels = SimConfig { priorities: vec![], ..SimConfig::default() };
        assert!(no_levels.validate().is_err());
    }
}

#[cfg(test)]
mod rng {
    use crate::{RandomSource, SimRng};

    #[test]
    fn deterministic_same_seed() {
        let mut r1 = SimRng::new(12345);
        let mut r2 = SimRng::new(12345);
        for _ in 0..100 {
            assert_eq!(r1.uniform_int(0, 4), r2.uniform_int(0, 4));
            assert_eq!(r1.choice(&[0, 1, 2]), r2.choice(&[0, 1, 2]));
        }
    }

    #[test]
    fn uniform_int_inclusive_bounds() {
        let mut rng = SimRng::new(0);
        let mut seen = [false; 5];
        for _ in 0..1000 {
            let v = rng.uniform_int(0, 4);
            assert!((0..=4).contains(&v));
            seen[v as usize] = true;
        }
        assert!(seen.iter().all(|&s| s), "every value in [0, 4] drawn: {seen:?}");
    }

    #[test]
    fn uniform_int_degenerate_range() {
        let mut rng = SimRng::new(0);
        assert_eq!(rng.uniform_int(3, 3), 3);
        assert_eq!(rng.uniform_int(5, 2), 5);
    }

    #[test]
    fn choice_empty_is_none() {
        let mut rng = SimRng::new(0);
        let empty: [u32; 0] = [];
        assert!(rng.choice(&empty).is_none());
    }

    #[test]
    fn child_seed_zero_is_master() {
        assert_eq!(SimRng::child_seed(42, 0), 42);
        assert_ne!(SimRng::child_seed(42, 1), SimRng::child_seed(42, 2));
    }
}
