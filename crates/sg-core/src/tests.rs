//! Unit tests for sg-core primitives.

#[cfg(test)]
mod ids {
    use crate::AgentId;

    #[test]
    fn index_roundtrip() {
        let id = AgentId(42);
        assert_eq!(id.index(), 42);
        assert_eq!(AgentId::try_from(42usize).unwrap(), id);
    }

    #[test]
    fn default_is_invalid() {
        assert_eq!(AgentId::default(), AgentId::INVALID);
        assert_eq!(AgentId::INVALID.0, u32::MAX);
    }

    #[test]
    fn display() {
        assert_eq!(AgentId(7).to_string(), "AgentId(7)");
    }
}

#[cfg(test)]
mod coord {
    use crate::Coord;

    #[test]
    fn unplaced_sentinel() {
        assert!(!Coord::UNPLACED.is_placed());
        assert!(Coord::new(0, 0).is_placed());
    }

    #[test]
    fn from_tuple_and_display() {
        let c: Coord = (3, 4).into();
        assert_eq!(c, Coord::new(3, 4));
        assert_eq!(c.to_string(), "(3, 4)");
    }
}

#[cfg(test)]
mod kind {
    use crate::AgentKind;

    #[test]
    fn opposite_is_involution() {
        for k in AgentKind::ALL {
            assert_ne!(k, k.opposite());
            assert_eq!(k, k.opposite().opposite());
        }
    }

    #[test]
    fn display() {
        assert_eq!(AgentKind::A.to_string(), "A");
        assert_eq!(AgentKind::B.to_string(), "B");
    }
}

#[cfg(test)]
mod iteration {
    use crate::Iteration;

    #[test]
    fn next_and_index() {
        let i = Iteration::ZERO.next().next();
        assert_eq!(i, Iteration(2));
        assert_eq!(i.index(), 2);
        assert_eq!(i.to_string(), "I2");
    }
}

#[cfg(test)]
mod config {
    use crate::{CoreError, PreferenceScale, SimConfig};

    #[test]
    fn default_is_reference_run() {
        let cfg = SimConfig::default();
        assert_eq!(cfg.cell_count(), 400);
        assert_eq!(cfg.count_a(), 228);
        assert_eq!(cfg.count_b(), 152);
        assert_eq!(cfg.preference_scale, PreferenceScale::Percent);
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn count_a_rounds_half_to_even() {
        let mut cfg = SimConfig { agent_count: 5, proportion_a: 0.5, ..SimConfig::default() };
        assert_eq!(cfg.count_a(), 2); // 2.5 → 2
        cfg.agent_count = 7;
        assert_eq!(cfg.count_a(), 4); // 3.5 → 4
    }

    #[test]
    fn count_a_extremes() {
        let all_a = SimConfig { proportion_a: 1.0, ..SimConfig::default() };
        assert_eq!(all_a.count_a(), all_a.agent_count);
        assert_eq!(all_a.count_b(), 0);
        let all_b = SimConfig { proportion_a: 0.0, ..SimConfig::default() };
        assert_eq!(all_b.count_a(), 0);
    }

    #[test]
    fn rejects_zero_dimension() {
        let cfg = SimConfig { width: 0, ..SimConfig::default() };
        assert!(matches!(cfg.validate(), Err(CoreError::Config(_))));
    }

    #[test]
    fn rejects_bad_proportion() {
        for p in [-0.1, 1.5, f64::NAN] {
            let cfg = SimConfig { proportion_a: p, ..SimConfig::default() };
            assert!(cfg.validate().is_err(), "proportion {p} should be rejected");
        }
    }

    #[test]
    fn rejects_bad_preference() {
        let cfg = SimConfig { preference_b: f64::INFINITY, ..SimConfig::default() };
        assert!(cfg.validate().is_err());
        let cfg = SimConfig { preference_a: -1.0, ..SimConfig::default() };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn scale_application() {
        assert_eq!(PreferenceScale::Percent.scaled(0.25), 25.0);
        assert_eq!(PreferenceScale::Fraction.scaled(0.25), 0.25);
    }
}

#[cfg(test)]
mod rng {
    use crate::SimRng;

    #[test]
    fn deterministic_same_seed() {
        let mut r1 = SimRng::new(12345);
        let mut r2 = SimRng::new(12345);
        let mut a: Vec<u32> = (0..50).collect();
        let mut b = a.clone();
        r1.shuffle(&mut a);
        r2.shuffle(&mut b);
        assert_eq!(a, b);
    }

    #[test]
    fn shuffle_is_permutation() {
        let mut rng = SimRng::new(7);
        let mut v: Vec<u32> = (0..100).collect();
        rng.shuffle(&mut v);
        let mut sorted = v.clone();
        sorted.sort_unstable();
        assert_eq!(sorted, (0..100).collect::<Vec<_>>());
    }

    #[test]
    fn choose_empty_is_none() {
        let mut rng = SimRng::new(0);
        let empty: [u8; 0] = [];
        assert!(rng.choose(&empty).is_none());
        assert_eq!(rng.choose(&[9]), Some(&9));
    }
}
