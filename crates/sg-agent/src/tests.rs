//! Unit tests for sg-agent.

#[cfg(test)]
mod store {
    use sg_core::{AgentId, AgentKind, Coord};
    use sg_grid::{Grid, GridError};

    use crate::AgentStore;

    fn two_agents() -> AgentStore {
        AgentStore::from_traits(vec![(AgentKind::A, 0.4), (AgentKind::B, 0.3)])
    }

    #[test]
    fn from_traits_starts_unplaced() {
        let store = two_agents();
        assert_eq!(store.count, 2);
        assert_eq!(store.kind_of(AgentId(1)), AgentKind::B);
        assert_eq!(store.preference_of(AgentId(0)), 0.4);
        assert!(store.location.iter().all(|loc| !loc.is_placed()));
    }

    #[test]
    fn agent_ids_iterator() {
        let store = two_agents();
        let ids: Vec<AgentId> = store.agent_ids().collect();
        assert_eq!(ids, vec![AgentId(0), AgentId(1)]);
        assert!(!store.is_empty());
    }

    #[test]
    fn place_records_location() {
        let mut grid = Grid::new(3, 3).unwrap();
        let mut store = two_agents();
        store.place(&mut grid, AgentId(0), Coord::new(1, 1)).unwrap();
        assert_eq!(store.location_of(AgentId(0)), Coord::new(1, 1));
        assert_eq!(grid.occupant_at(Coord::new(1, 1)), Some(AgentId(0)));
    }

    #[test]
    fn relocate_keeps_grid_and_store_in_step() {
        let mut grid = Grid::new(3, 3).unwrap();
        let mut store = two_agents();
        store.place(&mut grid, AgentId(0), Coord::new(0, 0)).unwrap();
        store.place(&mut grid, AgentId(1), Coord::new(2, 2)).unwrap();
        assert!(store.is_consistent_with(&grid));

        store.relocate(&mut grid, AgentId(0), Coord::new(1, 0)).unwrap();
        assert_eq!(store.location_of(AgentId(0)), Coord::new(1, 0));
        assert_eq!(grid.occupant_at(Coord::new(0, 0)), None);
        assert!(store.is_consistent_with(&grid));
    }

    #[test]
    fn relocate_onto_occupied_cell_changes_nothing() {
        let mut grid = Grid::new(3, 3).unwrap();
        let mut store = two_agents();
        store.place(&mut grid, AgentId(0), Coord::new(0, 0)).unwrap();
        store.place(&mut grid, AgentId(1), Coord::new(2, 2)).unwrap();

        let err = store.relocate(&mut grid, AgentId(0), Coord::new(2, 2)).unwrap_err();
        assert_eq!(err, GridError::Occupied { loc: Coord::new(2, 2), occupant: AgentId(1) });
        assert_eq!(store.location_of(AgentId(0)), Coord::new(0, 0));
        assert!(store.is_consistent_with(&grid));
    }

    #[test]
    fn unplaced_store_is_inconsistent() {
        let grid = Grid::new(3, 3).unwrap();
        assert!(!two_agents().is_consistent_with(&grid));
    }

    #[test]
    fn count_of_kind() {
        let store = two_agents();
        assert_eq!(store.count_of(AgentKind::A), 1);
        assert_eq!(store.count_of(AgentKind::B), 1);
    }
}

#[cfg(test)]
mod builder {
    use sg_core::{AgentKind, SimConfig, SimRng};
    use sg_grid::{Grid, GridError};

    use crate::PopulationBuilder;

    #[test]
    fn reference_population_split() {
        let cfg = SimConfig::default();
        let mut grid = Grid::for_population(cfg.width, cfg.height, cfg.agent_count).unwrap();
        let mut rng = SimRng::new(cfg.seed);
        let store = PopulationBuilder::from_config(&cfg).build(&mut grid, &mut rng).unwrap();

        assert_eq!(store.count, 380);
        assert_eq!(store.count_of(AgentKind::A), 228);
        assert_eq!(store.count_of(AgentKind::B), 152);
        assert_eq!(grid.occupied_count(), 380);
        assert!(store.location.iter().all(|loc| loc.is_placed()));
        assert!(store.is_consistent_with(&grid));
    }

    #[test]
    fn preferences_follow_kind() {
        let mut grid = Grid::new(10, 10).unwrap();
        let mut rng = SimRng::new(3);
        let store = PopulationBuilder::new(50)
            .proportion_a(0.5)
            .preferences(0.7, 0.2)
            .build(&mut grid, &mut rng)
            .unwrap();
        for agent in store.agent_ids() {
            let expected = match store.kind_of(agent) {
                AgentKind::A => 0.7,
                AgentKind::B => 0.2,
            };
            assert_eq!(store.preference_of(agent), expected);
        }
    }

    #[test]
    fn same_seed_same_layout() {
        let build = |seed| {
            let mut grid = Grid::new(8, 8).unwrap();
            let mut rng = SimRng::new(seed);
            let store = PopulationBuilder::new(40)
                .proportion_a(0.6)
                .build(&mut grid, &mut rng)
                .unwrap();
            (store, grid)
        };
        assert_eq!(build(11), build(11));
    }

    #[test]
    fn kinds_are_shuffled_across_ids() {
        let mut grid = Grid::new(10, 10).unwrap();
        let mut rng = SimRng::new(5);
        let store = PopulationBuilder::new(60)
            .proportion_a(0.5)
            .build(&mut grid, &mut rng)
            .unwrap();
        // Without the shuffle the first 30 ids would all be type A.
        let leading_a = store.kind[..30].iter().filter(|&&k| k == AgentKind::A).count();
        assert!(leading_a < 30);
    }

    #[test]
    fn overfull_grid_reports_no_vacancy() {
        let mut grid = Grid::new(2, 2).unwrap();
        let mut rng = SimRng::new(0);
        let result = PopulationBuilder::new(5).build(&mut grid, &mut rng);
        assert_eq!(result.unwrap_err(), GridError::NoVacancy);
    }

    #[test]
    fn empty_population() {
        let mut grid = Grid::new(2, 2).unwrap();
        let mut rng = SimRng::new(0);
        let store = PopulationBuilder::new(0).build(&mut grid, &mut rng).unwrap();
        assert!(store.is_empty());
        assert_eq!(grid.occupied_count(), 0);
    }
}
