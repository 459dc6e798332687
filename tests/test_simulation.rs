#[cfg(test)]
mod tests {
    use life_census::*;
    use serial_test::serial;
    use std::sync::{atomic::Ordering, Arc};

    const SEED: u64 = 42;

    fn catalog() -> Arc<PatternCatalog> {
        Arc::new(PatternCatalog::standard().clone())
    }

    fn mask(name: &str, phase: usize) -> &'static Mask {
        &PatternCatalog::standard().masks_for(name).unwrap()[phase]
    }

    /// Indices and anchors of the masks of `name` that occur in `grid`.
    fn matching_phases(grid: &Grid, name: &str) -> Vec<(usize, Vec<(usize, usize)>)> {
        PatternCatalog::standard()
            .masks_for(name)
            .unwrap()
            .iter()
            .enumerate()
            .map(|(i, m)| (i, occurrences(grid, m).collect::<Vec<_>>()))
            .filter(|(_, anchors)| !anchors.is_empty())
            .collect()
    }

    #[test]
    fn test_glider_travels_diagonally() {
        let mut grid = Grid::new(20, 20);
        grid.stamp(mask("Glider", 1), 0, 0).unwrap();
        assert_eq!(matching_phases(&grid, "Glider"), vec![(1, vec![(0, 0)])]);

        for _ in 0..4 {
            grid = grid.step();
            assert_eq!(matching_phases(&grid, "Glider").len(), 1);
            assert_eq!(aggregate(&grid, PatternCatalog::standard()).total(), 1);
        }
        assert_eq!(matching_phases(&grid, "Glider"), vec![(1, vec![(1, 1)])]);
    }

    #[test]
    #[serial]
    fn test_lightweight_spaceship_travels_right() {
        let name = "Lightweight Spaceship";
        let mut grid = Grid::new(30, 20);
        grid.stamp(mask(name, 0), 2, 5).unwrap();

        let mut simulation = Simulation::new(grid, catalog(), 5).unwrap();
        while let Some(generation) = simulation.next_generation().unwrap() {
            assert_eq!(generation.report.count(name), Some(1));
            assert_eq!(generation.report.total(), 1);
        }
        assert_eq!(
            matching_phases(simulation.grid(), name),
            vec![(1, vec![(5, 5)])]
        );
    }

    #[test]
    #[serial]
    fn test_oscillators_are_counted_every_generation() {
        let mut grid = Grid::new(24, 8);
        grid.stamp(mask("Blinker", 0), 0, 0).unwrap();
        grid.stamp(mask("Toad", 0), 6, 0).unwrap();
        grid.stamp(mask("Beacon", 1), 13, 0).unwrap();

        for generation in Simulation::new(grid, catalog(), 6).unwrap() {
            let report = generation.unwrap().report;
            for name in ["Blinker", "Toad", "Beacon"] {
                assert_eq!(report.count(name), Some(1), "{name}");
            }
            assert_eq!(report.total(), 3);
            assert!((report.percent("Toad").unwrap() - 100.0 / 3.0).abs() < 1e-9);
        }
    }

    #[test]
    #[serial]
    fn test_all_dead_field() {
        for generation in Simulation::new(Grid::new(16, 16), catalog(), 3).unwrap() {
            let report = generation.unwrap().report;
            assert_eq!(report.total(), 0);
            assert!(report.rows().all(|(_, count, percent)| count == 0 && percent == 0.0));
        }
    }

    #[test]
    #[serial]
    fn test_seed_to_reports() {
        // a block and a blinker far enough apart not to interact
        let seed = Seed::parse("12 8\n3\n1 1\n2 1\n1 2\n2 2\n8 2\n8 3\n8 4\n").unwrap();
        let simulation = Simulation::new(seed.grid(), catalog(), seed.generations).unwrap();
        let reports: Vec<_> = simulation.map(|g| g.unwrap().report).collect();

        assert_eq!(reports.len(), 3);
        for (i, report) in reports.iter().enumerate() {
            assert_eq!(report.generation, i);
            assert_eq!(report.count("Block"), Some(1));
            assert_eq!(report.count("Blinker"), Some(1));
            assert_eq!(report.percent("Block"), Some(50.0));
        }
        assert!(reports[0].to_string().starts_with("Iteration: 1\n"));
    }

    #[test]
    fn test_invalid_seed_is_rejected() {
        let err = Seed::parse("12 8\n3\n12 0\n").unwrap_err();
        assert!(matches!(err, LoadError::InvalidInputFormat { line: 3, .. }));
        assert!(err.to_string().contains("outside"));
    }

    #[test]
    #[serial]
    fn test_concurrent_census_matches_sequential() {
        let soup = Grid::random(96, 64, 0.2, Some(SEED)).unwrap();
        let sequential: Vec<_> = Simulation::new(soup.clone(), catalog(), 20)
            .unwrap()
            .map(|g| g.unwrap().report)
            .collect();

        WORKER_THREADS.store(4, Ordering::Relaxed);
        let concurrent: Vec<_> = Simulation::new(soup, catalog(), 20)
            .unwrap()
            .map(|g| g.unwrap().report)
            .collect();
        WORKER_THREADS.store(1, Ordering::Relaxed);

        assert_eq!(sequential, concurrent);
    }
}
