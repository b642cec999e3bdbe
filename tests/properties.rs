// Behavioural checks across the grid, rules and pattern library

use toroidal_life::game_of_life::{cycle, find_period, update_neighbors, Grid};
use toroidal_life::patterns::{
    add_block, add_entity, add_glider, add_glider_gun, Heading, Mirror, Pattern, Reflection,
};

/// Equality of fresh and stamped grids
mod equality {
    use super::*;

    #[test]
    fn blank_grids_of_equal_size_are_equal() {
        for (width, height) in [(1, 1), (4, 4), (5, 4), (4, 5), (17, 3)] {
            assert_eq!(Grid::new(width, height).unwrap(), Grid::new(width, height).unwrap());
        }
    }

    #[test]
    fn grids_of_different_size_are_never_equal() {
        let b1 = Grid::new(4, 4).unwrap();
        assert_ne!(b1, Grid::new(5, 4).unwrap());
        assert_ne!(b1, Grid::new(4, 5).unwrap());
    }

    #[test]
    fn stamping_preserves_or_breaks_equality() {
        let mut b1 = Grid::new(4, 4).unwrap();
        let mut b2 = Grid::new(4, 4).unwrap();

        add_block(&mut b1, 0, 0);
        assert_ne!(b1, b2);

        add_block(&mut b2, 0, 0);
        assert_eq!(b1, b2);
    }

    #[test]
    fn copies_are_independent() {
        let mut original = Grid::new(5, 5).unwrap();
        add_glider(&mut original, 0, 0, Heading::DownRight);
        let mut copy = original.clone();
        assert_eq!(original, copy);

        cycle(&mut copy);
        assert_ne!(original, copy);

        add_block(&mut original, 2, 2);
        cycle(&mut copy);
        assert_eq!(copy.living_count(), 5);
    }
}

/// A glider on a 5x5 torus moves one cell diagonally every four generations
mod glider_period {
    use super::*;

    #[test]
    fn glider_on_5x5_has_period_20_for_every_heading() {
        for heading in Heading::ALL {
            let mut board = Grid::new(5, 5).unwrap();
            add_glider(&mut board, 0, 0, heading);
            let start = board.clone();

            for generation in 1..20 {
                cycle(&mut board);
                assert_ne!(board, start, "{:?} looped early at generation {}", heading, generation);
            }

            cycle(&mut board);
            assert_eq!(board, start, "{:?} did not return after 20 generations", heading);
            assert_eq!(find_period(&start, 40), Some(20));
        }
    }
}

/// Dedicated and generic stamping agree; reflections behave as mirrors
mod stamping {
    use super::*;

    const DOWN_LEFT: &[&str] = &[" * ", "*  ", "***"];

    #[test]
    fn glider_matches_hand_written_glyphs() {
        let mut b7 = Grid::new(8, 8).unwrap();
        add_glider(&mut b7, 2, 2, Heading::DownLeft);

        let mut b8 = Grid::new(8, 8).unwrap();
        assert_ne!(b7, b8);

        add_entity(&mut b8, 2, 2, DOWN_LEFT, Reflection::Neutral);
        assert_eq!(b7, b8);
    }

    #[test]
    fn reflected_entity_differs() {
        let mut plain = Grid::new(8, 8).unwrap();
        add_entity(&mut plain, 2, 2, DOWN_LEFT, Reflection::Neutral);

        for reflection in [Reflection::XReflection, Reflection::YReflection] {
            let mut reflected = plain.clone();
            add_entity(&mut reflected, 2, 2, DOWN_LEFT, reflection);
            assert_ne!(plain, reflected, "{:?}", reflection);
        }
    }

    #[test]
    fn double_reflection_is_identity() {
        let pattern = Pattern::from(DOWN_LEFT);

        let mut plain = Grid::new(8, 8).unwrap();
        pattern.stamp(&mut plain, 2, 2, Reflection::Neutral);

        for mirror in [Mirror::X, Mirror::Y, Mirror::XY] {
            let mut twice = Grid::new(8, 8).unwrap();
            pattern
                .mirrored(mirror)
                .mirrored(mirror)
                .stamp(&mut twice, 2, 2, Reflection::Neutral);
            assert_eq!(plain, twice);

            // Composing the same reflection twice stamps the unreflected pattern
            let mut composed = Grid::new(8, 8).unwrap();
            pattern.stamp(&mut composed, 2, 2, mirror.then(mirror));
            assert_eq!(plain, composed);
        }
    }

    #[test]
    fn reflected_glider_gun_still_fires() {
        let mut grid = Grid::new(80, 60).unwrap();
        add_glider_gun(&mut grid, 30, 10, Reflection::YReflection);
        assert_eq!(grid.living_count(), 36);

        let mut later = grid.clone();
        for _ in 0..30 {
            cycle(&mut later);
        }
        assert_eq!(later.living_count(), 41);
    }
}

/// Neighbor counts across the toroidal seams
mod neighbors {
    use super::*;

    #[test]
    fn seams_on_all_axes() {
        let mut grid = Grid::new(6, 4).unwrap();
        grid.set(0, 0, true);
        grid.set(3, 0, true); // row wrap
        grid.set(0, 5, true); // column wrap
        grid.set(3, 5, true); // corner wrap
        update_neighbors(&mut grid);

        assert_eq!(grid.neighbor_count(0, 0), 3);
        assert_eq!(grid.neighbor_count(3, 5), 3);
        assert_eq!(grid.neighbor_count(1, 1), 1);
        assert_eq!(grid.neighbor_count(2, 2), 0);
    }
}

/// The configured demo board end to end
mod scenario {
    use toroidal_life::{run_scenario, Settings};

    #[test]
    fn short_demo_run() {
        let mut settings = Settings::default();
        settings.simulation.generations = 30;
        settings.simulation.period_search = 2;

        let (grid, summary) = run_scenario(settings).unwrap();
        assert_eq!((grid.width(), grid.height()), (120, 100));
        assert_eq!(summary.generations, 30);
        assert_eq!(summary.final_living_cells, grid.living_count());
        assert!(summary.initial_living_cells > 0);
    }
}
