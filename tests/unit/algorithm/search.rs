//! Tests for the explicit-stack backtracking search

#[cfg(test)]
mod tests {
    use crossfill::algorithm::context::SolveContext;
    use crossfill::algorithm::filling::fill;
    use crossfill::algorithm::search::search;
    use crossfill::algorithm::solver::{LedgerScope, SolveStatus, SolverConfig, StopReason};
    use crossfill::dictionary::WordIndex;
    use crossfill::io::events::{EventLog, Phase, RemovalReason};
    use crossfill::spatial::{Direction, Grid, Slot};

    fn open_grid() -> Grid {
        "???\n?.?\n???".parse().unwrap_or_else(|_| Grid::new(3, 3))
    }

    fn sample() -> WordIndex {
        WordIndex::from_words(["DOG", "DAD", "GUM", "DIM"])
    }

    // Tests search alone fills an open grid by descending through placements
    #[test]
    fn test_search_fills_open_grid() {
        let index = sample();
        let config = SolverConfig::default();
        let mut ctx = SolveContext::new(&index, &config);
        let mut grid = open_grid();
        let mut log = EventLog::new();

        let status = search(&mut grid, &mut ctx, &config, &mut log).ok();
        assert_eq!(status, Some(SolveStatus::Success));
        assert_eq!(grid.to_string(), "DOG\nA.U\nDIM");
        assert_eq!(ctx.stats.max_depth, 5);
        assert_eq!(ctx.stats.backtracks, 0);
        assert_eq!(log.phases(), vec![Phase::Searching]);
    }

    // Tests a complete valid grid succeeds without placing anything
    #[test]
    fn test_search_accepts_valid_grid() {
        let index = sample();
        let config = SolverConfig::default();
        let mut ctx = SolveContext::new(&index, &config);
        let mut grid: Grid = "DOG\nA.U\nDIM".parse().unwrap_or_else(|_| Grid::new(3, 3));

        let status = search(&mut grid, &mut ctx, &config, &mut EventLog::new()).ok();
        assert_eq!(status, Some(SolveStatus::Success));
        assert_eq!(ctx.stats.placements, 0);
    }

    // Tests the step budget ends the search
    #[test]
    fn test_search_step_budget() {
        let index = sample();
        let config = SolverConfig {
            max_steps: 1,
            ..SolverConfig::default()
        };
        let mut ctx = SolveContext::new(&index, &config);
        let mut grid = open_grid();

        let status = search(&mut grid, &mut ctx, &config, &mut EventLog::new()).ok();
        assert_eq!(status, Some(SolveStatus::Failure(StopReason::StepBudget)));
    }

    // Tests children beyond the depth limit fail and are rolled back
    #[test]
    fn test_search_depth_limit_backtracks() {
        let index = sample();
        let config = SolverConfig {
            max_depth: 1,
            ..SolverConfig::default()
        };
        let mut ctx = SolveContext::new(&index, &config);
        let mut grid = open_grid();
        let mut log = EventLog::new();

        let status = search(&mut grid, &mut ctx, &config, &mut log).ok();
        assert_eq!(status, Some(SolveStatus::Failure(StopReason::Exhausted)));
        assert_eq!(grid, open_grid());
        assert_eq!(ctx.stats.backtracks, 4);
        assert_eq!(ctx.removed.len(), 4);

        let rolled_back: Vec<&str> = log
            .removed(RemovalReason::Backtrack)
            .map(|p| p.word.as_str())
            .collect();
        assert_eq!(rolled_back, vec!["DOG", "DAD", "DIM", "GUM"]);
    }

    // Tests a blocked slot evicts the crossing word and the search gives up cleanly
    #[test]
    fn test_search_evicts_then_exhausts() {
        let index = WordIndex::from_words(["DOG", "DAD"]);
        let config = SolverConfig::default();
        let mut ctx = SolveContext::new(&index, &config);
        let mut grid = open_grid();
        let mut log = EventLog::new();

        assert!(fill(&mut grid, &mut ctx, &mut log).is_ok());
        assert_eq!(grid.to_string(), "DOG\nA.?\nD??");
        let status = search(&mut grid, &mut ctx, &config, &mut log).ok();

        assert_eq!(status, Some(SolveStatus::Failure(StopReason::Exhausted)));
        let evicted: Vec<&str> = log
            .removed(RemovalReason::Eviction)
            .map(|p| p.word.as_str())
            .collect();
        assert_eq!(evicted.first(), Some(&"DAD"));
        for word in ["DOG", "DAD"] {
            let times = evicted.iter().filter(|&&name| name == word).count();
            assert!(times <= config.max_evictions_per_word);
        }
        assert_eq!(ctx.stats.evictions, evicted.len());
        assert_eq!(grid.to_string(), "DOG\nA.?\nD??");
    }

    // Tests a slot whose only matches are already placed counts as blocked
    #[test]
    fn test_search_evicts_when_matches_are_used() {
        let index = WordIndex::from_words(["DOG", "GUM"]);
        let config = SolverConfig::default();
        let mut ctx = SolveContext::new(&index, &config);
        let mut grid = open_grid();
        assert!(grid.place("DOG", &Slot::new(0, 0, 3, Direction::Across)).is_ok());
        assert!(grid.place("GUM", &Slot::new(2, 0, 3, Direction::Across)).is_ok());
        let mut log = EventLog::new();

        let status = search(&mut grid, &mut ctx, &config, &mut log).ok();

        assert_eq!(status, Some(SolveStatus::Failure(StopReason::Exhausted)));
        assert!(ctx.stats.evictions >= 1);
        assert!(
            log.removed(RemovalReason::Eviction)
                .all(|p| p.word == "DOG" || p.word == "GUM")
        );
        assert_eq!(grid.to_string(), "DOG\n?.?\nGUM");
    }

    // Tests branch-scoped ledgers forget evictions when the branch is abandoned
    #[test]
    fn test_search_branch_ledger_restores_removed() {
        let index = WordIndex::from_words(["DOG", "DAD"]);
        let config = SolverConfig {
            ledger_scope: LedgerScope::Branch,
            ..SolverConfig::default()
        };
        let mut ctx = SolveContext::new(&index, &config);
        let mut grid = open_grid();
        let mut log = EventLog::new();

        assert!(fill(&mut grid, &mut ctx, &mut log).is_ok());
        let status = search(&mut grid, &mut ctx, &config, &mut log).ok();

        assert_eq!(status, Some(SolveStatus::Failure(StopReason::Exhausted)));
        assert!(ctx.stats.evictions >= 1);
        assert!(ctx.removed.is_empty());
    }
}
