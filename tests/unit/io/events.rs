//! Tests for solve events, observer composition and the event log

#[cfg(test)]
mod tests {
    use crossfill::algorithm::context::SolveStats;
    use crossfill::io::events::{
        EventLog, FillObserver, NullObserver, Phase, RecordedEvent, RemovalReason, SnapshotFilter,
        SolveEvent, TracingObserver,
    };
    use crossfill::spatial::{Direction, Grid, Placement, Slot};

    fn dog() -> Placement {
        Placement::new("DOG", 0, 0, Direction::Across)
    }

    // Tests phase labels
    #[test]
    fn test_phase_labels() {
        assert_eq!(Phase::Filling.label(), "filling");
        assert_eq!(Phase::Searching.label(), "searching");
        assert_eq!(Phase::RepairingInvalid.label(), "repairing");
    }

    // Tests the log keeps owned copies in arrival order
    #[test]
    fn test_event_log_records_events() {
        let mut log = EventLog::new();
        let placement = dog();
        log.on_event(&SolveEvent::PhaseStarted(Phase::Filling));
        log.on_event(&SolveEvent::Placed(&placement));
        log.on_event(&SolveEvent::Removed {
            placement: &placement,
            reason: RemovalReason::Backtrack,
        });
        log.on_event(&SolveEvent::Finished {
            success: false,
            stats: &SolveStats::default(),
        });

        assert_eq!(
            log.events(),
            &[
                RecordedEvent::PhaseStarted(Phase::Filling),
                RecordedEvent::Placed(dog()),
                RecordedEvent::Removed(dog(), RemovalReason::Backtrack),
                RecordedEvent::Finished { success: false },
            ]
        );
        assert_eq!(log.placed().count(), 1);
        assert_eq!(log.removed(RemovalReason::Backtrack).count(), 1);
        assert_eq!(log.removed(RemovalReason::Eviction).count(), 0);
        assert_eq!(log.phases(), vec![Phase::Filling]);
    }

    // Tests unchanged snapshots are recorded once
    #[test]
    fn test_snapshots_are_deduplicated() {
        let mut grid = Grid::new(1, 3);
        let mut log = EventLog::new();
        log.on_event(&SolveEvent::Snapshot(&grid));
        log.on_event(&SolveEvent::Snapshot(&grid));
        assert!(grid.place("DOG", &Slot::new(0, 0, 3, Direction::Across)).is_ok());
        log.on_event(&SolveEvent::Snapshot(&grid));

        assert_eq!(
            log.events(),
            &[
                RecordedEvent::Snapshot("???".to_owned()),
                RecordedEvent::Snapshot("DOG".to_owned()),
            ]
        );
    }

    // Tests the snapshot filter only reports changes
    #[test]
    fn test_snapshot_filter() {
        let grid = Grid::new(2, 2);
        let mut filter = SnapshotFilter::default();
        assert_eq!(filter.changed(&grid).as_deref(), Some("??\n??"));
        assert_eq!(filter.changed(&grid), None);
    }

    // Tests composed observers each see every event
    #[test]
    fn test_observer_composition() {
        let mut pair = (EventLog::new(), Some(EventLog::new()));
        let mut absent: Option<EventLog> = None;
        let event = SolveEvent::PhaseStarted(Phase::Searching);

        pair.on_event(&event);
        absent.on_event(&event);
        NullObserver.on_event(&event);
        {
            let observer: &mut dyn FillObserver = &mut pair;
            observer.on_event(&event);
        }

        assert_eq!(pair.0.phases().len(), 2);
        assert_eq!(pair.1.map(|log| log.phases().len()), Some(2));
        assert!(absent.is_none());
    }

    // Tests the tracing observer accepts every event without a subscriber
    #[test]
    fn test_tracing_observer_handles_all_events() {
        let grid = Grid::new(1, 3);
        let placement = dog();
        let stats = SolveStats::default();
        let mut observer = TracingObserver::new();
        for event in [
            SolveEvent::PhaseStarted(Phase::RepairingInvalid),
            SolveEvent::Placed(&placement),
            SolveEvent::Removed {
                placement: &placement,
                reason: RemovalReason::Repair,
            },
            SolveEvent::InvalidWord(&placement),
            SolveEvent::Snapshot(&grid),
            SolveEvent::Finished {
                success: true,
                stats: &stats,
            },
        ] {
            observer.on_event(&event);
        }
    }
}
