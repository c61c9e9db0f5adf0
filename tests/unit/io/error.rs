//! Tests for error types including source chaining and message formatting

#[cfg(test)]
mod tests {
    use crossfill::FillError;
    use crossfill::io::error::{file_system, invalid_parameter};
    use crossfill::spatial::Direction;
    use std::error::Error;
    use std::path::Path;

    // Tests file system errors keep their I/O source
    #[test]
    fn test_error_source_chain() {
        let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let error = file_system(Path::new("/tmp/words.txt"), "read", io_error);

        assert!(error.source().is_some());
        let message = error.to_string();
        assert!(message.contains("read"));
        assert!(message.contains("/tmp/words.txt"));
    }

    // Tests conversion from a bare I/O error
    #[test]
    fn test_from_io_error() {
        let error: FillError = std::io::Error::other("disk gone").into();
        assert!(matches!(error, FillError::FileSystem { .. }));
        assert!(error.to_string().contains("disk gone"));
    }

    // Tests invalid parameter errors carry value and reason
    #[test]
    fn test_invalid_parameter_error() {
        let error = invalid_parameter("retry_limit", &0, &"must be at least 1");
        assert_eq!(
            error.to_string(),
            "Invalid parameter 'retry_limit' = '0': must be at least 1"
        );
        assert!(error.source().is_none());
    }

    // Tests grid shape errors name the offending row
    #[test]
    fn test_grid_errors() {
        let ragged = FillError::RaggedGrid {
            row: 2,
            expected: 5,
            found: 4,
        };
        assert_eq!(
            ragged.to_string(),
            "Grid row 2 has 4 cells but the first row has 5"
        );
        assert_eq!(FillError::EmptyGrid.to_string(), "Grid contains no rows");
    }

    // Tests placement rejections describe the slot
    #[test]
    fn test_placement_rejected_error() {
        let error = FillError::PlacementRejected {
            word: "DOG".to_owned(),
            row: 1,
            col: 2,
            direction: Direction::Down,
            reason: "word is already placed",
        };
        assert_eq!(
            error.to_string(),
            "Cannot place 'DOG' at (1, 2) down: word is already placed"
        );
    }

    // Tests batch failures and empty dictionaries format their counts and paths
    #[test]
    fn test_batch_and_dictionary_errors() {
        let unsolved = FillError::Unsolved {
            failed: 2,
            total: 5,
        };
        assert_eq!(unsolved.to_string(), "2 of 5 grids could not be filled");

        let empty = FillError::EmptyDictionary {
            path: "words.txt".into(),
        };
        assert!(empty.to_string().contains("words.txt"));
    }
}
