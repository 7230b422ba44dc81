// Unit tests for logger module initialization logic
// Tests focus on thread-safety and error handling

use crate::logger::{LOG_FILE_NAME, build_dispatch, initialize, level_for};

use std::path::PathBuf;

use log::LevelFilter;

/// **VALUE**: Verifies that calling initialize() multiple times doesn't panic or fail.
///
/// **WHY THIS MATTERS**: Logger setup can be reached from more than one code path
/// (command runner, tests). A second call that errors would abort the command.
///
/// **BUG THIS CATCHES**: Would catch if the Once or AtomicBool guards are removed,
/// causing fern to fail when trying to set a global logger twice.
#[test]
fn given_logger_initialized_when_called_again_then_returns_ok() {
    // GIVEN: A valid temporary directory
    let temp_dir = tempfile::tempdir().unwrap();

    // WHEN: Calling initialize twice
    let result1 = initialize(temp_dir.path(), LevelFilter::Debug);
    let result2 = initialize(temp_dir.path(), LevelFilter::Debug);

    // THEN: Both should return Ok (second one logs warning but doesn't error)
    assert!(result1.is_ok(), "First initialization should succeed");
    assert!(
        result2.is_ok(),
        "Second initialization should succeed (idempotent)"
    );
}

/// **VALUE**: Verifies that an unusable log directory yields an error, not a panic.
///
/// **WHY THIS MATTERS**: A read-only or bogus `--config-dir` should produce a
/// clear message instead of crashing before the command runs.
///
/// **BUG THIS CATCHES**: Would catch if `fern::log_file()` unwraps instead of
/// returning a Result.
#[test]
fn given_invalid_log_dir_when_dispatch_built_then_returns_error() {
    // GIVEN: A path that can never be a directory
    let invalid_dir = PathBuf::from("/dev/null/invalid-path");

    // WHEN: Building the dispatch
    let result = build_dispatch(&invalid_dir, LevelFilter::Info);

    // THEN: Should return error (not panic)
    let err = result.err().expect("Should return error for invalid log directory");
    let err_string = format!("{err:?}");
    assert!(
        err_string.contains("Parley"),
        "Error should be ParleyError::Parley variant"
    );
}

#[test]
fn given_writable_dir_when_dispatch_built_then_log_file_created() {
    let temp_dir = tempfile::tempdir().unwrap();

    let result = build_dispatch(temp_dir.path(), LevelFilter::Info);

    assert!(result.is_ok());
    assert!(temp_dir.path().join(LOG_FILE_NAME).exists());
}

#[test]
fn given_verbose_flag_when_level_chosen_then_debug_else_info() {
    assert_eq!(level_for(true), LevelFilter::Debug);
    assert_eq!(level_for(false), LevelFilter::Info);
}
