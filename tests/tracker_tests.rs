mod common;
use common::{ManualClock, date, time};
use rworklog::core::clock::Clock;
use rworklog::core::{SessionTracker, TimeLogger, Toggled, TrackingMode};
use rworklog::errors::AppError;
use rworklog::models::Category;
use rworklog::store::{LogStore, SessionFile};
use std::fs;

fn logger(dir: &std::path::Path, mode: TrackingMode, clock: &ManualClock) -> TimeLogger {
    TimeLogger::in_dir(dir, mode, Box::new(clock.clone()))
}

#[test]
fn stop_without_start_is_rejected_and_log_untouched() {
    let tmp = tempfile::tempdir().unwrap();
    let clock = ManualClock::at(2024, 1, 10, 9, 0, 0);
    let mut tl = logger(tmp.path(), TrackingMode::Exclusive, &clock);
    tl.initialize().unwrap();

    let before = fs::read_to_string(tl.store(Category::Billable).path()).unwrap();

    let err = tl.stop("Ghost", Category::Billable).unwrap_err();
    assert!(err.is_validation(), "unexpected error: {err}");
    assert!(err.to_string().contains("No active tracking"));

    let after = fs::read_to_string(tl.store(Category::Billable).path()).unwrap();
    assert_eq!(before, after);
    assert!(tl.records(Category::Billable).unwrap().is_empty());
}

#[test]
fn start_then_stop_appends_exactly_one_record() {
    let tmp = tempfile::tempdir().unwrap();
    let clock = ManualClock::at(2024, 1, 10, 9, 0, 0);
    let mut tl = logger(tmp.path(), TrackingMode::Exclusive, &clock);

    tl.start("Alpha", Category::Billable).unwrap();
    clock.advance_minutes(90);
    let rec = tl.stop("Alpha", Category::Billable).unwrap();

    assert_eq!(rec.project, "Alpha");
    assert_eq!(rec.date, date("2024-01-10"));
    assert_eq!(rec.start_time, time("09:00:00"));
    assert_eq!(rec.end_time, time("10:30:00"));
    assert_eq!(rec.duration_minutes, 90.0);

    let logged = tl.records(Category::Billable).unwrap();
    assert_eq!(logged, vec![rec]);
    assert!(tl.active_sessions().is_empty());
}

#[test]
fn duration_is_rounded_to_two_decimals() {
    let tmp = tempfile::tempdir().unwrap();
    let clock = ManualClock::at(2024, 1, 10, 9, 0, 0);
    let mut tl = logger(tmp.path(), TrackingMode::Exclusive, &clock);

    tl.start("Alpha", Category::Billable).unwrap();
    clock.advance_seconds(20);
    let rec = tl.stop("Alpha", Category::Billable).unwrap();

    assert_eq!(rec.duration_minutes, 0.33);
}

#[test]
fn clock_going_backwards_logs_zero_minutes() {
    let tmp = tempfile::tempdir().unwrap();
    let clock = ManualClock::at(2024, 1, 10, 9, 0, 0);
    let mut tl = logger(tmp.path(), TrackingMode::Exclusive, &clock);

    tl.start("Alpha", Category::Billable).unwrap();
    clock.rewind_minutes(5);
    let rec = tl.stop("Alpha", Category::Billable).unwrap();

    assert_eq!(rec.duration_minutes, 0.0);
}

#[test]
fn starting_a_running_project_is_rejected() {
    let tmp = tempfile::tempdir().unwrap();
    let clock = ManualClock::at(2024, 1, 10, 9, 0, 0);
    let mut tl = logger(tmp.path(), TrackingMode::Independent, &clock);

    let first = tl.start("Alpha", Category::Billable).unwrap();
    clock.advance_minutes(10);
    let err = tl.start("Alpha", Category::Billable).unwrap_err();

    assert!(err.to_string().contains("Already tracking"));
    assert_eq!(tl.active_sessions().len(), 1);
    assert_eq!(tl.active_sessions()[0].started_at, first.session.started_at);
}

#[test]
fn blank_project_names_are_rejected() {
    let tmp = tempfile::tempdir().unwrap();
    let clock = ManualClock::at(2024, 1, 10, 9, 0, 0);
    let mut tl = logger(tmp.path(), TrackingMode::Exclusive, &clock);

    for name in ["", "   ", "\t"] {
        let err = tl.start(name, Category::Billable).unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }
    assert!(tl.active_sessions().is_empty());
}

#[test]
fn project_names_are_trimmed_and_case_sensitive() {
    let tmp = tempfile::tempdir().unwrap();
    let clock = ManualClock::at(2024, 1, 10, 9, 0, 0);
    let mut tl = logger(tmp.path(), TrackingMode::Independent, &clock);

    tl.start("  Alpha ", Category::Billable).unwrap();
    tl.start("alpha", Category::Billable).unwrap();

    assert!(tl.is_active("Alpha", Category::Billable));
    assert!(tl.is_active("alpha", Category::Billable));
    assert_eq!(tl.active_sessions().len(), 2);
}

#[test]
fn exclusive_mode_switches_category_and_logs_previous_first() {
    let tmp = tempfile::tempdir().unwrap();
    let clock = ManualClock::at(2024, 1, 10, 9, 0, 0);
    let mut tl = logger(tmp.path(), TrackingMode::Exclusive, &clock);

    tl.start("Client", Category::Billable).unwrap();
    clock.advance_minutes(45);
    let started = tl.start("Admin", Category::NonBillable).unwrap();

    assert_eq!(started.switched.len(), 1);
    assert_eq!(started.switched[0].category, Category::Billable);
    assert_eq!(started.switched[0].record.project, "Client");
    assert_eq!(started.switched[0].record.duration_minutes, 45.0);

    // billable log gained exactly the switched-out row, the new one is running
    let billable = tl.records(Category::Billable).unwrap();
    assert_eq!(billable.len(), 1);
    assert_eq!(billable[0].project, "Client");
    assert!(tl.records(Category::NonBillable).unwrap().is_empty());

    assert!(!tl.is_active("Client", Category::Billable));
    assert!(tl.is_active("Admin", Category::NonBillable));
    // the new session starts at the instant the old one ended
    assert_eq!(started.session.started_at, tl.now());
}

#[test]
fn exclusive_mode_keeps_a_single_session_within_a_category() {
    let tmp = tempfile::tempdir().unwrap();
    let clock = ManualClock::at(2024, 1, 10, 9, 0, 0);
    let mut tl = logger(tmp.path(), TrackingMode::Exclusive, &clock);

    tl.start("One", Category::Billable).unwrap();
    clock.advance_minutes(5);
    let started = tl.start("Two", Category::Billable).unwrap();

    assert_eq!(started.switched.len(), 1);
    assert_eq!(tl.active_sessions().len(), 1);
    assert_eq!(tl.active_sessions()[0].project, "Two");
}

#[test]
fn independent_mode_runs_timers_side_by_side() {
    let tmp = tempfile::tempdir().unwrap();
    let clock = ManualClock::at(2024, 1, 10, 9, 0, 0);
    let mut tl = logger(tmp.path(), TrackingMode::Independent, &clock);

    tl.start("A", Category::Billable).unwrap();
    clock.advance_minutes(10);
    let started = tl.start("B", Category::Billable).unwrap();
    assert!(started.switched.is_empty());

    clock.advance_minutes(20);
    let a = tl.stop("A", Category::Billable).unwrap();
    let b = tl.stop("B", Category::Billable).unwrap();

    assert_eq!(a.duration_minutes, 30.0);
    assert_eq!(b.duration_minutes, 20.0);
    assert_eq!(tl.records(Category::Billable).unwrap().len(), 2);
}

#[test]
fn toggle_starts_then_stops() {
    let tmp = tempfile::tempdir().unwrap();
    let clock = ManualClock::at(2024, 1, 10, 9, 0, 0);
    let mut tl = logger(tmp.path(), TrackingMode::Exclusive, &clock);

    let first = tl.toggle("Alpha", Category::NonBillable).unwrap();
    assert!(matches!(first, Toggled::Started(_)));

    clock.advance_minutes(15);
    match tl.toggle("Alpha", Category::NonBillable).unwrap() {
        Toggled::Stopped(rec) => assert_eq!(rec.duration_minutes, 15.0),
        other => panic!("expected a stop, got {other:?}"),
    }

    assert_eq!(tl.records(Category::NonBillable).unwrap().len(), 1);
    assert!(tl.records(Category::Billable).unwrap().is_empty());
}

#[test]
fn failed_append_keeps_the_session_running() {
    let tmp = tempfile::tempdir().unwrap();
    let clock = ManualClock::at(2024, 1, 10, 9, 0, 0);

    // a directory where the billable log should be: every append fails
    let blocked = tmp.path().join("blocked");
    fs::create_dir_all(&blocked).unwrap();

    let mut tl = TimeLogger::new(
        SessionTracker::new(TrackingMode::Exclusive),
        LogStore::new(&blocked),
        LogStore::new(tmp.path().join("other.csv")),
        Box::new(clock.clone()),
    );

    let started = tl.start("Alpha", Category::Billable).unwrap();
    clock.advance_minutes(30);

    let err = tl.stop("Alpha", Category::Billable).unwrap_err();
    assert!(matches!(err, AppError::Io(_)), "unexpected error: {err}");

    let active = tl.active_sessions();
    assert_eq!(active.len(), 1);
    assert_eq!(active[0].started_at, started.session.started_at);
}

#[test]
fn failed_switch_restores_the_previous_session() {
    let tmp = tempfile::tempdir().unwrap();
    let clock = ManualClock::at(2024, 1, 10, 9, 0, 0);
    let blocked = tmp.path().join("blocked");
    fs::create_dir_all(&blocked).unwrap();

    let mut tl = TimeLogger::new(
        SessionTracker::new(TrackingMode::Exclusive),
        LogStore::new(&blocked),
        LogStore::new(tmp.path().join("other.csv")),
        Box::new(clock.clone()),
    );

    tl.start("Client", Category::Billable).unwrap();
    clock.advance_minutes(10);
    assert!(tl.start("Admin", Category::NonBillable).is_err());

    assert!(tl.is_active("Client", Category::Billable));
    assert!(!tl.is_active("Admin", Category::NonBillable));
}

#[test]
fn sessions_survive_through_the_session_file() {
    let tmp = tempfile::tempdir().unwrap();
    let clock = ManualClock::at(2024, 1, 10, 9, 0, 0);
    let file = SessionFile::new(tmp.path().join("active_sessions.json"));

    let mut first = logger(tmp.path(), TrackingMode::Exclusive, &clock)
        .with_session_file(file.clone());
    first.start("Alpha", Category::Billable).unwrap();
    drop(first);

    clock.advance_minutes(25);

    let restored = SessionTracker::with_sessions(TrackingMode::Exclusive, file.load().unwrap());
    let mut second = TimeLogger::new(
        restored,
        LogStore::new(tmp.path().join("work_log.csv")),
        LogStore::new(tmp.path().join("ondeclarabel_log.csv")),
        Box::new(clock.clone()),
    )
    .with_session_file(file.clone());

    let rec = second.stop("Alpha", Category::Billable).unwrap();
    assert_eq!(rec.duration_minutes, 25.0);
    assert!(file.load().unwrap().is_empty());
}

#[test]
fn tracker_resume_keeps_start_order() {
    let clock = ManualClock::at(2024, 1, 10, 9, 0, 0);
    let mut tracker = SessionTracker::new(TrackingMode::Independent);

    tracker
        .start("A", Category::Billable, clock.now())
        .unwrap();
    clock.advance_minutes(1);
    tracker
        .start("B", Category::Billable, clock.now())
        .unwrap();

    let a = tracker.stop("A", Category::Billable).unwrap();
    tracker.resume(a);

    let order: Vec<&str> = tracker.active().iter().map(|s| s.project.as_str()).collect();
    assert_eq!(order, ["A", "B"]);
}

#[test]
fn unsaved_session_file_never_logs_a_session_twice() {
    let tmp = tempfile::tempdir().unwrap();
    let clock = ManualClock::at(2024, 1, 10, 9, 0, 0);
    let file = SessionFile::new(tmp.path().join("active_sessions.json"));

    let mut first = logger(tmp.path(), TrackingMode::Exclusive, &clock)
        .with_session_file(file.clone());
    first.start("Alpha", Category::Billable).unwrap();

    // the temp file used for the atomic save cannot be created
    let blocker = tmp.path().join("active_sessions.json.tmp");
    fs::create_dir_all(&blocker).unwrap();

    clock.advance_minutes(30);
    assert!(first.stop("Alpha", Category::Billable).is_err());
    assert!(first.is_active("Alpha", Category::Billable));
    assert!(first.records(Category::Billable).unwrap().is_empty());
    drop(first);

    fs::remove_dir(&blocker).unwrap();
    clock.advance_minutes(30);

    let restored = SessionTracker::with_sessions(TrackingMode::Exclusive, file.load().unwrap());
    let mut second = TimeLogger::new(
        restored,
        LogStore::new(tmp.path().join("work_log.csv")),
        LogStore::new(tmp.path().join("ondeclarabel_log.csv")),
        Box::new(clock.clone()),
    )
    .with_session_file(file.clone());

    let rec = second.stop("Alpha", Category::Billable).unwrap();
    assert_eq!(rec.duration_minutes, 60.0);

    let logged: Vec<f64> = second
        .records(Category::Billable)
        .unwrap()
        .iter()
        .map(|r| r.duration_minutes)
        .collect();
    assert_eq!(logged, [60.0]);
    assert!(file.load().unwrap().is_empty());
}

#[test]
fn unsaved_session_file_leaves_a_switch_undone() {
    let tmp = tempfile::tempdir().unwrap();
    let clock = ManualClock::at(2024, 1, 10, 9, 0, 0);
    let file = SessionFile::new(tmp.path().join("active_sessions.json"));

    let mut tl = logger(tmp.path(), TrackingMode::Exclusive, &clock).with_session_file(file.clone());
    tl.start("Client", Category::Billable).unwrap();

    fs::create_dir_all(tmp.path().join("active_sessions.json.tmp")).unwrap();
    clock.advance_minutes(20);

    assert!(tl.start("Admin", Category::NonBillable).is_err());
    assert!(tl.is_active("Client", Category::Billable));
    assert!(!tl.is_active("Admin", Category::NonBillable));
    assert!(tl.records(Category::Billable).unwrap().is_empty());

    let saved = file.load().unwrap();
    assert_eq!(saved.len(), 1);
    assert_eq!(saved[0].project, "Client");
}

#[test]
fn failed_append_restores_the_saved_session() {
    let tmp = tempfile::tempdir().unwrap();
    let clock = ManualClock::at(2024, 1, 10, 9, 0, 0);
    let blocked = tmp.path().join("blocked");
    fs::create_dir_all(&blocked).unwrap();
    let file = SessionFile::new(tmp.path().join("active_sessions.json"));

    let mut tl = TimeLogger::new(
        SessionTracker::new(TrackingMode::Exclusive),
        LogStore::new(&blocked),
        LogStore::new(tmp.path().join("other.csv")),
        Box::new(clock.clone()),
    )
    .with_session_file(file.clone());

    tl.start("Alpha", Category::Billable).unwrap();
    clock.advance_minutes(10);
    assert!(tl.stop("Alpha", Category::Billable).is_err());

    let saved = file.load().unwrap();
    assert_eq!(saved.len(), 1);
    assert_eq!(saved[0].project, "Alpha");
}
