use std::io::Write;
use std::sync::{Mutex, Once};

use log::{Level, LevelFilter, Log, Metadata, Record};

use shapedraw::{run, EXIT_FAILURE, EXIT_OK, EXIT_USAGE};

// ── log capture ───────────────────────────────────────────────────────────

struct Capture;

static RECORDS: Mutex<Vec<(Level, String)>> = Mutex::new(Vec::new());
static LOGGER: Capture = Capture;

impl Log for Capture {
    fn enabled(&self, _: &Metadata) -> bool { true }
    fn log(&self, record: &Record) {
        RECORDS.lock().unwrap().push((record.level(), record.args().to_string()));
    }
    fn flush(&self) {}
}

/// Installs the capturing logger before `run` gets a chance to install its own.
fn capture() {
    static INIT: Once = Once::new();
    INIT.call_once(|| {
        log::set_logger(&LOGGER).unwrap();
        log::set_max_level(LevelFilter::Trace);
    });
}

/// Records containing `needle`. Tests run in parallel, so each one looks
/// for text only it produces.
fn logged(needle: &str) -> Vec<(Level, String)> {
    RECORDS.lock().unwrap().iter().filter(|(_, msg)| msg.contains(needle)).cloned().collect()
}

fn input_file(contents: &[u8]) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(contents).unwrap();
    file
}

fn run_on(args: &[&str]) -> (u8, String) {
    let mut out = Vec::new();
    let status = run(args.iter().copied(), &mut out);
    (status, String::from_utf8(out).unwrap())
}

// ── exit statuses ─────────────────────────────────────────────────────────

#[test]
fn renders_valid_shapes() {
    capture();
    let file = input_file(b"0001     2.5     3.5\n0003       1       2\n");
    let (status, out) = run_on(&[file.path().to_str().unwrap()]);
    assert_eq!(status, EXIT_OK);
    assert_eq!(out, "Circle drawing: [2.5 3.5]\nSquare drawing: [1 2]\n");
}

#[test]
fn unreadable_file_exits_with_failure() {
    capture();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing-shapes.txt");
    let (status, out) = run_on(&[path.to_str().unwrap()]);
    assert_eq!(status, EXIT_FAILURE);
    assert!(out.is_empty());

    let errors = logged("missing-shapes.txt");
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].0, Level::Error);
    assert!(errors[0].1.starts_with("can't open file:"));
}

#[test]
fn bad_arguments_exit_with_usage() {
    capture();
    assert_eq!(run_on(&["--no-such-flag"]), (EXIT_USAGE, String::new()));
    assert_eq!(run_on(&["a.txt", "b.txt"]).0, EXIT_USAGE);
}

// ── diagnostics ───────────────────────────────────────────────────────────

#[test]
fn rejected_lines_are_warned_and_skipped() {
    capture();
    let file = input_file(b"0002     7.5\n0009   123.5     1.0\n0001    17.5\n");
    let (status, out) = run_on(&[file.path().to_str().unwrap()]);
    assert_eq!(status, EXIT_OK);
    assert_eq!(out, "Triangle drawing: [7.5]\nCircle drawing: [17.5]\n");

    let warnings = logged("   123.5");
    assert_eq!(warnings.len(), 1);
    assert_eq!(warnings[0].0, Level::Warn);
    assert!(warnings[0].1.starts_with("error in reading shape at line 2: invalid shape type 9"));
}

#[test]
fn invalid_utf8_line_does_not_abort_the_batch() {
    capture();
    let file = input_file(b"0001    42.5\n0\xff\xfe1    43.5\n0003    44.5\n");
    let (status, out) = run_on(&[file.path().to_str().unwrap()]);
    assert_eq!(status, EXIT_OK);
    assert_eq!(out, "Circle drawing: [42.5]\nSquare drawing: [44.5]\n");

    let warnings = logged("    43.5");
    assert_eq!(warnings.len(), 1);
    assert_eq!(warnings[0].0, Level::Warn);
    assert!(warnings[0].1.contains("at line 2: shape type"));
}
