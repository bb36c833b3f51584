//! End-to-end tests that dispatch whole lines through the interpreter and
//! observe the effect of the spawned programs on the filesystem.

#![cfg(unix)]

use osh::launcher::{LaunchOutcome, PipelineOutcome};
use osh::{Dispatch, Interpreter, ShellConfig};
use std::fs;
use std::path::Path;
use std::time::{Duration, Instant};

fn shell() -> Interpreter {
    Interpreter::new(ShellConfig {
        background_pause: Duration::ZERO,
        ..ShellConfig::default()
    })
}

fn write_script(dir: &Path, name: &str, body: &str) -> String {
    let path = dir.join(name);
    fs::write(&path, body).expect("write script");
    path.display().to_string()
}

#[test]
fn test_output_redirection_feeds_later_input_redirection() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("out.txt");
    let copy = dir.path().join("copy.txt");
    fs::write(dir.path().join("a"), "").unwrap();
    fs::write(dir.path().join("b"), "").unwrap();

    let mut sh = shell();
    let first = sh.process_line(&format!("ls {} > {}", dir.path().display(), out.display()));
    assert_eq!(first, vec![Dispatch::Single(LaunchOutcome::Exited(0))]);

    let second = sh.process_line(&format!("cat < {} > {}", out.display(), copy.display()));
    assert_eq!(second, vec![Dispatch::Single(LaunchOutcome::Exited(0))]);

    let written = fs::read(&out).unwrap();
    assert!(!written.is_empty());
    assert_eq!(written, fs::read(&copy).unwrap());
}

#[test]
fn test_pipeline_runs_two_joined_processes() {
    let dir = tempfile::tempdir().unwrap();
    let count = dir.path().join("count.txt");
    let consumer = write_script(dir.path(), "consumer.sh", &format!("wc -l > {}\n", count.display()));

    let mut sh = shell();
    let result = sh.process_line(&format!("printf x\\ny\\n | sh {}", consumer));
    assert_eq!(
        result,
        vec![Dispatch::Piped(PipelineOutcome {
            left: LaunchOutcome::Exited(0),
            right: LaunchOutcome::Exited(0),
        })]
    );
    // Both stages were joined before process_line returned.
    assert_eq!(fs::read_to_string(&count).unwrap().trim(), "2");
}

#[test]
fn test_backgrounded_pipeline_is_joined_anyway() {
    let dir = tempfile::tempdir().unwrap();
    let done = dir.path().join("done");
    let consumer = write_script(
        dir.path(),
        "slow.sh",
        &format!("cat > /dev/null; sleep 0.2; touch {}\n", done.display()),
    );

    let mut sh = shell();
    sh.process_line(&format!("echo hi | sh {} &", consumer));
    assert!(done.exists());
}

#[test]
fn test_background_segment_does_not_block_next_segment() {
    let dir = tempfile::tempdir().unwrap();
    let marker = dir.path().join("after");

    let mut sh = shell();
    let started = Instant::now();
    let result = sh.process_line(&format!("sleep 2 & touch {}", marker.display()));
    assert!(started.elapsed() < Duration::from_secs(2));
    assert!(matches!(result[0], Dispatch::Single(LaunchOutcome::Detached(_))));
    assert_eq!(result[1], Dispatch::Single(LaunchOutcome::Exited(0)));
    assert!(marker.exists());
}

#[test]
fn test_recall_redispatches_previous_line() {
    let dir = tempfile::tempdir().unwrap();
    let log = dir.path().join("log.txt");
    let append = write_script(dir.path(), "append.sh", &format!("echo run >> {}\n", log.display()));

    let mut sh = shell();
    sh.process_line(&format!("sh {}", append));
    sh.process_line("!!");
    sh.process_line("!!");

    assert_eq!(fs::read_to_string(&log).unwrap(), "run\nrun\nrun\n");
    assert_eq!(sh.history().last(), Some(format!("sh {}", append).as_str()));
}

#[test]
fn test_third_pipe_reaches_right_stage_as_argument() {
    let dir = tempfile::tempdir().unwrap();
    let args_file = dir.path().join("args.txt");
    let consumer = write_script(
        dir.path(),
        "args.sh",
        &format!("cat > /dev/null; echo \"$@\" > {}\n", args_file.display()),
    );

    let mut sh = shell();
    sh.process_line(&format!("echo a | sh {} | c", consumer));
    assert_eq!(fs::read_to_string(&args_file).unwrap(), "| c\n");
}

#[test]
fn test_unopenable_output_is_local_to_the_command() {
    let dir = tempfile::tempdir().unwrap();
    let marker = dir.path().join("still-ran");

    let mut sh = shell();
    let result = sh.process_line(&format!(
        "echo x > {}/missing/out.txt; touch {}",
        dir.path().display(),
        marker.display()
    ));
    assert_eq!(
        result,
        vec![
            Dispatch::Single(LaunchOutcome::Failed),
            Dispatch::Single(LaunchOutcome::Exited(0)),
        ]
    );
    assert!(marker.exists());
}
