use std::io::Cursor;
use std::path::Path;

use tempfile::tempdir;
use zkllvm_bench::core::{Subject, ToolConfig};
use zkllvm_bench::process::MockRunner;
use zkllvm_bench::session::BenchmarkSession;

const MS_PRINT_TABLE: &str = "\
--------------------------------------------------------------------------------
  n        time(i)         total(B)   useful-heap(B) extra-heap(B)    stacks(B)
--------------------------------------------------------------------------------
  0              0                0                0             0            0
  1        126,094      536,870,912      536,000,000       870,912            0
  2        250,000    1,610,612,736    1,610,000,000       612,736            0
";

fn built_template(root: &Path) {
    let build_src = root.join("build").join("src");
    std::fs::create_dir_all(&build_src).unwrap();
    for name in ["template.ll", "template.crct", "template.tbl"] {
        std::fs::write(build_src.join(name), b"").unwrap();
    }
}

fn mock_tools() -> MockRunner {
    MockRunner::new()
        .with_stdout("ms_print", MS_PRINT_TABLE)
        .with_stderr("time", "3.50user 0.10system 1:02.50elapsed 99%CPU (0avgtext+0avgdata 2048maxresident)k")
}

#[test]
fn full_menu_session() {
    let dir = tempdir().unwrap();
    built_template(dir.path());

    let mut session = BenchmarkSession::new(dir.path(), ToolConfig::default(), dir.path(), Box::new(mock_tools()));

    // Display before measuring prints nothing; then all four measurements; then display; then exit.
    let input = Cursor::new("6\n1\n2\n3\n4\n5\n6\n7\n");
    let mut out = Vec::new();
    session.run(input, &mut out).unwrap();

    let text = String::from_utf8(out).unwrap();
    assert_eq!(text.matches("Enter your choice (1-7): ").count(), 8);
    assert_eq!(text.matches("1. Assigner:").count(), 1);
    assert!(text.contains("1. Assigner:\n   Memory: 2.00GB,\n   Time: 62.5s\n"));
    assert!(text.contains("2. Proof:\n   Memory: 2.00GB,\n   Time: 62.5s\n"));

    for subject in [Subject::Assigner, Subject::Proof] {
        let r = session.result(subject);
        assert_eq!(r.memory_gb, Some(2.0));
        assert_eq!(r.time_secs, Some(62.5));
    }
}

#[test]
fn invalid_input_reprompts_and_eof_exits() {
    let dir = tempdir().unwrap();
    built_template(dir.path());

    let mut session = BenchmarkSession::new(dir.path(), ToolConfig::default(), dir.path(), Box::new(mock_tools()));
    let mut out = Vec::new();
    session.run(Cursor::new("nine\n\n2\n"), &mut out).unwrap();

    let text = String::from_utf8(out).unwrap();
    assert_eq!(text.matches("Enter your choice (1-7): ").count(), 4);
    assert_eq!(session.result(Subject::Assigner).memory_gb, Some(2.0));
    assert_eq!(session.result(Subject::Proof).memory_gb, None);
}

#[test]
fn repeated_measurement_overwrites() {
    let dir = tempdir().unwrap();
    built_template(dir.path());

    let runner = MockRunner::new()
        .with_stdout("ms_print", "0 1 1,073,741,824 0 0 0\n")
        .with_stdout("ms_print", "0 1 268,435,456 0 0 0\n")
        .with_stderr("time", "0:09.00elapsed")
        .with_stderr("time", "0:01.25elapsed");
    let mut session = BenchmarkSession::new(dir.path(), ToolConfig::default(), dir.path(), Box::new(runner));

    session.run(Cursor::new("2\n4\n"), &mut Vec::new()).unwrap();
    assert_eq!(session.result(Subject::Assigner).memory_gb, Some(1.0));
    assert_eq!(session.result(Subject::Assigner).time_secs, Some(9.0));

    session.run(Cursor::new("2\n4\n7\n"), &mut Vec::new()).unwrap();
    assert_eq!(session.result(Subject::Assigner).memory_gb, Some(0.25));
    assert_eq!(session.result(Subject::Assigner).time_secs, Some(1.25));
}

#[test]
fn missing_build_never_enters_loop() {
    let dir = tempdir().unwrap();
    let build_src = dir.path().join("build").join("src");
    std::fs::create_dir_all(&build_src).unwrap();
    std::fs::write(build_src.join("template.ll"), b"").unwrap();

    let mut session = BenchmarkSession::new(dir.path(), ToolConfig::default(), dir.path(), Box::new(mock_tools()));
    assert!(!session.verify_build());
    assert_eq!(session.artifacts().missing(), vec!["template.crct", "template.tbl"]);

    let mut out = Vec::new();
    let err = session.run(Cursor::new("2\n7\n"), &mut out).unwrap_err();
    assert_eq!(err.to_string(), "missing required build files: template.crct, template.tbl");
    assert!(out.is_empty());
    assert_eq!(session.result(Subject::Assigner).memory_gb, None);
}
