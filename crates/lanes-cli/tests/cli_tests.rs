//! Integration tests for the lanes CLI.
//!
//! These run the built `lanes` binary end-to-end and check its output and
//! exit status.

use std::process::{Command, Output};

/// Run the lanes binary with the given arguments.
fn lanes(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_lanes"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to run lanes binary")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

// =============================================================================
// table / describe
// =============================================================================

#[test]
fn test_table_lists_every_type() {
    let output = lanes(&["table"]);
    assert!(output.status.success(), "stderr: {}", stderr(&output));

    let text = stdout(&output);
    let lines: Vec<&str> = text.lines().collect();
    assert!(lines[0].starts_with("type"));
    assert_eq!(lines.len() - 1, lanes::TABLE.len());
    assert!(text.contains("u8x128"));
    assert!(text.contains("f64x16"));
}

#[test]
fn test_table_filter_by_element() {
    let output = lanes(&["table", "--element", "i16"]);
    assert!(output.status.success());

    let text = stdout(&output);
    for line in text.lines().skip(1) {
        assert!(line.starts_with("i16x"), "unexpected row: {}", line);
    }
}

#[test]
fn test_table_unknown_element_fails() {
    let output = lanes(&["table", "-e", "f16"]);
    assert!(!output.status.success());
    assert!(stderr(&output).contains("f16"));
}

#[test]
fn test_describe_known_type() {
    let output = lanes(&["describe", "u32x4"]);
    assert!(output.status.success());

    let text = stdout(&output);
    assert!(text.contains("lanes:     4"));
    assert!(text.contains("bits:      128"));
    assert!(text.contains("higher:    u64x4"));
    assert!(text.contains("float:     f32x4"));
}

#[test]
fn test_describe_unknown_type_fails() {
    let output = lanes(&["describe", "u32x3"]);
    assert!(!output.status.success());
    assert!(stderr(&output).contains("Unknown vector type 'u32x3'"));
}

// =============================================================================
// kernels
// =============================================================================

#[test]
fn test_mandelbrot_draw() {
    let output = lanes(&[
        "mandelbrot", "--lanes", "4", "--width", "20", "--height", "6", "--draw",
    ]);
    assert!(output.status.success(), "stderr: {}", stderr(&output));

    let text = stdout(&output);
    let grid: Vec<&str> = text.lines().take(6).collect();
    assert!(grid.iter().all(|row| row.chars().count() == 20));
    assert!(text.contains("points:     120"));
}

#[test]
fn test_mandelbrot_rejects_max_iter_past_f32_range() {
    let output = lanes(&["mandelbrot", "--max-iter", "16777217"]);
    assert!(!output.status.success());
    assert!(stderr(&output).contains("16777217"));

    let output = lanes(&["mandelbrot", "--width", "2", "--height", "1", "--max-iter", "16777216"]);
    assert!(output.status.success(), "stderr: {}", stderr(&output));
}

#[test]
fn test_saxpy_same_result_at_every_width() {
    let baseline = lanes(&["saxpy", "--lanes", "1", "--len", "333"]);
    assert!(baseline.status.success());
    for width in ["2", "4", "8", "16", "32"] {
        let output = lanes(&["saxpy", "--lanes", width, "--len", "333"]);
        assert!(output.status.success());
        assert_eq!(stdout(&output), stdout(&baseline), "x{}", width);
    }
}

#[test]
fn test_dot_runs() {
    let output = lanes(&["dot", "--lanes", "16", "--len", "333"]);
    assert!(output.status.success());
    assert!(stdout(&output).contains("elements: 333"));
}

#[test]
fn test_histogram_totals() {
    let output = lanes(&["histogram", "--lanes", "8", "--len", "1001", "--bins", "5"]);
    assert!(output.status.success());

    let total: u32 = stdout(&output)
        .lines()
        .filter_map(|line| line.split(':').nth(1))
        .map(|count| count.trim().parse::<u32>().expect("count"))
        .sum();
    assert_eq!(total, 1001);
}

#[test]
fn test_unsupported_lane_count_fails() {
    let output = lanes(&["saxpy", "--lanes", "3"]);
    assert!(!output.status.success());
    assert!(stderr(&output).contains("3 lanes of f32 is not supported"));
}

#[test]
fn test_verify_passes() {
    let output = lanes(&["verify", "--len", "257"]);
    assert!(output.status.success(), "stderr: {}", stderr(&output));

    let text = stdout(&output);
    assert!(!text.contains("FAIL"));
    assert!(text.contains("all 24 checks passed"));
}

#[test]
fn test_verbose_logging_goes_to_stderr() {
    let output = lanes(&["-vv", "dot", "--len", "64"]);
    assert!(output.status.success());
    assert!(stderr(&output).contains("dot: 64 elements"));
    assert!(!stdout(&output).contains("INFO"));
}
