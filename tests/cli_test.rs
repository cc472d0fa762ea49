use std::process::{Command, Output};

fn run_cli(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_lift_sim"))
        .args(args)
        .env("RUST_LOG", "warn,lift_sim=info")
        .output()
        .expect("Failed to execute lift_sim")
}

/// Test that the headless run finishes and logs its statistics
#[test]
fn test_headless_run_logs_statistics() {
    let output = run_cli(&["--delay-ms", "0"]);

    assert!(
        output.status.success(),
        "Simulation failed to run. stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("SIMULATION COMPLETE"),
        "Simulation did not complete properly. stderr: {}",
        stderr
    );
    assert!(stderr.contains("Total stops:"), "Missing 'Total stops' statistic");
    assert!(stderr.contains("Delivered passengers:"), "Missing 'Delivered passengers' statistic");
    assert!(stderr.contains("Peak load:"), "Missing 'Peak load' statistic");

    // Parse the number - handle log format with timestamp
    let delivered_line = stderr
        .lines()
        .find(|line| line.contains("Delivered passengers:"))
        .expect("Could not find 'Delivered passengers' line");
    let parts: Vec<&str> = delivered_line.split("Delivered passengers:").collect();
    let delivered: usize = parts
        .get(1)
        .and_then(|s| s.trim().parse().ok())
        .expect("Could not parse delivered count");
    assert_eq!(delivered, 19);
}

/// Test that a layout given on the command line produces the expected history
#[test]
fn test_custom_layout_history() {
    let output = run_cli(&["--delay-ms", "0", "--capacity", "1", "--layout", "[[], [2], []]"]);
    assert!(output.status.success(), "Simulation failed to run");

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(
        stdout.contains("Floor history: [0, 1, 2, 0]"),
        "Unexpected history. stdout: {}",
        stdout
    );
    assert!(stdout.contains("Frames drawn: 4"), "Every stop should be drawn");
}

/// Test that JSON mode prints one snapshot per stop
#[test]
fn test_json_snapshots() {
    let output = run_cli(&["--json", "--capacity", "1", "--layout", "[[], [], [0], []]"]);
    assert!(output.status.success(), "Simulation failed to run");

    let stdout = String::from_utf8_lossy(&output.stdout);
    let floors: Vec<u64> = stdout
        .lines()
        .map(|line| {
            let value: serde_json::Value =
                serde_json::from_str(line).unwrap_or_else(|e| panic!("Bad JSON line {}: {}", line, e));
            value["current_floor"].as_u64().expect("current_floor field")
        })
        .collect();
    assert_eq!(floors, vec![0, 2, 0]);
}

/// Test that an unservable layout is rejected with an error
#[test]
fn test_invalid_layout_fails() {
    let output = run_cli(&["--delay-ms", "0", "--layout", "[[], [1]]"]);
    assert!(!output.status.success(), "Self-trip on floor 1 should be rejected");

    let output = run_cli(&["--delay-ms", "0", "--layout", "not json"]);
    assert!(!output.status.success(), "Malformed layout should be rejected");
}

/// Test that seeded random buildings are reproducible
#[test]
fn test_seeded_random_building_is_reproducible() {
    let args = ["--json", "--random-floors", "7", "--random-passengers", "15", "--seed", "11"];
    let first = run_cli(&args);
    let second = run_cli(&args);

    assert!(first.status.success(), "Simulation failed to run");
    assert_eq!(first.stdout, second.stdout);
    assert!(!first.stdout.is_empty());
}
