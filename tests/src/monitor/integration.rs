#![cfg(test)]
use std::io::Cursor;

use pingwatch_common::config::ALERT_LOG_FILE;
use pingwatch_common::network::host::Hostname;
use pingwatch_core::input;
use pingwatch_core::monitor::{self, ALL_RESPONSIVE, SOME_UNRESPONSIVE};

use crate::support::{CapturedOutput, StubProber, config, read_log};

/// File with a blank line between two hosts, one of which never answers.
#[test]
fn file_input_with_one_unresponsive_host() {
    let dir = tempfile::tempdir().unwrap();
    let servers = dir.path().join("servers.txt");
    std::fs::write(&servers, "alpha.example\n\nbeta.example\n").unwrap();
    let log_path = dir.path().join(ALERT_LOG_FILE);
    let cfg = config(&log_path, false);

    let hosts: Vec<Hostname> = input::read_hosts_from_file(&servers).unwrap();
    let names: Vec<&str> = hosts.iter().map(Hostname::as_str).collect();
    assert_eq!(names, ["alpha.example", "beta.example"]);

    let mut prober = StubProber::default()
        .responsive("alpha.example")
        .unresponsive("beta.example");
    let mut output = CapturedOutput::default();
    let summary = monitor::run(&hosts, &mut prober, &mut output, &cfg);

    assert_eq!(summary.unresponsive, [Hostname::parse("beta.example").unwrap()]);
    assert_eq!(
        output.lines,
        [
            "Pinging server: alpha.example",
            "Server alpha.example is responsive",
            "Pinging server: beta.example",
            SOME_UNRESPONSIVE,
        ]
    );
    assert!(output.lines.last().unwrap().starts_with("Some servers are unresponsive"));

    let log = read_log(&log_path);
    assert_eq!(log.len(), 1);
    assert!(log[0].starts_with("ALERT: "));
    assert!(log[0].contains("beta.example"));
    assert!(!log[0].contains("alpha.example"));
}

#[test]
fn empty_input_reports_all_responsive() {
    let dir = tempfile::tempdir().unwrap();
    let log_path = dir.path().join(ALERT_LOG_FILE);
    let cfg = config(&log_path, false);

    let hosts = input::read_hosts(Cursor::new("")).unwrap();
    assert!(hosts.is_empty());

    let mut prober = StubProber::default();
    let mut output = CapturedOutput::default();
    let summary = monitor::run(&hosts, &mut prober, &mut output, &cfg);

    assert!(summary.unresponsive.is_empty());
    assert_eq!(output.lines, [ALL_RESPONSIVE]);
    assert!(read_log(&log_path).is_empty());
}

#[test]
fn repeated_runs_keep_appending() {
    let dir = tempfile::tempdir().unwrap();
    let log_path = dir.path().join(ALERT_LOG_FILE);
    let cfg = config(&log_path, true);
    let hosts = input::read_hosts(Cursor::new("down.example\nup.example\n")).unwrap();

    let mut previous: usize = 0;
    for run in 1..=3 {
        let mut prober = StubProber::default()
            .unresponsive("down.example")
            .responsive("up.example");
        let mut output = CapturedOutput::default();
        monitor::run(&hosts, &mut prober, &mut output, &cfg);

        let log = read_log(&log_path);
        assert_eq!(log.len(), run);
        assert!(log.len() > previous);
        assert!(log.iter().all(|line| line.contains("Server down.example is unresponsive")));
        previous = log.len();
    }
}

#[test]
fn quiet_mode_keeps_alert_logging() {
    let dir = tempfile::tempdir().unwrap();
    let log_path = dir.path().join(ALERT_LOG_FILE);
    let cfg = config(&log_path, true);
    let hosts = input::read_hosts(Cursor::new("up.example\nmissing.example\n")).unwrap();

    let mut prober = StubProber::default().responsive("up.example");
    let mut output = CapturedOutput::default();
    let summary = monitor::run(&hosts, &mut prober, &mut output, &cfg);

    assert!(output.lines.is_empty());
    assert_eq!(summary.checked, 2);
    assert_eq!(summary.unresponsive, [Hostname::parse("missing.example").unwrap()]);

    let log = read_log(&log_path);
    assert_eq!(log.len(), 1);
    assert!(log[0].ends_with("Server missing.example is unresponsive"));
}

#[test]
fn unresponsive_hosts_map_one_to_one_onto_alert_lines() {
    let dir = tempfile::tempdir().unwrap();
    let log_path = dir.path().join(ALERT_LOG_FILE);
    let cfg = config(&log_path, false);
    let servers = Cursor::new("a.example\nb.example\na.example\nc.example\n");
    let hosts = input::read_hosts(servers).unwrap();

    let mut prober = StubProber::default()
        .unresponsive("a.example")
        .responsive("b.example")
        .unresponsive("c.example");
    let mut output = CapturedOutput::default();
    let summary = monitor::run(&hosts, &mut prober, &mut output, &cfg);

    let log = read_log(&log_path);
    assert_eq!(log.len(), summary.unresponsive.len());
    for (line, host) in log.iter().zip(&summary.unresponsive) {
        assert!(line.ends_with(&format!("Server {host} is unresponsive")));
    }
    assert_eq!(summary.unresponsive.len(), 3);
}
