//! Source loading and task supervision.

use std::io::Write;
use std::sync::Arc;
use std::time::Duration;

use code_watch::config::{PollerConfig, WatchConfig};
use code_watch::lifecycle::{launch, spawn_pollers};
use code_watch::poller::{PollError, PollTask};
use code_watch::probe::ProbeError;
use code_watch::source::SourceError;
use code_watch::Record;

mod common;

fn source_file(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

#[tokio::test]
async fn test_malformed_source_starts_no_pollers() {
    let file = source_file(
        "alice,https://secretsanta.cadbury.co.uk/code/AAA\n\
         bob\n",
    );
    let mut config = WatchConfig::default();
    config.source.path = file.path().to_path_buf();

    let result = launch(&config, Arc::new(common::prober()));

    assert!(matches!(result, Err(SourceError::MissingColumn { line: 2, .. })));
}

#[tokio::test]
async fn test_missing_source_starts_no_pollers() {
    let mut config = WatchConfig::default();
    config.source.path = "/nonexistent/urls.csv".into();

    let result = launch(&config, Arc::new(common::prober()));

    assert!(matches!(result, Err(SourceError::Io(_))));
}

#[tokio::test]
async fn test_comment_only_source_starts_nothing() {
    let file = source_file("# tag,url\n# nothing yet\n");
    let mut config = WatchConfig::default();
    config.source.path = file.path().to_path_buf();

    let pollers = launch(&config, Arc::new(common::prober())).unwrap();

    assert!(pollers.is_empty());
    assert_eq!(pollers.len(), 0);
}

#[tokio::test]
async fn test_invalid_urls_end_their_tasks() {
    let file = source_file(
        "# two records, neither a code URL\n\
         alice,https://example.com/code/AAA\n\
         bob,http://secretsanta.cadbury.co.uk/code/BBB\n",
    );
    let mut config = WatchConfig::default();
    config.source.path = file.path().to_path_buf();

    let pollers = launch(&config, Arc::new(common::prober())).unwrap();
    assert_eq!(pollers.len(), 2);

    tokio::time::timeout(Duration::from_secs(5), pollers.wait())
        .await
        .expect("invalid-URL tasks should stop on their own");
}

#[tokio::test]
async fn test_spawn_pollers_one_task_per_record() {
    let records = vec![
        Record::new("alice", "not a url"),
        Record::new("bob", "also not a url"),
        Record::new("carol", "still not a url"),
    ];

    let pollers = spawn_pollers(records, Arc::new(common::prober()), &PollerConfig::default());

    assert_eq!(pollers.len(), 3);
    tokio::time::timeout(Duration::from_secs(5), pollers.wait())
        .await
        .unwrap();
}

#[tokio::test]
async fn test_transport_failure_ends_task() {
    // Code URLs cannot point at a mock, so the production host is resolved
    // to loopback where nothing accepts the connection.
    let addr = common::closed_addr().await;
    let client = code_watch::probe::http::client_builder(&Default::default())
        .no_proxy()
        .resolve("secretsanta.cadbury.co.uk", addr)
        .build()
        .unwrap();
    let probe = Arc::new(code_watch::probe::HttpProber::with_client(client));

    let task = PollTask::new(
        Record::new("alice", "https://secretsanta.cadbury.co.uk/code/AAA"),
        probe,
        Duration::ZERO,
    );
    let err = tokio::time::timeout(Duration::from_secs(10), task.run_with(|_, _| {}))
        .await
        .unwrap();

    assert!(matches!(err, PollError::Probe(ProbeError::Transport(_))));
}
