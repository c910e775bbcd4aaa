// ABOUTME: Test support utilities.
// ABOUTME: Recording command runner and cache purger fakes for pipeline tests.

use async_trait::async_trait;
use parking_lot::Mutex;
use sitepush::error::{Error, Result};
use sitepush::process::CommandRunner;
use sitepush::purge::{CachePurger, PurgeError};
use sitepush::types::ToolCommand;
use std::sync::{Arc, Once};

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for tests. Safe to call multiple times.
#[allow(dead_code)]
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::EnvFilter;
        let filter = EnvFilter::from_default_env()
            .add_directive("sitepush=debug".parse().unwrap());
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .try_init()
            .ok();
    });
}

/// Something the pipeline did, in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    Run(String),
    Capture(String),
    Purge,
}

/// Shared, ordered record of pipeline side effects.
#[derive(Debug, Clone, Default)]
pub struct EventLog(Arc<Mutex<Vec<Event>>>);

#[allow(dead_code)]
impl EventLog {
    pub fn push(&self, event: Event) {
        self.0.lock().push(event);
    }

    pub fn events(&self) -> Vec<Event> {
        self.0.lock().clone()
    }

    /// Command lines passed to `run`, in order.
    pub fn runs(&self) -> Vec<String> {
        self.events()
            .into_iter()
            .filter_map(|e| match e {
                Event::Run(line) => Some(line),
                _ => None,
            })
            .collect()
    }

    pub fn purge_count(&self) -> usize {
        self.events().iter().filter(|e| **e == Event::Purge).count()
    }

    /// Index of the first event matching `pred`.
    pub fn position(&self, pred: impl Fn(&Event) -> bool) -> Option<usize> {
        self.events().iter().position(pred)
    }
}

/// Records every command instead of spawning it.
pub struct FakeRunner {
    log: EventLog,
    describe_output: String,
    fail_on: Option<String>,
}

#[allow(dead_code)]
impl FakeRunner {
    pub fn new(log: &EventLog) -> Self {
        Self {
            log: log.clone(),
            describe_output: "v1.0.0-2-gabc1234\n".to_string(),
            fail_on: None,
        }
    }

    /// Exit non-zero for any command line starting with `prefix`.
    pub fn failing_on(mut self, prefix: &str) -> Self {
        self.fail_on = Some(prefix.to_string());
        self
    }

    /// Stdout returned by `capture`.
    pub fn describing(mut self, output: &str) -> Self {
        self.describe_output = output.to_string();
        self
    }

    fn check(&self, line: String) -> Result<()> {
        match &self.fail_on {
            Some(prefix) if line.starts_with(prefix.as_str()) => Err(Error::CommandFailed {
                command: line,
                code: Some(1),
            }),
            _ => Ok(()),
        }
    }
}

#[async_trait]
impl CommandRunner for FakeRunner {
    async fn run(&self, command: &ToolCommand) -> Result<()> {
        let line = command.to_string();
        self.log.push(Event::Run(line.clone()));
        self.check(line)
    }

    async fn capture(&self, command: &ToolCommand) -> Result<String> {
        let line = command.to_string();
        self.log.push(Event::Capture(line.clone()));
        self.check(line)?;
        Ok(self.describe_output.clone())
    }
}

/// Counts purge calls, optionally rejecting them with an HTTP status.
pub struct FakePurger {
    log: EventLog,
    reject_with: Option<u16>,
}

#[allow(dead_code)]
impl FakePurger {
    pub fn new(log: &EventLog) -> Self {
        Self {
            log: log.clone(),
            reject_with: None,
        }
    }

    pub fn rejecting(mut self, status: u16) -> Self {
        self.reject_with = Some(status);
        self
    }
}

#[async_trait]
impl CachePurger for FakePurger {
    async fn purge(&self) -> std::result::Result<(), PurgeError> {
        self.log.push(Event::Purge);
        match self.reject_with {
            Some(status) => Err(PurgeError::Status {
                status,
                body: "rejected".to_string(),
            }),
            None => Ok(()),
        }
    }
}
