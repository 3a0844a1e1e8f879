//! Shared helpers for the CLI integration tests.
//!
//! `CliRunner` drives `studpoker_cli::run` in-process and captures stdout,
//! stderr and the exit code. `EnvGuard` sets `STUDPOKER_*` variables for
//! one test and restores them on drop; tests using it must be `#[serial]`.

#![allow(dead_code)]

use std::time::{Duration, Instant};

pub const STUDPOKER_ENV: [&str; 5] = [
    "STUDPOKER_CONFIG",
    "STUDPOKER_SEED",
    "STUDPOKER_HANDS",
    "STUDPOKER_SHOW_DECK",
    "STUDPOKER_FORMAT",
];

#[derive(Debug)]
pub struct CliResult {
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
    pub duration: Duration,
}

#[derive(Debug, Default)]
pub struct CliRunner;

impl CliRunner {
    pub fn new() -> Self {
        CliRunner
    }

    pub fn run(&self, args: &[&str]) -> CliResult {
        let argv: Vec<&str> = std::iter::once("studpoker")
            .chain(args.iter().copied())
            .collect();
        let mut out = Vec::new();
        let mut err = Vec::new();
        let start = Instant::now();
        let exit_code = studpoker_cli::run(argv, &mut out, &mut err);
        CliResult {
            exit_code,
            stdout: String::from_utf8_lossy(&out).into_owned(),
            stderr: String::from_utf8_lossy(&err).into_owned(),
            duration: start.elapsed(),
        }
    }
}

#[derive(Debug)]
pub struct EnvGuard {
    saved: Vec<(&'static str, Option<String>)>,
}

impl EnvGuard {
    /// Clear every `STUDPOKER_*` setting for the duration of the test.
    pub fn clean() -> Self {
        let saved = STUDPOKER_ENV
            .iter()
            .map(|&key| (key, std::env::var(key).ok()))
            .collect();
        for key in STUDPOKER_ENV {
            // SAFETY: callers are #[serial]; no other thread touches the env.
            unsafe { std::env::remove_var(key) };
        }
        EnvGuard { saved }
    }

    pub fn set(&self, key: &str, value: &str) {
        // SAFETY: callers are #[serial]; no other thread touches the env.
        unsafe { std::env::set_var(key, value) };
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        for (key, value) in &self.saved {
            // SAFETY: callers are #[serial]; no other thread touches the env.
            unsafe {
                match value {
                    Some(v) => std::env::set_var(key, v),
                    None => std::env::remove_var(key),
                }
            }
        }
    }
}
