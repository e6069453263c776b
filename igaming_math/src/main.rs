//! Fixture check harness.
//!
//! Loads a JSON array of fixtures, evaluates each one through the
//! library and compares results. Exits non-zero on any mismatch.
//!
//! Usage: `igaming_math [fixtures.json]`

use std::fs;
use std::path::Path;
use std::process::ExitCode;

use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use igaming_math::fixtures::{evaluate, load_fixtures, values_match};

const DEFAULT_PATHS: [&str; 3] = [
    "fixtures.json",
    "tests/golden/vectors.json",
    "igaming_math/tests/golden/vectors.json",
];

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let path = match std::env::args().nth(1) {
        Some(p) => p,
        None => match DEFAULT_PATHS.iter().find(|p| Path::new(p).exists()) {
            Some(p) => p.to_string(),
            None => {
                error!("no fixture file given and none of {:?} exists", DEFAULT_PATHS);
                return ExitCode::FAILURE;
            }
        },
    };

    let data = match fs::read_to_string(&path) {
        Ok(d) => d,
        Err(e) => {
            error!(path = %path, "failed to read fixtures: {}", e);
            return ExitCode::FAILURE;
        }
    };
    let fixtures = match load_fixtures(&data) {
        Ok(f) => f,
        Err(e) => {
            error!(path = %path, "{}", e);
            return ExitCode::FAILURE;
        }
    };
    info!(path = %path, count = fixtures.len(), "loaded fixtures");

    let mut passed = 0;
    for (i, fixture) in fixtures.iter().enumerate() {
        match evaluate(fixture) {
            Ok(actual) if values_match(&actual, &fixture.expected) => {
                passed += 1;
                println!("[PASS] #{} {} -> {}", i, fixture.op, actual);
            }
            Ok(actual) => {
                println!(
                    "[FAIL] #{} {}: got {} expected {}",
                    i, fixture.op, actual, fixture.expected
                );
            }
            Err(e) => {
                println!("[FAIL] #{} {}: {}", i, fixture.op, e);
            }
        }
    }

    println!("\n===========================================");
    println!("Results: {}/{} passed", passed, fixtures.len());
    if passed == fixtures.len() {
        println!("[OK] All fixtures passed.");
        ExitCode::SUCCESS
    } else {
        println!("[FAIL] Some fixtures failed.");
        ExitCode::FAILURE
    }
}
