//! Compare a constant control group against a noisy test group
//!
//! Run with `cargo run --example compare` (add `-- --json` for JSON output,
//! `RUST_LOG=debug` to trace the estimators).

use anyhow::Result;
use steelyard::prelude::*;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    let control = vec![0.2; 12];
    let test = vec![
        0.21, 0.29, 0.242, 0.16, 0.23, 0.19, 0.13, 0.24, 0.17, 0.23, 0.2, 0.13, 0.24, 0.2, 0.2,
        0.2,
    ];

    let report = ComparisonReport::compute(&control, &test, &ReportConfig::default())?;

    if std::env::args().any(|arg| arg == "--json") {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("{report}");
    }

    // Paired correctness of two classifiers on the same items
    let first = [true, true, false, true, true, true, false, true, true, true];
    let second = [true, false, false, true, false, true, false, false, true, true];
    let table = ContingencyTable::from_paired_outcomes(&first, &second)?;
    let paired = paired_test(&table)?;
    println!(
        "\nMcNemar (exact): statistic = {}, p = {:.4}",
        paired.statistic, paired.p_value
    );

    Ok(())
}
