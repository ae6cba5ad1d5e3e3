// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use std::process::ExitCode;

use anyhow::Result;
use tracing::{error, info, warn};

use gpu_addon_init::bootstrap::{report, Bootstrap};
use gpu_addon_init::kubernetes::connect;
use gpu_addon_init::scheme::build_scheme;

#[tokio::main]
async fn main() -> ExitCode {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let report = report(&run().await);
    if report.success {
        info!("{}", report.message);
    } else {
        error!("{}", report.message);
    }
    if let Some(hint) = &report.hint {
        warn!("{}", hint);
    }

    report.exit_code()
}

async fn run() -> Result<()> {
    info!("Starting GPU add-on bootstrap");

    let scheme = build_scheme()?;
    let client = connect().await?;

    Bootstrap::new(client, scheme).run().await?;
    Ok(())
}
