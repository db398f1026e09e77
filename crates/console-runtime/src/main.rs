//! # Vigil Console
//!
//! Terminal front-end for the violation notification engine.
//!
//! ## Startup Sequence
//!
//! 1. Initialize telemetry (logging to stderr, metrics registry)
//! 2. Load configuration from the environment
//! 3. Start the event bus and the evidence router
//! 4. Start the session (demo feed → notification controller)
//! 5. Run the operator terminal until `q`, end of input, or Ctrl+C
//!
//! ## Shutdown Sequence
//!
//! 1. Stop the feed (cancels pending timers)
//! 2. Stop the controller (backlog discarded)
//! 3. Stop the router
//! 4. Optionally print metrics

use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use tokio::io::BufReader;
use tracing::{info, warn};

use console_runtime::{ConsoleConfig, ConsoleSession, EvidenceRouter, OperatorConsole, OperatorExit};
use console_telemetry::{encode_metrics, init_telemetry, TelemetryConfig};
use shared_bus::InMemoryEventBus;
use vc_01_violation_feed::{sample_archetypes, DemoFeed, SystemClock, ViolationFactory};

fn main() -> Result<()> {
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("Failed to build tokio runtime")?;
    let result = runtime.block_on(run());

    // A blocking stdin read cannot be cancelled; don't wait for it
    runtime.shutdown_timeout(Duration::from_millis(250));
    result
}

async fn run() -> Result<()> {
    init_telemetry(&TelemetryConfig::from_env()).context("Failed to initialize telemetry")?;

    let config = ConsoleConfig::from_env().context("Invalid console configuration")?;
    info!(
        warmup_secs = config.feed.warmup.as_secs(),
        min_interval_secs = config.feed.min_interval.as_secs(),
        max_interval_secs = config.feed.max_interval.as_secs(),
        "Vigil console starting"
    );

    let bus = Arc::new(InMemoryEventBus::new());
    let (router_stop, router_stop_rx) = tokio::sync::watch::channel(false);
    let router = tokio::spawn(EvidenceRouter::new(&bus).run(router_stop_rx));

    let factory = ViolationFactory::new(sample_archetypes(), Arc::new(SystemClock))
        .context("Failed to build violation catalog")?;
    let feed = DemoFeed::new(config.feed.clone(), factory).context("Failed to create demo feed")?;
    let session = ConsoleSession::start(feed, config.queue.clone(), Arc::clone(&bus));

    let exit = {
        let console = OperatorConsole::new(session.handle(), tokio::io::stdout());
        tokio::select! {
            result = console.run(BufReader::new(tokio::io::stdin())) => {
                result.context("Operator terminal failed")?
            }
            signal = tokio::signal::ctrl_c() => {
                signal.context("Failed to listen for Ctrl+C")?;
                info!("Interrupt received");
                OperatorExit::Quit
            }
        }
    };
    info!(?exit, "Operator session finished");

    let summary = session.shutdown().await;
    if summary.discarded > 0 {
        warn!(discarded = summary.discarded, "Pending notifications discarded");
    }

    let _ = router_stop.send(true);
    router.await.context("Evidence router task failed")?;

    if config.operator.metrics_on_exit {
        print!("{}", encode_metrics().context("Failed to encode metrics")?);
    }

    info!("Shutdown complete");
    Ok(())
}
