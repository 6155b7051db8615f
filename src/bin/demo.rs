//! Demo application for the bootstrap toolkit.
//!
//! Wires a heartbeat component into a service context, loads it, runs a
//! supervised background loop until ctrl-c, then stops the context.
//!
//! Configuration failures are fatal here, at the entry point; the library
//! itself only ever returns them.

use std::any::Any;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use clap::Arg;
use service_kit::{Component, ComponentError, FlagSet, ServiceContext, Supervisor};

const HEARTBEAT_ID: &str = "heartbeat";
const PERIOD_FLAG: &str = "heartbeat-secs";

/// Sample component: logs a heartbeat on a configurable interval.
#[derive(Default)]
struct Heartbeat {
    period_secs: AtomicU64,
}

impl Heartbeat {
    fn period(&self) -> Duration {
        Duration::from_secs(self.period_secs.load(Ordering::Relaxed))
    }
}

#[async_trait]
impl Component for Heartbeat {
    fn id(&self) -> &str {
        HEARTBEAT_ID
    }

    fn init_flags(&self, flags: &mut FlagSet) {
        flags.register(
            Arg::new(PERIOD_FLAG)
                .long(PERIOD_FLAG)
                .value_name("SECONDS")
                .default_value("10")
                .help("Seconds between heartbeats"),
        );
    }

    async fn activate(&self, ctx: &ServiceContext) -> Result<(), ComponentError> {
        let secs: u64 = ctx.flag(PERIOD_FLAG).unwrap_or("10").parse()?;
        self.period_secs.store(secs, Ordering::Relaxed);
        ctx.logger(HEARTBEAT_ID)
            .info(format!("heartbeat ready, every {secs}s"));
        Ok(())
    }

    async fn stop(&self) -> Result<(), ComponentError> {
        Ok(())
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut ctx = match ServiceContext::builder()
        .name("service-kit-demo")
        .component(Arc::new(Heartbeat::default()))
        .build()
    {
        Ok(ctx) => ctx,
        Err(err) => {
            // No subscriber is installed yet; configuration failures go
            // straight to stderr before exiting non-zero.
            eprintln!("service-kit-demo: {err}");
            std::process::exit(1);
        }
    };

    ctx.load().await?;

    tracing::info!(
        name = ctx.name(),
        environment = %ctx.environment(),
        "demo running, press ctrl-c to stop"
    );

    let component = ctx.must_get(HEARTBEAT_ID);
    let Some(heartbeat) = component.as_any().downcast_ref::<Heartbeat>() else {
        tracing::error!(id = HEARTBEAT_ID, "component has an unexpected type");
        std::process::exit(1);
    };

    let mut supervisor = Supervisor::new(ctx.log_provider());
    let mut shutdown_rx = supervisor.subscribe();
    let logger = ctx.logger(HEARTBEAT_ID);
    let period = heartbeat.period();
    supervisor.spawn(HEARTBEAT_ID, async move {
        let mut ticker = tokio::time::interval(period);
        loop {
            tokio::select! {
                _ = ticker.tick() => logger.info("beat"),
                _ = shutdown_rx.recv() => break,
            }
        }
        Ok(())
    });

    tokio::signal::ctrl_c().await?;
    tracing::info!("shutdown signal received");

    supervisor.trigger_shutdown();
    supervisor.join().await;
    ctx.stop().await?;

    tracing::info!("shutdown complete");
    Ok(())
}
