use std::io::stdout;
use std::time::Duration;

use anyhow::Context;
use clap::Parser;
use common::api::CommandReply;
use machine_client::{ClientError, MachineClient, StatusPoller};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;
use vend_cli::poll_ticks;
use vend_cli::terminal::TerminalSink;
use vend_cli::transport::ReqwestTransport;

#[derive(clap::Parser, Debug)]
#[command(version, about = "Watch and drive a vending machine through its HTTP API.", long_about = None)]
struct Args {
    /// Where the machine service is listening.
    #[arg(long, default_value = "http://localhost:8000")]
    base_url: String,
    /// Give up on a request after this long.
    #[arg(long, default_value_t = 5000)]
    timeout_ms: u64,
    #[command(subcommand)]
    command: Command,
}

#[derive(clap::Subcommand, Debug)]
enum Command {
    /// Poll until interrupted, printing the status whenever it changes.
    Watch {
        #[arg(long, default_value_t = 2000)]
        interval_ms: u64,
    },
    /// Print the current status once.
    Status,
    /// Insert a coin of the given value.
    Coin {
        #[arg(long, default_value_t = 1)]
        amount: u32,
    },
    /// Vend an item.
    Vend,
    /// Press the machine's front button.
    Press,
    /// Fire a named state machine trigger, e.g. `recover`.
    Trigger {
        name: String,
    },
}

fn report(result: Result<CommandReply, ClientError>) -> anyhow::Result<()> {
    let reply = result.context("Command failed")?;
    println!("{}", reply.message);
    Ok(())
}

async fn shutdown_signal() {
    if let Err(error) = tokio::signal::ctrl_c().await {
        warn!("Could not listen for Ctrl-C: {}", error);
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();
    let args = Args::parse();

    let transport = ReqwestTransport::new(&args.base_url, Duration::from_millis(args.timeout_ms))
        .context("Could not build HTTP client")?;
    let poller = StatusPoller::new(MachineClient::new(transport), TerminalSink::new(stdout()));

    match args.command {
        Command::Watch { interval_ms } => {
            info!("Watching {} every {}ms", args.base_url, interval_ms);
            poller.run_until(poll_ticks(Duration::from_millis(interval_ms)), shutdown_signal()).await;
            let stats = poller.stats();
            info!("Stopped after {} polls ({} failed)", stats.refreshes, stats.failures);
        }
        Command::Status => {
            poller.refresh_status().await.context("Could not read machine status")?;
        }
        Command::Coin { amount } => report(poller.insert_coin(amount).await)?,
        Command::Vend => report(poller.vend_item().await)?,
        Command::Press => report(poller.press_button().await)?,
        Command::Trigger { name } => report(poller.trigger(&name).await)?,
    }
    Ok(())
}
