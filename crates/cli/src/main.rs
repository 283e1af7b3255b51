use anyhow::Context;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "slackrelay")]
#[command(about = "slackrelay CLI", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Show version
    Version,

    /// Create the configuration directory and a default config file.
    Init {
        /// Config file path (default: SLACKRELAY_CONFIG_PATH or ~/.slackrelay/config.json)
        #[arg(long, short, value_name = "PATH")]
        config: Option<std::path::PathBuf>,
    },

    /// Forward one notification event (JSON) to the configured Slack webhook.
    /// Prints the delivery report as JSON on stdout.
    Forward {
        /// Config file path (default: SLACKRELAY_CONFIG_PATH or ~/.slackrelay/config.json)
        #[arg(long, short, value_name = "PATH")]
        config: Option<std::path::PathBuf>,

        /// Event JSON file; reads stdin when omitted.
        #[arg(long, short, value_name = "PATH")]
        event: Option<std::path::PathBuf>,
    },

    /// Post raw text to the configured Slack webhook, without an event envelope.
    Send {
        /// Config file path (default: SLACKRELAY_CONFIG_PATH or ~/.slackrelay/config.json)
        #[arg(long, short, value_name = "PATH")]
        config: Option<std::path::PathBuf>,

        /// Message text to post.
        text: String,
    },
}

#[tokio::main]
async fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Version) => {
            println!("slackrelay {}", env!("CARGO_PKG_VERSION"));
        }
        Some(Commands::Init { config }) => {
            if let Err(e) = run_init(config) {
                log::error!("init failed: {}", e);
                std::process::exit(1);
            }
        }
        Some(Commands::Forward { config, event }) => {
            if let Err(e) = run_forward(config, event).await {
                log::error!("forward failed: {}", e);
                std::process::exit(1);
            }
        }
        Some(Commands::Send { config, text }) => {
            if let Err(e) = run_send(config, text).await {
                log::error!("send failed: {}", e);
                std::process::exit(1);
            }
        }
        None => {
            println!("Run with --help for usage");
        }
    }
}

fn run_init(config_path: Option<std::path::PathBuf>) -> anyhow::Result<()> {
    let path = config_path.unwrap_or_else(lib::config::default_config_path);
    let _dir = lib::init::init_config_dir(&path)?;
    println!(
        "initialized configuration at {}",
        path.parent().unwrap_or(std::path::Path::new(".")).display()
    );
    Ok(())
}

async fn run_forward(
    config_path: Option<std::path::PathBuf>,
    event_path: Option<std::path::PathBuf>,
) -> anyhow::Result<()> {
    let (config, _path) = lib::config::load_config(config_path)?;
    let raw = read_event(event_path)?;
    let event = lib::event::NotificationEvent::from_json(&raw)?;
    let forwarder = lib::forwarder::Forwarder::from_config(&config)?;
    let ctx = lib::forwarder::InvocationContext::new();
    let report = forwarder.handle(&event, &ctx).await?;
    println!("{}", serde_json::to_string(&report)?);
    Ok(())
}

fn read_event(path: Option<std::path::PathBuf>) -> anyhow::Result<String> {
    use std::io::Read;
    match path {
        Some(p) => std::fs::read_to_string(&p)
            .with_context(|| format!("reading event from {}", p.display())),
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("reading event from stdin")?;
            Ok(buf)
        }
    }
}

async fn run_send(config_path: Option<std::path::PathBuf>, text: String) -> anyhow::Result<()> {
    let (config, _path) = lib::config::load_config(config_path)?;
    let url = lib::config::resolve_slack_webhook(&config)
        .ok_or_else(|| anyhow::anyhow!("webhook URL not configured (set SLACK_WEBHOOK)"))?;
    let channel = lib::channels::SlackChannel::new(url);
    let delivery = channel.post_message(&text).await?;
    println!("{} {}", delivery.status_code, delivery.body);
    Ok(())
}
