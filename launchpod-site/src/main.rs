use std::path::PathBuf;
use std::time::Instant;

use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use launchpod_config::{ConfigLoad, ConfigLoader};
use launchpod_core::forms::{FormKind, SubmissionState};
use launchpod_core::scroll::Viewport;
use launchpod_site::preview::{self, PreviewOptions};
use launchpod_site::sections::FormMessage;
use launchpod_site::{EventLoop, Message, PlatformEvent, Relays};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser, Debug)]
#[command(name = "launchpod")]
#[command(about = "Launchpod site engine: scroll preview and form relays")]
struct Cli {
    /// Site config file (TOML or JSON); overrides LAUNCHPOD_CONFIG_PATH
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// .env file with relay secrets
    #[arg(long, global = true)]
    env_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Sweep the page top to bottom and log showcase frames and gate states
    Preview(PreviewArgs),
    /// Subscribe to the newsletter
    Subscribe {
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
    },
    /// Send a booking request
    Book(BookArgs),
    /// Print the effective configuration as TOML
    Config,
}

#[derive(Args, Debug)]
struct PreviewArgs {
    #[arg(long, default_value_t = 1280.0)]
    width: f32,
    #[arg(long, default_value_t = 800.0)]
    height: f32,
    #[arg(long, default_value_t = 24)]
    steps: usize,
}

#[derive(Args, Debug)]
struct BookArgs {
    #[arg(long)]
    name: String,
    #[arg(long)]
    email: String,
    #[arg(long)]
    phone: String,
    #[arg(long)]
    event_type: Option<String>,
    #[arg(long)]
    message: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,launchpod_core=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let mut loader = ConfigLoader::new();
    if let Some(path) = cli.config {
        loader = loader.with_config_path(path);
    }
    if let Some(path) = cli.env_file {
        loader = loader.with_env_file(path);
    }
    let load = loader.load().context("failed to load configuration")?;
    if load.env_file_loaded {
        info!("loaded .env file");
    }

    match cli.command {
        Command::Preview(args) => run_preview(load, args),
        Command::Subscribe { name, email } => {
            submit(load, FormKind::Newsletter, [("name", name), ("email", email)]).await
        }
        Command::Book(args) => {
            let fields = [
                ("name", args.name),
                ("email", args.email),
                ("phone", args.phone),
                ("eventType", args.event_type.unwrap_or_default()),
                ("message", args.message.unwrap_or_default()),
            ];
            submit(load, FormKind::Booking, fields).await
        }
        Command::Config => {
            print!("{}", load.config.to_toml()?);
            Ok(())
        }
    }
}

fn run_preview(load: ConfigLoad, args: PreviewArgs) -> anyhow::Result<()> {
    let options = PreviewOptions {
        width: args.width,
        height: args.height,
        steps: args.steps,
    };
    let samples = preview::sweep(&load.config, load.catalog, options)
        .context("failed to build page for preview")?;
    info!(samples = samples.len(), "preview finished");
    Ok(())
}

async fn submit<const N: usize>(
    load: ConfigLoad,
    kind: FormKind,
    fields: [(&str, String); N],
) -> anyhow::Result<()> {
    let relays = Relays::from_config(&load.config.relay).context("failed to set up relays")?;
    let now = Instant::now();
    let mut events = EventLoop::from_config(
        &load.config,
        load.catalog,
        Viewport::new(0.0, 1280.0, 800.0),
        now,
    )?;

    let wrap = |msg: FormMessage| match kind {
        FormKind::Newsletter => Message::Contact(msg),
        FormKind::Booking => Message::Booking(msg),
    };
    events.dispatch(PlatformEvent::Ui(wrap(FormMessage::Open)), now);
    for (name, value) in fields {
        events.dispatch(PlatformEvent::Ui(wrap(FormMessage::field(name, value))), now);
    }
    let effects = events.dispatch(PlatformEvent::Ui(wrap(FormMessage::Submit)), now);
    events.perform(&relays, effects).await;

    let state = events.state();
    let toast = state.toasts.latest().map(|t| t.message.clone()).unwrap_or_default();
    match state.form(kind).state() {
        SubmissionState::Succeeded => {
            info!(form = %kind, "{toast}");
            Ok(())
        }
        SubmissionState::Failed(reason) => anyhow::bail!("{kind} submission failed: {reason}"),
        other => {
            warn!(form = %kind, state = ?other, "{toast}");
            anyhow::bail!("{kind} submission was not sent: {toast}")
        }
    }
}
