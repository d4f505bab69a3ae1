use {
    clap::{Parser, Subcommand},
    tracing::info,
    tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt},
};

use devdict_lookup::{LookupPipeline, format_reply, normalize};

#[derive(Parser)]
#[command(name = "devdict", about = "devdict — term-lookup bot")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Log level (trace, debug, info, warn, error).
    #[arg(long, global = true, default_value = "info")]
    log_level: String,

    /// Output logs as JSON instead of human-readable.
    #[arg(long, global = true, default_value_t = false)]
    json_logs: bool,

    // Gateway arguments (used when no subcommand is provided, or with `gateway`)
    /// Address to bind to (overrides config value).
    #[arg(long, global = true)]
    bind: Option<String>,
    /// Port to listen on (overrides config value).
    #[arg(long, global = true)]
    port: Option<u16>,
    /// Explicit config file (overrides discovery).
    #[arg(long, global = true, env = "DEVDICT_CONFIG")]
    config: Option<std::path::PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the gateway server (default when no subcommand is provided).
    Gateway,
    /// Look a term up once and print the reply.
    Lookup {
        /// Raw question or bare term, e.g. "what is REST API?".
        #[arg(short, long)]
        message: String,
    },
}

/// Initialise tracing from `RUST_LOG` or the `--log-level` flag.
fn init_telemetry(cli: &Cli) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&cli.log_level));

    let registry = tracing_subscriber::registry().with(filter);

    if cli.json_logs {
        registry
            .with(fmt::layer().json().with_target(true).with_thread_ids(false))
            .init();
    } else {
        registry
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_thread_ids(false)
                    .with_ansi(true),
            )
            .init();
    }
}

fn load_config(cli: &Cli) -> devdict_config::DevdictConfig {
    let mut config = match cli.config {
        Some(ref path) => devdict_config::load_config(path).unwrap_or_else(|e| {
            tracing::warn!(path = %path.display(), error = %e, "failed to load config, using defaults");
            devdict_config::DevdictConfig::default()
        }),
        None => devdict_config::discover_and_load(),
    };

    if let Some(ref bind) = cli.bind {
        config.server.bind = bind.clone();
    }
    if let Some(port) = cli.port {
        config.server.port = port;
    }
    config
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let mut cli = Cli::parse();

    init_telemetry(&cli);
    info!(version = env!("CARGO_PKG_VERSION"), "devdict starting");

    match cli.command.take() {
        // Default: start the gateway when no subcommand is provided.
        None | Some(Commands::Gateway) => {
            let config = load_config(&cli);
            devdict_gateway::start_gateway(&config).await
        },
        Some(Commands::Lookup { message }) => {
            let pipeline = LookupPipeline::with_default_providers();
            let term = normalize(&message);
            let outcome = pipeline.lookup(&term).await;
            println!("{}", format_reply(&outcome, &term));
            Ok(())
        },
    }
}
