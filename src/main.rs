use std::io::Read;
use std::path::PathBuf;
use std::sync::Arc;

use clap::{Parser, Subcommand};

use visio_health::clock::SystemClock;
use visio_health::config::{self, AppState, Config};
use visio_health::{logger, server};

#[derive(Parser)]
#[command(name = "visio-health", version, about = "Visio-conference health endpoint")]
struct Cli {
    /// Configuration file, extension optional
    #[arg(long, short, default_value = config::DEFAULT_CONFIG_PATH)]
    config: String,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Serve the endpoints over HTTP (default)
    Serve,
    /// Run one invocation from a platform event and print the response
    Invoke {
        /// Event JSON file; stdin when omitted or `-`
        #[arg(long, short)]
        event: Option<PathBuf>,
        /// Override the configured function identifier
        #[arg(long)]
        function_arn: Option<String>,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let cfg = Config::load_from(&cli.config)?;

    match cli.command.unwrap_or(Command::Serve) {
        Command::Serve => serve(cfg),
        Command::Invoke {
            event,
            function_arn,
        } => invoke(&cfg, event, function_arn),
    }
}

fn serve(cfg: Config) -> Result<(), Box<dyn std::error::Error>> {
    logger::init(&cfg)?;

    // Worker thread count follows the configuration, CPU cores otherwise
    let mut runtime_builder = tokio::runtime::Builder::new_multi_thread();
    runtime_builder.enable_all();
    if let Some(workers) = cfg.server.workers {
        runtime_builder.worker_threads(workers);
    }
    let runtime = runtime_builder.build()?;

    runtime.block_on(async_serve(cfg))
}

async fn async_serve(cfg: Config) -> Result<(), Box<dyn std::error::Error>> {
    let addr = cfg.get_socket_addr()?;
    let listener = server::create_listener(addr)?;
    let state = Arc::new(AppState::new(&cfg));

    let shutdown = server::ShutdownSignal::new();
    server::signal::start_signal_handler(shutdown.clone())?;

    logger::log_server_start(&addr, &cfg);
    server::run(listener, state, shutdown).await;
    Ok(())
}

fn invoke(
    cfg: &Config,
    event_path: Option<PathBuf>,
    function_arn: Option<String>,
) -> Result<(), Box<dyn std::error::Error>> {
    let raw = match event_path {
        Some(path) if path.as_os_str() != "-" => std::fs::read_to_string(path)?,
        _ => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };

    let arn = function_arn.unwrap_or_else(|| cfg.function.arn.clone());
    println!("{}", visio_health::invoke_json(&raw, &arn, &SystemClock)?);
    Ok(())
}
