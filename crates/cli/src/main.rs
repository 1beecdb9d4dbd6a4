// CLI modules
mod cli;
mod state;

use clap::{Parser, Subcommand};
use cli::{args::Args, op::Op, Category, Generate, Init, Search, Site};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

command_enum! {
    (Category, Category),
    (Generate, Generate),
    (Init, Init),
    (Search, Search),
    (Site, Site),
}

#[tokio::main]
async fn main() {
    let args = Args::parse();

    // Logs go to stderr so command output stays pipeable.
    let (non_blocking_writer, guard) = tracing_appender::non_blocking(std::io::stderr());
    let log_level: tracing::Level = args.log_level.parse().unwrap_or(tracing::Level::WARN);
    let env_filter = EnvFilter::builder()
        .with_default_directive(log_level.into())
        .from_env_lossy();

    let stderr_layer = tracing_subscriber::fmt::layer()
        .compact()
        .with_writer(non_blocking_writer)
        .with_filter(env_filter);

    tracing_subscriber::registry().with(stderr_layer).init();

    // Resolve remote URL: explicit flag > config remote > hardcoded default
    let remote = cli::op::resolve_remote(args.remote, args.config_path.clone());

    let exit_code = match cli::op::OpContext::new(remote, args.config_path, args.yes) {
        Ok(ctx) => match args.command.execute(&ctx).await {
            Ok(output) => {
                println!("{}", output);
                0
            }
            Err(e) => {
                eprintln!("Error: {}", e);
                1
            }
        },
        Err(e) => {
            eprintln!("Error: Failed to create API client: {}", e);
            1
        }
    };

    // process::exit skips destructors; drop the guard first so buffered
    // log lines flush.
    drop(guard);
    std::process::exit(exit_code);
}
