use clap::Parser;
use miette::{IntoDiagnostic, Result};
use smartcalc::application::engine::{Calculator, DEFAULT_DISPLAY_LIMIT};
use smartcalc::interfaces::console::{Shell, ShellConfig};
use std::io;
use tracing::debug;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Number of recent calculations listed by "Show History"
    #[arg(long, default_value_t = DEFAULT_DISPLAY_LIMIT)]
    history_limit: usize,

    /// Do not wait for Enter after each action
    #[arg(long)]
    no_pause: bool,
}

fn main() -> Result<()> {
    // Diagnostics go to stderr so the menu on stdout stays readable.
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::builder()
                .with_default_directive(tracing_subscriber::filter::LevelFilter::WARN.into())
                .from_env_lossy(),
        )
        .init();

    let cli = Cli::parse();

    let calculator = Calculator::new().with_display_limit(cli.history_limit);
    let config = ShellConfig {
        pause: !cli.no_pause,
    };
    debug!(history_limit = cli.history_limit, pause = config.pause, "starting session");

    let stdin = io::stdin();
    let stdout = io::stdout();
    let shell = Shell::new(calculator, stdin.lock(), stdout.lock(), config);
    let calculator = shell.run().into_diagnostic()?;

    debug!(calculations = calculator.history_len(), "session finished");
    Ok(())
}
