//! Todo list in the terminal.
//!
//! Runs the interactive UI by default; `--plain` reads one todo per stdin
//! line and prints the resulting list instead.

use clap::{ArgAction, Parser};
use composable_todo::{FormConfig, new_store, terminal};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Command line options
///
/// Each form setting takes an optional `true`/`false`; a bare flag means
/// `true` and an absent flag keeps the value from the environment.
#[derive(Parser, Debug)]
#[command(name = "todo", version, about = "A todo list: a form to add items and a list to show them")]
struct Cli {
    /// Clear the field after each submit
    #[arg(long, value_name = "BOOL", num_args = 0..=1, default_missing_value = "true", action = ArgAction::Set)]
    reset_on_submit: Option<bool>,

    /// Refuse to add empty todos
    #[arg(long, value_name = "BOOL", num_args = 0..=1, default_missing_value = "true", action = ArgAction::Set)]
    reject_empty: Option<bool>,

    /// Echo the field's text beneath the form
    #[arg(long, value_name = "BOOL", num_args = 0..=1, default_missing_value = "true", action = ArgAction::Set)]
    echo_buffer: Option<bool>,

    /// Shorthand for `--echo-buffer=false`
    #[arg(long, conflicts_with = "echo_buffer")]
    no_echo: bool,

    /// Read todos from stdin, one per line, and print the list
    #[arg(long)]
    plain: bool,

    /// Log filter (overrides RUST_LOG)
    #[arg(long, value_name = "FILTER")]
    log_level: Option<String>,
}

impl Cli {
    /// Apply flags on top of the environment configuration
    fn apply(&self, mut config: FormConfig) -> FormConfig {
        if let Some(reset) = self.reset_on_submit {
            config.reset_on_submit = reset;
        }
        if let Some(reject) = self.reject_empty {
            config.reject_empty = reject;
        }
        if let Some(echo) = self.echo_buffer {
            config.echo_buffer = echo;
        }
        if self.no_echo {
            config.echo_buffer = false;
        }
        config
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr so they never mix with the UI or the printed list
    let filter = match &cli.log_level {
        Some(level) => tracing_subscriber::EnvFilter::try_new(level)?,
        None => tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| "warn".into()),
    };
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = cli.apply(FormConfig::from_env()?);
    tracing::debug!(?config, plain = cli.plain, "Starting");

    let store = new_store();

    if cli.plain {
        let stdin = tokio::io::BufReader::new(tokio::io::stdin());
        terminal::run_plain(store.clone(), config, stdin, &mut std::io::stdout()).await?;
    } else {
        terminal::run(store.clone(), config).await?;
    }

    let timeout = store.config().default_shutdown_timeout;
    store.shutdown(timeout).await?;

    Ok(())
}
