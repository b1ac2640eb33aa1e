use std::io::Write;

use anyhow::Result;
use cadence_app::commands;
use cadence_app::context::Context;
use cadence_core::config::load_config;
use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, reload, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "cadence")]
#[command(about = "Describe, expand and convert calendar recurrence rules")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// A rule as `DTSTART:…\nRRULE:…` text (literal `\n` allowed).
#[derive(Args)]
struct RuleArgs {
    rule: String,

    /// Start date used when the rule has no DTSTART line (YYYY-MM-DD)
    #[arg(long)]
    start: Option<NaiveDate>,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the rule in English
    Describe {
        #[command(flatten)]
        rule: RuleArgs,

        /// Days between the rule's dates and the event's local dates
        #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
        offset: i32,

        /// Length of each occurrence in days
        #[arg(long, default_value_t = 1)]
        days: u32,
    },
    /// List occurrence dates
    Occurrences {
        #[command(flatten)]
        rule: RuleArgs,

        /// First date to consider (YYYY-MM-DD, defaults to the start date)
        #[arg(long)]
        from: Option<NaiveDate>,

        /// Last date to consider (YYYY-MM-DD)
        #[arg(long)]
        to: Option<NaiveDate>,

        /// Leave out dates equal to --from or --to
        #[arg(long)]
        exclusive: bool,

        /// Maximum number of dates to print
        #[arg(long)]
        limit: Option<usize>,
    },
    /// Print the rule as a wizard JSON array
    Wizard {
        #[command(flatten)]
        rule: RuleArgs,
    },
    /// Read a wizard JSON array and print the rule
    FromWizard { json: String },
    /// List dates that can be overridden around a day
    Overrides {
        #[command(flatten)]
        rule: RuleArgs,

        /// Day the window is centred on (YYYY-MM-DD, defaults to today)
        #[arg(long)]
        today: Option<NaiveDate>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let (filter_layer, filter_handle) = reload::Layer::new(EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(true)
                .with_thread_ids(true)
                .with_file(true)
                .with_line_number(true),
        )
        .init();

    let config = load_config()?;

    tracing::debug!(config = ?config, "Configuration loaded");

    if let Ok(filter) = EnvFilter::try_new(config.logging.level.as_str()) {
        if let Err(e) = filter_handle.modify(|current| *current = filter) {
            tracing::warn!(error = %e, "Failed to update log filter from config");
        }
    } else {
        tracing::warn!(level = %config.logging.level, "Invalid log level in config, keeping warn");
    }

    let context = Context::from_settings(&config)?;
    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Commands::Describe { rule, offset, days } => {
            let rule = context.parse_rule(&rule.rule, rule.start)?;
            commands::describe::run(&rule, offset, days, &mut out)?;
        }
        Commands::Occurrences {
            rule,
            from,
            to,
            exclusive,
            limit,
        } => {
            let rule = context.parse_rule(&rule.rule, rule.start)?;
            commands::occurrences::run(&rule, from, to, exclusive, limit, &mut out)?;
        }
        Commands::Wizard { rule } => {
            let rule = context.parse_rule(&rule.rule, rule.start)?;
            commands::wizard::encode(&rule, &mut out)?;
        }
        Commands::FromWizard { json } => {
            commands::wizard::decode(&context, &json, &mut out)?;
        }
        Commands::Overrides { rule, today } => {
            let rule = context.parse_rule(&rule.rule, rule.start)?;
            let today = today.unwrap_or_else(|| chrono::Local::now().date_naive());
            commands::overrides::run(&context, &rule, today, &mut out)?;
        }
    }

    out.flush()?;
    Ok(())
}
