use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use sizely_cli::app::{App, PayloadSource};
use sizely_cli::config::SizelyConfig;
use sizely_cli::logging::init_logging;
use sizely_cli::render::{OutputFormat, tier_legend};
use sizely_core::AppInfo;

/// Sprint capacity calculator for T-shirt size estimates.
#[derive(Debug, Parser)]
#[command(
    name = "sizely",
    author,
    version,
    about = "Convert between T-shirt size task counts and sprint points",
    after_help = tier_legend()
)]
struct Cli {
    /// Path to a YAML configuration file (defaults to ./sizely.yaml when present).
    #[arg(short, long, value_name = "FILE", global = true)]
    config: Option<PathBuf>,

    /// Increase log verbosity (-v debug, -vv trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Calculate total points from task counts per size.
    Estimate {
        #[command(flatten)]
        payload: PayloadArgs,

        /// Output format (overrides config).
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,
    },
    /// Find every task combination that adds up to POINTS.
    #[command(allow_negative_numbers = true)]
    Breakdown {
        /// Target point total.
        #[arg(value_name = "POINTS")]
        points: i64,

        /// Maximum total tasks per combination (default 15, or from config).
        #[arg(short, long, value_name = "MAX_TASKS")]
        max: Option<i64>,

        /// Output format (overrides config).
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,

        /// Hide recommendations and per-combination advice.
        #[arg(long)]
        no_advice: bool,
    },
}

#[derive(Debug, Args)]
#[group(required = true, multiple = false)]
struct PayloadArgs {
    /// JSON or YAML file containing task counts (YAML for .yaml/.yml).
    #[arg(short, long, value_name = "FILE")]
    input: Option<PathBuf>,

    /// Inline JSON, e.g. '{"xs":3,"s":2,"m":1,"l":1}'.
    #[arg(long, value_name = "JSON")]
    json: Option<String>,

    /// Inline YAML, e.g. 'xs: 3'.
    #[arg(long, value_name = "YAML")]
    yaml: Option<String>,
}

impl PayloadArgs {
    fn into_source(self) -> Option<PayloadSource> {
        self.input
            .map(PayloadSource::File)
            .or(self.json.map(PayloadSource::Json))
            .or(self.yaml.map(PayloadSource::Yaml))
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let cwd = std::env::current_dir()?;
    let config = SizelyConfig::discover(cli.config.as_deref(), &cwd)?;
    let _logging_guard = init_logging(&config.logging, cli.verbose)?;
    tracing::debug!(name = AppInfo::name(), version = AppInfo::version(), "starting");

    let app = App::new(config);
    let output = match cli.command {
        Command::Estimate { payload, format } => {
            let source = payload
                .into_source()
                .ok_or_else(|| anyhow::anyhow!("estimate requires one of --input, --json or --yaml"))?;
            app.estimate(&source, format)?
        }
        Command::Breakdown {
            points,
            max,
            format,
            no_advice,
        } => app.breakdown(points, max, format, !no_advice)?,
    };

    print!("{output}");
    Ok(())
}
