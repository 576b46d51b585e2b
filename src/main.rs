use anyhow::{Context, Result};
use clap::Parser;
use h1b_counting::{generate_reports, report::ZeroTotalPolicy, Config, ErrorPolicy};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Parser)]
#[command(
    author,
    version,
    about = "Top 10 occupations and states by certified visa applications"
)]
struct Args {
    /// `;`-delimited input, first line is the header
    input: PathBuf,
    /// Output path of the occupations report
    occupations_out: PathBuf,
    /// Output path of the states report
    states_out: PathBuf,

    /// YAML config file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Fail on missing columns, short records and unwritable outputs
    #[arg(long)]
    strict: bool,

    /// Percentages against a zero total (reject/zero)
    #[arg(long)]
    zero_total: Option<ZeroTotalPolicy>,
}

fn main() -> Result<()> {
    let env = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt::Subscriber::builder()
        .with_env_filter(env)
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let mut config = Config::load(args.config.as_deref()).context("loading config")?;
    if args.strict {
        config.on_error = ErrorPolicy::Strict;
    }
    if let Some(policy) = args.zero_total {
        config.zero_total = policy;
    }

    let summary = generate_reports(&config, &args.input, &args.occupations_out, &args.states_out)
        .with_context(|| format!("generating reports from {}", args.input.display()))?;

    info!(
        records = summary.total_records,
        certified = summary.certified,
        "done"
    );
    Ok(())
}
