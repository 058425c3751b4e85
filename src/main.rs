use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use serde::Serialize;
use tracing::{debug, info};

use sakoe_dtw::{ChannelLayout, Remainder};
use sakoe_io::{CorpusReader, ExperimentName, ReportWriter, RunSummary};
use sakoe_knn::{Dimensionality, NearestNeighborConfig};

#[derive(Parser)]
#[command(name = "sakoe")]
#[command(about = "1-nearest-neighbor time series classification under banded DTW")]
#[command(version)]
struct Cli {
    /// Training corpus: one `<label> <v1> ... <vk>` series per line
    training: PathBuf,

    /// Test corpus, same format as the training corpus
    test: PathBuf,

    /// Sakoe-Chiba band as a fraction of the shorter series (1 = unconstrained)
    #[arg(long = "sakoe-chiba", default_value_t = 1.0)]
    sakoe_chiba: f64,

    /// Group values into channel tuples and average per-channel distances
    #[arg(long, default_value_t = false)]
    multivariate: bool,

    /// Values per tuple in multivariate mode
    #[arg(long, default_value_t = sakoe_dtw::DEFAULT_CHANNELS, requires = "multivariate")]
    channels: usize,

    /// Drop a trailing partial tuple instead of rejecting the line
    #[arg(long, default_value_t = false, requires = "multivariate")]
    truncate_partial: bool,

    /// Compute every training distance in full
    #[arg(long, default_value_t = false)]
    no_early_abandon: bool,

    /// Experiment name for the JSON report (must match [a-zA-Z0-9_-]+)
    #[arg(long)]
    experiment: Option<String>,

    /// Output directory for the JSON report
    #[arg(long, default_value = ".", requires = "experiment")]
    output_dir: PathBuf,

    /// Print a JSON summary instead of the bare accuracy
    #[arg(long, default_value_t = false)]
    json: bool,

    /// Enable verbose (debug-level) logging
    #[arg(long)]
    verbose: bool,

    /// Suppress all output except errors
    #[arg(long)]
    quiet: bool,

    /// Number of threads for parallel computation (defaults to all cores)
    #[arg(long)]
    threads: Option<usize>,
}

#[derive(Serialize)]
struct RunOutput {
    accuracy: f64,
    n_correct: usize,
    n_test: usize,
    n_training: usize,
    bandwidth: f64,
    dimensionality: &'static str,
    report: Option<PathBuf>,
}

impl Cli {
    fn dimensionality(&self) -> Result<Dimensionality> {
        if !self.multivariate {
            return Ok(Dimensionality::Univariate);
        }
        let remainder = if self.truncate_partial {
            Remainder::Truncate
        } else {
            Remainder::Reject
        };
        let layout = ChannelLayout::new(self.channels)
            .context("invalid --channels")?
            .with_remainder(remainder);
        Ok(Dimensionality::Multivariate(layout))
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = match (cli.verbose, cli.quiet) {
        (true, _) => "debug",
        (_, true) => "error",
        _ => "info",
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    if let Some(threads) = cli.threads {
        rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .build_global()
            .context("failed to configure thread pool")?;
        info!(threads, "thread pool configured");
    }

    // Validate cheap options before touching the filesystem.
    let dimensionality = cli.dimensionality()?;
    let config = NearestNeighborConfig::new(cli.sakoe_chiba)
        .context("invalid --sakoe-chiba")?
        .with_dimensionality(dimensionality)
        .with_early_abandon(!cli.no_early_abandon);
    let experiment = cli
        .experiment
        .clone()
        .map(ExperimentName::new)
        .transpose()
        .context("invalid --experiment")?;

    let training = CorpusReader::new(&cli.training)
        .with_dimensionality(dimensionality)
        .read()
        .with_context(|| format!("failed to load training corpus {}", cli.training.display()))?;
    let test = CorpusReader::new(&cli.test)
        .with_dimensionality(dimensionality)
        .read()
        .with_context(|| format!("failed to load test corpus {}", cli.test.display()))?;
    debug!(classes = ?training.class_counts(), "training class counts");

    let evaluation = config
        .evaluate(&training.series, &test.series)
        .context("classification failed")?;

    let confusion = evaluation
        .confusion_matrix()
        .context("failed to tabulate predictions")?;
    info!("confusion matrix (rows = truth, columns = predicted)\n{confusion}");

    let report = match experiment {
        Some(experiment) => {
            let writer = ReportWriter::new(&cli.output_dir, experiment)
                .context("failed to prepare output directory")?;
            let run = RunSummary {
                training_path: cli.training.clone(),
                test_path: cli.test.clone(),
                bandwidth: config.bandwidth().value(),
                dimensionality,
                early_abandon: !cli.no_early_abandon,
            };
            Some(
                writer
                    .write_evaluation(&evaluation, &run)
                    .context("failed to write evaluation report")?,
            )
        }
        None => None,
    };

    if cli.json {
        let output = RunOutput {
            accuracy: evaluation.accuracy(),
            n_correct: evaluation.n_correct,
            n_test: evaluation.n_test(),
            n_training: evaluation.n_training,
            bandwidth: config.bandwidth().value(),
            dimensionality: dimensionality.name(),
            report,
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        println!("{}", evaluation.accuracy());
    }

    Ok(())
}
