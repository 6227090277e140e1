//! dmprune - distance matrix pruning CLI
//!
//! Removes samples with missing pairwise distances from a .dst file,
//! parsimoniously, so downstream clustering and phylogenetics tools get a
//! complete matrix.

use clap::Parser;
use distmat_prune::data::DistMatrix;
use distmat_prune::error::Result;
use distmat_prune::filter::{eliminate_missing, DEFAULT_NA_TOKEN};
use distmat_prune::profile::profile_missingness;
use std::path::PathBuf;

/// Parsimoniously remove samples with missing data from a distance matrix
#[derive(Parser)]
#[command(name = "dmprune")]
#[command(author, version, about, long_about = None)]
#[command(disable_version_flag = true)]
struct Cli {
    /// Path to input tab-delimited distance matrix (usually .dst) file
    dst: PathBuf,

    /// Output path and name; overwritten if it already exists
    #[arg(short, long, default_value = "filtered_dist_mat.dst")]
    out: PathBuf,

    /// String that represents missing data in the input distance matrix
    /// (default is the fixed-width token written by nei_vcf)
    #[arg(short = 'n', long = "na_value", default_value = DEFAULT_NA_TOKEN)]
    na_value: String,

    /// Write a JSON elimination report (removal log + summary) to this path
    #[arg(short = 'r', long)]
    report: Option<PathBuf>,

    /// Print version and exit
    #[arg(short = 'v', long = "version", action = clap::ArgAction::Version)]
    version: Option<bool>,
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(&cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<()> {
    eprintln!("Loading {}...", cli.dst.display());
    let mut matrix = DistMatrix::from_dst(&cli.dst)?;
    eprintln!("Loaded {} samples", matrix.n_samples());
    eprintln!();

    let profile = profile_missingness(&matrix, &cli.na_value);
    eprint!("{}", profile);
    eprintln!();

    let summary = eliminate_missing(&mut matrix, &cli.na_value)?;
    for removal in &summary.removals {
        eprintln!(
            "Removed sample {} ('{}') with {} missing entries",
            removal.sample_index, removal.label, removal.n_missing
        );
    }
    eprintln!();
    eprint!("{}", summary);

    matrix.to_dst(&cli.out)?;
    eprintln!("Filtered matrix written to {}", cli.out.display());

    if let Some(report_path) = &cli.report {
        let json = serde_json::to_string_pretty(&summary)?;
        std::fs::write(report_path, json)?;
        eprintln!("Elimination report written to {}", report_path.display());
    }

    Ok(())
}
