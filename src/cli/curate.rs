use std::path::{Path, PathBuf};

use clap::Args;

use crate::cli::OutputFormat;
use crate::core::reference::ReferenceModel;
use crate::core::types::{CurateOptions, ItrPolicy};
use crate::curate::engine::{self, BatchSummary};
use crate::output;
use crate::parsing;

/// Default first coordinate of the second ITR (MPXV reference space).
const DEFAULT_TRIM_END: usize = 185_579;

#[derive(Args)]
pub struct CurateArgs {
    /// Gapped multi-FASTA alignment: reference row first, then query rows
    #[arg(required = true)]
    pub alignment: PathBuf,

    /// Reference genome FASTA (exactly one record)
    #[arg(short = 'r', long)]
    pub reference: PathBuf,

    /// CSV of repetitive regions to mask (start,end[,label])
    #[arg(short = 'm', long)]
    pub mask_table: PathBuf,

    /// CSV of CDS spans (Name,Minimum,Maximum,Length,Direction)
    #[arg(short = 'b', long)]
    pub gene_boundaries: PathBuf,

    /// First coordinate of the second ITR (1-based, reference space)
    #[arg(short = 'c', long, default_value_t = DEFAULT_TRIM_END)]
    pub trim_end: usize,

    /// Skip masking of repetitive regions
    #[arg(long)]
    pub no_mask: bool,

    /// Skip masking of the end ITR
    #[arg(long)]
    pub no_itr_mask: bool,

    /// Cut rows at the ITR trim point instead of masking the tail
    #[arg(long, conflicts_with = "no_itr_mask")]
    pub trim_itr: bool,

    /// Extract coding sequences based on the gene-boundary table
    #[arg(long)]
    pub extract_cds: bool,

    /// Concatenate each genome's coding sequences, separated by NNN
    #[arg(long)]
    pub concatenate: bool,

    /// Output alignment path. Default: <alignment>.curated.fasta
    #[arg(short = 'o', long)]
    pub outfile: Option<PathBuf>,

    /// Output CDS path. Default: <alignment>.cds.fasta
    #[arg(long)]
    pub cds_outfile: Option<PathBuf>,

    /// Number of worker threads
    #[arg(short = 't', long, default_value = "1")]
    pub threads: usize,
}

impl CurateArgs {
    fn options(&self) -> CurateOptions {
        let itr_policy = if self.trim_itr {
            ItrPolicy::Trim
        } else if self.no_itr_mask {
            ItrPolicy::Keep
        } else {
            ItrPolicy::Mask
        };

        CurateOptions {
            mask_repeats: !self.no_mask,
            itr_policy,
            extract_cds: self.extract_cds,
            concatenate: self.concatenate,
        }
    }

    fn outfile(&self) -> PathBuf {
        self.outfile
            .clone()
            .unwrap_or_else(|| derived_path(&self.alignment, "curated.fasta"))
    }

    fn cds_outfile(&self) -> PathBuf {
        self.cds_outfile
            .clone()
            .unwrap_or_else(|| derived_path(&self.alignment, "cds.fasta"))
    }
}

/// `<stem>.<suffix>` next to the input.
fn derived_path(input: &Path, suffix: &str) -> PathBuf {
    let stem = input
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("alignment");
    input.with_file_name(format!("{stem}.{suffix}"))
}

/// Execute the curate subcommand.
///
/// # Errors
///
/// Returns an error on batch-fatal conditions: unreadable or invalid
/// reference data, a reference row that does not match the reference, or a
/// failed final write.
#[allow(clippy::needless_pass_by_value)] // CLI entry point, values from clap
pub fn run(args: CurateArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    configure_thread_pool(args.threads);

    let model = ReferenceModel::load(
        &args.reference,
        &args.mask_table,
        &args.gene_boundaries,
        args.trim_end,
    )?;

    if verbose {
        eprintln!(
            "Loaded reference {} ({} bp, {} mask regions, {} genes, ITR from {})",
            model.name(),
            model.length(),
            model.mask_regions().len(),
            model.gene_boundaries().len(),
            model.trim_point(),
        );
    }

    let records = parsing::fasta::read_alignment(&args.alignment)?;
    let options = args.options();

    let batch = engine::curate_batch(&model, &records, &options)?;

    output::write_fasta(&batch.alignment, &args.outfile())?;

    if options.extract_cds {
        output::write_fasta(&batch.cds, &args.cds_outfile())?;
    }

    match format {
        OutputFormat::Text => print_text_summary(&batch.summary, &args.outfile()),
        OutputFormat::Json => print_json_summary(&batch.summary)?,
    }

    Ok(())
}

fn configure_thread_pool(threads: usize) {
    let threads = threads.max(1);
    if let Err(e) = rayon::ThreadPoolBuilder::new()
        .num_threads(threads)
        .build_global()
    {
        tracing::warn!("failed to configure thread pool: {e} (may already be initialized)");
    }
}

fn print_text_summary(summary: &BatchSummary, outfile: &Path) {
    println!(
        "Curated {}/{} rows -> {}",
        summary.curated,
        summary.total,
        outfile.display()
    );

    if !summary.failed.is_empty() {
        println!("\nExcluded rows:");
        for failure in &summary.failed {
            println!("  - {}: {}", failure.id, failure.reason);
        }
    }
}

fn print_json_summary(summary: &BatchSummary) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(summary)?);
    Ok(())
}
