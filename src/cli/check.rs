use std::path::PathBuf;

use clap::Args;
use serde_json::json;

use crate::cli::OutputFormat;
use crate::core::reference::ReferenceModel;

#[derive(Args)]
pub struct CheckArgs {
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
    #[arg(short = 'c', long, default_value = "185579")]
    pub trim_end: usize,
}

/// Execute the check subcommand: load the bundle, report what it holds.
///
/// # Errors
///
/// Returns an error if any piece of the bundle fails validation, with the
/// offending path (and line, for tables).
#[allow(clippy::needless_pass_by_value)] // CLI entry point, values from clap
pub fn run(args: CheckArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    let model = ReferenceModel::load(
        &args.reference,
        &args.mask_table,
        &args.gene_boundaries,
        args.trim_end,
    )?;

    let masked_bases = masked_base_count(&model);

    match format {
        OutputFormat::Text => {
            println!("Reference: {} ({} bp)", model.name(), model.length());
            println!(
                "Mask regions: {} ({} bases under union)",
                model.mask_regions().len(),
                masked_bases
            );
            println!("Genes: {}", model.gene_boundaries().len());
            println!(
                "ITR trim point: {} ({} bases at the tail)",
                model.trim_point(),
                model.length() - model.trim_point() + 1
            );

            if verbose {
                for region in model.mask_regions() {
                    let label = region.label.as_deref().unwrap_or("-");
                    println!("  mask {}..{} {}", region.start, region.end, label);
                }
                for gene in model.gene_boundaries() {
                    println!(
                        "  gene {}..{} {} {} ({} bp)",
                        gene.start,
                        gene.end,
                        gene.strand,
                        gene.name,
                        gene.len()
                    );
                }
            }
        }
        OutputFormat::Json => {
            let output = json!({
                "reference": {
                    "name": model.name(),
                    "length": model.length(),
                },
                "mask_regions": model.mask_regions().len(),
                "masked_bases": masked_bases,
                "genes": model.gene_boundaries().len(),
                "trim_point": model.trim_point(),
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
    }

    Ok(())
}

/// Bases covered by the union of the mask regions.
fn masked_base_count(model: &ReferenceModel) -> usize {
    let mut spans: Vec<(usize, usize)> = model
        .mask_regions()
        .iter()
        .map(|r| (r.start, r.end + 1))
        .collect();
    spans.sort_unstable();

    let mut covered = 0;
    let mut cursor = 0;
    for (start, end) in spans {
        let start = start.max(cursor);
        if end > start {
            covered += end - start;
            cursor = end;
        }
    }
    covered
}
