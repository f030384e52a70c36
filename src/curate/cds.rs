//! CDS extraction from aligned rows.
//!
//! Each gene boundary is mapped to its alignment-column span, the query row
//! is sliced over that span, and every gap byte is dropped: columns gapped in
//! both rows are alignment artifacts, columns gapped only in the query are
//! genuine deletions, and neither belongs in an ungapped coding sequence.
//! Reverse-strand genes are emitted reverse-complemented.

use crate::core::coords::CoordinateMap;
use crate::core::regions::{GeneBoundary, Strand};
use crate::core::types::{SeqRecord, CDS_SEPARATOR, GAP};
use crate::error::CurateError;

/// One extracted coding sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedCds {
    /// Identifier of the genome the sequence came from.
    pub genome: String,
    /// Gene name from the boundary table.
    pub gene: String,
    /// Ungapped coding sequence, reverse-complemented for reverse-strand
    /// genes.
    pub seq: Vec<u8>,
}

/// Extract every gene in table order from one aligned row.
///
/// # Errors
///
/// `CoordinateOutOfRange` if a boundary does not map into the reference seen
/// by this alignment, `GeneBoundaryOutOfRange` if its mapped columns exceed
/// the row length.
pub fn extract(
    genome: &str,
    query_row: &[u8],
    map: &CoordinateMap,
    gene_boundaries: &[GeneBoundary],
) -> Result<Vec<ExtractedCds>, CurateError> {
    let mut extracted = Vec::with_capacity(gene_boundaries.len());

    for gene in gene_boundaries {
        let start_column = map.ref_to_column(gene.start)?;
        let end_column = map.ref_to_column(gene.end)?;

        if end_column >= query_row.len() {
            return Err(CurateError::GeneBoundaryOutOfRange {
                name: gene.name.clone(),
                start_column,
                end_column,
                columns: query_row.len(),
            });
        }

        let mut seq: Vec<u8> = query_row[start_column..=end_column]
            .iter()
            .copied()
            .filter(|&b| b != GAP)
            .collect();

        if gene.strand == Strand::Reverse {
            seq = reverse_complement(&seq);
        }

        extracted.push(ExtractedCds {
            genome: genome.to_string(),
            gene: gene.name.clone(),
            seq,
        });
    }

    Ok(extracted)
}

/// Join one genome's extracted sequences with the fixed `NNN` separator,
/// preserving gene-table order.
#[must_use]
pub fn concatenate(genome: &str, extracted: &[ExtractedCds]) -> SeqRecord {
    let mut seq = Vec::new();
    for (i, cds) in extracted.iter().enumerate() {
        if i > 0 {
            seq.extend_from_slice(CDS_SEPARATOR);
        }
        seq.extend_from_slice(&cds.seq);
    }
    SeqRecord::new(genome, seq)
}

/// One record per gene; the gene name joins the genome id with spaces
/// flattened so the FASTA identifier stays whitespace-free.
#[must_use]
pub fn into_records(extracted: Vec<ExtractedCds>) -> Vec<SeqRecord> {
    extracted
        .into_iter()
        .map(|cds| {
            let gene = cds.gene.replace(' ', "_");
            SeqRecord::new(format!("{}|{}", cds.genome, gene), cds.seq)
        })
        .collect()
}

/// Reverse complement with IUPAC ambiguity codes, case preserved. Bytes
/// outside the alphabet come back as `N`.
#[must_use]
pub fn reverse_complement(seq: &[u8]) -> Vec<u8> {
    seq.iter().rev().map(|&b| complement(b)).collect()
}

fn complement(base: u8) -> u8 {
    match base {
        b'A' => b'T',
        b'T' => b'A',
        b'G' => b'C',
        b'C' => b'G',
        b'U' => b'A',
        b'R' => b'Y',
        b'Y' => b'R',
        b'S' => b'S',
        b'W' => b'W',
        b'K' => b'M',
        b'M' => b'K',
        b'B' => b'V',
        b'V' => b'B',
        b'D' => b'H',
        b'H' => b'D',
        b'N' => b'N',
        b'a' => b't',
        b't' => b'a',
        b'g' => b'c',
        b'c' => b'g',
        b'u' => b'a',
        b'r' => b'y',
        b'y' => b'r',
        b's' => b's',
        b'w' => b'w',
        b'k' => b'm',
        b'm' => b'k',
        b'b' => b'v',
        b'v' => b'b',
        b'd' => b'h',
        b'h' => b'd',
        b'n' => b'n',
        _ => b'N',
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::coords::CoordinateMap;

    fn map_for(reference: &[u8], query: &[u8]) -> CoordinateMap {
        CoordinateMap::build(reference, query).unwrap()
    }

    #[test]
    fn test_forward_gene_on_identical_query() {
        // Gene [10,19] on a query with no indels returns exactly those bases.
        let reference = b"AAAAAAAAACGTACGTACGTTTTT";
        let map = map_for(reference, reference);
        let genes = vec![GeneBoundary::new("gene CDS", 10, 19, Strand::Forward)];

        let extracted = extract("q", reference, &map, &genes).unwrap();

        assert_eq!(extracted.len(), 1);
        assert_eq!(extracted[0].seq, b"CGTACGTACG");
    }

    #[test]
    fn test_reverse_gene_is_reverse_complemented() {
        let reference = b"AAAAAAAAACGGACGTACGTTTTT";
        let map = map_for(reference, reference);
        let genes = vec![GeneBoundary::new("gene CDS", 10, 13, Strand::Reverse)];

        // Positions 10..=13 are CGGA; reverse complement is TCCG.
        let extracted = extract("q", reference, &map, &genes).unwrap();

        assert_eq!(extracted[0].seq, b"TCCG");
    }

    #[test]
    fn test_gaps_are_dropped_from_cds() {
        // Column 4 is gapped in both rows (artifact), column 6 only in the
        // query (deletion); neither survives extraction.
        let reference = b"ACGT-ACGTA";
        let query = b"ACGTTA-GTA";
        let map = map_for(reference, query);
        let genes = vec![GeneBoundary::new("gene CDS", 1, 9, Strand::Forward)];

        let extracted = extract("q", query, &map, &genes).unwrap();

        assert_eq!(extracted[0].seq, b"ACGTTAGTA");
    }

    #[test]
    fn test_extraction_preserves_table_order() {
        let reference = b"ACGTACGTAC";
        let map = map_for(reference, reference);
        let genes = vec![
            GeneBoundary::new("late gene CDS", 7, 9, Strand::Forward),
            GeneBoundary::new("early gene CDS", 1, 3, Strand::Forward),
        ];

        let extracted = extract("q", reference, &map, &genes).unwrap();

        assert_eq!(extracted[0].gene, "late gene CDS");
        assert_eq!(extracted[1].gene, "early gene CDS");
    }

    #[test]
    fn test_concatenate_joins_with_separator() {
        let extracted = vec![
            ExtractedCds {
                genome: "q".to_string(),
                gene: "one CDS".to_string(),
                seq: b"ACGT".to_vec(),
            },
            ExtractedCds {
                genome: "q".to_string(),
                gene: "two CDS".to_string(),
                seq: b"GGCC".to_vec(),
            },
        ];

        let record = concatenate("q", &extracted);

        assert_eq!(record.id, "q");
        assert_eq!(record.seq, b"ACGTNNNGGCC");
    }

    #[test]
    fn test_separate_records_embed_gene_name() {
        let extracted = vec![ExtractedCds {
            genome: "q".to_string(),
            gene: "ankyrin protein CDS".to_string(),
            seq: b"ACGT".to_vec(),
        }];

        let records = into_records(extracted);

        assert_eq!(records[0].id, "q|ankyrin_protein_CDS");
        assert_eq!(records[0].seq, b"ACGT");
    }

    #[test]
    fn test_gene_beyond_alignment_reference_is_out_of_range() {
        let reference = b"ACGT";
        let map = map_for(reference, reference);
        let genes = vec![GeneBoundary::new("gene CDS", 2, 9, Strand::Forward)];

        let err = extract("q", reference, &map, &genes).unwrap_err();
        assert!(matches!(err, CurateError::CoordinateOutOfRange { .. }));
    }

    #[test]
    fn test_gene_mapped_past_row_end_is_boundary_error() {
        // A row shorter than the map's column space cannot hold the span.
        let reference = b"ACGTACGTAC";
        let map = map_for(reference, reference);
        let genes = vec![GeneBoundary::new("gene CDS", 2, 9, Strand::Forward)];

        let err = extract("q", b"ACGT", &map, &genes).unwrap_err();
        assert!(matches!(
            err,
            CurateError::GeneBoundaryOutOfRange { columns: 4, .. }
        ));
    }

    #[test]
    fn test_reverse_complement_iupac() {
        assert_eq!(reverse_complement(b"ACGT"), b"ACGT");
        assert_eq!(reverse_complement(b"AACG"), b"CGTT");
        assert_eq!(reverse_complement(b"RYKM"), b"KMRY");
        assert_eq!(reverse_complement(b"acgtn"), b"nacgt");
    }
}
