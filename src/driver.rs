//! Batch driver: walks the input directory, dispatches each file to the
//! reader matching its extension and writes the normalized edge list to the
//! output directory. A failed file is logged and skipped, never fatal.

use std::{
    fs::{self, File},
    io::{BufReader, BufWriter},
    path::{Path, PathBuf},
};

use anyhow::Context;
use tracing::{debug, info, warn};
use walkdir::WalkDir;

use crate::{
    error::ConvertError,
    io::{classify, dimacs, edge_list, matrix_market, FormatKind},
};

pub struct Config {
    pub input_root: PathBuf,
    pub output_root: PathBuf,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct BatchSummary {
    pub converted: usize,
    pub failed: usize,
}

/// Converts every recognized file under `input_root`. Returns `Err` only
/// for fatal environment failures (output directory cannot be created);
/// per-file errors are counted in the summary instead.
pub fn run(config: &Config) -> anyhow::Result<BatchSummary> {
    fs::create_dir_all(&config.output_root).with_context(|| {
        format!(
            "cannot create output directory {}",
            config.output_root.display()
        )
    })?;

    let mut summary = BatchSummary::default();

    for entry in WalkDir::new(&config.input_root).sort_by_file_name() {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) => {
                warn!("skipping unreadable entry: {err}");
                summary.failed += 1;
                continue;
            }
        };
        if !entry.file_type().is_file() {
            continue;
        }

        let Some(kind) = classify(entry.path()) else {
            continue;
        };

        let output_path = output_path_for(entry.path(), &config.output_root);
        info!(
            "Converting {} -> {}",
            entry.path().display(),
            output_path.display()
        );

        match convert_file(entry.path(), kind, &output_path) {
            Ok(()) => summary.converted += 1,
            Err(err) => {
                warn!("Error processing {}: {err}", entry.path().display());
                summary.failed += 1;
            }
        }
    }

    Ok(summary)
}

fn output_path_for(input: &Path, output_root: &Path) -> PathBuf {
    // classify() only accepts files with an extension, so a stem exists
    let stem = input.file_stem().unwrap_or_default();
    output_root.join(stem).with_extension("txt")
}

/// Reads, normalizes and writes one file. The output file is only created
/// after the input parsed completely, so a rejected input leaves nothing
/// behind.
fn convert_file(input: &Path, kind: FormatKind, output: &Path) -> Result<(), ConvertError> {
    let reader = BufReader::new(File::open(input)?);

    let raw = match kind {
        FormatKind::MatrixMarket => matrix_market::read_matrix_market(reader)?,
        FormatKind::Dimacs => {
            let (raw, header) = dimacs::read_dimacs(reader)?;
            debug!(?header, "discarding declared DIMACS counts");
            raw
        }
    };

    let graph = raw.normalize();

    let mut writer = BufWriter::new(File::create(output)?);
    match kind {
        FormatKind::MatrixMarket => edge_list::write_plain(&graph, &mut writer),
        FormatKind::Dimacs => edge_list::write_with_header(&graph, &mut writer),
    }
}
