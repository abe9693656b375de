//! Save and load whole populations as record files
//!
//! Loading is fail-soft per line: a bad record is logged and counted, never
//! fatal. Only I/O errors abort a load.

use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;
use std::rc::Rc;

use crate::core::error::Result;
use crate::entity::NpcRef;
use crate::world::record::{format_record, parse_record};

/// Outcome of loading a record source
#[derive(Debug, Default)]
pub struct LoadReport {
    /// Loaded NPCs, alive, in source order
    pub npcs: Vec<NpcRef>,
    /// Non-blank lines that produced no NPC
    pub skipped: usize,
}

/// Read one NPC per line. Blank lines are ignored and not counted as skipped.
pub fn load_population<R: BufRead>(reader: R) -> Result<LoadReport> {
    let mut report = LoadReport::default();

    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        match parse_record(&line) {
            Ok(npc) => report.npcs.push(Rc::new(npc)),
            Err(e) => {
                tracing::debug!("Skipping line {}: {}", index + 1, e);
                report.skipped += 1;
            }
        }
    }

    Ok(report)
}

pub fn load_file(path: &Path) -> Result<LoadReport> {
    let file = File::open(path)?;
    let report = load_population(BufReader::new(file))?;

    tracing::info!(
        "Loaded {} NPCs from {} ({} lines skipped)",
        report.npcs.len(),
        path.display(),
        report.skipped
    );
    Ok(report)
}

/// Write one record per NPC, dead or alive, in slice order
pub fn save_population<W: Write>(population: &[NpcRef], mut writer: W) -> Result<()> {
    for npc in population {
        writeln!(writer, "{}", format_record(npc))?;
    }
    writer.flush()?;
    Ok(())
}

pub fn save_file(path: &Path, population: &[NpcRef]) -> Result<()> {
    let file = File::create(path)?;
    save_population(population, BufWriter::new(file))?;

    tracing::info!("Saved {} NPCs to {}", population.len(), path.display());
    Ok(())
}
