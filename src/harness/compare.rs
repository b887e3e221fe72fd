use std::fs::File;
use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};

const CHUNK_SIZE: usize = 64;

/// Byte-for-byte comparison read in fixed-size chunks.
pub fn outputs_identical(golden: &Path, candidate: &Path) -> Result<bool> {
    let mut golden_file =
        File::open(golden).with_context(|| format!("failed to open {}", golden.display()))?;
    let mut candidate_file = File::open(candidate)
        .with_context(|| format!("failed to open {}", candidate.display()))?;

    let mut golden_chunk = [0_u8; CHUNK_SIZE];
    let mut candidate_chunk = [0_u8; CHUNK_SIZE];

    loop {
        let golden_bytes = fill_chunk(&mut golden_file, &mut golden_chunk)
            .with_context(|| format!("failed to read {}", golden.display()))?;
        let candidate_bytes = fill_chunk(&mut candidate_file, &mut candidate_chunk)
            .with_context(|| format!("failed to read {}", candidate.display()))?;

        if golden_bytes != candidate_bytes
            || golden_chunk[..golden_bytes] != candidate_chunk[..candidate_bytes]
        {
            return Ok(false);
        }
        if golden_bytes < CHUNK_SIZE {
            return Ok(true);
        }
    }
}

fn fill_chunk(reader: &mut impl Read, chunk: &mut [u8]) -> std::io::Result<usize> {
    let mut filled = 0;
    while filled < chunk.len() {
        let count = reader.read(&mut chunk[filled..])?;
        if count == 0 {
            break;
        }
        filled += count;
    }
    Ok(filled)
}
