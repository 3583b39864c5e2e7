use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};
use flate2::read::GzDecoder;

/// Load a GPML document, decompressing `.gpmlz` (gzip) files
pub fn load_gpml_file(path: &Path) -> Result<String> {
    if path.extension().and_then(|s| s.to_str()) == Some("gpmlz") {
        let file = std::fs::File::open(path)
            .with_context(|| format!("Failed to open compressed file: {:?}", path))?;

        let mut content = String::new();
        GzDecoder::new(file)
            .read_to_string(&mut content)
            .with_context(|| format!("Failed to decompress file: {:?}", path))?;

        Ok(content)
    } else {
        load_text_file(path)
    }
}

/// Read a plain text input (GPML, TOML rotations, JSON records)
pub fn load_text_file(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).with_context(|| format!("Failed to read file: {:?}", path))
}
