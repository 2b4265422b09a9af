use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

pub fn ensure_directory_exists(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {:?}", parent))?;
    }
    Ok(())
}

pub fn read_rom(path: &Path) -> Result<Vec<u8>> {
    fs::read(path).with_context(|| format!("Failed to read ROM file: {:?}", path))
}

pub fn write_rom(path: &Path, bytes: &[u8]) -> Result<()> {
    ensure_directory_exists(path)?;
    fs::write(path, bytes).with_context(|| format!("Failed to write ROM file: {:?}", path))
}

pub fn read_diff_file(path: &Path) -> Result<String> {
    fs::read_to_string(path).with_context(|| format!("Failed to read diff file: {:?}", path))
}
