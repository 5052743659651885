use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

pub fn cram_home() -> Result<PathBuf> {
    let home = std::env::var("HOME").context("HOME is not set")?;
    Ok(PathBuf::from(home).join(".cram"))
}

pub fn ensure_cram_home() -> Result<PathBuf> {
    let dir = cram_home()?;
    fs::create_dir_all(&dir).with_context(|| format!("create {}", dir.display()))?;
    Ok(dir)
}

pub fn read_request(path: &Path) -> Result<String> {
    fs::read_to_string(path).with_context(|| format!("read {}", path.display()))
}
