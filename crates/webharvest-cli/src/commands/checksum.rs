use std::path::Path;

use anyhow::Result;
use webharvest::compute_checksum;

pub fn execute(path: &Path) -> Result<()> {
    let digest = compute_checksum(path)?;
    println!("{digest}  {}", path.display());
    Ok(())
}
