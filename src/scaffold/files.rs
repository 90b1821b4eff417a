use anyhow::{Context, Result};
use std::fs::OpenOptions;
use std::path::{Path, PathBuf};

/// Makes sure `path` exists without touching any content it already has.
pub fn touch(path: &Path) -> Result<()> {
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("Failed to create {}", path.display()))?;
    Ok(())
}

/// Copies the template over the project's `src/main.rs`.
pub fn seed_entry_point(template: &Path, project_dir: &Path) -> Result<PathBuf> {
    let main_rs = project_dir.join("src").join("main.rs");
    std::fs::copy(template, &main_rs).with_context(|| {
        format!(
            "Failed to copy {} to {}",
            template.display(),
            main_rs.display()
        )
    })?;
    Ok(main_rs)
}
