//! Init command - write a commented project config

use std::path::Path;

use anyhow::{bail, Context, Result};

use foldertree::config::{CONFIG_TEMPLATE, PROJECT_CONFIG_FILE};
use foldertree::write_atomic;

use crate::ui::terminal::detect_capabilities;

pub fn cmd_init(path: &Path, force: bool, json: bool) -> Result<()> {
    if !path.is_dir() {
        bail!("{} is not a directory", path.display());
    }

    let target = path.join(PROJECT_CONFIG_FILE);
    let existed = target.exists();
    if existed && !force {
        bail!(
            "{} already exists (use --force to overwrite)",
            target.display()
        );
    }

    write_atomic(&target, CONFIG_TEMPLATE.as_bytes())
        .with_context(|| format!("Failed to write {}", target.display()))?;

    if json {
        let _ = crate::ui::json::emit(serde_json::json!({
            "event": "init",
            "path": target.display().to_string(),
            "overwritten": existed,
        }));
        return Ok(());
    }

    println!("Created {}", target.display());
    if detect_capabilities().is_tty {
        println!("Edit [tree] exclude, then run `foldertree` to see the result.");
    }
    Ok(())
}
