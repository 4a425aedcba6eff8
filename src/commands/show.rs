//! Show command - build, prune and render a tree

use std::io::Write;

use anyhow::{Context, Result};
use log::info;

use foldertree::domain::value_objects::path::normalize;
use foldertree::presentation::output::{create_renderer, OutputFormat};
use foldertree::presentation::ShowArgs;
use foldertree::{write_atomic, Config, LocalFs, TreeOptions, TreeUseCase};

use crate::ui::output::print_config_warnings;
use crate::ui::terminal::detect_capabilities;

pub fn cmd_show(args: &ShowArgs, json: bool) -> Result<()> {
    let cwd = std::env::current_dir().context("Failed to determine current directory")?;
    let root = normalize(&args.root, &cwd);

    let config = if args.no_config {
        Config::default().with_env_overrides()
    } else {
        let (config, warnings) = Config::load_layered(&root)?;
        print_config_warnings(&warnings);
        config
    };

    // CLI patterns come after configured ones.
    let mut exclude = config.tree.exclude.clone();
    exclude.extend(args.exclude.iter().cloned());

    let caps = detect_capabilities();
    let charset = args
        .charset
        .unwrap_or(config.output.charset)
        .resolve(caps.supports_unicode);

    let options = TreeOptions::new(root)
        .with_selected(args.select.clone())
        .with_exclude(exclude)
        .with_charset(charset)
        .with_cwd(cwd);

    let result = TreeUseCase::new(LocalFs::new()).execute(&options)?;
    let content = create_renderer(OutputFormat::from_json_flag(json))
        .render(&result)
        .context("Failed to serialize tree")?;

    match &args.output {
        Some(path) => {
            write_atomic(path, content.as_bytes())
                .with_context(|| format!("Failed to write {}", path.display()))?;
            info!("Wrote {} nodes to {}", result.stats.total(), path.display());
        }
        None => {
            let mut out = std::io::stdout().lock();
            out.write_all(content.as_bytes())?;
            out.flush()?;
        }
    }

    Ok(())
}
