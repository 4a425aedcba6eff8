use foldertree::TreeError;

/// Human-readable message plus a hint for library errors
pub fn format_tree_error(err: &TreeError) -> String {
    let hint = match err {
        TreeError::NotFound { .. } => Some("Check the path and try again."),
        TreeError::Filesystem { .. } => {
            Some("Check permissions, or exclude the entry with --exclude.")
        }
        TreeError::InvalidSelection { .. } => {
            Some("Selections must be existing folders inside the root.")
        }
        TreeError::NoCommonAncestor { .. } => {
            Some("A selection may be hidden by an exclude pattern; try --no-config.")
        }
        TreeError::InvalidPattern { .. } => Some(
            "Patterns are regular expressions whose first '*' matches anything; escape other metacharacters.",
        ),
        TreeError::Config { .. } => Some("Fix the file, or bypass it with --no-config."),
        TreeError::Io(_) => None,
    };

    match hint {
        Some(hint) => format!("[ERROR] {}\n  {}\n", err, hint),
        None => format!("[ERROR] {}\n", err),
    }
}

pub fn format_error(err: &anyhow::Error) -> String {
    if let Some(tree_err) = err.downcast_ref::<TreeError>() {
        return format_tree_error(tree_err);
    }

    format!("[ERROR] {:#}\n", err)
}

pub fn print_error(err: &anyhow::Error, json: bool) {
    if json {
        let kind = err
            .downcast_ref::<TreeError>()
            .map(TreeError::kind)
            .unwrap_or("error");
        let output = serde_json::json!({
            "event": "error",
            "kind": kind,
            "message": format!("{:#}", err),
        });
        let _ = crate::ui::json::emit(output);
        return;
    }

    let caps = crate::ui::terminal::detect_capabilities();
    if caps.is_ci && std::env::var("GITHUB_ACTIONS").is_ok() {
        println!("::error title=foldertree::{}", err);
    }

    eprint!("{}", format_error(err));
}
