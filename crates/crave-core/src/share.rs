//! Sharing a recipe from a terminal.
//!
//! There is no share sheet here, so sharing means putting the link on the
//! system clipboard. When no clipboard tool works the caller shows the link
//! instead.

use std::io::Write;
use std::process::{Command, Stdio};

use crate::recipe::Recipe;

const RECIPE_PAGE_BASE: &str = "https://www.themealdb.com/meal/";

/// Clipboard tools tried in order: macOS, Wayland, X11, Windows
pub const CLIPBOARD_COMMANDS: &[(&str, &[&str])] = &[
    ("pbcopy", &[]),
    ("wl-copy", &[]),
    ("xclip", &["-selection", "clipboard"]),
    ("clip", &[]),
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShareOutcome {
    /// Copied with the named tool
    Copied(&'static str),
    /// No clipboard tool accepted the text; show it to the user
    Unavailable(String),
}

pub fn page_url(recipe: &Recipe) -> String {
    format!("{}{}", RECIPE_PAGE_BASE, recipe.id)
}

pub fn share_text(recipe: &Recipe) -> String {
    format!(
        "Check out this recipe for {} on Crave!\n{}",
        recipe.name,
        page_url(recipe)
    )
}

pub fn share(recipe: &Recipe) -> ShareOutcome {
    let text = share_text(recipe);
    match copy_with(CLIPBOARD_COMMANDS, &text) {
        Some(tool) => {
            tracing::info!("Shared {} via {}", recipe.id, tool);
            ShareOutcome::Copied(tool)
        }
        None => {
            tracing::warn!("No clipboard tool available to share {}", recipe.id);
            ShareOutcome::Unavailable(page_url(recipe))
        }
    }
}

/// Pipe `text` into the first command that runs and exits cleanly
pub fn copy_with(commands: &[(&'static str, &[&str])], text: &str) -> Option<&'static str> {
    commands
        .iter()
        .find(|(program, args)| pipe_to(program, args, text))
        .map(|(program, _)| *program)
}

fn pipe_to(program: &str, args: &[&str], text: &str) -> bool {
    let Ok(mut child) = Command::new(program)
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
    else {
        return false;
    };

    if let Some(mut stdin) = child.stdin.take() {
        if stdin.write_all(text.as_bytes()).is_err() {
            let _ = child.kill();
            let _ = child.wait();
            return false;
        }
    }

    matches!(child.wait(), Ok(status) if status.success())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::recipe::tests::recipe_with_ingredients;

    #[test]
    fn test_share_text() {
        let recipe = recipe_with_ingredients("52772", 1);
        assert_eq!(page_url(&recipe), "https://www.themealdb.com/meal/52772");
        assert_eq!(
            share_text(&recipe),
            "Check out this recipe for Recipe 52772 on Crave!\nhttps://www.themealdb.com/meal/52772"
        );
    }

    #[test]
    fn test_missing_tools_are_skipped() {
        let commands: &[(&'static str, &[&str])] = &[("crave-no-such-clipboard-tool", &[])];
        assert_eq!(copy_with(commands, "hello"), None);
    }

    #[cfg(unix)]
    #[test]
    fn test_first_working_tool_wins() {
        let commands: &[(&'static str, &[&str])] =
            &[("crave-no-such-clipboard-tool", &[]), ("cat", &[]), ("false", &[])];
        assert_eq!(copy_with(commands, "hello"), Some("cat"));
    }

    #[cfg(unix)]
    #[test]
    fn test_failing_tool_is_skipped() {
        let commands: &[(&'static str, &[&str])] = &[("false", &[])];
        assert_eq!(copy_with(commands, "hello"), None);
    }
}
