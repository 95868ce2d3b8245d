//! UI-agnostic application state types
//!
//! Data structures that describe what the user is looking at, independent of
//! how a particular frontend draws it.

use serde::{Deserialize, Serialize};

/// A message in the Chef Bot conversation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: ChatRole,
    pub text: String,
}

/// The sender of a chat message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ChatRole {
    User,
    Bot,
}

/// Which list the grid is showing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewMode {
    #[default]
    Browse,
    Favorites,
}

/// Title above the grid
pub fn heading(view: ViewMode, category: Option<&str>, query: &str) -> String {
    match (view, category) {
        (ViewMode::Favorites, _) => "Your Cookbook".to_string(),
        (ViewMode::Browse, Some(cat)) => format!("{} Recipes", cat),
        (ViewMode::Browse, None) if !query.trim().is_empty() => {
            format!("Results for \"{}\"", query)
        }
        (ViewMode::Browse, None) => "Discover & Cook".to_string(),
    }
}

/// Line under the heading
pub fn subheading(view: ViewMode) -> &'static str {
    match view {
        ViewMode::Favorites => "All your saved recipes in one place.",
        ViewMode::Browse => "Explore delicious recipes from around the world.",
    }
}
