pub mod api;
pub mod chat;
pub mod config;
pub mod cook;
pub mod error;
pub mod favorites;
pub mod logging;
pub mod nutrition;
pub mod recipe;
pub mod share;
pub mod state;
pub mod steps;
pub mod video;

// Re-export main types for convenience
pub use api::{MealDbClient, CATEGORIES};
pub use chat::{ChatLog, ChefBot};
pub use config::Config;
pub use cook::{CookSession, Countdown};
pub use error::{Error, Result};
pub use favorites::FavoritesStore;
pub use nutrition::Nutrition;
pub use recipe::{Difficulty, Ingredient, Recipe};
pub use state::{ChatMessage, ChatRole, ViewMode};
