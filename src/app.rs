use std::time::Instant;

use crave_core::share::{self, ShareOutcome};
use crave_core::{
    state, ChatLog, Config, CookSession, FavoritesStore, MealDbClient, Recipe, ViewMode,
    CATEGORIES,
};
use tokio::sync::mpsc::UnboundedSender;
use tokio::task::JoinHandle;

use crate::tui::AppEvent;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Normal,
    Editing,
}

/// What a list fetch asks the recipe API for
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchRequest {
    Search(String),
    Category(String),
}

pub struct App {
    // Core state
    pub should_quit: bool,
    pub view: ViewMode,
    pub input_mode: InputMode,

    // Search box
    pub search_input: String,
    pub search_cursor: usize, // char index into search_input

    // Browse state
    pub selected_category: Option<usize>,
    pub recipes: Vec<Recipe>,
    pub loading: bool,

    // Grid state (columns and visible rows are measured during render)
    pub grid_selected: usize,
    pub grid_columns: usize,
    pub grid_row_offset: usize,

    // Detail overlay
    pub detail: Option<Recipe>,
    pub detail_scroll: u16,
    pub detail_loading: bool,

    // Cook mode overlay
    pub cook: Option<CookSession>,
    pub timer_presets: Vec<u64>,

    // Chef Bot
    pub chat_open: bool,
    pub chat: ChatLog,
    pub chat_input: String,
    pub chat_cursor: usize,

    // Footer status message
    pub status: Option<String>,

    // Animation state
    pub animation_frame: u8,

    // Fetch sequencing: only completions carrying the current generation land
    pub fetch_generation: u64,
    fetch_task: Option<JoinHandle<()>>,

    // Data
    pub favorites: FavoritesStore,
    pub client: MealDbClient,
    events: UnboundedSender<AppEvent>,
}

impl App {
    pub fn new(config: &Config, events: UnboundedSender<AppEvent>) -> anyhow::Result<Self> {
        let client = MealDbClient::new(&config.api_base_url())
            .with_default_query(config.default_query());
        let favorites = FavoritesStore::load(config.favorites_path()?);

        Ok(Self::with_parts(client, favorites, config.timer_presets(), events))
    }

    pub fn with_parts(
        client: MealDbClient,
        favorites: FavoritesStore,
        timer_presets: Vec<u64>,
        events: UnboundedSender<AppEvent>,
    ) -> Self {
        Self {
            should_quit: false,
            view: ViewMode::Browse,
            input_mode: InputMode::Normal,

            search_input: String::new(),
            search_cursor: 0,

            selected_category: None,
            recipes: Vec::new(),
            loading: false,

            grid_selected: 0,
            grid_columns: 1,
            grid_row_offset: 0,

            detail: None,
            detail_scroll: 0,
            detail_loading: false,

            cook: None,
            timer_presets,

            chat_open: false,
            chat: ChatLog::new(),
            chat_input: String::new(),
            chat_cursor: 0,

            status: None,
            animation_frame: 0,

            fetch_generation: 0,
            fetch_task: None,

            favorites,
            client,
            events,
        }
    }

    // Fetching

    /// Start a list fetch, superseding any fetch still in flight
    pub fn fetch(&mut self, request: FetchRequest) {
        if let Some(task) = self.fetch_task.take() {
            task.abort();
        }

        self.fetch_generation += 1;
        self.loading = true;

        let generation = self.fetch_generation;
        let client = self.client.clone();
        let tx = self.events.clone();
        tracing::debug!(generation, ?request, "Starting fetch");

        self.fetch_task = Some(tokio::spawn(async move {
            let recipes = match &request {
                FetchRequest::Search(term) => client.search_or_empty(term).await,
                FetchRequest::Category(category) => client.category_or_empty(category).await,
            };
            let _ = tx.send(AppEvent::Fetched { generation, recipes });
        }));
    }

    /// Apply a finished fetch. Returns false when it was superseded.
    pub fn on_fetched(&mut self, generation: u64, recipes: Vec<Recipe>) -> bool {
        if generation != self.fetch_generation {
            tracing::debug!(
                generation,
                current = self.fetch_generation,
                "Dropping stale fetch result"
            );
            return false;
        }

        self.fetch_task = None;
        self.loading = false;
        self.recipes = recipes;
        if self.view == ViewMode::Browse {
            self.grid_selected = 0;
            self.grid_row_offset = 0;
        }
        true
    }

    pub fn submit_search(&mut self) {
        self.selected_category = None;
        self.view = ViewMode::Browse;
        self.fetch(FetchRequest::Search(self.search_input.clone()));
    }

    pub fn select_category(&mut self, index: usize) {
        if let Some(category) = CATEGORIES.get(index) {
            self.selected_category = Some(index);
            self.fetch(FetchRequest::Category(category.to_string()));
        }
    }

    /// Move the category chip selection and fetch it
    pub fn cycle_category(&mut self, forward: bool) {
        let len = CATEGORIES.len();
        let next = match (self.selected_category, forward) {
            (None, true) => 0,
            (None, false) => len - 1,
            (Some(i), true) => (i + 1) % len,
            (Some(i), false) => (i + len - 1) % len,
        };
        self.select_category(next);
    }

    pub fn clear_filter(&mut self) {
        self.selected_category = None;
        self.fetch(FetchRequest::Search(String::new()));
    }

    pub fn go_home(&mut self) {
        self.view = ViewMode::Browse;
        self.selected_category = None;
        self.search_input.clear();
        self.search_cursor = 0;
        self.fetch(FetchRequest::Search(String::new()));
    }

    pub fn toggle_favorites_view(&mut self) {
        self.view = match self.view {
            ViewMode::Browse => ViewMode::Favorites,
            ViewMode::Favorites => ViewMode::Browse,
        };
        self.grid_selected = 0;
        self.grid_row_offset = 0;
    }

    // Grid

    /// The recipes the grid is showing right now
    pub fn visible_recipes(&self) -> &[Recipe] {
        match self.view {
            ViewMode::Browse => &self.recipes,
            ViewMode::Favorites => self.favorites.list(),
        }
    }

    pub fn selected_recipe(&self) -> Option<&Recipe> {
        self.visible_recipes().get(self.grid_selected)
    }

    pub fn heading(&self) -> String {
        let category = self.selected_category.and_then(|i| CATEGORIES.get(i).copied());
        state::heading(self.view, category, &self.search_input)
    }

    fn clamp_selection(&mut self) {
        let len = self.visible_recipes().len();
        self.grid_selected = self.grid_selected.min(len.saturating_sub(1));
    }

    pub fn grid_right(&mut self) {
        let len = self.visible_recipes().len();
        if self.grid_selected + 1 < len {
            self.grid_selected += 1;
        }
    }

    pub fn grid_left(&mut self) {
        self.grid_selected = self.grid_selected.saturating_sub(1);
    }

    pub fn grid_down(&mut self) {
        let len = self.visible_recipes().len();
        let cols = self.grid_columns.max(1);
        if self.grid_selected + cols < len {
            self.grid_selected += cols;
        } else if len > 0 && self.grid_selected / cols < (len - 1) / cols {
            // partial last row: land on its last card
            self.grid_selected = len - 1;
        }
    }

    pub fn grid_up(&mut self) {
        let cols = self.grid_columns.max(1);
        if self.grid_selected >= cols {
            self.grid_selected -= cols;
        }
    }

    pub fn grid_first(&mut self) {
        self.grid_selected = 0;
    }

    pub fn grid_last(&mut self) {
        self.grid_selected = self.visible_recipes().len().saturating_sub(1);
    }

    // Favorites

    fn toggle_favorite(&mut self, recipe: &Recipe) {
        match self.favorites.toggle(recipe) {
            Ok(true) => self.status = Some(format!("Saved {} to favorites", recipe.name)),
            Ok(false) => self.status = Some(format!("Removed {} from favorites", recipe.name)),
            Err(e) => {
                tracing::error!("Failed to save favorites: {}", e);
                self.status = Some(format!("Could not save favorites: {}", e));
            }
        }
        if self.view == ViewMode::Favorites {
            self.clamp_selection();
        }
    }

    pub fn toggle_favorite_selected(&mut self) {
        if let Some(recipe) = self.selected_recipe().cloned() {
            self.toggle_favorite(&recipe);
        }
    }

    pub fn toggle_favorite_detail(&mut self) {
        if let Some(recipe) = self.detail.clone() {
            self.toggle_favorite(&recipe);
        }
    }

    pub fn is_favorite(&self, id: &str) -> bool {
        self.favorites.contains(id)
    }

    // Detail overlay

    pub fn open_selected(&mut self) {
        let Some(recipe) = self.selected_recipe().cloned() else {
            return;
        };

        self.detail_scroll = 0;
        self.detail_loading = recipe.is_partial();
        if recipe.is_partial() {
            let client = self.client.clone();
            let tx = self.events.clone();
            let id = recipe.id.clone();
            tokio::spawn(async move {
                let full = match client.lookup(&id).await {
                    Ok(full) => full,
                    Err(e) => {
                        tracing::error!("Error looking up recipe {}: {}", id, e);
                        None
                    }
                };
                let _ = tx.send(AppEvent::Hydrated { id, recipe: full });
            });
        }
        self.detail = Some(recipe);
    }

    /// Swap a partial detail record for the full one
    pub fn on_hydrated(&mut self, id: &str, recipe: Option<Recipe>) {
        let Some(current) = &self.detail else {
            return;
        };
        if current.id != id {
            return;
        }

        self.detail_loading = false;
        if let Some(full) = recipe {
            // keep grid cards in sync so reopening is instant
            if let Some(slot) = self.recipes.iter_mut().find(|r| r.id == full.id) {
                *slot = full.clone();
            }
            // a saved partial record gets the full data too
            if let Err(e) = self.favorites.replace(&full) {
                tracing::error!("Failed to save favorites: {}", e);
            }
            self.detail = Some(full);
        }
    }

    pub fn close_detail(&mut self) {
        self.detail = None;
        self.detail_loading = false;
        self.cook = None;
    }

    pub fn share_detail(&mut self) {
        let Some(recipe) = &self.detail else {
            return;
        };
        self.status = Some(match share::share(recipe) {
            ShareOutcome::Copied(_) => "Link copied to clipboard!".to_string(),
            ShareOutcome::Unavailable(url) => format!("Share this link: {}", url),
        });
    }

    pub fn scroll_detail_down(&mut self, lines: u16) {
        self.detail_scroll = self.detail_scroll.saturating_add(lines);
    }

    pub fn scroll_detail_up(&mut self, lines: u16) {
        self.detail_scroll = self.detail_scroll.saturating_sub(lines);
    }

    // Cook mode

    pub fn start_cook(&mut self) {
        if let Some(recipe) = &self.detail {
            tracing::info!("Cook mode for {}", recipe.id);
            self.cook = Some(CookSession::new(recipe));
        }
    }

    pub fn close_cook(&mut self) {
        self.cook = None;
    }

    pub fn start_timer_preset(&mut self, index: usize) {
        let Some(&minutes) = self.timer_presets.get(index) else {
            return;
        };
        if let Some(cook) = &mut self.cook {
            cook.timer.start(minutes);
        }
    }

    // Chef Bot

    pub fn toggle_chat(&mut self) {
        self.chat_open = !self.chat_open;
    }

    pub fn submit_chat(&mut self) {
        let input = std::mem::take(&mut self.chat_input);
        self.chat_cursor = 0;
        self.chat.submit(&input, Instant::now());
    }

    // Periodic events

    pub fn on_tick(&mut self) {
        if self.loading || self.detail_loading || self.chat.is_typing() {
            self.animation_frame = (self.animation_frame + 1) % 3;
        }
        self.chat.poll(Instant::now());
    }

    pub fn on_clock(&mut self) {
        if let Some(cook) = &mut self.cook {
            if cook.timer.tick() {
                tracing::info!("Cook timer finished");
                self.status = Some("Timer done!".to_string());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crave_core::Ingredient;
    use tempfile::TempDir;
    use tokio::sync::mpsc;

    fn recipe(id: &str) -> Recipe {
        Recipe {
            id: id.to_string(),
            name: format!("Dish {}", id),
            category: Some("Pasta".to_string()),
            area: Some("Italian".to_string()),
            thumbnail: None,
            instructions: Some("Boil water\nAdd pasta\nDrain".to_string()),
            tags: None,
            youtube: None,
            source: None,
            ingredients: vec![Ingredient {
                item: "Pasta".to_string(),
                measure: "200g".to_string(),
            }],
        }
    }

    fn test_app(dir: &TempDir) -> (App, mpsc::UnboundedReceiver<AppEvent>) {
        let (tx, rx) = mpsc::unbounded_channel();
        let client = MealDbClient::new("http://127.0.0.1:9");
        let favorites = FavoritesStore::load(dir.path().join("favorites.json"));
        (App::with_parts(client, favorites, vec![5, 10], tx), rx)
    }

    #[tokio::test]
    async fn test_stale_fetch_is_dropped() {
        let dir = TempDir::new().unwrap();
        let (mut app, _rx) = test_app(&dir);

        app.fetch(FetchRequest::Search("soup".to_string()));
        let first = app.fetch_generation;
        app.fetch(FetchRequest::Search("pie".to_string()));
        let second = app.fetch_generation;
        assert!(app.loading);

        assert!(app.on_fetched(second, vec![recipe("2")]));
        assert!(!app.loading);
        // the slower first response arrives late and must not overwrite
        assert!(!app.on_fetched(first, vec![recipe("1")]));
        assert_eq!(app.recipes.len(), 1);
        assert_eq!(app.recipes[0].id, "2");
    }

    #[tokio::test]
    async fn test_fetch_failure_reports_empty_list() {
        let dir = TempDir::new().unwrap();
        let (mut app, mut rx) = test_app(&dir);

        app.fetch(FetchRequest::Category("Beef".to_string()));
        match rx.recv().await {
            Some(AppEvent::Fetched { generation, recipes }) => {
                assert_eq!(generation, app.fetch_generation);
                assert!(recipes.is_empty());
                assert!(app.on_fetched(generation, recipes));
            }
            other => panic!("unexpected event: {:?}", other),
        }
        assert!(app.recipes.is_empty());
        assert!(!app.loading);
    }

    #[tokio::test]
    async fn test_grid_navigation_wraps_rows() {
        let dir = TempDir::new().unwrap();
        let (mut app, _rx) = test_app(&dir);
        app.recipes = (0..7).map(|i| recipe(&i.to_string())).collect();
        app.grid_columns = 3;

        app.grid_down();
        assert_eq!(app.grid_selected, 3);
        app.grid_down();
        assert_eq!(app.grid_selected, 6);
        app.grid_down();
        assert_eq!(app.grid_selected, 6);
        app.grid_up();
        assert_eq!(app.grid_selected, 3);
        app.grid_right();
        app.grid_right();
        assert_eq!(app.grid_selected, 5);
        app.grid_down();
        assert_eq!(app.grid_selected, 6);
        app.grid_last();
        app.grid_right();
        assert_eq!(app.grid_selected, 6);
        app.grid_first();
        app.grid_left();
        assert_eq!(app.grid_selected, 0);
    }

    #[tokio::test]
    async fn test_favorites_view_tracks_toggles() {
        let dir = TempDir::new().unwrap();
        let (mut app, _rx) = test_app(&dir);
        app.recipes = vec![recipe("1"), recipe("2")];

        app.grid_right();
        app.toggle_favorite_selected();
        assert!(app.is_favorite("2"));

        app.toggle_favorites_view();
        assert_eq!(app.heading(), "Your Cookbook");
        assert_eq!(app.visible_recipes().len(), 1);

        app.toggle_favorite_selected();
        assert!(app.visible_recipes().is_empty());
        assert_eq!(app.grid_selected, 0);
    }

    #[tokio::test]
    async fn test_cook_mode_timer() {
        let dir = TempDir::new().unwrap();
        let (mut app, _rx) = test_app(&dir);
        app.recipes = vec![recipe("1")];
        app.open_selected();
        assert!(!app.detail_loading);

        app.start_cook();
        app.start_timer_preset(0);
        app.on_clock();
        let cook = app.cook.as_ref().unwrap();
        assert_eq!(cook.steps().len(), 3);
        assert_eq!(cook.timer.display(), "4:59");

        app.close_detail();
        assert!(app.cook.is_none());
    }

    #[tokio::test]
    async fn test_category_cycle_sets_heading() {
        let dir = TempDir::new().unwrap();
        let (mut app, _rx) = test_app(&dir);

        app.cycle_category(false);
        assert_eq!(app.heading(), "Goat Recipes");
        app.cycle_category(true);
        assert_eq!(app.heading(), "Beef Recipes");

        app.search_input = "curry".to_string();
        app.submit_search();
        assert_eq!(app.selected_category, None);
        assert_eq!(app.heading(), "Results for \"curry\"");
    }

    #[tokio::test]
    async fn test_hydration_replaces_partial_detail() {
        let dir = TempDir::new().unwrap();
        let (mut app, _rx) = test_app(&dir);
        let mut partial = recipe("7");
        partial.instructions = None;
        partial.ingredients.clear();
        app.recipes = vec![partial];

        app.open_selected();
        assert!(app.detail_loading);

        app.on_hydrated("other", Some(recipe("other")));
        assert!(app.detail_loading);

        app.on_hydrated("7", Some(recipe("7")));
        assert!(!app.detail_loading);
        assert!(!app.detail.as_ref().unwrap().is_partial());
        assert!(!app.recipes[0].is_partial());
    }

    #[tokio::test]
    async fn test_hydration_upgrades_saved_partial_favorite() {
        let dir = TempDir::new().unwrap();
        let (mut app, _rx) = test_app(&dir);
        let mut partial = recipe("8");
        partial.instructions = None;
        partial.ingredients.clear();
        app.recipes = vec![partial];

        app.toggle_favorite_selected();
        assert!(app.favorites.list()[0].is_partial());

        app.open_selected();
        app.on_hydrated("8", Some(recipe("8")));
        assert!(!app.favorites.list()[0].is_partial());

        let reloaded = FavoritesStore::load(dir.path().join("favorites.json"));
        assert!(!reloaded.list()[0].is_partial());
    }
}
