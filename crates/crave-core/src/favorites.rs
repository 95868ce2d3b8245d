use std::fs;
use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::recipe::Recipe;

/// Saved recipes, mirrored to a JSON file on every change.
///
/// The file is read once when the store opens. A single process is assumed;
/// concurrent writers simply overwrite each other.
pub struct FavoritesStore {
    path: PathBuf,
    recipes: Vec<Recipe>,
}

impl FavoritesStore {
    /// Open the store at `path`. A missing file starts empty.
    ///
    /// Entries that don't parse are skipped. When anything is skipped, or the
    /// file can't be read at all, it is copied to `<name>.bak` first so the
    /// next save can't destroy it.
    pub fn load(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let recipes = match Self::read(&path) {
            Ok((recipes, 0)) => recipes,
            Ok((recipes, skipped)) => {
                tracing::warn!(
                    "Skipped {} unreadable favorites in {}",
                    skipped,
                    path.display()
                );
                Self::back_up(&path);
                recipes
            }
            Err(e) => {
                tracing::warn!("Ignoring unreadable favorites file {}: {}", path.display(), e);
                Self::back_up(&path);
                Vec::new()
            }
        };
        tracing::info!("Loaded {} favorites from {}", recipes.len(), path.display());
        Self { path, recipes }
    }

    /// Parsed recipes plus the number of entries that didn't parse
    fn read(path: &Path) -> Result<(Vec<Recipe>, usize)> {
        if !path.exists() {
            return Ok((Vec::new(), 0));
        }
        let content = fs::read_to_string(path)?;
        if content.trim().is_empty() {
            return Ok((Vec::new(), 0));
        }

        let entries: Vec<serde_json::Value> = serde_json::from_str(&content)?;
        let total = entries.len();
        let recipes: Vec<Recipe> = entries
            .into_iter()
            .filter_map(|entry| match serde_json::from_value(entry) {
                Ok(recipe) => Some(recipe),
                Err(e) => {
                    tracing::warn!("Skipping favorite entry: {}", e);
                    None
                }
            })
            .collect();
        let skipped = total - recipes.len();
        Ok((recipes, skipped))
    }

    pub fn backup_path(path: &Path) -> PathBuf {
        let mut name = path.file_name().unwrap_or_default().to_os_string();
        name.push(".bak");
        path.with_file_name(name)
    }

    fn back_up(path: &Path) {
        if !path.exists() {
            return;
        }
        let backup = Self::backup_path(path);
        match fs::copy(path, &backup) {
            Ok(_) => tracing::info!("Backed up favorites to {}", backup.display()),
            Err(e) => tracing::error!("Failed to back up favorites to {}: {}", backup.display(), e),
        }
    }

    fn save(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(&self.recipes)?;
        fs::write(&self.path, content)?;
        Ok(())
    }

    /// Add the recipe if it isn't saved yet, otherwise remove it, then write
    /// the whole list out. Returns whether the recipe is now a favorite.
    ///
    /// The in-memory list changes even if the write fails.
    pub fn toggle(&mut self, recipe: &Recipe) -> Result<bool> {
        let now_favorite = match self.recipes.iter().position(|r| r.id == recipe.id) {
            Some(i) => {
                self.recipes.remove(i);
                false
            }
            None => {
                self.recipes.push(recipe.clone());
                true
            }
        };
        tracing::debug!(id = %recipe.id, now_favorite, "Toggled favorite");
        self.save()?;
        Ok(now_favorite)
    }

    /// Swap a saved entry for a newer copy of the same recipe, keeping its
    /// position. Returns false when the recipe isn't saved.
    pub fn replace(&mut self, recipe: &Recipe) -> Result<bool> {
        let Some(slot) = self.recipes.iter_mut().find(|r| r.id == recipe.id) else {
            return Ok(false);
        };
        if *slot == *recipe {
            return Ok(true);
        }
        *slot = recipe.clone();
        self.save()?;
        Ok(true)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.recipes.iter().any(|r| r.id == id)
    }

    pub fn list(&self) -> &[Recipe] {
        &self.recipes
    }

    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::recipe::tests::recipe_with_ingredients;
    use tempfile::TempDir;

    fn ids(store: &FavoritesStore) -> Vec<String> {
        store.list().iter().map(|r| r.id.clone()).collect()
    }

    #[test]
    fn test_missing_file_starts_empty() {
        let dir = TempDir::new().unwrap();
        let store = FavoritesStore::load(dir.path().join("favorites.json"));
        assert!(store.is_empty());
    }

    #[test]
    fn test_toggle_adds_then_removes() {
        let dir = TempDir::new().unwrap();
        let mut store = FavoritesStore::load(dir.path().join("favorites.json"));
        let recipe = recipe_with_ingredients("52772", 7);

        assert!(store.toggle(&recipe).unwrap());
        assert!(store.contains("52772"));
        assert_eq!(store.len(), 1);

        assert!(!store.toggle(&recipe).unwrap());
        assert!(!store.contains("52772"));
        assert!(store.is_empty());
    }

    fn saved_three(path: &Path) -> FavoritesStore {
        let mut store = FavoritesStore::load(path);
        for id in ["1", "2", "3"] {
            store.toggle(&recipe_with_ingredients(id, 3)).unwrap();
        }
        store
    }

    #[test]
    fn test_add_then_remove_restores_exact_order() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("favorites.json");
        let mut store = saved_three(&path);
        let before = ids(&store);

        let extra = recipe_with_ingredients("4", 3);
        store.toggle(&extra).unwrap();
        store.toggle(&extra).unwrap();

        assert_eq!(ids(&store), before);
        assert_eq!(ids(&FavoritesStore::load(&path)), before);
    }

    #[test]
    fn test_remove_then_add_moves_recipe_to_end() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("favorites.json");
        let mut store = saved_three(&path);

        let middle = recipe_with_ingredients("2", 3);
        store.toggle(&middle).unwrap();
        assert_eq!(ids(&store), vec!["1", "3"]);
        store.toggle(&middle).unwrap();

        // same members, the re-added one last
        assert_eq!(ids(&store), vec!["1", "3", "2"]);
        assert_eq!(ids(&FavoritesStore::load(&path)), vec!["1", "3", "2"]);
    }

    #[test]
    fn test_toggle_persists_full_records() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("favorites.json");
        let recipe = recipe_with_ingredients("52772", 5);
        {
            let mut store = FavoritesStore::load(&path);
            store.toggle(&recipe).unwrap();
        }

        let reloaded = FavoritesStore::load(&path);
        assert_eq!(reloaded.list(), &[recipe]);
    }

    #[test]
    fn test_duplicate_ids_are_not_added_twice() {
        let dir = TempDir::new().unwrap();
        let mut store = FavoritesStore::load(dir.path().join("favorites.json"));
        let a = recipe_with_ingredients("9", 1);
        let mut b = recipe_with_ingredients("9", 2);
        b.name = "Same id, different copy".to_string();

        store.toggle(&a).unwrap();
        // same identifier removes rather than duplicating
        store.toggle(&b).unwrap();
        assert!(store.is_empty());
    }

    #[test]
    fn test_corrupt_file_starts_empty_and_is_backed_up() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("favorites.json");
        fs::write(&path, "{not json").unwrap();
        let mut store = FavoritesStore::load(&path);
        assert!(store.is_empty());
        assert_eq!(store.path(), path.as_path());

        store.toggle(&recipe_with_ingredients("5", 1)).unwrap();
        let backup = FavoritesStore::backup_path(&path);
        assert_eq!(backup, dir.path().join("favorites.json.bak"));
        assert_eq!(fs::read_to_string(&backup).unwrap(), "{not json");
    }

    #[test]
    fn test_bad_entry_does_not_lose_the_rest() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("favorites.json");
        let original = r#"[{"idMeal":"1","strMeal":"Keep me"},{"strMeal":"no id"}]"#;
        fs::write(&path, original).unwrap();

        let mut store = FavoritesStore::load(&path);
        assert_eq!(ids(&store), vec!["1"]);

        store.toggle(&recipe_with_ingredients("2", 1)).unwrap();
        let saved = fs::read_to_string(&path).unwrap();
        assert!(saved.contains("Keep me"));
        assert_eq!(
            fs::read_to_string(FavoritesStore::backup_path(&path)).unwrap(),
            original
        );
    }

    #[test]
    fn test_clean_load_writes_no_backup() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("favorites.json");
        saved_three(&path);
        let reloaded = FavoritesStore::load(&path);
        assert_eq!(reloaded.len(), 3);
        assert!(!FavoritesStore::backup_path(&path).exists());
    }

    #[test]
    fn test_replace_updates_saved_entry_in_place() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("favorites.json");
        let mut store = saved_three(&path);

        let mut full = recipe_with_ingredients("2", 9);
        full.name = "Full record".to_string();
        assert!(store.replace(&full).unwrap());
        assert_eq!(ids(&store), vec!["1", "2", "3"]);
        assert_eq!(store.list()[1].ingredients.len(), 9);

        let reloaded = FavoritesStore::load(&path);
        assert_eq!(reloaded.list()[1].name, "Full record");

        assert!(!store.replace(&recipe_with_ingredients("42", 1)).unwrap());
        assert_eq!(store.len(), 3);
    }
}
