use anyhow::Result;
use colored::*;
use crave_core::{ChefBot, Config, FavoritesStore, MealDbClient, Recipe, CATEGORIES};

fn client_for(config: &Config) -> MealDbClient {
    MealDbClient::new(&config.api_base_url()).with_default_query(config.default_query())
}

fn print_recipe_list(recipes: &[Recipe], favorites: &FavoritesStore) {
    for (i, recipe) in recipes.iter().enumerate() {
        let heart = if favorites.contains(&recipe.id) { " ♥".red().to_string() } else { String::new() };
        let meta: Vec<&str> = [recipe.category.as_deref(), recipe.area.as_deref()]
            .into_iter()
            .flatten()
            .collect();
        println!(
            "{}. {}{} {}",
            (i + 1).to_string().bold().blue(),
            recipe.name.bold().yellow(),
            heart,
            format!("[{}]", recipe.id).dimmed()
        );
        if !meta.is_empty() {
            println!("   {}", meta.join(" · ").dimmed());
        }
    }
}

pub async fn search(config: &Config, term: &str) -> Result<()> {
    let client = client_for(config);
    let shown = if term.trim().is_empty() { config.default_query() } else { term };
    println!("🔍 Searching for: {}", shown.bold().cyan());

    let recipes = client.search(term).await?;
    if recipes.is_empty() {
        println!("{}", "No recipes found".red());
        return Ok(());
    }

    println!("\n{} recipes found:\n", recipes.len().to_string().bold().green());
    let favorites = FavoritesStore::load(config.favorites_path()?);
    print_recipe_list(&recipes, &favorites);
    Ok(())
}

pub async fn category(config: &Config, name: &str) -> Result<()> {
    let client = client_for(config);
    println!("📂 {} Recipes", name.bold().cyan());

    let recipes = client.filter_by_category(name).await?;
    if recipes.is_empty() {
        println!("{}", "No recipes found".red());
        return Ok(());
    }

    println!("\n{} recipes found:\n", recipes.len().to_string().bold().green());
    let favorites = FavoritesStore::load(config.favorites_path()?);
    print_recipe_list(&recipes, &favorites);
    Ok(())
}

pub async fn show(config: &Config, id: &str) -> Result<()> {
    let client = client_for(config);
    let Some(recipe) = client.lookup(id).await? else {
        println!("{}", format!("No recipe with id {}", id).red());
        return Ok(());
    };

    println!("\n{}", format!("🍽  {}", recipe.name).bold().green());
    println!("{}", "=".repeat(50).dimmed());

    let difficulty = recipe.difficulty();
    let mut meta = Vec::new();
    if let Some(category) = &recipe.category {
        meta.push(category.clone());
    }
    if let Some(area) = &recipe.area {
        meta.push(area.clone());
    }
    meta.push(difficulty.label().to_string());
    meta.push("~30 mins".to_string());
    println!("{}", meta.join(" · ").cyan());

    let nutrition = recipe
        .nutrition()
        .cells()
        .into_iter()
        .map(|(label, value)| format!("{} {}", label.bold(), value))
        .collect::<Vec<_>>()
        .join("   ");
    println!("\n{}", nutrition);

    println!("\n{}", "Ingredients".bold().yellow());
    for ingredient in &recipe.ingredients {
        println!("  • {} {}", ingredient.measure.trim().bold(), ingredient.item);
    }

    println!("\n{}", "Instructions".bold().yellow());
    for (i, step) in recipe.steps().iter().enumerate() {
        println!("{}  {}", format!("{:>2}.", i + 1).bold().blue(), step.trim());
    }

    if let Some(video_id) = recipe.video_id() {
        println!("\n{}", "Video Tutorial".bold().yellow());
        println!("  {}", crave_core::video::embed_url(&video_id).underline());
    }

    println!("\n{}", "=".repeat(50).dimmed());
    println!("{}", crave_core::share::page_url(&recipe).dimmed());
    Ok(())
}

pub fn favorites(config: &Config) -> Result<()> {
    let store = FavoritesStore::load(config.favorites_path()?);
    println!("📖 {}", "Your Cookbook".bold().blue());

    if store.is_empty() {
        println!("{}", "No saved recipes yet".dimmed());
        return Ok(());
    }

    println!("\n{} saved recipes:\n", store.len().to_string().bold().green());
    print_recipe_list(store.list(), &store);
    Ok(())
}

pub fn categories() {
    println!("{}", "Categories:".bold().blue());
    for category in CATEGORIES {
        println!("  • {}", category.green());
    }
}

pub fn chat(message: &str) {
    println!("{} {}", "You:".bold().cyan(), message);
    println!("{} {}", "Chef Bot:".bold().magenta(), ChefBot::reply(message));
}
