use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

use crate::nutrition::Nutrition;
use crate::steps;
use crate::video;

/// The recipe API numbers ingredient slots 1 through 20
pub const MAX_INGREDIENTS: usize = 20;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ingredient {
    pub item: String,
    pub measure: String,
}

/// A single dish as the recipe API describes it.
///
/// Records from `filter.php` only carry the id, name and thumbnail, so every
/// other field is optional. Serializes back into the API's own field layout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "MealRecord", into = "MealRecord")]
pub struct Recipe {
    pub id: String,
    pub name: String,
    pub category: Option<String>,
    pub area: Option<String>,
    pub thumbnail: Option<String>,
    pub instructions: Option<String>,
    pub tags: Option<String>,
    pub youtube: Option<String>,
    pub source: Option<String>,
    pub ingredients: Vec<Ingredient>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub fn from_ingredient_count(count: usize) -> Self {
        match count {
            0..=8 => Difficulty::Easy,
            9..=12 => Difficulty::Medium,
            _ => Difficulty::Hard,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        }
    }
}

impl Recipe {
    pub fn difficulty(&self) -> Difficulty {
        Difficulty::from_ingredient_count(self.ingredients.len())
    }

    pub fn nutrition(&self) -> Nutrition {
        Nutrition::estimate(&self.id)
    }

    /// Instruction lines suitable for cook mode
    pub fn steps(&self) -> Vec<String> {
        steps::split_instructions(self.instructions.as_deref())
    }

    pub fn video_id(&self) -> Option<String> {
        self.youtube.as_deref().and_then(video::extract_video_id)
    }

    /// True for the trimmed-down records returned by category filtering
    pub fn is_partial(&self) -> bool {
        self.instructions.is_none() && self.ingredients.is_empty()
    }
}

/// Wire layout of a meal record
#[derive(Serialize, Deserialize)]
struct MealRecord {
    #[serde(rename = "idMeal", deserialize_with = "deserialize_id")]
    id_meal: String,
    #[serde(rename = "strMeal", default)]
    str_meal: Option<String>,
    #[serde(rename = "strCategory", default)]
    str_category: Option<String>,
    #[serde(rename = "strArea", default)]
    str_area: Option<String>,
    #[serde(rename = "strMealThumb", default)]
    str_meal_thumb: Option<String>,
    #[serde(rename = "strInstructions", default)]
    str_instructions: Option<String>,
    #[serde(rename = "strTags", default)]
    str_tags: Option<String>,
    #[serde(rename = "strYoutube", default)]
    str_youtube: Option<String>,
    #[serde(rename = "strSource", default)]
    str_source: Option<String>,
    // strIngredientN / strMeasureN and anything else the API adds
    #[serde(flatten)]
    extra: Map<String, Value>,
}

/// Ids arrive as strings, but accept bare numbers too
fn deserialize_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::String(s) => Ok(s),
        Value::Number(n) => Ok(n.to_string()),
        other => Err(serde::de::Error::custom(format!(
            "expected string or number for idMeal, got {}",
            other
        ))),
    }
}

/// The API uses empty strings where it means "absent"
fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.trim().is_empty())
}

impl From<MealRecord> for Recipe {
    fn from(record: MealRecord) -> Self {
        let mut ingredients = Vec::new();
        for i in 1..=MAX_INGREDIENTS {
            let item = record
                .extra
                .get(&format!("strIngredient{}", i))
                .and_then(Value::as_str)
                .filter(|s| !s.trim().is_empty());

            if let Some(item) = item {
                let measure = record
                    .extra
                    .get(&format!("strMeasure{}", i))
                    .and_then(Value::as_str)
                    .unwrap_or("");
                ingredients.push(Ingredient {
                    item: item.to_string(),
                    measure: measure.to_string(),
                });
            }
        }

        Self {
            id: record.id_meal,
            name: record.str_meal.unwrap_or_default(),
            category: non_empty(record.str_category),
            area: non_empty(record.str_area),
            thumbnail: non_empty(record.str_meal_thumb),
            instructions: non_empty(record.str_instructions),
            tags: non_empty(record.str_tags),
            youtube: non_empty(record.str_youtube),
            source: non_empty(record.str_source),
            ingredients,
        }
    }
}

impl From<Recipe> for MealRecord {
    fn from(recipe: Recipe) -> Self {
        let mut extra = Map::new();
        for (i, ingredient) in recipe.ingredients.into_iter().enumerate() {
            extra.insert(format!("strIngredient{}", i + 1), Value::String(ingredient.item));
            extra.insert(format!("strMeasure{}", i + 1), Value::String(ingredient.measure));
        }

        Self {
            id_meal: recipe.id,
            str_meal: Some(recipe.name),
            str_category: recipe.category,
            str_area: recipe.area,
            str_meal_thumb: recipe.thumbnail,
            str_instructions: recipe.instructions,
            str_tags: recipe.tags,
            str_youtube: recipe.youtube,
            str_source: recipe.source,
            extra,
        }
    }
}
