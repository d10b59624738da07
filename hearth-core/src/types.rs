//! Recipe data model shared by the store, the AI capabilities and the server.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::RecipeError;

/// How hard a dish is to make, from easiest to hardest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "snake_case")]
pub enum Difficulty {
    VeryEasy,
    Easy,
    Medium,
    Hard,
    VeryHard,
}

impl Difficulty {
    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::VeryEasy => "very_easy",
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
            Difficulty::VeryHard => "very_hard",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How long a dish takes, from quickest to slowest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "snake_case")]
pub enum CookingTime {
    VeryFast,
    Fast,
    Medium,
    Slow,
    VerySlow,
}

impl CookingTime {
    pub fn as_str(&self) -> &'static str {
        match self {
            CookingTime::VeryFast => "very_fast",
            CookingTime::Fast => "fast",
            CookingTime::Medium => "medium",
            CookingTime::Slow => "slow",
            CookingTime::VerySlow => "very_slow",
        }
    }
}

impl fmt::Display for CookingTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One line of an ingredient list. Quantities are free text ("a pinch", "2-3").
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct Ingredient {
    #[serde(default)]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub quantity: String,
    #[serde(default)]
    pub unit: String,
}

/// One cooking step.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct Instruction {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub step: u32,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
}

/// A persisted, user-submitted dish writeup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    pub id: String,
    #[serde(default)]
    pub dish_name: Option<String>,
    #[serde(default)]
    pub recipe_name: Option<String>,
    #[serde(default)]
    pub same_as_dish: bool,
    #[serde(default)]
    pub difficulty: Option<Difficulty>,
    #[serde(default)]
    pub cooking_time: Option<CookingTime>,
    #[serde(default)]
    pub ingredients_list: Vec<Ingredient>,
    /// Serialized as a JSON-encoded string.
    #[serde(default, with = "instructions_text")]
    #[cfg_attr(feature = "openapi", schema(value_type = String))]
    pub instructions: Vec<Instruction>,
    #[serde(default)]
    pub emotion_tags: Vec<String>,
    #[serde(default)]
    pub cover_image: Option<String>,
    #[serde(default)]
    pub gallery_images: Vec<String>,
    #[serde(default)]
    pub note: Option<String>,
    #[serde(default)]
    pub story: Option<String>,
    #[serde(default)]
    pub audio_url: Option<String>,
    #[serde(default)]
    pub user_id: Option<String>,
    #[serde(default)]
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub updated_at: DateTime<Utc>,
}

impl Recipe {
    /// Name to show for this recipe: the recipe name, falling back to the dish name.
    pub fn display_name(&self) -> &str {
        self.recipe_name
            .as_deref()
            .or(self.dish_name.as_deref())
            .unwrap_or("")
    }
}

/// Fields accepted when creating a recipe. Identity and timestamps are assigned by the store.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct NewRecipe {
    #[serde(default)]
    pub dish_name: Option<String>,
    #[serde(default)]
    pub recipe_name: Option<String>,
    #[serde(default)]
    pub same_as_dish: bool,
    #[serde(default)]
    pub difficulty: Option<Difficulty>,
    #[serde(default)]
    pub cooking_time: Option<CookingTime>,
    #[serde(default)]
    pub ingredients_list: Vec<Ingredient>,
    #[serde(default, with = "instructions_text")]
    #[cfg_attr(feature = "openapi", schema(value_type = String))]
    pub instructions: Vec<Instruction>,
    #[serde(default)]
    pub emotion_tags: Vec<String>,
    #[serde(default)]
    pub cover_image: Option<String>,
    #[serde(default)]
    pub gallery_images: Vec<String>,
    #[serde(default)]
    pub note: Option<String>,
    #[serde(default)]
    pub story: Option<String>,
    #[serde(default)]
    pub audio_url: Option<String>,
    #[serde(default)]
    pub user_id: Option<String>,
}

impl NewRecipe {
    /// Build a stored recipe, assigning identity and timestamps.
    pub fn into_recipe(self, id: String, now: DateTime<Utc>) -> Result<Recipe, RecipeError> {
        let (dish_name, recipe_name) =
            resolve_names(self.dish_name, self.recipe_name, self.same_as_dish)?;

        Ok(Recipe {
            id,
            dish_name,
            recipe_name,
            same_as_dish: self.same_as_dish,
            difficulty: self.difficulty,
            cooking_time: self.cooking_time,
            ingredients_list: self.ingredients_list,
            instructions: self.instructions,
            emotion_tags: normalize_tags(self.emotion_tags),
            cover_image: non_empty(self.cover_image),
            gallery_images: self.gallery_images,
            note: non_empty(self.note),
            story: non_empty(self.story),
            audio_url: non_empty(self.audio_url),
            user_id: non_empty(self.user_id),
            created_at: now,
            updated_at: now,
        })
    }
}

/// Partial update. Absent fields are left unchanged; an empty string clears an optional text field.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct RecipePatch {
    #[serde(default)]
    pub dish_name: Option<String>,
    #[serde(default)]
    pub recipe_name: Option<String>,
    #[serde(default)]
    pub same_as_dish: Option<bool>,
    #[serde(default)]
    pub difficulty: Option<Difficulty>,
    #[serde(default)]
    pub cooking_time: Option<CookingTime>,
    #[serde(default)]
    pub ingredients_list: Option<Vec<Ingredient>>,
    #[serde(default, with = "instructions_text::option")]
    #[cfg_attr(feature = "openapi", schema(value_type = Option<String>))]
    pub instructions: Option<Vec<Instruction>>,
    #[serde(default)]
    pub emotion_tags: Option<Vec<String>>,
    #[serde(default)]
    pub cover_image: Option<String>,
    #[serde(default)]
    pub gallery_images: Option<Vec<String>>,
    #[serde(default)]
    pub note: Option<String>,
    #[serde(default)]
    pub story: Option<String>,
    #[serde(default)]
    pub audio_url: Option<String>,
}

impl RecipePatch {
    /// Apply this patch to `recipe`, re-checking the naming rules.
    ///
    /// `id` and `created_at` are never touched. On error `recipe` is left unchanged.
    pub fn apply(self, recipe: &mut Recipe, now: DateTime<Utc>) -> Result<(), RecipeError> {
        let same_as_dish = self.same_as_dish.unwrap_or(recipe.same_as_dish);
        let dish_name = self.dish_name.or_else(|| recipe.dish_name.clone());
        // A dish rename re-derives a recipe name that was only ever a copy of the old dish name.
        let recipe_name = match self.recipe_name {
            Some(name) => Some(name),
            None if recipe.recipe_name == recipe.dish_name => None,
            None => recipe.recipe_name.clone(),
        };
        let (dish_name, recipe_name) = resolve_names(dish_name, recipe_name, same_as_dish)?;

        recipe.dish_name = dish_name;
        recipe.recipe_name = recipe_name;
        recipe.same_as_dish = same_as_dish;
        if let Some(difficulty) = self.difficulty {
            recipe.difficulty = Some(difficulty);
        }
        if let Some(cooking_time) = self.cooking_time {
            recipe.cooking_time = Some(cooking_time);
        }
        if let Some(ingredients) = self.ingredients_list {
            recipe.ingredients_list = ingredients;
        }
        if let Some(instructions) = self.instructions {
            recipe.instructions = instructions;
        }
        if let Some(tags) = self.emotion_tags {
            recipe.emotion_tags = normalize_tags(tags);
        }
        if let Some(images) = self.gallery_images {
            recipe.gallery_images = images;
        }
        replace_text(&mut recipe.cover_image, self.cover_image);
        replace_text(&mut recipe.note, self.note);
        replace_text(&mut recipe.story, self.story);
        replace_text(&mut recipe.audio_url, self.audio_url);
        recipe.updated_at = now;

        Ok(())
    }
}

/// Apply the naming rules: `recipe_name` falls back to `dish_name`, and follows it
/// when `same_as_dish` is set. At least one name must be present.
pub fn resolve_names(
    dish_name: Option<String>,
    recipe_name: Option<String>,
    same_as_dish: bool,
) -> Result<(Option<String>, Option<String>), RecipeError> {
    let dish_name = non_empty(dish_name);
    let mut recipe_name = non_empty(recipe_name);

    if (same_as_dish || recipe_name.is_none()) && dish_name.is_some() {
        recipe_name = dish_name.clone();
    }

    if dish_name.is_none() && recipe_name.is_none() {
        return Err(RecipeError::Validation(
            "dishName or recipeName is required".to_string(),
        ));
    }

    Ok((dish_name, recipe_name))
}

/// Trim tags, drop empty ones and remove case-insensitive duplicates (first spelling wins).
pub fn normalize_tags(tags: Vec<String>) -> Vec<String> {
    let mut result: Vec<String> = Vec::with_capacity(tags.len());
    for tag in tags {
        let tag = tag.trim();
        if tag.is_empty() || result.iter().any(|t| t.eq_ignore_ascii_case(tag)) {
            continue;
        }
        result.push(tag.to_string());
    }
    result
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn replace_text(field: &mut Option<String>, update: Option<String>) {
    if let Some(value) = update {
        *field = non_empty(Some(value));
    }
}

/// Parse instructions given as text: a JSON array of steps, or one step per line.
///
/// Leading step numbers such as "1." or "2)" are stripped from plain lines.
pub fn parse_instruction_text(text: &str) -> Vec<Instruction> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Vec::new();
    }

    if trimmed.starts_with('[') {
        if let Ok(steps) = serde_json::from_str::<Vec<Instruction>>(trimmed) {
            return steps;
        }
    }

    trimmed
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .enumerate()
        .map(|(i, line)| {
            let step = (i + 1) as u32;
            Instruction {
                id: format!("step-{}", step),
                step,
                title: String::new(),
                description: strip_step_number(line).to_string(),
            }
        })
        .collect()
}

fn strip_step_number(line: &str) -> &str {
    let rest = line.trim_start_matches(|c: char| c.is_ascii_digit());
    if rest.len() == line.len() {
        return line;
    }
    match rest.strip_prefix(['.', ')']) {
        Some(rest) => rest.trim_start(),
        None => line,
    }
}

/// Serde adapter storing `Vec<Instruction>` as a JSON-encoded string.
///
/// Reading also accepts a plain array or free text.
mod instructions_text {
    use super::{parse_instruction_text, Instruction};
    use serde::{Deserialize, Deserializer, Serializer};

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Repr {
        Steps(Vec<Instruction>),
        Text(String),
    }

    impl Repr {
        fn into_steps(self) -> Vec<Instruction> {
            match self {
                Repr::Steps(steps) => steps,
                Repr::Text(text) => parse_instruction_text(&text),
            }
        }
    }

    pub fn serialize<S: Serializer>(steps: &[Instruction], serializer: S) -> Result<S::Ok, S::Error> {
        let text = serde_json::to_string(steps).map_err(serde::ser::Error::custom)?;
        serializer.serialize_str(&text)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<Instruction>, D::Error> {
        Ok(Option::<Repr>::deserialize(deserializer)?
            .map(Repr::into_steps)
            .unwrap_or_default())
    }

    pub mod option {
        use super::{Instruction, Repr};
        use serde::{Deserialize, Deserializer, Serializer};

        pub fn serialize<S: Serializer>(
            steps: &Option<Vec<Instruction>>,
            serializer: S,
        ) -> Result<S::Ok, S::Error> {
            match steps {
                Some(steps) => super::serialize(steps, serializer),
                None => serializer.serialize_none(),
            }
        }

        pub fn deserialize<'de, D: Deserializer<'de>>(
            deserializer: D,
        ) -> Result<Option<Vec<Instruction>>, D::Error> {
            Ok(Option::<Repr>::deserialize(deserializer)?.map(Repr::into_steps))
        }
    }
}
