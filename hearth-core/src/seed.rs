//! Built-in example recipes used to reset the store.
//!
//! Ids and timestamps are fixed so that resetting twice yields identical data.

use chrono::{DateTime, Utc};

use crate::types::{CookingTime, Difficulty, Ingredient, Instruction, Recipe};

struct SeedRecipe {
    id: &'static str,
    dish_name: &'static str,
    recipe_name: Option<&'static str>,
    difficulty: Difficulty,
    cooking_time: CookingTime,
    ingredients: &'static [(&'static str, &'static str, &'static str)], // (name, quantity, unit)
    steps: &'static [(&'static str, &'static str)],                     // (title, description)
    emotion_tags: &'static [&'static str],
    note: Option<&'static str>,
    story: Option<&'static str>,
    created_at: i64,
}

const SAMPLE_RECIPES: &[SeedRecipe] = &[
    SeedRecipe {
        id: "mock-kimchi-stew",
        dish_name: "Kimchi stew",
        recipe_name: Some("Mom's rainy-day kimchi stew"),
        difficulty: Difficulty::Easy,
        cooking_time: CookingTime::Medium,
        ingredients: &[
            ("aged kimchi", "2", "cups"),
            ("pork belly", "200", "g"),
            ("tofu", "1/2", "block"),
            ("green onion", "1", "stalk"),
            ("gochugaru", "1", "tbsp"),
        ],
        steps: &[
            ("Sear", "Fry the pork belly in a pot until the fat renders."),
            ("Simmer", "Add kimchi and its juice, then water to cover. Simmer 20 minutes."),
            ("Finish", "Add sliced tofu and green onion and simmer 5 more minutes."),
        ],
        emotion_tags: &["comforting", "nostalgic", "rainy day"],
        note: Some("The older the kimchi, the better."),
        story: Some("Every rainy Saturday the whole apartment smelled of this stew."),
        created_at: 1_704_067_200,
    },
    SeedRecipe {
        id: "mock-tteokbokki",
        dish_name: "Tteokbokki",
        recipe_name: None,
        difficulty: Difficulty::VeryEasy,
        cooking_time: CookingTime::Fast,
        ingredients: &[
            ("rice cakes", "300", "g"),
            ("fish cakes", "2", "sheets"),
            ("gochujang", "2", "tbsp"),
            ("sugar", "1", "tbsp"),
            ("anchovy stock", "2", "cups"),
        ],
        steps: &[
            ("Sauce", "Stir gochujang and sugar into the stock and bring to a boil."),
            ("Cook", "Add rice cakes and fish cakes and cook until the sauce thickens."),
        ],
        emotion_tags: &["playful", "excited", "after school"],
        note: None,
        story: Some("Bought from the cart outside school, eaten standing up with friends."),
        created_at: 1_704_153_600,
    },
    SeedRecipe {
        id: "mock-japchae",
        dish_name: "Japchae",
        recipe_name: Some("Holiday japchae"),
        difficulty: Difficulty::Medium,
        cooking_time: CookingTime::Slow,
        ingredients: &[
            ("sweet potato noodles", "250", "g"),
            ("spinach", "1", "bunch"),
            ("carrot", "1", ""),
            ("shiitake mushrooms", "5", ""),
            ("soy sauce", "3", "tbsp"),
            ("sesame oil", "2", "tbsp"),
        ],
        steps: &[
            ("Noodles", "Boil the noodles, rinse and toss with sesame oil."),
            ("Vegetables", "Stir-fry each vegetable separately with a pinch of salt."),
            ("Toss", "Combine everything with soy sauce, sugar and sesame seeds."),
        ],
        emotion_tags: &["festive", "grateful", "family"],
        note: Some("Made in huge batches for every holiday."),
        story: None,
        created_at: 1_704_240_000,
    },
    SeedRecipe {
        id: "mock-chicken-soup",
        dish_name: "Chicken soup",
        recipe_name: Some("Get-well chicken soup"),
        difficulty: Difficulty::Easy,
        cooking_time: CookingTime::VerySlow,
        ingredients: &[
            ("whole chicken", "1", ""),
            ("garlic", "10", "cloves"),
            ("ginger", "1", "inch"),
            ("glutinous rice", "1/2", "cup"),
        ],
        steps: &[
            ("Stuff", "Fill the chicken with soaked rice and garlic."),
            ("Simmer", "Simmer with ginger for an hour and a half."),
            ("Serve", "Season with salt and pepper at the table."),
        ],
        emotion_tags: &["comforting", "tired", "sick day"],
        note: None,
        story: Some("Grandma's answer to every cold."),
        created_at: 1_704_326_400,
    },
    SeedRecipe {
        id: "mock-pancakes",
        dish_name: "Green onion pancakes",
        recipe_name: None,
        difficulty: Difficulty::Medium,
        cooking_time: CookingTime::Fast,
        ingredients: &[
            ("flour", "1", "cup"),
            ("green onions", "1", "bunch"),
            ("egg", "1", ""),
            ("cold water", "3/4", "cup"),
        ],
        steps: &[
            ("Batter", "Mix flour, egg and cold water into a loose batter."),
            ("Fry", "Lay green onions in a hot oiled pan, pour batter over and fry until crisp."),
        ],
        emotion_tags: &["cozy", "rainy day", "sharing"],
        note: Some("Serve with soy-vinegar dipping sauce."),
        story: None,
        created_at: 1_704_412_800,
    },
];

/// The fixed seed set, in display order.
pub fn mock_recipes() -> Vec<Recipe> {
    SAMPLE_RECIPES.iter().map(SeedRecipe::to_recipe).collect()
}

impl SeedRecipe {
    fn to_recipe(&self) -> Recipe {
        let created_at: DateTime<Utc> =
            DateTime::from_timestamp(self.created_at, 0).unwrap_or_default();

        Recipe {
            id: self.id.to_string(),
            dish_name: Some(self.dish_name.to_string()),
            recipe_name: Some(self.recipe_name.unwrap_or(self.dish_name).to_string()),
            same_as_dish: self.recipe_name.is_none(),
            difficulty: Some(self.difficulty),
            cooking_time: Some(self.cooking_time),
            ingredients_list: self
                .ingredients
                .iter()
                .enumerate()
                .map(|(i, (name, quantity, unit))| Ingredient {
                    id: format!("{}-ing-{}", self.id, i + 1),
                    name: name.to_string(),
                    quantity: quantity.to_string(),
                    unit: unit.to_string(),
                })
                .collect(),
            instructions: self
                .steps
                .iter()
                .enumerate()
                .map(|(i, (title, description))| Instruction {
                    id: format!("{}-step-{}", self.id, i + 1),
                    step: (i + 1) as u32,
                    title: title.to_string(),
                    description: description.to_string(),
                })
                .collect(),
            emotion_tags: self.emotion_tags.iter().map(|t| t.to_string()).collect(),
            cover_image: None,
            gallery_images: Vec::new(),
            note: self.note.map(str::to_string),
            story: self.story.map(str::to_string),
            audio_url: None,
            user_id: None,
            created_at,
            updated_at: created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_seed_ids_are_unique() {
        let recipes = mock_recipes();
        let ids: HashSet<_> = recipes.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids.len(), recipes.len());
    }

    #[test]
    fn test_seed_is_deterministic() {
        assert_eq!(mock_recipes(), mock_recipes());
    }

    #[test]
    fn test_seed_recipes_satisfy_naming_rules() {
        for recipe in mock_recipes() {
            assert!(!recipe.display_name().is_empty());
            if recipe.same_as_dish {
                assert_eq!(recipe.recipe_name, recipe.dish_name);
            }
            assert!(recipe.created_at.timestamp() > 0);
        }
    }
}
