//! Ingredient suggestion prompt: dishes that can be made from what is on hand.

/// Prompt name for logging and fakes.
pub const INGREDIENT_SUGGESTION_PROMPT_NAME: &str = "ingredient_suggestion";

/// Render the suggestion prompt for the available ingredients.
pub fn render_ingredient_suggestion_prompt(ingredients: &[String]) -> String {
    let ingredients_list = ingredients.join(", ");

    format!(
        r#"You are a home-cooking assistant. Suggest dishes that can be made mostly from the ingredients the user already has.

Available ingredients: {ingredients_list}

Suggest up to 5 dishes. For each, list which available ingredients it uses and which extra ingredients are needed. Rate difficulty as one of very_easy, easy, medium, hard, very_hard and cooking time as one of very_fast, fast, medium, slow, very_slow.

Respond with JSON only, no other text: {{"suggestions": [{{"dishName": "...", "description": "...", "matchedIngredients": ["..."], "missingIngredients": ["..."], "difficulty": "easy", "cookingTime": "fast"}}]}}"#,
        ingredients_list = ingredients_list
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_prompt() {
        let prompt = render_ingredient_suggestion_prompt(&[
            "egg".to_string(),
            "rice".to_string(),
            "kimchi".to_string(),
        ]);
        assert!(prompt.contains("egg, rice, kimchi"));
        assert!(prompt.contains("\"suggestions\""));
    }
}
