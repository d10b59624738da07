//! Emotion tag prompt: label a dish with the feelings it evokes.

/// Prompt name for logging and fakes.
pub const EMOTION_TAGS_PROMPT_NAME: &str = "emotion_tags";

/// Render the emotion-tag prompt for a dish and an optional personal note.
pub fn render_emotion_tags_prompt(dish_name: &str, note: Option<&str>) -> String {
    let note = note
        .map(str::trim)
        .filter(|n| !n.is_empty())
        .map(|n| format!("\nThe cook's note about it: {}", n))
        .unwrap_or_default();

    format!(
        r#"You are helping someone catalogue the dishes that matter to them. Suggest short mood or emotion tags (one or two words each, lowercase) describing how this dish makes people feel or when they crave it.

Dish: {dish_name}{note}

Suggest 3 to 5 tags.

Respond with JSON only, no other text: {{"tags": ["tag1", "tag2"]}}"#,
        dish_name = dish_name,
        note = note
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_prompt_with_note() {
        let prompt = render_emotion_tags_prompt("Seaweed soup", Some("Birthday mornings"));
        assert!(prompt.contains("Dish: Seaweed soup"));
        assert!(prompt.contains("Birthday mornings"));
        assert!(prompt.contains("\"tags\""));
    }

    #[test]
    fn test_render_prompt_skips_blank_note() {
        let prompt = render_emotion_tags_prompt("Seaweed soup", Some("  "));
        assert!(!prompt.contains("note about it"));
    }
}
