//! Nostalgia story prompt: a short personal story around a dish.

/// Prompt name for logging and fakes.
pub const NOSTALGIA_STORY_PROMPT_NAME: &str = "nostalgia_story";

pub const NOSTALGIA_STORY_SYSTEM_PROMPT: &str = "You write short, warm, nostalgic vignettes about food and the people who cook it. Write in plain prose without titles, lists or Markdown.";

/// Render the story prompt for a dish and an optional memory to build on.
pub fn render_nostalgia_story_prompt(dish_name: &str, memory: Option<&str>) -> String {
    match memory.map(str::trim).filter(|m| !m.is_empty()) {
        Some(memory) => format!(
            "Write a nostalgic story of about 150 words about the dish \"{}\", built around this memory: {}",
            dish_name, memory
        ),
        None => format!(
            "Write a nostalgic story of about 150 words about the dish \"{}\" and the memories it brings back.",
            dish_name
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_prompt_uses_memory() {
        let prompt = render_nostalgia_story_prompt("Japchae", Some("Chuseok at grandma's"));
        assert!(prompt.contains("\"Japchae\""));
        assert!(prompt.contains("Chuseok at grandma's"));
    }

    #[test]
    fn test_render_prompt_without_memory() {
        let prompt = render_nostalgia_story_prompt("Japchae", None);
        assert!(prompt.contains("memories it brings back"));
    }
}
