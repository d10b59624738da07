//! AI prompt templates.

pub mod emotion_tags;
pub mod ingredient_suggestion;
pub mod mood_search;
pub mod nostalgia_story;

pub use emotion_tags::{render_emotion_tags_prompt, EMOTION_TAGS_PROMPT_NAME};
pub use ingredient_suggestion::{
    render_ingredient_suggestion_prompt, INGREDIENT_SUGGESTION_PROMPT_NAME,
};
pub use mood_search::{render_mood_search_prompt, MOOD_SEARCH_PROMPT_NAME};
pub use nostalgia_story::{
    render_nostalgia_story_prompt, NOSTALGIA_STORY_PROMPT_NAME, NOSTALGIA_STORY_SYSTEM_PROMPT,
};
