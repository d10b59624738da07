//! AI client module for LLM-backed recipe features.
//!
//! This module provides:
//! - `AiClient` trait abstracting chat-completion providers
//! - `OpenAiCompatibleClient` for OpenRouter/OpenAI-style APIs
//! - `FakeAiClient` for tests and offline development
//! - Prompt templates and the capabilities built on them: mood search,
//!   emotion tags, ingredient suggestions and nostalgic stories
//!
//! # Configuration
//!
//! - `HEARTH_AI_PROVIDER` (optional): "openai" or "fake" (default)
//! - `HEARTH_AI_API_KEY` / `OPENROUTER_API_KEY`: required for "openai"
//! - `HEARTH_AI_MODEL` (optional): Model name, e.g., "openai/gpt-4o-mini"
//! - `HEARTH_AI_BASE_URL` (optional): API base URL

mod client;
mod config;
mod emotion_tags;
mod fake;
mod ingredient_suggestion;
mod mood_search;
mod nostalgia_story;
pub mod prompts;
mod types;

pub use client::{
    create_ai_client_from_env, parse_json_content, AiClient, AiError, OpenAiCompatibleClient,
};
pub use config::AiConfig;
pub use emotion_tags::{generate_emotion_tags, EmotionTagsResult, MAX_EMOTION_TAGS};
pub use fake::FakeAiClient;
pub use ingredient_suggestion::{
    suggest_recipes, RecipeSuggestion, SuggestionResult, MAX_SUGGESTIONS,
};
pub use mood_search::{search_by_mood, MoodMatch, MoodSearchResult};
pub use nostalgia_story::{generate_nostalgia_story, StoryResult};
pub use types::{ChatMessage, ChatRequest, ChatResponse, Role, Usage};
