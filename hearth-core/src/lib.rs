pub mod ai;
pub mod audio;
pub mod config;
pub mod error;
pub mod seed;
pub mod speech;
pub mod store;
pub mod types;

pub use audio::{
    validate_audio, AudioError, AudioStore, AudioUpload, FakeAudioStore, LocalAudioStore,
    StoredAudio, MAX_AUDIO_SIZE,
};
pub use error::{RecipeError, StorageError};
pub use seed::mock_recipes;
pub use speech::{
    FakeTranscriber, FileTranscriber, SpeechError, StreamTranscriber, Transcription,
    TranscriptionRequest, MAX_TRANSCRIPTION_SIZE,
};
pub use store::{JsonFileStorage, MemoryStorage, RecipeRepository, RecipeStorage};
pub use types::{
    CookingTime, Difficulty, Ingredient, Instruction, NewRecipe, Recipe, RecipePatch,
};
