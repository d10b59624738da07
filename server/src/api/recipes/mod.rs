pub mod create;
pub mod delete;
pub mod get;
pub mod list;
pub mod update;

use crate::state::AppState;
use axum::routing::get;
use axum::Router;
use hearth_core::{CookingTime, Difficulty, Ingredient, Instruction, NewRecipe, Recipe, RecipePatch};
use utoipa::OpenApi;

/// Returns the router for /api/recipes endpoints (mounted at /api/recipes)
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list::list_recipes).post(create::create_recipe))
        .route(
            "/{id}",
            get(get::get_recipe)
                .put(update::update_recipe)
                .delete(delete::delete_recipe),
        )
}

#[derive(OpenApi)]
#[openapi(
    paths(
        list::list_recipes,
        create::create_recipe,
        get::get_recipe,
        update::update_recipe,
        delete::delete_recipe,
    ),
    components(schemas(
        Recipe,
        NewRecipe,
        RecipePatch,
        Ingredient,
        Instruction,
        Difficulty,
        CookingTime,
        list::ListRecipesResponse,
        get::RecipeResponse,
    ))
)]
pub struct ApiDoc;
