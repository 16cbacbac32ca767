use serde::{Deserialize, Serialize};

/// One recipe offered in the source select of the carousel item form.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecipeSummary {
    pub id: i64,
    pub name: String,
}

/// One image of a recipe, as the admin images endpoint returns it.
///
/// Field names follow the endpoint's wire format.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecipeImage {
    pub id: i64,
    pub url: String,
    pub order: i32,
    pub recipe_id: i64,
    pub recipe_name: String,
}
