use super::model::{self, ImageOption};
use contracts::domain::recipe::RecipeSummary;
use leptos::logging::log;
use leptos::prelude::*;

/// ViewModel for the carousel item form: a recipe select driving an image
/// select plus a thumbnail preview.
///
/// All fields are signals, so the struct is `Copy` and can be moved into any
/// number of closures.
#[derive(Clone, Copy)]
pub struct CarouselItemFormVm {
    pub recipes: RwSignal<Vec<RecipeSummary>>,
    pub recipe_id: RwSignal<String>,
    pub image_options: RwSignal<Vec<ImageOption>>,
    pub images_disabled: RwSignal<bool>,
    pub selected_image: RwSignal<String>,
    pub error: RwSignal<Option<String>>,
    /// Token of the most recently issued image fetch. Responses stamped with
    /// an older token are dropped instead of applied.
    request_seq: RwSignal<u64>,
}

impl CarouselItemFormVm {
    pub fn new() -> Self {
        let cleared = model::cleared_update();
        Self {
            recipes: RwSignal::new(Vec::new()),
            recipe_id: RwSignal::new(String::new()),
            image_options: RwSignal::new(cleared.options),
            images_disabled: RwSignal::new(cleared.disabled),
            selected_image: RwSignal::new(cleared.selected),
            error: RwSignal::new(None),
            request_seq: RwSignal::new(0),
        }
    }

    /// Load the recipe list; with an initial recipe id (edit-mode form) the
    /// image fetch fires immediately and the initial image selection is
    /// restored through the normal restore path.
    pub fn init(self, initial_recipe: Option<i64>, initial_image: Option<i64>) {
        wasm_bindgen_futures::spawn_local(async move {
            match model::fetch_recipes().await {
                Ok(list) => self.recipes.set(list),
                Err(e) => {
                    log!("Failed to load recipes: {}", e);
                    self.error.set(Some(format!("Failed to load recipes: {}", e)));
                }
            }
        });

        if let Some(recipe) = initial_recipe {
            self.recipe_id.set(recipe.to_string());
            if let Some(image) = initial_image {
                self.selected_image.set(image.to_string());
            }
            self.reload_images(recipe);
        }
    }

    /// Source select changed.
    pub fn on_recipe_changed(self, value: String) {
        self.recipe_id.set(value.clone());

        let Ok(recipe) = value.parse::<i64>() else {
            // Empty selection: reset the dependent select, no request.
            // Advancing the token keeps a fetch still in flight from
            // repopulating the select after the reset.
            self.next_token();
            self.apply(model::cleared_update());
            return;
        };
        self.reload_images(recipe);
    }

    /// Dependent select changed; the preview derives from the selection.
    pub fn on_image_changed(self, value: String) {
        self.selected_image.set(value);
    }

    /// Thumbnail URL for the current selection.
    pub fn preview_url(self) -> Option<String> {
        model::preview_url(&self.image_options.get(), &self.selected_image.get())
    }

    fn next_token(self) -> u64 {
        let issued = self.request_seq.get_untracked() + 1;
        self.request_seq.set(issued);
        issued
    }

    fn reload_images(self, recipe: i64) {
        let issued = self.next_token();

        wasm_bindgen_futures::spawn_local(async move {
            let result = model::fetch_recipe_images(recipe).await;
            if let Err(e) = &result {
                log!("Error fetching images for recipe {}: {}", recipe, e);
            }
            let previous = self.selected_image.get_untracked();
            let latest = self.request_seq.get_untracked();
            if let Some(update) = model::apply_images_response(latest, issued, &previous, result) {
                self.apply(update);
            }
        });
    }

    fn apply(self, update: model::ImageSelectUpdate) {
        self.image_options.set(update.options);
        self.images_disabled.set(update.disabled);
        self.selected_image.set(update.selected);
    }
}

impl Default for CarouselItemFormVm {
    fn default() -> Self {
        Self::new()
    }
}
