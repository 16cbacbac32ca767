use crate::shared::api_utils::api_base;
use crate::shared::url_utils::file_name_from_url;
use contracts::domain::recipe::{RecipeImage, RecipeSummary};
use gloo_net::http::Request;

/// One rendered `<option>` of the image select.
#[derive(Clone, Debug, PartialEq)]
pub struct ImageOption {
    pub value: String,
    pub label: String,
    pub url: Option<String>,
}

impl ImageOption {
    fn placeholder() -> Self {
        Self {
            value: String::new(),
            label: "---------".to_string(),
            url: None,
        }
    }

    fn load_error() -> Self {
        Self {
            value: String::new(),
            label: "Error loading images".to_string(),
            url: None,
        }
    }
}

/// State applied to the image select when it changes as a whole.
#[derive(Clone, Debug, PartialEq)]
pub struct ImageSelectUpdate {
    pub options: Vec<ImageOption>,
    pub disabled: bool,
    pub selected: String,
}

/// Update for a select without a recipe: placeholder only, control disabled.
pub fn cleared_update() -> ImageSelectUpdate {
    ImageSelectUpdate {
        options: vec![ImageOption::placeholder()],
        disabled: true,
        selected: String::new(),
    }
}

/// Placeholder plus one option per image, labeled like "Image 1 - a.jpg".
/// Server order is preserved.
pub fn build_image_options(images: &[RecipeImage]) -> Vec<ImageOption> {
    let mut options = vec![ImageOption::placeholder()];
    for image in images {
        options.push(ImageOption {
            value: image.id.to_string(),
            label: format!("Image {} - {}", image.order, file_name_from_url(&image.url)),
            url: Some(image.url.clone()),
        });
    }
    options
}

/// Keep the previous selection when its id is still offered, otherwise reset
/// to the placeholder.
pub fn restore_selection(previous: &str, options: &[ImageOption]) -> String {
    if !previous.is_empty() && options.iter().any(|o| o.value == previous) {
        previous.to_string()
    } else {
        String::new()
    }
}

/// URL backing the current selection, if any. The placeholder and the error
/// option carry no URL.
pub fn preview_url(options: &[ImageOption], selected: &str) -> Option<String> {
    if selected.is_empty() {
        return None;
    }
    options
        .iter()
        .find(|o| o.value == selected)
        .and_then(|o| o.url.clone())
}

/// State transition for a settled image fetch.
///
/// `issued` is the token stamped on the request when it went out and `latest`
/// the most recently issued one; a mismatch means a newer fetch superseded
/// this response, which must then leave the select untouched.
pub fn apply_images_response(
    latest: u64,
    issued: u64,
    previous_selection: &str,
    result: Result<Vec<RecipeImage>, String>,
) -> Option<ImageSelectUpdate> {
    if issued != latest {
        return None;
    }
    Some(match result {
        Ok(images) => {
            let options = build_image_options(&images);
            let selected = restore_selection(previous_selection, &options);
            ImageSelectUpdate {
                options,
                disabled: false,
                selected,
            }
        }
        Err(_) => ImageSelectUpdate {
            options: vec![ImageOption::load_error()],
            disabled: true,
            selected: String::new(),
        },
    })
}

/// Fetch the recipe list for the source select.
pub async fn fetch_recipes() -> Result<Vec<RecipeSummary>, String> {
    let url = format!("{}/recipes/recipe/", api_base());
    let response = Request::get(&url).send().await.map_err(|e| format!("{e}"))?;
    if !response.ok() {
        return Err(format!("HTTP {}", response.status()));
    }
    let text = response.text().await.map_err(|e| format!("{e}"))?;
    serde_json::from_str(&text).map_err(|e| format!("{e}"))
}

/// Fetch the images belonging to one recipe.
pub async fn fetch_recipe_images(recipe_id: i64) -> Result<Vec<RecipeImage>, String> {
    let url = format!("{}/recipes/recipe/{}/images/", api_base(), recipe_id);
    let response = Request::get(&url).send().await.map_err(|e| format!("{e}"))?;
    if !response.ok() {
        return Err(format!("HTTP {}", response.status()));
    }
    let text = response.text().await.map_err(|e| format!("{e}"))?;
    serde_json::from_str(&text).map_err(|e| format!("{e}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn image(id: i64, url: &str, order: i32) -> RecipeImage {
        RecipeImage {
            id,
            url: url.to_string(),
            order,
            recipe_id: 42,
            recipe_name: "Pancakes".to_string(),
        }
    }

    #[test]
    fn test_cleared_select_is_disabled_placeholder() {
        let update = cleared_update();
        assert!(update.disabled);
        assert_eq!(update.selected, "");
        assert_eq!(update.options.len(), 1);
        assert_eq!(update.options[0].label, "---------");
        assert_eq!(update.options[0].value, "");
        assert_eq!(preview_url(&update.options, &update.selected), None);
    }

    #[test]
    fn test_options_are_placeholder_plus_one_per_image() {
        let images = vec![image(7, "/m/a.jpg", 1), image(9, "/m/b.jpg", 2)];
        let options = build_image_options(&images);
        assert_eq!(options.len(), 3);
        assert_eq!(options[0].value, "");
        assert_eq!(options[0].label, "---------");
        assert_eq!(options[1].value, "7");
        assert_eq!(options[1].label, "Image 1 - a.jpg");
        assert_eq!(options[2].value, "9");
        assert_eq!(options[2].label, "Image 2 - b.jpg");
    }

    #[test]
    fn test_preview_follows_selection() {
        let options = build_image_options(&[image(7, "/m/a.jpg", 1)]);
        assert_eq!(preview_url(&options, "7"), Some("/m/a.jpg".to_string()));
        assert_eq!(preview_url(&options, ""), None);
        assert_eq!(preview_url(&options, "8"), None);
    }

    #[test]
    fn test_previous_selection_survives_refresh_when_still_offered() {
        let update = apply_images_response(
            1,
            1,
            "9",
            Ok(vec![image(7, "/m/a.jpg", 1), image(9, "/m/b.jpg", 2)]),
        )
        .unwrap();
        assert!(!update.disabled);
        assert_eq!(update.selected, "9");
    }

    #[test]
    fn test_previous_selection_resets_when_gone() {
        let update = apply_images_response(1, 1, "5", Ok(vec![image(7, "/m/a.jpg", 1)])).unwrap();
        assert_eq!(update.selected, "");
    }

    #[test]
    fn test_failed_fetch_disables_select_with_error_option() {
        let update = apply_images_response(1, 1, "7", Err("HTTP 500".to_string())).unwrap();
        assert!(update.disabled);
        assert_eq!(update.selected, "");
        assert_eq!(update.options.len(), 1);
        assert_eq!(update.options[0].label, "Error loading images");
        assert_eq!(preview_url(&update.options, &update.selected), None);
    }

    #[test]
    fn test_stale_response_is_dropped() {
        let late_ok = apply_images_response(2, 1, "", Ok(vec![image(7, "/m/a.jpg", 1)]));
        assert_eq!(late_ok, None);
        let late_err = apply_images_response(2, 1, "", Err("HTTP 500".to_string()));
        assert_eq!(late_err, None);
    }
}
