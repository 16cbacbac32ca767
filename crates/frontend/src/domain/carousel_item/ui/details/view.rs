use super::view_model::CarouselItemFormVm;
use leptos::prelude::*;

const SELECT_STYLE: &str = "width: 100%; padding: 6px 10px; border: 1px solid #ccc; border-radius: 4px; font-size: 0.875rem; background: #fff;";
const LABEL_STYLE: &str = "font-size: 13px; display: block; margin-bottom: 4px;";

/// Admin form widget: pick a recipe, then one of its images, with a thumbnail
/// preview of the chosen image. Initial ids come from the hosting form when
/// an existing carousel item is edited.
#[component]
pub fn CarouselItemForm(
    #[prop(optional)] initial_recipe: Option<i64>,
    #[prop(optional)] initial_image: Option<i64>,
) -> impl IntoView {
    let vm = CarouselItemFormVm::new();
    vm.init(initial_recipe, initial_image);

    view! {
        <div class="carousel-item-form">
            {move || vm.error.get().map(|e| view! {
                <div style="padding: 8px 12px; margin-bottom: 10px; background: #fdecea; border: 1px solid #f5c6cb; border-radius: 6px; color: #b71c1c; font-size: 13px;">
                    {e}
                </div>
            })}

            <div style="margin-bottom: 12px;">
                <label style=LABEL_STYLE>"Recipe"</label>
                <select
                    prop:value=move || vm.recipe_id.get()
                    on:change=move |ev| vm.on_recipe_changed(event_target_value(&ev))
                    style=SELECT_STYLE
                >
                    <option value="">"---------"</option>
                    {move || {
                        // `selected` keeps the choice visible when the option
                        // list arrives after the value was set (edit mode).
                        let current = vm.recipe_id.get();
                        vm.recipes.get().into_iter().map(|recipe| {
                            let value = recipe.id.to_string();
                            let is_selected = value == current;
                            view! {
                                <option value={value} selected={is_selected}>{recipe.name}</option>
                            }
                        }).collect_view()
                    }}
                </select>
            </div>

            <div style="margin-bottom: 12px;">
                <label style=LABEL_STYLE>"Image"</label>
                <select
                    prop:value=move || vm.selected_image.get()
                    prop:disabled=move || vm.images_disabled.get()
                    on:change=move |ev| vm.on_image_changed(event_target_value(&ev))
                    style=SELECT_STYLE
                >
                    {move || {
                        let current = vm.selected_image.get();
                        vm.image_options.get().into_iter().map(|option| {
                            let is_selected = option.value == current;
                            view! {
                                <option value={option.value.clone()} selected={is_selected}>{option.label}</option>
                            }
                        }).collect_view()
                    }}
                </select>
            </div>

            <div class="field-image_preview">
                <label style=LABEL_STYLE>"Preview"</label>
                {move || match vm.preview_url() {
                    Some(url) => view! {
                        <img src={url} alt="Preview" style="max-height: 100px; max-width: 100px;" />
                    }.into_any(),
                    None => view! {
                        <span style="color: #666;">"No image"</span>
                    }.into_any(),
                }}
            </div>
        </div>
    }
}
