use crate::domain::carousel_item::ui::CarouselItemForm;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    view! {
        <div style="max-width: 720px; margin: 0 auto; padding: 20px;">
            <h2 style="margin: 0 0 16px 0; font-size: 18px;">"Carousel item"</h2>
            <CarouselItemForm />
        </div>
    }
}
