pub mod details;

pub use details::CarouselItemForm;
