mod animated_counter;
mod dog_preview_card;
mod hero;
mod loading;
mod nav;

pub use animated_counter::AnimatedCounter;
pub use dog_preview_card::DogPreviewCard;
pub use hero::Hero;
pub use loading::Loading;
pub use nav::Nav;
