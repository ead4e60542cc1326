use leptos::prelude::*;

use crate::api;
use crate::components::Hero;

/// Landing page: the hero with preview cards.
///
/// The hero mounts straight away and fetches its statistics while the
/// preview dogs are still on their way.
#[component]
pub fn Home() -> impl IntoView {
    let previews = LocalResource::new(|| api::fetch_preview_dogs(None));
    let dogs = Signal::derive(move || {
        previews.read().as_ref().map(|result| match result {
            Ok(dogs) => dogs.clone(),
            Err(err) => {
                leptos::logging::warn!("preview dogs unavailable: {err}");
                Vec::new()
            }
        })
    });

    view! { <Hero preview_dogs=dogs/> }
}
