//! Dog detail page.

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_params_map;

use crate::api;
use crate::components::{DogPreviewCard, Loading};

#[component]
pub fn DogDetail() -> impl IntoView {
    let params = use_params_map();
    let slug = move || params.read().get("slug").unwrap_or_default();

    let dog = LocalResource::new(move || {
        let slug = slug();
        async move { api::fetch_dog_by_slug(&slug).await }
    });

    view! {
        <div>
            <Suspense fallback=move || view! { <Loading/> }>
                {move || {
                    dog.read().as_ref().map(|result| match result {
                        Ok(dog) => {
                            let country = dog.country.clone().unwrap_or_else(|| "\u{2014}".to_string());
                            view! {
                                <h1>{dog.name.clone()}</h1>
                                <DogPreviewCard dog=dog.clone() priority=true/>
                                <p><strong>"Country: "</strong> {country}</p>
                            }.into_any()
                        }
                        Err(err) => view! {
                            <p class="error">{"Failed to load dog: "} {err.to_string()}</p>
                        }.into_any(),
                    })
                }}
            </Suspense>

            <p><A href="/dogs">"\u{2190} Back to Dogs"</A></p>
        </div>
    }
}
