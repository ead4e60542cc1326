use leptos::prelude::*;

use crate::api;
use crate::components::{DogPreviewCard, Loading};

/// Every available dog, newest first.
#[component]
pub fn Dogs() -> impl IntoView {
    let dogs = LocalResource::new(|| api::fetch_dogs(None));

    view! {
        <div>
            <h1>"Dogs Looking for a Home"</h1>
            <Suspense fallback=move || view! { <Loading message="Loading dogs\u{2026}"/> }>
                {move || {
                    dogs.read().as_ref().map(|result| match result {
                        Ok(list) if list.is_empty() => view! {
                            <p>"No dogs are waiting right now. Check back soon!"</p>
                        }.into_any(),
                        Ok(list) => view! {
                            <div class="dog-grid">
                                {list.iter().enumerate().map(|(index, dog)| view! {
                                    <DogPreviewCard dog=dog.clone() index=index priority={index == 0}/>
                                }).collect_view()}
                            </div>
                        }.into_any(),
                        Err(err) => view! {
                            <p class="error">{"Failed to load dogs: "} {err.to_string()}</p>
                        }.into_any(),
                    })
                }}
            </Suspense>
        </div>
    }
}
