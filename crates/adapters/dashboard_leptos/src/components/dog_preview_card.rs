//! Small card presenting one adoptable dog.

use leptos::prelude::*;
use leptos_router::components::A;
use rescuehub_domain::dog::PreviewDog;

/// Card linking to the dog's detail page.
///
/// A prioritized card loads its image eagerly with high fetch priority; the
/// others load lazily.
#[component]
pub fn DogPreviewCard(
    dog: PreviewDog,
    /// Position in the surrounding list.
    #[prop(optional)]
    index: usize,
    #[prop(optional)] priority: bool,
) -> impl IntoView {
    let href = dog.href();
    let details = [dog.breed.as_deref(), dog.age_text.as_deref()]
        .into_iter()
        .flatten()
        .collect::<Vec<_>>()
        .join(" \u{00B7} ");
    let image = match dog.image_url.clone() {
        Some(src) => view! {
            <img
                src=src
                alt=dog.name.clone()
                loading=if priority { "eager" } else { "lazy" }
                fetchpriority=if priority { "high" } else { "auto" }
            />
        }
        .into_any(),
        None => view! { <div class="dog-card-placeholder" aria-hidden="true"></div> }.into_any(),
    };

    view! {
        <article class="dog-card" data-index=index data-key=dog.id.to_string()>
            <A href=href>
                {image}
                <div class="dog-card-body">
                    <h3>{dog.name.clone()}</h3>
                    {(!details.is_empty()).then(|| view! { <p class="dog-card-details">{details}</p> })}
                    <p class="dog-card-org">{dog.organization_name.clone()}</p>
                </div>
            </A>
        </article>
    }
}
