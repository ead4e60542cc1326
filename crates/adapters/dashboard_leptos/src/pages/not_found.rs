use leptos::prelude::*;

/// 404 page displayed when no route matches.
#[component]
pub fn NotFound() -> impl IntoView {
    view! {
        <div class="not-found">
            <h1>"404 - Page Not Found"</h1>
            <p>"This page wandered off. Let's get you back on the trail."</p>
            <p>
                <a href="/">"Go back to home"</a>
            </p>
        </div>
    }
}
