use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn Nav() -> impl IntoView {
    view! {
        <nav>
            <ul>
                <li><A href="/">"Home"</A></li>
                <li><A href="/dogs">"Dogs"</A></li>
                <li><A href="/donate">"Donate"</A></li>
            </ul>
        </nav>
    }
}
