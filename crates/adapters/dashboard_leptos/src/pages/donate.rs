use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn Donate() -> impl IntoView {
    view! {
        <div>
            <h1>"Support Our Mission"</h1>
            <p>"Every donation pays for transport, vet care and foster homes for dogs waiting to be adopted."</p>
            <p>"Partner organizations receive funds directly; we keep no share for ourselves."</p>
            <p><A href="/dogs">"Meet the dogs you are helping"</A></p>
        </div>
    }
}
