use leptos::prelude::*;
use leptos_router::{
    components::{Route, Router, Routes},
    path,
};

pub mod api;
mod components;
mod pages;

use components::Nav;
use pages::{DogDetail, Dogs, Donate, Home, NotFound};

/// Root application component.
#[component]
pub fn App() -> impl IntoView {
    view! {
        <Router>
            <Nav/>
            <main>
                <Routes fallback=|| view! { <NotFound/> }>
                    <Route path=path!("/") view=Home/>
                    <Route path=path!("dogs") view=Dogs/>
                    <Route path=path!("dogs/:slug") view=DogDetail/>
                    <Route path=path!("donate") view=Donate/>
                </Routes>
            </main>
        </Router>
    }
}
