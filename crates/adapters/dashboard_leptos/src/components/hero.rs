//! Hero section of the landing page.
//!
//! The statistics panel is driven by [`HeroMachine`]: pre-fetched statistics
//! render immediately, otherwise one request goes out when the hero is
//! mounted. Responses that arrive for a superseded request, or after the hero
//! left the page, are dropped.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;
use rescuehub_domain::dog::PreviewDog;
use rescuehub_domain::hero::{
    DOGS_PATH, DONATE_PATH, FetchTicket, HeroMachine, HeroState, PreviewPanel, Resolution,
    STATISTICS_ERROR_LABEL, copy, preview_panel,
};
use rescuehub_domain::statistics::Statistics;

use crate::api;
use crate::components::{AnimatedCounter, DogPreviewCard, Loading};

fn report(label: &str, message: &str) {
    leptos::logging::error!("{label}: {message}");
}

#[component]
pub fn Hero(
    /// Statistics already known to the page; skips the request.
    #[prop(optional)]
    initial_statistics: Option<Statistics>,
    /// Dogs offered as preview cards, `None` while they are still loading.
    /// Only the first three are shown.
    #[prop(into)]
    preview_dogs: Signal<Option<Vec<PreviewDog>>>,
) -> impl IntoView {
    let mut hero = HeroMachine::new(initial_statistics);
    let pending = if hero.needs_fetch() {
        hero.start_fetch()
    } else {
        None
    };
    let machine = RwSignal::new(hero);

    let run = move |ticket: FetchTicket| {
        spawn_local(async move {
            let result = api::fetch_statistics().await;
            if let Err(err) = &result {
                report(STATISTICS_ERROR_LABEL, &err.message);
            }
            let resolution = machine.try_update(|m| m.resolve(ticket, result));
            if resolution != Some(Resolution::Applied) {
                leptos::logging::debug_warn!("dropping stale statistics response");
            }
        });
    };

    if let Some(ticket) = pending {
        run(ticket);
    }
    on_cleanup(move || {
        machine.try_update(HeroMachine::unmount);
    });

    let retry = move |_| {
        if let Some(ticket) = machine.try_update(HeroMachine::retry).flatten() {
            run(ticket);
        }
    };

    let state = Memo::new(move |_| machine.with(|m| m.state().clone()));
    let stats_panel = move || match state.get() {
        HeroState::Loading => view! { <Loading message=copy::LOADING/> }.into_any(),
        HeroState::Failed(message) => view! {
            <div class="hero-stats-error" role="alert">
                <p>{message}</p>
                <button type="button" on:click=retry>{copy::RETRY}</button>
            </div>
        }
        .into_any(),
        HeroState::Loaded(stats) => view! {
            <div class="hero-stats">
                {stats
                    .counters()
                    .into_iter()
                    .map(|counter| view! {
                        <AnimatedCounter label=counter.label target=counter.value/>
                    })
                    .collect_view()}
            </div>
        }
        .into_any(),
    };

    let previews = move || {
        let Some(dogs) = preview_dogs.get() else {
            return view! { <div class="hero-previews"><Loading/></div> }.into_any();
        };
        match preview_panel(&dogs) {
            PreviewPanel::Cards(slots) => {
                let cards: Vec<(usize, bool, PreviewDog)> = slots
                    .iter()
                    .map(|slot| (slot.index, slot.priority, slot.dog.clone()))
                    .collect();
                view! {
                    <div class="hero-previews">
                        <For
                            each=move || cards.clone()
                            key=|(_, _, dog)| dog.id
                            children=|(index, priority, dog)| view! {
                                <DogPreviewCard dog=dog index=index priority=priority/>
                            }
                        />
                    </div>
                }
                .into_any()
            }
            PreviewPanel::BrowseLink { href, label } => view! {
                <p class="hero-previews-empty"><A href=href>{label}</A></p>
            }
            .into_any(),
        }
    };

    view! {
        <section class="hero" aria-labelledby="hero-heading">
            <div class="hero-copy">
                <h1 id="hero-heading">{copy::HEADLINE}</h1>
                <p>{copy::SUBHEADLINE}</p>
                <div class="hero-actions">
                    <a class="btn btn-primary" href=DOGS_PATH>{copy::BROWSE_CTA}</a>
                    <a class="btn btn-secondary" href=DONATE_PATH>{copy::DONATE_CTA}</a>
                </div>
                {stats_panel}
            </div>
            {previews}
        </section>
    }
}
