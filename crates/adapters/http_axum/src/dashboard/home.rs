//! Landing page with the hero section.

use std::sync::Arc;

use askama::Template;
use axum::extract::State;
use axum::response::{IntoResponse, Response};

use rescuehub_app::hero_controller::HeroController;
use rescuehub_app::ports::{DogRepository, OrganizationRepository};
use rescuehub_app::reporting::TracingReporter;
use rescuehub_domain::dog::PreviewDog;
use rescuehub_domain::hero::{
    DOGS_PATH, DONATE_PATH, HeroState, PreviewPanel, copy, preview_panel,
};

use super::{CardView, render};
use crate::state::AppState;

/// One counter of the statistics panel.
pub struct CounterView {
    pub label: &'static str,
    pub value: u64,
}

/// The statistics panel, one variant per hero state.
pub enum StatsPanel {
    Loading,
    Failed(String),
    Loaded(Vec<CounterView>),
}

/// A plain text link.
pub struct LinkView {
    pub href: &'static str,
    pub label: &'static str,
}

/// Everything the hero template needs.
pub struct HeroView {
    pub headline: &'static str,
    pub subheadline: &'static str,
    pub browse_href: &'static str,
    pub browse_label: &'static str,
    pub donate_href: &'static str,
    pub donate_label: &'static str,
    pub loading_label: &'static str,
    pub retry_label: &'static str,
    pub panel: StatsPanel,
    pub cards: Vec<CardView>,
    /// Link shown instead of cards when there are no preview dogs.
    pub fallback: Option<LinkView>,
}

impl HeroView {
    #[must_use]
    pub fn new(state: &HeroState, dogs: &[PreviewDog]) -> Self {
        let panel = match state {
            HeroState::Loading => StatsPanel::Loading,
            HeroState::Failed(message) => StatsPanel::Failed(message.clone()),
            HeroState::Loaded(stats) => StatsPanel::Loaded(
                stats
                    .counters()
                    .iter()
                    .map(|counter| CounterView {
                        label: counter.label,
                        value: counter.value,
                    })
                    .collect(),
            ),
        };
        let (cards, fallback) = match preview_panel(dogs) {
            PreviewPanel::Cards(slots) => (
                slots
                    .iter()
                    .map(|slot| CardView::new(slot.dog, slot.priority))
                    .collect(),
                None,
            ),
            PreviewPanel::BrowseLink { href, label } => (Vec::new(), Some(LinkView { href, label })),
        };
        Self {
            headline: copy::HEADLINE,
            subheadline: copy::SUBHEADLINE,
            browse_href: DOGS_PATH,
            browse_label: copy::BROWSE_CTA,
            donate_href: DONATE_PATH,
            donate_label: copy::DONATE_CTA,
            loading_label: copy::LOADING,
            retry_label: copy::RETRY,
            panel,
            cards,
            fallback,
        }
    }
}

/// Home page template.
#[derive(Template)]
#[template(path = "home.html")]
pub struct HomeTemplate {
    hero: HeroView,
}

impl IntoResponse for HomeTemplate {
    fn into_response(self) -> Response {
        render(&self)
    }
}

/// `GET /`: landing page.
///
/// The statistics fetch runs to completion before rendering, so visitors
/// never see the loading state here. Preview dogs are best effort: on error
/// the hero falls back to the listing link.
pub async fn index<DR, OR>(State(state): State<AppState<DR, OR>>) -> HomeTemplate
where
    DR: DogRepository + Send + Sync + 'static,
    OR: OrganizationRepository + Send + Sync + 'static,
{
    let dogs = match state.dog_service.preview(None).await {
        Ok(dogs) => dogs,
        Err(err) => {
            tracing::warn!(error = %err, "preview dogs unavailable");
            Vec::new()
        }
    };

    let mut hero =
        HeroController::mount(Arc::clone(&state.statistics_service), TracingReporter, None);
    hero.load().await;

    HomeTemplate {
        hero: HeroView::new(hero.state(), &dogs),
    }
}
