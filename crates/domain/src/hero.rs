//! Hero section behaviour shared by every renderer.
//!
//! The statistics panel is a three-state machine ([`HeroState`]) driven by a
//! single asynchronous fetch. [`HeroMachine`] owns the state together with
//! the bookkeeping that decides whether a finished fetch may still be applied:
//! every fetch is issued a [`FetchTicket`], and only the most recent ticket of
//! a still-mounted hero is honoured.
//!
//! The preview list is reduced to at most [`MAX_PREVIEW_CARDS`] slots by
//! [`preview_panel`], falling back to a link to the full listing.

use crate::dog::PreviewDog;
use crate::id::DogId;
use crate::statistics::Statistics;

/// Message shown to visitors whenever statistics cannot be loaded.
pub const STATISTICS_UNAVAILABLE: &str = "Unable to load statistics. Please try again later.";

/// Label attached to the raw error when a failed fetch is reported.
pub const STATISTICS_ERROR_LABEL: &str = "Failed to fetch statistics";

/// Maximum number of preview cards rendered by the hero.
pub const MAX_PREVIEW_CARDS: usize = 3;

/// Path of the full dogs listing.
pub const DOGS_PATH: &str = "/dogs";

/// Path of the donation page.
pub const DONATE_PATH: &str = "/donate";

/// Static marketing copy rendered by the hero.
pub mod copy {
    pub const HEADLINE: &str = "Every Dog Deserves a Second Chance";
    pub const SUBHEADLINE: &str = "We connect rescue organizations across borders with people \
        ready to open their homes. Browse dogs waiting for a family today.";
    pub const BROWSE_CTA: &str = "Find Your New Best Friend";
    pub const DONATE_CTA: &str = "Support Our Mission";
    pub const FALLBACK_LINK: &str = "Browse all available dogs";
    pub const RETRY: &str = "Try Again";
    pub const LOADING: &str = "Loading statistics\u{2026}";
}

/// What the statistics panel currently shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HeroState {
    /// A fetch is outstanding (or about to be issued).
    Loading,
    /// The last fetch failed; carries the user-facing message.
    Failed(String),
    /// Statistics are available.
    Loaded(Statistics),
}

impl HeroState {
    #[must_use]
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    #[must_use]
    pub fn statistics(&self) -> Option<&Statistics> {
        match self {
            Self::Loaded(stats) => Some(stats),
            _ => None,
        }
    }

    #[must_use]
    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Failed(message) => Some(message),
            _ => None,
        }
    }
}

/// Proof that a fetch was started; hand it back to [`HeroMachine::resolve`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchTicket(u64);

/// Outcome of handing a completed fetch back to the machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    /// The result replaced the current state.
    Applied,
    /// The hero was unmounted or a newer fetch superseded this one.
    Discarded,
}

/// The hero's statistics state machine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeroMachine {
    state: HeroState,
    generation: u64,
    in_flight: Option<u64>,
    mounted: bool,
}

impl HeroMachine {
    /// Mount a hero. Pre-fetched statistics are shown immediately and no
    /// fetch is needed; otherwise the hero starts in [`HeroState::Loading`].
    #[must_use]
    pub fn new(initial: Option<Statistics>) -> Self {
        let state = match initial {
            Some(stats) => HeroState::Loaded(stats),
            None => HeroState::Loading,
        };
        Self {
            state,
            generation: 0,
            in_flight: None,
            mounted: true,
        }
    }

    #[must_use]
    pub fn state(&self) -> &HeroState {
        &self.state
    }

    #[must_use]
    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    /// `true` when the hero is waiting for a fetch that has not been started.
    #[must_use]
    pub fn needs_fetch(&self) -> bool {
        self.mounted && self.state.is_loading() && self.in_flight.is_none()
    }

    /// Enter [`HeroState::Loading`] and issue a ticket for a new fetch.
    ///
    /// Any fetch still in flight is superseded. Returns `None` once unmounted.
    pub fn start_fetch(&mut self) -> Option<FetchTicket> {
        if !self.mounted {
            return None;
        }
        self.generation += 1;
        self.in_flight = Some(self.generation);
        self.state = HeroState::Loading;
        Some(FetchTicket(self.generation))
    }

    /// Manual retry: only allowed from [`HeroState::Failed`].
    pub fn retry(&mut self) -> Option<FetchTicket> {
        if matches!(self.state, HeroState::Failed(_)) {
            self.start_fetch()
        } else {
            None
        }
    }

    /// Apply the result of the fetch identified by `ticket`.
    ///
    /// Errors collapse to [`STATISTICS_UNAVAILABLE`]; the caller is expected
    /// to report the raw error separately.
    pub fn resolve<E>(&mut self, ticket: FetchTicket, result: Result<Statistics, E>) -> Resolution {
        if !self.mounted || self.in_flight != Some(ticket.0) {
            return Resolution::Discarded;
        }
        self.in_flight = None;
        self.state = match result {
            Ok(stats) => HeroState::Loaded(stats),
            Err(_) => HeroState::Failed(STATISTICS_UNAVAILABLE.to_string()),
        };
        Resolution::Applied
    }

    /// Remove the hero from display. Later completions are discarded.
    pub fn unmount(&mut self) {
        self.mounted = false;
        self.in_flight = None;
    }
}

/// One rendered preview card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PreviewSlot<'a> {
    /// Position in the supplied list.
    pub index: usize,
    /// Only the first card asks for prioritized image loading.
    pub priority: bool,
    pub dog: &'a PreviewDog,
}

impl PreviewSlot<'_> {
    /// Stable identity used for list diffing.
    #[must_use]
    pub fn key(&self) -> DogId {
        self.dog.id
    }
}

/// What the preview area of the hero renders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PreviewPanel<'a> {
    Cards(Vec<PreviewSlot<'a>>),
    /// No dogs were supplied: link to the full listing instead.
    BrowseLink {
        href: &'static str,
        label: &'static str,
    },
}

/// Select the first [`MAX_PREVIEW_CARDS`] dogs, in order.
#[must_use]
pub fn preview_panel(dogs: &[PreviewDog]) -> PreviewPanel<'_> {
    if dogs.is_empty() {
        return PreviewPanel::BrowseLink {
            href: DOGS_PATH,
            label: copy::FALLBACK_LINK,
        };
    }
    let slots = dogs
        .iter()
        .take(MAX_PREVIEW_CARDS)
        .enumerate()
        .map(|(index, dog)| PreviewSlot {
            index,
            priority: index == 0,
            dog,
        })
        .collect();
    PreviewPanel::Cards(slots)
}
