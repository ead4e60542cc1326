//! Hero controller: drives the hero state machine against the ports.
//!
//! The controller is mounted with optional pre-fetched statistics. Without
//! them it needs exactly one fetch ([`HeroController::load`]); after a
//! failure the visitor may [`retry`](HeroController::retry) as often as they
//! like. Every failure is reported with its raw message while the visible
//! state only ever carries the generic
//! [`STATISTICS_UNAVAILABLE`](rescuehub_domain::hero::STATISTICS_UNAVAILABLE)
//! text.

use rescuehub_domain::hero::{
    FetchTicket, HeroMachine, HeroState, Resolution, STATISTICS_ERROR_LABEL,
};
use rescuehub_domain::statistics::Statistics;

use crate::ports::{ErrorReporter, StatisticsProvider};
use crate::reporting::describe;

/// Runs one hero section.
pub struct HeroController<P, R> {
    provider: P,
    reporter: R,
    machine: HeroMachine,
}

impl<P: StatisticsProvider, R: ErrorReporter> HeroController<P, R> {
    /// Mount a hero, showing `initial` statistics right away when supplied.
    pub fn mount(provider: P, reporter: R, initial: Option<Statistics>) -> Self {
        Self {
            provider,
            reporter,
            machine: HeroMachine::new(initial),
        }
    }

    #[must_use]
    pub fn state(&self) -> &HeroState {
        self.machine.state()
    }

    #[must_use]
    pub fn needs_fetch(&self) -> bool {
        self.machine.needs_fetch()
    }

    /// Issue the on-mount fetch if the hero still needs one.
    ///
    /// Returns `None` when nothing was fetched (pre-fetched statistics, or
    /// unmounted).
    pub async fn load(&mut self) -> Option<Resolution> {
        if !self.machine.needs_fetch() {
            return None;
        }
        let ticket = self.machine.start_fetch()?;
        Some(self.run(ticket).await)
    }

    /// Re-issue the fetch after a failure. Returns `None` unless the hero was
    /// in the failed state.
    pub async fn retry(&mut self) -> Option<Resolution> {
        let ticket = self.machine.retry()?;
        tracing::debug!("retrying statistics fetch");
        Some(self.run(ticket).await)
    }

    /// Take the hero off screen; any later completion is ignored.
    pub fn unmount(&mut self) {
        self.machine.unmount();
    }

    /// Consume the controller, keeping only what is displayed.
    #[must_use]
    pub fn into_state(self) -> HeroState {
        self.machine.state().clone()
    }

    async fn run(&mut self, ticket: FetchTicket) -> Resolution {
        let result = self.provider.fetch_statistics().await;
        if let Err(err) = &result {
            self.reporter.report(STATISTICS_ERROR_LABEL, &describe(err));
        }
        let resolution = self.machine.resolve(ticket, result);
        if resolution == Resolution::Discarded {
            tracing::debug!("discarded stale statistics result");
        }
        resolution
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::testing::{RecordingReporter, ScriptedProvider};
    use rescuehub_domain::hero::STATISTICS_UNAVAILABLE;

    fn stats() -> Statistics {
        Statistics {
            total_dogs: 58,
            total_organizations: 4,
            countries: vec!["DE".to_string(), "RO".to_string(), "UK".to_string()],
        }
    }

    fn setup(
        responses: Vec<Result<Statistics, String>>,
        initial: Option<Statistics>,
    ) -> (
        HeroController<Arc<ScriptedProvider>, Arc<RecordingReporter>>,
        Arc<ScriptedProvider>,
        Arc<RecordingReporter>,
    ) {
        let provider = Arc::new(ScriptedProvider::new(responses));
        let reporter = Arc::new(RecordingReporter::default());
        let controller = HeroController::mount(provider.clone(), reporter.clone(), initial);
        (controller, provider, reporter)
    }

    #[tokio::test]
    async fn should_not_fetch_when_initial_statistics_supplied() {
        let (mut controller, provider, _) = setup(vec![Ok(Statistics::default())], Some(stats()));

        assert_eq!(controller.state(), &HeroState::Loaded(stats()));
        assert_eq!(controller.load().await, None);
        assert_eq!(provider.calls(), 0);
    }

    #[tokio::test]
    async fn should_load_then_show_statistics() {
        let (mut controller, provider, reporter) = setup(vec![Ok(stats())], None);
        assert!(controller.state().is_loading());

        assert_eq!(controller.load().await, Some(Resolution::Applied));

        assert_eq!(controller.state().statistics(), Some(&stats()));
        assert_eq!(provider.calls(), 1);
        assert!(reporter.reports().is_empty());
    }

    #[tokio::test]
    async fn should_fetch_only_once_per_mount() {
        let (mut controller, provider, _) = setup(vec![Ok(stats())], None);

        controller.load().await;
        controller.load().await;

        assert_eq!(provider.calls(), 1);
    }

    #[tokio::test]
    async fn should_report_raw_error_and_show_fixed_message() {
        let (mut controller, _, reporter) =
            setup(vec![Err("connection reset by peer".to_string())], None);

        controller.load().await;

        assert_eq!(controller.state().error(), Some(STATISTICS_UNAVAILABLE));
        assert_eq!(
            reporter.reports(),
            vec![(
                STATISTICS_ERROR_LABEL.to_string(),
                "storage error: connection reset by peer".to_string()
            )]
        );
    }

    #[tokio::test]
    async fn should_refetch_on_retry_after_failure() {
        let (mut controller, provider, _) =
            setup(vec![Err("timeout".to_string()), Ok(stats())], None);
        controller.load().await;

        assert_eq!(controller.retry().await, Some(Resolution::Applied));

        assert_eq!(provider.calls(), 2);
        assert_eq!(controller.into_state(), HeroState::Loaded(stats()));
    }

    #[tokio::test]
    async fn should_report_every_failed_retry() {
        let (mut controller, provider, reporter) = setup(vec![Err("down".to_string())], None);
        controller.load().await;
        controller.retry().await;
        controller.retry().await;

        assert_eq!(provider.calls(), 3);
        assert_eq!(reporter.reports().len(), 3);
        assert!(controller.state().error().is_some());
    }

    #[tokio::test]
    async fn should_ignore_retry_when_loaded() {
        let (mut controller, provider, _) = setup(vec![Ok(stats())], None);
        controller.load().await;

        assert_eq!(controller.retry().await, None);
        assert_eq!(provider.calls(), 1);
    }

    #[tokio::test]
    async fn should_not_fetch_after_unmount() {
        let (mut controller, provider, _) = setup(vec![Ok(stats())], None);
        controller.unmount();

        assert_eq!(controller.load().await, None);
        assert_eq!(provider.calls(), 0);
    }
}
