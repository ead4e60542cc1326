//! Statistics port: where the hero gets its numbers from.

use std::future::Future;

use rescuehub_domain::error::RescueError;
use rescuehub_domain::statistics::Statistics;

/// Delivers a complete [`Statistics`] value.
pub trait StatisticsProvider {
    fn fetch_statistics(&self) -> impl Future<Output = Result<Statistics, RescueError>> + Send;
}

impl<T: StatisticsProvider + Send + Sync> StatisticsProvider for std::sync::Arc<T> {
    fn fetch_statistics(&self) -> impl Future<Output = Result<Statistics, RescueError>> + Send {
        (**self).fetch_statistics()
    }
}
