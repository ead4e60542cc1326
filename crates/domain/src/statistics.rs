//! Statistics: aggregate counts shown on the landing page.

use serde::{Deserialize, Serialize};

/// Aggregate counts describing dogs, organizations and countries served.
///
/// Received whole from the statistics provider and never mutated by
/// consumers; a refetch replaces the value wholesale.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Statistics {
    pub total_dogs: u64,
    pub total_organizations: u64,
    /// Country identifiers in ascending order. Only the length is displayed.
    pub countries: Vec<String>,
}

impl Statistics {
    /// Number of distinct countries, as shown by the third counter.
    #[must_use]
    pub fn country_count(&self) -> u64 {
        self.countries.len() as u64
    }

    /// The three counter values in display order: dogs, organizations, countries.
    #[must_use]
    pub fn counters(&self) -> [Counter; 3] {
        [
            Counter {
                label: "Dogs Available",
                value: self.total_dogs,
            },
            Counter {
                label: "Rescue Organizations",
                value: self.total_organizations,
            },
            Counter {
                label: "Countries",
                value: self.country_count(),
            },
        ]
    }
}

/// One labelled number of the statistics panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Counter {
    pub label: &'static str,
    pub value: u64,
}
