//! Summary stat cards.

use crate::format;
use ntx_api::SummaryStats;
use serde::Serialize;

/// Shown in every card when the summary could not be fetched.
pub const ERROR_MARKER: &str = "Error";

/// Display text for the three summary cards.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SummaryView {
    pub total_trips: String,
    pub average_fare: String,
    pub average_distance: String,
}

impl SummaryView {
    /// Placeholder shown before the first fetch completes.
    pub fn loading() -> Self {
        Self {
            total_trips: "...".to_string(),
            average_fare: "...".to_string(),
            average_distance: "...".to_string(),
        }
    }

    pub fn error() -> Self {
        Self {
            total_trips: ERROR_MARKER.to_string(),
            average_fare: ERROR_MARKER.to_string(),
            average_distance: ERROR_MARKER.to_string(),
        }
    }

    pub fn render(stats: Option<&SummaryStats>) -> Self {
        match stats {
            Some(stats) => Self {
                total_trips: format::group_thousands(stats.total_trips),
                average_fare: format::currency(stats.average_fare),
                average_distance: format::miles(stats.average_distance),
            },
            None => Self::error(),
        }
    }

    pub fn is_error(&self) -> bool {
        self.total_trips == ERROR_MARKER
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_formatted_values() {
        let stats = SummaryStats {
            total_trips: 1_234_567,
            average_fare: 12.5,
            average_distance: 3.2,
        };
        let view = SummaryView::render(Some(&stats));
        assert_eq!(view.total_trips, "1,234,567");
        assert_eq!(view.average_fare, "$12.5");
        assert_eq!(view.average_distance, "3.2 mi");
        assert!(!view.is_error());
    }

    #[test]
    fn unavailable_marks_every_field() {
        let view = SummaryView::render(None);
        assert_eq!(view.total_trips, "Error");
        assert_eq!(view.average_fare, "Error");
        assert_eq!(view.average_distance, "Error");
        assert!(view.is_error());
    }
}
