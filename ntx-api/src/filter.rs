//! Trip filter and its query-string encoding.

use log::warn;

/// Boroughs offered by the filter dropdown.
pub const BOROUGHS: [&str; 6] = [
    "Manhattan",
    "Brooklyn",
    "Queens",
    "Bronx",
    "Staten Island",
    "EWR",
];

/// Filter applied to `GET /trips`. `None` means "all".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Filter {
    pub borough: Option<String>,
    pub hour: Option<u8>,
}

impl Filter {
    pub fn new(borough: Option<String>, hour: Option<u8>) -> Self {
        Self {
            borough: borough.filter(|b| !b.trim().is_empty()),
            hour: hour.filter(|h| *h < 24),
        }
    }

    /// Build a filter from the raw dropdown values, where an empty string
    /// means "all". An hour that is not plain digits in 0-23 is ignored.
    pub fn from_selection(borough: &str, hour: &str) -> Self {
        let borough = borough.trim();
        let hour = hour.trim();

        let parsed_hour = if hour.is_empty() {
            None
        } else {
            match hour.parse::<u8>() {
                Ok(h) if h < 24 && hour.bytes().all(|b| b.is_ascii_digit()) => Some(h),
                _ => {
                    warn!("Ignoring invalid hour filter {:?}", hour);
                    None
                }
            }
        };

        Self {
            borough: (!borough.is_empty()).then(|| borough.to_string()),
            hour: parsed_hour,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.borough.is_none() && self.hour.is_none()
    }

    /// Query parameters for this filter, `borough` before `hour`.
    /// Unset fields are left out rather than sent empty.
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::with_capacity(2);
        if let Some(borough) = &self.borough {
            pairs.push(("borough", borough.clone()));
        }
        if let Some(hour) = self.hour {
            pairs.push(("hour", hour.to_string()));
        }
        pairs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_selection_is_empty_filter() {
        let filter = Filter::from_selection("", "");
        assert!(filter.is_empty());
        assert!(filter.query_pairs().is_empty());
    }

    #[test]
    fn hour_zero_is_a_real_filter() {
        let filter = Filter::from_selection("", "0");
        assert_eq!(filter.hour, Some(0));
        assert_eq!(filter.query_pairs(), vec![("hour", "0".to_string())]);
    }

    #[test]
    fn both_fields_in_stable_order() {
        let filter = Filter::from_selection("Brooklyn", "17");
        assert_eq!(
            filter.query_pairs(),
            vec![("borough", "Brooklyn".to_string()), ("hour", "17".to_string())]
        );
    }

    #[test]
    fn invalid_hour_means_all_hours() {
        assert_eq!(Filter::from_selection("Queens", "24").hour, None);
        assert_eq!(Filter::from_selection("Queens", "noon").hour, None);
        assert_eq!(Filter::from_selection("Queens", "+5").hour, None);
        assert_eq!(Filter::from_selection("Queens", "-0").hour, None);
        assert_eq!(
            Filter::from_selection("Queens", "noon").borough.as_deref(),
            Some("Queens")
        );
    }

    #[test]
    fn new_drops_blank_borough_and_bad_hour() {
        let filter = Filter::new(Some("  ".to_string()), Some(30));
        assert!(filter.is_empty());
    }
}
