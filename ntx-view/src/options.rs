//! Options for the filter dropdowns.

use ntx_api::BOROUGHS;

/// A `<option>` value/label pair. An empty value means "all".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

impl SelectOption {
    fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }
}

/// "All boroughs" followed by the fixed borough list.
pub fn borough_options() -> Vec<SelectOption> {
    std::iter::once(SelectOption::new("", "All Boroughs"))
        .chain(BOROUGHS.iter().map(|b| SelectOption::new(*b, *b)))
        .collect()
}

/// "All hours" followed by one entry per hour, `"h:00 - h:59"`.
pub fn hour_options() -> Vec<SelectOption> {
    std::iter::once(SelectOption::new("", "All Hours"))
        .chain((0..24).map(|h| SelectOption::new(h.to_string(), format!("{h}:00 - {h}:59"))))
        .collect()
}
