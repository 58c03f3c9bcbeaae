//! Fixed Icelandic locale table handed to the date-range widget.

/// Labels and calendar names the date-range widget needs. The deployment
/// ships exactly one of these; it is data, not a localization framework.
#[derive(Debug, Clone)]
pub struct DateRangeLocale {
    pub format: &'static str,
    pub separator: &'static str,
    pub apply_label: &'static str,
    pub cancel_label: &'static str,
    pub custom_range_label: &'static str,
    pub day_names: [&'static str; 7],
    pub month_names: [&'static str; 12],
}

impl DateRangeLocale {
    pub fn icelandic() -> Self {
        Self {
            format: "%Y-%m-%d",
            separator: super::RANGE_SEPARATOR,
            apply_label: "Í lagi",
            cancel_label: "Hætta við",
            custom_range_label: "Veldu tímabil",
            day_names: ["Su", "Má", "Þr", "Mi", "Fi", "Fö", "La"],
            month_names: [
                "janúar",
                "febrúar",
                "mars",
                "apríl",
                "maí",
                "júní",
                "júlí",
                "ágúst",
                "september",
                "október",
                "nóvember",
                "desember",
            ],
        }
    }
}

impl Default for DateRangeLocale {
    fn default() -> Self {
        Self::icelandic()
    }
}
