//! Dashboard tab identifiers.

/// The five dashboard tabs in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DashboardTab {
    /// Sentiment counts per brand.
    #[default]
    Counts,
    /// Sentiment percentage distribution per brand.
    Distribution,
    /// Raw filtered review listing.
    Reviews,
    /// True versus predicted label comparison.
    Accuracy,
    /// Word frequencies over the filtered text.
    TopWords,
}

impl DashboardTab {
    /// All tabs in display order.
    pub const ALL: [Self; 5] = [
        Self::Counts,
        Self::Distribution,
        Self::Reviews,
        Self::Accuracy,
        Self::TopWords,
    ];

    /// Returns the tab title shown in the tab bar.
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Counts => "Counts",
            Self::Distribution => "Distribution",
            Self::Reviews => "Reviews",
            Self::Accuracy => "Accuracy",
            Self::TopWords => "Top Words",
        }
    }

    /// Returns the 1-based key used to jump directly to this tab.
    #[must_use]
    pub const fn hotkey(self) -> char {
        match self {
            Self::Counts => '1',
            Self::Distribution => '2',
            Self::Reviews => '3',
            Self::Accuracy => '4',
            Self::TopWords => '5',
        }
    }

    /// Returns the next tab, wrapping at the end.
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::Counts => Self::Distribution,
            Self::Distribution => Self::Reviews,
            Self::Reviews => Self::Accuracy,
            Self::Accuracy => Self::TopWords,
            Self::TopWords => Self::Counts,
        }
    }

    /// Returns the previous tab, wrapping at the start.
    #[must_use]
    pub const fn prev(self) -> Self {
        match self {
            Self::Counts => Self::TopWords,
            Self::Distribution => Self::Counts,
            Self::Reviews => Self::Distribution,
            Self::Accuracy => Self::Reviews,
            Self::TopWords => Self::Accuracy,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn next_and_prev_are_inverse() {
        for tab in DashboardTab::ALL {
            assert_eq!(tab.next().prev(), tab);
            assert_eq!(tab.prev().next(), tab);
        }
    }

    #[test]
    fn cycling_visits_every_tab() {
        let mut tab = DashboardTab::Counts;
        let mut seen = Vec::new();
        for _ in 0..DashboardTab::ALL.len() {
            seen.push(tab);
            tab = tab.next();
        }
        assert_eq!(seen, DashboardTab::ALL);
        assert_eq!(tab, DashboardTab::Counts);
    }
}
