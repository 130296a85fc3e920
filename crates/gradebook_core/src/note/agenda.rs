//! Day strip navigation for the agenda view.

use chrono::{Days, NaiveDate};

/// Days shown on each side of the reference day.
pub const AGENDA_HALF_SPAN_DAYS: u64 = 4;

/// Selected day plus the reference day the visible strip is centered on.
///
/// Moving the strip does not change the selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AgendaCursor {
    reference: NaiveDate,
    selected: NaiveDate,
}

impl AgendaCursor {
    /// Centers the strip on `today` and selects it.
    pub fn new(today: NaiveDate) -> Self {
        Self {
            reference: today,
            selected: today,
        }
    }

    pub fn reference(&self) -> NaiveDate {
        self.reference
    }

    pub fn selected(&self) -> NaiveDate {
        self.selected
    }

    pub fn select(&mut self, day: NaiveDate) {
        self.selected = day;
    }

    pub fn is_selected(&self, day: NaiveDate) -> bool {
        self.selected == day
    }

    /// Shifts the strip one day back. Saturates at the minimum date.
    pub fn previous_day(&mut self) {
        if let Some(day) = self.reference.checked_sub_days(Days::new(1)) {
            self.reference = day;
        }
    }

    /// Shifts the strip one day forward. Saturates at the maximum date.
    pub fn next_day(&mut self) {
        if let Some(day) = self.reference.checked_add_days(Days::new(1)) {
            self.reference = day;
        }
    }

    /// The consecutive days `reference - 4 ..= reference + 4`.
    ///
    /// Near the ends of the supported date range the strip is shorter.
    pub fn visible_days(&self) -> Vec<NaiveDate> {
        let start = self
            .reference
            .checked_sub_days(Days::new(AGENDA_HALF_SPAN_DAYS))
            .unwrap_or(self.reference);
        let span = (2 * AGENDA_HALF_SPAN_DAYS + 1) as usize;
        start
            .iter_days()
            .take_while(|day| {
                day.signed_duration_since(self.reference).num_days()
                    <= AGENDA_HALF_SPAN_DAYS as i64
            })
            .take(span)
            .collect()
    }
}
