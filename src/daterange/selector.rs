use std::sync::{Arc, Mutex};

use anyhow::{bail, Result};
use chrono::{Duration, NaiveDate, Utc};
use log::debug;
use tokio::sync::watch;

use super::RANGE_SEPARATOR;

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Inclusive calendar-date pair with `from <= to`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    pub from: NaiveDate,
    pub to: NaiveDate,
}

impl DateRange {
    /// Window ending today and covering `days` calendar days inclusive,
    /// e.g. 90 days resolves to `[today - 89d, today]`.
    pub fn last_days(days: u32, today: NaiveDate) -> Self {
        Self {
            from: today - Duration::days(i64::from(days.saturating_sub(1))),
            to: today,
        }
    }

    /// Distance between the endpoints in days (0 for a single-day range).
    pub fn span_days(&self) -> i64 {
        (self.to - self.from).num_days()
    }

    /// The raw textual form emitted to downstream parsing:
    /// two `YYYY-MM-DD` dates joined by `" - "`.
    pub fn to_raw(&self) -> String {
        format!(
            "{}{}{}",
            self.from.format(DATE_FORMAT),
            RANGE_SEPARATOR,
            self.to.format(DATE_FORMAT)
        )
    }
}

/// Named quick-picks shown next to the calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuickRange {
    LastWeek,
    Last30Days,
    Last3Months,
    Last6Months,
    LastYear,
}

impl QuickRange {
    pub const ALL: [QuickRange; 5] = [
        QuickRange::LastWeek,
        QuickRange::Last30Days,
        QuickRange::Last3Months,
        QuickRange::Last6Months,
        QuickRange::LastYear,
    ];

    pub fn days(self) -> u32 {
        match self {
            QuickRange::LastWeek => 7,
            QuickRange::Last30Days => 30,
            QuickRange::Last3Months => 90,
            QuickRange::Last6Months => 180,
            QuickRange::LastYear => 365,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            QuickRange::LastWeek => "Síðasta vika",
            QuickRange::Last30Days => "Síðustu 30 dagar",
            QuickRange::Last3Months => "Síðustu 3 mánuðir",
            QuickRange::Last6Months => "Síðustu 6 mánuðir",
            QuickRange::LastYear => "Síðasta ár",
        }
    }

    /// Each quick range resolves to `(today - N days, today)`.
    pub fn resolve(self, today: NaiveDate) -> DateRange {
        DateRange {
            from: today - Duration::days(i64::from(self.days())),
            to: today,
        }
    }
}

/// Owns the displayed range and republishes every committed change as a raw
/// range string on a watch channel. Only span length is validated here;
/// downstream parsing handles everything else.
#[derive(Clone)]
pub struct DateRangeSelector {
    range: Arc<Mutex<DateRange>>,
    max_span_days: i64,
    change_tx: Arc<watch::Sender<String>>,
}

impl DateRangeSelector {
    pub fn new(initial: DateRange, max_span_days: u32) -> Result<Self> {
        let max_span_days = i64::from(max_span_days);
        validate(&initial, max_span_days)?;

        let (change_tx, _) = watch::channel(initial.to_raw());
        Ok(Self {
            range: Arc::new(Mutex::new(initial)),
            max_span_days,
            change_tx: Arc::new(change_tx),
        })
    }

    pub fn current(&self) -> DateRange {
        *self.range.lock().unwrap()
    }

    pub fn current_raw(&self) -> String {
        self.current().to_raw()
    }

    /// Commit a manual edit. Rejected edits leave the displayed range and
    /// the change channel untouched.
    pub fn set_range(&self, from: NaiveDate, to: NaiveDate) -> Result<()> {
        let next = DateRange { from, to };
        validate(&next, self.max_span_days)?;

        *self.range.lock().unwrap() = next;
        self.emit(next);
        Ok(())
    }

    /// Commit one of the named quick-picks, anchored at today.
    pub fn apply_quick(&self, quick: QuickRange) -> Result<()> {
        let resolved = quick.resolve(Utc::now().date_naive());
        self.set_range(resolved.from, resolved.to)
    }

    /// Change notifications carrying the raw two-token range string.
    pub fn subscribe(&self) -> watch::Receiver<String> {
        self.change_tx.subscribe()
    }

    fn emit(&self, range: DateRange) {
        let raw = range.to_raw();
        debug!("date range changed: {raw}");
        self.change_tx.send_replace(raw);
    }
}

fn validate(range: &DateRange, max_span_days: i64) -> Result<()> {
    if range.from > range.to {
        bail!("range start {} is after end {}", range.from, range.to);
    }
    if range.span_days() > max_span_days {
        bail!(
            "range spans {} days, maximum is {}",
            range.span_days(),
            max_span_days
        );
    }
    Ok(())
}
