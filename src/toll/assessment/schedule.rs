use chrono::{NaiveTime, Timelike};
use serde::{Deserialize, Serialize};

/// A single tolled span of the day. Both bounds are exclusive: a pass at
/// exactly `start` or `end` does not belong to the band. Comparison happens
/// at minute resolution; seconds on a pass timestamp are ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TollBand {
    pub start: NaiveTime,
    pub end: NaiveTime,
    pub amount: u32,
}

impl TollBand {
    pub fn contains(&self, time: NaiveTime) -> bool {
        let minute = minute_of_day(time);
        minute > minute_of_day(self.start) && minute < minute_of_day(self.end)
    }
}

fn minute_of_day(time: NaiveTime) -> u32 {
    time.hour() * 60 + time.minute()
}

/// Time-of-day tariff table. Gaps between bands are free, so a lookup that
/// matches no band yields 0.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TariffSchedule {
    bands: Vec<TollBand>,
}

impl TariffSchedule {
    pub fn new(bands: Vec<TollBand>) -> Self {
        Self { bands }
    }

    /// The fixed schedule the congestion charge launched with. Bands with
    /// distinct amounts never contain the same minute, which keeps the
    /// lookup order irrelevant.
    pub fn standard() -> Self {
        Self {
            bands: vec![
                band(5, 59, 6, 30, 9),
                band(8, 29, 15, 0, 9),
                band(17, 59, 18, 30, 9),
                band(6, 29, 7, 0, 16),
                band(7, 59, 8, 30, 16),
                band(14, 59, 15, 30, 16),
                band(16, 59, 18, 0, 16),
                band(6, 59, 8, 0, 22),
                band(15, 29, 17, 0, 22),
            ],
        }
    }

    pub fn bands(&self) -> &[TollBand] {
        &self.bands
    }

    pub fn fee_for(&self, time: NaiveTime) -> u32 {
        self.bands
            .iter()
            .find(|band| band.contains(time))
            .map(|band| band.amount)
            .unwrap_or(0)
    }

    /// Pairs of bands with different amounts that claim a common minute.
    /// The standard schedule has none; a replacement table must not either,
    /// or `fee_for` becomes order-dependent.
    pub fn conflicts(&self) -> Vec<(TollBand, TollBand)> {
        let mut found = Vec::new();
        for (index, left) in self.bands.iter().enumerate() {
            for right in &self.bands[index + 1..] {
                if left.amount == right.amount {
                    continue;
                }
                let start = minute_of_day(left.start).max(minute_of_day(right.start));
                let end = minute_of_day(left.end).min(minute_of_day(right.end));
                // Open intervals share a minute only if more than one whole
                // minute separates the tighter bounds.
                if end > start + 1 {
                    found.push((*left, *right));
                }
            }
        }
        found
    }
}

fn band(start_hour: u32, start_minute: u32, end_hour: u32, end_minute: u32, amount: u32) -> TollBand {
    TollBand {
        start: NaiveTime::from_hms_opt(start_hour, start_minute, 0).unwrap_or(NaiveTime::MIN),
        end: NaiveTime::from_hms_opt(end_hour, end_minute, 0).unwrap_or(NaiveTime::MIN),
        amount,
    }
}
