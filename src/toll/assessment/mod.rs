mod config;
mod exemption;
mod schedule;

pub use config::AssessmentConfig;
pub use exemption::{ExemptionPolicy, WaiverReason};
pub use schedule::{TariffSchedule, TollBand};

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use super::calendar::{CalendarError, HolidayCalendar};
use super::domain::VehicleClass;

/// Stateless engine applying the tariff schedule and exemption policy to a
/// single vehicle's passes for one calendar day. Holds no per-call state,
/// so one instance can serve any number of concurrent assessments.
pub struct AssessmentEngine {
    schedule: TariffSchedule,
    policy: ExemptionPolicy,
    config: AssessmentConfig,
}

impl AssessmentEngine {
    pub fn new(schedule: TariffSchedule, config: AssessmentConfig) -> Self {
        let policy = ExemptionPolicy::new(config.toll_free_month);
        Self {
            schedule,
            policy,
            config,
        }
    }

    pub fn standard() -> Self {
        Self::new(TariffSchedule::standard(), AssessmentConfig::default())
    }

    pub fn schedule(&self) -> &TariffSchedule {
        &self.schedule
    }

    pub fn config(&self) -> &AssessmentConfig {
        &self.config
    }

    /// Compute the day's toll for an unordered set of passes.
    ///
    /// All passes are expected to fall on one calendar day; the exemption
    /// checks key off the date of the first pass in input order. Only the
    /// holiday lookup can fail, and that failure propagates.
    pub fn assess<C>(
        &self,
        vehicle: VehicleClass,
        passes: &[NaiveDateTime],
        calendar: &C,
    ) -> Result<DayAssessment, CalendarError>
    where
        C: HolidayCalendar + ?Sized,
    {
        if self.policy.is_exempt_vehicle(vehicle) {
            return Ok(DayAssessment::waived(
                vehicle,
                passes.first().map(NaiveDateTime::date),
                WaiverReason::ExemptVehicle,
            ));
        }

        let Some(first) = passes.first() else {
            return Ok(DayAssessment::waived(
                vehicle,
                None,
                WaiverReason::NoChargeablePasses,
            ));
        };
        let date = first.date();

        if let Some(reason) = self.policy.toll_free_date(date, calendar)? {
            return Ok(DayAssessment::waived(vehicle, Some(date), reason));
        }

        // Free passes never open or extend a window, wherever they sit in
        // the input; the chargeable remainder is walked in time order.
        let mut tolled: Vec<(NaiveDateTime, u32)> = passes
            .iter()
            .filter_map(|pass| {
                let fee = self.schedule.fee_for(pass.time());
                (fee > 0).then_some((*pass, fee))
            })
            .collect();
        tolled.sort_by_key(|&(pass, _)| pass);

        let Some(&(first_pass, first_fee)) = tolled.first() else {
            return Ok(DayAssessment::waived(
                vehicle,
                Some(date),
                WaiverReason::NoChargeablePasses,
            ));
        };

        // A window stays open for every pass within `window_minutes` of the
        // pass that opened it (not of the previous pass), charges its single
        // highest fee when it closes, and the next pass out of range anchors
        // a fresh window.
        let mut windows = Vec::new();
        let mut open = ChargeWindow {
            opened_at: first_pass,
            passes: 1,
            charged: first_fee,
        };
        for &(pass, fee) in &tolled[1..] {
            let elapsed = (pass - open.opened_at).num_minutes();
            if elapsed <= self.config.window_minutes {
                open.passes += 1;
                open.charged = open.charged.max(fee);
            } else {
                windows.push(open);
                open = ChargeWindow {
                    opened_at: pass,
                    passes: 1,
                    charged: fee,
                };
            }
        }
        windows.push(open);

        let uncapped_total = windows.iter().map(|window| window.charged).sum::<u32>();
        let total = uncapped_total.min(self.config.daily_cap);

        Ok(DayAssessment {
            vehicle,
            date: Some(date),
            decision: ChargeDecision::Charged,
            windows,
            uncapped_total,
            total,
        })
    }
}

/// One closed charge window, kept so an assessment stays auditable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChargeWindow {
    /// The pass that anchored the window.
    pub opened_at: NaiveDateTime,
    /// How many chargeable passes the window absorbed.
    pub passes: u32,
    /// The window's highest per-pass fee, the only amount it charges.
    pub charged: u32,
}

/// Whether the day produced a charge at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChargeDecision {
    Charged,
    Waived(WaiverReason),
}

impl ChargeDecision {
    pub fn summary(&self) -> String {
        match self {
            ChargeDecision::Charged => "toll charged".to_string(),
            ChargeDecision::Waived(reason) => format!("toll waived: {}", reason.summary()),
        }
    }
}

/// Assessment output describing the total owed and the trail behind it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayAssessment {
    pub vehicle: VehicleClass,
    pub date: Option<NaiveDate>,
    pub decision: ChargeDecision,
    pub windows: Vec<ChargeWindow>,
    /// Sum of the window charges before the daily cap.
    pub uncapped_total: u32,
    /// The amount owed, never above the daily cap.
    pub total: u32,
}

impl DayAssessment {
    fn waived(vehicle: VehicleClass, date: Option<NaiveDate>, reason: WaiverReason) -> Self {
        Self {
            vehicle,
            date,
            decision: ChargeDecision::Waived(reason),
            windows: Vec::new(),
            uncapped_total: 0,
            total: 0,
        }
    }

    pub fn summary(&self) -> String {
        match &self.decision {
            ChargeDecision::Charged => format!(
                "{} owes {} across {} charge window(s)",
                self.vehicle.label(),
                self.total,
                self.windows.len()
            ),
            ChargeDecision::Waived(reason) => {
                format!("{} owes 0: {}", self.vehicle.label(), reason.summary())
            }
        }
    }
}
