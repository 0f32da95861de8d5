use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

use super::super::calendar::{CalendarError, HolidayCalendar};
use super::super::domain::VehicleClass;

/// Why a day of passes produced no charge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WaiverReason {
    ExemptVehicle,
    Weekend,
    TollFreeMonth,
    PublicHoliday,
    NoChargeablePasses,
}

impl WaiverReason {
    pub const fn summary(self) -> &'static str {
        match self {
            WaiverReason::ExemptVehicle => "vehicle class is toll exempt",
            WaiverReason::Weekend => "weekends are toll free",
            WaiverReason::TollFreeMonth => "date falls in the toll-free month",
            WaiverReason::PublicHoliday => "date is a public holiday",
            WaiverReason::NoChargeablePasses => "no passes inside a tolled band",
        }
    }
}

/// Pure predicates deciding who and when the toll does not apply to.
#[derive(Debug, Clone)]
pub struct ExemptionPolicy {
    toll_free_month: u32,
}

impl ExemptionPolicy {
    pub fn new(toll_free_month: u32) -> Self {
        Self { toll_free_month }
    }

    /// Closed-set check; unrecognized classes fall through to chargeable.
    pub fn is_exempt_vehicle(&self, vehicle: VehicleClass) -> bool {
        matches!(
            vehicle,
            VehicleClass::Motorbike
                | VehicleClass::Tractor
                | VehicleClass::Emergency
                | VehicleClass::Diplomat
                | VehicleClass::Foreign
                | VehicleClass::Military
        )
    }

    /// Weekend and month checks run first so the calendar is consulted at
    /// most once, and only when the cheap checks fail.
    pub fn toll_free_date<C>(
        &self,
        date: NaiveDate,
        calendar: &C,
    ) -> Result<Option<WaiverReason>, CalendarError>
    where
        C: HolidayCalendar + ?Sized,
    {
        if matches!(date.weekday(), Weekday::Sat | Weekday::Sun) {
            return Ok(Some(WaiverReason::Weekend));
        }

        if date.month() == self.toll_free_month {
            return Ok(Some(WaiverReason::TollFreeMonth));
        }

        if calendar.is_holiday(date)? {
            return Ok(Some(WaiverReason::PublicHoliday));
        }

        Ok(None)
    }
}
