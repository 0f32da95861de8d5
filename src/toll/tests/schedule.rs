use chrono::NaiveTime;

use crate::toll::assessment::TariffSchedule;

fn at(hour: u32, minute: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(hour, minute, 0).expect("valid time")
}

#[test]
fn free_periods_map_to_zero() {
    let schedule = TariffSchedule::standard();
    assert_eq!(schedule.fee_for(at(0, 0)), 0);
    assert_eq!(schedule.fee_for(at(3, 0)), 0);
    assert_eq!(schedule.fee_for(at(5, 59)), 0);
    assert_eq!(schedule.fee_for(at(18, 30)), 0);
    assert_eq!(schedule.fee_for(at(23, 59)), 0);
}

#[test]
fn each_band_charges_its_amount() {
    let schedule = TariffSchedule::standard();
    assert_eq!(schedule.fee_for(at(6, 0)), 9);
    assert_eq!(schedule.fee_for(at(6, 45)), 16);
    assert_eq!(schedule.fee_for(at(7, 30)), 22);
    assert_eq!(schedule.fee_for(at(8, 15)), 16);
    assert_eq!(schedule.fee_for(at(12, 0)), 9);
    assert_eq!(schedule.fee_for(at(15, 10)), 16);
    assert_eq!(schedule.fee_for(at(16, 0)), 22);
    assert_eq!(schedule.fee_for(at(17, 30)), 16);
    assert_eq!(schedule.fee_for(at(18, 10)), 9);
}

#[test]
fn bounds_are_exclusive_on_both_sides() {
    let schedule = TariffSchedule::standard();
    // Recorded bounds of the 05:59-06:30 band never charge 9.
    assert_eq!(schedule.fee_for(at(5, 59)), 0);
    assert_eq!(schedule.fee_for(at(6, 30)), 16);
    // 06:30 sits strictly inside the 06:29-07:00 band, not on its edge.
    assert_eq!(schedule.fee_for(at(6, 29)), 9);
    // 18:00 is excluded from the 16:59-18:00 band but sits strictly inside
    // the evening 17:59-18:30 band.
    assert_eq!(schedule.fee_for(at(18, 0)), 9);
    assert_eq!(schedule.fee_for(at(18, 1)), 9);
}

#[test]
fn seconds_are_ignored() {
    let schedule = TariffSchedule::standard();
    let inside = NaiveTime::from_hms_opt(6, 29, 45).expect("valid time");
    // At minute resolution 06:29 belongs to the 9-band regardless of seconds.
    assert_eq!(schedule.fee_for(inside), 9);
}

#[test]
fn standard_schedule_has_no_conflicting_bands() {
    let schedule = TariffSchedule::standard();
    assert!(schedule.conflicts().is_empty());
}

#[test]
fn every_minute_matches_at_most_one_band() {
    let schedule = TariffSchedule::standard();
    for minute_of_day in 0..(24 * 60) {
        let time = at(minute_of_day / 60, minute_of_day % 60);
        let matching = schedule
            .bands()
            .iter()
            .filter(|band| band.contains(time))
            .count();
        assert!(
            matching <= 1,
            "minute {minute_of_day} matched {matching} bands"
        );
    }
}
