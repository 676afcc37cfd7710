use chrono::{DateTime, FixedOffset, TimeZone, Utc};
use elapsed_core::{compute, DisplayUnit, Elapsed};

fn utc(y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(y, mo, d, h, mi, s).unwrap()
}

#[test]
fn two_calendar_years_in_every_unit() {
    let reference = utc(2025, 1, 1, 0, 0, 0);
    let target = utc(2023, 1, 1, 0, 0, 0);

    assert_eq!(compute(&reference, &target, DisplayUnit::Years), 2);
    assert_eq!(compute(&reference, &target, DisplayUnit::Months), 24);
    assert_eq!(compute(&reference, &target, DisplayUnit::Days), 731);
    assert_eq!(compute(&reference, &target, DisplayUnit::Hours), 731 * 24);
    assert_eq!(compute(&reference, &target, DisplayUnit::Minutes), 731 * 24 * 60);
    assert_eq!(compute(&reference, &target, DisplayUnit::Seconds), 731 * 24 * 60 * 60);
}

#[test]
fn one_day_short_of_a_year_is_eleven_months() {
    let target = utc(2024, 2, 28, 0, 0, 0);

    let exact = utc(2025, 2, 28, 0, 0, 0);
    assert_eq!(compute(&exact, &target, DisplayUnit::Years), 1);
    assert_eq!(compute(&exact, &target, DisplayUnit::Months), 12);

    let short = utc(2025, 2, 27, 0, 0, 0);
    assert_eq!(compute(&short, &target, DisplayUnit::Years), 0);
    assert_eq!(compute(&short, &target, DisplayUnit::Months), 11);
}

#[test]
fn partial_units_truncate_toward_zero() {
    let target = utc(2024, 6, 1, 12, 0, 0);
    let reference = utc(2024, 6, 2, 11, 59, 59);

    assert_eq!(compute(&reference, &target, DisplayUnit::Days), 0);
    assert_eq!(compute(&reference, &target, DisplayUnit::Hours), 23);
    assert_eq!(compute(&reference, &target, DisplayUnit::Minutes), 23 * 60 + 59);
}

#[test]
fn future_targets_are_negative() {
    let reference = utc(2025, 1, 1, 0, 0, 0);
    let target = utc(2026, 7, 1, 6, 0, 30);

    assert_eq!(compute(&reference, &target, DisplayUnit::Years), -1);
    assert_eq!(compute(&reference, &target, DisplayUnit::Months), -18);
    assert_eq!(compute(&reference, &target, DisplayUnit::Days), -546);
    assert_eq!(compute(&reference, &target, DisplayUnit::Seconds), -(546 * 86_400 + 6 * 3600 + 30));
}

#[test]
fn calendar_units_follow_the_wall_clock_of_the_zone() {
    let jst = FixedOffset::east_opt(9 * 3600).unwrap();
    // JST 2023-01-31 01:00 and 2023-03-01 00:30.
    let target = utc(2023, 1, 30, 16, 0, 0);
    let reference = utc(2023, 2, 28, 15, 30, 0);

    assert_eq!(compute(&reference, &target, DisplayUnit::Months), 0);
    assert_eq!(
        compute(
            &reference.with_timezone(&jst),
            &target.with_timezone(&jst),
            DisplayUnit::Months
        ),
        1
    );
}

#[test]
fn elapsed_renders_value_label_and_suffix() {
    let reference = utc(2025, 1, 1, 0, 0, 0);
    let target = utc(2023, 1, 1, 0, 0, 0);

    assert_eq!(
        Elapsed::between(&reference, &target, DisplayUnit::Years).to_string(),
        "2年 経過"
    );
    assert_eq!(
        Elapsed::between(&target, &reference, DisplayUnit::Days).to_string(),
        "-731日 経過"
    );
}
