use koltuk::shared::{Time, duration_label, travel_duration};

#[test]
fn same_day_duration() {
    let duration = travel_duration("10:00", "16:30").unwrap();
    assert_eq!(duration.hours(), 6);
    assert_eq!(duration.minutes(), 30);
}

#[test]
fn overnight_duration_wraps() {
    assert_eq!(duration_label("22:00", "08:00"), "10s 0d");
    assert_eq!(duration_label("23:45", "00:15"), "0s 30d");
}

#[test]
fn equal_times_are_zero() {
    assert_eq!(duration_label("09:00", "09:00"), "0s 0d");
}

#[test]
fn malformed_times_show_dash() {
    assert_eq!(duration_label("", "08:00"), "-");
    assert_eq!(duration_label("22:00", "8"), "-");
    assert_eq!(duration_label("ab:cd", "08:00"), "-");
}

#[test]
fn malformed_time_is_an_error() {
    assert!(travel_duration("22:00", "x").is_err());
}

#[test]
fn subtracting_times_wraps() {
    let departure = Time::parse_hm("22:00").unwrap();
    let arrival = Time::parse_hm("08:00").unwrap();
    assert_eq!((arrival - departure).as_minutes(), 600);
}
