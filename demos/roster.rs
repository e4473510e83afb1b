use chrono::offset::TimeZone;
use chrono::{Duration, Utc};
use intervalmap::IntervalMap;

fn main() {
    let people = ["Alice", "Bob", "Carol"];
    let mut roster = IntervalMap::new("nobody");

    // Set up initial roster.
    let start_of_roster = Utc.with_ymd_and_hms(2019, 1, 7, 0, 0, 0).unwrap();
    let mut week_start = start_of_roster;
    for _ in 0..3 {
        for person in people {
            let next_week = week_start + Duration::weeks(1);
            roster.assign(week_start, next_week, person);
            week_start = next_week;
        }
    }

    // Bob is covering Alice's second shift (the fourth shift overall).
    let fourth_shift_start = start_of_roster + Duration::weeks(3);
    let fourth_shift_end = fourth_shift_start + Duration::weeks(1);
    roster.assign(fourth_shift_start, fourth_shift_end, "Bob");

    // Bob's first shift is cancelled and nobody covers it.
    let second_shift_start = start_of_roster + Duration::weeks(1);
    roster.assign(second_shift_start, second_shift_start + Duration::weeks(1), "nobody");

    // Print out who is on call at noon each day of the first five weeks.
    // The fourth and fifth shifts run together as a single run of Bob.
    let mut day = start_of_roster - Duration::days(1) + Duration::hours(12);
    while day < start_of_roster + Duration::weeks(5) {
        println!("{}: {}", day.format("%a %Y-%m-%d"), roster[&day]);
        day += Duration::days(1);
    }
}
