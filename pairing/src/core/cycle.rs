//! Weekly cycle identification

use chrono::{DateTime, Datelike, Utc};
use shared::CycleKey;

/// Cycle key for the ISO-8601 week containing `now`
///
/// The year is the ISO week-numbering year, so the days of a week that
/// straddles 31 Dec / 1 Jan all share one key.
pub fn current_cycle_key(now: DateTime<Utc>) -> CycleKey {
    let week = now.iso_week();
    CycleKey::from_iso_week(week.year(), week.week())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(year: i32, month: u32, day: u32, hour: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(year, month, day, hour, 0, 0).unwrap()
    }

    #[test]
    fn test_mid_january() {
        assert_eq!(current_cycle_key(at(2025, 1, 15, 12)).as_str(), "2025-W03");
    }

    #[test]
    fn test_whole_week_shares_one_key() {
        let monday = current_cycle_key(at(2025, 1, 13, 0));
        let sunday = current_cycle_key(at(2025, 1, 19, 23));
        assert_eq!(monday, sunday);
        assert_ne!(monday, current_cycle_key(at(2025, 1, 20, 0)));
    }

    #[test]
    fn test_week_straddling_new_year() {
        // 30 Dec 2024 .. 5 Jan 2025 is ISO week 1 of 2025
        let dec_31 = current_cycle_key(at(2024, 12, 31, 9));
        let jan_1 = current_cycle_key(at(2025, 1, 1, 9));
        assert_eq!(dec_31.as_str(), "2025-W01");
        assert_eq!(dec_31, jan_1);
    }

    #[test]
    fn test_fifty_three_week_year() {
        assert_eq!(current_cycle_key(at(2021, 1, 3, 12)).as_str(), "2020-W53");
        assert_eq!(current_cycle_key(at(2021, 1, 4, 12)).as_str(), "2021-W01");
    }
}
