//! Peak/trough hour lookup over the backend-supplied hourly analytics.

use crate::models::HourlyUsageMap;

/// Sentinel returned when there is no hourly data to scan. Display code
/// renders it as-is.
pub const NO_HOUR: &str = "N/A";

/// Hour label with the highest `diff`. Ties keep the first-encountered key
/// in the map's iteration order.
pub fn peak_hour(hourly: &HourlyUsageMap) -> String {
    extreme_hour(hourly, |candidate, best| candidate > best)
}

/// Hour label with the lowest `diff`, same tie-breaking as [`peak_hour`].
pub fn trough_hour(hourly: &HourlyUsageMap) -> String {
    extreme_hour(hourly, |candidate, best| candidate < best)
}

fn extreme_hour(hourly: &HourlyUsageMap, better: impl Fn(f64, f64) -> bool) -> String {
    let mut best: Option<(&str, f64)> = None;
    for (hour, point) in hourly {
        match best {
            Some((_, diff)) if !better(point.diff, diff) => {}
            _ => best = Some((hour, point.diff)),
        }
    }
    best.map_or_else(|| NO_HOUR.to_string(), |(hour, _)| hour.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::HourlyPoint;

    fn map(entries: &[(&str, f64)]) -> HourlyUsageMap {
        entries
            .iter()
            .map(|(hour, diff)| {
                (
                    hour.to_string(),
                    HourlyPoint {
                        diff: *diff,
                        total: 0.0,
                    },
                )
            })
            .collect()
    }

    #[test]
    fn empty_map_returns_sentinel() {
        let empty = HourlyUsageMap::new();
        assert_eq!(peak_hour(&empty), NO_HOUR);
        assert_eq!(trough_hour(&empty), NO_HOUR);
    }

    #[test]
    fn finds_peak_and_trough() {
        let hourly = map(&[("0", 0.2), ("7", 1.4), ("13", 0.9), ("23", -0.1)]);
        assert_eq!(peak_hour(&hourly), "7");
        assert_eq!(trough_hour(&hourly), "23");
    }

    #[test]
    fn ties_keep_first_encountered_hour() {
        let hourly = map(&[("3", 1.0), ("9", 1.0), ("12", 0.5), ("15", 0.5)]);
        assert_eq!(peak_hour(&hourly), "3");
        assert_eq!(trough_hour(&hourly), "12");
    }

    #[test]
    fn single_entry_is_both_peak_and_trough() {
        let hourly = map(&[("18", 0.7)]);
        assert_eq!(peak_hour(&hourly), "18");
        assert_eq!(trough_hour(&hourly), "18");
    }
}
