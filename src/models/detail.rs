use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::contracts::MonthCost;

/// Request body for the per-month detail endpoints
#[derive(Debug, Clone, Copy, Serialize)]
pub struct MonthQuery {
    /// 1..=12
    pub month: u8,
}

/// One day of the selected month, from `POST /api/monthly-detail`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DailyDetail {
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub total: f64,
    #[serde(default)]
    pub diff: f64,
}

/// One hour of the selected month, from `POST /api/hourly-detail`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct HourlyDetail {
    #[serde(default)]
    pub hour: u8,
    #[serde(default)]
    pub total: f64,
    #[serde(default)]
    pub diff: f64,
}

/// Precomputed monthly breakdown for the Zonneplan dynamic contract, from
/// `POST /api/zonnenplan-monthly`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ZonneplanMonthly {
    #[serde(default)]
    pub monthly_breakdown: IndexMap<String, MonthCost>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hourly_detail_rows_decode_with_missing_fields() {
        let raw = r#"[{"hour": 7, "total": 0.42, "diff": 0.05}, {"hour": 18}]"#;
        let rows: Vec<HourlyDetail> = serde_json::from_str(raw).unwrap();
        assert_eq!(rows[0].hour, 7);
        assert_eq!(rows[0].total, 0.42);
        assert_eq!(rows[1].hour, 18);
        assert_eq!(rows[1].total, 0.0);
    }

    #[test]
    fn month_query_carries_the_month_number() {
        let body = serde_json::to_value(MonthQuery { month: 3 }).unwrap();
        assert_eq!(body["month"], 3);
    }
}
