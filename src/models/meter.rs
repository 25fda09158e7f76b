use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Hour-of-day label ("0".."23") to net consumption for that hour,
/// aggregated over the uploaded period. Iteration order is the order the
/// backend supplied the hours in.
pub type HourlyUsageMap = IndexMap<String, HourlyPoint>;

/// Per-hour aggregate from the backend's hourly analytics
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HourlyPoint {
    #[serde(default)]
    pub diff: f64,
    #[serde(default)]
    pub total: f64,
}

/// Consumption summary computed by the backend from an uploaded meter file
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MeterSummary {
    #[serde(rename = "monthlyConsumption", default)]
    pub monthly_consumption: Option<f64>,
    #[serde(default)]
    pub total_kwh: Option<f64>,
    #[serde(default)]
    pub average_daily_consumption: Option<f64>,
    #[serde(default)]
    pub max_daily_consumption: Option<f64>,
    #[serde(default)]
    pub min_daily_consumption: Option<f64>,
    #[serde(default)]
    pub date_range_start: Option<String>,
    #[serde(default)]
    pub date_range_end: Option<String>,
    #[serde(default)]
    pub variable_costs_total: Option<f64>,
}

/// Normal/dal split of the uploaded period, per month
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConsumptionSplitPayload {
    #[serde(default)]
    pub monthly_normal_used: f64,
    #[serde(default)]
    pub monthly_low_used: f64,
}

/// Success response of `POST /api/upload-smart-meter`. A response without a
/// `summary` is treated as unusable upstream data by the normalizer.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UploadResponse {
    #[serde(default)]
    pub summary: Option<MeterSummary>,
    #[serde(default)]
    pub hourly_analytics: HourlyUsageMap,
    #[serde(default)]
    pub consumption_split: Option<ConsumptionSplitPayload>,
}

/// Unit hint sent with the uploaded file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MeterUnit {
    #[default]
    KilowattHour,
    MegawattHour,
}

impl MeterUnit {
    pub fn parse(value: &str) -> Self {
        match value {
            "MWh" => Self::MegawattHour,
            _ => Self::KilowattHour,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::KilowattHour => "kWh",
            Self::MegawattHour => "MWh",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn upload_response_deserializes_full_shape() {
        let raw = r#"{
            "summary": {
                "monthlyConsumption": 410.0,
                "total_kwh": 4920.0,
                "average_daily_consumption": 13.5,
                "max_daily_consumption": 22.1,
                "min_daily_consumption": 4.2,
                "date_range_start": "2024-01-01 00:00:00",
                "date_range_end": "2024-12-31 23:45:00",
                "variable_costs_total": 62.40
            },
            "hourly_analytics": {
                "0": {"diff": 0.12, "total": 1500.0},
                "1": {"diff": 0.08, "total": 1501.0}
            },
            "consumption_split": {
                "monthly_normal_used": 250.0,
                "monthly_low_used": 160.0
            }
        }"#;
        let response: UploadResponse = serde_json::from_str(raw).unwrap();
        let summary = response.summary.unwrap();
        assert_eq!(summary.monthly_consumption, Some(410.0));
        assert_eq!(summary.variable_costs_total, Some(62.40));
        assert_eq!(response.hourly_analytics.len(), 2);
        let split = response.consumption_split.unwrap();
        assert_eq!(split.monthly_normal_used, 250.0);
        assert_eq!(split.monthly_low_used, 160.0);
    }

    #[test]
    fn upload_response_without_summary_is_accepted_by_serde() {
        // Shape enforcement is the normalizer's job, not the decoder's.
        let response: UploadResponse = serde_json::from_str(r#"{"success": true}"#).unwrap();
        assert!(response.summary.is_none());
        assert!(response.hourly_analytics.is_empty());
    }

    #[test]
    fn hourly_map_preserves_backend_order() {
        let raw = r#"{"7": {"diff": 1.0}, "3": {"diff": 2.0}, "0": {"diff": 3.0}}"#;
        let map: HourlyUsageMap = serde_json::from_str(raw).unwrap();
        let keys: Vec<&str> = map.keys().map(String::as_str).collect();
        assert_eq!(keys, ["7", "3", "0"]);
    }
}
