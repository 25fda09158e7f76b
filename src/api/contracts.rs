use super::client::{ApiClient, ApiError};
use crate::domain::Profile;
use crate::models::{
    CompareRequest, Contract, DailyDetail, HourlyDetail, MonthQuery, ZonneplanMonthly,
};

impl ApiClient {
    /// Fetch ranked contract costs for the profile's consumption. Profiles
    /// with a backend-derived split send it; others use the legacy single
    /// monthly figure.
    pub async fn compare_contracts(&self, profile: &Profile) -> Result<Vec<Contract>, ApiError> {
        let body = match profile.consumption_split {
            Some(split) => CompareRequest::split(split.normal_kwh, split.low_kwh),
            None => CompareRequest::monthly(profile.monthly_consumption_kwh),
        };
        self.post_json("/api/compare-contracts", &body).await
    }

    /// Per-day records for one month, for the dashboard detail section
    pub async fn monthly_detail(&self, month: u8) -> Result<Vec<DailyDetail>, ApiError> {
        self.post_json("/api/monthly-detail", &MonthQuery { month })
            .await
    }

    /// Per-hour records for one month
    pub async fn hourly_detail(&self, month: u8) -> Result<Vec<HourlyDetail>, ApiError> {
        self.post_json("/api/hourly-detail", &MonthQuery { month })
            .await
    }

    /// Precomputed monthly breakdown for the Zonneplan dynamic contract
    pub async fn zonneplan_monthly(&self) -> Result<ZonneplanMonthly, ApiError> {
        self.post_json("/api/zonnenplan-monthly", &serde_json::json!({}))
            .await
    }
}
