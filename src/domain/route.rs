//! Navigation decisions driven by the profile's consumption source.
//!
//! Three views, cycled for the life of the session. All transitions are
//! explicit user actions; restart always clears the profile and returns to
//! the intake form.

use super::profile::{ConsumptionSource, Profile};

/// The three views of the flow
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Home,
    PersonalDashboard,
    ContractComparison,
}

impl View {
    /// Router path for this view
    pub fn path(&self) -> &'static str {
        match self {
            Self::Home => "/",
            Self::PersonalDashboard => "/dashboard",
            Self::ContractComparison => "/compare",
        }
    }
}

/// Where a fresh submission lands. Only smart-meter data has per-hour and
/// per-month detail worth visualizing, so everything else goes straight to
/// the comparison.
pub fn after_submit(profile: &Profile) -> View {
    match profile.source {
        ConsumptionSource::SmartMeter => View::PersonalDashboard,
        ConsumptionSource::Manual | ConsumptionSource::LabelEstimate => View::ContractComparison,
    }
}

/// Where "back" from the comparison goes. Without a smart-meter profile
/// there never was a dashboard to return to.
pub fn back_from_comparison(profile: &Profile) -> View {
    match profile.source {
        ConsumptionSource::SmartMeter => View::PersonalDashboard,
        ConsumptionSource::Manual | ConsumptionSource::LabelEstimate => View::Home,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::intake::{normalize, ConsumptionMode, IntakeForm};
    use crate::models::{MeterSummary, UploadResponse};

    fn manual_profile() -> Profile {
        let form = IntakeForm {
            monthly_consumption: "350".to_string(),
            ..IntakeForm::default()
        };
        normalize(&form, ConsumptionMode::Known, None).unwrap()
    }

    fn estimated_profile() -> Profile {
        let form = IntakeForm {
            energy_label: "B".to_string(),
            household_members: "2".to_string(),
            ..IntakeForm::default()
        };
        normalize(&form, ConsumptionMode::Unknown, None).unwrap()
    }

    fn smart_meter_profile() -> Profile {
        let form = IntakeForm {
            has_smart_meter: true,
            meter_file_attached: true,
            ..IntakeForm::default()
        };
        let response = UploadResponse {
            summary: Some(MeterSummary {
                monthly_consumption: Some(410.0),
                ..MeterSummary::default()
            }),
            ..UploadResponse::default()
        };
        normalize(&form, ConsumptionMode::Known, Some(&response)).unwrap()
    }

    #[test]
    fn manual_and_estimated_go_straight_to_comparison() {
        assert_eq!(after_submit(&manual_profile()), View::ContractComparison);
        assert_eq!(after_submit(&estimated_profile()), View::ContractComparison);
    }

    #[test]
    fn smart_meter_goes_to_dashboard_first() {
        assert_eq!(after_submit(&smart_meter_profile()), View::PersonalDashboard);
    }

    #[test]
    fn back_from_comparison_depends_on_source() {
        assert_eq!(
            back_from_comparison(&smart_meter_profile()),
            View::PersonalDashboard
        );
        assert_eq!(back_from_comparison(&manual_profile()), View::Home);
        assert_eq!(back_from_comparison(&estimated_profile()), View::Home);
    }

    #[test]
    fn view_paths_are_distinct() {
        assert_eq!(View::Home.path(), "/");
        assert_eq!(View::PersonalDashboard.path(), "/dashboard");
        assert_eq!(View::ContractComparison.path(), "/compare");
    }
}
