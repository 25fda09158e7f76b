//! Intake form validation and normalization into a [`Profile`].
//!
//! Normalization is synchronous and pure: any meter-file upload has already
//! completed (or failed) before `normalize` runs. The one invariant enforced
//! here rather than trusted from form state: variable costs are nonzero only
//! on the smart-meter path.

use thiserror::Error;

use super::estimate::{estimate, EnergyLabel};
use super::profile::{ConsumptionSource, ConsumptionSplit, MeterData, Profile, SolarPanelType};
use crate::models::UploadResponse;

/// Whether the user knows their monthly consumption.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConsumptionMode {
    Known,
    Unknown,
}

/// Raw intake form state, exactly as entered. Numeric fields stay strings
/// until validation so the form can round-trip whatever was typed.
#[derive(Debug, Clone, Default)]
pub struct IntakeForm {
    pub address: String,
    pub zip_code: String,
    pub city: String,

    pub monthly_consumption: String,
    pub has_smart_meter: bool,
    /// Whether a meter file has been chosen in the file input. The file
    /// handle itself stays in the component; validation only needs presence.
    pub meter_file_attached: bool,

    pub energy_label: String,
    pub household_members: String,

    pub has_gas: bool,
    pub gas_consumption: String,
    pub has_solar_panels: bool,
    pub solar_panel_count: String,
    pub solar_panel_type: SolarPanelType,
    pub has_home_battery: bool,
    pub home_battery_capacity: String,
}

/// User-correctable problem with a single form field
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

impl FieldError {
    fn new(field: &'static str, message: &str) -> Self {
        Self {
            field,
            message: message.to_string(),
        }
    }
}

/// Why a submission could not be turned into a profile
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum IntakeError {
    /// Local input problem, surfaced inline next to `field`
    #[error("{message}")]
    Validation {
        field: &'static str,
        message: String,
    },
    /// The backend answered the upload but the payload is unusable
    #[error("{0}")]
    UpstreamData(String),
}

fn parse_positive_f64(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|v| *v > 0.0)
}

fn parse_positive_u32(raw: &str) -> Option<u32> {
    raw.trim().parse::<u32>().ok().filter(|v| *v > 0)
}

/// Check the form before any network call. Returns one error per offending
/// field, in form order.
pub fn validate(form: &IntakeForm, mode: ConsumptionMode) -> Vec<FieldError> {
    let mut errors = Vec::new();

    match mode {
        ConsumptionMode::Known => {
            // With a meter file the backend supplies the figure, so the
            // manual field is not required.
            if !(form.has_smart_meter && form.meter_file_attached) {
                if form.monthly_consumption.trim().is_empty() {
                    errors.push(FieldError::new(
                        "monthlyConsumption",
                        "Monthly consumption is required",
                    ));
                } else if parse_positive_f64(&form.monthly_consumption).is_none() {
                    errors.push(FieldError::new(
                        "monthlyConsumption",
                        "Monthly consumption must be a positive number",
                    ));
                }
            }
            if form.has_smart_meter && !form.meter_file_attached {
                errors.push(FieldError::new("smartMeterFile", "Bestand is vereist"));
            }
        }
        ConsumptionMode::Unknown => {
            if EnergyLabel::parse(&form.energy_label).is_none() {
                errors.push(FieldError::new("energyLabel", "Energy label is required"));
            }
            if form.household_members.trim().is_empty() {
                errors.push(FieldError::new(
                    "householdMembers",
                    "Number of household members is required",
                ));
            } else if parse_positive_u32(&form.household_members).is_none() {
                errors.push(FieldError::new(
                    "householdMembers",
                    "Number of members must be a positive number",
                ));
            }
        }
    }

    if form.has_gas && parse_positive_f64(&form.gas_consumption).is_none() {
        errors.push(FieldError::new(
            "gasConsumption",
            "Gas consumption must be a positive number",
        ));
    }
    if form.has_solar_panels && parse_positive_u32(&form.solar_panel_count).is_none() {
        errors.push(FieldError::new(
            "solarPanelCount",
            "Aantal zonnepanelen moet een positief getal zijn",
        ));
    }
    if form.has_home_battery && form.home_battery_capacity.trim().is_empty() {
        errors.push(FieldError::new(
            "homeBatteryCapacity",
            "Selecteer een capaciteit",
        ));
    }

    errors
}

/// Merge the form, the chosen mode, and an optional completed upload into
/// one canonical profile. First matching branch wins:
///
/// 1. mode Unknown: label estimate
/// 2. meter file uploaded: backend summary, taken verbatim
/// 3. manual entry
pub fn normalize(
    form: &IntakeForm,
    mode: ConsumptionMode,
    upload: Option<&UploadResponse>,
) -> Result<Profile, IntakeError> {
    if let Some(error) = validate(form, mode).into_iter().next() {
        return Err(IntakeError::Validation {
            field: error.field,
            message: error.message,
        });
    }

    let (monthly_consumption_kwh, source, consumption_split, variable_costs_total_euros, meter) =
        match mode {
            ConsumptionMode::Unknown => {
                let label = EnergyLabel::parse(&form.energy_label);
                let members = parse_positive_u32(&form.household_members).unwrap_or(0);
                (
                    estimate(label, members),
                    ConsumptionSource::LabelEstimate,
                    None,
                    0.0,
                    None,
                )
            }
            ConsumptionMode::Known if form.has_smart_meter => {
                let response = upload.ok_or_else(|| {
                    IntakeError::UpstreamData(
                        "Geen antwoord van de meterdienst ontvangen".to_string(),
                    )
                })?;
                let summary = response.summary.clone().ok_or_else(|| {
                    IntakeError::UpstreamData(
                        "Antwoord van de meterdienst mist de verbruikssamenvatting".to_string(),
                    )
                })?;
                let split = response.consumption_split.as_ref().map(|s| ConsumptionSplit {
                    normal_kwh: s.monthly_normal_used,
                    low_kwh: s.monthly_low_used,
                });
                (
                    summary.monthly_consumption.unwrap_or(0.0),
                    ConsumptionSource::SmartMeter,
                    split,
                    summary.variable_costs_total.unwrap_or(0.0),
                    Some(MeterData {
                        summary,
                        hourly: response.hourly_analytics.clone(),
                    }),
                )
            }
            ConsumptionMode::Known => {
                let monthly = parse_positive_f64(&form.monthly_consumption).ok_or_else(|| {
                    IntakeError::Validation {
                        field: "monthlyConsumption",
                        message: "Monthly consumption must be a positive number".to_string(),
                    }
                })?;
                (monthly, ConsumptionSource::Manual, None, 0.0, None)
            }
        };

    Ok(Profile {
        monthly_consumption_kwh,
        source,
        consumption_split,
        variable_costs_total_euros,
        address: form.address.trim().to_string(),
        zip_code: form.zip_code.trim().to_string(),
        city: form.city.trim().to_string(),
        has_gas: form.has_gas,
        gas_consumption: form
            .has_gas
            .then(|| parse_positive_f64(&form.gas_consumption))
            .flatten(),
        has_solar_panels: form.has_solar_panels,
        solar_panel_count: form
            .has_solar_panels
            .then(|| parse_positive_u32(&form.solar_panel_count))
            .flatten(),
        solar_panel_type: form.solar_panel_type,
        has_home_battery: form.has_home_battery,
        home_battery_capacity: form
            .has_home_battery
            .then(|| form.home_battery_capacity.trim().to_string()),
        meter,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ConsumptionSplitPayload, MeterSummary};

    fn manual_form(monthly: &str) -> IntakeForm {
        IntakeForm {
            monthly_consumption: monthly.to_string(),
            ..IntakeForm::default()
        }
    }

    fn upload_response(monthly: f64, variable_costs: Option<f64>) -> UploadResponse {
        UploadResponse {
            summary: Some(MeterSummary {
                monthly_consumption: Some(monthly),
                variable_costs_total: variable_costs,
                ..MeterSummary::default()
            }),
            ..UploadResponse::default()
        }
    }

    #[test]
    fn manual_entry_produces_manual_profile() {
        let profile = normalize(&manual_form("350"), ConsumptionMode::Known, None).unwrap();
        assert_eq!(profile.monthly_consumption_kwh, 350.0);
        assert_eq!(profile.source, ConsumptionSource::Manual);
        assert_eq!(profile.variable_costs_total_euros, 0.0);
        assert!(profile.consumption_split.is_none());
        assert!(profile.meter.is_none());
    }

    #[test]
    fn manual_entry_rejects_missing_or_nonpositive_values() {
        for raw in ["", "   ", "abc", "0", "-5"] {
            let err = normalize(&manual_form(raw), ConsumptionMode::Known, None).unwrap_err();
            match err {
                IntakeError::Validation { field, .. } => assert_eq!(field, "monthlyConsumption"),
                other => panic!("expected validation error, got {other:?}"),
            }
        }
    }

    #[test]
    fn label_estimate_ignores_stray_upload_and_cost_fields() {
        let form = IntakeForm {
            energy_label: "C".to_string(),
            household_members: "3".to_string(),
            // stale values from a previous smart-meter run must not leak in
            monthly_consumption: "999".to_string(),
            ..IntakeForm::default()
        };
        let stray = upload_response(410.0, Some(62.40));
        let profile = normalize(&form, ConsumptionMode::Unknown, Some(&stray)).unwrap();
        assert_eq!(profile.source, ConsumptionSource::LabelEstimate);
        assert!((profile.monthly_consumption_kwh - 3500.0 / 12.0).abs() < 1e-9);
        assert_eq!(profile.variable_costs_total_euros, 0.0);
        assert!(profile.consumption_split.is_none());
    }

    #[test]
    fn smart_meter_values_are_taken_verbatim() {
        let form = IntakeForm {
            has_smart_meter: true,
            meter_file_attached: true,
            ..IntakeForm::default()
        };
        let mut response = upload_response(410.0, Some(62.40));
        response.consumption_split = Some(ConsumptionSplitPayload {
            monthly_normal_used: 250.0,
            monthly_low_used: 160.0,
        });
        let profile = normalize(&form, ConsumptionMode::Known, Some(&response)).unwrap();
        assert_eq!(profile.source, ConsumptionSource::SmartMeter);
        assert_eq!(profile.monthly_consumption_kwh, 410.0);
        assert_eq!(profile.variable_costs_total_euros, 62.40);
        let split = profile.consumption_split.unwrap();
        assert_eq!(split.normal_kwh, 250.0);
        assert_eq!(split.low_kwh, 160.0);
        assert!(profile.meter.is_some());
    }

    #[test]
    fn upload_without_summary_is_an_upstream_error() {
        let form = IntakeForm {
            has_smart_meter: true,
            meter_file_attached: true,
            ..IntakeForm::default()
        };
        let response = UploadResponse::default();
        let err = normalize(&form, ConsumptionMode::Known, Some(&response)).unwrap_err();
        assert!(matches!(err, IntakeError::UpstreamData(_)));

        let err = normalize(&form, ConsumptionMode::Known, None).unwrap_err();
        assert!(matches!(err, IntakeError::UpstreamData(_)));
    }

    #[test]
    fn meter_file_must_be_attached_when_flag_is_set() {
        let form = IntakeForm {
            has_smart_meter: true,
            monthly_consumption: "200".to_string(),
            ..IntakeForm::default()
        };
        let errors = validate(&form, ConsumptionMode::Known);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "smartMeterFile");
    }

    #[test]
    fn gated_detail_fields_are_required_with_their_flag() {
        let form = IntakeForm {
            monthly_consumption: "200".to_string(),
            has_gas: true,
            has_solar_panels: true,
            solar_panel_count: "-1".to_string(),
            has_home_battery: true,
            ..IntakeForm::default()
        };
        let fields: Vec<&str> = validate(&form, ConsumptionMode::Known)
            .iter()
            .map(|e| e.field)
            .collect();
        assert_eq!(
            fields,
            ["gasConsumption", "solarPanelCount", "homeBatteryCapacity"]
        );
    }

    #[test]
    fn unknown_mode_requires_label_and_members() {
        let fields: Vec<&str> = validate(&IntakeForm::default(), ConsumptionMode::Unknown)
            .iter()
            .map(|e| e.field)
            .collect();
        assert_eq!(fields, ["energyLabel", "householdMembers"]);
    }

    #[test]
    fn gated_details_are_carried_into_the_profile() {
        let form = IntakeForm {
            monthly_consumption: "200".to_string(),
            has_gas: true,
            gas_consumption: "45.5".to_string(),
            has_solar_panels: true,
            solar_panel_count: "12".to_string(),
            solar_panel_type: SolarPanelType::Monokristallijn,
            has_home_battery: true,
            home_battery_capacity: "10".to_string(),
            ..IntakeForm::default()
        };
        let profile = normalize(&form, ConsumptionMode::Known, None).unwrap();
        assert_eq!(profile.gas_consumption, Some(45.5));
        assert_eq!(profile.solar_panel_count, Some(12));
        assert_eq!(profile.solar_panel_type, SolarPanelType::Monokristallijn);
        assert_eq!(profile.home_battery_capacity.as_deref(), Some("10"));
    }
}
