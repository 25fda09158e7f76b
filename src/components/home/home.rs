use std::collections::HashMap;

use leptos::*;
use leptos_router::use_navigate;

use super::fields::{CheckboxField, FieldMessage, TextField};
use crate::api::{ApiClient, ApiError};
use crate::domain::{
    after_submit, estimate, normalize, validate, ConsumptionMode, EnergyLabel, IntakeError,
    IntakeForm, SolarPanelType,
};
use crate::models::MeterUnit;
use crate::state::use_session;

const BATTERY_CAPACITIES: [(&str, &str); 10] = [
    ("unknown", "Geen idee"),
    ("5", "Tot 5 kWh"),
    ("10", "5 - 10 kWh"),
    ("15", "10 - 15 kWh"),
    ("20", "15 - 20 kWh"),
    ("25", "20 - 25 kWh"),
    ("30", "25 - 30 kWh"),
    ("40", "30 - 40 kWh"),
    ("50", "40 - 50 kWh"),
    ("60", "50+ kWh"),
];

/// Intake form page. Collects the usage profile, runs the optional meter
/// upload to completion, then normalizes and routes in one synchronous step.
#[component]
pub fn HomePage() -> impl IntoView {
    let session = use_session();
    let navigate = use_navigate();
    let client = ApiClient::new();

    let (mode, set_mode) = create_signal(None::<ConsumptionMode>);
    let form = create_rw_signal(IntakeForm::default());
    let meter_file = create_rw_signal(None::<web_sys::File>);
    let meter_unit = create_rw_signal(MeterUnit::default());
    let errors = create_rw_signal(HashMap::<&'static str, String>::new());
    let (submitting, set_submitting) = create_signal(false);

    let error_for = move |field: &'static str| {
        Signal::derive(move || errors.with(|e| e.get(field).cloned()))
    };

    // Editing a field clears its error, as in the original form.
    let set_field = move |field: &'static str, apply: fn(&mut IntakeForm, String)| {
        Callback::new(move |value: String| {
            form.update(|f| apply(f, value));
            errors.update(|e| {
                e.remove(field);
            });
        })
    };
    let set_flag = move |field: &'static str, apply: fn(&mut IntakeForm, bool)| {
        Callback::new(move |value: bool| {
            form.update(|f| apply(f, value));
            errors.update(|e| {
                e.remove(field);
            });
        })
    };

    let on_battery_toggle = Callback::new(move |value: bool| {
        form.update(|f| {
            f.has_home_battery = value;
            if value && f.home_battery_capacity.is_empty() {
                f.home_battery_capacity = "unknown".to_string();
            }
        });
        errors.update(|e| {
            e.remove("homeBatteryCapacity");
        });
    });

    let on_file_change = move |ev: ev::Event| {
        let input = event_target::<web_sys::HtmlInputElement>(&ev);
        let file = input.files().and_then(|files| files.get(0));
        form.update(|f| f.meter_file_attached = file.is_some());
        meter_file.set(file);
        errors.update(|e| {
            e.remove("smartMeterFile");
        });
    };

    let choose_mode = move |chosen: ConsumptionMode| {
        set_mode.set(Some(chosen));
        errors.update(|e| {
            e.remove("consumptionKnown");
        });
    };

    let estimate_preview = move || {
        form.with(|f| {
            let label = EnergyLabel::parse(&f.energy_label);
            let members = f.household_members.trim().parse::<u32>().unwrap_or(0);
            if label.is_some() && members > 0 {
                format!("{:.0} kWh", estimate(label, members))
            } else {
                "Selecteer label en huishoudgrootte".to_string()
            }
        })
    };

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();

        let Some(mode) = mode.get_untracked() else {
            errors.update(|e| {
                e.insert("consumptionKnown", "Maak eerst een keuze".to_string());
            });
            return;
        };

        let snapshot = form.get_untracked();
        let field_errors = validate(&snapshot, mode);
        if !field_errors.is_empty() {
            errors.set(field_errors.into_iter().map(|e| (e.field, e.message)).collect());
            return;
        }
        errors.set(HashMap::new());
        set_submitting.set(true);

        let client = client.clone();
        let navigate = navigate.clone();
        let file = meter_file.get_untracked();
        let unit = meter_unit.get_untracked();
        spawn_local(async move {
            // Submission is blocked on the upload: normalize only runs once
            // the backend has answered, success or failure.
            let wants_upload = mode == ConsumptionMode::Known && snapshot.has_smart_meter;
            let upload = match file.filter(|_| wants_upload) {
                Some(file) => match client.upload_smart_meter(&file, unit).await {
                    Ok(response) => Some(response),
                    Err(err) => {
                        errors.update(|e| {
                            e.insert("smartMeterFile", upload_error_message(&err));
                        });
                        set_submitting.set(false);
                        return;
                    }
                },
                None => None,
            };

            match normalize(&snapshot, mode, upload.as_ref()) {
                Ok(profile) => {
                    let target = after_submit(&profile);
                    session.replace(profile);
                    navigate(target.path(), Default::default());
                }
                Err(IntakeError::Validation { field, message }) => {
                    errors.update(|e| {
                        e.insert(field, message);
                    });
                }
                Err(IntakeError::UpstreamData(detail)) => {
                    errors.update(|e| {
                        e.insert("smartMeterFile", detail);
                    });
                }
            }
            set_submitting.set(false);
        });
    };

    view! {
        <div class="home-page">
            <div class="form-container">
                <h1>"Energieverbruik Formulier"</h1>
                <p class="subtitle">
                    "Vertel ons over je energieverbruik en wij helpen je de beste deals vinden"
                </p>

                <form on:submit=on_submit>
                    <fieldset>
                        <legend>"Energieverbruik Informatie"</legend>
                        <p class="consumption-question">"Weet je je maandelijks energieverbruik?"</p>
                        <div class="consumption-toggle">
                            <button
                                type="button"
                                class=move || {
                                    toggle_class(mode.get(), ConsumptionMode::Known)
                                }
                                on:click=move |_| choose_mode(ConsumptionMode::Known)
                            >
                                "Ja, ik weet het"
                            </button>
                            <button
                                type="button"
                                class=move || {
                                    toggle_class(mode.get(), ConsumptionMode::Unknown)
                                }
                                on:click=move |_| choose_mode(ConsumptionMode::Unknown)
                            >
                                "Nee, geen idee"
                            </button>
                        </div>
                        <FieldMessage error=error_for("consumptionKnown") />
                    </fieldset>

                    {move || {
                        (mode.get() == Some(ConsumptionMode::Known))
                            .then(|| {
                                view! {
                                    <fieldset>
                                        <legend>"Je Energieverbruik"</legend>
                                        <TextField
                                            label="Maandelijks Elektriciteitsverbruik (kWh) *"
                                            name="monthlyConsumption"
                                            input_type="number"
                                            step="0.01"
                                            value=Signal::derive(move || {
                                                form.with(|f| f.monthly_consumption.clone())
                                            })
                                            on_input=set_field(
                                                "monthlyConsumption",
                                                |f, v| f.monthly_consumption = v,
                                            )
                                            error=error_for("monthlyConsumption")
                                        />

                                        <div class="smart-meter-option">
                                            <CheckboxField
                                                label="Of upload je slimme meter data (CSV/Excel) voor nauwkeurigere analyse"
                                                name="hasSmartMeter"
                                                checked=Signal::derive(move || {
                                                    form.with(|f| f.has_smart_meter)
                                                })
                                                on_toggle=set_flag(
                                                    "smartMeterFile",
                                                    |f, v| f.has_smart_meter = v,
                                                )
                                            />
                                        </div>

                                        {move || {
                                            form.with(|f| f.has_smart_meter)
                                                .then(|| {
                                                    view! {
                                                        <div class="form-group">
                                                            <label for="smartMeterFile">
                                                                "Upload CSV of Excel bestand *"
                                                            </label>
                                                            <input
                                                                type="file"
                                                                id="smartMeterFile"
                                                                name="smartMeterFile"
                                                                accept=".csv,.xlsx,.xls"
                                                                on:change=on_file_change
                                                            />
                                                            {move || {
                                                                meter_file
                                                                    .with(|f| f.as_ref().map(|file| file.name()))
                                                                    .map(|name| {
                                                                        view! {
                                                                            <span class="file-selected">{format!("✓ {name}")}</span>
                                                                        }
                                                                    })
                                                            }}
                                                            <FieldMessage error=error_for("smartMeterFile") />
                                                            <p class="file-help">
                                                                "Bestand moet 'date' en 'total' kolommen bevatten"
                                                            </p>
                                                            <div class="form-group">
                                                                <label for="meterUnit">"Eenheid van de meterstanden"</label>
                                                                <select
                                                                    id="meterUnit"
                                                                    name="meterUnit"
                                                                    on:change=move |ev| {
                                                                        meter_unit.set(MeterUnit::parse(&event_target_value(&ev)))
                                                                    }
                                                                >
                                                                    <option value="kWh">"kWh"</option>
                                                                    <option value="MWh">"MWh"</option>
                                                                </select>
                                                            </div>
                                                        </div>
                                                    }
                                                })
                                        }}
                                    </fieldset>
                                }
                            })
                    }}

                    {move || {
                        (mode.get() == Some(ConsumptionMode::Unknown))
                            .then(|| {
                                view! {
                                    <fieldset>
                                        <legend>"Energie Label en Huishouden"</legend>
                                        <div class="form-group">
                                            <label for="energyLabel">
                                                "Wat is het energielabel van je woning? *"
                                            </label>
                                            <select
                                                id="energyLabel"
                                                name="energyLabel"
                                                on:change=move |ev| {
                                                    set_field("energyLabel", |f, v| f.energy_label = v)
                                                        .call(event_target_value(&ev))
                                                }
                                                class=move || {
                                                    if errors.with(|e| e.contains_key("energyLabel")) {
                                                        "error"
                                                    } else {
                                                        ""
                                                    }
                                                }
                                            >
                                                <option value="">"-- Selecteer een label --"</option>
                                                {EnergyLabel::ALL
                                                    .into_iter()
                                                    .map(|label| {
                                                        view! {
                                                            <option
                                                                value=label.as_value()
                                                                selected=move || {
                                                                    form.with(|f| f.energy_label == label.as_value())
                                                                }
                                                            >
                                                                {label.display_name()}
                                                            </option>
                                                        }
                                                    })
                                                    .collect_view()}
                                            </select>
                                            <FieldMessage error=error_for("energyLabel") />
                                            <p class="help-text">
                                                "Het energielabel kun je vinden op je energierekening of op energie-index.nl"
                                            </p>
                                        </div>

                                        <TextField
                                            label="Hoeveel personen wonen in het huishouden? *"
                                            name="householdMembers"
                                            input_type="number"
                                            step="1"
                                            value=Signal::derive(move || {
                                                form.with(|f| f.household_members.clone())
                                            })
                                            on_input=set_field(
                                                "householdMembers",
                                                |f, v| f.household_members = v,
                                            )
                                            error=error_for("householdMembers")
                                        />

                                        <div class="estimation-box">
                                            <p class="estimation-title">"Geschat maandelijks verbruik:"</p>
                                            <p class="estimation-value">{estimate_preview}</p>
                                            <p class="estimation-note">
                                                "Dit is een schatting op basis van het energielabel en huishoudgrootte"
                                            </p>
                                        </div>
                                    </fieldset>
                                }
                            })
                    }}

                    {move || {
                        mode.get()
                            .map(|mode| {
                                view! {
                                    <fieldset>
                                        <legend>"Huisinformatie"</legend>
                                        <TextField
                                            label="Adres"
                                            name="address"
                                            value=Signal::derive(move || form.with(|f| f.address.clone()))
                                            on_input=set_field("address", |f, v| f.address = v)
                                            error=error_for("address")
                                        />
                                        <div class="form-row">
                                            <TextField
                                                label="Postcode"
                                                name="zipCode"
                                                value=Signal::derive(move || form.with(|f| f.zip_code.clone()))
                                                on_input=set_field("zipCode", |f, v| f.zip_code = v)
                                                error=error_for("zipCode")
                                            />
                                            <TextField
                                                label="Plaats"
                                                name="city"
                                                value=Signal::derive(move || form.with(|f| f.city.clone()))
                                                on_input=set_field("city", |f, v| f.city = v)
                                                error=error_for("city")
                                            />
                                        </div>
                                    </fieldset>

                                    {(mode == ConsumptionMode::Known)
                                        .then(|| {
                                            view! {
                                                <fieldset>
                                                    <legend>"Gas"</legend>
                                                    <CheckboxField
                                                        label="Ik heb ook gas"
                                                        name="hasGas"
                                                        checked=Signal::derive(move || form.with(|f| f.has_gas))
                                                        on_toggle=set_flag("gasConsumption", |f, v| f.has_gas = v)
                                                    />
                                                    {move || {
                                                        form.with(|f| f.has_gas)
                                                            .then(|| {
                                                                view! {
                                                                    <TextField
                                                                        label="Maandelijks gasverbruik (m³) *"
                                                                        name="gasConsumption"
                                                                        input_type="number"
                                                                        step="0.01"
                                                                        value=Signal::derive(move || {
                                                                            form.with(|f| f.gas_consumption.clone())
                                                                        })
                                                                        on_input=set_field(
                                                                            "gasConsumption",
                                                                            |f, v| f.gas_consumption = v,
                                                                        )
                                                                        error=error_for("gasConsumption")
                                                                    />
                                                                }
                                                            })
                                                    }}
                                                </fieldset>
                                            }
                                        })}

                                    <fieldset>
                                        <legend>"Zonnepanelen en Batterij"</legend>
                                        <CheckboxField
                                            label="Heb je zonnepanelen?"
                                            name="hasSolarPanels"
                                            checked=Signal::derive(move || form.with(|f| f.has_solar_panels))
                                            on_toggle=set_flag(
                                                "solarPanelCount",
                                                |f, v| f.has_solar_panels = v,
                                            )
                                        />
                                        {move || {
                                            form.with(|f| f.has_solar_panels)
                                                .then(|| {
                                                    view! {
                                                        <TextField
                                                            label="Hoeveel zonnepanelen? *"
                                                            name="solarPanelCount"
                                                            input_type="number"
                                                            step="1"
                                                            value=Signal::derive(move || {
                                                                form.with(|f| f.solar_panel_count.clone())
                                                            })
                                                            on_input=set_field(
                                                                "solarPanelCount",
                                                                |f, v| f.solar_panel_count = v,
                                                            )
                                                            error=error_for("solarPanelCount")
                                                        />
                                                        <div class="form-group">
                                                            <label>"Welk type zonnepaneel? *"</label>
                                                            <div class="solar-panel-options">
                                                                {SolarPanelType::ALL
                                                                    .into_iter()
                                                                    .map(|panel| {
                                                                        view! {
                                                                            <div class="panel-option">
                                                                                <input
                                                                                    type="radio"
                                                                                    id=format!("solarPanel_{}", panel.as_value())
                                                                                    name="solarPanelType"
                                                                                    value=panel.as_value()
                                                                                    prop:checked=move || {
                                                                                        form.with(|f| f.solar_panel_type == panel)
                                                                                    }
                                                                                    on:change=move |_| {
                                                                                        form.update(|f| f.solar_panel_type = panel)
                                                                                    }
                                                                                />
                                                                                <label
                                                                                    for=format!("solarPanel_{}", panel.as_value())
                                                                                    class="panel-label"
                                                                                >
                                                                                    <p class="panel-type">{panel.display_name()}</p>
                                                                                    <p class="panel-desc">{panel.description()}</p>
                                                                                </label>
                                                                            </div>
                                                                        }
                                                                    })
                                                                    .collect_view()}
                                                            </div>
                                                        </div>
                                                    }
                                                })
                                        }}

                                        <CheckboxField
                                            label="Heb je een thuisbatterij?"
                                            name="hasHomeBattery"
                                            checked=Signal::derive(move || form.with(|f| f.has_home_battery))
                                            on_toggle=on_battery_toggle
                                        />
                                        {move || {
                                            form.with(|f| f.has_home_battery)
                                                .then(|| {
                                                    view! {
                                                        <div class="form-group">
                                                            <label for="homeBatteryCapacity">
                                                                "Hoeveel kan de batterij per jaar opslaan (kWh)?"
                                                            </label>
                                                            <select
                                                                id="homeBatteryCapacity"
                                                                name="homeBatteryCapacity"
                                                                on:change=move |ev| {
                                                                    set_field(
                                                                            "homeBatteryCapacity",
                                                                            |f, v| f.home_battery_capacity = v,
                                                                        )
                                                                        .call(event_target_value(&ev))
                                                                }
                                                            >
                                                                {BATTERY_CAPACITIES
                                                                    .into_iter()
                                                                    .map(|(value, text)| {
                                                                        view! {
                                                                            <option
                                                                                value=value
                                                                                selected=move || {
                                                                                    form.with(|f| f.home_battery_capacity == value)
                                                                                }
                                                                            >
                                                                                {text}
                                                                            </option>
                                                                        }
                                                                    })
                                                                    .collect_view()}
                                                            </select>
                                                            <FieldMessage error=error_for("homeBatteryCapacity") />
                                                        </div>
                                                    }
                                                })
                                        }}
                                    </fieldset>

                                    <button
                                        type="submit"
                                        class="submit-btn"
                                        disabled=move || submitting.get()
                                    >
                                        {move || {
                                            if submitting.get() {
                                                "Bezig met verwerken..."
                                            } else {
                                                "Energiecontracten Vergelijken"
                                            }
                                        }}
                                    </button>
                                }
                            })
                    }}
                </form>
            </div>
        </div>
    }
}

fn toggle_class(current: Option<ConsumptionMode>, own: ConsumptionMode) -> &'static str {
    if current == Some(own) {
        "toggle-btn active"
    } else {
        "toggle-btn"
    }
}

fn upload_error_message(err: &ApiError) -> String {
    match err {
        // The backend's reason, shown verbatim on the upload control
        ApiError::Http { message, .. } => message.clone(),
        ApiError::Network(_) => {
            "Kan de meterdienst niet bereiken. Probeer het later opnieuw.".to_string()
        }
        ApiError::Deserialization(_) => "Onbruikbaar antwoord van de meterdienst".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::upload_error_message;
    use crate::api::ApiError;

    #[test]
    fn rejected_upload_shows_backend_message_verbatim() {
        let err = ApiError::Http {
            status: 400,
            message: "bad header".to_string(),
        };
        assert_eq!(upload_error_message(&err), "bad header");
    }

    #[test]
    fn network_failure_gets_a_dutch_fallback() {
        let err = ApiError::Network("fetch failed".to_string());
        assert_eq!(
            upload_error_message(&err),
            "Kan de meterdienst niet bereiken. Probeer het later opnieuw."
        );
    }

    #[test]
    fn unreadable_response_gets_a_dutch_fallback() {
        let err = ApiError::Deserialization("expected value".to_string());
        assert_eq!(
            upload_error_message(&err),
            "Onbruikbaar antwoord van de meterdienst"
        );
    }
}
