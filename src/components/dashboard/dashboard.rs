use chrono::NaiveDateTime;
use leptos::*;
use leptos_router::{use_navigate, Redirect};

use super::metric_card::MetricCard;
use crate::api::ApiClient;
use crate::domain::{hourly, MeterData, Profile, View, NO_HOUR};
use crate::state::use_session;

const MONTH_NAMES: [&str; 12] = [
    "Jan", "Feb", "Mrt", "Apr", "Mei", "Jun", "Jul", "Aug", "Sep", "Okt", "Nov", "Dec",
];

/// Personal dashboard page. Only meaningful for smart-meter profiles;
/// anything else is routed back to the intake form.
#[component]
pub fn DashboardPage() -> impl IntoView {
    let session = use_session();

    move || match session.profile() {
        Some(profile) if profile.is_smart_meter() => match profile.meter.clone() {
            Some(meter) => view! { <DashboardContent profile=profile meter=meter /> }.into_view(),
            None => view! { <EmptyState /> }.into_view(),
        },
        _ => view! { <Redirect path="/" /> }.into_view(),
    }
}

#[component]
fn DashboardContent(profile: Profile, meter: MeterData) -> impl IntoView {
    let session = use_session();
    let navigate = use_navigate();

    let summary = meter.summary.clone();
    let avg_daily = summary.average_daily_consumption.unwrap_or(0.0);
    let total = summary.total_kwh.unwrap_or(0.0);
    let max_daily = summary.max_daily_consumption.unwrap_or(0.0);
    let min_daily = summary.min_daily_consumption.unwrap_or(0.0);
    let monthly = profile.monthly_consumption_kwh;
    let peak = hourly::peak_hour(&meter.hourly);
    let trough = hourly::trough_hour(&meter.hourly);

    let period = format!(
        "Periode: {} tot {}",
        format_date(summary.date_range_start.as_deref().unwrap_or("")),
        format_date(summary.date_range_end.as_deref().unwrap_or("")),
    );

    let peak_display = hour_display(&peak);
    let trough_display = hour_display(&trough);
    let info_text = format!(
        "Je gemiddelde verbruik per maand is {monthly:.2} kWh. Dat komt neer op ongeveer \
         {avg_daily:.2} kWh per dag. Het hoogste verbruik vindt plaats rond {peak_display} uur."
    );

    let navigate_compare = navigate.clone();
    let to_compare = move |_| {
        navigate_compare(View::ContractComparison.path(), Default::default());
    };
    let restart = move |_| {
        session.clear();
        navigate(View::Home.path(), Default::default());
    };

    view! {
        <div class="personal-data-page">
            <div class="personal-container">
                <div class="header">
                    <h1>"Jouw Energieverbruik Profiel"</h1>
                    <p class="subtitle">{period}</p>
                </div>

                <div class="metrics-grid">
                    <MetricCard label="Gem. Dagelijks" value=format!("{avg_daily:.2}") unit="kWh" />
                    <MetricCard label="Gem. Maandelijks" value=format!("{monthly:.2}") unit="kWh" />
                    <MetricCard label="Totaal Verbruik" value=format!("{total:.2}") unit="kWh" />
                    <MetricCard label="Piekuur" value=peak_display.clone() />
                    <MetricCard label="Laagste Uur" value=trough_display />
                    <MetricCard label="Max. Dagelijks" value=format!("{max_daily:.2}") unit="kWh" />
                </div>

                <div class="info-box">
                    <div class="info-content">
                        <h3>"Over Jouw Verbruik"</h3>
                        <p>{info_text}</p>
                    </div>
                </div>

                <table class="stats-table">
                    <thead>
                        <tr>
                            <th>"Statistiek"</th>
                            <th>"Waarde"</th>
                        </tr>
                    </thead>
                    <tbody>
                        <StatsRow label="Gemiddeld dagelijks verbruik" value=format!("{avg_daily:.2} kWh") />
                        <StatsRow label="Gemiddeld maandelijks verbruik" value=format!("{monthly:.2} kWh") />
                        <StatsRow label="Maximaal dagelijks verbruik" value=format!("{max_daily:.2} kWh") />
                        <StatsRow label="Minimaal dagelijks verbruik" value=format!("{min_daily:.2} kWh") />
                        <StatsRow label="Totaal periode verbruik" value=format!("{total:.2} kWh") />
                    </tbody>
                </table>

                <MonthDetailSection />

                <div class="action-buttons">
                    <button class="compare-btn" on:click=to_compare>
                        "Vergelijk Contracten"
                    </button>
                    <button class="new-file-btn" on:click=restart>
                        "Opnieuw beginnen"
                    </button>
                </div>
            </div>
        </div>
    }
}

#[component]
fn StatsRow(label: &'static str, value: String) -> impl IntoView {
    view! {
        <tr>
            <td>{label}</td>
            <td class="value">{value}</td>
        </tr>
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DetailGranularity {
    Dag,
    Uur,
}

/// Rows of the month detail section, per day or per hour
#[derive(Debug, Clone)]
enum DetailRows {
    Days(Vec<crate::models::DailyDetail>),
    Hours(Vec<crate::models::HourlyDetail>),
}

impl DetailRows {
    fn is_empty(&self) -> bool {
        match self {
            DetailRows::Days(days) => days.is_empty(),
            DetailRows::Hours(hours) => hours.is_empty(),
        }
    }
}

/// Per-day or per-hour detail for one selected month. Best-effort: a failed
/// fetch is logged and shows an empty section, never blocking the dashboard.
#[component]
fn MonthDetailSection() -> impl IntoView {
    let client = ApiClient::new();
    let (selected_month, set_selected_month) = create_signal(None::<u8>);
    let (granularity, set_granularity) = create_signal(DetailGranularity::Dag);

    let detail = create_local_resource(
        move || (selected_month.get(), granularity.get()),
        move |(month, granularity)| {
            let client = client.clone();
            async move {
                let Some(month) = month else {
                    return DetailRows::Days(Vec::new());
                };
                match granularity {
                    DetailGranularity::Dag => match client.monthly_detail(month).await {
                        Ok(days) => DetailRows::Days(days),
                        Err(err) => {
                            log::warn!("maanddetail voor maand {month} ophalen mislukt: {err}");
                            DetailRows::Days(Vec::new())
                        }
                    },
                    DetailGranularity::Uur => match client.hourly_detail(month).await {
                        Ok(hours) => DetailRows::Hours(hours),
                        Err(err) => {
                            log::warn!("uurdetail voor maand {month} ophalen mislukt: {err}");
                            DetailRows::Hours(Vec::new())
                        }
                    },
                }
            }
        },
    );

    let granularity_class = move |own: DetailGranularity| {
        if granularity.get() == own {
            "active"
        } else {
            ""
        }
    };

    view! {
        <div class="month-detail">
            <div class="month-detail-header">
                <h3>"Verbruik per Maand"</h3>
                <select
                    id="detailMonth"
                    name="detailMonth"
                    on:change=move |ev| {
                        set_selected_month.set(event_target_value(&ev).parse::<u8>().ok())
                    }
                >
                    <option value="">"-- Kies een maand --"</option>
                    {MONTH_NAMES
                        .into_iter()
                        .enumerate()
                        .map(|(idx, name)| {
                            view! { <option value=(idx + 1).to_string()>{name}</option> }
                        })
                        .collect_view()}
                </select>
                <div class="toggle-group">
                    <button
                        class=move || granularity_class(DetailGranularity::Dag)
                        on:click=move |_| set_granularity.set(DetailGranularity::Dag)
                    >
                        "Per dag"
                    </button>
                    <button
                        class=move || granularity_class(DetailGranularity::Uur)
                        on:click=move |_| set_granularity.set(DetailGranularity::Uur)
                    >
                        "Per uur"
                    </button>
                </div>
            </div>
            <Suspense fallback=move || view! { <div class="loading">"Laden..."</div> }>
                {move || {
                    detail
                        .get()
                        .map(|rows| {
                            if rows.is_empty() {
                                return view! {
                                    <p class="no-data">"Geen gegevens voor deze maand"</p>
                                }
                                    .into_view();
                            }
                            match rows {
                                DetailRows::Days(days) => {
                                    view! {
                                        <table class="day-table">
                                            <thead>
                                                <tr>
                                                    <th>"Datum"</th>
                                                    <th>"Verbruik (kWh)"</th>
                                                </tr>
                                            </thead>
                                            <tbody>
                                                {days
                                                    .into_iter()
                                                    .map(|day| {
                                                        view! {
                                                            <tr>
                                                                <td>{day.date}</td>
                                                                <td class="value">{format!("{:.2}", day.total)}</td>
                                                            </tr>
                                                        }
                                                    })
                                                    .collect_view()}
                                            </tbody>
                                        </table>
                                    }
                                        .into_view()
                                }
                                DetailRows::Hours(hours) => {
                                    view! {
                                        <table class="day-table">
                                            <thead>
                                                <tr>
                                                    <th>"Uur"</th>
                                                    <th>"Verbruik (kWh)"</th>
                                                </tr>
                                            </thead>
                                            <tbody>
                                                {hours
                                                    .into_iter()
                                                    .map(|hour| {
                                                        view! {
                                                            <tr>
                                                                <td>{format!("{}:00", hour.hour)}</td>
                                                                <td class="value">{format!("{:.2}", hour.total)}</td>
                                                            </tr>
                                                        }
                                                    })
                                                    .collect_view()}
                                            </tbody>
                                        </table>
                                    }
                                        .into_view()
                                }
                            }
                        })
                }}
            </Suspense>
        </div>
    }
}

#[component]
fn EmptyState() -> impl IntoView {
    view! {
        <div class="personal-data-page">
            <div class="container">
                <div class="empty-state">
                    <h2>"Geen Data Beschikbaar"</h2>
                    <p>"Geen slimme meter data beschikbaar. Upload eerst een bestand."</p>
                </div>
            </div>
        </div>
    }
}

fn hour_display(hour: &str) -> String {
    if hour == NO_HOUR {
        hour.to_string()
    } else {
        format!("{hour}:00")
    }
}

fn format_date(raw: &str) -> String {
    if let Ok(parsed) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S") {
        return parsed.format("%d-%m-%Y").to_string();
    }
    raw.split(' ').next().unwrap_or(raw).to_string()
}
