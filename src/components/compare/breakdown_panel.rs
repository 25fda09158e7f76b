use indexmap::IndexMap;
use leptos::*;

use super::contract_card::euro;
use crate::api::ApiClient;
use crate::models::{Contract, MonthCost};

const MONTH_NAMES: [&str; 12] = [
    "Jan", "Feb", "Mrt", "Apr", "Mei", "Jun", "Jul", "Aug", "Sep", "Okt", "Nov", "Dec",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum BreakdownView {
    Kosten,
    Verbruik,
}

/// Sidebar with the monthly breakdown of the selected contract.
///
/// The Zonneplan dynamic contract ships without an embedded breakdown; for
/// that one the precomputed breakdown is fetched separately. A fetch failure
/// degrades to an empty panel and never disturbs the contract list.
#[component]
pub fn BreakdownPanel(contract: Contract, #[prop(into)] on_close: Callback<()>) -> impl IntoView {
    let provider = contract.provider.clone();
    let client = ApiClient::new();

    let needs_zonneplan_fetch = contract.monthly_breakdown.is_empty()
        && contract.provider == "Zonneplan"
        && contract.contract_type == "Dynamisch";
    let embedded = contract.monthly_breakdown.clone();

    let breakdown = create_local_resource(
        move || (),
        move |_| {
            let client = client.clone();
            let embedded = embedded.clone();
            async move {
                if !needs_zonneplan_fetch {
                    return embedded;
                }
                match client.zonneplan_monthly().await {
                    Ok(response) => response.monthly_breakdown,
                    Err(err) => {
                        log::warn!("zonneplan maandoverzicht ophalen mislukt: {err}");
                        IndexMap::new()
                    }
                }
            }
        },
    );

    let (view_mode, set_view_mode) = create_signal(BreakdownView::Verbruik);
    let (selected_month, set_selected_month) = create_signal(None::<usize>);

    let mode_class = move |own: BreakdownView| {
        if view_mode.get() == own {
            "active"
        } else {
            ""
        }
    };

    view! {
        <aside class="sidebar-container">
            <div class="sidebar-header">
                <h3>{provider}</h3>
                <button class="close-sidebar-btn" on:click=move |_| on_close.call(())>
                    "✕"
                </button>
            </div>
            <div class="sidebar-content">
                <Suspense fallback=move || view! { <div class="loading">"Laden..."</div> }>
                    {move || {
                        breakdown
                            .get()
                            .map(|months| {
                                let rows = month_rows(&months);
                                if rows.is_empty() {
                                    return view! {
                                        <p class="no-data">"Geen maandgegevens beschikbaar"</p>
                                    }
                                        .into_view();
                                }
                                view! {
                                    <table class="breakdown-table">
                                        <thead>
                                            <tr>
                                                <th>"Maand"</th>
                                                <th>
                                                    {move || match view_mode.get() {
                                                        BreakdownView::Kosten => "Kosten (€)",
                                                        BreakdownView::Verbruik => "Verbruik (kWh)",
                                                    }}
                                                </th>
                                            </tr>
                                        </thead>
                                        <tbody>
                                            {rows
                                                .iter()
                                                .map(|(idx, name, month)| {
                                                    let idx = *idx;
                                                    let cost = month.total();
                                                    let usage = month.usage_normal() + month.usage_low();
                                                    view! {
                                                        <tr
                                                            class=move || {
                                                                if selected_month.get() == Some(idx) {
                                                                    "month-row selected"
                                                                } else {
                                                                    "month-row"
                                                                }
                                                            }
                                                            on:click=move |_| set_selected_month.set(Some(idx))
                                                        >
                                                            <td>{*name}</td>
                                                            <td class="value">
                                                                {move || match view_mode.get() {
                                                                    BreakdownView::Kosten => euro(cost),
                                                                    BreakdownView::Verbruik => format!("{usage:.0}"),
                                                                }}
                                                            </td>
                                                        </tr>
                                                    }
                                                })
                                                .collect_view()}
                                        </tbody>
                                    </table>
                                    {move || {
                                        selected_month
                                            .get()
                                            .and_then(|idx| {
                                                rows.iter()
                                                    .find(|(i, _, _)| *i == idx)
                                                    .map(|(_, name, month)| {
                                                        let name = *name;
                                                        view! { <MonthDetails name=name month=month.clone() /> }
                                                    })
                                            })
                                    }}
                                }
                                    .into_view()
                            })
                    }}
                </Suspense>
                <div class="toggle-group">
                    <button
                        class=move || mode_class(BreakdownView::Kosten)
                        on:click=move |_| set_view_mode.set(BreakdownView::Kosten)
                    >
                        "Kosten"
                    </button>
                    <button
                        class=move || mode_class(BreakdownView::Verbruik)
                        on:click=move |_| set_view_mode.set(BreakdownView::Verbruik)
                    >
                        "Verbruik"
                    </button>
                </div>
            </div>
        </aside>
    }
}

#[component]
fn MonthDetails(name: &'static str, month: MonthCost) -> impl IntoView {
    let usage = month.usage_normal() + month.usage_low();
    view! {
        <div class="details-box">
            <h4>{format!("Details {name}")}</h4>
            <div class="data-row">
                <span>"Verbruik:"</span>
                <strong>{format!("{usage:.0} kWh")}</strong>
            </div>
            <div class="data-row total-row">
                <span>"Maandlasten:"</span>
                <strong>{format!("€{}", euro(month.total()))}</strong>
            </div>
        </div>
    }
}

/// Month keys "1".."12" resolved to Dutch month names, in key order
fn month_rows(months: &IndexMap<String, MonthCost>) -> Vec<(usize, &'static str, MonthCost)> {
    months
        .iter()
        .filter_map(|(key, month)| {
            let number: usize = key.parse().ok()?;
            let name = MONTH_NAMES.get(number.checked_sub(1)?)?;
            Some((number, *name, month.clone()))
        })
        .collect()
}
