use std::cmp::Ordering;

use leptos::*;
use leptos_router::{use_navigate, Redirect};

use super::breakdown_panel::BreakdownPanel;
use super::contract_card::{euro, ContractCard};
use crate::api::ApiClient;
use crate::domain::{back_from_comparison, Profile};
use crate::models::Contract;
use crate::state::use_session;

const CONTRACT_TYPES: [&str; 3] = ["Dynamisch", "Variabel", "Vast"];

/// Contract comparison page. Requires a profile; without one the user is
/// sent back to the intake form.
#[component]
pub fn ComparePage() -> impl IntoView {
    let session = use_session();

    move || match session.profile() {
        Some(profile) => view! { <CompareContent profile=profile /> }.into_view(),
        None => view! { <Redirect path="/" /> }.into_view(),
    }
}

#[component]
fn CompareContent(profile: Profile) -> impl IntoView {
    let navigate = use_navigate();
    let client = ApiClient::new();

    let back_target = back_from_comparison(&profile);
    let monthly = profile.monthly_consumption_kwh;

    let profile_for_fetch = profile.clone();
    let contracts = create_local_resource(
        move || (),
        move |_| {
            let client = client.clone();
            let profile = profile_for_fetch.clone();
            async move { client.compare_contracts(&profile).await }
        },
    );

    let (selected_type, set_selected_type) = create_signal("Dynamisch");
    let selected_contract = create_rw_signal(None::<Contract>);

    let go_back = move |_| {
        navigate(back_target.path(), Default::default());
    };

    view! {
        <div class="compare-page">
            <div class="compare-container">
                <header class="header">
                    <button class="back-btn" on:click=go_back>
                        "← Terug"
                    </button>
                    <h1>"Beste deals voor jou"</h1>
                    <p class="comparison-info">
                        "Verbruik: " <strong>{format!("{monthly:.0} kWh")}</strong> "/mnd"
                    </p>
                </header>

                <Suspense fallback=move || {
                    view! {
                        <div class="loading-container">
                            <p>"De beste deals berekenen..."</p>
                        </div>
                    }
                }>
                    {move || {
                        contracts
                            .get()
                            .map(|result| match result {
                                Ok(list) => {
                                    view! {
                                        <ContractOverview
                                            contracts=list
                                            selected_type=selected_type
                                            set_selected_type=set_selected_type
                                            selected_contract=selected_contract
                                        />
                                    }
                                        .into_view()
                                }
                                Err(err) => {
                                    log::warn!("contracten ophalen mislukt: {err}");
                                    view! {
                                        <div class="error-banner">
                                            <strong>"Service niet beschikbaar"</strong>
                                            <div>
                                                "De contracten konden niet worden opgehaald. Probeer het later opnieuw."
                                            </div>
                                        </div>
                                    }
                                        .into_view()
                                }
                            })
                    }}
                </Suspense>
            </div>

            {move || {
                selected_contract
                    .get()
                    .map(|contract| {
                        view! {
                            <BreakdownPanel
                                contract=contract
                                on_close=move |_| selected_contract.set(None)
                            />
                        }
                    })
            }}
        </div>
    }
}

#[component]
fn ContractOverview(
    contracts: Vec<Contract>,
    selected_type: ReadSignal<&'static str>,
    set_selected_type: WriteSignal<&'static str>,
    selected_contract: RwSignal<Option<Contract>>,
) -> impl IntoView {
    let top3 = cheapest(&contracts, 3);
    let ranges: Vec<(&'static str, f64, f64)> = CONTRACT_TYPES
        .into_iter()
        .map(|t| {
            let (min, max) = price_range(&contracts, t);
            (t, min, max)
        })
        .collect();

    let on_select = Callback::new(move |contract: Contract| {
        // A later selection replaces the panel (and its fetch) wholesale.
        selected_contract.set(Some(contract));
    });

    view! {
        <section class="best-options-container">
            <h2 class="dashboard-title">"Top 3 Goedkoopste"</h2>
            <div class="mini-cards-grid">
                {top3
                    .into_iter()
                    .enumerate()
                    .map(|(idx, contract)| {
                        view! {
                            <div class="mini-card-item">
                                <span class="mini-ranking">{format!("#{}", idx + 1)}</span>
                                <div class="mini-price-highlight">
                                    {format!("€{}", euro(contract.monthly_cost))}
                                </div>
                                <div class="mini-contract-name">{contract.provider.clone()}</div>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </section>

        <section class="price-ranges-grid">
            {ranges
                .into_iter()
                .map(|(contract_type, min, max)| {
                    view! {
                        <div class="range-card">
                            <h3 class="range-title">{contract_type}</h3>
                            <div class="range-info">{format!("Min: €{}", euro(min))}</div>
                            <div class="range-info">{format!("Max: €{}", euro(max))}</div>
                        </div>
                    }
                })
                .collect_view()}
        </section>

        <nav class="filter-nav">
            {CONTRACT_TYPES
                .into_iter()
                .map(|contract_type| {
                    view! {
                        <button
                            class=move || {
                                if selected_type.get() == contract_type { "active" } else { "" }
                            }
                            on:click=move |_| set_selected_type.set(contract_type)
                        >
                            {contract_type}
                        </button>
                    }
                })
                .collect_view()}
        </nav>

        <div class="contracts-grid">
            {move || {
                contracts
                    .iter()
                    .filter(|c| c.contract_type == selected_type.get())
                    .map(|contract| {
                        view! { <ContractCard contract=contract.clone() on_select=on_select /> }
                    })
                    .collect_view()
            }}
        </div>
    }
}

/// The `n` cheapest contracts by monthly cost. Costs are finite by
/// construction (lenient coercion), so the comparison is total in practice.
fn cheapest(contracts: &[Contract], n: usize) -> Vec<Contract> {
    let mut sorted = contracts.to_vec();
    sorted.sort_by(|a, b| {
        a.monthly_cost
            .partial_cmp(&b.monthly_cost)
            .unwrap_or(Ordering::Equal)
    });
    sorted.truncate(n);
    sorted
}

/// Min/max monthly cost among contracts of one type; (0, 0) when empty
fn price_range(contracts: &[Contract], contract_type: &str) -> (f64, f64) {
    let mut prices = contracts
        .iter()
        .filter(|c| c.contract_type == contract_type)
        .map(|c| c.monthly_cost)
        .peekable();
    if prices.peek().is_none() {
        return (0.0, 0.0);
    }
    prices.fold((f64::INFINITY, f64::NEG_INFINITY), |(min, max), p| {
        (min.min(p), max.max(p))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn contract(provider: &str, contract_type: &str, monthly_cost: f64) -> Contract {
        let raw = serde_json::json!({
            "provider": provider,
            "type": contract_type,
            "monthlyCost": monthly_cost,
            "yearlyCost": monthly_cost * 12.0,
        });
        serde_json::from_value(raw).unwrap()
    }

    #[test]
    fn cheapest_sorts_by_monthly_cost() {
        let contracts = vec![
            contract("A", "Vast", 90.0),
            contract("B", "Dynamisch", 70.0),
            contract("C", "Variabel", 80.0),
            contract("D", "Vast", 100.0),
        ];
        let top: Vec<String> = cheapest(&contracts, 3)
            .into_iter()
            .map(|c| c.provider)
            .collect();
        assert_eq!(top, ["B", "C", "A"]);
    }

    #[test]
    fn price_range_per_type() {
        let contracts = vec![
            contract("A", "Vast", 90.0),
            contract("B", "Vast", 110.0),
            contract("C", "Dynamisch", 70.0),
        ];
        assert_eq!(price_range(&contracts, "Vast"), (90.0, 110.0));
        assert_eq!(price_range(&contracts, "Dynamisch"), (70.0, 70.0));
        assert_eq!(price_range(&contracts, "Variabel"), (0.0, 0.0));
    }
}
