use leptos::*;

use crate::models::Contract;

/// Euro amount with Dutch decimal comma
pub fn euro(value: f64) -> String {
    format!("{value:.2}").replace('.', ",")
}

/// One contract offer in the comparison grid
#[component]
pub fn ContractCard(contract: Contract, #[prop(into)] on_select: Callback<Contract>) -> impl IntoView {
    let initial = contract.provider.chars().next().unwrap_or('?');
    let provider = contract.provider.clone();
    let contract_type = contract.contract_type.clone();
    let monthly = contract.monthly_cost;
    let yearly = contract.yearly_cost;
    let selected = contract.clone();

    view! {
        <div class="contract-card" on:click=move |_| on_select.call(selected.clone())>
            <div class="card-header">
                <div class="provider-icon">{initial}</div>
                <h3>{provider}</h3>
            </div>
            <div class="card-content">
                <div class="main-price-row">
                    <span class="price-amount">{format!("€{}", euro(monthly))}</span>
                    <span class="price-period">"/mnd"</span>
                </div>
                <div class="rates-box">
                    <div class="rate-row">
                        <span>"Type:"</span>
                        <span class="rate-value">{contract_type}</span>
                    </div>
                    <div class="rate-row">
                        <span>"Jaar:"</span>
                        <span class="rate-value">{format!("€{yearly:.0}")}</span>
                    </div>
                </div>
            </div>
            <button class="select-btn">"Bekijk Details"</button>
        </div>
    }
}
