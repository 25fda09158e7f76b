use leptos::*;

/// Single metric tile on the personal dashboard
#[component]
pub fn MetricCard(label: &'static str, value: String, #[prop(default = "")] unit: &'static str) -> impl IntoView {
    view! {
        <div class="metric-card">
            <div class="metric-content">
                <p class="metric-label">{label}</p>
                <p class="metric-value">
                    {value}
                    {(!unit.is_empty()).then(|| view! { <span class="unit">{format!(" {unit}")}</span> })}
                </p>
            </div>
        </div>
    }
}
