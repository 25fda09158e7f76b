use leptos::*;
use leptos_router::*;

use crate::state::use_session;

/// Layout component with navbar and content outlet
#[component]
pub fn Layout() -> impl IntoView {
    view! {
        <div class="layout">
            <Navbar />
            <main class="main-content">
                <Outlet />
            </main>
        </div>
    }
}

/// Navbar with flow tabs and restart action. Tab visibility follows the
/// session: the dashboard tab only exists for smart-meter profiles.
#[component]
fn Navbar() -> impl IntoView {
    let session = use_session();
    let navigate = use_navigate();
    let pathname = use_location().pathname;

    let is_active = move |path: &'static str| {
        let current = pathname.get();
        if path == "/" {
            current == "/"
        } else {
            current.starts_with(path)
        }
    };
    let tab_class = move |path: &'static str| if is_active(path) { "tab active" } else { "tab" };

    let has_profile = move || session.profile().is_some();
    let has_dashboard = move || {
        session
            .profile()
            .map(|p| p.is_smart_meter())
            .unwrap_or(false)
    };

    // Restart discards the profile entirely; there is no partial reset.
    let restart = move |_| {
        session.clear();
        navigate("/", Default::default());
    };

    view! {
        <nav class="navbar">
            <div class="navbar-content">
                <h1 class="navbar-title">"Energievergelijker"</h1>
                <div class="navbar-tabs">
                    <A href="/" class=move || tab_class("/")>
                        "Formulier"
                    </A>
                    {move || {
                        has_dashboard()
                            .then(|| {
                                view! {
                                    <A href="/dashboard" class=move || tab_class("/dashboard")>
                                        "Jouw Profiel"
                                    </A>
                                }
                            })
                    }}
                    {move || {
                        has_profile()
                            .then(|| {
                                view! {
                                    <A href="/compare" class=move || tab_class("/compare")>
                                        "Vergelijken"
                                    </A>
                                }
                            })
                    }}
                </div>
                <div class="navbar-actions">
                    <button class="restart-button" on:click=restart>
                        "Opnieuw beginnen"
                    </button>
                </div>
            </div>
        </nav>
    }
}
