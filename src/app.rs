use leptos::*;
use leptos_router::*;

use crate::components::layout::Layout;
use crate::components::ComparePage;
use crate::components::DashboardPage;
use crate::components::HomePage;
use crate::state::provide_session_context;

/// Main application component with routing
#[component]
pub fn App() -> impl IntoView {
    // The session profile lives at the app root; every view below reads it
    // through context and only replaces it via submit/restart actions.
    provide_session_context();

    view! {
        <Router>
            <Routes>
                <Route path="/" view=Layout>
                    <Route path="" view=HomePage />
                    <Route path="dashboard" view=DashboardPage />
                    <Route path="compare" view=ComparePage />
                </Route>
            </Routes>
        </Router>
    }
}
