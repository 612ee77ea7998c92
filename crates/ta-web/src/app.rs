//! Main application component

use crate::components::*;
use crate::pages::*;
use crate::state::AppState;
use leptos::*;
use leptos_router::*;

#[component]
pub fn App() -> impl IntoView {
    provide_context(AppState::init());

    view! {
        <Router>
            <div class="min-h-screen flex flex-col bg-gray-50">
                <Navbar/>
                <main class="flex-1">
                    <Routes>
                        <Route path="/" view=HomePage/>
                        <Route path="/about" view=AboutPage/>
                        <Route path="/login" view=LoginPage/>
                        <Route path="/register" view=RegisterPage/>
                        <Route path="/dashboard" view=|| view! { <RequireAuth><DashboardPage/></RequireAuth> }/>
                        <Route path="/upload" view=|| view! { <RequireAuth><UploadPage/></RequireAuth> }/>
                        <Route path="/how-it-works" view=HowItWorksPage/>
                        <Route path="/resources" view=ResourcesPage/>
                        <Route path="/tools" view=ToolsPage/>
                        <Route path="/*any" view=NotFoundPage/>
                    </Routes>
                </main>
                <Footer/>
                <Toasts/>
            </div>
        </Router>
    }
}
