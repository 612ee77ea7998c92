use leptos::*;
use leptos_router::*;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <div class="max-w-3xl mx-auto px-4 py-24 text-center">
            <h1 class="text-6xl font-bold text-gray-900 mb-4">"404"</h1>
            <p class="text-xl text-gray-600 mb-8">"Oops! Page not found"</p>
            <A href="/" class="text-blue-600 hover:underline">"Return to Home"</A>
        </div>
    }
}
