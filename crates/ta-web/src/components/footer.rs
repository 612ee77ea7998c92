use leptos::*;
use leptos_router::*;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="bg-gray-900 text-white">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-12">
                <div class="grid grid-cols-1 md:grid-cols-4 gap-8">
                    <div class="col-span-1 md:col-span-2">
                        <h3 class="text-2xl font-bold text-blue-400 mb-4">"TrustAuth"</h3>
                        <p class="text-gray-300 mb-4">
                            "Rebuilding trust in digital content through advanced authentication and verification technologies."
                        </p>
                        <p class="text-gray-400 text-sm">"© 2024 TrustAuth. All rights reserved."</p>
                    </div>
                    <div>
                        <h4 class="text-lg font-semibold mb-4">"Quick Links"</h4>
                        <div class="space-y-2">
                            <A href="/about" class="block text-gray-300 hover:text-blue-400 transition-colors">"About"</A>
                            <A href="/tools" class="block text-gray-300 hover:text-blue-400 transition-colors">"Tools"</A>
                            <A href="/resources" class="block text-gray-300 hover:text-blue-400 transition-colors">"Resources"</A>
                            <A href="/how-it-works" class="block text-gray-300 hover:text-blue-400 transition-colors">"How It Works"</A>
                        </div>
                    </div>
                    <div>
                        <h4 class="text-lg font-semibold mb-4">"Contact"</h4>
                        <div class="space-y-2 text-gray-300">
                            <p>"support@trustauth.com"</p>
                            <p>"+1 (555) 123-4567"</p>
                            <p>"24/7 Support Available"</p>
                        </div>
                    </div>
                </div>
            </div>
        </footer>
    }
}
