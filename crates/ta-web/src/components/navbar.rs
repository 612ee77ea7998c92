//! Site navigation

use crate::state::use_app_state;
use leptos::*;
use leptos_router::*;

const LINKS: [(&str, &str); 4] = [
    ("/about", "About"),
    ("/tools", "Tools"),
    ("/resources", "Resources"),
    ("/how-it-works", "How It Works"),
];

#[component]
pub fn Navbar() -> impl IntoView {
    let state = use_app_state();
    let user = state.user;
    let (mobile_open, set_mobile_open) = create_signal(false);
    let navigate = use_navigate();

    let logout = move |_: ev::MouseEvent| {
        state.logout();
        set_mobile_open.set(false);
        navigate("/", Default::default());
    };
    let logout_mobile = logout.clone();

    view! {
        <nav class="bg-white shadow-lg sticky top-0 z-50">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="flex justify-between h-16">
                    // Logo
                    <div class="flex items-center">
                        <A href="/" class="flex-shrink-0 flex items-center">
                            <span class="text-2xl font-bold text-blue-600">"TrustAuth"</span>
                        </A>
                    </div>

                    // Desktop Nav
                    <div class="hidden md:flex items-center space-x-8">
                        {LINKS.iter().map(|(href, label)| view! {
                            <A href=*href class="text-gray-700 hover:text-blue-600 transition-colors">{*label}</A>
                        }).collect_view()}
                        <Show
                            when=move || user.get().is_some()
                            fallback=|| view! {
                                <div class="flex items-center space-x-4">
                                    <A href="/login" class="px-4 py-2 border border-gray-300 rounded-md text-gray-700 hover:bg-gray-50">"Login"</A>
                                    <A href="/register" class="px-4 py-2 bg-blue-600 hover:bg-blue-700 text-white rounded-md">"Register"</A>
                                </div>
                            }
                        >
                            <div class="flex items-center space-x-4">
                                <A href="/dashboard" class="px-4 py-2 border border-gray-300 rounded-md text-gray-700 hover:bg-gray-50">"Dashboard"</A>
                                <A href="/upload" class="px-4 py-2 bg-blue-600 hover:bg-blue-700 text-white rounded-md">"Upload"</A>
                                <button class="px-4 py-2 text-gray-700 hover:bg-gray-100 rounded-md" on:click=logout.clone()>
                                    "Logout"
                                </button>
                            </div>
                        </Show>
                    </div>

                    // Mobile menu button
                    <div class="md:hidden flex items-center">
                        <button
                            class="text-gray-700 hover:text-blue-600"
                            on:click=move |_| set_mobile_open.update(|v| *v = !*v)
                        >
                            <Show
                                when=move || mobile_open.get()
                                fallback=|| view! {
                                    <svg class="h-6 w-6" fill="none" viewBox="0 0 24 24" stroke="currentColor">
                                        <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M4 6h16M4 12h16M4 18h16"/>
                                    </svg>
                                }
                            >
                                <svg class="h-6 w-6" fill="none" viewBox="0 0 24 24" stroke="currentColor">
                                    <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M6 18L18 6M6 6l12 12"/>
                                </svg>
                            </Show>
                        </button>
                    </div>
                </div>

                // Mobile menu
                <Show when=move || mobile_open.get()>
                    <div class="md:hidden">
                        <div class="px-2 pt-2 pb-3 space-y-1 sm:px-3 bg-white shadow-lg">
                            {LINKS.iter().map(|(href, label)| view! {
                                <A href=*href class="block px-3 py-2 text-gray-700 hover:text-blue-600">{*label}</A>
                            }).collect_view()}
                            {
                            let logout_mobile = logout_mobile.clone();
                            view! {
                            <Show
                                when=move || user.get().is_some()
                                fallback=|| view! {
                                    <A href="/login" class="block px-3 py-2 text-gray-700 hover:text-blue-600">"Login"</A>
                                    <A href="/register" class="block px-3 py-2 text-gray-700 hover:text-blue-600">"Register"</A>
                                }
                            >
                                <A href="/dashboard" class="block px-3 py-2 text-gray-700 hover:text-blue-600">"Dashboard"</A>
                                <A href="/upload" class="block px-3 py-2 text-gray-700 hover:text-blue-600">"Upload"</A>
                                <button
                                    class="block w-full text-left px-3 py-2 text-gray-700 hover:text-blue-600"
                                    on:click=logout_mobile.clone()
                                >
                                    "Logout"
                                </button>
                            </Show>
                            }
                            }
                        </div>
                    </div>
                </Show>
            </div>
        </nav>
    }
}
