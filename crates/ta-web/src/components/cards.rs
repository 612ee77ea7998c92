//! Card components for the informational pages

use leptos::*;

#[component]
pub fn FeatureCard(
    #[prop(optional)] icon: &'static str,
    title: &'static str,
    description: &'static str,
    #[prop(optional)] items: Vec<&'static str>,
    #[prop(default = "✓")] marker: &'static str,
) -> impl IntoView {
    view! {
        <div class="bg-white rounded-lg shadow hover:shadow-lg transition-shadow p-6">
            <Show when=move || !icon.is_empty()>
                <div class="text-4xl mb-4">{icon}</div>
            </Show>
            <h3 class="text-xl font-semibold text-gray-900 mb-2">{title}</h3>
            <p class="text-gray-600 mb-4">{description}</p>
            <CheckList items=items marker=marker/>
        </div>
    }
}

#[component]
pub fn CheckList(
    items: Vec<&'static str>,
    #[prop(default = "✓")] marker: &'static str,
) -> impl IntoView {
    view! {
        <ul class="space-y-1">
            {items.into_iter().map(|item| view! {
                <li class="text-sm text-gray-600 flex items-center">
                    <span class="text-blue-600 mr-2">{marker}</span>
                    {item}
                </li>
            }).collect_view()}
        </ul>
    }
}

#[component]
pub fn NumberedStep(
    number: &'static str,
    title: &'static str,
    description: &'static str,
) -> impl IntoView {
    view! {
        <div class="text-center">
            <div class="w-16 h-16 bg-white bg-opacity-20 rounded-full flex items-center justify-center mx-auto mb-4">
                <span class="text-2xl font-bold">{number}</span>
            </div>
            <h3 class="text-lg font-semibold mb-2">{title}</h3>
            <p class="opacity-80">{description}</p>
        </div>
    }
}

#[component]
pub fn StatFigure(
    value: &'static str,
    label: &'static str,
    #[prop(default = "text-blue-600")] color: &'static str,
) -> impl IntoView {
    view! {
        <div class="text-center">
            <div class=format!("text-4xl font-bold mb-2 {}", color)>{value}</div>
            <div class="text-gray-600">{label}</div>
        </div>
    }
}
