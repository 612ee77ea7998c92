use crate::components::*;
use leptos::*;

#[component]
pub fn AboutPage() -> impl IntoView {
    view! {
        <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-12">
            <div class="text-center mb-16">
                <h1 class="text-4xl font-bold text-gray-900 mb-6">"About TrustAuth"</h1>
                <p class="text-xl text-gray-600 max-w-3xl mx-auto">
                    "We build tools that help people decide whether a piece of digital content can be trusted. "
                    "Our mission is to rebuild confidence in what we see and hear online."
                </p>
            </div>

            <div class="grid grid-cols-1 md:grid-cols-3 gap-8 mb-16">
                <FeatureCard
                    icon="🎯"
                    title="Our Mission"
                    description="Give journalists, platforms and everyday users a reliable authenticity check for any media file."
                />
                <FeatureCard
                    icon="🔬"
                    title="Our Approach"
                    description="Combine forensic analysis with machine learning models trained on authentic and manipulated media."
                />
                <FeatureCard
                    icon="🤝"
                    title="Our Commitment"
                    description="Privacy first: uploads are encrypted in transit and deleted once analysis completes."
                />
            </div>

            <div class="bg-white rounded-lg shadow p-8">
                <h2 class="text-2xl font-bold text-gray-900 mb-4">"What We Value"</h2>
                <CheckList items=vec![
                    "Transparent results with clear explanations",
                    "Continuous research into new manipulation techniques",
                    "Respect for user privacy and data ownership",
                    "Accessible tools for individuals and organisations alike",
                ]/>
            </div>
        </div>
    }
}
