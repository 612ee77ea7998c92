//! How It Works page

use crate::components::*;
use leptos::*;
use leptos_router::*;

struct Step {
    number: &'static str,
    icon: &'static str,
    title: &'static str,
    description: &'static str,
    details: Vec<&'static str>,
}

fn steps() -> Vec<Step> {
    vec![
        Step {
            number: "01",
            icon: "📤",
            title: "Upload Your Content",
            description: "Simply drag and drop or select your photos, videos, or audio files. We support all major formats and files up to 50MB.",
            details: vec!["Secure encrypted upload", "Multiple file support", "Real-time progress tracking"],
        },
        Step {
            number: "02",
            icon: "🧠",
            title: "AI Analysis Begins",
            description: "Our advanced AI algorithms analyze your content using multiple detection methods simultaneously.",
            details: vec!["Pixel-level forensics", "Metadata examination", "Pattern recognition", "Temporal consistency checks"],
        },
        Step {
            number: "03",
            icon: "🔍",
            title: "Multi-Layer Detection",
            description: "Different specialized models examine various aspects of your content to provide comprehensive analysis.",
            details: vec!["Deepfake detection", "Compression analysis", "Spectral analysis", "Artifact identification"],
        },
        Step {
            number: "04",
            icon: "📊",
            title: "Get Detailed Results",
            description: "Receive a comprehensive report with confidence scores, explanations, and actionable insights.",
            details: vec!["Confidence percentages", "Risk assessment", "Detailed explanations", "Downloadable reports"],
        },
    ]
}

#[component]
pub fn HowItWorksPage() -> impl IntoView {
    view! {
        <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-12">
            // Header
            <div class="text-center mb-16">
                <h1 class="text-4xl font-bold text-gray-900 mb-6">"How TrustAuth Works"</h1>
                <p class="text-xl text-gray-600 max-w-3xl mx-auto">
                    "Our advanced AI-powered platform uses cutting-edge technology to analyze and verify "
                    "the authenticity of digital content in just seconds."
                </p>
            </div>

            // Process Steps
            <section class="mb-20">
                <h2 class="text-3xl font-bold text-gray-900 text-center mb-12">"The Verification Process"</h2>
                <div class="space-y-12">
                    {steps().into_iter().enumerate().map(|(index, step)| {
                        let row = if index % 2 == 1 { "lg:flex-row-reverse" } else { "" };
                        view! {
                            <div class=format!("flex flex-col lg:flex-row items-center gap-8 {}", row)>
                                <div class="flex-1 bg-white rounded-lg shadow hover:shadow-lg transition-shadow p-6">
                                    <div class="flex items-center gap-4 mb-2">
                                        <div class="text-4xl">{step.icon}</div>
                                        <div class="text-3xl font-bold text-blue-600">{step.number}</div>
                                    </div>
                                    <h3 class="text-2xl font-semibold text-gray-900 mb-2">{step.title}</h3>
                                    <p class="text-lg text-gray-600 mb-4">{step.description}</p>
                                    <CheckList items=step.details/>
                                </div>
                                <div class="flex-1 lg:max-w-md">
                                    <div class="bg-gradient-to-br from-blue-100 to-purple-100 rounded-lg p-8 h-64 flex items-center justify-center">
                                        <div class="text-6xl opacity-50">{step.icon}</div>
                                    </div>
                                </div>
                            </div>
                        }
                    }).collect_view()}
                </div>
            </section>

            // Technology
            <section class="mb-20">
                <div class="text-center mb-12">
                    <h2 class="text-3xl font-bold text-gray-900 mb-4">"The Technology Behind TrustAuth"</h2>
                    <p class="text-gray-600 max-w-2xl mx-auto">
                        "We leverage state-of-the-art artificial intelligence and digital forensics techniques "
                        "to provide unparalleled accuracy in content verification."
                    </p>
                </div>
                <div class="grid grid-cols-1 md:grid-cols-2 gap-8">
                    <FeatureCard
                        title="Convolutional Neural Networks"
                        description="Deep learning models trained specifically for detecting visual inconsistencies and manipulation patterns"
                        items=vec!["Face manipulation detection", "Image artifact analysis", "Texture inconsistency detection"]
                        marker="•"
                    />
                    <FeatureCard
                        title="Temporal Analysis"
                        description="Advanced algorithms that examine frame-to-frame consistency in video content"
                        items=vec!["Video deepfake detection", "Motion pattern analysis", "Lip-sync verification"]
                        marker="•"
                    />
                    <FeatureCard
                        title="Spectral Analysis"
                        description="Frequency domain analysis to detect audio manipulation and voice synthesis"
                        items=vec!["Voice cloning detection", "Audio artifact identification", "Compression pattern analysis"]
                        marker="•"
                    />
                    <FeatureCard
                        title="Blockchain Verification"
                        description="Immutable content fingerprinting for establishing provenance and authenticity"
                        items=vec!["Content certification", "Timestamp verification", "Chain of custody tracking"]
                        marker="•"
                    />
                </div>
            </section>

            // Accuracy & Performance
            <section class="mb-20">
                <div class="bg-white rounded-lg p-8">
                    <h2 class="text-3xl font-bold text-gray-900 text-center mb-12">"Accuracy & Performance"</h2>
                    <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-4 gap-8">
                        <StatFigure value="99.2%" label="Image Detection Accuracy"/>
                        <StatFigure value="97.8%" label="Video Analysis Accuracy" color="text-green-600"/>
                        <StatFigure value="96.5%" label="Audio Verification Accuracy" color="text-purple-600"/>
                        <StatFigure value="<30s" label="Average Processing Time" color="text-orange-600"/>
                    </div>
                </div>
            </section>

            // Security & Privacy
            <section class="mb-20">
                <div class="bg-gradient-to-r from-gray-900 to-blue-900 rounded-lg p-8 text-white">
                    <h2 class="text-3xl font-bold mb-8 text-center">"Security & Privacy"</h2>
                    <div class="grid grid-cols-1 md:grid-cols-3 gap-8 text-center">
                        <div>
                            <h3 class="text-xl font-bold mb-2">"End-to-End Encryption"</h3>
                            <p class="text-gray-300">"All uploads are encrypted during transmission and processing"</p>
                        </div>
                        <div>
                            <h3 class="text-xl font-bold mb-2">"Automatic Deletion"</h3>
                            <p class="text-gray-300">"Files are automatically deleted after analysis completion"</p>
                        </div>
                        <div>
                            <h3 class="text-xl font-bold mb-2">"GDPR Compliant"</h3>
                            <p class="text-gray-300">"Full compliance with international privacy regulations"</p>
                        </div>
                    </div>
                </div>
            </section>

            // Call to Action
            <section class="text-center bg-white rounded-lg shadow p-8">
                <h2 class="text-3xl font-bold text-gray-900 mb-4">"Ready to Verify Your Content?"</h2>
                <p class="text-gray-600 mb-6 max-w-2xl mx-auto">
                    "Join thousands of users who trust TrustAuth to verify their digital content. "
                    "Get started today with our free plan or explore our advanced features."
                </p>
                <div class="flex flex-col sm:flex-row gap-4 justify-center">
                    <A href="/register" class="px-6 py-3 bg-blue-600 hover:bg-blue-700 text-white font-medium rounded-lg">
                        "Start Free Verification"
                    </A>
                    <A href="/tools" class="px-6 py-3 border border-gray-300 text-gray-700 hover:bg-gray-50 font-medium rounded-lg">
                        "Explore Our Tools"
                    </A>
                </div>
            </section>
        </div>
    }
}
