//! Home page

use crate::components::*;
use leptos::*;
use leptos_router::*;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div>
            // Hero Section
            <section class="bg-gradient-to-br from-blue-900 via-blue-800 to-purple-900 text-white">
                <div class="max-w-7xl mx-auto px-4 py-24">
                    <div class="max-w-4xl mx-auto text-center">
                        <h1 class="text-5xl md:text-6xl font-bold mb-6">
                            "Rebuild Trust in "
                            <span class="text-transparent bg-clip-text bg-gradient-to-r from-cyan-400 to-blue-300">
                                "Digital Content"
                            </span>
                        </h1>
                        <p class="text-xl md:text-2xl text-blue-100 mb-8">
                            "Verify photos, videos and audio in seconds. TrustAuth flags deepfakes, "
                            "edits and synthetic media before they mislead your audience."
                        </p>
                        <div class="flex flex-col sm:flex-row gap-4 justify-center">
                            <A href="/upload" class="px-8 py-4 bg-cyan-500 hover:bg-cyan-400 text-white font-semibold rounded-lg transition">
                                "Verify Content"
                            </A>
                            <A href="/how-it-works" class="px-8 py-4 bg-white/10 hover:bg-white/20 text-white font-semibold rounded-lg border border-white/30 transition">
                                "How It Works"
                            </A>
                        </div>
                    </div>
                </div>
            </section>

            // Problem Statement
            <section class="py-20 bg-gray-50">
                <div class="max-w-7xl mx-auto px-4">
                    <div class="max-w-3xl mx-auto text-center mb-16">
                        <h2 class="text-3xl md:text-4xl font-bold text-gray-900 mb-4">"Seeing Is No Longer Believing"</h2>
                        <p class="text-lg text-gray-600">
                            "Generative tools can fabricate a face, a voice or an entire event. "
                            "Newsrooms, platforms and individuals need a fast way to tell what is real."
                        </p>
                    </div>
                    <div class="grid md:grid-cols-3 gap-8">
                        <FeatureCard
                            icon="🎭"
                            title="Deepfakes"
                            description="Face swaps and synthetic video that are indistinguishable to the naked eye."
                        />
                        <FeatureCard
                            icon="🎙️"
                            title="Voice Cloning"
                            description="A few seconds of audio are enough to imitate anyone convincingly."
                        />
                        <FeatureCard
                            icon="🖼️"
                            title="Edited Images"
                            description="Subtle retouching and compositing that changes the story a picture tells."
                        />
                    </div>
                </div>
            </section>

            // Figures
            <section class="py-20 bg-white">
                <div class="max-w-7xl mx-auto px-4">
                    <div class="grid grid-cols-2 md:grid-cols-4 gap-8">
                        <StatFigure value="99.2%" label="Image Detection Accuracy"/>
                        <StatFigure value="97.8%" label="Video Analysis Accuracy" color="text-green-600"/>
                        <StatFigure value="96.5%" label="Audio Verification Accuracy" color="text-purple-600"/>
                        <StatFigure value="<30s" label="Average Processing Time" color="text-orange-600"/>
                    </div>
                </div>
            </section>

            // CTA
            <section class="py-20 bg-blue-600 text-white">
                <div class="max-w-3xl mx-auto px-4 text-center">
                    <h2 class="text-3xl font-bold mb-4">"Start Verifying Today"</h2>
                    <p class="text-blue-100 mb-8">"Create a free account and analyze your first file in under a minute."</p>
                    <A href="/register" class="px-8 py-4 bg-white text-blue-600 font-semibold rounded-lg hover:bg-blue-50 transition">
                        "Get Started Free"
                    </A>
                </div>
            </section>
        </div>
    }
}
