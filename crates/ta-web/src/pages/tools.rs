//! Detection tools page

use crate::components::*;
use leptos::*;
use leptos_router::*;

struct Tool {
    icon: &'static str,
    name: &'static str,
    description: &'static str,
    accuracy: &'static str,
    features: [&'static str; 4],
}

static TOOLS: [Tool; 3] = [
    Tool {
        icon: "📸",
        name: "Image Authenticator",
        description: "Advanced AI-powered image verification to detect deepfakes, face swaps, and digital manipulations",
        accuracy: "99.2%",
        features: ["Deepfake detection", "Face manipulation analysis", "Metadata verification", "Pixel-level forensics"],
    },
    Tool {
        icon: "🎥",
        name: "Video Analyzer",
        description: "Comprehensive video content analysis for detecting synthetic media and temporal inconsistencies",
        accuracy: "97.8%",
        features: ["Frame-by-frame analysis", "Temporal consistency check", "Audio-visual synchronization", "Compression artifact detection"],
    },
    Tool {
        icon: "🎵",
        name: "Audio Verifier",
        description: "Voice cloning and audio manipulation detection using spectral analysis and AI models",
        accuracy: "96.5%",
        features: ["Voice cloning detection", "Audio deepfake analysis", "Spectral inconsistency check", "Background noise analysis"],
    },
];

static DETECTS: [&str; 8] = [
    "Deepfakes and face swaps",
    "AI-generated content",
    "Digital image manipulation",
    "Voice cloning and audio synthesis",
    "Video frame interpolation",
    "CGI and computer-generated imagery",
    "Photo editing and retouching",
    "Synthetic media creation tools",
];

#[component]
pub fn ToolsPage() -> impl IntoView {
    view! {
        <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-12">
            <div class="text-center mb-16">
                <h1 class="text-4xl font-bold text-gray-900 mb-6">"Advanced Detection Tools"</h1>
                <p class="text-xl text-gray-600 max-w-3xl mx-auto">
                    "Our suite of AI-powered tools provides comprehensive analysis for all types of digital content, "
                    "helping you identify authentic media and detect sophisticated manipulations."
                </p>
            </div>

            // Main tools
            <div class="grid grid-cols-1 lg:grid-cols-3 gap-8 mb-16">
                {TOOLS.iter().map(|tool| view! {
                    <div class="bg-white rounded-lg shadow hover:shadow-lg transition-shadow p-6 space-y-4">
                        <div class="text-4xl">{tool.icon}</div>
                        <h3 class="text-xl font-semibold text-gray-900">{tool.name}</h3>
                        <p class="text-gray-600">{tool.description}</p>
                        <div class="flex items-center justify-between">
                            <span class="text-sm font-medium text-gray-600">"Accuracy Rate"</span>
                            <span class="text-lg font-bold text-green-600">{tool.accuracy}</span>
                        </div>
                        <div>
                            <h4 class="font-medium mb-2">"Key Features:"</h4>
                            <CheckList items=tool.features.to_vec()/>
                        </div>
                        <A href="/upload" class="block w-full text-center px-4 py-2 bg-blue-600 hover:bg-blue-700 text-white rounded-md">
                            {format!("Try {}", tool.name)}
                        </A>
                    </div>
                }).collect_view()}
            </div>

            // Detection capabilities
            <div class="grid grid-cols-1 lg:grid-cols-2 gap-12 mb-16">
                <div>
                    <h2 class="text-3xl font-bold text-gray-900 mb-6">"What We Can Detect"</h2>
                    <div class="grid grid-cols-1 sm:grid-cols-2 gap-4">
                        {DETECTS.iter().map(|capability| view! {
                            <div class="flex items-center p-3 bg-white rounded-lg border">
                                <span class="text-green-600 mr-2">"✓"</span>
                                <span class="text-gray-700">{*capability}</span>
                            </div>
                        }).collect_view()}
                    </div>
                </div>
                <div class="bg-blue-600 rounded-lg p-8 text-white">
                    <h3 class="text-2xl font-bold mb-4">"How Our Technology Works"</h3>
                    <div class="space-y-4">
                        <TechStep number="1" title="Upload & Analysis" description="Your content is securely uploaded and processed through our AI pipeline"/>
                        <TechStep number="2" title="Multi-Layer Detection" description="Multiple AI models analyze different aspects of your content simultaneously"/>
                        <TechStep number="3" title="Comprehensive Report" description="Receive detailed results with confidence scores and explanations"/>
                    </div>
                </div>
            </div>

            // API integration
            <div class="bg-white rounded-lg shadow p-8 mb-16">
                <div class="text-center mb-8">
                    <h2 class="text-2xl font-bold text-gray-900">"API Integration"</h2>
                    <p class="text-gray-600">"Integrate our verification tools directly into your applications and workflows"</p>
                </div>
                <div class="grid grid-cols-1 md:grid-cols-3 gap-6 text-center">
                    <div>
                        <h3 class="font-semibold mb-2">"RESTful API"</h3>
                        <p class="text-gray-600 text-sm">"Easy-to-use REST endpoints for all verification tools"</p>
                    </div>
                    <div>
                        <h3 class="font-semibold mb-2">"Real-time Processing"</h3>
                        <p class="text-gray-600 text-sm">"Get verification results in seconds, not minutes"</p>
                    </div>
                    <div>
                        <h3 class="font-semibold mb-2">"Detailed Documentation"</h3>
                        <p class="text-gray-600 text-sm">"Comprehensive guides and code examples"</p>
                    </div>
                </div>
            </div>

            // CTA
            <div class="text-center bg-white rounded-lg p-8">
                <h2 class="text-3xl font-bold text-gray-900 mb-4">"Ready to Start Verifying?"</h2>
                <p class="text-gray-600 mb-6">"Try our tools today and see how easy it is to detect manipulated content"</p>
                <div class="flex flex-col sm:flex-row gap-4 justify-center">
                    <A href="/register" class="px-6 py-3 bg-blue-600 hover:bg-blue-700 text-white font-medium rounded-lg">
                        "Get Started Free"
                    </A>
                    <button class="px-6 py-3 border border-gray-300 text-gray-700 hover:bg-gray-50 font-medium rounded-lg">
                        "Contact Sales"
                    </button>
                </div>
            </div>
        </div>
    }
}

#[component]
fn TechStep(number: &'static str, title: &'static str, description: &'static str) -> impl IntoView {
    view! {
        <div class="flex items-start">
            <div class="w-8 h-8 bg-white bg-opacity-20 rounded-full flex items-center justify-center mr-4 flex-shrink-0">
                <span class="text-sm font-bold">{number}</span>
            </div>
            <div>
                <h4 class="font-semibold mb-1">{title}</h4>
                <p class="text-blue-100 text-sm">{description}</p>
            </div>
        </div>
    }
}
