//! Educational resources page

use crate::components::NumberedStep;
use leptos::*;

struct Article {
    title: &'static str,
    description: &'static str,
    category: &'static str,
    read_time: &'static str,
    featured: bool,
}

static ARTICLES: [Article; 4] = [
    Article {
        title: "Understanding Deepfakes: A Complete Guide",
        description: "Learn about the technology behind deepfakes, how they're created, and how to spot them.",
        category: "Education",
        read_time: "8 min read",
        featured: true,
    },
    Article {
        title: "Digital Forensics Best Practices",
        description: "Professional techniques for analyzing digital media and preserving evidence integrity.",
        category: "Technical",
        read_time: "12 min read",
        featured: false,
    },
    Article {
        title: "The Rise of Synthetic Media",
        description: "Exploring the growth of AI-generated content and its implications for society.",
        category: "Research",
        read_time: "6 min read",
        featured: true,
    },
    Article {
        title: "Audio Deepfakes: Detection Methods",
        description: "Technical overview of voice cloning detection and audio verification techniques.",
        category: "Technical",
        read_time: "10 min read",
        featured: false,
    },
];

/// (name, description, kind)
static FREE_TOOLS: [(&str, &str, &str); 3] = [
    ("Image Metadata Analyzer", "Free tool to examine EXIF data and metadata in digital images", "Free Tool"),
    ("Video Compression Checker", "Analyze video compression patterns to detect potential manipulation", "Free Tool"),
    ("Research Dataset", "Access our curated dataset of authentic and manipulated media samples", "Dataset"),
];

/// (title, description, length)
static WHITEPAPERS: [(&str, &str, &str); 3] = [
    ("The State of Digital Content Authenticity 2024", "Comprehensive analysis of current trends in digital manipulation and detection", "42 pages"),
    ("AI Detection Algorithms: Performance Comparison", "Technical evaluation of leading deepfake detection models and methodologies", "28 pages"),
    ("Legal Implications of Synthetic Media", "Exploring the legal landscape surrounding deepfakes and digital evidence", "35 pages"),
];

static FAQ: [(&str, &str); 3] = [
    (
        "What types of manipulations can you detect?",
        "Our tools can detect a wide range of manipulations including deepfakes, face swaps, voice cloning, \
         image editing, CGI insertion, and other AI-generated content. We use multiple detection algorithms \
         to provide comprehensive analysis.",
    ),
    (
        "How accurate are your detection algorithms?",
        "Our detection accuracy varies by content type, with image detection at 99.2%, video at 97.8%, \
         and audio at 96.5%. We continuously update our models with the latest research and detection techniques \
         to maintain high accuracy rates.",
    ),
    (
        "Can I use these tools for legal evidence?",
        "While our tools provide professional-grade analysis, the admissibility of digital evidence varies \
         by jurisdiction. We recommend consulting with legal experts and following proper chain of custody \
         procedures when collecting evidence.",
    ),
];

fn category_style(category: &str) -> &'static str {
    match category {
        "Education" => "bg-blue-600 text-white",
        "Technical" => "bg-gray-100 text-gray-800",
        _ => "border border-gray-300 text-gray-700",
    }
}

#[component]
pub fn ResourcesPage() -> impl IntoView {
    view! {
        <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-12">
            <div class="text-center mb-16">
                <h1 class="text-4xl font-bold text-gray-900 mb-6">"Educational Resources"</h1>
                <p class="text-xl text-gray-600 max-w-3xl mx-auto">
                    "Expand your knowledge about digital content authenticity, detection techniques, "
                    "and the latest research in the field of media verification."
                </p>
            </div>

            // Articles
            <section class="mb-16">
                <h2 class="text-3xl font-bold text-gray-900 mb-8">"Latest Articles"</h2>
                <div class="grid grid-cols-1 md:grid-cols-2 gap-8">
                    {ARTICLES.iter().map(|article| {
                        let featured = article.featured;
                        let ring = if featured { "ring-2 ring-blue-500" } else { "" };
                        view! {
                            <div class=format!("bg-white rounded-lg shadow hover:shadow-lg transition-shadow p-6 {}", ring)>
                                <div class="flex items-center justify-between mb-2">
                                    <span class=format!("px-2 py-1 text-xs font-medium rounded-full {}", category_style(article.category))>
                                        {article.category}
                                    </span>
                                    <Show when=move || featured>
                                        <span class="px-2 py-1 text-xs font-medium rounded-full bg-red-600 text-white">"Featured"</span>
                                    </Show>
                                </div>
                                <h3 class="text-xl font-semibold text-gray-900 mb-2">{article.title}</h3>
                                <p class="text-gray-600 mb-4">{article.description}</p>
                                <div class="flex items-center justify-between">
                                    <span class="text-sm text-gray-500">{article.read_time}</span>
                                    <button class="text-blue-600 hover:text-blue-800 font-medium">"Read More →"</button>
                                </div>
                            </div>
                        }
                    }).collect_view()}
                </div>
            </section>

            // Tools & Utilities
            <section class="mb-16">
                <h2 class="text-3xl font-bold text-gray-900 mb-8">"Free Tools & Utilities"</h2>
                <div class="grid grid-cols-1 md:grid-cols-3 gap-6">
                    {FREE_TOOLS.iter().map(|(name, description, kind)| view! {
                        <div class="bg-white rounded-lg shadow hover:shadow-lg transition-shadow p-6">
                            <span class="px-2 py-1 text-xs font-medium rounded-full border border-gray-300 text-gray-700">{*kind}</span>
                            <h3 class="text-lg font-semibold text-gray-900 mt-3 mb-2">{*name}</h3>
                            <p class="text-gray-600 mb-4">{*description}</p>
                            <button class="w-full bg-blue-600 text-white py-2 px-4 rounded hover:bg-blue-700 transition-colors">
                                "Access Tool"
                            </button>
                        </div>
                    }).collect_view()}
                </div>
            </section>

            // Whitepapers
            <section class="mb-16">
                <h2 class="text-3xl font-bold text-gray-900 mb-8">"Research & Whitepapers"</h2>
                <div class="space-y-6">
                    {WHITEPAPERS.iter().map(|(title, description, length)| view! {
                        <div class="bg-white rounded-lg shadow hover:shadow-lg transition-shadow p-6 flex items-center justify-between">
                            <div class="flex-1">
                                <h3 class="text-xl font-semibold text-gray-900 mb-2">{*title}</h3>
                                <p class="text-gray-600 mb-2">{*description}</p>
                                <span class="text-sm text-gray-500">{*length}</span>
                            </div>
                            <button class="ml-6 bg-gray-900 text-white py-2 px-6 rounded hover:bg-gray-800 transition-colors">
                                "Download PDF"
                            </button>
                        </div>
                    }).collect_view()}
                </div>
            </section>

            // Learning path
            <section class="mb-16">
                <div class="bg-gradient-to-r from-blue-600 to-purple-600 rounded-lg p-8 text-white">
                    <h2 class="text-3xl font-bold mb-6">"Recommended Learning Path"</h2>
                    <div class="grid grid-cols-1 md:grid-cols-3 gap-6">
                        <NumberedStep number="1" title="Fundamentals" description="Start with basics of digital media and manipulation techniques"/>
                        <NumberedStep number="2" title="Detection Methods" description="Learn about AI-powered detection algorithms and forensic techniques"/>
                        <NumberedStep number="3" title="Practical Application" description="Practice with real examples and case studies"/>
                    </div>
                </div>
            </section>

            // FAQ
            <section>
                <h2 class="text-3xl font-bold text-gray-900 mb-8">"Frequently Asked Questions"</h2>
                <div class="space-y-6">
                    {FAQ.iter().map(|(question, answer)| view! {
                        <div class="bg-white rounded-lg shadow p-6">
                            <h3 class="text-lg font-semibold mb-2">{*question}</h3>
                            <p class="text-gray-600">{*answer}</p>
                        </div>
                    }).collect_view()}
                </div>
            </section>
        </div>
    }
}
