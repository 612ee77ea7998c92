//! Dashboard page

use crate::components::RiskBadge;
use crate::state::use_app_state;
use leptos::*;
use leptos_router::*;
use ta_core::RiskLevel;

#[component]
pub fn DashboardPage() -> impl IntoView {
    let state = use_app_state();
    let user = state.user;
    let files = state.files;
    let (viewing_reports, set_viewing_reports) = create_signal(false);
    let stats = demo_stats();

    let greeting = move || {
        let name = user.get().map(|u| u.name).unwrap_or_default();
        format!("Welcome back, {}!", name)
    };

    view! {
        <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-12">
            <div class="mb-8">
                <h1 class="text-3xl font-bold text-gray-900">{greeting}</h1>
                <p class="text-gray-600 mt-2">"Here's an overview of your content verification activity"</p>
            </div>

            // Quick actions
            <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-6 mb-8">
                <ActionCard
                    title="Upload Content"
                    description="Verify photos, videos, or audio files for authenticity"
                    accent="bg-blue-100"
                >
                    <A href="/upload" class="block w-full text-center px-4 py-2 bg-blue-600 hover:bg-blue-700 text-white rounded-md">
                        "Start Verification"
                    </A>
                </ActionCard>
                <ActionCard
                    title="View Reports"
                    description="Access detailed analysis reports and history"
                    accent="bg-green-100"
                >
                    <button
                        class="w-full px-4 py-2 border border-gray-300 rounded-md text-gray-700 hover:bg-gray-50"
                        on:click=move |_| set_viewing_reports.update(|v| *v = !*v)
                    >
                        {move || if viewing_reports.get() { "Hide Reports" } else { "View All Reports" }}
                    </button>
                </ActionCard>
                <ActionCard
                    title="Learn More"
                    description="Explore resources and educational content"
                    accent="bg-purple-100"
                >
                    <A href="/resources" class="block w-full text-center px-4 py-2 border border-gray-300 rounded-md text-gray-700 hover:bg-gray-50">
                        "Browse Resources"
                    </A>
                </ActionCard>
            </div>

            // Statistics
            <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-4 gap-6 mb-8">
                <StatCard title="Total Analyses" value=stats.total_analyses.to_string()/>
                <StatCard title="Authentic Files" value=stats.authentic_files.to_string() color="text-green-600"/>
                <StatCard title="Suspicious Files" value=stats.suspicious_files.to_string() color="text-red-600"/>
                <StatCard title="Avg. Confidence" value=format!("{}%", stats.average_confidence)/>
            </div>

            <Show when=move || !files.with(|f| f.is_empty())>
                <p class="mb-8 text-sm text-gray-600">
                    {move || {
                        let completed = files.with(|f| f.iter().filter(|file| file.is_completed()).count());
                        let total = files.with(|f| f.len());
                        format!("This browser: {} of {} uploads analyzed.", completed, total)
                    }}
                    " "
                    <A href="/upload" class="text-blue-600 hover:underline">"Open uploads"</A>
                </p>
            </Show>

            <Show
                when=move || viewing_reports.get()
                fallback=|| view! { <RecentAnalyses/> }
            >
                <ReportsTable/>
            </Show>
        </div>
    }
}

#[component]
fn ActionCard(
    title: &'static str,
    description: &'static str,
    accent: &'static str,
    children: Children,
) -> impl IntoView {
    view! {
        <div class="bg-white rounded-lg shadow hover:shadow-lg transition-shadow p-6">
            <h2 class="flex items-center text-lg font-semibold text-gray-900 mb-1">
                <span class=format!("w-8 h-8 rounded-full mr-3 {}", accent)></span>
                {title}
            </h2>
            <p class="text-sm text-gray-600 mb-4">{description}</p>
            {children()}
        </div>
    }
}

#[component]
fn StatCard(
    title: &'static str,
    value: String,
    #[prop(default = "text-gray-900")] color: &'static str,
) -> impl IntoView {
    view! {
        <div class="bg-white rounded-lg shadow p-6">
            <p class="text-sm font-medium text-gray-600">{title}</p>
            <p class=format!("text-2xl font-bold {}", color)>{value}</p>
        </div>
    }
}

#[component]
fn RecentAnalyses() -> impl IntoView {
    view! {
        <div class="bg-white rounded-lg shadow p-6">
            <h2 class="text-xl font-semibold mb-1">"Recent Analyses"</h2>
            <p class="text-sm text-gray-600 mb-4">"Your latest content verification results"</p>
            <div class="space-y-4">
                {demo_analyses().into_iter().take(3).map(|analysis| {
                    let (dot, text) = verdict_colors(analysis.authentic);
                    view! {
                        <div class="flex items-center justify-between p-4 border rounded-lg hover:bg-gray-50 transition-colors">
                            <div class="flex items-center space-x-4">
                                <div class=format!("w-3 h-3 rounded-full {}", dot)></div>
                                <div>
                                    <div class="font-medium">{analysis.filename}</div>
                                    <div class="text-sm text-gray-600">{analysis.date}</div>
                                </div>
                            </div>
                            <div class="text-right">
                                <div class=format!("font-medium {}", text)>{analysis.result_label()}</div>
                                <div class="text-sm text-gray-600">{format!("{}% confidence", analysis.confidence)}</div>
                            </div>
                        </div>
                    }
                }).collect_view()}
            </div>
        </div>
    }
}

#[component]
fn ReportsTable() -> impl IntoView {
    view! {
        <div class="bg-white rounded-lg shadow p-6 mb-8">
            <h2 class="text-xl font-semibold mb-1">"All Verification Reports"</h2>
            <p class="text-sm text-gray-600 mb-4">"Comprehensive list of all analyzed content"</p>
            <table class="min-w-full divide-y divide-gray-200">
                <thead>
                    <tr>
                        <th class="px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase">"Filename"</th>
                        <th class="px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase">"Date"</th>
                        <th class="px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase">"Result"</th>
                        <th class="px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase">"Confidence"</th>
                        <th class="px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase">"Risk Level"</th>
                        <th class="px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase">"Details"</th>
                    </tr>
                </thead>
                <tbody class="bg-white divide-y divide-gray-200">
                    {demo_analyses().into_iter().map(|analysis| {
                        let (_, text) = verdict_colors(analysis.authentic);
                        view! {
                            <tr>
                                <td class="px-6 py-4 whitespace-nowrap font-medium">{analysis.filename}</td>
                                <td class="px-6 py-4 whitespace-nowrap">{analysis.date}</td>
                                <td class=format!("px-6 py-4 whitespace-nowrap font-medium {}", text)>{analysis.result_label()}</td>
                                <td class="px-6 py-4 whitespace-nowrap">{format!("{}%", analysis.confidence)}</td>
                                <td class="px-6 py-4 whitespace-nowrap"><RiskBadge risk=analysis.risk/></td>
                                <td class="px-6 py-4 text-sm text-gray-600">{analysis.details}</td>
                            </tr>
                        }
                    }).collect_view()}
                </tbody>
            </table>
        </div>
    }
}

fn verdict_colors(authentic: bool) -> (&'static str, &'static str) {
    if authentic {
        ("bg-green-500", "text-green-600")
    } else {
        ("bg-red-500", "text-red-600")
    }
}

struct DashboardStats {
    total_analyses: u32,
    authentic_files: u32,
    suspicious_files: u32,
    average_confidence: u32,
}

struct Analysis {
    filename: &'static str,
    authentic: bool,
    confidence: u8,
    date: &'static str,
    details: &'static str,
    risk: RiskLevel,
}

impl Analysis {
    fn result_label(&self) -> &'static str {
        if self.authentic {
            "Authentic"
        } else {
            "Suspicious"
        }
    }
}

// Showcase figures; nothing here is derived from real uploads
fn demo_stats() -> DashboardStats {
    DashboardStats {
        total_analyses: 47,
        authentic_files: 32,
        suspicious_files: 15,
        average_confidence: 87,
    }
}

fn demo_analyses() -> Vec<Analysis> {
    vec![
        Analysis {
            filename: "profile_photo.jpg",
            authentic: true,
            confidence: 94,
            date: "2024-01-15",
            details: "No manipulation detected",
            risk: RiskLevel::Low,
        },
        Analysis {
            filename: "news_video.mp4",
            authentic: false,
            confidence: 78,
            date: "2024-01-14",
            details: "Potential manipulation detected",
            risk: RiskLevel::Medium,
        },
        Analysis {
            filename: "interview_audio.wav",
            authentic: true,
            confidence: 89,
            date: "2024-01-13",
            details: "No manipulation detected",
            risk: RiskLevel::Low,
        },
        Analysis {
            filename: "social_media_post.jpg",
            authentic: false,
            confidence: 62,
            date: "2024-01-12",
            details: "AI generation patterns detected",
            risk: RiskLevel::High,
        },
        Analysis {
            filename: "documentary_clip.mp4",
            authentic: true,
            confidence: 91,
            date: "2024-01-11",
            details: "No manipulation detected",
            risk: RiskLevel::Low,
        },
    ]
}
