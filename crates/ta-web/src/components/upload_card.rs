//! One queued file: status while in flight, the verdict once completed

use crate::components::{RiskBadge, StatusBadge, VerdictBadge};
use leptos::*;
use ta_core::report::format_file_size;
use ta_core::{UploadStatus, UploadedFile};

#[component]
pub fn UploadCard(file: UploadedFile) -> impl IntoView {
    let UploadedFile {
        name,
        mime_type,
        size_bytes,
        status,
        result,
        sha256,
        ..
    } = file;

    let badges = match &result {
        Some(result) => view! {
            <VerdictBadge is_authentic=result.is_authentic/>
            <RiskBadge risk=result.risk_level suffix=" RISK"/>
        }
        .into_view(),
        None => view! { <StatusBadge status=status/> }.into_view(),
    };

    let body = match (status, result) {
        (UploadStatus::Completed, Some(result)) => {
            let (marker, marker_color) = if result.is_authentic {
                ("✓", "text-green-600")
            } else {
                ("⚠", "text-red-600")
            };
            view! {
                <div class="space-y-4">
                    <div class="flex items-center justify-between">
                        <span class="font-medium">"Confidence Score:"</span>
                        <span class="text-lg font-bold">{format!("{}%", result.confidence)}</span>
                    </div>
                    <div>
                        <h4 class="font-medium mb-2">"Analysis Details:"</h4>
                        <ul class="space-y-1">
                            {result.details.into_iter().map(|detail| view! {
                                <li class="text-sm text-gray-600 flex items-center">
                                    <span class=format!("mr-2 {}", marker_color)>{marker}</span>
                                    {detail}
                                </li>
                            }).collect_view()}
                        </ul>
                    </div>
                    <div class="bg-gray-50 p-4 rounded-lg">
                        <h4 class="font-medium mb-2">"Detailed Report:"</h4>
                        <pre class="text-sm whitespace-pre-wrap text-gray-700">{result.report}</pre>
                    </div>
                </div>
            }
            .into_view()
        }
        (status, _) => view! {
            <div>
                <div class="w-full bg-gray-200 rounded-full h-2 mb-2">
                    <div
                        class="bg-blue-600 h-2 rounded-full transition-all"
                        style=format!("width: {}%", status.progress())
                    ></div>
                </div>
                <Show when=move || status == UploadStatus::Processing>
                    <p class="text-sm text-gray-600">"Running authentication checks..."</p>
                </Show>
            </div>
        }
        .into_view(),
    };

    view! {
        <div class="bg-white rounded-lg shadow">
            <div class="p-6 border-b flex items-center justify-between">
                <div>
                    <h3 class="text-lg font-semibold text-gray-900">{name}</h3>
                    <p class="text-sm text-gray-500">
                        {format!("{} • {}", mime_type, format_file_size(size_bytes))}
                    </p>
                    {sha256.map(|digest| view! {
                        <p class="text-xs text-gray-400 font-mono truncate">{format!("SHA-256 {}", digest)}</p>
                    })}
                </div>
                <div class="flex items-center space-x-2">{badges}</div>
            </div>
            <div class="p-6">{body}</div>
        </div>
    }
}
