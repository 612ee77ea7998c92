//! Status and verdict badges

use leptos::*;
use ta_core::{RiskLevel, UploadStatus};

#[component]
pub fn StatusBadge(status: UploadStatus) -> impl IntoView {
    view! {
        <span class="px-2 py-1 text-xs font-medium rounded-full bg-gray-100 text-gray-800">
            {status.label()}
        </span>
    }
}

#[component]
pub fn VerdictBadge(is_authentic: bool) -> impl IntoView {
    let (style, label) = if is_authentic {
        ("bg-blue-600 text-white", "Authentic")
    } else {
        ("bg-red-600 text-white", "Suspicious")
    };

    view! {
        <span class=format!("px-2 py-1 text-xs font-medium rounded-full {}", style)>{label}</span>
    }
}

pub fn risk_colors(risk: RiskLevel) -> &'static str {
    match risk {
        RiskLevel::Low => "bg-green-100 text-green-800",
        RiskLevel::Medium => "bg-yellow-100 text-yellow-800",
        RiskLevel::High => "bg-red-100 text-red-800",
    }
}

/// `suffix` follows the upper-cased level, e.g. "LOW RISK"
#[component]
pub fn RiskBadge(risk: RiskLevel, #[prop(optional)] suffix: &'static str) -> impl IntoView {
    view! {
        <span class=format!("px-2 py-1 text-xs font-medium rounded-full {}", risk_colors(risk))>
            {format!("{}{}", risk.as_str().to_uppercase(), suffix)}
        </span>
    }
}
