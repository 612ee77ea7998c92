//! Toast stack, bottom right

use crate::state::{use_app_state, Toast};
use leptos::*;
use ta_core::NoticeVariant;

#[component]
pub fn Toasts() -> impl IntoView {
    let toaster = use_app_state().toaster;

    view! {
        <div class="fixed bottom-4 right-4 z-50 space-y-2 w-80">
            <For
                each=move || toaster.toasts.get()
                key=|toast| toast.id
                children=move |toast: Toast| {
                    let id = toast.id;
                    let style = match toast.notice.variant {
                        NoticeVariant::Default => "bg-white border-gray-200 text-gray-900",
                        NoticeVariant::Destructive => "bg-red-600 border-red-600 text-white",
                    };
                    view! {
                        <div class=format!("border rounded-lg shadow-lg p-4 flex justify-between items-start {}", style)>
                            <div>
                                <p class="font-semibold">{toast.notice.title}</p>
                                <p class="text-sm opacity-90">{toast.notice.description}</p>
                            </div>
                            <button class="ml-4 opacity-70 hover:opacity-100" on:click=move |_| toaster.dismiss(id)>
                                "×"
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}
