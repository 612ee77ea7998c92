//! Upload and verify page

use crate::components::UploadCard;
use crate::platform::read_file;
use crate::state::use_app_state;
use leptos::*;
use ta_core::report::format_file_size;
use ta_core::UploadRequest;
use wasm_bindgen::JsCast;

#[component]
pub fn UploadPage() -> impl IntoView {
    let state = use_app_state();
    let files = state.files;
    let limit = format_file_size(state.uploads.as_ref().map_or(
        ta_core::config::DEFAULT_MAX_UPLOAD_BYTES,
        |u| u.config().max_upload_bytes,
    ));
    let (dragging, set_dragging) = create_signal(false);

    let submit = {
        let state = state.clone();
        move |list: Option<web_sys::FileList>| {
            let Some(list) = list else {
                return;
            };
            let requests = (0..list.length())
                .filter_map(|i| list.get(i))
                .map(to_request)
                .collect::<Vec<_>>();
            if !requests.is_empty() {
                state.upload(requests);
            }
        }
    };
    let submit_drop = submit.clone();

    let on_drop = move |ev: ev::DragEvent| {
        ev.prevent_default();
        set_dragging.set(false);
        submit_drop(ev.data_transfer().and_then(|dt| dt.files()));
    };

    let on_change = move |ev: ev::Event| {
        let Some(input) = ev
            .target()
            .and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok())
        else {
            return;
        };
        submit(input.files());
        // Allow picking the same file again
        input.set_value("");
    };

    let clear_state = state.clone();

    view! {
        <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-12">
            <div class="text-center mb-8">
                <h1 class="text-3xl font-bold text-gray-900 mb-4">"Upload & Verify Content"</h1>
                <p class="text-gray-600">
                    "Upload your photos, videos, or audio files to verify their authenticity"
                </p>
            </div>

            <div class="bg-white rounded-lg shadow mb-8">
                <div class="p-6 border-b">
                    <h2 class="text-xl font-semibold text-gray-900">"Select Files to Verify"</h2>
                    <p class="text-sm text-gray-500">
                        "Supported formats: Images (JPG, PNG, GIF), Videos (MP4, AVI, MOV), Audio (MP3, WAV, AAC)"
                    </p>
                </div>
                <div class="p-6">
                    <div
                        class=move || {
                            if dragging.get() {
                                "border-2 border-dashed rounded-lg p-8 text-center transition-colors border-blue-500 bg-blue-50"
                            } else {
                                "border-2 border-dashed rounded-lg p-8 text-center transition-colors border-gray-300 hover:border-gray-400"
                            }
                        }
                        on:drop=on_drop
                        on:dragover=move |ev: ev::DragEvent| {
                            ev.prevent_default();
                            set_dragging.set(true);
                        }
                        on:dragleave=move |_| set_dragging.set(false)
                    >
                        <div class="mx-auto w-16 h-16 bg-blue-100 rounded-full flex items-center justify-center mb-4">
                            <svg class="w-8 h-8 text-blue-600" fill="none" stroke="currentColor" viewBox="0 0 24 24">
                                <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M7 16a4 4 0 01-.88-7.903A5 5 0 1115.9 6L16 6a5 5 0 011 9.9M15 13l-3-3m0 0l-3 3m3-3v12"/>
                            </svg>
                        </div>
                        <h3 class="text-lg font-medium mb-2">"Drop files here or click to browse"</h3>
                        <p class="text-gray-500 mb-4">{format!("Maximum file size: {}", limit)}</p>
                        <input
                            type="file"
                            multiple
                            accept="image/*,video/*,audio/*"
                            class="hidden"
                            id="file-upload"
                            on:change=on_change
                        />
                        <label
                            for="file-upload"
                            class="inline-block cursor-pointer px-4 py-2 bg-blue-600 hover:bg-blue-700 text-white rounded-md"
                        >
                            "Choose Files"
                        </label>
                    </div>
                </div>
            </div>

            <Show when=move || !files.with(|f| f.is_empty())>
                <div class="space-y-4">
                    <div class="flex items-center justify-between">
                        <h2 class="text-2xl font-bold text-gray-900">"Analysis Results"</h2>
                        <button
                            class="px-4 py-2 border border-gray-300 rounded-md text-gray-700 hover:bg-gray-50"
                            on:click={
                                let state = clear_state.clone();
                                move |_| state.clear_uploads()
                            }
                        >
                            "Clear all"
                        </button>
                    </div>
                    <For
                        each=move || files.get()
                        key=|file| (file.id.clone(), file.status)
                        children=|file| view! { <UploadCard file=file/> }
                    />
                </div>
            </Show>
        </div>
    }
}

fn to_request(file: web_sys::File) -> UploadRequest {
    UploadRequest::new(file.name(), file.type_(), file.size() as u64).with_content(read_file(file))
}
