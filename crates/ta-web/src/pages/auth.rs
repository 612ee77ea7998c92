//! Login and registration
//!
//! Both forms accept anything; the session store fabricates the user.

use crate::state::use_app_state;
use leptos::*;
use leptos_router::*;
use ta_core::{Notice, NoticeVariant};

const INPUT_CLASS: &str = "w-full px-4 py-3 border border-gray-300 rounded-lg focus:ring-2 focus:ring-blue-500 focus:border-blue-500";

#[component]
pub fn LoginPage() -> impl IntoView {
    let state = use_app_state();
    let navigate = use_navigate();
    let (email, set_email) = create_signal(String::new());
    let (password, set_password) = create_signal(String::new());
    let (submitting, set_submitting) = create_signal(false);

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        if submitting.get_untracked() {
            return;
        }
        set_submitting.set(true);

        let state = state.clone();
        let navigate = navigate.clone();
        spawn_local(async move {
            let outcome = state
                .session
                .login(&email.get_untracked(), &password.get_untracked())
                .await;
            set_submitting.set(false);
            finish(&state, outcome, &navigate);
        });
    };

    view! {
        <AuthShell title="Welcome Back" subtitle="Sign in to your TrustAuth account">
            <form on:submit=on_submit class="space-y-6">
                <div>
                    <label class="block text-sm font-medium text-gray-700 mb-2">"Email"</label>
                    <input
                        type="email"
                        required
                        class=INPUT_CLASS
                        placeholder="you@example.com"
                        on:input=move |ev| set_email.set(event_target_value(&ev))
                        prop:value=email
                    />
                </div>
                <div>
                    <label class="block text-sm font-medium text-gray-700 mb-2">"Password"</label>
                    <input
                        type="password"
                        required
                        class=INPUT_CLASS
                        on:input=move |ev| set_password.set(event_target_value(&ev))
                        prop:value=password
                    />
                </div>
                <SubmitButton submitting=submitting idle="Sign In" busy="Signing in..."/>
            </form>
            <p class="mt-6 text-center text-sm text-gray-600">
                "Don't have an account? "
                <A href="/register" class="text-blue-600 hover:underline">"Register"</A>
            </p>
        </AuthShell>
    }
}

#[component]
pub fn RegisterPage() -> impl IntoView {
    let state = use_app_state();
    let navigate = use_navigate();
    let (name, set_name) = create_signal(String::new());
    let (email, set_email) = create_signal(String::new());
    let (password, set_password) = create_signal(String::new());
    let (submitting, set_submitting) = create_signal(false);

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        if submitting.get_untracked() {
            return;
        }
        set_submitting.set(true);

        let state = state.clone();
        let navigate = navigate.clone();
        spawn_local(async move {
            let outcome = state
                .session
                .register(
                    &name.get_untracked(),
                    &email.get_untracked(),
                    &password.get_untracked(),
                )
                .await;
            set_submitting.set(false);
            finish(&state, outcome, &navigate);
        });
    };

    view! {
        <AuthShell title="Create Your Account" subtitle="Start verifying digital content in minutes">
            <form on:submit=on_submit class="space-y-6">
                <div>
                    <label class="block text-sm font-medium text-gray-700 mb-2">"Name"</label>
                    <input
                        type="text"
                        required
                        class=INPUT_CLASS
                        placeholder="Your name"
                        on:input=move |ev| set_name.set(event_target_value(&ev))
                        prop:value=name
                    />
                </div>
                <div>
                    <label class="block text-sm font-medium text-gray-700 mb-2">"Email"</label>
                    <input
                        type="email"
                        required
                        class=INPUT_CLASS
                        placeholder="you@example.com"
                        on:input=move |ev| set_email.set(event_target_value(&ev))
                        prop:value=email
                    />
                </div>
                <div>
                    <label class="block text-sm font-medium text-gray-700 mb-2">"Password"</label>
                    <input
                        type="password"
                        required
                        class=INPUT_CLASS
                        on:input=move |ev| set_password.set(event_target_value(&ev))
                        prop:value=password
                    />
                </div>
                <SubmitButton submitting=submitting idle="Create Account" busy="Creating account..."/>
            </form>
            <p class="mt-6 text-center text-sm text-gray-600">
                "Already have an account? "
                <A href="/login" class="text-blue-600 hover:underline">"Login"</A>
            </p>
        </AuthShell>
    }
}

fn finish(
    state: &crate::state::AppState,
    outcome: ta_core::CoreResult<ta_core::User>,
    navigate: &impl Fn(&str, NavigateOptions),
) {
    match outcome {
        Ok(user) => {
            state.user.set(Some(user));
            navigate("/dashboard", Default::default());
        }
        Err(e) => state.toaster.push(Notice {
            title: "Sign in failed".to_string(),
            description: e.to_string(),
            variant: NoticeVariant::Destructive,
        }),
    }
}

#[component]
fn AuthShell(title: &'static str, subtitle: &'static str, children: Children) -> impl IntoView {
    view! {
        <section class="py-20">
            <div class="max-w-md mx-auto px-4">
                <div class="bg-white rounded-xl shadow-lg p-8">
                    <div class="text-center mb-8">
                        <h1 class="text-3xl font-bold text-gray-900 mb-2">{title}</h1>
                        <p class="text-gray-600">{subtitle}</p>
                    </div>
                    {children()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn SubmitButton(
    submitting: ReadSignal<bool>,
    idle: &'static str,
    busy: &'static str,
) -> impl IntoView {
    view! {
        <button
            type="submit"
            class="w-full px-4 py-3 bg-blue-600 hover:bg-blue-700 disabled:opacity-50 text-white font-medium rounded-lg transition"
            disabled=move || submitting.get()
        >
            {move || if submitting.get() { busy } else { idle }}
        </button>
    }
}
