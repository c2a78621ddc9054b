use crate::auth::{login, register, use_auth};
use crate::components::icons::PenLine;
use leptos::prelude::*;
use leptos::task::spawn_local;

#[component]
pub fn LoginPage() -> impl IntoView {
    let auth_ctx = use_auth();

    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (is_register, set_is_register) = signal(false);
    let (is_submitting, set_is_submitting) = signal(false);
    let (error_msg, set_error_msg) = signal(Option::<String>::None);
    let (notice, set_notice) = signal(Option::<String>::None);

    let is_loading = move || auth_ctx.state.get().is_loading;

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if email.get().is_empty() || password.get().is_empty() {
            set_error_msg.set(Some("Please fill in all fields".to_string()));
            return;
        }

        set_is_submitting.set(true);
        set_error_msg.set(None);
        set_notice.set(None);

        spawn_local(async move {
            let email = email.get_untracked();
            let password = password.get_untracked();

            if is_register.get_untracked() {
                match register(email, password).await {
                    Ok(_) => {
                        // 注册成功后切回登录表单，让用户用新账号登录
                        set_notice.set(Some(
                            "Registration successful! Please log in.".to_string(),
                        ));
                        set_is_register.set(false);
                        set_password.set(String::new());
                    }
                    Err(e) => set_error_msg.set(Some(e.to_string())),
                }
            } else {
                // 成功后的跳转由路由服务监听认证状态自动完成
                if let Err(e) = login(&auth_ctx, email, password).await {
                    set_error_msg.set(Some(e.to_string()));
                }
            }
            set_is_submitting.set(false);
        });
    };

    let toggle_mode = move |_| {
        set_is_register.update(|v| *v = !*v);
        set_error_msg.set(None);
        set_notice.set(None);
    };

    view! {
        <Show when=move || !is_loading() fallback=|| view! { <div class="flex items-center justify-center min-h-screen"><span class="loading loading-spinner loading-lg text-primary"></span></div> }>
            <div class="hero min-h-screen bg-base-200">
                <div class="hero-content flex-col w-full max-w-md">
                    <div class="text-center mb-4">
                        <div class="flex flex-col items-center gap-2">
                            <div class="p-3 bg-primary/10 rounded-2xl text-primary">
                                <PenLine attr:class="h-8 w-8" />
                            </div>
                            <h1 class="text-3xl font-bold">"DocSmith Studio"</h1>
                            <p class="text-base-content/70">
                                "AI-assisted document authoring"
                            </p>
                        </div>
                    </div>

                    <div class="card shrink-0 w-full shadow-2xl bg-base-100">
                        <form class="card-body" on:submit=on_submit>
                            <h2 class="card-title">
                                {move || if is_register.get() { "Register" } else { "Log In" }}
                            </h2>

                            <Show when=move || error_msg.get().is_some()>
                                <div role="alert" class="alert alert-error text-sm py-2">
                                    <span>{move || error_msg.get().unwrap_or_default()}</span>
                                </div>
                            </Show>
                            <Show when=move || notice.get().is_some()>
                                <div role="alert" class="alert alert-success text-sm py-2">
                                    <span>{move || notice.get().unwrap_or_default()}</span>
                                </div>
                            </Show>

                            <div class="form-control">
                                <label class="label" for="email">
                                    <span class="label-text">"Email"</span>
                                </label>
                                <input
                                    id="email"
                                    type="email"
                                    placeholder="you@example.com"
                                    on:input=move |ev| set_email.set(event_target_value(&ev))
                                    prop:value=email
                                    class="input input-bordered"
                                    required
                                />
                            </div>
                            <div class="form-control">
                                <label class="label" for="password">
                                    <span class="label-text">"Password"</span>
                                </label>
                                <input
                                    id="password"
                                    type="password"
                                    placeholder="••••••••"
                                    on:input=move |ev| set_password.set(event_target_value(&ev))
                                    prop:value=password
                                    class="input input-bordered"
                                    required
                                />
                            </div>
                            <div class="form-control mt-6">
                                <button class="btn btn-primary" disabled=move || is_submitting.get()>
                                    {move || if is_submitting.get() {
                                        view! { <span class="loading loading-spinner"></span> "Please wait..." }.into_any()
                                    } else if is_register.get() {
                                        "Sign Up".into_any()
                                    } else {
                                        "Log In".into_any()
                                    }}
                                </button>
                            </div>

                            <button type="button" class="btn btn-link btn-sm mt-2" on:click=toggle_mode>
                                {move || if is_register.get() {
                                    "Already have an account? Log In"
                                } else {
                                    "Need an account? Register"
                                }}
                            </button>
                        </form>
                    </div>
                </div>
            </div>
        </Show>
    }
}
