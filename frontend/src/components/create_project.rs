mod form_state;
mod outline_editor;

use crate::auth::use_auth;
use crate::components::icons::{ArrowLeft, Sparkles};
use crate::web::route::AppRoute;
use crate::web::router::use_router;
use docsmith_shared::DocType;
use docsmith_shared::protocol::GenerateTemplateRequest;
use form_state::FormState;
use leptos::prelude::*;
use leptos::task::spawn_local;
use outline_editor::OutlineEditor;

#[component]
pub fn CreateProjectPage() -> impl IntoView {
    let auth_ctx = use_auth();
    let router = use_router();
    let form = FormState::new();

    let (generating, set_generating) = signal(false);
    let (creating, set_creating) = signal(false);
    let (error_msg, set_error_msg) = signal(Option::<String>::None);

    // AI 大纲建议：需要先有主题
    let on_suggest = move |_| {
        let topic = match form.topic() {
            Ok(topic) => topic,
            Err(e) => {
                set_error_msg.set(Some(e.to_string()));
                return;
            }
        };
        let Some(api) = auth_ctx.state.get_untracked().api else {
            return;
        };

        set_generating.set(true);
        set_error_msg.set(None);
        spawn_local(async move {
            let req = GenerateTemplateRequest {
                topic,
                doc_type: form.doc_type.get_untracked(),
                context: form.context.get_untracked(),
            };
            match api.generate_template(&req).await {
                Ok(res) => form.replace_outline(res.outline),
                Err(e) => set_error_msg.set(Some(format!("AI generation failed: {}", e))),
            }
            set_generating.set(false);
        });
    };

    let on_create = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let req = match form.to_request() {
            Ok(req) => req,
            Err(e) => {
                set_error_msg.set(Some(e.to_string()));
                return;
            }
        };
        let Some(api) = auth_ctx.state.get_untracked().api else {
            return;
        };

        set_creating.set(true);
        set_error_msg.set(None);
        spawn_local(async move {
            match api.create_project(&req).await {
                // 内容在后端继续生成，直接回到项目列表
                Ok(_) => router.navigate_to(AppRoute::Dashboard),
                Err(e) => {
                    set_error_msg.set(Some(format!("Failed to create project: {}", e)));
                    set_creating.set(false);
                }
            }
        });
    };

    view! {
        <div class="min-h-screen bg-base-200 p-4 md:p-8">
            <div class="max-w-3xl mx-auto space-y-4">
                <button
                    class="btn btn-ghost btn-sm gap-2"
                    on:click=move |_| router.navigate_to(AppRoute::Dashboard)
                >
                    <ArrowLeft attr:class="h-4 w-4" /> "Back to projects"
                </button>

                <div class="card bg-base-100 shadow-xl">
                    <form class="card-body space-y-4" on:submit=on_create>
                        <h2 class="card-title">"Create New Project"</h2>

                        <Show when=move || error_msg.get().is_some()>
                            <div role="alert" class="alert alert-error text-sm py-2">
                                <span>{move || error_msg.get().unwrap_or_default()}</span>
                            </div>
                        </Show>

                        <div class="form-control">
                            <label class="label" for="title">
                                <span class="label-text">"Topic / Title"</span>
                            </label>
                            <input
                                id="title"
                                type="text"
                                placeholder="e.g., Market Analysis of EV Industry"
                                on:input=move |ev| form.title.set(event_target_value(&ev))
                                prop:value=form.title
                                class="input input-bordered w-full"
                                required
                            />
                        </div>

                        <div class="form-control">
                            <label class="label" for="context">
                                <span class="label-text">"Tell me about your document"</span>
                            </label>
                            <p class="text-xs text-base-content/60 mb-2">
                                "Provide details, tone, or specific points you want covered so the AI generates better content."
                            </p>
                            <textarea
                                id="context"
                                placeholder="e.g. Make it formal, focus on Tesla and BYD, and include data from 2024."
                                on:input=move |ev| form.context.set(event_target_value(&ev))
                                prop:value=form.context
                                class="textarea textarea-bordered w-full h-24 resize-none"
                            ></textarea>
                        </div>

                        <div class="form-control">
                            <label class="label">
                                <span class="label-text">"Format"</span>
                            </label>
                            <select
                                class="select select-bordered w-full"
                                on:change=move |ev| {
                                    if let Some(doc_type) = DocType::from_value(&event_target_value(&ev)) {
                                        form.doc_type.set(doc_type);
                                    }
                                }
                            >
                                <option value="docx" selected=move || form.doc_type.get() == DocType::Docx>
                                    {DocType::Docx.label()}
                                </option>
                                <option value="pptx" selected=move || form.doc_type.get() == DocType::Pptx>
                                    {DocType::Pptx.label()}
                                </option>
                            </select>
                        </div>

                        <div class="flex items-center justify-between mt-2">
                            <h3 class="font-bold">"Outline / Slides"</h3>
                            <button
                                type="button"
                                on:click=on_suggest
                                disabled=move || generating.get()
                                class="btn btn-secondary btn-sm gap-2"
                            >
                                {move || if generating.get() {
                                    view! { <span class="loading loading-spinner loading-xs"></span> }.into_any()
                                } else {
                                    view! { <Sparkles attr:class="h-4 w-4" /> }.into_any()
                                }}
                                "AI Suggest Outline"
                            </button>
                        </div>

                        <OutlineEditor form=form />

                        <div class="form-control mt-6">
                            <button type="submit" disabled=move || creating.get() class="btn btn-primary">
                                {move || if creating.get() {
                                    view! { <span class="loading loading-spinner"></span> "Starting generation..." }.into_any()
                                } else {
                                    "Generate Project".into_any()
                                }}
                            </button>
                        </div>
                    </form>
                </div>
            </div>
        </div>
    }
}
