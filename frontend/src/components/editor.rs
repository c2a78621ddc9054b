mod section_card;

use crate::auth::use_auth;
use crate::components::icons::{ArrowLeft, Download};
use crate::web::route::AppRoute;
use crate::web::router::use_router;
use crate::web::save_file;
use docsmith_shared::{FeedbackType, Project};
use leptos::prelude::*;
use leptos::task::spawn_local;
use section_card::SectionCard;

#[component]
pub fn EditorPage(project_id: i64) -> impl IntoView {
    let auth_ctx = use_auth();
    let router = use_router();

    let (project, set_project) = signal(Option::<Project>::None);
    let (refining_id, set_refining_id) = signal(Option::<i64>::None);
    let (exporting, set_exporting) = signal(false);
    let (notification, set_notification) = signal(Option::<(String, bool)>::None); // 消息内容, 是否出错

    let load_project = move || {
        let state = auth_ctx.state.get();
        if let Some(api) = state.api.as_ref() {
            let api = api.clone();
            spawn_local(async move {
                match api.get_project(project_id).await {
                    Ok(data) => set_project.set(Some(data)),
                    Err(e) => {
                        set_notification.set(Some((format!("Failed to load project: {}", e), true)));
                    }
                }
            });
        }
    };

    // 初始加载
    Effect::new(move |_| {
        let state = auth_ctx.state.get();
        if state.is_authenticated && !state.is_loading {
            load_project();
        }
    });

    // 章节改写：后端落库后才重新拉取，保证显示的是持久化内容
    let on_refine = Callback::new(move |(section_id, instruction): (i64, String)| {
        let Some(api) = auth_ctx.state.get_untracked().api else {
            return;
        };
        set_refining_id.set(Some(section_id));
        spawn_local(async move {
            match api.refine_section(section_id, instruction).await {
                Ok(_) => match api.get_project(project_id).await {
                    Ok(data) => set_project.set(Some(data)),
                    Err(e) => {
                        set_notification
                            .set(Some((format!("Failed to reload project: {}", e), true)));
                    }
                },
                Err(e) => {
                    set_notification.set(Some((format!("Refine failed: {}", e), true)));
                }
            }
            set_refining_id.set(None);
        });
    });

    let on_feedback = Callback::new(move |(section_id, feedback): (i64, FeedbackType)| {
        let Some(api) = auth_ctx.state.get_untracked().api else {
            return;
        };
        spawn_local(async move {
            match api.send_feedback(section_id, feedback).await {
                Ok(_) => {
                    set_notification.set(Some((format!("Marked as {}", feedback.as_str()), false)));
                }
                Err(e) => {
                    set_notification.set(Some((format!("Feedback failed: {}", e), true)));
                }
            }
        });
    });

    // 导出需要认证头，所以先 fetch 字节流再触发浏览器下载
    let on_export = move |_| {
        let Some(api) = auth_ctx.state.get_untracked().api else {
            return;
        };
        let Some(current) = project.get_untracked() else {
            return;
        };
        set_exporting.set(true);
        spawn_local(async move {
            match api.export_project(current.id).await {
                Ok(bytes) => {
                    if let Err(e) = save_file(
                        &bytes,
                        current.doc_type.mime_type(),
                        &current.export_file_name(),
                    ) {
                        set_notification.set(Some((format!("Download failed: {}", e), true)));
                    }
                }
                Err(e) => {
                    set_notification.set(Some((format!("Export failed: {}", e), true)));
                }
            }
            set_exporting.set(false);
        });
    };

    // 3秒后清除通知
    Effect::new(move |_| {
        if notification.get().is_some() {
            set_timeout(
                move || set_notification.set(None),
                std::time::Duration::from_secs(3),
            );
        }
    });

    view! {
        // 通知提示框（加载失败时也要可见，故放在 Show 之外）
        <Show when=move || notification.get().is_some()>
            <div class="toast toast-top toast-end z-50">
                <div class=move || {
                    let (_, is_err) = notification.get().unwrap_or_default();
                    if is_err {
                        "alert alert-error shadow-lg"
                    } else {
                        "alert alert-success shadow-lg"
                    }
                }>
                    <span>{move || notification.get().unwrap_or_default().0}</span>
                </div>
            </div>
        </Show>

        <Show
            when=move || project.get().is_some()
            fallback=|| view! { <div class="flex items-center justify-center min-h-screen"><span class="loading loading-spinner loading-lg text-primary"></span></div> }
        >
            <div class="flex h-screen overflow-hidden bg-base-200">
                // 侧边栏：文档结构
                <div class="w-64 bg-base-100 border-r border-base-300 p-4 overflow-y-auto hidden md:block">
                    <h3 class="font-bold mb-4 text-base-content/80">"Structure"</h3>
                    <ul class="space-y-2 text-sm">
                        <For
                            each=move || project.get().map(|p| p.sections).unwrap_or_default()
                            key=|s| s.id
                            children=move |section| {
                                view! {
                                    <li class="text-base-content/70 truncate">{section.heading.clone()}</li>
                                }
                            }
                        />
                    </ul>
                </div>

                // 主内容区
                <div class="flex-1 overflow-y-auto p-4 md:p-8">
                    <div class="max-w-4xl mx-auto space-y-6">
                        <div class="flex justify-between items-center">
                            <div class="flex items-center gap-2">
                                <button
                                    class="btn btn-ghost btn-sm btn-square"
                                    on:click=move |_| router.navigate_to(AppRoute::Dashboard)
                                >
                                    <ArrowLeft attr:class="h-4 w-4" />
                                </button>
                                <h1 class="text-2xl font-bold">
                                    {move || project.get().map(|p| p.title).unwrap_or_default()}
                                </h1>
                            </div>
                            <button
                                on:click=on_export
                                disabled=move || exporting.get()
                                class="btn btn-success gap-2"
                            >
                                {move || if exporting.get() {
                                    view! { <span class="loading loading-spinner loading-xs"></span> }.into_any()
                                } else {
                                    view! { <Download attr:class="h-4 w-4" /> }.into_any()
                                }}
                                {move || {
                                    project
                                        .get()
                                        .map(|p| format!("Export .{}", p.doc_type.extension()))
                                        .unwrap_or_default()
                                }}
                            </button>
                        </div>

                        <For
                            // 内容随改写变化，key 带上 content 以强制重建卡片
                            each=move || project.get().map(|p| p.sections).unwrap_or_default()
                            key=|s| (s.id, s.content.clone())
                            children=move |section| {
                                let id = section.id;
                                let refining =
                                    Signal::derive(move || refining_id.get() == Some(id));
                                view! {
                                    <SectionCard
                                        section=section
                                        refining=refining
                                        on_refine=on_refine
                                        on_feedback=on_feedback
                                    />
                                }
                            }
                        />
                    </div>
                </div>
            </div>
        </Show>
    }
}
