use crate::auth::{logout, use_auth};
use crate::components::icons::*;
use crate::web::route::AppRoute;
use crate::web::router::use_router;
use docsmith_shared::{DocType, Project};
use leptos::prelude::*;
use leptos::task::spawn_local;

#[component]
pub fn DashboardPage() -> impl IntoView {
    let auth_ctx = use_auth();
    let router = use_router();

    let (projects, set_projects) = signal(Vec::<Project>::new());
    let (loading_projects, set_loading_projects) = signal(true);
    let (notification, set_notification) = signal(Option::<(String, bool)>::None); // 消息内容, 是否出错

    let load_projects = move || {
        let state = auth_ctx.state.get();
        if let Some(api) = state.api.as_ref() {
            let api = api.clone();
            set_loading_projects.set(true);
            spawn_local(async move {
                match api.get_projects().await {
                    Ok(data) => set_projects.set(data),
                    Err(e) => {
                        set_notification.set(Some((format!("Failed to load projects: {}", e), true)));
                    }
                }
                set_loading_projects.set(false);
            });
        }
    };

    // 初始加载
    Effect::new(move |_| {
        let state = auth_ctx.state.get();
        if state.is_authenticated && !state.is_loading {
            load_projects();
        }
    });

    let on_new_project = move |_| {
        router.navigate_to(AppRoute::CreateProject);
    };

    let on_logout = move |_| {
        // 跳转由路由服务的认证状态监听自动处理
        logout(&auth_ctx);
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

    let total_projects = move || projects.with(|p| p.len());

    view! {
        <div class="min-h-screen bg-base-200 p-4 md:p-8 font-sans">
            <div class="max-w-6xl mx-auto space-y-8">
                // 通知提示框
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

                <div class="navbar bg-base-100 rounded-box shadow-xl">
                    <div class="flex-1 gap-2">
                        <PenLine attr:class="text-primary h-6 w-6" />
                        <a class="btn btn-ghost text-xl">"My Projects"</a>
                    </div>
                    <div class="flex-none gap-2">
                        <button on:click=on_new_project class="btn btn-primary gap-2">
                            <Plus attr:class="h-4 w-4" /> "New Project"
                        </button>
                        <button on:click=on_logout class="btn btn-outline btn-error gap-2">
                            <LogOut attr:class="h-4 w-4" /> "Logout"
                        </button>
                    </div>
                </div>

                <div class="card bg-base-100 shadow-xl">
                    <div class="card-body">
                        <div class="flex items-center justify-between pb-2">
                            <div>
                                <h3 class="card-title">"Documents"</h3>
                                <p class="text-base-content/70 text-sm">
                                    "Open a project to review and refine its sections."
                                </p>
                            </div>
                            <button on:click=move |_| load_projects() disabled=move || loading_projects.get() class="btn btn-ghost btn-circle">
                                <RefreshCw attr:class=move || if loading_projects.get() { "h-5 w-5 animate-spin" } else { "h-5 w-5" } />
                            </button>
                        </div>

                        <Show when=move || total_projects() == 0 && !loading_projects.get()>
                            <p class="text-base-content/50 py-8 text-center">
                                "No projects yet. Create one!"
                            </p>
                        </Show>
                        <Show when=move || loading_projects.get() && total_projects() == 0>
                            <p class="text-base-content/50 py-8 text-center">
                                <span class="loading loading-spinner loading-md"></span> " Loading..."
                            </p>
                        </Show>

                        <div class="grid grid-cols-1 md:grid-cols-3 gap-6">
                            <For
                                each=move || projects.get()
                                key=|p| p.id
                                children=move |project| {
                                    let id = project.id;
                                    let type_label = project.doc_type.label();
                                    let is_docx = project.doc_type == DocType::Docx;
                                    view! {
                                        <button
                                            class="card bg-base-200 hover:bg-base-300 shadow text-left transition cursor-pointer"
                                            on:click=move |_| router.navigate_to(AppRoute::Editor(id))
                                        >
                                            <div class="card-body">
                                                <div class="flex items-center gap-2">
                                                    {if is_docx {
                                                        view! { <FileText attr:class="h-6 w-6 text-primary" /> }.into_any()
                                                    } else {
                                                        view! { <Presentation attr:class="h-6 w-6 text-secondary" /> }.into_any()
                                                    }}
                                                    <span class="font-bold text-lg truncate">{project.title.clone()}</span>
                                                </div>
                                                <p class="text-base-content/60 text-sm">{type_label}</p>
                                            </div>
                                        </button>
                                    }
                                }
                            />
                        </div>
                    </div>
                </div>
            </div>
        </div>
    }
}
