//! 章节卡片子组件
//!
//! 单个章节的展示、自然语言改写入口与点赞/点踩反馈。

use crate::components::icons::{RefreshCw, ThumbsDown, ThumbsUp};
use docsmith_shared::{FeedbackType, Section};
use leptos::prelude::*;

#[component]
pub fn SectionCard(
    section: Section,
    /// 本章节是否有改写请求在途（在途时禁用触发按钮）
    #[prop(into)] refining: Signal<bool>,
    #[prop(into)] on_refine: Callback<(i64, String)>,
    #[prop(into)] on_feedback: Callback<(i64, FeedbackType)>,
) -> impl IntoView {
    let (instruction, set_instruction) = signal(String::new());

    let section_id = section.id;
    let pending = section.is_pending();
    let content_text = section.content.clone().unwrap_or_default();

    let display_content = move || {
        if refining.get() {
            "AI is refining...".to_string()
        } else if pending {
            "Content generating...".to_string()
        } else {
            content_text.clone()
        }
    };

    let send_refine = move |_| {
        let text = instruction.get();
        let text = text.trim();
        if text.is_empty() {
            return;
        }
        on_refine.run((section_id, text.to_string()));
        set_instruction.set(String::new());
    };

    view! {
        <div class="card bg-base-100 shadow border border-base-300">
            <div class="card-body">
                <h3 class="card-title text-primary">{section.heading.clone()}</h3>

                <div class="bg-base-200 p-4 rounded min-h-[100px] whitespace-pre-wrap text-base-content/80">
                    {display_content}
                </div>

                <div class="flex flex-col md:flex-row gap-4 items-start md:items-center justify-between border-t border-base-300 pt-4">
                    <div class="flex gap-2 flex-1 w-full">
                        <input
                            type="text"
                            class="input input-bordered input-sm flex-1"
                            placeholder="Refine instruction (e.g., 'Make concise')"
                            prop:value=instruction
                            on:input=move |ev| set_instruction.set(event_target_value(&ev))
                        />
                        <button
                            on:click=send_refine
                            disabled=move || refining.get()
                            class="btn btn-sm btn-outline btn-primary gap-1"
                        >
                            <RefreshCw attr:class=move || if refining.get() { "h-3 w-3 animate-spin" } else { "h-3 w-3" } />
                            "Refine"
                        </button>
                    </div>

                    <div class="flex gap-2">
                        <button
                            on:click=move |_| on_feedback.run((section_id, FeedbackType::Like))
                            class="btn btn-ghost btn-sm btn-square text-success"
                        >
                            <ThumbsUp attr:class="h-5 w-5" />
                        </button>
                        <button
                            on:click=move |_| on_feedback.run((section_id, FeedbackType::Dislike))
                            class="btn btn-ghost btn-sm btn-square text-error"
                        >
                            <ThumbsDown attr:class="h-5 w-5" />
                        </button>
                    </div>
                </div>
            </div>
        </div>
    }
}
