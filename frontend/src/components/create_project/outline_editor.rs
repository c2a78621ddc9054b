//! 大纲编辑子组件
//!
//! 行内编辑 + 增删，行的 key 稳定以保留输入焦点。

use super::form_state::FormState;
use crate::components::icons::{Plus, Trash2};
use leptos::prelude::*;

#[component]
pub fn OutlineEditor(form: FormState) -> impl IntoView {
    view! {
        <div class="space-y-2">
            <Show when=move || form.outline.with(|o| o.is_empty())>
                <p class="text-sm text-base-content/50">
                    "No sections yet. Use AI Suggest or add one manually."
                </p>
            </Show>

            <For
                each=move || form.outline.get()
                key=|item| item.key
                children=move |item| {
                    let heading = item.heading;
                    let key = item.key;
                    view! {
                        <div class="flex items-center gap-2">
                            <input
                                type="text"
                                class="input input-bordered w-full"
                                prop:value=heading
                                on:input=move |ev| heading.set(event_target_value(&ev))
                            />
                            <button
                                type="button"
                                class="btn btn-ghost btn-square btn-sm text-error"
                                on:click=move |_| form.remove_heading(key)
                            >
                                <Trash2 attr:class="h-4 w-4" />
                            </button>
                        </div>
                    }
                }
            />

            <button
                type="button"
                class="btn btn-ghost btn-sm gap-1"
                on:click=move |_| form.push_heading()
            >
                <Plus attr:class="h-4 w-4" /> "Add section"
            </button>
        </div>
    }
}
