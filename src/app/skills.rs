use leptos::prelude::*;

use crate::{content::SKILL_GROUPS, i18n::Lang};

#[component]
pub fn Skills(lang: ReadSignal<Lang>) -> impl IntoView {
    view! {
        <section
            id="skills"
            class="mx-auto max-w-5xl px-4 pb-20"
            aria-label=move || lang.get().pick("Technical skills", "Compétences techniques")
        >
            <div class="mb-8 space-y-2">
                <h2 class="text-2xl font-semibold tracking-tight text-slate-900 dark:text-gray-100">
                    {move || lang.get().pick("Tech stack", "Stack technique")}
                </h2>
                <p class="font-poppins text-sm text-slate-600 dark:text-gray-400">
                    {move || {
                        lang.get()
                            .pick(
                                "A balanced skill set across frontend, backend and mobile to ship full products.",
                                "Un ensemble de compétences équilibré entre frontend, backend et mobile pour livrer des produits complets.",
                            )
                    }}
                </p>
            </div>
            <div class="grid gap-4 md:grid-cols-2">
                {SKILL_GROUPS
                    .iter()
                    .map(|group| {
                        view! {
                            <div class="rounded-2xl border border-slate-200 bg-gradient-to-br from-slate-50 to-slate-100 p-4 backdrop-blur dark:border-white/10 dark:from-white/5 dark:to-black/70">
                                <div class="mb-2 flex items-center justify-between font-poppins text-xs text-slate-700 dark:text-gray-300">
                                    <span class="font-medium">{move || group.label.get(lang.get())}</span>
                                    <span class="font-poppins text-[11px] text-slate-500 dark:text-gray-500">
                                        {move || group.count_label(lang.get())}
                                    </span>
                                </div>
                                <div class="flex flex-wrap gap-1.5">
                                    {group
                                        .items
                                        .iter()
                                        .map(|item| {
                                            view! {
                                                <span class="rounded-full bg-slate-200 px-2 py-1 font-poppins text-[11px] text-slate-700 dark:bg-white/5 dark:text-gray-200">
                                                    {*item}
                                                </span>
                                            }
                                        })
                                        .collect_view()}
                                </div>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}
