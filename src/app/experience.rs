use leptos::prelude::*;

use crate::{content::EXPERIENCES, i18n::Lang};

#[component]
pub fn Experience(lang: ReadSignal<Lang>) -> impl IntoView {
    view! {
        <section
            id="experience"
            class="mx-auto max-w-5xl px-4 py-20"
            aria-label=move || {
                lang.get().pick("Professional experience", "Expériences professionnelles")
            }
        >
            <div class="mb-10 flex items-center justify-between gap-4">
                <div>
                    <h2 class="text-2xl font-semibold tracking-tight text-slate-900 dark:text-gray-100">
                        {move || lang.get().pick("Selected experience", "Expériences sélectionnées")}
                    </h2>
                    <p class="mt-2 font-poppins text-sm text-slate-600 dark:text-gray-400">
                        {move || {
                            lang.get()
                                .pick(
                                    "Real‑world projects for startups, SMEs and public institutions.",
                                    "Projets concrets pour startups, PME et institutions publiques.",
                                )
                        }}
                    </p>
                </div>
            </div>
            <div class="space-y-6">
                {EXPERIENCES
                    .iter()
                    .enumerate()
                    .map(|(index, exp)| {
                        view! {
                            <article
                                class="fx-fade-up relative overflow-hidden rounded-3xl border border-slate-200 bg-gradient-to-br from-slate-50 via-slate-100 to-slate-200 p-5 shadow-lg shadow-slate-300/30 backdrop-blur dark:border-white/10 dark:from-white/5 dark:via-black/60 dark:to-black/80 dark:shadow-black/40"
                                style=format!("animation-delay: {}ms", index * 80)
                            >
                                <div class="fx-card-blob" aria-hidden="true" />
                                <div class="flex flex-col gap-4 md:flex-row md:items-start md:justify-between">
                                    <div class="space-y-2">
                                        <div class="inline-flex items-center gap-2 rounded-full bg-slate-200 px-3 py-1 font-poppins text-[11px] font-medium text-slate-700 dark:bg-black/40 dark:text-gray-300">
                                            <span class="text-accent-primary">"▪"</span>
                                            <span>{exp.company}</span>
                                        </div>
                                        <h3 class="text-base font-semibold text-slate-800 dark:text-gray-50">
                                            {move || exp.role.get(lang.get())}
                                        </h3>
                                        <p class="font-poppins text-xs text-slate-600 dark:text-gray-400">
                                            {move || exp.period.get(lang.get())}
                                        </p>
                                        <ul class="mt-2 space-y-1 font-poppins text-sm text-slate-700 dark:text-gray-300">
                                            {exp
                                                .bullets
                                                .iter()
                                                .map(|line| {
                                                    view! {
                                                        <li class="flex gap-2">
                                                            <span class="mt-1 h-1.5 w-1.5 flex-shrink-0 rounded-full bg-accent-primary" />
                                                            <span>{move || line.get(lang.get())}</span>
                                                        </li>
                                                    }
                                                })
                                                .collect_view()}
                                        </ul>
                                    </div>
                                    <div class="flex flex-wrap justify-end gap-1.5">
                                        {exp
                                            .tech
                                            .iter()
                                            .map(|tech| {
                                                view! {
                                                    <span class="rounded-full border border-slate-300 bg-slate-100 px-2 py-1 font-poppins text-[11px] text-slate-700 dark:border-white/10 dark:bg-white/5 dark:text-gray-200">
                                                        {*tech}
                                                    </span>
                                                }
                                            })
                                            .collect_view()}
                                    </div>
                                </div>
                            </article>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}
