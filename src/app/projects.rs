use leptos::prelude::*;

use crate::{
    content::{filter_projects, Category, Project},
    i18n::Lang,
};

fn filter_class(active: bool) -> &'static str {
    if active {
        "rounded-full px-3 py-1.5 transition bg-accent-primary text-black"
    } else {
        "rounded-full px-3 py-1.5 transition text-slate-600 hover:bg-slate-200 dark:text-gray-300 dark:hover:bg-white/5"
    }
}

#[component]
pub fn Projects(lang: ReadSignal<Lang>) -> impl IntoView {
    let (active, set_active) = signal(Category::default());

    view! {
        <section
            id="projects"
            class="mx-auto max-w-5xl px-4 pb-16"
            aria-label=move || lang.get().pick("Projects", "Projets")
        >
            <div class="mb-6 flex flex-col gap-4 md:flex-row md:items-end md:justify-between">
                <div>
                    <h2 class="text-2xl font-semibold tracking-tight text-slate-900 dark:text-gray-100">
                        {move || lang.get().pick("Projects", "Projets")}
                    </h2>
                    <p class="mt-2 font-poppins text-sm text-slate-600 dark:text-gray-400">
                        {move || {
                            lang.get()
                                .pick(
                                    "A selection of freelance, professional and personal work across frontend, backend and mobile.",
                                    "Une sélection de travaux freelance, professionnels et personnels sur le frontend, backend et mobile.",
                                )
                        }}
                    </p>
                </div>
                <div class="inline-flex items-center gap-1 rounded-full border border-slate-300 bg-slate-100 p-1 font-poppins text-xs backdrop-blur dark:border-white/10 dark:bg-black/50">
                    {Category::FILTERS
                        .into_iter()
                        .map(|category| {
                            view! {
                                <button
                                    type="button"
                                    on:click=move |_| set_active.set(category)
                                    class=move || filter_class(active.get() == category)
                                >
                                    {move || category.label(lang.get())}
                                </button>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
            <div class="grid gap-4 md:grid-cols-2">
                {move || {
                    filter_projects(active.get())
                        .into_iter()
                        .enumerate()
                        .map(|(index, project)| view! { <ProjectCard project index lang /> })
                        .collect_view()
                }}
            </div>
        </section>
    }
}

#[component]
fn ProjectCard(project: &'static Project, index: usize, lang: ReadSignal<Lang>) -> impl IntoView {
    view! {
        <article
            class="fx-fade-up relative overflow-hidden rounded-3xl border border-slate-200 bg-gradient-to-br from-slate-50 via-slate-100 to-slate-200 p-4 shadow-lg shadow-slate-300/30 backdrop-blur dark:border-white/10 dark:from-white/5 dark:via-black/70 dark:to-black/90 dark:shadow-black/50"
            style=format!("animation-delay: {}ms", index * 60)
        >
            <div class="fx-card-blob" aria-hidden="true" />
            <div class="mb-3 flex items-center justify-between gap-3 font-poppins text-xs text-slate-600 dark:text-gray-400">
                <span>{project.year}</span>
                <div class="flex flex-wrap justify-end gap-1">
                    {project
                        .stack
                        .iter()
                        .map(|tech| {
                            view! {
                                <span class="rounded-full bg-slate-200 px-2 py-0.5 font-poppins text-[11px] text-slate-700 dark:bg-white/5 dark:text-gray-200">
                                    {*tech}
                                </span>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
            <h3 class="font-poppins text-sm font-semibold text-slate-800 dark:text-gray-50">
                {move || project.title.get(lang.get())}
            </h3>
            <p class="mt-2 font-poppins text-xs text-slate-600 dark:text-gray-400">
                {move || project.description.get(lang.get())}
            </p>
        </article>
    }
}
