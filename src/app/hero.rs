use leptos::prelude::*;

use crate::{
    content::STATS,
    i18n::{Lang, Text},
};

const TITLE: Text = Text::new(
    "Web & Mobile Application Developer",
    "Développeur d'applications Web & Mobile",
);
const SUBTITLE: Text = Text::new(
    "I design and build scalable web & mobile experiences, from polished frontends to robust backends.",
    "Je conçois et développe des expériences web & mobile scalables, du frontend soigné au backend robuste.",
);
const TAGLINE: Text = Text::new(
    "Tech‑driven developer focused on modern, product‑oriented solutions.",
    "Développeur orienté produit, passionné par les technologies modernes et les solutions concrètes.",
);
const CTA_PROJECTS: Text = Text::new("View my projects", "Voir mes projets");
const CTA_CONTACT: Text = Text::new("Contact me", "Me contacter");

#[component]
pub fn Hero(lang: ReadSignal<Lang>) -> impl IntoView {
    view! {
        <section
            id="hero"
            class="relative mx-auto flex min-h-screen max-w-5xl flex-col items-center justify-center gap-10 px-4 pt-24"
            aria-label="Introduction"
        >
            <div class="fx-fade-up grid w-full gap-10 md:grid-cols-[minmax(0,2fr)_minmax(0,1.2fr)] md:items-center">
                <div class="space-y-6">
                    <p class="font-poppins text-xs uppercase tracking-[0.3em] text-gray-500 dark:text-gray-400">
                        "Portfolio 2026"
                    </p>
                    <h1 class="text-balance text-3xl font-semibold tracking-tight text-slate-900 dark:text-gray-100 md:text-4xl lg:text-5xl">
                        "Marosata "
                        <span class="bg-gradient-to-r from-accent-primary to-accent-secondary bg-clip-text text-transparent">
                            "Fanomezantsoa"
                        </span>
                    </h1>
                    <p class="fx-fade-in text-lg font-medium text-slate-700 dark:text-gray-200 md:text-xl">
                        {move || TITLE.get(lang.get())}
                    </p>
                    <p class="font-poppins max-w-xl text-sm text-slate-600 dark:text-gray-400 md:text-base">
                        {move || SUBTITLE.get(lang.get())}
                    </p>
                    <p class="font-poppins max-w-xl text-xs text-slate-500 dark:text-gray-500 md:text-sm">
                        {move || TAGLINE.get(lang.get())}
                    </p>
                    <div class="flex flex-wrap gap-3 pt-2">
                        <a
                            href="#projects"
                            class="font-poppins rounded-full bg-accent-primary px-5 py-2.5 text-sm font-medium text-black shadow-lg shadow-blue-500/30 transition hover:-translate-y-0.5 hover:bg-blue-500"
                        >
                            {move || CTA_PROJECTS.get(lang.get())}
                        </a>
                        <a
                            href="#contact"
                            class="font-poppins rounded-full border border-slate-300 bg-slate-100 px-5 py-2.5 text-sm font-medium text-slate-700 backdrop-blur transition hover:border-accent-secondary hover:text-accent-secondary dark:border-white/15 dark:bg-white/5 dark:text-gray-100"
                        >
                            {move || CTA_CONTACT.get(lang.get())}
                        </a>
                    </div>
                </div>
                <div class="flex flex-col items-center gap-6 md:items-end">
                    <div class="fx-fade-in relative h-48 w-48 overflow-hidden rounded-3xl border border-slate-200 bg-gradient-to-b from-slate-100 to-slate-300 shadow-2xl shadow-slate-400/30 md:h-56 md:w-56 dark:border-white/10 dark:from-white/10 dark:to-black/60 dark:shadow-black/60">
                        <img
                            src="/assets/pictures/profile.jpg"
                            alt="Portrait de Marosata Fanomezantsoa"
                            class="h-full w-full object-cover"
                        />
                    </div>
                    <div class="grid w-full grid-cols-2 gap-3 font-poppins text-xs text-slate-600 dark:text-gray-300 sm:grid-cols-4">
                        {STATS
                            .iter()
                            .enumerate()
                            .map(|(index, stat)| {
                                view! {
                                    <div
                                        class="fx-fade-up rounded-2xl border border-slate-200 bg-slate-50 px-3 py-2.5 backdrop-blur dark:border-white/10 dark:bg-white/5"
                                        style=format!("animation-delay: {}ms", 200 + index * 100)
                                    >
                                        <div class="font-poppins text-sm font-semibold text-slate-800 dark:text-white">
                                            {stat.value}
                                        </div>
                                        <div class="font-poppins mt-1 text-[11px] text-slate-600 dark:text-gray-400">
                                            {move || stat.label.get(lang.get())}
                                        </div>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
            </div>
        </section>
    }
}
