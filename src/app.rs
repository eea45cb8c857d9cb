mod background;
mod contact_form;
mod experience;
mod hero;
mod navbar;
mod projects;
mod skills;
mod theme_provider;

use std::time::Duration;

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{components::*, path};

use crate::i18n::Lang;
use background::BackgroundMatrix;
use contact_form::ContactForm;
use experience::Experience;
use hero::Hero;
use navbar::Navbar;
use projects::Projects;
use skills::Skills;
pub use theme_provider::{ThemeContext, ThemeProvider};

/// How long the spinner overlay stays up on first render.
const LOADING_DELAY: Duration = Duration::from_millis(700);

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio-site.css" />
                <MetaTags />
            </head>
            <body class="min-h-screen font-sans">
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    view! {
        <Title text="Marosata Fanomezantsoa – Personal portfolio" />
        <Meta
            name="description"
            content="Portfolio de Marosata Fanomezantsoa, développeur Web & Mobile spécialisé en Next.js, Laravel, Flutter et solutions full‑stack scalables."
        />
        <Link rel="icon" href="/assets/pictures/FanoLogo.png" />

        <ThemeProvider>
            <Router>
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=path!("/") view=HomePage />
                </Routes>
            </Router>
        </ThemeProvider>
    }
}

#[component]
fn HomePage() -> impl IntoView {
    let (lang, set_lang) = signal(Lang::default());
    let (is_loading, set_is_loading) = signal(true);
    let theme = expect_context::<ThemeContext>();

    // effects only run in the browser, so the overlay lifts after hydration
    Effect::new(move |_| {
        set_timeout(move || set_is_loading.set(false), LOADING_DELAY);
    });

    view! {
        <Show when=move || is_loading.get()>
            <div class="fixed inset-0 z-50 flex items-center justify-center bg-black">
                <div class="h-10 w-10 animate-spin rounded-full border-2 border-accent-primary border-t-transparent" />
            </div>
        </Show>
        <main class=move || {
            format!(
                "relative min-h-screen bg-gradient-to-b {} transition-opacity duration-500 {}",
                theme.get().main_background(),
                if is_loading.get() { "opacity-0" } else { "opacity-100" },
            )
        }>
            <Navbar lang set_lang />
            <div class="pointer-events-none fixed inset-0 -z-20 opacity-40">
                <div class="absolute -left-32 top-10 h-72 w-72 rounded-full bg-accent-primary/25 blur-3xl" />
                <div class="absolute bottom-10 right-0 h-80 w-80 rounded-full bg-accent-secondary/25 blur-3xl" />
            </div>
            <BackgroundMatrix />
            <Hero lang />
            <Projects lang />
            <Experience lang />
            <Skills lang />
            <ContactForm lang />
            <Footer lang />
        </main>
    }
}

#[component]
fn Footer(lang: ReadSignal<Lang>) -> impl IntoView {
    view! {
        <footer class="mx-auto max-w-5xl px-4 pb-8 font-poppins text-[11px] text-slate-500 dark:text-gray-400">
            <p>
                "© " {env!("BUILD_YEAR")} " Marosata Fanomezantsoa — "
                {move || {
                    lang.get()
                        .pick(
                            "Designed & coded with Rust, Leptos and Tailwind CSS.",
                            "Conçu et développé avec Rust, Leptos et Tailwind CSS.",
                        )
                }}
            </p>
        </footer>
    }
}
