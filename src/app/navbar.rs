use leptos::prelude::*;

use super::ThemeContext;
use crate::i18n::{Lang, Text};

/// Scroll offset below which the navbar always stays visible.
const HIDE_AFTER_PX: f64 = 80.0;

const SECTIONS: [(&str, Text); 4] = [
    ("hero", Text::new("Home", "Accueil")),
    ("projects", Text::new("Projects", "Projets")),
    ("experience", Text::new("Experience", "Expériences")),
    ("contact", Text::same("Contact")),
];

/// Hide while scrolling down past the threshold, show again on any upward scroll.
#[cfg_attr(not(feature = "hydrate"), allow(dead_code))]
fn should_hide(last_y: f64, current_y: f64) -> bool {
    current_y > last_y && current_y > HIDE_AFTER_PX
}

fn lang_button_class(lang: Lang, selected: bool) -> &'static str {
    match (lang, selected) {
        (Lang::En, true) => "px-2 py-1 transition-colors rounded-full bg-accent-primary text-black",
        (Lang::Fr, true) => "px-2 py-1 transition-colors rounded-full bg-accent-secondary text-black",
        (_, false) => "px-2 py-1 transition-colors text-slate-600 dark:text-gray-400",
    }
}

#[component]
pub fn Navbar(lang: ReadSignal<Lang>, set_lang: WriteSignal<Lang>) -> impl IntoView {
    let theme = expect_context::<ThemeContext>();
    let (hidden, set_hidden) = signal(false);

    #[cfg(feature = "hydrate")]
    {
        let last_y = StoredValue::new(0.0_f64);
        let handle = window_event_listener(leptos::ev::scroll, move |_| {
            let y = window().scroll_y().unwrap_or_default();
            set_hidden.set(should_hide(last_y.get_value(), y));
            last_y.set_value(y);
        });
        on_cleanup(move || handle.remove());
    }
    #[cfg(not(feature = "hydrate"))]
    let _ = set_hidden;

    view! {
        <header class=move || {
            format!(
                "fixed inset-x-0 top-0 z-40 transition-transform duration-300 {}",
                if hidden.get() { "-translate-y-full" } else { "translate-y-0" },
            )
        }>
            <nav class="mx-auto flex max-w-5xl items-center justify-between rounded-b-2xl bg-white/70 px-4 py-3 backdrop-blur-xl dark:border-white/10 dark:bg-black/60 dark:text-gray-100">
                <a href="#hero" class="font-poppins text-sm font-semibold tracking-tight">
                    <img
                        src="/assets/pictures/FanoLogo.png"
                        alt="Fano Logo"
                        width="100"
                        height="100"
                        class="rounded-full object-cover w-20 h-20"
                    />
                </a>
                <div class="flex items-center gap-6 font-poppins text-sm">
                    <div class="hidden items-center gap-4 sm:flex">
                        {SECTIONS
                            .into_iter()
                            .map(|(id, label)| {
                                view! {
                                    <a
                                        href=format!("#{id}")
                                        class="text-slate-700 transition-colors hover:text-accent-primary dark:text-gray-300"
                                    >
                                        {move || label.get(lang.get())}
                                    </a>
                                }
                            })
                            .collect_view()}
                    </div>
                    <div class="flex items-center gap-2 rounded-full border border-slate-300 bg-slate-100 px-1 py-0.5 font-poppins text-xs font-medium backdrop-blur dark:border-white/10 dark:bg-black/40">
                        {Lang::ALL
                            .into_iter()
                            .map(|l| {
                                view! {
                                    <button
                                        type="button"
                                        class=move || lang_button_class(l, lang.get() == l)
                                        on:click=move |_| set_lang.set(l)
                                        aria-label=l.switch_label()
                                    >
                                        {l.code().to_uppercase()}
                                    </button>
                                }
                            })
                            .collect_view()}
                    </div>
                    <button
                        type="button"
                        on:click=move |_| theme.toggle()
                        class="rounded-full border border-slate-300 bg-slate-100 p-1.5 backdrop-blur transition-colors hover:bg-slate-200 dark:border-white/10 dark:bg-black/40 dark:hover:bg-black/60"
                        aria-label="Toggle theme"
                    >
                        <span class=move || {
                            if theme.get().is_dark() {
                                "text-yellow-500 dark:text-yellow-300"
                            } else {
                                "text-sky-600 dark:text-sky-700"
                            }
                        }>{move || if theme.get().is_dark() { "☀" } else { "☾" }}</span>
                    </button>
                </div>
            </nav>
        </header>
    }
}
