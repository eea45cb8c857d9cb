use leptos::prelude::*;

#[cfg(feature = "hydrate")]
use codee::string::FromToStringCodec;
#[cfg(feature = "hydrate")]
use leptos_use::storage::use_local_storage;

#[cfg(feature = "hydrate")]
use crate::theme::THEME_STORAGE_KEY;
use crate::theme::Theme;

/// Current theme plus the toggle, shared with every component below
/// [`ThemeProvider`].
#[derive(Debug, Clone, Copy)]
pub struct ThemeContext {
    theme: Signal<Theme>,
    set_theme: WriteSignal<Theme>,
}

impl ThemeContext {
    pub fn get(&self) -> Theme {
        self.theme.get()
    }

    /// Flips the theme; in the browser the new value is written back to local storage.
    pub fn toggle(&self) {
        self.set_theme.update(|theme| *theme = theme.toggled());
    }
}

#[component]
pub fn ThemeProvider(children: Children) -> impl IntoView {
    // storage is only read in the browser; the server renders the default
    #[cfg(feature = "hydrate")]
    let (theme, set_theme, _) = use_local_storage::<Theme, FromToStringCodec>(THEME_STORAGE_KEY);
    #[cfg(not(feature = "hydrate"))]
    let (theme, set_theme) = {
        let (theme, set_theme) = signal(Theme::default());
        (Signal::from(theme), set_theme)
    };

    let ctx = ThemeContext { theme, set_theme };
    provide_context(ctx);

    view! { <div class=move || ctx.get().wrapper_class()>{children()}</div> }
}
