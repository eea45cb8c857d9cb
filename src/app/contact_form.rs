use leptos::{html, prelude::*, task::spawn_local};

use crate::{
    contact::{
        submit_contact, success_message, ContactPayload, FormStatus, FormUpdate, SubmitError,
    },
    i18n::{Lang, Text},
};

const FIELD_CLASS: &str = "w-full rounded-xl border border-slate-300 bg-slate-50 px-3 py-2 font-poppins text-sm text-slate-900 outline-none ring-accent-primary/50 placeholder:text-slate-400 focus:ring-1 dark:border-white/10 dark:bg-black/40 dark:text-gray-100 dark:placeholder:text-gray-500";
const LABEL_CLASS: &str =
    "block font-poppins text-xs font-medium text-slate-700 dark:text-gray-300";
const CONTACT_EMAIL: &str = "marosataf@gmail.com";

const INTRO: Text = Text::new(
    "Send me a short brief and I’ll get back to you.",
    "Envoyez‑moi un court descriptif et je vous répondrai rapidement.",
);
const MESSAGE_PLACEHOLDER: Text = Text::new(
    "Tell me briefly about your project, context and timeline.",
    "Décrivez brièvement votre projet, le contexte et le délai.",
);

#[component]
pub fn ContactForm(lang: ReadSignal<Lang>) -> impl IntoView {
    let name_ref = NodeRef::<html::Input>::new();
    let email_ref = NodeRef::<html::Input>::new();
    let message_ref = NodeRef::<html::Textarea>::new();
    let (status, set_status) = signal(FormStatus::Idle);
    let (error, set_error) = signal(None::<&'static str>);
    let apply = move |update: FormUpdate| {
        set_status.set(update.status);
        set_error.set(update.error);
    };

    view! {
        <section
            id="contact"
            class="mx-auto max-w-5xl px-4 pb-24"
            aria-label="Contact"
        >
            <div class="mb-8 space-y-2">
                <h2 class="text-2xl font-semibold tracking-tight text-slate-900 dark:text-gray-100">
                    {move || lang.get().pick("Let’s build something", "Construisons quelque chose")}
                </h2>
                <p class="font-poppins text-sm text-slate-600 dark:text-gray-400">
                    {move || {
                        lang.get()
                            .pick(
                                "Open to internships, part‑time roles and freelance missions in modern web development.",
                                "Ouvert aux stages, postes à temps partiel et missions freelance en développement web moderne.",
                            )
                    }}
                </p>
            </div>
            <div class="grid gap-6 md:grid-cols-[minmax(0,1.2fr)_minmax(0,1fr)]">
                <div class="relative rounded-3xl border border-slate-200 bg-white/80 p-5 shadow-xl backdrop-blur-lg dark:border-white/10 dark:bg-black/40">
                    <form
                        class="space-y-4"
                        on:submit=move |ev| {
                            ev.prevent_default();
                            let (Some(name), Some(email), Some(message)) = (
                                name_ref.get_untracked(),
                                email_ref.get_untracked(),
                                message_ref.get_untracked(),
                            ) else {
                                return;
                            };
                            let payload = ContactPayload::new(
                                name.value(),
                                email.value(),
                                message.value(),
                            );
                            apply(FormUpdate::submitting());
                            spawn_local(async move {
                                let result = match window().location().origin() {
                                    Ok(origin) => submit_contact(&origin, &payload).await,
                                    Err(_) => Err(SubmitError::NoOrigin),
                                };
                                if let Err(err) = &result {
                                    log::error!("contact form submission failed: {err}");
                                }
                                let update = FormUpdate::settled(&result, lang.get_untracked());
                                if update.clear_fields {
                                    name.set_value("");
                                    email.set_value("");
                                    message.set_value("");
                                }
                                apply(update);
                            });
                        }
                    >
                        <div class="flex gap-2 font-poppins text-sm text-slate-700 dark:text-gray-300">
                            <span class="text-accent-primary">"✉"</span>
                            <span>{move || INTRO.get(lang.get())}</span>
                        </div>
                        <div class="space-y-2">
                            <label for="contact_name" class=LABEL_CLASS>
                                {move || lang.get().pick("Name", "Nom")}
                            </label>
                            <input
                                id="contact_name"
                                node_ref=name_ref
                                type="text"
                                name="name"
                                required
                                class=FIELD_CLASS
                                placeholder=move || lang.get().pick("Your name", "Votre nom")
                            />
                        </div>
                        <div class="space-y-2">
                            <label for="contact_email" class=LABEL_CLASS>
                                "Email"
                            </label>
                            <input
                                id="contact_email"
                                node_ref=email_ref
                                type="email"
                                name="email"
                                required
                                class=FIELD_CLASS
                                placeholder="you@example.com"
                            />
                        </div>
                        <div class="space-y-2">
                            <label for="contact_message" class=LABEL_CLASS>
                                "Message"
                            </label>
                            <textarea
                                id="contact_message"
                                node_ref=message_ref
                                name="message"
                                required
                                rows="4"
                                class=format!("{FIELD_CLASS} resize-none")
                                placeholder=move || MESSAGE_PLACEHOLDER.get(lang.get())
                            ></textarea>
                        </div>
                        <button
                            type="submit"
                            disabled=move || status.get().is_loading()
                            class="inline-flex items-center gap-2 rounded-full bg-accent-primary px-5 py-2.5 font-poppins text-sm font-medium text-black shadow-lg shadow-blue-500/30 transition hover:-translate-y-0.5 hover:bg-blue-500 disabled:opacity-60"
                        >
                            {move || status.get().button_label(lang.get())}
                            <span aria-hidden="true">"↗"</span>
                        </button>
                        <Show when=move || status.get() == FormStatus::Success>
                            <p class="font-poppins text-[11px] text-emerald-400">
                                {move || success_message(lang.get())}
                            </p>
                        </Show>
                        {move || {
                            (status.get() == FormStatus::Error)
                                .then(|| error.get())
                                .flatten()
                                .map(|msg| {
                                    view! {
                                        <p class="font-poppins text-[11px] text-red-400">{msg}</p>
                                    }
                                })
                        }}
                    </form>
                </div>
                <DirectContact lang />
            </div>
        </section>
    }
}

#[component]
fn DirectContact(lang: ReadSignal<Lang>) -> impl IntoView {
    view! {
        <div class="space-y-4 font-poppins text-sm text-slate-700 dark:text-gray-300">
            <div class="relative rounded-3xl border border-slate-200 bg-slate-100 p-4 backdrop-blur dark:border-white/10 dark:bg-black/50">
                <p class="font-poppins text-xs font-medium uppercase tracking-[0.2em] text-slate-500 dark:text-gray-500">
                    {move || lang.get().pick("Direct contact", "Contact direct")}
                </p>
                <div class="mt-3 space-y-2 font-poppins text-sm">
                    <a
                        href=format!("mailto:{CONTACT_EMAIL}")
                        class="flex items-center gap-2 text-slate-700 transition-colors hover:text-accent-primary dark:text-gray-300"
                    >
                        <span aria-hidden="true">"✉"</span>
                        <span>{CONTACT_EMAIL}</span>
                    </a>
                    <a
                        href="https://portfolio-marosata.vercel.app/"
                        target="_blank"
                        rel="noreferrer"
                        class="flex items-center gap-2 text-slate-700 transition-colors hover:text-accent-primary dark:text-gray-300"
                    >
                        <span aria-hidden="true">"↗"</span>
                        <span>"portfolio-marosata.vercel.app"</span>
                    </a>
                    <p class="flex items-center gap-2 text-slate-600 dark:text-gray-400">
                        <span class="inline-flex h-2 w-2 rounded-full bg-green-400" />
                        <span>"Madagascar · +261 34 59 737 65"</span>
                    </p>
                </div>
            </div>
            <div class="relative rounded-3xl border border-slate-200 bg-slate-100 p-4 backdrop-blur dark:border-white/10 dark:bg-black/60">
                <p class="font-poppins text-xs font-medium uppercase tracking-[0.2em] text-slate-500 dark:text-gray-500">
                    {move || lang.get().pick("Links", "Liens")}
                </p>
                <div class="mt-3 flex flex-wrap gap-3">
                    <a
                        href="https://www.linkedin.com"
                        target="_blank"
                        rel="noreferrer"
                        class="inline-flex items-center gap-2 rounded-full bg-slate-200 px-3 py-1.5 font-poppins text-xs text-slate-700 transition-colors hover:bg-slate-300 hover:text-slate-900 dark:bg-white/5 dark:text-gray-300 dark:hover:bg-white/10 dark:hover:text-gray-100"
                    >
                        <span>"LinkedIn"</span>
                    </a>
                    <a
                        href="/CV-Fano-a-jour.pdf"
                        class="inline-flex items-center gap-2 rounded-full bg-slate-200 px-3 py-1.5 font-poppins text-xs text-slate-700 transition-colors hover:bg-slate-300 hover:text-slate-900 dark:bg-white/5 dark:text-gray-300 dark:hover:bg-white/10 dark:hover:text-gray-100"
                    >
                        <span>{move || lang.get().pick("Download CV", "Télécharger le CV")}</span>
                    </a>
                </div>
            </div>
        </div>
    }
}
