use leptos::{ev::SubmitEvent, prelude::*};

use super::content;
use crate::contact::{ContactForm, ContactReason};

const INPUT_CLASS: &str = "w-full bg-black/20 border border-gray-700/50 rounded-xl px-4 py-4 text-white placeholder-gray-500 focus:outline-none focus:ring-2 focus:ring-white/20 focus:border-white/30 transition-all duration-300";

#[component]
pub fn ContactSection(title: &'static str, subtitle: &'static str) -> impl IntoView {
    let recipient = content().profile.email.clone();
    let (form, set_form) = signal(ContactForm::default());
    let (dropdown_open, set_dropdown_open) = signal(false);
    let (error, set_error) = signal(None::<String>);

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let res = set_form.try_update(|f| f.submit(&recipient));
        match res {
            Some(Ok(link)) => {
                set_error.set(None);
                if let Err(err) = window().open_with_url_and_target(&link, "_blank") {
                    log::error!("couldn't open mail client: {err:?}");
                }
            }
            Some(Err(err)) => set_error.set(Some(err.to_string())),
            None => {}
        }
    };

    view! {
        <section id="contact" class="relative z-10 py-20 lg:py-24">
            <div class="max-w-4xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="text-center mb-12">
                    <p class="text-gray-400 text-sm font-light tracking-widest uppercase font-mono mb-4">
                        {subtitle}
                    </p>
                    <h2 class="text-4xl md:text-5xl lg:text-6xl font-light mb-4 text-white tracking-tight">
                        {title}
                    </h2>
                    <p class="text-gray-300 font-light text-lg max-w-2xl mx-auto leading-relaxed">
                        "Ready to bring your ideas to life? Let's discuss how we can work together."
                    </p>
                </div>
                <div class="bg-black/40 border border-gray-800/50 shadow-2xl rounded-3xl p-8 md:p-12">
                    <form on:submit=on_submit class="space-y-8">
                        <div class="grid md:grid-cols-2 gap-6">
                            <label class="space-y-2 block">
                                <span class="text-sm font-light text-gray-300 tracking-wide">
                                    "Your Name"
                                </span>
                                <input
                                    type="text"
                                    name="name"
                                    required=true
                                    placeholder="John Doe"
                                    class=INPUT_CLASS
                                    prop:value=move || form.get().name
                                    on:input=move |ev| {
                                        set_form.update(|f| f.name = event_target_value(&ev))
                                    }
                                />
                            </label>
                            <label class="space-y-2 block">
                                <span class="text-sm font-light text-gray-300 tracking-wide">
                                    "Your Email"
                                </span>
                                <input
                                    type="email"
                                    name="email"
                                    required=true
                                    placeholder="john@example.com"
                                    class=INPUT_CLASS
                                    prop:value=move || form.get().email
                                    on:input=move |ev| {
                                        set_form.update(|f| f.email = event_target_value(&ev))
                                    }
                                />
                            </label>
                        </div>
                        <div class="space-y-2">
                            <span class="text-sm font-light text-gray-300 tracking-wide">
                                "What can I help you with?"
                            </span>
                            <div class="relative">
                                <button
                                    type="button"
                                    class="w-full bg-black/20 border border-gray-700/50 rounded-xl px-4 py-4 text-left flex items-center justify-between"
                                    on:click=move |_| set_dropdown_open.update(|open| *open = !*open)
                                >
                                    {move || {
                                        let (class, label) = match form.get().reason {
                                            Some(reason) => ("text-white", reason.label()),
                                            None => ("text-gray-500", "Select a reason"),
                                        };
                                        view! { <span class=class>{label}</span> }
                                    }}
                                    <span class=move || {
                                        if dropdown_open.get() {
                                            "text-gray-400 rotate-180 transition-transform duration-200"
                                        } else {
                                            "text-gray-400 transition-transform duration-200"
                                        }
                                    }>"▾"</span>
                                </button>
                                <Show when=move || dropdown_open.get()>
                                    <div class="absolute z-10 w-full mt-2 bg-black/80 border border-gray-700/50 rounded-xl shadow-xl">
                                        <ReasonOptions set_form set_dropdown_open />
                                    </div>
                                </Show>
                            </div>
                        </div>
                        <label class="space-y-2 block">
                            <span class="text-sm font-light text-gray-300 tracking-wide">
                                "Your Message"
                            </span>
                            <textarea
                                name="message"
                                required=true
                                rows=6
                                placeholder="Tell me about your project, goals, timeline, and any specific requirements..."
                                class=format!("{INPUT_CLASS} resize-none")
                                prop:value=move || form.get().message
                                on:input=move |ev| {
                                    set_form.update(|f| f.message = event_target_value(&ev))
                                }
                            ></textarea>
                        </label>
                        {move || {
                            error
                                .get()
                                .map(|err| view! { <p class="text-sm text-red-400">{err}</p> })
                        }}
                        <div class="flex justify-end">
                            <button
                                type="submit"
                                disabled=move || !form.get().is_complete()
                                class="bg-white text-black hover:bg-gray-200 disabled:bg-gray-600 disabled:text-gray-400 px-8 py-3 rounded-xl font-light tracking-wide transition-all duration-300"
                            >
                                "Send Message"
                            </button>
                        </div>
                    </form>
                    <div class="mt-8 pt-8 border-t border-gray-800/50">
                        <p class="text-gray-400 text-sm font-light text-center">
                            "By sending this message, you agree to discuss your project requirements. I'll get back to you within 24 hours."
                        </p>
                    </div>
                </div>
            </div>
        </section>
    }
}

#[component]
fn ReasonOptions(
    set_form: WriteSignal<ContactForm>,
    set_dropdown_open: WriteSignal<bool>,
) -> impl IntoView {
    ContactReason::ALL
        .into_iter()
        .map(|reason| {
            view! {
                <button
                    type="button"
                    class="w-full px-4 py-3 text-left text-white hover:bg-white/10 transition-colors duration-200 first:rounded-t-xl last:rounded-b-xl"
                    on:click=move |_| {
                        set_form.update(|f| f.reason = Some(reason));
                        set_dropdown_open.set(false);
                    }
                >
                    {reason.label()}
                </button>
            }
        })
        .collect_view()
}
