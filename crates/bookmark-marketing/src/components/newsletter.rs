//! Newsletter signup form

use bookmark_core::ContactForm;
use leptos::*;

use crate::components::icons::ErrorIcon;

#[component]
pub fn NewsletterForm() -> impl IntoView {
    let form = create_rw_signal(ContactForm::new());
    let (email, set_email) = create_signal(String::new());

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        let value = email.get_untracked();
        form.update(|f| {
            f.submit(&value);
        });
    };

    let state = move || form.with(|f| f.render());
    let invalid = move || state().invalid;

    view! {
        <section id="contact" class="bg-primary-soft-blue text-white px-8 py-16">
            <div class="max-w-md mx-auto text-center grid gap-6">
                <p class="uppercase tracking-[0.3em] text-sm">"35,000+ already joined"</p>
                <h2 class="text-2xl md:text-3xl font-medium">
                    "Stay up-to-date with what we're doing"
                </h2>

                <form novalidate on:submit=on_submit class="flex flex-col md:flex-row gap-4 mt-4">
                    <div class=move || {
                        if invalid() {
                            "relative flex-1 rounded bg-primary-soft-red p-[2px] pb-0"
                        } else {
                            "relative flex-1"
                        }
                    }>
                        <label for="newsletter-email" class="sr-only">"Email address"</label>
                        <input
                            id="newsletter-email"
                            type="email"
                            name="email"
                            required
                            placeholder="Enter your email address"
                            aria-invalid=move || invalid().to_string()
                            aria-describedby="newsletter-error"
                            class="w-full rounded px-5 py-3 text-neutral-very-dark-blue focus:outline-none"
                            on:input=move |ev| set_email.set(event_target_value(&ev))
                            prop:value=email
                        />
                        <Show when=invalid>
                            <span class="absolute right-4 top-3">
                                <ErrorIcon/>
                            </span>
                            <p id="newsletter-error" role="alert" class="text-left text-xs italic px-3 py-1">
                                {move || state().error.unwrap_or_default()}
                            </p>
                        </Show>
                    </div>

                    <button
                        type="submit"
                        class=move || {
                            if invalid() {
                                "md:self-start px-6 py-3 rounded bg-primary-soft-red border-2 border-primary-soft-red hover:bg-white hover:text-primary-soft-red transition-colors"
                            } else {
                                "px-6 py-3 rounded bg-primary-soft-red border-2 border-primary-soft-red hover:bg-white hover:text-primary-soft-red transition-colors"
                            }
                        }
                    >
                        "Contact Us"
                    </button>
                </form>
            </div>
        </section>
    }
}
