//! FAQ accordion

use bookmark_core::catalog::{Catalog, FaqEntry};
use bookmark_core::FaqAccordion;
use leptos::*;

use crate::components::icons::ArrowIcon;

#[component]
pub fn FaqList(catalog: Catalog<FaqEntry>) -> impl IntoView {
    let accordion = create_rw_signal(FaqAccordion::with_catalog(catalog));
    let items = accordion.with_untracked(|a| a.render());

    view! {
        <ul class="max-w-xl w-full mx-auto border-t border-neutral-grayish-blue/30">
            {items
                .into_iter()
                .map(|item| {
                    let index = item.index;
                    let open = Signal::derive(move || accordion.with(|a| a.is_open(index)));
                    let answer_id = format!("faq-answer-{index}");
                    let on_click = move |_: ev::MouseEvent| {
                        if let Some(Err(err)) = accordion.try_update(|a| a.toggle(index)) {
                            tracing::warn!(%err, "FAQ toggle rejected");
                        }
                    };

                    view! {
                        <li class="border-b border-neutral-grayish-blue/30">
                            <button
                                type="button"
                                aria-expanded=move || open.get().to_string()
                                aria-controls={answer_id.clone()}
                                class="w-full flex items-center justify-between gap-6 py-5 text-left text-neutral-very-dark-blue hover:text-primary-soft-red transition-colors"
                                on:click=on_click
                            >
                                <span>{item.question}</span>
                                <ArrowIcon open=open/>
                            </button>
                            <div id=answer_id class=move || if open.get() { "pb-6" } else { "hidden" }>
                                <p class="text-neutral-grayish-blue leading-loose">{item.answer}</p>
                            </div>
                        </li>
                    }
                })
                .collect::<Vec<_>>()}
        </ul>
    }
}
