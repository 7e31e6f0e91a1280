//! Feature tab switcher

use bookmark_core::catalog::{Catalog, FeatureEntry};
use bookmark_core::FeatureSelector;
use leptos::*;

use crate::components::cards::{CtaButton, CtaVariant};

#[component]
pub fn FeatureTabs(catalog: Catalog<FeatureEntry>) -> impl IntoView {
    let selector = create_rw_signal(FeatureSelector::with_catalog(catalog).unwrap_or_else(|err| {
        tracing::error!(%err, "Falling back to the built-in feature catalog");
        FeatureSelector::new()
    }));

    let tabs = selector.with_untracked(|s| s.render().tabs);
    let detail = move || selector.with(|s| s.render().detail);

    view! {
        <div class="flex flex-col md:items-center gap-16">
            <ul class="flex flex-col md:flex-row" role="tablist">
                {tabs
                    .into_iter()
                    .map(|tab| {
                        let index = tab.index;
                        let active = move || selector.with(|s| s.selected_index() == index);
                        let on_click = move |_: ev::MouseEvent| {
                            if let Some(Err(err)) = selector.try_update(|s| s.select(index)) {
                                tracing::warn!(%err, "Feature tab rejected");
                            }
                        };
                        view! {
                            <li class="first:border-t first:border-b last:border-t last:border-b md:first:border-t-0 md:last:border-t-0 md:border-b border-neutral-grayish-blue flex justify-center">
                                <button
                                    type="button"
                                    role="tab"
                                    name=tab.label
                                    aria-selected=move || active().to_string()
                                    class="relative py-4 md:px-12 capitalize text-neutral-grayish-blue transition-colors duration-300 ease-in-out hover:text-neutral-very-dark-blue"
                                    on:click=on_click
                                >
                                    {tab.label}
                                    <div class=move || {
                                        if active() {
                                            "absolute w-[90%] md:w-full h-1 bottom-0 left-1/2 -translate-x-1/2 transition-transform duration-500 ease-in-out origin-left bg-primary-soft-red scale-x-100"
                                        } else {
                                            "absolute w-[90%] md:w-full h-1 bottom-0 left-1/2 -translate-x-1/2 transition-transform duration-500 ease-in-out origin-left scale-x-0"
                                        }
                                    }/>
                                </button>
                            </li>
                        }
                    })
                    .collect::<Vec<_>>()}
            </ul>

            <div class="flex flex-col lg:flex-row items-center" role="tabpanel">
                <figure class="flex-1 shrink-0 relative">
                    <img
                        src=move || detail().image_src
                        alt=move || detail().image_alt
                        width=move || detail().width.to_string()
                        height=move || detail().height.to_string()
                        class="w-full"
                    />
                    <div class="absolute top-[3rem] lg:top-[5rem] right-[6rem] lg:right-[10rem] bg-primary-soft-blue w-[120%] h-[95%] -z-10 rounded-br-[5rem] lg:rounded-br-[10rem]"/>
                </figure>

                <div class="flex-1 shrink-0 mt-24 lg:mt-0 flex flex-col gap-6 text-center lg:text-left">
                    <h3 class="text-neutral-very-dark-blue text-2xl md:text-3xl font-bold lg:ml-20">
                        {move || detail().title}
                    </h3>
                    <p class="text-neutral-grayish-blue lg:ml-20">{move || detail().summary}</p>
                    <div class="hidden lg:block lg:ml-20">
                        <CtaButton label="More Info" variant=CtaVariant::Blue/>
                    </div>
                </div>
            </div>
        </div>
    }
}
