//! Buttons and cards

use bookmark_core::view::ExtensionCardView;
use leptos::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CtaVariant {
    Blue,
    White,
}

#[component]
pub fn CtaButton(
    label: &'static str,
    variant: CtaVariant,
    #[prop(optional)] full_width: bool,
) -> impl IntoView {
    let tone = match variant {
        CtaVariant::Blue => {
            "text-white bg-primary-soft-blue border border-primary-soft-blue hover:bg-white hover:text-primary-soft-blue"
        }
        CtaVariant::White => {
            "text-neutral-very-dark-blue bg-gray-50 border border-gray-50 hover:border-neutral-very-dark-blue"
        }
    };
    let width = if full_width { "w-full" } else { "px-6" };

    view! {
        <button
            type="button"
            class=format!("py-3 rounded shadow-xl text-sm transition-colors duration-300 ease-in-out {tone} {width}")
        >
            {label}
        </button>
    }
}

#[component]
pub fn ExtensionCard(card: ExtensionCardView) -> impl IntoView {
    view! {
        <li class="flex-1 shadow-lg rounded-xl lg:even:mt-16 lg:last:mt-32 border border-transparent border-dashed transition-colors duration-300 ease-in-out hover:border-neutral-grayish-blue">
            <div class="flex flex-col p-10 gap-8 items-center">
                <img
                    src=card.logo_src
                    alt=card.logo_alt
                    width={card.width.to_string()}
                    height={card.height.to_string()}
                />
                <div class="text-center">
                    <h3 class="text-neutral-very-dark-blue text-xl mb-2 font-bold">{card.heading}</h3>
                    <p class="text-neutral-grayish-blue">{card.caption}</p>
                </div>
            </div>
            <div class="p-8 border-t border-neutral-grayish-blue border-dashed flex">
                <CtaButton label="Add & Install Extension" variant=CtaVariant::Blue full_width=true/>
            </div>
        </li>
    }
}
