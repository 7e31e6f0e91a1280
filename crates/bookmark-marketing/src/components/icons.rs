//! Inline SVG icons

use leptos::*;

#[component]
pub fn BookmarkLogo(#[prop(into)] inverted: MaybeSignal<bool>) -> impl IntoView {
    view! {
        <svg xmlns="http://www.w3.org/2000/svg" width="148" height="25" aria-hidden="true">
            <g fill="none" fill-rule="evenodd">
                <circle cx="12.5" cy="12.5" r="12.5" fill="#5368DF"/>
                <path fill="#FFF" d="M9 6h8v13l-4-3.2L9 19z"/>
                <text
                    x="34"
                    y="19"
                    font-size="18"
                    font-weight="500"
                    letter-spacing="3"
                    fill=move || if inverted.get() { "#FFF" } else { "#242A45" }
                >
                    "BOOKMARK"
                </text>
            </g>
        </svg>
    }
}

#[component]
pub fn HamburgerIcon() -> impl IntoView {
    view! {
        <svg xmlns="http://www.w3.org/2000/svg" width="18" height="15" aria-hidden="true">
            <path fill="#242A45" fill-rule="evenodd" d="M0 0h18v3H0V0zm0 6h18v3H0V6zm0 6h18v3H0v-3z"/>
        </svg>
    }
}

#[component]
pub fn CloseIcon() -> impl IntoView {
    view! {
        <svg xmlns="http://www.w3.org/2000/svg" width="16" height="15" aria-hidden="true">
            <path
                fill="#FFF"
                fill-rule="evenodd"
                d="M8 5.379L13.303.075l2.122 2.122L10.12 7.5l5.304 5.303-2.122 2.122L8 9.62l-5.303 5.304-2.122-2.122L5.88 7.5.575 2.197 2.697.075 8 5.38z"
            />
        </svg>
    }
}

#[component]
pub fn FacebookIcon() -> impl IntoView {
    view! {
        <svg xmlns="http://www.w3.org/2000/svg" width="24" height="24" aria-hidden="true">
            <path
                fill="currentColor"
                fill-rule="evenodd"
                d="M22.675 0H1.325C.593 0 0 .593 0 1.325v21.351C0 23.407.593 24 1.325 24H12.82v-9.294H9.692v-3.622h3.128V8.413c0-3.1 1.893-4.788 4.659-4.788 1.325 0 2.463.099 2.795.143v3.24l-1.918.001c-1.504 0-1.795.715-1.795 1.763v2.313h3.587l-.467 3.622h-3.12V24h6.116c.73 0 1.323-.593 1.323-1.325V1.325C24 .593 23.407 0 22.675 0z"
            />
        </svg>
    }
}

#[component]
pub fn TwitterIcon() -> impl IntoView {
    view! {
        <svg xmlns="http://www.w3.org/2000/svg" width="24" height="20" aria-hidden="true">
            <path
                fill="currentColor"
                fill-rule="evenodd"
                d="M24 2.557a9.83 9.83 0 01-2.828.775A4.932 4.932 0 0023.337.608a9.864 9.864 0 01-3.127 1.195A4.916 4.916 0 0016.616.248c-3.179 0-5.515 2.966-4.797 6.045A13.978 13.978 0 011.671 1.149a4.93 4.93 0 001.523 6.574 4.903 4.903 0 01-2.229-.616c-.054 2.281 1.581 4.415 3.949 4.89a4.935 4.935 0 01-2.224.084 4.928 4.928 0 004.6 3.419A9.9 9.9 0 010 17.54a13.94 13.94 0 007.548 2.212c9.142 0 14.307-7.721 13.995-14.646A10.025 10.025 0 0024 2.557z"
            />
        </svg>
    }
}

#[component]
pub fn ArrowIcon(#[prop(into)] open: MaybeSignal<bool>) -> impl IntoView {
    view! {
        <svg
            xmlns="http://www.w3.org/2000/svg"
            width="18"
            height="12"
            aria-hidden="true"
            class=move || {
                if open.get() {
                    "shrink-0 rotate-180 transition-accordion-arrow duration-300"
                } else {
                    "shrink-0 transition-accordion-arrow duration-300"
                }
            }
        >
            <path
                fill="none"
                stroke-width="3"
                stroke=move || if open.get() { "#FA5757" } else { "#5267DF" }
                d="M1 1l8 8 8-8"
            />
        </svg>
    }
}

#[component]
pub fn ErrorIcon() -> impl IntoView {
    view! {
        <svg xmlns="http://www.w3.org/2000/svg" width="20" height="20" aria-hidden="true">
            <g fill="none" fill-rule="evenodd">
                <circle cx="10" cy="10" r="10" fill="#FA5757"/>
                <g fill="#FFF" transform="translate(9 5)">
                    <rect width="2" height="7" rx="1"/>
                    <rect width="2" height="2" y="8" rx="1"/>
                </g>
            </g>
        </svg>
    }
}

/// Icon for a social link by its label
pub fn social_icon(label: &str) -> View {
    match label {
        "facebook" => view! { <FacebookIcon/> }.into_view(),
        "twitter" => view! { <TwitterIcon/> }.into_view(),
        _ => ().into_view(),
    }
}
