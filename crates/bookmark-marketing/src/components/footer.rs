//! Page footer

use bookmark_core::catalog::SOCIAL;
use bookmark_core::view::{nav_items, LOGO_LABEL};
use bookmark_core::PageConfig;
use leptos::*;

use crate::components::icons::{social_icon, BookmarkLogo};

#[component]
pub fn Footer(config: PageConfig) -> impl IntoView {
    // The login call-to-action lives in the header only.
    let links = nav_items(config.navigation)
        .into_iter()
        .filter(|item| !item.emphasis)
        .collect::<Vec<_>>();

    view! {
        <footer class="bg-neutral-very-dark-blue text-white px-8 py-10">
            <div class="max-w-[1100px] mx-auto flex flex-col md:flex-row items-center gap-10">
                <a href="#" title="Go to bookmark home">
                    <span class="sr-only">{LOGO_LABEL}</span>
                    <BookmarkLogo inverted=true/>
                </a>
                <nav>
                    <ul class="flex flex-col md:flex-row items-center gap-8">
                        {links
                            .into_iter()
                            .map(|item| view! {
                                <li>
                                    <a href=item.href class="uppercase tracking-widest text-sm hover:text-primary-soft-red transition-colors">
                                        {item.label}
                                    </a>
                                </li>
                            })
                            .collect::<Vec<_>>()}
                    </ul>
                </nav>
                <ul class="md:ml-auto flex items-center gap-10">
                    {SOCIAL
                        .iter()
                        .map(|link| view! {
                            <li>
                                <a href=link.href class="hover:text-primary-soft-red transition-colors">
                                    <span class="sr-only">{link.label}</span>
                                    {social_icon(link.label)}
                                </a>
                            </li>
                        })
                        .collect::<Vec<_>>()}
                </ul>
            </div>
        </footer>
    }
}
