//! Header navigation component
//!
//! The mobile drawer and the desktop list are both rendered; the `md`
//! breakpoint decides which one the visitor sees. All drawer state lives in
//! [`MountedHeader`]; this module only draws its view descriptions.

use bookmark_core::catalog::SOCIAL;
use bookmark_core::navigation::{DrawerState, MountedHeader};
use bookmark_core::view::{HeaderView, NavItemView, ToggleControl, Viewport, LOGO_LABEL};
use bookmark_core::PageConfig;
use leptos::*;

use crate::components::icons::*;
use crate::dom::{BodyScroll, WindowEvents};

type Mounted = MountedHeader<BodyScroll>;

const DRAWER_BASE: &str = "z-10 md:hidden absolute w-full h-screen bg-neutral-very-dark-blue/90 top-0 left-0 \
                           pt-24 px-8 pb-14 grid justify-between grid-rows-2 grid-cols-1 \
                           transition-all duration-300 ease-in-out";

/// The mounted header shared by the header's parts. `state` mirrors the
/// drawer so views re-render on every transition, Escape and resize included.
#[derive(Clone, Copy)]
struct HeaderHandle {
    header: StoredValue<Option<Mounted>>,
    state: RwSignal<DrawerState>,
}

impl HeaderHandle {
    fn mount(config: &PageConfig) -> Self {
        let mounted =
            MountedHeader::mount_with_links(&WindowEvents, BodyScroll, config.navigation, SOCIAL);
        let state = create_rw_signal(mounted.state());
        mounted.observe(move |next| {
            state.try_set(next);
        });

        Self {
            header: store_value(Some(mounted)),
            state,
        }
    }

    fn with<R>(&self, f: impl FnOnce(&Mounted) -> R) -> Option<R> {
        self.header.with_value(|header| header.as_ref().map(f))
    }

    fn render(&self, viewport: Viewport) -> Option<HeaderView> {
        self.state.track();
        self.with(|header| header.render(viewport))
    }

    /// Drops the listeners and the scroll lock
    fn unmount(&self) {
        if let Some(header) = self.header.try_update_value(Option::take).flatten() {
            header.unmount();
        }
    }
}

#[component]
pub fn Header(config: PageConfig) -> impl IntoView {
    let header = HeaderHandle::mount(&config);
    on_cleanup(move || header.unmount());

    let expanded = Signal::derive(move || header.state.get().is_open());
    let layer = move || if expanded.get() { "z-20" } else { "z-0" };
    let desktop_links = header
        .with(|h| h.render(Viewport::DESKTOP).desktop_nav)
        .flatten()
        .unwrap_or_default();

    view! {
        <header class="px-8">
            <div class="flex items-center justify-between h-24 max-w-[1100px] mx-auto">
                <a href="#" title="Go to bookmark home" class=layer>
                    <span class="sr-only">{LOGO_LABEL}</span>
                    <BookmarkLogo inverted=expanded/>
                </a>

                // Hamburger / close toggle
                <div class=move || format!("flex items-center md:hidden {}", layer())>
                    <MenuToggle header=header/>
                </div>

                <MobileNavigation header=header follow_links=config.follow_links/>
                <DesktopNavigation links=desktop_links follow_links=config.follow_links/>
            </div>
        </header>
    }
}

/// Drawer and desktop links share this: variants that do not follow links
/// keep the visitor where they are.
fn stay_unless_following(ev: &ev::MouseEvent, follow_links: bool) {
    if !follow_links {
        ev.prevent_default();
    }
}

#[component]
fn MenuToggle(header: HeaderHandle) -> impl IntoView {
    move || {
        header
            .render(Viewport::MOBILE)
            .and_then(|view| view.toggle)
            .map(|toggle| {
                let control = toggle.control;
                let on_click = move |_: ev::MouseEvent| {
                    header.with(|h| match control {
                        ToggleControl::Hamburger => h.open(),
                        ToggleControl::Close => h.close(),
                    });
                };
                let icon = match control {
                    ToggleControl::Hamburger => view! { <HamburgerIcon/> }.into_view(),
                    ToggleControl::Close => view! { <CloseIcon/> }.into_view(),
                };

                view! {
                    <button
                        type="button"
                        aria-expanded={toggle.expanded.to_string()}
                        class="w-10 h-10 rounded-full flex items-center justify-end"
                        on:click=on_click
                    >
                        <span class="sr-only">{toggle.label}</span>
                        {icon}
                    </button>
                }
            })
    }
}

#[component]
fn MobileNavigation(header: HeaderHandle, follow_links: bool) -> impl IntoView {
    let (links, social) = header
        .with(|h| h.render(Viewport::MOBILE).drawer)
        .flatten()
        .map(|panel| (panel.links, panel.social))
        .unwrap_or_default();

    let panel_class = move || {
        let visible = header
            .render(Viewport::MOBILE)
            .and_then(|view| view.drawer)
            .is_some_and(|panel| panel.visible);
        if visible {
            format!("{DRAWER_BASE} translate-x-0 visible")
        } else {
            format!("{DRAWER_BASE} -translate-x-full invisible")
        }
    };

    view! {
        <div class=panel_class>
            <nav class="row-span-full text-white">
                <ul>
                    {links
                        .into_iter()
                        .map(|item| view! { <MobileNavigationItem item=item header=header follow_links=follow_links/> })
                        .collect::<Vec<_>>()}
                </ul>
            </nav>
            <div>
                <ul class="flex justify-center items-center gap-10 text-white">
                    {social
                        .into_iter()
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
        </div>
    }
}

#[component]
fn MobileNavigationItem(
    item: NavItemView,
    header: HeaderHandle,
    follow_links: bool,
) -> impl IntoView {
    let index = item.index;
    let on_click = move |ev: ev::MouseEvent| match header.with(|h| h.select_link(index)) {
        Some(Ok(_)) => stay_unless_following(&ev, follow_links),
        Some(Err(err)) => tracing::warn!(%err, "Navigation link rejected"),
        None => {}
    };

    let emphasis = if item.emphasis {
        "border-2 border-white rounded hover:border-primary-soft-red"
    } else {
        ""
    };

    view! {
        <li class="first:border-t last:border-b-0 border-b border-neutral-grayish-blue w-full flex items-center justify-center py-3">
            <a
                href=item.href
                class=format!(
                    "uppercase tracking-widest text-xl font-light transition-colors duration-300 ease-in-out \
                     flex w-full justify-center py-2 hover:text-primary-soft-red {emphasis}"
                )
                on:click=on_click
            >
                {item.label}
            </a>
        </li>
    }
}

#[component]
fn DesktopNavigation(links: Vec<NavItemView>, follow_links: bool) -> impl IntoView {
    let on_click = move |ev: ev::MouseEvent| stay_unless_following(&ev, follow_links);

    view! {
        <nav class="hidden md:block">
            <ul class="flex items-center gap-10">
                {links
                    .into_iter()
                    .map(|item| {
                        let class = if item.emphasis {
                            "uppercase font-light tracking-widest text-sm transition-colors duration-300 ease-in-out \
                             px-7 py-3 rounded border border-primary-soft-red shadow-md bg-primary-soft-red text-white \
                             hover:bg-white hover:text-primary-soft-red"
                        } else {
                            "uppercase font-light tracking-widest text-sm transition-colors duration-300 ease-in-out \
                             hover:text-primary-soft-red"
                        };
                        view! {
                            <li>
                                <a href=item.href class=class on:click=on_click>{item.label}</a>
                            </li>
                        }
                    })
                    .collect::<Vec<_>>()}
            </ul>
        </nav>
    }
}
