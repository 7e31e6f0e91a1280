//! Home page and variant previews

use bookmark_core::view::render_extensions;
use bookmark_core::{PageConfig, Section, SiteVariant};
use leptos::*;
use leptos_router::*;

use crate::components::*;

#[component]
pub fn HomePage() -> impl IntoView {
    view! { <LandingPage config={SiteVariant::default().config()}/> }
}

/// `/variants/:name`, one of the earlier page snapshots
#[component]
pub fn VariantPage() -> impl IntoView {
    let params = use_params_map();
    let name = move || params.with(|p| p.get("name").cloned().unwrap_or_default());

    move || match name().parse::<SiteVariant>() {
        Ok(variant) => view! { <LandingPage config={variant.config()}/> }.into_view(),
        Err(err) => view! { <UnknownVariant message={err.to_string()}/> }.into_view(),
    }
}

#[component]
pub fn LandingPage(config: PageConfig) -> impl IntoView {
    view! {
        <Header config=config/>
        <main>
            <Hero/>
            {config.has(Section::Features).then(|| view! { <FeaturesSection config=config/> })}
            {config.has(Section::Extensions).then(|| view! { <ExtensionsSection config=config/> })}
            {config.has(Section::Faq).then(|| view! { <FaqSection config=config/> })}
            {config.has(Section::Newsletter).then(|| view! { <NewsletterForm/> })}
        </main>
        {config.has(Section::Footer).then(|| view! { <Footer config=config/> })}
    }
}

#[component]
fn Hero() -> impl IntoView {
    view! {
        <section id={Section::Hero.anchor()} class="px-8 my-24">
            <div class="max-w-[1100px] mx-auto flex flex-col lg:flex-row-reverse gap-10 lg:min-h-[500px]">
                <figure class="relative flex-1">
                    <img
                        src="/images/illustration-hero.svg"
                        alt="A simple bookmark manager"
                        width="657"
                        height="469"
                        class="w-full"
                    />
                </figure>
                <div class="flex-1 text-center lg:text-left grid gap-6 lg:flex lg:flex-col lg:justify-center">
                    <h1 class="text-neutral-very-dark-blue text-3xl md:text-5xl font-bold">
                        "A Simple Bookmark Manager"
                    </h1>
                    <p class="text-neutral-grayish-blue font-light lg:text-lg lg:max-w-md">
                        "A clean and simple interface to organize your favourite websites. Open a new "
                        "browser tab and see your sites load instantly. Try it for free."
                    </p>
                    <div class="flex justify-center lg:justify-start gap-4 lg:gap-6">
                        <CtaButton label="Get it on Chrome" variant=CtaVariant::Blue/>
                        <CtaButton label="Get it on Firefox" variant=CtaVariant::White/>
                    </div>
                </div>
            </div>
        </section>
    }
}

#[component]
fn FeaturesSection(config: PageConfig) -> impl IntoView {
    view! {
        <section id={Section::Features.anchor()} class="px-8 my-24">
            <div class="max-w-[1100px] mx-auto grid gap-8 md:gap-16">
                <div class="text-center">
                    <h2 class="text-neutral-very-dark-blue text-2xl md:text-3xl font-bold">"Features"</h2>
                    <p class="text-neutral-grayish-blue mt-4 md:mt-6 max-w-lg md:mx-auto lg:text-lg">
                        "Our aim is to make it quick and easy for you to access your favourite websites. "
                        "Your bookmarks sync between your devices so you can access them on the go."
                    </p>
                </div>
                <FeatureTabs catalog=config.features/>
            </div>
        </section>
    }
}

#[component]
fn ExtensionsSection(config: PageConfig) -> impl IntoView {
    let cards = render_extensions(config.extensions);

    view! {
        <section id={Section::Extensions.anchor()} class="px-8 my-24 lg:my-36">
            <div class="grid gap-10 lg:gap-14 max-w-[1100px] mx-auto">
                <div class="text-center">
                    <h2 class="text-neutral-very-dark-blue font-bold text-2xl md:text-3xl">
                        "Download the extension"
                    </h2>
                    <p class="text-neutral-grayish-blue mt-4 max-w-lg mx-auto lg:text-lg">
                        "We've got more browsers in the pipeline. Please do let us know if you've "
                        "got a favourite you'd like us to prioritize."
                    </p>
                </div>
                <ul class="flex flex-col lg:flex-row lg:items-start gap-10">
                    {cards
                        .into_iter()
                        .map(|card| view! { <ExtensionCard card=card/> })
                        .collect::<Vec<_>>()}
                </ul>
            </div>
        </section>
    }
}

#[component]
fn FaqSection(config: PageConfig) -> impl IntoView {
    view! {
        <section id={Section::Faq.anchor()} class="px-8 my-24">
            <div class="max-w-[1100px] mx-auto grid gap-10">
                <div class="text-center">
                    <h2 class="text-neutral-very-dark-blue font-bold text-2xl md:text-3xl">
                        "Frequently Asked Questions"
                    </h2>
                    <p class="text-neutral-grayish-blue mt-4 max-w-lg mx-auto lg:text-lg">
                        "Here are some of our FAQs. If you have any other questions you'd like "
                        "answered please feel free to email us."
                    </p>
                </div>
                <FaqList catalog=config.faq/>
                <div class="flex justify-center">
                    <CtaButton label="More Info" variant=CtaVariant::Blue/>
                </div>
            </div>
        </section>
    }
}

#[component]
fn UnknownVariant(message: String) -> impl IntoView {
    view! {
        <main class="px-8 my-24 text-center grid gap-6">
            <h1 class="text-neutral-very-dark-blue text-3xl font-bold">"Page not found"</h1>
            <p class="text-neutral-grayish-blue">{message}</p>
            <p>
                "Available variants: "
                {SiteVariant::ALL
                    .iter()
                    .map(|variant| view! {
                        <a href=format!("/variants/{variant}") class="text-primary-soft-blue underline mx-1">
                            {variant.name()}
                        </a>
                    })
                    .collect::<Vec<_>>()}
            </p>
            <a href="/" class="text-primary-soft-red">"Back to the home page"</a>
        </main>
    }
}
