//! Main application component

use leptos::*;
use leptos_meta::*;
use leptos_router::*;

use crate::pages::*;

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Stylesheet id="leptos" href="/pkg/bookmark-marketing.css"/>
        <Title text="Bookmark | A Simple Bookmark Manager"/>
        <Meta
            name="description"
            content="Organize your favourite websites and open them from any new browser tab."
        />
        <Router>
            <div class="min-h-screen bg-white overflow-x-hidden font-[Rubik]">
                <Routes>
                    <Route path="/" view=HomePage/>
                    <Route path="/variants/:name" view=VariantPage/>
                </Routes>
            </div>
        </Router>
    }
}
