use crate::pages::{VehicleContactPage, VehicleDetailPage, VehicleListPage};
use client::CatalogClient;
use leptos::prelude::*;
use leptos_meta::{Stylesheet, Title, provide_meta_context};
use leptos_router::components::{Route, Router, Routes};
use leptos_router::{ParamSegment, StaticSegment};

const API_BASE: &str = match option_env!("PANEL_API_BASE") {
    Some(base) => base,
    None => "http://localhost:8081/external",
};

pub fn api() -> CatalogClient {
    CatalogClient::new(API_BASE)
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    view! {
        <Stylesheet id="leptos" href="/pkg/panel.css" />
        <Title text="Vehicle catalog" />

        <Router>
            <main>
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=StaticSegment("") view=VehicleListPage />
                    <Route
                        path=(StaticSegment("vehicle"), ParamSegment("id"))
                        view=VehicleDetailPage
                    />
                    <Route
                        path=(StaticSegment("vehicle"), ParamSegment("id"), StaticSegment("contact"))
                        view=VehicleContactPage
                    />
                </Routes>
            </main>
        </Router>
    }
}
