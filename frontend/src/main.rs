mod api;
mod charts;
mod components;
mod config;
mod error;
mod lifecycle;
mod logging;
mod models;
mod pages;
mod plot;
mod route;
mod table;
mod validation;

use yew::prelude::*;

use crate::pages::{DashboardPage, LoginPage, OAuthSuccessPage, SignupPage};
use crate::route::Route;

#[function_component(NotFound)]
fn not_found() -> Html {
    html! {
        <div class="text-center mt-24 text-slate-600">
            <h1 class="text-3xl font-bold mb-4">{"Page not found"}</h1>
            <a href={Route::Login.path()} class="text-blue-600 font-medium">{"Back to login"}</a>
        </div>
    }
}

#[function_component(App)]
fn app() -> Html {
    let content = match Route::current() {
        Route::Login => html! { <LoginPage /> },
        Route::Signup => html! { <SignupPage /> },
        Route::Dashboard => html! { <DashboardPage /> },
        Route::OAuthSuccess => html! { <OAuthSuccessPage /> },
        Route::NotFound => html! { <NotFound /> },
    };

    html! {
        <div class="min-h-screen bg-[#FCF3E0] flex flex-col items-center pt-12">
            <div class="w-full max-w-6xl px-4">
                { content }
            </div>
        </div>
    }
}

fn main() {
    logging::init(config::log_level());
    log::info!("FRAUDetective client talking to {}", config::api_base_url());
    yew::Renderer::<App>::new().render();
}
