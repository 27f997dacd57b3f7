use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::api;
use crate::components::{AuthCard, ErrorAlert, GoogleButton, Spinner, TextField};
use crate::route::{navigate, Route};
use crate::validation::check_login;

#[function_component(LoginPage)]
pub fn login_page() -> Html {
    let username = use_state(String::new);
    let password = use_state(String::new);
    let error = use_state(|| None::<String>);
    let loading = use_state(|| false);

    let on_submit = {
        let username = username.clone();
        let password = password.clone();
        let error = error.clone();
        let loading = loading.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *loading {
                return;
            }
            let data = match check_login(&username, &password) {
                Ok(data) => data,
                Err(msg) => {
                    error.set(Some(msg.to_string()));
                    return;
                }
            };

            error.set(None);
            loading.set(true);
            let error = error.clone();
            let loading = loading.clone();
            spawn_local(async move {
                match api::login(&data).await {
                    Ok(()) => navigate(Route::Dashboard),
                    Err(err) => {
                        log::warn!("login failed: {err}");
                        error.set(Some(err.user_message("Login failed")));
                        loading.set(false);
                    }
                }
            });
        })
    };

    let on_username = {
        let username = username.clone();
        Callback::from(move |value: String| username.set(value))
    };
    let on_password = {
        let password = password.clone();
        Callback::from(move |value: String| password.set(value))
    };

    html! {
        <AuthCard title="Welcome Back" subtitle="Login to your account">
            <ErrorAlert message={(*error).clone()} />

            <form class="space-y-6" onsubmit={on_submit}>
                <TextField
                    label="Username or Email"
                    name="username"
                    value={(*username).clone()}
                    disabled={*loading}
                    on_input={on_username}
                />
                <TextField
                    label="Password"
                    name="password"
                    input_type="password"
                    value={(*password).clone()}
                    disabled={*loading}
                    on_input={on_password}
                />
                <button
                    type="submit"
                    class="w-full bg-blue-600 text-white py-3 rounded-lg font-semibold hover:bg-blue-700 transition-colors disabled:opacity-60"
                    disabled={*loading}
                >
                    if *loading {
                        <Spinner size={20} />
                    } else {
                        {"Login"}
                    }
                </button>
            </form>

            <GoogleButton disabled={*loading} />

            <p class="text-center text-sm mt-8 text-slate-600">
                {"Don’t have an account? "}
                <a href={Route::Signup.path()} class="text-blue-600 font-medium">{"Sign up"}</a>
            </p>
        </AuthCard>
    }
}
