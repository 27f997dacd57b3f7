use gloo_timers::callback::Timeout;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::api;
use crate::components::{AuthCard, ErrorAlert, GoogleButton, Snackbar, Spinner, TextField};
use crate::route::{navigate, Route};
use crate::validation::{FieldErrors, SignupField, SignupForm};

const REDIRECT_DELAY_MS: u32 = 1500;

const FIELDS: [(SignupField, &str, &str, &str); 6] = [
    (SignupField::Username, "Username", "username", "text"),
    (SignupField::Email, "Email", "email", "email"),
    (SignupField::FirstName, "First Name", "firstname", "text"),
    (SignupField::LastName, "Last Name", "lastname", "text"),
    (SignupField::Password, "Password", "password", "password"),
    (SignupField::ConfirmPassword, "Confirm Password", "confirmPassword", "password"),
];

#[function_component(SignupPage)]
pub fn signup_page() -> Html {
    let form = use_state(SignupForm::default);
    let field_errors = use_state(FieldErrors::default);
    let error = use_state(|| None::<String>);
    let submitting = use_state(|| false);
    let success_open = use_state(|| false);

    let on_submit = {
        let form = form.clone();
        let field_errors = field_errors.clone();
        let error = error.clone();
        let submitting = submitting.clone();
        let success_open = success_open.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *submitting {
                return;
            }
            let data = match form.validate() {
                Ok(data) => data,
                Err(errors) => {
                    log::debug!("signup form has {} problem(s)", errors.len());
                    field_errors.set(errors);
                    return;
                }
            };

            field_errors.set(FieldErrors::default());
            error.set(None);
            submitting.set(true);

            let form = form.clone();
            let error = error.clone();
            let submitting = submitting.clone();
            let success_open = success_open.clone();
            spawn_local(async move {
                match api::signup(&data).await {
                    Ok(()) => {
                        log::info!("account created for {}", data.username);
                        success_open.set(true);
                        form.set(SignupForm::default());
                        Timeout::new(REDIRECT_DELAY_MS, || navigate(Route::Login)).forget();
                    }
                    Err(err) => {
                        log::warn!("signup failed: {err}");
                        error.set(Some(err.user_message("Signup failed")));
                    }
                }
                submitting.set(false);
            });
        })
    };

    let on_close_snackbar = {
        let success_open = success_open.clone();
        Callback::from(move |_| success_open.set(false))
    };

    html! {
        <AuthCard title="Create Account" subtitle="Start your journey with FRAUDetective">
            <ErrorAlert message={(*error).clone()} />

            <form class="space-y-6" onsubmit={on_submit}>
                { for FIELDS.iter().map(|(field, label, name, input_type)| {
                    let field = *field;
                    let on_input = {
                        let form = form.clone();
                        Callback::from(move |value: String| {
                            let mut next = (*form).clone();
                            next.set(field, value);
                            form.set(next);
                        })
                    };
                    html! {
                        <TextField
                            label={*label}
                            name={*name}
                            input_type={*input_type}
                            value={form.value(field).to_string()}
                            error={field_errors.get(field).map(AttrValue::Static)}
                            disabled={*submitting}
                            {on_input}
                        />
                    }
                }) }

                <button
                    type="submit"
                    class="w-full flex items-center justify-center gap-2 bg-blue-600 text-white py-3 rounded-lg font-semibold hover:bg-blue-700 transition-colors disabled:opacity-60"
                    disabled={*submitting}
                >
                    if *submitting {
                        <Spinner size={20} />
                        {"Creating..."}
                    } else {
                        {"Sign Up"}
                    }
                </button>
            </form>

            <GoogleButton disabled={*submitting} />

            <p class="text-center text-sm mt-8 text-slate-600">
                {"Already have an account? "}
                <a href={Route::Login.path()} class="text-blue-600 font-medium">{"Login"}</a>
            </p>

            <Snackbar
                message="Signup successful! Redirecting to login..."
                open={*success_open}
                on_close={on_close_snackbar}
            />
        </AuthCard>
    }
}
