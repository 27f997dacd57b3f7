use yew::prelude::*;

use crate::components::Spinner;
use crate::route::{navigate, Route};

/// Landing spot after the identity provider hands the session cookie back.
#[function_component(OAuthSuccessPage)]
pub fn oauth_success_page() -> Html {
    use_effect_with_deps(
        move |_| {
            log::info!("oauth sign-in complete, forwarding to dashboard");
            navigate(Route::Dashboard);
            || ()
        },
        (),
    );

    html! {
        <div class="min-h-[60vh] flex flex-col items-center justify-center gap-4 text-slate-600">
            <Spinner size={32} />
            <p>{"Signing you in..."}</p>
        </div>
    }
}
