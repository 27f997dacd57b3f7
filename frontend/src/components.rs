use yew::prelude::*;

fn icon_base(path: &'static str) -> Html {
    html! {
        <svg width="20" height="20" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round">
            <path d={path}></path>
        </svg>
    }
}

pub fn icon_upload() -> Html {
    icon_base("M21 15v4a2 2 0 01-2 2H5a2 2 0 01-2-2v-4M17 8l-5-5-5 5M12 3v12")
}
pub fn icon_log_out() -> Html {
    icon_base("M9 21H5a2 2 0 01-2-2V5a2 2 0 012-2h4M16 17l5-5-5-5M21 12H9")
}
pub fn icon_search() -> Html {
    icon_base("M11 19a8 8 0 100-16 8 8 0 000 16zM21 21l-4.35-4.35")
}
pub fn icon_close() -> Html {
    icon_base("M18 6L6 18M6 6l12 12")
}

pub fn icon_google() -> Html {
    html! {
        <svg width="20" height="20" viewBox="0 0 48 48">
            <path fill="#EA4335" d="M24 9.5c3.5 0 6.6 1.2 9 3.6l6.7-6.7C35.6 2.4 30.2 0 24 0 14.6 0 6.6 5.4 2.7 13.2l7.8 6C12.4 13.6 17.7 9.5 24 9.5z"></path>
            <path fill="#4285F4" d="M46.5 24.5c0-1.6-.1-3.1-.4-4.5H24v9h12.7c-.6 3-2.3 5.5-4.8 7.2l7.6 5.9c4.4-4.1 7-10.1 7-17.6z"></path>
            <path fill="#FBBC05" d="M10.5 28.8c-.5-1.5-.8-3.1-.8-4.8s.3-3.3.8-4.8l-7.8-6C1 16.5 0 20.1 0 24s1 7.5 2.7 10.8l7.8-6z"></path>
            <path fill="#34A853" d="M24 48c6.5 0 11.9-2.1 15.9-5.8l-7.6-5.9c-2.1 1.4-4.9 2.3-8.3 2.3-6.3 0-11.6-4.1-13.5-9.7l-7.8 6C6.6 42.6 14.6 48 24 48z"></path>
        </svg>
    }
}

#[derive(Properties, PartialEq)]
pub struct SpinnerProps {
    #[prop_or(24)]
    pub size: u32,
}

#[function_component(Spinner)]
pub fn spinner(props: &SpinnerProps) -> Html {
    let style = format!("width: {0}px; height: {0}px", props.size);
    html! {
        <span class="inline-block animate-spin rounded-full border-2 border-current border-t-transparent align-middle" style={style} role="status"></span>
    }
}

#[derive(Properties, PartialEq)]
pub struct ErrorAlertProps {
    pub message: Option<String>,
}

#[function_component(ErrorAlert)]
pub fn error_alert(props: &ErrorAlertProps) -> Html {
    match &props.message {
        Some(msg) => html! {
            <div class="mb-4 rounded-lg border border-red-200 bg-red-50 px-4 py-3 text-sm text-red-700" role="alert">{ msg.clone() }</div>
        },
        None => html! {},
    }
}

#[derive(Properties, PartialEq)]
pub struct SnackbarProps {
    pub message: AttrValue,
    pub open: bool,
    pub on_close: Callback<()>,
}

#[function_component(Snackbar)]
pub fn snackbar(props: &SnackbarProps) -> Html {
    if !props.open {
        return html! {};
    }
    let on_close = props.on_close.reform(|_: MouseEvent| ());
    html! {
        <div class="fixed bottom-6 left-1/2 -translate-x-1/2 z-50 flex items-center gap-4 rounded-lg bg-slate-800 px-5 py-3 text-sm text-white shadow-lg">
            <span>{ props.message.clone() }</span>
            <button type="button" class="text-slate-300 hover:text-white" aria-label="Close" onclick={on_close}>{ icon_close() }</button>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct AuthCardProps {
    pub title: AttrValue,
    pub subtitle: AttrValue,
    pub children: Children,
}

pub fn wordmark() -> Html {
    html! {
        <p class="text-4xl font-extrabold tracking-tight text-slate-900 mb-4">
            <span class="text-red-600">{"FRAUD"}</span>{"etective"}
        </p>
    }
}

/// Wordmark plus the white card the login and signup forms sit in.
#[function_component(AuthCard)]
pub fn auth_card(props: &AuthCardProps) -> Html {
    html! {
        <div class="w-full max-w-xl mx-auto my-8">
            <div class="flex justify-center mb-6">{ wordmark() }</div>
            <div class="bg-white rounded-2xl shadow-lg p-10">
                <h1 class="text-3xl font-semibold text-center text-slate-900">{ props.title.clone() }</h1>
                <p class="text-center text-slate-500 mt-2 mb-8">{ props.subtitle.clone() }</p>
                { for props.children.iter() }
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct GoogleButtonProps {
    pub disabled: bool,
}

#[function_component(GoogleButton)]
pub fn google_button(props: &GoogleButtonProps) -> Html {
    let onclick = Callback::from(|_: MouseEvent| {
        crate::route::go_to(&crate::api::google_login_url());
    });
    html! {
        <>
            <div class="flex items-center gap-3 my-8 text-sm text-slate-400">
                <div class="flex-1 border-t border-slate-200"></div>
                <span>{"or"}</span>
                <div class="flex-1 border-t border-slate-200"></div>
            </div>
            <button
                type="button"
                class="w-full flex items-center justify-center gap-3 py-2 rounded-lg border border-[#FEC84B] text-[#FEC84B] font-medium hover:bg-[#fff9eb] hover:border-[#fdbb2d] transition-colors"
                disabled={props.disabled}
                {onclick}
            >
                { icon_google() }
                <span>{"Continue with Google"}</span>
            </button>
        </>
    }
}

pub const INPUT_CLASS: &str = "w-full px-4 py-2 bg-white border border-slate-300 rounded-lg text-slate-900 focus:outline-none focus:ring-2 focus:ring-blue-500 disabled:bg-slate-100";

#[derive(Properties, PartialEq)]
pub struct TextFieldProps {
    pub label: AttrValue,
    pub name: AttrValue,
    #[prop_or(AttrValue::Static("text"))]
    pub input_type: AttrValue,
    pub value: AttrValue,
    #[prop_or_default]
    pub error: Option<AttrValue>,
    #[prop_or_default]
    pub disabled: bool,
    pub on_input: Callback<String>,
}

#[function_component(TextField)]
pub fn text_field(props: &TextFieldProps) -> Html {
    let oninput = props.on_input.reform(|e: InputEvent| {
        let input: web_sys::HtmlInputElement = e.target_unchecked_into();
        input.value()
    });
    let class = if props.error.is_some() {
        format!("{INPUT_CLASS} border-red-500")
    } else {
        INPUT_CLASS.to_string()
    };
    html! {
        <div class="space-y-1">
            <label class="text-sm font-medium text-slate-700">{ props.label.clone() }</label>
            <input
                name={props.name.clone()}
                type={props.input_type.clone()}
                {class}
                value={props.value.clone()}
                disabled={props.disabled}
                {oninput}
            />
            if let Some(err) = &props.error {
                <p class="text-xs text-red-600">{ err.clone() }</p>
            }
        </div>
    }
}
