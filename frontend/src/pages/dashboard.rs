use gloo_timers::callback::Timeout;
use wasm_bindgen_futures::spawn_local;
use web_sys::{File, HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

use crate::api::{self, TransactionQuery};
use crate::components::{
    icon_log_out, icon_search, icon_upload, wordmark, ErrorAlert, Snackbar, Spinner,
};
use crate::config::{load_preferences, save_preferences, Preferences, PAGE_SIZES};
use crate::error;
use crate::lifecycle::{CancelFlag, TimerSlot};
use crate::models::{
    PredictedTransaction, PredictionSet, TransactionPage, TransactionRow, UserProfile,
};
use crate::pages::FraudCharts;
use crate::route::{navigate, Route};
use crate::table::{clamp_page, format_amount, page_count, page_window, yes_no};
use crate::validation::check_upload;

const SNACKBAR_MS: u32 = 3000;

#[derive(Clone, Copy, PartialEq)]
enum Tab {
    Transactions,
    Charts,
}

async fn upload_and_predict(file: &File) -> error::Result<PredictionSet> {
    let receipt = api::upload_csv(file).await?;
    log::info!("{}", receipt.message);
    api::predict_fraud().await
}

#[function_component(DashboardPage)]
pub fn dashboard_page() -> Html {
    let user = use_state(|| None::<UserProfile>);
    let prefs = use_state(load_preferences);
    let page = use_state(|| 0u32);
    let listing = use_state(TransactionPage::default);
    let listing_loading = use_state(|| false);
    let refresh = use_state(|| 0u32);
    let selected = use_state(|| None::<TransactionRow>);

    let file = use_state(|| None::<File>);
    let file_input = use_node_ref();
    let upload_error = use_state(|| None::<String>);
    let is_uploading = use_state(|| false);
    let success_open = use_state(|| false);
    let snackbar_timer = use_state(TimerSlot::<Timeout>::default);

    let tab = use_state(|| Tab::Transactions);
    let predictions = use_state(|| None::<PredictionSet>);
    let only_pred_fraud = use_state(|| true);

    {
        let user = user.clone();
        use_effect_with_deps(
            move |_| {
                spawn_local(async move {
                    match api::current_user().await {
                        Ok(profile) => user.set(Some(profile)),
                        Err(err) => {
                            if err.is_unauthorized() {
                                log::info!("not signed in, back to login");
                            } else {
                                log::warn!("session check failed: {err}");
                            }
                            navigate(Route::Login);
                        }
                    }
                });
                || ()
            },
            (),
        );
    }

    {
        let listing = listing.clone();
        let listing_loading = listing_loading.clone();
        let page = page.clone();
        let query = TransactionQuery {
            page: *page,
            page_size: prefs.page_size,
            fraud_only: prefs.fraud_only,
        };
        use_effect_with_deps(
            move |(query, _)| {
                let query = *query;
                let cancelled = CancelFlag::new();
                let task = cancelled.clone();
                listing_loading.set(true);
                spawn_local(async move {
                    let result = api::transactions(query).await;
                    if task.is_cancelled() {
                        log::debug!("dropping stale listing for page {}", query.page);
                        return;
                    }
                    match result {
                        Ok(result) => {
                            let fitted = clamp_page(query.page, result.total, query.page_size);
                            listing.set(result);
                            if fitted != query.page {
                                page.set(fitted);
                            }
                        }
                        Err(err) => log::error!("Error fetching transactions: {err}"),
                    }
                    listing_loading.set(false);
                });
                move || cancelled.cancel()
            },
            (query, *refresh),
        );
    }

    let on_logout = Callback::from(|_: MouseEvent| {
        spawn_local(async move {
            if let Err(err) = api::logout().await {
                log::warn!("logout failed: {err}");
            }
            navigate(Route::Login);
        });
    });

    let on_file_change = {
        let file = file.clone();
        let upload_error = upload_error.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let Some(chosen) = input.files().and_then(|list| list.get(0)) else {
                return;
            };
            file.set(Some(chosen));
            upload_error.set(None);
        })
    };

    let on_upload = {
        let file = file.clone();
        let file_input = file_input.clone();
        let upload_error = upload_error.clone();
        let is_uploading = is_uploading.clone();
        let success_open = success_open.clone();
        let predictions = predictions.clone();
        let refresh = refresh.clone();
        let page = page.clone();
        let snackbar_timer = snackbar_timer.clone();
        Callback::from(move |_: MouseEvent| {
            let chosen = (*file).clone();
            if let Err(msg) = check_upload(chosen.as_ref().map(|f| f.name()).as_deref()) {
                upload_error.set(Some(msg.to_string()));
                return;
            }
            let Some(chosen) = chosen else {
                return;
            };

            upload_error.set(None);
            is_uploading.set(true);

            let file = file.clone();
            let file_input = file_input.clone();
            let upload_error = upload_error.clone();
            let is_uploading = is_uploading.clone();
            let success_open = success_open.clone();
            let predictions = predictions.clone();
            let refresh = refresh.clone();
            let page = page.clone();
            let snackbar_timer = snackbar_timer.clone();
            spawn_local(async move {
                match upload_and_predict(&chosen).await {
                    Ok(set) => {
                        predictions.set(Some(set));
                        success_open.set(true);
                        file.set(None);
                        if let Some(input) = file_input.cast::<HtmlInputElement>() {
                            input.set_value("");
                        }
                        // The upload replaces every stored row.
                        page.set(0);
                        refresh.set(*refresh + 1);
                        let success_open = success_open.clone();
                        snackbar_timer
                            .arm(Timeout::new(SNACKBAR_MS, move || success_open.set(false)));
                    }
                    Err(err) => {
                        log::error!("upload or prediction failed: {err}");
                        upload_error.set(Some(err.user_message("Upload or Prediction failed.")));
                    }
                }
                is_uploading.set(false);
            });
        })
    };

    let on_page_size = {
        let prefs = prefs.clone();
        let page = page.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            let Ok(size) = select.value().parse::<u32>() else {
                return;
            };
            let next = Preferences {
                page_size: size,
                ..*prefs
            };
            save_preferences(&next);
            prefs.set(next);
            page.set(0);
        })
    };

    let on_fraud_only = {
        let prefs = prefs.clone();
        let page = page.clone();
        Callback::from(move |_: MouseEvent| {
            let next = Preferences {
                fraud_only: !prefs.fraud_only,
                ..*prefs
            };
            save_preferences(&next);
            prefs.set(next);
            page.set(0);
        })
    };

    let on_close_snackbar = {
        let success_open = success_open.clone();
        let snackbar_timer = snackbar_timer.clone();
        Callback::from(move |_| {
            snackbar_timer.clear();
            success_open.set(false);
        })
    };

    let Some(profile) = (*user).clone() else {
        return html! {
            <div class="flex justify-center items-center h-screen text-slate-500">
                <Spinner size={40} />
            </div>
        };
    };

    let pages = page_count(listing.total, prefs.page_size);
    let tab_button = |label: &'static str, value: Tab| {
        let tab = tab.clone();
        let active = *tab == value;
        let class = if active {
            "px-6 py-2 text-sm font-semibold uppercase tracking-wide border-b-2 border-blue-600 text-blue-600"
        } else {
            "px-6 py-2 text-sm font-semibold uppercase tracking-wide border-b-2 border-transparent text-slate-500 hover:text-slate-800"
        };
        html! {
            <button type="button" {class} onclick={Callback::from(move |_: MouseEvent| tab.set(value))}>{ label }</button>
        }
    };

    html! {
        <div class="max-w-7xl mx-auto mt-12 mb-16">
            <div class="flex justify-end mb-4">
                <button onclick={on_logout} class="flex items-center gap-2 bg-red-600 text-white px-4 py-1.5 rounded-lg text-sm font-semibold hover:bg-red-700">
                    { icon_log_out() }
                    {"Logout"}
                </button>
            </div>

            <div class="bg-white rounded-2xl shadow-lg p-10 text-center">
                { wordmark() }
                <h1 class="text-3xl font-bold mb-2">{ format!("Welcome, {}!", profile.firstname) }</h1>
                <p class="text-sm text-slate-400 mb-2">{ format!("Signed in as {}", profile.email) }</p>
                <p class="text-slate-600 mb-8">{"Upload a CSV file to analyze credit card transactions."}</p>

                <ErrorAlert message={(*upload_error).clone()} />

                <div class="flex flex-col items-center gap-4 mt-2">
                    <label class="flex items-center gap-2 cursor-pointer px-4 py-2 rounded-lg border border-blue-600 text-blue-600 hover:bg-blue-50">
                        { icon_upload() }
                        {"Choose CSV File"}
                        <input ref={file_input} type="file" accept=".csv" class="hidden" onchange={on_file_change} />
                    </label>

                    if let Some(chosen) = &*file {
                        <p class="text-sm text-slate-500">{ format!("Selected: {}", chosen.name()) }</p>
                    }

                    <button
                        onclick={on_upload}
                        disabled={*is_uploading}
                        class="flex items-center gap-2 bg-green-600 text-white px-5 py-2 rounded-lg font-semibold hover:bg-green-700 disabled:opacity-60"
                    >
                        if *is_uploading {
                            <Spinner size={20} />
                        } else {
                            {"Upload & Detect"}
                            { icon_search() }
                        }
                    </button>
                </div>
            </div>

            <div class="flex justify-center gap-2 mt-12 border-b border-slate-200">
                { tab_button("Transactions", Tab::Transactions) }
                { tab_button("Charts", Tab::Charts) }
            </div>

            if *tab == Tab::Transactions {
                <section class="mt-10">
                    <div class="flex flex-wrap items-center justify-between gap-4 mb-3">
                        <h2 class="text-xl font-semibold">{"Stored Transactions"}</h2>
                        <div class="flex items-center gap-4 text-sm">
                            <label class="flex items-center gap-2">
                                <input type="checkbox" checked={prefs.fraud_only} onclick={on_fraud_only} />
                                {"Fraud only"}
                            </label>
                            <label class="flex items-center gap-2">
                                {"Rows"}
                                <select onchange={on_page_size} class="border rounded px-2 py-1">
                                    { for PAGE_SIZES.iter().map(|size| html! {
                                        <option value={size.to_string()} selected={*size == prefs.page_size}>{ size.to_string() }</option>
                                    }) }
                                </select>
                            </label>
                        </div>
                    </div>
                    <TransactionTable
                        rows={listing.transactions.clone()}
                        loading={*listing_loading}
                        on_select={{
                            let selected = selected.clone();
                            Callback::from(move |row: TransactionRow| selected.set(Some(row)))
                        }}
                    />
                    <Pager
                        page={*page}
                        pages={pages}
                        total={listing.total}
                        on_change={{
                            let page = page.clone();
                            Callback::from(move |next: u32| page.set(next))
                        }}
                    />
                </section>

                if let Some(set) = &*predictions {
                    <section class="mt-12">
                        <h2 class="text-xl font-semibold mb-4">{"Detected Fraudulent Transactions"}</h2>
                        <button
                            class="mb-4 px-4 py-2 rounded-lg border border-blue-600 text-blue-600 text-sm hover:bg-blue-50"
                            onclick={{
                                let only_pred_fraud = only_pred_fraud.clone();
                                Callback::from(move |_: MouseEvent| only_pred_fraud.set(!*only_pred_fraud))
                            }}
                        >
                            { if *only_pred_fraud { "Show All Predictions" } else { "Show Only Predicted Frauds" } }
                        </button>
                        <PredictionTable
                            rows={if *only_pred_fraud { set.fraudulent.clone() } else { set.all.clone() }}
                        />
                    </section>
                }
            } else if let Some(set) = &*predictions {
                <FraudCharts data={set.fraudulent.clone()} />
            } else {
                <p class="mt-10 text-center text-slate-500">{"Upload a CSV file to see fraud charts."}</p>
            }

            if let Some(tx) = &*selected {
                <TransactionDialog
                    row={tx.clone()}
                    on_close={{
                        let selected = selected.clone();
                        Callback::from(move |_| selected.set(None))
                    }}
                />
            }

            <Snackbar message="CSV uploaded successfully" open={*success_open} on_close={on_close_snackbar} />
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct TransactionTableProps {
    rows: Vec<TransactionRow>,
    loading: bool,
    on_select: Callback<TransactionRow>,
}

#[function_component(TransactionTable)]
fn transaction_table(props: &TransactionTableProps) -> Html {
    html! {
        <div class="bg-white rounded-xl shadow-sm border border-slate-200 overflow-x-auto">
            <table class="w-full text-left border-collapse">
                <thead class="bg-slate-50 text-slate-500 text-xs uppercase tracking-widest">
                    <tr>
                        <th class="px-6 py-3">{"ID"}</th>
                        <th class="px-6 py-3">{"Merchant"}</th>
                        <th class="px-6 py-3 text-right">{"Amount"}</th>
                        <th class="px-6 py-3">{"Category"}</th>
                        <th class="px-6 py-3">{"City"}</th>
                        <th class="px-6 py-3">{"Fraud"}</th>
                    </tr>
                </thead>
                <tbody class="divide-y divide-slate-100">
                    if props.loading {
                        <tr><td colspan="6" class="px-6 py-6 text-center text-slate-500">{"Loading..."}</td></tr>
                    } else if props.rows.is_empty() {
                        <tr><td colspan="6" class="px-6 py-6 text-center text-slate-500">{"No transactions yet."}</td></tr>
                    } else {
                        { for props.rows.iter().map(|row| {
                            let on_select = props.on_select.clone();
                            let picked = row.clone();
                            html! {
                                <tr key={row.id.to_string()} class="text-sm hover:bg-slate-50 cursor-pointer" onclick={Callback::from(move |_: MouseEvent| on_select.emit(picked.clone()))}>
                                    <td class="px-6 py-3 text-slate-500">{ row.id.to_string() }</td>
                                    <td class="px-6 py-3">{ row.merchant.clone() }</td>
                                    <td class="px-6 py-3 text-right">{ format_amount(row.amt) }</td>
                                    <td class="px-6 py-3">{ row.category.clone() }</td>
                                    <td class="px-6 py-3">{ row.city.clone() }</td>
                                    <td class="px-6 py-3">{ yes_no(row.is_fraud) }</td>
                                </tr>
                            }
                        }) }
                    }
                </tbody>
            </table>
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct PagerProps {
    page: u32,
    pages: u64,
    total: u64,
    on_change: Callback<u32>,
}

#[function_component(Pager)]
fn pager(props: &PagerProps) -> Html {
    let page = props.page;
    let has_prev = page > 0;
    let has_next = u64::from(page) + 1 < props.pages;
    let prev = props.on_change.reform(move |_: MouseEvent| page.saturating_sub(1));
    let next = props.on_change.reform(move |_: MouseEvent| page + 1);
    html! {
        <div class="flex items-center justify-end gap-4 mt-3 text-sm text-slate-600">
            <span>{ format!("{} total", props.total) }</span>
            <button class="px-3 py-1 border rounded disabled:opacity-40" disabled={!has_prev} onclick={prev}>{"Prev"}</button>
            <span>{ format!("Page {} of {}", u64::from(page) + 1, props.pages) }</span>
            <button class="px-3 py-1 border rounded disabled:opacity-40" disabled={!has_next} onclick={next}>{"Next"}</button>
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct PredictionTableProps {
    rows: Vec<PredictedTransaction>,
}

/// Client-side paged view of a prediction set. Row IDs are positions in the set.
#[function_component(PredictionTable)]
fn prediction_table(props: &PredictionTableProps) -> Html {
    let page = use_state(|| 0u32);
    let page_size = use_state(|| PAGE_SIZES[0]);

    {
        let page = page.clone();
        use_effect_with_deps(
            move |_| {
                page.set(0);
                || ()
            },
            props.rows.len(),
        );
    }

    let pages = page_count(props.rows.len() as u64, *page_size);
    let window = page_window(props.rows.len(), *page, *page_size);
    let on_page_size = {
        let page = page.clone();
        let page_size = page_size.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            if let Ok(size) = select.value().parse::<u32>() {
                page_size.set(size);
                page.set(0);
            }
        })
    };

    html! {
        <>
            <div class="bg-white rounded-xl shadow-sm border border-slate-200 overflow-x-auto">
                <table class="w-full text-left border-collapse">
                    <thead class="bg-slate-50 text-slate-500 text-xs uppercase tracking-widest">
                        <tr>
                            <th class="px-6 py-3">{"ID"}</th>
                            <th class="px-6 py-3">{"Merchant"}</th>
                            <th class="px-6 py-3 text-right">{"Amount"}</th>
                            <th class="px-6 py-3">{"Category"}</th>
                            <th class="px-6 py-3">{"City"}</th>
                            <th class="px-6 py-3">{"Time"}</th>
                            <th class="px-6 py-3">{"Fraud"}</th>
                            <th class="px-6 py-3">{"Predicted"}</th>
                        </tr>
                    </thead>
                    <tbody class="divide-y divide-slate-100">
                        if props.rows.is_empty() {
                            <tr><td colspan="8" class="px-6 py-6 text-center text-slate-500">{"No rows"}</td></tr>
                        }
                        { for window.map(|i| {
                            let row = &props.rows[i];
                            html! {
                                <tr key={i.to_string()} class="text-sm">
                                    <td class="px-6 py-3 text-slate-500">{ (i + 1).to_string() }</td>
                                    <td class="px-6 py-3">{ row.merchant.clone() }</td>
                                    <td class="px-6 py-3 text-right">{ format_amount(row.amt) }</td>
                                    <td class="px-6 py-3">{ row.category.clone() }</td>
                                    <td class="px-6 py-3">{ row.city.clone() }</td>
                                    <td class="px-6 py-3 text-slate-500">{ row.trans_date_trans_time.clone() }</td>
                                    <td class="px-6 py-3">{ yes_no(row.is_fraud) }</td>
                                    <td class="px-6 py-3">{ yes_no(row.predicted_fraud != 0) }</td>
                                </tr>
                            }
                        }) }
                    </tbody>
                </table>
            </div>
            <div class="flex items-center justify-end gap-4 mt-3 text-sm text-slate-600">
                <label class="flex items-center gap-2">
                    {"Rows"}
                    <select onchange={on_page_size} class="border rounded px-2 py-1">
                        { for PAGE_SIZES.iter().map(|size| html! {
                            <option value={size.to_string()} selected={*size == *page_size}>{ size.to_string() }</option>
                        }) }
                    </select>
                </label>
                <Pager
                    page={*page}
                    {pages}
                    total={props.rows.len() as u64}
                    on_change={{
                        let page = page.clone();
                        Callback::from(move |next: u32| page.set(next))
                    }}
                />
            </div>
        </>
    }
}

#[derive(Properties, PartialEq)]
struct TransactionDialogProps {
    row: TransactionRow,
    on_close: Callback<()>,
}

#[function_component(TransactionDialog)]
fn transaction_dialog(props: &TransactionDialogProps) -> Html {
    let row = &props.row;
    let on_close = props.on_close.reform(|_: MouseEvent| ());
    let details = [
        ("Merchant", row.merchant.clone()),
        ("Amount", format_amount(row.amt)),
        ("Category", row.category.clone()),
        ("City", row.city.clone()),
        ("Time", row.trans_date_trans_time.clone()),
        ("Fraud", yes_no(row.is_fraud).to_string()),
    ];
    html! {
        <div class="fixed inset-0 z-40 flex items-center justify-center bg-black/40">
            <div class="w-full max-w-lg bg-white rounded-2xl shadow-xl p-6" role="dialog">
                <h3 class="text-lg font-semibold mb-4">{ format!("Transaction #{}", row.id) }</h3>
                <dl class="grid grid-cols-3 gap-y-2 text-sm">
                    { for details.into_iter().map(|(label, value)| html! {
                        <>
                            <dt class="font-semibold text-slate-700">{ label }</dt>
                            <dd class="col-span-2 text-slate-600">{ value }</dd>
                        </>
                    }) }
                </dl>
                <div class="flex justify-end mt-6">
                    <button class="px-4 py-2 text-blue-600 font-medium" onclick={on_close}>{"Close"}</button>
                </div>
            </div>
        </div>
    }
}
