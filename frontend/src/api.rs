use gloo_net::http::{Request, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use web_sys::{File, FormData, RequestCredentials, UrlSearchParams};

use crate::config::api_base_url;
use crate::error::{detail_message, ApiError, Result};
use crate::models::{
    LoginData, PredictionSet, ServerMessage, SignupData, TransactionPage, UserProfile,
};

/// Which slice of the stored transactions to list.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TransactionQuery {
    pub page: u32,
    pub page_size: u32,
    pub fraud_only: bool,
}

impl TransactionQuery {
    pub fn params(&self) -> Vec<(&'static str, String)> {
        let mut params = vec![
            ("limit", self.page_size.to_string()),
            ("offset", (u64::from(self.page) * u64::from(self.page_size)).to_string()),
        ];
        if self.fraud_only {
            params.push(("is_fraud", "true".to_string()));
        }
        params
    }
}

pub fn endpoint(path: &str) -> String {
    format!("{}{}", api_base_url(), path)
}

pub fn google_login_url() -> String {
    endpoint("/auth/google")
}

fn get(path: &str) -> RequestBuilder {
    Request::get(&endpoint(path)).credentials(RequestCredentials::Include)
}

fn post(path: &str) -> RequestBuilder {
    Request::post(&endpoint(path)).credentials(RequestCredentials::Include)
}

async fn check(resp: Response) -> Result<Response> {
    if resp.ok() {
        return Ok(resp);
    }
    let status = resp.status();
    let detail = match resp.json::<serde_json::Value>().await {
        Ok(body) => detail_message(&body),
        Err(_) => None,
    };
    log::warn!("{} answered {}: {:?}", resp.url(), status, detail);
    Err(ApiError::Status { status, detail })
}

async fn decode<T: DeserializeOwned>(resp: Response) -> Result<T> {
    resp.json::<T>()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}

fn browser_err(e: wasm_bindgen::JsValue) -> ApiError {
    ApiError::Browser(format!("{e:?}"))
}

pub async fn signup(data: &SignupData) -> Result<()> {
    log::debug!("signing up {}", data.username);
    let resp = post("/auth/signup").json(data)?.send().await?;
    check(resp).await?;
    Ok(())
}

/// Posts the credentials as an OAuth2 password form; the server answers with a session cookie.
pub async fn login(data: &LoginData) -> Result<()> {
    log::debug!("logging in {}", data.username);
    let form = UrlSearchParams::new().map_err(browser_err)?;
    form.append("username", &data.username);
    form.append("password", &data.password);
    let resp = post("/auth/login")
        .header("Content-Type", "application/x-www-form-urlencoded")
        .body(form)?
        .send()
        .await?;
    check(resp).await?;
    Ok(())
}

pub async fn current_user() -> Result<UserProfile> {
    let resp = get("/auth/me").send().await?;
    decode(check(resp).await?).await
}

pub async fn logout() -> Result<()> {
    let resp = post("/auth/logout")
        .json(&serde_json::json!({}))?
        .send()
        .await?;
    check(resp).await?;
    Ok(())
}

pub async fn transactions(query: TransactionQuery) -> Result<TransactionPage> {
    log::debug!("listing transactions {:?}", query);
    let params = query.params();
    let resp = get("/transactions")
        .query(params.iter().map(|(k, v)| (*k, v.as_str())))
        .send()
        .await?;
    decode(check(resp).await?).await
}

pub async fn upload_csv(file: &File) -> Result<ServerMessage> {
    log::info!("uploading {} ({} bytes)", file.name(), file.size());
    let form = FormData::new().map_err(browser_err)?;
    form.append_with_blob_and_filename("file", file, &file.name())
        .map_err(browser_err)?;
    // The browser fills in the multipart boundary itself.
    let resp = post("/upload-csv").body(form)?.send().await?;
    decode(check(resp).await?).await
}

pub async fn predict_fraud() -> Result<PredictionSet> {
    let resp = get("/predict-fraud").send().await?;
    let set: PredictionSet = decode(check(resp).await?).await?;
    log::info!(
        "prediction returned {} of {} records as fraudulent",
        set.fraudulent.len(),
        set.all.len()
    );
    Ok(set)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_page_has_zero_offset() {
        let query = TransactionQuery {
            page: 0,
            page_size: 10,
            fraud_only: false,
        };
        assert_eq!(
            query.params(),
            vec![("limit", "10".to_string()), ("offset", "0".to_string())]
        );
    }

    #[test]
    fn fraud_filter_and_offset() {
        let query = TransactionQuery {
            page: 3,
            page_size: 20,
            fraud_only: true,
        };
        assert_eq!(
            query.params(),
            vec![
                ("limit", "20".to_string()),
                ("offset", "60".to_string()),
                ("is_fraud", "true".to_string()),
            ]
        );
    }

    #[test]
    fn endpoints_join_base() {
        assert!(endpoint("/auth/me").ends_with("/auth/me"));
        assert!(!endpoint("/auth/me").contains("//auth"));
        assert!(google_login_url().ends_with("/auth/google"));
    }
}
