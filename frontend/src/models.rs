use serde::{Deserialize, Deserializer, Serialize};

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct SignupData {
    pub username: String,
    pub email: String,
    pub password: String,
    pub firstname: String,
    pub lastname: String,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct LoginData {
    pub username: String,
    pub password: String,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct UserProfile {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub firstname: String,
}

/// A stored transaction as listed by `/transactions`.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct TransactionRow {
    pub id: i64,
    pub merchant: String,
    pub amt: f64,
    pub category: String,
    pub city: String,
    #[serde(deserialize_with = "flag")]
    pub is_fraud: bool,
    pub trans_date_trans_time: String,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct TransactionPage {
    pub transactions: Vec<TransactionRow>,
    pub total: u64,
}

/// One scored record from `/predict-fraud`. The server sends every column of
/// its frame; only the ones the dashboard shows are kept.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct PredictedTransaction {
    pub merchant: String,
    pub category: String,
    pub amt: f64,
    pub city: String,
    #[serde(deserialize_with = "flag")]
    pub is_fraud: bool,
    pub predicted_fraud: i64,
    pub hour: i64,
    pub day_of_week: i64,
    pub month: i64,
    pub trans_date_trans_time: String,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct PredictionSet {
    pub fraudulent: Vec<PredictedTransaction>,
    pub all: Vec<PredictedTransaction>,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct ServerMessage {
    pub message: String,
}

// Booleans arrive as `true`/`false` from the ORM but as 0/1 from the scored frame.
fn flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(match value {
        serde_json::Value::Bool(b) => b,
        serde_json::Value::Number(n) => n.as_f64().map(|v| v != 0.0).unwrap_or(false),
        serde_json::Value::String(s) => matches!(s.as_str(), "1" | "true" | "True"),
        _ => false,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prediction_set_ignores_extra_columns() {
        let raw = r#"{
            "fraudulent": [{
                "id": 7, "merchant": "fraud_Kirlin", "category": "shopping_net",
                "amt": 912.5, "city": "Moab", "is_fraud": 1, "predicted_fraud": 1,
                "hour": 23, "day_of_week": 5, "month": 6, "distance": 0.42,
                "cc_num": "4613314721966", "trans_date_trans_time": "2019-06-22 23:14:09"
            }],
            "all": []
        }"#;
        let set: PredictionSet = serde_json::from_str(raw).unwrap();
        assert_eq!(set.fraudulent.len(), 1);
        let tx = &set.fraudulent[0];
        assert_eq!(tx.merchant, "fraud_Kirlin");
        assert!(tx.is_fraud);
        assert_eq!(tx.predicted_fraud, 1);
        assert_eq!((tx.hour, tx.day_of_week, tx.month), (23, 5, 6));
        assert!(set.all.is_empty());
    }

    #[test]
    fn missing_fields_take_defaults() {
        let tx: PredictedTransaction = serde_json::from_str(r#"{"merchant":"m"}"#).unwrap();
        assert_eq!(tx.merchant, "m");
        assert_eq!(tx.category, "");
        assert_eq!(tx.hour, 0);
        assert!(!tx.is_fraud);
    }

    #[test]
    fn transaction_page_decodes() {
        let raw = r#"{
            "transactions": [{
                "id": 1, "merchant": "fraud_Rippin", "amt": 4.97, "category": "misc_net",
                "city": "Moravian Falls", "is_fraud": false,
                "trans_date_trans_time": "2019-01-01 00:00:18"
            }],
            "total": 1296675
        }"#;
        let page: TransactionPage = serde_json::from_str(raw).unwrap();
        assert_eq!(page.total, 1_296_675);
        assert_eq!(page.transactions[0].city, "Moravian Falls");
        assert!(!page.transactions[0].is_fraud);
    }

    #[test]
    fn signup_serializes_expected_keys() {
        let data = SignupData {
            username: "ada".into(),
            email: "ada@example.com".into(),
            password: "secret1".into(),
            firstname: "Ada".into(),
            lastname: "Lovelace".into(),
        };
        let value = serde_json::to_value(&data).unwrap();
        for key in ["username", "email", "password", "firstname", "lastname"] {
            assert!(value.get(key).is_some(), "missing {key}");
        }
    }
}
