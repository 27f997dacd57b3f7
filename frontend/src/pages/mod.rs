mod dashboard;
mod fraud_charts;
mod login;
mod oauth;
mod signup;

pub use dashboard::DashboardPage;
pub use fraud_charts::FraudCharts;
pub use login::LoginPage;
pub use oauth::OAuthSuccessPage;
pub use signup::SignupPage;
