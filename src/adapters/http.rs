use crate::domain::ports::{HolidaySource, VacationSource};
use crate::utils::error::Result;
use crate::utils::validation::validate_url;
use async_trait::async_trait;
use chrono::NaiveDate;
use reqwest::Client;
use std::time::Duration;

const FEIERTAGE_BASE_URL: &str = "https://feiertage-api.de";
const SCHULFERIEN_BASE_URL: &str = "https://schulferien-api.de";

// Upstream calls must not hang an evaluation.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

fn http_client() -> Result<Client> {
    let client = Client::builder().timeout(REQUEST_TIMEOUT).build()?;
    Ok(client)
}

/// Client for the yearly public-holiday list (feiertage-api.de).
#[derive(Debug, Clone)]
pub struct FeiertageApi {
    client: Client,
    base_url: String,
}

impl FeiertageApi {
    pub fn new() -> Result<Self> {
        Self::with_base_url(FEIERTAGE_BASE_URL)
    }

    /// Test seam: point the client at a mock server.
    pub fn with_base_url(base_url: impl Into<String>) -> Result<Self> {
        let base_url = base_url.into();
        validate_url("base_url", &base_url)?;
        Ok(Self {
            client: http_client()?,
            base_url,
        })
    }
}

#[async_trait]
impl HolidaySource for FeiertageApi {
    async fn fetch_year(&self, year: i32, state: &str) -> Result<serde_json::Value> {
        let url = format!("{}/api/?jahr={}&nur_land={}", self.base_url, year, state);
        tracing::debug!("GET {}", url);

        let response = self.client.get(&url).send().await?;
        tracing::debug!("feiertage-api response status: {}", response.status());

        let body = response.error_for_status()?.json().await?;
        Ok(body)
    }
}

/// Client for the date-scoped school-vacation endpoint (schulferien-api.de).
#[derive(Debug, Clone)]
pub struct SchulferienApi {
    client: Client,
    base_url: String,
}

impl SchulferienApi {
    pub fn new() -> Result<Self> {
        Self::with_base_url(SCHULFERIEN_BASE_URL)
    }

    pub fn with_base_url(base_url: impl Into<String>) -> Result<Self> {
        let base_url = base_url.into();
        validate_url("base_url", &base_url)?;
        Ok(Self {
            client: http_client()?,
            base_url,
        })
    }
}

#[async_trait]
impl VacationSource for SchulferienApi {
    async fn fetch_date(&self, date: NaiveDate, state: &str) -> Result<serde_json::Value> {
        let url = format!(
            "{}/api/v2/date/{}?states={}",
            self.base_url,
            date.format("%Y-%m-%d"),
            state
        );
        tracing::debug!("GET {}", url);

        let response = self.client.get(&url).send().await?;
        tracing::debug!("schulferien-api response status: {}", response.status());

        let body = response.error_for_status()?.json().await?;
        Ok(body)
    }
}
