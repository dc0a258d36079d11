use gloo_net::http::{Request, Response};
use log::debug;
use serde::{de::DeserializeOwned, Serialize};

use crate::config::AppConfig;
use crate::error::ApiError;
use crate::models::{
    Category, Contribution, Goal, MainSummary, NewContribution, NewGoal, YearMonth,
};

/// Thin typed wrapper over the backend's REST endpoints.
#[derive(Clone, Debug, PartialEq)]
pub struct ApiClient {
    base_url: String,
}

impl ApiClient {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            base_url: config.api_base_url.clone(),
        }
    }

    pub fn categories_url(&self) -> String {
        format!("{}/categorias", self.base_url)
    }

    pub fn goals_url(&self) -> String {
        format!("{}/metas", self.base_url)
    }

    pub fn contributions_url(&self) -> String {
        format!("{}/economias", self.base_url)
    }

    pub fn summary_url(&self, at: YearMonth) -> String {
        format!(
            "{}/dashboard/resumo-principal?mes={}&ano={}",
            self.base_url, at.month, at.year
        )
    }

    pub async fn categories(&self) -> Result<Vec<Category>, ApiError> {
        get_json(self.categories_url()).await
    }

    pub async fn goals(&self) -> Result<Vec<Goal>, ApiError> {
        get_json(self.goals_url()).await
    }

    pub async fn contributions(&self) -> Result<Vec<Contribution>, ApiError> {
        get_json(self.contributions_url()).await
    }

    pub async fn main_summary(&self, at: YearMonth) -> Result<MainSummary, ApiError> {
        get_json(self.summary_url(at)).await
    }

    pub async fn create_goal(&self, goal: &NewGoal) -> Result<Goal, ApiError> {
        let url = self.goals_url();
        let resp = post_json(&url, goal).await?;
        resp.json::<Goal>()
            .await
            .map_err(|source| ApiError::Decode { url, source })
    }

    /// The created record is not needed; the dashboard is reloaded instead.
    pub async fn create_contribution(
        &self,
        contribution: &NewContribution,
    ) -> Result<(), ApiError> {
        post_json(&self.contributions_url(), contribution).await?;
        Ok(())
    }
}

async fn get_json<T: DeserializeOwned>(url: String) -> Result<T, ApiError> {
    debug!("GET {}", url);
    let resp = Request::get(&url)
        .send()
        .await
        .map_err(|source| ApiError::Network {
            url: url.clone(),
            source,
        })?;
    let resp = ensure_success(&url, resp)?;
    resp.json::<T>()
        .await
        .map_err(|source| ApiError::Decode { url, source })
}

async fn post_json<B: Serialize>(url: &str, body: &B) -> Result<Response, ApiError> {
    debug!("POST {}", url);
    let request = Request::post(url)
        .json(body)
        .map_err(|source| ApiError::Encode {
            url: url.to_string(),
            source,
        })?;
    let resp = request.send().await.map_err(|source| ApiError::Network {
        url: url.to_string(),
        source,
    })?;
    ensure_success(url, resp)
}

fn ensure_success(url: &str, resp: Response) -> Result<Response, ApiError> {
    if resp.ok() {
        Ok(resp)
    } else {
        Err(ApiError::Status {
            url: url.to_string(),
            status: resp.status(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> ApiClient {
        ApiClient::new(&AppConfig::with_base_url("http://localhost:8080/"))
    }

    #[test]
    fn resource_urls() {
        let client = client();
        assert_eq!(client.categories_url(), "http://localhost:8080/categorias");
        assert_eq!(client.goals_url(), "http://localhost:8080/metas");
        assert_eq!(client.contributions_url(), "http://localhost:8080/economias");
    }

    #[test]
    fn summary_url_uses_one_based_month() {
        let url = client().summary_url(YearMonth {
            year: 2025,
            month: 1,
        });
        assert_eq!(
            url,
            "http://localhost:8080/dashboard/resumo-principal?mes=1&ano=2025"
        );
    }
}
