use reqwest::{Client, Method};
use serde::de::DeserializeOwned;

use crate::client::types::{ComplexSearch, StarResponse};
use crate::config::{normalize_base_url, ClientConfig};
use crate::error::{RecippError, Result};
use crate::recipe::{RecipeCollection, RecipeRecord};

pub struct RecippClient {
    base_url: String,
    client: Client,
}

impl RecippClient {
    pub fn new(base_url: String) -> Self {
        Self {
            base_url: ClientConfig::new(base_url).base_url,
            client: Client::new(),
        }
    }

    pub fn with_config(config: &ClientConfig) -> Result<Self> {
        let mut builder = Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().map_err(|e| {
            tracing::error!("Failed to build HTTP client: {}", e);
            RecippError::Request(e.to_string())
        })?;

        Ok(Self {
            base_url: normalize_base_url(config.base_url.clone()),
            client,
        })
    }

    pub fn from_env() -> Result<Self> {
        Self::with_config(&ClientConfig::from_env())
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn build_url(&self, endpoint: &str, params: &[(&str, String)]) -> String {
        let mut url = format!("{}{}", self.base_url, endpoint);

        if !params.is_empty() {
            let query: Vec<String> = params
                .iter()
                .map(|(name, value)| format!("{}={}", name, urlencoding::encode(value)))
                .collect();
            url.push('?');
            url.push_str(&query.join("&"));
        }

        url
    }

    /// Sends one request and decodes the JSON body. Failures are logged with
    /// their classification and returned as-is.
    async fn request<T: DeserializeOwned>(
        &self,
        method: Method,
        endpoint: &str,
        params: &[(&str, String)],
    ) -> Result<T> {
        let url = self.build_url(endpoint, params);
        tracing::debug!("Making {} request to: {}", method, url);

        let result = self.send(method, &url, endpoint).await;
        if let Err(e) = &result {
            log_error(e);
        }
        result
    }

    async fn send<T: DeserializeOwned>(&self, method: Method, url: &str, endpoint: &str) -> Result<T> {
        let response = self.client.request(method, url).send().await?;

        let status = response.status();
        tracing::debug!("Response status for {}: {}", endpoint, status);

        let body = response.text().await?;
        if !status.is_success() {
            return Err(RecippError::Server { status, body });
        }

        serde_json::from_str(&body).map_err(|source| RecippError::Decode {
            endpoint: endpoint.to_string(),
            source,
        })
    }

    // Recipe lookups
    pub async fn get_all_recipes(&self) -> Result<RecipeCollection> {
        let recipes: RecipeCollection = self.request(Method::GET, "/recipes", &[]).await?;
        tracing::debug!("Retrieved {} recipes", recipes.len());
        Ok(recipes)
    }

    pub async fn get_recipe_by_id(&self, id: i64) -> Result<RecipeRecord> {
        self.request(Method::GET, &format!("/recipes/{}", id), &[]).await
    }

    // Searches
    pub async fn search_recipes(&self, query: &str) -> Result<RecipeCollection> {
        self.request(Method::GET, "/search", &[("q", query.to_string())])
            .await
    }

    pub async fn search_by_ingredients<S: AsRef<str>>(
        &self,
        ingredients: &[S],
    ) -> Result<RecipeCollection> {
        let params = [("ingredients", join_list(ingredients))];
        self.request(Method::GET, "/search/ingredients", &params).await
    }

    pub async fn search_by_excluded_ingredients<S: AsRef<str>>(
        &self,
        ingredients: &[S],
    ) -> Result<RecipeCollection> {
        let params = [("ingredients", join_list(ingredients))];
        self.request(Method::GET, "/search/excluded-ingredients", &params)
            .await
    }

    pub async fn complex_search(&self, search: &ComplexSearch) -> Result<RecipeCollection> {
        self.request(Method::GET, "/search/complex", &search.to_params())
            .await
    }

    // Stars
    pub async fn star_recipe(&self, id: i64) -> Result<StarResponse> {
        let response: StarResponse = self
            .request(Method::POST, &format!("/recipes/{}/star", id), &[])
            .await?;
        tracing::info!("Recipe {} now has {} stars", id, response.star_count);
        Ok(response)
    }
}

fn join_list<S: AsRef<str>>(items: &[S]) -> String {
    items
        .iter()
        .map(AsRef::as_ref)
        .collect::<Vec<&str>>()
        .join(",")
}

fn log_error(error: &RecippError) {
    match error {
        RecippError::Server { status, body } => {
            tracing::error!("Error response ({}) from Recipp API: {}", status, body);
        }
        RecippError::Transport(e) => {
            tracing::error!("No response from Recipp API: {}", e);
        }
        RecippError::Request(message) => {
            tracing::error!("Failed to build request: {}", message);
        }
        other => {
            tracing::error!("Recipp API call failed ({}): {}", other.kind(), other);
        }
    }
}
