//! Thin HTTP client for the Hearth API.

use anyhow::{bail, Context, Result};
use hearth_core::Recipe;
use serde::de::DeserializeOwned;
use serde::Deserialize;

pub struct HearthClient {
    base_url: String,
    http: reqwest::Client,
}

#[derive(Deserialize)]
struct PingResponse {
    message: String,
}

#[derive(Deserialize)]
struct ListRecipesResponse {
    recipes: Vec<Recipe>,
}

#[derive(Deserialize)]
struct ResetResponse {
    count: usize,
}

#[derive(Deserialize)]
struct ErrorResponse {
    error: String,
}

impl HearthClient {
    pub fn new(server: &str) -> Self {
        Self {
            base_url: server.trim_end_matches('/').to_string(),
            http: reqwest::Client::new(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn parse<T: DeserializeOwned>(response: reqwest::Response) -> Result<T> {
        let status = response.status();
        let body = response.text().await.context("Failed to read response body")?;

        if !status.is_success() {
            let message = serde_json::from_str::<ErrorResponse>(&body)
                .map(|e| e.error)
                .unwrap_or(body);
            bail!("Server returned {}: {}", status, message);
        }

        serde_json::from_str(&body).context("Unexpected response from server")
    }

    pub async fn ping(&self) -> Result<String> {
        let response = self
            .http
            .get(self.url("/api/test/ping"))
            .send()
            .await
            .with_context(|| format!("Could not reach {}", self.base_url))?;
        let ping: PingResponse = Self::parse(response).await?;
        Ok(ping.message)
    }

    pub async fn list_recipes(&self) -> Result<Vec<Recipe>> {
        let response = self
            .http
            .get(self.url("/api/recipes"))
            .send()
            .await
            .with_context(|| format!("Could not reach {}", self.base_url))?;
        let list: ListRecipesResponse = Self::parse(response).await?;
        Ok(list.recipes)
    }

    pub async fn reset_mock_data(&self) -> Result<usize> {
        let response = self
            .http
            .post(self.url("/api/admin/reset-mock-data"))
            .send()
            .await
            .with_context(|| format!("Could not reach {}", self.base_url))?;
        let reset: ResetResponse = Self::parse(response).await?;
        Ok(reset.count)
    }
}

/// One line per recipe: id, name, and emotion tags.
pub fn summary_line(recipe: &Recipe) -> String {
    let mut line = format!("{}  {}", recipe.id, recipe.display_name());
    if !recipe.emotion_tags.is_empty() {
        line.push_str(&format!("  [{}]", recipe.emotion_tags.join(", ")));
    }
    line
}
