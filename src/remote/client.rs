use std::time::Duration;

use reqwest::blocking::Client;
use serde::Serialize;

use crate::error::{PlannerError, Result};
use crate::remote::{Cuisine, RemotePlanRequest, RemotePlanResponse, RemotePlanSource};
use crate::models::UserProfile;

/// Wire body: the request with its prompt always filled in.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct PlanRequestBody<'a> {
    profile: &'a UserProfile,
    target_calories: u32,
    cuisine: Cuisine,
    prompt: String,
}

/// Blocking JSON client for a plan service endpoint.
#[derive(Debug, Clone)]
pub struct HttpPlanClient {
    endpoint: String,
    client: Client,
}

impl HttpPlanClient {
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            endpoint: endpoint.into(),
            client,
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl RemotePlanSource for HttpPlanClient {
    fn fetch_plan(&self, request: &RemotePlanRequest) -> Result<RemotePlanResponse> {
        let body = PlanRequestBody {
            profile: &request.profile,
            target_calories: request.target_calories,
            cuisine: request.cuisine,
            prompt: request.prompt_text(),
        };

        tracing::debug!(endpoint = %self.endpoint, target = request.target_calories, "requesting remote plan");

        let response = self.client.post(&self.endpoint).json(&body).send()?;

        if !response.status().is_success() {
            let status = response.status();
            let text = response.text().unwrap_or_default();
            return Err(PlannerError::RemoteGeneration(format!(
                "plan service returned {}: {}",
                status, text
            )));
        }

        let text = response.text()?;
        serde_json::from_str(&text).map_err(|e| {
            PlannerError::RemoteGeneration(format!("malformed plan response: {}", e))
        })
    }
}
