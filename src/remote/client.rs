//! Thin client for the JSON-bin mirror service.

use std::time::Duration;

use serde::Deserialize;

use crate::errors::{AppError, AppResult};

use super::snapshot::Snapshot;

pub struct BinClient {
    agent: ureq::Agent,
    base_url: String,
}

#[derive(Debug, Deserialize)]
struct BinMetadata {
    id: String,
}

#[derive(Debug, Deserialize)]
struct CreateResponse {
    metadata: BinMetadata,
}

#[derive(Debug, Deserialize)]
struct LatestResponse {
    record: Snapshot,
}

impl BinClient {
    pub fn new(base_url: &str) -> Self {
        let agent = ureq::AgentBuilder::new()
            .timeout(Duration::from_secs(10))
            .build();
        Self {
            agent,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// POST a fresh snapshot; returns the id assigned by the service.
    pub fn create(&self, snapshot: &Snapshot) -> AppResult<String> {
        let resp = self
            .agent
            .post(&self.base_url)
            .set("Content-Type", "application/json")
            .send_json(snapshot)
            .map_err(remote_err)?;

        let body: CreateResponse = resp
            .into_json()
            .map_err(|e| AppError::Remote(e.to_string()))?;
        Ok(body.metadata.id)
    }

    /// GET the current snapshot for `id`.
    pub fn fetch_latest(&self, id: &str) -> AppResult<Snapshot> {
        let url = format!("{}/{}/latest", self.base_url, id);
        let resp = self.agent.get(&url).call().map_err(remote_err)?;

        let body: LatestResponse = resp
            .into_json()
            .map_err(|e| AppError::Remote(e.to_string()))?;
        Ok(body.record)
    }

    /// PUT a replacement snapshot for `id`.
    pub fn replace(&self, id: &str, snapshot: &Snapshot) -> AppResult<()> {
        let url = format!("{}/{}", self.base_url, id);
        self.agent
            .put(&url)
            .set("Content-Type", "application/json")
            .send_json(snapshot)
            .map_err(remote_err)?;
        Ok(())
    }
}

fn remote_err(e: ureq::Error) -> AppError {
    AppError::Remote(e.to_string())
}
