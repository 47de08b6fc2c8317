//! HTTP adapter for the card backend.

use super::{BackendGateway, DealResult, TransportError};
use proset_cards::{Card, SlotBoard};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use tracing::{debug, info, instrument, warn};

/// Body of `GET /get_card`.
///
/// The backend sends `{card, remaining}` while cards last and a `done`
/// key (any value but `false`/`null`) once the deck is empty.
#[derive(Debug, Deserialize)]
struct DealResponse {
    #[serde(default)]
    card: Option<Card>,
    #[serde(default)]
    remaining: Option<u32>,
    #[serde(default)]
    done: Option<serde_json::Value>,
}

impl DealResponse {
    fn is_done(&self) -> bool {
        !matches!(self.done, None | Some(serde_json::Value::Bool(false)))
    }
}

/// Body of `POST /restart`.
#[derive(Debug, Deserialize)]
struct RestartResponse {
    remaining: u32,
}

/// Backend gateway speaking JSON over HTTP.
#[derive(Debug, Clone)]
pub struct HttpGateway {
    base_url: String,
    client: reqwest::Client,
}

impl HttpGateway {
    /// Creates a gateway for the backend at `base_url`.
    #[instrument(skip_all, fields(base_url = %base_url.as_ref()))]
    pub fn new(base_url: impl AsRef<str>) -> Self {
        let base_url = base_url.as_ref().trim_end_matches('/').to_string();
        info!("Creating HTTP gateway");
        Self {
            base_url,
            client: reqwest::Client::new(),
        }
    }

    /// Returns the backend base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }

    /// Checks the status and parses the body of a finished request.
    #[instrument(skip(self, request))]
    async fn read_json<T: DeserializeOwned>(
        &self,
        path: &str,
        request: reqwest::RequestBuilder,
    ) -> Result<T, TransportError> {
        let response = request.send().await.map_err(|e| {
            warn!(error = %e, path, "Backend request failed");
            TransportError::unreachable(format!("{path}: {e}"))
        })?;

        let status = response.status();
        let body = response.text().await?;
        debug!(status = %status, body = %body, "Got backend response");

        if !status.is_success() {
            return Err(TransportError::status(
                status.as_u16(),
                format!("{path} answered {status}: {body}"),
            ));
        }

        serde_json::from_str(&body).map_err(|e| {
            warn!(error = %e, path, body = %body, "Failed to parse backend response");
            TransportError::malformed(format!("{path}: {e}"))
        })
    }
}

#[async_trait::async_trait]
impl BackendGateway for HttpGateway {
    #[instrument(skip(self))]
    async fn deal_card(&self) -> Result<DealResult, TransportError> {
        let path = "get_card";
        let response: DealResponse = self
            .read_json(path, self.client.get(self.url(path)))
            .await?;

        if response.is_done() {
            debug!("Backend reports deck exhausted");
            return Ok(DealResult::Exhausted);
        }

        match (response.card, response.remaining) {
            (Some(card), Some(remaining)) => {
                debug!(remaining, "Card dealt");
                Ok(DealResult::Dealt { card, remaining })
            }
            _ => Err(TransportError::malformed(
                "get_card response has neither a card with a remaining count nor done",
            )),
        }
    }

    #[instrument(skip(self))]
    async fn restart_session(&self) -> Result<u32, TransportError> {
        let path = "restart";
        let response: RestartResponse = self
            .read_json(path, self.client.post(self.url(path)))
            .await?;
        info!(remaining = response.remaining, "Backend restarted");
        Ok(response.remaining)
    }

    #[instrument(skip(self, board), fields(occupied = board.occupied_count()))]
    async fn solve(&self, board: &SlotBoard) -> Result<Option<Vec<usize>>, TransportError> {
        let path = "solve";
        self.read_json(path, self.client.post(self.url(path)).json(board))
            .await
    }

    #[instrument(skip(self, cards), fields(count = cards.len()))]
    async fn submit_cards(&self, cards: &[Card]) -> Result<bool, TransportError> {
        let path = "submit_cards";
        self.read_json(path, self.client.post(self.url(path)).json(cards))
            .await
    }
}
