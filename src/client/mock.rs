//! Mock PoxBase API client for testing
//!
//! Provides a mock implementation of the API trait for unit testing
//! without making real API calls.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::Mutex;

use super::PoxBaseApi;
use super::models::{Envelope, Expansion, Id, SearchHit, TypeaheadResponse};
use crate::error::{ApiError, Result};

/// Mock API client for testing.
///
/// Configure canned envelopes via builder methods, then use in tests.
/// Ids without a stored envelope answer with `NotFound`; queries without
/// stored hits answer with an empty result list.
///
/// # Example
/// ```ignore
/// let mock = MockPoxBaseClient::new()
///     .with_champ(7, fixtures::champ_envelope(fixtures::test_champ(7, "Fire Elf")))
///     .await;
///
/// let envelope = mock.champ(7).await?;
/// assert!(envelope.champs.is_some());
/// ```
pub struct MockPoxBaseClient {
    /// Envelope to return from init
    init_envelope: Arc<Mutex<Option<Envelope>>>,
    /// Envelopes to return from champ, keyed by id
    champs: Arc<Mutex<HashMap<Id, Envelope>>>,
    /// Envelopes to return from spell, keyed by id
    spells: Arc<Mutex<HashMap<Id, Envelope>>>,
    /// Envelopes to return from equip, keyed by id
    equips: Arc<Mutex<HashMap<Id, Envelope>>>,
    /// Envelopes to return from relic, keyed by id
    relics: Arc<Mutex<HashMap<Id, Envelope>>>,
    /// Envelopes to return from ability, keyed by group id
    abilities: Arc<Mutex<HashMap<Id, Envelope>>>,
    /// Typeahead hits keyed by exact query string
    typeahead_hits: Arc<Mutex<HashMap<String, Vec<SearchHit>>>>,
    /// Error to return (if any) - consumed on first use
    error: Arc<Mutex<Option<ApiError>>>,
    /// Track number of calls for verification
    call_count: Arc<Mutex<CallCounts>>,
    /// Captured requests for test assertions
    captured_requests: Arc<Mutex<Vec<CapturedRequest>>>,
}

impl Default for MockPoxBaseClient {
    fn default() -> Self {
        Self {
            init_envelope: Arc::new(Mutex::new(None)),
            champs: Arc::new(Mutex::new(HashMap::new())),
            spells: Arc::new(Mutex::new(HashMap::new())),
            equips: Arc::new(Mutex::new(HashMap::new())),
            relics: Arc::new(Mutex::new(HashMap::new())),
            abilities: Arc::new(Mutex::new(HashMap::new())),
            typeahead_hits: Arc::new(Mutex::new(HashMap::new())),
            error: Arc::new(Mutex::new(None)),
            call_count: Arc::new(Mutex::new(CallCounts::default())),
            captured_requests: Arc::new(Mutex::new(Vec::new())),
        }
    }
}

/// Tracks API call counts for test verification
#[derive(Default, Debug, Clone)]
pub struct CallCounts {
    pub init: usize,
    pub champ: usize,
    pub spell: usize,
    pub equip: usize,
    pub relic: usize,
    pub ability: usize,
    pub typeahead: usize,
}

impl CallCounts {
    /// Get total number of API calls made.
    pub fn total(&self) -> usize {
        self.init + self.champ + self.spell + self.equip + self.relic + self.ability + self.typeahead
    }
}

/// A captured API request for test assertions.
#[derive(Debug, Clone, PartialEq)]
pub struct CapturedRequest {
    /// The API method called (e.g., "champ", "typeahead")
    pub method: String,
    /// Entity id if the endpoint takes one
    pub id: Option<Id>,
    /// Query string for typeahead requests
    pub query: Option<String>,
}

impl MockPoxBaseClient {
    /// Create a new mock client with default (empty) responses.
    pub fn new() -> Self {
        Self::default()
    }

    /// Configure the expansions served by init.
    pub async fn with_init(self, expansions: Vec<Expansion>) -> Self {
        *self.init_envelope.lock().await = Some(Envelope {
            expansions: Some(expansions),
            ..Default::default()
        });
        self
    }

    /// Configure the envelope served for a champion id.
    pub async fn with_champ(self, id: Id, envelope: Envelope) -> Self {
        self.champs.lock().await.insert(id, envelope);
        self
    }

    /// Configure the envelope served for a spell id.
    #[allow(dead_code)]
    pub async fn with_spell(self, id: Id, envelope: Envelope) -> Self {
        self.spells.lock().await.insert(id, envelope);
        self
    }

    /// Configure the envelope served for an equipment id.
    #[allow(dead_code)]
    pub async fn with_equip(self, id: Id, envelope: Envelope) -> Self {
        self.equips.lock().await.insert(id, envelope);
        self
    }

    /// Configure the envelope served for a relic id.
    #[allow(dead_code)]
    pub async fn with_relic(self, id: Id, envelope: Envelope) -> Self {
        self.relics.lock().await.insert(id, envelope);
        self
    }

    /// Configure the envelope served for an ability group id.
    #[allow(dead_code)]
    pub async fn with_ability(self, id: Id, envelope: Envelope) -> Self {
        self.abilities.lock().await.insert(id, envelope);
        self
    }

    /// Configure typeahead hits for an exact query string.
    pub async fn with_typeahead(self, query: &str, hits: Vec<SearchHit>) -> Self {
        self.typeahead_hits
            .lock()
            .await
            .insert(query.to_string(), hits);
        self
    }

    /// Configure an error to return on the next API call.
    /// The error is consumed after one use.
    pub async fn with_error(self, error: ApiError) -> Self {
        *self.error.lock().await = Some(error);
        self
    }

    /// Get the call counts for verification in tests.
    pub async fn call_counts(&self) -> CallCounts {
        self.call_count.lock().await.clone()
    }

    /// Get all captured requests for test assertions.
    #[allow(dead_code)]
    pub async fn captured_requests(&self) -> Vec<CapturedRequest> {
        self.captured_requests.lock().await.clone()
    }

    /// Check if there's a pending error and consume it.
    async fn check_error(&self) -> Result<()> {
        let mut error = self.error.lock().await;
        if let Some(e) = error.take() {
            return Err(e.into());
        }
        Ok(())
    }

    /// Record a captured request for test assertions.
    async fn capture_request(&self, method: &str, id: Option<Id>, query: Option<&str>) {
        let mut requests = self.captured_requests.lock().await;
        requests.push(CapturedRequest {
            method: method.to_string(),
            id,
            query: query.map(|q| q.to_string()),
        });
    }

    async fn lookup(
        &self,
        table: &Mutex<HashMap<Id, Envelope>>,
        kind: &str,
        id: Id,
    ) -> Result<Envelope> {
        table
            .lock()
            .await
            .get(&id)
            .cloned()
            .ok_or_else(|| ApiError::NotFound(format!("No {kind} with id {id}")).into())
    }
}

#[async_trait]
impl PoxBaseApi for MockPoxBaseClient {
    async fn init(&self) -> Result<Envelope> {
        self.capture_request("init", None, None).await;
        self.check_error().await?;

        let mut counts = self.call_count.lock().await;
        counts.init += 1;
        drop(counts);

        let envelope = self.init_envelope.lock().await.clone();
        Ok(envelope.unwrap_or_else(|| Envelope {
            expansions: Some(Vec::new()),
            ..Default::default()
        }))
    }

    async fn champ(&self, id: Id) -> Result<Envelope> {
        self.capture_request("champ", Some(id), None).await;
        self.check_error().await?;

        let mut counts = self.call_count.lock().await;
        counts.champ += 1;
        drop(counts);

        self.lookup(&self.champs, "champ", id).await
    }

    async fn spell(&self, id: Id) -> Result<Envelope> {
        self.capture_request("spell", Some(id), None).await;
        self.check_error().await?;

        let mut counts = self.call_count.lock().await;
        counts.spell += 1;
        drop(counts);

        self.lookup(&self.spells, "spell", id).await
    }

    async fn equip(&self, id: Id) -> Result<Envelope> {
        self.capture_request("equip", Some(id), None).await;
        self.check_error().await?;

        let mut counts = self.call_count.lock().await;
        counts.equip += 1;
        drop(counts);

        self.lookup(&self.equips, "equip", id).await
    }

    async fn relic(&self, id: Id) -> Result<Envelope> {
        self.capture_request("relic", Some(id), None).await;
        self.check_error().await?;

        let mut counts = self.call_count.lock().await;
        counts.relic += 1;
        drop(counts);

        self.lookup(&self.relics, "relic", id).await
    }

    async fn ability(&self, id: Id) -> Result<Envelope> {
        self.capture_request("ability", Some(id), None).await;
        self.check_error().await?;

        let mut counts = self.call_count.lock().await;
        counts.ability += 1;
        drop(counts);

        self.lookup(&self.abilities, "ability", id).await
    }

    async fn typeahead(&self, query: &str) -> Result<TypeaheadResponse> {
        self.capture_request("typeahead", None, Some(query)).await;
        self.check_error().await?;

        let mut counts = self.call_count.lock().await;
        counts.typeahead += 1;
        drop(counts);

        let results = self
            .typeahead_hits
            .lock()
            .await
            .get(query)
            .cloned()
            .unwrap_or_default();
        Ok(TypeaheadResponse { results })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::fixtures;

    #[tokio::test]
    async fn test_mock_client_default_init() {
        let mock = MockPoxBaseClient::new();

        let envelope = mock.init().await.unwrap();
        assert_eq!(envelope.expansions, Some(Vec::new()));
    }

    #[tokio::test]
    async fn test_mock_client_with_champ() {
        let mock = MockPoxBaseClient::new()
            .with_champ(7, fixtures::champ_envelope(fixtures::test_champ(7, "Fire Elf")))
            .await;

        let envelope = mock.champ(7).await.unwrap();
        let champs = envelope.champs.unwrap();
        assert_eq!(champs.len(), 1);
        assert_eq!(champs[0].core.name, "Fire Elf");
    }

    #[tokio::test]
    async fn test_mock_client_unknown_id_not_found() {
        let mock = MockPoxBaseClient::new();

        let result = mock.spell(42).await;
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("No spell"));
    }

    #[tokio::test]
    async fn test_mock_client_with_error() {
        let mock = MockPoxBaseClient::new()
            .with_error(ApiError::ServerError("Server error: 500".to_string()))
            .await;

        let result = mock.init().await;
        assert!(result.is_err());

        // Error is consumed, next call succeeds
        let result = mock.init().await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_mock_client_call_counts() {
        let mock = MockPoxBaseClient::new()
            .with_champ(1, fixtures::champ_envelope(fixtures::test_champ(1, "One")))
            .await;

        mock.init().await.unwrap();
        mock.champ(1).await.unwrap();
        mock.champ(1).await.unwrap();
        mock.typeahead("elf").await.unwrap();

        let counts = mock.call_counts().await;
        assert_eq!(counts.init, 1);
        assert_eq!(counts.champ, 2);
        assert_eq!(counts.typeahead, 1);
        assert_eq!(counts.total(), 4);
    }

    #[tokio::test]
    async fn test_mock_client_failed_call_not_counted() {
        let mock = MockPoxBaseClient::new()
            .with_error(ApiError::ServerError("Server error: 500".to_string()))
            .await;

        let _ = mock.champ(9).await;

        // The attempt is captured but the count only tracks answers
        let counts = mock.call_counts().await;
        assert_eq!(counts.champ, 0);
        assert_eq!(mock.captured_requests().await.len(), 1);
    }

    #[tokio::test]
    async fn test_mock_client_typeahead_unknown_query_empty() {
        let mock = MockPoxBaseClient::new();

        let response = mock.typeahead("nothing").await.unwrap();
        assert!(response.results.is_empty());
    }

    #[tokio::test]
    async fn test_mock_client_captured_requests() {
        let mock = MockPoxBaseClient::new();

        let _ = mock.relic(9).await;
        mock.typeahead("elf").await.unwrap();

        let captured = mock.captured_requests().await;
        assert_eq!(captured.len(), 2);
        assert_eq!(captured[0].method, "relic");
        assert_eq!(captured[0].id, Some(9));
        assert_eq!(captured[1].method, "typeahead");
        assert_eq!(captured[1].query, Some("elf".to_string()));
    }
}
