//! PoxBase API client

use async_trait::async_trait;

use crate::error::Result;

pub mod http;
#[cfg(test)]
pub mod mock;
pub mod models;

use models::{Envelope, Id, TypeaheadResponse};

pub use http::{API_BASE_URL, PoxBaseClient};
#[cfg(test)]
#[allow(unused_imports)]
pub use mock::MockPoxBaseClient;

/// PoxBase API client trait
///
/// The API is GET-only JSON. Every entity endpoint answers with the
/// shared [`Envelope`]; typeahead answers with its own result list.
#[async_trait]
pub trait PoxBaseApi: Send + Sync {
    /// Fetch the init payload that seeds expansions
    async fn init(&self) -> Result<Envelope>;

    /// Fetch a champion and its bundled races, classes, abilities, and artist
    async fn champ(&self, id: Id) -> Result<Envelope>;

    /// Fetch a spell and its artist
    async fn spell(&self, id: Id) -> Result<Envelope>;

    /// Fetch an equipment and its artist
    async fn equip(&self, id: Id) -> Result<Envelope>;

    /// Fetch a relic and its artist
    async fn relic(&self, id: Id) -> Result<Envelope>;

    /// Fetch an ability group and its ranked abilities
    async fn ability(&self, id: Id) -> Result<Envelope>;

    /// Run a typeahead query for the given free-text input
    async fn typeahead(&self, query: &str) -> Result<TypeaheadResponse>;
}
