//! Public access presentation factory trait definition.

use crate::dto::{PublicAccessEntrySlim, PublicAccessRequest, PublicAccessResponse};
use vellum_core::{EntityKey, Interface, PublicAccessEntry, PublicAccessResult};

/// Converts public access entries to API models and back.
pub trait PublicAccessPresentationFactory: Interface + Send + Sync {
    /// Builds the response model for an entry.
    ///
    /// `content_key` is the document the client asked about. When it differs
    /// from the entry's protected node, the protection is reported as
    /// inherited from an ancestor.
    ///
    /// Fails if the protected, login, or error document cannot be resolved.
    /// Members and groups that no longer exist are left out.
    fn create_public_access_response(
        &self,
        entry: &PublicAccessEntry,
        content_key: EntityKey,
    ) -> PublicAccessResult<PublicAccessResponse>;

    /// Flattens a request for the persistence layer.
    fn create_public_access_entry_slim(
        &self,
        request: PublicAccessRequest,
        content_key: EntityKey,
    ) -> PublicAccessEntrySlim;
}
