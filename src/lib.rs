//! # IceLink - Anonymous Emergency Disclosure
//!
//! IceLink resolves an opaque public token (scanned from a printed tag or
//! QR card) into a tiered, read-only view of a person's emergency medical
//! profile. The viewer is never authenticated: possession of the token is
//! the only access credential.
//!
//! ## Core Concepts
//!
//! - **PublicToken**: opaque, unguessable credential bound to one profile
//! - **Profile**: the medical record, split into free-tier and paid-tier fields
//! - **Entitlement**: a boolean computed from the owner's subscription at request time
//! - **DisclosurePayload**: the tier-shaped response; the paid medical block
//!   is absent (not null) for unentitled viewers
//!
//! ## Usage
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use icelink::resolver::DisclosureService;
//! use icelink::storage::InMemoryStores;
//!
//! let stores = InMemoryStores::default();
//! // ... seed profiles, tokens, contacts, subscriptions ...
//! let service = DisclosureService::new(
//!     Arc::new(stores.profiles),
//!     Arc::new(stores.contacts),
//!     Arc::new(stores.subscriptions),
//! );
//! let payload = service.disclose("printed-token")?;
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

// Domain records
pub mod contact;
pub mod error;
pub mod payload;
pub mod profile;
pub mod subscription;
pub mod token;

// Resolution pipeline and storage contracts
pub mod resolver;
pub mod storage;

// HTTP surface (server mode)
#[cfg(feature = "server")]
pub mod transport;

// Re-export primary types at crate root for convenience
pub use contact::EmergencyContact;
pub use error::{DisclosureError, DisclosureResult};
pub use payload::{BasicDisclosure, ContactCard, DisclosurePayload, FullDisclosure, MedicalBlock};
pub use profile::{AccountId, Profile, ProfileId};
pub use resolver::DisclosureService;
pub use storage::{ContactStore, InMemoryStores, ProfileStore, StorageError, SubscriptionStore};
pub use subscription::Subscription;
pub use token::{PublicToken, TokenStatus};
