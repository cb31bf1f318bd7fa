//! # Lineage Core
//!
//! Ancestry-chain resolution over single-parent lineage models.
//!
//! ## Features
//!
//! - **Chain walking** - materialize the full ordered ancestor chain of a subject
//! - **Nearest common ancestor** - find the closest shared ancestor of two subjects
//! - **Membership tests** - answer "is X an ancestor of Y?" by node identity
//! - **Cycle guarding** - fail fast on resolvers that never terminate
//!
//! ## Architecture
//!
//! ```text
//! raw host value
//!     │
//!     ├──> SubjectGate (host-supplied classification)
//!     │      └─ Unclassifiable / Terminal / Valued
//!     │
//!     ├──> ChainWalker (queries the injected ParentResolver)
//!     │      ├─ nearest-first ancestor chain
//!     │      └─ visited-set cycle guard
//!     │
//!     └──> AncestryResolver
//!            ├─ nearest common ancestor of two subjects
//!            └─ ancestor membership tests
//! ```
//!
//! How a host derives parent links is its own business: the algorithms only
//! see the [`ParentResolver`] capability. [`TableResolver`] covers hosts
//! whose lineage is an explicit lookup table.

mod ancestry;
mod error;
mod resolver;
mod table;
mod types;
mod walker;

pub use ancestry::AncestryResolver;
pub use error::{LineageError, Result};
pub use resolver::{ParentResolver, SubjectGate};
pub use table::TableResolver;
pub use types::{Chain, Subject};
pub use walker::ChainWalker;
