//! In-process storage adapters.
//!
//! Games and balances live for the lifetime of the process. Both stores
//! serialize writers behind a `tokio::sync::RwLock`, which gives the
//! create/save/credit operations the atomicity the application ports require.

mod accounts;
mod in_memory;

pub use accounts::InMemoryAccountStore;
pub use in_memory::InMemoryGameRepository;
