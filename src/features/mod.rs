//! Domain-level frontend features (auth, vaults) and their shared logic.
//! Routes import these modules to keep view code focused while keeping
//! session handling and API access in dedicated feature areas.

pub mod auth;
pub mod vaults;
