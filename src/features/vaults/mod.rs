//! Vault feature: the workspaces listed on the dashboard and the four item
//! collections shown on a vault's detail screen.

#[cfg(target_arch = "wasm32")]
pub(crate) mod client;
pub mod types;
