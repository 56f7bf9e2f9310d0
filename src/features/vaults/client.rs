//! Client wrappers for vault API endpoints.

use crate::{
    app_lib::{AppError, get_json_with_credentials},
    features::vaults::types::{Vault, VaultItem, VaultResourceKind, vault_path},
};

/// Fetches all vaults the current user can access.
pub async fn list_vaults() -> Result<Vec<Vault>, AppError> {
    get_json_with_credentials("/v1/vaults").await
}

pub async fn get_vault(vault_id: &str) -> Result<Vault, AppError> {
    get_json_with_credentials(&vault_path(vault_id)).await
}

/// Lists one collection of a vault.
pub async fn list_items(vault_id: &str, kind: VaultResourceKind) -> Result<Vec<VaultItem>, AppError> {
    get_json_with_credentials(&kind.collection_path(vault_id)).await
}
