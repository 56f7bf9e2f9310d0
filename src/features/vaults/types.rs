//! Response types for vault API endpoints.

use percent_encoding::{AsciiSet, CONTROLS, utf8_percent_encode};
use serde::{Deserialize, Serialize};

/// Characters escaped inside one URL path segment (WHATWG path-percent-encode
/// set plus `/` and `%`).
const PATH_SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}')
    .add(b'/')
    .add(b'%');

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Vault {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
/// One entry of a vault collection (an operation, persona, pipeline or resource).
pub struct VaultItem {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum VaultResourceKind {
    #[default]
    Operations,
    Personas,
    Pipelines,
    Resources,
}

impl VaultResourceKind {
    /// Tab order on the vault screen.
    pub const ALL: [Self; 4] = [
        Self::Operations,
        Self::Personas,
        Self::Pipelines,
        Self::Resources,
    ];

    #[must_use]
    pub const fn segment(self) -> &'static str {
        match self {
            Self::Operations => "operations",
            Self::Personas => "personas",
            Self::Pipelines => "pipelines",
            Self::Resources => "resources",
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Operations => "Operations",
            Self::Personas => "Personas",
            Self::Pipelines => "Pipelines",
            Self::Resources => "Resources",
        }
    }

    /// Parses the `?tab=` query value of the vault screen.
    #[must_use]
    pub fn from_segment(segment: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.segment() == segment.trim())
    }

    /// API path of this collection inside `vault_id`.
    #[must_use]
    pub fn collection_path(self, vault_id: &str) -> String {
        format!("{}/{}", vault_path(vault_id), self.segment())
    }
}

/// API path of a single vault. The id is encoded as one path segment.
#[must_use]
pub fn vault_path(vault_id: &str) -> String {
    format!("/v1/vaults/{}", utf8_percent_encode(vault_id, PATH_SEGMENT))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vault_deserializes_without_optional_fields() {
        let vault: Vault =
            serde_json::from_str(r#"{"id":"v_1","name":"Research"}"#).expect("Failed to deserialize");
        assert_eq!(vault.description, None);
        assert_eq!(vault.created_at, None);
    }

    #[test]
    fn collection_paths_use_segments() {
        assert_eq!(
            VaultResourceKind::Pipelines.collection_path("v_1"),
            "/v1/vaults/v_1/pipelines"
        );
        assert_eq!(vault_path("a/b c"), "/v1/vaults/a%2Fb%20c");
    }

    #[test]
    fn vault_ids_survive_as_one_path_segment() {
        for id in ["team vault", "r&d+ops", "50%/q?#x"] {
            let path = vault_path(id);
            let segment = path.rsplit('/').next().expect("segment");
            let decoded = percent_encoding::percent_decode_str(segment)
                .decode_utf8()
                .expect("utf-8");
            assert_eq!(decoded, id);
        }
        assert_eq!(vault_path("team vault"), "/v1/vaults/team%20vault");
    }

    #[test]
    fn segments_parse_back() {
        for kind in VaultResourceKind::ALL {
            assert_eq!(VaultResourceKind::from_segment(kind.segment()), Some(kind));
        }
        assert_eq!(VaultResourceKind::from_segment("secrets"), None);
    }
}
