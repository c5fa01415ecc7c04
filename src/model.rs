use serde::{Deserialize, Serialize};

/// Risk-assessment record returned by the upstream verification service for
/// one wallet address. Transient: decoded, rendered once, discarded.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerificationResult {
    pub address: String,
    pub sanctioned_by_local_blacklist: bool,
    pub on_polkadot_scam_list: bool,
    /// Categorical risk name, case preserved as sent (rendered lower-cased
    /// for the style-class hook).
    pub risk_level: String,
    /// 0-100.
    pub risk_score: f64,
    #[serde(default)]
    pub graphsense_tags: Vec<GraphsenseTag>,
}

/// One entry of `graphsense_tags`. The upstream mixes shapes in a single
/// array: plain informational strings, structured tag objects, and (when the
/// tagging API misbehaves) arbitrary JSON we only ever echo back verbatim.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum GraphsenseTag {
    Text(String),
    Entry(TagEntry),
    Other(serde_json::Value),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TagEntry {
    pub label: String,
    #[serde(default)]
    pub source: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    /// Fields we don't interpret, kept so the raw-JSON fallback rendering
    /// reproduces the whole object.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}
