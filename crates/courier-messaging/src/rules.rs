//! Rules documents and their consequences.
//!
//! A rules document as delivered inside a proposition item:
//!
//! ```json
//! {
//!   "version": 1,
//!   "rules": [
//!     {
//!       "condition": { ... },
//!       "consequences": [
//!         { "id": "c-1", "type": "schema", "detail": { "schema": "...", ... } }
//!       ]
//!     }
//!   ]
//! }
//! ```
//!
//! Evaluating conditions is the rules engine's job. This module only decodes
//! the document and answers what kind of message a consequence describes.

use courier_core::DataMap;
use courier_core::data::{opt_str, require_map, require_map_at};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

use crate::errors::DecodeError;

/// Keys and schema values used in rules documents.
pub mod keys {
    /// Top-level array of rules.
    pub const RULES: &str = "rules";
    /// Per-rule array of consequences.
    pub const CONSEQUENCES: &str = "consequences";
    /// Consequence detail object.
    pub const DETAIL: &str = "detail";
    /// Schema discriminator inside the detail object.
    pub const SCHEMA: &str = "schema";
    /// Legacy consequence type for in-app messages.
    pub const CONSEQUENCE_TYPE_CJM: &str = "cjmiam";
    /// Feed item schema.
    pub const SCHEMA_FEED_ITEM: &str = "https://ns.adobe.com/personalization/message/feed-item";
    /// In-app message schema.
    pub const SCHEMA_IN_APP: &str = "https://ns.adobe.com/personalization/message/in-app";
}

/// The action attached to a matched rule.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RuleConsequence {
    /// Consequence id.
    #[serde(default)]
    pub id: String,
    /// Consequence type, e.g. `schema` or `cjmiam`.
    #[serde(rename = "type")]
    pub consequence_type: String,
    /// Type-specific detail.
    #[serde(default)]
    pub detail: DataMap,
}

impl RuleConsequence {
    /// The `detail.schema` string, empty when absent.
    pub fn schema(&self) -> &str {
        opt_str(&self.detail, keys::SCHEMA).unwrap_or_default()
    }

    /// Whether this consequence describes a content feed item.
    pub fn is_feed_item(&self) -> bool {
        self.schema() == keys::SCHEMA_FEED_ITEM
    }

    /// Whether this consequence describes an in-app message.
    pub fn is_in_app(&self) -> bool {
        self.schema() == keys::SCHEMA_IN_APP || self.consequence_type == keys::CONSEQUENCE_TYPE_CJM
    }
}

/// A matching rule: an opaque condition plus its consequences.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LaunchRule {
    /// Condition tree, evaluated by the host rules engine.
    #[serde(default)]
    pub condition: Value,
    /// Consequences applied when the condition matches.
    #[serde(default)]
    pub consequences: Vec<RuleConsequence>,
}

#[derive(Deserialize)]
struct RulesDocument {
    #[serde(default)]
    rules: Vec<LaunchRule>,
}

/// Decode every rule in a rules document.
pub fn decode_rules(document: &Value) -> Result<Vec<LaunchRule>, DecodeError> {
    if !document.is_object() {
        return Err(DecodeError::NotAnObject);
    }
    Ok(RulesDocument::deserialize(document)?.rules)
}

/// Navigate to `rules[0].consequences[0]`.
pub fn decode_consequence(document: &Value) -> Result<&DataMap, DecodeError> {
    let root = document.as_object().ok_or(DecodeError::NotAnObject)?;
    let rule = require_map_at(root, keys::RULES, 0)?;
    Ok(require_map_at(rule, keys::CONSEQUENCES, 0)?)
}

/// The first consequence of the first rule, or `None` if the document does
/// not have that shape.
pub fn consequence(document: &Value) -> Option<&DataMap> {
    decode_consequence(document)
        .map_err(|e| debug!(error = %e, "failed to retrieve rule consequence"))
        .ok()
}

/// The `detail` object of the first consequence of the first rule.
pub fn consequence_details(document: &Value) -> Option<&DataMap> {
    decode_consequence(document)
        .and_then(|c| require_map(c, keys::DETAIL).map_err(DecodeError::from))
        .map_err(|e| debug!(error = %e, "failed to retrieve rule consequence details"))
        .ok()
}
