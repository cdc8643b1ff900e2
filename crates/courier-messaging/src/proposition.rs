//! Personalization propositions.

use courier_core::DataMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::errors::DecodeError;
use crate::surface::Surface;

/// A personalization decision returned for one surface.
///
/// Scope details and items are kept as opaque JSON; only the decisioning
/// service and the renderer interpret them.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Proposition {
    /// Proposition id.
    pub id: String,
    /// Surface URI the proposition was decided for.
    pub scope: String,
    /// Decisioning metadata, echoed back on interaction tracking.
    pub scope_details: DataMap,
    /// Content items.
    #[serde(default)]
    pub items: Vec<Value>,
}

impl Proposition {
    /// Decode a proposition from event data.
    pub fn decode(data: &DataMap) -> Result<Self, DecodeError> {
        Ok(serde_json::from_value(Value::Object(data.clone()))?)
    }

    /// The surface this proposition belongs to.
    pub fn surface(&self) -> Surface {
        Surface::from_uri(self.scope.as_str())
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use serde_json::json;

    use super::*;

    fn map(value: Value) -> DataMap {
        value.as_object().cloned().unwrap()
    }

    #[test]
    fn decodes_proposition() {
        let data = map(json!({
            "id": "prop-1",
            "scope": "mobileapp://app/home",
            "scopeDetails": {"decisionProvider": "AJO"},
            "items": [{"id": "item-1", "schema": "https://ns.adobe.com/personalization/json-content-item"}]
        }));
        let proposition = Proposition::decode(&data).unwrap();
        assert_eq!(proposition.id, "prop-1");
        assert_eq!(proposition.surface(), Surface::from_uri("mobileapp://app/home"));
        assert_eq!(proposition.scope_details["decisionProvider"], "AJO");
        assert_eq!(proposition.items.len(), 1);
    }

    #[test]
    fn missing_items_is_empty() {
        let data = map(json!({"id": "p", "scope": "s://x", "scopeDetails": {}}));
        assert!(Proposition::decode(&data).unwrap().items.is_empty());
    }

    #[test]
    fn missing_required_fields_fail() {
        let data = map(json!({"id": "p", "scopeDetails": {}}));
        assert_matches!(Proposition::decode(&data), Err(DecodeError::Json(_)));

        let data = map(json!({"id": "p", "scope": "s://x", "scopeDetails": "oops"}));
        assert_matches!(Proposition::decode(&data), Err(DecodeError::Json(_)));
    }
}
