//! Notification actions and action buttons.
//!
//! Action buttons travel as a JSON array string inside the payload:
//!
//! ```json
//! [
//!   {"label": "Open", "uri": "app://home", "type": "DEEPLINK"},
//!   {"label": "Later", "type": "DISMISS"}
//! ]
//! ```
//!
//! A string that is not a JSON array of objects is rejected as a whole.
//! Individual objects without a usable `label` or `type` are skipped.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::{debug, trace, warn};

use crate::errors::PushError;

const LABEL: &str = "label";
const URI: &str = "uri";
const TYPE: &str = "type";

/// Typical upper bound on buttons a notification shows.
const ACTION_BUTTON_CAPACITY: usize = 3;

/// What tapping a notification (or one of its buttons) does.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ActionType {
    /// Open an in-app deep link.
    Deeplink,
    /// Open a web URL.
    Weburl,
    /// Dismiss the notification.
    Dismiss,
    /// Open the application.
    Openapp,
    /// No action.
    #[default]
    None,
}

impl ActionType {
    /// Map a payload string to an action type. Absent, empty, or unknown → `None`.
    ///
    /// Matching is exact.
    pub fn from_payload(value: Option<&str>) -> Self {
        match value {
            Some("DEEPLINK") => Self::Deeplink,
            Some("WEBURL") => Self::Weburl,
            Some("DISMISS") => Self::Dismiss,
            Some("OPENAPP") => Self::Openapp,
            _ => Self::None,
        }
    }

    /// Whether a button of this type carries a link.
    pub fn has_link(self) -> bool {
        matches!(self, Self::Deeplink | Self::Weburl)
    }
}

/// One tappable button on a notification.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActionButton {
    /// Button text. Never empty.
    pub label: String,
    /// Target link, only for [`ActionType::Deeplink`] and [`ActionType::Weburl`].
    ///
    /// `None` when a link type carries no string `uri`, rather than an empty
    /// string.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    /// What the button does.
    #[serde(rename = "type")]
    pub action_type: ActionType,
}

impl ActionButton {
    /// Decode one button object. `None` means "skip this element".
    fn from_object(index: usize, object: &Map<String, Value>) -> Option<Self> {
        let label = match object.get(LABEL).and_then(scalar_text) {
            Some(label) if !label.is_empty() => label,
            _ => {
                debug!(index, "action button label is missing or empty, skipping");
                return None;
            }
        };

        let Some(raw_type) = object.get(TYPE).and_then(scalar_text) else {
            warn!(index, %label, "action button has no type, skipping");
            return None;
        };
        let action_type = ActionType::from_payload(Some(raw_type.as_str()));

        let link = if action_type.has_link() {
            object.get(URI).and_then(Value::as_str).map(str::to_owned)
        } else {
            None
        };

        trace!(index, %label, ?link, %raw_type, "decoded action button");
        Some(Self {
            label,
            link,
            action_type,
        })
    }
}

/// Text of a scalar field. Numbers and booleans are rendered as JSON text;
/// null, arrays and objects have none.
fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

/// Decode an action-button JSON array string.
///
/// Returns an error when the string as a whole is unusable; elements with an
/// empty or missing label, or with no type, are dropped from the result.
pub fn parse_action_buttons(json: &str) -> Result<Vec<ActionButton>, PushError> {
    let value: Value = serde_json::from_str(json)?;
    let Value::Array(elements) = value else {
        return Err(PushError::NotAnArray);
    };

    let mut buttons = Vec::with_capacity(elements.len().min(ACTION_BUTTON_CAPACITY));
    for (index, element) in elements.iter().enumerate() {
        let object = element
            .as_object()
            .ok_or(PushError::NotAnObject { index })?;
        if let Some(button) = ActionButton::from_object(index, object) {
            buttons.push(button);
        }
    }
    Ok(buttons)
}
