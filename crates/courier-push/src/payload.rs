//! The parsed push payload.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use tracing::{debug, error, warn};

use crate::action::{ActionButton, ActionType, parse_action_buttons};
use crate::message::RemoteMessage;
use crate::priority::NotificationPriority;

/// Data keys read from a push message.
pub mod keys {
    /// Notification title.
    pub const TITLE: &str = "adb_title";
    /// Notification body.
    pub const BODY: &str = "adb_body";
    /// Sound resource name.
    pub const SOUND: &str = "adb_sound";
    /// Badge count, as a decimal string.
    pub const BADGE_NUMBER: &str = "adb_n_count";
    /// Priority name, e.g. `PRIORITY_HIGH`.
    pub const NOTIFICATION_PRIORITY: &str = "adb_n_priority";
    /// Notification channel id.
    pub const CHANNEL_ID: &str = "adb_channel_id";
    /// Small icon resource name.
    pub const ICON: &str = "adb_icon";
    /// Large image URL.
    pub const IMAGE_URL: &str = "adb_image";
    /// Action type for a tap on the notification body.
    pub const ACTION_TYPE: &str = "adb_a_type";
    /// Action URI for a tap on the notification body.
    pub const ACTION_URI: &str = "adb_uri";
    /// Action buttons, as a JSON array string.
    pub const ACTION_BUTTONS: &str = "adb_act";
}

/// A push notification payload.
///
/// Built once from the message data map and immutable afterwards.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PushPayload {
    title: Option<String>,
    body: Option<String>,
    sound: Option<String>,
    badge_count: i32,
    priority: NotificationPriority,
    channel_id: Option<String>,
    icon: Option<String>,
    image_url: Option<String>,
    action_type: ActionType,
    action_uri: Option<String>,
    action_buttons: Option<Vec<ActionButton>>,
    data: Option<HashMap<String, String>>,
}

impl Default for PushPayload {
    fn default() -> Self {
        Self {
            title: None,
            body: None,
            sound: None,
            badge_count: 0,
            priority: NotificationPriority::default(),
            channel_id: None,
            icon: None,
            image_url: None,
            action_type: ActionType::default(),
            action_uri: None,
            action_buttons: Some(Vec::new()),
            data: None,
        }
    }
}

impl PushPayload {
    /// Parse a delivered message.
    ///
    /// A missing message, or one with an empty data map, yields an empty
    /// payload with no source data.
    pub fn from_message(message: Option<&RemoteMessage>) -> Self {
        let Some(message) = message else {
            error!("failed to create push payload, remote message is missing");
            return Self::default();
        };
        if message.data.is_empty() {
            error!(
                message_id = message.message_id.as_deref().unwrap_or_default(),
                "failed to create push payload, remote message data payload is empty"
            );
            return Self::default();
        }
        Self::from_data(Some(message.data.clone()))
    }

    /// Parse a message data map.
    pub fn from_data(data: Option<HashMap<String, String>>) -> Self {
        let Some(data) = data else {
            debug!("push payload extraction skipped, data is missing");
            return Self::default();
        };

        let get = |key: &str| data.get(key).cloned();
        let priority = NotificationPriority::from_payload(
            data.get(keys::NOTIFICATION_PRIORITY).map(String::as_str),
        );

        Self {
            title: get(keys::TITLE),
            body: get(keys::BODY),
            sound: get(keys::SOUND),
            badge_count: parse_badge_count(data.get(keys::BADGE_NUMBER).map(String::as_str)),
            priority,
            channel_id: get(keys::CHANNEL_ID),
            icon: get(keys::ICON),
            image_url: get(keys::IMAGE_URL),
            action_type: ActionType::from_payload(data.get(keys::ACTION_TYPE).map(String::as_str)),
            action_uri: get(keys::ACTION_URI),
            action_buttons: decode_action_buttons(
                data.get(keys::ACTION_BUTTONS).map(String::as_str),
            ),
            data: Some(data),
        }
    }

    /// Notification title.
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    /// Notification body.
    pub fn body(&self) -> Option<&str> {
        self.body.as_deref()
    }

    /// Sound resource name.
    pub fn sound(&self) -> Option<&str> {
        self.sound.as_deref()
    }

    /// Badge count, `0` when absent or unparseable.
    pub fn badge_count(&self) -> i32 {
        self.badge_count
    }

    /// Named priority level.
    pub fn priority(&self) -> NotificationPriority {
        self.priority
    }

    /// Channel importance code for newer platform APIs.
    pub fn notification_importance(&self) -> i32 {
        self.priority.importance()
    }

    /// Legacy notification priority code.
    pub fn notification_priority(&self) -> i32 {
        self.priority.legacy_priority()
    }

    /// Notification channel id.
    pub fn channel_id(&self) -> Option<&str> {
        self.channel_id.as_deref()
    }

    /// Small icon resource name.
    pub fn icon(&self) -> Option<&str> {
        self.icon.as_deref()
    }

    /// Large image URL.
    pub fn image_url(&self) -> Option<&str> {
        self.image_url.as_deref()
    }

    /// Action for a tap on the notification body.
    pub fn action_type(&self) -> ActionType {
        self.action_type
    }

    /// URI for a tap on the notification body.
    pub fn action_uri(&self) -> Option<&str> {
        self.action_uri.as_deref()
    }

    /// Action buttons.
    ///
    /// `None` when the data map has no buttons key or the value could not be
    /// decoded. `Some(empty)` when it decoded to no usable buttons, or when
    /// there was no data map at all.
    pub fn action_buttons(&self) -> Option<&[ActionButton]> {
        self.action_buttons.as_deref()
    }

    /// The source data map, `None` when the payload was built without one.
    pub fn data(&self) -> Option<&HashMap<String, String>> {
        self.data.as_ref()
    }

    /// Whether this looks like a silent (data-only) push.
    ///
    /// True when there is source data but neither a title nor a body. This is
    /// a heuristic: a visible notification with both fields omitted is
    /// indistinguishable from a silent one.
    pub fn is_silent_push_message(&self) -> bool {
        self.data.is_some() && self.title.is_none() && self.body.is_none()
    }
}

fn parse_badge_count(value: Option<&str>) -> i32 {
    let Some(value) = value else {
        return 0;
    };
    match value.parse::<i32>() {
        Ok(count) => count,
        Err(e) => {
            debug!(value, error = %e, "badge count is not an integer, using 0");
            0
        }
    }
}

fn decode_action_buttons(value: Option<&str>) -> Option<Vec<ActionButton>> {
    let Some(value) = value else {
        debug!("payload has no action buttons");
        return None;
    };
    match parse_action_buttons(value) {
        Ok(buttons) => Some(buttons),
        Err(e) => {
            warn!(error = %e, "failed to decode action buttons");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use courier_core::logging::capture_logs;
    use tracing::Level;

    use super::*;

    fn data(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
            .collect()
    }

    #[test]
    fn parses_all_fields() {
        let payload = PushPayload::from_data(Some(data(&[
            (keys::TITLE, "Sale"),
            (keys::BODY, "50% off"),
            (keys::SOUND, "chime"),
            (keys::BADGE_NUMBER, "42"),
            (keys::NOTIFICATION_PRIORITY, "PRIORITY_HIGH"),
            (keys::CHANNEL_ID, "promo"),
            (keys::ICON, "ic_sale"),
            (keys::IMAGE_URL, "https://img.example.com/a.png"),
            (keys::ACTION_TYPE, "WEBURL"),
            (keys::ACTION_URI, "https://example.com"),
            (
                keys::ACTION_BUTTONS,
                r#"[{"label": "Shop", "uri": "app://shop", "type": "DEEPLINK"}]"#,
            ),
        ])));

        assert_eq!(payload.title(), Some("Sale"));
        assert_eq!(payload.body(), Some("50% off"));
        assert_eq!(payload.sound(), Some("chime"));
        assert_eq!(payload.badge_count(), 42);
        assert_eq!(payload.priority(), NotificationPriority::High);
        assert_eq!(payload.notification_importance(), 4);
        assert_eq!(payload.notification_priority(), 1);
        assert_eq!(payload.channel_id(), Some("promo"));
        assert_eq!(payload.icon(), Some("ic_sale"));
        assert_eq!(payload.image_url(), Some("https://img.example.com/a.png"));
        assert_eq!(payload.action_type(), ActionType::Weburl);
        assert_eq!(payload.action_uri(), Some("https://example.com"));
        let buttons = payload.action_buttons().unwrap();
        assert_eq!(buttons.len(), 1);
        assert_eq!(buttons[0].link.as_deref(), Some("app://shop"));
        assert_eq!(payload.data().unwrap().len(), 11);
        assert!(!payload.is_silent_push_message());
    }

    #[test]
    fn missing_data_leaves_defaults() {
        let (logs, _guard) = capture_logs();
        let payload = PushPayload::from_data(None);
        assert_eq!(payload, PushPayload::default());
        assert_eq!(payload.badge_count(), 0);
        assert_eq!(payload.priority(), NotificationPriority::Default);
        assert_eq!(payload.action_type(), ActionType::None);
        assert_eq!(payload.action_buttons(), Some(&[][..]));
        assert!(logs.has_event(Level::DEBUG, "data is missing"));
    }

    #[test]
    fn unparseable_badge_defaults_to_zero() {
        let (logs, _guard) = capture_logs();
        let payload = PushPayload::from_data(Some(data(&[
            (keys::TITLE, "t"),
            (keys::BADGE_NUMBER, "abc"),
        ])));
        assert_eq!(payload.badge_count(), 0);
        assert_eq!(payload.title(), Some("t"));
        assert!(logs.has_event(Level::DEBUG, "badge count is not an integer"));
    }

    #[test]
    fn malformed_buttons_are_none_not_empty() {
        let (logs, _guard) = capture_logs();
        let payload = PushPayload::from_data(Some(data(&[
            (keys::TITLE, "t"),
            (keys::ACTION_BUTTONS, "[{\"label\": "),
        ])));
        assert!(payload.action_buttons().is_none());
        assert_eq!(payload.title(), Some("t"));
        assert!(logs.has_event(Level::WARN, "failed to decode action buttons"));
    }

    #[test]
    fn buttons_without_labels_are_empty_list() {
        let payload = PushPayload::from_data(Some(data(&[(
            keys::ACTION_BUTTONS,
            r#"[{"label": "", "type": "DISMISS"}]"#,
        )])));
        assert_eq!(payload.action_buttons(), Some(&[][..]));
    }

    #[test]
    fn unknown_priority_defaults() {
        let payload =
            PushPayload::from_data(Some(data(&[(keys::NOTIFICATION_PRIORITY, "LOUD")])));
        assert_eq!(payload.notification_importance(), 3);
        assert_eq!(payload.notification_priority(), 0);
    }

    #[test]
    fn silent_push_rules() {
        let silent = PushPayload::from_data(Some(data(&[("custom", "1")])));
        assert!(silent.is_silent_push_message());

        let empty_map = PushPayload::from_data(Some(HashMap::new()));
        assert!(empty_map.is_silent_push_message());

        let titled = PushPayload::from_data(Some(data(&[(keys::TITLE, "t")])));
        assert!(!titled.is_silent_push_message());

        let bodied = PushPayload::from_data(Some(data(&[(keys::BODY, "b")])));
        assert!(!bodied.is_silent_push_message());

        assert!(!PushPayload::from_data(None).is_silent_push_message());
    }

    #[test]
    fn from_message_requires_data() {
        let (logs, _guard) = capture_logs();

        let missing = PushPayload::from_message(None);
        assert!(missing.data().is_none());
        assert!(!missing.is_silent_push_message());
        assert_eq!(missing.action_buttons(), Some(&[][..]));

        let empty = PushPayload::from_message(Some(&RemoteMessage::default()));
        assert!(empty.data().is_none());
        assert_eq!(empty.action_buttons(), Some(&[][..]));
        assert_eq!(logs.count_at_level(Level::ERROR), 2);

        let message = RemoteMessage::with_data(data(&[(keys::BODY, "hello")]));
        let payload = PushPayload::from_message(Some(&message));
        assert_eq!(payload.body(), Some("hello"));
        assert!(payload.action_buttons().is_none());
    }
}
