use serde::Deserialize;

pub const BUSINESS_ACCOUNT_OBJECT: &str = "whatsapp_business_account";
pub const MESSAGES_FIELD: &str = "messages";
pub const TEXT_MESSAGE_TYPE: &str = "text";

// Missing lists deserialize as empty. Messages without a sender are
// skipped rather than failing the envelope.

#[derive(Debug, Deserialize)]
pub struct WebhookEnvelope {
    pub object: Option<String>,
    #[serde(default)]
    pub entry: Vec<Entry>,
}

#[derive(Debug, Deserialize)]
pub struct Entry {
    #[serde(default)]
    pub changes: Vec<Change>,
}

#[derive(Debug, Deserialize)]
pub struct Change {
    pub field: Option<String>,
    pub value: Option<ChangeValue>,
}

#[derive(Debug, Deserialize)]
pub struct ChangeValue {
    #[serde(default)]
    pub messages: Vec<InboundMessage>,
}

#[derive(Debug, Deserialize)]
pub struct InboundMessage {
    pub from: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub text: Option<TextContent>,
}

#[derive(Debug, Deserialize)]
pub struct TextContent {
    pub body: String,
}

impl WebhookEnvelope {
    pub fn is_business_account(&self) -> bool {
        self.object.as_deref() == Some(BUSINESS_ACCOUNT_OBJECT)
    }

    /// Text messages carried by `messages` changes, in delivery order.
    pub fn text_messages(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entry
            .iter()
            .flat_map(|entry| entry.changes.iter())
            .filter(|change| change.field.as_deref() == Some(MESSAGES_FIELD))
            .filter_map(|change| change.value.as_ref())
            .flat_map(|value| value.messages.iter())
            .filter(|message| message.kind.as_deref() == Some(TEXT_MESSAGE_TYPE))
            .filter_map(|message| {
                let from = message.from.as_deref().filter(|from| !from.is_empty())?;
                let text = message.text.as_ref()?;
                Some((from, text.body.as_str()))
            })
    }
}
