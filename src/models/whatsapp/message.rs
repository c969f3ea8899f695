use serde::{Deserialize, Serialize};

pub const MESSAGING_PRODUCT: &str = "whatsapp";

/// Body of a `POST /{account}/messages` call to the Graph API.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OutgoingMessage {
    pub messaging_product: &'static str,
    pub to: String,
    #[serde(flatten)]
    pub content: MessageContent,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum MessageContent {
    Text { text: TextBody },
    Template { template: Template },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TextBody {
    pub body: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Template {
    pub name: String,
    pub language: Language,
    pub components: Vec<Component>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Language {
    pub code: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Component {
    Body { parameters: Vec<Parameter> },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Parameter {
    Text { text: String },
}

impl OutgoingMessage {
    /// Free-form text; only allowed inside the customer service window.
    pub fn text(to: &str, body: &str) -> Self {
        Self {
            messaging_product: MESSAGING_PRODUCT,
            to: to.to_string(),
            content: MessageContent::Text {
                text: TextBody {
                    body: body.to_string(),
                },
            },
        }
    }

    /// Pre-approved template with positional body parameters.
    pub fn template(to: &str, name: &str, language: &str, parameters: &[&str]) -> Self {
        Self {
            messaging_product: MESSAGING_PRODUCT,
            to: to.to_string(),
            content: MessageContent::Template {
                template: Template {
                    name: name.to_string(),
                    language: Language {
                        code: language.to_string(),
                    },
                    components: vec![Component::Body {
                        parameters: parameters
                            .iter()
                            .map(|text| Parameter::Text {
                                text: text.to_string(),
                            })
                            .collect(),
                    }],
                },
            },
        }
    }

    /// Text body, or the body parameters of a template.
    pub fn rendered_parts(&self) -> Vec<&str> {
        match &self.content {
            MessageContent::Text { text } => vec![text.body.as_str()],
            MessageContent::Template { template } => template
                .components
                .iter()
                .flat_map(|component| match component {
                    Component::Body { parameters } => parameters.iter(),
                })
                .map(|parameter| match parameter {
                    Parameter::Text { text } => text.as_str(),
                })
                .collect(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct SendMessageResponse {
    #[serde(default)]
    pub messages: Vec<MessageId>,
}

#[derive(Debug, Deserialize)]
pub struct MessageId {
    pub id: String,
}
