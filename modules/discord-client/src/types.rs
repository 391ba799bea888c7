use serde::{Deserialize, Serialize};

// --- Interaction wire constants ---

/// Discord probes the endpoint with this interaction type during setup and
/// periodically afterwards; it must be answered with a pong.
pub const INTERACTION_PING: u8 = 1;
/// A slash command invocation.
pub const INTERACTION_APPLICATION_COMMAND: u8 = 2;

/// Callback type acknowledging a ping.
pub const CALLBACK_PONG: u8 = 1;
/// Callback type replying immediately with message content.
pub const CALLBACK_CHANNEL_MESSAGE_WITH_SOURCE: u8 = 4;

/// Command type for text slash commands.
pub const COMMAND_CHAT_INPUT: u8 = 1;

// --- Command registration ---

/// One entry of a guild command overwrite.
#[derive(Debug, Clone, Serialize)]
pub struct CommandSpec {
    pub name: String,
    pub description: String,
    #[serde(rename = "type")]
    pub kind: u8,
}

impl CommandSpec {
    pub fn chat_input(name: &str, description: &str) -> Self {
        Self {
            name: name.to_string(),
            description: description.to_string(),
            kind: COMMAND_CHAT_INPUT,
        }
    }
}

/// The application a bot token belongs to.
#[derive(Debug, Clone, Deserialize)]
pub struct Application {
    pub id: String,
}

// --- Embeds ---

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Embed {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<u32>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub fields: Vec<EmbedField>,
    /// ISO8601 timestamp rendered in the embed footer.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmbedField {
    pub name: String,
    pub value: String,
    #[serde(default)]
    pub inline: bool,
}

// --- Interactions (inbound webhook payloads) ---

/// Inbound interaction envelope. Only the fields the command surface needs
/// are modeled; the rest of the payload is ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct Interaction {
    #[serde(rename = "type")]
    pub kind: u8,
    #[serde(default)]
    pub data: Option<InteractionData>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct InteractionData {
    pub name: String,
}

/// Outbound interaction reply.
#[derive(Debug, Clone, Serialize)]
pub struct InteractionResponse {
    #[serde(rename = "type")]
    pub kind: u8,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<InteractionCallbackData>,
}

#[derive(Debug, Clone, Serialize)]
pub struct InteractionCallbackData {
    pub embeds: Vec<Embed>,
}

impl InteractionResponse {
    pub fn pong() -> Self {
        Self {
            kind: CALLBACK_PONG,
            data: None,
        }
    }

    pub fn message(embeds: Vec<Embed>) -> Self {
        Self {
            kind: CALLBACK_CHANNEL_MESSAGE_WITH_SOURCE,
            data: Some(InteractionCallbackData { embeds }),
        }
    }
}
