use discord_client::{Embed, EmbedField};
use transferwatch_core::{Category, Snapshot};

/// Cyan, matching the accent the channel has always used.
pub const EMBED_COLOR: u32 = 0x00FFFF;

fn category_title(category: Category) -> &'static str {
    match category {
        Category::Official => "📢 Latest Transfer News (Top 4 Leagues)",
        Category::Rumour => "🗞️ Transfer Rumour Mill",
    }
}

/// Render a snapshot as a Discord embed. An empty snapshot renders as a
/// placeholder embed, not an error; the command surface and the poller
/// both rely on that.
pub fn render_snapshot(snapshot: &Snapshot) -> Embed {
    let fields = if snapshot.is_empty() {
        vec![EmbedField {
            name: "No transfers found".to_string(),
            value: "Try again later.".to_string(),
            inline: false,
        }]
    } else {
        snapshot
            .items
            .iter()
            .map(|item| EmbedField {
                name: " ".to_string(),
                value: match &item.link {
                    Some(link) => format!("• [{}]({})", item.text, link),
                    None => format!("• {}", item.text),
                },
                inline: false,
            })
            .collect()
    };

    Embed {
        title: Some(category_title(snapshot.category).to_string()),
        color: Some(EMBED_COLOR),
        fields,
        timestamp: Some(snapshot.taken_at.to_rfc3339()),
    }
}
