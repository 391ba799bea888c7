use serde::{Deserialize, Serialize};

use crate::catalog::League;

/// Classification label a headline files under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Official,
    Rumour,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Official => "official",
            Category::Rumour => "rumour",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which slice of the entity catalog a rule consults.
#[derive(Debug, Clone)]
pub enum EntityScope {
    AllLeagues,
    Leagues(Vec<League>),
}

/// One entry of the rule table: a headline files under `category` when it
/// contains any of the trigger keywords and names a club in scope.
/// Rules are static configuration; nothing mutates them at runtime.
#[derive(Debug, Clone)]
pub struct ClassificationRule {
    pub category: Category,
    keywords: Vec<String>,
    pub scope: EntityScope,
}

impl ClassificationRule {
    pub fn new(category: Category, keywords: &[&str], scope: EntityScope) -> Self {
        Self {
            category,
            keywords: keywords.iter().map(|k| k.to_lowercase()).collect(),
            scope,
        }
    }

    /// True iff any trigger keyword occurs in `text`, case-insensitively.
    pub fn keyword_hit(&self, text: &str) -> bool {
        let text = text.to_lowercase();
        self.keywords.iter().any(|k| text.contains(k.as_str()))
    }

    pub fn keywords(&self) -> &[String] {
        &self.keywords
    }
}

/// The standing rule table. Confirmed-transfer wording goes to `Official`,
/// speculation wording to `Rumour`; both consult the full catalog.
pub fn default_rules() -> Vec<ClassificationRule> {
    vec![
        ClassificationRule::new(
            Category::Official,
            &["official", "confirmed", "deal", "joins", "signs"],
            EntityScope::AllLeagues,
        ),
        ClassificationRule::new(
            Category::Rumour,
            &[
                "rumour",
                "rumor",
                "talks",
                "linked",
                "interested",
                "eyeing",
                "target",
                "monitoring",
                "wants",
                "race for",
            ],
            EntityScope::AllLeagues,
        ),
    ]
}
