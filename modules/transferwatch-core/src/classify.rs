use serde::{Deserialize, Serialize};

use crate::catalog::EntityCatalog;
use crate::rules::{Category, ClassificationRule, EntityScope};

/// A headline pulled off the listing page. Never mutated after extraction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Headline {
    pub text: String,
    /// Permalink captured from the surrounding markup, when one exists.
    pub link: Option<String>,
}

/// A headline that passed one rule's keyword test and entity filter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeadlineMatch {
    pub category: Category,
    pub text: String,
    pub link: Option<String>,
}

/// Filter `headlines` through one rule: keyword hit AND entity hit, both
/// case-insensitive substring tests. Output order is input order restricted
/// to the matching subset. Categories are independent: the same headline
/// may match when classify is invoked with a different rule.
pub fn classify(
    headlines: &[Headline],
    rule: &ClassificationRule,
    catalog: &EntityCatalog,
) -> Vec<HeadlineMatch> {
    headlines
        .iter()
        .filter(|h| rule.keyword_hit(&h.text))
        .filter(|h| match &rule.scope {
            EntityScope::AllLeagues => catalog.matches(&h.text, None),
            EntityScope::Leagues(leagues) => catalog.matches(&h.text, Some(leagues)),
        })
        .map(|h| HeadlineMatch {
            category: rule.category,
            text: h.text.clone(),
            link: h.link.clone(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::League;
    use crate::rules::default_rules;

    fn headline(text: &str) -> Headline {
        Headline {
            text: text.to_string(),
            link: None,
        }
    }

    fn official_rule() -> ClassificationRule {
        ClassificationRule::new(
            Category::Official,
            &["official", "confirmed", "deal", "joins", "signs"],
            EntityScope::AllLeagues,
        )
    }

    #[test]
    fn test_requires_keyword_and_entity() {
        let catalog = EntityCatalog::top_leagues();
        let headlines = vec![
            headline("Mbappe joins Real Madrid"),
            headline("Arsenal launch new kit"),
            headline("Fifth-division club joins regional cup"),
        ];

        let matches = classify(&headlines, &official_rule(), &catalog);
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].text, "Mbappe joins Real Madrid");
        assert_eq!(matches[0].category, Category::Official);
    }

    #[test]
    fn test_preserves_input_order() {
        let catalog = EntityCatalog::top_leagues();
        let headlines = vec![
            headline("Kane signs for Bayern"),
            headline("No match here at all"),
            headline("Chelsea confirmed a new keeper"),
            headline("Deal done: winger joins Napoli"),
        ];

        let matches = classify(&headlines, &official_rule(), &catalog);
        let texts: Vec<&str> = matches.iter().map(|m| m.text.as_str()).collect();
        assert_eq!(
            texts,
            vec![
                "Kane signs for Bayern",
                "Chelsea confirmed a new keeper",
                "Deal done: winger joins Napoli",
            ]
        );
    }

    #[test]
    fn test_categories_are_independent() {
        let catalog = EntityCatalog::top_leagues();
        let rules = default_rules();
        let headlines = vec![
            headline("Real Madrid official: Mbappe signs for Real Madrid"),
            headline("Liverpool in talks over midfielder"),
            headline("Arsenal confirmed in race for striker they were linked with"),
        ];

        let official = classify(&headlines, &rules[0], &catalog);
        let rumour = classify(&headlines, &rules[1], &catalog);

        // The confirmed headline files under official only.
        assert!(official
            .iter()
            .any(|m| m.text.contains("Mbappe signs")));
        assert!(!rumour.iter().any(|m| m.text.contains("Mbappe signs")));

        // The speculation headline files under rumour only.
        assert!(rumour.iter().any(|m| m.text.contains("in talks")));
        assert!(!official.iter().any(|m| m.text.contains("in talks")));

        // A headline can match both rules independently.
        assert!(official.iter().any(|m| m.text.contains("race for")));
        assert!(rumour.iter().any(|m| m.text.contains("race for")));
    }

    #[test]
    fn test_league_scoped_rule() {
        let catalog = EntityCatalog::top_leagues();
        let rule = ClassificationRule::new(
            Category::Official,
            &["joins"],
            EntityScope::Leagues(vec![League::SerieA]),
        );
        let headlines = vec![
            headline("Winger joins Napoli"),
            headline("Winger joins Newcastle"),
        ];

        let matches = classify(&headlines, &rule, &catalog);
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].text, "Winger joins Napoli");
    }

    #[test]
    fn test_empty_catalog_yields_no_matches() {
        let catalog = EntityCatalog::empty();
        let headlines = vec![headline("Mbappe joins Real Madrid")];
        assert!(classify(&headlines, &official_rule(), &catalog).is_empty());
    }

    #[test]
    fn test_empty_input_yields_empty_output() {
        let catalog = EntityCatalog::top_leagues();
        assert!(classify(&[], &official_rule(), &catalog).is_empty());
    }
}
