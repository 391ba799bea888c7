use serde::{Deserialize, Serialize};

/// The leagues the watcher tracks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum League {
    PremierLeague,
    LaLiga,
    SerieA,
    Bundesliga,
}

impl League {
    pub fn as_str(&self) -> &'static str {
        match self {
            League::PremierLeague => "premier-league",
            League::LaLiga => "la-liga",
            League::SerieA => "serie-a",
            League::Bundesliga => "bundesliga",
        }
    }
}

impl std::fmt::Display for League {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Club name allow-list, grouped by league. Names are lowercased once at
/// construction; membership is case-insensitive substring containment of a
/// club name within a headline.
///
/// Immutable after startup. An empty catalog is a permanently-false filter,
/// so callers that rely on entity filtering should check `is_empty()` when
/// they boot.
#[derive(Debug, Clone)]
pub struct EntityCatalog {
    entries: Vec<(League, Vec<String>)>,
}

impl EntityCatalog {
    pub fn empty() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// The seed catalog: clubs of the top four European leagues, including
    /// common short forms ("Man City", "Spurs", "Juve") so abbreviated
    /// headlines still match.
    pub fn top_leagues() -> Self {
        let mut catalog = Self::empty();
        catalog.add_league(
            League::PremierLeague,
            &[
                "Arsenal",
                "Aston Villa",
                "Bournemouth",
                "Brentford",
                "Brighton",
                "Chelsea",
                "Crystal Palace",
                "Everton",
                "Fulham",
                "Liverpool",
                "Luton",
                "Manchester City",
                "Man City",
                "Manchester United",
                "Man United",
                "Newcastle",
                "Nottingham Forest",
                "Sheffield United",
                "Tottenham",
                "Spurs",
                "West Ham",
                "Wolves",
                "Wolverhampton",
            ],
        );
        catalog.add_league(
            League::LaLiga,
            &[
                "Alaves",
                "Athletic Club",
                "Atletico Madrid",
                "Atleti",
                "Barcelona",
                "Barça",
                "Cadiz",
                "Celta Vigo",
                "Getafe",
                "Girona",
                "Granada",
                "Las Palmas",
                "Mallorca",
                "Osasuna",
                "Rayo Vallecano",
                "Real Betis",
                "Real Madrid",
                "Real Sociedad",
                "Sevilla",
                "Valencia",
                "Villarreal",
            ],
        );
        catalog.add_league(
            League::SerieA,
            &[
                "Atalanta",
                "Bologna",
                "Cagliari",
                "Empoli",
                "Fiorentina",
                "Frosinone",
                "Genoa",
                "Inter",
                "Juventus",
                "Juve",
                "Lazio",
                "Lecce",
                "Milan",
                "AC Milan",
                "Monza",
                "Napoli",
                "Roma",
                "Salernitana",
                "Sassuolo",
                "Torino",
                "Udinese",
                "Verona",
            ],
        );
        catalog.add_league(
            League::Bundesliga,
            &[
                "Augsburg",
                "Bayer Leverkusen",
                "Leverkusen",
                "Bayern Munich",
                "Bayern",
                "Bochum",
                "Borussia Dortmund",
                "Dortmund",
                "Borussia Monchengladbach",
                "Gladbach",
                "Eintracht Frankfurt",
                "Freiburg",
                "Heidenheim",
                "Hoffenheim",
                "Mainz",
                "RB Leipzig",
                "Union Berlin",
                "Stuttgart",
                "Werder Bremen",
                "Wolfsburg",
            ],
        );
        catalog
    }

    pub fn add_league(&mut self, league: League, clubs: &[&str]) {
        let clubs = clubs.iter().map(|c| c.to_lowercase()).collect();
        self.entries.push((league, clubs));
    }

    /// True iff any club in the given league subset (or the whole catalog
    /// when `scope` is `None`) occurs within `text`, case-insensitively.
    pub fn matches(&self, text: &str, scope: Option<&[League]>) -> bool {
        let text = text.to_lowercase();
        self.entries
            .iter()
            .filter(|(league, _)| scope.map_or(true, |s| s.contains(league)))
            .any(|(_, clubs)| clubs.iter().any(|club| text.contains(club.as_str())))
    }

    pub fn is_empty(&self) -> bool {
        self.entries.iter().all(|(_, clubs)| clubs.is_empty())
    }

    /// Total number of club names across all leagues.
    pub fn len(&self) -> usize {
        self.entries.iter().map(|(_, clubs)| clubs.len()).sum()
    }
}
