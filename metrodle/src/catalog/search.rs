//! Name search for guess suggestions.

use crate::domain::{Station, StationId};

use super::Catalog;

/// Default number of suggestions offered.
pub const DEFAULT_SUGGESTIONS: usize = 5;

/// Lowercase and strip the diacritics that appear in station names.
fn fold(s: &str) -> String {
    s.chars()
        .flat_map(char::to_lowercase)
        .map(|c| match c {
            'à' | 'á' | 'â' | 'ä' => 'a',
            'è' | 'é' | 'ê' | 'ë' => 'e',
            'ì' | 'í' | 'î' | 'ï' => 'i',
            'ò' | 'ó' | 'ô' | 'ö' => 'o',
            'ù' | 'ú' | 'û' | 'ü' => 'u',
            'ç' => 'c',
            'ñ' => 'n',
            '·' => '.',
            other => other,
        })
        .collect()
}

impl Catalog {
    /// Stations whose name contains `term`, ignoring case and accents.
    ///
    /// Stations in `exclude` (already guessed) are skipped. Results keep
    /// catalog order and are capped at `limit`. A blank term matches nothing.
    pub fn suggest(&self, term: &str, exclude: &[StationId], limit: usize) -> Vec<&Station> {
        let needle = fold(term.trim());
        if needle.is_empty() {
            return Vec::new();
        }
        self.stations()
            .iter()
            .filter(|s| !exclude.contains(&s.id))
            .filter(|s| fold(&s.name).contains(&needle))
            .take(limit)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::fixtures::{id, station};

    fn named(station_id: &str, name: &str, order: u32) -> Station {
        let mut s = station(station_id, &[("L1", order)]);
        s.name = name.to_string();
        s
    }

    fn catalog() -> Catalog {
        Catalog::new(
            vec![
                named("1", "Passeig de Gràcia", 1),
                named("2", "Gràcia", 2),
                named("3", "Sant Andreu", 3),
                named("4", "Paral·lel", 4),
                named("5", "Sants Estació", 5),
            ],
            vec![],
        )
        .unwrap()
    }

    fn ids(found: Vec<&Station>) -> Vec<&str> {
        found.into_iter().map(|s| s.id.as_str()).collect()
    }

    #[test]
    fn fold_strips_accents() {
        assert_eq!(fold("Gràcia"), "gracia");
        assert_eq!(fold("SANTS ESTACIÓ"), "sants estacio");
        assert_eq!(fold("Paral·lel"), "paral.lel");
    }

    #[test]
    fn case_and_accent_insensitive() {
        let cat = catalog();
        assert_eq!(ids(cat.suggest("gracia", &[], 5)), vec!["1", "2"]);
        assert_eq!(ids(cat.suggest("ESTACIO", &[], 5)), vec!["5"]);
    }

    #[test]
    fn excludes_already_guessed() {
        let cat = catalog();
        assert_eq!(ids(cat.suggest("gràcia", &[id("1")], 5)), vec!["2"]);
    }

    #[test]
    fn respects_limit() {
        let cat = catalog();
        assert_eq!(cat.suggest("a", &[], DEFAULT_SUGGESTIONS).len(), 5);
        assert_eq!(cat.suggest("sant", &[], 1).len(), 1);
    }

    #[test]
    fn blank_term_matches_nothing() {
        let cat = catalog();
        assert!(cat.suggest("", &[], 5).is_empty());
        assert!(cat.suggest("   ", &[], 5).is_empty());
    }
}
