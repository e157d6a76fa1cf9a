use crate::models::PokemonSummary;

/// Keeps the entries whose name contains `term`, ignoring case.
///
/// Plain substring match, order preserved. An empty term keeps everything.
pub fn filter(items: &[PokemonSummary], term: &str) -> Vec<PokemonSummary> {
    let needle = term.to_lowercase();
    items
        .iter()
        .filter(|p| p.name.to_lowercase().contains(&needle))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(items: &[PokemonSummary]) -> Vec<&str> {
        items.iter().map(|p| p.name.as_str()).collect()
    }

    fn starters() -> Vec<PokemonSummary> {
        ["Bulbasaur", "Charmander", "Charmeleon", "Squirtle", "charizard"]
            .into_iter()
            .map(|n| PokemonSummary::new(n, None))
            .collect()
    }

    #[test]
    fn test_case_insensitive_match() {
        let items = vec![
            PokemonSummary::new("Bulbasaur", None),
            PokemonSummary::new("Charmander", None),
        ];
        assert_eq!(
            filter(&items, "BULBA"),
            vec![PokemonSummary::new("Bulbasaur", None)]
        );
    }

    #[test]
    fn test_order_is_preserved() {
        assert_eq!(
            names(&filter(&starters(), "char")),
            vec!["Charmander", "Charmeleon", "charizard"]
        );
    }

    #[test]
    fn test_substring_not_prefix() {
        assert_eq!(names(&filter(&starters(), "tle")), vec!["Squirtle"]);
    }

    #[test]
    fn test_empty_term_keeps_everything() {
        assert_eq!(filter(&starters(), ""), starters());
    }

    #[test]
    fn test_no_match() {
        assert!(filter(&starters(), "pika").is_empty());
    }

    #[test]
    fn test_idempotent() {
        let once = filter(&starters(), "char");
        assert_eq!(filter(&once, "char"), once);
    }
}
