//! Per-user search preferences: stored as typed columns, presented to the
//! dashboard as comma-joined strings.

pub mod handlers;

/// Joins a stored list back into its display string.
pub fn join_csv(items: &[String]) -> String {
    items.join(", ")
}

/// Splits a comma-separated display string into a trimmed list, dropping
/// empty segments.
pub fn split_csv(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips_the_settings_panel_default() {
        let list = split_csv("php, developer");
        assert_eq!(list, vec!["php", "developer"]);
        assert_eq!(join_csv(&list), "php, developer");
    }

    #[test]
    fn trim_and_join_is_idempotent() {
        let once = join_csv(&split_csv("  php ,developer,  backend"));
        let twice = join_csv(&split_csv(&once));
        assert_eq!(once, "php, developer, backend");
        assert_eq!(once, twice);
    }

    #[test]
    fn empty_string_yields_empty_list() {
        assert!(split_csv("").is_empty());
        assert_eq!(join_csv(&[]), "");
    }

    #[test]
    fn drops_empty_segments() {
        assert_eq!(split_csv("php,, ,developer,"), vec!["php", "developer"]);
    }
}
