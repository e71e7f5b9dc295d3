//! Field-level relevance scoring.

pub const EXACT_SCORE: u32 = 100;
pub const PREFIX_SCORE: u32 = 50;
pub const CONTAINS_SCORE: u32 = 25;

/// Case-insensitive score of one field: exact > prefix > substring > none.
///
/// Absent or empty values, and an empty query, score 0.
pub fn score_field(query: &str, value: Option<&str>) -> u32 {
    let Some(value) = value.filter(|v| !v.is_empty()) else { return 0 };
    if query.is_empty() {
        return 0;
    }
    let query = query.to_lowercase();
    let value = value.to_lowercase();
    if value == query {
        EXACT_SCORE
    } else if value.starts_with(&query) {
        PREFIX_SCORE
    } else if value.contains(&query) {
        CONTAINS_SCORE
    } else {
        0
    }
}

/// Sum of [`score_field`] over every field; an entity matches when this is > 0.
pub fn score_entity<'f, I>(query: &str, fields: I) -> u32
where
    I: IntoIterator<Item = Option<&'f str>>,
{
    fields.into_iter().map(|f| score_field(query, f)).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tiers_are_strictly_ordered() {
        let exact = score_field("smith", Some("Smith"));
        let prefix = score_field("smi", Some("Smith"));
        let contains = score_field("mit", Some("Smith"));
        let miss = score_field("jones", Some("Smith"));
        assert!(exact > prefix && prefix > contains && contains > miss);
        assert_eq!((exact, prefix, contains, miss), (100, 50, 25, 0));
    }

    #[test]
    fn empty_inputs_score_zero() {
        assert_eq!(score_field("a", None), 0);
        assert_eq!(score_field("a", Some("")), 0);
        assert_eq!(score_field("", Some("abc")), 0);
    }

    #[test]
    fn entity_score_sums_fields() {
        let score = score_entity("john", [Some("D001"), Some("John"), Some("Smith"), Some("John Smith"), None]);
        assert_eq!(score, 100 + 50);
        assert_eq!(score_entity("zzz", [Some("John"), None]), 0);
    }
}
