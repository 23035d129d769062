use std::collections::BTreeSet;

/// Drops empty categories, removes duplicates and sorts the rest.
pub fn distinct_types<I, S>(values: I) -> Vec<String>
where
    I: IntoIterator<Item = Option<S>>,
    S: Into<String>,
{
    values
        .into_iter()
        .flatten()
        .map(Into::into)
        .filter(|v| !v.is_empty())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deduplicates_drops_empty_and_sorts() {
        let out = distinct_types(vec![
            Some("Safety"),
            Some(""),
            None,
            Some("Language"),
            Some("Safety"),
            Some("Driving"),
        ]);
        assert_eq!(out, vec!["Driving", "Language", "Safety"]);
    }

    #[test]
    fn empty_input_gives_empty_output() {
        assert!(distinct_types(Vec::<Option<String>>::new()).is_empty());
    }
}
