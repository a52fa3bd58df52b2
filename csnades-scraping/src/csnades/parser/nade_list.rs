use std::iter::once;

use csnades_scraping_utils::regex;
use itertools::Itertools;

use crate::csnades::schema::{NadeSummary, NadeType, Team};

/// Scans a listing page for embedded nade records. Every occurrence of the
/// escaped id field with the `nade-` prefix anchors one record; the text up
/// to the next anchor (or end of input) is that record's span, and all field
/// patterns are applied within the span only. Spans missing id, slug or type
/// are not records and are skipped.
pub fn extract_records(document: &str) -> Vec<NadeSummary> {
    regex!(r#"\\"id\\":\\"nade-"#)
        .find_iter(document)
        .map(|occurrence| occurrence.start())
        .chain(once(document.len()))
        .tuple_windows()
        .filter_map(|(start, end)| parse_span(&document[start..end]))
        .collect_vec()
}

fn parse_span(span: &str) -> Option<NadeSummary> {
    // The slug has to sit right next to the id field; a lone id inside some
    // unrelated object does not qualify.
    let id_slug = regex!(r#"\\"id\\":\\"(nade-[A-Za-z0-9]+)\\",\\"slug\\":\\"([a-z0-9-]+)\\""#)
        .captures(span)?;
    let nade_type = match &regex!(r#"\\"type\\":\\"(smoke|molotov|flashbang|he)\\""#)
        .captures(span)?[1]
    {
        "smoke" => NadeType::Smoke,
        "molotov" => NadeType::Molotov,
        "flashbang" => NadeType::Flashbang,
        "he" => NadeType::He,
        _ => return None,
    };
    let team = regex!(r#"\\"team\\":\\"(ct|t)\\""#)
        .captures(span)
        .and_then(|captures| match &captures[1] {
            "ct" => Some(Team::Ct),
            "t" => Some(Team::T),
            _ => None,
        });
    let title_from = regex!(r#"\\"titleFrom\\":\\"([^"\\]+)\\""#)
        .captures(span)
        .map(|captures| captures[1].to_owned());
    let title_to = regex!(r#"\\"titleTo\\":\\"([^"\\]+)\\""#)
        .captures(span)
        .map(|captures| captures[1].to_owned());
    Some(
        NadeSummary::builder()
            .id(id_slug[1].to_owned())
            .slug(id_slug[2].to_owned())
            .nade_type(nade_type)
            .team(team)
            .title_from(title_from)
            .title_to(title_to)
            .build(),
    )
}

#[cfg(test)]
mod tests {
    use super::extract_records;
    use crate::csnades::schema::{NadeType, Team};

    #[test]
    fn document_without_anchors_yields_nothing() {
        assert!(extract_records("").is_empty());
        assert!(extract_records("<html><body>no records here</body></html>").is_empty());
    }

    #[test]
    fn extracts_a_fully_populated_record() {
        let document = concat!(
            r#"<script>self.__next_f.push([1,"{"#,
            r#"\"id\":\"nade-9tmR4\",\"slug\":\"window\",\"type\":\"smoke\","#,
            r#"\"team\":\"t\",\"titleFrom\":\"T Spawn\",\"titleTo\":\"Window\""#,
            r#"}"])</script>"#,
        );
        let records = extract_records(document);
        assert_eq!(records.len(), 1);
        let record = &records[0];
        assert_eq!(record.id(), "nade-9tmR4");
        assert_eq!(record.slug(), "window");
        assert_eq!(record.nade_type(), NadeType::Smoke);
        assert_eq!(record.team(), Some(Team::T));
        assert_eq!(record.title_from().as_deref(), Some("T Spawn"));
        assert_eq!(record.title_to().as_deref(), Some("Window"));
    }

    #[test]
    fn optional_fields_default_to_none() {
        let document = r#"\"id\":\"nade-m1n\",\"slug\":\"short\",\"type\":\"he\",\"views\":812"#;
        let records = extract_records(document);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].nade_type(), NadeType::He);
        assert_eq!(records[0].team(), None);
        assert_eq!(*records[0].title_from(), None);
        assert_eq!(*records[0].title_to(), None);
    }

    #[test]
    fn spans_bound_field_searches() {
        // The first record has no team; it must not borrow the second one's.
        let document = concat!(
            r#"\"id\":\"nade-first\",\"slug\":\"one\",\"type\":\"molotov\",\"views\":3,"#,
            r#"\"id\":\"nade-second\",\"slug\":\"two\",\"type\":\"flashbang\",\"team\":\"ct\""#,
        );
        let records = extract_records(document);
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].slug(), "one");
        assert_eq!(records[0].team(), None);
        assert_eq!(records[1].slug(), "two");
        assert_eq!(records[1].team(), Some(Team::Ct));
    }

    #[test]
    fn malformed_spans_are_dropped() {
        let document = concat!(
            // Good record.
            r#"\"id\":\"nade-good\",\"slug\":\"keep\",\"type\":\"smoke\","#,
            // No type field at all.
            r#"\"id\":\"nade-untyped\",\"slug\":\"drop1\",\"count\":4,"#,
            // Slug does not follow the id field directly.
            r#"\"id\":\"nade-gapped\",\"map\":\"mirage\",\"slug\":\"drop2\",\"type\":\"smoke\","#,
            // Type outside the closed set.
            r#"\"id\":\"nade-decoy\",\"slug\":\"drop3\",\"type\":\"decoy\""#,
        );
        let records = extract_records(document);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].slug(), "keep");
    }

    #[test]
    fn truncated_trailing_record_is_dropped() {
        let document = concat!(
            r#"\"id\":\"nade-whole\",\"slug\":\"kept\",\"type\":\"flashbang\",\"team\":\"t\","#,
            r#"\"id\":\"nade-cut\",\"slu"#,
        );
        let records = extract_records(document);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].slug(), "kept");
        assert_eq!(records[0].team(), Some(Team::T));
    }
}
