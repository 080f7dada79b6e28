use serde::Deserialize;

/// One row of the catalog index (`data/problems.json`).
///
/// `title` is untrusted display text and must go through an escaping text
/// path when rendered; `href` is a link target produced by the scrape
/// pipeline and is used verbatim.
#[derive(Debug, Clone, Deserialize)]
pub struct ProblemSummary {
    pub id: String,
    pub title: String,
    pub href: String,
    #[serde(default)]
    pub tags: Vec<String>,
}

/// A full problem record (`data/problems/<id>.json`).
///
/// `html` is the pre-rendered problem statement and is the single field
/// trusted verbatim; everything else is plain text. The scraper may emit
/// empty strings for missing fields, which consumers treat as absent.
#[derive(Debug, Clone, Deserialize)]
pub struct ProblemDetail {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub source: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub html: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summary_without_tags_deserializes_to_empty() {
        let summary: ProblemSummary = serde_json::from_str(
            r#"{"id": "P1000", "title": "A+B", "href": "problem.html?id=P1000"}"#,
        )
        .unwrap();
        assert_eq!(summary.id, "P1000");
        assert!(summary.tags.is_empty());
    }

    #[test]
    fn summary_keeps_tag_order() {
        let summary: ProblemSummary = serde_json::from_str(
            r#"{"id": "P1", "title": "t", "href": "h", "tags": ["graph", "dp", "graph"]}"#,
        )
        .unwrap();
        assert_eq!(summary.tags, ["graph", "dp", "graph"]);
    }

    #[test]
    fn detail_defaults_missing_fields() {
        let detail: ProblemDetail = serde_json::from_str(r#"{"title": "A+B"}"#).unwrap();
        assert_eq!(detail.title, "A+B");
        assert!(detail.source.is_empty());
        assert!(detail.tags.is_empty());
        assert!(detail.html.is_empty());
    }
}
