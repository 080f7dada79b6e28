//! Pure renderers: data in, markup out. No DOM access, no state mutation.

use crate::markup::{el, render_all, text_el, RawHtml, UiElement};
use crate::models::{ProblemDetail, ProblemSummary};

/// Table rows for the list page, in input order. An empty input renders to
/// an empty string; showing the "no results" indicator is the page shell's
/// concern.
pub fn render_summary_rows(summaries: &[&ProblemSummary]) -> String {
    let rows: Vec<UiElement> = summaries
        .iter()
        .map(|summary| {
            el("tr").with_children(vec![
                text_el("td", summary.id.as_str()).with_attr("class", "id"),
                el("td").with_children(vec![text_el("a", summary.title.as_str())
                    .with_attr("href", summary.href.as_str())]),
                el("td").with_children(tag_badges(&summary.tags)),
            ])
        })
        .collect();
    render_all(&rows)
}

/// A single full-width row carrying the load-failure message.
pub fn render_error_row(message: &str) -> String {
    el("tr")
        .with_children(vec![text_el("td", message).with_attr("colspan", "3")])
        .render()
}

fn tag_badges(tags: &[String]) -> Vec<UiElement> {
    tags.iter()
        .map(|tag| text_el("span", tag.as_str()).with_attr("class", "tag"))
        .collect()
}

/// Escaped tag badges as a markup fragment.
pub fn render_tag_badges(tags: &[String]) -> String {
    render_all(&tag_badges(tags))
}

/// View model for the detail page, with the original's fallbacks applied:
/// empty title falls back to the problem id, empty source to a
/// non-navigating target, empty body to a placeholder paragraph.
#[derive(Debug, Clone)]
pub struct DetailView {
    pub title: String,
    pub source_href: String,
    pub tags_markup: String,
    pub body: RawHtml,
}

pub fn detail_view(detail: &ProblemDetail, id: &str) -> DetailView {
    let title = if detail.title.trim().is_empty() {
        id.to_string()
    } else {
        detail.title.clone()
    };
    let source_href = if detail.source.trim().is_empty() {
        "#".to_string()
    } else {
        detail.source.clone()
    };
    let body = if detail.html.trim().is_empty() {
        RawHtml::new(text_el("p", "No content.").render())
    } else {
        RawHtml::new(detail.html.clone())
    };

    DetailView {
        title,
        source_href,
        tags_markup: render_tag_badges(&detail.tags),
        body,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summary(id: &str, title: &str, tags: &[&str]) -> ProblemSummary {
        ProblemSummary {
            id: id.to_string(),
            title: title.to_string(),
            href: format!("problem.html?id={id}"),
            tags: tags.iter().map(|tag| tag.to_string()).collect(),
        }
    }

    fn detail(title: &str, source: &str, tags: &[&str], html: &str) -> ProblemDetail {
        ProblemDetail {
            title: title.to_string(),
            source: source.to_string(),
            tags: tags.iter().map(|tag| tag.to_string()).collect(),
            html: html.to_string(),
        }
    }

    #[test]
    fn rows_keep_column_order_and_link_target() {
        let one = summary("P1000", "A+B Problem", &["math", "easy"]);
        let rows = render_summary_rows(&[&one]);
        assert!(rows.starts_with("<tr><td class=\"id\">P1000</td>"));
        assert!(rows.contains("<a href=\"problem.html?id=P1000\">A+B Problem</a>"));
        assert!(rows.contains("<span class=\"tag\">math</span>"));
        assert!(rows.contains("<span class=\"tag\">easy</span>"));
    }

    #[test]
    fn titles_are_escaped_not_executed() {
        let one = summary("P1", "<b>x</b>", &[]);
        let rows = render_summary_rows(&[&one]);
        assert!(rows.contains("&lt;b&gt;x&lt;/b&gt;"));
        assert!(!rows.contains("<b>x</b>"));
    }

    #[test]
    fn empty_input_renders_no_rows() {
        assert_eq!(render_summary_rows(&[]), "");
    }

    #[test]
    fn identical_input_renders_identical_markup() {
        let list = vec![summary("P1", "a", &["t"]), summary("P2", "b", &[])];
        let refs: Vec<&ProblemSummary> = list.iter().collect();
        assert_eq!(render_summary_rows(&refs), render_summary_rows(&refs));
    }

    #[test]
    fn error_row_embeds_the_cause() {
        let row = render_error_row("Failed to load: request failed: timed out");
        assert!(row.contains("colspan=\"3\""));
        assert!(row.contains("Failed to load: request failed: timed out"));
    }

    #[test]
    fn detail_body_is_verbatim_while_tags_are_escaped() {
        let record = detail("T", "https://example.com/p/1", &["<i>t</i>"], "<b>x</b>");
        let view = detail_view(&record, "P1");
        assert_eq!(view.body.as_str(), "<b>x</b>");
        assert!(view.tags_markup.contains("&lt;i&gt;t&lt;/i&gt;"));
        assert_eq!(view.source_href, "https://example.com/p/1");
    }

    #[test]
    fn detail_fallbacks_apply_to_empty_fields() {
        let view = detail_view(&detail("", "", &[], ""), "P42");
        assert_eq!(view.title, "P42");
        assert_eq!(view.source_href, "#");
        assert_eq!(view.body.as_str(), "<p>No content.</p>");
        assert_eq!(view.tags_markup, "");
    }
}
