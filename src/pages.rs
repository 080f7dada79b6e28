//! Page wiring: one fetch at initialization, then synchronous
//! reduce → filter → render on every input event. Each init function bails
//! when its page shell is absent, so the same binary serves both pages.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen_futures::spawn_local;

use crate::capability::{self, Capability};
use crate::dom;
use crate::fetch::fetch_json;
use crate::models::{ProblemDetail, ProblemSummary};
use crate::query::{self, QueryEvent, QueryState};
use crate::render;

const LIST_DATA_URL: &str = "../data/problems.json";

fn detail_data_url(id: &str) -> String {
    format!("../data/problems/{}.json", encode_component(id))
}

fn encode_component(input: &str) -> String {
    js_sys::encode_uri_component(input)
        .as_string()
        .unwrap_or_else(|| input.to_string())
}

pub fn init_list_page() {
    if dom::element("problem-rows").is_none() {
        return;
    }

    spawn_local(async move {
        match fetch_json::<Vec<ProblemSummary>>(LIST_DATA_URL).await {
            Ok(list) => {
                for tag in query::tag_vocabulary(&list) {
                    dom::append_option("tag-filter", &tag);
                }

                let list = Rc::new(list);
                let state = Rc::new(RefCell::new(QueryState::default()));
                rerender_list(&list, &state.borrow());
                install_filter_handlers(list, state);
            }
            Err(err) => {
                dom::set_hidden("empty-indicator", true);
                dom::set_markup(
                    "problem-rows",
                    &render::render_error_row(&format!("Failed to load: {err}")),
                );
            }
        }
    });
}

fn rerender_list(list: &[ProblemSummary], state: &QueryState) {
    let filtered = query::filter_summaries(list, state);
    dom::set_hidden("empty-indicator", !filtered.is_empty());
    dom::set_markup("problem-rows", &render::render_summary_rows(&filtered));
}

fn install_filter_handlers(list: Rc<Vec<ProblemSummary>>, state: Rc<RefCell<QueryState>>) {
    {
        let list = list.clone();
        let state = state.clone();
        dom::listen("search-input", "input", move |_event| {
            let event = QueryEvent::TermChanged(dom::input_value("search-input"));
            let next = state.borrow().clone().apply(event);
            *state.borrow_mut() = next;
            rerender_list(&list, &state.borrow());
        });
    }

    dom::listen("tag-filter", "change", move |_event| {
        let event = QueryEvent::TagSelected(dom::select_value("tag-filter"));
        let next = state.borrow().clone().apply(event);
        *state.borrow_mut() = next;
        rerender_list(&list, &state.borrow());
    });
}

pub fn init_detail_page() {
    if dom::element("problem-content").is_none() {
        return;
    }

    let id = current_problem_id();
    if id.trim().is_empty() {
        dom::set_text("problem-title", "No problem id specified");
        return;
    }

    // Resolved once at startup; the passes themselves tolerate absence.
    let highlighter = Capability::lookup(&["hljs", "highlightElement"]);
    let math = Capability::lookup(&["renderMathInElement"]);

    spawn_local(async move {
        match fetch_json::<ProblemDetail>(&detail_data_url(&id)).await {
            Ok(record) => {
                let view = render::detail_view(&record, &id);
                dom::set_text("problem-title", &view.title);
                dom::set_attr("source-link", "href", &view.source_href);
                dom::set_markup("problem-tags", &view.tags_markup);
                dom::set_markup("problem-content", view.body.as_str());

                if let Some(content) = dom::element("problem-content") {
                    capability::run_post_processors(&content, &highlighter, &math);
                }
            }
            Err(err) => {
                dom::set_text("problem-title", &format!("Failed to load: {err}"));
            }
        }
    });
}

fn current_problem_id() -> String {
    let Some(window) = web_sys::window() else {
        return String::new();
    };
    let search = window.location().search().unwrap_or_default();
    query::query_param(&search, "id")
}
