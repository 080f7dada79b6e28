//! Optional external rendering capabilities (code highlighting, math
//! typesetting), resolved once at startup and invoked defensively: absence
//! skips a pass, a thrown exception surfaces as `Err` and is dropped.

use js_sys::{Array, Function, Object, Reflect};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::Element;

/// A global JS function together with its receiver object.
pub struct JsCapability {
    target: JsValue,
    func: Function,
}

impl JsCapability {
    fn call1(&self, arg: &JsValue) -> Result<JsValue, JsValue> {
        self.func.call1(&self.target, arg)
    }

    fn call2(&self, first: &JsValue, second: &JsValue) -> Result<JsValue, JsValue> {
        self.func.call2(&self.target, first, second)
    }
}

pub enum Capability {
    Available(JsCapability),
    Unavailable,
}

impl Capability {
    /// Walks `path` down from `window`; anything other than a function at
    /// the end of the path means the provider is not loaded.
    pub fn lookup(path: &[&str]) -> Self {
        let Some(window) = web_sys::window() else {
            return Self::Unavailable;
        };

        let mut target: JsValue = JsValue::from(window);
        let mut current = target.clone();
        for segment in path {
            if current.is_undefined() || current.is_null() {
                return Self::Unavailable;
            }
            target = current.clone();
            current = match Reflect::get(&current, &JsValue::from_str(segment)) {
                Ok(value) => value,
                Err(_) => return Self::Unavailable,
            };
        }

        match current.dyn_into::<Function>() {
            Ok(func) => Self::Available(JsCapability { target, func }),
            Err(_) => Self::Unavailable,
        }
    }
}

/// Post-processes freshly injected detail content. The two passes are
/// independent; neither can abort the other or the page.
pub fn run_post_processors(content: &Element, highlighter: &Capability, math: &Capability) {
    highlight_code_blocks(content, highlighter);
    typeset_math(content, math);
}

fn highlight_code_blocks(content: &Element, highlighter: &Capability) {
    let Capability::Available(handle) = highlighter else {
        return;
    };
    let Ok(blocks) = content.query_selector_all("pre code") else {
        return;
    };

    for idx in 0..blocks.length() {
        let Some(block) = blocks.item(idx) else {
            continue;
        };
        // One throwing block must not stop the remaining blocks.
        let _ = handle.call1(&JsValue::from(block));
    }
}

fn typeset_math(content: &Element, math: &Capability) {
    let Capability::Available(handle) = math else {
        return;
    };
    let _ = handle.call2(&JsValue::from(content.clone()), &math_options().into());
}

fn math_options() -> Object {
    let delimiters = Array::new();
    for (left, right, display) in [
        ("$$", "$$", true),
        ("$", "$", false),
        ("\\(", "\\)", false),
        ("\\[", "\\]", true),
    ] {
        let delimiter = Object::new();
        let _ = Reflect::set(&delimiter, &"left".into(), &left.into());
        let _ = Reflect::set(&delimiter, &"right".into(), &right.into());
        let _ = Reflect::set(&delimiter, &"display".into(), &JsValue::from_bool(display));
        delimiters.push(&delimiter);
    }

    let options = Object::new();
    let _ = Reflect::set(&options, &"delimiters".into(), &delimiters);
    let _ = Reflect::set(&options, &"throwOnError".into(), &JsValue::FALSE);
    options
}
