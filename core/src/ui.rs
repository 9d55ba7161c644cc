//! Thin rendering adapter: translates counter values into text writes on
//! the two display nodes. Refresh is an explicit step after each mutation,
//! not a reactive binding.

use wasm_bindgen::JsValue;
use web_sys::{Document, Element};

use crate::session::Snapshot;

/// Writes decimal readouts into the `#coins` and `#energy` nodes.
#[derive(Clone)]
pub struct DomDisplay {
    coins_node: Element,
    energy_node: Element,
}

impl DomDisplay {
    /// Resolves both display nodes up front; a page without them cannot run.
    pub fn new(document: &Document) -> Result<DomDisplay, JsValue> {
        Ok(DomDisplay {
            coins_node: require_node(document, "coins")?,
            energy_node: require_node(document, "energy")?,
        })
    }

    /// Overwrites both readouts with the snapshot values.
    pub fn render(&self, snapshot: &Snapshot) {
        self.coins_node
            .set_text_content(Some(&snapshot.coins.to_string()));
        self.energy_node
            .set_text_content(Some(&snapshot.energy.to_string()));
    }
}

fn require_node(document: &Document, id: &str) -> Result<Element, JsValue> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| JsValue::from_str(&format!("missing #{id} element")))
}
