use folio_core::catalog::Catalog;
use folio_core::navigation::{self, AnchorOffsets};
use folio_core::tree::build_tree;
use wasm_bindgen::prelude::*;

/// The built-in portfolio tree as JSON.
#[wasm_bindgen]
pub fn portfolio_tree() -> String {
    let tree = build_tree(Catalog::builtin().entries());
    serde_json::to_string(&tree).unwrap_or_else(|_| "{}".to_string())
}

/// Active section name for one scroll sample. Negative anchor offsets mean
/// "not measured yet".
#[wasm_bindgen]
pub fn active_section(
    scroll_y: f32,
    viewport_height: f32,
    knowledge_top: f32,
    portfolio_top: f32,
    contact_top: f32,
) -> String {
    let measured = |top: f32| (top >= 0.0).then_some(top);
    let anchors = AnchorOffsets {
        knowledge: measured(knowledge_top),
        portfolio: measured(portfolio_top),
        contact: measured(contact_top),
    };
    navigation::active_section(scroll_y, viewport_height, &anchors)
        .as_str()
        .to_string()
}

#[wasm_bindgen]
pub fn scrolled_past_threshold(scroll_y: f32, viewport_height: f32) -> bool {
    navigation::scrolled_past_threshold(scroll_y, viewport_height)
}
