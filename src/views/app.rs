// ============================================================================
// APP VIEW - Layout principal
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;
use crate::dom::ElementBuilder;
use crate::state::AppState;
use crate::views::{render_transfer_panel, render_wallet_connect};

/// Renderizar la app completa
pub fn render_app(state: &AppState) -> Result<Element, JsValue> {
    let header = ElementBuilder::new("header")?
        .class("app-header")
        .child(ElementBuilder::new("h1")?.text("Frost Coin").build())?
        .child(ElementBuilder::leaf("p", "app-tagline", "A chillingly cool cryptocurrency")?)?
        .build();

    // Panel de transferencia o aviso de conexión
    let content = if state.wallet.is_connected() {
        render_transfer_panel(state)?
    } else {
        ElementBuilder::new("div")?
            .class("connect-prompt")
            .child(ElementBuilder::new("p")?.text("Please connect your wallet to access your tokens").build())?
            .build()
    };

    let card = ElementBuilder::new("main")?
        .class("wallet-card")
        .child(
            ElementBuilder::new("div")?
                .class("wallet-card__banner")
                .child(ElementBuilder::leaf("div", "wallet-card__avatar", "❄️")?)?
                .build(),
        )?
        .child(
            ElementBuilder::new("div")?
                .class("wallet-card__body")
                .child(render_wallet_connect(state)?)?
                .child(content)?
                .build(),
        )?
        .build();

    let footer = ElementBuilder::new("footer")?
        .class("app-footer")
        .child(ElementBuilder::new("p")?.text("Frost Coin - Cool your crypto portfolio ❄️").build())?
        .build();

    Ok(ElementBuilder::new("div")?
        .class("app-shell")
        .child(header)?
        .child(card)?
        .child(footer)?
        .build())
}
