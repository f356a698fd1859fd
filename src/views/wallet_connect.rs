// ============================================================================
// WALLET CONNECT VIEW - Botón de conexión / cuenta conectada
// ============================================================================

use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::Element;
use crate::dom::ElementBuilder;
use crate::state::AppState;
use crate::utils::shorten_address;
use crate::viewmodels::WalletViewModel;

pub fn render_wallet_connect(state: &AppState) -> Result<Element, JsValue> {
    let session = state.wallet.get_session();

    match session.active_address() {
        Some(address) => {
            let identity = ElementBuilder::new("div")?
                .class("wallet-identity")
                .child(ElementBuilder::leaf("span", "wallet-identity__icon", "👤")?)?
                .child(
                    ElementBuilder::new("p")?
                        .class("wallet-address")
                        .attr("title", &address.to_checksum(None))?
                        .text(&shorten_address(&address))
                        .build(),
                )?
                .build();

            let disconnect_state = state.clone();
            let disconnect_btn = ElementBuilder::new("button")?
                .attr("type", "button")?
                .class("btn-secondary")
                .text("Disconnect")
                .on_click(move |_| WalletViewModel::new().disconnect(&disconnect_state))?
                .build();

            let warning = if session.is_on_chain(&state.config.chain_id) {
                None
            } else {
                Some(ElementBuilder::leaf(
                    "p",
                    "wallet-warning",
                    &format!("Wrong network: switch your wallet to chain {}", state.config.chain_id),
                )?)
            };

            Ok(ElementBuilder::new("div")?
                .class("wallet-connected")
                .child(identity)?
                .child(disconnect_btn)?
                .child_opt(warning)?
                .build())
        }
        None => {
            let connecting = state.wallet.get_connecting();

            let connect_state = state.clone();
            let connect_btn = ElementBuilder::new("button")?
                .attr("type", "button")?
                .class("btn-primary")
                .text(if connecting { "Connecting..." } else { "Connect Wallet" })
                .flag("disabled", connecting)?
                .on_click(move |_| {
                    let state = connect_state.clone();
                    spawn_local(async move {
                        WalletViewModel::new().connect(&state).await;
                    });
                })?
                .build();

            let error = match state.wallet.get_connect_error() {
                Some(error) => Some(ElementBuilder::leaf("p", "wallet-error", &error)?),
                None => None,
            };

            Ok(ElementBuilder::new("div")?
                .class("wallet-disconnected")
                .child(ElementBuilder::new("p")?
                    .text(&format!(
                        "Connect your wallet to manage your {} tokens",
                        state.config.token.symbol
                    ))
                    .build())?
                .child(connect_btn)?
                .child_opt(error)?
                .build())
        }
    }
}
