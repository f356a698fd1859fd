// ============================================================================
// TRANSFER PANEL VIEW - Balance + formulario de transferencia + estado
// ============================================================================
// Los inputs escriben en TransferState sin re-renderizar; solo los cambios
// de la máquina o del balance notifican.
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;
use crate::dom::{input_value, ElementBuilder};
use crate::state::AppState;
use crate::viewmodels::TransferViewModel;

pub const RECIPIENT_INPUT_ID: &str = "transfer-recipient";
pub const AMOUNT_INPUT_ID: &str = "transfer-amount";

pub fn render_transfer_panel(state: &AppState) -> Result<Element, JsValue> {
    let outcome = state.transfer.get_outcome();
    let busy = outcome.phase.is_busy();
    let token = &state.config.token;

    // Balance
    let balance_text = match state.config.contract() {
        Ok(_) => state.balance.get_reading().display(&token.symbol, token.decimals),
        Err(e) => e.to_string(),
    };
    let balance = ElementBuilder::new("div")?
        .class("balance-card")
        .child(ElementBuilder::leaf("span", "balance-label", "Your Balance")?)?
        .child(ElementBuilder::leaf("span", "balance-value", &balance_text)?)?
        .build();

    // Destinatario
    let recipient_state = state.clone();
    let recipient_input = ElementBuilder::new("input")?
        .id(RECIPIENT_INPUT_ID)
        .attr("type", "text")?
        .attr("placeholder", "0x...")?
        .attr("autocomplete", "off")?
        .attr("value", &state.transfer.recipient.borrow())?
        .class("form-input")
        .flag("disabled", busy)?
        .on_input(move |event| {
            if let Some(value) = input_value(&event) {
                recipient_state.transfer.set_recipient(value);
            }
        })?
        .build();

    // Monto
    let amount_state = state.clone();
    let amount_input = ElementBuilder::new("input")?
        .id(AMOUNT_INPUT_ID)
        .attr("type", "number")?
        .attr("placeholder", "0.0")?
        .attr("min", "0")?
        .attr("step", "any")?
        .attr("value", &state.transfer.amount.borrow())?
        .class("form-input")
        .flag("disabled", busy)?
        .on_input(move |event| {
            if let Some(value) = input_value(&event) {
                amount_state.transfer.set_amount(value);
            }
        })?
        .build();

    // Enviar
    let submit_state = state.clone();
    let send_btn = ElementBuilder::new("button")?
        .attr("type", "button")?
        .class("btn-primary btn-send")
        .text(if busy { "Processing..." } else { "Send Tokens" })
        .flag("disabled", busy)?
        .on_click(move |_| TransferViewModel::new().submit(&submit_state))?
        .build();

    // Estado
    let status = match outcome.tone() {
        Some(tone) => Some(
            ElementBuilder::new("div")?
                .class(tone.css_class())
                .attr("role", "status")?
                .text(&outcome.status_message())
                .build(),
        ),
        None => None,
    };

    Ok(ElementBuilder::new("div")?
        .class("transfer-panel")
        .child(balance)?
        .child(ElementBuilder::new("h3")?.text("Transfer Tokens").build())?
        .child(form_group("Recipient Address", RECIPIENT_INPUT_ID, recipient_input)?)?
        .child(form_group(&format!("Amount ({})", token.symbol), AMOUNT_INPUT_ID, amount_input)?)?
        .child(send_btn)?
        .child_opt(status)?
        .build())
}

fn form_group(label: &str, input_id: &str, input: Element) -> Result<Element, JsValue> {
    Ok(ElementBuilder::new("div")?
        .class("form-group")
        .child(ElementBuilder::new("label")?.attr("for", input_id)?.text(label).build())?
        .child(input)?
        .build())
}
