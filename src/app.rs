// ============================================================================
// APP - Aplicación principal
// ============================================================================

use std::cell::Cell;
use gloo_timers::callback::Timeout;
use wasm_bindgen::prelude::*;
use web_sys::Element;
use crate::config::AppConfig;
use crate::dom::{append_child, focus_element_by_id, focused_element_id, get_element_by_id, set_inner_html};
use crate::state::AppState;
use crate::viewmodels::WalletViewModel;
use crate::views::render_app;

thread_local! {
    static RENDER_PENDING: Cell<bool> = Cell::new(false);
}

/// Aplicación principal
pub struct App {
    state: AppState,
    root: Element,
}

impl App {
    /// Crear nueva aplicación
    pub fn new(config: AppConfig) -> Result<Self, JsValue> {
        let root = get_element_by_id("app")
            .ok_or_else(|| JsValue::from_str("No #app element found"))?;

        let state = AppState::new(config);

        // Suscribirse a cambios de estado para re-renderizar automáticamente
        state.subscribe_to_changes(schedule_render);

        Ok(Self { state, root })
    }

    /// Reconectar la sesión previa y escuchar la wallet
    pub fn start(&self) {
        let vm = WalletViewModel::new();
        vm.watch_provider(&self.state);

        let state = self.state.clone();
        wasm_bindgen_futures::spawn_local(async move {
            WalletViewModel::new().restore(&state).await;
        });
    }

    /// Renderizar aplicación (re-render completo)
    pub fn render(&mut self) -> Result<(), JsValue> {
        // Preservar el foco del input que se está editando
        let focused = focused_element_id();

        set_inner_html(&self.root, "");
        let content = render_app(&self.state)?;
        append_child(&self.root, &content)?;

        if let Some(id) = focused {
            focus_element_by_id(&id);
        }
        Ok(())
    }
}

/// Batchear: varias notificaciones en el mismo tick = un solo render
fn schedule_render() {
    if RENDER_PENDING.with(|pending| pending.replace(true)) {
        return;
    }
    Timeout::new(0, || {
        RENDER_PENDING.with(|pending| pending.set(false));
        crate::rerender_app();
    })
    .forget();
}
