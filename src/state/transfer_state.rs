// ============================================================================
// TRANSFER STATE - Formulario + máquina de estados + timer de auto-reset
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;
use gloo_timers::callback::Timeout;
use crate::models::{TransferOutcome, TransferRequest};
use crate::viewmodels::transfer_machine::TransferMachine;

/// Programa el auto-reset: recibe la demora y el callback, devuelve el
/// timer a guardar (si hay uno que cancelar después).
pub type ResetScheduler = Rc<dyn Fn(u32, Box<dyn FnOnce()>) -> Option<Timeout>>;

fn browser_scheduler() -> ResetScheduler {
    Rc::new(|after_ms: u32, callback: Box<dyn FnOnce()>| Some(Timeout::new(after_ms, callback)))
}

#[derive(Clone)]
pub struct TransferState {
    pub machine: Rc<RefCell<TransferMachine>>,
    pub recipient: Rc<RefCell<String>>,
    pub amount: Rc<RefCell<String>>,
    /// Timer de auto-reset del envío vivo. Hacer drop del Timeout lo cancela.
    pub reset_timer: Rc<RefCell<Option<Timeout>>>,
    scheduler: Rc<RefCell<ResetScheduler>>,
}

impl TransferState {
    pub fn new(decimals: u8) -> Self {
        Self {
            machine: Rc::new(RefCell::new(TransferMachine::new(decimals))),
            recipient: Rc::new(RefCell::new(String::new())),
            amount: Rc::new(RefCell::new(String::new())),
            reset_timer: Rc::new(RefCell::new(None)),
            scheduler: Rc::new(RefCell::new(browser_scheduler())),
        }
    }

    /// Outcome vivo
    pub fn get_outcome(&self) -> TransferOutcome {
        self.machine.borrow().outcome().clone()
    }

    /// Formulario actual
    pub fn get_request(&self) -> TransferRequest {
        TransferRequest::new(self.recipient.borrow().clone(), self.amount.borrow().clone())
    }

    pub fn set_recipient(&self, value: String) {
        *self.recipient.borrow_mut() = value;
    }

    pub fn set_amount(&self, value: String) {
        *self.amount.borrow_mut() = value;
    }

    /// Vaciar destinatario y monto
    pub fn clear_form(&self) {
        self.recipient.borrow_mut().clear();
        self.amount.borrow_mut().clear();
    }

    /// Cambiar cómo se crean los timers de auto-reset
    pub fn set_scheduler(&self, scheduler: ResetScheduler) {
        *self.scheduler.borrow_mut() = scheduler;
    }

    /// Cancelar el timer pendiente (si hay)
    pub fn cancel_reset(&self) {
        if let Some(timer) = self.reset_timer.borrow_mut().take() {
            let _ = timer.cancel();
        }
    }

    /// Reemplazar el timer pendiente por uno nuevo
    pub fn schedule_reset(&self, after_ms: u32, callback: Box<dyn FnOnce()>) {
        self.cancel_reset();
        let scheduler = self.scheduler.borrow().clone();
        let timer = scheduler(after_ms, callback);
        *self.reset_timer.borrow_mut() = timer;
    }
}
