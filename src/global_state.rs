use crate::app::Tab;
use crate::application::CalculatorSession;
use leptos::*;
use once_cell::sync::OnceCell;

pub struct Globals {
    pub session: RwSignal<CalculatorSession>,
    pub active_tab: RwSignal<Tab>,
    pub refreshing: RwSignal<bool>,
}

static GLOBALS: OnceCell<Globals> = OnceCell::new();

pub fn globals() -> &'static Globals {
    GLOBALS.get_or_init(|| Globals {
        session: create_rw_signal(CalculatorSession::new()),
        active_tab: create_rw_signal(Tab::Spot),
        refreshing: create_rw_signal(false),
    })
}
