use dioxus::prelude::*;

use crate::config::MenuConfig;
use crate::menu::{load_menu, ExpandState, MenuLoad};
use crate::menu_client::SupabaseMenuClient;

#[derive(Clone, Copy)]
pub struct MenuState {
    pub load: Signal<MenuLoad>,
    pub expanded: Signal<ExpandState>,
}

/// Menu data and open/closed flags for one mounted menu.
///
/// The fetch is spawned once, when the hook first runs. The task is owned by
/// the calling component's scope, so it is dropped if the menu unmounts first.
pub fn use_menu_state() -> MenuState {
    let mut load = use_signal(|| MenuLoad::Loading);
    let expanded = use_signal(ExpandState::new);

    use_hook(move || {
        spawn(async move {
            let outcome = match MenuConfig::from_build_env() {
                Ok(config) => load_menu(&SupabaseMenuClient::new(config)).await,
                Err(e) => {
                    tracing::warn!("Menu source unavailable: {}", e);
                    MenuLoad::failed(&e)
                }
            };
            load.set(outcome);
        })
    });

    MenuState { load, expanded }
}

impl MenuState {
    /// Flip the submenu flag for `id`
    pub fn toggle(&mut self, id: i64) -> bool {
        self.expanded.write().toggle(id)
    }

    pub fn is_expanded(&self, id: i64) -> bool {
        self.expanded.read().is_expanded(id)
    }
}
