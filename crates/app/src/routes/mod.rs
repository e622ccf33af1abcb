pub mod dashboard;
pub mod fallback;
pub mod login;
pub mod placeholder;

use dioxus::prelude::*;
use shared_types::{Module, Screen};

use dashboard::Dashboard;
use fallback::Fallback;
use login::Login;
use placeholder::{Notices, Packages, Pets, Visitors};

/// Application routes. Anything unmatched shows the login screen.
#[derive(Clone, Routable, Debug, PartialEq)]
pub enum Route {
    #[route("/")]
    Login {},
    #[route("/dashboard")]
    Dashboard {},
    // ── Module placeholders ──
    #[route("/avisos")]
    Notices {},
    #[route("/encomendas")]
    Packages {},
    #[route("/visitantes")]
    Visitors {},
    #[route("/pets")]
    Pets {},
    #[route("/:..segments")]
    Fallback { segments: Vec<String> },
}

impl From<Screen> for Route {
    fn from(screen: Screen) -> Self {
        match screen {
            Screen::Login => Route::Login {},
            Screen::Dashboard => Route::Dashboard {},
            Screen::Placeholder(module) => Route::for_module(module),
        }
    }
}

impl Route {
    /// Route serving a dashboard module's page.
    pub fn for_module(module: Module) -> Self {
        match module {
            Module::Notices => Route::Notices {},
            Module::Packages => Route::Packages {},
            Module::Visitors => Route::Visitors {},
            Module::Pets => Route::Pets {},
        }
    }
}

/// Server-render the router as if the browser were sitting at `path`.
#[cfg(test)]
pub(crate) fn render_route(path: &str) -> String {
    use dioxus_history::{History, MemoryHistory};
    use std::rc::Rc;

    let mut dom = VirtualDom::new(|| rsx! { Router::<Route> {} });
    dom.provide_root_context(Rc::new(MemoryHistory::with_initial_path(path)) as Rc<dyn History>);
    dom.rebuild_in_place();
    dioxus_ssr::render(&dom)
}
