use adapter_dashboard_leptos::App;
use leptos::prelude::*;
use sensordash_domain::error::DashboardError;
use wasm_bindgen::JsCast;

/// Host element the dashboard mounts into.
const ROOT_ID: &str = "sensordash-root";

fn main() {
    let root = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|doc| doc.get_element_by_id(ROOT_ID))
        .and_then(|el| el.dyn_into::<web_sys::HtmlElement>().ok());

    match root {
        Some(root) => leptos::mount::mount_to(root, App).forget(),
        None => {
            let err = DashboardError::element_not_found(ROOT_ID);
            leptos::logging::warn!("{err}, mounting to <body>");
            leptos::mount::mount_to_body(App);
        }
    }
}
