//! Liveness check button and status indicator.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::use_dashboard;
use crate::view::ServiceState;

fn text_class(state: &ServiceState) -> &'static str {
    match state {
        ServiceState::Unchecked => "",
        ServiceState::Checked(status) => status.text_class(),
        ServiceState::Failed(_) => "text-red",
    }
}

fn indicator_class(state: &ServiceState) -> String {
    match state {
        ServiceState::Unchecked => "status-indicator".to_string(),
        ServiceState::Checked(status) => format!("status-indicator {}", status.indicator_class()),
        ServiceState::Failed(_) => "status-indicator status-red".to_string(),
    }
}

fn status_text(state: &ServiceState) -> String {
    match state {
        ServiceState::Unchecked => String::new(),
        ServiceState::Checked(status) => status.label().to_string(),
        ServiceState::Failed(message) => message.clone(),
    }
}

/// `check-state` button with the coloured status text and indicator.
#[component]
pub fn ServiceStatusPanel() -> impl IntoView {
    let dashboard = use_dashboard();
    let service = dashboard.view().service;

    view! {
        <section class="service-status">
            <button
                id="check-state"
                class="btn btn-secondary"
                on:click=move |_| {
                    let controller = dashboard.controller();
                    spawn_local(async move {
                        // Result is already on the status element.
                        let _ = controller.check_liveness().await;
                    });
                }
            >
                "Check state"
            </button>
            <span id="service-status-color" class=move || service.with(text_class)>
                {move || service.with(status_text)}
            </span>
            <span id="service-status-circle">
                <span class=move || service.with(indicator_class)></span>
            </span>
        </section>
    }
}
