//! Buzzer and LED buttons.

use leptos::prelude::*;
use leptos::task::spawn_local;
use sensordash_domain::action::DeviceAction;

use crate::use_dashboard;

/// One button per [`DeviceAction`]; the controller reports the response on
/// the action status line.
#[component]
pub fn ActionButtons() -> impl IntoView {
    let dashboard = use_dashboard();
    let status = dashboard.view().action_status;

    view! {
        <section class="actions">
            {DeviceAction::ALL
                .into_iter()
                .map(|action| {
                    view! {
                        <button
                            id=action.element_id()
                            class="btn btn-primary"
                            on:click=move |_| {
                                let controller = dashboard.controller();
                                spawn_local(async move {
                                    // Result is already on the status line.
                                    let _ = controller.trigger_action(action).await;
                                });
                            }
                        >
                            {action.label()}
                        </button>
                    }
                })
                .collect_view()}
            <Show when=move || status.get().is_some()>
                <p class="action-status">{move || status.get().unwrap_or_default()}</p>
            </Show>
        </section>
    }
}
