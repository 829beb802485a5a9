//! Day / month / year selectors and the apply button.

use leptos::prelude::*;
use leptos::task::spawn_local;
use sensordash_app::controller::RefreshOutcome;
use sensordash_domain::date_options::{DateOptions, SelectOption};
use sensordash_domain::filter::Field;

use crate::use_dashboard;

fn options_for(options: &DateOptions, field: Field) -> Vec<SelectOption> {
    match field {
        Field::Day => options.days.clone(),
        Field::Month => options.months.clone(),
        Field::Year => options.years.clone(),
    }
}

/// A selector whose first option is always the field's placeholder.
#[component]
fn FieldSelect(field: Field) -> impl IntoView {
    let dashboard = use_dashboard();
    let options = dashboard.view().options;
    let placeholder = field.placeholder();

    view! {
        <select
            id=field.element_id()
            class="form-select"
            on:change=move |ev| {
                dashboard.controller().select(field, &event_target_value(&ev));
            }
        >
            <option value=placeholder selected=true>{placeholder}</option>
            <For
                each=move || options_for(&options.get(), field)
                key=|option| option.value.clone()
                let(option)
            >
                <option value=option.value>{option.label}</option>
            </For>
        </select>
    }
}

/// Filter controls plus the entry-count progress line.
#[component]
pub fn DateFilter() -> impl IntoView {
    let dashboard = use_dashboard();
    let view = dashboard.view();

    let on_apply = move |_| {
        let controller = dashboard.controller();
        spawn_local(async move {
            match controller.apply().await {
                Ok(RefreshOutcome::AlreadyInFlight) => {
                    leptos::logging::log!("refresh already in flight, click ignored");
                }
                Ok(RefreshOutcome::Updated { .. }) => {}
                Err(err) => leptos::logging::warn!("{err}"),
            }
        });
    };

    view! {
        <section class="date-filter">
            <FieldSelect field=Field::Day/>
            <FieldSelect field=Field::Month/>
            <FieldSelect field=Field::Year/>
            <button
                id="apply-btn"
                class="btn btn-primary"
                prop:disabled=move || !view.apply_enabled.get()
                on:click=on_apply
            >
                "Apply"
            </button>
            <p id="entry-count">{move || view.entry_status.get()}</p>
        </section>
    }
}
