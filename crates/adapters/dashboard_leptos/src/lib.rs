use std::rc::Rc;

use leptos::prelude::*;
use leptos::task::spawn_local;
use sensordash_app::controller::DashboardController;

pub mod api;
mod components;
mod config;
mod view;

use api::{GlooSensorApi, GlooSleeper};
use components::{ActionButtons, DateFilter, ServiceStatusPanel, TemperatureChart};
use view::SignalView;

type Controller = DashboardController<GlooSensorApi, SignalView>;

/// Handle to the controller shared by every component through context.
#[derive(Clone, Copy)]
pub(crate) struct Dashboard {
    controller: StoredValue<Rc<Controller>, LocalStorage>,
    view: SignalView,
}

impl Dashboard {
    pub(crate) fn controller(&self) -> Rc<Controller> {
        self.controller.get_value()
    }

    pub(crate) fn view(&self) -> SignalView {
        self.view
    }
}

pub(crate) fn use_dashboard() -> Dashboard {
    use_context::<Dashboard>().expect("Dashboard not found in context")
}

/// Root application component.
///
/// Builds the controller, loads the date filter and starts the scheduler
/// loop for the lifetime of the page.
#[component]
pub fn App() -> impl IntoView {
    let settings = config::from_document();
    let view = SignalView::new(&settings.dashboard.series_name);
    let api = GlooSensorApi::new(settings.api_base);
    let controller = Rc::new(DashboardController::new(api, view, &settings.dashboard));

    provide_context(Dashboard {
        controller: StoredValue::new_local(controller.clone()),
        view,
    });

    spawn_local(async move {
        if let Err(err) = controller.initialise().await {
            leptos::logging::warn!("date filter not loaded: {err}");
        }
        controller.run(&GlooSleeper).await;
    });

    view! {
        <main class="dashboard">
            <ActionButtons/>
            <ServiceStatusPanel/>
            <DateFilter/>
            <TemperatureChart/>
        </main>
    }
}
