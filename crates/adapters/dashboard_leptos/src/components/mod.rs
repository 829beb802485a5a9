mod action_buttons;
mod date_filter;
mod service_status;
mod temperature_chart;

pub use action_buttons::ActionButtons;
pub use date_filter::DateFilter;
pub use service_status::ServiceStatusPanel;
pub use temperature_chart::TemperatureChart;
