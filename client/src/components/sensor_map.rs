//! Sensor location panel.
//!
//! Lists the fixed sensor pins around the map centre. There is no tile map;
//! coordinates are shown as text.

use leptos::prelude::*;

use crate::state::dashboard::{MAP_CENTER, SENSOR_PINS, SensorPin};

fn format_coords(lat: f64, lng: f64) -> String {
    format!("{lat:.4}, {lng:.4}")
}

fn status_class(pin: &SensorPin) -> &'static str {
    if pin.status == "active" { "sensor sensor--active" } else { "sensor sensor--warning" }
}

#[component]
pub fn SensorMap(title: &'static str) -> impl IntoView {
    view! {
        <section class="panel sensor-map">
            <h3 class="panel__title">{title}</h3>
            <p class="sensor-map__center">
                "Centred on " {format_coords(MAP_CENTER.0, MAP_CENTER.1)}
            </p>
            <ul class="sensor-map__list">
                {SENSOR_PINS
                    .iter()
                    .map(|pin| {
                        view! {
                            <li class=status_class(pin)>
                                <span class="sensor__name">{pin.name}</span>
                                <span class="sensor__coords">{format_coords(pin.lat, pin.lng)}</span>
                                <span class="sensor__detail">
                                    {format!("Status: {} • Last detection: {}", pin.status, pin.last_detection)}
                                </span>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        </section>
    }
}
