use crate::app::api;
use crate::pages::route_vehicle_id;
use client::types::{VehicleDetail, VehicleImage};
use leptos::prelude::*;

#[component]
pub fn VehicleDetailPage() -> impl IntoView {
    let id = route_vehicle_id();

    let detail = LocalResource::new(move || {
        let id_vehicle = id();
        async move { api().vehicle_get(id_vehicle).await }
    });

    view! {
        <div class="vehicle-detail">
            <a href="/">"Back to catalog"</a>
            <Suspense fallback=|| view! { <p>"Loading..."</p> }>
                {move || match detail.read().as_deref() {
                    Some(Ok(data)) => {
                        view! {
                            <div>
                                {gallery(data.images.clone())}
                                {specifications(data.vehicle.clone())}
                                <a href=format!(
                                    "/vehicle/{}/contact",
                                    data.vehicle.id_vehicle,
                                )>"Ask about this vehicle"</a>
                            </div>
                        }
                            .into_any()
                    }
                    Some(Err(e)) => {
                        view! { <p class="error">{format!("Failed to load vehicle: {e}")}</p> }
                            .into_any()
                    }
                    None => view! { <p>"Loading..."</p> }.into_any(),
                }}
            </Suspense>
        </div>
    }
}

/// Display order is a UI concern: primary image first, then by the store's
/// display order.
fn gallery(mut images: Vec<VehicleImage>) -> impl IntoView {
    images.sort_by(|a, b| {
        b.is_primary
            .cmp(&a.is_primary)
            .then(a.display_order.cmp(&b.display_order))
    });

    view! {
        <ul class="gallery">
            {images
                .into_iter()
                .map(|image| {
                    view! {
                        <li class=("primary", image.is_primary)>
                            <img src=image.image_url alt="vehicle" />
                        </li>
                    }
                })
                .collect::<Vec<_>>()}
        </ul>
    }
}

fn specifications(vehicle: VehicleDetail) -> impl IntoView {
    let engine_size = vehicle
        .engine_size
        .map(|size| format!("{size:.1} l"))
        .unwrap_or_else(|| "-".into());
    let doors = vehicle
        .doors
        .map(|doors| doors.to_string())
        .unwrap_or_else(|| "-".into());

    view! {
        <div class="specifications">
            <h1>{format!("{} {} {}", vehicle.brand_name, vehicle.model, vehicle.year)}</h1>
            <p class="price">{format!("{:.2}", vehicle.price)}</p>
            <table>
                <tr>
                    <th>"Mileage"</th>
                    <td>{format!("{} km", vehicle.mileage)}</td>
                </tr>
                <tr>
                    <th>"Fuel"</th>
                    <td>{vehicle.fuel_type_name.clone()}</td>
                </tr>
                <tr>
                    <th>"Transmission"</th>
                    <td>{vehicle.transmission_name.clone()}</td>
                </tr>
                <tr>
                    <th>"Color"</th>
                    <td>{vehicle.color_name.clone()}</td>
                </tr>
                <tr>
                    <th>"Engine"</th>
                    <td>{engine_size}</td>
                </tr>
                <tr>
                    <th>"Doors"</th>
                    <td>{doors}</td>
                </tr>
            </table>
            <p class="description">{vehicle.description.clone()}</p>
        </div>
    }
}
