mod vehicle_contact;
mod vehicle_detail;
mod vehicle_list;

pub use vehicle_contact::VehicleContactPage;
pub use vehicle_detail::VehicleDetailPage;
pub use vehicle_list::VehicleListPage;

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

/// Reads the vehicle id from the current route, zero when absent or
/// malformed. The API rejects zero with a validation error, which the
/// pages surface as-is.
pub(crate) fn route_vehicle_id() -> impl Fn() -> i32 + Copy {
    let params = use_params_map();
    move || {
        params.with(|p| {
            p.get("id")
                .and_then(|raw| raw.parse::<i32>().ok())
                .unwrap_or(0)
        })
    }
}
