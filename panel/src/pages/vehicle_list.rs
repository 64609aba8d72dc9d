use crate::app::api;
use client::types::{VehicleListQuery, VehicleSummary};
use leptos::prelude::*;

const PAGE_SIZE: i32 = 20;

#[component]
pub fn VehicleListPage() -> impl IntoView {
    let (page, set_page) = signal(1);
    let (year_min, set_year_min) = signal(String::new());
    let (year_max, set_year_max) = signal(String::new());
    let (price_min, set_price_min) = signal(String::new());
    let (price_max, set_price_max) = signal(String::new());
    let (featured_only, set_featured_only) = signal(false);
    let (sort_by, set_sort_by) = signal("dateCreated".to_string());
    let (sort_order, set_sort_order) = signal("DESC".to_string());

    let vehicles = LocalResource::new(move || {
        let query = VehicleListQuery {
            year_min: year_min.get().parse().ok(),
            year_max: year_max.get().parse().ok(),
            price_min: price_min.get().parse().ok(),
            price_max: price_max.get().parse().ok(),
            featured_only: featured_only.get().then_some(true),
            sort_by: Some(sort_by.get()),
            sort_order: Some(sort_order.get()),
            page: Some(page.get()),
            page_size: Some(PAGE_SIZE),
            ..Default::default()
        };
        async move { api().vehicle_list(&query).await }
    });

    view! {
        <div class="catalog">
            <h1>"Vehicle catalog"</h1>
            <form class="filters" on:submit=move |ev| ev.prevent_default()>
                <input
                    type="number"
                    placeholder="Year from"
                    prop:value=year_min
                    on:input=move |ev| {
                        set_year_min.set(event_target_value(&ev));
                        set_page.set(1);
                    }
                />
                <input
                    type="number"
                    placeholder="Year to"
                    prop:value=year_max
                    on:input=move |ev| {
                        set_year_max.set(event_target_value(&ev));
                        set_page.set(1);
                    }
                />
                <input
                    type="number"
                    placeholder="Price from"
                    prop:value=price_min
                    on:input=move |ev| {
                        set_price_min.set(event_target_value(&ev));
                        set_page.set(1);
                    }
                />
                <input
                    type="number"
                    placeholder="Price to"
                    prop:value=price_max
                    on:input=move |ev| {
                        set_price_max.set(event_target_value(&ev));
                        set_page.set(1);
                    }
                />
                <label>
                    <input
                        type="checkbox"
                        prop:checked=featured_only
                        on:change=move |ev| {
                            set_featured_only.set(event_target_checked(&ev));
                            set_page.set(1);
                        }
                    />
                    "Featured only"
                </label>
                <select on:change=move |ev| {
                    set_sort_by.set(event_target_value(&ev));
                    set_page.set(1);
                }>
                    <option value="dateCreated" selected=true>"Newest"</option>
                    <option value="price">"Price"</option>
                    <option value="year">"Year"</option>
                    <option value="model">"Model"</option>
                    <option value="mileage">"Mileage"</option>
                </select>
                <select on:change=move |ev| set_sort_order.set(event_target_value(&ev))>
                    <option value="DESC" selected=true>"Descending"</option>
                    <option value="ASC">"Ascending"</option>
                </select>
            </form>

            <Suspense fallback=|| view! { <p>"Loading..."</p> }>
                {move || match vehicles.read().as_deref() {
                    Some(Ok(data)) => {
                        let total_pages = data.total_pages;
                        let cards = data
                            .vehicles
                            .clone()
                            .into_iter()
                            .map(vehicle_card)
                            .collect::<Vec<_>>();
                        view! {
                            <div>
                                <p class="total">{format!("{} vehicles found", data.total)}</p>
                                <ul class="vehicle-cards">{cards}</ul>
                                <div class="pager">
                                    <button
                                        disabled=move || page.get() <= 1
                                        on:click=move |_| set_page.update(|p| *p -= 1)
                                    >
                                        "Previous"
                                    </button>
                                    <span>
                                        {move || {
                                            format!("page {} of {}", page.get(), total_pages.max(1))
                                        }}
                                    </span>
                                    <button
                                        disabled=move || i64::from(page.get()) >= total_pages
                                        on:click=move |_| set_page.update(|p| *p += 1)
                                    >
                                        "Next"
                                    </button>
                                </div>
                            </div>
                        }
                            .into_any()
                    }
                    Some(Err(e)) => {
                        view! { <p class="error">{format!("Failed to load vehicles: {e}")}</p> }
                            .into_any()
                    }
                    None => view! { <p>"Loading..."</p> }.into_any(),
                }}
            </Suspense>
        </div>
    }
}

fn vehicle_card(vehicle: VehicleSummary) -> impl IntoView {
    let href = format!("/vehicle/{}", vehicle.id_vehicle);
    view! {
        <li class="vehicle-card">
            <a href=href>
                {vehicle
                    .primary_image_url
                    .clone()
                    .map(|url| view! { <img src=url alt="vehicle" /> })}
                <h2>{format!("{} {} {}", vehicle.brand_name, vehicle.model, vehicle.year)}</h2>
                <p>{format!("{:.2} - {} km", vehicle.price, vehicle.mileage)}</p>
                <p>
                    {format!(
                        "{} | {} | {}",
                        vehicle.fuel_type_name,
                        vehicle.transmission_name,
                        vehicle.color_name,
                    )}
                </p>
            </a>
        </li>
    }
}
