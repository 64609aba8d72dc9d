use crate::app::api;
use crate::pages::route_vehicle_id;
use client::types::ContactFormPayload;
use leptos::prelude::*;

#[component]
pub fn VehicleContactPage() -> impl IntoView {
    let id = route_vehicle_id();

    let (name, set_name) = signal(String::new());
    let (email, set_email) = signal(String::new());
    let (phone, set_phone) = signal(String::new());
    let (message, set_message) = signal(String::new());
    let (pending, set_pending) = signal(false);
    let (outcome, set_outcome) = signal(None::<Result<i32, String>>);

    let submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if pending.get() {
            return;
        }
        let payload = ContactFormPayload {
            id_vehicle: id(),
            name: name.get(),
            email: email.get(),
            phone: phone.get(),
            message: message.get(),
        };
        set_pending.set(true);
        leptos::task::spawn_local(async move {
            let result = api()
                .contact_form_create(&payload)
                .await
                .map(|created| created.id_contact_form)
                .map_err(|e| e.to_string());
            set_outcome.set(Some(result));
            set_pending.set(false);
        });
    };

    view! {
        <div class="contact">
            <a href=move || format!("/vehicle/{}", id())>"Back to vehicle"</a>
            <h1>"Ask about this vehicle"</h1>
            <form on:submit=submit>
                <input
                    type="text"
                    placeholder="Name"
                    prop:value=name
                    on:input=move |ev| set_name.set(event_target_value(&ev))
                />
                <input
                    type="email"
                    placeholder="Email"
                    prop:value=email
                    on:input=move |ev| set_email.set(event_target_value(&ev))
                />
                <input
                    type="tel"
                    placeholder="Phone"
                    prop:value=phone
                    on:input=move |ev| set_phone.set(event_target_value(&ev))
                />
                <textarea
                    placeholder="Message"
                    prop:value=message
                    on:input=move |ev| set_message.set(event_target_value(&ev))
                />
                <button type="submit" disabled=pending>
                    {move || if pending.get() { "Sending..." } else { "Send" }}
                </button>
            </form>
            {move || {
                outcome
                    .get()
                    .map(|result| match result {
                        Ok(id_contact_form) => {
                            view! {
                                <p class="success">
                                    {format!("Inquiry #{id_contact_form} sent. We will be in touch.")}
                                </p>
                            }
                                .into_any()
                        }
                        Err(error) => {
                            view! {
                                <p class="error">{format!("Could not send inquiry: {error}")}</p>
                            }
                                .into_any()
                        }
                    })
            }}
        </div>
    }
}
