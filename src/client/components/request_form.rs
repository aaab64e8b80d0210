use dioxus::prelude::*;
use dioxus_logger::tracing;

use crate::{
    client::{
        components::{notice::schedule_dismiss, NoticeBanner},
        router::Route,
        store::{AppContext, UserState},
    },
    error::Error,
    model::{
        request::{
            ImageUpload, TireRequest, WearPattern, MAX_IMAGES, MAX_QUANTITY, MAX_TUBES, MIN_QUANTITY,
        },
        vehicle::Vehicle,
    },
    service::{
        form::{RequestForm, VehicleMatch},
        notice::NoticeBoard,
        registry::VehicleRegistry,
        submission::{SubmissionGate, SubmissionService},
    },
    util::time::sleep,
};

const MAX_SUGGESTIONS: usize = 10;

/// Tire replacement request form.
///
/// Loads the vehicle registry on mount. `on_submitted` receives the created record as soon as
/// the backend accepts it; `on_close` fires once the success notice has been shown.
#[component]
pub fn TireRequestForm(
    on_submitted: EventHandler<TireRequest>,
    on_close: EventHandler<()>,
) -> Element {
    let context = use_context::<AppContext>();
    let user_state = use_context::<Signal<UserState>>();
    let navigator = use_navigator();

    let mut form = use_signal(RequestForm::default);
    let mut notices = use_signal(NoticeBoard::default);
    let mut submitting = use_signal(|| false);
    let mut show_suggestions = use_signal(|| false);
    let submit_gate = use_hook(SubmissionGate::new);

    let vehicle_api = context.api.clone();
    let vehicles = use_resource(move || {
        let api = vehicle_api.clone();
        async move { api.get_vehicles().await }
    });

    let registry = use_memo(move || match &*vehicles.read() {
        Some(Ok(vehicles)) => VehicleRegistry::new(vehicles.clone()),
        Some(Err(e)) => {
            tracing::error!("Failed to load vehicle registry: {}", e);
            VehicleRegistry::default()
        }
        None => VehicleRegistry::default(),
    });

    // Re-check the typed number whenever the registry (re)loads
    use_effect(move || {
        let registry = registry.read();
        form.write().refresh_vehicle(&registry);
    });

    let api = context.api.clone();
    let config = context.config.clone();
    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();

        if submit_gate.is_busy() {
            return;
        }

        let api = api.clone();
        let config = config.clone();
        let gate = submit_gate.clone();
        let user = user_state.read().user.clone();
        let snapshot = form.read().clone();
        let registry = registry.read().clone();

        spawn(async move {
            submitting.set(true);
            let result = SubmissionService::new(&api, &registry, &gate)
                .submit(user.as_ref(), &snapshot)
                .await;
            submitting.set(false);

            match result {
                Ok(created) => {
                    let serial = notices
                        .write()
                        .success("Tire request submitted successfully!");
                    schedule_dismiss(notices, serial, config.notice_dismiss());
                    form.set(RequestForm::default());
                    on_submitted.call(created);

                    sleep(config.success_close()).await;
                    on_close.call(());
                }
                Err(Error::SubmissionInProgress) => {
                    tracing::debug!("Ignoring submit while another submission is in flight");
                }
                Err(e) => {
                    tracing::warn!("Tire request not submitted: {}", e);

                    let serial = notices.write().error(&e);
                    schedule_dismiss(notices, serial, config.notice_dismiss());

                    if e.requires_login() {
                        navigator.push(Route::Home {});
                    }
                }
            }
        });
    };

    if vehicles.read().is_none() {
        return rsx!(
            div { class: "card shadow-sm w-full",
                div { class: "card-body flex flex-row items-center gap-2",
                    span { class: "loading loading-spinner" }
                    p { "Loading vehicles..." }
                }
            }
        );
    }

    if registry.read().is_empty() {
        return rsx!(
            div { class: "card shadow-sm w-full",
                div { class: "card-body",
                    h2 { class: "card-title", "Tire Replacement Approval Request" }
                    div { role: "alert", class: "alert alert-error",
                        "No vehicles found. Please contact your administrator."
                    }
                }
            }
        );
    }

    let state = form.read().clone();
    let suggestions: Vec<Vehicle> = if state.vehicle_match() == VehicleMatch::Found {
        Vec::new()
    } else {
        registry
            .read()
            .suggest(state.vehicle_number())
            .into_iter()
            .take(MAX_SUGGESTIONS)
            .cloned()
            .collect()
    };
    let blocked = state.vehicle_blocked() || *submitting.read();

    rsx!(
        div { class: "card shadow-sm w-full relative",
            if *submitting.read() {
                div { class: "fixed inset-0 z-50 flex items-center justify-center bg-black/40",
                    div { class: "flex flex-col items-center gap-4",
                        span { class: "loading loading-spinner loading-lg" }
                        span { class: "text-lg font-semibold text-white", "Processing..." }
                    }
                }
            }
            div { class: "card-body",
                h2 { class: "card-title text-2xl", "Tire Replacement Approval Request" }
                NoticeBanner { board: notices }
                form {
                    class: "flex flex-col gap-6",
                    onsubmit: on_submit,

                    section { class: "p-4 rounded-lg bg-base-200",
                        h3 { class: "text-lg font-semibold mb-3", "Your Information" }
                        div { class: "grid grid-cols-1 md:grid-cols-3 gap-4",
                            Field {
                                label: "Requester Name",
                                id: "requesterName",
                                value: state.requester_name.clone(),
                                oninput: move |value| form.write().requester_name = value,
                            }
                            Field {
                                label: "Email",
                                id: "requesterEmail",
                                input_type: "email",
                                value: state.requester_email.clone(),
                                oninput: move |value| form.write().requester_email = value,
                            }
                            Field {
                                label: "Phone",
                                id: "requesterPhone",
                                input_type: "tel",
                                value: state.requester_phone.clone(),
                                oninput: move |value| form.write().requester_phone = value,
                            }
                            Field {
                                label: "Section",
                                id: "userSection",
                                value: state.user_section.clone(),
                                oninput: move |value| form.write().user_section = value,
                            }
                            Field {
                                label: "Cost Center",
                                id: "costCenter",
                                value: state.cost_center.clone(),
                                oninput: move |value| form.write().cost_center = value,
                            }
                        }
                    }

                    section { class: "grid grid-cols-1 md:grid-cols-3 gap-4",
                        div { class: "form-control relative",
                            label { class: "label", r#for: "vehicleNumber",
                                span { class: "label-text font-bold", "Vehicle Number" }
                            }
                            input {
                                id: "vehicleNumber",
                                name: "vehicleNumber",
                                class: "input input-bordered w-full",
                                placeholder: "Type vehicle number",
                                autocomplete: "off",
                                required: true,
                                value: state.vehicle_number().to_string(),
                                oninput: move |evt: FormEvent| {
                                    let registry = registry.read();
                                    form.write().set_vehicle_number(evt.value(), &registry);
                                    show_suggestions.set(true);
                                },
                                onfocus: move |_| show_suggestions.set(true),
                                onblur: move |_| {
                                    show_suggestions.set(false);
                                    form.write().touch_vehicle();
                                },
                            }
                            if *show_suggestions.read() && !suggestions.is_empty() {
                                ul { class: "menu bg-base-100 rounded-box shadow absolute top-full z-30 w-full max-h-60 overflow-y-auto",
                                    {suggestions.into_iter().map(|vehicle| {
                                        let key = vehicle.id;
                                        let number = vehicle.vehicle_number.clone();
                                        rsx!(
                                            li { key: "{key}",
                                                a {
                                                    // mousedown fires before the input's blur hides the list
                                                    onmousedown: move |evt: MouseEvent| {
                                                        evt.prevent_default();
                                                        form.write().select_suggestion(&vehicle);
                                                        show_suggestions.set(false);
                                                    },
                                                    "{number}"
                                                }
                                            }
                                        )
                                    })}
                                }
                            }
                            if state.show_vehicle_not_found() {
                                p { class: "text-error text-sm mt-1",
                                    "Vehicle number not found. Please select a valid vehicle from the list."
                                }
                            }
                        }
                        Field { label: "Year", id: "year", value: state.year().to_string(), readonly: true }
                        Field { label: "Vehicle Brand", id: "vehicleBrand", value: state.vehicle_brand().to_string(), readonly: true }
                        Field { label: "Vehicle Model", id: "vehicleModel", value: state.vehicle_model().to_string(), readonly: true }
                        Field { label: "Tire Size Required", id: "tireSizeRequired", value: state.tire_size_required().to_string(), readonly: true }
                        Field {
                            label: "Existing Tire Make",
                            id: "existingTireMake",
                            value: state.existing_tire_make.clone(),
                            oninput: move |value| form.write().existing_tire_make = value,
                        }
                        Field {
                            label: "Quantity",
                            id: "quantity",
                            input_type: "number",
                            min: MIN_QUANTITY,
                            max: MAX_QUANTITY,
                            value: state.quantity.clone(),
                            oninput: move |value| form.write().quantity = value,
                        }
                        Field {
                            label: "Tubes Quantity",
                            id: "tubesQuantity",
                            input_type: "number",
                            min: 0,
                            max: MAX_TUBES,
                            value: state.tubes_quantity.clone(),
                            oninput: move |value| form.write().tubes_quantity = value,
                        }
                        Field {
                            label: "Last Replacement Date",
                            id: "lastReplacementDate",
                            input_type: "date",
                            value: state.last_replacement_date.clone(),
                            oninput: move |value| form.write().last_replacement_date = value,
                        }
                        Field {
                            label: "Present KM Reading",
                            id: "presentKmReading",
                            input_type: "number",
                            value: state.present_km_reading.clone(),
                            oninput: move |value| form.write().present_km_reading = value,
                        }
                        Field {
                            label: "KM Reading at Previous Tire Replacement",
                            id: "previousKmReading",
                            input_type: "number",
                            value: state.previous_km_reading.clone(),
                            oninput: move |value| form.write().previous_km_reading = value,
                        }
                    }

                    section {
                        h3 { class: "text-lg font-semibold mb-3", "Tire Wear Indicator" }
                        div { class: "grid grid-cols-2 md:grid-cols-4 gap-3",
                            for pattern in WearPattern::ALL {
                                label { class: "flex items-center gap-2 cursor-pointer",
                                    input {
                                        r#type: "radio",
                                        name: "tireWearPattern",
                                        class: "radio radio-primary",
                                        value: pattern.as_str(),
                                        checked: state.tire_wear_pattern == Some(pattern),
                                        onchange: move |_| form.write().tire_wear_pattern = Some(pattern),
                                    }
                                    span { {pattern.as_str()} }
                                }
                            }
                        }
                    }

                    TextArea {
                        label: "Comments",
                        id: "comments",
                        value: state.comments.clone(),
                        required: false,
                        oninput: move |value| form.write().comments = value,
                    }

                    section {
                        h3 { class: "text-lg font-semibold mb-3", "Upload Images" }
                        div { class: "grid grid-cols-1 md:grid-cols-2 gap-4",
                            for slot in 0..MAX_IMAGES {
                                ImageSlot {
                                    slot,
                                    selected: state.images()[slot].as_ref().map(|image| image.file_name.clone()),
                                    on_select: move |image: ImageUpload| {
                                        if let Err(e) = form.write().set_image(slot, image) {
                                            tracing::error!("Failed to attach image: {}", e);
                                        }
                                    },
                                    on_clear: move |_| {
                                        if let Err(e) = form.write().clear_image(slot) {
                                            tracing::error!("Failed to remove image: {}", e);
                                        }
                                    },
                                }
                            }
                        }
                    }

                    TextArea {
                        label: "Reason for Request",
                        id: "requestReason",
                        value: state.request_reason.clone(),
                        placeholder: "Please explain why new tires are needed...",
                        oninput: move |value| form.write().request_reason = value,
                    }

                    button {
                        r#type: "submit",
                        class: "btn btn-primary w-full",
                        disabled: blocked,
                        "Submit Approval Request"
                    }
                }
            }
        }
    )
}

#[component]
fn Field(
    label: &'static str,
    id: &'static str,
    value: String,
    #[props(default = "text")] input_type: &'static str,
    #[props(default)] readonly: bool,
    min: Option<u32>,
    max: Option<u32>,
    oninput: Option<EventHandler<String>>,
) -> Element {
    let min = min.map(|min| min.to_string());
    let max = max.map(|max| max.to_string());

    rsx!(
        div { class: "form-control",
            label { class: "label", r#for: id,
                span { class: "label-text font-bold", "{label}" }
            }
            input {
                id: id,
                name: id,
                r#type: input_type,
                class: if readonly { "input input-bordered w-full bg-base-200" } else { "input input-bordered w-full" },
                value: "{value}",
                min: min,
                max: max,
                readonly: readonly,
                required: !readonly,
                oninput: move |evt: FormEvent| {
                    if let Some(handler) = oninput {
                        handler.call(evt.value());
                    }
                },
            }
        }
    )
}

#[component]
fn TextArea(
    label: &'static str,
    id: &'static str,
    value: String,
    #[props(default = true)] required: bool,
    #[props(default)] placeholder: &'static str,
    oninput: EventHandler<String>,
) -> Element {
    rsx!(
        div { class: "form-control",
            label { class: "label", r#for: id,
                span { class: "label-text font-bold", "{label}" }
            }
            textarea {
                id: id,
                name: id,
                class: "textarea textarea-bordered w-full",
                rows: "4",
                placeholder: placeholder,
                required: required,
                value: "{value}",
                oninput: move |evt: FormEvent| oninput.call(evt.value()),
            }
        }
    )
}

#[component]
fn ImageSlot(
    slot: usize,
    selected: Option<String>,
    on_select: EventHandler<ImageUpload>,
    on_clear: EventHandler<()>,
) -> Element {
    let number = slot + 1;
    let id = format!("image-{}", slot);

    let handle_file = move |evt: FormEvent| async move {
        let files = evt.files();
        let Some(file) = files.first() else {
            on_clear.call(());
            return;
        };

        let file_name = file.name();
        let content_type = file
            .content_type()
            .unwrap_or_else(|| "application/octet-stream".to_string());

        match file.read_bytes().await {
            Ok(bytes) => on_select.call(ImageUpload {
                file_name,
                content_type,
                bytes: bytes.to_vec(),
            }),
            Err(_) => tracing::error!("Failed to read image {}", file_name),
        }
    };

    rsx!(
        div { class: "form-control",
            label { class: "label", r#for: "{id}",
                span { class: "label-text font-bold", "Image {number}" }
                if let Some(name) = selected {
                    span { class: "label-text-alt flex items-center gap-2",
                        "{name}"
                        button {
                            r#type: "button",
                            class: "btn btn-ghost btn-xs",
                            onclick: move |_| on_clear.call(()),
                            "Remove"
                        }
                    }
                }
            }
            input {
                id: "{id}",
                r#type: "file",
                accept: "image/*",
                class: "file-input file-input-bordered w-full",
                onchange: handle_file,
            }
        }
    )
}
