use std::collections::HashSet;

use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::{
    FaChevronDown, FaChevronUp, FaCircleCheck, FaCircleXmark, FaEye,
};
use dioxus_free_icons::Icon;

use crate::{
    client::components::StatusCell,
    model::request::TireRequest,
    service::table::{SortDirection, SortField, TableState},
    util::time::{format_date, format_date_str},
};

/// Sortable request table with expandable rows.
///
/// Every row can open the details modal; approve/reject buttons are only rendered when both
/// handlers are bound. Rows whose id is in
/// `busy` have their actions disabled while a decision is in flight.
#[component]
pub fn RequestTable(
    title: String,
    requests: Vec<TireRequest>,
    #[props(default)] busy: HashSet<i64>,
    on_view: EventHandler<TireRequest>,
    on_approve: Option<EventHandler<TireRequest>>,
    on_reject: Option<EventHandler<TireRequest>>,
) -> Element {
    let mut table = use_signal(TableState::default);

    let count = requests.len();

    let state = table.read().clone();
    let rows: Vec<TireRequest> = state.sorted(&requests).into_iter().cloned().collect();

    rsx!(
        div {
            class: "card shadow-sm w-full",
            div {
                class: "card-body",
                div { class: "flex items-center justify-between",
                    h2 { class: "card-title", "{title}" }
                    span { class: "text-sm opacity-70", "{count} requests" }
                }
                div {
                    class: "overflow-x-auto",
                    table {
                        class: "table table-md",
                        thead {
                            tr {
                                SortHeader { label: "Date", field: SortField::SubmittedAt, table }
                                SortHeader { label: "Vehicle Info", field: SortField::VehicleNumber, table }
                                SortHeader { label: "Requester", field: SortField::RequesterName, table }
                                SortHeader { label: "Quantity", field: SortField::Quantity, table }
                                SortHeader { label: "Status", field: SortField::Status, table }
                                th { "Request Details" }
                                th { class: "text-right", "Actions" }
                            }
                        }
                        tbody {
                            for request in rows {
                                RequestRow {
                                    key: "{request.id}",
                                    expanded: state.is_expanded(request.id),
                                    busy: busy.contains(&request.id),
                                    on_toggle: move |id| table.write().toggle_row(id),
                                    on_view,
                                    on_approve,
                                    on_reject,
                                    request: request.clone(),
                                }
                            }
                        }
                    }
                }
            }
        }
    )
}

#[component]
fn SortHeader(label: &'static str, field: SortField, table: Signal<TableState>) -> Element {
    let state = table.read();
    let indicator = if state.sort_field() != field {
        ""
    } else {
        match state.sort_direction() {
            SortDirection::Ascending => " ▲",
            SortDirection::Descending => " ▼",
        }
    };

    rsx!(
        th {
            class: "cursor-pointer select-none",
            onclick: move |_| table.write().sort_by(field),
            "{label}{indicator}"
        }
    )
}

#[component]
fn RequestRow(
    request: TireRequest,
    expanded: bool,
    busy: bool,
    on_toggle: EventHandler<i64>,
    on_view: EventHandler<TireRequest>,
    on_approve: Option<EventHandler<TireRequest>>,
    on_reject: Option<EventHandler<TireRequest>>,
) -> Element {
    let id = request.id;
    let submitted = format_date(request.submitted_at.as_ref());
    let last_replaced = format_date_str(request.last_replacement_date.as_deref());
    let wear_pattern = request.tire_wear_pattern.clone().unwrap_or_default();
    let year = request.year.map(|year| year.to_string()).unwrap_or_default();

    let view_request = request.clone();
    let approve_request = request.clone();
    let reject_request = request.clone();

    rsx!(
        tr {
            class: "hover",
            td { class: "whitespace-nowrap", "{submitted}" }
            td {
                div { class: "font-medium", "{request.vehicle_number}" }
                div { class: "text-xs opacity-70", "{request.vehicle_brand} {request.vehicle_model}" }
            }
            td {
                div { class: "font-medium", "{request.requester_name}" }
                div { class: "text-xs opacity-70", "{request.user_section}" }
            }
            td { "{request.quantity}" }
            td { StatusCell { request: request.clone() } }
            td {
                button {
                    class: "btn btn-link btn-sm flex items-center gap-2",
                    onclick: move |_| on_toggle.call(id),
                    if expanded {
                        Icon { width: 14, height: 14, icon: FaChevronUp }
                    } else {
                        Icon { width: 14, height: 14, icon: FaChevronDown }
                    }
                    span { "View Details" }
                }
            }
            td { class: "text-right whitespace-nowrap",
                button {
                    class: "btn btn-ghost btn-sm",
                    title: "View Full Details",
                    onclick: move |_| on_view.call(view_request.clone()),
                    Icon { width: 18, height: 18, icon: FaEye }
                }
                if let (Some(on_approve), Some(on_reject)) = (on_approve, on_reject) {
                    button {
                        class: "btn btn-ghost btn-sm text-success",
                        title: "Approve Request",
                        disabled: busy,
                        onclick: move |_| on_approve.call(approve_request.clone()),
                        Icon { width: 18, height: 18, icon: FaCircleCheck }
                    }
                    button {
                        class: "btn btn-ghost btn-sm text-error",
                        title: "Reject Request",
                        disabled: busy,
                        onclick: move |_| on_reject.call(reject_request.clone()),
                        Icon { width: 18, height: 18, icon: FaCircleXmark }
                    }
                }
            }
        }
        if expanded {
            tr {
                td {
                    colspan: "7",
                    class: "bg-base-200",
                    div { class: "grid grid-cols-3 gap-4 text-sm",
                        div { class: "flex flex-col gap-2",
                            h4 { class: "font-medium", "Vehicle Details" }
                            p { span { class: "font-medium", "Number: " } "{request.vehicle_number}" }
                            p { span { class: "font-medium", "Brand/Model: " } "{request.vehicle_brand} {request.vehicle_model}" }
                            p { span { class: "font-medium", "Year: " } "{year}" }
                            p { span { class: "font-medium", "Section: " } "{request.user_section}" }
                            p { span { class: "font-medium", "Cost Center: " } "{request.cost_center}" }
                        }
                        div { class: "flex flex-col gap-2",
                            h4 { class: "font-medium", "Tire Information" }
                            p { span { class: "font-medium", "Size Required: " } "{request.tire_size_required}" }
                            p { span { class: "font-medium", "Quantity: " } "{request.quantity}" }
                            p { span { class: "font-medium", "Tubes: " } "{request.tubes_quantity}" }
                            p { span { class: "font-medium", "Current Make: " } "{request.existing_tire_make}" }
                            p { span { class: "font-medium", "Last Replaced: " } "{last_replaced}" }
                        }
                        div { class: "flex flex-col gap-2",
                            h4 { class: "font-medium", "Additional Details" }
                            p { span { class: "font-medium", "Current KM: " } "{request.present_km_reading}" }
                            p { span { class: "font-medium", "Previous KM: " } "{request.previous_km_reading}" }
                            p { span { class: "font-medium", "Wear Pattern: " } "{wear_pattern}" }
                            p { span { class: "font-medium", "Reason: " } "{request.request_reason}" }
                            if let Some(comments) = request.comments.as_ref().filter(|c| !c.trim().is_empty()) {
                                p { span { class: "font-medium", "Comments: " } "{comments}" }
                            }
                        }
                    }
                }
            }
        }
    )
}
