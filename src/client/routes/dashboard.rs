use std::{cell::RefCell, rc::Rc};

use dioxus::document::{Meta, Title};
use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::FaEye;
use dioxus_free_icons::Icon;

use crate::{
    client::{
        components::{DetailsModal, HowItWorks, Page, StatusCell, TireRequestForm},
        store::{AppContext, UserState},
    },
    model::request::TireRequest,
    service::{
        poll::{PollConfig, Poller},
        table::TableState,
    },
    util::time::format_date,
};

#[component]
pub fn Dashboard() -> Element {
    let context = use_context::<AppContext>();
    let user_state = use_context::<Signal<UserState>>();

    let mut requests = use_signal(Vec::<TireRequest>::new);
    let mut loaded = use_signal(|| false);
    let mut show_form = use_signal(|| false);
    let mut selected = use_signal(|| None::<TireRequest>);

    let poll_config = PollConfig::from_config(&context.config);
    let poller = use_hook(move || Rc::new(RefCell::new(Poller::<i64>::new(poll_config))));

    let user_id = user_state.read().user_id();

    // Restart polling whenever the signed-in user changes
    let api = context.api.clone();
    let watch_poller = poller.clone();
    use_effect(use_reactive!(|(user_id,)| {
        let api = api.clone();
        let task = watch_poller.borrow_mut().watch(
            user_id,
            move |id| {
                let api = api.clone();
                async move { api.get_user_requests(id).await }
            },
            move |items| {
                requests.set(items);
                loaded.set(true);
            },
        );

        if let Some(task) = task {
            spawn(task);
        }
    }));

    let drop_poller = poller.clone();
    use_drop(move || drop_poller.borrow_mut().stop());

    let state = user_state.read();

    let body = if !state.fetched {
        rsx!(
            div { class: "flex justify-center p-8",
                span { class: "loading loading-spinner loading-lg" }
            }
        )
    } else if state.user.is_none() {
        rsx!(
            div { class: "card shadow-sm w-full",
                div { class: "card-body items-center",
                    p { "Please log in to view your tire requests." }
                    a { href: context.api.login_url(),
                        button { class: "btn btn-primary", "Login" }
                    }
                }
            }
        )
    } else {
        let list = requests.read().clone();

        rsx!(
            div { class: "flex items-center justify-between",
                h1 { class: "text-2xl font-bold", "My Tire Requests" }
                button {
                    class: if *show_form.read() { "btn btn-outline" } else { "btn btn-primary" },
                    onclick: move |_| {
                        let open = *show_form.read();
                        show_form.set(!open);
                    },
                    if *show_form.read() { "Cancel" } else { "New Tire Request" }
                }
            }

            if *show_form.read() {
                TireRequestForm {
                    on_submitted: move |created: TireRequest| requests.write().insert(0, created),
                    on_close: move |_| show_form.set(false),
                }
            }

            if !*loaded.read() {
                div { class: "flex justify-center p-8",
                    span { class: "loading loading-spinner loading-lg" }
                }
            } else if list.is_empty() {
                div { class: "card shadow-sm w-full",
                    div { class: "card-body items-center text-center",
                        p { "You haven't made any tire requests yet." }
                        if !*show_form.read() {
                            button {
                                class: "btn btn-primary",
                                onclick: move |_| show_form.set(true),
                                "Make Your First Request"
                            }
                        }
                    }
                }
            } else {
                UserRequestTable {
                    requests: list,
                    on_view: move |request: TireRequest| selected.set(Some(request)),
                }
            }

            HowItWorks { }
        )
    };

    let modal = selected.read().clone();

    rsx!(
        Title { "My Requests | TireFlow" }
        Meta {
            name: "description",
            content: "Track your tire replacement requests."
        }
        Page {
            {body}
        }
        if let Some(request) = modal {
            DetailsModal {
                request,
                on_close: move |_| selected.set(None),
            }
        }
    )
}

/// Compact, newest-first table of the signed-in user's own requests.
#[component]
fn UserRequestTable(requests: Vec<TireRequest>, on_view: EventHandler<TireRequest>) -> Element {
    let rows: Vec<TireRequest> = TableState::default()
        .sorted(&requests)
        .into_iter()
        .cloned()
        .collect();

    rsx!(
        div { class: "card shadow-sm w-full",
            div { class: "card-body overflow-x-auto",
                table { class: "table table-md",
                    thead {
                        tr {
                            th { "ID" }
                            th { "Vehicle" }
                            th { "Tire Details" }
                            th { "Status" }
                            th { "Date" }
                            th { class: "text-right", "Actions" }
                        }
                    }
                    tbody {
                        for request in rows {
                            UserRequestRow {
                                key: "{request.id}",
                                request: request.clone(),
                                on_view,
                            }
                        }
                    }
                }
            }
        }
    )
}

#[component]
fn UserRequestRow(request: TireRequest, on_view: EventHandler<TireRequest>) -> Element {
    let submitted = format_date(request.submitted_at.as_ref());
    let tire_size = request.display_tire_size().to_string();
    let view = request.clone();

    rsx!(
        tr {
            td { "#{request.id}" }
            td {
                p { class: "font-semibold", "{request.vehicle_number}" }
                p { class: "text-sm opacity-70", "{request.vehicle_brand} {request.vehicle_model}" }
            }
            td {
                p { "{tire_size}" }
                p { class: "text-sm opacity-70", "Qty: {request.quantity}" }
            }
            td { StatusCell { request: request.clone() } }
            td { "{submitted}" }
            td { class: "text-right",
                button {
                    class: "btn btn-ghost btn-sm",
                    onclick: move |_| on_view.call(view.clone()),
                    Icon { width: 16, height: 16, icon: FaEye }
                    "View"
                }
            }
        }
    )
}
