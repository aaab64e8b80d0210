use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::FaXmark;
use dioxus_free_icons::Icon;

use crate::{
    client::components::StatusBadge,
    model::request::TireRequest,
    service::details::RequestDetails,
};

#[component]
pub fn DetailsModal(request: TireRequest, on_close: EventHandler<()>) -> Element {
    let details = RequestDetails::from(&request);

    rsx!(
        div {
            class: "modal modal-open",
            div {
                class: "modal-box w-11/12 max-w-4xl",
                div { class: "flex items-center justify-between border-b pb-2 mb-4",
                    div { class: "flex items-center gap-3",
                        h3 { class: "text-xl font-bold", "Request Details #{request.id}" }
                        StatusBadge { status: request.status.clone() }
                    }
                    button {
                        class: "btn btn-ghost btn-sm",
                        onclick: move |_| on_close.call(()),
                        Icon { width: 20, height: 20, icon: FaXmark }
                    }
                }
                div { class: "grid grid-cols-1 md:grid-cols-2 gap-6 max-h-[70vh] overflow-y-auto",
                    for section in details.sections {
                        div { class: "p-4 rounded-lg bg-base-200",
                            h3 { class: "text-lg font-semibold border-b pb-2 mb-3", "{section.title}" }
                            div { class: "flex flex-col gap-3",
                                for row in section.rows {
                                    div {
                                        p { class: "text-sm font-semibold opacity-70", "{row.label}" }
                                        p {
                                            class: if row.multiline { "whitespace-pre-line" } else { "" },
                                            "{row.value}"
                                        }
                                    }
                                }
                            }
                        }
                    }
                    if !details.images.is_empty() {
                        div { class: "p-4 rounded-lg bg-base-200 md:col-span-2",
                            h3 { class: "text-lg font-semibold border-b pb-2 mb-3", "Attached Images" }
                            div { class: "grid grid-cols-2 md:grid-cols-4 gap-2",
                                for image in details.images {
                                    div { class: "p-1 border rounded",
                                        img {
                                            src: "{image.url}",
                                            alt: "Tire condition {image.number}",
                                            class: "object-cover w-full h-24",
                                        }
                                        p { class: "mt-1 text-xs text-center", "Image {image.number}" }
                                    }
                                }
                            }
                        }
                    }
                }
            }
            div { class: "modal-backdrop", onclick: move |_| on_close.call(()) }
        }
    )
}
