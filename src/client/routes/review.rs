use std::{cell::RefCell, collections::HashSet, rc::Rc};

use dioxus::document::{Meta, Title};
use dioxus::prelude::*;
use dioxus_logger::tracing;

use crate::{
    client::{
        components::{schedule_dismiss, DetailsModal, NoticeBanner, Page, RequestTable},
        store::{AppContext, UserState},
    },
    model::{
        approval::{ApprovalStage, ReviewAction},
        request::TireRequest,
    },
    service::{
        notice::NoticeBoard,
        poll::{PollConfig, Poller},
        review::ReviewService,
        table::filter_for_stage,
    },
};

#[component]
pub fn Review() -> Element {
    let context = use_context::<AppContext>();
    let user_state = use_context::<Signal<UserState>>();

    let mut requests = use_signal(Vec::<TireRequest>::new);
    let mut busy = use_signal(HashSet::<i64>::new);
    let mut notices = use_signal(NoticeBoard::default);
    let mut selected = use_signal(|| None::<TireRequest>);

    let poll_config = PollConfig::from_config(&context.config);
    let poller =
        use_hook(move || Rc::new(RefCell::new(Poller::<ApprovalStage>::new(poll_config))));

    let stage = user_state.read().review_stage();

    let api = context.api.clone();
    let watch_poller = poller.clone();
    use_effect(use_reactive!(|(stage,)| {
        let api = api.clone();
        let task = watch_poller.borrow_mut().watch(
            stage,
            move |_| {
                let api = api.clone();
                async move { api.get_requests().await }
            },
            move |items| requests.set(items),
        );

        if let Some(task) = task {
            spawn(task);
        }
    }));

    let drop_poller = poller.clone();
    use_drop(move || drop_poller.borrow_mut().stop());

    let review_api = context.api.clone();
    let dismiss_after = context.config.notice_dismiss();
    let decide = use_callback(move |(request, action): (TireRequest, ReviewAction)| {
        let Some(stage) = user_state.read().review_stage() else {
            return;
        };

        // One pending decision per request
        if !busy.write().insert(request.id) {
            return;
        }

        let api = review_api.clone();
        spawn(async move {
            let result = ReviewService::new(&api)
                .review(&request, stage, action)
                .await;
            busy.write().remove(&request.id);

            match result {
                Ok(updated) => {
                    let verb = match action {
                        ReviewAction::Approve => "approved",
                        ReviewAction::Reject => "rejected",
                    };
                    let message = format!("Request #{} {}", updated.id, verb);

                    if let Some(existing) = requests
                        .write()
                        .iter_mut()
                        .find(|existing| existing.id == updated.id)
                    {
                        *existing = updated;
                    }

                    let serial = notices.write().success(message);
                    schedule_dismiss(notices, serial, dismiss_after);
                }
                Err(e) => {
                    tracing::warn!("Review of request #{} failed: {}", request.id, e);

                    let serial = notices.write().error(&e);
                    schedule_dismiss(notices, serial, dismiss_after);
                }
            }
        });
    });

    let state = user_state.read();

    let body = if !state.fetched {
        rsx!(
            div { class: "flex justify-center p-8",
                span { class: "loading loading-spinner loading-lg" }
            }
        )
    } else if let Some(stage) = stage {
        let all = requests.read().clone();
        let awaiting = filter_for_stage(&all, stage);
        let title = format!("Awaiting {} Review", stage.label());

        rsx!(
            NoticeBanner { board: notices }
            RequestTable {
                title,
                requests: awaiting,
                busy: busy.read().clone(),
                on_view: move |request: TireRequest| selected.set(Some(request)),
                on_approve: move |request: TireRequest| decide.call((request, ReviewAction::Approve)),
                on_reject: move |request: TireRequest| decide.call((request, ReviewAction::Reject)),
            }
            RequestTable {
                title: "All Requests".to_string(),
                requests: all,
                on_view: move |request: TireRequest| selected.set(Some(request)),
            }
        )
    } else {
        rsx!(
            div { class: "card shadow-sm w-full",
                div { class: "card-body items-center",
                    p { "You do not have access to review tire requests." }
                }
            }
        )
    };

    let modal = selected.read().clone();

    rsx!(
        Title { "Review | TireFlow" }
        Meta {
            name: "description",
            content: "Review and approve tire replacement requests."
        }
        Page { title: "Tire Request Review".to_string(),
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
