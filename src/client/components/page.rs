use dioxus::prelude::*;

/// Page body below the fixed navbar, optionally headed by `title`.
#[component]
pub fn Page(class: Option<&'static str>, title: Option<String>, children: Element) -> Element {
    let class: &str = class.unwrap_or("");

    rsx!(
        div {
            class: "min-h-screen pt-[64px] p-4 {class}",
            div { class: "w-full max-w-[1280px] mx-auto flex flex-col gap-6 py-4",
                if let Some(title) = title {
                    h1 { class: "text-2xl font-bold", "{title}" }
                }
                {children}
            }
        }
    )
}
