use dioxus::prelude::*;

#[component]
pub fn Footer() -> Element {
    rsx!(
        footer {
            class: "footer footer-center bg-base-200 p-4",
            p {
                "Library Catalog"
            }
        }
    )
}
