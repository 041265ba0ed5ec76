use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::FaBookOpen;
use dioxus_free_icons::Icon;

use crate::client::router::Route;

#[component]
pub fn LibraryTitleButton() -> Element {
    rsx!(
        Link {
            to: Route::BooksList {},
            div { class: "flex items-center gap-2",
                Icon {
                    width: 24,
                    height: 24,
                    icon: FaBookOpen
                }
                p { class: "text-xl",
                    "Library Catalog"
                }
            }
        }
    )
}
