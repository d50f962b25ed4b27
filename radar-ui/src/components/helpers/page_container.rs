//! Page container component

use dioxus::prelude::*;

/// Centered page container with consistent padding
#[component]
pub fn PageContainer(children: Element) -> Element {
    rsx! {
        main { class: "p-8 max-w-6xl mx-auto", {children} }
    }
}
