use super::Page;
use crate::models::Props;
use crate::routes;
use maud::{Markup, html};

/// About page.
pub struct About;

impl Page for About {
    fn title(&self) -> &'static str {
        "About"
    }

    fn render(&self, _props: &Props) -> Markup {
        html! {
            section class="page page-about" {
                h1 { "About" }
                nav {
                    a href=(routes::INDEX) { "Back" }
                }
            }
        }
    }
}
