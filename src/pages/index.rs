use super::Page;
use crate::models::Props;
use crate::routes;
use maud::{Markup, html};

/// Landing page.
pub struct Index;

impl Page for Index {
    fn title(&self) -> &'static str {
        "Index"
    }

    fn render(&self, _props: &Props) -> Markup {
        html! {
            section class="page page-index" {
                h1 { "GOFRA" }
                p { "Welcome." }
                nav {
                    a href=(routes::ABOUT) { "About" }
                }
            }
        }
    }
}
