//! Page mount bootstrap: resolves the named page module, wraps it in the
//! transition decorator, and renders the composed tree into the document's
//! anchor element, with the render instruction serialized alongside.

use crate::error::ApiError;
use crate::models::{Props, RenderInstruction};
use crate::pages::PageRegistry;
use maud::{DOCTYPE, Markup, PreEscaped, html};

/// Accent color of the navigation progress indicator.
pub const PROGRESS_COLOR: &str = "#4B5563";

/// Name of the transition wrapper every page is nested inside.
pub const TRANSITION_DECORATOR: &str = "PageTransition";

/// Id of the anchor element the composed tree is mounted into.
pub const APP_ANCHOR: &str = "app";

/// One node of a composed render tree.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderNode {
    pub component: String,
    pub props: Props,
    pub children: Vec<RenderNode>,
}

/// Display title: `"<page title> - <application name>"`.
pub fn document_title(page_title: &str, app_name: &str) -> String {
    format!("{page_title} - {app_name}")
}

/// Compose the render tree for an instruction: the transition decorator,
/// carrying no props of its own, wrapping the page component with the
/// request props unchanged.
pub fn compose(instruction: &RenderInstruction) -> RenderNode {
    RenderNode {
        component: TRANSITION_DECORATOR.to_string(),
        props: Props::new(),
        children: vec![RenderNode {
            component: instruction.view_name.clone(),
            props: instruction.props.clone(),
            children: Vec::new(),
        }],
    }
}

/// Mounts render instructions into full HTML documents.
pub struct Bootstrap<'a> {
    registry: &'a PageRegistry,
    app_name: &'a str,
}

impl<'a> Bootstrap<'a> {
    pub fn new(registry: &'a PageRegistry, app_name: &'a str) -> Self {
        Bootstrap { registry, app_name }
    }

    /// Resolve, compose and mount. Runs once per request; the mount suspends
    /// on page resolution and a resolution failure is fatal to the attempt,
    /// so no document is produced, partial or otherwise.
    pub async fn mount(&self, instruction: &RenderInstruction) -> Result<Markup, ApiError> {
        let page = self.registry.resolve(&instruction.view_name)?;
        let tree = compose(instruction);
        let content = self.render_tree(&tree)?;
        let title = document_title(page.title(), self.app_name);
        let payload = serde_json::to_string(instruction)?;
        Ok(self.document(&title, &payload, content))
    }

    /// Walk the composed tree. Decorator nodes render as the transition
    /// wrapper element; every other component name resolves through the
    /// registry to a page module.
    fn render_tree(&self, node: &RenderNode) -> Result<Markup, ApiError> {
        if node.component == TRANSITION_DECORATOR {
            let mut inner = String::new();
            for child in &node.children {
                inner.push_str(&self.render_tree(child)?.into_string());
            }
            return Ok(html! {
                div class="page-transition" {
                    (PreEscaped(inner))
                }
            });
        }

        let page = self.registry.resolve(&node.component)?;
        Ok(page.render(&node.props))
    }

    fn document(&self, title: &str, payload: &str, content: Markup) -> Markup {
        html! {
            (DOCTYPE)
            html lang="en" {
                head {
                    meta charset="utf-8";
                    meta name="viewport" content="width=device-width, initial-scale=1";
                    title { (title) }
                    style { (PreEscaped(progress_style())) }
                }
                body {
                    div id="progress" {}
                    div id=(APP_ANCHOR) data-page=(payload) {
                        (content)
                    }
                }
            }
        }
    }
}

fn progress_style() -> String {
    format!(
        "#progress{{position:fixed;top:0;left:0;height:2px;width:0;background:{PROGRESS_COLOR};}}"
    )
}
