use serde::{Deserialize, Serialize};
use serde_json::{Map, Value as JsonValue};

/// Props passed through to a page module, unchanged from the route table.
pub type Props = Map<String, JsonValue>;

/// The render instruction payload: which page module to mount and what data
/// to pass it. Serialized into the mounted document's anchor element, or
/// returned bare as JSON when the client asks for it.
#[derive(Debug, Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct RenderInstruction {
    pub view_name: String,
    #[schema(value_type = Object)]
    pub props: Props,
}

/// A single entry of the static route table
#[derive(Debug, Clone)]
pub struct RouteEntry {
    pub path: &'static str,
    pub view_name: &'static str,
    pub props: Props,
}

impl RouteEntry {
    /// The render instruction this entry produces for a matching request.
    pub fn instruction(&self) -> RenderInstruction {
        RenderInstruction {
            view_name: self.view_name.to_string(),
            props: self.props.clone(),
        }
    }
}
