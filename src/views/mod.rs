// Views layer - Server-side HTML rendering
mod template_renderer;

pub use template_renderer::TemplateRenderer;

use thiserror::Error;

use crate::types::internal::{ViewModel, ViewName};

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("Template error in {view:?}: {source}")]
    Template {
        view: ViewName,
        #[source]
        source: minijinja::Error,
    },

    #[error("View {view:?} cannot display this model")]
    ModelMismatch { view: ViewName },
}

/// Turns a named view and its model into an HTML body
pub trait ViewRenderer: Send + Sync {
    fn render(&self, view: ViewName, model: &ViewModel) -> Result<String, RenderError>;
}
