use crate::types::internal::ViewModel;

/// Named server-side views
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewName {
    Table,
    Grid,
    Details,
    Create,
    Update,
    Delete,
}

impl ViewName {
    pub fn template_name(&self) -> &'static str {
        match self {
            ViewName::Table => "Table.html",
            ViewName::Grid => "Grid.html",
            ViewName::Details => "Details.html",
            ViewName::Create => "Create.html",
            ViewName::Update => "Update.html",
            ViewName::Delete => "Delete.html",
        }
    }
}

/// Result of one catalog operation, before it becomes an HTTP response
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    View { view: ViewName, model: ViewModel },
    /// Redirect to another catalog action
    RedirectToAction(ViewName),
    NotFound(&'static str),
    BadRequest(&'static str),
}

impl Outcome {
    pub fn view(view: ViewName, model: ViewModel) -> Self {
        Outcome::View { view, model }
    }
}
