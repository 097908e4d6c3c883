use minijinja::{context, Environment, Value};

use crate::types::internal::{ViewModel, ViewName};
use crate::views::{RenderError, ViewRenderer};

const TEMPLATES: &[(&str, &str)] = &[
    ("_Layout.html", include_str!("templates/_Layout.html")),
    ("_ItemForm.html", include_str!("templates/_ItemForm.html")),
    ("Table.html", include_str!("templates/Table.html")),
    ("Grid.html", include_str!("templates/Grid.html")),
    ("Details.html", include_str!("templates/Details.html")),
    ("Create.html", include_str!("templates/Create.html")),
    ("Update.html", include_str!("templates/Update.html")),
    ("Delete.html", include_str!("templates/Delete.html")),
];

/// minijinja renderer over templates compiled into the binary
pub struct TemplateRenderer {
    env: Environment<'static>,
}

impl TemplateRenderer {
    pub fn new() -> Result<Self, minijinja::Error> {
        let mut env = Environment::new();
        for (name, source) in TEMPLATES {
            env.add_template(name, source)?;
        }
        env.add_filter("price", |value: f64| format!("{:.2}", value));
        Ok(Self { env })
    }

    fn context_for(view: ViewName, model: &ViewModel) -> Result<Value, RenderError> {
        let ctx = match (view, model) {
            (ViewName::Table | ViewName::Grid, ViewModel::ItemList(list)) => context! {
                items => list.items,
                current_view_name => list.current_view_name.as_str(),
            },
            (ViewName::Details | ViewName::Delete, ViewModel::Item(item)) => context! {
                item => item,
            },
            (ViewName::Create | ViewName::Update, ViewModel::Form(vm)) => context! {
                form => vm.form,
                errors => vm.errors,
            },
            _ => return Err(RenderError::ModelMismatch { view }),
        };
        Ok(ctx)
    }
}

impl ViewRenderer for TemplateRenderer {
    fn render(&self, view: ViewName, model: &ViewModel) -> Result<String, RenderError> {
        let ctx = Self::context_for(view, model)?;
        self.env
            .get_template(view.template_name())
            .and_then(|template| template.render(ctx))
            .map_err(|source| RenderError::Template { view, source })
    }
}
