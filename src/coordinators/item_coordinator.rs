use std::sync::Arc;

use crate::services::{ItemValidator, ValidationMode};
use crate::stores::ItemRepository;
use crate::types::dto::items::ItemForm;
use crate::types::internal::context::RequestContext;
use crate::types::internal::{
    ItemFormViewModel, ItemListViewModel, ListMode, ModelState, Outcome, ViewModel, ViewName,
};

/// Item catalog workflows
///
/// Read-path misses (list, details) are `NotFound`. Misses on lookups that
/// precede a write (update and delete forms) and failed deletes are
/// `BadRequest`. Every failure emits exactly one log event: `error` for
/// lookups and deletes, `warn` for rejected create/update submissions.
pub struct ItemCoordinator {
    item_repository: Arc<dyn ItemRepository>,
    item_validator: ItemValidator,
}

impl ItemCoordinator {
    pub fn new(item_repository: Arc<dyn ItemRepository>, item_validator: ItemValidator) -> Self {
        Self {
            item_repository,
            item_validator,
        }
    }

    pub async fn table(&self, ctx: &RequestContext) -> Outcome {
        self.list(ctx, ListMode::Table).await
    }

    pub async fn grid(&self, ctx: &RequestContext) -> Outcome {
        self.list(ctx, ListMode::Grid).await
    }

    async fn list(&self, ctx: &RequestContext, mode: ListMode) -> Outcome {
        let Some(items) = self.item_repository.get_all().await else {
            tracing::error!(
                request_id = %ctx.request_id,
                client_ip = %ctx.client_ip(),
                mode = mode.as_str(),
                "[ItemCoordinator] Item list not found while executing get_all()"
            );
            return Outcome::NotFound("Item list not found");
        };

        let view = match mode {
            ListMode::Table => ViewName::Table,
            ListMode::Grid => ViewName::Grid,
        };
        Outcome::view(view, ViewModel::ItemList(ItemListViewModel::new(items, mode)))
    }

    pub async fn details(&self, ctx: &RequestContext, id: i32) -> Outcome {
        match self.item_repository.get_item_by_id(id).await {
            Some(item) => Outcome::view(ViewName::Details, ViewModel::Item(item)),
            None => {
                tracing::error!(
                    request_id = %ctx.request_id,
                    client_ip = %ctx.client_ip(),
                    item_id = id,
                    "[ItemCoordinator] Item not found for the ItemId {}",
                    padded_id(id)
                );
                Outcome::NotFound("Item not found for the ItemId")
            }
        }
    }

    pub fn create_form(&self) -> Outcome {
        Outcome::view(ViewName::Create, ViewModel::Form(ItemFormViewModel::default()))
    }

    pub async fn create(&self, ctx: &RequestContext, form: ItemForm) -> Outcome {
        let errors = match self.item_validator.validate(&form, ValidationMode::Create) {
            Ok(item) => {
                if self.item_repository.create(&item).await {
                    return Outcome::RedirectToAction(ViewName::Table);
                }
                Self::save_failed()
            }
            Err(errors) => errors,
        };

        tracing::warn!(
            request_id = %ctx.request_id,
            client_ip = %ctx.client_ip(),
            actor = %ctx.actor_id,
            item = ?form,
            invalid_fields = ?errors.fields().collect::<Vec<_>>(),
            "[ItemCoordinator] Item creation failed"
        );
        Outcome::view(ViewName::Create, ViewModel::Form(ItemFormViewModel::new(form, errors)))
    }

    pub async fn update_form(&self, ctx: &RequestContext, id: i32) -> Outcome {
        match self.item_repository.get_item_by_id(id).await {
            Some(item) => Outcome::view(
                ViewName::Update,
                ViewModel::Form(ItemFormViewModel::new(ItemForm::from(&item), ModelState::new())),
            ),
            None => {
                tracing::error!(
                    request_id = %ctx.request_id,
                    client_ip = %ctx.client_ip(),
                    item_id = id,
                    "[ItemCoordinator] Item not found when updating the ItemId {}",
                    padded_id(id)
                );
                Outcome::BadRequest("Item not found for the ItemId")
            }
        }
    }

    pub async fn update(&self, ctx: &RequestContext, form: ItemForm) -> Outcome {
        let errors = match self.item_validator.validate(&form, ValidationMode::Update) {
            Ok(item) => {
                if self.item_repository.update(&item).await {
                    return Outcome::RedirectToAction(ViewName::Table);
                }
                Self::save_failed()
            }
            Err(errors) => errors,
        };

        tracing::warn!(
            request_id = %ctx.request_id,
            client_ip = %ctx.client_ip(),
            actor = %ctx.actor_id,
            item = ?form,
            invalid_fields = ?errors.fields().collect::<Vec<_>>(),
            "[ItemCoordinator] Item update failed"
        );
        Outcome::view(ViewName::Update, ViewModel::Form(ItemFormViewModel::new(form, errors)))
    }

    pub async fn delete_form(&self, ctx: &RequestContext, id: i32) -> Outcome {
        match self.item_repository.get_item_by_id(id).await {
            Some(item) => Outcome::view(ViewName::Delete, ViewModel::Item(item)),
            None => {
                tracing::error!(
                    request_id = %ctx.request_id,
                    client_ip = %ctx.client_ip(),
                    item_id = id,
                    "[ItemCoordinator] Item not found for the ItemId {}",
                    padded_id(id)
                );
                Outcome::BadRequest("Item not found for the ItemId")
            }
        }
    }

    pub async fn delete_confirmed(&self, ctx: &RequestContext, id: i32) -> Outcome {
        if !self.item_repository.delete(id).await {
            tracing::error!(
                request_id = %ctx.request_id,
                client_ip = %ctx.client_ip(),
                actor = %ctx.actor_id,
                item_id = id,
                "[ItemCoordinator] Item deletion failed for the ItemId {}",
                padded_id(id)
            );
            return Outcome::BadRequest("Item deletion failed");
        }
        Outcome::RedirectToAction(ViewName::Table)
    }

    fn save_failed() -> ModelState {
        let mut state = ModelState::new();
        state.add_error("form", "The item could not be saved. Please try again.");
        state
    }
}

/// Id zero-padded to four digits, sign kept in front (`-5` is `-0005`)
pub(crate) fn padded_id(id: i32) -> String {
    if id < 0 {
        format!("-{:04}", id.unsigned_abs())
    } else {
        format!("{:04}", id)
    }
}
