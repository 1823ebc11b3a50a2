use crate::db::postgres_service::PostgresService;
use crate::types::error::AppError;
use crate::types::form::{DBFormCreate, DBFormUpdate, FormAccess};
use chrono::Utc;
use entity::form::{ActiveModel as FormActive, Entity as Form, Model as FormModel};
use entity::form_user::{ActiveModel as FormUserActive, Entity as FormUser};
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, Set, TransactionTrait};
use uuid::Uuid;

impl PostgresService {
    pub async fn form_member_ids(&self, form_id: &Uuid) -> Result<Vec<Uuid>, AppError> {
        Ok(FormUser::find()
            .filter(entity::form_user::Column::FormId.eq(*form_id))
            .all(&self.db)
            .await?
            .into_iter()
            .map(|row| row.user_id)
            .collect())
    }

    /// An absent form is a plain `None`, not an error.
    pub async fn find_form_by_id(
        &self,
        id: &Uuid,
    ) -> Result<Option<(FormModel, Vec<Uuid>)>, AppError> {
        let form = match Form::find_by_id(*id).one(&self.db).await? {
            Some(form) => form,
            None => return Ok(None),
        };
        let users_id = self.form_member_ids(id).await?;
        Ok(Some((form, users_id)))
    }

    /// Just the pieces the authorization predicate needs: the author and the
    /// member set currently on record.
    pub async fn get_form_access(&self, id: &Uuid) -> Result<Option<FormAccess>, AppError> {
        let form = match Form::find_by_id(*id).one(&self.db).await? {
            Some(form) => form,
            None => return Ok(None),
        };
        let users_id = self.form_member_ids(id).await?;
        Ok(Some(FormAccess {
            author_id: form.author_id,
            users_id,
        }))
    }

    /// Inserts the form and one join row per member id. Ids are not checked
    /// against the user table here; a dangling reference fails on the FK.
    pub async fn create_form(
        &self,
        payload: DBFormCreate,
    ) -> Result<(FormModel, Vec<Uuid>), AppError> {
        let now = Utc::now();
        let txn = self.db.begin().await?;

        let form = FormActive {
            id: Set(Uuid::new_v4()),
            title: Set(payload.title),
            author_id: Set(payload.author_id),
            fields: Set(payload.fields),
            created_at: Set(now),
            updated_at: Set(now),
        }
        .insert(&txn)
        .await?;

        for user_id in &payload.users_id {
            FormUserActive {
                form_id: Set(form.id),
                user_id: Set(*user_id),
                created_at: Set(now),
            }
            .insert(&txn)
            .await?;
        }

        txn.commit().await?;
        Ok((form, payload.users_id))
    }

    /// Replaces title, fields and the whole member set (remove-all-then-add,
    /// not a merge). Authorization happens in the handler, before this runs.
    pub async fn update_form(
        &self,
        id: &Uuid,
        payload: DBFormUpdate,
    ) -> Result<(FormModel, Vec<Uuid>), AppError> {
        let now = Utc::now();
        let txn = self.db.begin().await?;

        let form = Form::find_by_id(*id)
            .one(&txn)
            .await?
            .ok_or(AppError::NotFound)?;

        let mut am: FormActive = form.into();
        am.title = Set(payload.title);
        am.fields = Set(payload.fields);
        am.updated_at = Set(now);
        let form = am.update(&txn).await?;

        FormUser::delete_many()
            .filter(entity::form_user::Column::FormId.eq(*id))
            .exec(&txn)
            .await?;
        for user_id in &payload.users_id {
            FormUserActive {
                form_id: Set(*id),
                user_id: Set(*user_id),
                created_at: Set(now),
            }
            .insert(&txn)
            .await?;
        }

        txn.commit().await?;
        Ok((form, payload.users_id))
    }

    pub async fn delete_form(&self, id: &Uuid) -> Result<(), AppError> {
        Form::delete_by_id(*id).exec(&self.db).await?;
        Ok(())
    }
}
