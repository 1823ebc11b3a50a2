use crate::db::postgres_service::PostgresService;
use crate::types::{error::AppError, user::DBUserCreate};
use chrono::Utc;
use entity::form_user::Entity as FormUser;
use entity::user::{ActiveModel as UserActive, Entity as User, Model as UserModel};
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, Set};
use uuid::Uuid;

impl PostgresService {
    pub async fn user_exists_by_username(&self, username: &str) -> Result<bool, AppError> {
        Ok(User::find()
            .filter(entity::user::Column::Username.eq(username))
            .count(&self.db)
            .await?
            > 0)
    }

    /// Lookup by id. An absent user is a plain `None`, not an error.
    pub async fn find_user_by_id(&self, id: &Uuid) -> Result<Option<UserModel>, AppError> {
        Ok(User::find_by_id(*id).one(&self.db).await?)
    }

    pub async fn find_user_by_username(&self, username: &str) -> Result<Option<UserModel>, AppError> {
        Ok(User::find()
            .filter(entity::user::Column::Username.eq(username))
            .one(&self.db)
            .await?)
    }

    /// Signup: existence check first, then insert. The two steps are not
    /// atomic; the unique index on username is the real guard.
    pub async fn create_user(&self, payload: DBUserCreate) -> Result<UserModel, AppError> {
        if self.user_exists_by_username(&payload.username).await? {
            return Err(AppError::AlreadyExists);
        }
        let now = Utc::now();
        let user = UserActive {
            id: Set(Uuid::new_v4()),
            username: Set(payload.username),
            password: Set(payload.password_hash),
            created_at: Set(now),
            updated_at: Set(now),
        }
        .insert(&self.db)
        .await?;
        Ok(user)
    }

    /// Ids of forms where the user appears as a member.
    pub async fn member_form_ids(&self, user_id: &Uuid) -> Result<Vec<Uuid>, AppError> {
        Ok(FormUser::find()
            .filter(entity::form_user::Column::UserId.eq(*user_id))
            .all(&self.db)
            .await?
            .into_iter()
            .map(|row| row.form_id)
            .collect())
    }
}
