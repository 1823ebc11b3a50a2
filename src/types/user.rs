use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Serialize, Deserialize, Debug, ToSchema)]
pub struct RUserCreate {
    pub username: String,
    pub password: String,
}

#[derive(Serialize, Deserialize, Debug, ToSchema)]
pub struct RUserLogin {
    pub username: String,
    pub password: String,
}

#[derive(Serialize, Deserialize, Debug, ToSchema)]
pub struct PublicUser {
    pub id: Uuid,
    pub username: String,
}

/// User as returned by lookups: password omitted, member-form ids attached.
#[derive(Serialize, Deserialize, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserView {
    pub id: Uuid,
    pub username: String,
    pub forms_id: Vec<Uuid>,
}

#[derive(Serialize, Deserialize, Debug, ToSchema)]
pub struct UserCreateRes {
    pub user: PublicUser,
}

#[derive(Serialize, Deserialize, Debug, ToSchema)]
pub struct UserGetRes {
    pub user: Option<UserView>,
}

#[derive(Serialize, Deserialize, Debug, ToSchema)]
pub struct LoginRes {
    pub username: String,
    pub token: String,
}

pub struct DBUserCreate {
    pub username: String,
    pub password_hash: String,
}
