use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Serialize, Deserialize, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RFormCreate {
    pub title: String,
    #[schema(value_type = Object)]
    pub fields: serde_json::Value,
    pub author_id: Uuid,
    #[serde(default)]
    pub users_id: Vec<Uuid>,
}

#[derive(Serialize, Deserialize, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RFormEdit {
    /// Caller identity as claimed in the body (see utils::webutils).
    pub user_id: Uuid,
    pub title: String,
    #[schema(value_type = Object)]
    pub fields: serde_json::Value,
    #[serde(default)]
    pub users_id: Vec<Uuid>,
}

#[derive(Serialize, Deserialize, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RFormDelete {
    pub user_id: Uuid,
}

#[derive(Serialize, Deserialize, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FormView {
    pub id: Uuid,
    pub title: String,
    pub author_id: Uuid,
    #[schema(value_type = Object)]
    pub fields: serde_json::Value,
    pub users_id: Vec<Uuid>,
}

impl FormView {
    pub fn from_parts(form: entity::form::Model, users_id: Vec<Uuid>) -> Self {
        FormView {
            id: form.id,
            title: form.title,
            author_id: form.author_id,
            fields: form.fields,
            users_id,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, ToSchema)]
pub struct FormCreateRes {
    pub form: FormView,
}

#[derive(Serialize, Deserialize, Debug, ToSchema)]
pub struct FormGetRes {
    pub form: Option<FormView>,
}

#[derive(Serialize, Deserialize, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FormEditRes {
    pub updated_form: FormView,
}

/// Author id and the member set on record, the inputs to the authorization
/// predicate for edit and delete.
pub struct FormAccess {
    pub author_id: Uuid,
    pub users_id: Vec<Uuid>,
}

pub struct DBFormCreate {
    pub title: String,
    pub fields: serde_json::Value,
    pub author_id: Uuid,
    pub users_id: Vec<Uuid>,
}

pub struct DBFormUpdate {
    pub title: String,
    pub fields: serde_json::Value,
    pub users_id: Vec<Uuid>,
}
