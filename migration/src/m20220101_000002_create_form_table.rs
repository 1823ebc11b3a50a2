use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[derive(DeriveIden)]
enum User {
    Table,
    Id,
}

#[derive(DeriveIden)]
enum Form {
    Table,
    Id,
    Title,
    AuthorId,
    Fields,
    CreatedAt,
    UpdatedAt,
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, m: &SchemaManager) -> Result<(), DbErr> {
        m.create_table(
            Table::create()
                .table(Form::Table)
                .col(
                    ColumnDef::new(Form::Id)
                        .uuid()
                        .not_null()
                        .primary_key()
                )
                .col(
                    ColumnDef::new(Form::Title)
                        .string()
                        .not_null()
                )
                .col(
                    ColumnDef::new(Form::AuthorId)
                        .uuid()
                        .not_null()
                )
                .col(
                    ColumnDef::new(Form::Fields)
                        .json_binary()
                        .not_null()
                )
                .col(
                    ColumnDef::new(Form::CreatedAt)
                        .timestamp_with_time_zone()
                        .not_null()
                )
                .col(
                    ColumnDef::new(Form::UpdatedAt)
                        .timestamp_with_time_zone()
                        .not_null()
                )
                .foreign_key(
                    ForeignKey::create()
                        .name("fk_form_author")
                        .from(Form::Table, Form::AuthorId)
                        .to(User::Table, User::Id)
                        .on_delete(ForeignKeyAction::Cascade)
                        .on_update(ForeignKeyAction::Cascade)
                )
                .to_owned(),
        ).await?;

        m.create_index(
            Index::create()
                .name("idx_form_author")
                .table(Form::Table)
                .col(Form::AuthorId)
                .to_owned(),
        ).await?;

        Ok(())
    }

    async fn down(&self, m: &SchemaManager) -> Result<(), DbErr> {
        m.drop_table(
            Table::drop()
                .table(Form::Table)
                .if_exists()
                .to_owned(),
        ).await?;
        Ok(())
    }
}
