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
}

#[derive(DeriveIden)]
enum FormUser {
    Table,
    FormId,
    UserId,
    CreatedAt,
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, m: &SchemaManager) -> Result<(), DbErr> {
        // form_user join table: one row per user granted access to a form
        m.create_table(
            Table::create()
                .table(FormUser::Table)
                .if_not_exists()
                .col(ColumnDef::new(FormUser::FormId).uuid().not_null())
                .col(ColumnDef::new(FormUser::UserId).uuid().not_null())
                .col(ColumnDef::new(FormUser::CreatedAt).timestamp_with_time_zone().not_null().default(Expr::current_timestamp()))
                .primary_key(
                    Index::create()
                        .name("pk_form_user")
                        .col(FormUser::FormId)
                        .col(FormUser::UserId)
                )
                .to_owned(),
        ).await?;

        // FKs
        m.alter_table(
            Table::alter()
                .table(FormUser::Table)
                .add_foreign_key(
                    TableForeignKey::new()
                        .name("fk_form_user_form")
                        .from_tbl(FormUser::Table)
                        .from_col(FormUser::FormId)
                        .to_tbl(Form::Table)
                        .to_col(Form::Id)
                        .on_delete(ForeignKeyAction::Cascade)
                        .on_update(ForeignKeyAction::Cascade)
                )
                .add_foreign_key(
                    TableForeignKey::new()
                        .name("fk_form_user_user")
                        .from_tbl(FormUser::Table)
                        .from_col(FormUser::UserId)
                        .to_tbl(User::Table)
                        .to_col(User::Id)
                        .on_delete(ForeignKeyAction::Cascade)
                        .on_update(ForeignKeyAction::Cascade)
                )
                .to_owned(),
        ).await?;

        m.create_index(
            Index::create()
                .name("idx_form_user_form")
                .table(FormUser::Table)
                .col(FormUser::FormId)
                .to_owned(),
        ).await?;

        m.create_index(
            Index::create()
                .name("idx_form_user_user")
                .table(FormUser::Table)
                .col(FormUser::UserId)
                .to_owned(),
        ).await?;

        Ok(())
    }

    async fn down(&self, m: &SchemaManager) -> Result<(), DbErr> {
        m.drop_table(Table::drop().table(FormUser::Table).to_owned()).await?;
        Ok(())
    }
}
