use sea_orm_migration::sea_query::extension::postgres::Type;
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

fn colors() -> [TaskColor; 7] {
    [
        TaskColor::Red,
        TaskColor::Orange,
        TaskColor::Yellow,
        TaskColor::Green,
        TaskColor::Blue,
        TaskColor::Purple,
        TaskColor::Pink,
    ]
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_type(
                Type::create()
                    .as_enum(TaskColor::Enum)
                    .values(colors())
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Tasks::Table)
                    .if_not_exists()
                    .col(pk_uuid(Tasks::Id))
                    .col(string_len(Tasks::Title, 255))
                    .col(
                        ColumnDef::new(Tasks::Color)
                            .enumeration(TaskColor::Enum, colors())
                            .not_null(),
                    )
                    .col(boolean(Tasks::Completed).default(false))
                    .col(
                        timestamp_with_time_zone(Tasks::CreatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        timestamp_with_time_zone(Tasks::UpdatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        // Listing orders by created_at
        manager
            .create_index(
                Index::create()
                    .name("idx_tasks_created_at")
                    .table(Tasks::Table)
                    .col(Tasks::CreatedAt)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Tasks::Table).if_exists().to_owned())
            .await?;

        manager
            .drop_type(Type::drop().if_exists().name(TaskColor::Enum).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum Tasks {
    Table,
    Id,
    Title,
    Color,
    Completed,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden, Clone, Copy)]
enum TaskColor {
    #[sea_orm(iden = "task_color")]
    Enum,
    #[sea_orm(iden = "RED")]
    Red,
    #[sea_orm(iden = "ORANGE")]
    Orange,
    #[sea_orm(iden = "YELLOW")]
    Yellow,
    #[sea_orm(iden = "GREEN")]
    Green,
    #[sea_orm(iden = "BLUE")]
    Blue,
    #[sea_orm(iden = "PURPLE")]
    Purple,
    #[sea_orm(iden = "PINK")]
    Pink,
}
