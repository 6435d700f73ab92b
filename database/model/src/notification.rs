//! Notifications, append only.
use sea_orm::{entity::prelude::*, Set};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "notification")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub user_id: Uuid,
    pub r#type: i32,
    pub title: String,
    #[sea_orm(column_type = "Text")]
    pub message: String,
    pub related_service_id: Option<Uuid>,
    pub related_spare_part_id: Option<Uuid>,
    pub related_user_id: Option<Uuid>,
    pub is_read: bool,
    pub priority: i32,
    pub created_at: DateTimeUtc,
    pub read_at: Option<DateTimeUtc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn into_set(self) -> ActiveModel {
        ActiveModel {
            id: Set(self.id),
            user_id: Set(self.user_id),
            r#type: Set(self.r#type),
            title: Set(self.title),
            message: Set(self.message),
            related_service_id: Set(self.related_service_id),
            related_spare_part_id: Set(self.related_spare_part_id),
            related_user_id: Set(self.related_user_id),
            is_read: Set(self.is_read),
            priority: Set(self.priority),
            created_at: Set(self.created_at),
            read_at: Set(self.read_at),
        }
    }
}
