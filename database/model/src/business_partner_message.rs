//! Messages business partners send to the office.
use sea_orm::{entity::prelude::*, Set};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "business_partner_message")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub business_partner_id: Uuid,
    pub subject: String,
    pub content: String,
    pub message_type: i32,
    pub priority: i32,
    pub status: i32,
    pub is_starred: bool,
    pub sender_name: String,
    pub sender_email: Option<String>,
    pub sender_company: Option<String>,
    pub sender_phone: Option<String>,
    pub related_service_id: Option<Uuid>,
    pub related_client_name: Option<String>,
    pub attachments: Option<String>,
    pub admin_response: Option<String>,
    pub admin_responded_at: Option<DateTimeUtc>,
    pub admin_responded_by: Option<String>,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn into_set(self) -> ActiveModel {
        ActiveModel {
            id: Set(self.id),
            business_partner_id: Set(self.business_partner_id),
            subject: Set(self.subject),
            content: Set(self.content),
            message_type: Set(self.message_type),
            priority: Set(self.priority),
            status: Set(self.status),
            is_starred: Set(self.is_starred),
            sender_name: Set(self.sender_name),
            sender_email: Set(self.sender_email),
            sender_company: Set(self.sender_company),
            sender_phone: Set(self.sender_phone),
            related_service_id: Set(self.related_service_id),
            related_client_name: Set(self.related_client_name),
            attachments: Set(self.attachments),
            admin_response: Set(self.admin_response),
            admin_responded_at: Set(self.admin_responded_at),
            admin_responded_by: Set(self.admin_responded_by),
            created_at: Set(self.created_at),
            updated_at: Set(self.updated_at),
        }
    }
}
