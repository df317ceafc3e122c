//! 校历事件实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "events")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub title: String,
    pub description: Option<String>,
    pub event_date: Date,
    pub event_time: Option<String>,
    pub duration_minutes: Option<i32>,
    pub location: Option<String>,
    pub is_all_day: bool,
    pub created_by: i64,
    pub created_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::users::Entity",
        from = "Column::CreatedBy",
        to = "super::users::Column::Id"
    )]
    Creator,
}

impl Related<super::users::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Creator.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

// 从数据库模型转换为业务模型
impl Model {
    pub fn into_event(self) -> crate::models::events::entities::Event {
        use crate::models::events::entities::Event;
        use chrono::{DateTime, Utc};

        Event {
            id: self.id,
            title: self.title,
            description: self.description,
            event_date: self.event_date,
            event_time: self.event_time,
            duration_minutes: self.duration_minutes,
            location: self.location,
            is_all_day: self.is_all_day,
            created_by: self.created_by,
            created_at: DateTime::<Utc>::from_timestamp(self.created_at, 0).unwrap_or_default(),
        }
    }
}
