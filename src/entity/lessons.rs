//! 课程实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "lessons")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub class_id: i64,
    pub teacher_id: i64,
    pub title: String,
    pub subject: String,
    pub start_time: i64,
    pub duration_minutes: i32,
    pub lesson_type: String,
    pub description: Option<String>,
    pub location: Option<String>,
    pub materials: Option<String>,
    pub homework: Option<String>,
    pub is_completed: bool,
    pub created_at: i64,
    pub updated_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::classes::Entity",
        from = "Column::ClassId",
        to = "super::classes::Column::Id"
    )]
    Class,
    #[sea_orm(
        belongs_to = "super::users::Entity",
        from = "Column::TeacherId",
        to = "super::users::Column::Id"
    )]
    Teacher,
}

impl Related<super::classes::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Class.def()
    }
}

impl Related<super::users::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Teacher.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

// 从数据库模型转换为业务模型
impl Model {
    pub fn into_lesson(self) -> crate::models::lessons::entities::Lesson {
        use crate::models::lessons::entities::Lesson;
        use chrono::{DateTime, Utc};

        Lesson {
            id: self.id,
            class_id: self.class_id,
            teacher_id: self.teacher_id,
            title: self.title,
            subject: self.subject,
            start_time: DateTime::<Utc>::from_timestamp(self.start_time, 0).unwrap_or_default(),
            duration_minutes: self.duration_minutes,
            lesson_type: self.lesson_type,
            description: self.description,
            location: self.location,
            materials: self.materials,
            homework: self.homework,
            is_completed: self.is_completed,
            created_at: DateTime::<Utc>::from_timestamp(self.created_at, 0).unwrap_or_default(),
            updated_at: DateTime::<Utc>::from_timestamp(self.updated_at, 0).unwrap_or_default(),
        }
    }
}
