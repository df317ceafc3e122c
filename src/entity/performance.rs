//! 成绩实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "performance")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub student_id: i64,
    pub class_id: i64,
    pub subject: String,
    pub mastery_level: i32,
    pub grade: Option<String>,
    pub assessment_type: Option<String>,
    pub max_score: Option<f64>,
    pub achieved_score: Option<f64>,
    pub assessment_date: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::students::Entity",
        from = "Column::StudentId",
        to = "super::students::Column::Id"
    )]
    Student,
    #[sea_orm(
        belongs_to = "super::classes::Entity",
        from = "Column::ClassId",
        to = "super::classes::Column::Id"
    )]
    Class,
}

impl Related<super::students::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Student.def()
    }
}

impl Related<super::classes::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Class.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

// 从数据库模型转换为业务模型
impl Model {
    pub fn into_result(self) -> crate::models::performance::entities::PerformanceResult {
        use crate::models::performance::entities::PerformanceResult;
        use chrono::{DateTime, Utc};

        PerformanceResult {
            id: self.id,
            student_id: self.student_id,
            class_id: self.class_id,
            subject: self.subject,
            mastery_level: self.mastery_level,
            grade: self.grade,
            assessment_type: self.assessment_type,
            max_score: self.max_score,
            achieved_score: self.achieved_score,
            assessment_date: DateTime::<Utc>::from_timestamp(self.assessment_date, 0)
                .unwrap_or_default(),
        }
    }
}
