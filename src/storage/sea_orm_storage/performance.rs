//! 学业表现存储操作

use super::SeaOrmStorage;
use crate::entity::performance::{ActiveModel, Column, Entity as Performance};
use crate::errors::{Result, SamsError};
use crate::models::performance::{
    entities::PerformanceResult,
    requests::{AddPerformanceRequest, PerformanceQuery},
};
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set};

impl SeaOrmStorage {
    /// 录入学业表现
    pub async fn add_performance_impl(
        &self,
        req: AddPerformanceRequest,
    ) -> Result<PerformanceResult> {
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            student_id: Set(req.student_id),
            class_id: Set(req.class_id),
            subject: Set(req.subject),
            mastery_level: Set(req.mastery_level),
            grade: Set(req.grade),
            assessment_type: Set(req.assessment_type),
            max_score: Set(req.max_score),
            achieved_score: Set(req.achieved_score),
            assessment_date: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| SamsError::database_operation(format!("录入学业表现失败: {e}")))?;

        Ok(result.into_result())
    }

    /// 按条件查询学业表现
    pub async fn list_performance_impl(
        &self,
        query: PerformanceQuery,
    ) -> Result<Vec<PerformanceResult>> {
        let mut select = Performance::find();

        if let Some(student_id) = query.student_id {
            select = select.filter(Column::StudentId.eq(student_id));
        }
        if let Some(class_id) = query.class_id {
            select = select.filter(Column::ClassId.eq(class_id));
        }
        if let Some(ref subject) = query.subject {
            select = select.filter(Column::Subject.eq(subject.clone()));
        }

        let result = select
            .order_by_desc(Column::AssessmentDate)
            .all(&self.db)
            .await
            .map_err(|e| SamsError::database_operation(format!("查询学业表现失败: {e}")))?;

        Ok(result.into_iter().map(|m| m.into_result()).collect())
    }
}
