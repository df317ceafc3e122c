//! 课程存储操作

use super::SeaOrmStorage;
use crate::entity::lessons::{ActiveModel, Column, Entity as Lessons};
use crate::errors::{Result, SamsError};
use crate::models::lessons::{
    entities::Lesson,
    requests::{CreateLessonRequest, LessonQuery, UpdateLessonRequest},
};
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set};

impl SeaOrmStorage {
    /// 创建课程
    pub async fn create_lesson_impl(&self, req: CreateLessonRequest) -> Result<Lesson> {
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            class_id: Set(req.class_id),
            teacher_id: Set(req.teacher_id),
            title: Set(req.title),
            subject: Set(req.subject),
            start_time: Set(req.start_time.timestamp()),
            duration_minutes: Set(req.duration_minutes),
            lesson_type: Set(req.lesson_type),
            description: Set(req.description),
            location: Set(req.location),
            materials: Set(req.materials),
            homework: Set(req.homework),
            is_completed: Set(false),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| SamsError::database_operation(format!("创建课程失败: {e}")))?;

        Ok(result.into_lesson())
    }

    /// 通过 ID 获取课程
    pub async fn get_lesson_by_id_impl(&self, lesson_id: i64) -> Result<Option<Lesson>> {
        let result = Lessons::find_by_id(lesson_id)
            .one(&self.db)
            .await
            .map_err(|e| SamsError::database_operation(format!("查询课程失败: {e}")))?;

        Ok(result.map(|m| m.into_lesson()))
    }

    /// 按条件列出课程
    pub async fn list_lessons_impl(&self, query: LessonQuery) -> Result<Vec<Lesson>> {
        let mut select = Lessons::find();

        if let Some(class_id) = query.class_id {
            select = select.filter(Column::ClassId.eq(class_id));
        }
        if let Some(teacher_id) = query.teacher_id {
            select = select.filter(Column::TeacherId.eq(teacher_id));
        }
        if let Some(is_completed) = query.is_completed {
            select = select.filter(Column::IsCompleted.eq(is_completed));
        }

        let result = select
            .order_by_desc(Column::StartTime)
            .all(&self.db)
            .await
            .map_err(|e| SamsError::database_operation(format!("查询课程列表失败: {e}")))?;

        Ok(result.into_iter().map(|m| m.into_lesson()).collect())
    }

    /// 更新课程
    pub async fn update_lesson_impl(
        &self,
        lesson_id: i64,
        update: UpdateLessonRequest,
    ) -> Result<Option<Lesson>> {
        let existing = Lessons::find_by_id(lesson_id)
            .one(&self.db)
            .await
            .map_err(|e| SamsError::database_operation(format!("查询课程失败: {e}")))?;

        if existing.is_none() {
            return Ok(None);
        }

        let mut model = ActiveModel {
            id: Set(lesson_id),
            updated_at: Set(chrono::Utc::now().timestamp()),
            ..Default::default()
        };

        if let Some(title) = update.title {
            model.title = Set(title);
        }
        if let Some(subject) = update.subject {
            model.subject = Set(subject);
        }
        if let Some(start_time) = update.start_time {
            model.start_time = Set(start_time.timestamp());
        }
        if let Some(duration_minutes) = update.duration_minutes {
            model.duration_minutes = Set(duration_minutes);
        }
        if let Some(lesson_type) = update.lesson_type {
            model.lesson_type = Set(lesson_type);
        }
        if let Some(description) = update.description {
            model.description = Set(Some(description));
        }
        if let Some(location) = update.location {
            model.location = Set(Some(location));
        }
        if let Some(materials) = update.materials {
            model.materials = Set(Some(materials));
        }
        if let Some(homework) = update.homework {
            model.homework = Set(Some(homework));
        }
        if let Some(is_completed) = update.is_completed {
            model.is_completed = Set(is_completed);
        }

        let result = model
            .update(&self.db)
            .await
            .map_err(|e| SamsError::database_operation(format!("更新课程失败: {e}")))?;

        Ok(Some(result.into_lesson()))
    }

    /// 删除课程
    pub async fn delete_lesson_impl(&self, lesson_id: i64) -> Result<bool> {
        let result = Lessons::delete_by_id(lesson_id)
            .exec(&self.db)
            .await
            .map_err(|e| SamsError::database_operation(format!("删除课程失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }
}
