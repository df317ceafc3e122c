//! 班级存储操作

use super::SeaOrmStorage;
use crate::entity::classes::{ActiveModel, Column, Entity as Classes};
use crate::errors::{Result, SamsError};
use crate::models::classes::{
    entities::Class,
    requests::{CreateClassRequest, UpdateClassRequest},
};
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set};

impl SeaOrmStorage {
    /// 创建班级
    pub async fn create_class_impl(&self, req: CreateClassRequest) -> Result<Class> {
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            name: Set(req.name),
            code: Set(req.code),
            grade: Set(req.grade),
            teacher_id: Set(req.teacher_id),
            academic_year: Set(req.academic_year),
            semester: Set(req.semester),
            description: Set(req.description),
            is_active: Set(true),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| SamsError::database_operation(format!("创建班级失败: {e}")))?;

        Ok(result.into_class())
    }

    /// 通过 ID 获取班级
    pub async fn get_class_by_id_impl(&self, class_id: i64) -> Result<Option<Class>> {
        let result = Classes::find_by_id(class_id)
            .one(&self.db)
            .await
            .map_err(|e| SamsError::database_operation(format!("查询班级失败: {e}")))?;

        Ok(result.map(|m| m.into_class()))
    }

    /// 通过班级代码获取班级
    pub async fn get_class_by_code_impl(&self, code: &str) -> Result<Option<Class>> {
        let result = Classes::find()
            .filter(Column::Code.eq(code))
            .one(&self.db)
            .await
            .map_err(|e| SamsError::database_operation(format!("查询班级失败: {e}")))?;

        Ok(result.map(|m| m.into_class()))
    }

    /// 列出全部班级
    pub async fn list_classes_impl(&self) -> Result<Vec<Class>> {
        let result = Classes::find()
            .order_by_asc(Column::Name)
            .all(&self.db)
            .await
            .map_err(|e| SamsError::database_operation(format!("查询班级列表失败: {e}")))?;

        Ok(result.into_iter().map(|m| m.into_class()).collect())
    }

    /// 更新班级
    pub async fn update_class_impl(
        &self,
        class_id: i64,
        update: UpdateClassRequest,
    ) -> Result<Option<Class>> {
        let existing = Classes::find_by_id(class_id)
            .one(&self.db)
            .await
            .map_err(|e| SamsError::database_operation(format!("查询班级失败: {e}")))?;

        if existing.is_none() {
            return Ok(None);
        }

        let mut model = ActiveModel {
            id: Set(class_id),
            updated_at: Set(chrono::Utc::now().timestamp()),
            ..Default::default()
        };

        if let Some(name) = update.name {
            model.name = Set(name);
        }
        if let Some(grade) = update.grade {
            model.grade = Set(grade);
        }
        if let Some(teacher_id) = update.teacher_id {
            model.teacher_id = Set(teacher_id);
        }
        if let Some(academic_year) = update.academic_year {
            model.academic_year = Set(Some(academic_year));
        }
        if let Some(semester) = update.semester {
            model.semester = Set(Some(semester));
        }
        if let Some(description) = update.description {
            model.description = Set(Some(description));
        }
        if let Some(is_active) = update.is_active {
            model.is_active = Set(is_active);
        }

        let result = model
            .update(&self.db)
            .await
            .map_err(|e| SamsError::database_operation(format!("更新班级失败: {e}")))?;

        Ok(Some(result.into_class()))
    }

    /// 删除班级
    pub async fn delete_class_impl(&self, class_id: i64) -> Result<bool> {
        let result = Classes::delete_by_id(class_id)
            .exec(&self.db)
            .await
            .map_err(|e| SamsError::database_operation(format!("删除班级失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }
}
