//! 选课存储操作
//!
//! (student_id, class_id) 上的唯一索引是并发选课时的最终裁决，
//! 服务层的存在性预检查只负责给出友好的错误信息。

use super::SeaOrmStorage;
use crate::entity::enrollments::{ActiveModel, Column, Entity as Enrollments};
use crate::errors::{Result, SamsError};
use crate::models::enrollments::entities::{Enrollment, EnrollmentStatus};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, EntityTrait, QueryFilter, QueryOrder, Set,
};

impl SeaOrmStorage {
    /// 学生选入班级
    pub async fn enroll_student_impl(&self, student_id: i64, class_id: i64) -> Result<Enrollment> {
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            student_id: Set(student_id),
            class_id: Set(class_id),
            status: Set(EnrollmentStatus::Active.to_string()),
            enrolled_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| SamsError::database_operation(format!("选课失败: {e}")))?;

        Ok(result.into_enrollment())
    }

    /// 学生退出班级
    pub async fn unenroll_student_impl(&self, student_id: i64, class_id: i64) -> Result<bool> {
        let result = Enrollments::delete_many()
            .filter(
                Condition::all()
                    .add(Column::StudentId.eq(student_id))
                    .add(Column::ClassId.eq(class_id)),
            )
            .exec(&self.db)
            .await
            .map_err(|e| SamsError::database_operation(format!("退课失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }

    /// 获取某学生在某班级的选课记录
    pub async fn get_enrollment_impl(
        &self,
        student_id: i64,
        class_id: i64,
    ) -> Result<Option<Enrollment>> {
        let result = Enrollments::find()
            .filter(
                Condition::all()
                    .add(Column::StudentId.eq(student_id))
                    .add(Column::ClassId.eq(class_id)),
            )
            .one(&self.db)
            .await
            .map_err(|e| SamsError::database_operation(format!("查询选课记录失败: {e}")))?;

        Ok(result.map(|m| m.into_enrollment()))
    }

    /// 列出班级的选课记录
    pub async fn list_class_enrollments_impl(&self, class_id: i64) -> Result<Vec<Enrollment>> {
        let result = Enrollments::find()
            .filter(Column::ClassId.eq(class_id))
            .order_by_asc(Column::EnrolledAt)
            .all(&self.db)
            .await
            .map_err(|e| SamsError::database_operation(format!("查询班级选课列表失败: {e}")))?;

        Ok(result.into_iter().map(|m| m.into_enrollment()).collect())
    }

    /// 列出学生的选课记录
    pub async fn list_student_enrollments_impl(&self, student_id: i64) -> Result<Vec<Enrollment>> {
        let result = Enrollments::find()
            .filter(Column::StudentId.eq(student_id))
            .order_by_asc(Column::EnrolledAt)
            .all(&self.db)
            .await
            .map_err(|e| SamsError::database_operation(format!("查询学生选课列表失败: {e}")))?;

        Ok(result.into_iter().map(|m| m.into_enrollment()).collect())
    }
}
