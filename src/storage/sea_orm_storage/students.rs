//! 学生档案存储操作
//!
//! 学生档案与其用户账号成对出现，创建与更新跨两张表，均在事务内完成。

use super::SeaOrmStorage;
use crate::entity::students::{ActiveModel, Column, Entity as Students};
use crate::entity::users::{ActiveModel as UserActiveModel, Entity as Users};
use crate::errors::{Result, SamsError};
use crate::models::{
    students::{entities::Student, requests::UpdateStudentRequest},
    users::requests::CreateUserRequest,
};
use sea_orm::{ActiveModelTrait, DbErr, EntityTrait, QueryOrder, Set, TransactionTrait};

impl SeaOrmStorage {
    /// 创建学生：用户账号与学生档案在同一事务内写入
    pub async fn create_student_impl(
        &self,
        user: CreateUserRequest,
        student_number: String,
        grade: String,
    ) -> Result<Student> {
        let now = chrono::Utc::now().timestamp();

        let result = self
            .db
            .transaction::<_, crate::entity::students::Model, DbErr>(|txn| {
                Box::pin(async move {
                    let user_model = UserActiveModel {
                        username: Set(user.username),
                        email: Set(user.email),
                        password_hash: Set(user.password),
                        role: Set(user.role.to_string()),
                        is_active: Set(true),
                        first_name: Set(user.first_name),
                        last_name: Set(user.last_name),
                        phone: Set(user.phone),
                        address: Set(user.address),
                        created_at: Set(now),
                        updated_at: Set(now),
                        ..Default::default()
                    };
                    let user_row = user_model.insert(txn).await?;

                    let student_model = ActiveModel {
                        user_id: Set(user_row.id),
                        student_number: Set(student_number),
                        grade: Set(grade),
                        enrollment_date: Set(now),
                        created_at: Set(now),
                        updated_at: Set(now),
                        ..Default::default()
                    };
                    student_model.insert(txn).await
                })
            })
            .await
            .map_err(|e| SamsError::transaction_failed(format!("创建学生失败: {e}")))?;

        Ok(result.into_student())
    }

    /// 通过 ID 获取学生档案
    pub async fn get_student_by_id_impl(&self, student_id: i64) -> Result<Option<Student>> {
        let result = Students::find_by_id(student_id)
            .one(&self.db)
            .await
            .map_err(|e| SamsError::database_operation(format!("查询学生失败: {e}")))?;

        Ok(result.map(|m| m.into_student()))
    }

    /// 列出全部学生档案
    pub async fn list_students_impl(&self) -> Result<Vec<Student>> {
        let result = Students::find()
            .order_by_asc(Column::StudentNumber)
            .all(&self.db)
            .await
            .map_err(|e| SamsError::database_operation(format!("查询学生列表失败: {e}")))?;

        Ok(result.into_iter().map(|m| m.into_student()).collect())
    }

    /// 更新学生档案与关联用户字段
    pub async fn update_student_impl(
        &self,
        student_id: i64,
        update: UpdateStudentRequest,
    ) -> Result<Option<Student>> {
        let existing = Students::find_by_id(student_id)
            .one(&self.db)
            .await
            .map_err(|e| SamsError::database_operation(format!("查询学生失败: {e}")))?;

        let Some(existing) = existing else {
            return Ok(None);
        };

        let now = chrono::Utc::now().timestamp();
        let user_id = existing.user_id;

        let result = self
            .db
            .transaction::<_, crate::entity::students::Model, DbErr>(|txn| {
                Box::pin(async move {
                    let mut user_model = UserActiveModel {
                        id: Set(user_id),
                        updated_at: Set(now),
                        ..Default::default()
                    };
                    let mut user_changed = false;
                    if let Some(first_name) = update.first_name {
                        user_model.first_name = Set(Some(first_name));
                        user_changed = true;
                    }
                    if let Some(last_name) = update.last_name {
                        user_model.last_name = Set(Some(last_name));
                        user_changed = true;
                    }
                    if let Some(phone) = update.phone {
                        user_model.phone = Set(Some(phone));
                        user_changed = true;
                    }
                    if let Some(address) = update.address {
                        user_model.address = Set(Some(address));
                        user_changed = true;
                    }
                    if let Some(is_active) = update.is_active {
                        user_model.is_active = Set(is_active);
                        user_changed = true;
                    }
                    if user_changed {
                        user_model.update(txn).await?;
                    }

                    let mut student_model = ActiveModel {
                        id: Set(student_id),
                        updated_at: Set(now),
                        ..Default::default()
                    };
                    if let Some(grade) = update.grade {
                        student_model.grade = Set(grade);
                    }
                    student_model.update(txn).await
                })
            })
            .await
            .map_err(|e| SamsError::transaction_failed(format!("更新学生失败: {e}")))?;

        Ok(Some(result.into_student()))
    }

    /// 删除学生：删除用户账号，档案随外键级联清理
    pub async fn delete_student_impl(&self, student_id: i64) -> Result<bool> {
        let existing = Students::find_by_id(student_id)
            .one(&self.db)
            .await
            .map_err(|e| SamsError::database_operation(format!("查询学生失败: {e}")))?;

        let Some(existing) = existing else {
            return Ok(false);
        };

        let result = Users::delete_by_id(existing.user_id)
            .exec(&self.db)
            .await
            .map_err(|e| SamsError::database_operation(format!("删除学生失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }
}
