//! 便签存储操作
//!
//! 所有读写都以 user_id 过滤，越权访问在存储层即被挡住。

use super::SeaOrmStorage;
use crate::entity::notes::{ActiveModel, Column, Entity as Notes};
use crate::errors::{Result, SamsError};
use crate::models::notes::{
    entities::Note,
    requests::{CreateNoteRequest, UpdateNoteRequest},
};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, EntityTrait, QueryFilter, QueryOrder, Set,
};

impl SeaOrmStorage {
    /// 创建便签
    pub async fn create_note_impl(&self, user_id: i64, req: CreateNoteRequest) -> Result<Note> {
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            user_id: Set(user_id),
            title: Set(req.title),
            content: Set(req.content),
            color: Set(req.color),
            priority: Set(req.priority),
            is_pinned: Set(req.is_pinned.unwrap_or(false)),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| SamsError::database_operation(format!("创建便签失败: {e}")))?;

        Ok(result.into_note())
    }

    /// 列出用户自己的便签，置顶优先
    pub async fn list_notes_impl(&self, user_id: i64) -> Result<Vec<Note>> {
        let result = Notes::find()
            .filter(Column::UserId.eq(user_id))
            .order_by_desc(Column::IsPinned)
            .order_by_desc(Column::UpdatedAt)
            .all(&self.db)
            .await
            .map_err(|e| SamsError::database_operation(format!("查询便签列表失败: {e}")))?;

        Ok(result.into_iter().map(|m| m.into_note()).collect())
    }

    /// 更新便签（仅限创建者）
    pub async fn update_note_impl(
        &self,
        user_id: i64,
        note_id: i64,
        update: UpdateNoteRequest,
    ) -> Result<Option<Note>> {
        let existing = Notes::find_by_id(note_id)
            .filter(Column::UserId.eq(user_id))
            .one(&self.db)
            .await
            .map_err(|e| SamsError::database_operation(format!("查询便签失败: {e}")))?;

        if existing.is_none() {
            return Ok(None);
        }

        let mut model = ActiveModel {
            id: Set(note_id),
            updated_at: Set(chrono::Utc::now().timestamp()),
            ..Default::default()
        };

        if let Some(title) = update.title {
            model.title = Set(title);
        }
        if let Some(content) = update.content {
            model.content = Set(content);
        }
        if let Some(color) = update.color {
            model.color = Set(Some(color));
        }
        if let Some(priority) = update.priority {
            model.priority = Set(Some(priority));
        }
        if let Some(is_pinned) = update.is_pinned {
            model.is_pinned = Set(is_pinned);
        }

        let result = model
            .update(&self.db)
            .await
            .map_err(|e| SamsError::database_operation(format!("更新便签失败: {e}")))?;

        Ok(Some(result.into_note()))
    }

    /// 删除便签（仅限创建者）
    pub async fn delete_note_impl(&self, user_id: i64, note_id: i64) -> Result<bool> {
        let result = Notes::delete_many()
            .filter(
                Condition::all()
                    .add(Column::Id.eq(note_id))
                    .add(Column::UserId.eq(user_id)),
            )
            .exec(&self.db)
            .await
            .map_err(|e| SamsError::database_operation(format!("删除便签失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }
}
