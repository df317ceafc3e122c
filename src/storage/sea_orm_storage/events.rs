//! 校历事件存储操作

use super::SeaOrmStorage;
use crate::entity::events::{ActiveModel, Column, Entity as Events};
use crate::errors::{Result, SamsError};
use crate::models::events::{
    entities::Event,
    requests::{CreateEventRequest, EventQuery},
};
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set};

impl SeaOrmStorage {
    /// 创建事件
    pub async fn create_event_impl(
        &self,
        req: CreateEventRequest,
        created_by: i64,
    ) -> Result<Event> {
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            title: Set(req.title),
            description: Set(req.description),
            event_date: Set(req.event_date),
            event_time: Set(req.event_time),
            duration_minutes: Set(req.duration_minutes),
            location: Set(req.location),
            is_all_day: Set(req.is_all_day.unwrap_or(false)),
            created_by: Set(created_by),
            created_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| SamsError::database_operation(format!("创建事件失败: {e}")))?;

        Ok(result.into_event())
    }

    /// 按条件列出事件，日期区间为闭区间
    pub async fn list_events_impl(&self, query: EventQuery) -> Result<Vec<Event>> {
        let mut select = Events::find();

        if let Some(start_date) = query.start_date {
            select = select.filter(Column::EventDate.gte(start_date));
        }
        if let Some(end_date) = query.end_date {
            select = select.filter(Column::EventDate.lte(end_date));
        }

        let result = select
            .order_by_asc(Column::EventDate)
            .all(&self.db)
            .await
            .map_err(|e| SamsError::database_operation(format!("查询事件列表失败: {e}")))?;

        Ok(result.into_iter().map(|m| m.into_event()).collect())
    }

    /// 删除事件
    pub async fn delete_event_impl(&self, event_id: i64) -> Result<bool> {
        let result = Events::delete_by_id(event_id)
            .exec(&self.db)
            .await
            .map_err(|e| SamsError::database_operation(format!("删除事件失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }
}
