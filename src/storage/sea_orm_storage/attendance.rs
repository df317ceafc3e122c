//! 考勤存储操作
//!
//! 批量提交在单个事务内逐条按自然键 (student_id, class_id, date) 执行
//! 插入或更新。任意一条失败（如外键指向不存在的学生）整批回滚，
//! 不会留下部分写入。

use super::SeaOrmStorage;
use crate::entity::attendance::{ActiveModel, Column, Entity as Attendance};
use crate::errors::{Result, SamsError};
use crate::models::attendance::{
    entities::AttendanceRecord,
    requests::{AttendanceQuery, MarkAttendanceRequest},
};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, DbErr, EntityTrait, QueryFilter, QueryOrder, Set,
    TransactionTrait,
};

impl SeaOrmStorage {
    /// 批量提交考勤，返回写入（插入或更新）的条数
    pub async fn mark_attendance_batch_impl(&self, batch: MarkAttendanceRequest) -> Result<u64> {
        let now = chrono::Utc::now().timestamp();
        let class_id = batch.class_id;
        let date = batch.date;
        let records = batch.records;

        let count = self
            .db
            .transaction::<_, u64, DbErr>(|txn| {
                Box::pin(async move {
                    let mut written: u64 = 0;

                    for entry in records {
                        let existing = Attendance::find()
                            .filter(
                                Condition::all()
                                    .add(Column::StudentId.eq(entry.student_id))
                                    .add(Column::ClassId.eq(class_id))
                                    .add(Column::Date.eq(date)),
                            )
                            .one(txn)
                            .await?;

                        match existing {
                            // 同键重复提交按更新处理，保持幂等
                            Some(row) => {
                                let model = ActiveModel {
                                    id: Set(row.id),
                                    status: Set(entry.status.to_string()),
                                    notes: Set(entry.notes),
                                    recorded_at: Set(now),
                                    ..Default::default()
                                };
                                model.update(txn).await?;
                            }
                            None => {
                                let model = ActiveModel {
                                    student_id: Set(entry.student_id),
                                    class_id: Set(class_id),
                                    date: Set(date),
                                    status: Set(entry.status.to_string()),
                                    notes: Set(entry.notes),
                                    recorded_at: Set(now),
                                    ..Default::default()
                                };
                                model.insert(txn).await?;
                            }
                        }
                        written += 1;
                    }

                    Ok(written)
                })
            })
            .await
            .map_err(|e| SamsError::transaction_failed(format!("批量考勤提交失败: {e}")))?;

        Ok(count)
    }

    /// 按条件查询考勤记录，过滤项之间为 AND，日期区间为闭区间
    pub async fn query_attendance_impl(
        &self,
        query: AttendanceQuery,
    ) -> Result<Vec<AttendanceRecord>> {
        let mut select = Attendance::find();

        if let Some(class_id) = query.class_id {
            select = select.filter(Column::ClassId.eq(class_id));
        }
        if let Some(student_id) = query.student_id {
            select = select.filter(Column::StudentId.eq(student_id));
        }
        if let Some(start_date) = query.start_date {
            select = select.filter(Column::Date.gte(start_date));
        }
        if let Some(end_date) = query.end_date {
            select = select.filter(Column::Date.lte(end_date));
        }

        let result = select
            .order_by_desc(Column::Date)
            .order_by_asc(Column::StudentId)
            .all(&self.db)
            .await
            .map_err(|e| SamsError::database_operation(format!("查询考勤记录失败: {e}")))?;

        Ok(result.into_iter().map(|m| m.into_attendance()).collect())
    }
}
