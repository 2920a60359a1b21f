// pmis-backend/src/service/work_log_service.rs

use crate::api::dto::work_log_dto::{CreateWorkLogDto, WorkLogDto};
use crate::domain::task_work_log_model::Model as TaskWorkLog;
use crate::error::{AppError, AppResult};
use crate::repository::employee_repository::EmployeeRepository;
use crate::repository::task_repository::TaskRepository;
use crate::repository::work_log_repository::WorkLogRepository;
use std::sync::Arc;
use uuid::Uuid;

pub struct WorkLogService {
    work_logs: Arc<dyn WorkLogRepository>,
    tasks: Arc<dyn TaskRepository>,
    employees: Arc<dyn EmployeeRepository>,
}

impl WorkLogService {
    pub fn new(
        work_logs: Arc<dyn WorkLogRepository>,
        tasks: Arc<dyn TaskRepository>,
        employees: Arc<dyn EmployeeRepository>,
    ) -> Self {
        Self {
            work_logs,
            tasks,
            employees,
        }
    }

    /// 作業時間を記録。時間数は小数点以下2桁に丸めて保存する
    pub async fn log_work(&self, task_id: Uuid, payload: CreateWorkLogDto) -> AppResult<WorkLogDto> {
        let task = self
            .tasks
            .find_by_id(task_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Task not found".to_string()))?;
        let employee = self
            .employees
            .find_by_id(payload.employee_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Employee not found".to_string()))?;

        let work_log = TaskWorkLog {
            id: Uuid::new_v4(),
            task_id: task.id,
            employee_id: employee.id,
            work_date: payload.work_date,
            hours: payload.hours.round_dp(2),
            note: payload.note,
        };

        let created = self.work_logs.insert(work_log).await?;
        Ok(created.into())
    }

    pub async fn get_by_task(&self, task_id: Uuid) -> AppResult<Vec<WorkLogDto>> {
        let work_logs = self.work_logs.find_by_task_id(task_id).await?;
        Ok(work_logs.into_iter().map(Into::into).collect())
    }
}
