// tests/common/mod.rs
//
// サービス層テスト用のインメモリ永続化実装とフィクスチャ

#![allow(dead_code)]

use async_trait::async_trait;
use chrono::NaiveDate;
use pmis_backend::domain::department_model::Model as Department;
use pmis_backend::domain::employee_model::Model as Employee;
use pmis_backend::domain::project_department_model::Model as ProjectDepartment;
use pmis_backend::domain::project_milestone_model::Model as ProjectMilestone;
use pmis_backend::domain::project_model::Model as Project;
use pmis_backend::domain::project_risk_model::Model as ProjectRisk;
use pmis_backend::domain::resource_allocation_model::Model as ResourceAllocation;
use pmis_backend::domain::resource_model::Model as Resource;
use pmis_backend::domain::role_model::Model as Role;
use pmis_backend::domain::task_assignment_model::Model as TaskAssignment;
use pmis_backend::domain::task_comment_model::Model as TaskComment;
use pmis_backend::domain::task_dependency_model::Model as TaskDependency;
use pmis_backend::domain::task_model::Model as Task;
use pmis_backend::domain::task_work_log_model::Model as TaskWorkLog;
use pmis_backend::error::{AppError, AppResult};
use pmis_backend::repository::allocation_repository::AllocationRepository;
use pmis_backend::repository::assignment_repository::AssignmentRepository;
use pmis_backend::repository::comment_repository::CommentRepository;
use pmis_backend::repository::department_repository::DepartmentRepository;
use pmis_backend::repository::dependency_repository::DependencyRepository;
use pmis_backend::repository::employee_repository::EmployeeRepository;
use pmis_backend::repository::milestone_repository::MilestoneRepository;
use pmis_backend::repository::project_department_repository::ProjectDepartmentRepository;
use pmis_backend::repository::project_repository::ProjectRepository;
use pmis_backend::repository::resource_repository::ResourceRepository;
use pmis_backend::repository::risk_repository::RiskRepository;
use pmis_backend::repository::role_repository::RoleRepository;
use pmis_backend::repository::task_repository::TaskRepository;
use pmis_backend::repository::work_log_repository::WorkLogRepository;
use pmis_backend::service::assignment_service::AssignmentService;
use pmis_backend::service::comment_service::CommentService;
use pmis_backend::service::department_service::DepartmentService;
use pmis_backend::service::dependency_service::DependencyService;
use pmis_backend::service::employee_service::EmployeeService;
use pmis_backend::service::milestone_service::MilestoneService;
use pmis_backend::service::project_service::ProjectService;
use pmis_backend::service::resource_service::ResourceService;
use pmis_backend::service::risk_service::RiskService;
use pmis_backend::service::role_service::RoleService;
use pmis_backend::service::task_service::TaskService;
use pmis_backend::service::work_log_service::WorkLogService;
use sea_orm::DbErr;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use uuid::Uuid;

fn duplicate_key() -> AppError {
    AppError::DbErr(DbErr::Custom("duplicate key".to_string()))
}

fn record_not_updated() -> AppError {
    AppError::DbErr(DbErr::RecordNotUpdated)
}

// --- インメモリ実装 ---

#[derive(Default)]
pub struct InMemoryDepartmentRepository {
    items: Mutex<HashMap<Uuid, Department>>,
}

#[async_trait]
impl DepartmentRepository for InMemoryDepartmentRepository {
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Department>> {
        Ok(self.items.lock().unwrap().get(&id).cloned())
    }

    async fn find_all(&self) -> AppResult<Vec<Department>> {
        let mut all: Vec<Department> = self.items.lock().unwrap().values().cloned().collect();
        all.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(all)
    }

    async fn insert(&self, department: Department) -> AppResult<Department> {
        self.items
            .lock()
            .unwrap()
            .insert(department.id, department.clone());
        Ok(department)
    }

    async fn update(&self, department: Department) -> AppResult<Department> {
        let mut items = self.items.lock().unwrap();
        if !items.contains_key(&department.id) {
            return Err(record_not_updated());
        }
        items.insert(department.id, department.clone());
        Ok(department)
    }

    async fn delete(&self, id: Uuid) -> AppResult<()> {
        self.items.lock().unwrap().remove(&id);
        Ok(())
    }
}

#[derive(Default)]
pub struct InMemoryEmployeeRepository {
    items: Mutex<HashMap<Uuid, Employee>>,
}

#[async_trait]
impl EmployeeRepository for InMemoryEmployeeRepository {
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Employee>> {
        Ok(self.items.lock().unwrap().get(&id).cloned())
    }

    async fn find_all(&self) -> AppResult<Vec<Employee>> {
        let mut all: Vec<Employee> = self.items.lock().unwrap().values().cloned().collect();
        all.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(all)
    }

    async fn find_by_department_id(&self, department_id: Uuid) -> AppResult<Vec<Employee>> {
        Ok(self
            .items
            .lock()
            .unwrap()
            .values()
            .filter(|e| e.department_id == department_id)
            .cloned()
            .collect())
    }

    async fn insert(&self, employee: Employee) -> AppResult<Employee> {
        self.items
            .lock()
            .unwrap()
            .insert(employee.id, employee.clone());
        Ok(employee)
    }

    async fn update(&self, employee: Employee) -> AppResult<Employee> {
        let mut items = self.items.lock().unwrap();
        if !items.contains_key(&employee.id) {
            return Err(record_not_updated());
        }
        items.insert(employee.id, employee.clone());
        Ok(employee)
    }

    async fn delete(&self, id: Uuid) -> AppResult<()> {
        self.items.lock().unwrap().remove(&id);
        Ok(())
    }
}

#[derive(Default)]
pub struct InMemoryProjectRepository {
    items: Mutex<HashMap<Uuid, Project>>,
}

impl InMemoryProjectRepository {
    /// 保存されている状態をテストの検証用に取り出す
    pub fn get(&self, id: Uuid) -> Option<Project> {
        self.items.lock().unwrap().get(&id).cloned()
    }
}

#[async_trait]
impl ProjectRepository for InMemoryProjectRepository {
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Project>> {
        Ok(self.items.lock().unwrap().get(&id).cloned())
    }

    async fn find_all(&self) -> AppResult<Vec<Project>> {
        let mut all: Vec<Project> = self.items.lock().unwrap().values().cloned().collect();
        all.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(all)
    }

    async fn insert(&self, project: Project) -> AppResult<Project> {
        self.items
            .lock()
            .unwrap()
            .insert(project.id, project.clone());
        Ok(project)
    }

    async fn update(&self, project: Project) -> AppResult<Project> {
        let mut items = self.items.lock().unwrap();
        if !items.contains_key(&project.id) {
            return Err(record_not_updated());
        }
        items.insert(project.id, project.clone());
        Ok(project)
    }

    async fn delete(&self, id: Uuid) -> AppResult<()> {
        self.items.lock().unwrap().remove(&id);
        Ok(())
    }
}

#[derive(Default)]
pub struct InMemoryTaskRepository {
    items: Mutex<HashMap<Uuid, Task>>,
}

impl InMemoryTaskRepository {
    pub fn get(&self, id: Uuid) -> Option<Task> {
        self.items.lock().unwrap().get(&id).cloned()
    }
}

#[async_trait]
impl TaskRepository for InMemoryTaskRepository {
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Task>> {
        Ok(self.items.lock().unwrap().get(&id).cloned())
    }

    async fn find_by_project_id(&self, project_id: Uuid) -> AppResult<Vec<Task>> {
        Ok(self
            .items
            .lock()
            .unwrap()
            .values()
            .filter(|t| t.project_id == project_id)
            .cloned()
            .collect())
    }

    async fn insert(&self, task: Task) -> AppResult<Task> {
        self.items.lock().unwrap().insert(task.id, task.clone());
        Ok(task)
    }

    async fn update(&self, task: Task) -> AppResult<Task> {
        let mut items = self.items.lock().unwrap();
        if !items.contains_key(&task.id) {
            return Err(record_not_updated());
        }
        items.insert(task.id, task.clone());
        Ok(task)
    }

    async fn delete(&self, id: Uuid) -> AppResult<()> {
        self.items.lock().unwrap().remove(&id);
        Ok(())
    }
}

#[derive(Default)]
pub struct InMemoryMilestoneRepository {
    items: Mutex<HashMap<Uuid, ProjectMilestone>>,
}

impl InMemoryMilestoneRepository {
    pub fn get(&self, id: Uuid) -> Option<ProjectMilestone> {
        self.items.lock().unwrap().get(&id).cloned()
    }
}

#[async_trait]
impl MilestoneRepository for InMemoryMilestoneRepository {
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<ProjectMilestone>> {
        Ok(self.items.lock().unwrap().get(&id).cloned())
    }

    async fn find_by_project_id(&self, project_id: Uuid) -> AppResult<Vec<ProjectMilestone>> {
        let mut all: Vec<ProjectMilestone> = self
            .items
            .lock()
            .unwrap()
            .values()
            .filter(|m| m.project_id == project_id)
            .cloned()
            .collect();
        all.sort_by_key(|m| m.due_date);
        Ok(all)
    }

    async fn insert(&self, milestone: ProjectMilestone) -> AppResult<ProjectMilestone> {
        self.items
            .lock()
            .unwrap()
            .insert(milestone.id, milestone.clone());
        Ok(milestone)
    }

    async fn update(&self, milestone: ProjectMilestone) -> AppResult<ProjectMilestone> {
        let mut items = self.items.lock().unwrap();
        if !items.contains_key(&milestone.id) {
            return Err(record_not_updated());
        }
        items.insert(milestone.id, milestone.clone());
        Ok(milestone)
    }
}

#[derive(Default)]
pub struct InMemoryRiskRepository {
    items: Mutex<HashMap<Uuid, ProjectRisk>>,
}

impl InMemoryRiskRepository {
    pub fn get(&self, id: Uuid) -> Option<ProjectRisk> {
        self.items.lock().unwrap().get(&id).cloned()
    }
}

#[async_trait]
impl RiskRepository for InMemoryRiskRepository {
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<ProjectRisk>> {
        Ok(self.items.lock().unwrap().get(&id).cloned())
    }

    async fn find_by_project_id(&self, project_id: Uuid) -> AppResult<Vec<ProjectRisk>> {
        let mut all: Vec<ProjectRisk> = self
            .items
            .lock()
            .unwrap()
            .values()
            .filter(|r| r.project_id == project_id)
            .cloned()
            .collect();
        all.sort_by_key(|r| r.created_at);
        Ok(all)
    }

    async fn insert(&self, risk: ProjectRisk) -> AppResult<ProjectRisk> {
        self.items.lock().unwrap().insert(risk.id, risk.clone());
        Ok(risk)
    }

    async fn update(&self, risk: ProjectRisk) -> AppResult<ProjectRisk> {
        let mut items = self.items.lock().unwrap();
        if !items.contains_key(&risk.id) {
            return Err(record_not_updated());
        }
        items.insert(risk.id, risk.clone());
        Ok(risk)
    }
}

#[derive(Default)]
pub struct InMemoryCommentRepository {
    items: Mutex<Vec<TaskComment>>,
}

#[async_trait]
impl CommentRepository for InMemoryCommentRepository {
    async fn insert(&self, comment: TaskComment) -> AppResult<TaskComment> {
        self.items.lock().unwrap().push(comment.clone());
        Ok(comment)
    }

    async fn find_by_task_id(&self, task_id: Uuid) -> AppResult<Vec<TaskComment>> {
        let mut all: Vec<TaskComment> = self
            .items
            .lock()
            .unwrap()
            .iter()
            .filter(|c| c.task_id == task_id)
            .cloned()
            .collect();
        all.sort_by_key(|c| c.commented_at);
        Ok(all)
    }
}

#[derive(Default)]
pub struct InMemoryWorkLogRepository {
    items: Mutex<Vec<TaskWorkLog>>,
}

#[async_trait]
impl WorkLogRepository for InMemoryWorkLogRepository {
    async fn insert(&self, work_log: TaskWorkLog) -> AppResult<TaskWorkLog> {
        self.items.lock().unwrap().push(work_log.clone());
        Ok(work_log)
    }

    async fn find_by_task_id(&self, task_id: Uuid) -> AppResult<Vec<TaskWorkLog>> {
        let mut all: Vec<TaskWorkLog> = self
            .items
            .lock()
            .unwrap()
            .iter()
            .filter(|l| l.task_id == task_id)
            .cloned()
            .collect();
        all.sort_by_key(|l| l.work_date);
        Ok(all)
    }
}

#[derive(Default)]
pub struct InMemoryRoleRepository {
    items: Mutex<HashMap<Uuid, Role>>,
}

impl InMemoryRoleRepository {
    pub fn get(&self, id: Uuid) -> Option<Role> {
        self.items.lock().unwrap().get(&id).cloned()
    }
}

#[async_trait]
impl RoleRepository for InMemoryRoleRepository {
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Role>> {
        Ok(self.items.lock().unwrap().get(&id).cloned())
    }

    async fn find_all(&self) -> AppResult<Vec<Role>> {
        let mut all: Vec<Role> = self.items.lock().unwrap().values().cloned().collect();
        all.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(all)
    }

    async fn insert(&self, role: Role) -> AppResult<Role> {
        self.items.lock().unwrap().insert(role.id, role.clone());
        Ok(role)
    }

    async fn update(&self, role: Role) -> AppResult<Role> {
        let mut items = self.items.lock().unwrap();
        if !items.contains_key(&role.id) {
            return Err(record_not_updated());
        }
        items.insert(role.id, role.clone());
        Ok(role)
    }

    async fn delete(&self, id: Uuid) -> AppResult<()> {
        self.items.lock().unwrap().remove(&id);
        Ok(())
    }
}

#[derive(Default)]
pub struct InMemoryResourceRepository {
    items: Mutex<HashMap<Uuid, Resource>>,
}

#[async_trait]
impl ResourceRepository for InMemoryResourceRepository {
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Resource>> {
        Ok(self.items.lock().unwrap().get(&id).cloned())
    }

    async fn find_all(&self) -> AppResult<Vec<Resource>> {
        let mut all: Vec<Resource> = self.items.lock().unwrap().values().cloned().collect();
        all.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(all)
    }

    async fn insert(&self, resource: Resource) -> AppResult<Resource> {
        self.items
            .lock()
            .unwrap()
            .insert(resource.id, resource.clone());
        Ok(resource)
    }

    async fn update(&self, resource: Resource) -> AppResult<Resource> {
        let mut items = self.items.lock().unwrap();
        if !items.contains_key(&resource.id) {
            return Err(record_not_updated());
        }
        items.insert(resource.id, resource.clone());
        Ok(resource)
    }

    async fn delete(&self, id: Uuid) -> AppResult<()> {
        self.items.lock().unwrap().remove(&id);
        Ok(())
    }
}

#[derive(Default)]
pub struct InMemoryAssignmentRepository {
    items: Mutex<HashMap<(Uuid, Uuid, Uuid), TaskAssignment>>,
}

impl InMemoryAssignmentRepository {
    pub fn contains(&self, task_id: Uuid, employee_id: Uuid, role_id: Uuid) -> bool {
        self.items
            .lock()
            .unwrap()
            .contains_key(&(task_id, employee_id, role_id))
    }
}

#[async_trait]
impl AssignmentRepository for InMemoryAssignmentRepository {
    async fn insert(&self, assignment: TaskAssignment) -> AppResult<TaskAssignment> {
        let key = (
            assignment.task_id,
            assignment.employee_id,
            assignment.role_id,
        );
        let mut items = self.items.lock().unwrap();
        if items.contains_key(&key) {
            return Err(duplicate_key());
        }
        items.insert(key, assignment.clone());
        Ok(assignment)
    }

    async fn find_by_task_id(&self, task_id: Uuid) -> AppResult<Vec<TaskAssignment>> {
        Ok(self
            .items
            .lock()
            .unwrap()
            .values()
            .filter(|a| a.task_id == task_id)
            .cloned()
            .collect())
    }

    async fn find_by_employee_id(&self, employee_id: Uuid) -> AppResult<Vec<TaskAssignment>> {
        Ok(self
            .items
            .lock()
            .unwrap()
            .values()
            .filter(|a| a.employee_id == employee_id)
            .cloned()
            .collect())
    }

    async fn delete_by_key(
        &self,
        task_id: Uuid,
        employee_id: Uuid,
        role_id: Uuid,
    ) -> AppResult<()> {
        self.items
            .lock()
            .unwrap()
            .remove(&(task_id, employee_id, role_id));
        Ok(())
    }
}

#[derive(Default)]
pub struct InMemoryDependencyRepository {
    items: Mutex<HashMap<(Uuid, Uuid), TaskDependency>>,
}

impl InMemoryDependencyRepository {
    pub fn len(&self) -> usize {
        self.items.lock().unwrap().len()
    }

    pub fn contains(&self, predecessor_task_id: Uuid, successor_task_id: Uuid) -> bool {
        self.items
            .lock()
            .unwrap()
            .contains_key(&(predecessor_task_id, successor_task_id))
    }
}

#[async_trait]
impl DependencyRepository for InMemoryDependencyRepository {
    async fn insert(&self, dependency: TaskDependency) -> AppResult<TaskDependency> {
        let key = (
            dependency.predecessor_task_id,
            dependency.successor_task_id,
        );
        let mut items = self.items.lock().unwrap();
        if items.contains_key(&key) {
            return Err(duplicate_key());
        }
        items.insert(key, dependency.clone());
        Ok(dependency)
    }

    async fn find_by_successor_id(
        &self,
        successor_task_id: Uuid,
    ) -> AppResult<Vec<TaskDependency>> {
        Ok(self
            .items
            .lock()
            .unwrap()
            .values()
            .filter(|d| d.successor_task_id == successor_task_id)
            .cloned()
            .collect())
    }

    async fn delete_by_key(
        &self,
        predecessor_task_id: Uuid,
        successor_task_id: Uuid,
    ) -> AppResult<()> {
        self.items
            .lock()
            .unwrap()
            .remove(&(predecessor_task_id, successor_task_id));
        Ok(())
    }
}

#[derive(Default)]
pub struct InMemoryAllocationRepository {
    items: Mutex<HashMap<(Uuid, Uuid), ResourceAllocation>>,
}

#[async_trait]
impl AllocationRepository for InMemoryAllocationRepository {
    async fn insert(&self, allocation: ResourceAllocation) -> AppResult<ResourceAllocation> {
        let key = (allocation.task_id, allocation.resource_id);
        let mut items = self.items.lock().unwrap();
        if items.contains_key(&key) {
            return Err(duplicate_key());
        }
        items.insert(key, allocation.clone());
        Ok(allocation)
    }

    async fn find_by_task_id(&self, task_id: Uuid) -> AppResult<Vec<ResourceAllocation>> {
        Ok(self
            .items
            .lock()
            .unwrap()
            .values()
            .filter(|a| a.task_id == task_id)
            .cloned()
            .collect())
    }
}

#[derive(Default)]
pub struct InMemoryProjectDepartmentRepository {
    items: Mutex<HashMap<(Uuid, Uuid), ProjectDepartment>>,
}

impl InMemoryProjectDepartmentRepository {
    pub fn contains(&self, project_id: Uuid, department_id: Uuid) -> bool {
        self.items
            .lock()
            .unwrap()
            .contains_key(&(project_id, department_id))
    }
}

#[async_trait]
impl ProjectDepartmentRepository for InMemoryProjectDepartmentRepository {
    async fn insert(&self, link: ProjectDepartment) -> AppResult<ProjectDepartment> {
        let key = (link.project_id, link.department_id);
        let mut items = self.items.lock().unwrap();
        if items.contains_key(&key) {
            return Err(duplicate_key());
        }
        items.insert(key, link.clone());
        Ok(link)
    }

    async fn find_by_project_id(&self, project_id: Uuid) -> AppResult<Vec<ProjectDepartment>> {
        Ok(self
            .items
            .lock()
            .unwrap()
            .values()
            .filter(|l| l.project_id == project_id)
            .cloned()
            .collect())
    }
}

// --- テストコンテキスト ---

/// インメモリ実装を束ね、サービスの組み立てとデータ投入を提供する
pub struct TestContext {
    pub departments: Arc<InMemoryDepartmentRepository>,
    pub employees: Arc<InMemoryEmployeeRepository>,
    pub projects: Arc<InMemoryProjectRepository>,
    pub tasks: Arc<InMemoryTaskRepository>,
    pub milestones: Arc<InMemoryMilestoneRepository>,
    pub risks: Arc<InMemoryRiskRepository>,
    pub comments: Arc<InMemoryCommentRepository>,
    pub work_logs: Arc<InMemoryWorkLogRepository>,
    pub roles: Arc<InMemoryRoleRepository>,
    pub resources: Arc<InMemoryResourceRepository>,
    pub assignments: Arc<InMemoryAssignmentRepository>,
    pub dependencies: Arc<InMemoryDependencyRepository>,
    pub allocations: Arc<InMemoryAllocationRepository>,
    pub project_departments: Arc<InMemoryProjectDepartmentRepository>,
}

impl TestContext {
    pub fn new() -> Self {
        Self {
            departments: Arc::new(InMemoryDepartmentRepository::default()),
            employees: Arc::new(InMemoryEmployeeRepository::default()),
            projects: Arc::new(InMemoryProjectRepository::default()),
            tasks: Arc::new(InMemoryTaskRepository::default()),
            milestones: Arc::new(InMemoryMilestoneRepository::default()),
            risks: Arc::new(InMemoryRiskRepository::default()),
            comments: Arc::new(InMemoryCommentRepository::default()),
            work_logs: Arc::new(InMemoryWorkLogRepository::default()),
            roles: Arc::new(InMemoryRoleRepository::default()),
            resources: Arc::new(InMemoryResourceRepository::default()),
            assignments: Arc::new(InMemoryAssignmentRepository::default()),
            dependencies: Arc::new(InMemoryDependencyRepository::default()),
            allocations: Arc::new(InMemoryAllocationRepository::default()),
            project_departments: Arc::new(InMemoryProjectDepartmentRepository::default()),
        }
    }

    // --- サービスの組み立て ---

    pub fn project_service(&self) -> ProjectService {
        ProjectService::new(
            self.projects.clone(),
            self.employees.clone(),
            self.departments.clone(),
            self.project_departments.clone(),
        )
    }

    pub fn task_service(&self) -> TaskService {
        TaskService::new(self.tasks.clone(), self.projects.clone())
    }

    pub fn milestone_service(&self) -> MilestoneService {
        MilestoneService::new(self.milestones.clone(), self.projects.clone())
    }

    pub fn risk_service(&self) -> RiskService {
        RiskService::new(
            self.risks.clone(),
            self.projects.clone(),
            self.employees.clone(),
        )
    }

    pub fn dependency_service(&self) -> DependencyService {
        DependencyService::new(
            self.dependencies.clone(),
            self.tasks.clone(),
            self.projects.clone(),
        )
    }

    pub fn assignment_service(&self) -> AssignmentService {
        AssignmentService::new(
            self.assignments.clone(),
            self.tasks.clone(),
            self.employees.clone(),
            self.roles.clone(),
        )
    }

    pub fn comment_service(&self) -> CommentService {
        CommentService::new(
            self.comments.clone(),
            self.tasks.clone(),
            self.employees.clone(),
        )
    }

    pub fn work_log_service(&self) -> WorkLogService {
        WorkLogService::new(
            self.work_logs.clone(),
            self.tasks.clone(),
            self.employees.clone(),
        )
    }

    pub fn role_service(&self) -> RoleService {
        RoleService::new(self.roles.clone())
    }

    pub fn resource_service(&self) -> ResourceService {
        ResourceService::new(
            self.resources.clone(),
            self.allocations.clone(),
            self.tasks.clone(),
        )
    }

    pub fn employee_service(&self) -> EmployeeService {
        EmployeeService::new(self.employees.clone(), self.departments.clone())
    }

    pub fn department_service(&self) -> DepartmentService {
        DepartmentService::new(self.departments.clone())
    }

    // --- フィクスチャ ---

    pub async fn seed_department(&self, name: &str) -> Department {
        let department = Department {
            id: Uuid::new_v4(),
            name: name.to_string(),
        };
        self.departments.insert(department).await.unwrap()
    }

    pub async fn seed_employee(&self, name: &str) -> Employee {
        let department = self.seed_department(&format!("{} dept", name)).await;
        let employee = Employee {
            id: Uuid::new_v4(),
            name: name.to_string(),
            department_id: department.id,
        };
        self.employees.insert(employee).await.unwrap()
    }

    pub async fn seed_project(&self, name: &str, manager_id: Uuid) -> Project {
        let project = Project {
            id: Uuid::new_v4(),
            name: name.to_string(),
            start_date: Some(test_date(1)),
            end_date: None,
            status: "PLANNED".to_string(),
            manager_id,
        };
        self.projects.insert(project).await.unwrap()
    }

    pub async fn seed_task(&self, name: &str, project_id: Uuid) -> Task {
        let task = Task {
            id: Uuid::new_v4(),
            name: name.to_string(),
            project_id,
            start_date: None,
            end_date: None,
            status: "TODO".to_string(),
            priority: "NORMAL".to_string(),
        };
        self.tasks.insert(task).await.unwrap()
    }

    pub async fn seed_milestone(&self, name: &str, project_id: Uuid) -> ProjectMilestone {
        let milestone = ProjectMilestone {
            id: Uuid::new_v4(),
            project_id,
            name: name.to_string(),
            due_date: test_date(15),
            is_completed: false,
        };
        self.milestones.insert(milestone).await.unwrap()
    }

    pub async fn seed_risk(&self, title: &str, project_id: Uuid) -> ProjectRisk {
        let risk = ProjectRisk {
            id: Uuid::new_v4(),
            project_id,
            title: title.to_string(),
            description: None,
            level: "MEDIUM".to_string(),
            status: "OPEN".to_string(),
            owner_id: None,
            created_at: chrono::Utc::now(),
            updated_at: None,
        };
        self.risks.insert(risk).await.unwrap()
    }

    pub async fn seed_role(&self, name: &str) -> Role {
        let role = Role {
            id: Uuid::new_v4(),
            name: name.to_string(),
            can_read: true,
            can_write: true,
            can_delete: false,
        };
        self.roles.insert(role).await.unwrap()
    }

    pub async fn seed_resource(&self, name: &str) -> Resource {
        let resource = Resource {
            id: Uuid::new_v4(),
            name: name.to_string(),
            resource_type: "EQUIPMENT".to_string(),
            quantity: 10,
        };
        self.resources.insert(resource).await.unwrap()
    }
}

impl Default for TestContext {
    fn default() -> Self {
        Self::new()
    }
}

pub fn test_date(day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 8, day).unwrap()
}
