use abi::{Employee, EmployeeId, Error};
use async_trait::async_trait;

use crate::{EmployeeRepo, HmsManager};

#[async_trait]
impl EmployeeRepo for HmsManager {
    async fn fetch_employee(&self, id: EmployeeId) -> Result<Employee, Error> {
        sqlx::query_as("SELECT * FROM hms.employees WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| Error::not_found("employee", id))
    }

    async fn fetch_employees(&self) -> Result<Vec<Employee>, Error> {
        let employees = sqlx::query_as("SELECT * FROM hms.employees ORDER BY id")
            .fetch_all(&self.pool)
            .await?;
        Ok(employees)
    }
}
