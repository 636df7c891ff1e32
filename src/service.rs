//! Statement execution against MySQL: one function per route's statement.

use crate::db::{row_to_json, ExecStatus};
use crate::error::AppError;
use crate::models::{NewStudent, StudentClassUpdate, StudentTitleUpdate};
use crate::sql;
use serde_json::Value;
use sqlx::MySqlPool;

pub struct RecordService;

impl RecordService {
    /// INSERT one student row. Returns the driver's execution status.
    pub async fn insert_student(
        pool: &MySqlPool,
        student: &NewStudent,
    ) -> Result<ExecStatus, AppError> {
        tracing::debug!(sql = %sql::INSERT_STUDENT, rollid = student.rollid, "exec");
        let res = sqlx::query(sql::INSERT_STUDENT)
            .bind(&student.name)
            .bind(&student.title)
            .bind(&student.class)
            .bind(&student.section)
            .bind(student.rollid)
            .execute(pool)
            .await?;
        Ok(res.into())
    }

    /// All student rows, unfiltered.
    pub async fn list_students(pool: &MySqlPool) -> Result<Vec<Value>, AppError> {
        Self::fetch_rows(pool, sql::SELECT_STUDENTS, &[]).await
    }

    /// UPDATE TITLE and SECTION for one ROLLID. Other columns are untouched.
    pub async fn update_student_title(
        pool: &MySqlPool,
        update: &StudentTitleUpdate,
    ) -> Result<ExecStatus, AppError> {
        tracing::debug!(sql = %sql::UPDATE_STUDENT_TITLE, rollid = update.rollid, "exec");
        let res = sqlx::query(sql::UPDATE_STUDENT_TITLE)
            .bind(&update.title)
            .bind(&update.section)
            .bind(update.rollid)
            .execute(pool)
            .await?;
        Ok(res.into())
    }

    /// UPDATE CLASS and SECTION for one ROLLID. Other columns are untouched.
    pub async fn update_student_class(
        pool: &MySqlPool,
        update: &StudentClassUpdate,
    ) -> Result<ExecStatus, AppError> {
        tracing::debug!(sql = %sql::UPDATE_STUDENT_CLASS, rollid = update.rollid, "exec");
        let res = sqlx::query(sql::UPDATE_STUDENT_CLASS)
            .bind(&update.class)
            .bind(&update.section)
            .bind(update.rollid)
            .execute(pool)
            .await?;
        Ok(res.into())
    }

    /// DELETE one student by ROLLID.
    pub async fn delete_student(pool: &MySqlPool, rollid: i64) -> Result<ExecStatus, AppError> {
        tracing::debug!(sql = %sql::DELETE_STUDENT, rollid, "exec");
        let res = sqlx::query(sql::DELETE_STUDENT)
            .bind(rollid)
            .execute(pool)
            .await?;
        Ok(res.into())
    }

    /// All order rows, opaque passthrough.
    pub async fn list_orders(pool: &MySqlPool) -> Result<Vec<Value>, AppError> {
        Self::fetch_rows(pool, sql::SELECT_ORDERS, &[]).await
    }

    /// Item rows matching one ITEMCODE.
    pub async fn items_by_code(pool: &MySqlPool, code: &str) -> Result<Vec<Value>, AppError> {
        Self::fetch_rows(pool, sql::SELECT_ITEMS_BY_CODE, &[code]).await
    }

    /// Agent rows whose WORKING_AREA matches `city` exactly.
    pub async fn agents_by_area(pool: &MySqlPool, city: &str) -> Result<Vec<Value>, AppError> {
        Self::fetch_rows(pool, sql::SELECT_AGENTS_BY_AREA, &[city]).await
    }

    /// Company rows whose COMPANY_NAME matches `name` exactly.
    pub async fn companies_by_name(pool: &MySqlPool, name: &str) -> Result<Vec<Value>, AppError> {
        Self::fetch_rows(pool, sql::SELECT_COMPANIES_BY_NAME, &[name]).await
    }

    async fn fetch_rows(
        pool: &MySqlPool,
        sql: &str,
        params: &[&str],
    ) -> Result<Vec<Value>, AppError> {
        tracing::debug!(sql = %sql, params = ?params, "query");
        let mut query = sqlx::query(sql);
        for p in params {
            query = query.bind(*p);
        }
        let rows = query.fetch_all(pool).await?;
        Ok(rows.iter().map(row_to_json).collect())
    }
}
