//! OpenAPI document for the HTTP surface, served at /api-docs/openapi.json.

use crate::db::ExecStatus;
use crate::models::{
    AgentFilter, CompanyFilter, NewStudent, StudentClassUpdate, StudentTitleUpdate,
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "rollcall API",
        description = "REST facade over the student and sales sample tables"
    ),
    paths(
        crate::handlers::student::create_student,
        crate::handlers::student::list_students,
        crate::handlers::student::update_student_title,
        crate::handlers::student::update_student_class,
        crate::handlers::student::delete_student,
        crate::handlers::sales::list_orders,
        crate::handlers::sales::items_by_code,
        crate::handlers::sales::agents_by_city,
        crate::handlers::sales::companies_by_name,
    ),
    components(schemas(
        NewStudent,
        StudentTitleUpdate,
        StudentClassUpdate,
        AgentFilter,
        CompanyFilter,
        ExecStatus
    )),
    tags(
        (name = "student", description = "Student roster records, keyed by ROLLID"),
        (name = "sales", description = "Read-only views over orders, items, agents, companies")
    )
)]
pub struct ApiDoc;
