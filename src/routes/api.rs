//! One route per SQL statement, as tabulated in the route table.

use crate::handlers::{
    agents_by_city, companies_by_name, create_student, delete_student, items_by_code,
    list_orders, list_students, update_student_class, update_student_title,
};
use crate::state::AppState;
use axum::{
    routing::{delete, get},
    Router,
};

pub fn api_routes(state: AppState) -> Router {
    Router::new()
        .route(
            "/student",
            get(list_students)
                .post(create_student)
                .put(update_student_title)
                .patch(update_student_class),
        )
        .route("/student/:id", delete(delete_student))
        .route("/orders", get(list_orders))
        .route("/listofitem/:id", get(items_by_code))
        .route("/agents", get(agents_by_city))
        .route("/company", get(companies_by_name))
        .with_state(state)
}
