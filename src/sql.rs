//! Statement text for every route. One statement per route, positional `?`
//! placeholders, bound in the order they appear.

pub const INSERT_STUDENT: &str =
    "INSERT INTO student (NAME, TITLE, CLASS, SECTION, ROLLID) VALUES (?, ?, ?, ?, ?)";

pub const SELECT_STUDENTS: &str = "SELECT * FROM student";

/// PUT /student: only TITLE and SECTION change.
pub const UPDATE_STUDENT_TITLE: &str =
    "UPDATE student SET TITLE = ?, SECTION = ? WHERE ROLLID = ?";

/// PATCH /student: only CLASS and SECTION change.
pub const UPDATE_STUDENT_CLASS: &str =
    "UPDATE student SET CLASS = ?, SECTION = ? WHERE ROLLID = ?";

pub const DELETE_STUDENT: &str = "DELETE FROM student WHERE ROLLID = ?";

pub const SELECT_ORDERS: &str = "SELECT * FROM orders";

pub const SELECT_ITEMS_BY_CODE: &str = "SELECT * FROM listofitem WHERE ITEMCODE = ?";

pub const SELECT_AGENTS_BY_AREA: &str = "SELECT * FROM agents WHERE WORKING_AREA = ?";

pub const SELECT_COMPANIES_BY_NAME: &str = "SELECT * FROM company WHERE COMPANY_NAME = ?";
