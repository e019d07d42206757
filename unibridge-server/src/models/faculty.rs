//! Faculty records and request payloads

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::validation::required_text;
use super::ValidationError;

/// Row of the `Faculty` table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
#[sqlx(rename_all = "camelCase")]
pub struct Faculty {
    pub faculty_name: String,
    pub faculty_office: Option<String>,
    pub faculty_phone: Option<String>,
    pub faculty_email: Option<String>,
}

/// POST /add_faculty body
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddFacultyRequest {
    pub faculty_name: String,
    pub faculty_office: String,
    pub faculty_main_phone: String,
    pub faculty_email: String,
}

/// Validated faculty member ready to insert
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewFaculty {
    pub faculty_name: String,
    pub faculty_office: String,
    pub faculty_phone: String,
    pub faculty_email: String,
}

impl TryFrom<AddFacultyRequest> for NewFaculty {
    type Error = ValidationError;

    fn try_from(req: AddFacultyRequest) -> Result<Self, Self::Error> {
        Ok(Self {
            faculty_name: required_text("facultyName", req.faculty_name)?,
            faculty_office: required_text("facultyOffice", req.faculty_office)?,
            faculty_phone: required_text("facultyMainPhone", req.faculty_main_phone)?,
            faculty_email: required_text("facultyEmail", req.faculty_email)?,
        })
    }
}

impl From<NewFaculty> for Faculty {
    fn from(f: NewFaculty) -> Self {
        Self {
            faculty_name: f.faculty_name,
            faculty_office: Some(f.faculty_office),
            faculty_phone: Some(f.faculty_phone),
            faculty_email: Some(f.faculty_email),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn main_phone_maps_to_phone_column() {
        let req: AddFacultyRequest = serde_json::from_str(
            r#"{"facultyName":"Grace Hopper","facultyOffice":"B-12",
                "facultyMainPhone":"555-0199","facultyEmail":"hopper@uni.edu"}"#,
        )
        .unwrap();
        let faculty = Faculty::from(NewFaculty::try_from(req).unwrap());

        let value = serde_json::to_value(&faculty).unwrap();
        assert_eq!(value["facultyPhone"], "555-0199");
        assert!(value.get("facultyMainPhone").is_none());
    }

    #[test]
    fn rejects_empty_office() {
        let req = AddFacultyRequest {
            faculty_name: "Grace Hopper".into(),
            faculty_office: String::new(),
            faculty_main_phone: "555-0199".into(),
            faculty_email: "hopper@uni.edu".into(),
        };
        let err = NewFaculty::try_from(req).unwrap_err();
        assert!(matches!(err, ValidationError::Empty { field: "facultyOffice" }));
    }
}
