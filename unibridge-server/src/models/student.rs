//! Student records and request payloads

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::validation::required_text;
use super::{StudentNum, ValidationError};

/// Row of the `student` table, serialized with its column names
#[derive(Debug, Clone, PartialEq, Eq, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
#[sqlx(rename_all = "camelCase")]
pub struct Student {
    pub student_num: String,
    pub f_name: String,
    pub l_name: String,
    pub student_email: String,
    pub student_main_phone: String,
}

/// POST /add_user body
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddStudentRequest {
    pub student_num: String,
    pub f_name: String,
    pub l_name: String,
    pub student_email: String,
    pub student_main_phone: String,
}

/// Validated student ready to insert
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewStudent {
    pub student_num: StudentNum,
    pub f_name: String,
    pub l_name: String,
    pub student_email: String,
    pub student_main_phone: String,
}

impl TryFrom<AddStudentRequest> for NewStudent {
    type Error = ValidationError;

    fn try_from(req: AddStudentRequest) -> Result<Self, Self::Error> {
        Ok(Self {
            student_num: StudentNum::new(&req.student_num)?,
            f_name: required_text("fName", req.f_name)?,
            l_name: required_text("lName", req.l_name)?,
            student_email: required_text("studentEmail", req.student_email)?,
            student_main_phone: required_text("studentMainPhone", req.student_main_phone)?,
        })
    }
}

impl From<NewStudent> for Student {
    fn from(s: NewStudent) -> Self {
        Self {
            student_num: s.student_num.into_string(),
            f_name: s.f_name,
            l_name: s.l_name,
            student_email: s.student_email,
            student_main_phone: s.student_main_phone,
        }
    }
}

/// PUT /students/{studentNum} body
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateContactRequest {
    pub student_email: String,
    pub student_main_phone: String,
}

/// Validated contact fields for an existing student
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactUpdate {
    pub student_email: String,
    pub student_main_phone: String,
}

impl TryFrom<UpdateContactRequest> for ContactUpdate {
    type Error = ValidationError;

    fn try_from(req: UpdateContactRequest) -> Result<Self, Self::Error> {
        Ok(Self {
            student_email: required_text("studentEmail", req.student_email)?,
            student_main_phone: required_text("studentMainPhone", req.student_main_phone)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(json: &str) -> AddStudentRequest {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn decodes_camel_case_body() {
        let req = request(
            r#"{"studentNum":"1001","fName":"Ada","lName":"Lovelace",
                "studentEmail":"ada@uni.edu","studentMainPhone":"555-0100"}"#,
        );
        let student = NewStudent::try_from(req).unwrap();
        assert_eq!(student.student_num.as_str(), "1001");
        assert_eq!(student.f_name, "Ada");
        assert_eq!(student.student_main_phone, "555-0100");
    }

    #[test]
    fn missing_field_fails_to_decode() {
        let result: Result<AddStudentRequest, _> =
            serde_json::from_str(r#"{"studentNum":"1001","fName":"Ada"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn rejects_blank_name() {
        let req = request(
            r#"{"studentNum":"1001","fName":" ","lName":"Lovelace",
                "studentEmail":"ada@uni.edu","studentMainPhone":"555-0100"}"#,
        );
        let err = NewStudent::try_from(req).unwrap_err();
        assert!(matches!(err, ValidationError::Empty { field: "fName" }));
    }

    #[test]
    fn text_fields_are_not_rewritten() {
        let req = request(
            r#"{"studentNum":"7","fName":"  Ada","lName":"Lovelace ",
                "studentEmail":" a@b ","studentMainPhone":"555"}"#,
        );
        let student = NewStudent::try_from(req).unwrap();
        assert_eq!(student.f_name, "  Ada");
        assert_eq!(student.l_name, "Lovelace ");
        assert_eq!(student.student_email, " a@b ");
    }

    #[test]
    fn padded_student_num_is_rejected_not_trimmed() {
        let req = request(
            r#"{"studentNum":" 7 ","fName":"Ada","lName":"Lovelace",
                "studentEmail":"a@b","studentMainPhone":"555"}"#,
        );
        let err = NewStudent::try_from(req).unwrap_err();
        assert!(matches!(err, ValidationError::InvalidFormat { field: "studentNum", .. }));
    }

    #[test]
    fn email_and_phone_are_opaque() {
        let req = UpdateContactRequest {
            student_email: "not-an-email".into(),
            student_main_phone: "ext. 42".into(),
        };
        assert!(ContactUpdate::try_from(req).is_ok());
    }

    #[test]
    fn student_serializes_with_column_names() {
        let student = Student {
            student_num: "1001".into(),
            f_name: "Ada".into(),
            l_name: "Lovelace".into(),
            student_email: "ada@uni.edu".into(),
            student_main_phone: "555-0100".into(),
        };
        let value = serde_json::to_value(&student).unwrap();
        assert_eq!(value["studentNum"], "1001");
        assert_eq!(value["fName"], "Ada");
        assert_eq!(value["lName"], "Lovelace");
        assert_eq!(value["studentEmail"], "ada@uni.edu");
        assert_eq!(value["studentMainPhone"], "555-0100");
    }
}
