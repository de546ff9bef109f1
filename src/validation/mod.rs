//! Payload and identifier validation for the project API.
//!
//! The new-project schema is an ordered rule chain evaluated short-circuit:
//! the first failing rule produces the error message and later rules never
//! run. Rules are pure functions over the raw JSON map and never mutate it.

use serde_json::{Map, Value};
use uuid::Uuid;

/// Accepted values for the `lookingFor` field.
pub const LOOKING_FOR_VALUES: &[&str] = &["mentor", "student", "both"];

type Rule = fn(&Map<String, Value>) -> Result<(), String>;

/// Rules in check order: name, isInitiated, link, stacks, fieldOfStudy,
/// lookingFor, idea.
const NEW_PROJECT_RULES: &[Rule] = &[
    check_name,
    check_is_initiated,
    check_link,
    check_stacks,
    check_field_of_study,
    check_looking_for,
    check_idea,
];

/// Validate a candidate new-project payload.
///
/// Returns the first failing rule's message. Extra keys are not rejected
/// here; the handler drops them when constructing the entity.
pub fn validate_new_project(body: &Value) -> Result<(), String> {
    let fields = body
        .as_object()
        .ok_or_else(|| "Request body must be a JSON object".to_string())?;

    for rule in NEW_PROJECT_RULES {
        rule(fields)?;
    }

    Ok(())
}

/// Syntactic check on a path-supplied project identifier.
///
/// Malformed tokens are rejected before any store lookup; no coercion.
pub fn parse_project_id(raw: &str) -> Option<Uuid> {
    Uuid::try_parse(raw).ok()
}

fn require_string(fields: &Map<String, Value>, key: &str, label: &str) -> Result<(), String> {
    match fields.get(key) {
        None | Some(Value::Null) => Err(format!("{label} is required")),
        Some(Value::String(s)) if s.is_empty() => {
            Err(format!("{label} is not allowed to be empty"))
        }
        Some(Value::String(_)) => Ok(()),
        Some(_) => Err(format!("{label} must be a string")),
    }
}

fn check_name(fields: &Map<String, Value>) -> Result<(), String> {
    require_string(fields, "name", "Project Name")
}

fn check_is_initiated(fields: &Map<String, Value>) -> Result<(), String> {
    match fields.get("isInitiated") {
        None | Some(Value::Null) => Err("Project Started ? [True / False] is required".to_string()),
        Some(Value::Bool(_)) => Ok(()),
        Some(_) => Err("Project Started ? [True / False] must be a boolean".to_string()),
    }
}

// Only runs after check_is_initiated, so the flag is a well-formed boolean here.
fn check_link(fields: &Map<String, Value>) -> Result<(), String> {
    let initiated = matches!(fields.get("isInitiated"), Some(Value::Bool(true)));

    if initiated {
        require_string(fields, "link", "Project Link")
    } else if fields.contains_key("link") {
        // Any present value, including empty string or null, is an error.
        Err("Project Link is not allowed".to_string())
    } else {
        Ok(())
    }
}

fn check_stacks(fields: &Map<String, Value>) -> Result<(), String> {
    require_string(fields, "stacks", "Stacks in use")
}

fn check_field_of_study(fields: &Map<String, Value>) -> Result<(), String> {
    require_string(fields, "fieldOfStudy", "Field of Study")
}

fn check_looking_for(fields: &Map<String, Value>) -> Result<(), String> {
    require_string(fields, "lookingFor", "Looking For")?;

    match fields.get("lookingFor") {
        Some(Value::String(s)) if LOOKING_FOR_VALUES.contains(&s.as_str()) => Ok(()),
        _ => Err(format!(
            "Looking For must be one of [{}]",
            LOOKING_FOR_VALUES.join(", ")
        )),
    }
}

fn check_idea(fields: &Map<String, Value>) -> Result<(), String> {
    require_string(fields, "idea", "Project Idea")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn valid_payload() -> Value {
        json!({
            "name": "X",
            "isInitiated": false,
            "stacks": "Go",
            "fieldOfStudy": "CS",
            "lookingFor": "mentor",
            "idea": "Y"
        })
    }

    fn valid_initiated_payload() -> Value {
        json!({
            "name": "X",
            "isInitiated": true,
            "link": "https://github.com/example/x",
            "stacks": "Go",
            "fieldOfStudy": "CS",
            "lookingFor": "both",
            "idea": "Y"
        })
    }

    #[test]
    fn accepts_valid_payloads() {
        assert!(validate_new_project(&valid_payload()).is_ok());
        assert!(validate_new_project(&valid_initiated_payload()).is_ok());
    }

    #[test]
    fn rejects_non_object_bodies() {
        assert!(validate_new_project(&json!("a string")).is_err());
        assert!(validate_new_project(&json!([1, 2, 3])).is_err());
        assert!(validate_new_project(&json!(null)).is_err());
    }

    #[test]
    fn name_is_required_and_non_empty() {
        let mut payload = valid_payload();
        payload.as_object_mut().unwrap().remove("name");
        assert_eq!(
            validate_new_project(&payload).unwrap_err(),
            "Project Name is required"
        );

        payload["name"] = json!("");
        assert_eq!(
            validate_new_project(&payload).unwrap_err(),
            "Project Name is not allowed to be empty"
        );

        payload["name"] = json!(42);
        assert_eq!(
            validate_new_project(&payload).unwrap_err(),
            "Project Name must be a string"
        );
    }

    #[test]
    fn is_initiated_must_be_a_boolean() {
        let mut payload = valid_payload();
        payload.as_object_mut().unwrap().remove("isInitiated");
        assert_eq!(
            validate_new_project(&payload).unwrap_err(),
            "Project Started ? [True / False] is required"
        );

        payload["isInitiated"] = json!("yes");
        assert_eq!(
            validate_new_project(&payload).unwrap_err(),
            "Project Started ? [True / False] must be a boolean"
        );
    }

    #[test]
    fn link_forbidden_when_not_initiated() {
        // Any link value at all, including empty string and null, is rejected.
        for value in [json!("https://x.dev"), json!(""), json!(null)] {
            let mut payload = valid_payload();
            payload["link"] = value;
            assert_eq!(
                validate_new_project(&payload).unwrap_err(),
                "Project Link is not allowed"
            );
        }
    }

    #[test]
    fn link_required_when_initiated() {
        let mut payload = valid_initiated_payload();
        payload.as_object_mut().unwrap().remove("link");
        assert_eq!(
            validate_new_project(&payload).unwrap_err(),
            "Project Link is required"
        );

        payload["link"] = json!("");
        assert_eq!(
            validate_new_project(&payload).unwrap_err(),
            "Project Link is not allowed to be empty"
        );
    }

    #[test]
    fn looking_for_must_be_in_enum() {
        let mut payload = valid_payload();

        for accepted in LOOKING_FOR_VALUES {
            payload["lookingFor"] = json!(accepted);
            assert!(validate_new_project(&payload).is_ok());
        }

        payload["lookingFor"] = json!("investor");
        assert_eq!(
            validate_new_project(&payload).unwrap_err(),
            "Looking For must be one of [mentor, student, both]"
        );

        let removed = payload.as_object_mut().unwrap().remove("lookingFor");
        assert!(removed.is_some());
        assert_eq!(
            validate_new_project(&payload).unwrap_err(),
            "Looking For is required"
        );
    }

    #[test]
    fn stacks_field_of_study_and_idea_are_required() {
        for (key, label) in [
            ("stacks", "Stacks in use"),
            ("fieldOfStudy", "Field of Study"),
            ("idea", "Project Idea"),
        ] {
            let mut payload = valid_payload();
            payload.as_object_mut().unwrap().remove(key);
            assert_eq!(
                validate_new_project(&payload).unwrap_err(),
                format!("{label} is required")
            );
        }
    }

    #[test]
    fn reports_first_failure_in_check_order() {
        // Both name and stacks are missing; name is checked first.
        let payload = json!({
            "isInitiated": false,
            "fieldOfStudy": "CS",
            "lookingFor": "mentor",
            "idea": "Y"
        });
        assert_eq!(
            validate_new_project(&payload).unwrap_err(),
            "Project Name is required"
        );
    }

    #[test]
    fn extra_fields_do_not_fail_validation() {
        let mut payload = valid_payload();
        payload["unexpected"] = json!({ "nested": true });
        assert!(validate_new_project(&payload).is_ok());
    }

    #[test]
    fn parse_project_id_accepts_uuids_only() {
        let id = Uuid::new_v4();
        assert_eq!(parse_project_id(&id.to_string()), Some(id));

        assert_eq!(parse_project_id("not-an-id"), None);
        assert_eq!(parse_project_id(""), None);
        assert_eq!(parse_project_id("1234"), None);
        assert_eq!(parse_project_id("zzzzzzzz-zzzz-zzzz-zzzz-zzzzzzzzzzzz"), None);
    }
}
