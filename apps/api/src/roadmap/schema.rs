//! Response schema handed to the model for roadmap generation.
//!
//! Uses the OpenAPI-subset dialect the Gemini API accepts (`OBJECT`, `STRING`, ...).
//! Enumerations are generated from the Rust enums so the schema and the decoder
//! can never disagree on the allowed labels.

use serde_json::{json, Value};

use crate::models::roadmap::{Difficulty, SkillCategory};

/// Fields every skill object must carry.
pub const REQUIRED_SKILL_FIELDS: [&str; 7] = [
    "id",
    "name",
    "category",
    "difficulty",
    "description",
    "importance",
    "resources",
];

pub fn roadmap_schema() -> Value {
    let categories: Vec<&str> = SkillCategory::ALL.iter().map(|c| c.label()).collect();
    let difficulties: Vec<&str> = Difficulty::ALL.iter().map(|d| d.label()).collect();

    json!({
        "type": "OBJECT",
        "properties": {
            "title": {
                "type": "STRING",
                "description": "A catchy title for the career path"
            },
            "summary": {
                "type": "STRING",
                "description": "A brief executive summary of this career path"
            },
            "skills": {
                "type": "ARRAY",
                "items": {
                    "type": "OBJECT",
                    "properties": {
                        "id": { "type": "STRING" },
                        "name": { "type": "STRING" },
                        "category": { "type": "STRING", "enum": categories },
                        "difficulty": { "type": "STRING", "enum": difficulties },
                        "description": { "type": "STRING" },
                        "importance": {
                            "type": "STRING",
                            "description": "Specific reason why this skill is needed for the user's interest"
                        },
                        "resources": {
                            "type": "ARRAY",
                            "items": { "type": "STRING" }
                        }
                    },
                    "required": REQUIRED_SKILL_FIELDS
                }
            }
        },
        "required": ["title", "summary", "skills"]
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schema_category_enum_is_closed_set() {
        let schema = roadmap_schema();
        let item = &schema["properties"]["skills"]["items"];
        let categories = item["properties"]["category"]["enum"].as_array().unwrap();
        assert_eq!(categories.len(), 5);
        assert!(categories.contains(&Value::from("AI & Machine Learning")));
        assert!(categories.contains(&Value::from("Soft Skills & Management")));

        let difficulties = item["properties"]["difficulty"]["enum"].as_array().unwrap();
        assert_eq!(
            difficulties,
            &vec![
                Value::from("Beginner"),
                Value::from("Intermediate"),
                Value::from("Advanced")
            ]
        );
    }

    #[test]
    fn test_schema_marks_every_skill_field_required() {
        let schema = roadmap_schema();
        let item = &schema["properties"]["skills"]["items"];
        let required: Vec<&str> = item["required"]
            .as_array()
            .unwrap()
            .iter()
            .map(|v| v.as_str().unwrap())
            .collect();
        assert_eq!(required, REQUIRED_SKILL_FIELDS);
        for field in REQUIRED_SKILL_FIELDS {
            assert!(item["properties"].get(field).is_some(), "{field} missing");
        }
        assert_eq!(schema["required"], json!(["title", "summary", "skills"]));
    }
}
