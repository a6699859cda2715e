use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::diagnosis::Diagnosis;

/// A clinic patient record.
///
/// `id` is assigned by whoever creates the record and never changes.
/// Uniqueness across the record set is the repository's responsibility,
/// not checked here. The diagnosis sequence is owned exclusively by its
/// patient; insertion order is kept for display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Patient {
    pub id: Uuid,
    pub name: String,
    pub age: u32,
    pub contact_number: String,
    pub diagnoses: Vec<Diagnosis>,
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};

    use super::*;

    fn sample_patient() -> Patient {
        Patient {
            id: Uuid::new_v4(),
            name: "John Doe".to_string(),
            age: 30,
            contact_number: "123-456-7890".to_string(),
            diagnoses: vec![Diagnosis {
                id: Uuid::new_v4(),
                date: Utc.with_ymd_and_hms(2024, 12, 9, 14, 30, 0).unwrap(),
                description: "Flu".to_string(),
                image_data: vec![vec![0xFF, 0xD8, 0xFF], vec![0x89, 0x50]],
                treatment_notes: "Rest and hydration".to_string(),
            }],
        }
    }

    #[test]
    fn round_trip_preserves_every_field() {
        let patient = sample_patient();
        let encoded = serde_json::to_string(&patient).unwrap();
        let decoded: Patient = serde_json::from_str(&encoded).unwrap();
        assert_eq!(decoded, patient);
    }

    #[test]
    fn wire_names_are_camel_case() {
        let patient = sample_patient();
        let json: serde_json::Value = serde_json::to_value(&patient).unwrap();
        assert!(json.get("contactNumber").is_some());
        assert!(json.get("contact_number").is_none());
        assert!(json["diagnoses"][0].get("treatmentNotes").is_some());
        assert!(json["diagnoses"][0].get("imageData").is_some());
    }

    #[test]
    fn id_serializes_as_uuid_text() {
        let patient = sample_patient();
        let json: serde_json::Value = serde_json::to_value(&patient).unwrap();
        let id = json["id"].as_str().unwrap();
        assert_eq!(Uuid::parse_str(id).unwrap(), patient.id);
    }

    #[test]
    fn decodes_service_shaped_payload() {
        let raw = r#"{
            "id": "4a3f2e1d-0c9b-4a87-b654-321fedcba987",
            "name": "Jane Smith",
            "age": 25,
            "contactNumber": "987-654-3210",
            "diagnoses": []
        }"#;
        let patient: Patient = serde_json::from_str(raw).unwrap();
        assert_eq!(patient.name, "Jane Smith");
        assert_eq!(patient.age, 25);
        assert!(patient.diagnoses.is_empty());
    }
}
