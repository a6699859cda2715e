use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One clinical finding for a patient.
///
/// `image_data` holds opaque binary blobs (clinical photos, scans) that
/// pass through unmodified; on the wire each blob is a standard-base64
/// string and the sequence order is preserved. Nothing ties `date` to the
/// position of the diagnosis in its patient's sequence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Diagnosis {
    pub id: Uuid,
    pub date: DateTime<Utc>,
    pub description: String,
    #[serde(with = "base64_blobs")]
    pub image_data: Vec<Vec<u8>>,
    pub treatment_notes: String,
}

/// Serde adapter between `Vec<Vec<u8>>` and a JSON array of base64 strings.
mod base64_blobs {
    use base64::engine::general_purpose::STANDARD;
    use base64::Engine;
    use serde::de::Error;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(blobs: &[Vec<u8>], serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_seq(blobs.iter().map(|blob| STANDARD.encode(blob)))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Vec<Vec<u8>>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let encoded = Vec::<String>::deserialize(deserializer)?;
        encoded
            .iter()
            .map(|entry| STANDARD.decode(entry).map_err(D::Error::custom))
            .collect()
    }
}
