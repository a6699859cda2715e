use std::collections::BTreeMap;

use crate::models::Patient;

use super::keywords::KeywordExtractor;
use super::tagger::PartOfSpeechTagger;

/// Groups patients by the keyword signature of each diagnosis.
///
/// The signature is the sorted, comma-joined set of significant terms in
/// a diagnosis's description and treatment notes. One patient lands in
/// several groups when its diagnoses produce distinct signatures, and
/// several times in one group when they share a signature; both are the
/// defined contract, not accidents.
pub struct DiagnosisGrouper<T> {
    extractor: KeywordExtractor<T>,
}

impl<T: PartOfSpeechTagger> DiagnosisGrouper<T> {
    pub fn new(tagger: T) -> Self {
        Self {
            extractor: KeywordExtractor::new(tagger),
        }
    }

    /// Signature of one diagnosis's text fields.
    pub fn signature(&self, description: &str, treatment_notes: &str) -> String {
        self.extractor
            .extract(&format!("{description} {treatment_notes}"))
            .join(", ")
    }

    /// Patients keyed by the signature of each of their diagnoses.
    ///
    /// Within a group, order is patient iteration order, then diagnosis
    /// order. Diagnoses whose extraction comes back empty collect under
    /// the empty signature. Never fails.
    pub fn group(&self, patients: &[Patient]) -> BTreeMap<String, Vec<Patient>> {
        let mut groups: BTreeMap<String, Vec<Patient>> = BTreeMap::new();

        for patient in patients {
            for diagnosis in &patient.diagnoses {
                let key = self.signature(&diagnosis.description, &diagnosis.treatment_notes);
                groups.entry(key).or_default().push(patient.clone());
            }
        }

        groups
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use uuid::Uuid;

    use crate::analytics::tagger::{LexiconTagger, PassthroughTagger};
    use crate::models::Diagnosis;

    use super::*;

    fn clinic_tagger() -> LexiconTagger {
        LexiconTagger::new(&["flu", "hydration", "cold"], &["rest", "take"])
    }

    fn patient_with(name: &str, diagnoses: &[(&str, &str)]) -> Patient {
        Patient {
            id: Uuid::new_v4(),
            name: name.to_string(),
            age: 30,
            contact_number: "555-0100".to_string(),
            diagnoses: diagnoses
                .iter()
                .map(|(description, notes)| Diagnosis {
                    id: Uuid::new_v4(),
                    date: Utc::now(),
                    description: description.to_string(),
                    image_data: Vec::new(),
                    treatment_notes: notes.to_string(),
                })
                .collect(),
        }
    }

    #[test]
    fn signature_is_sorted_and_comma_joined() {
        let grouper = DiagnosisGrouper::new(clinic_tagger());
        let signature = grouper.signature("Flu", "Rest and hydration");
        assert_eq!(signature, "flu, hydration, rest");
    }

    #[test]
    fn patients_with_the_same_signature_share_a_group_in_encounter_order() {
        let grouper = DiagnosisGrouper::new(clinic_tagger());
        let first = patient_with("John Doe", &[("Flu", "Rest and hydration")]);
        let second = patient_with("Dana Cole", &[("flu", "rest, hydration")]);

        let groups = grouper.group(&[first.clone(), second.clone()]);

        let members = &groups["flu, hydration, rest"];
        assert_eq!(members.len(), 2);
        assert_eq!(members[0].id, first.id);
        assert_eq!(members[1].id, second.id);
    }

    #[test]
    fn distinct_signatures_put_one_patient_in_several_groups() {
        let grouper = DiagnosisGrouper::new(clinic_tagger());
        let patient = patient_with(
            "John Doe",
            &[("Flu", "Rest and hydration"), ("Cold", "Take it easy")],
        );

        let groups = grouper.group(&[patient.clone()]);

        assert_eq!(groups.len(), 2);
        assert_eq!(groups["flu, hydration, rest"][0].id, patient.id);
        assert_eq!(groups["cold, take"][0].id, patient.id);
    }

    #[test]
    fn shared_signature_across_diagnoses_duplicates_the_member() {
        let grouper = DiagnosisGrouper::new(clinic_tagger());
        let patient = patient_with(
            "John Doe",
            &[("Flu", "Rest and hydration"), ("flu rest", "hydration")],
        );

        let groups = grouper.group(&[patient.clone()]);

        // One entry per diagnosis under the shared key.
        let members = &groups["flu, hydration, rest"];
        assert_eq!(members.len(), 2);
        assert!(members.iter().all(|member| member.id == patient.id));
    }

    #[test]
    fn every_diagnosed_patient_lands_in_at_least_one_group() {
        let grouper = DiagnosisGrouper::new(clinic_tagger());
        let patients = [
            patient_with("John Doe", &[("Flu", "Rest and hydration")]),
            patient_with("Jane Smith", &[("Cold", "Take it easy")]),
            patient_with("Sam Okafor", &[("unremarkable", "none")]),
        ];

        let groups = grouper.group(&patients);

        for patient in &patients {
            let appears = groups
                .values()
                .any(|members| members.iter().any(|member| member.id == patient.id));
            assert!(appears, "{} missing from every group", patient.name);
        }
    }

    #[test]
    fn patient_without_diagnoses_joins_no_group() {
        let grouper = DiagnosisGrouper::new(clinic_tagger());
        let patient = patient_with("John Doe", &[]);

        let groups = grouper.group(&[patient]);
        assert!(groups.is_empty());
    }

    #[test]
    fn empty_extraction_collects_under_the_empty_signature() {
        let grouper = DiagnosisGrouper::new(PassthroughTagger);
        let patient = patient_with("John Doe", &[("Flu", "Rest and hydration")]);

        let groups = grouper.group(&[patient.clone()]);

        assert_eq!(groups.len(), 1);
        assert_eq!(groups[""][0].id, patient.id);
    }
}
