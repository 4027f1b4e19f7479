use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::io::roster::RosterRecord;

pub const OUTPUT_FILE_PREFIX: &str = "assessmentResult-";
pub const OUTPUT_EXTENSION: &str = "xml";

/// Target file for one roster record
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OutputPlanEntry {
    pub result_id: String,
    pub path: PathBuf,
}

pub fn output_file_name(result_id: &str) -> String {
    format!("{OUTPUT_FILE_PREFIX}{result_id}.{OUTPUT_EXTENSION}")
}

/// One entry per record, in roster order. Pure path computation; paths are
/// unique because result ids are.
pub fn plan_outputs(output_dir: &Path, records: &[RosterRecord]) -> Vec<OutputPlanEntry> {
    records
        .iter()
        .map(|record| OutputPlanEntry {
            result_id: record.result_id.clone(),
            path: output_dir.join(output_file_name(&record.result_id)),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(number: &str, result_id: &str) -> RosterRecord {
        RosterRecord {
            candidate_number: number.to_string(),
            candidate_name: "Name".to_string(),
            candidate_account: None,
            candidate_id: None,
            result_id: result_id.to_string(),
        }
    }

    #[test]
    fn plans_one_file_per_record_in_order() {
        let records = vec![record("1002", "1002"), record("1001", "R-7")];
        let plan = plan_outputs(Path::new("/out"), &records);

        assert_eq!(plan.len(), 2);
        assert_eq!(plan[0].result_id, "1002");
        assert_eq!(plan[0].path, PathBuf::from("/out/assessmentResult-1002.xml"));
        assert_eq!(plan[1].result_id, "R-7");
        assert_eq!(plan[1].path, PathBuf::from("/out/assessmentResult-R-7.xml"));
    }

    #[test]
    fn serializes_with_camel_case_keys() {
        let entry = OutputPlanEntry {
            result_id: "1001".to_string(),
            path: PathBuf::from("/out/assessmentResult-1001.xml"),
        };
        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(json["resultId"], "1001");
        assert_eq!(json["path"], "/out/assessmentResult-1001.xml");
    }
}
