pub mod assessment_result;
