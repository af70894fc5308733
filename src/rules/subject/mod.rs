pub mod subject_case;
pub mod subject_empty;
pub mod subject_full_stop;
