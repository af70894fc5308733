pub mod header_max_length;
pub mod scope_empty;
pub mod type_empty;
pub mod type_enum;
