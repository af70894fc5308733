pub mod body_leading_blank;
pub mod body_max_line_length;
