pub mod footer_leading_blank;
