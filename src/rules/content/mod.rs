pub mod blocked_words;
