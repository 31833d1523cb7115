mod language_test;
mod media_format_test;
mod transcript_test;
