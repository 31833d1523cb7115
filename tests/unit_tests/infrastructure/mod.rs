mod request_id_test;
mod text_sanitizer_test;
