use babelcast::domain::{ObjectKey, Transcript, TranscriptDocument, TranscriptParseError};

fn key() -> ObjectKey {
    ObjectKey::from_raw("transcription_texts/abc_hello.json")
}

#[test]
fn given_provider_document_when_parsing_then_takes_first_transcript() {
    let raw = r#"{
        "jobName": "transcription-1",
        "accountId": "123",
        "results": {
            "transcripts": [{"transcript": "hola mundo"}, {"transcript": "ignored"}],
            "items": []
        },
        "status": "COMPLETED"
    }"#;

    let transcript = Transcript::from_job_output(key(), raw).unwrap();

    assert_eq!(transcript.text, "hola mundo");
    assert_eq!(transcript.object_key, key());
}

#[test]
fn given_written_document_when_parsing_then_text_survives() {
    let raw = serde_json::to_string(&TranscriptDocument::single(None, "hola")).unwrap();
    let transcript = Transcript::from_job_output(key(), &raw).unwrap();
    assert_eq!(transcript.text, "hola");
}

#[test]
fn given_no_transcripts_when_parsing_then_returns_no_transcripts() {
    let raw = r#"{"results": {"transcripts": []}}"#;
    let err = Transcript::from_job_output(key(), raw).unwrap_err();
    assert_eq!(err, TranscriptParseError::NoTranscripts);
}

#[test]
fn given_blank_transcript_when_parsing_then_returns_empty_transcript() {
    let raw = r#"{"results": {"transcripts": [{"transcript": "  "}]}}"#;
    let err = Transcript::from_job_output(key(), raw).unwrap_err();
    assert_eq!(err, TranscriptParseError::EmptyTranscript);
}

#[test]
fn given_malformed_json_when_parsing_then_returns_invalid_document() {
    let err = Transcript::from_job_output(key(), "{not json").unwrap_err();
    assert!(matches!(err, TranscriptParseError::InvalidDocument(_)));

    let err = Transcript::from_job_output(key(), r#"{"status": "COMPLETED"}"#).unwrap_err();
    assert!(matches!(err, TranscriptParseError::InvalidDocument(_)));
}
