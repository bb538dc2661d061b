use stockprompt_core::errors::*;

#[test]
fn feedback_pending_carries_awaited_id() {
    let err = GenerationError::FeedbackPending {
        awaiting: "tuple-42".into(),
    };
    assert!(err.to_string().contains("tuple-42"));
    assert_eq!(err.error_code(), error_code::FEEDBACK_PENDING);
    assert!(err.coded_string().starts_with("[FEEDBACK_PENDING]"));
}

#[test]
fn validation_error_out_of_pool_carries_value() {
    let err = ValidationError::OutOfPool {
        category: "material".into(),
        value: "plastic".into(),
    };
    let msg = err.to_string();
    assert!(msg.contains("material"));
    assert!(msg.contains("plastic"));
}

#[test]
fn timeout_is_the_only_transient_remote_error() {
    assert!(RemoteError::Timeout { after_ms: 20_000 }.is_transient());
    assert!(!RemoteError::NotConfigured.is_transient());
    assert!(!RemoteError::Unavailable {
        reason: "dns".into()
    }
    .is_transient());
    assert!(!RemoteError::QuotaExceeded {
        reason: "429".into()
    }
    .is_transient());
}

#[test]
fn remote_error_codes_split_timeout_from_outage() {
    assert_eq!(
        RemoteError::Timeout { after_ms: 1 }.error_code(),
        error_code::REMOTE_TIMEOUT
    );
    assert_eq!(
        RemoteError::NotConfigured.error_code(),
        error_code::REMOTE_UNAVAILABLE
    );
}

#[test]
fn malformed_reply_is_a_rejection_not_an_outage() {
    let err = RemoteError::MalformedResponse {
        reason: "missing choices".into(),
    };
    assert!(err.is_rejected_reply());
    assert!(!err.is_transient());
    assert_eq!(err.error_code(), error_code::VALIDATION_ERROR);
    assert!(!RemoteError::BadResponse {
        status: 503,
        body: "down".into()
    }
    .is_rejected_reply());
}

// --- From impls ---

#[test]
fn storage_error_converts_to_generation_error() {
    let err: GenerationError = StorageError::LockPoisoned.into();
    assert!(matches!(err, GenerationError::History(_)));
    assert_eq!(err.error_code(), error_code::STORAGE_ERROR);
}

#[test]
fn sub_errors_convert_to_umbrella() {
    let catalog: StockpromptError = CatalogError::EmptyOptions {
        category: "sky".into(),
    }
    .into();
    assert!(matches!(catalog, StockpromptError::Catalog(_)));

    let json_err = serde_json::from_str::<String>("not json").unwrap_err();
    let ser: StockpromptError = json_err.into();
    assert!(matches!(ser, StockpromptError::Serialization(_)));
    assert_eq!(ser.error_code(), error_code::SERIALIZATION_ERROR);
}
