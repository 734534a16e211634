use super::*;

// --- GeolocationError ---

#[test]
fn code_one_is_denied() {
    assert_eq!(GeolocationError::from_code(1), GeolocationError::Denied);
}

#[test]
fn code_two_is_unavailable() {
    assert_eq!(GeolocationError::from_code(2), GeolocationError::Unavailable);
}

#[test]
fn code_three_is_timeout() {
    assert_eq!(GeolocationError::from_code(3), GeolocationError::Timeout);
}

#[test]
fn unknown_code_is_unavailable() {
    assert_eq!(GeolocationError::from_code(99), GeolocationError::Unavailable);
}

#[test]
fn each_kind_has_a_distinct_message() {
    let messages = [
        GeolocationError::Denied.to_string(),
        GeolocationError::Unavailable.to_string(),
        GeolocationError::Timeout.to_string(),
        GeolocationError::Unsupported.to_string(),
    ];
    for (i, a) in messages.iter().enumerate() {
        for b in &messages[i + 1..] {
            assert_ne!(a, b);
        }
    }
}

// --- TrackingFetchError ---

#[test]
fn not_found_names_the_order() {
    let err = TrackingFetchError::not_found("42");
    assert_eq!(err.message(), "could not find order 42");
}

#[test]
fn json_error_field_wins() {
    let err = TrackingFetchError::from_error_body("42", r#"{"error": "Order not found"}"#);
    assert_eq!(err.message(), "Order not found");
}

#[test]
fn json_message_field_is_accepted() {
    let err = TrackingFetchError::from_error_body("42", r#"{"message": "gone"}"#);
    assert_eq!(err.message(), "gone");
}

#[test]
fn plain_text_body_is_used_verbatim() {
    let err = TrackingFetchError::from_error_body("42", "Order already archived");
    assert_eq!(err.message(), "Order already archived");
}

#[test]
fn blank_body_falls_back_to_not_found() {
    let err = TrackingFetchError::from_error_body("42", "   \n");
    assert_eq!(err.message(), "could not find order 42");
}

#[test]
fn json_without_known_field_is_treated_as_text() {
    let err = TrackingFetchError::from_error_body("42", r#"{"status": 404}"#);
    assert_eq!(err.message(), r#"{"status": 404}"#);
}

// --- SessionInitError ---

#[test]
fn fetch_errors_convert_into_init_errors() {
    let err: SessionInitError = TrackingFetchError::not_found("9").into();
    assert_eq!(err.to_string(), "could not find order 9");
}

#[test]
fn container_missing_has_its_own_message() {
    assert_eq!(
        SessionInitError::ContainerMissing.to_string(),
        "map container missing from the page"
    );
}
