use reqwest::StatusCode;
use the_coach_leetify::LeetifyError;

#[test]
fn test_status_mapping() {
    assert!(LeetifyError::from_status(StatusCode::OK).is_none());
    assert!(matches!(
        LeetifyError::from_status(StatusCode::NOT_FOUND),
        Some(LeetifyError::NotFound)
    ));
    assert!(matches!(
        LeetifyError::from_status(StatusCode::TOO_MANY_REQUESTS),
        Some(LeetifyError::RateLimited)
    ));
    assert!(matches!(
        LeetifyError::from_status(StatusCode::UNAUTHORIZED),
        Some(LeetifyError::Unauthorized)
    ));
    assert!(matches!(
        LeetifyError::from_status(StatusCode::FORBIDDEN),
        Some(LeetifyError::Unauthorized)
    ));
    assert!(matches!(
        LeetifyError::from_status(StatusCode::BAD_GATEWAY),
        Some(LeetifyError::UnexpectedStatus(StatusCode::BAD_GATEWAY))
    ));
}

#[test]
fn test_user_messages() {
    assert!(LeetifyError::NotFound.user_message().contains("No Leetify profile"));
    assert!(LeetifyError::RateLimited.user_message().contains("try again later"));
    assert!(LeetifyError::Unauthorized.user_message().contains("API key"));
    assert_eq!(
        LeetifyError::UnexpectedStatus(StatusCode::INTERNAL_SERVER_ERROR).user_message(),
        "Failed to fetch stats from Leetify."
    );
    assert!(LeetifyError::InvalidSteamId("abc".to_string())
        .user_message()
        .contains("**abc**"));
}
