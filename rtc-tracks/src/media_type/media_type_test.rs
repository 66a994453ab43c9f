use super::*;

#[test]
fn test_new_media_type() {
    let tests = vec![
        ("Unspecified", MediaType::Unspecified),
        ("audio", MediaType::Audio),
        ("video", MediaType::Video),
        ("screen", MediaType::Unspecified),
    ];

    for (raw, expected) in tests {
        assert_eq!(MediaType::from(raw), expected, "testCase: {raw}");
    }
}

#[test]
fn test_media_type_string() {
    let tests = vec![
        (MediaType::Unspecified, "Unspecified"),
        (MediaType::Audio, "audio"),
        (MediaType::Video, "video"),
    ];

    for (media_type, expected) in tests {
        assert_eq!(media_type.to_string(), expected);
    }
}

#[test]
fn test_new_video_type() {
    let tests = vec![
        ("Unspecified", VideoType::Unspecified),
        ("camera", VideoType::Camera),
        ("desktop", VideoType::Desktop),
        ("window", VideoType::Unspecified),
    ];

    for (raw, expected) in tests {
        assert_eq!(VideoType::from(raw), expected, "testCase: {raw}");
    }
}

#[test]
fn test_video_type_string() {
    assert_eq!(VideoType::Camera.to_string(), "camera");
    assert_eq!(VideoType::Desktop.to_string(), "desktop");
    assert_eq!(VideoType::Unspecified.to_string(), "Unspecified");
}

#[test]
fn test_media_kinds_serde() {
    assert_eq!(
        serde_json::to_string(&MediaType::Audio).unwrap(),
        "\"audio\""
    );
    assert_eq!(
        serde_json::from_str::<VideoType>("\"desktop\"").unwrap(),
        VideoType::Desktop
    );
}
