use super::*;

/// Tests storing an upload under the kind's directory.
///
/// Expected: a `/static/dogs/...` URL with the lowercased extension, and
/// the bytes on disk
#[tokio::test]
async fn stores_upload_with_generated_name() -> Result<(), AppError> {
    let root = temp_static_root().await;
    let store = ImageStore::new(&root);

    let url = store.save(ImageKind::Dog, png_upload("Photo.PNG")).await?;

    assert!(url.starts_with("/static/dogs/"));
    assert!(url.ends_with(".png"));
    assert!(!url.contains("Photo"));

    let file = root.join(url.strip_prefix("/static/").unwrap());
    let stored = tokio::fs::read(&file).await.unwrap();
    assert_eq!(stored, vec![0x89, 0x50, 0x4e, 0x47]);

    Ok(())
}

/// Tests that an unusable extension falls back to jpg.
#[tokio::test]
async fn defaults_extension_for_unusable_name() -> Result<(), AppError> {
    let root = temp_static_root().await;
    let store = ImageStore::new(&root);

    let url = store.save(ImageKind::News, png_upload("noext")).await?;

    assert!(url.starts_with("/static/news/"));
    assert!(url.ends_with(".jpg"));

    Ok(())
}

/// Tests rejecting a non-image content type.
#[tokio::test]
async fn rejects_unsupported_content_type() {
    let root = temp_static_root().await;
    let store = ImageStore::new(&root);

    let upload = ImageUpload {
        file_name: Some("notes.txt".to_string()),
        content_type: Some("text/plain".to_string()),
        data: vec![1, 2, 3],
    };

    let result = store.save(ImageKind::Dog, upload).await;

    match result {
        Err(AppError::BadRequest(message)) => {
            assert_eq!(message, "Unsupported image type text/plain, expected JPEG or PNG");
        }
        other => panic!("expected BadRequest, got {other:?}"),
    }
}
