use crate::*;
use assert_cmd::prelude::*;
use mockito::Matcher;
use predicates::prelude::*;
use s3browse::error::Result;
use s3browse::storage::UploadFile;
use tokio::fs;

pub fn tests(tests: &mut Vec<Trial>) {
    tests.extend(async_trials!(
        test_download_returns_exact_bytes,
        test_download_empty_object,
        test_upload_download_round_trip,
        test_download_non_existent_file,
        e2e_test_get_to_file,
        e2e_test_get_default_destination_name,
        e2e_test_get_to_stdout,
        e2e_test_get_non_existent_file
    ));
}

pub async fn test_download_returns_exact_bytes(mut backend: TestBackend) -> Result<()> {
    let bucket = new_bucket_name();
    let key = new_key();
    let content = random_bytes(1..64 * 1024);

    let mock = backend
        .server
        .mock("GET", object_path(&bucket, &key).as_str())
        .with_header("content-type", "application/octet-stream")
        .with_body(&content)
        .expect(1)
        .create_async()
        .await;

    let data = backend.client.download_file(&bucket, &key).await?;

    mock.assert_async().await;
    assert_eq!(&data[..], content.as_slice());
    Ok(())
}

pub async fn test_download_empty_object(mut backend: TestBackend) -> Result<()> {
    let bucket = new_bucket_name();
    backend
        .server
        .mock("GET", object_path(&bucket, "empty").as_str())
        .create_async()
        .await;

    let data = backend.client.download_file(&bucket, "empty").await?;
    assert!(data.is_empty());
    Ok(())
}

pub async fn test_upload_download_round_trip(mut backend: TestBackend) -> Result<()> {
    let bucket = new_bucket_name();
    let key = format!("nested/{}", new_key());
    let content = random_text(4096);

    let put = backend
        .server
        .mock("PUT", object_path(&bucket, &key).as_str())
        .match_body(Matcher::Regex(content.clone()))
        .expect(1)
        .create_async()
        .await;
    let get = backend
        .server
        .mock("GET", object_path(&bucket, &key).as_str())
        .with_body(&content)
        .expect(1)
        .create_async()
        .await;

    let file = UploadFile::new("payload.txt", content.clone());
    backend.client.upload_file(&bucket, &file, &key).await?;
    let data = backend.client.download_file(&bucket, &key).await?;

    put.assert_async().await;
    get.assert_async().await;
    assert_eq!(data, file.content);
    Ok(())
}

pub async fn test_download_non_existent_file(mut backend: TestBackend) -> Result<()> {
    let bucket = new_bucket_name();
    backend
        .server
        .mock("GET", object_path(&bucket, "gone.txt").as_str())
        .with_status(404)
        .with_body("NoSuchKey")
        .create_async()
        .await;

    let err = backend
        .client
        .download_file(&bucket, "gone.txt")
        .await
        .unwrap_err();

    assert!(err.is_transport());
    assert_eq!(err.status(), Some(reqwest::StatusCode::NOT_FOUND));
    Ok(())
}

pub async fn e2e_test_get_to_file(mut backend: TestBackend) -> Result<()> {
    let bucket = new_bucket_name();
    let content = random_bytes(100..1000);
    backend
        .server
        .mock("GET", object_path(&bucket, "dir/data.bin").as_str())
        .with_body(&content)
        .create_async()
        .await;

    let dest = TEST_FIXTURE.new_local_path("out/data.bin");

    backend
        .command()
        .arg("get")
        .arg(&bucket)
        .arg("dir/data.bin")
        .arg(&dest)
        .assert()
        .success()
        .stdout(predicate::str::contains("Downloaded"));

    assert_eq!(fs::read(&dest).await?, content);
    Ok(())
}

pub async fn e2e_test_get_default_destination_name(mut backend: TestBackend) -> Result<()> {
    let bucket = new_bucket_name();
    backend
        .server
        .mock("GET", object_path(&bucket, "reports/q1.csv").as_str())
        .with_body("a,b\n")
        .create_async()
        .await;

    let workdir = TEST_FIXTURE.new_local_path("");
    fs::create_dir_all(&workdir).await?;

    backend
        .command()
        .current_dir(&workdir)
        .arg("get")
        .arg(&bucket)
        .arg("reports/q1.csv")
        .assert()
        .success();

    assert_eq!(fs::read(workdir.join("q1.csv")).await?, b"a,b\n");
    Ok(())
}

pub async fn e2e_test_get_to_stdout(mut backend: TestBackend) -> Result<()> {
    let bucket = new_bucket_name();
    let content = random_text(128);
    backend
        .server
        .mock("GET", object_path(&bucket, "notes.txt").as_str())
        .with_body(&content)
        .create_async()
        .await;

    backend
        .command()
        .arg("get")
        .arg(&bucket)
        .arg("notes.txt")
        .arg("-")
        .assert()
        .success()
        .stdout(content.clone());
    Ok(())
}

pub async fn e2e_test_get_non_existent_file(mut backend: TestBackend) -> Result<()> {
    let bucket = new_bucket_name();
    backend
        .server
        .mock("GET", object_path(&bucket, "missing.txt").as_str())
        .with_status(404)
        .create_async()
        .await;

    let dest = TEST_FIXTURE.new_local_path("missing.txt");

    backend
        .command()
        .arg("get")
        .arg(&bucket)
        .arg("missing.txt")
        .arg(&dest)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to download"));

    assert!(!dest.exists());
    Ok(())
}
