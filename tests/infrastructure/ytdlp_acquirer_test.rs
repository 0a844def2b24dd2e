use kuching::application::ports::{AcquisitionError, AudioAcquirer};
use kuching::infrastructure::acquisition::YtDlpAcquirer;

fn ytdlp_available() -> bool {
    std::process::Command::new("yt-dlp")
        .arg("--version")
        .output()
        .map(|o| o.status.success())
        .unwrap_or(false)
}

#[tokio::test]
async fn given_missing_binary_when_acquiring_then_fails_with_spawn_error() {
    let dir = tempfile::tempdir().expect("tempdir");
    let acquirer = YtDlpAcquirer::new("/nonexistent/yt-dlp", dir.path()).expect("acquirer");

    let err = acquirer
        .acquire("https://example.com/watch?v=abc")
        .await
        .expect_err("missing binary");

    assert!(matches!(err, AcquisitionError::SpawnFailed(_)));
}

#[tokio::test]
async fn given_invalid_url_when_acquiring_then_fails_with_download_error() {
    if !ytdlp_available() {
        return;
    }

    let dir = tempfile::tempdir().expect("tempdir");
    let acquirer = YtDlpAcquirer::new("yt-dlp", dir.path()).expect("acquirer");

    let err = acquirer
        .acquire("not-a-real-url")
        .await
        .expect_err("invalid url");

    assert!(matches!(err, AcquisitionError::DownloadFailed(_)));
}

#[test]
fn given_new_acquirer_then_downloads_directory_is_created() {
    let dir = tempfile::tempdir().expect("tempdir");
    let downloads = dir.path().join("downloads");

    YtDlpAcquirer::new("yt-dlp", &downloads).expect("acquirer");

    assert!(downloads.is_dir());
}
