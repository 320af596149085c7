use mockito::Server;
use tencentcloud_vpc::error::AppError;
use tencentcloud_vpc::metadata::MetadataClient;

#[tokio::test]
async fn test_reads_region_and_vpc_of_primary_interface() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", "/placement/region")
        .with_status(200)
        .with_body("ap-guangzhou")
        .create_async()
        .await;
    server
        .mock("GET", "/mac")
        .with_status(200)
        .with_body("52:54:00:6b:1c:2d")
        .expect(2)
        .create_async()
        .await;
    server
        .mock("GET", "/network/interfaces/macs/52:54:00:6b:1c:2d/vpc-id")
        .with_status(200)
        .with_body("vpc-2wdhuyfj\n")
        .create_async()
        .await;
    server
        .mock("GET", "/network/interfaces/macs/52:54:00:6b:1c:2d/subnet-id")
        .with_status(200)
        .with_body("subnet-3x5lf5q0")
        .create_async()
        .await;

    let metadata = MetadataClient::new(server.url());
    assert!(metadata.base_url().ends_with('/'));
    assert_eq!(metadata.region().await.unwrap(), "ap-guangzhou");
    assert_eq!(metadata.vpc_id().await.unwrap(), "vpc-2wdhuyfj");
    assert_eq!(metadata.subnet_id().await.unwrap(), "subnet-3x5lf5q0");
}

#[tokio::test]
async fn test_missing_path_is_none() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", "/instance-id")
        .with_status(404)
        .create_async()
        .await;

    let metadata = MetadataClient::new(format!("{}/", server.url()));
    assert_eq!(metadata.get_optional("instance-id").await.unwrap(), None);
    let err = metadata.instance_id().await.unwrap_err();
    assert!(matches!(err, AppError::Metadata(_)));
}

#[tokio::test]
async fn test_server_error_is_metadata_error() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", "/placement/zone")
        .with_status(500)
        .with_body("boom")
        .create_async()
        .await;

    let metadata = MetadataClient::new(server.url());
    let err = metadata.zone().await.unwrap_err();
    match err {
        AppError::Metadata(msg) => assert!(msg.contains("boom")),
        other => panic!("Unexpected error: {:?}", other),
    }
}
