// Live tests against the VPC service. They need TENCENTCLOUD_SECRET_ID and
// TENCENTCLOUD_SECRET_KEY and are ignored by default.
mod common;
