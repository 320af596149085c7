mod test_request;
mod test_response;
mod test_retry;
