mod test_http;
mod test_requests;
