mod test_format;
mod test_validation;
