mod model;
mod test_config;
mod utils;
