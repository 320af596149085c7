mod model;
mod test_metadata;
mod vpc;
