mod test_wrappers;
