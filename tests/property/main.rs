// Property-based tests for time arithmetic and overlap detection

mod time_properties;
