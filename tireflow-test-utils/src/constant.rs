pub const TEST_USER_ID: i64 = 42;
pub const TEST_VEHICLE_ID: i64 = 7;
pub const TEST_VEHICLE_NUMBER: &str = "ABC-123";
pub const TEST_TIRE_SIZE: &str = "185/65R15";
pub const TEST_REQUEST_ID: i64 = 1001;
