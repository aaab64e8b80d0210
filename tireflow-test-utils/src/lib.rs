pub mod builder;
pub mod constant;
pub mod error;
pub mod fixtures;
pub mod setup;

pub use builder::TestBuilder;
pub use error::TestError;
pub use setup::TestSetup;

pub mod prelude {
    pub use crate::{
        constant::{
            TEST_REQUEST_ID, TEST_TIRE_SIZE, TEST_USER_ID, TEST_VEHICLE_ID, TEST_VEHICLE_NUMBER,
        },
        fixtures::factory,
        TestBuilder, TestError, TestSetup,
    };
}
