//! Integration test driver for the `tests/integration/` submodules.
//!
//! Each `mod` below maps to a file that exercises the controller against
//! the recording mocks in `mock_hw`.  No hardware required.

mod mock_hw;
