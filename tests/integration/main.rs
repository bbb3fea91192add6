//! End-to-end tests for the BloodLink coordination core.

mod helpers;

mod countdown_test;
mod donor_test;
mod notification_test;
mod request_test;
