pub mod activity;
pub mod goal;
pub mod measurement;
pub mod user;
