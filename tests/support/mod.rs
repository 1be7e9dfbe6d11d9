#![allow(dead_code)]

pub mod mongo_container;
pub mod stripe_mock;
