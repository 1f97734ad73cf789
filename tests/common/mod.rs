#![allow(dead_code)]

pub mod bitmap;
pub mod command;
