#![no_std]

pub mod board;
pub mod hardware;
