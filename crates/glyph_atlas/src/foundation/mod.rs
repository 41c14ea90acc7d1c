//! Foundation utilities shared by the atlas pipeline and its tools

pub mod logging;
