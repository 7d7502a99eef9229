pub mod ballistics;
pub mod constants;
pub mod motion;
pub mod window;
