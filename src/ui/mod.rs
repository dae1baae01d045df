pub mod controls;
pub mod modal;
pub mod sections;
pub mod styles;
