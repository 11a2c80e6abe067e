pub mod play;
pub mod run;
