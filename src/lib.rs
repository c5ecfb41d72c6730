pub mod game;
pub mod gfx;
pub mod init;
