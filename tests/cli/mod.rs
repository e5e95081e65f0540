
mod build;
mod check;
mod init;
mod list;
mod nav;
mod show;
mod state;
mod tree;
