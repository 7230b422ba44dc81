mod app_state;
mod directory;
mod messages;
mod session;
