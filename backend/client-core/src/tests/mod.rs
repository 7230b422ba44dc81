mod config;
mod state;
mod store;
