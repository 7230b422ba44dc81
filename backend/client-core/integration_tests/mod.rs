mod actions;
mod gateway;
mod helpers;
