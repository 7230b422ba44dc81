mod auth;
mod messages;
mod race;
