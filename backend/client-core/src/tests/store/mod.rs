mod actor;
mod in_flight;
