mod energy_system;
mod snapshot;
mod tap_system;
