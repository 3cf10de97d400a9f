pub mod deployment;
pub mod mathphysics;
pub mod ranking;
pub mod selection;
pub mod station;
