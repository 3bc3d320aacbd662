// Application layer: the interactive menu around the converter core.

pub mod menu;
