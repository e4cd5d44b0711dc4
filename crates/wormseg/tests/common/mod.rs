pub mod synthetic_worm;
