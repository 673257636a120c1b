pub mod timer_controller;
