pub mod loggable;
