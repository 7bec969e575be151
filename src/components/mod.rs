pub mod app;
pub mod case_studies;
pub mod contact;
pub mod drawer;
pub mod experts;
pub mod footer;
pub mod hero;
pub mod nav_bar;
pub mod pricing;
pub mod services;
pub mod stats_band;
pub mod technology;
