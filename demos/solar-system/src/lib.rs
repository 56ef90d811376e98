use wasm_bindgen::prelude::*;
use orrery_engine::*;

mod app;
mod bodies;
use app::SolarSystem;

orrery_web::export_scene!(SolarSystem, "solar-system");
