pub mod plan_types;
