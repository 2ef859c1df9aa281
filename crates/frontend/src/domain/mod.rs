pub mod a001_gym_user;
pub mod a002_trainer;
pub mod a003_staff;
pub mod a004_service_category;
pub mod a005_service;
pub mod a006_card;
